//! Numeric difference scorer.

use crate::score::Score;

/// Compares two numbers by the percentage difference of the smaller from the
/// larger: `1 - |expected - output| / max(|expected|, |output|)`.
///
/// Two zeros are a perfect match. The score can go negative when the values
/// have opposite signs.
#[derive(Debug, Default)]
pub struct NumericDiff;

impl NumericDiff {
    /// Score `output` against `expected`.
    pub fn score(output: f64, expected: f64) -> Score {
        let score = if expected == 0.0 && output == 0.0 {
            1.0
        } else {
            1.0 - (expected - output).abs() / expected.abs().max(output.abs())
        };

        Score::new("NumericDiff", score)
    }
}
