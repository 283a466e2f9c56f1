//! Instruction templates with literal `{{var}}` substitution.
//!
//! Substitution is plain text replacement: values are embedded exactly as
//! given, newlines and JSON-looking content included. The model's compliance
//! is sensitive to the exact instruction text, so no escaping or
//! transformation of any kind is performed.

/// A named instruction template.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Template {
    pub id: &'static str,
    text: &'static str,
}

impl Template {
    pub(crate) const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }

    /// Render the template, replacing each `{{name}}` placeholder with its
    /// value. Placeholders without a supplied value are left as-is.
    pub(crate) fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = self.text.to_string();
        for (name, value) in vars {
            out = out.replace(&format!("{{{{{name}}}}}"), value);
        }
        out
    }
}
