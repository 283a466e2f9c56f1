//! Instruction templates for the four metrics.
//!
//! Each template embeds fixed few-shot examples and exact output-format
//! instructions (a backtick-fenced JSON object described by a schema). The
//! wording is deliberate: the model's compliance degrades when it changes.

use crate::template::Template;

pub(crate) const ENTITY_EXTRACTION: Template = Template::new(
    "entity_extraction",
    r#"Given a text, extract unique entities without repetition. Ensure you consider different forms or mentions of the same entity as a single entity.

The output should be a well-formatted JSON instance that conforms to the JSON schema below.

Here is the output JSON schema:
```
{"type": "object", "properties": {"entities": {"type": "array", "items": {"type": "string"}}}, "required": ["entities"]}
```

Do not return any preamble or explanations, return only a pure JSON string surrounded by triple backticks (```).

Examples:

text: "The Eiffel Tower, located in Paris, France, is one of the most iconic landmarks globally. Millions of visitors are attracted to it each year for its breathtaking views of the city. Completed in 1889, it was constructed in time for the 1889 World's Fair."
output: ```{"entities": ["Eiffel Tower", "Paris", "France", "1889", "World's Fair"]}```

text: "The Colosseum in Rome, also known as the Flavian Amphitheatre, stands as a monument to Roman architectural and engineering achievement. Construction began under Emperor Vespasian in AD 70 and was completed by his son Titus in AD 80. It could hold between 50,000 and 80,000 spectators who watched gladiatorial contests and public spectacles."
output: ```{"entities": ["Colosseum", "Rome", "Flavian Amphitheatre", "Vespasian", "AD 70", "Titus", "AD 80"]}```

text: "The Great Wall of China, stretching over 21,196 kilometers from east to west, is a marvel of ancient defensive architecture. Built to protect against invasions from the north, its construction started as early as the 7th century BC. Today, it stands as a testament to China's historical resilience and is a UNESCO World Heritage Site."
output: ```{"entities": ["Great Wall of China", "21,196 kilometers", "7th century BC", "UNESCO World Heritage Site"]}```

Your actual task:

text: {{text}}
output: "#,
);

pub(crate) const SENTENCE_SELECTION: Template = Template::new(
    "sentence_selection",
    r#"Please extract relevant sentences from the provided context that are absolutely required to answer the following question. While extracting candidate sentences you're not allowed to make any changes to sentences from the given context. For each selected sentence, give the reasons it is required. If no relevant sentences are found, or if you believe the question cannot be answered from the given context, return an empty list.

The output should be a well-formatted JSON instance that conforms to the JSON schema below.

Here is the output JSON schema:
```
{"type": "object", "properties": {"sentences": {"type": "array", "items": {"type": "object", "properties": {"sentence": {"type": "string"}, "reasons": {"type": "array", "items": {"type": "string"}}}, "required": ["sentence", "reasons"]}}}, "required": ["sentences"]}
```

Do not return any preamble or explanations, return only a pure JSON string surrounded by triple backticks (```).

Examples:

question: "Which year was Albert Einstein born?"
context: "Albert Einstein was a German-born theoretical physicist. He was born on 14 March 1879. He received the 1921 Nobel Prize in Physics for his services to theoretical physics."
candidate sentences: ```{"sentences": [{"sentence": "He was born on 14 March 1879.", "reasons": ["This sentence states Albert Einstein's year of birth, which answers the question directly."]}]}```

question: "What is the boiling point of water at sea level?"
context: "The Pacific Ocean is the largest and deepest of Earth's five oceanic divisions. It extends from the Arctic Ocean in the north to the Southern Ocean in the south."
candidate sentences: ```{"sentences": []}```

Your actual task:

question: {{question}}
context: {{context}}
candidate sentences: "#,
);

pub(crate) const STATEMENT_ATTRIBUTION: Template = Template::new(
    "statement_attribution",
    r#"Given a context and an answer, analyze each sentence in the answer and classify whether the sentence can be attributed to the given context or not. Think in steps, decompose the answer into atomic statements, and output each statement with a binary classification: 1 if the statement can be attributed to the context, 0 if it cannot. Give a reason for each classification.

The output should be a well-formatted JSON instance that conforms to the JSON schema below.

Here is the output JSON schema:
```
{"type": "object", "properties": {"statements": {"type": "array", "items": {"type": "object", "properties": {"statement": {"type": "string"}, "attributed": {"type": "integer"}, "reason": {"type": "string"}}, "required": ["statement", "attributed", "reason"]}}}, "required": ["statements"]}
```

Do not return any preamble or explanations, return only a pure JSON string surrounded by triple backticks (```).

Examples:

question: "What can you tell me about Albert Einstein?"
context: "Albert Einstein (14 March 1879 - 18 April 1955) was a German-born theoretical physicist, widely held to be one of the greatest and most influential scientists of all time. Best known for developing the theory of relativity, he also made important contributions to quantum mechanics. He received the 1921 Nobel Prize in Physics for his services to theoretical physics."
answer: "Albert Einstein, born on 14 March 1879, was a German-born theoretical physicist. He received the 1921 Nobel Prize in Physics. He published 4 papers in 1905."
classification: ```{"statements": [{"statement": "Albert Einstein, born on 14 March 1879, was a German-born theoretical physicist.", "attributed": 1, "reason": "The date of birth and profession are clearly stated in the context."}, {"statement": "He received the 1921 Nobel Prize in Physics.", "attributed": 1, "reason": "The exact sentence is present in the given context."}, {"statement": "He published 4 papers in 1905.", "attributed": 0, "reason": "There is no mention of his papers in the given context."}]}```

question: "Who won the 2020 ICC World Cup?"
context: "The 2022 ICC Men's T20 World Cup, held from October 16 to November 13, 2022, in Australia, was the eighth edition of the tournament. Originally scheduled for 2020, it was postponed due to the COVID-19 pandemic. England emerged victorious, defeating Pakistan by five wickets in the final to clinch their second ICC Men's T20 World Cup title."
answer: "England"
classification: ```{"statements": [{"statement": "England won the 2022 ICC Men's T20 World Cup.", "attributed": 1, "reason": "From the context it is clear that England defeated Pakistan to win the World Cup."}]}```

Your actual task:

question: {{question}}
context: {{context}}
answer: {{answer}}
classification: "#,
);

pub(crate) const USEFULNESS_VERDICT: Template = Template::new(
    "usefulness_verdict",
    r#"Given a question, an answer, and a context, verify if the context was useful in arriving at the given answer. Give a verdict as 1 if useful and 0 if not, with a reason for the verdict.

The output should be a well-formatted JSON instance that conforms to the JSON schema below.

Here is the output JSON schema:
```
{"type": "object", "properties": {"reason": {"type": "string"}, "verdict": {"type": "integer"}}, "required": ["reason", "verdict"]}
```

Do not return any preamble or explanations, return only a pure JSON string surrounded by triple backticks (```).

Examples:

question: "What can you tell me about Albert Einstein?"
context: "Albert Einstein (14 March 1879 - 18 April 1955) was a German-born theoretical physicist, widely held to be one of the greatest and most influential scientists of all time. He received the 1921 Nobel Prize in Physics for his services to theoretical physics."
answer: "Albert Einstein, born on 14 March 1879, was a German-born theoretical physicist who received the 1921 Nobel Prize in Physics."
verification: ```{"reason": "The provided context was indeed useful in arriving at the given answer. The context includes key information about Albert Einstein's life and contributions, which are reflected in the answer.", "verdict": 1}```

question: "What is the tallest mountain in the world?"
context: "The Andes is the longest continental mountain range in the world, located in South America. It features many of the highest peaks in the Western Hemisphere, including Aconcagua."
answer: "Mount Everest."
verification: ```{"reason": "The provided context discusses the Andes mountain range, which, while impressive, does not include Mount Everest or directly relate to the question about the world's tallest mountain.", "verdict": 0}```

Your actual task:

question: {{question}}
context: {{context}}
answer: {{answer}}
verification: "#,
);
