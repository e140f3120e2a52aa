use crate::tokenizer::normalize;

/// A free-text query in the forms the engine needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub raw: String,
    /// Whole query, normalized. Used for snippets and facet labels.
    pub normalized: String,
    /// Whitespace tokens of `normalized`, all of which must match.
    pub tokens: Vec<String>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub struct QueryParser;

impl QueryParser {
    pub fn parse(text: &str) -> ParsedQuery {
        let normalized = normalize(text);
        let tokens = normalized
            .split_whitespace()
            .map(str::to_string)
            .collect();
        ParsedQuery {
            raw: text.to_string(),
            normalized,
            tokens,
        }
    }
}
