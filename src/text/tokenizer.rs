//! Word/punctuation tokenizer shared by segmentation and span alignment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A token extracted from a segment's character stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text (e.g., "Jean-Paul", ".", "first_name").
    pub text: String,
    /// Byte offset of the token within the source string.
    pub start: usize,
}

/// A maximal run of word characters, optionally chained through single
/// interior hyphens or underscores, or any lone non-whitespace character.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:[-_]\w+)*|\S").expect("valid regex"));

/// Split `text` into word and punctuation tokens, left to right.
///
/// Whitespace separates tokens and never appears in the output. This
/// function is pure and total: empty input yields an empty sequence and no
/// input can fail.
pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| Token {
            text: m.as_str().to_string(),
            start: m.start(),
        })
        .collect()
}

/// Borrow the token texts as one `Vec`, in order.
pub fn token_texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
