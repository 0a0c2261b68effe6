use onoma::text::tokenizer::{token_texts, tokenize};
use proptest::prelude::*;

#[test]
fn words_and_punctuation_split() {
    let tokens = tokenize("Jean-Paul said hello.");
    assert_eq!(token_texts(&tokens), vec!["Jean-Paul", "said", "hello", "."]);
}

#[test]
fn underscores_stay_inside_tokens() {
    let tokens = tokenize("first_name: Ana!");
    assert_eq!(token_texts(&tokens), vec!["first_name", ":", "Ana", "!"]);
}

#[test]
fn offsets_point_into_source() {
    let text = "  Emma  Williams";
    let tokens = tokenize(text);
    assert_eq!(tokens.len(), 2);
    assert_eq!(&text[tokens[0].start..tokens[0].start + 4], "Emma");
    assert_eq!(tokens[1].start, 8);
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \t\n").is_empty());
}

#[test]
fn double_hyphen_breaks_the_run() {
    let tokens = tokenize("well--known");
    assert_eq!(token_texts(&tokens), vec!["well", "-", "-", "known"]);
}

proptest! {
    /// Re-tokenizing the space-joined token texts reproduces the same
    /// token sequence.
    #[test]
    fn rejoined_tokens_tokenize_identically(text in "\\PC*") {
        let once = tokenize(&text);
        let joined = once
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let twice = tokenize(&joined);
        prop_assert_eq!(token_texts(&once), token_texts(&twice));
    }
}
