use onoma::text::segment::{clean, segment_paragraphs, segment_sentences, SegmentConfig};

fn config(max_segments: usize) -> SegmentConfig {
    SegmentConfig {
        max_segments,
        min_words: 3,
        lowercase: false,
    }
}

#[test]
fn clean_collapses_line_breaks_and_spaces() {
    assert_eq!(clean("a\nline\r\nwith   gaps "), "a line with gaps");
}

#[test]
fn short_blocks_are_dropped() {
    let blocks = vec![
        "  The quick brown fox jumps.  ".to_string(),
        "Hi.".to_string(),
    ];
    let segments = segment_paragraphs(0, &blocks, &config(5));
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "The quick brown fox jumps.");
    assert_eq!(segments[0].word_count, 5);
}

#[test]
fn quota_is_an_exact_cap() {
    let blocks: Vec<String> = (0..6)
        .map(|i| format!("block number {i} with plenty of words"))
        .collect();
    let segments = segment_paragraphs(0, &blocks, &config(3));
    assert_eq!(segments.len(), 3);
    // indices refer to the source order, pre-filter
    assert_eq!(segments[2].index, 2);
}

#[test]
fn zero_quota_accepts_nothing() {
    let blocks = vec!["The quick brown fox jumps.".to_string()];
    assert!(segment_paragraphs(0, &blocks, &config(0)).is_empty());
    assert!(segment_sentences(0, "One two three.", &config(0)).is_empty());
}

#[test]
fn empty_page_yields_no_segments() {
    assert!(segment_paragraphs(0, &[], &config(5)).is_empty());
    assert!(segment_sentences(0, "", &config(5)).is_empty());
}

#[test]
fn every_segment_meets_the_word_floor() {
    let page = "One. One two. One two three. One two three four!";
    let segments = segment_sentences(0, page, &config(10));
    assert_eq!(segments.len(), 2);
    for segment in &segments {
        assert!(segment.word_count >= 3);
    }
}

#[test]
fn sentences_keep_their_terminator_and_lowercase_on_request() {
    let cfg = SegmentConfig {
        max_segments: 10,
        min_words: 3,
        lowercase: true,
    };
    let segments = segment_sentences(1, "Did you\nmeet Emma Williams?  She waved back!", &cfg);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "did you meet emma williams?");
    assert_eq!(segments[0].page, 1);
    assert_eq!(segments[1].text, "she waved back!");
}

#[test]
fn fewer_candidates_than_quota_returns_them_all() {
    let segments = segment_sentences(0, "Just one full sentence here.", &config(10));
    assert_eq!(segments.len(), 1);
}
