use onoma::data::pdf::{blocks, page_window, Page};

fn pages(n: usize) -> Vec<Page> {
    (0..n)
        .map(|index| Page {
            index,
            text: format!("page {index}"),
        })
        .collect()
}

#[test]
fn window_skips_front_matter() {
    let pages = pages(6);
    let window = page_window(&pages, 2, 2);
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].index, 2);
    assert_eq!(window[1].index, 3);
}

#[test]
fn short_documents_yield_short_windows() {
    let pages = pages(3);
    assert_eq!(page_window(&pages, 2, 2).len(), 1);
    assert!(page_window(&pages, 5, 2).is_empty());
    assert!(page_window(&[], 2, 2).is_empty());
}

#[test]
fn blank_lines_delimit_blocks() {
    let text = "First block\nspans two lines.\n\nSecond block.\n\n   \n\nThird.";
    let found = blocks(text);
    assert_eq!(found.len(), 3);
    assert!(found[0].contains("spans two lines"));
    assert_eq!(found[2], "Third.");
}
