use super::*;

fn book(cover: Option<&str>) -> Book {
    Book {
        id: 1,
        title: "My Book".to_owned(),
        author: "Author".to_owned(),
        cover_image: cover.map(str::to_owned),
        ..Book::default()
    }
}

#[test]
fn byline_matches_surface_contract() {
    assert_eq!(byline("Author"), "by Author");
}

#[test]
fn placeholder_text_matches_surface_contract() {
    assert_eq!(NO_COVER_TEXT, "No Cover");
}

#[test]
fn cover_src_uses_the_stored_url() {
    let b = book(Some("http://x/c.jpg"));
    assert_eq!(cover_src(&b), Some("http://x/c.jpg"));
}

#[test]
fn missing_cover_selects_placeholder() {
    assert_eq!(cover_src(&book(None)), None);
}

#[test]
fn blank_cover_selects_placeholder() {
    assert_eq!(cover_src(&book(Some(""))), None);
    assert_eq!(cover_src(&book(Some("   "))), None);
}
