use super::*;

#[test]
fn empty_text_matches_surface_contract() {
    assert_eq!(EMPTY_TEXT, "No books found.");
}
