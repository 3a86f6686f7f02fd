use super::*;

#[test]
fn range_is_ordered_for_backward_selection() {
    let sel = Selection::spanning((2, 4), (0, 1));
    assert_eq!(sel.range(), ((0, 1), (2, 4)));
    assert_eq!(sel.anchor(), (2, 4));
}

#[test]
fn new_selection_is_empty_until_cursor_moves() {
    let mut sel = Selection::new((1, 1));
    assert!(sel.is_empty());

    sel.update_cursor((1, 3));
    assert!(!sel.is_empty());
    assert!(sel.contains((1, 2)));
    assert!(!sel.contains((1, 3)));
}
