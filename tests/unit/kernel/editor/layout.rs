use super::*;

#[test]
fn tabs_advance_to_next_stop() {
    assert_eq!(display_col("\tx", 1, 4), 4);
    assert_eq!(display_col("ab\tx", 3, 4), 4);
    assert_eq!(display_col("ab\tx", 4, 4), 5);
}

#[test]
fn wide_chars_take_two_cells() {
    assert_eq!(display_col("中文a", 2, 4), 4);
    assert_eq!(display_col("中文a", 3, 4), 5);
}

#[test]
fn wrap_splits_at_width() {
    assert_eq!(wrap_segments("abcdefg", 3, 4), vec![(0, 3), (3, 6), (6, 7)]);
    assert_eq!(wrap_segments("abc", 3, 4), vec![(0, 3)]);
    assert_eq!(wrap_segments("", 3, 4), vec![(0, 0)]);
}

#[test]
fn wrap_never_splits_a_wide_char() {
    assert_eq!(wrap_segments("a中b", 2, 4), vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn zero_width_disables_wrapping() {
    assert_eq!(wrap_segments("abcdef", 0, 4), vec![(0, 6)]);
}

#[test]
fn wrap_index_prefix_sums_and_locate() {
    let index = WrapIndex::build(["abcdefg", "", "abc"], 3, 4);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.total_rows(), 5);
    assert_eq!(index.first_visual_row(1), 3);
    assert_eq!(index.first_visual_row(2), 4);
    assert_eq!(index.locate(0), Some((0, 0)));
    assert_eq!(index.locate(2), Some((0, 2)));
    assert_eq!(index.locate(3), Some((1, 0)));
    assert_eq!(index.locate(4), Some((2, 0)));
    assert_eq!(index.locate(5), None);
}

#[test]
fn wrap_index_splice_matches_rebuild() {
    let mut index = WrapIndex::build(["abcdefg", "ab", "abcd"], 3, 4);
    // "ab" becomes two lines, one of them long.
    index.splice(1..2, ["a", "bcdefghij"]);
    assert_eq!(
        index,
        WrapIndex::build(["abcdefg", "a", "bcdefghij", "abcd"], 3, 4)
    );

    // Join everything back into one line.
    index.splice(0..4, ["xy"]);
    assert_eq!(index, WrapIndex::build(["xy"], 3, 4));
    assert_eq!(index.total_rows(), 1);
}
