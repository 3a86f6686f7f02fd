use super::*;
use ropey::Rope;

#[test]
fn test_insert_apply() {
    let mut rope = Rope::from_str("hello");
    let op = EditOp::insert(OpId::root(), 5, " world".to_string(), (0, 5), (0, 11));
    op.apply(&mut rope);
    assert_eq!(rope.to_string(), "hello world");
}

#[test]
fn test_delete_apply() {
    let mut rope = Rope::from_str("hello world");
    let op = EditOp::delete(OpId::root(), 5, 11, " world".to_string(), (0, 11), (0, 5));
    op.apply(&mut rope);
    assert_eq!(rope.to_string(), "hello");
}

#[test]
fn test_opid_uniqueness() {
    let id1 = OpId::new();
    let id2 = OpId::new();
    assert_ne!(id1, id2);
    assert!(!id1.is_root());
    assert!(OpId::root().is_root());
}

#[test]
fn typing_within_a_word_merges() {
    let mut first = EditOp::insert(OpId::root(), 0, "h".to_string(), (0, 0), (0, 1));
    let second = EditOp::insert(first.id, 1, "i".to_string(), (0, 1), (0, 2));

    assert!(first.try_merge(&second));
    assert_eq!(
        first.kind,
        OpKind::Insert {
            char_offset: 0,
            text: "hi".to_string()
        }
    );
    assert_eq!(first.cursor_after(), (0, 2));
}

#[test]
fn whitespace_and_gaps_break_merging() {
    let mut word = EditOp::insert(OpId::root(), 0, "hi".to_string(), (0, 0), (0, 2));
    let space = EditOp::insert(word.id, 2, " ".to_string(), (0, 2), (0, 3));
    assert!(!word.try_merge(&space));

    let far = EditOp::insert(word.id, 7, "x".to_string(), (0, 7), (0, 8));
    assert!(!word.try_merge(&far));

    let mut delete = EditOp::delete(OpId::root(), 0, 1, "h".to_string(), (0, 1), (0, 0));
    let typed = EditOp::insert(delete.id, 0, "x".to_string(), (0, 0), (0, 1));
    assert!(!delete.try_merge(&typed));
}
