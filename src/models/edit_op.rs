use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// 编辑历史中的节点 ID，`0` 为 root（未编辑的文档）
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpId(u64);

impl OpId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn root() -> Self {
        Self(0)
    }

    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl Default for OpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpId({})", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Insert { char_offset: usize, text: String },
    Delete { start: usize, end: usize, deleted: String },
}

#[derive(Clone, Debug)]
pub struct EditOp {
    pub id: OpId,
    pub parent: OpId,
    pub kind: OpKind,
    pub cursor_before: (usize, usize),
    pub cursor_after: (usize, usize),
}

impl EditOp {
    pub fn insert(
        parent: OpId,
        char_offset: usize,
        text: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            id: OpId::new(),
            parent,
            kind: OpKind::Insert { char_offset, text },
            cursor_before,
            cursor_after,
        }
    }

    pub fn delete(
        parent: OpId,
        start: usize,
        end: usize,
        deleted: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            id: OpId::new(),
            parent,
            kind: OpKind::Delete {
                start,
                end,
                deleted,
            },
            cursor_before,
            cursor_after,
        }
    }

    pub fn cursor_after(&self) -> (usize, usize) {
        self.cursor_after
    }

    pub fn cursor_before(&self) -> (usize, usize) {
        self.cursor_before
    }

    pub fn apply(&self, rope: &mut ropey::Rope) {
        self.kind.apply(rope);
    }

    /// Folds `next` into `self` when both are typing in the same word.
    ///
    /// Typing stops coalescing at whitespace so undo steps back one word at a time.
    pub fn try_merge(&mut self, next: &EditOp) -> bool {
        let (
            OpKind::Insert {
                char_offset,
                text,
            },
            OpKind::Insert {
                char_offset: next_offset,
                text: next_text,
            },
        ) = (&mut self.kind, &next.kind)
        else {
            return false;
        };

        let contiguous = *char_offset + text.chars().count() == *next_offset;
        let word_char = next_text.chars().count() == 1
            && next_text.chars().all(|c| !c.is_whitespace());
        let prev_word = text.chars().last().is_some_and(|c| !c.is_whitespace());
        if !contiguous || !word_char || !prev_word {
            return false;
        }

        text.push_str(next_text);
        self.cursor_after = next.cursor_after;
        true
    }
}

impl OpKind {
    pub fn apply(&self, rope: &mut ropey::Rope) {
        match self {
            OpKind::Insert { char_offset, text } => {
                rope.insert(*char_offset, text);
            }
            OpKind::Delete { start, end, .. } => {
                rope.remove(*start..*end);
            }
        }
    }

    /// Char offset where the op (and its inverse) starts changing the text.
    pub fn offset(&self) -> usize {
        match self {
            OpKind::Insert { char_offset, .. } => *char_offset,
            OpKind::Delete { start, .. } => *start,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;
