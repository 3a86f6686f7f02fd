//! 编辑历史管理（Git 模型）
//!
//! 采用类似 Git 的 DAG 结构存储历史：
//! - 每个操作有唯一 ID 和父指针
//! - HEAD 指向当前状态
//! - Undo 回到父节点，Redo 沿最近的子节点前进
//! - Undo 后的新编辑会创建分支，旧历史不会丢失

use super::edit_op::{EditOp, OpId};
use ropey::Rope;
use std::collections::HashMap;

/// 每隔多少操作创建一个检查点
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 100;

pub struct EditHistory {
    /// 基准快照（文件打开或清空时的状态，对应 root）
    base_snapshot: Rope,
    /// 所有操作（DAG 结构）
    ops: HashMap<OpId, EditOp>,
    /// 当前 HEAD 指向的操作 ID
    head: OpId,
    /// 子节点索引（parent -> children）
    children: HashMap<OpId, Vec<OpId>>,
    /// 检查点缓存（op_id -> snapshot）
    checkpoints: HashMap<OpId, Rope>,
    checkpoint_interval: usize,
    op_count: usize,
    /// Whether the op at HEAD may absorb the next typed character.
    coalesce_open: bool,
}

impl EditHistory {
    pub fn new(base_snapshot: Rope) -> Self {
        Self {
            base_snapshot,
            ops: HashMap::new(),
            head: OpId::root(),
            children: HashMap::new(),
            checkpoints: HashMap::new(),
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            op_count: 0,
            coalesce_open: false,
        }
    }

    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval.max(1);
        self
    }

    /// Records `op`, which must already be applied to `current_rope`.
    pub fn push(&mut self, op: EditOp, current_rope: &Rope) {
        if self.coalesce_open && op.parent == self.head {
            if let Some(head_op) = self.ops.get_mut(&self.head) {
                if head_op.try_merge(&op) {
                    self.checkpoints.remove(&self.head);
                    return;
                }
            }
        }

        let op_id = op.id;
        self.children.entry(op.parent).or_default().push(op_id);
        self.ops.insert(op_id, op);
        self.head = op_id;
        self.op_count += 1;
        self.coalesce_open = true;

        if self.op_count % self.checkpoint_interval == 0 {
            self.checkpoints.insert(op_id, current_rope.clone());
        }
    }

    /// Closes the current typing group; the next op always becomes its own undo step.
    pub fn break_coalescing(&mut self) {
        self.coalesce_open = false;
    }

    /// Returns the restored rope and the cursor to place.
    pub fn undo(&mut self) -> Option<(Rope, (usize, usize))> {
        if self.head.is_root() {
            return None;
        }

        let current_op = self.ops.get(&self.head)?;
        let cursor_pos = current_op.cursor_before();
        let parent_id = current_op.parent;

        self.head = parent_id;
        self.coalesce_open = false;
        Some((self.rebuild_rope_at(parent_id), cursor_pos))
    }

    pub fn redo(&mut self) -> Option<(Rope, (usize, usize))> {
        let next_id = *self.children.get(&self.head)?.last()?;
        let cursor_pos = self.ops.get(&next_id)?.cursor_after();

        self.head = next_id;
        self.coalesce_open = false;
        Some((self.rebuild_rope_at(next_id), cursor_pos))
    }

    pub fn head(&self) -> OpId {
        self.head
    }

    /// The op `undo` would revert.
    pub fn undo_op(&self) -> Option<&EditOp> {
        self.ops.get(&self.head)
    }

    /// The op `redo` would re-apply.
    pub fn redo_op(&self) -> Option<&EditOp> {
        let next_id = self.children.get(&self.head)?.last()?;
        self.ops.get(next_id)
    }

    pub fn can_undo(&self) -> bool {
        !self.head.is_root()
    }

    pub fn can_redo(&self) -> bool {
        self.children
            .get(&self.head)
            .map(|c| !c.is_empty())
            .unwrap_or(false)
    }

    /// Forgets every op and makes `current_rope` the new root.
    pub fn reset(&mut self, current_rope: &Rope) {
        self.base_snapshot = current_rope.clone();
        self.ops.clear();
        self.head = OpId::root();
        self.children.clear();
        self.checkpoints.clear();
        self.op_count = 0;
        self.coalesce_open = false;
    }

    fn rebuild_rope_at(&self, target: OpId) -> Rope {
        if target.is_root() {
            return self.base_snapshot.clone();
        }

        let path = self.path_to(target);
        let (start_idx, mut rope) = self.find_nearest_checkpoint(&path);
        for op_id in &path[start_idx..] {
            if let Some(op) = self.ops.get(op_id) {
                op.apply(&mut rope);
            }
        }
        rope
    }

    fn path_to(&self, target: OpId) -> Vec<OpId> {
        let mut path = Vec::new();
        let mut current = target;

        while !current.is_root() {
            path.push(current);
            match self.ops.get(&current) {
                Some(op) => current = op.parent,
                None => break,
            }
        }

        path.reverse();
        path
    }

    fn find_nearest_checkpoint(&self, path: &[OpId]) -> (usize, Rope) {
        for (i, op_id) in path.iter().enumerate().rev() {
            if let Some(snapshot) = self.checkpoints.get(op_id) {
                return (i + 1, snapshot.clone());
            }
        }
        (0, self.base_snapshot.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
