//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标和选区管理
//! - 行列（字素列）↔ 字符偏移映射

use super::edit_op::{EditOp, OpId};
use super::selection::Selection;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，连续时零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// Strips the trailing line break (`\n` or `\r\n`).
pub fn strip_line_break(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    selection: Option<Selection>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = self.clamp_pos((row, col));
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn has_selection(&self) -> bool {
        self.selection
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection.as_ref().filter(|s| !s.is_empty())?;
        let (start, end) = selection.range();
        let start = self.pos_to_char(start);
        let end = self.pos_to_char(end);
        Some(self.rope.slice(start..end).to_string())
    }

    pub fn select_all(&mut self) {
        let last_row = self.len_lines().saturating_sub(1);
        let end = (last_row, self.line_grapheme_len(last_row));
        self.selection = Some(Selection::spanning((0, 0), end));
        self.cursor = end;
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        (row < self.rope.len_lines()).then(|| self.rope.line(row))
    }

    /// Line text without its line break.
    pub fn line_text(&self, row: usize) -> Option<Cow<'_, str>> {
        let line = slice_to_cow(self.line_slice(row)?);
        Some(match line {
            Cow::Borrowed(s) => Cow::Borrowed(strip_line_break(s)),
            Cow::Owned(s) => Cow::Owned(strip_line_break(&s).to_string()),
        })
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        let pos = self.clamp_pos(pos);
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn char_to_pos(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(row);
        let prefix = self.rope.slice(line_start..char_offset);
        let col = slice_to_cow(prefix).graphemes(true).count();
        (row, col)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let Some(line) = self.line_text(row) else {
            return 0;
        };
        line.graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        self.line_text(row)
            .map(|line| line.graphemes(true).count())
            .unwrap_or(0)
    }

    fn clamp_pos(&self, (row, col): (usize, usize)) -> (usize, usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        (row, col.min(self.line_grapheme_len(row)))
    }

    // ==================== 原子操作方法（返回 EditOp）====================

    pub fn insert_str_op(&mut self, s: &str, parent: OpId) -> EditOp {
        let cursor_before = self.cursor;
        let char_offset = self.pos_to_char(cursor_before);

        self.rope.insert(char_offset, s);
        let cursor_after = self.char_to_pos(char_offset + s.chars().count());
        self.cursor = cursor_after;
        self.selection = None;

        EditOp::insert(parent, char_offset, s.to_string(), cursor_before, cursor_after)
    }

    /// 向后删除（Backspace），返回 EditOp
    pub fn delete_backward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let cursor_before = self.cursor;
        let (row, col) = cursor_before;

        let end = self.pos_to_char(cursor_before);
        let start = if col > 0 {
            self.pos_to_char((row, col - 1))
        } else if row > 0 {
            // Join with the previous line: remove its whole line break.
            self.rope.line_to_char(row - 1)
                + self
                    .line_text(row - 1)
                    .map(|l| l.chars().count())
                    .unwrap_or(0)
        } else {
            return None;
        };

        Some(self.remove_range(parent, start, end, cursor_before))
    }

    /// 向前删除（Delete），返回 EditOp
    pub fn delete_forward_op(&mut self, parent: OpId) -> Option<EditOp> {
        let cursor_before = self.cursor;
        let (row, col) = cursor_before;
        let start = self.pos_to_char(cursor_before);

        let end = if col < self.line_grapheme_len(row) {
            self.pos_to_char((row, col + 1))
        } else if row + 1 < self.len_lines() {
            self.rope.line_to_char(row + 1)
        } else {
            return None;
        };

        Some(self.remove_range(parent, start, end, cursor_before))
    }

    pub fn delete_selection_op(&mut self, parent: OpId) -> Option<EditOp> {
        let selection = self.selection.filter(|s| !s.is_empty())?;
        let (start_pos, end_pos) = selection.range();
        let start = self.pos_to_char(start_pos);
        let end = self.pos_to_char(end_pos);
        let cursor_before = self.cursor;

        Some(self.remove_range(parent, start, end, cursor_before))
    }

    fn remove_range(
        &mut self,
        parent: OpId,
        start: usize,
        end: usize,
        cursor_before: (usize, usize),
    ) -> EditOp {
        let deleted = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        let cursor_after = self.char_to_pos(start);
        self.cursor = cursor_after;
        self.selection = None;

        EditOp::delete(parent, start, end, deleted, cursor_before, cursor_after)
    }

    // ==================== whole-buffer replacement ====================

    /// 替换整个 Rope（用于 Undo/Redo）
    pub fn set_rope(&mut self, rope: Rope, cursor: (usize, usize)) {
        self.rope = rope;
        self.selection = None;
        self.cursor = self.clamp_pos(cursor);
    }

    /// Replaces all text and moves the cursor to the start.
    pub fn replace_all(&mut self, text: &str) {
        self.set_rope(Rope::from_str(text), (0, 0));
    }

    // ==================== cursor movement ====================

    pub fn move_left(&mut self, extend: bool) {
        let (row, col) = self.cursor;
        let target = if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, self.line_grapheme_len(row - 1))
        } else {
            (row, col)
        };
        self.move_to(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        let (row, col) = self.cursor;
        let target = if col < self.line_grapheme_len(row) {
            (row, col + 1)
        } else if row + 1 < self.len_lines() {
            (row + 1, 0)
        } else {
            (row, col)
        };
        self.move_to(target, extend);
    }

    pub fn move_up(&mut self, lines: usize, extend: bool) {
        let (row, col) = self.cursor;
        self.move_to((row.saturating_sub(lines), col), extend);
    }

    pub fn move_down(&mut self, lines: usize, extend: bool) {
        let (row, col) = self.cursor;
        self.move_to((row.saturating_add(lines), col), extend);
    }

    pub fn move_line_start(&mut self, extend: bool) {
        self.move_to((self.cursor.0, 0), extend);
    }

    pub fn move_line_end(&mut self, extend: bool) {
        let row = self.cursor.0;
        self.move_to((row, self.line_grapheme_len(row)), extend);
    }

    pub fn move_file_start(&mut self, extend: bool) {
        self.move_to((0, 0), extend);
    }

    pub fn move_file_end(&mut self, extend: bool) {
        let last = self.len_lines().saturating_sub(1);
        self.move_to((last, self.line_grapheme_len(last)), extend);
    }

    fn move_to(&mut self, pos: (usize, usize), extend: bool) {
        let pos = self.clamp_pos(pos);
        if extend {
            let anchor = self
                .selection
                .map(|s| s.anchor())
                .unwrap_or(self.cursor);
            self.selection = Some(Selection::spanning(anchor, pos));
        } else {
            self.selection = None;
        }
        self.cursor = pos;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
