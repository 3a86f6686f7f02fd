use crate::core::Command;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::Effect;
use crate::models::{EditHistory, EditOp, OpId, TextBuffer};
use unicode_segmentation::UnicodeSegmentation;

use super::layout::{display_col, wrap_segments, VisualRow, WrapIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible visual row.
    pub top: usize,
    /// First visible display column (only non-zero when wrapping is off).
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// The text surface: buffer, undo history, wrap mode and scroll position.
pub struct EditorState {
    buffer: TextBuffer,
    history: EditHistory,
    wrap: bool,
    config: EditorConfig,
    viewport: Viewport,
    /// Present only while wrapping at a known width.
    wrap_index: Option<WrapIndex>,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        let buffer = TextBuffer::new();
        let history = EditHistory::new(buffer.rope().clone());
        Self {
            buffer,
            history,
            wrap: config.word_wrap,
            viewport: Viewport {
                height: config.default_viewport_height,
                ..Viewport::default()
            },
            config,
            wrap_index: None,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn wrap_enabled(&self) -> bool {
        self.wrap
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replaces the document wholesale (open, clear). Undo history starts over.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.replace_all(text);
        self.history.reset(self.buffer.rope());
        self.viewport.top = 0;
        self.viewport.left = 0;
        self.rebuild_wrap_index();
    }

    pub fn set_viewport_size(&mut self, width: usize, height: usize) -> bool {
        if self.viewport.width == width && self.viewport.height == height {
            return false;
        }
        let reflow = self.viewport.width != width;
        self.viewport.width = width;
        self.viewport.height = height;
        if reflow {
            self.rebuild_wrap_index();
        }
        self.ensure_cursor_visible();
        true
    }

    pub fn toggle_wrap(&mut self) {
        self.wrap = !self.wrap;
        self.viewport.left = 0;
        self.rebuild_wrap_index();
        self.ensure_cursor_visible();
    }

    /// Inserts typed or pasted text, replacing the selection.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() && !self.buffer.has_selection() {
            return false;
        }

        let single_char = text.chars().count() == 1;
        if !single_char {
            self.history.break_coalescing();
        }
        if self.buffer.has_selection() {
            self.history.break_coalescing();
            self.edit(TextBuffer::delete_selection_op);
        }
        if !text.is_empty() {
            self.edit(|buffer, parent| Some(buffer.insert_str_op(text, parent)));
        }
        if !single_char {
            self.history.break_coalescing();
        }

        self.ensure_cursor_visible();
        true
    }

    /// Runs an editing or navigation command; returns `(state_changed, effects)`.
    pub fn apply_command(&mut self, command: Command) -> (bool, Vec<Effect>) {
        let mut effects = Vec::new();
        let page = self.viewport.height.max(1);

        let changed = match command {
            Command::CursorLeft => self.navigate(|b| b.move_left(false)),
            Command::CursorRight => self.navigate(|b| b.move_right(false)),
            Command::CursorUp => self.navigate(|b| b.move_up(1, false)),
            Command::CursorDown => self.navigate(|b| b.move_down(1, false)),
            Command::CursorLineStart => self.navigate(|b| b.move_line_start(false)),
            Command::CursorLineEnd => self.navigate(|b| b.move_line_end(false)),
            Command::CursorFileStart => self.navigate(|b| b.move_file_start(false)),
            Command::CursorFileEnd => self.navigate(|b| b.move_file_end(false)),
            Command::PageUp => self.navigate(|b| b.move_up(page, false)),
            Command::PageDown => self.navigate(|b| b.move_down(page, false)),
            Command::SelectLeft => self.navigate(|b| b.move_left(true)),
            Command::SelectRight => self.navigate(|b| b.move_right(true)),
            Command::SelectUp => self.navigate(|b| b.move_up(1, true)),
            Command::SelectDown => self.navigate(|b| b.move_down(1, true)),
            Command::SelectLineStart => self.navigate(|b| b.move_line_start(true)),
            Command::SelectLineEnd => self.navigate(|b| b.move_line_end(true)),
            Command::SelectAll => self.navigate(|b| b.select_all()),
            Command::InsertNewline => self.insert_text("\n"),
            Command::InsertTab => self.insert_text("\t"),
            Command::DeleteBackward => self.edit(|buffer, parent| {
                if buffer.has_selection() {
                    buffer.delete_selection_op(parent)
                } else {
                    buffer.delete_backward_op(parent)
                }
            }),
            Command::DeleteForward => self.edit(|buffer, parent| {
                if buffer.has_selection() {
                    buffer.delete_selection_op(parent)
                } else {
                    buffer.delete_forward_op(parent)
                }
            }),
            Command::Undo => {
                let offset = self.history.undo_op().map(|op| op.kind.offset());
                match (offset, self.history.undo()) {
                    (Some(offset), Some((rope, cursor))) => self.restore(rope, cursor, offset),
                    _ => false,
                }
            }
            Command::Redo => {
                let offset = self.history.redo_op().map(|op| op.kind.offset());
                match (offset, self.history.redo()) {
                    (Some(offset), Some((rope, cursor))) => self.restore(rope, cursor, offset),
                    _ => false,
                }
            }
            Command::Clear => {
                self.set_text("");
                true
            }
            Command::Copy => {
                if let Some(text) = self.buffer.selected_text() {
                    effects.push(Effect::SetClipboardText(text));
                }
                false
            }
            Command::Cut => match self.buffer.selected_text() {
                Some(text) => {
                    effects.push(Effect::SetClipboardText(text));
                    self.history.break_coalescing();
                    self.edit(TextBuffer::delete_selection_op)
                }
                None => false,
            },
            Command::Paste => {
                self.history.break_coalescing();
                effects.push(Effect::RequestClipboardText);
                false
            }
            Command::WrapText => {
                self.toggle_wrap();
                true
            }
            _ => false,
        };

        if changed {
            self.ensure_cursor_visible();
        }
        (changed, effects)
    }

    fn navigate(&mut self, f: impl FnOnce(&mut TextBuffer)) -> bool {
        let before = (self.buffer.cursor(), self.buffer.selection().copied());
        f(&mut self.buffer);
        self.history.break_coalescing();
        before != (self.buffer.cursor(), self.buffer.selection().copied())
    }

    /// Runs one buffer edit, records it for undo and re-wraps the lines it touched.
    fn edit(&mut self, f: impl FnOnce(&mut TextBuffer, OpId) -> Option<EditOp>) -> bool {
        let old_lines = self.buffer.len_lines();
        let Some(op) = f(&mut self.buffer, self.history.head()) else {
            return false;
        };
        self.reflow_after_edit(op.kind.offset(), old_lines);
        self.history.push(op, self.buffer.rope());
        true
    }

    fn restore(&mut self, rope: ropey::Rope, cursor: (usize, usize), offset: usize) -> bool {
        let old_lines = self.buffer.len_lines();
        self.buffer.set_rope(rope, cursor);
        self.reflow_after_edit(offset, old_lines);
        true
    }

    // ==================== layout ====================

    fn rebuild_wrap_index(&mut self) {
        let width = self.viewport.width;
        self.wrap_index = (self.wrap && width > 0).then(|| {
            let buffer = &self.buffer;
            WrapIndex::build(
                (0..buffer.len_lines()).map(|row| buffer.line_text(row).unwrap_or_default()),
                width,
                self.config.tab_width(),
            )
        });
    }

    /// 编辑后只重排受影响的行：编辑起点所在行的前一行到被删除范围之后一行。
    fn reflow_after_edit(&mut self, char_offset: usize, old_lines: usize) {
        let Some(index) = self.wrap_index.as_mut() else {
            return;
        };
        let buffer = &self.buffer;
        let new_lines = buffer.len_lines();
        let line = buffer
            .rope()
            .char_to_line(char_offset.min(buffer.len_chars()));

        let start = line.saturating_sub(1);
        let removed = old_lines.saturating_sub(new_lines);
        let old_end = (line + removed + 2).min(old_lines);
        let new_end = (old_end + new_lines).saturating_sub(old_lines);
        index.splice(
            start..old_end,
            (start..new_end).map(|row| buffer.line_text(row).unwrap_or_default()),
        );
    }

    fn segments(&self, row: usize) -> Vec<(usize, usize)> {
        let line = self.buffer.line_text(row).unwrap_or_default();
        let width = self.wrap_index.as_ref().map_or(0, WrapIndex::width);
        wrap_segments(&line, width, self.config.tab_width())
    }

    /// Screen position of the cursor as `(visual row, display column)`, unscrolled.
    pub fn cursor_visual(&self) -> (usize, usize) {
        let (row, col) = self.buffer.cursor();
        let line = self.buffer.line_text(row).unwrap_or_default();
        let tab_width = self.config.tab_width();

        let Some(index) = self.wrap_index.as_ref() else {
            return (row, display_col(&line, col, tab_width));
        };

        let before = index.first_visual_row(row);
        let segments = self.segments(row);
        let (sub, (start, _)) = segments
            .iter()
            .enumerate()
            .rev()
            .find(|(_, (start, _))| *start <= col)
            .map(|(i, seg)| (i, *seg))
            .unwrap_or((0, (0, 0)));

        let seg_text: String = line_graphemes(&line, start, col);
        let x = display_col(&seg_text, usize::MAX, tab_width);
        // A cursor past a full row sits at the start of the next one.
        if x >= index.width() {
            return (before + sub + 1, 0);
        }
        (before + sub, x)
    }

    /// Visual rows covering the viewport, starting at `viewport.top`.
    pub fn visible_rows(&self) -> Vec<VisualRow> {
        let height = self.viewport.height;
        let mut rows = Vec::with_capacity(height);
        let Some(index) = self.wrap_index.as_ref() else {
            let end = (self.viewport.top + height).min(self.buffer.len_lines());
            for row in self.viewport.top..end {
                rows.push(VisualRow {
                    row,
                    start: 0,
                    end: self.buffer.line_grapheme_len(row),
                });
            }
            return rows;
        };

        let Some((mut row, mut skip)) = index.locate(self.viewport.top) else {
            return rows;
        };
        while row < self.buffer.len_lines() {
            for (start, end) in self.segments(row).into_iter().skip(skip) {
                rows.push(VisualRow { row, start, end });
                if rows.len() >= height {
                    return rows;
                }
            }
            skip = 0;
            row += 1;
        }
        rows
    }

    fn ensure_cursor_visible(&mut self) {
        let (vrow, x) = self.cursor_visual();
        let height = self.viewport.height.max(1);
        if vrow < self.viewport.top {
            self.viewport.top = vrow;
        } else if vrow >= self.viewport.top + height {
            self.viewport.top = vrow + 1 - height;
        }

        if self.wrap || self.viewport.width == 0 {
            self.viewport.left = 0;
            return;
        }
        let width = self.viewport.width;
        if x < self.viewport.left {
            self.viewport.left = x;
        } else if x >= self.viewport.left + width {
            self.viewport.left = x + 1 - width;
        }
    }
}

fn line_graphemes(line: &str, start: usize, end: usize) -> String {
    line.graphemes(true)
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/state.rs"]
mod tests;
