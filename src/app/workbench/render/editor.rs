use super::super::Workbench;
use crate::kernel::editor::layout::grapheme_width;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;

impl Workbench {
    /// Draws the text surface and returns the screen cursor, if visible.
    pub(super) fn render_editor(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        let base = Style::default()
            .bg(self.theme.editor_bg)
            .fg(self.theme.editor_fg);
        let selected = Style::default()
            .bg(self.theme.selection_bg)
            .fg(self.theme.selection_fg);
        frame.render_widget(Block::default().style(base), area);
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let editor = &self.store.state().editor;
        let buffer = editor.buffer();
        let viewport = editor.viewport();
        let tab_width = editor.config().tab_width();
        let selection = buffer.selection().filter(|s| !s.is_empty()).copied();
        let width = usize::from(area.width);
        let buf = frame.buffer_mut();

        for (screen_row, vrow) in editor.visible_rows().iter().enumerate() {
            let Some(line) = buffer.line_text(vrow.row) else {
                continue;
            };
            let y = area.y + screen_row as u16;
            let mut x = 0usize;
            for (offset, g) in line
                .graphemes(true)
                .skip(vrow.start)
                .take(vrow.end - vrow.start)
                .enumerate()
            {
                let w = grapheme_width(g, x, tab_width);
                let start = x;
                x += w;
                if start < viewport.left {
                    continue;
                }
                let col = start - viewport.left;
                if col + w > width {
                    break;
                }

                let in_selection = selection
                    .as_ref()
                    .is_some_and(|s| s.contains((vrow.row, vrow.start + offset)));
                let style = if in_selection { selected } else { base };
                let glyph = if g == "\t" { " ".repeat(w) } else { g.to_string() };
                buf.set_stringn(area.x + col as u16, y, glyph, w, style);
            }

            // A selected line break shows as one highlighted cell.
            let line_end_selected = selection.as_ref().is_some_and(|s| {
                vrow.end == buffer.line_grapheme_len(vrow.row) && s.contains((vrow.row, vrow.end))
            });
            if line_end_selected && x >= viewport.left && x - viewport.left < width {
                buf.set_string(area.x + (x - viewport.left) as u16, y, " ", selected);
            }
        }

        let (vrow, vcol) = editor.cursor_visual();
        if vrow < viewport.top || vrow >= viewport.top + usize::from(area.height) {
            return None;
        }
        if vcol < viewport.left {
            return None;
        }
        let col = (vcol - viewport.left).min(width - 1);
        Some((area.x + col as u16, area.y + (vrow - viewport.top) as u16))
    }
}
