use super::super::Workbench;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl Workbench {
    /// Status tip of the highlighted menu entry (or the last status message),
    /// then cursor position and wrap mode on the right.
    fn status_text(&self) -> (String, String) {
        let state = self.store.state();
        let left = state
            .ui
            .menu
            .highlighted()
            .map(|spec| spec.status_tip.to_string())
            .or_else(|| state.ui.status.clone())
            .unwrap_or_default();

        let (row, col) = state.editor.buffer().cursor();
        let wrap = if state.editor.wrap_enabled() { "On" } else { "Off" };
        let right = format!("Ln {}, Col {} | Wrap: {} ", row + 1, col + 1, wrap);
        (left, right)
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        let (left, right) = self.status_text();

        frame.render_widget(Paragraph::new(format!(" {}", left)).style(style), area);
        let right_w = (right.chars().count() as u16).min(area.width);
        let right_area = Rect::new(area.right() - right_w, area.y, right_w, area.height);
        frame.render_widget(
            Paragraph::new(right).alignment(Alignment::Right).style(style),
            right_area,
        );
    }
}
