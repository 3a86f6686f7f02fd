use super::super::Workbench;
use super::centered;
use crate::kernel::dialog::{
    ConfirmOverwriteState, Dialog, FileDialogKind, FileDialogState, MessageDialogState,
    PrintDialogState,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const FILE_DIALOG_WIDTH: u16 = 72;
const FILE_DIALOG_HEIGHT: u16 = 20;
const PRINT_DIALOG_WIDTH: u16 = 50;
const MESSAGE_DIALOG_WIDTH: u16 = 60;

impl Workbench {
    /// Draws the open dialog and returns where the text cursor belongs.
    pub(super) fn render_dialog(&self, frame: &mut Frame, area: Rect) -> Option<(u16, u16)> {
        match self.store.state().ui.dialog.as_ref()? {
            Dialog::File(dialog) => self.render_file_dialog(frame, area, dialog),
            Dialog::Print(dialog) => self.render_print_dialog(frame, area, dialog),
            Dialog::Message(dialog) => {
                self.render_message_dialog(frame, area, dialog);
                None
            }
            Dialog::ConfirmOverwrite(dialog) => {
                self.render_confirm_dialog(frame, area, dialog);
                None
            }
        }
    }

    fn dialog_frame(&self, frame: &mut Frame, popup: Rect, title: &str, accent: Style) -> Rect {
        let base = self.dialog_style();
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base.fg(self.theme.dialog_border))
            .title(Span::styled(format!(" {} ", title), accent))
            .style(base);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        inner
    }

    fn dialog_style(&self) -> Style {
        Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_fg)
    }

    fn hint_line(&self, accept: &'static str) -> Line<'static> {
        let key = Style::default().fg(self.theme.accent_fg);
        Line::from(vec![
            Span::styled("[Enter]", key),
            Span::raw(format!(" {}  ", accept)),
            Span::styled("[Esc]", key),
            Span::raw(" Cancel"),
        ])
    }

    fn render_file_dialog(
        &self,
        frame: &mut Frame,
        area: Rect,
        dialog: &FileDialogState,
    ) -> Option<(u16, u16)> {
        let popup = centered(area, FILE_DIALOG_WIDTH, FILE_DIALOG_HEIGHT);
        let accent = self.dialog_style().add_modifier(Modifier::BOLD);
        let inner = self.dialog_frame(frame, popup, dialog.kind.title(), accent);
        // Look-in line, list, name, type, error and hint rows.
        if inner.height < 7 || inner.width < 20 {
            return None;
        }

        let base = self.dialog_style();
        let muted = base.fg(self.theme.muted_fg);
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);

        let list_height = usize::from(inner.height - 6);
        let entries = dialog.visible_entries();
        let scroll = dialog.selected.saturating_sub(list_height.saturating_sub(1));

        let mut lines = Vec::with_capacity(usize::from(inner.height));
        lines.push(Line::from(vec![
            Span::styled("Look in: ", muted),
            Span::raw(dialog.dir.display().to_string()),
        ]));
        for row in 0..list_height {
            let idx = scroll + row;
            let Some(entry) = entries.get(idx) else {
                lines.push(Line::raw(""));
                continue;
            };
            let name = if entry.is_dir {
                format!(" {}/", entry.name)
            } else {
                format!(" {}", entry.name)
            };
            let style = if idx == dialog.selected { selected } else { base };
            lines.push(Line::styled(name, style));
        }

        let name_label = "File name: ";
        lines.push(Line::from(vec![
            Span::styled(name_label, muted),
            Span::raw(dialog.input.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Files of type: ", muted),
            Span::raw(dialog.filter().label),
            Span::styled("  [Tab]", Style::default().fg(self.theme.accent_fg)),
        ]));
        lines.push(match dialog.error.as_deref() {
            Some(err) => Line::styled(err.to_string(), base.fg(self.theme.error_fg)),
            None => Line::raw(""),
        });
        let accept = match dialog.kind {
            FileDialogKind::Open => "Open",
            FileDialogKind::SaveAs => "Save",
        };
        lines.push(self.hint_line(accept));

        frame.render_widget(Paragraph::new(lines).style(base), inner);

        let input_row = inner.y + 1 + list_height as u16;
        let input_col = (name_label.width() + dialog.input.width()) as u16;
        Some((
            inner.x + input_col.min(inner.width.saturating_sub(1)),
            input_row,
        ))
    }

    fn render_print_dialog(
        &self,
        frame: &mut Frame,
        area: Rect,
        dialog: &PrintDialogState,
    ) -> Option<(u16, u16)> {
        let popup = centered(area, PRINT_DIALOG_WIDTH, 7);
        let accent = self.dialog_style().add_modifier(Modifier::BOLD);
        let inner = self.dialog_frame(frame, popup, "Print", accent);
        if inner.height < 4 || inner.width < 10 {
            return None;
        }

        let base = self.dialog_style();
        let muted = base.fg(self.theme.muted_fg);
        let label = "Printer: ";
        let lines = vec![
            Line::from(vec![
                Span::styled(label, muted),
                Span::raw(dialog.printer.clone()),
            ]),
            Line::styled("Leave blank for the default printer.", muted),
            Line::raw(""),
            self.hint_line("Print"),
        ];
        frame.render_widget(Paragraph::new(lines).style(base), inner);

        let col = (label.width() + dialog.printer.width()) as u16;
        Some((inner.x + col.min(inner.width.saturating_sub(1)), inner.y))
    }

    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect, dialog: &ConfirmOverwriteState) {
        let message = dialog.message();
        let text_width = usize::from(MESSAGE_DIALOG_WIDTH.saturating_sub(4)).max(1);
        let msg_lines = message.width().div_ceil(text_width).max(1) as u16;
        let popup = centered(area, MESSAGE_DIALOG_WIDTH, msg_lines + 4);
        let accent = self.dialog_style().add_modifier(Modifier::BOLD);
        let inner = self.dialog_frame(frame, popup, "Confirm Save As", accent);
        if inner.height < 2 || inner.width < 10 {
            return;
        }

        let lines = vec![Line::raw(message), Line::raw(""), self.hint_line("Replace")];
        frame.render_widget(
            Paragraph::new(lines)
                .style(self.dialog_style())
                .wrap(Wrap { trim: true }),
            inner,
        );
    }

    fn render_message_dialog(&self, frame: &mut Frame, area: Rect, dialog: &MessageDialogState) {
        let text_width = usize::from(MESSAGE_DIALOG_WIDTH.saturating_sub(4)).max(1);
        let msg_lines = dialog.message.width().div_ceil(text_width).max(1) as u16;
        let popup = centered(area, MESSAGE_DIALOG_WIDTH, msg_lines + 4);
        let accent = self
            .dialog_style()
            .fg(self.theme.error_fg)
            .add_modifier(Modifier::BOLD);
        let inner = self.dialog_frame(frame, popup, &dialog.title, accent);
        if inner.height < 2 || inner.width < 10 {
            return;
        }

        let base = self.dialog_style();
        let key = Style::default().fg(self.theme.accent_fg);
        let lines = vec![
            Line::raw(dialog.message.clone()),
            Line::raw(""),
            Line::from(vec![Span::styled("[Enter]", key), Span::raw(" OK")]),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(base).wrap(Wrap { trim: true }),
            inner,
        );
    }
}
