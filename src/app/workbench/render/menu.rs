use super::super::Workbench;
use crate::kernel::menu::{self, MenuEntry, MenuKind};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const MENU_HINT: &str = "F10 Menu  Ctrl+Q Quit ";

/// Column where `kind`'s title starts in the menu bar.
fn menu_title_offset(kind: MenuKind) -> u16 {
    let mut x = 1u16;
    for k in MenuKind::ALL {
        if k == kind {
            break;
        }
        x += k.title().width() as u16 + 2;
    }
    x
}

impl Workbench {
    pub(super) fn render_title(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.title_bg)
            .fg(self.theme.title_fg)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(self.store.state().title())
                .alignment(Alignment::Center)
                .style(style),
            area,
        );
    }

    pub(super) fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let base = Style::default()
            .bg(self.theme.menu_bar_bg)
            .fg(self.theme.menu_bar_fg);
        let open = self.store.state().ui.menu.open;

        let mut spans = vec![Span::raw(" ")];
        for kind in MenuKind::ALL {
            let style = if open == Some(kind) {
                Style::default()
                    .bg(self.theme.menu_selected_bg)
                    .fg(self.theme.menu_selected_fg)
            } else {
                base
            };
            let title = kind.title();
            let (first, rest) = title.split_at(1);
            spans.push(Span::styled(" ", style));
            spans.push(Span::styled(first, style.add_modifier(Modifier::UNDERLINED)));
            spans.push(Span::styled(rest, style));
            spans.push(Span::styled(" ", style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

        let hint_w = MENU_HINT.width() as u16;
        let titles_w = MenuKind::ALL
            .into_iter()
            .last()
            .map(|k| menu_title_offset(k) + k.title().width() as u16 + 2)
            .unwrap_or(0);
        if area.width > titles_w + hint_w {
            let hint_area = Rect::new(area.right() - hint_w, area.y, hint_w, 1);
            frame.render_widget(
                Paragraph::new(MENU_HINT).style(base.fg(self.theme.muted_fg)),
                hint_area,
            );
        }
    }

    pub(super) fn render_menu_dropdown(&self, frame: &mut Frame, menu_bar: Rect, bounds: Rect) {
        let state = self.store.state().ui.menu;
        let Some(kind) = state.open else {
            return;
        };
        let entries = kind.entries();

        let rows: Vec<(String, String)> = entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Action(spec) => (
                    format!("{} {}", spec.icon, spec.label),
                    self.keybindings
                        .key_for(spec.command)
                        .map(|key| key.to_string())
                        .unwrap_or_default(),
                ),
                MenuEntry::Separator => (String::new(), String::new()),
            })
            .collect();
        let label_w = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        let key_w = rows.iter().map(|(_, k)| k.width()).max().unwrap_or(0);
        let inner_w = label_w + 3 + key_w;

        let x = menu_bar.x + menu_title_offset(kind);
        let y = menu_bar.y + 1;
        let width = (inner_w as u16 + 4).min(bounds.right().saturating_sub(x));
        let height = (entries.len() as u16 + 2).min(bounds.bottom().saturating_sub(y));
        if width < 4 || height < 3 {
            return;
        }
        let popup = Rect::new(x, y, width, height);

        let base = Style::default().bg(self.theme.menu_bg).fg(self.theme.menu_fg);
        let selected = Style::default()
            .bg(self.theme.menu_selected_bg)
            .fg(self.theme.menu_selected_fg);
        let muted = base.fg(self.theme.muted_fg);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(base)
            .style(base);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines: Vec<Line> = rows
            .iter()
            .zip(entries)
            .enumerate()
            .map(|(i, ((label, key), entry))| {
                if matches!(entry, MenuEntry::Separator) {
                    return Line::styled("─".repeat(usize::from(inner.width)), muted);
                }
                let style = if i == state.selected { selected } else { base };
                let pad = label_w.saturating_sub(label.width()) + 3;
                Line::from(vec![
                    Span::styled(format!(" {}{}", label, " ".repeat(pad)), style),
                    Span::styled(format!("{:>key_w$} ", key), style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).style(base), inner);
    }

    pub(super) fn render_toolbar(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.toolbar_bg)
            .fg(self.theme.toolbar_fg);
        let mut spans = vec![Span::raw(" ")];
        for spec in menu::all_actions() {
            spans.push(Span::styled(spec.icon, style.add_modifier(Modifier::BOLD)));
            spans.push(Span::raw(format!(" {}  ", spec.label)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}
