use super::Workbench;
use crate::kernel::Action as KernelAction;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

mod dialogs;
mod editor;
mod menu;
mod status;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let [title_area, menu_bar_area, editor_area, toolbar_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    workbench.sync_editor_viewport(editor_area);

    workbench.render_title(frame, title_area);
    workbench.render_menu_bar(frame, menu_bar_area);
    workbench.last_cursor = workbench.render_editor(frame, editor_area);
    workbench.render_toolbar(frame, toolbar_area);
    workbench.render_status(frame, status_area);

    if workbench.store.state().ui.menu.is_open() {
        workbench.render_menu_dropdown(frame, menu_bar_area, area);
        workbench.last_cursor = None;
    }
    if workbench.store.state().ui.is_modal() {
        workbench.last_cursor = workbench.render_dialog(frame, area);
    }

    if let Some(pos) = workbench.last_cursor {
        frame.set_cursor_position(pos);
    }
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    workbench.last_cursor
}

/// Rectangle of at most `width`×`height` centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl Workbench {
    fn sync_editor_viewport(&mut self, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let _ = self.dispatch_kernel(KernelAction::EditorResize {
            width: usize::from(area.width),
            height: usize::from(area.height),
        });
    }
}
