//! Workbench: owns the store and the OS-facing services, routes input and
//! renders the single editor window.

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{
    ClipboardService, KeybindingService, LocalFileProvider, PrintService,
};
use crate::kernel::services::ports::{FileProvider, Settings};
use crate::kernel::{Action as KernelAction, AppState, Store};
use crate::tui::view::{EventResult, View};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::path::{Path, PathBuf};

mod effects;
mod input;
mod render;

pub use super::screenshot::SCREENSHOT_FILE;

pub struct Workbench {
    store: Store,
    keybindings: KeybindingService,
    clipboard: ClipboardService,
    files: Box<dyn FileProvider>,
    printer: PrintService,
    theme: UiTheme,
    screenshot_path: PathBuf,
    last_frame: Option<Buffer>,
    last_cursor: Option<(u16, u16)>,
    pending_title: Option<String>,
}

impl Workbench {
    pub fn new(cwd: &Path, settings: Settings) -> Self {
        Self::with_services(
            cwd,
            settings,
            ClipboardService::new(),
            Box::new(LocalFileProvider::new()),
        )
    }

    pub fn with_services(
        cwd: &Path,
        settings: Settings,
        clipboard: ClipboardService,
        files: Box<dyn FileProvider>,
    ) -> Self {
        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);

        let store = Store::new(AppState::new(cwd.to_path_buf(), settings.editor));
        let pending_title = Some(store.state().title());
        tracing::debug!(
            files = files.scheme(),
            system_clipboard = clipboard.is_system(),
            "workbench ready"
        );

        Self {
            store,
            keybindings,
            clipboard,
            files,
            printer: PrintService::new(settings.print),
            theme: UiTheme::default(),
            screenshot_path: PathBuf::from(SCREENSHOT_FILE),
            last_frame: None,
            last_cursor: None,
            pending_title,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn keybindings(&self) -> &KeybindingService {
        &self.keybindings
    }

    pub fn title(&self) -> String {
        self.store.state().title()
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    /// Title changed since the last call; the caller pushes it to the terminal.
    pub fn take_pending_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    pub fn set_screenshot_path(&mut self, path: PathBuf) {
        self.screenshot_path = path;
    }

    pub fn screenshot_path(&self) -> &Path {
        &self.screenshot_path
    }

    /// Keeps a copy of the last drawn frame for screenshots.
    pub fn set_last_frame(&mut self, buffer: &Buffer) {
        self.last_frame = Some(buffer.clone());
    }

    pub fn last_frame(&self) -> Option<&Buffer> {
        self.last_frame.as_ref()
    }

    /// Opens `path` through the regular open flow (used for the CLI argument).
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        self.dispatch_kernel(KernelAction::OpenPath(path))
    }

    pub(crate) fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        input::handle_input(self, event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        render::cursor_position(self)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench.rs"]
mod tests;
