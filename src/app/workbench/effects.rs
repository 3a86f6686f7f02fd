//! Executes kernel effects and feeds their outcome back as actions.

use super::super::screenshot;
use super::Workbench;
use crate::kernel::{Action as KernelAction, Effect as KernelEffect};

impl Workbench {
    /// Returns whether any follow-up action changed state.
    pub(super) fn run_effect(&mut self, effect: KernelEffect) -> bool {
        match effect {
            KernelEffect::LoadFile(path) => match self.files.read_file(&path) {
                Ok(content) => self.dispatch_kernel(KernelAction::FileLoaded { path, content }),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "open failed");
                    self.dispatch_kernel(KernelAction::FileLoadFailed {
                        message: err.to_string(),
                    })
                }
            },
            KernelEffect::ListDir(dir) => match self.files.read_dir(&dir) {
                Ok(entries) => self.dispatch_kernel(KernelAction::DirLoaded { dir, entries }),
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), error = %err, "list dir failed");
                    self.dispatch_kernel(KernelAction::DirLoadError {
                        dir,
                        message: err.to_string(),
                    })
                }
            },
            KernelEffect::WriteFile {
                path,
                text,
                adopt_path,
            } => match self.files.write_file(&path, &text) {
                Ok(()) => self.dispatch_kernel(KernelAction::FileSaved { path, adopt_path }),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "save failed");
                    self.dispatch_kernel(KernelAction::FileSaveFailed {
                        message: err.to_string(),
                    })
                }
            },
            KernelEffect::CheckSaveTarget(path) => {
                let exists = self.files.is_file(&path);
                self.dispatch_kernel(KernelAction::SaveTargetChecked { path, exists })
            }
            KernelEffect::SetClipboardText(text) => {
                if let Err(err) = self.clipboard.set_text(&text) {
                    tracing::warn!(error = %err, "clipboard write failed");
                }
                false
            }
            KernelEffect::RequestClipboardText => match self.clipboard.get_text() {
                Ok(text) if !text.is_empty() => {
                    self.dispatch_kernel(KernelAction::InsertText(text))
                }
                Ok(_) => false,
                Err(err) => {
                    tracing::warn!(error = %err, "clipboard read failed");
                    false
                }
            },
            KernelEffect::Print { printer, text } => {
                match self.printer.print(&text, printer.as_deref()) {
                    Ok(()) => {
                        tracing::info!(printer = printer.as_deref().unwrap_or("default"), "printed")
                    }
                    Err(err) => tracing::error!(error = %err, "print failed"),
                }
                false
            }
            KernelEffect::Screenshot => {
                match self.last_frame.as_ref() {
                    Some(frame) => match screenshot::save(frame, &self.screenshot_path) {
                        Ok(()) => tracing::info!(
                            path = %self.screenshot_path.display(),
                            "screenshot saved"
                        ),
                        Err(err) => tracing::error!(error = %err, "screenshot failed"),
                    },
                    None => tracing::error!("screenshot requested before first frame"),
                }
                false
            }
            KernelEffect::SetTitle(title) => {
                self.pending_title = Some(title);
                false
            }
        }
    }
}
