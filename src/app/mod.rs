//! Application layer: the workbench plus its theme and frame capture.

pub mod screenshot;
pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
