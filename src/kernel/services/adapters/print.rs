//! Printing through the system spooler (`lp`/`lpr`): the text is piped to its stdin.

use crate::kernel::services::ports::PrintConfig;
use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug)]
pub enum PrintError {
    Spawn(std::io::Error),
    Write(std::io::Error),
    Failed { status: String, stderr: String },
}

impl std::fmt::Display for PrintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintError::Spawn(e) => write!(f, "failed to start print spooler: {}", e),
            PrintError::Write(e) => write!(f, "failed to send document to spooler: {}", e),
            PrintError::Failed { status, stderr } => {
                write!(f, "print spooler exited with {}: {}", status, stderr.trim())
            }
        }
    }
}

impl std::error::Error for PrintError {}

pub struct PrintService {
    config: PrintConfig,
}

impl PrintService {
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrintConfig {
        &self.config
    }

    /// `None` or a blank name selects the system default printer.
    pub fn command(&self, printer: Option<&str>) -> Command {
        let mut cmd = Command::new(&self.config.command);
        if let Some(printer) = printer.map(str::trim).filter(|p| !p.is_empty()) {
            if !self.config.printer_flag.is_empty() {
                cmd.arg(&self.config.printer_flag);
            }
            cmd.arg(printer);
        }
        cmd
    }

    pub fn print(&self, text: &str, printer: Option<&str>) -> Result<(), PrintError> {
        let mut child = self
            .command(printer)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(PrintError::Spawn)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(PrintError::Write)?;
        }

        let output = child.wait_with_output().map_err(PrintError::Write)?;
        if !output.status.success() {
            return Err(PrintError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

impl Default for PrintService {
    fn default() -> Self {
        Self::new(PrintConfig::default())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/print.rs"]
mod tests;
