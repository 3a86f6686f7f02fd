//! OSC 52 clipboard escape: lets the host terminal own the copy when no system
//! clipboard is reachable (SSH sessions, bare consoles).

use std::io::{self, Write};

const OSC52_OPEN: &str = "\x1b]52;c;";
const BEL: &str = "\x07";
const TMUX_OPEN: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_CLOSE: &str = "\x07\x1b\\";

pub const OSC52_MAX_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Osc52Error {
    TooLarge { bytes: usize },
    Io(String),
}

impl std::fmt::Display for Osc52Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Osc52Error::TooLarge { bytes } => write!(
                f,
                "selection too large for the terminal clipboard ({} KB, limit {} KB)",
                bytes / 1024,
                OSC52_MAX_BYTES / 1024
            ),
            Osc52Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for Osc52Error {}

pub fn in_tmux() -> bool {
    std::env::var_os("TMUX").is_some()
}

pub fn sequence(text: &str, tmux: bool) -> Result<String, Osc52Error> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(Osc52Error::TooLarge { bytes: bytes.len() });
    }

    let payload = base64(bytes);
    Ok(if tmux {
        format!("{TMUX_OPEN}{payload}{TMUX_CLOSE}")
    } else {
        format!("{OSC52_OPEN}{payload}{BEL}")
    })
}

pub fn emit<W: Write>(mut out: W, text: &str, tmux: bool) -> Result<(), Osc52Error> {
    let seq = sequence(text, tmux)?;
    out.write_all(seq.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| Osc52Error::Io(e.to_string()))
}

pub fn copy_to_terminal(text: &str) -> Result<(), Osc52Error> {
    emit(io::stdout(), text, in_tmux())
}

fn base64(bytes: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let mut group = [0u8; 3];
        group[..chunk.len()].copy_from_slice(chunk);
        let n = u32::from_be_bytes([0, group[0], group[1], group[2]]);

        for i in 0..4 {
            if i <= chunk.len() {
                let idx = (n >> (18 - 6 * i)) & 0x3f;
                out.push(ALPHABET[idx as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tui/osc52.rs"]
mod tests;
