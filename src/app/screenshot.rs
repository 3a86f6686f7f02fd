//! Frame capture: rasterises a ratatui buffer into a JPEG.
//!
//! Each cell becomes an 8×16 block. The background colour fills the block and
//! a non-blank glyph is drawn as a foreground box inside it.

use image::{ImageFormat, Rgb, RgbImage};
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Modifier};
use std::path::Path;

pub const SCREENSHOT_FILE: &str = "shot.jpg";
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

const DEFAULT_FG: [u8; 3] = [0xd0, 0xd0, 0xd0];
const DEFAULT_BG: [u8; 3] = [0x1e, 0x1e, 0x1e];

// Glyph box inside the cell, in pixels: [x0, x1) × [y0, y1).
const GLYPH_X: (u32, u32) = (1, 7);
const GLYPH_Y: (u32, u32) = (4, 13);

#[derive(Debug)]
pub enum ScreenshotError {
    EmptyFrame,
    Image(image::ImageError),
}

impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::EmptyFrame => write!(f, "nothing has been drawn yet"),
            ScreenshotError::Image(e) => write!(f, "failed to write screenshot: {}", e),
        }
    }
}

impl std::error::Error for ScreenshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenshotError::Image(e) => Some(e),
            ScreenshotError::EmptyFrame => None,
        }
    }
}

impl From<image::ImageError> for ScreenshotError {
    fn from(e: image::ImageError) -> Self {
        ScreenshotError::Image(e)
    }
}

pub fn rasterize(buffer: &Buffer) -> RgbImage {
    let area = buffer.area;
    let width = u32::from(area.width) * CELL_WIDTH;
    let height = u32::from(area.height) * CELL_HEIGHT;
    let mut img = RgbImage::new(width, height);

    for row in 0..area.height {
        for col in 0..area.width {
            let idx = usize::from(row) * usize::from(area.width) + usize::from(col);
            let Some(cell) = buffer.content.get(idx) else {
                continue;
            };

            let mut fg = to_rgb(cell.fg, DEFAULT_FG);
            let mut bg = to_rgb(cell.bg, DEFAULT_BG);
            if cell.modifier.contains(Modifier::REVERSED) {
                std::mem::swap(&mut fg, &mut bg);
            }
            let has_glyph = !cell.symbol().trim().is_empty();

            let x0 = u32::from(col) * CELL_WIDTH;
            let y0 = u32::from(row) * CELL_HEIGHT;
            for dy in 0..CELL_HEIGHT {
                for dx in 0..CELL_WIDTH {
                    let in_glyph = has_glyph
                        && (GLYPH_X.0..GLYPH_X.1).contains(&dx)
                        && (GLYPH_Y.0..GLYPH_Y.1).contains(&dy);
                    let color = if in_glyph { fg } else { bg };
                    img.put_pixel(x0 + dx, y0 + dy, Rgb(color));
                }
            }
        }
    }
    img
}

/// Writes `buffer` as JPEG to `path`, replacing any existing file.
pub fn save(buffer: &Buffer, path: &Path) -> Result<(), ScreenshotError> {
    if buffer.area.is_empty() {
        return Err(ScreenshotError::EmptyFrame);
    }
    rasterize(buffer).save_with_format(path, ImageFormat::Jpeg)?;
    Ok(())
}

pub fn to_rgb(color: Color, default: [u8; 3]) -> [u8; 3] {
    match color {
        Color::Reset => default,
        Color::Black => ansi16(0),
        Color::Red => ansi16(1),
        Color::Green => ansi16(2),
        Color::Yellow => ansi16(3),
        Color::Blue => ansi16(4),
        Color::Magenta => ansi16(5),
        Color::Cyan => ansi16(6),
        Color::Gray => ansi16(7),
        Color::DarkGray => ansi16(8),
        Color::LightRed => ansi16(9),
        Color::LightGreen => ansi16(10),
        Color::LightYellow => ansi16(11),
        Color::LightBlue => ansi16(12),
        Color::LightMagenta => ansi16(13),
        Color::LightCyan => ansi16(14),
        Color::White => ansi16(15),
        Color::Rgb(r, g, b) => [r, g, b],
        Color::Indexed(i) => indexed(i),
    }
}

fn ansi16(i: u8) -> [u8; 3] {
    const PALETTE: [[u8; 3]; 16] = [
        [0x00, 0x00, 0x00],
        [0xcd, 0x00, 0x00],
        [0x00, 0xcd, 0x00],
        [0xcd, 0xcd, 0x00],
        [0x00, 0x00, 0xee],
        [0xcd, 0x00, 0xcd],
        [0x00, 0xcd, 0xcd],
        [0xe5, 0xe5, 0xe5],
        [0x7f, 0x7f, 0x7f],
        [0xff, 0x00, 0x00],
        [0x00, 0xff, 0x00],
        [0xff, 0xff, 0x00],
        [0x5c, 0x5c, 0xff],
        [0xff, 0x00, 0xff],
        [0x00, 0xff, 0xff],
        [0xff, 0xff, 0xff],
    ];
    PALETTE[usize::from(i % 16)]
}

/// xterm 256-colour palette.
fn indexed(i: u8) -> [u8; 3] {
    match i {
        0..=15 => ansi16(i),
        16..=231 => {
            let i = i - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            [level(i / 36), level((i / 6) % 6), level(i % 6)]
        }
        232..=255 => {
            let v = 8 + (i - 232) * 10;
            [v, v, v]
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/screenshot.rs"]
mod tests;
