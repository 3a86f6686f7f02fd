//! Display-column math and soft wrapping.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One screen row: graphemes `[start, end)` of logical line `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRow {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

/// Cells taken by grapheme `g` drawn at display column `at`.
pub fn grapheme_width(g: &str, at: usize, tab_width: usize) -> usize {
    if g == "\t" {
        let tab_width = tab_width.max(1);
        tab_width - at % tab_width
    } else {
        g.width().max(1)
    }
}

/// Display column of grapheme index `col` within `line`.
pub fn display_col(line: &str, col: usize, tab_width: usize) -> usize {
    let mut x = 0usize;
    for g in line.graphemes(true).take(col) {
        x += grapheme_width(g, x, tab_width);
    }
    x
}

/// Splits `line` into grapheme ranges no wider than `width` cells.
///
/// Always returns at least one segment; a zero width disables wrapping.
pub fn wrap_segments(line: &str, width: usize, tab_width: usize) -> Vec<(usize, usize)> {
    if width == 0 {
        return vec![(0, line.graphemes(true).count())];
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut x = 0usize;
    let mut idx = 0usize;
    for g in line.graphemes(true) {
        let w = grapheme_width(g, x, tab_width);
        if x > 0 && x + w > width {
            segments.push((start, idx));
            start = idx;
            x = 0;
        }
        x += grapheme_width(g, x, tab_width);
        idx += 1;
    }
    segments.push((start, idx));
    segments
}

/// 软换行索引：每个逻辑行占用的可视行数，以及它们的前缀和。
///
/// Edits splice only the lines they touch, so a keystroke does not re-wrap the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapIndex {
    width: usize,
    tab_width: usize,
    counts: Vec<usize>,
    /// `prefix[i]` is the first visual row of line `i`; one longer than `counts`.
    prefix: Vec<usize>,
}

impl WrapIndex {
    pub fn build<S: AsRef<str>>(
        lines: impl IntoIterator<Item = S>,
        width: usize,
        tab_width: usize,
    ) -> Self {
        let mut index = Self {
            width,
            tab_width,
            counts: Vec::new(),
            prefix: vec![0],
        };
        index.counts = lines
            .into_iter()
            .map(|line| index.rows_of(line.as_ref()))
            .collect();
        index.rebuild_prefix(0);
        index
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn line_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total_rows(&self) -> usize {
        self.prefix.last().copied().unwrap_or(0)
    }

    /// Visual row where logical line `row` starts.
    pub fn first_visual_row(&self, row: usize) -> usize {
        self.prefix[row.min(self.counts.len())]
    }

    /// Logical line holding visual row `visual`, plus the segment index within it.
    pub fn locate(&self, visual: usize) -> Option<(usize, usize)> {
        if visual >= self.total_rows() {
            return None;
        }
        let row = self.prefix.partition_point(|&start| start <= visual) - 1;
        Some((row, visual - self.prefix[row]))
    }

    /// Replaces the counts for old lines `old` with those of `lines`.
    pub fn splice<S: AsRef<str>>(&mut self, old: Range<usize>, lines: impl IntoIterator<Item = S>) {
        let start = old.start.min(self.counts.len());
        let end = old.end.clamp(start, self.counts.len());
        let fresh: Vec<usize> = lines
            .into_iter()
            .map(|line| self.rows_of(line.as_ref()))
            .collect();
        self.counts.splice(start..end, fresh);
        self.rebuild_prefix(start);
    }

    fn rows_of(&self, line: &str) -> usize {
        wrap_segments(line, self.width, self.tab_width).len()
    }

    fn rebuild_prefix(&mut self, from: usize) {
        self.prefix.truncate(from + 1);
        let mut acc = self.prefix[from];
        for &count in &self.counts[from..] {
            acc += count;
            self.prefix.push(acc);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/layout.rs"]
mod tests;
