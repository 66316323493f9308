//! Line wrapping and pointer hit testing.
//!
//! A logical row is split into visual lines according to [`Wrapping`] and
//! the available width. [`TextLayout`] keeps the visual lines of a whole
//! buffer and maps between pixels and (row, column) positions.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::buffer::TextBuffer;
use super::cursor::Position;
use super::measure::TextMeasure;
use super::selection::RowRange;

/// How rows wider than the entry are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Wrapping {
    /// One visual line per row
    #[default]
    Off,
    /// Clip overflow (treated as `Off` by multi-line entries)
    Truncate,
    /// Break at the last char that fits
    Break,
    /// Break after the last whitespace that fits
    Word,
}

impl FromStr for Wrapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "none" => Ok(Wrapping::Off),
            "truncate" => Ok(Wrapping::Truncate),
            "break" => Ok(Wrapping::Break),
            "word" => Ok(Wrapping::Word),
            _ => Err(format!("Invalid wrapping mode: {}", s)),
        }
    }
}

impl fmt::Display for Wrapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Wrapping::Off => "off",
            Wrapping::Truncate => "truncate",
            Wrapping::Break => "break",
            Wrapping::Word => "word",
        };
        f.write_str(name)
    }
}

/// A rectangle in entry-local pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Split one row into visual lines, returned as char column ranges.
///
/// Always returns at least one range. Every char lands in exactly one range,
/// and a visual line holds at least one char even when that char alone is
/// wider than `max_width`.
pub fn wrap_row(
    text: &str,
    max_width: f32,
    measure: &dyn TextMeasure,
    wrapping: Wrapping,
) -> Vec<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    let wraps = matches!(wrapping, Wrapping::Break | Wrapping::Word);
    if !wraps || max_width <= 0.0 || total == 0 || measure.text_width(text) <= max_width {
        return vec![0..total];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < total {
        let mut fit = 0;
        for i in 1..=(total - start) {
            let segment: String = chars[start..start + i].iter().collect();
            if measure.text_width(&segment) > max_width {
                break;
            }
            fit = i;
        }
        let fit = fit.max(1);

        if start + fit >= total {
            ranges.push(start..total);
            break;
        }

        let mut take = fit;
        if wrapping == Wrapping::Word {
            if let Some(j) = (1..=fit).rev().find(|&j| chars[start + j - 1].is_whitespace()) {
                take = j;
            }
        }

        ranges.push(start..start + take);
        start += take;
    }
    ranges
}

/// One on-screen line of a (possibly wrapped) row
#[derive(Debug, Clone, PartialEq)]
pub struct VisualLine {
    /// Logical row this line belongs to
    pub line: usize,
    /// Columns of the row shown on this line
    pub columns: Range<usize>,
    pub text: String,
}

/// Visual lines of a whole buffer, top to bottom.
#[derive(Debug, Clone)]
pub struct TextLayout {
    lines: Vec<VisualLine>,
    row_height: f32,
}

impl TextLayout {
    /// Lay out `rows` at `width`. The rows should already be in display form
    /// (masked for password entries).
    pub fn new<I, S>(rows: I, width: f32, wrapping: Wrapping, measure: &dyn TextMeasure) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = Vec::new();
        for (line, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            for columns in wrap_row(row, width, measure, wrapping) {
                let text = row
                    .chars()
                    .skip(columns.start)
                    .take(columns.len())
                    .collect();
                lines.push(VisualLine {
                    line,
                    columns,
                    text,
                });
            }
        }
        if lines.is_empty() {
            lines.push(VisualLine {
                line: 0,
                columns: 0..0,
                text: String::new(),
            });
        }

        Self {
            lines,
            row_height: measure.row_height(),
        }
    }

    pub fn from_buffer<B: TextBuffer>(
        buffer: &B,
        width: f32,
        wrapping: Wrapping,
        measure: &dyn TextMeasure,
    ) -> Self {
        let rows = (0..buffer.line_count()).map(|i| buffer.line(i).unwrap_or_default());
        Self::new(rows, width, wrapping, measure)
    }

    pub fn lines(&self) -> &[VisualLine] {
        &self.lines
    }

    /// Number of visual lines (at least 1)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Index of the visual line showing `pos`. A position on a wrap
    /// boundary belongs to the continuation line.
    pub fn visual_index_of(&self, pos: Position) -> usize {
        let mut found = None;
        for (i, vl) in self.lines.iter().enumerate() {
            if vl.line != pos.line {
                if found.is_some() {
                    break;
                }
                continue;
            }
            found = Some(i);
            if pos.column < vl.columns.end {
                break;
            }
        }
        found.unwrap_or(self.lines.len() - 1)
    }

    /// Map a pointer to the nearest text position. Points above the text land
    /// on the first visual line, points below it on the last.
    pub fn position_at(&self, measure: &dyn TextMeasure, x: f32, y: f32) -> Position {
        let index = if y <= 0.0 || self.row_height <= 0.0 {
            0
        } else {
            ((y / self.row_height) as usize).min(self.lines.len() - 1)
        };
        let vl = &self.lines[index];
        let column = measure.column_at(&vl.text, x).min(vl.columns.len());
        Position::new(vl.line, vl.columns.start + column)
    }

    /// Top-left pixel of the caret at `pos`
    pub fn point_at(&self, measure: &dyn TextMeasure, pos: Position) -> (f32, f32) {
        let index = self.visual_index_of(pos);
        let vl = &self.lines[index];
        let x = measure.offset_of(&vl.text, pos.column.saturating_sub(vl.columns.start));
        (x, index as f32 * self.row_height)
    }

    /// Pixel rectangles covering `ranges`, one per visual line segment.
    /// Empty segments produce no rectangle.
    pub fn highlight_rects(&self, measure: &dyn TextMeasure, ranges: &[RowRange]) -> Vec<Rect> {
        let mut rects = Vec::new();
        for range in ranges {
            for (i, vl) in self.lines.iter().enumerate() {
                if vl.line != range.line {
                    continue;
                }
                let start = range.start.max(vl.columns.start);
                let end = range.end.min(vl.columns.end);
                if start >= end {
                    continue;
                }
                let x0 = measure.offset_of(&vl.text, start - vl.columns.start);
                let x1 = measure.offset_of(&vl.text, end - vl.columns.start);
                rects.push(Rect {
                    x: x0,
                    y: i as f32 * self.row_height,
                    width: x1 - x0,
                    height: self.row_height,
                });
            }
        }
        rects
    }
}
