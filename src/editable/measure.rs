//! Text measurement collaborator used for wrapping and hit testing.

use crate::util::text::{char_col_to_visual_col, TABULATOR_WIDTH};

/// Measures rendered text. Implemented by the host's font system; the
/// engine only needs widths and a row height.
pub trait TextMeasure {
    /// Rendered width of `text`
    fn text_width(&self, text: &str) -> f32;

    /// Height of one visual line
    fn row_height(&self) -> f32;

    /// X offset of the boundary before char `column` of `text`
    fn offset_of(&self, text: &str, column: usize) -> f32 {
        let end = text
            .char_indices()
            .nth(column)
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        self.text_width(&text[..end])
    }

    /// Char boundary of `text` nearest to `x`. Ties go to the lower column.
    fn column_at(&self, text: &str, x: f32) -> usize {
        if x <= 0.0 {
            return 0;
        }

        let mut best = 0;
        let mut best_dist = x;
        for (col, (idx, ch)) in text.char_indices().enumerate() {
            let offset = self.text_width(&text[..idx + ch.len_utf8()]);
            let dist = (x - offset).abs();
            if dist < best_dist {
                best = col + 1;
                best_dist = dist;
            } else if offset > x {
                break;
            }
        }
        best
    }
}

/// Fixed-advance measure: every char is `char_width` wide and tabs expand
/// to the next multiple of `tab_width` columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f32,
    pub row_height: f32,
    pub tab_width: usize,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            row_height: 16.0,
            tab_width: TABULATOR_WIDTH,
        }
    }
}

impl MonospaceMeasure {
    pub fn new(char_width: f32, row_height: f32) -> Self {
        Self {
            char_width,
            row_height,
            ..Self::default()
        }
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str) -> f32 {
        char_col_to_visual_col(text, usize::MAX, self.tab_width) as f32 * self.char_width
    }

    fn row_height(&self) -> f32 {
        self.row_height
    }
}
