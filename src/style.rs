//! Styling for page captions

use crate::constants::{CAPTION_BOTTOM_OFFSET, CAPTION_RIGHT_OFFSET, DEFAULT_FONT_SIZE};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Appearance and anchor of the page-number caption
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    /// Base-14 font name, embedded as a Type1 font
    pub font_name: String,
    pub font_size: f32,
    pub color: Color,
    /// Distance from the page's right edge to the start of the caption
    pub right_offset: f32,
    /// Distance from the page's bottom edge to the caption baseline
    pub bottom_offset: f32,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_name: "Helvetica".to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::black(),
            right_offset: CAPTION_RIGHT_OFFSET,
            bottom_offset: CAPTION_BOTTOM_OFFSET,
        }
    }
}

impl CaptionStyle {
    /// Set the font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Baseline origin of the caption on a page of the given size
    pub fn anchor(&self, page_width: f32) -> (f32, f32) {
        (page_width - self.right_offset, self.bottom_offset)
    }
}
