//! Constants for page dimensions and caption placement

/// ISO A3 short edge in points
pub const A3_SHORT: f32 = 841.89;

/// ISO A3 long edge in points
pub const A3_LONG: f32 = 1190.55;

/// ISO A4 short edge in points
pub const A4_SHORT: f32 = 595.28;

/// ISO A4 long edge in points
pub const A4_LONG: f32 = 841.89;

/// US Letter short edge in points
pub const LETTER_SHORT: f32 = 612.0;

/// US Letter long edge in points
pub const LETTER_LONG: f32 = 792.0;

/// Default page margin in points (half an inch)
pub const DEFAULT_MARGIN: f32 = 36.0;

/// Number of pages the image is spread across
pub const PAGE_COUNT: u32 = 2;

/// Default caption font size in points
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Caption baseline start, measured leftwards from the page's right edge.
///
/// Kept at the reference layout's 80 pt even though the longer bottom-page
/// caption at 10 pt Helvetica is about 90 pt wide and overruns the A3 edge.
pub const CAPTION_RIGHT_OFFSET: f32 = 80.0;

/// Caption baseline, measured upwards from the page's bottom edge
pub const CAPTION_BOTTOM_OFFSET: f32 = 20.0;

/// Resource name of the caption font
pub const CAPTION_FONT_RESOURCE: &str = "F1";

/// Default source image path
pub const DEFAULT_INPUT: &str = "class-diagram.png";

/// Default output PDF path
pub const DEFAULT_OUTPUT: &str = "class-diagram-a3.pdf";
