//! Page geometry and placement calculations

use crate::Result;
use crate::constants::*;
use crate::error::PaginatorError;
use tracing::trace;

/// Physical page sizes the paginator can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    A3,
    A4,
    Letter,
}

impl PageSize {
    /// (short edge, long edge) in points
    fn edges(self) -> (f32, f32) {
        match self {
            Self::A3 => (A3_SHORT, A3_LONG),
            Self::A4 => (A4_SHORT, A4_LONG),
            Self::Letter => (LETTER_SHORT, LETTER_LONG),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A3
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Landscape
    }
}

/// Immutable page geometry shared by every page of the output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
}

impl Default for PageLayout {
    /// A3 landscape with half-inch margins
    fn default() -> Self {
        Self {
            page_width: A3_LONG,
            page_height: A3_SHORT,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl PageLayout {
    /// Build a layout for a standard page size, failing if the margin leaves no usable area
    pub fn new(size: PageSize, orientation: Orientation, margin: f32) -> Result<Self> {
        let (short, long) = size.edges();
        let (page_width, page_height) = match orientation {
            Orientation::Landscape => (long, short),
            Orientation::Portrait => (short, long),
        };
        Self::custom(page_width, page_height, margin)
    }

    /// Build a layout from explicit dimensions in points
    pub fn custom(page_width: f32, page_height: f32, margin: f32) -> Result<Self> {
        let layout = Self {
            page_width,
            page_height,
            margin,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Check that the usable area is positive
    pub fn validate(&self) -> Result<()> {
        if self.margin.is_nan() || self.margin < 0.0 {
            return Err(PaginatorError::DimensionError(format!(
                "Margin must be non-negative, got {}",
                self.margin
            )));
        }
        if !(self.usable_width() > 0.0 && self.usable_height() > 0.0) {
            return Err(PaginatorError::DimensionError(format!(
                "Margin {} leaves no usable area on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }

    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Usable height of all pages stacked vertically
    pub fn total_usable_height(&self) -> f32 {
        self.usable_height() * PAGE_COUNT as f32
    }

    /// Scale factor fitting a source image of the given pixel size across the pages
    pub fn scale_for(&self, source_width: u32, source_height: u32) -> f32 {
        compute_scale(
            source_width,
            source_height,
            self.usable_width(),
            self.usable_height(),
        )
    }

    /// Placement of a raster of the given pixel size, scaled and centered in the usable area
    pub fn place(&self, width_px: u32, height_px: u32, scale: f32) -> Placement {
        let width = width_px as f32 * scale;
        let height = height_px as f32 * scale;
        let (x, y) = center_in_usable_area(
            width,
            height,
            self.usable_width(),
            self.usable_height(),
            self.margin,
        );
        trace!("Placed {}x{} px at ({}, {}) size {}x{}", width_px, height_px, x, y, width, height);
        Placement {
            x,
            y,
            width,
            height,
        }
    }
}

/// Position and size of a drawn raster, in page points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Uniform scale fitting the source width on one page and its height across two pages
pub fn compute_scale(
    source_width: u32,
    source_height: u32,
    usable_width: f32,
    usable_height: f32,
) -> f32 {
    let scale_width = usable_width / source_width as f32;
    let scale_height = (PAGE_COUNT as f32 * usable_height) / source_height as f32;
    scale_width.min(scale_height)
}

/// Lower-left origin that centers a box of the given size in the usable area
pub fn center_in_usable_area(
    width: f32,
    height: f32,
    usable_width: f32,
    usable_height: f32,
    margin: f32,
) -> (f32, f32) {
    (
        margin + (usable_width - width) / 2.0,
        margin + (usable_height - height) / 2.0,
    )
}
