//! Splitting a source image into top and bottom halves

use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// Which half of the source image a raster holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfPosition {
    Top,
    Bottom,
}

impl HalfPosition {
    /// One-based page number the half is rendered on
    pub fn page_number(self) -> u32 {
        match self {
            Self::Top => 1,
            Self::Bottom => 2,
        }
    }

    /// Caption text printed on the half's page
    pub fn caption(self) -> String {
        let label = match self {
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        };
        format!(
            "Page {} of {} ({})",
            self.page_number(),
            crate::constants::PAGE_COUNT,
            label
        )
    }
}

/// One vertical segment of the source image
#[derive(Debug, Clone)]
pub struct ImageHalf {
    pub position: HalfPosition,
    pub image: DynamicImage,
}

impl ImageHalf {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Row at which the image is cut: rows above it form the top half
pub fn split_row(height: u32) -> u32 {
    height / 2
}

/// Split an image at its midpoint row.
///
/// The top half holds rows `[0, height / 2)` and the bottom half the rest, so
/// for odd heights the bottom half is one row taller.
pub fn split_vertically(image: &DynamicImage) -> (ImageHalf, ImageHalf) {
    let (width, height) = image.dimensions();
    let split = split_row(height);

    let top = image.crop_imm(0, 0, width, split);
    let bottom = image.crop_imm(0, split, width, height - split);

    debug!(
        "Split {}x{} image at row {}: top {}x{}, bottom {}x{}",
        width,
        height,
        split,
        top.width(),
        top.height(),
        bottom.width(),
        bottom.height()
    );

    (
        ImageHalf {
            position: HalfPosition::Top,
            image: top,
        },
        ImageHalf {
            position: HalfPosition::Bottom,
            image: bottom,
        },
    )
}
