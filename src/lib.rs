//! Split a raster diagram across two large-format PDF pages, built on lopdf
//!
//! The source image is scaled uniformly so its width fits one page and its
//! height fits two stacked pages, then cut at its midpoint row. The top half
//! is centered on page 1 and the bottom half on page 2, each with a
//! page-number caption near the bottom-right corner.
//!
//! ```no_run
//! use diagram_paginator::{PageLayout, Paginator};
//!
//! let report = Paginator::new(PageLayout::default())
//!     .run("class-diagram.png", "class-diagram-a3.pdf")?;
//! println!("scale {:.4}", report.scale);
//! # Ok::<(), diagram_paginator::PaginatorError>(())
//! ```

pub mod constants;
mod document;
mod drawing;
pub mod error;
pub mod layout;
pub mod paginator;
pub mod split;
pub mod style;
mod xobject;

pub use error::{PaginatorError, Result};
pub use layout::{Orientation, PageLayout, PageSize, Placement, compute_scale};
pub use paginator::{PaginationReport, Paginator, load, save};
pub use split::{HalfPosition, ImageHalf, split_vertically};
pub use style::{CaptionStyle, Color};

/// Paginate `input` into `output` with the default A3 landscape layout
pub fn paginate(
    input: impl AsRef<std::path::Path>,
    output: impl AsRef<std::path::Path>,
) -> Result<PaginationReport> {
    Paginator::default().run(input, output)
}
