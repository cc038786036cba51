//! The two-page image paginator

use crate::Result;
use crate::document::PageDocument;
use crate::drawing;
use crate::error::PaginatorError;
use crate::layout::{PageLayout, Placement};
use crate::split::{self, ImageHalf};
use crate::style::CaptionStyle;
use crate::xobject;
use image::{DynamicImage, GenericImageView};
use lopdf::{Document, ObjectId};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Summary of a completed pagination
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationReport {
    pub source_size: (u32, u32),
    pub scale: f32,
    pub top: Placement,
    pub bottom: Placement,
    pub page_count: usize,
    pub output: PathBuf,
}

/// Splits a source image across two pages of a fixed layout
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    layout: PageLayout,
    caption: CaptionStyle,
}

impl Paginator {
    /// Create a paginator for the given page layout with default captions
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            caption: CaptionStyle::default(),
        }
    }

    /// Set the caption style
    pub fn with_caption_style(mut self, caption: CaptionStyle) -> Self {
        self.caption = caption;
        self
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Load `input`, paginate it and write the PDF to `output`
    #[instrument(skip(self, input, output), fields(source = %input.as_ref().display()))]
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<PaginationReport> {
        let output = output.as_ref();
        let image = load(input.as_ref())?;
        let (mut doc, mut report) = self.render(&image)?;
        save(&mut doc, output)?;

        info!("PDF created successfully: {}", output.display());
        report.output = output.to_path_buf();
        Ok(report)
    }

    /// Build the two-page document for an already loaded image
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn render(&self, image: &DynamicImage) -> Result<(Document, PaginationReport)> {
        self.layout.validate()?;

        let (width, height) = image.dimensions();
        if width == 0 || height < 2 {
            return Err(PaginatorError::DimensionError(format!(
                "Image of {}x{} pixels cannot be split into two non-empty halves",
                width, height
            )));
        }

        info!("Original image size: {}x{}", width, height);
        info!(
            "Page size: {:.2}x{:.2} points",
            self.layout.page_width, self.layout.page_height
        );
        info!(
            "Usable area per page: {:.2}x{:.2} points",
            self.layout.usable_width(),
            self.layout.usable_height()
        );
        info!(
            "Total usable height for 2 pages: {:.2} points",
            self.layout.total_usable_height()
        );

        let scale = self.layout.scale_for(width, height);
        info!("Scale factor: {:.4}", scale);
        info!(
            "Scaled image size: {:.2}x{:.2} points",
            width as f32 * scale,
            height as f32 * scale
        );

        let (top, bottom) = split::split_vertically(image);
        info!(
            "Top half: {}x{}, Bottom half: {}x{}",
            top.width(),
            top.height(),
            bottom.width(),
            bottom.height()
        );

        let mut pages = PageDocument::new(self.layout, &self.caption);
        let top_placement = self.render_page(&mut pages, &top, scale)?;
        drop(top);
        let bottom_placement = self.render_page(&mut pages, &bottom, scale)?;
        drop(bottom);

        let page_count = pages.page_count();
        let report = PaginationReport {
            source_size: (width, height),
            scale,
            top: top_placement,
            bottom: bottom_placement,
            page_count,
            output: PathBuf::new(),
        };
        Ok((pages.finish(), report))
    }

    /// Draw one half, centered at `scale`, on a new page with its caption
    fn render_page(&self, pages: &mut PageDocument, half: &ImageHalf, scale: f32) -> Result<Placement> {
        let placement = self.layout.place(half.width(), half.height(), scale);
        let image_id: ObjectId = xobject::embed_image(&mut pages.doc, &half.image)?;
        let page_id = pages.add_page(image_id)?;

        let mut operations =
            drawing::image_operations(&xobject::resource_name(image_id), &placement);
        operations.extend(drawing::caption_operations(
            &half.position.caption(),
            &self.caption,
            self.caption.anchor(self.layout.page_width),
        ));
        drawing::add_operations_to_page(&mut pages.doc, page_id, operations)?;

        debug!(
            "Rendered {:?} half on page {} at ({:.2}, {:.2}) size {:.2}x{:.2}",
            half.position,
            half.position.page_number(),
            placement.x,
            placement.y,
            placement.width,
            placement.height
        );
        Ok(placement)
    }
}

/// Decode a raster image from disk
pub fn load(path: &Path) -> Result<DynamicImage> {
    debug!("Loading image {}", path.display());
    image::open(path).map_err(|source| PaginatorError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document to `path` atomically.
///
/// The PDF is staged in a temporary file next to `path` and renamed into place
/// once fully written; on any failure the staging file is removed on drop and
/// `path` is left untouched.
pub fn save(doc: &mut Document, path: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| PaginatorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::Builder::new()
        .prefix(".paginate-")
        .suffix(".pdf.part")
        .tempfile_in(dir)
        .map_err(write_error)?;
    debug!("Staging PDF in {}", staged.path().display());

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).map_err(write_error)?;
    staged.write_all(&buffer).map_err(write_error)?;
    staged.flush().map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;

    staged
        .persist(path)
        .map_err(|err| write_error(err.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use lopdf::content::Content;
    use std::fs;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 251) as u8, (y % 241) as u8, 128])
        });
        img.save(&path).unwrap();
        path
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn caption_on(doc: &Document, page_id: ObjectId) -> String {
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let tj = content
            .operations
            .iter()
            .find(|op| op.operator == "Tj")
            .unwrap();
        String::from_utf8(tj.operands[0].as_str().unwrap().to_vec()).unwrap()
    }

    fn image_matrix_on(doc: &Document, page_id: ObjectId) -> Vec<f32> {
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let cm = content
            .operations
            .iter()
            .find(|op| op.operator == "cm")
            .unwrap();
        cm.operands.iter().map(|o| o.as_float().unwrap()).collect()
    }

    fn media_box_of(doc: &Document, page_id: ObjectId) -> Vec<f32> {
        doc.get_dictionary(page_id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect()
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-2, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_reference_scenario_uses_one_scale_on_both_pages() {
        let paginator = Paginator::default();
        let image = DynamicImage::ImageRgb8(RgbImage::new(2000, 3000));
        let (doc, report) = paginator.render(&image).unwrap();

        assert_eq!(doc.get_pages().len(), 2);
        assert_eq!(report.page_count, 2);
        assert!((report.scale - 0.51326).abs() < 1e-5);
        assert!((report.top.width - 2000.0 * report.scale).abs() < 1e-3);
        assert!((report.top.height - 1500.0 * report.scale).abs() < 1e-3);
        assert!((report.bottom.height - 1500.0 * report.scale).abs() < 1e-3);
    }

    #[test]
    fn test_halves_are_centered() {
        let paginator = Paginator::default();
        let layout = *paginator.layout();
        let image = DynamicImage::ImageRgb8(RgbImage::new(900, 2001));
        let (_, report) = paginator.render(&image).unwrap();

        let cx = layout.margin + layout.usable_width() / 2.0;
        let cy = layout.margin + layout.usable_height() / 2.0;
        for p in [report.top, report.bottom] {
            assert!((p.x + p.width / 2.0 - cx).abs() < 1e-3);
            assert!((p.y + p.height / 2.0 - cy).abs() < 1e-3);
        }
        // Bottom half carries the extra row
        assert!((report.bottom.height - report.top.height - report.scale).abs() < 1e-3);
    }

    #[test]
    fn test_run_writes_two_page_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "diagram.png", 120, 301);
        let output = dir.path().join("diagram.pdf");

        let report = Paginator::default().run(&input, &output).unwrap();
        assert_eq!(report.output, output);
        assert_eq!(report.source_size, (120, 301));

        let doc = Document::load(&output).unwrap();
        let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
        assert_eq!(pages.len(), 2);

        assert_eq!(caption_on(&doc, pages[0]), "Page 1 of 2 (Top)");
        assert_eq!(caption_on(&doc, pages[1]), "Page 2 of 2 (Bottom)");

        for page_id in &pages {
            assert_close(&media_box_of(&doc, *page_id), &[0.0, 0.0, 1190.55, 841.89]);
        }

        // Both halves are drawn with the shared scale at their centered origin
        for (page_id, placement) in pages.iter().zip([report.top, report.bottom]) {
            assert_close(
                &image_matrix_on(&doc, *page_id),
                &[
                    placement.width,
                    0.0,
                    0.0,
                    placement.height,
                    placement.x,
                    placement.y,
                ],
            );
        }
        assert!((report.top.width - 120.0 * report.scale).abs() < 1e-3);
        assert!((report.top.height - 150.0 * report.scale).abs() < 1e-3);
        assert!((report.bottom.height - 151.0 * report.scale).abs() < 1e-3);

        // Only the input and the finished PDF remain
        assert_eq!(dir_entries(dir.path()), ["diagram.pdf", "diagram.png"]);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "diagram.png", 64, 99);
        let paginator = Paginator::default();

        let a = paginator.run(&input, dir.path().join("a.pdf")).unwrap();
        let b = paginator.run(&input, dir.path().join("b.pdf")).unwrap();
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.top, b.top);
        assert_eq!(a.bottom, b.bottom);

        for name in ["a.pdf", "b.pdf"] {
            let doc = Document::load(dir.path().join(name)).unwrap();
            assert_eq!(doc.get_pages().len(), 2);
        }
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let err = Paginator::default()
            .run(dir.path().join("missing.png"), &output)
            .unwrap_err();
        assert!(err.is_read_error());
        assert!(!output.exists());
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_undecodable_input_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("garbage.png");
        fs::write(&input, b"definitely not a png").unwrap();
        let output = dir.path().join("out.pdf");

        let err = Paginator::default().run(&input, &output).unwrap_err();
        assert!(err.is_read_error());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_output_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "diagram.png", 10, 10);
        let output = dir.path().join("no-such-dir").join("out.pdf");

        let err = Paginator::default().run(&input, &output).unwrap_err();
        assert!(err.is_write_error());
        assert!(!output.exists());
        assert_eq!(dir_entries(dir.path()), ["diagram.png"]);
    }

    #[test]
    fn test_save_writes_loadable_pdf_over_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        fs::write(&output, b"old").unwrap();

        let image = DynamicImage::ImageRgb8(RgbImage::new(30, 40));
        let (mut doc, _) = Paginator::default().render(&image).unwrap();
        save(&mut doc, &output).unwrap();

        let written = fs::read(&output).unwrap();
        assert!(written.starts_with(b"%PDF-"));
        assert_eq!(Document::load(&output).unwrap().get_pages().len(), 2);
        assert_eq!(dir_entries(dir.path()), ["out.pdf"]);
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("out.pdf");

        let image = DynamicImage::ImageRgb8(RgbImage::new(30, 40));
        let (mut doc, _) = Paginator::default().render(&image).unwrap();
        let err = save(&mut doc, &output).unwrap_err();
        assert!(err.is_write_error());
        assert!(dir_entries(dir.path()).is_empty());
    }

    #[test]
    fn test_failed_run_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        fs::write(&output, b"old").unwrap();

        let err = Paginator::default()
            .run(dir.path().join("missing.png"), &output)
            .unwrap_err();
        assert!(err.is_read_error());
        assert_eq!(fs::read(&output).unwrap(), b"old");
    }

    #[test]
    fn test_single_row_image_is_rejected() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(10, 1));
        let err = Paginator::default().render(&image).unwrap_err();
        assert!(matches!(err, PaginatorError::DimensionError(_)));
    }

    #[test]
    fn test_transparent_image_renders() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 0])));
        let (doc, report) = Paginator::default().render(&image).unwrap();
        assert_eq!(report.page_count, 2);
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_custom_layout_and_caption() {
        use crate::layout::{Orientation, PageSize};
        use crate::style::Color;

        let layout = PageLayout::new(PageSize::A4, Orientation::Portrait, 18.0).unwrap();
        let paginator = Paginator::new(layout)
            .with_caption_style(CaptionStyle::default().with_color(Color::gray(0.3)));
        let image = DynamicImage::ImageRgb8(RgbImage::new(400, 400));
        let (_, report) = paginator.render(&image).unwrap();

        assert!(report.top.width <= layout.usable_width() + 1e-3);
        assert!(report.top.height + report.bottom.height <= 2.0 * layout.usable_height() + 1e-3);
    }
}
