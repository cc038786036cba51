//! Document skeleton: catalog, page tree and shared font resource

use crate::Result;
use crate::constants::CAPTION_FONT_RESOURCE;
use crate::error::PaginatorError;
use crate::layout::PageLayout;
use crate::style::CaptionStyle;
use crate::xobject;
use lopdf::{Document, Object, ObjectId, dictionary};
use tracing::{debug, trace};

/// A PDF document under construction with a single page tree
pub struct PageDocument {
    pub doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    layout: PageLayout,
}

impl PageDocument {
    /// Create an empty document whose pages all share `layout`
    pub fn new(layout: PageLayout, caption: &CaptionStyle) -> Self {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![],
            "Count" => 0,
            "MediaBox" => media_box(&layout),
        });

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(caption.font_name.as_bytes().to_vec()),
            "Encoding" => "WinAnsiEncoding",
        });

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        debug!("Created document with page tree {:?}", pages_id);
        Self {
            doc,
            pages_id,
            font_id,
            layout,
        }
    }

    /// Append a page showing the given image XObject and return the page ID
    pub fn add_page(&mut self, image_id: ObjectId) -> Result<ObjectId> {
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box(&self.layout),
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    CAPTION_FONT_RESOURCE => self.font_id,
                },
                "XObject" => dictionary! {
                    xobject::resource_name(image_id) => image_id,
                },
            },
        });

        match self.doc.get_object_mut(self.pages_id) {
            Ok(Object::Dictionary(pages)) => {
                if let Ok(Object::Array(kids)) = pages.get_mut(b"Kids") {
                    kids.push(page_id.into());
                }
                let count = pages.get(b"Count").and_then(Object::as_i64).unwrap_or(0);
                pages.set("Count", Object::Integer(count + 1));
            }
            _ => return Err(PaginatorError::PageNotFound(self.pages_id)),
        }

        trace!("Created page {:?}", page_id);
        Ok(page_id)
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Compress content streams and return the finished document
    pub fn finish(mut self) -> Document {
        self.doc.compress();
        self.doc
    }
}

fn media_box(layout: &PageLayout) -> Vec<Object> {
    vec![
        0.into(),
        0.into(),
        layout.page_width.into(),
        layout.page_height.into(),
    ]
}
