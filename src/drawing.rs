//! PDF drawing operations for image halves and captions

use crate::Result;
use crate::constants::CAPTION_FONT_RESOURCE;
use crate::error::PaginatorError;
use crate::layout::Placement;
use crate::style::CaptionStyle;
use lopdf::{
    Document, Object, ObjectId,
    content::{Content, Operation},
};
use tracing::{debug, trace};

/// Generate operations painting an image XObject into the given placement
pub fn image_operations(resource_name: &str, placement: &Placement) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                placement.width.into(),
                0.into(),
                0.into(),
                placement.height.into(),
                placement.x.into(),
                placement.y.into(),
            ],
        ),
        Operation::new("Do", vec![Object::Name(resource_name.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}

/// Generate operations drawing a caption with its baseline starting at `origin`
pub fn caption_operations(text: &str, style: &CaptionStyle, origin: (f32, f32)) -> Vec<Operation> {
    if text.is_empty() {
        return Vec::new();
    }

    let (x, y) = origin;
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "rg",
            vec![style.color.r.into(), style.color.g.into(), style.color.b.into()],
        ),
        Operation::new(
            "Tf",
            vec![
                Object::Name(CAPTION_FONT_RESOURCE.as_bytes().to_vec()),
                style.font_size.into(),
            ],
        ),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Encode operations and append them to a page's content
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    if doc.get_dictionary(page_id).is_err() {
        return Err(PaginatorError::PageNotFound(page_id));
    }

    for op in &operations {
        trace!("Operation: {} with operands: {:?}", op.operator, op.operands);
    }

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}
