//! Conversion of in-memory rasters into PDF image XObjects

use crate::Result;
use crate::error::PaginatorError;
use image::DynamicImage;
use lopdf::{Document, ObjectId, Stream, dictionary};
use tracing::{debug, trace};

/// Embed a raster as a Flate-compressed image XObject and return its object ID.
///
/// Pixels are stored as 8-bit DeviceRGB. An alpha channel, when present, is
/// embedded as a DeviceGray soft mask.
pub fn embed_image(doc: &mut Document, image: &DynamicImage) -> Result<ObjectId> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(PaginatorError::DimensionError(format!(
            "Cannot embed an empty {}x{} raster",
            width, height
        )));
    }

    let mut image_dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };

    if image.color().has_alpha() {
        let alpha: Vec<u8> = image.to_rgba8().pixels().map(|p| p[3]).collect();
        let mut mask = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            alpha,
        );
        mask.compress()?;
        let mask_id = doc.add_object(mask);
        trace!("Embedded soft mask {:?}", mask_id);
        image_dict.set("SMask", mask_id);
    }

    let mut stream = Stream::new(image_dict, image.to_rgb8().into_raw());
    stream.compress()?;
    let image_id = doc.add_object(stream);

    debug!("Embedded {}x{} image as {:?}", width, height, image_id);
    Ok(image_id)
}

/// Resource name under which an XObject is registered on its page
pub fn resource_name(id: ObjectId) -> String {
    format!("Im{}", id.0)
}
