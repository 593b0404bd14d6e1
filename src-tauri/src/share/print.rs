use image::{DynamicImage, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::info;

use crate::error::DeckError;

/// Build a single-page PDF whose page is exactly the image's pixel size,
/// with the image filling the page. Opening the document starts printing.
pub fn print_document(img: &RgbaImage) -> Result<Vec<u8>, DeckError> {
    let (width, height) = img.dimensions();
    let rgb = DynamicImage::ImageRgba8(img.clone()).to_rgb8().into_raw();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb,
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Integer(i64::from(width)),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(i64::from(height)),
                    Object::Integer(0),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_bytes = content
        .encode()
        .map_err(|e| DeckError::Render(format!("Failed to encode page content: {}", e)))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content_bytes));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        },
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(i64::from(width)),
            Object::Integer(i64::from(height)),
        ],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
        "OpenAction" => dictionary! {
            "S" => "Named",
            "N" => "Print",
        },
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| DeckError::Render(format!("Failed to write print document: {}", e)))?;

    info!("Built {}x{} print document ({} bytes)", width, height, bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_print_document_is_pdf() {
        let img = RgbaImage::from_pixel(220, 300, Rgba([255, 255, 255, 255]));
        let bytes = print_document(&img).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_single_page_sized_to_image() {
        let img = RgbaImage::from_pixel(220, 300, Rgba([255, 255, 255, 255]));
        let bytes = print_document(&img).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let dims: Vec<i64> = media_box.iter().map(|o| o.as_i64().unwrap()).collect();
        assert_eq!(dims, vec![0, 0, 220, 300]);
    }
}
