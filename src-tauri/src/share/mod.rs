//! Shareable deck card: QR code of the share text with captions and
//! watermark, offered as a PNG download or a print-ready PDF.

pub mod caption;
pub mod compose;
pub mod print;
pub mod qr;

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use tracing::info;

use crate::error::DeckError;

pub use compose::compose_share_image;
pub use print::print_document;
pub use qr::{render_qr, QR_SIZE};

/// File name offered for the downloaded card.
pub const DOWNLOAD_FILE_NAME: &str = "bbx-deck-qr.png";

/// A rendered card ready for the webview.
#[derive(Debug, Clone, Serialize)]
pub struct ShareImage {
    pub file_name: String,
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Encode an image as PNG bytes.
fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, DeckError> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// `data:` URL for PNG bytes.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// The bare QR code for on-page preview.
pub fn qr_preview(text: &str) -> Result<String, DeckError> {
    let qr = render_qr(text)?;
    let png = encode_png(&DynamicImage::ImageLuma8(qr))?;
    Ok(png_data_url(&png))
}

/// The composed card as a downloadable PNG.
pub fn share_image(text: &str, name: &str, date: &str) -> Result<ShareImage, DeckError> {
    let card = compose_share_image(&render_qr(text)?, name, date);
    let (width, height) = card.dimensions();
    let png = encode_png(&DynamicImage::ImageRgba8(card))?;
    info!("Composed share card {}x{} for '{}'", width, height, name);

    Ok(ShareImage {
        file_name: DOWNLOAD_FILE_NAME.to_string(),
        data_url: png_data_url(&png),
        width,
        height,
    })
}

/// The composed card as a base64-encoded, auto-printing PDF.
pub fn share_print_document(text: &str, name: &str, date: &str) -> Result<String, DeckError> {
    let card = compose_share_image(&render_qr(text)?, name, date);
    let pdf = print_document(&card)?;
    Ok(STANDARD.encode(pdf))
}
