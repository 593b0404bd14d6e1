use image::{imageops, GrayImage, Luma};
use qrcode::QrCode;

use crate::error::DeckError;

/// Edge length of the rendered QR raster, quiet zone included.
pub const QR_SIZE: u32 = 220;

/// Encode `text` as a QR code and rasterize it to a `QR_SIZE` square.
pub fn render_qr(text: &str) -> Result<GrayImage, DeckError> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| DeckError::Render(format!("Failed to encode QR payload: {}", e)))?;

    let modules = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(1, 1)
        .build();

    Ok(imageops::resize(
        &modules,
        QR_SIZE,
        QR_SIZE,
        imageops::FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str =
        "BBX-DECK\n\nTorneo: Cup1\nBlader: Ana\nFecha: 01-01-2024\n\nCombo 1: X | Y | Z";

    #[test]
    fn test_qr_is_fixed_square() {
        let qr = render_qr(PAYLOAD).unwrap();
        assert_eq!(qr.dimensions(), (QR_SIZE, QR_SIZE));
    }

    #[test]
    fn test_qr_has_light_quiet_zone_and_dark_modules() {
        let qr = render_qr(PAYLOAD).unwrap();
        assert_eq!(qr.get_pixel(0, 0)[0], 255);
        assert!(qr.pixels().any(|p| p[0] == 0));
    }

    #[test]
    fn test_qr_decodes_back_to_payload() {
        let qr = render_qr(PAYLOAD).unwrap();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            qr.width() as usize,
            qr.height() as usize,
            |x, y| qr.get_pixel(x as u32, y as u32)[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_meta, content) = grids[0].decode().unwrap();
        assert_eq!(content, PAYLOAD);
    }

    #[test]
    fn test_oversized_payload_is_render_error() {
        let huge = "x".repeat(10_000);
        let err = render_qr(&huge).unwrap_err();
        assert!(matches!(err, DeckError::Render(_)));
    }
}
