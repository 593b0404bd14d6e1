use image::{imageops, DynamicImage, GrayImage, Rgba, RgbaImage};

use super::caption::{draw_text_centered, TextStyle};

/// Space above the QR holding the captions.
pub const PADDING_TOP: u32 = 60;
/// Space below the QR.
pub const PADDING_BOTTOM: u32 = 20;

pub const NAME_BASELINE: i64 = 28;
pub const DATE_BASELINE: i64 = 50;

/// Mark stamped over the center of the code.
pub const WATERMARK: &str = "FBA";
const WATERMARK_DROP: i64 = 8;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

const NAME_STYLE: TextStyle = TextStyle {
    size: 18,
    bold: true,
    color: Rgba([0, 0, 0, 255]),
};

const DATE_STYLE: TextStyle = TextStyle {
    size: 14,
    bold: false,
    color: Rgba([0, 0, 0, 255]),
};

// Black at 60% opacity
const WATERMARK_STYLE: TextStyle = TextStyle {
    size: 24,
    bold: true,
    color: Rgba([0, 0, 0, 153]),
};

/// Compose the shareable card: captions on top, the QR below them and the
/// watermark over the middle of the code. Empty captions are skipped.
pub fn compose_share_image(qr: &GrayImage, name: &str, date: &str) -> RgbaImage {
    let qr_size = qr.width();
    let mut canvas = RgbaImage::from_pixel(qr_size, qr_size + PADDING_TOP + PADDING_BOTTOM, WHITE);
    let center_x = i64::from(qr_size) / 2;

    if !name.is_empty() {
        draw_text_centered(&mut canvas, name, center_x, NAME_BASELINE, &NAME_STYLE);
    }
    if !date.is_empty() {
        draw_text_centered(&mut canvas, date, center_x, DATE_BASELINE, &DATE_STYLE);
    }

    let qr_rgba = DynamicImage::ImageLuma8(qr.clone()).to_rgba8();
    imageops::replace(&mut canvas, &qr_rgba, 0, i64::from(PADDING_TOP));

    let watermark_baseline = i64::from(PADDING_TOP) + i64::from(qr_size) / 2 + WATERMARK_DROP;
    draw_text_centered(
        &mut canvas,
        WATERMARK,
        center_x,
        watermark_baseline,
        &WATERMARK_STYLE,
    );

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn blank_qr(size: u32) -> GrayImage {
        GrayImage::from_pixel(size, size, Luma([255]))
    }

    fn dark_pixels_in_rows(img: &RgbaImage, rows: std::ops::Range<u32>) -> usize {
        img.enumerate_pixels()
            .filter(|(_, y, p)| rows.contains(y) && p[0] < 200)
            .count()
    }

    #[test]
    fn test_canvas_dimensions() {
        let img = compose_share_image(&blank_qr(220), "Ana", "01-01-2024");
        assert_eq!(img.dimensions(), (220, 300));
    }

    #[test]
    fn test_captions_land_in_top_padding() {
        let img = compose_share_image(&blank_qr(220), "Ana", "01-01-2024");
        assert!(dark_pixels_in_rows(&img, 0..30) > 0);
        assert!(dark_pixels_in_rows(&img, 30..PADDING_TOP) > 0);
    }

    #[test]
    fn test_empty_captions_leave_padding_white() {
        let img = compose_share_image(&blank_qr(220), "", "");
        assert_eq!(dark_pixels_in_rows(&img, 0..PADDING_TOP), 0);
        assert_eq!(dark_pixels_in_rows(&img, 280..300), 0);
    }

    #[test]
    fn test_qr_drawn_below_padding() {
        let mut qr = blank_qr(220);
        qr.put_pixel(0, 0, Luma([0]));
        let img = compose_share_image(&qr, "", "");
        assert_eq!(*img.get_pixel(0, PADDING_TOP), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, PADDING_TOP - 1), WHITE);
    }

    #[test]
    fn test_watermark_is_translucent_and_centered() {
        let img = compose_share_image(&blank_qr(220), "", "");
        let marked: Vec<_> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] < 255)
            .collect();
        assert!(!marked.is_empty());
        // Translucent black over white, never solid
        assert!(marked.iter().all(|(_, _, p)| p[0] > 90));
        // Cell bottom sits 8px below the QR midline
        assert!(marked.iter().all(|(_, y, _)| *y < 60 + 110 + 8 && *y >= 60 + 110 + 8 - 18));
        assert!(marked.iter().all(|(x, _, _)| *x > 70 && *x < 150));
    }
}
