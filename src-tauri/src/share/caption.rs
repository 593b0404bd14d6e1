//! Caption text rasterized from the embedded 8x8 bitmap font.
//!
//! Glyphs are scaled with nearest-neighbour sampling so a requested font size
//! maps to a square cell of `glyph_px(size)` pixels. Characters outside the
//! basic and Latin-1 tables are drawn as `?`.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Pixel, Rgba, RgbaImage};

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Font size in CSS pixels.
    pub size: u32,
    pub bold: bool,
    pub color: Rgba<u8>,
}

/// Pixel edge of one glyph cell for a font size. A glyph occupies roughly
/// three quarters of the em box.
pub fn glyph_px(size: u32) -> u32 {
    ((size * 3 + 2) / 4).max(1)
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Width in pixels of `text` rendered with `style`.
pub fn text_width(text: &str, style: &TextStyle) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    chars * glyph_px(style.size) + u32::from(style.bold)
}

/// Draw `text` horizontally centered on `center_x` with its cell bottom on
/// `baseline`. Pixels falling outside the canvas are clipped.
pub fn draw_text_centered(
    canvas: &mut RgbaImage,
    text: &str,
    center_x: i64,
    baseline: i64,
    style: &TextStyle,
) {
    let cell = glyph_px(style.size);
    let width = text_width(text, style);
    if width == 0 {
        return;
    }

    // Coverage mask first so bold strokes blend each pixel exactly once
    let mut mask = vec![false; (width * cell) as usize];
    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c);
        let origin = i as u32 * cell;
        for ty in 0..cell {
            let bits = rows[(ty * 8 / cell) as usize];
            for tx in 0..cell {
                if bits >> (tx * 8 / cell) & 1 == 1 {
                    let x = origin + tx;
                    mask[(ty * width + x) as usize] = true;
                    if style.bold {
                        mask[(ty * width + x + 1) as usize] = true;
                    }
                }
            }
        }
    }

    let left = center_x - i64::from(width) / 2;
    let top = baseline - i64::from(cell);
    for ty in 0..cell {
        for tx in 0..width {
            if !mask[(ty * width + tx) as usize] {
                continue;
            }
            let x = left + i64::from(tx);
            let y = top + i64::from(ty);
            if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height())
            {
                continue;
            }
            canvas.get_pixel_mut(x as u32, y as u32).blend(&style.color);
        }
    }
}
