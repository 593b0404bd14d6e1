//! Tauri commands for the shareable QR card.

use crate::share::{self, ShareImage};

/// Bare QR code of the share text as a PNG data URL.
#[tauri::command]
pub fn render_qr_preview(text: String) -> Result<String, String> {
    Ok(share::qr_preview(&text)?)
}

/// Composed card (captions, QR, watermark) for download.
#[tauri::command]
pub fn compose_share_image(text: String, name: String, date: String) -> Result<ShareImage, String> {
    Ok(share::share_image(&text, &name, &date)?)
}

/// Composed card as a base64 PDF that prints when opened.
#[tauri::command]
pub fn print_share_image(text: String, name: String, date: String) -> Result<String, String> {
    Ok(share::share_print_document(&text, &name, &date)?)
}
