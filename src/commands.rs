use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::deck::Deck;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| "Unknown error".to_string())
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SaveDeckArgs<'a> {
    deck: &'a Deck,
}

#[derive(Serialize)]
struct ExportDecksArgs<'a> {
    decks: &'a [Deck],
}

#[derive(Serialize)]
struct ShareArgs<'a> {
    text: &'a str,
    name: &'a str,
    date: &'a str,
}

#[derive(Serialize)]
struct PreviewArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct SetThemeArgs<'a> {
    theme: &'a str,
}

// -- Types matching backend structs --

/// One tournament and its saved decks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TournamentDecks {
    pub tournament: String,
    pub decks: Vec<Deck>,
}

/// Rendered share card.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShareImage {
    pub file_name: String,
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

// -- Typed invoke helpers --

async fn call<T: for<'de> Deserialize<'de>>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn no_args() -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(&serde_json::json!({})).map_err(|e| e.to_string())
}

/// Append a deck to the store. Returns the decks now saved for its tournament.
pub async fn save_deck(deck: &Deck) -> Result<usize, String> {
    let args = serde_wasm_bindgen::to_value(&SaveDeckArgs { deck }).map_err(|e| e.to_string())?;
    call("save_deck", args).await
}

pub async fn list_tournaments() -> Result<Vec<String>, String> {
    call("list_tournaments", no_args()?).await
}

pub async fn list_decks() -> Result<Vec<TournamentDecks>, String> {
    call("list_decks", no_args()?).await
}

/// Write the session workbook. `None` means nothing was exported.
pub async fn export_session_decks(decks: &[Deck]) -> Result<Option<String>, String> {
    let args =
        serde_wasm_bindgen::to_value(&ExportDecksArgs { decks }).map_err(|e| e.to_string())?;
    call("export_session_decks", args).await
}

pub async fn export_history() -> Result<String, String> {
    call("export_history", no_args()?).await
}

pub async fn render_qr_preview(text: &str) -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&PreviewArgs { text }).map_err(|e| e.to_string())?;
    call("render_qr_preview", args).await
}

pub async fn compose_share_image(text: &str, name: &str, date: &str) -> Result<ShareImage, String> {
    let args = serde_wasm_bindgen::to_value(&ShareArgs { text, name, date })
        .map_err(|e| e.to_string())?;
    call("compose_share_image", args).await
}

/// Base64 PDF of the share card.
pub async fn print_share_image(text: &str, name: &str, date: &str) -> Result<String, String> {
    let args = serde_wasm_bindgen::to_value(&ShareArgs { text, name, date })
        .map_err(|e| e.to_string())?;
    call("print_share_image", args).await
}

pub async fn get_theme() -> Result<String, String> {
    call("get_theme", no_args()?).await
}

pub async fn set_theme(theme: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SetThemeArgs { theme }).map_err(|e| e.to_string())?;

    invoke("set_theme", args)
        .await
        .map(|_| ())
        .map_err(js_error)
}
