use leptos::prelude::*;

pub const DEFAULT_THEME: &str = "dark";

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub set_theme: WriteSignal<String>,
}

/// The other theme; anything unrecognised toggles to dark.
pub fn toggled(theme: &str) -> &'static str {
    match theme {
        "dark" => "light",
        _ => "dark",
    }
}

/// Header button label for the current theme.
pub fn toggle_label(theme: &str) -> &'static str {
    match theme {
        "light" => "\u{2600}\u{fe0f} Light",
        _ => "\u{1f319} Dark",
    }
}

/// Apply the theme by setting the `data-theme` attribute on `<html>`.
pub fn apply_theme(theme: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                let value = if theme == "light" { "light" } else { "dark" };
                let _ = html.set_attribute("data-theme", value);
            }
        }
    }
}
