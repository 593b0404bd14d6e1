mod commands;
pub mod deck;
pub mod error;
pub mod export;
pub mod share;
pub mod store;

pub use deck::{Combo, ComboCount, ComboField, Deck};
pub use error::DeckError;
pub use store::DeckStore;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_theme,
            commands::config::set_theme,
            commands::deck::save_deck,
            commands::deck::list_tournaments,
            commands::deck::list_decks,
            commands::export::export_session_decks,
            commands::export::export_history,
            commands::share::render_qr_preview,
            commands::share::compose_share_image,
            commands::share::print_share_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
