use thiserror::Error;

/// Shown to the user when a history export finds nothing to write.
pub const EMPTY_HISTORY_MESSAGE: &str = "No hay mazos guardados en historial.";

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{}", EMPTY_HISTORY_MESSAGE)]
    EmptyHistory,
}

impl From<DeckError> for String {
    fn from(err: DeckError) -> Self {
        err.to_string()
    }
}

impl From<rusqlite::Error> for DeckError {
    fn from(err: rusqlite::Error) -> Self {
        DeckError::Storage(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for DeckError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        DeckError::Export(err.to_string())
    }
}

impl From<image::ImageError> for DeckError {
    fn from(err: image::ImageError) -> Self {
        DeckError::Render(err.to_string())
    }
}
