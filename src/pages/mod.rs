pub mod deck_editor;
pub mod history;
