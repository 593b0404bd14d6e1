pub mod config;
pub mod deck;
pub mod export;
pub mod share;
