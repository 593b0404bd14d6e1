pub mod combo_card;
pub mod header;
pub mod qr_share;
