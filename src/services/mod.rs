pub mod api;
pub mod card;
pub mod library;
