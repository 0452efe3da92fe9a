//! Presence domain - who is in the shop, where, and in what state.

pub mod actions;
pub mod data;
pub mod error;
pub mod events;
pub mod models;
pub mod store;

pub use error::PresenceError;
pub use events::ShopEvent;
pub use store::PostgresShopStore;
