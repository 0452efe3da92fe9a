//! Presence actions - the state machine itself.
//!
//! Each action validates against current store state, applies writes in a
//! fixed order (maker row first, then station row), then broadcasts.

pub mod create_violation;
pub mod enter_station;
pub mod leave_station;
pub mod reset_system;
pub mod shop_state;
pub mod toggle_presence;

pub use create_violation::create_violation;
pub use enter_station::enter_station;
pub use leave_station::leave_station;
pub use reset_system::reset_system;
pub use shop_state::shop_state;
pub use toggle_presence::toggle_presence;
