//! Presence models - SQL persistence layer.
//!
//! Roster rows (makers, stations) are seeded out of band; the server only
//! reads them. Status rows (maker_status, station_status) and violations are
//! owned by the presence state machine.

pub mod maker;
pub mod maker_status;
pub mod station;
pub mod station_status;
pub mod violation;

pub use maker::Maker;
pub use maker_status::{MakerPresence, MakerStatus};
pub use station::Station;
pub use station_status::StationStatus;
pub use violation::Violation;
