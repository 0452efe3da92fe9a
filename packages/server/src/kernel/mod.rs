//! Kernel module - server infrastructure and dependencies.

pub mod cooldown;
pub mod deps;
pub mod event_hub;
pub mod reset_scheduler;
pub mod test_dependencies;
pub mod traits;

pub use cooldown::CooldownTracker;
pub use deps::{PresenceConfig, ServerDeps};
pub use event_hub::EventHub;
pub use reset_scheduler::ResetScheduler;
pub use test_dependencies::InMemoryShopStore;
pub use traits::*;
