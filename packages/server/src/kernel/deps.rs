//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container passed to all domain
//! actions. The store is a trait object so tests can swap in an in-memory
//! implementation.

use std::sync::Arc;
use std::time::Duration;

use crate::kernel::{BaseShopStore, CooldownTracker, EventHub, ResetScheduler};

// =============================================================================
// PresenceConfig
// =============================================================================

/// Timing and policy knobs for the presence state machine.
#[derive(Debug, Clone)]
pub struct PresenceConfig {
    /// How long after check-in the toggle refuses to check the maker back out.
    pub leave_cooldown: Duration,
    /// How long a maker stays in `violation` before snapping back to `active`.
    pub violation_reset_delay: Duration,
    /// Refuse a second violation while one is already open at the station.
    pub dedup_violations: bool,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            leave_cooldown: Duration::from_secs(10),
            violation_reset_delay: Duration::from_secs(15),
            dedup_violations: false,
        }
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain actions.
///
/// Cooldowns and pending reset timers live here rather than in globals, so
/// every server built from its own deps keeps its own presence state.
#[derive(Clone)]
pub struct ServerDeps {
    pub store: Arc<dyn BaseShopStore>,
    pub events: EventHub,
    pub cooldowns: CooldownTracker,
    pub resets: ResetScheduler,
    pub presence: PresenceConfig,
}

impl ServerDeps {
    /// Create new ServerDeps around a store, with fresh in-process state
    pub fn new(store: Arc<dyn BaseShopStore>, presence: PresenceConfig) -> Self {
        Self {
            store,
            events: EventHub::new(),
            cooldowns: CooldownTracker::new(),
            resets: ResetScheduler::new(),
            presence,
        }
    }
}
