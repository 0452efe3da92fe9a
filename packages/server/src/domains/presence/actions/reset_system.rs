//! System reset action - wipe all live presence state

use tracing::info;

use crate::domains::presence::data::ResetSummary;
use crate::domains::presence::error::PresenceError;
use crate::domains::presence::events::ShopEvent;
use crate::kernel::ServerDeps;

/// Clear every status row and violation. The roster survives.
///
/// Pending violation timers are not cancelled; they upsert when they fire,
/// so a reset during an open violation can re-create that maker's row.
///
/// Broadcasts `system_reset`.
pub async fn reset_system(deps: &ServerDeps) -> Result<ResetSummary, PresenceError> {
    info!("starting full system reset");

    let maker_statuses_cleared = deps.store.clear_maker_statuses().await?;
    let station_statuses_cleared = deps.store.clear_station_statuses().await?;
    let violations_cleared = deps.store.clear_violations().await?;

    deps.events.publish(ShopEvent::SystemReset {
        message: "System has been reset".to_string(),
    });
    info!(
        maker_statuses_cleared,
        station_statuses_cleared, violations_cleared, "system reset complete"
    );

    Ok(ResetSummary {
        maker_statuses_cleared,
        station_statuses_cleared,
        violations_cleared,
    })
}
