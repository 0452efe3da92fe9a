//! Violation action - record a safety violation and flag the offending maker

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domains::presence::data::{MakerData, StationData, ViolationData, ViolationReport};
use crate::domains::presence::error::PresenceError;
use crate::domains::presence::events::ShopEvent;
use crate::domains::presence::models::{Maker, MakerPresence, MakerStatus};
use crate::kernel::ServerDeps;

/// Record a safety violation reported by a station camera.
///
/// This action:
/// 1. Resolves the station and requires it to be in use with an active maker
/// 2. Optionally refuses a duplicate while one is already open at the
///    station (`dedup_violations`)
/// 3. Inserts the violation and flips the maker to `violation`
/// 4. Arms the delayed snap-back to `active`; a repeat report re-arms it
///
/// Broadcasts `violation_detected` immediately and `maker_status_updated`
/// when the timer fires.
pub async fn create_violation(
    deps: &ServerDeps,
    station_id: Uuid,
    violation_type: &str,
    image_url: Option<&str>,
) -> Result<ViolationReport, PresenceError> {
    let station = deps
        .store
        .find_station(station_id)
        .await?
        .ok_or_else(|| {
            PresenceError::NotFound(format!("Station with id '{station_id}' not found"))
        })?;

    let status = deps
        .store
        .station_status(station_id)
        .await?
        .ok_or_else(|| PresenceError::InvalidState("No status record for this station".into()))?;

    if !status.in_use {
        return Err(PresenceError::InvalidState(
            "Station is not currently in use".into(),
        ));
    }

    let maker_id = status
        .active_maker_id
        .ok_or_else(|| PresenceError::InvalidState("No active maker at this station".into()))?;

    let maker = deps
        .store
        .find_maker(maker_id)
        .await?
        .ok_or_else(|| PresenceError::NotFound("Maker not found".into()))?;

    if deps.presence.dedup_violations {
        if let Some(existing) = deps.store.open_violation_at_station(station_id).await? {
            debug!(
                station = %station.name,
                existing_violation_id = %existing.id,
                "duplicate violation refused"
            );
            return Err(PresenceError::DuplicateViolation {
                existing_violation_id: existing.id,
            });
        }
    }

    let violation = deps
        .store
        .insert_violation(maker.id, station_id, violation_type, image_url)
        .await?;

    deps.store
        .upsert_maker_status(MakerStatus::violation_at(maker.id, station_id))
        .await?;

    arm_recovery(deps, &maker, station_id).await;

    let violation_data = ViolationData::from(&violation);
    let maker_data = MakerData::with_status(&maker, MakerPresence::Violation);
    let station_data = StationData::new(&station, true);
    deps.events.publish(ShopEvent::ViolationDetected {
        violation: violation_data.clone(),
        maker: maker_data.clone(),
        station: station_data.clone(),
    });
    warn!(
        maker_id = %maker.id,
        station = %station.name,
        violation_type = %violation.violation_type,
        "violation recorded"
    );

    Ok(ViolationReport {
        violation: violation_data,
        maker: maker_data,
        station: station_data,
    })
}

/// Arm (or re-arm) the delayed snap-back to `active` for a maker.
///
/// Check-out does not cancel this timer. When it fires it upserts, so a
/// maker who left mid-violation comes back as `active` at the station.
async fn arm_recovery(deps: &ServerDeps, maker: &Maker, station_id: Uuid) {
    let store = deps.store.clone();
    let events = deps.events.clone();
    let maker = maker.clone();

    deps.resets
        .arm(maker.id, deps.presence.violation_reset_delay, async move {
            match store
                .upsert_maker_status(MakerStatus::active_at(maker.id, station_id))
                .await
            {
                Ok(_) => {
                    info!(
                        maker_id = %maker.id,
                        display_name = %maker.display_name,
                        "violation flag cleared, maker active again"
                    );
                    events.publish(ShopEvent::MakerStatusUpdated {
                        id: maker.id,
                        status: MakerPresence::Active,
                        display_name: maker.display_name,
                    });
                }
                Err(e) => {
                    error!(maker_id = %maker.id, error = %e, "failed to clear violation flag");
                }
            }
        })
        .await;
}
