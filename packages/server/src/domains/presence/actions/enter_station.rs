//! Station enter action - claim a station for a maker

use tracing::{debug, info};
use uuid::Uuid;

use crate::domains::presence::data::{MakerData, StationData, StationEntry};
use crate::domains::presence::error::PresenceError;
use crate::domains::presence::events::ShopEvent;
use crate::domains::presence::models::{MakerPresence, MakerStatus, StationStatus};
use crate::kernel::ServerDeps;

/// Claim a station for a maker.
///
/// This action:
/// 1. Resolves the badge label and the station
/// 2. Refuses if the station is in use by a different maker; re-entry by
///    the same maker is idempotent
/// 3. Upserts the maker to `active` at the station, then the station to
///    occupied
///
/// Broadcasts `station_entered`.
pub async fn enter_station(
    deps: &ServerDeps,
    external_label: &str,
    station_id: Uuid,
) -> Result<StationEntry, PresenceError> {
    let maker = deps
        .store
        .find_maker_by_label(external_label)
        .await?
        .ok_or_else(|| {
            PresenceError::NotFound(format!("Maker with label '{external_label}' not found"))
        })?;

    let station = deps
        .store
        .find_station(station_id)
        .await?
        .ok_or_else(|| {
            PresenceError::NotFound(format!("Station with id '{station_id}' not found"))
        })?;

    if let Some(current) = deps.store.station_status(station_id).await? {
        if current.in_use && current.active_maker_id != Some(maker.id) {
            debug!(
                station_id = %station_id,
                active_maker_id = ?current.active_maker_id,
                "station enter refused, already occupied"
            );
            return Err(PresenceError::StationOccupied {
                station_name: station.name.clone(),
                station_id,
                active_maker_id: current.active_maker_id,
            });
        }
    }

    deps.store
        .upsert_maker_status(MakerStatus::active_at(maker.id, station_id))
        .await?;
    deps.store
        .upsert_station_status(StationStatus::occupied(station_id, maker.id))
        .await?;

    let maker_data = MakerData::with_status(&maker, MakerPresence::Active);
    let station_data = StationData::new(&station, true);
    deps.events.publish(ShopEvent::StationEntered {
        maker: maker_data.clone(),
        station: station_data.clone(),
    });
    info!(
        maker_id = %maker.id,
        station = %station.name,
        "maker entered station"
    );

    Ok(StationEntry {
        maker: maker_data,
        station: station_data,
    })
}
