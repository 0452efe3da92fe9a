//! Station leave action - release a station when its camera loses the face

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domains::presence::data::{MakerData, StationData, StationExit};
use crate::domains::presence::error::PresenceError;
use crate::domains::presence::events::ShopEvent;
use crate::domains::presence::models::{MakerPresence, MakerStatus, StationStatus};
use crate::kernel::ServerDeps;

/// Release a station when its camera stops seeing a face.
///
/// This action:
/// 1. Resolves the station; a station that has never been used (no status
///    row) is refused
/// 2. Nobody at the station: vacate the row and succeed with no maker
/// 3. Otherwise drop the occupant back to `idle`, then vacate the station
/// 4. If the occupant vanished from the roster, the station is still
///    vacated before the missing maker is reported
///
/// Broadcasts `station_left` only when a maker was actually released.
pub async fn leave_station(
    deps: &ServerDeps,
    station_id: Uuid,
) -> Result<StationExit, PresenceError> {
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

    let Some(maker_id) = status.active_maker_id else {
        deps.store
            .upsert_station_status(StationStatus::vacant(station_id))
            .await?;
        debug!(station = %station.name, "station vacated, no maker was present");
        return Ok(StationExit {
            station: StationData::new(&station, false),
            maker: None,
        });
    };

    let Some(maker) = deps.store.find_maker(maker_id).await? else {
        // Roster edit raced us: free the station anyway, then report it
        deps.store
            .upsert_station_status(StationStatus::vacant(station_id))
            .await?;
        warn!(maker_id = %maker_id, station = %station.name, "occupant missing from roster");
        return Err(PresenceError::NotFound(
            "Maker not found, but station status updated".into(),
        ));
    };

    deps.store
        .upsert_maker_status(MakerStatus::idle(maker.id))
        .await?;
    deps.store
        .upsert_station_status(StationStatus::vacant(station_id))
        .await?;

    let maker_data = MakerData::with_status(&maker, MakerPresence::Idle);
    let station_data = StationData::new(&station, false);
    deps.events.publish(ShopEvent::StationLeft {
        maker: maker_data.clone(),
        station: station_data.clone(),
    });
    info!(
        maker_id = %maker.id,
        station = %station.name,
        "maker left station"
    );

    Ok(StationExit {
        station: station_data,
        maker: Some(maker_data),
    })
}
