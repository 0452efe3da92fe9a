//! Shop state action - assemble the full dashboard snapshot

use crate::domains::presence::data::{OpenViolation, PresentMaker, ShopState, StationOccupancy};
use crate::domains::presence::error::PresenceError;
use crate::kernel::ServerDeps;

/// Snapshot of everything live: checked-in makers, station occupancy, and
/// open violations.
///
/// Status rows whose roster entry has vanished are skipped rather than
/// failing the whole snapshot.
pub async fn shop_state(deps: &ServerDeps) -> Result<ShopState, PresenceError> {
    let mut makers = Vec::new();
    for status in deps.store.list_maker_statuses().await? {
        if let Some(maker) = deps.store.find_maker(status.maker_id).await? {
            makers.push(PresentMaker {
                id: maker.id,
                display_name: maker.display_name,
                external_label: maker.external_label,
                status: status.status,
                station_id: status.station_id,
            });
        }
    }

    let mut stations = Vec::new();
    for status in deps.store.list_station_statuses().await? {
        if let Some(station) = deps.store.find_station(status.station_id).await? {
            stations.push(StationOccupancy {
                id: station.id,
                name: station.name,
                in_use: status.in_use,
                active_maker_id: status.active_maker_id,
            });
        }
    }

    let violations = deps
        .store
        .open_violations()
        .await?
        .iter()
        .map(OpenViolation::from)
        .collect();

    Ok(ShopState {
        makers,
        stations,
        violations,
    })
}
