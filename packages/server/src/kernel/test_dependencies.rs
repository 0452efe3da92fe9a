// InMemoryShopStore - mock store implementation for testing
//
// Backs the BaseShopStore trait with plain HashMaps so actions and routes
// can be exercised without Postgres.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use super::BaseShopStore;
use crate::domains::presence::models::{Maker, MakerStatus, Station, StationStatus, Violation};

// =============================================================================
// In-memory Shop Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryShopStore {
    makers: Mutex<HashMap<Uuid, Maker>>,
    stations: Mutex<HashMap<Uuid, Station>>,
    maker_statuses: Mutex<HashMap<Uuid, MakerStatus>>,
    station_statuses: Mutex<HashMap<Uuid, StationStatus>>,
    violations: Mutex<Vec<Violation>>,
    unavailable: AtomicBool,
}

impl InMemoryShopStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a maker into the roster and return it
    pub fn add_maker(&self, display_name: &str, external_label: &str) -> Maker {
        let maker = Maker {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            external_label: external_label.to_string(),
        };
        self.makers.lock().unwrap().insert(maker.id, maker.clone());
        maker
    }

    /// Seed a station into the roster and return it
    pub fn add_station(&self, name: &str) -> Station {
        let station = Station {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        self.stations
            .lock()
            .unwrap()
            .insert(station.id, station.clone());
        station
    }

    /// Drop a maker from the roster (simulates a concurrent roster edit)
    pub fn remove_maker(&self, maker_id: Uuid) {
        self.makers.lock().unwrap().remove(&maker_id);
    }

    /// Make every store call fail, as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(anyhow!("database connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BaseShopStore for InMemoryShopStore {
    async fn find_maker_by_label(&self, external_label: &str) -> Result<Option<Maker>> {
        self.check_available()?;
        Ok(self
            .makers
            .lock()
            .unwrap()
            .values()
            .find(|m| m.external_label == external_label)
            .cloned())
    }

    async fn find_maker(&self, maker_id: Uuid) -> Result<Option<Maker>> {
        self.check_available()?;
        Ok(self.makers.lock().unwrap().get(&maker_id).cloned())
    }

    async fn find_station(&self, station_id: Uuid) -> Result<Option<Station>> {
        self.check_available()?;
        Ok(self.stations.lock().unwrap().get(&station_id).cloned())
    }

    async fn maker_status(&self, maker_id: Uuid) -> Result<Option<MakerStatus>> {
        self.check_available()?;
        Ok(self.maker_statuses.lock().unwrap().get(&maker_id).cloned())
    }

    async fn list_maker_statuses(&self) -> Result<Vec<MakerStatus>> {
        self.check_available()?;
        let mut statuses: Vec<MakerStatus> =
            self.maker_statuses.lock().unwrap().values().cloned().collect();
        statuses.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(statuses)
    }

    async fn upsert_maker_status(&self, mut status: MakerStatus) -> Result<MakerStatus> {
        self.check_available()?;
        status.updated_at = Utc::now();
        self.maker_statuses
            .lock()
            .unwrap()
            .insert(status.maker_id, status.clone());
        Ok(status)
    }

    async fn delete_maker_status(&self, maker_id: Uuid) -> Result<()> {
        self.check_available()?;
        self.maker_statuses.lock().unwrap().remove(&maker_id);
        Ok(())
    }

    async fn station_status(&self, station_id: Uuid) -> Result<Option<StationStatus>> {
        self.check_available()?;
        Ok(self
            .station_statuses
            .lock()
            .unwrap()
            .get(&station_id)
            .cloned())
    }

    async fn list_station_statuses(&self) -> Result<Vec<StationStatus>> {
        self.check_available()?;
        let mut statuses: Vec<StationStatus> = self
            .station_statuses
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        statuses.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(statuses)
    }

    async fn upsert_station_status(&self, mut status: StationStatus) -> Result<StationStatus> {
        self.check_available()?;
        status.updated_at = Utc::now();
        self.station_statuses
            .lock()
            .unwrap()
            .insert(status.station_id, status.clone());
        Ok(status)
    }

    async fn insert_violation(
        &self,
        maker_id: Uuid,
        station_id: Uuid,
        violation_type: &str,
        image_url: Option<&str>,
    ) -> Result<Violation> {
        self.check_available()?;
        let violation = Violation {
            id: Uuid::new_v4(),
            maker_id,
            station_id,
            violation_type: violation_type.to_string(),
            image_url: image_url.map(str::to_string),
            created_at: Utc::now(),
            resolved_at: None,
        };
        self.violations.lock().unwrap().push(violation.clone());
        Ok(violation)
    }

    async fn open_violations(&self) -> Result<Vec<Violation>> {
        self.check_available()?;
        let mut open: Vec<Violation> = self
            .violations
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.resolved_at.is_none())
            .cloned()
            .collect();
        open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(open)
    }

    async fn open_violation_at_station(&self, station_id: Uuid) -> Result<Option<Violation>> {
        self.check_available()?;
        Ok(self
            .violations
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.station_id == station_id && v.resolved_at.is_none())
            .max_by_key(|v| v.created_at)
            .cloned())
    }

    async fn clear_maker_statuses(&self) -> Result<u64> {
        self.check_available()?;
        let mut statuses = self.maker_statuses.lock().unwrap();
        let cleared = statuses.len() as u64;
        statuses.clear();
        Ok(cleared)
    }

    async fn clear_station_statuses(&self) -> Result<u64> {
        self.check_available()?;
        let mut statuses = self.station_statuses.lock().unwrap();
        let cleared = statuses.len() as u64;
        statuses.clear();
        Ok(cleared)
    }

    async fn clear_violations(&self) -> Result<u64> {
        self.check_available()?;
        let mut violations = self.violations.lock().unwrap();
        let cleared = violations.len() as u64;
        violations.clear();
        Ok(cleared)
    }
}
