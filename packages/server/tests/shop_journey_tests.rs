//! End-to-end journey through a maker's shop session.

mod common;

use crate::common::TestShop;
use axum::http::StatusCode;
use serde_json::json;
use server_core::domains::presence::models::MakerPresence;
use server_core::kernel::BaseShopStore;
use std::time::Duration;

/// Badge "67" checks in, claims the laser cutter, trips a goggles
/// violation, snaps back to active with no further API call, releases the
/// station, and checks out.
#[tokio::test(start_paused = true)]
async fn full_session_from_checkin_to_checkout() {
    let shop = TestShop::new();
    let maker = shop.add_maker("Ada Lovelace", "67");
    let station = shop.add_station("Laser Cutter");

    // Walk in
    let (status, body) = shop
        .post("/login/toggle", json!({"external_label": "67"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "login");

    // Sit down at the laser cutter
    let (status, _) = shop
        .post(
            "/station/enter",
            json!({"external_label": "67", "station_id": station.id.to_string()}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // The camera spots missing goggles
    let (status, _) = shop
        .post(
            "/violation/create",
            json!({
                "station_id": station.id.to_string(),
                "violation_type": "GOGGLES_NOT_WORN",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // The dashboard shows the violation live
    let (_, state) = shop.get("/state").await;
    let makers = state["makers"].as_array().unwrap();
    assert_eq!(makers[0]["status"], "violation");
    assert_eq!(state["stations"][0]["in_use"], true);
    assert_eq!(state["violations"].as_array().unwrap().len(), 1);

    // 15 seconds later the flag clears itself
    tokio::time::sleep(Duration::from_secs(15)).await;
    shop.settle().await;
    let row = shop.store.maker_status(maker.id).await.unwrap().unwrap();
    assert_eq!(row.status, MakerPresence::Active);
    assert_eq!(row.station_id, Some(station.id));

    // Walk away from the station
    let (status, _) = shop
        .post(
            "/station/leave",
            json!({"station_id": station.id.to_string()}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let row = shop.store.maker_status(maker.id).await.unwrap().unwrap();
    assert_eq!(row.status, MakerPresence::Idle);

    // Head out; the cooldown expired long ago
    let (status, body) = shop
        .post("/login/toggle", json!({"external_label": "67"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "leave");

    // Only the resolved-violation history remains
    let (_, state) = shop.get("/state").await;
    assert_eq!(state["makers"], json!([]));
    assert_eq!(state["violations"].as_array().unwrap().len(), 1);
    assert_eq!(state["stations"][0]["in_use"], false);
}
