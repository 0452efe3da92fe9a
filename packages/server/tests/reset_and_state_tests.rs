//! Integration tests for the state snapshot and the full system reset.

mod common;

use crate::common::{drain_events, TestShop};
use axum::http::StatusCode;
use serde_json::json;
use server_core::domains::presence::ShopEvent;

// =============================================================================
// GET /state
// =============================================================================

/// An untouched shop snapshots as three empty lists.
#[tokio::test]
async fn state_of_empty_shop_is_empty() {
    let shop = TestShop::new();

    let (status, body) = shop.get("/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["makers"], json!([]));
    assert_eq!(body["stations"], json!([]));
    assert_eq!(body["violations"], json!([]));
}

/// The snapshot joins statuses with roster names and carries open
/// violations.
#[tokio::test]
async fn state_reflects_live_shop() {
    let shop = TestShop::new();
    let ada = shop.add_maker("Ada Lovelace", "67");
    shop.add_maker("Grace Hopper", "68");
    let station = shop.add_station("Laser Cutter");

    shop.post("/login/toggle", json!({"external_label": "68"}))
        .await;
    shop.post(
        "/station/enter",
        json!({"external_label": "67", "station_id": station.id.to_string()}),
    )
    .await;
    shop.post(
        "/violation/create",
        json!({
            "station_id": station.id.to_string(),
            "violation_type": "GOGGLES_NOT_WORN",
        }),
    )
    .await;

    let (status, body) = shop.get("/state").await;

    assert_eq!(status, StatusCode::OK);

    let makers = body["makers"].as_array().unwrap();
    assert_eq!(makers.len(), 2);
    let ada_entry = makers
        .iter()
        .find(|m| m["external_label"] == "67")
        .expect("Ada should be present");
    assert_eq!(ada_entry["display_name"], "Ada Lovelace");
    assert_eq!(ada_entry["status"], "violation");
    assert_eq!(ada_entry["station_id"], station.id.to_string());
    let grace_entry = makers
        .iter()
        .find(|m| m["external_label"] == "68")
        .expect("Grace should be present");
    assert_eq!(grace_entry["status"], "idle");
    assert!(grace_entry.get("station_id").is_none());

    let stations = body["stations"].as_array().unwrap();
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0]["name"], "Laser Cutter");
    assert_eq!(stations[0]["in_use"], true);
    assert_eq!(stations[0]["active_maker_id"], ada.id.to_string());

    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0]["violation_type"], "GOGGLES_NOT_WORN");
    assert_eq!(violations[0]["maker_id"], ada.id.to_string());
}

// =============================================================================
// POST /logout
// =============================================================================

/// Reset wipes statuses and violations, reports counts, and keeps rosters.
#[tokio::test]
async fn reset_wipes_live_state_and_keeps_rosters() {
    let shop = TestShop::new();
    shop.add_maker("Ada Lovelace", "67");
    shop.add_maker("Grace Hopper", "68");
    let station = shop.add_station("Laser Cutter");

    shop.post("/login/toggle", json!({"external_label": "68"}))
        .await;
    shop.post(
        "/station/enter",
        json!({"external_label": "67", "station_id": station.id.to_string()}),
    )
    .await;
    shop.post(
        "/violation/create",
        json!({
            "station_id": station.id.to_string(),
            "violation_type": "GOGGLES_NOT_WORN",
        }),
    )
    .await;

    let (status, body) = shop.post_empty("/logout").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "System has been fully reset");
    assert_eq!(body["reset_type"], "full_system");
    assert_eq!(body["details"]["maker_statuses_cleared"], 2);
    assert_eq!(body["details"]["station_statuses_cleared"], 1);
    assert_eq!(body["details"]["violations_cleared"], 1);
    assert_eq!(body["details"]["makers_preserved"], true);
    assert_eq!(body["details"]["stations_preserved"], true);

    let (_, state) = shop.get("/state").await;
    assert_eq!(state["makers"], json!([]));
    assert_eq!(state["stations"], json!([]));
    assert_eq!(state["violations"], json!([]));

    // Rosters survive: the same badge checks straight back in
    let (status, _) = shop
        .post("/login/toggle", json!({"external_label": "67"}))
        .await;
    assert_eq!(status, StatusCode::OK);
}

/// Resetting an already-empty shop reports zero counts.
#[tokio::test]
async fn reset_of_empty_shop_reports_zero_counts() {
    let shop = TestShop::new();

    let (status, body) = shop.post_empty("/logout").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["details"]["maker_statuses_cleared"], 0);
    assert_eq!(body["details"]["station_statuses_cleared"], 0);
    assert_eq!(body["details"]["violations_cleared"], 0);
}

/// Reset announces itself to every dashboard.
#[tokio::test]
async fn reset_broadcasts_system_reset() {
    let shop = TestShop::new();
    let mut rx = shop.subscribe();

    shop.post_empty("/logout").await;

    let events = drain_events(&mut rx);
    assert_eq!(events.len(), 1);
    match &events[0] {
        ShopEvent::SystemReset { message } => {
            assert_eq!(message, "System has been reset");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

// =============================================================================
// GET /health
// =============================================================================

/// A healthy shop reports ok on both probes.
#[tokio::test]
async fn health_reports_healthy() {
    let shop = TestShop::new();

    let (status, body) = shop.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["event_stream"]["status"], "ok");
}

/// A dead store flips the health check to 503.
#[tokio::test]
async fn health_reports_unhealthy_when_store_is_down() {
    let shop = TestShop::new();
    shop.store.set_unavailable(true);

    let (status, body) = shop.get("/health").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["status"], "error");
}
