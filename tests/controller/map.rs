//! Tests for the map and alert listing endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use silvaguard::{
    model::map::{AlertDto, MapRegionDto},
    server::controller::map::{get_alerts, get_map},
};

use super::*;

/// Tests the map of a region with two resolved analyses and an alert.
///
/// Expected: Ok with 200 OK, the latest analysis and the alert
#[tokio::test]
async fn returns_map() -> Result<(), TestError> {
    let now = Utc::now();
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Rondonia", -10.9, -62.8)
        .build()
        .await?;
    let earlier = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", now - Duration::days(9), Some("asset-1"))
        .await?;
    let later = test
        .monitor()
        .insert_mock_capture(1, "S2A_2", now - Duration::days(2), Some("asset-2"))
        .await?;
    let before = test
        .monitor()
        .insert_resolved_analysis(earlier.id, 80.0)
        .await?;
    let after = test
        .monitor()
        .insert_resolved_analysis(later.id, 50.0)
        .await?;
    test.monitor()
        .insert_mock_alert(1, before.id, after.id, 150.5)
        .await?;

    let result = get_map(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let map: Vec<MapRegionDto> = read_json(resp).await;
    assert_eq!(map.len(), 1);
    assert_eq!(
        map[0].latest_analysis.as_ref().map(|a| a.analysis_id),
        Some(after.id)
    );
    assert_eq!(map[0].alerts.len(), 1);

    Ok(())
}

/// Tests listing alerts when none exist.
///
/// Expected: Ok with 200 OK and an empty list
#[tokio::test]
async fn returns_empty_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Rondonia", -10.9, -62.8)
        .build()
        .await?;

    let result = get_alerts(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let alerts: Vec<AlertDto> = read_json(resp).await;
    assert!(alerts.is_empty());

    Ok(())
}
