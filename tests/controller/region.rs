//! Tests for the region endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use silvaguard::{
    model::{map::AlertDto, region::CreateRegionDto, region::RegionDto},
    server::controller::region::{create_region, get_region_alerts, get_regions},
};

use super::*;

fn new_region(name: &str, latitude: f64, longitude: f64, radius_km: f64) -> CreateRegionDto {
    CreateRegionDto {
        name: name.to_string(),
        latitude,
        longitude,
        radius_km,
    }
}

/// Tests creating a valid region.
///
/// Expected: Ok with 201 CREATED and the stored region
#[tokio::test]
async fn creates_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let result = create_region(
        State(test.into_app_state()),
        Json(new_region("Xingu", -3.5, -52.0, 25.0)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let region: RegionDto = read_json(resp).await;
    assert_eq!(region.name, "Xingu");
    assert_eq!(region.latitude, -3.5);
    assert_eq!(region.radius_km, 25.0);

    Ok(())
}

/// Tests creating regions with invalid fields.
///
/// Expected: Err with 400 BAD REQUEST for each
#[tokio::test]
async fn rejects_invalid_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let invalid = vec![
        new_region("  ", 0.0, 0.0, 10.0),
        new_region("North", 91.0, 0.0, 10.0),
        new_region("East", 0.0, 181.0, 10.0),
        new_region("Nowhere", 0.0, 0.0, 0.0),
    ];

    for region in invalid {
        let result = create_region(State(test.into_app_state()), Json(region)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    Ok(())
}

/// Tests listing regions.
///
/// Expected: Ok with 200 OK and regions in creation order
#[tokio::test]
async fn lists_regions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Rondonia", -10.9, -62.8)
        .with_mock_region("Acre", -9.0, -70.0)
        .build()
        .await?;

    let result = get_regions(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let regions: Vec<RegionDto> = read_json(resp).await;
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Rondonia", "Acre"]);

    Ok(())
}

/// Tests listing alerts of a region without alerts.
///
/// Expected: Ok with 200 OK and an empty list
#[tokio::test]
async fn lists_region_alerts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Rondonia", -10.9, -62.8)
        .build()
        .await?;

    let result = get_region_alerts(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let alerts: Vec<AlertDto> = read_json(resp).await;
    assert!(alerts.is_empty());

    Ok(())
}

/// Tests listing alerts of a region that does not exist.
///
/// Expected: Err with 404 NOT FOUND
#[tokio::test]
async fn region_alerts_for_unknown_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let result = get_region_alerts(State(test.into_app_state()), Path(7)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
