//! Tests for RegionRepository::create method.

use super::*;

/// Tests creating a region.
///
/// Expected: Ok with the stored coordinates and radius
#[tokio::test]
async fn creates_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let region_repo = RegionRepository::new(&test.db);
    let result = region_repo
        .create("Rondonia".to_string(), -10.9, -62.8, 25.0)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let region = result.unwrap();
    assert_eq!(region.name, "Rondonia");
    assert_eq!(region.latitude, -10.9);
    assert_eq!(region.longitude, -62.8);
    assert_eq!(region.radius_km, 25.0);

    Ok(())
}

/// Tests creating a region without tables.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let region_repo = RegionRepository::new(&test.db);
    let result = region_repo
        .create("Rondonia".to_string(), -10.9, -62.8, 25.0)
        .await;

    assert!(result.is_err());

    Ok(())
}
