//! Tests for RegionRepository::get_all and get_by_id methods.

use super::*;

/// Tests that regions are returned in registration order.
///
/// Expected: Ok with regions ordered by id
#[tokio::test]
async fn returns_regions_in_registration_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", -3.4, -52.0)
        .with_mock_region("Acre", -9.0, -70.0)
        .build()
        .await?;

    let regions = RegionRepository::new(&test.db).get_all().await?;

    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Para", "Acre"]);

    Ok(())
}

/// Tests looking up a missing region.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let region = RegionRepository::new(&test.db).get_by_id(42).await?;

    assert!(region.is_none());

    Ok(())
}
