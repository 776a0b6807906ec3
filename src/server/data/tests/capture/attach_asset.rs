//! Tests for CaptureRepository::attach_asset method.

use super::*;

/// Tests attaching an asset to a capture stored without one.
///
/// Expected: Ok(true) and the asset stored
#[tokio::test]
async fn attaches_missing_asset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    test.monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), None)
        .await?;

    let capture_repo = CaptureRepository::new(&test.db);
    let attached = capture_repo
        .attach_asset(region.id, "S2A_1", "asset-late")
        .await?;

    assert!(attached);
    let captures = capture_repo.get_by_region(region.id).await?;
    assert_eq!(captures[0].asset_id.as_deref(), Some("asset-late"));

    Ok(())
}

/// Tests that an existing asset is never overwritten.
///
/// Expected: Ok(false) and the original asset kept
#[tokio::test]
async fn keeps_existing_asset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    test.monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), Some("asset-original"))
        .await?;

    let capture_repo = CaptureRepository::new(&test.db);
    let attached = capture_repo
        .attach_asset(region.id, "S2A_1", "asset-other")
        .await?;

    assert!(!attached);
    let captures = capture_repo.get_by_region(region.id).await?;
    assert_eq!(captures[0].asset_id.as_deref(), Some("asset-original"));

    Ok(())
}

/// Tests that captures of another region are not touched.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_captures_of_other_regions() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let first = test.monitor().insert_mock_region("First").await?;
    let second = test.monitor().insert_mock_region("Second").await?;
    test.monitor()
        .insert_mock_capture(first.id, "S2A_1", Utc::now(), None)
        .await?;

    let attached = CaptureRepository::new(&test.db)
        .attach_asset(second.id, "S2A_1", "asset-late")
        .await?;

    assert!(!attached);

    Ok(())
}

/// Tests attaching an asset to a capture stored with a blank asset reference.
///
/// Expected: Ok(true) and the blank reference replaced
#[tokio::test]
async fn replaces_blank_asset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    test.monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), Some(""))
        .await?;

    let capture_repo = CaptureRepository::new(&test.db);
    let attached = capture_repo
        .attach_asset(region.id, "S2A_1", "asset-late")
        .await?;

    assert!(attached);
    let captures = capture_repo.get_by_region(region.id).await?;
    assert_eq!(captures[0].asset_id.as_deref(), Some("asset-late"));

    Ok(())
}
