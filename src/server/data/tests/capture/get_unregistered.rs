//! Tests for CaptureRepository::get_unregistered method.

use super::*;

/// Tests that only captures with an asset and without a processing marker are returned.
///
/// Expected: Ok with the single unregistered capture that has an asset
#[tokio::test]
async fn returns_captures_with_asset_and_no_marker() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let now = Utc::now();

    let registered = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_REGISTERED", now, Some("asset-1"))
        .await?;
    test.monitor().insert_pending_analysis(registered.id).await?;
    test.monitor()
        .insert_mock_capture(region.id, "S2A_NO_ASSET", now, None)
        .await?;
    let unregistered = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_NEW", now, Some("asset-2"))
        .await?;

    let result = CaptureRepository::new(&test.db)
        .get_unregistered(region.id)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, unregistered.id);

    Ok(())
}

/// Tests that a capture stored with a blank asset reference is not returned.
///
/// Expected: Ok with no captures
#[tokio::test]
async fn skips_blank_asset() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    test.monitor()
        .insert_mock_capture(region.id, "S2A_BLANK", Utc::now(), Some(""))
        .await?;

    let result = CaptureRepository::new(&test.db)
        .get_unregistered(region.id)
        .await?;

    assert!(result.is_empty());

    Ok(())
}
