//! Tests for AnalysisRepository::get_pending method.

use super::*;

/// Tests that only pending analyses of the region are returned, oldest capture first.
///
/// Expected: Ok with the two pending analyses of the region in acquisition order
#[tokio::test]
async fn returns_pending_analyses_of_region() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let other = test.monitor().insert_mock_region("Other").await?;
    let now = Utc::now();

    let newer = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_NEWER", now, Some("asset-newer"))
        .await?;
    let older = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_OLDER", now - Duration::days(5), Some("asset-older"))
        .await?;
    let resolved = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_RESOLVED", now - Duration::days(9), Some("asset-r"))
        .await?;
    let foreign = test
        .monitor()
        .insert_mock_capture(other.id, "S2A_FOREIGN", now, Some("asset-foreign"))
        .await?;

    test.monitor().insert_pending_analysis(newer.id).await?;
    test.monitor().insert_pending_analysis(older.id).await?;
    test.monitor()
        .insert_resolved_analysis(resolved.id, 70.0)
        .await?;
    test.monitor().insert_pending_analysis(foreign.id).await?;

    let pending = AnalysisRepository::new(&test.db)
        .get_pending(region.id)
        .await?;

    let assets: Vec<&str> = pending.iter().map(|p| p.asset_id.as_str()).collect();
    assert_eq!(assets, vec!["asset-older", "asset-newer"]);

    Ok(())
}
