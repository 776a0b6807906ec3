//! Tests for AnalysisRepository::resolve and record_failed_attempt methods.

use super::*;

/// Tests resolving a pending analysis.
///
/// Expected: Ok(Some) with resolved status, stored statistics and one attempt
#[tokio::test]
async fn resolves_pending_analysis() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let capture = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), Some("asset-1"))
        .await?;
    let pending = test.monitor().insert_pending_analysis(capture.id).await?;

    let resolved = AnalysisRepository::new(&test.db)
        .resolve(pending.id, factory::mock_vegetation(80.0))
        .await?
        .expect("analysis should exist");

    assert_eq!(resolved.status, AnalysisStatus::Resolved);
    assert_eq!(resolved.forest_cover_percentage, 80.0);
    assert_eq!(resolved.mean_tree_probability, 0.8);
    assert!(resolved.tile_url.is_some());
    assert!(resolved.analyzed_at.is_some());
    assert_eq!(resolved.resolution_attempts, 1);

    Ok(())
}

/// Tests resolving the same analysis twice.
///
/// Expected: A single analysis row holding the latest statistics
#[tokio::test]
async fn re_resolving_overwrites_in_place() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let capture = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), Some("asset-1"))
        .await?;
    let pending = test.monitor().insert_pending_analysis(capture.id).await?;

    let analysis_repo = AnalysisRepository::new(&test.db);
    analysis_repo
        .resolve(pending.id, factory::mock_vegetation(80.0))
        .await?;
    analysis_repo
        .resolve(pending.id, factory::mock_vegetation(65.0))
        .await?;

    let analyses = entity::prelude::VegetationAnalysis::find()
        .all(&test.db)
        .await?;
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].id, pending.id);
    assert_eq!(analyses[0].forest_cover_percentage, 65.0);
    assert_eq!(analyses[0].resolution_attempts, 2);

    Ok(())
}

/// Tests resolving an unknown analysis.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_analysis() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let result = AnalysisRepository::new(&test.db)
        .resolve(99, factory::mock_vegetation(80.0))
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests recording a failed attempt.
///
/// Expected: Analysis stays pending with zeroed statistics and an incremented counter
#[tokio::test]
async fn failed_attempt_keeps_analysis_pending() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let capture = test
        .monitor()
        .insert_mock_capture(region.id, "S2A_1", Utc::now(), Some("asset-1"))
        .await?;
    let pending = test.monitor().insert_pending_analysis(capture.id).await?;

    let updated = AnalysisRepository::new(&test.db)
        .record_failed_attempt(pending.id)
        .await?
        .expect("analysis should exist");

    assert_eq!(updated.status, AnalysisStatus::Pending);
    assert_eq!(updated.resolution_attempts, 1);
    assert_eq!(updated.forest_cover_percentage, 0.0);
    assert!(updated.analyzed_at.is_none());

    Ok(())
}
