//! Tests for ResolutionService::resolve_pending.

use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::AnalysisStatus;
use sea_orm::EntityTrait;
use silvaguard::server::{
    data::region::RegionRepository,
    service::{analysis::AnalysisService, resolution::ResolutionService, retry::RetryPolicy},
};
use silvaguard_test_utils::prelude::*;

use crate::util::test_retry;

/// Tests resolving a pending analysis with fetched statistics.
///
/// Expected: Ok with the analysis resolved and its statistics stored
#[tokio::test]
async fn resolves_pending_analysis() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", 0.0, 0.0)
        .with_vegetation_endpoint("asset-1", factory::mock_vegetation(72.5), 1)
        .build()
        .await?;
    let capture = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", Utc::now() - Duration::days(2), Some("asset-1"))
        .await?;
    let pending = test.monitor().insert_pending_analysis(capture.id).await?;
    let region = RegionRepository::new(&test.db).get_by_id(1).await?.unwrap();

    let analysis = AnalysisService::new(&test.analysis_client, test_retry());
    let result = ResolutionService::new(&test.db, &analysis)
        .resolve_pending(&region)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let summary = result.unwrap();
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.deferred, 0);

    let stored = entity::prelude::VegetationAnalysis::find_by_id(pending.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, AnalysisStatus::Resolved);
    assert_eq!(stored.forest_cover_percentage, 72.5);
    assert_eq!(stored.resolution_attempts, 1);
    assert!(stored.analyzed_at.is_some());
    assert!(stored.tile_url.is_some());

    test.assert_mocks();

    Ok(())
}

/// Tests a failing statistics request.
///
/// Expected: Ok with the analysis still pending and one attempt recorded
#[tokio::test]
async fn failed_statistics_leave_analysis_pending() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", 0.0, 0.0)
        .with_vegetation_failure("asset-1", 503, 1)
        .build()
        .await?;
    let capture = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", Utc::now() - Duration::days(2), Some("asset-1"))
        .await?;
    let pending = test.monitor().insert_pending_analysis(capture.id).await?;
    let region = RegionRepository::new(&test.db).get_by_id(1).await?.unwrap();

    let analysis = AnalysisService::new(&test.analysis_client, test_retry());
    let summary = ResolutionService::new(&test.db, &analysis)
        .resolve_pending(&region)
        .await
        .unwrap();

    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.deferred, 1);

    let stored = entity::prelude::VegetationAnalysis::find_by_id(pending.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.status, AnalysisStatus::Pending);
    assert_eq!(stored.resolution_attempts, 1);
    assert!(stored.analyzed_at.is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests a rejected statistics request with retries available.
///
/// Expected: Only one request is made since client errors are not retried
#[tokio::test]
async fn rejected_request_is_not_retried() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", 0.0, 0.0)
        .with_vegetation_failure("asset-1", 400, 1)
        .build()
        .await?;
    let capture = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", Utc::now() - Duration::days(2), Some("asset-1"))
        .await?;
    test.monitor().insert_pending_analysis(capture.id).await?;
    let region = RegionRepository::new(&test.db).get_by_id(1).await?.unwrap();

    let analysis = AnalysisService::new(
        &test.analysis_client,
        RetryPolicy::new(3, StdDuration::ZERO),
    );
    let summary = ResolutionService::new(&test.db, &analysis)
        .resolve_pending(&region)
        .await
        .unwrap();

    assert_eq!(summary.deferred, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests a transient failure followed by a successful response.
///
/// Expected: Ok with the analysis resolved after the retry
#[tokio::test]
async fn transient_failure_is_retried() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", 0.0, 0.0)
        .with_vegetation_failure("asset-1", 503, 1)
        .with_vegetation_endpoint("asset-1", factory::mock_vegetation(64.0), 1)
        .build()
        .await?;
    let capture = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", Utc::now() - Duration::days(2), Some("asset-1"))
        .await?;
    test.monitor().insert_pending_analysis(capture.id).await?;
    let region = RegionRepository::new(&test.db).get_by_id(1).await?.unwrap();

    let analysis = AnalysisService::new(
        &test.analysis_client,
        RetryPolicy::new(2, StdDuration::ZERO),
    );
    let summary = ResolutionService::new(&test.db, &analysis)
        .resolve_pending(&region)
        .await
        .unwrap();

    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.deferred, 0);

    test.assert_mocks();

    Ok(())
}

/// Tests a region whose analyses are all resolved.
///
/// Expected: Ok with nothing to do and no statistics requests
#[tokio::test]
async fn resolved_analyses_are_not_refetched() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Para", 0.0, 0.0)
        .with_vegetation_endpoint("asset-1", factory::mock_vegetation(64.0), 0)
        .build()
        .await?;
    let capture = test
        .monitor()
        .insert_mock_capture(1, "S2A_1", Utc::now() - Duration::days(2), Some("asset-1"))
        .await?;
    test.monitor()
        .insert_resolved_analysis(capture.id, 64.0)
        .await?;
    let region = RegionRepository::new(&test.db).get_by_id(1).await?.unwrap();

    let analysis = AnalysisService::new(&test.analysis_client, test_retry());
    let summary = ResolutionService::new(&test.db, &analysis)
        .resolve_pending(&region)
        .await
        .unwrap();

    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.deferred, 0);

    test.assert_mocks();

    Ok(())
}
