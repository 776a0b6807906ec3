//! Tests for the monitoring pulse scheduler.

use chrono::{Duration, Utc};
use silvaguard::server::scheduler::{config::pulse, run_scheduled_pulse, Scheduler};
use silvaguard_test_utils::prelude::*;

use crate::util::test_settings;

/// Tests starting the scheduler with the default cron expression.
///
/// Expected: Ok
#[tokio::test]
async fn starts_with_default_schedule() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let scheduler = Scheduler::new(test.db.clone(), test.analysis_client.clone(), test_settings())
        .await
        .unwrap();
    let result = scheduler.start(pulse::CRON_EXPRESSION).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Tests starting the scheduler with a malformed cron expression.
///
/// Expected: Err
#[tokio::test]
async fn rejects_invalid_cron_expression() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let scheduler = Scheduler::new(test.db.clone(), test.analysis_client.clone(), test_settings())
        .await
        .unwrap();
    let result = scheduler.start("every six hours").await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the scheduled job body.
///
/// Expected: Ok with the pulse run over all regions using the default settings
#[tokio::test]
async fn scheduled_pulse_uses_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_monitoring_tables()
        .with_mock_region("Rondonia", -10.9, -62.8)
        .with_discovery_endpoint(
            factory::mock_region_geometry(-10.9, -62.8),
            vec![factory::mock_capture(
                "S2A_1",
                Utc::now() - Duration::days(3),
                Some("asset-1"),
            )],
            1,
        )
        .with_vegetation_endpoint("asset-1", factory::mock_vegetation(75.0), 1)
        .build()
        .await?;

    let summary = run_scheduled_pulse(
        test.db.clone(),
        test.analysis_client.clone(),
        test_settings(),
    )
    .await
    .unwrap();

    assert_eq!(summary.regions_processed, 1);
    assert_eq!(summary.new_captures, 1);

    test.assert_mocks();

    Ok(())
}
