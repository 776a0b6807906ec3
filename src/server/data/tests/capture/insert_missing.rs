//! Tests for CaptureRepository::insert_missing method.
//!
//! Verifies that captures are inserted once by capture id and that only newly inserted
//! captures are reported back.

use super::*;

/// Tests inserting new captures.
///
/// Expected: Ok with both captures returned
#[tokio::test]
async fn inserts_new_captures() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let now = Utc::now();

    let capture_repo = CaptureRepository::new(&test.db);
    let result = capture_repo
        .insert_missing(
            region.id,
            vec![
                factory::mock_capture("S2A_1", now - Duration::days(2), Some("asset-1")),
                factory::mock_capture("S2A_2", now - Duration::days(1), None),
            ],
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let inserted = result.unwrap();
    assert_eq!(inserted.len(), 2);
    assert!(inserted.iter().all(|c| c.area_of_interest_id == region.id));

    Ok(())
}

/// Tests inserting the same captures twice.
///
/// Expected: Ok with an empty Vec on the second call and no duplicate rows
#[tokio::test]
async fn skips_existing_captures() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let now = Utc::now();
    let captures = vec![
        factory::mock_capture("S2A_1", now - Duration::days(2), Some("asset-1")),
        factory::mock_capture("S2A_2", now - Duration::days(1), Some("asset-2")),
    ];

    let capture_repo = CaptureRepository::new(&test.db);
    capture_repo
        .insert_missing(region.id, captures.clone())
        .await?;
    let second = capture_repo.insert_missing(region.id, captures).await?;

    assert!(second.is_empty());
    assert_eq!(capture_repo.get_by_region(region.id).await?.len(), 2);

    Ok(())
}

/// Tests a batch mixing stored and new captures.
///
/// Expected: Ok with only the new capture returned
#[tokio::test]
async fn returns_only_new_captures_from_mixed_batch() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let region = test.monitor().insert_mock_region("Rondonia").await?;
    let now = Utc::now();
    test.monitor()
        .insert_mock_capture(region.id, "S2A_1", now - Duration::days(3), Some("asset-1"))
        .await?;

    let capture_repo = CaptureRepository::new(&test.db);
    let inserted = capture_repo
        .insert_missing(
            region.id,
            vec![
                factory::mock_capture("S2A_1", now - Duration::days(3), Some("asset-1")),
                factory::mock_capture("S2A_2", now - Duration::days(1), Some("asset-2")),
            ],
        )
        .await?;

    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].capture_id, "S2A_2");

    Ok(())
}

/// Tests that a capture already owned by another region stays with that region.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn keeps_capture_owned_by_other_region() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_monitoring_tables().build().await?;
    let first = test.monitor().insert_mock_region("First").await?;
    let second = test.monitor().insert_mock_region("Second").await?;
    let now = Utc::now();
    test.monitor()
        .insert_mock_capture(first.id, "S2A_SHARED", now, Some("asset-shared"))
        .await?;

    let capture_repo = CaptureRepository::new(&test.db);
    let inserted = capture_repo
        .insert_missing(
            second.id,
            vec![factory::mock_capture("S2A_SHARED", now, Some("asset-shared"))],
        )
        .await?;

    assert!(inserted.is_empty());
    assert!(capture_repo.get_by_region(second.id).await?.is_empty());

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok with an empty Vec without touching the database
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_monitoring_tables().build().await?;

    let inserted = CaptureRepository::new(&test.db)
        .insert_missing(1, Vec::new())
        .await?;

    assert!(inserted.is_empty());

    Ok(())
}
