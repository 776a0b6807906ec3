//! Mocked Analysis Service endpoints.
//!
//! Every mock requires the test bearer credential and matches on the part of the request body
//! that identifies the region or asset, so several regions or captures can share one server.

use analysis_client::model::{
    CaptureDescriptor, LossStatistics, RegionGeometry, VegetationStatistics,
};
use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::TEST_API_KEY, fixtures::monitor::MonitorFixtures};

const CAPTURE_SEARCH_PATH: &str = "/v1/captures/search";
const VEGETATION_PATH: &str = "/v1/statistics/vegetation";
const LOSS_PATH: &str = "/v1/statistics/loss";

fn bearer() -> String {
    format!("Bearer {}", TEST_API_KEY)
}

fn region_matcher(region: RegionGeometry) -> Matcher {
    Matcher::PartialJson(json!({
        "latitude": region.latitude,
        "longitude": region.longitude,
    }))
}

impl<'a> MonitorFixtures<'a> {
    /// Capture discovery for the region centered at `region` returning `captures`.
    pub fn create_discovery_endpoint(
        &mut self,
        region: RegionGeometry,
        captures: Vec<CaptureDescriptor>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", CAPTURE_SEARCH_PATH)
            .match_header("authorization", bearer().as_str())
            .match_body(region_matcher(region))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "captures": captures }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Capture discovery for the region centered at `region` failing with `status`.
    pub fn create_discovery_failure_endpoint(
        &mut self,
        region: RegionGeometry,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", CAPTURE_SEARCH_PATH)
            .match_body(region_matcher(region))
            .with_status(status)
            .with_body("analysis backend unavailable")
            .expect(expected_requests)
            .create()
    }

    /// Vegetation statistics for `asset_id`.
    pub fn create_vegetation_endpoint(
        &mut self,
        asset_id: &str,
        statistics: VegetationStatistics,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", VEGETATION_PATH)
            .match_header("authorization", bearer().as_str())
            .match_body(Matcher::PartialJson(json!({ "asset_id": asset_id })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&statistics).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Vegetation statistics for `asset_id` failing with `status`.
    pub fn create_vegetation_failure_endpoint(
        &mut self,
        asset_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", VEGETATION_PATH)
            .match_body(Matcher::PartialJson(json!({ "asset_id": asset_id })))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Forest loss between `before_asset_id` and `after_asset_id`.
    pub fn create_loss_endpoint(
        &mut self,
        before_asset_id: &str,
        after_asset_id: &str,
        loss: LossStatistics,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", LOSS_PATH)
            .match_header("authorization", bearer().as_str())
            .match_body(Matcher::PartialJson(json!({
                "before_asset_id": before_asset_id,
                "after_asset_id": after_asset_id,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&loss).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Forest loss between `before_asset_id` and `after_asset_id` failing with `status`.
    pub fn create_loss_failure_endpoint(
        &mut self,
        before_asset_id: &str,
        after_asset_id: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", LOSS_PATH)
            .match_body(Matcher::PartialJson(json!({
                "before_asset_id": before_asset_id,
                "after_asset_id": after_asset_id,
            })))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
