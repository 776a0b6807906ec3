//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/pulse` - Run a monitoring pulse
/// - `GET /api/regions` - List monitored regions
/// - `POST /api/regions` - Register a region
/// - `GET /api/regions/{region_id}/alerts` - Alerts of one region
/// - `GET /api/map` - Regions with their latest analysis and alerts
/// - `GET /api/alerts` - All alerts
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "SilvaGuard", description = "SilvaGuard forest monitoring API"), tags(
        (name = controller::pulse::PULSE_TAG, description = "Monitoring pulse API routes"),
        (name = controller::region::REGION_TAG, description = "Monitored region API routes"),
        (name = controller::map::MAP_TAG, description = "Map and alert feed API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::pulse::run_pulse))
        .routes(routes!(controller::region::get_regions, controller::region::create_region))
        .routes(routes!(controller::region::get_region_alerts))
        .routes(routes!(controller::map::get_map))
        .routes(routes!(controller::map::get_alerts))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
