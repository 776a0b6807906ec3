//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A monitored circular region.
///
/// # Fields (from `entity::area_of_interest::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `latitude` / `longitude` - Center of the region in degrees
/// - `radius_km` - Radius of the region in kilometers
/// - `created_at` - Timestamp when the region was registered
pub type AreaOfInterestModel = entity::area_of_interest::Model;

/// Alert raised for a pair of consecutive resolved analyses with significant forest loss.
pub type DeforestationAlertModel = entity::deforestation_alert::Model;
