//! Geographic primitives: the point value type and great-circle math.

pub mod math;
pub mod point;

pub use math::{distance_km, initial_bearing_deg, EARTH_RADIUS_KM};
pub use point::GeoPoint;
