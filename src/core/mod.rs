pub mod config;
pub mod constants;
pub mod geo;

pub use config::RouterConfig;
pub use geo::{GeoPoint, Point, ZoomLevel};
