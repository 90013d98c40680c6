//! # govmap
//!
//! Opens an Australian state government map viewer at the map editor's
//! current viewport.
//!
//! The editor reports its center in Web Mercator together with a zoom level
//! and the country/state under the center. The router reprojects that into
//! whatever the state's viewer expects (Vicgrid94 meters and a map scale for
//! Victoria, plain lon/lat for South Australia and New South Wales) and
//! produces the viewer URL. A [`Session`](input::handler::Session) wires the
//! router to a button, an optional hotkey, and the page's navigation and
//! warning mechanisms.

pub mod core;
pub mod data;
pub mod host;
pub mod input;
pub mod prelude;
pub mod router;
pub mod viewers;
#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::RouterConfig,
    geo::{GeoPoint, Point, ZoomLevel},
};

pub use data::conversion::{ConversionError, CoordinateSystem, Converter, VICGRID94};

pub use host::{Alerts, HostMap, Navigator, StaticHost};

pub use input::{events::InputEvent, handler::Session};

pub use router::{route_to_external_map, Region, Router, RoutingError, ViewerUrl};

pub use viewers::ExternalViewer;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GovMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GovMapError {
    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = GovMapError;
