//! Prelude module for common govmap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use govmap::prelude::*;`

pub use crate::core::{
    config::RouterConfig,
    constants::{MIN_ROUTING_ZOOM, PRODUCT_NAME, SUPPORTED_COUNTRY},
    geo::{GeoPoint, Point, ZoomLevel},
};

pub use crate::data::conversion::{
    CoordinateSystem, Converter, Ellipsoid, TransverseMercator, VICGRID94,
};

pub use crate::host::{Alerts, HostMap, Navigator, StaticHost};

pub use crate::input::{
    events::{EventHandled, InputEvent, KeyCode, KeyModifiers},
    handler::{Session, TriggerOutcome},
};

pub use crate::router::{route_json, route_to_external_map, Region, Router, RoutingError};

pub use crate::viewers::{ExternalViewer, LocationSa, MapshareVic, SixMapsNsw, ViewerUrl};

#[cfg(feature = "wasm")]
pub use crate::web::{BrowserAlerts, BrowserNavigator, WasmSession};

pub use crate::{Error as GovMapError, Result};
