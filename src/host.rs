//! The seam between the router and the editor page that embeds it.
//!
//! The editor exposes far more than we need; [`HostMap`] narrows it to the
//! handful of read-only facts routing consumes. [`Navigator`] and [`Alerts`]
//! are the only two side effects routing ever has.

use serde::{Deserialize, Serialize};

use crate::core::geo::{GeoPoint, Point, ZoomLevel};
use crate::viewers::ViewerUrl;

/// Read-only view of the host map at the moment routing is triggered
pub trait HostMap {
    /// Top-level country containing the map center, if the host resolved one
    fn country_name(&self) -> Option<String>;

    /// Top-level administrative region (state) containing the map center
    fn region_name(&self) -> Option<String>;

    fn zoom(&self) -> ZoomLevel;

    /// Map center in the host's native projection
    fn center(&self) -> Point;

    /// Reprojects a native point to geodetic degrees. Hosts default to Web Mercator.
    fn to_geodetic(&self, native: Point) -> GeoPoint {
        GeoPoint::from_mercator(native)
    }
}

/// Opens a URL as a new, unnamed browsing context
pub trait Navigator {
    fn open(&self, url: &ViewerUrl);
}

/// The host's user-visible warning mechanism
pub trait Alerts {
    fn warning(&self, title: &str, message: &str);
}

/// Plain-data host snapshot, handy when the viewport arrives as values
/// (command line, wasm arguments, tests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticHost {
    pub country: Option<String>,
    pub region: Option<String>,
    pub zoom: ZoomLevel,
    /// Web Mercator meters
    pub center: Point,
}

impl StaticHost {
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        zoom: ZoomLevel,
        center: Point,
    ) -> Self {
        Self {
            country: Some(country.into()),
            region: Some(region.into()),
            zoom,
            center,
        }
    }

    /// Snapshot centered on a geodetic point
    pub fn at_geodetic(
        country: impl Into<String>,
        region: impl Into<String>,
        zoom: ZoomLevel,
        point: GeoPoint,
    ) -> Self {
        Self::new(country, region, zoom, point.to_mercator())
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.zoom = zoom;
        self
    }
}

impl HostMap for StaticHost {
    fn country_name(&self) -> Option<String> {
        self.country.clone()
    }

    fn region_name(&self) -> Option<String> {
        self.region.clone()
    }

    fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    fn center(&self) -> Point {
        self.center
    }
}

impl<T: HostMap + ?Sized> HostMap for &T {
    fn country_name(&self) -> Option<String> {
        (**self).country_name()
    }

    fn region_name(&self) -> Option<String> {
        (**self).region_name()
    }

    fn zoom(&self) -> ZoomLevel {
        (**self).zoom()
    }

    fn center(&self) -> Point {
        (**self).center()
    }

    fn to_geodetic(&self, native: Point) -> GeoPoint {
        (**self).to_geodetic(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_host_geodetic_center() {
        let host = StaticHost::at_geodetic("Australia", "Victoria", 14, GeoPoint::new(144.9631, -37.8136));
        let center = host.to_geodetic(host.center());
        assert!((center.lon - 144.9631).abs() < 1e-9);
        assert!((center.lat + 37.8136).abs() < 1e-9);
    }

    #[test]
    fn test_static_host_from_json() {
        let host: StaticHost = serde_json::from_str(
            r#"{"country":"Australia","region":null,"zoom":13,"center":{"x":0.0,"y":0.0}}"#,
        )
        .unwrap();
        assert_eq!(host.country_name().as_deref(), Some("Australia"));
        assert_eq!(host.region_name(), None);
        assert_eq!(host.zoom(), 13);
    }
}
