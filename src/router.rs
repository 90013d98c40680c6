//! Coordinate router: host viewport in, government viewer URL out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::RouterConfig;
use crate::core::geo::{GeoPoint, ZoomLevel};
use crate::host::{HostMap, StaticHost};
use crate::viewers::{ExternalViewer, LocationSa, MapshareVic, SixMapsNsw};

pub use crate::viewers::ViewerUrl;

/// State (top-level administrative region) the map center falls in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Victoria,
    SouthAustralia,
    NewSouthWales,
    Unsupported(String),
}

impl Region {
    /// Maps the host's region name onto a variant. Names match exactly.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Victoria" => Self::Victoria,
            "South Australia" => Self::SouthAustralia,
            "New South Wales" => Self::NewSouthWales,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Resolves an optional host region name, rejecting missing or empty names
    pub fn resolve(name: Option<&str>) -> Result<Self, RoutingError> {
        match name {
            Some(name) if !name.is_empty() => Ok(Self::from_name(name)),
            _ => Err(RoutingError::UnresolvedRegion),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Victoria => "Victoria",
            Self::SouthAustralia => "South Australia",
            Self::NewSouthWales => "New South Wales",
            Self::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// The viewer serving this region
    pub fn viewer(&self) -> Result<Box<dyn ExternalViewer>, RoutingError> {
        match self {
            Self::Victoria => Ok(Box::new(MapshareVic::new())),
            Self::SouthAustralia => Ok(Box::new(LocationSa::new())),
            Self::NewSouthWales => Ok(Box::new(SixMapsNsw::new())),
            Self::Unsupported(name) if name.is_empty() => Err(RoutingError::UnresolvedRegion),
            Self::Unsupported(name) => Err(RoutingError::UnsupportedRegion(name.clone())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why routing refused to open a viewer. All but `InvalidCoordinates` are shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RoutingError {
    #[error("Sorry but we currently don't support loading maps from other countries but {supported}.")]
    UnsupportedCountry { supported: String },

    #[error("Please Zoom in to at least Level {min_zoom}.")]
    ZoomTooLow { zoom: ZoomLevel, min_zoom: ZoomLevel },

    #[error("Please move closer to land.")]
    UnresolvedRegion,

    #[error("Sorry but we currently don't support loading maps from {0}.")]
    UnsupportedRegion(String),

    #[error("Invalid coordinates")]
    InvalidCoordinates,
}

impl RoutingError {
    /// Diagnostic-only errors are logged but never shown to the user
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::InvalidCoordinates)
    }
}

/// Routes host viewports with a given session configuration
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RouterConfig {
        &mut self.config
    }

    /// Full host-driven flow: country, zoom, region, then coordinates.
    pub fn route<H: HostMap + ?Sized>(&self, host: &H) -> Result<ViewerUrl, RoutingError> {
        let country = host.country_name();
        if country.as_deref() != Some(self.config.supported_country.as_str()) {
            return Err(RoutingError::UnsupportedCountry {
                supported: self.config.supported_country.clone(),
            });
        }

        let zoom = host.zoom();
        self.check_zoom(zoom)?;

        let region = Region::resolve(host.region_name().as_deref())?;
        let viewer = region.viewer()?;

        let point = host.to_geodetic(host.center());
        self.build(&*viewer, point, zoom)
    }

    /// Routes an already-geodetic point for a resolved region
    pub fn route_geodetic(
        &self,
        point: GeoPoint,
        zoom: ZoomLevel,
        region: &Region,
    ) -> Result<ViewerUrl, RoutingError> {
        self.check_zoom(zoom)?;
        let viewer = region.viewer()?;
        self.build(&*viewer, point, zoom)
    }

    fn check_zoom(&self, zoom: ZoomLevel) -> Result<(), RoutingError> {
        if zoom < self.config.min_zoom {
            return Err(RoutingError::ZoomTooLow {
                zoom,
                min_zoom: self.config.min_zoom,
            });
        }
        Ok(())
    }

    fn build(
        &self,
        viewer: &dyn ExternalViewer,
        point: GeoPoint,
        zoom: ZoomLevel,
    ) -> Result<ViewerUrl, RoutingError> {
        let point = point.rounded(self.config.decimal_places);
        if !point.is_finite() {
            log::debug!("Invalid coordinates");
            return Err(RoutingError::InvalidCoordinates);
        }

        let url = viewer.url(point, zoom);
        log::debug!(
            "{} at ({}, {}) zoom {}: {}",
            viewer.name(),
            point.lon,
            point.lat,
            zoom,
            url
        );
        Ok(url)
    }
}

/// Routes a geodetic point with the default configuration
pub fn route_to_external_map(
    point: GeoPoint,
    zoom: ZoomLevel,
    region: Region,
) -> Result<ViewerUrl, RoutingError> {
    Router::default().route_geodetic(point, zoom, &region)
}

/// Routes a [`StaticHost`] snapshot given as JSON
pub fn route_json(router: &Router, host_json: &str) -> crate::Result<ViewerUrl> {
    let host: StaticHost = serde_json::from_str(host_json)?;
    Ok(router.route(&host)?)
}
