use crate::core::constants::{ARCGIS_VIEWER_URL, NSW_BASEMAP_PARAM};
use crate::core::geo::{GeoPoint, ZoomLevel};

use super::{ExternalViewer, ViewerUrl};

/// ArcGIS web map over the NSW SIX base map. Centered with `find`, no zoom.
#[derive(Debug, Clone, Default)]
pub struct SixMapsNsw;

impl SixMapsNsw {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalViewer for SixMapsNsw {
    fn name(&self) -> &'static str {
        "NSW SIX Maps"
    }

    fn url(&self, point: GeoPoint, _zoom: ZoomLevel) -> ViewerUrl {
        ViewerUrl::new(format!(
            "{}?basemapUrl={}&find={},{}",
            ARCGIS_VIEWER_URL, NSW_BASEMAP_PARAM, point.lon, point.lat
        ))
    }
}
