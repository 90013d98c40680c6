use crate::core::constants::{LOCATION_SA_URL, SA_MIN_PASSTHROUGH_ZOOM};
use crate::core::geo::{GeoPoint, ZoomLevel};

use super::{ExternalViewer, ViewerUrl};

/// Location SA Map Viewer. Takes geodetic lon/lat directly.
#[derive(Debug, Clone, Default)]
pub struct LocationSa;

impl LocationSa {
    pub fn new() -> Self {
        Self
    }

    /// Host zoom passed through to the viewer, if any.
    ///
    /// Below zoom 6 nothing is passed and the viewer picks its own default.
    pub fn zoom_param(zoom: ZoomLevel) -> Option<ZoomLevel> {
        (zoom >= SA_MIN_PASSTHROUGH_ZOOM).then_some(zoom)
    }
}

impl ExternalViewer for LocationSa {
    fn name(&self) -> &'static str {
        "Location SA"
    }

    fn url(&self, point: GeoPoint, zoom: ZoomLevel) -> ViewerUrl {
        // No zoom is sent as the literal text `null`
        let z = Self::zoom_param(zoom)
            .map(|z| z.to_string())
            .unwrap_or_else(|| "null".to_string());

        ViewerUrl::new(format!(
            "{}?map=hybrid&x={}&y={}&z={}",
            LOCATION_SA_URL, point.lon, point.lat, z
        ))
    }
}
