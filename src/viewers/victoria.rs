use crate::core::constants::{
    MAPSHARE_VIC_URL, VIC_HALVING_START_ZOOM, VIC_SCALE_MAX, VIC_SCALE_MIN, VIC_SCALE_MIN_ZOOM,
};
use crate::core::geo::{GeoPoint, ZoomLevel};
use crate::data::conversion::{TransverseMercator, VICGRID94};

use super::{ExternalViewer, ViewerUrl};

/// Mapshare Vic. Centered in Vicgrid94 meters and zoomed by a map scale
/// rather than a zoom level.
#[derive(Debug, Clone)]
pub struct MapshareVic {
    grid: TransverseMercator,
}

impl MapshareVic {
    pub fn new() -> Self {
        Self { grid: VICGRID94 }
    }

    /// Map scale for a host zoom.
    ///
    /// The two anchors are fixed; in between, the maximum scale is halved once
    /// per zoom step from 6 up to (not including) `zoom`. Zoom 19 comes out at
    /// exactly the minimum anchor after thirteen halvings.
    pub fn scale_for_zoom(zoom: ZoomLevel) -> f64 {
        if zoom <= 5 {
            return VIC_SCALE_MAX;
        }
        if zoom >= VIC_SCALE_MIN_ZOOM {
            return VIC_SCALE_MIN;
        }

        let mut scale = VIC_SCALE_MAX;
        for _ in VIC_HALVING_START_ZOOM..zoom {
            scale /= 2.0;
        }
        scale
    }
}

impl Default for MapshareVic {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalViewer for MapshareVic {
    fn name(&self) -> &'static str {
        "Mapshare Vic"
    }

    fn url(&self, point: GeoPoint, zoom: ZoomLevel) -> ViewerUrl {
        let grid = self.grid.forward(point);
        ViewerUrl::new(format!(
            "{}?scale={}&center={}%2C{}",
            MAPSHARE_VIC_URL,
            Self::scale_for_zoom(zoom),
            grid.x,
            grid.y
        ))
    }
}
