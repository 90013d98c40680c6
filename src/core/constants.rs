//! Core constants for the viewers we route to and the host editor conventions.
//! Keeping them in a single place makes it easier to follow a viewer that moves its URL scheme.

use super::geo::ZoomLevel;

/// Title shown on every warning raised through the host's alerting mechanism.
pub const PRODUCT_NAME: &str = "WME Send to AU GovMap";

/// The only country whose state viewers are known.
pub const SUPPORTED_COUNTRY: &str = "Australia";

/// Below this zoom the viewport center is too coarse to be a useful target.
pub const MIN_ROUTING_ZOOM: ZoomLevel = 12;

/// Decimal places kept on geodetic coordinates before they reach a URL.
pub const COORDINATE_DECIMAL_PLACES: u32 = 4;

/// Default hotkey letter (matched case-insensitively).
pub const DEFAULT_HOTKEY: char = 'g';

/// Mapshare scale shown at host zoom 5 and below.
pub const VIC_SCALE_MAX: f64 = 8000016.000032;

/// Mapshare scale shown at host zoom 20 and above.
pub const VIC_SCALE_MIN: f64 = 976.5644531289063;

/// Host zoom at which Mapshare halving starts.
pub const VIC_HALVING_START_ZOOM: ZoomLevel = 6;

/// Host zoom at and above which Mapshare sits at [`VIC_SCALE_MIN`].
pub const VIC_SCALE_MIN_ZOOM: ZoomLevel = 20;

/// Location SA only receives the host zoom from this level up.
pub const SA_MIN_PASSTHROUGH_ZOOM: ZoomLevel = 6;

/// Mapshare Vic viewer base.
pub const MAPSHARE_VIC_URL: &str = "https://mapshare.vic.gov.au/mapsharevic/";

/// Location SA viewer base.
pub const LOCATION_SA_URL: &str = "https://location.sa.gov.au/viewer/";

/// ArcGIS web map viewer used for NSW.
pub const ARCGIS_VIEWER_URL: &str = "https://www.arcgis.com/home/webmap/viewer.html";

/// NSW base map service, already percent-encoded for the `basemapUrl` parameter.
pub const NSW_BASEMAP_PARAM: &str =
    "http%3A%2F%2Fmaps.six.nsw.gov.au%2Farcgis%2Frest%2Fservices%2Fpublic%2FNSW_Base_Map%2FMapServer";
