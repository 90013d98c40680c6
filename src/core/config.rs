//! Session configuration for the router
//!
//! Everything the page script used to keep in module-level globals lives here and is
//! passed to [`Router`](crate::router::Router) and
//! [`Session`](crate::input::handler::Session) explicitly. Nothing in this
//! module touches storage: a config lives exactly as long as its session.

use serde::{Deserialize, Serialize};

use super::constants::{
    COORDINATE_DECIMAL_PLACES, DEFAULT_HOTKEY, MIN_ROUTING_ZOOM, SUPPORTED_COUNTRY,
};
use super::geo::ZoomLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Whether the single-letter hotkey triggers routing
    pub hotkey_enabled: bool,
    pub hotkey: char,
    pub min_zoom: ZoomLevel,
    pub decimal_places: u32,
    pub supported_country: String,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from the JSON an embedding page hands over.
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_hotkey_enabled(mut self, enabled: bool) -> Self {
        self.hotkey_enabled = enabled;
        self
    }

    pub fn with_hotkey(mut self, key: char) -> Self {
        self.hotkey = key;
        self
    }

    pub fn with_min_zoom(mut self, zoom: ZoomLevel) -> Self {
        self.min_zoom = zoom;
        self
    }

    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Case-insensitive hotkey comparison
    pub fn matches_hotkey(&self, key: char) -> bool {
        self.hotkey.to_lowercase().eq(key.to_lowercase())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            hotkey_enabled: false,
            hotkey: DEFAULT_HOTKEY,
            min_zoom: MIN_ROUTING_ZOOM,
            decimal_places: COORDINATE_DECIMAL_PLACES,
            supported_country: SUPPORTED_COUNTRY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert!(!config.hotkey_enabled);
        assert_eq!(config.hotkey, 'g');
        assert_eq!(config.min_zoom, 12);
        assert_eq!(config.decimal_places, 4);
        assert_eq!(config.supported_country, "Australia");
    }

    #[test]
    fn test_hotkey_matching() {
        let config = RouterConfig::default();
        assert!(config.matches_hotkey('g'));
        assert!(config.matches_hotkey('G'));
        assert!(!config.matches_hotkey('h'));

        let custom = config.with_hotkey('M');
        assert!(custom.matches_hotkey('m'));
    }

    #[test]
    fn test_partial_json() {
        let config = RouterConfig::from_json(r#"{"hotkey_enabled": true}"#).unwrap();
        assert!(config.hotkey_enabled);
        assert_eq!(config.min_zoom, 12);
        assert_eq!(config.supported_country, "Australia");

        assert!(RouterConfig::from_json("not json").is_err());
    }
}
