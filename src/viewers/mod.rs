//! External government map viewers and the URLs that open them.

pub mod new_south_wales;
pub mod south_australia;
pub mod victoria;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::geo::{GeoPoint, ZoomLevel};

pub use new_south_wales::SixMapsNsw;
pub use south_australia::LocationSa;
pub use victoria::MapshareVic;

/// Trait representing anything that can produce a viewer URL for a location.
pub trait ExternalViewer: Send + Sync {
    /// Short human name, used in logs
    fn name(&self) -> &'static str;

    /// Build a URL centering the viewer on `point` (geodetic, already rounded).
    fn url(&self, point: GeoPoint, zoom: ZoomLevel) -> ViewerUrl;
}

/// A fully-formed viewer URL, ready to hand to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewerUrl(String);

impl ViewerUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Everything after the `?`, or an empty string
    pub fn query(&self) -> &str {
        self.0.split_once('?').map(|(_, q)| q).unwrap_or("")
    }

    /// Raw (still percent-encoded) value of the first query parameter named `key`
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query()
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for ViewerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ViewerUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ViewerUrl> for String {
    fn from(url: ViewerUrl) -> Self {
        url.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param() {
        let url = ViewerUrl::new("https://example.test/view/?a=1&b=x%2Cy&c=");
        assert_eq!(url.query(), "a=1&b=x%2Cy&c=");
        assert_eq!(url.query_param("a"), Some("1"));
        assert_eq!(url.query_param("b"), Some("x%2Cy"));
        assert_eq!(url.query_param("c"), Some(""));
        assert_eq!(url.query_param("d"), None);
    }

    #[test]
    fn test_no_query() {
        let url = ViewerUrl::new("https://example.test/");
        assert_eq!(url.query(), "");
        assert_eq!(url.query_param("a"), None);
        assert_eq!(url.to_string(), "https://example.test/");
    }
}
