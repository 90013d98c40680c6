use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
const EARTH_RADIUS: f64 = 6378137.0;
const MAX_LATITUDE: f64 = 85.0511287798;

/// Host-native zoom level. Integer steps, 0 is the whole world.
pub type ZoomLevel = u8;

/// Represents a geodetic coordinate (WGS84-equivalent degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a new GeoPoint; note the lon-first order used by every viewer URL
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// True when neither component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Rounds both components to `decimal_places` decimal digits.
    ///
    /// Rounds the exact binary value to nearest, with ties away from zero, and
    /// parses the fixed-precision text back. `-37.81364999` becomes `-37.8136`,
    /// `144.03125` becomes `144.0313` and a result of zero is always `+0.0`.
    /// Non-finite components are returned unchanged.
    pub fn rounded(&self, decimal_places: u32) -> Self {
        Self::new(
            round_to(self.lon, decimal_places),
            round_to(self.lat, decimal_places),
        )
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lon(lon: f64) -> f64 {
        let wrapped = lon % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Converts to Web Mercator projection (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let x = self.lon.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + Self::clamp_lat(self.lat).to_radians() / 2.0).tan().ln())
            * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Creates a GeoPoint from Web Mercator coordinates
    pub fn from_mercator(point: Point) -> Self {
        let lon = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lon, lat)
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Enough fractional digits to print any finite f64 exactly
const EXACT_FRACTION_DIGITS: usize = 1100;

fn round_to(value: f64, decimal_places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    let rounded: f64 = fixed_half_up(magnitude, decimal_places as usize)
        .parse()
        .unwrap_or(magnitude);
    // Adding +0.0 turns a negative zero into zero
    value.signum() * rounded + 0.0
}

/// Fixed-point text for a non-negative value, exact ties rounded up
fn fixed_half_up(magnitude: f64, places: usize) -> String {
    // Correct to nearest, but ties go to even
    let nearest = format!("{:.*}", places, magnitude);
    if places >= EXACT_FRACTION_DIGITS {
        return nearest;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let Some((whole, fraction)) = exact.split_once('.') else {
        return nearest;
    };
    let tail = &fraction[places..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return nearest;
    }

    // One unit up in the last kept place, carrying through nines
    let mut digits: Vec<u8> = whole.bytes().chain(fraction[..places].bytes()).collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }

    let mut text: String = digits.iter().map(|&b| b as char).collect();
    if places > 0 {
        text.insert(text.len() - places, '.');
    }
    text
}

/// Represents a point in projected coordinates (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_creation() {
        let melbourne = GeoPoint::new(144.9631, -37.8136);
        assert_eq!(melbourne.lon, 144.9631);
        assert_eq!(melbourne.lat, -37.8136);
        assert!(melbourne.is_finite());
        assert!(!GeoPoint::new(f64::NAN, -37.0).is_finite());
        assert!(!GeoPoint::new(144.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_rounding() {
        let p = GeoPoint::new(144.963149999, -37.81364999).rounded(4);
        assert_eq!(p, GeoPoint::new(144.9631, -37.8136));
        assert_eq!(p.lon.to_string(), "144.9631");

        let up = GeoPoint::new(138.60075, -34.92866).rounded(4);
        assert_eq!(up.lat, -34.9287);

        // Trailing zeros vanish once parsed back
        let whole = GeoPoint::new(151.2, -33.87).rounded(4);
        assert_eq!(whole.lon.to_string(), "151.2");
    }

    #[test]
    fn test_rounding_ties_go_away_from_zero() {
        // Odd multiples of 1/32 are exact binary ties at four places
        let p = GeoPoint::new(144.03125, -37.03125).rounded(4);
        assert_eq!(p, GeoPoint::new(144.0313, -37.0313));
        assert_eq!(p.lon.to_string(), "144.0313");
        assert_eq!(p.lat.to_string(), "-37.0313");

        assert_eq!(round_to(9.96875, 4), 9.9688);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(9.5, 0), 10.0);
        assert_eq!(round_to(0.25, 1), 0.3);
    }

    #[test]
    fn test_rounding_to_zero_drops_the_sign() {
        let p = GeoPoint::new(-0.00001, -0.0).rounded(4);
        assert_eq!(p.lon.to_string(), "0");
        assert_eq!(p.lat.to_string(), "0");
        assert!(p.lon.is_sign_positive());
    }

    #[test]
    fn test_rounding_keeps_nan() {
        let p = GeoPoint::new(f64::NAN, 1.23456).rounded(4);
        assert!(p.lon.is_nan());
        assert_eq!(p.lat, 1.2346);
    }

    #[test]
    fn test_mercator_round_trip() {
        let sydney = GeoPoint::new(151.2093, -33.8688);
        let back = GeoPoint::from_mercator(sydney.to_mercator());
        assert!((back.lon - sydney.lon).abs() < 1e-10);
        assert!((back.lat - sydney.lat).abs() < 1e-10);
    }

    #[test]
    fn test_known_mercator_value() {
        // Longitude 180 sits at half the equatorial circumference
        let p = GeoPoint::new(180.0, 0.0).to_mercator();
        assert!((p.x - 20037508.342789244).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn test_wrap_and_clamp() {
        assert_eq!(GeoPoint::wrap_lon(181.0), -179.0);
        assert_eq!(GeoPoint::clamp_lat(91.0), 85.0511287798);
    }
}
