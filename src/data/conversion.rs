use crate::core::geo::{GeoPoint, Point};
use serde::{Deserialize, Serialize};

/// Reference ellipsoid described by its semi-major axis and inverse flattening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    pub a: f64,
    /// Inverse flattening (1/f)
    pub inv_f: f64,
}

impl Ellipsoid {
    /// Geodetic Reference System 1980, the ellipsoid behind GDA94 grids
    pub const GRS80: Ellipsoid = Ellipsoid {
        a: 6378137.0,
        inv_f: 298.257222101,
    };

    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_f
    }

    /// Third flattening n = f / (2 - f)
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }

    /// First eccentricity
    pub fn eccentricity(&self) -> f64 {
        let f = self.flattening();
        (f * (2.0 - f)).sqrt()
    }
}

/// Transverse Mercator grid parameters (angles in degrees, offsets in meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercator {
    pub lat_0: f64,
    pub lon_0: f64,
    pub k_0: f64,
    pub x_0: f64,
    pub y_0: f64,
    pub ellipsoid: Ellipsoid,
}

/// Vicgrid94: `+proj=tmerc +lat_0=-37 +lon_0=145 +k=1 +x_0=2500000 +y_0=2500000 +ellps=GRS80 +units=m`
pub const VICGRID94: TransverseMercator = TransverseMercator {
    lat_0: -37.0,
    lon_0: 145.0,
    k_0: 1.0,
    x_0: 2_500_000.0,
    y_0: 2_500_000.0,
    ellipsoid: Ellipsoid::GRS80,
};

/// Krüger series coefficients to sixth order in n
struct KruegerSeries {
    /// Rectifying radius
    a_hat: f64,
    alpha: [f64; 6],
    beta: [f64; 6],
    e: f64,
}

impl KruegerSeries {
    fn new(ellipsoid: &Ellipsoid) -> Self {
        let n = ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let a_hat = ellipsoid.a / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0);

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0
                - 127.0 * n5 / 288.0
                + 7891.0 * n6 / 37800.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0 + 281.0 * n5 / 630.0
                - 1983433.0 * n6 / 1935360.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0
                + 15061.0 * n5 / 26880.0
                + 167603.0 * n6 / 181440.0,
            49561.0 * n4 / 161280.0 - 179.0 * n5 / 168.0 + 6601661.0 * n6 / 7257600.0,
            34729.0 * n5 / 80640.0 - 3418889.0 * n6 / 1995840.0,
            212378941.0 * n6 / 319334400.0,
        ];

        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0 - 81.0 * n5 / 512.0
                + 96199.0 * n6 / 604800.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0 + 46.0 * n5 / 105.0
                - 1118711.0 * n6 / 3870720.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0 - 209.0 * n5 / 4480.0
                + 5569.0 * n6 / 90720.0,
            4397.0 * n4 / 161280.0 - 11.0 * n5 / 504.0 - 830251.0 * n6 / 7257600.0,
            4583.0 * n5 / 161280.0 - 108847.0 * n6 / 3991680.0,
            20648693.0 * n6 / 638668800.0,
        ];

        Self {
            a_hat,
            alpha,
            beta,
            e: ellipsoid.eccentricity(),
        }
    }

    /// tan of the conformal latitude for tau = tan(phi)
    fn taup(&self, tau: f64) -> f64 {
        let tau1 = tau.hypot(1.0);
        let sig = (self.e * (self.e * tau / tau1).atanh()).sinh();
        tau * sig.hypot(1.0) - sig * tau1
    }

    /// Inverts [`Self::taup`] with Newton's method
    fn tau(&self, taup: f64) -> f64 {
        let e2m = 1.0 - self.e * self.e;
        let mut tau = taup / e2m;
        for _ in 0..8 {
            let taupa = self.taup(tau);
            let dtau =
                (taup - taupa) * (1.0 + e2m * tau * tau) / (e2m * tau.hypot(1.0) * taupa.hypot(1.0));
            tau += dtau;
            if dtau.abs() < 1e-15 * tau.abs().max(1.0) {
                break;
            }
        }
        tau
    }

    /// Applies the alpha series to conformal sphere coordinates
    fn gauss_krueger(&self, xip: f64, etap: f64) -> (f64, f64) {
        let mut xi = xip;
        let mut eta = etap;
        for (j, a) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi += a * (k * xip).sin() * (k * etap).cosh();
            eta += a * (k * xip).cos() * (k * etap).sinh();
        }
        (xi, eta)
    }

    /// Unscaled (xi, eta) for a longitude offset from the central meridian
    fn project(&self, phi: f64, lam: f64) -> (f64, f64) {
        let taup = self.taup(phi.tan());
        let xip = taup.atan2(lam.cos());
        let etap = (lam.sin() / taup.hypot(lam.cos())).asinh();
        self.gauss_krueger(xip, etap)
    }
}

impl TransverseMercator {
    /// Geodetic degrees to grid meters
    pub fn forward(&self, point: GeoPoint) -> Point {
        let series = KruegerSeries::new(&self.ellipsoid);
        let phi = point.lat.to_radians();
        let lam = GeoPoint::wrap_lon(point.lon - self.lon_0).to_radians();

        let (xi, eta) = series.project(phi, lam);
        let (xi_0, _) = series.project(self.lat_0.to_radians(), 0.0);

        let scale = self.k_0 * series.a_hat;
        Point::new(
            self.x_0 + scale * eta,
            self.y_0 + scale * (xi - xi_0),
        )
    }

    /// Grid meters back to geodetic degrees
    pub fn inverse(&self, point: Point) -> GeoPoint {
        let series = KruegerSeries::new(&self.ellipsoid);
        let scale = self.k_0 * series.a_hat;
        let (xi_0, _) = series.project(self.lat_0.to_radians(), 0.0);
        let xi = (point.y - self.y_0) / scale + xi_0;
        let eta = (point.x - self.x_0) / scale;

        let mut xip = xi;
        let mut etap = eta;
        for (j, b) in series.beta.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xip -= b * (k * xi).sin() * (k * eta).cosh();
            etap -= b * (k * xi).cos() * (k * eta).sinh();
        }

        let taup = xip.sin() / etap.sinh().hypot(xip.cos());
        let lam = etap.sinh().atan2(xip.cos());
        let phi = series.tau(taup).atan();

        GeoPoint::new(
            GeoPoint::wrap_lon(lam.to_degrees() + self.lon_0),
            phi.to_degrees(),
        )
    }
}

/// Coordinate reference system definitions
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateSystem {
    /// World Geodetic System 1984 (WGS84) - x is longitude, y is latitude
    WGS84,
    /// Web Mercator (EPSG:3857) - the editor's native projection
    WebMercator,
    /// Any transverse Mercator grid, e.g. [`VICGRID94`]
    TransverseMercator(TransverseMercator),
}

/// Data conversion utilities
#[derive(Debug, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    /// Converts coordinates between different systems
    pub fn convert_coordinates(
        &self,
        point: Point,
        from: &CoordinateSystem,
        to: &CoordinateSystem,
    ) -> Result<Point, ConversionError> {
        if !point.is_finite() {
            return Err(ConversionError::NonFinite(point.x, point.y));
        }

        let converted = match (from, to) {
            (CoordinateSystem::WGS84, CoordinateSystem::WebMercator) => {
                GeoPoint::new(point.x, point.y).to_mercator()
            }
            (CoordinateSystem::WebMercator, CoordinateSystem::WGS84) => {
                let geo = GeoPoint::from_mercator(point);
                Point::new(geo.lon, geo.lat)
            }
            (CoordinateSystem::WGS84, CoordinateSystem::TransverseMercator(grid)) => {
                grid.forward(GeoPoint::new(point.x, point.y))
            }
            (CoordinateSystem::TransverseMercator(grid), CoordinateSystem::WGS84) => {
                let geo = grid.inverse(point);
                Point::new(geo.lon, geo.lat)
            }
            (CoordinateSystem::WebMercator, CoordinateSystem::TransverseMercator(grid)) => {
                grid.forward(GeoPoint::from_mercator(point))
            }
            (a, b) if a == b => point,
            _ => return Err(ConversionError::UnsupportedTransformation),
        };

        if converted.is_finite() {
            Ok(converted)
        } else {
            Err(ConversionError::NonFinite(converted.x, converted.y))
        }
    }

    /// Converts a batch of coordinates
    pub fn convert_coordinates_batch(
        &self,
        points: &[Point],
        from: &CoordinateSystem,
        to: &CoordinateSystem,
    ) -> Result<Vec<Point>, ConversionError> {
        points
            .iter()
            .map(|p| self.convert_coordinates(*p, from, to))
            .collect()
    }
}

/// Errors that can occur during coordinate conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Unsupported coordinate transformation")]
    UnsupportedTransformation,
    #[error("Conversion produced non-finite coordinates ({0}, {1})")]
    NonFinite(f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vicgrid_origin() {
        let origin = VICGRID94.forward(GeoPoint::new(145.0, -37.0));
        assert!((origin.x - 2_500_000.0).abs() < 1e-6);
        assert!((origin.y - 2_500_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_vicgrid_melbourne() {
        let grid = VICGRID94.forward(GeoPoint::new(144.9631, -37.8136));
        assert!((grid.x - 2496750.7958).abs() < 1e-3, "x = {}", grid.x);
        assert!((grid.y - 2409701.7289).abs() < 1e-3, "y = {}", grid.y);
    }

    #[test]
    fn test_vicgrid_far_corner() {
        // Western border of Victoria, well away from the central meridian
        let grid = VICGRID94.forward(GeoPoint::new(141.0, -34.0));
        assert!((grid.x - 2130347.5553).abs() < 1e-3, "x = {}", grid.x);
        assert!((grid.y - 2825627.0640).abs() < 1e-3, "y = {}", grid.y);
    }

    #[test]
    fn test_inverse_round_trip() {
        for &(lon, lat) in &[
            (144.9631, -37.8136),
            (141.0, -34.0),
            (149.9, -39.2),
            (145.0, -37.0),
        ] {
            let back = VICGRID94.inverse(VICGRID94.forward(GeoPoint::new(lon, lat)));
            assert!((back.lon - lon).abs() < 1e-9, "lon {} vs {}", back.lon, lon);
            assert!((back.lat - lat).abs() < 1e-9, "lat {} vs {}", back.lat, lat);
        }
    }

    #[test]
    fn test_coordinate_conversion() {
        let converter = Converter::new();
        let wgs84_point = Point::new(144.9631, -37.8136);

        let mercator_result = converter
            .convert_coordinates(
                wgs84_point,
                &CoordinateSystem::WGS84,
                &CoordinateSystem::WebMercator,
            )
            .unwrap();

        let wgs84_result = converter
            .convert_coordinates(
                mercator_result,
                &CoordinateSystem::WebMercator,
                &CoordinateSystem::WGS84,
            )
            .unwrap();

        assert!((wgs84_result.x - wgs84_point.x).abs() < 1e-10);
        assert!((wgs84_result.y - wgs84_point.y).abs() < 1e-10);
    }

    #[test]
    fn test_mercator_straight_to_grid() {
        let converter = Converter::new();
        let native = GeoPoint::new(144.9631, -37.8136).to_mercator();
        let grid = converter
            .convert_coordinates(
                native,
                &CoordinateSystem::WebMercator,
                &CoordinateSystem::TransverseMercator(VICGRID94),
            )
            .unwrap();
        assert!((grid.x - 2496750.7958).abs() < 1e-3);
    }

    #[test]
    fn test_unsupported_and_non_finite() {
        let converter = Converter::new();
        let grid = CoordinateSystem::TransverseMercator(VICGRID94);

        assert!(matches!(
            converter.convert_coordinates(Point::new(0.0, 0.0), &grid, &CoordinateSystem::WebMercator),
            Err(ConversionError::UnsupportedTransformation)
        ));
        assert!(matches!(
            converter.convert_coordinates(
                Point::new(f64::NAN, 0.0),
                &CoordinateSystem::WGS84,
                &grid
            ),
            Err(ConversionError::NonFinite(..))
        ));
    }

    #[test]
    fn test_batch() {
        let converter = Converter::new();
        let points = [Point::new(145.0, -37.0), Point::new(144.9631, -37.8136)];
        let out = converter
            .convert_coordinates_batch(
                &points,
                &CoordinateSystem::WGS84,
                &CoordinateSystem::TransverseMercator(VICGRID94),
            )
            .unwrap();
        assert_eq!(out.len(), 2);
        assert!((out[0].x - 2_500_000.0).abs() < 1e-6);
    }
}
