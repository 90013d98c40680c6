pub mod conversion;

pub use conversion::{
    ConversionError, CoordinateSystem, Converter, Ellipsoid, TransverseMercator, VICGRID94,
};
