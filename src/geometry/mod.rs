// src/geometry/mod.rs

pub mod polygon;
pub mod triangle;

pub use polygon::Polygon;
pub use triangle::Triangle;
