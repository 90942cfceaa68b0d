// src/geometry/polygon/mod.rs

//! Geschlossene Polygonringe mit Hüllen-, Triangulierungs- und Clipping-Operationen.

pub mod clipping;
pub mod convex_hull;
pub mod core;
pub mod triangulation;

pub use self::core::Polygon;
