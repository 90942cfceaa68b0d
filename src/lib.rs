// src/lib.rs

//! Zerlegung eines rechteckigen Fensters in exklusive Zellen fester Sites.
//!
//! Der Kern ist eine 2D-Geometrie-Maschine: konvexe Hülle (Graham-Scan),
//! Ohr-Abschneidungs-Triangulierung, Rechteck-Clipping und der Aufbau von
//! Voronoi-Zellen über den Dreiecksfächer einer Delaunay-Triangulierung,
//! inklusive Randverlängerung offener Fächer für Hüllen-Sites.

pub mod debug;
pub mod error;
pub mod geometry;
pub mod sampling;
pub mod site;
pub mod types;
pub mod utils;
pub mod voronoi;

// Re-exports für einfache Verwendung
pub use error::{GeometryError, GeometryResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{GeometryError, GeometryResult},
        geometry::{Polygon, Triangle},
        sampling::{random_positions, random_sites},
        site::{Site, SiteId},
        types::*,
        voronoi::{CellOutcome, DelaunayMesh, Diagram, FanKind, Link, TriangleProvider,
            build_cell, shared_edge_links},
    };
}
