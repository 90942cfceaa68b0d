// src/voronoi/mod.rs

//! Zellaufbau über den Dreiecksfächer einer Delaunay-Triangulierung.

pub mod cell;
pub mod diagram;
pub mod links;
pub mod mesh;

pub use cell::{FanKind, build_cell};
pub use diagram::{CellOutcome, Diagram};
pub use links::{Link, shared_edge_links};
pub use mesh::{DelaunayMesh, TriangleProvider};
