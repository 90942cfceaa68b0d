// src/debug/mod.rs

//! Visualisierungshilfen für Diagramm-Durchläufe.

pub mod svg;

pub use svg::create_diagram_svg;
