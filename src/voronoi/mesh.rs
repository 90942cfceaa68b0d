// src/voronoi/mesh.rs

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::Triangle;
use crate::types::{Window, from_spade_point, to_spade_points};
use glam::Vec2;
use spade::{DelaunayTriangulation, Triangulation};
use tracing::{debug, warn};

/// Liefert dem Zellaufbau die Dreiecksmenge und das Baufenster.
///
/// Die Delaunay-Triangulierung selbst ist austauschbar; der Fächerlauf
/// braucht nur die fertigen Dreiecke mit fester CCW-Windung.
pub trait TriangleProvider {
    fn triangles(&self) -> &[Triangle];

    fn window(&self) -> &Window;

    fn is_in_window(&self, point: Vec2) -> bool {
        self.window().contains(point)
    }
}

/// Delaunay-Triangulierung einer Punktmenge, eingefroren als Dreiecksliste.
///
/// Aufgebaut über `spade`; innere Flächen sind dort CCW orientiert, was der
/// Fächerlauf für `next_vertex`/`prev_vertex` voraussetzt. Degenerierte
/// Flächen werden übersprungen statt den Aufbau abzubrechen.
#[derive(Debug, Clone)]
pub struct DelaunayMesh {
    window: Window,
    triangles: Vec<Triangle>,
}

impl DelaunayMesh {
    pub fn build(positions: &[Vec2], window: Window) -> GeometryResult<Self> {
        if positions.len() < 3 {
            return Err(GeometryError::InsufficientPoints {
                expected: 3,
                actual: positions.len(),
            });
        }

        let triangulation: DelaunayTriangulation<_> =
            DelaunayTriangulation::bulk_load_stable(to_spade_points(positions)).map_err(|e| {
                GeometryError::TriangulationFailed {
                    reason: format!("spade bulk load: {:?}", e),
                }
            })?;

        let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            let [a, b, c] = face.positions();
            let mut triangle = Triangle::new(
                from_spade_point(a),
                from_spade_point(b),
                from_spade_point(c),
            );
            if triangle.is_degenerate() {
                warn!("skipping degenerate Delaunay face at {:?}", triangle.a);
                continue;
            }
            // innere spade-Flächen sind CCW; zur Sicherheit normalisieren
            if !triangle.is_ccw() {
                triangle = Triangle::new(triangle.a, triangle.c, triangle.b);
            }
            triangles.push(triangle);
        }

        if triangles.is_empty() {
            return Err(GeometryError::TriangulationFailed {
                reason: "no non-degenerate faces".into(),
            });
        }

        debug!(
            "Delaunay mesh: {} sites -> {} triangles in {}",
            positions.len(),
            triangles.len(),
            window
        );
        Ok(Self { window, triangles })
    }
}

impl TriangleProvider for DelaunayMesh {
    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    fn window(&self) -> &Window {
        &self.window
    }
}
