// src/geometry/polygon/triangulation.rs

use super::core::Polygon;
use crate::error::{GeometryError, GeometryResult};
use crate::geometry::triangle::Triangle;
use glam::Vec2;

impl Polygon {
    /// Ohr-Abschneidungs-Triangulierung des Rings; das Ergebnis wird
    /// zwischengespeichert und über [`Polygon::triangles`] bereitgestellt.
    ///
    /// Ein Ohr sind drei aufeinanderfolgende Eckpunkte, die CCW orientiert
    /// sind und keinen weiteren Ring-Eckpunkt strikt enthalten. Nach einem
    /// gefundenen Ohr wird am selben Index weitergesucht, da die Entfernung
    /// des Mittel-Eckpunkts sofort ein neues Ohr freilegen kann.
    ///
    /// Terminierung: finden zwei volle Umläufe über den aktuellen Ring kein
    /// Ohr, bricht die Triangulierung mit `TriangulationFailed` ab statt
    /// endlos zu laufen (selbstschneidende oder duplizierte Eingaben).
    pub fn triangulate(&mut self) -> GeometryResult<()> {
        if self.is_empty() {
            self.triangles = Some(Vec::new());
            return Ok(());
        }
        if !self.is_valid() {
            return Err(GeometryError::InsufficientPoints {
                expected: 4,
                actual: self.vertices.len(),
            });
        }

        // Arbeitsring ohne Abschluss-Duplikat
        let mut ring: Vec<Vec2> = self.vertices[..self.vertices.len() - 1].to_vec();
        let mut triangles = Vec::with_capacity(ring.len() - 2);
        let mut i = 0usize;
        let mut misses = 0usize;

        while ring.len() >= 3 {
            let n = ring.len();
            if misses > 2 * n {
                return Err(GeometryError::TriangulationFailed {
                    reason: format!(
                        "no ear found after two full scans ({} vertices remaining)",
                        n
                    ),
                });
            }

            let i0 = i % n;
            let i1 = (i + 1) % n;
            let i2 = (i + 2) % n;
            let candidate = Triangle::new(ring[i0], ring[i1], ring[i2]);

            let others: Vec<Vec2> = ring
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i0 && *j != i1 && *j != i2)
                .map(|(_, v)| *v)
                .collect();

            if candidate.is_ccw() && !candidate.contains_one_of(&others) {
                triangles.push(candidate);
                ring.remove(i1);
                misses = 0;
                // gleicher Index: das nächste Kandidaten-Tripel rückt nach
            } else {
                i = (i + 1) % n;
                misses += 1;
            }
        }

        self.triangles = Some(triangles);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::comparison::nearly_equal_eps;

    fn closed(points: &[Vec2]) -> Polygon {
        let mut p = Polygon::new();
        for &v in points {
            p.push_vertex(v);
        }
        p
    }

    #[test]
    fn test_square_yields_two_triangles() {
        let mut p = closed(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]);
        p.triangulate().unwrap();
        assert_eq!(p.triangles().len(), 2);

        let total: f32 = p.triangles().iter().map(|t| t.area()).sum();
        assert!(nearly_equal_eps(total, 1.0, 1e-4));
    }

    #[test]
    fn test_ngon_yields_n_minus_two_triangles() {
        // convex octagon
        let mut points = Vec::new();
        for i in 0..8 {
            let a = std::f32::consts::TAU * i as f32 / 8.0;
            points.push(Vec2::new(a.cos(), a.sin()));
        }
        let mut p = closed(&points);
        let area_before = p.area();
        p.triangulate().unwrap();

        assert_eq!(p.triangles().len(), 6);
        let total: f32 = p.triangles().iter().map(|t| t.area()).sum();
        assert!(nearly_equal_eps(total, area_before, 1e-3));
    }

    #[test]
    fn test_concave_polygon() {
        // L-shaped, CCW
        let mut p = closed(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]);
        p.triangulate().unwrap();
        assert_eq!(p.triangles().len(), 4);
        let total: f32 = p.triangles().iter().map(|t| t.area()).sum();
        assert!(nearly_equal_eps(total, 3.0, 1e-3));
        // all emitted ears are CCW
        assert!(p.triangles().iter().all(|t| t.is_ccw()));
    }

    #[test]
    fn test_degenerate_ring_fails_instead_of_looping() {
        // clockwise ring never exposes a CCW ear
        let mut p = closed(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]);
        assert!(matches!(
            p.triangulate(),
            Err(GeometryError::TriangulationFailed { .. })
        ));
    }

    #[test]
    fn test_empty_polygon_triangulates_to_nothing() {
        let mut p = Polygon::new();
        p.triangulate().unwrap();
        assert!(p.triangles().is_empty());
    }

    #[test]
    fn test_contains_uses_cached_triangles() {
        let mut p = closed(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ]);
        p.triangulate().unwrap();
        assert!(p.contains(Vec2::new(1.0, 1.0)));
        assert!(p.contains(Vec2::new(0.0, 0.0)));
        assert!(!p.contains(Vec2::new(2.5, 1.0)));
    }
}
