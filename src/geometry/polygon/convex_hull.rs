// src/geometry/polygon/convex_hull.rs

use super::core::Polygon;
use crate::error::{GeometryError, GeometryResult};
use crate::types::Vector2DExt;
use crate::utils::constants::{EPSILON, PI};
use glam::Vec2;

/// Polarwinkel relativ zum Ursprung über `asin`.
///
/// Gültig nur für Punkte mit `y >= 0`: nach der Verschiebung relativ zum
/// Pivot (minimales y) liegen alle Punkte in der oberen Halbebene, und
/// `asin(y/r)` mit Spiegelung für `x < 0` ergibt eine aufsteigende
/// Winkelordnung auf [0, π]. Dies ist keine allgemeine 0..2π-Sortierung.
fn polar_angle(p: Vec2) -> f32 {
    let r = p.length();
    if r < EPSILON {
        return 0.0;
    }
    let mut a = (p.y / r).asin();
    if p.x < 0.0 {
        a = PI - a;
    }
    a
}

/// Strikter Links-Abbiege-Test: liegt `p` links der Geraden `a -> b`?
fn is_left_turn(a: Vec2, b: Vec2, p: Vec2) -> bool {
    (b - a).cross_product(p - a) > 0.0
}

impl Polygon {
    /// Konvexe Hülle einer Punktmenge (Graham-Scan), als geschlossenes
    /// CCW-Polygon. Punkte strikt im Inneren der Hülle entfallen.
    ///
    /// Benötigt mindestens 4 Punkte; der Ring beginnt am Pivot
    /// (minimales y, bei Gleichstand minimales x) und endet mit dessen
    /// Duplikat.
    pub fn convex_hull(points: &[Vec2]) -> GeometryResult<Polygon> {
        if points.len() < 4 {
            return Err(GeometryError::InsufficientPoints {
                expected: 4,
                actual: points.len(),
            });
        }

        let mut points = points.to_vec();

        // Pivot: minimales y, bei Gleichstand minimales x, nach vorne tauschen
        let pivot_idx = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.y.partial_cmp(&b.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
            })
            .map(|(i, _)| i)
            .unwrap_or(0);
        points.swap(0, pivot_idx);
        let origin = points[0];

        // Verschiebung relativ zum Pivot; danach gilt y >= 0 für alle Punkte
        let mut relative: Vec<Vec2> = points.iter().map(|p| *p - origin).collect();
        debug_assert!(
            relative[1..].iter().all(|p| p.y >= -EPSILON),
            "pivot selection must leave all points in the upper half-plane"
        );

        relative[1..].sort_by(|a, b| {
            polar_angle(*a)
                .partial_cmp(&polar_angle(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Stack-Scan: solange (top-1, top, p) keine Linkskurve bildet, top entfernen
        let mut stack: Vec<Vec2> = vec![relative[0], relative[1], relative[2]];
        for &p in &relative[3..] {
            while stack.len() >= 2 && !is_left_turn(stack[stack.len() - 2], stack[stack.len() - 1], p)
            {
                stack.pop();
            }
            stack.push(p);
        }

        let mut polygon = Polygon::new();
        polygon.vertices = stack.into_iter().map(|p| p + origin).collect();
        polygon.vertices.push(polygon.vertices[0]);

        if !polygon.is_valid() {
            return Err(GeometryError::GeometricFailure {
                operation: "convex hull collapsed below 3 distinct vertices".to_string(),
            });
        }

        polygon.triangulate()?;
        Ok(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::comparison::nearly_equal;

    #[test]
    fn test_hull_of_square_starts_at_origin_ccw() {
        // all 4 square corners survive, CCW, starting at the min-y pivot (0,0)
        let points = vec![
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        ];
        let hull = Polygon::convex_hull(&points).unwrap();
        assert_eq!(hull.vertex_count(), 4);
        assert_eq!(hull.vertices()[0], Vec2::new(0.0, 0.0));
        assert_eq!(hull.vertices()[1], Vec2::new(10.0, 0.0));
        assert_eq!(hull.vertices()[2], Vec2::new(10.0, 10.0));
        assert_eq!(hull.vertices()[3], Vec2::new(0.0, 10.0));
        assert_eq!(hull.vertices()[4], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_interior_points_are_dropped() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 3.0),
        ];
        let hull = Polygon::convex_hull(&points).unwrap();
        assert_eq!(hull.vertex_count(), 4);
        assert!(!hull.vertices().contains(&Vec2::new(2.0, 2.0)));
        assert!(nearly_equal(hull.area(), 16.0));
    }

    #[test]
    fn test_hull_vertices_come_from_input() {
        let points = vec![
            Vec2::new(1.0, -2.0),
            Vec2::new(5.0, 1.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(-1.0, 0.5),
            Vec2::new(2.0, 1.0),
        ];
        let hull = Polygon::convex_hull(&points).unwrap();
        for v in &hull.vertices()[..hull.vertex_count()] {
            assert!(points.contains(v));
        }
        // pivot is the min-y point
        assert_eq!(hull.vertices()[0], Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_hull_is_ccw() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 1.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(-1.0, 2.0),
        ];
        let hull = Polygon::convex_hull(&points).unwrap();
        // signed shoelace sum positive for CCW rings
        let mut sum = 0.0;
        for pair in hull.vertices().windows(2) {
            sum += pair[0].x * pair[1].y - pair[1].x * pair[0].y;
        }
        assert!(sum > 0.0);
    }

    #[test]
    fn test_too_few_points() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        assert!(matches!(
            Polygon::convex_hull(&points),
            Err(GeometryError::InsufficientPoints { expected: 4, .. })
        ));
    }
}
