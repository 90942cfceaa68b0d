// src/geometry/triangle.rs

use crate::types::Vector2DExt;
use crate::utils::constants::EPSILON;
use glam::Vec2;

/// Dreieck mit fester Eckpunkt-Reihenfolge und abgeleitetem Umkreis.
///
/// Die Windungsreihenfolge wird bei der Konstruktion fixiert; die
/// Nachbarschafts-Abfragen (`next_vertex`, `prev_vertex`, Kantennormalen)
/// verlassen sich darauf. Der Voronoi-Aufbau setzt CCW-Windung voraus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
    circum_center: Option<Vec2>,
    circum_radius: f32,
}

impl Triangle {
    /// Erstellt ein Dreieck und berechnet seinen Umkreis.
    ///
    /// Bei (nahezu) kollinearen Eckpunkten bleibt der Umkreismittelpunkt
    /// `None`; es entsteht nie ein unendlicher oder NaN-Mittelpunkt.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        let ab = b - a;
        let ac = c - a;
        // Mittelpunkt von AC, dann entlang der Senkrechten bis zum Punkt,
        // der von A und B gleich weit entfernt ist.
        let m = a + 0.5 * ac;
        let n = ac.orthogonal();
        let denom = 2.0 * n.dot(ab);

        let (circum_center, circum_radius) = if denom.abs() < EPSILON {
            (None, 0.0)
        } else {
            let k = (ab.dot(ab) - ac.dot(ab)) / denom;
            let center = m + k * n;
            (Some(center), (center - a).length())
        };

        Self {
            a,
            b,
            c,
            circum_center,
            circum_radius,
        }
    }

    /// Umkreismittelpunkt; `None` bei degeneriertem Dreieck.
    pub fn center(&self) -> Option<Vec2> {
        self.circum_center
    }

    pub fn circum_radius(&self) -> f32 {
        self.circum_radius
    }

    /// Kollineare Eckpunkte, kein gültiger Umkreis.
    pub fn is_degenerate(&self) -> bool {
        self.circum_center.is_none()
    }

    /// Strikt positive vorzeichenbehaftete Fläche.
    pub fn is_ccw(&self) -> bool {
        (self.b - self.a).cross_product(self.c - self.a) > EPSILON
    }

    pub fn area(&self) -> f32 {
        0.5 * (self.b - self.a).cross_product(self.c - self.a).abs()
    }

    fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    fn vertex_index(&self, v: Vec2) -> Option<usize> {
        self.vertices()
            .iter()
            .position(|p| (p.x - v.x).abs() < EPSILON && (p.y - v.y).abs() < EPSILON)
    }

    /// Stimmt `v` mit einem Eckpunkt überein (innerhalb der Toleranz)?
    pub fn has_vertex(&self, v: Vec2) -> bool {
        self.vertex_index(v).is_some()
    }

    /// Der Eckpunkt, der `v` in der Windungsreihenfolge folgt.
    pub fn next_vertex(&self, v: Vec2) -> Option<Vec2> {
        let i = self.vertex_index(v)?;
        Some(self.vertices()[(i + 1) % 3])
    }

    /// Der Eckpunkt, der `v` in der Windungsreihenfolge vorausgeht.
    pub fn prev_vertex(&self, v: Vec2) -> Option<Vec2> {
        let i = self.vertex_index(v)?;
        Some(self.vertices()[(i + 2) % 3])
    }

    /// Auswärts gerichtete Einheitsnormale der Kante `v -> next_vertex(v)`.
    ///
    /// Bei CCW-Windung liegt das Innere links der Kante; auswärts ist die
    /// im Uhrzeigersinn gedrehte Senkrechte.
    pub fn next_edge_normal(&self, v: Vec2) -> Option<Vec2> {
        let next = self.next_vertex(v)?;
        let d = next - v;
        Some(Vec2::new(d.y, -d.x).normalize_or_zero())
    }

    /// Auswärts gerichtete Einheitsnormale der Kante `prev_vertex(v) -> v`.
    pub fn prev_edge_normal(&self, v: Vec2) -> Option<Vec2> {
        let prev = self.prev_vertex(v)?;
        let d = v - prev;
        Some(Vec2::new(d.y, -d.x).normalize_or_zero())
    }

    /// Liegt mindestens einer der Punkte strikt im Inneren?
    ///
    /// Randpunkte zählen nicht; die Toleranz greift auf allen drei Kanten
    /// gleich, damit die Ohr-Abschneidung terminiert.
    pub fn contains_one_of(&self, points: &[Vec2]) -> bool {
        points.iter().any(|&p| self.contains_strict(p))
    }

    fn contains_strict(&self, p: Vec2) -> bool {
        let d1 = (self.b - self.a).cross_product(p - self.a);
        let d2 = (self.c - self.b).cross_product(p - self.b);
        let d3 = (self.a - self.c).cross_product(p - self.c);
        d1 > EPSILON && d2 > EPSILON && d3 > EPSILON
    }

    /// Punkt-im-Dreieck-Test, Rand inklusive. Setzt CCW-Windung voraus.
    pub fn contains(&self, p: Vec2) -> bool {
        let d1 = (self.b - self.a).cross_product(p - self.a);
        let d2 = (self.c - self.b).cross_product(p - self.b);
        let d3 = (self.a - self.c).cross_product(p - self.c);
        d1 >= -EPSILON && d2 >= -EPSILON && d3 >= -EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::comparison::nearly_equal;
    use approx::assert_relative_eq;

    #[test]
    fn test_circumcenter_right_triangle() {
        // right triangle with legs 2: circumcenter is the hypotenuse midpoint
        let t = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 2.0),
        );
        let center = t.center().unwrap();
        assert_relative_eq!(center.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(t.circum_radius(), 2.0_f32.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let t = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(3.0, 3.0),
        );
        assert!(t.is_degenerate());
        assert!(t.center().is_none());
        assert!(!t.is_ccw());
    }

    #[test]
    fn test_ccw_detection() {
        let ccw = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        );
        let cw = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
        );
        assert!(ccw.is_ccw());
        assert!(!cw.is_ccw());
    }

    #[test]
    fn test_strict_containment_excludes_boundary() {
        let t = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        );
        assert!(t.contains_one_of(&[Vec2::new(1.0, 1.0)]));
        // vertex and edge midpoint are boundary, not interior
        assert!(!t.contains_one_of(&[Vec2::new(0.0, 0.0)]));
        assert!(!t.contains_one_of(&[Vec2::new(2.0, 0.0)]));
        assert!(!t.contains_one_of(&[Vec2::new(5.0, 5.0)]));
    }

    #[test]
    fn test_inclusive_containment() {
        let t = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(0.0, 4.0),
        );
        assert!(t.contains(Vec2::new(2.0, 0.0)));
        assert!(t.contains(Vec2::new(0.0, 0.0)));
        assert!(!t.contains(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_adjacency_queries_follow_winding() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        let c = Vec2::new(1.0, 2.0);
        let t = Triangle::new(a, b, c);

        assert!(t.has_vertex(b));
        assert!(!t.has_vertex(Vec2::new(5.0, 5.0)));
        assert_eq!(t.next_vertex(a), Some(b));
        assert_eq!(t.prev_vertex(a), Some(c));
        assert_eq!(t.next_vertex(c), Some(a));
        assert_eq!(t.next_vertex(Vec2::new(9.0, 9.0)), None);
    }

    #[test]
    fn test_edge_normals_point_outward() {
        // CCW unit-ish triangle; the edge a->b lies on the x axis,
        // its outward normal must point in -y.
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        let c = Vec2::new(1.0, 2.0);
        let t = Triangle::new(a, b, c);
        assert!(t.is_ccw());

        let n = t.next_edge_normal(a).unwrap();
        assert!(nearly_equal(n.x, 0.0));
        assert!(nearly_equal(n.y, -1.0));

        // prev edge of b is a->b as well
        let m = t.prev_edge_normal(b).unwrap();
        assert!(nearly_equal(m.x, 0.0));
        assert!(nearly_equal(m.y, -1.0));

        // outward normals never point toward the interior centroid
        let centroid = (a + b + c) / 3.0;
        for v in [a, b, c] {
            let n = t.next_edge_normal(v).unwrap();
            assert!(n.dot(centroid - v) < 0.0);
        }
    }
}
