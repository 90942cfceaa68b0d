// src/geometry/polygon/core.rs

use crate::geometry::triangle::Triangle;
use crate::types::Vector2DExt;
use crate::utils::constants::EPSILON;
use glam::Vec2;
use std::fmt;

/// Liegt `point` (Toleranz `EPSILON`) auf der Strecke `a -> b`?
fn on_segment(point: Vec2, a: Vec2, b: Vec2) -> bool {
    let d = b - a;
    let r = point - a;
    if d.cross_product(r).abs() > EPSILON {
        return false;
    }
    let t = r.dot(d);
    -EPSILON <= t && t <= d.length_squared() + EPSILON
}

/// Geschlossener Eckpunkt-Ring mit explizitem Abschluss (erster == letzter)
/// und zwischengespeicherter Triangulierung.
///
/// Ein gültiger Ring hat mindestens 4 gespeicherte Eckpunkte (3 distinkte
/// plus Abschluss-Duplikat). Jede Mutation der Eckpunkte invalidiert den
/// Dreiecks-Cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) vertices: Vec<Vec2>,
    pub(crate) triangles: Option<Vec<Triangle>>,
}

impl Polygon {
    /// Erstellt ein leeres Polygon.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: None,
        }
    }

    /// Eckpunkt-Ring inklusive Abschluss-Duplikat.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Anzahl distinkter Eckpunkte (ohne Abschluss-Duplikat).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Mindestens 3 distinkte Eckpunkte plus Abschluss.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 4
    }

    /// Hängt einen Eckpunkt an und hält das Abschluss-Duplikat aufrecht.
    pub fn push_vertex(&mut self, vertex: Vec2) {
        self.triangles = None;
        if self.vertices.is_empty() {
            self.vertices.push(vertex);
            self.vertices.push(vertex);
        } else {
            let last = self.vertices.len() - 1;
            self.vertices[last] = vertex;
            self.vertices.push(self.vertices[0]);
        }
    }

    /// Entfernt alle Eckpunkte.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles = None;
    }

    /// Entfernt den distinkten Eckpunkt an `index` aus dem Ring.
    ///
    /// Bei `index == 0` wird das Abschluss-Duplikat auf den neuen ersten
    /// Eckpunkt gesetzt. Fällt der Ring unter 2 distinkte Punkte, wird er
    /// geleert.
    pub(crate) fn remove_ring_vertex(&mut self, index: usize) {
        self.triangles = None;
        if self.vertex_count() <= 2 {
            self.vertices.clear();
            return;
        }
        self.vertices.remove(index);
        if index == 0 {
            let first = self.vertices[0];
            let last = self.vertices.len() - 1;
            self.vertices[last] = first;
        }
    }

    /// Achsenparallele Hülle als (min, max); `None` für leere Polygone.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some((min, max))
    }

    /// Vorzeichenlose Fläche (Shoelace über den geschlossenen Ring).
    pub fn area(&self) -> f32 {
        if self.vertices.len() < 4 {
            return 0.0;
        }
        let mut sum = 0.0;
        for pair in self.vertices.windows(2) {
            sum += pair[0].cross_product(pair[1]);
        }
        (0.5 * sum).abs()
    }

    /// Punkt-im-Polygon-Test, Rand inklusive.
    ///
    /// Verwendet die zwischengespeicherte Triangulierung, wenn vorhanden,
    /// sonst Ray-Casting über den Ring.
    pub fn contains(&self, point: Vec2) -> bool {
        if let Some(triangles) = &self.triangles {
            return triangles.iter().any(|t| t.contains(point));
        }
        self.contains_ray_cast(point)
    }

    fn contains_ray_cast(&self, point: Vec2) -> bool {
        if self.vertices.len() < 4 {
            return false;
        }
        let mut inside = false;
        for pair in self.vertices.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            // Randpunkte zählen als enthalten; der reine Strahltest würde
            // sie auf der rechten und oberen Kante verfehlen
            if on_segment(point, p1, p2) {
                return true;
            }
            if (p1.y > point.y) != (p2.y > point.y) {
                let x = p1.x + (p2.x - p1.x) * (point.y - p1.y) / (p2.y - p1.y);
                if point.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Zwischengespeicherte Triangulierung; leer solange `triangulate`
    /// nicht aufgerufen wurde.
    pub fn triangles(&self) -> &[Triangle] {
        self.triangles.as_deref().unwrap_or(&[])
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon({} vertices", self.vertex_count())?;
        if let Some(t) = &self.triangles {
            write!(f, ", {} triangles", t.len())?;
        }
        write!(f, ")")
    }
}
