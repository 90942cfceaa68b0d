// src/geometry/polygon/clipping.rs

use super::core::Polygon;
use crate::types::Window;
use crate::utils::constants::{CLIP_EPSILON, EPSILON};
use glam::Vec2;

/// Welche Fensterschranke ein außenliegender Eckpunkt verletzt,
/// in Prüfreihenfolge: oben, unten, rechts, links.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Violation {
    Top,
    Bottom,
    Right,
    Left,
}

impl Violation {
    fn classify(v: Vec2, window: &Window) -> Option<Self> {
        if v.y > window.ymax() {
            Some(Self::Top)
        } else if v.y < window.ymin() {
            Some(Self::Bottom)
        } else if v.x > window.xmax() {
            Some(Self::Right)
        } else if v.x < window.xmin() {
            Some(Self::Left)
        } else {
            None
        }
    }

    /// Schnittpunkt der Kante `from -> to` mit der verletzten Schranke.
    /// `from` muss der innen liegende Endpunkt sein; liegt er ebenfalls
    /// jenseits der Schranke, gibt es keinen Schnittpunkt.
    fn edge_intersection(self, from: Vec2, to: Vec2, window: &Window) -> Option<Vec2> {
        match self {
            Self::Top => {
                let bound = window.ymax();
                (from.y < bound)
                    .then(|| Vec2::new(from.x + (to.x - from.x) * ((bound - from.y) / (to.y - from.y)), bound))
            }
            Self::Bottom => {
                let bound = window.ymin();
                (from.y > bound)
                    .then(|| Vec2::new(from.x + (to.x - from.x) * ((bound - from.y) / (to.y - from.y)), bound))
            }
            Self::Right => {
                let bound = window.xmax();
                (from.x < bound)
                    .then(|| Vec2::new(bound, from.y + (to.y - from.y) * ((bound - from.x) / (to.x - from.x))))
            }
            Self::Left => {
                let bound = window.xmin();
                (from.x > bound)
                    .then(|| Vec2::new(bound, from.y + (to.y - from.y) * ((bound - from.x) / (to.x - from.x))))
            }
        }
    }
}

impl Polygon {
    /// Clippt den Ring gegen das Fenster.
    ///
    /// Erste Phase: außenliegende Eckpunkte werden einzeln durch die
    /// Schnittpunkte ihrer beiden anliegenden Kanten mit der verletzten
    /// Schranke ersetzt (beziehungsweise entfernt, wenn keine der Kanten
    /// die Schranke kreuzt), bis kein Eckpunkt mehr außerhalb liegt.
    /// Zweite Phase: wo aufeinanderfolgende Eckpunkte auf zwei benachbarten
    /// Fensterseiten liegen, wird der fehlende Eckpunkt des Fensters
    /// eingefügt (Toleranz `CLIP_EPSILON`).
    ///
    /// Ein vollständig innenliegendes Polygon bleibt unverändert; ein
    /// vollständig außenliegendes wird geleert. Die Operation ist
    /// idempotent und invalidiert den Dreiecks-Cache.
    pub fn clip(&mut self, window: &Window) {
        if self.vertices.len() < 4 {
            self.clear();
            return;
        }
        self.triangles = None;

        self.clip_outside_vertices(window);

        // Reste mit verschwindender Fläche liegen vollständig auf dem Rand
        if self.area() < EPSILON {
            self.clear();
            return;
        }

        self.insert_window_corners(window);
    }

    fn clip_outside_vertices(&mut self, window: &Window) {
        // Der Lauf geht zyklisch über den Ring und repariert jeden außen-
        // liegenden Eckpunkt an Ort und Stelle; ein Eckpunkt wird erst wieder
        // besucht, nachdem seine Nachbarn repariert wurden. Ein Schnittpunkt,
        // der noch jenseits einer Querschranke liegt, landet so in der
        // Folgerunde exakt auf der ursprünglichen Kante. Das Budget deckelt
        // pathologische Ringe.
        let mut budget = 8 * self.vertices.len().max(8);
        let mut i = 0;
        let mut unchanged = 0;

        while budget > 0 {
            let n = self.vertex_count();
            if n < 3 {
                self.clear();
                return;
            }
            if i >= n {
                i = 0;
            }

            let Some(violation) = Violation::classify(self.vertices[i], window) else {
                unchanged += 1;
                if unchanged >= n {
                    return;
                }
                i += 1;
                continue;
            };
            unchanged = 0;
            budget -= 1;

            let prev = self.vertices[if i == 0 { n - 1 } else { i - 1 }];
            let next = self.vertices[i + 1];
            let outside = self.vertices[i];

            let entering = violation.edge_intersection(prev, outside, window);
            let leaving = violation.edge_intersection(next, outside, window);

            match (entering, leaving) {
                (None, None) => {
                    // beide Nachbarn jenseits derselben Schranke: Punkt entfällt
                    self.remove_ring_vertex(i);
                }
                (Some(p), None) | (None, Some(p)) => {
                    self.replace_ring_vertex(i, p);
                    i += 1;
                }
                (Some(p0), Some(p1)) => {
                    self.replace_ring_vertex(i, p0);
                    self.vertices.insert(i + 1, p1);
                    i += 2;
                }
            }
        }
    }

    fn replace_ring_vertex(&mut self, i: usize, v: Vec2) {
        self.vertices[i] = v;
        if i == 0 {
            let last = self.vertices.len() - 1;
            self.vertices[last] = v;
        }
    }

    fn insert_window_corners(&mut self, window: &Window) {
        let (x0, y0) = (window.xmin(), window.ymin());
        let (x1, y1) = (window.xmax(), window.ymax());
        let near = |a: f32, b: f32| (a - b).abs() < CLIP_EPSILON;

        let mut i = 0;
        while i < self.vertex_count() {
            let a = self.vertices[i];
            let b = self.vertices[i + 1];

            // benachbarte Seitenpaare in Umlaufrichtung: links/unten,
            // unten/rechts, rechts/oben, oben/links
            let corner = if near(a.x, x0) && near(b.y, y0) {
                Some(Vec2::new(x0, y0))
            } else if near(a.y, y0) && near(b.x, x1) {
                Some(Vec2::new(x1, y0))
            } else if near(a.x, x1) && near(b.y, y1) {
                Some(Vec2::new(x1, y1))
            } else if near(a.y, y1) && near(b.x, x0) {
                Some(Vec2::new(x0, y1))
            } else {
                None
            };

            if let Some(corner) = corner {
                // nur einfügen, wenn der Eckpunkt nicht schon vorhanden ist
                if a.distance_squared(corner) > CLIP_EPSILON * CLIP_EPSILON
                    && b.distance_squared(corner) > CLIP_EPSILON * CLIP_EPSILON
                {
                    self.vertices.insert(i + 1, corner);
                    i += 1;
                }
            }
            i += 1;
        }
    }
}
