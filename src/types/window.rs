// src/types/window.rs

use crate::error::{GeometryError, GeometryResult};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Achsenparalleles Bau-Fenster eines Diagramm-Durchlaufs.
///
/// Alle Zellen werden gegen dieses Rechteck geclippt; die Randverlängerung
/// offener Fächer projiziert auf seine Kanten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    min: Vec2,
    max: Vec2,
}

impl Window {
    /// Erstellt ein Fenster; `min` muss in beiden Achsen strikt unter `max` liegen.
    pub fn new(min: Vec2, max: Vec2) -> GeometryResult<Self> {
        if min.x >= max.x || min.y >= max.y {
            return Err(GeometryError::InvalidWindow {
                message: format!("min {:?} must be strictly below max {:?}", min, max),
            });
        }
        Ok(Self { min, max })
    }

    /// Erstellt ein Fenster aus zwei beliebigen Eckpunkten.
    pub fn from_points(p1: Vec2, p2: Vec2) -> GeometryResult<Self> {
        Self::new(
            Vec2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            Vec2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        )
    }

    pub fn xmin(&self) -> f32 {
        self.min.x
    }

    pub fn xmax(&self) -> f32 {
        self.max.x
    }

    pub fn ymin(&self) -> f32 {
        self.min.y
    }

    pub fn ymax(&self) -> f32 {
        self.max.y
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Prüft ob ein Punkt im Fenster liegt (Rand inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Zieht einen Punkt komponentenweise auf das Fenster zurück.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Eckpunkte in CCW-Reihenfolge, beginnend unten links.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }

    /// Vergrößert das Fenster in alle Richtungen um `amount`.
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window[{}..{} x {}..{}]",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}
