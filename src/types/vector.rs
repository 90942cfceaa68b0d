// src/types/vector.rs

use glam::Vec2;
use spade::Point2 as SpadeInternalPoint2;

/// Typ für 2D-Punkte, die mit Spade verwendet werden.
pub type SpadePoint = SpadeInternalPoint2<f32>;

/// Konvertiert einen Slice von Vec2 in einen Vec von Spade Points.
pub fn to_spade_points(points: &[Vec2]) -> Vec<SpadePoint> {
    points.iter().map(|p| SpadePoint::new(p.x, p.y)).collect()
}

/// Konvertiert einen Spade Point in ein Vec2.
pub fn from_spade_point(point: SpadePoint) -> Vec2 {
    Vec2::new(point.x, point.y)
}

/// Erweiterte Vektor-Operationen für glam's Vec2.
pub trait Vector2DExt {
    /// 2D-Kreuzprodukt (Skalar): `x1*y2 - y1*x2`.
    fn cross_product(&self, other: Self) -> f32;

    /// Normalisierte CCW-Senkrechte; Nullvektor bei Länge 0.
    fn orthogonal(&self) -> Self
    where
        Self: Sized;

    fn with_length(&self, length: f32) -> Self
    where
        Self: Sized;
}

impl Vector2DExt for Vec2 {
    fn cross_product(&self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    fn orthogonal(&self) -> Self {
        self.perp().normalize_or_zero()
    }

    fn with_length(&self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }
}
