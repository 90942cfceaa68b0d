// src/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Allgemeine Toleranz für geometrische Vergleiche.
    pub const EPSILON: f32 = 1e-6;
    /// Toleranz für Koinzidenz mit Fensterrändern beim Clipping.
    pub const CLIP_EPSILON: f32 = 1e-4;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }
}
