// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Kreuzprodukte mit Betrag <= EPSILON gelten als kollinear.
    pub const EPSILON: f64 = 1e-6;
    /// Toleranz beim Vergleich von Koordinaten (Tooltip-Lookup, Koeffizienten).
    pub const COORD_EPSILON: f64 = 1e-4;
    /// Koeffizienten unterhalb dieser Schwelle gelten als null.
    pub const COEFF_EPSILON: f64 = 1e-10;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::COEFF_EPSILON;

    /// Prüft ob ein Koeffizient (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < COEFF_EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::DVec2;

    /// Berechnet das Kreuzprodukt zweier 2D-Vektoren (Skalar)
    pub fn cross_product_2d(a: DVec2, b: DVec2) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// Kreuzprodukt der Kanten (p2-p1) und (p3-p2)
    pub fn turn(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
        cross_product_2d(p2 - p1, p3 - p2)
    }
}
