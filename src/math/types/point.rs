// src/math/types/point.rs
use super::*;

/// Erweiterungen für Regions-Punkte (f64).
pub trait PointExt {
    /// Komponentenweiser Vergleich mit Toleranz.
    fn nearly_equals(&self, other: Self, epsilon: f64) -> bool;

    /// true, wenn eine Koordinate betragsmäßig größer als `magnitude` ist.
    fn exceeds_magnitude(&self, magnitude: f64) -> bool;

    fn to_coord(&self) -> geo::Coord<f64>;
}

impl PointExt for Point2D {
    fn nearly_equals(&self, other: Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    fn exceeds_magnitude(&self, magnitude: f64) -> bool {
        self.x.abs() > magnitude || self.y.abs() > magnitude
    }

    fn to_coord(&self) -> geo::Coord<f64> {
        geo::Coord {
            x: self.x,
            y: self.y,
        }
    }
}
