// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// Sichtfenster der Grafik (Achsen-ausgerichtetes Rechteck in Datenkoordinaten).
/// Es gilt immer `min.x < max.x` und `min.y < max.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub min: Point2D,
    pub max: Point2D,
}

impl ViewportBounds {
    /// Erstellt ein neues Sichtfenster
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(MathError::InvalidBounds {
                message: format!("non-finite bounds: min {:?}, max {:?}", min, max),
            });
        }
        if min.x >= max.x || min.y >= max.y {
            return Err(MathError::InvalidBounds {
                message: format!("min {:?} must be strictly below max {:?}", min, max),
            });
        }

        Ok(Self { min, max })
    }

    /// Kurzform mit den vier Grenzwerten
    pub fn from_limits(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> MathResult<Self> {
        Self::new(Point2D::new(min_x, min_y), Point2D::new(max_x, max_y))
    }

    /// Standardfenster 0..10 auf beiden Achsen
    pub fn unit_chart() -> Self {
        Self {
            min: Point2D::ZERO,
            max: Point2D::new(10.0, 10.0),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    /// Breite des Sichtfensters
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe des Sichtfensters
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Prüft ob ein Punkt im Sichtfenster liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn bottom_left(&self) -> Point2D {
        self.min
    }

    pub fn bottom_right(&self) -> Point2D {
        Point2D::new(self.max.x, self.min.y)
    }

    pub fn top_left(&self) -> Point2D {
        Point2D::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> Point2D {
        self.max
    }

    /// Erzeugt die vier Eckpunkte (gegen den Uhrzeigersinn, unten links beginnend)
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.bottom_left(),
            self.bottom_right(),
            self.top_right(),
            self.top_left(),
        ]
    }

    /// Normiert einen Punkt auf [0, 1]² relativ zum Sichtfenster.
    pub fn normalize(&self, point: Point2D) -> Point2D {
        Point2D::new(
            (point.x - self.min.x) / self.width(),
            (point.y - self.min.y) / self.height(),
        )
    }
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self::unit_chart()
    }
}

impl fmt::Display for ViewportBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ViewportBounds(x: {}..{}, y: {}..{})",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}
