// src/solver/constraint.rs

use crate::math::types::{Point2D, ViewportBounds};
use crate::math::utils::comparison::nearly_zero;
use serde::{Deserialize, Serialize};

/// Relation einer Restriktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inequality {
    #[serde(rename = "MENOR_IGUAL")]
    LessOrEqual,
    #[serde(rename = "MAYOR_IGUAL")]
    GreaterOrEqual,
    #[serde(rename = "IGUAL")]
    Equal,
}

impl Inequality {
    pub fn symbol(&self) -> &'static str {
        match self {
            Inequality::LessOrEqual => "≤",
            Inequality::GreaterOrEqual => "≥",
            Inequality::Equal => "=",
        }
    }
}

/// Restriktion `a1 * x1 + a2 * x2 {≤, ≥, =} rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(rename = "coeficienteX1")]
    pub coefficient_x1: f64,
    #[serde(rename = "coeficienteX2")]
    pub coefficient_x2: f64,
    #[serde(rename = "tipo")]
    pub inequality: Inequality,
    #[serde(rename = "ladoDerecho")]
    pub rhs: f64,
}

impl Constraint {
    pub fn new(
        coefficient_x1: f64,
        coefficient_x2: f64,
        inequality: Inequality,
        rhs: f64,
    ) -> Self {
        Self {
            coefficient_x1,
            coefficient_x2,
            inequality,
            rhs,
        }
    }

    /// Mindestens ein Koeffizient ist von null verschieden.
    pub fn is_valid(&self) -> bool {
        !(nearly_zero(self.coefficient_x1) && nearly_zero(self.coefficient_x2))
    }

    /// Zwei Punkte, um die Randgerade über das Sichtfenster zu zeichnen.
    /// `None` für ungültige Restriktionen (beide Koeffizienten null).
    pub fn line_endpoints(&self, bounds: &ViewportBounds) -> Option<[Point2D; 2]> {
        let (a1, a2, rhs) = (self.coefficient_x1, self.coefficient_x2, self.rhs);

        if !self.is_valid() {
            return None;
        }

        // x1 = konstant (senkrechte Gerade)
        if nearly_zero(a2) {
            let x = rhs / a1;
            return Some([
                Point2D::new(x, bounds.min_y()),
                Point2D::new(x, bounds.max_y()),
            ]);
        }

        // x2 = konstant (waagerechte Gerade)
        if nearly_zero(a1) {
            let y = rhs / a2;
            return Some([
                Point2D::new(bounds.min_x(), y),
                Point2D::new(bounds.max_x(), y),
            ]);
        }

        let y_at = |x: f64| (rhs - a1 * x) / a2;
        Some([
            Point2D::new(bounds.min_x(), y_at(bounds.min_x())),
            Point2D::new(bounds.max_x(), y_at(bounds.max_x())),
        ])
    }

    /// Legenden-Beschriftung, z.B. `R1: 2x₁ + x₂ ≤ 10`.
    pub fn legend_label(&self, number: usize) -> String {
        let term1 = if nearly_zero(self.coefficient_x1) {
            String::new()
        } else {
            let sign = if self.coefficient_x1 < 0.0 { "-" } else { "" };
            format!("{sign}{}x₁", coefficient_text(self.coefficient_x1))
        };

        let term2 = if nearly_zero(self.coefficient_x2) {
            String::new()
        } else {
            let sign = match (term1.is_empty(), self.coefficient_x2 > 0.0) {
                (true, true) => "",
                (true, false) => "-",
                (false, true) => " + ",
                (false, false) => " - ",
            };
            format!("{sign}{}x₂", coefficient_text(self.coefficient_x2))
        };

        format!(
            "R{number}: {term1}{term2} {} {}",
            self.inequality.symbol(),
            self.rhs
        )
    }
}

/// Betrag des Koeffizienten; eine 1 wird weggelassen.
fn coefficient_text(coefficient: f64) -> String {
    let magnitude = coefficient.abs();
    if magnitude == 1.0 {
        String::new()
    } else {
        magnitude.to_string()
    }
}
