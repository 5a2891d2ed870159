// src/solver/viewport.rs

use super::response::SolverResponse;
use crate::math::error::MathResult;
use crate::math::types::{Point2D, ViewportBounds};
use bevy::log::debug;

/// Relativer Rand um die gezeichneten Punkte.
const MARGIN_FRACTION: f64 = 0.15;
/// Mindestrand in Dateneinheiten.
const MIN_MARGIN: f64 = 1.0;

/// Berechnet das Sichtfenster aus allen gezeichneten Punkten.
///
/// Die Achsen enthalten immer den Ursprung und mindestens 1 Einheit, bekommen
/// 15 % Rand (mindestens 1), werden unten bei 0 abgeschnitten und nach außen
/// auf ganze Zahlen gerundet. Ohne Punkte gilt das Standardfenster 0..10.
pub fn viewport_for_points<I>(points: I) -> MathResult<ViewportBounds>
where
    I: IntoIterator<Item = Point2D>,
{
    let mut finite = points.into_iter().filter(|p| p.is_finite()).peekable();
    if finite.peek().is_none() {
        return Ok(ViewportBounds::unit_chart());
    }

    let mut min = Point2D::ZERO;
    let mut max = Point2D::ONE;
    for p in finite {
        min = min.min(p);
        max = max.max(p);
    }

    let margin = ((max - min) * MARGIN_FRACTION).max(Point2D::splat(MIN_MARGIN));
    let min = (min - margin).max(Point2D::ZERO).floor();
    let max = (max + margin).ceil();

    debug!("Viewport computed: {:?} .. {:?}", min, max);
    ViewportBounds::new(min, max)
}

/// Sichtfenster für eine Solver-Antwort.
pub fn viewport_for_response(response: &SolverResponse) -> MathResult<ViewportBounds> {
    viewport_for_points(response.plotted_points())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_default_chart() {
        let bounds = viewport_for_points(std::iter::empty()).unwrap();
        assert_eq!(bounds, ViewportBounds::unit_chart());
    }

    #[test]
    fn test_margin_and_rounding() {
        let points = [Point2D::new(4.0, 3.0), Point2D::new(2.0, 6.0)];
        let bounds = viewport_for_points(points).unwrap();
        // x: 0..4, Rand max(0.6, 1) = 1 -> 0..5
        // y: 0..6, Rand 0.9 -> min 1 -> 0..7
        assert_eq!(bounds.min, Point2D::ZERO);
        assert_eq!(bounds.max, Point2D::new(5.0, 7.0));
    }

    #[test]
    fn test_large_extent_uses_relative_margin() {
        let points = [Point2D::new(100.0, 40.0)];
        let bounds = viewport_for_points(points).unwrap();
        // 100 * 0.15 = 15, 40 * 0.15 = 6
        assert_eq!(bounds.max, Point2D::new(115.0, 46.0));
        assert_eq!(bounds.min, Point2D::ZERO);
    }

    #[test]
    fn test_non_finite_points_are_ignored() {
        let points = [Point2D::new(f64::NAN, 3.0), Point2D::new(2.0, 2.0)];
        let bounds = viewport_for_points(points).unwrap();
        assert_eq!(bounds.max, Point2D::new(3.0, 3.0));
    }
}
