// src/math/geometry/region/renderable.rs

use super::analysis::{GeometryAnalysis, RegionClassifier};
use crate::math::types::{Point2D, ViewportBounds};
use bevy::log::trace;

/// Wie das darzustellende Polygon entstanden ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionShape {
    /// Keine Vertices; der Datensatz wird nicht gezeichnet.
    Empty,
    /// Einzelner Vertex, zum oberen rechten Rand hin aufgespannt.
    AnchoredQuad,
    /// Zwei Vertices als offenes Segment.
    Segment,
    /// Geschlossenes Polygon, erster Vertex am Ende wiederholt.
    Closed,
    /// Offene Region, um berührte Ecken des Sichtfensters ergänzt.
    Extended { corners_added: usize },
}

impl RegionShape {
    /// Ob die Form als Fläche gefüllt werden kann.
    pub fn is_fillable(&self) -> bool {
        matches!(
            self,
            RegionShape::AnchoredQuad | RegionShape::Closed | RegionShape::Extended { .. }
        )
    }
}

/// Punktfolge, die gefüllt bzw. nachgezogen wird. Immer eine neue Folge,
/// die Eingabe bleibt unverändert.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderablePolygon {
    pub points: Vec<Point2D>,
    pub shape: RegionShape,
}

impl RenderablePolygon {
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            shape: RegionShape::Empty,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkte ohne explizit wiederholten Startpunkt (für Triangulierung und Flächen).
    pub fn ring(&self) -> &[Point2D] {
        match self.points.as_slice() {
            [first, .., last] if first == last => &self.points[..self.points.len() - 1],
            points => points,
        }
    }
}

/// Welche Ränder des Sichtfensters von den Extremwerten der Vertices berührt werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeContact {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl EdgeContact {
    pub fn detect(vertices: &[Point2D], bounds: &ViewportBounds, margin: f64) -> Self {
        let Some(first) = vertices.first() else {
            return Self::default();
        };

        let (mut min, mut max) = (*first, *first);
        for v in vertices {
            min = min.min(*v);
            max = max.max(*v);
        }

        Self {
            left: (min.x - bounds.min_x()).abs() <= margin,
            right: (max.x - bounds.max_x()).abs() <= margin,
            bottom: (min.y - bounds.min_y()).abs() <= margin,
            top: (max.y - bounds.max_y()).abs() <= margin,
        }
    }

    /// Ecken, deren beide angrenzenden Ränder berührt werden.
    /// Reihenfolge: unten rechts, unten links, oben links, oben rechts.
    pub fn touched_corners(&self, bounds: &ViewportBounds) -> Vec<Point2D> {
        let candidates = [
            (self.bottom && self.right, bounds.bottom_right()),
            (self.bottom && self.left, bounds.bottom_left()),
            (self.top && self.left, bounds.top_left()),
            (self.top && self.right, bounds.top_right()),
        ];
        candidates
            .into_iter()
            .filter_map(|(touched, corner)| touched.then_some(corner))
            .collect()
    }
}

impl RegionClassifier {
    /// Baut das darzustellende Polygon aus Vertices, Analyse und Sichtfenster.
    pub fn build_renderable_polygon(
        &self,
        vertices: &[Point2D],
        analysis: &GeometryAnalysis,
        bounds: &ViewportBounds,
    ) -> RenderablePolygon {
        let polygon = match vertices {
            [] => RenderablePolygon::empty(),
            [anchor] => RenderablePolygon {
                points: vec![
                    *anchor,
                    Point2D::new(bounds.max_x(), anchor.y),
                    bounds.top_right(),
                    Point2D::new(anchor.x, bounds.max_y()),
                    *anchor,
                ],
                shape: RegionShape::AnchoredQuad,
            },
            [a, b] => RenderablePolygon {
                points: vec![*a, *b],
                shape: RegionShape::Segment,
            },
            _ if analysis.needs_extension() => {
                let contact = EdgeContact::detect(vertices, bounds, self.config().corner_margin);
                let corners = contact.touched_corners(bounds);
                let mut points = Vec::with_capacity(vertices.len() + corners.len());
                points.extend_from_slice(vertices);
                points.extend_from_slice(&corners);
                RenderablePolygon {
                    points,
                    shape: RegionShape::Extended {
                        corners_added: corners.len(),
                    },
                }
            }
            [first, ..] => {
                let mut points = Vec::with_capacity(vertices.len() + 1);
                points.extend_from_slice(vertices);
                points.push(*first);
                RenderablePolygon {
                    points,
                    shape: RegionShape::Closed,
                }
            }
        };
        trace!(
            "Renderable polygon: {:?} with {} points",
            polygon.shape,
            polygon.len()
        );
        polygon
    }
}

/// Baut das darzustellende Polygon mit den Standard-Schwellwerten.
pub fn build_renderable_polygon(
    vertices: &[Point2D],
    analysis: &GeometryAnalysis,
    bounds: &ViewportBounds,
) -> RenderablePolygon {
    RegionClassifier::default().build_renderable_polygon(vertices, analysis, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::region::analysis::classify;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    fn chart() -> ViewportBounds {
        ViewportBounds::from_limits(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    fn render(vertices: &[Point2D]) -> RenderablePolygon {
        build_renderable_polygon(vertices, &classify(vertices), &chart())
    }

    #[test]
    fn test_empty_input() {
        let polygon = render(&[]);
        assert!(polygon.is_empty());
        assert_eq!(polygon.shape, RegionShape::Empty);
        assert!(!polygon.shape.is_fillable());
    }

    #[test]
    fn test_single_vertex_quad() {
        let polygon = render(&pts(&[(5.0, 5.0)]));
        assert_eq!(
            polygon.points,
            pts(&[(5.0, 5.0), (10.0, 5.0), (10.0, 10.0), (5.0, 10.0), (5.0, 5.0)])
        );
        assert_eq!(polygon.shape, RegionShape::AnchoredQuad);
    }

    #[test]
    fn test_two_vertices_unchanged() {
        let vertices = pts(&[(1.0, 2.0), (3.0, 4.0)]);
        let polygon = render(&vertices);
        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon.points, vertices);
        assert_eq!(polygon.shape, RegionShape::Segment);
    }

    #[test]
    fn test_closed_polygon_repeats_first_vertex() {
        let vertices = pts(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]);
        let polygon = render(&vertices);
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.points[4], vertices[0]);
        assert_eq!(polygon.shape, RegionShape::Closed);
        assert_eq!(polygon.ring(), vertices.as_slice());
    }

    #[test]
    fn test_open_region_gets_touched_corners() {
        // Offene Kette entlang der rechten und oberen Kante, dazu ein Punkt am linken Rand:
        // berührt alle vier Ränder.
        let mut vertices: Vec<Point2D> = (0..=20)
            .map(|i| Point2D::new(10.0, i as f64 * 0.5))
            .collect();
        vertices.push(Point2D::new(0.05, 9.95));
        vertices.insert(0, Point2D::new(9.0, 0.0));
        let analysis = classify(&vertices);
        assert!(!analysis.is_closed_polygon);

        let polygon = build_renderable_polygon(&vertices, &analysis, &chart());
        assert_eq!(polygon.shape, RegionShape::Extended { corners_added: 4 });
        let tail = &polygon.points[vertices.len()..];
        assert_eq!(
            tail,
            pts(&[(10.0, 0.0), (0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]).as_slice()
        );
    }

    #[test]
    fn test_open_region_without_contact() {
        let vertices: Vec<Point2D> = (0..15)
            .map(|i| Point2D::new(2.0 + i as f64 * 0.3, 5.0 + 0.01 * (i % 2) as f64))
            .collect();
        let analysis = classify(&vertices);
        assert!(!analysis.is_closed_polygon);

        let polygon = build_renderable_polygon(&vertices, &analysis, &chart());
        assert_eq!(polygon.points, vertices);
        assert_eq!(polygon.shape, RegionShape::Extended { corners_added: 0 });
    }

    #[test]
    fn test_unbounded_vertex_goes_to_extension() {
        let vertices = pts(&[(0.0, 0.0), (5.0, 0.0), (2e6, 2e6)]);
        let bounds = ViewportBounds::from_limits(0.0, 2e6, 0.0, 2e6).unwrap();
        let analysis = classify(&vertices);
        let polygon = build_renderable_polygon(&vertices, &analysis, &bounds);
        // berührt links, unten, rechts und oben
        assert_eq!(polygon.shape, RegionShape::Extended { corners_added: 4 });
        assert_eq!(polygon.points[3], bounds.bottom_right());
    }

    #[test]
    fn test_edge_contact_margin() {
        let bounds = chart();
        let contact = EdgeContact::detect(&pts(&[(0.09, 3.0), (5.0, 9.95)]), &bounds, 0.1);
        assert!(contact.left && contact.top);
        assert!(!contact.right && !contact.bottom);
        assert_eq!(contact.touched_corners(&bounds), pts(&[(0.0, 10.0)]));
    }

    #[test]
    fn test_edge_contact_margin_is_inclusive() {
        let bounds = chart();
        let on_margin = EdgeContact::detect(&pts(&[(0.1, 3.0), (5.0, 5.0)]), &bounds, 0.1);
        assert!(on_margin.left);

        let outside = EdgeContact::detect(&pts(&[(0.11, 3.0), (5.0, 5.0)]), &bounds, 0.1);
        assert!(!outside.left);
    }

    #[test]
    fn test_open_analysis_is_extended_even_for_square() {
        let square = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let open = GeometryAnalysis {
            is_closed_polygon: false,
            ..classify(&square)
        };
        assert!(open.needs_extension());

        let polygon = build_renderable_polygon(&square, &open, &chart());
        assert_eq!(polygon.shape, RegionShape::Extended { corners_added: 4 });
        assert_eq!(polygon.len(), 8);
    }

    #[test]
    fn test_input_not_mutated() {
        let vertices = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let copy = vertices.clone();
        let _ = render(&vertices);
        assert_eq!(vertices, copy);
    }
}
