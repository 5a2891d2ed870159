// src/math/geometry/region/analysis.rs

use super::config::ClassifierConfig;
use crate::math::types::{Point2D, PointExt};
use crate::math::utils::simple_geometry;
use bevy::log::trace;

/// Warum eine Analyse so ausgefallen ist, wie sie ausgefallen ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisReason {
    /// Mindestens drei Vertices, alle Schritte wurden ausgeführt.
    Analysed,
    /// Weniger als drei Vertices; Schließung und Konvexität sind nicht definiert.
    InsufficientVertices { count: usize },
}

/// Ergebnis der geometrischen Analyse einer Vertex-Sequenz.
/// Wird bei jedem Render neu berechnet und nirgends gespeichert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryAnalysis {
    pub is_closed_polygon: bool,
    pub is_convex: bool,
    /// Schließkante / mittlere Kantenlänge. Nur bei >= 3 Vertices aussagekräftig.
    pub closure_ratio: f64,
    /// Mittel über alle n Kanten, Schließkante eingeschlossen.
    pub average_edge_length: f64,
    pub has_unbounded_vertex: bool,
    pub reason: AnalysisReason,
}

impl GeometryAnalysis {
    fn insufficient(count: usize, has_unbounded_vertex: bool) -> Self {
        Self {
            is_closed_polygon: false,
            is_convex: false,
            closure_ratio: 0.0,
            average_edge_length: 0.0,
            has_unbounded_vertex,
            reason: AnalysisReason::InsufficientVertices { count },
        }
    }

    /// true, wenn die Region für die Darstellung erweitert werden muss.
    pub fn needs_extension(&self) -> bool {
        self.reason == AnalysisReason::Analysed && !self.is_closed_polygon
    }
}

/// Klassifiziert die vom Solver gelieferte Randfolge der zulässigen Region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionClassifier {
    config: ClassifierConfig,
}

impl RegionClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, vertices: &[Point2D]) -> GeometryAnalysis {
        let has_unbounded_vertex = vertices
            .iter()
            .any(|v| v.exceeds_magnitude(self.config.unbounded_magnitude));

        let n = vertices.len();
        if n < 3 {
            return GeometryAnalysis::insufficient(n, has_unbounded_vertex);
        }

        let (closure_ratio, average_edge_length) = closure_metrics(vertices);
        let ratio_closed = closure_ratio <= self.config.closure_ratio_threshold;
        let is_convex = has_consistent_turns(vertices, self.config.collinear_epsilon);

        let analysis = GeometryAnalysis {
            is_closed_polygon: ratio_closed && !has_unbounded_vertex,
            is_convex,
            closure_ratio,
            average_edge_length,
            has_unbounded_vertex,
            reason: AnalysisReason::Analysed,
        };
        trace!("Region classified: {:?}", analysis);
        analysis
    }
}

/// Klassifiziert mit den Standard-Schwellwerten.
pub fn classify(vertices: &[Point2D]) -> GeometryAnalysis {
    RegionClassifier::default().classify(vertices)
}

/// Liefert (closure_ratio, average_edge_length) für n >= 3 Vertices.
fn closure_metrics(vertices: &[Point2D]) -> (f64, f64) {
    let n = vertices.len();
    let consecutive: f64 = vertices.windows(2).map(|w| w[0].distance(w[1])).sum();
    let closure_distance = vertices[n - 1].distance(vertices[0]);

    let average_edge_length = (consecutive + closure_distance) / n as f64;
    // Alle Punkte identisch: keine Kante, keine Lücke.
    let closure_ratio = if average_edge_length > 0.0 {
        closure_distance / average_edge_length
    } else {
        0.0
    };
    (closure_ratio, average_edge_length)
}

/// Zyklische Prüfung der Drehrichtung. Kollineare Tripel werden übersprungen,
/// ein einziger Vorzeichenwechsel macht die Folge nicht-konvex.
fn has_consistent_turns(vertices: &[Point2D], collinear_epsilon: f64) -> bool {
    let n = vertices.len();
    let mut sign_of_cross_product: Option<bool> = None;

    for i in 0..n {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % n];
        let p3 = vertices[(i + 2) % n];

        let cross = simple_geometry::turn(p1, p2, p3);
        if cross.abs() <= collinear_epsilon {
            continue;
        }

        let current_sign = cross > 0.0;
        match sign_of_cross_product {
            Some(expected_sign) if expected_sign != current_sign => return false,
            Some(_) => {}
            None => sign_of_cross_product = Some(current_sign),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn test_square_and_triangle_are_closed_convex() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let analysis = classify(&square);
        assert!(analysis.is_closed_polygon);
        assert!(analysis.is_convex);
        assert_relative_eq!(analysis.closure_ratio, 1.0);
        assert_relative_eq!(analysis.average_edge_length, 1.0);

        let h = 3.0_f64.sqrt() / 2.0;
        let triangle = pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, h)]);
        let analysis = classify(&triangle);
        assert!(analysis.is_closed_polygon);
        assert!(analysis.is_convex);
        assert_eq!(analysis.reason, AnalysisReason::Analysed);
    }

    #[test]
    fn test_collinear_points_are_convex() {
        let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let analysis = classify(&line);
        assert!(analysis.is_convex);
    }

    #[test]
    fn test_open_right_triangle_ratio() {
        let vertices = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let analysis = classify(&vertices);
        assert_relative_eq!(analysis.average_edge_length, 4.0);
        assert_relative_eq!(analysis.closure_ratio, 1.25);
        assert!(analysis.is_closed_polygon);
    }

    #[test]
    fn test_long_chain_is_open() {
        // Stufenkette: die Schließkante ist viel länger als der Rest.
        let chain: Vec<Point2D> = (0..20)
            .map(|i| Point2D::new(i as f64, 0.1 * (i % 2) as f64))
            .collect();
        let analysis = classify(&chain);
        assert!(analysis.closure_ratio > 5.0);
        assert!(!analysis.is_closed_polygon);
        assert!(analysis.needs_extension());
    }

    #[test]
    fn test_closure_threshold_is_inclusive() {
        // Schließkante 9, mittlere Kante 18 / 10 = 1.8 -> Verhältnis genau 5.0
        let ten: Vec<Point2D> = (0..10).map(|i| Point2D::new(i as f64, 0.0)).collect();
        let analysis = classify(&ten);
        assert_eq!(analysis.closure_ratio, 5.0);
        assert!(analysis.is_closed_polygon);

        // Schließkante 10, mittlere Kante 20 / 11 -> 5.5
        let eleven: Vec<Point2D> = (0..11).map(|i| Point2D::new(i as f64, 0.0)).collect();
        let analysis = classify(&eleven);
        assert!(analysis.closure_ratio > 5.0);
        assert!(!analysis.is_closed_polygon);
    }

    #[test]
    fn test_concave_is_not_convex() {
        let arrow = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 1.0), (0.0, 4.0)]);
        let analysis = classify(&arrow);
        assert!(!analysis.is_convex);
        assert!(analysis.is_closed_polygon);
    }

    #[test]
    fn test_unbounded_vertex_forces_open() {
        let vertices = pts(&[(0.0, 0.0), (2e6, 0.0), (0.0, 1.0)]);
        let analysis = classify(&vertices);
        assert!(analysis.has_unbounded_vertex);
        assert!(!analysis.is_closed_polygon);
    }

    #[test]
    fn test_insufficient_vertices() {
        for count in 0..3 {
            let vertices: Vec<Point2D> = (0..count).map(|i| Point2D::new(i as f64, 0.0)).collect();
            let analysis = classify(&vertices);
            assert!(!analysis.is_closed_polygon);
            assert!(!analysis.is_convex);
            assert_eq!(analysis.reason, AnalysisReason::InsufficientVertices { count });
            assert!(!analysis.needs_extension());
        }
    }

    #[test]
    fn test_coincident_points() {
        let vertices = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        let analysis = classify(&vertices);
        assert_eq!(analysis.closure_ratio, 0.0);
        assert_eq!(analysis.average_edge_length, 0.0);
        assert!(analysis.is_convex);
    }

    #[test]
    fn test_classify_is_repeatable() {
        let vertices = pts(&[(0.0, 0.0), (3.0, 0.5), (2.5, 4.0), (0.2, 2.0)]);
        assert_eq!(classify(&vertices), classify(&vertices));
    }

    #[test]
    fn test_custom_threshold() {
        let vertices = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let strict =
            RegionClassifier::new(ClassifierConfig::new().with_closure_ratio_threshold(1.0));
        assert!(!strict.classify(&vertices).is_closed_polygon);
    }
}
