// src/view/scene.rs
use crate::math::error::MathResult;
use crate::math::geometry::region::{GeometryAnalysis, RegionClassifier, RenderablePolygon};
use crate::math::types::{Point2D, ViewportBounds};
use crate::solver::{SolverResponse, viewport_for_response};
use bevy::prelude::*;

/// Eine Restriktion, fertig zum Zeichnen.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintLine {
    pub label: String,
    pub endpoints: [Point2D; 2],
    /// Farbton in Grad (0..360), gleichmäßig über alle Restriktionen verteilt.
    pub hue: f32,
}

/// Alles, was die Grafik zum Zeichnen braucht. Die Region selbst wird bei jedem
/// Zugriff neu klassifiziert; gespeichert werden nur die Eingaben.
#[derive(Resource, Debug, Clone)]
pub struct ChartScene {
    pub response: SolverResponse,
    pub bounds: ViewportBounds,
    pub classifier: RegionClassifier,
}

impl ChartScene {
    pub fn new(response: SolverResponse, classifier: RegionClassifier) -> MathResult<Self> {
        let bounds = viewport_for_response(&response)?;
        Ok(Self {
            response,
            bounds,
            classifier,
        })
    }

    pub fn title(&self) -> &'static str {
        self.response.solution_type.chart_title()
    }

    /// Klassifiziert die Region und baut das darzustellende Polygon.
    pub fn region(&self) -> (GeometryAnalysis, RenderablePolygon) {
        let vertices = self.response.region_vertices();
        let analysis = self.classifier.classify(&vertices);
        let polygon = self
            .classifier
            .build_renderable_polygon(&vertices, &analysis, &self.bounds);
        (analysis, polygon)
    }

    /// Gültige Restriktionen mit Legendentext und Endpunkten im Sichtfenster.
    pub fn constraint_lines(&self) -> Vec<ConstraintLine> {
        let constraints = &self.response.constraints;
        let spread = constraints.len().max(6) as f32;

        constraints
            .iter()
            .enumerate()
            .filter_map(|(index, constraint)| {
                let Some(endpoints) = constraint.line_endpoints(&self.bounds) else {
                    debug!("Constraint {} has no drawable line", index + 1);
                    return None;
                };
                Some(ConstraintLine {
                    label: constraint.legend_label(index + 1),
                    endpoints,
                    hue: (index as f32 * 360.0 / spread) % 360.0,
                })
            })
            .collect()
    }
}
