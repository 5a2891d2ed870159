// src/solver/response.rs

use super::{constraint::Constraint, solution_type::SolutionType};
use crate::math::error::MathResult;
use crate::math::types::{Point2D, PointExt};
use crate::math::utils::constants;
use bevy::log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Punkt, wie ihn der Solver liefert (mit ausgewerteter Zielfunktion).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedPoint {
    pub x1: f64,
    pub x2: f64,
    #[serde(rename = "valorZ", default)]
    pub objective_value: f64,
    #[serde(rename = "esFactible", default)]
    pub is_feasible: bool,
}

impl SolvedPoint {
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x1, self.x2)
    }
}

/// Antwort des Solvers für das grafische Verfahren.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    #[serde(rename = "puntoOptimo", default)]
    pub optimum: Option<SolvedPoint>,
    /// Alle ausgewerteten Eckpunkte (für Tooltips).
    #[serde(default)]
    pub vertices: Vec<SolvedPoint>,
    /// Geordneter Rand der zulässigen Region.
    #[serde(rename = "regionFactible", default)]
    pub region: Vec<SolvedPoint>,
    #[serde(rename = "tipoSolucion")]
    pub solution_type: SolutionType,
    #[serde(rename = "restricciones", default)]
    pub constraints: Vec<Constraint>,
}

/// Treffer beim Nachschlagen eines Eckpunkts unter dem Mauszeiger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexHit {
    pub position: Point2D,
    pub objective_value: f64,
    pub is_optimum: bool,
}

impl SolverResponse {
    pub fn from_json_str(json: &str) -> MathResult<Self> {
        let response: Self = serde_json::from_str(json)?;
        debug!(
            "Solver response parsed: {} region points, {} vertices, {} constraints, type {}",
            response.region.len(),
            response.vertices.len(),
            response.constraints.len(),
            response.solution_type
        );
        Ok(response)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> MathResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Randfolge der Region als Geometrie-Punkte, Reihenfolge unverändert.
    pub fn region_vertices(&self) -> Vec<Point2D> {
        self.region.iter().map(SolvedPoint::position).collect()
    }

    /// Alle Punkte, die in der Grafik erscheinen (Region, Eckpunkte, Optimum).
    pub fn plotted_points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.region
            .iter()
            .chain(self.vertices.iter())
            .chain(self.optimum.iter())
            .map(SolvedPoint::position)
    }

    /// Sucht den ausgewerteten Eckpunkt an `position` (Toleranz 1e-4).
    pub fn vertex_at(&self, position: Point2D) -> Option<VertexHit> {
        let vertex = self
            .vertices
            .iter()
            .find(|v| v.position().nearly_equals(position, constants::COORD_EPSILON))?;

        let is_optimum = self.optimum.is_some_and(|optimum| {
            optimum
                .position()
                .nearly_equals(vertex.position(), constants::COORD_EPSILON)
        });

        Some(VertexHit {
            position: vertex.position(),
            objective_value: vertex.objective_value,
            is_optimum,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "puntoOptimo": { "x1": 2.0, "x2": 6.0, "valorZ": 36.0, "esFactible": true },
        "vertices": [
            { "x1": 0.0, "x2": 0.0, "valorZ": 0.0, "esFactible": true },
            { "x1": 4.0, "x2": 0.0, "valorZ": 12.0, "esFactible": true },
            { "x1": 4.0, "x2": 3.0, "valorZ": 27.0, "esFactible": true },
            { "x1": 2.0, "x2": 6.0, "valorZ": 36.0, "esFactible": true },
            { "x1": 0.0, "x2": 6.0, "valorZ": 30.0, "esFactible": true }
        ],
        "regionFactible": [
            { "x1": 0.0, "x2": 0.0 },
            { "x1": 4.0, "x2": 0.0 },
            { "x1": 4.0, "x2": 3.0 },
            { "x1": 2.0, "x2": 6.0 },
            { "x1": 0.0, "x2": 6.0 }
        ],
        "tipoSolucion": "UNICA",
        "restricciones": [
            { "coeficienteX1": 1, "coeficienteX2": 0, "tipo": "MENOR_IGUAL", "ladoDerecho": 4 },
            { "coeficienteX1": 0, "coeficienteX2": 2, "tipo": "MENOR_IGUAL", "ladoDerecho": 12 },
            { "coeficienteX1": 3, "coeficienteX2": 2, "tipo": "MENOR_IGUAL", "ladoDerecho": 18 }
        ]
    }"#;

    #[test]
    fn test_parse_full_response() {
        let response = SolverResponse::from_json_str(RESPONSE).unwrap();
        assert_eq!(response.solution_type, SolutionType::Unique);
        assert_eq!(response.region.len(), 5);
        assert_eq!(response.constraints.len(), 3);
        assert_eq!(response.region_vertices()[2], Point2D::new(4.0, 3.0));
        // Region + Eckpunkte + Optimum
        assert_eq!(response.plotted_points().count(), 11);
    }

    #[test]
    fn test_minimal_response() {
        let response =
            SolverResponse::from_json_str(r#"{ "tipoSolucion": "NO_FACTIBLE" }"#).unwrap();
        assert!(response.optimum.is_none());
        assert!(response.region_vertices().is_empty());
        assert!(SolverResponse::from_json_str("{}").is_err());
    }

    #[test]
    fn test_vertex_lookup() {
        let response = SolverResponse::from_json_str(RESPONSE).unwrap();

        let hit = response.vertex_at(Point2D::new(2.00001, 5.99999)).unwrap();
        assert_eq!(hit.objective_value, 36.0);
        assert!(hit.is_optimum);

        let hit = response.vertex_at(Point2D::new(4.0, 3.0)).unwrap();
        assert_eq!(hit.objective_value, 27.0);
        assert!(!hit.is_optimum);

        assert!(response.vertex_at(Point2D::new(1.0, 1.0)).is_none());
    }
}
