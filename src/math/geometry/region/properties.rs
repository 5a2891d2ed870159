// src/math/geometry/region/properties.rs

use super::renderable::RenderablePolygon;
use crate::math::error::{MathError, MathResult};
use crate::math::types::{Point2D, PointExt};
use geo::{Area, Centroid, LineString, Polygon};

/// Flächen-Eigenschaften des darzustellenden Polygons.
pub trait RegionProperties {
    /// Fläche des (implizit geschlossenen) Rings.
    fn area(&self) -> f64;

    /// Flächenschwerpunkt, z.B. als Position für Beschriftungen.
    /// `None`, wenn weniger als drei Punkte vorhanden sind oder die Fläche null ist.
    fn label_anchor(&self) -> Option<Point2D>;

    /// Dreiecksindizes (je drei pro Dreieck) in `ring()` für das Füllen.
    fn fill_triangles(&self) -> MathResult<Vec<usize>>;
}

impl RenderablePolygon {
    fn to_geo(&self) -> Option<Polygon<f64>> {
        let ring = self.ring();
        if ring.len() < 3 {
            return None;
        }
        let exterior: LineString<f64> = ring.iter().map(PointExt::to_coord).collect();
        Some(Polygon::new(exterior, vec![]))
    }
}

impl RegionProperties for RenderablePolygon {
    fn area(&self) -> f64 {
        self.to_geo().map_or(0.0, |p| p.unsigned_area())
    }

    fn label_anchor(&self) -> Option<Point2D> {
        if self.area() <= 0.0 {
            return None;
        }
        let polygon = self.to_geo()?;
        polygon.centroid().map(|c| Point2D::new(c.x(), c.y()))
    }

    fn fill_triangles(&self) -> MathResult<Vec<usize>> {
        let ring = self.ring();
        if ring.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: ring.len(),
            });
        }

        let coords: Vec<f64> = ring.iter().flat_map(|p| [p.x, p.y]).collect();
        let indices = earcutr::earcut(&coords, &[], 2).map_err(|e| MathError::GeometricFailure {
            operation: format!("earcut triangulation: {:?}", e),
        })?;

        if indices.len() % 3 != 0 {
            return Err(MathError::GeometricFailure {
                operation: format!("earcut returned {} indices", indices.len()),
            });
        }
        Ok(indices)
    }
}
