// src/view/visualization/frame.rs
use crate::math::types::{Point2D, RenderPoint, ViewportBounds};
use bevy::prelude::*;

/// Abbildung zwischen Datenkoordinaten und Weltkoordinaten der 2D-Kamera.
/// Das Sichtfenster wird auf ein Rechteck der Größe `size` um den Ursprung gelegt.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub bounds: ViewportBounds,
    pub size: Vec2,
}

impl ChartFrame {
    pub fn new(bounds: ViewportBounds, size: Vec2) -> Self {
        Self { bounds, size }
    }

    pub fn to_world(&self, point: Point2D) -> RenderPoint {
        let n = self.bounds.normalize(point);
        Vec2::new(
            (n.x as f32 - 0.5) * self.size.x,
            (n.y as f32 - 0.5) * self.size.y,
        )
    }

    pub fn world_points(&self, points: &[Point2D]) -> Vec<Vec2> {
        points.iter().map(|p| self.to_world(*p)).collect()
    }
}
