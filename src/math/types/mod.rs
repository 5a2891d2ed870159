// src/math/types/mod.rs
pub mod bounds;
pub mod point;

pub use bounds::*;
pub use point::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::{DVec2, Vec2};

// Einheitliche Typen für das gesamte Modul.
// Die Geometrie rechnet in f64, gezeichnet wird in f32.
pub type Point2D = DVec2;
pub type RenderPoint = Vec2;
