// src/math/geometry/mod.rs

pub mod region;

// Re-Exporte für einen schnellen Zugriff auf die Regions-Typen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::region::{
    AnalysisReason, ClassifierConfig, EdgeContact, GeometryAnalysis, RegionClassifier,
    RegionProperties, RegionShape, RenderablePolygon, build_renderable_polygon, classify,
};
