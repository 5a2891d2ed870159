// src/math/geometry/region/mod.rs

// Klassifikation und Aufbereitung der zulässigen Region für die 2D-Darstellung
pub mod analysis;
pub mod config;
pub mod properties;
pub mod renderable;

pub use self::analysis::{AnalysisReason, GeometryAnalysis, RegionClassifier, classify};
pub use self::config::ClassifierConfig;
pub use self::properties::RegionProperties;
pub use self::renderable::{EdgeContact, RegionShape, RenderablePolygon, build_renderable_polygon};
