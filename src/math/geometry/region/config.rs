// src/math/geometry/region/config.rs
use crate::math::error::{MathError, MathResult};
use serde::Deserialize;
use std::path::Path;

/// Schwellwerte für Klassifikation und Erweiterung der Region.
///
/// Alle Werte sind empirische Heuristiken, keine geometrisch hergeleiteten Größen.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Maximales Verhältnis Schließkante / mittlere Kantenlänge für ein geschlossenes Polygon.
    pub closure_ratio_threshold: f64,
    /// Kreuzprodukte mit kleinerem Betrag gelten als kollinear.
    pub collinear_epsilon: f64,
    /// Koordinaten oberhalb dieses Betrags markieren eine unbeschränkte Region.
    pub unbounded_magnitude: f64,
    /// Abstand, innerhalb dessen ein Extremwert den Rand des Sichtfensters "berührt".
    pub corner_margin: f64,
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_closure_ratio_threshold(mut self, threshold: f64) -> Self {
        self.closure_ratio_threshold = threshold;
        self
    }

    pub fn with_collinear_epsilon(mut self, epsilon: f64) -> Self {
        self.collinear_epsilon = epsilon;
        self
    }

    pub fn with_unbounded_magnitude(mut self, magnitude: f64) -> Self {
        self.unbounded_magnitude = magnitude;
        self
    }

    pub fn with_corner_margin(mut self, margin: f64) -> Self {
        self.corner_margin = margin;
        self
    }

    /// Lädt die Schwellwerte aus einer JSON-Datei. Fehlende Felder behalten ihren Standardwert.
    pub fn from_json_file(path: impl AsRef<Path>) -> MathResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MathResult<()> {
        let fields = [
            ("closureRatioThreshold", self.closure_ratio_threshold),
            ("collinearEpsilon", self.collinear_epsilon),
            ("unboundedMagnitude", self.unbounded_magnitude),
            ("cornerMargin", self.corner_margin),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(MathError::InvalidConfiguration {
                    message: format!("{name} must be finite and greater than 0, got {value}"),
                });
            }
        }

        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            closure_ratio_threshold: 5.0,
            collinear_epsilon: 1e-6,
            unbounded_magnitude: 1e6,
            corner_margin: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ClassifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ClassifierConfig::new().with_corner_margin(0.0);
        assert!(config.validate().is_err());

        let config = ClassifierConfig::new().with_closure_ratio_threshold(f64::INFINITY);
        assert!(config.validate().is_err());

        let config = ClassifierConfig::new().with_unbounded_magnitude(-1.0);
        assert!(matches!(
            config.validate(),
            Err(MathError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{ "closureRatioThreshold": 2.5 }"#).unwrap();
        assert_eq!(config.closure_ratio_threshold, 2.5);
        assert_eq!(config.corner_margin, 0.1);
        assert_eq!(config.unbounded_magnitude, 1e6);
    }
}
