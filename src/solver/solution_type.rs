// src/solver/solution_type.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art der Lösung, die der Solver für das grafische Verfahren meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionType {
    /// Genau ein optimaler Punkt.
    #[serde(rename = "UNICA")]
    Unique,
    /// Unendlich viele Optima: die Zielfunktion ist parallel zu einer aktiven Restriktion.
    #[serde(rename = "MULTIPLE")]
    Multiple,
    /// Die Restriktionen widersprechen sich, es gibt keine zulässige Region.
    #[serde(rename = "NO_FACTIBLE")]
    Infeasible,
    /// Die zulässige Region ist nicht beschränkt.
    #[serde(rename = "NO_ACOTADO")]
    Unbounded,
}

impl SolutionType {
    /// Titel der Grafik.
    pub fn chart_title(&self) -> &'static str {
        match self {
            SolutionType::Unique => "Zulässige Region und optimaler Punkt",
            SolutionType::Multiple => "Zulässige Region - mehrere Optima",
            SolutionType::Infeasible => "Keine zulässige Region",
            SolutionType::Unbounded => "Zulässige Region (unbeschränkt)",
        }
    }

    /// Ob es überhaupt eine Region zum Zeichnen gibt.
    pub fn has_region(&self) -> bool {
        !matches!(self, SolutionType::Infeasible)
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SolutionType::Unique => "unique",
            SolutionType::Multiple => "multiple",
            SolutionType::Infeasible => "infeasible",
            SolutionType::Unbounded => "unbounded",
        };
        f.write_str(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let parsed: Vec<SolutionType> =
            serde_json::from_str(r#"["UNICA", "MULTIPLE", "NO_FACTIBLE", "NO_ACOTADO"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                SolutionType::Unique,
                SolutionType::Multiple,
                SolutionType::Infeasible,
                SolutionType::Unbounded
            ]
        );
        assert!(serde_json::from_str::<SolutionType>(r#""DESCONOCIDO""#).is_err());
    }

    #[test]
    fn test_flags() {
        assert!(!SolutionType::Infeasible.has_region());
        assert!(SolutionType::Unbounded.has_region());
        assert_eq!(SolutionType::Unbounded.to_string(), "unbounded");
    }
}
