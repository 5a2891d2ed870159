// ./src/args.rs
use crate::math::error::{MathError, MathResult};
use std::path::PathBuf;

const USAGE: &str = "usage: feasible-region-viewer <response.json> [--config <thresholds.json>] [--svg <out.svg>]";

/// Startparameter des Viewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerArgs {
    /// JSON-Antwort des Solvers.
    pub response: PathBuf,
    /// Optionale Schwellwerte für die Klassifikation.
    pub config: Option<PathBuf>,
    /// Wenn gesetzt: nur SVG schreiben, kein Fenster öffnen.
    pub svg: Option<PathBuf>,
}

impl ViewerArgs {
    /// Parst die Argumente ohne den Programmnamen.
    pub fn parse<I>(args: I) -> MathResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut response = None;
        let mut config = None;
        let mut svg = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config = Some(Self::value_for(&arg, args.next())?),
                "--svg" => svg = Some(Self::value_for(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(MathError::InvalidConfiguration {
                        message: format!("unknown option '{flag}'; {USAGE}"),
                    });
                }
                _ if response.is_none() => response = Some(PathBuf::from(arg)),
                _ => {
                    return Err(MathError::InvalidConfiguration {
                        message: format!("unexpected argument '{arg}'; {USAGE}"),
                    });
                }
            }
        }

        let response = response.ok_or_else(|| MathError::InvalidConfiguration {
            message: format!("missing solver response path; {USAGE}"),
        })?;

        Ok(Self {
            response,
            config,
            svg,
        })
    }

    fn value_for(flag: &str, value: Option<String>) -> MathResult<PathBuf> {
        value
            .map(PathBuf::from)
            .ok_or_else(|| MathError::InvalidConfiguration {
                message: format!("option '{flag}' needs a path; {USAGE}"),
            })
    }
}
