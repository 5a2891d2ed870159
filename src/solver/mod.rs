// src/solver/mod.rs

// Datenvertrag mit dem (externen) Solver des grafischen Verfahrens
pub mod constraint;
pub mod response;
pub mod solution_type;
pub mod viewport;

pub use self::constraint::{Constraint, Inequality};
pub use self::response::{SolvedPoint, SolverResponse, VertexHit};
pub use self::solution_type::SolutionType;
pub use self::viewport::{viewport_for_points, viewport_for_response};
