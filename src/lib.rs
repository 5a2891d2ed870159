// ./src/lib.rs

// Eigene Module deklarieren
pub mod args;
pub mod math;
pub mod setup; // Kamera-Setup
pub mod solver;
pub mod view;

pub use math::prelude;
