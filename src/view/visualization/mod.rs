// src/view/visualization/mod.rs
pub mod fill;
pub mod frame;
pub mod region;
pub mod svg;
