//! Utility Module
//!
//! - [`OrbitControls`]: orbit camera driven by abstract rotate/zoom input

pub mod orbit_control;

pub use orbit_control::OrbitControls;
