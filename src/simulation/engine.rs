//! High-level runtime engine settings
//!
//! Selects how angular velocities are obtained and whether a reference body's
//! motion is carried to its orbiters within a step

use crate::configuration::config::OrbitModeConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub mode: OrbitModeConfig, // fixed or kepler
    pub chained: bool,         // true = propagate reference displacements
}
