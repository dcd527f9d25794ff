//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – orbit model and chaining
//! - [`ParametersConfig`] – step count and step size
//! - [`BodyConfig`]       – name, initial position, mass and reference of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Four bodies nested as D around C around B around A:
//!
//! ```yaml
//! engine:
//!   mode: kepler            # "fixed" or "kepler"
//!   chained: true           # optional, defaults to true for kepler, false for fixed
//!
//! parameters:
//!   steps: 1000             # recorded steps
//!   dt: 1.0                 # optional step size, default 1
//!
//! bodies:
//!   - name: A
//!     x: [0.0, 0.0, 0.0]
//!     m: 1.0e17
//!   - name: B
//!     x: [4.0e3, 1.0e3, 0.0]
//!     m: 1.0e15
//!     orbits: A
//!   - name: C
//!     x: [4.3e3, 1.2e3, 0.0]
//!     m: 1.0e13
//!     orbits: B
//!   - name: D
//!     x: [4.35e3, 1.27e3, 0.0]
//!     m: 1.0e10
//!     orbits: C
//! ```
//!
//! In `fixed` mode each orbiting body takes `angular_velocity` from its own
//! entry, falling back to `engine.angular_velocity`; masses are ignored.
//!
//! The engine then maps this configuration into its runtime scenario
//! representation (see `simulation::scenario`).

use serde::Deserialize;

/// How each orbiting body gets its angular velocity
/// `mode: "fixed"` or `mode: "kepler"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitModeConfig {
    #[serde(rename = "fixed")] // configured constant angular velocity, masses unused
    Fixed,

    #[serde(rename = "kepler")] // angular velocity from the Kepler period of body and reference
    Kepler,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub mode: OrbitModeConfig,         // Where angular velocities come from
    pub chained: Option<bool>,         // Carry reference displacement to orbiters; default depends on mode
    pub angular_velocity: Option<f64>, // Default angular velocity for fixed mode
}

/// Step count and step size for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: usize, // number of recorded steps
    #[serde(default = "default_dt")]
    pub dt: f64,      // time step size
}

fn default_dt() -> f64 {
    1.0
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,                  // Unique label, also used in the output
    pub x: [f64; 3],                   // Initial position
    #[serde(default)]
    pub m: f64,                        // Mass, 0 if omitted
    pub orbits: Option<String>,        // Name of the reference body; None = fixed root
    pub angular_velocity: Option<f64>, // Fixed-mode angular velocity override
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // Engine-level configuration
    pub parameters: ParametersConfig, // Step count and size
    pub bodies: Vec<BodyConfig>,      // Initial state and hierarchy of the bodies
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_yaml_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
