pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::vectors::{CartesianVector, PolarVector, Spherical};
pub use simulation::states::{Body, System};
pub use simulation::forces::{AngularRate, FixedRate, KeplerRate, G, gravitational_force, kepler_period, kepler_angular_velocity};
pub use simulation::hierarchy::{Hierarchy, Link};
pub use simulation::integrator::{orbit, orbit_with, chained_step, independent_step};
pub use simulation::scenario::Scenario;
pub use simulation::runner::{run, write_records};

pub use configuration::config::{OrbitModeConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use error::{SimError, Result};
