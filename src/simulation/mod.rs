pub mod vectors;
pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod hierarchy;
pub mod integrator;
pub mod scenario;
pub mod runner;
