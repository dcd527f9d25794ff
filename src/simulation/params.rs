//! Numerical parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - number of fixed steps to record,
//! - step size `dt` (seconds for the Kepler model, free units for fixed rates)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub steps: usize, // number of recorded steps
    pub dt: f64,      // step size
}
