//! Fixed-step run loop
//!
//! Each step writes one `"<name>, <x>, <y>, <z>"` line per body and then
//! replaces the working set with the next state. The first error (I/O or
//! geometry) aborts the run.

use std::io::Write;

use tracing::info;

use crate::error::Result;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

/// Write one record per body of `sys`
pub fn write_records<W: Write>(sys: &System, out: &mut W) -> Result<()> {
    for body in &sys.bodies {
        writeln!(out, "{body}")?;
    }
    Ok(())
}

/// Run `scenario.parameters.steps` steps from the scenario's initial state,
/// recording every body before each step. Returns the state after the last step.
pub fn run<W: Write>(scenario: &Scenario, out: &mut W) -> Result<System> {
    let steps = scenario.parameters.steps;
    info!(steps, "run started");

    let mut sys = scenario.system.clone();
    for _ in 0..steps {
        write_records(&sys, out)?;
        sys = scenario.step(&sys)?;
    }
    out.flush()?;

    info!(t = sys.t, records = steps * sys.bodies.len(), "run finished");
    Ok(sys)
}
