//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - orbit hierarchy with one angular rate per orbiting body (`Hierarchy`)

use std::collections::HashMap;

use tracing::{info, warn};

use crate::configuration::config::{BodyConfig, OrbitModeConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{FixedRate, KeplerRate};
use crate::simulation::hierarchy::{Hierarchy, Link};
use crate::simulation::integrator::{chained_step, independent_step};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vectors::CartesianVector;

/// Fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, initial system state and
/// the orbit hierarchy. The run loop reads it and never changes it.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub hierarchy: Hierarchy,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !p_cfg.dt.is_finite() || p_cfg.dt <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "dt must be finite and positive, got {}",
                p_cfg.dt
            )));
        }
        let parameters = Parameters {
            steps: p_cfg.steps,
            dt: p_cfg.dt,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            mode: e_cfg.mode,
            chained: e_cfg.chained.unwrap_or(e_cfg.mode == OrbitModeConfig::Kepler),
        };

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies = cfg
            .bodies
            .iter()
            .map(body_from_config)
            .collect::<Result<Vec<Body>>>()?;

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            if index.insert(bc.name.as_str(), i).is_some() {
                return Err(SimError::DuplicateName(bc.name.clone()));
            }
        }

        // Links: one per body that names a reference
        let mut links = Vec::new();
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let Some(reference_name) = &bc.orbits else {
                continue;
            };
            let reference = *index.get(reference_name.as_str()).ok_or_else(|| {
                SimError::UnknownReference {
                    body: bc.name.clone(),
                    reference: reference_name.clone(),
                }
            })?;

            let link = match engine.mode {
                OrbitModeConfig::Fixed => {
                    let omega = bc
                        .angular_velocity
                        .or(e_cfg.angular_velocity)
                        .ok_or_else(|| SimError::MissingAngularVelocity(bc.name.clone()))?;
                    if !omega.is_finite() {
                        return Err(SimError::InvalidParameter(format!(
                            "angular_velocity of `{}` must be finite, got {}",
                            bc.name, omega
                        )));
                    }
                    Link::new(i, reference, FixedRate::new(omega))
                }
                OrbitModeConfig::Kepler => {
                    if bc.angular_velocity.is_some() {
                        warn!(body = %bc.name, "angular_velocity is ignored in kepler mode");
                    }
                    Link::new(i, reference, KeplerRate)
                }
            };
            links.push(link);
        }

        let hierarchy = Hierarchy::new(&bodies, links)?;
        if hierarchy.is_empty() {
            warn!("no body orbits another; every position stays fixed");
        }

        info!(
            bodies = bodies.len(),
            orbiting = hierarchy.links().len(),
            mode = ?engine.mode,
            chained = engine.chained,
            steps = parameters.steps,
            dt = parameters.dt,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            hierarchy,
        })
    }

    /// One step from `sys`, chained or independent as the engine says
    pub fn step(&self, sys: &System) -> Result<System> {
        if self.engine.chained {
            chained_step(sys, &self.hierarchy, self.parameters.dt)
        } else {
            independent_step(sys, &self.hierarchy, self.parameters.dt)
        }
    }
}

fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    if bc.x.iter().any(|c| !c.is_finite()) {
        return Err(SimError::InvalidParameter(format!(
            "position of `{}` must be finite, got {:?}",
            bc.name, bc.x
        )));
    }
    if !bc.m.is_finite() || bc.m < 0.0 {
        return Err(SimError::InvalidParameter(format!(
            "mass of `{}` must be finite and non-negative, got {}",
            bc.name, bc.m
        )));
    }
    Ok(Body::new(bc.name.clone(), CartesianVector::from(bc.x), bc.m))
}
