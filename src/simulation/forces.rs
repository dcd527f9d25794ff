//! Pairwise Newtonian gravity and the angular rates that drive an orbit
//!
//! Defines the gravity model (force, Kepler period, Kepler angular velocity)
//! and the [`AngularRate`] trait, the seam through which the orbit update
//! gets its angular velocity: either a fixed configured value or one derived
//! from the gravity model

use std::f64::consts::TAU;

use tracing::warn;

use crate::error::{Result, SimError};
use crate::simulation::states::Body;
use crate::simulation::vectors::{CartesianVector, Spherical};

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Newtonian gravitational force on `subject` due to `other`
/// - magnitude: G * m_s * m_o / r^2
/// - direction: from `subject` toward `other`
///
/// Swapping the arguments flips the direction and keeps the magnitude.
/// Coincident bodies have no direction and give [`SimError::InvalidGeometry`].
pub fn gravitational_force(subject: &Body, other: &Body) -> Result<CartesianVector> {
    let separation = subject.separation_to(other);
    let r = separation.radial();
    if r == 0.0 {
        return Err(SimError::InvalidGeometry("gravitational force between coincident bodies"));
    }
    let magnitude = G * subject.m * other.m / (r * r);
    Ok(separation.unit()? * magnitude)
}

/// Orbital period for the pair at their current separation: 2pi * sqrt(r^3 / (G * M))
///
/// NOTE: `M` is the larger of the two masses, not the total or reduced mass.
/// This is the dominant-mass approximation and makes the result independent of
/// argument order.
///
/// Two massless bodies are an `InvalidMass` error. Dividing by `G * 0` would
/// give an infinite period and a body that silently never moves.
pub fn kepler_period(subject: &Body, other: &Body) -> Result<f64> {
    let r = subject.separation_to(other).radial();
    if r == 0.0 {
        return Err(SimError::InvalidGeometry("Kepler period of coincident bodies"));
    }

    let mass = subject.m.max(other.m);
    if mass.is_nan() || mass <= 0.0 {
        return Err(SimError::InvalidMass {
            subject: subject.name.clone(),
            other: other.name.clone(),
        });
    }

    Ok(TAU * (r * r * r / (G * mass)).sqrt())
}

/// Angular velocity of a circular orbit with the Kepler period: 2pi / T
pub fn kepler_angular_velocity(subject: &Body, other: &Body) -> Result<f64> {
    Ok(TAU / kepler_period(subject, other)?)
}

/// Source of the angular velocity (radians per unit time) for one orbiting body
pub trait AngularRate {
    fn angular_velocity(&self, subject: &Body, reference: &Body) -> Result<f64>;
}

/// Constant angular velocity, masses ignored
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(pub f64);

impl FixedRate {
    pub fn new(omega: f64) -> Self {
        if omega == 0.0 {
            warn!("fixed angular velocity is zero; the body will not move relative to its reference");
        }
        Self(omega)
    }
}

impl AngularRate for FixedRate {
    fn angular_velocity(&self, _subject: &Body, _reference: &Body) -> Result<f64> {
        Ok(self.0)
    }
}

/// Angular velocity derived from the current separation and masses
/// via [`kepler_angular_velocity`]
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerRate;

impl AngularRate for KeplerRate {
    fn angular_velocity(&self, subject: &Body, reference: &Body) -> Result<f64> {
        kepler_angular_velocity(subject, reference)
    }
}
