//! Fixed-step orbital update for the simulated system
//!
//! [`orbit`] is the single-body rule: rotate a body about its reference's Z
//! axis by `omega * dt`, keeping radius and polar angle. [`chained_step`] and
//! [`independent_step`] apply it to a whole [`System`] following a
//! [`Hierarchy`]. None of these mutate their inputs.

use tracing::debug;

use super::forces::AngularRate;
use super::hierarchy::Hierarchy;
use super::states::{Body, System};
use super::vectors::{CartesianVector, PolarVector, Spherical};
use crate::error::Result;

/// New state of `subject` after circling `reference` for `dt` at `angular_velocity`
///
/// Kinematic rotation only: no acceleration is integrated. If the two bodies
/// coincide the relative vector has no angles (both default to 0) and the
/// result sits on the reference.
pub fn orbit(subject: &Body, reference: &Body, angular_velocity: f64, dt: f64) -> Body {
    // relative position with the reference as origin
    let relative = reference.separation_to(subject).to_polar();
    let rotated = relative + PolarVector::new(0.0, 0.0, angular_velocity * dt);

    Body {
        name: subject.name.clone(),
        x: reference.x + rotated.to_cartesian(),
        m: subject.m,
    }
}

/// [`orbit`] with the angular velocity taken from `rate`
pub fn orbit_with(subject: &Body, reference: &Body, rate: &dyn AngularRate, dt: f64) -> Result<Body> {
    let omega = rate.angular_velocity(subject, reference)?;
    Ok(orbit(subject, reference, omega, dt))
}

/// Advance the system by one step, carrying each reference's motion to its orbiters
///
/// For every link, references first:
/// 1. the body's working position already includes the displacement of all
///    its ancestors from this step
/// 2. rotate it about the already-updated reference
/// 3. add its own displacement to every descendant
///
/// A translated body keeps its separation from the (equally translated)
/// reference, so step 2 sees the pre-step geometry.
pub fn chained_step(sys: &System, hierarchy: &Hierarchy, dt: f64) -> Result<System> {
    let mut working = sys.bodies.clone();

    for link in hierarchy.links() {
        let shifted = &working[link.body];
        let updated = orbit_with(shifted, &working[link.reference], link.rate.as_ref(), dt)?;
        let delta: CartesianVector = updated.x - shifted.x;

        working[link.body] = updated;
        for &d in hierarchy.descendants(link.body) {
            working[d] = working[d].translated(&delta);
        }
    }

    debug!(t = sys.t + dt, "chained step");
    Ok(System {
        bodies: working,
        t: sys.t + dt,
    })
}

/// Advance the system by one step, each body circling the pre-step position
/// of its reference with no displacement carried between bodies
pub fn independent_step(sys: &System, hierarchy: &Hierarchy, dt: f64) -> Result<System> {
    let mut next = sys.bodies.clone();

    for link in hierarchy.links() {
        next[link.body] = orbit_with(
            &sys.bodies[link.body],
            &sys.bodies[link.reference],
            link.rate.as_ref(),
            dt,
        )?;
    }

    debug!(t = sys.t + dt, "independent step");
    Ok(System {
        bodies: next,
        t: sys.t + dt,
    })
}
