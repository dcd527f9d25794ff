//! Core state types for the orbit simulation.
//!
//! - `Body`   a named point mass at a cartesian position
//! - `System` the working set of bodies plus the current simulation time `t`
//!
//! Both are value types: a step produces a new `System` built from new `Body`
//! values, and the previous state is dropped by whoever owns it.

use std::fmt;

use crate::simulation::vectors::{format_cartesian, CartesianVector};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,       // identity, also the label in the output
    pub x: CartesianVector, // position
    pub m: f64,             // mass, 0 when unused
}

impl Body {
    pub fn new(name: impl Into<String>, x: CartesianVector, m: f64) -> Self {
        Self {
            name: name.into(),
            x,
            m,
        }
    }

    /// Massless body, for the fixed-rate model
    pub fn massless(name: impl Into<String>, x: CartesianVector) -> Self {
        Self::new(name, x, 0.0)
    }

    /// Vector from this body to `other`: `other.x - self.x`
    pub fn separation_to(&self, other: &Body) -> CartesianVector {
        other.x - self.x
    }

    /// Same body moved by `delta`
    pub fn translated(&self, delta: &CartesianVector) -> Body {
        Body {
            name: self.name.clone(),
            x: self.x + delta,
            m: self.m,
        }
    }
}

/// `"<name>, <x>, <y>, <z>"`, one output record
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, format_cartesian(&self.x))
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64,            // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
