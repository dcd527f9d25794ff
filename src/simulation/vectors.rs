//! Cartesian and spherical-polar vectors.
//!
//! Cartesian vectors are plain `nalgebra` vectors (`CartesianVector`); the
//! spherical-polar view is exposed through the [`Spherical`] extension trait and
//! the [`PolarVector`] value type.
//!
//! Conventions:
//! - `r`     radial distance, `r >= 0`
//! - `theta` polar angle measured from +Z, in `[0, pi]`
//! - `phi`   azimuth measured from +X in the X-Y plane, in `[0, 2pi)`
//!
//! A zero radius (or a zero projection onto the X-Y plane for `phi`) has no
//! direction; the affected angles are reported as `0` rather than NaN.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::Add;

use nalgebra::Vector3;

use crate::error::{Result, SimError};

pub type CartesianVector = Vector3<f64>;

/// Spherical-polar coordinates `(r, theta, phi)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarVector {
    pub r: f64,     // radial distance
    pub theta: f64, // polar angle
    pub phi: f64,   // azimuth
}

impl PolarVector {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    pub fn x(&self) -> f64 {
        self.r * self.theta.sin() * self.phi.cos()
    }

    pub fn y(&self) -> f64 {
        self.r * self.theta.sin() * self.phi.sin()
    }

    pub fn z(&self) -> f64 {
        self.r * self.theta.cos()
    }

    /// Cartesian form of this vector
    pub fn to_cartesian(&self) -> CartesianVector {
        CartesianVector::new(self.x(), self.y(), self.z())
    }
}

/// Componentwise sum. Rotating by `dphi` is `p + PolarVector::new(0.0, 0.0, dphi)`.
impl Add for PolarVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            theta: self.theta + other.theta,
            phi: self.phi + other.phi,
        }
    }
}

impl fmt::Display for PolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.theta, self.phi)
    }
}

/// Spherical-polar view of a cartesian vector
pub trait Spherical {
    /// Euclidean magnitude
    fn radial(&self) -> f64;

    /// Angle from +Z; `0` for the zero vector
    fn polar_angle(&self) -> f64;

    /// Angle from +X in the X-Y plane, wrapped into `[0, 2pi)`; `0` on the Z axis
    fn azimuth(&self) -> f64;

    fn to_polar(&self) -> PolarVector {
        PolarVector::new(self.radial(), self.polar_angle(), self.azimuth())
    }

    /// Vector of length one in the same direction.
    ///
    /// The zero vector has no direction and is rejected with
    /// [`SimError::InvalidGeometry`].
    fn unit(&self) -> Result<CartesianVector>;
}

impl Spherical for CartesianVector {
    fn radial(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn polar_angle(&self) -> f64 {
        let r = self.radial();
        if r == 0.0 {
            return 0.0;
        }
        // clamp: rounding can push z / r a hair past 1
        (self.z / r).clamp(-1.0, 1.0).acos()
    }

    fn azimuth(&self) -> f64 {
        let planar = (self.x * self.x + self.y * self.y).sqrt();
        if planar == 0.0 {
            return 0.0;
        }
        let angle = self.y.atan2(self.x);
        if angle >= 0.0 {
            return angle;
        }
        // a tiny negative angle rounds up to exactly TAU
        let wrapped = angle + TAU;
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    }

    fn unit(&self) -> Result<CartesianVector> {
        let r = self.radial();
        if r == 0.0 {
            return Err(SimError::InvalidGeometry("unit vector of a zero-length vector"));
        }
        Ok(self.scale(1.0 / r))
    }
}

/// Format a cartesian vector as `"x, y, z"`
pub fn format_cartesian(v: &CartesianVector) -> String {
    format!("{}, {}, {}", v.x, v.y, v.z)
}
