//! Error types for orbsim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(&'static str),

    #[error("Invalid mass: neither `{subject}` nor `{other}` has positive mass")]
    InvalidMass { subject: String, other: String },

    #[error("Body `{body}` orbits unknown body `{reference}`")]
    UnknownReference { body: String, reference: String },

    #[error("Body `{0}` cannot orbit itself")]
    SelfReference(String),

    #[error("Orbit hierarchy contains a cycle through `{0}`")]
    CyclicHierarchy(String),

    #[error("Duplicate body name: {0}")]
    DuplicateName(String),

    #[error("Body `{0}` has no angular velocity in fixed-rate mode")]
    MissingAngularVelocity(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
