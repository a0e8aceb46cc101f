//! Scenario validation errors
//!
//! The engine does not defend against malformed sources; these are raised at
//! load time instead so the engine only ever sees well-formed input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Two sources of the same kind share an id
    #[error("duplicate {kind} id {id:?}")]
    DuplicateId {
        kind: &'static str,
        id: String,
    },

    /// Charge mass must be strictly positive
    #[error("charge {id:?} has non-positive mass {m}")]
    NonPositiveMass {
        id: String,
        m: f64,
    },

    /// Positions and velocities are `[x, y]`
    #[error("{field} of {id:?} must have 2 components, got {len}")]
    BadVector {
        id: String,
        field: &'static str,
        len: usize,
    },

    /// NaN or infinite value in a source
    #[error("{field} of {id:?} is not finite")]
    NonFinite {
        id: String,
        field: &'static str,
    },

    /// Scene size, tracer step and tick interval must be positive
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        name: &'static str,
        value: f64,
    },
}
