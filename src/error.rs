//! Errors for integration methods

use thiserror::Error;

use crate::{
    Float,
    core::{rhs::StepError, trajectory::Trajectory},
};

/// Failures of a single integration call.
///
/// Errors raised after stepping has begun carry the rows computed so far in
/// `partial`. Those rows are exactly what the scheme produced; nothing past
/// the failing interval is included.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown integration method '{0}'")]
    UnknownMethod(String),

    #[error("{method} needs at least {required} time points (got {points})")]
    InsufficientGrid {
        method: &'static str,
        points: usize,
        required: usize,
    },

    #[error("derivative at t = {t} has {got} components but the state has {expected}")]
    DimensionMismatch {
        t: Float,
        expected: usize,
        got: usize,
        partial: Trajectory,
    },

    #[error("non-finite value encountered at t = {t}")]
    NonFinite { t: Float, partial: Trajectory },

    #[error("time grid is not strictly increasing at index {index}")]
    NonIncreasingGrid { index: usize },
}

impl Error {
    /// Attach the rows computed so far to a failed derivative evaluation.
    pub(crate) fn from_step(err: StepError, expected: usize, partial: Trajectory) -> Self {
        match err {
            StepError::DimensionMismatch { t, got } => Error::DimensionMismatch {
                t,
                expected,
                got,
                partial,
            },
            StepError::NonFinite { t } => Error::NonFinite { t, partial },
        }
    }

    /// The rows computed before the failure, if stepping had started.
    pub fn partial(&self) -> Option<&Trajectory> {
        match self {
            Error::DimensionMismatch { partial, .. } | Error::NonFinite { partial, .. } => {
                Some(partial)
            }
            _ => None,
        }
    }
}
