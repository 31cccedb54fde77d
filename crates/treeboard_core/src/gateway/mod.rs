//! Remote service gateways.
//!
//! # Responsibility
//! - Define transport-facing contracts for the tree and task services.
//! - Keep HTTP and JSON details out of the view layer.
//!
//! # Invariants
//! - Write paths validate records before issuing any request.
//! - Gateways never mutate client state; callers own the refetch.
//! - Success of a mutation is the absence of an error, nothing more.

pub mod task_gateway;
pub mod tree_gateway;

use crate::model::task::TaskValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// The single failure kind surfaced by gateway operations.
#[derive(Debug)]
pub enum GatewayError {
    /// Network failure or non-2xx response status.
    Transport(ureq::Error),
    /// 2xx response whose body could not be decoded.
    MalformedBody(String),
    /// Record rejected locally before any request was issued.
    Validation(TaskValidationError),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::MalformedBody(details) => write!(f, "malformed response body: {details}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::MalformedBody(_) => None,
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ureq::Error> for GatewayError {
    fn from(value: ureq::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<TaskValidationError> for GatewayError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}
