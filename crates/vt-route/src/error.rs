use thiserror::Error;

use vt_core::StopId;

use crate::stop::StopStatus;

#[derive(Debug, Error)]
pub enum RouteError {
    /// A stop-status write that would move backward (or re-apply the same
    /// status).  The route is left unchanged.
    #[error("invalid transition for {stop}: {from} -> {to}")]
    InvalidTransition {
        stop: StopId,
        from: StopStatus,
        to:   StopStatus,
    },

    /// The stop id does not belong to this route.
    #[error("stop {0} not found on route")]
    UnknownStop(StopId),

    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
