use thiserror::Error;

use vt_route::RouteError;

#[derive(Debug, Error)]
pub enum TrackError {
    /// A mutation that needs an active route when none is tracking.
    /// Read operations never produce this — they return `None`/empty.
    #[error("no active route")]
    NoActiveRoute,

    /// Stop-status violations and roster faults, forwarded from the
    /// aggregate so the UI can surface them.
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type TrackResult<T> = Result<T, TrackError>;
