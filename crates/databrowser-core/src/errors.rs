use thiserror::Error;

use databrowser_abi::{LoadFailure, ReadError};

/// View-resolution failures.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Manual selection named a view that is not registered. A user-input
    /// error, surfaced to the caller rather than silently defaulted.
    #[error("no view named {0:?} is registered")]
    UnknownViewName(String),

    /// Automatic selection found no match and no fallback view was
    /// registered. A setup error, not a routing error.
    #[error("no fallback view registered for automatic selection")]
    NoFallback,
}

/// Anything the shell boundary can surface to the user.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Load(#[from] LoadFailure),

    #[error(transparent)]
    Read(#[from] ReadError),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
