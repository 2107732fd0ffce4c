//! Routing-subsystem error type.

use thiserror::Error;

use tk_core::CoreError;

/// Errors produced by `tk-route`.
///
/// The default [`HaversineProvider`][crate::HaversineProvider] is total over
/// well-formed input and never fails; these variants exist for the boundary
/// (mode-token validation) and for pluggable network-backed providers,
/// which can genuinely fail.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("route provider failure: {0}")]
    Provider(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
