//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `tk-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A travel-mode token outside the closed `driving`/`cycling`/`walking`
    /// set reached the boundary.
    #[error("invalid travel mode {0:?}: expected \"driving\", \"cycling\", or \"walking\"")]
    InvalidMode(String),
}

/// Shorthand result type for all `tk-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
