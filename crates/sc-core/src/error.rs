//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{FacilityId, OrderId};

/// The base error type shared by the `sc-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("facility {0} not found")]
    FacilityNotFound(FacilityId),

    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
