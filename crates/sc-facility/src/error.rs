//! Unit invariant violations.
//!
//! `UnitError` is the fatal class: it means a `compute` observed (or a
//! commit would produce) a state the simulation's own invariants forbid,
//! such as negative stock.  The scheduler responds by abandoning the current
//! tick's commit entirely and terminating — committing a corrupted pending
//! state would desynchronize the world from its invariants.  Local business
//! failures (insufficient stock or capacity) are *not* errors; they travel
//! through `UnitPending::shortfalls` and the tick commits normally.

use thiserror::Error;

use sc_core::{FacilityId, SkuId};

/// Fatal invariant violations raised during compute or commit validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("facility {0}: stock of {1} would go negative")]
    NegativeStock(FacilityId, SkuId),

    #[error("facility {0}: storage capacity {1} exceeded")]
    CapacityExceeded(FacilityId, u32),

    #[error("facility {0}: inbound reservation released below zero")]
    ReservationUnderflow(FacilityId),

    #[error("facility {0}: inbound reservation desync (order book {1}, storage {2})")]
    ReservationDesync(FacilityId, u64, u32),
}

pub type UnitResult<T> = Result<T, UnitError>;
