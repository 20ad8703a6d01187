use sc_facility::{UnitError, UnitKind};
use sc_transport::TransportError;
use thiserror::Error;

use sc_core::{FacilityId, Tick};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("action submitted for {submitted} but the clock is already at {current}")]
    PastTick { submitted: Tick, current: Tick },

    #[error("no facility with id {0}")]
    UnknownFacility(FacilityId),

    #[error("facility {facility} has no {kind} unit")]
    UnknownUnit {
        facility: FacilityId,
        kind:     UnitKind,
    },

    #[error("zero-quantity {kind} action for facility {facility}")]
    ZeroQuantity {
        facility: FacilityId,
        kind:     UnitKind,
    },

    #[error("the scheduler is terminated")]
    Terminated,

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type SimResult<T> = Result<T, SimError>;
