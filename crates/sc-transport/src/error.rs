//! Transport-subsystem error type.

use thiserror::Error;

use sc_core::VehicleId;

/// Errors produced by `sc-transport`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// `assign` called on a vehicle that already carries a payload.
    #[error("vehicle {0} is already occupied")]
    AlreadyOccupied(VehicleId),

    /// `deliver` called before the vehicle reached the end of its route.
    #[error("vehicle {0} has not arrived (position {1} of {2})")]
    NotArrived(VehicleId, usize, usize),

    /// `deliver` or a position update on an idle vehicle.
    #[error("vehicle {0} is idle")]
    Idle(VehicleId),

    /// A vehicle id outside the owning fleet.
    #[error("vehicle {0} not in fleet")]
    UnknownVehicle(VehicleId),
}

pub type TransportResult<T> = Result<T, TransportError>;
