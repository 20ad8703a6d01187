//! A facility's vehicle fleet.

use sc_core::VehicleId;

use crate::{TransportResult, Vehicle};

/// The vehicles owned by one facility's DistributionUnit, indexed by
/// `VehicleId` (ids are local to the fleet, dense from 0).
///
/// All scans run in ascending id order so that vehicle selection — and with
/// it order-to-vehicle assignment — is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Build a fleet with one vehicle per speed entry.
    pub fn new(speeds: &[u32]) -> Self {
        let vehicles = speeds
            .iter()
            .enumerate()
            .map(|(i, &steps_per_tick)| Vehicle::new(VehicleId(i as u32), steps_per_tick))
            .collect();
        Self { vehicles }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.index())
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.index())
    }

    /// All vehicles in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Ids of vehicles currently without a trip, ascending.
    pub fn idle_ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.vehicles
            .iter()
            .filter(|v| v.is_idle())
            .map(Vehicle::id)
    }

    /// Number of vehicles currently in transit.
    pub fn in_transit_count(&self) -> usize {
        self.vehicles.iter().filter(|v| !v.is_idle()).count()
    }

    /// Run `f` against the vehicle `id`, which must exist.
    ///
    /// Convenience for the commit path, which addresses vehicles by effect
    /// payloads already validated against this fleet.
    pub fn with_vehicle_mut<T>(
        &mut self,
        id: VehicleId,
        f: impl FnOnce(&mut Vehicle) -> TransportResult<T>,
    ) -> TransportResult<T> {
        let vehicle = self
            .vehicles
            .get_mut(id.index())
            .ok_or(crate::TransportError::UnknownVehicle(id))?;
        f(vehicle)
    }
}
