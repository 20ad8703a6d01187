//! A facility: a stock plus the units that operate on it.

use std::collections::BTreeMap;

use sc_core::{CellCoord, FacilityId};
use sc_transport::Fleet;

use crate::{Stock, Unit, UnitKind};

/// One site on the grid.  The unit map is keyed by [`UnitKind`], whose
/// ordering is the fixed per-tick stepping order, so iterating the map *is*
/// stepping the facility.
#[derive(Debug)]
pub struct Facility {
    id:       FacilityId,
    name:     String,
    position: CellCoord,
    stock:    Stock,
    units:    BTreeMap<UnitKind, Unit>,
}

impl Facility {
    pub fn new(
        id: FacilityId,
        name: String,
        position: CellCoord,
        stock: Stock,
        units: BTreeMap<UnitKind, Unit>,
    ) -> Self {
        Self { id, name, position, stock, units }
    }

    #[inline]
    pub fn id(&self) -> FacilityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn position(&self) -> CellCoord {
        self.position
    }

    #[inline]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[inline]
    pub fn stock_mut(&mut self) -> &mut Stock {
        &mut self.stock
    }

    pub fn unit(&self, kind: UnitKind) -> Option<&Unit> {
        self.units.get(&kind)
    }

    pub fn has_unit(&self, kind: UnitKind) -> bool {
        self.units.contains_key(&kind)
    }

    /// Units in stepping order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// The distribution fleet, if this facility ships goods.
    pub fn fleet(&self) -> Option<&Fleet> {
        match self.units.get(&UnitKind::Distribution) {
            Some(Unit::Distribution(d)) => Some(d.fleet()),
            _ => None,
        }
    }

    pub fn fleet_mut(&mut self) -> Option<&mut Fleet> {
        match self.units.get_mut(&UnitKind::Distribution) {
            Some(Unit::Distribution(d)) => Some(d.fleet_mut()),
            _ => None,
        }
    }
}
