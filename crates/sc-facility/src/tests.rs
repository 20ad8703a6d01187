//! Unit tests for sc-facility.

use std::collections::BTreeMap;

use sc_core::{
    CellCoord, FacilityId, OrderBook, OrderDraft, OrderStatus, SkuId, Tick, VehicleId,
};
use sc_grid::Route;
use sc_transport::Fleet;

use crate::{
    Action, ConsumerUnit, DistributionUnit, Effect, Facility, ManufactureUnit, RouteTable,
    SellerUnit, ShortfallCause, Stock, StockLedger, StorageUnit, TickContext, Unit, UnitError,
    UnitKind,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const WIDGET: SkuId = SkuId(1);
const PART: SkuId = SkuId(2);

/// A bare facility with no units, for stock-only fixtures.
fn plain_facility(id: u32, capacity: u32, initial: &[(SkuId, u32)]) -> Facility {
    Facility::new(
        FacilityId(id),
        format!("facility-{id}"),
        CellCoord::new(id, 0),
        Stock::new(FacilityId(id), capacity, initial),
        BTreeMap::new(),
    )
}

/// A straight route of the given length starting at `(0, 0)`.
fn route_of_length(length: u32) -> Route {
    Route::new((0..=length).map(|x| CellCoord::new(x, 0)).collect())
}

struct Fixture {
    facilities: Vec<Facility>,
    orders:     OrderBook,
    routes:     RouteTable,
}

impl Fixture {
    fn new(facilities: Vec<Facility>) -> Self {
        Self { facilities, orders: OrderBook::new(), routes: RouteTable::new() }
    }

    fn ctx(&self, tick: u64) -> TickContext<'_> {
        TickContext {
            tick:       Tick(tick),
            facilities: &self.facilities,
            orders:     &self.orders,
            routes:     &self.routes,
        }
    }
}

// ── Stock ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stock_tests {
    use super::*;

    #[test]
    fn withdraw_below_zero_is_rejected() {
        let mut stock = Stock::new(FacilityId(0), 100, &[(WIDGET, 3)]);
        assert_eq!(
            stock.withdraw(WIDGET, 4),
            Err(UnitError::NegativeStock(FacilityId(0), WIDGET))
        );
        // The failed withdrawal changed nothing.
        assert_eq!(stock.level(WIDGET), 3);
    }

    #[test]
    fn deposit_and_reservation_share_the_capacity_budget() {
        let mut stock = Stock::new(FacilityId(0), 10, &[(WIDGET, 4)]);
        stock.reserve_inbound(4).unwrap();

        assert_eq!(stock.headroom(), 2);
        assert_eq!(
            stock.deposit(WIDGET, 3),
            Err(UnitError::CapacityExceeded(FacilityId(0), 10))
        );
        assert_eq!(
            stock.reserve_inbound(3),
            Err(UnitError::CapacityExceeded(FacilityId(0), 10))
        );
        stock.deposit(WIDGET, 2).unwrap();
    }

    #[test]
    fn delivery_release_then_deposit_is_capacity_neutral() {
        let mut stock = Stock::new(FacilityId(0), 10, &[(WIDGET, 6)]);
        stock.reserve_inbound(4).unwrap();

        stock.release_inbound(4).unwrap();
        stock.deposit(WIDGET, 4).unwrap();
        assert_eq!(stock.level(WIDGET), 10);
        assert_eq!(stock.headroom(), 0);
    }

    #[test]
    fn releasing_more_than_reserved_is_rejected() {
        let mut stock = Stock::new(FacilityId(0), 10, &[]);
        stock.reserve_inbound(2).unwrap();
        assert_eq!(
            stock.release_inbound(3),
            Err(UnitError::ReservationUnderflow(FacilityId(0)))
        );
    }
}

// ── StockLedger ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod ledger_tests {
    use super::*;

    #[test]
    fn available_tracks_same_tick_claims() {
        let stock = Stock::new(FacilityId(0), 100, &[(WIDGET, 10)]);
        let mut ledger = StockLedger::new();

        assert_eq!(ledger.available(&stock, WIDGET), 10);
        ledger.withdraw(WIDGET, 4);
        assert_eq!(ledger.available(&stock, WIDGET), 6);
        ledger.deposit(WIDGET, 1);
        assert_eq!(ledger.available(&stock, WIDGET), 7);
    }

    #[test]
    fn headroom_counts_reservations_and_claims() {
        let mut stock = Stock::new(FacilityId(0), 100, &[(WIDGET, 30)]);
        stock.reserve_inbound(20).unwrap();
        let mut ledger = StockLedger::new();

        assert_eq!(ledger.headroom(&stock), 50);
        ledger.claim_inbound(15);
        assert_eq!(ledger.headroom(&stock), 35);
        ledger.withdraw(WIDGET, 10);
        assert_eq!(ledger.headroom(&stock), 45);
    }
}

// ── StorageUnit ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn consistent_books_pass_the_audit() {
        let mut store = plain_facility(1, 100, &[(WIDGET, 10)]);
        store.stock_mut().reserve_inbound(5).unwrap();
        let mut fx = Fixture::new(vec![plain_facility(0, 100, &[]), store]);
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(1),
            quantity:    5,
            placed_tick: Tick(0),
        });

        let unit = StorageUnit::new();
        let pending = unit
            .compute(FacilityId(1), &fx.ctx(1), &mut StockLedger::new())
            .unwrap();
        assert!(pending.effects.is_empty());
    }

    #[test]
    fn reservation_desync_is_fatal() {
        // 5 units booked inbound, but storage only holds a reservation for 3.
        let mut store = plain_facility(1, 100, &[]);
        store.stock_mut().reserve_inbound(3).unwrap();
        let mut fx = Fixture::new(vec![plain_facility(0, 100, &[]), store]);
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(1),
            quantity:    5,
            placed_tick: Tick(0),
        });

        let err = StorageUnit::new()
            .compute(FacilityId(1), &fx.ctx(1), &mut StockLedger::new())
            .unwrap_err();
        assert_eq!(err, UnitError::ReservationDesync(FacilityId(1), 5, 3));
    }
}

// ── ConsumerUnit ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod consumer_tests {
    use super::*;

    #[test]
    fn order_within_headroom_is_placed_and_claims_capacity() {
        let fx = Fixture::new(vec![
            plain_facility(0, 100, &[]),
            plain_facility(1, 20, &[(WIDGET, 5)]),
        ]);
        let unit = ConsumerUnit::new(FacilityId(0));
        let mut ledger = StockLedger::new();

        let pending = unit
            .compute(
                FacilityId(1),
                &fx.ctx(3),
                &mut ledger,
                &[Action::PlaceOrder { sku: WIDGET, quantity: 10 }],
            )
            .unwrap();

        assert_eq!(pending.effects.len(), 1);
        let Effect::OrderPlaced(draft) = &pending.effects[0] else {
            panic!("expected OrderPlaced");
        };
        assert_eq!(draft.origin, FacilityId(0));
        assert_eq!(draft.destination, FacilityId(1));
        assert_eq!(draft.quantity, 10);
        assert_eq!(draft.placed_tick, Tick(3));
        // The claim is visible to units stepped later this tick.
        assert_eq!(ledger.headroom(fx.facilities[1].stock()), 5);
    }

    #[test]
    fn order_beyond_headroom_is_a_capacity_shortfall() {
        let fx = Fixture::new(vec![
            plain_facility(0, 100, &[]),
            plain_facility(1, 20, &[(WIDGET, 15)]),
        ]);
        let unit = ConsumerUnit::new(FacilityId(0));

        let pending = unit
            .compute(
                FacilityId(1),
                &fx.ctx(0),
                &mut StockLedger::new(),
                &[Action::PlaceOrder { sku: WIDGET, quantity: 6 }],
            )
            .unwrap();

        assert!(pending.effects.is_empty());
        assert_eq!(pending.shortfalls.len(), 1);
        assert_eq!(pending.shortfalls[0].cause, ShortfallCause::InsufficientCapacity);
        assert_eq!(pending.shortfalls[0].quantity, 6);
    }

    #[test]
    fn second_order_sees_the_first_orders_claim() {
        let fx = Fixture::new(vec![
            plain_facility(0, 100, &[]),
            plain_facility(1, 10, &[]),
        ]);
        let unit = ConsumerUnit::new(FacilityId(0));
        let mut ledger = StockLedger::new();

        let pending = unit
            .compute(
                FacilityId(1),
                &fx.ctx(0),
                &mut ledger,
                &[
                    Action::PlaceOrder { sku: WIDGET, quantity: 8 },
                    Action::PlaceOrder { sku: WIDGET, quantity: 8 },
                ],
            )
            .unwrap();

        assert_eq!(pending.effects.len(), 1);
        assert_eq!(pending.shortfalls.len(), 1);
    }
}

// ── SellerUnit ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seller_tests {
    use super::*;

    #[test]
    fn demand_beyond_stock_fills_partially_and_reports_the_rest() {
        let fx = Fixture::new(vec![plain_facility(0, 100, &[(WIDGET, 3)])]);
        let unit = SellerUnit::new(WIDGET);
        let mut ledger = StockLedger::new();

        let pending = unit
            .compute(FacilityId(0), &fx.ctx(0), &mut ledger, &[Action::Demand { quantity: 5 }])
            .unwrap();

        assert_eq!(
            pending.effects,
            vec![Effect::StockWithdrawn { facility: FacilityId(0), sku: WIDGET, quantity: 3 }]
        );
        assert_eq!(pending.shortfalls.len(), 1);
        assert_eq!(pending.shortfalls[0].quantity, 2);
        assert_eq!(pending.shortfalls[0].cause, ShortfallCause::InsufficientStock);
    }

    #[test]
    fn demand_against_empty_stock_is_all_shortfall() {
        let fx = Fixture::new(vec![plain_facility(0, 100, &[])]);
        let pending = SellerUnit::new(WIDGET)
            .compute(
                FacilityId(0),
                &fx.ctx(0),
                &mut StockLedger::new(),
                &[Action::Demand { quantity: 4 }],
            )
            .unwrap();
        assert!(pending.effects.is_empty());
        assert_eq!(pending.shortfalls[0].quantity, 4);
    }

    #[test]
    fn seller_sees_earlier_units_withdrawals() {
        // 10 on hand, but 8 already claimed earlier in the tick.
        let fx = Fixture::new(vec![plain_facility(0, 100, &[(WIDGET, 10)])]);
        let mut ledger = StockLedger::new();
        ledger.withdraw(WIDGET, 8);

        let pending = SellerUnit::new(WIDGET)
            .compute(FacilityId(0), &fx.ctx(0), &mut ledger, &[Action::Demand { quantity: 5 }])
            .unwrap();

        let Effect::StockWithdrawn { quantity, .. } = pending.effects[0] else {
            panic!("expected StockWithdrawn");
        };
        assert_eq!(quantity, 2);
        assert_eq!(pending.shortfalls[0].quantity, 3);
    }
}

// ── ManufactureUnit ───────────────────────────────────────────────────────────

#[cfg(test)]
mod manufacture_tests {
    use super::*;

    #[test]
    fn one_and_a_half_lots_of_input_produces_exactly_one_lot() {
        let fx = Fixture::new(vec![plain_facility(0, 100, &[(PART, 15)])]);
        let unit = ManufactureUnit::new(PART, WIDGET, 10, 4, 5);

        let pending = unit
            .compute(FacilityId(0), &fx.ctx(0), &mut StockLedger::new())
            .unwrap();

        assert_eq!(
            pending.effects,
            vec![Effect::LotsProduced {
                facility:        FacilityId(0),
                input_sku:       PART,
                input_quantity:  10,
                output_sku:      WIDGET,
                output_quantity: 4,
                lots:            1,
            }]
        );
    }

    #[test]
    fn production_is_capped_by_max_lots_per_tick() {
        let fx = Fixture::new(vec![plain_facility(0, 1000, &[(PART, 100)])]);
        let unit = ManufactureUnit::new(PART, WIDGET, 10, 4, 3);

        let pending = unit
            .compute(FacilityId(0), &fx.ctx(0), &mut StockLedger::new())
            .unwrap();
        let Effect::LotsProduced { lots, .. } = pending.effects[0] else {
            panic!("expected LotsProduced");
        };
        assert_eq!(lots, 3);
    }

    #[test]
    fn expanding_lots_stop_at_headroom() {
        // Each lot turns 2 parts into 10 widgets, growing stock by 8.
        // Capacity 20, stock 10: only one lot fits.
        let fx = Fixture::new(vec![plain_facility(0, 20, &[(PART, 10)])]);
        let unit = ManufactureUnit::new(PART, WIDGET, 2, 10, 5);

        let pending = unit
            .compute(FacilityId(0), &fx.ctx(0), &mut StockLedger::new())
            .unwrap();
        let Effect::LotsProduced { lots, .. } = pending.effects[0] else {
            panic!("expected LotsProduced");
        };
        assert_eq!(lots, 1);
    }

    #[test]
    fn no_input_means_no_effect_at_all() {
        let fx = Fixture::new(vec![plain_facility(0, 100, &[])]);
        let pending = ManufactureUnit::new(PART, WIDGET, 10, 4, 5)
            .compute(FacilityId(0), &fx.ctx(0), &mut StockLedger::new())
            .unwrap();
        assert!(pending.effects.is_empty());
    }
}

// ── DistributionUnit ──────────────────────────────────────────────────────────

#[cfg(test)]
mod distribution_tests {
    use super::*;

    fn fixture_with_pending_orders(quantities: &[u32]) -> Fixture {
        let mut fx = Fixture::new(vec![
            plain_facility(0, 1000, &[(WIDGET, 500)]),
            plain_facility(1, 1000, &[]),
        ]);
        for &quantity in quantities {
            fx.orders.place(OrderDraft {
                sku:         WIDGET,
                origin:      FacilityId(0),
                destination: FacilityId(1),
                quantity,
                placed_tick: Tick(0),
            });
        }
        fx.routes.insert(FacilityId(0), FacilityId(1), route_of_length(4));
        fx
    }

    #[test]
    fn idle_vehicles_pick_up_orders_oldest_first() {
        let fx = fixture_with_pending_orders(&[1, 2, 3]);
        let unit = DistributionUnit::new(Fleet::new(&[2, 2]));

        let pending = unit.compute(FacilityId(0), &fx.ctx(1)).unwrap();

        let assigned: Vec<_> = pending
            .effects
            .iter()
            .filter_map(|e| match e {
                Effect::VehicleAssigned { vehicle, order, .. } => Some((*vehicle, *order)),
                _ => None,
            })
            .collect();
        // Two vehicles, three orders: the two oldest go out, in vehicle order.
        assert_eq!(
            assigned,
            vec![
                (VehicleId(0), sc_core::OrderId(0)),
                (VehicleId(1), sc_core::OrderId(1)),
            ]
        );
    }

    #[test]
    fn arrived_vehicle_delivers_and_is_reassigned_same_tick() {
        let mut fx = fixture_with_pending_orders(&[7]);
        let in_transit = fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(1),
            quantity:    5,
            placed_tick: Tick(0),
        });
        fx.orders.get_mut(in_transit).unwrap().status = OrderStatus::InTransit;

        // One vehicle carrying the in-transit order, arriving this tick.
        let mut fleet = Fleet::new(&[4]);
        let carried = fx.orders.get(in_transit).unwrap().clone();
        fleet
            .get_mut(VehicleId(0))
            .unwrap()
            .assign(route_of_length(4), carried)
            .unwrap();
        let unit = DistributionUnit::new(fleet);

        let pending = unit.compute(FacilityId(0), &fx.ctx(2)).unwrap();

        // Arrival, delivery, and pickup of the still-pending order, all in
        // one tick.
        assert!(pending.effects.iter().any(|e| matches!(
            e,
            Effect::OrderDelivered { vehicle: VehicleId(0), order, .. } if *order == in_transit
        )));
        assert!(pending.effects.iter().any(|e| matches!(
            e,
            Effect::VehicleAssigned { vehicle: VehicleId(0), order: sc_core::OrderId(0), .. }
        )));
    }

    #[test]
    fn unroutable_order_is_reported_without_consuming_a_vehicle() {
        let mut fx = Fixture::new(vec![
            plain_facility(0, 1000, &[(WIDGET, 500)]),
            plain_facility(1, 1000, &[]),
            plain_facility(2, 1000, &[]),
        ]);
        // Order 0 has no route; order 1 does.
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(2),
            quantity:    1,
            placed_tick: Tick(0),
        });
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(1),
            quantity:    1,
            placed_tick: Tick(0),
        });
        fx.routes.insert(FacilityId(0), FacilityId(1), route_of_length(3));

        let unit = DistributionUnit::new(Fleet::new(&[1]));
        let pending = unit.compute(FacilityId(0), &fx.ctx(1)).unwrap();

        assert_eq!(pending.route_failures.len(), 1);
        assert_eq!(pending.route_failures[0].order, sc_core::OrderId(0));
        // The single vehicle still went to the routable order.
        assert!(pending.effects.iter().any(|e| matches!(
            e,
            Effect::VehicleAssigned { order: sc_core::OrderId(1), .. }
        )));
    }

    #[test]
    fn unroutable_order_is_reported_even_when_no_vehicle_is_free() {
        let mut fx = Fixture::new(vec![
            plain_facility(0, 1000, &[(WIDGET, 500)]),
            plain_facility(1, 1000, &[]),
            plain_facility(2, 1000, &[]),
        ]);
        // Order 0 is routable and takes the only vehicle; order 1 has no
        // route and must still be reported.
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(1),
            quantity:    1,
            placed_tick: Tick(0),
        });
        fx.orders.place(OrderDraft {
            sku:         WIDGET,
            origin:      FacilityId(0),
            destination: FacilityId(2),
            quantity:    1,
            placed_tick: Tick(0),
        });
        fx.routes.insert(FacilityId(0), FacilityId(1), route_of_length(3));

        let unit = DistributionUnit::new(Fleet::new(&[1]));
        let pending = unit.compute(FacilityId(0), &fx.ctx(1)).unwrap();

        assert!(pending.effects.iter().any(|e| matches!(
            e,
            Effect::VehicleAssigned { order: sc_core::OrderId(0), .. }
        )));
        assert_eq!(pending.route_failures.len(), 1);
        assert_eq!(pending.route_failures[0].order, sc_core::OrderId(1));
    }
}

// ── Facility ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod facility_tests {
    use super::*;

    #[test]
    fn units_iterate_in_stepping_order() {
        let mut units = BTreeMap::new();
        units.insert(
            UnitKind::Seller,
            Unit::Seller(SellerUnit::new(WIDGET)),
        );
        units.insert(
            UnitKind::Distribution,
            Unit::Distribution(DistributionUnit::new(Fleet::new(&[1]))),
        );
        units.insert(UnitKind::Storage, Unit::Storage(StorageUnit::new()));
        let facility = Facility::new(
            FacilityId(0),
            "depot".into(),
            CellCoord::new(0, 0),
            Stock::new(FacilityId(0), 10, &[]),
            units,
        );

        let kinds: Vec<_> = facility.units().map(Unit::kind).collect();
        assert_eq!(
            kinds,
            vec![UnitKind::Storage, UnitKind::Distribution, UnitKind::Seller]
        );
    }

    #[test]
    fn fleet_accessor_reaches_the_distribution_unit() {
        let mut units = BTreeMap::new();
        units.insert(
            UnitKind::Distribution,
            Unit::Distribution(DistributionUnit::new(Fleet::new(&[1, 2, 3]))),
        );
        let facility = Facility::new(
            FacilityId(0),
            "depot".into(),
            CellCoord::new(0, 0),
            Stock::new(FacilityId(0), 10, &[]),
            units,
        );
        assert_eq!(facility.fleet().unwrap().len(), 3);
        assert!(plain_facility(1, 10, &[]).fleet().is_none());
    }
}
