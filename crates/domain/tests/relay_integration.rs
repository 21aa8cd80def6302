//! Integration tests for relay sessions.
//!
//! These tests drive the engine the way the command-line harness does:
//! catalog to orders, orders to demand, demand to trailers, then
//! overloads, finalization and the session document.

use common::TRAILER_CAPACITY;
use domain::calculator;
use domain::order::inbound_analysis;
use domain::relay::{LocationDemand, demand_from_orders};
use domain::{
    Aggregate, Catalog, DayNumber, DispatchBoard, DispatchStatus, DomainError, ItemRequest,
    LocationKind, LocationName, OrderBuilder, OrderSimulator, OrdersDocument, RelayDocument,
    RelayService, RouteId, StackInputs, StateError, TrailerId, ValidationError,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const CATALOG_JSON: &str = r#"{
    "products": [
        {"id": 4021, "name": "Butter Bread", "units_per_tray": 12, "tray_type": "bread", "stack_height": 17, "origin_plant": 191},
        {"id": 4022, "name": "Wheat Bread", "units_per_tray": 12, "tray_type": "bread", "stack_height": 17, "origin_plant": 191},
        {"id": 5110, "name": "Hamburger Buns", "units_per_tray": 8, "tray_type": "bulk", "stack_height": 30, "origin_plant": 191},
        {"id": 6001, "name": "Honey Wheat", "units_per_tray": 10, "tray_type": "bread", "stack_height": 20, "origin_plant": 204},
        {"id": 7002, "name": "Snack Cakes", "units_per_tray": 6, "tray_type": "bulk", "stack_height": 30, "origin_plant": 312}
    ],
    "routes": [
        {"route_id": 6278, "location": "Anderson"},
        {"route_id": 6280, "location": "Anderson"},
        {"route_id": 5539, "location": "Galax"},
        {"route_id": 7101, "location": "Tucker"}
    ],
    "sister_plants": ["Tucker"]
}"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).unwrap()
}

fn day() -> DayNumber {
    DayNumber::new(4).unwrap()
}

fn service() -> RelayService<StdRng> {
    RelayService::open_with_rng("12/25/2024", day(), StdRng::seed_from_u64(2024)).unwrap()
}

fn name(location: &str) -> LocationName {
    LocationName::new(location)
}

mod orders_to_trailers {
    use super::*;

    #[test]
    fn simulated_orders_plan_into_full_trailers() {
        let catalog = catalog();
        let routes: Vec<_> = catalog.routes().to_vec();
        let mut rng = StdRng::seed_from_u64(7);

        let orders = OrderSimulator::new(&catalog)
            .simulate_orders(&routes, 3, "12/25/2024", &mut rng)
            .unwrap();
        assert_eq!(orders.len(), routes.len());

        for order in &orders {
            for item in order.items() {
                let product = catalog.product(item.product_id()).unwrap();
                assert_eq!(item.units() % product.units_per_tray(), 0);
                assert_eq!(item.stacks(), calculator::stacks_for(product, item.trays()));
            }
        }

        let demand = demand_from_orders(&catalog, &orders, 191).unwrap();
        let mut service = service();
        let created = service.plan(&demand).unwrap();

        let session = service.session();
        assert_eq!(created.len(), session.trailers().len());
        for entry in &demand {
            let location = session.location(&entry.location).unwrap();
            let loaded: u32 = session
                .trailers_for(&entry.location)
                .map(|trailer| trailer.stack_count())
                .sum();
            assert_eq!(loaded, location.total_stacks());
            assert!(session
                .trailers_for(&entry.location)
                .all(|trailer| trailer.stack_count() <= TRAILER_CAPACITY));
            assert_eq!(session.spare_stacks(&entry.location).unwrap(), 0);
        }
    }

    #[test]
    fn sister_plants_keep_their_kind() {
        let catalog = catalog();
        let order = OrderBuilder::new(&catalog)
            .create_order(
                RouteId::new(7101),
                &name("Tucker"),
                "12/25/2024",
                &[ItemRequest::new(4021, 144)],
            )
            .unwrap();

        let demand = demand_from_orders(&catalog, &[order], 191).unwrap();
        let mut service = service();
        service.plan(&demand).unwrap();

        let tucker = service.session().location(&name("Tucker")).unwrap();
        assert_eq!(tucker.kind(), LocationKind::SisterPlant);
        assert_eq!(tucker.total_stacks(), 1);
    }

    #[test]
    fn inbound_products_counted_once() {
        let catalog = catalog();
        let builder = OrderBuilder::new(&catalog);
        let orders = vec![
            builder
                .create_order(
                    RouteId::new(6278),
                    &name("Anderson"),
                    "12/25/2024",
                    &[ItemRequest::new(6001, 200), ItemRequest::new(4021, 12)],
                )
                .unwrap(),
            builder
                .create_order(
                    RouteId::new(5539),
                    &name("Galax"),
                    "12/25/2024",
                    &[ItemRequest::new(7002, 60)],
                )
                .unwrap(),
        ];

        let analysis = inbound_analysis(&catalog, &orders, 191).unwrap();
        let inbound_trays: u64 = analysis
            .values()
            .flatten()
            .map(|product| product.total_trays)
            .sum();

        let demand = demand_from_orders(&catalog, &orders, 191).unwrap();
        let planned: i64 = demand.iter().map(|entry| entry.inputs.inbound_trays).sum();
        assert_eq!(planned as u64, inbound_trays);
        assert_eq!(inbound_trays, 20 + 10);
    }

    #[test]
    fn orders_document_survives_round_trip() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let orders = OrderSimulator::new(&catalog)
            .simulate_orders(catalog.routes(), 2, "12/25/2024", &mut rng)
            .unwrap();

        let document = OrdersDocument::new(orders.clone(), "12/25/2024", day());
        assert_eq!(document.file_name(), "orders_12-25-2024_Day4.json");

        let restored = OrdersDocument::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(restored.orders, orders);
        assert_eq!(restored.metadata.total_orders, orders.len());
    }
}

mod overloads_and_finalization {
    use super::*;

    fn planned() -> RelayService<StdRng> {
        let mut service = service();
        service
            .plan(&[
                LocationDemand {
                    location: name("Anderson"),
                    kind: LocationKind::Warehouse,
                    inputs: StackInputs {
                        cross_dock_stacks: 70,
                        ..Default::default()
                    },
                },
                LocationDemand {
                    location: name("Galax"),
                    kind: LocationKind::Warehouse,
                    inputs: StackInputs {
                        bread_trays: 510,
                        ..Default::default()
                    },
                },
            ])
            .unwrap();
        service
    }

    #[test]
    fn overload_moves_stacks_after_manual_edit() {
        let mut service = planned();
        let galax = TrailerId::new("Galax_1");
        let anderson = TrailerId::new("Anderson_1");

        // take 20 stacks off Galax_1 so Galax has spare to send
        service.edit_stack_count(&galax, 10).unwrap();
        assert_eq!(service.session().spare_stacks(&name("Galax")).unwrap(), 20);

        service.add_overload(&name("Galax"), &anderson, 20).unwrap();
        assert_eq!(service.session().spare_stacks(&name("Galax")).unwrap(), 0);
        assert_eq!(service.session().trailer(&anderson).unwrap().stack_count(), 90);

        let err = service.add_overload(&name("Galax"), &anderson, 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InsufficientSpare { spare: 0, .. })
        ));
    }

    #[test]
    fn finalized_trailer_is_frozen_but_identifiable() {
        let mut service = planned();
        let id = TrailerId::new("Anderson_1");

        let ld_number = service.finalize(&id).unwrap();
        assert_eq!(ld_number.as_str().len(), 10);

        assert!(service.edit_stack_count(&id, 10).unwrap_err().is_validation());
        assert!(matches!(
            service.finalize(&id).unwrap_err(),
            DomainError::State(StateError::AlreadyFinalized { .. })
        ));

        service
            .set_trailer_info(&id, Some("TRK-4410"), Some("S-2291"))
            .unwrap();
        assert_eq!(
            service.session().dispatch_status(&id).unwrap(),
            DispatchStatus::Dispatched
        );

        let board = DispatchBoard::from_session(service.session());
        assert_eq!(board.dispatched, 1);
        assert_eq!(board.total_trailers, 2);
    }

    #[test]
    fn session_document_resumes_where_it_left_off() {
        let mut service = planned();
        service.edit_stack_count(&TrailerId::new("Galax_1"), 25).unwrap();
        service
            .add_overload(&name("Galax"), &TrailerId::new("Anderson_1"), 5)
            .unwrap();
        let ld_number = service.finalize(&TrailerId::new("Galax_1")).unwrap();

        let json = RelayDocument::from_session(service.session())
            .unwrap()
            .to_json()
            .unwrap();
        let session = RelayDocument::from_json(&json)
            .unwrap()
            .into_session()
            .unwrap();
        assert_eq!(session.version().as_u64(), 0);

        let galax = session.trailer(&TrailerId::new("Galax_1")).unwrap();
        assert_eq!(galax.ld_number(), Some(&ld_number));
        assert_eq!(session.spare_stacks(&name("Galax")).unwrap(), 0);
        assert_eq!(
            session.trailer(&TrailerId::new("Anderson_1")).unwrap().stack_count(),
            75
        );

        let mut resumed = RelayService::from_session(session, StdRng::seed_from_u64(1));
        let err = resumed
            .add_overload(&name("Galax"), &TrailerId::new("Anderson_1"), 1)
            .unwrap_err();
        assert!(err.is_validation());
        resumed.finalize(&TrailerId::new("Anderson_1")).unwrap();
        assert_eq!(resumed.journal().len(), 1);
    }
}
