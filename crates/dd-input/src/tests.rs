//! Loader tests over in-memory CSV sources.

use std::io::Cursor;

use dd_charging::{ChargingError, ChargingStation, StationKind};
use dd_core::{GridPoint, StationId, UnitId};
use dd_fleet::{FleetError, UnitKind};

use crate::{
    InputError, load_assignment_reader, load_depots_reader, load_orders_reader,
    load_units_reader,
};

#[cfg(test)]
mod depots {
    use super::*;

    #[test]
    fn loads_roster_in_file_order() {
        let csv = "name,x,y\nNorth,0,0\nSouth,10,10\n";
        let roster = load_depots_reader(Cursor::new(csv)).unwrap();
        assert_eq!(roster.len(), 2);
        let first = roster.iter().next().unwrap();
        assert_eq!(first.name, "North");
        assert_eq!(first.location, GridPoint::new(0, 0));
    }

    #[test]
    fn negative_coordinates_parse() {
        let csv = "name,x,y\nWest,-5,3\n";
        let roster = load_depots_reader(Cursor::new(csv)).unwrap();
        assert_eq!(roster.iter().next().unwrap().location, GridPoint::new(-5, 3));
    }

    #[test]
    fn empty_file_is_rejected() {
        let result = load_depots_reader(Cursor::new("name,x,y\n"));
        assert!(matches!(result, Err(InputError::Fleet(FleetError::NoDepots))));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let result = load_depots_reader(Cursor::new("name,x,y\nNorth,zero,0\n"));
        assert!(matches!(result, Err(InputError::Parse(_))));
    }
}

#[cfg(test)]
mod orders {
    use super::*;

    #[test]
    fn items_split_on_semicolons() {
        let csv = "customer,x,y,items\nAda,1,1,book;lamp\nGrace,4,-2,kettle\n";
        let orders = load_orders_reader(Cursor::new(csv)).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].items, vec!["book", "lamp"]);
        assert_eq!(orders[0].size(), 2);
        assert_eq!(orders[1].size(), 1);
    }

    #[test]
    fn empty_items_field_means_no_items() {
        let csv = "customer,x,y,items\nAda,1,1,\n";
        let orders = load_orders_reader(Cursor::new(csv)).unwrap();
        assert_eq!(orders[0].size(), 0);
    }

    #[test]
    fn ids_follow_file_order() {
        let csv = "customer,x,y,items\nA,0,0,x\nB,0,0,x\nC,0,0,x\n";
        let orders = load_orders_reader(Cursor::new(csv)).unwrap();
        let ids: Vec<u32> = orders.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}

#[cfg(test)]
mod units {
    use super::*;

    #[test]
    fn kinds_parse_case_insensitively() {
        let csv = "kind,max_load,consumption_rate,battery_level\n\
                   normal,10,0.1,100\n\
                   Fast,5,0.2,40\n";
        let units = load_units_reader(Cursor::new(csv)).unwrap();
        assert_eq!(units[0].kind, UnitKind::Normal);
        assert_eq!(units[1].kind, UnitKind::Fast);
        assert!((units[1].battery.percent() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let csv = "kind,max_load,consumption_rate,battery_level\nhover,10,0.1,100\n";
        assert!(matches!(
            load_units_reader(Cursor::new(csv)),
            Err(InputError::Parse(_))
        ));
    }

    #[test]
    fn fleet_validation_applies() {
        // Non-positive consumption rate fails Unit construction.
        let csv = "kind,max_load,consumption_rate,battery_level\nnormal,10,0,100\n";
        assert!(matches!(
            load_units_reader(Cursor::new(csv)),
            Err(InputError::Fleet(FleetError::InvalidConsumptionRate { .. }))
        ));
    }
}

#[cfg(test)]
mod assignments {
    use super::*;

    fn stations() -> Vec<ChargingStation> {
        vec![
            ChargingStation::new(StationId(0), "s0", StationKind::Standard, 100, 10.0, 2)
                .unwrap(),
            ChargingStation::new(StationId(1), "s1", StationKind::Fast, 300, 20.0, 1).unwrap(),
        ]
    }

    fn units() -> Vec<dd_fleet::Unit> {
        load_units_reader(Cursor::new(
            "kind,max_load,consumption_rate,battery_level\n\
             normal,10,0.1,50\n\
             normal,10,0.1,60\n\
             fast,5,0.2,70\n",
        ))
        .unwrap()
    }

    #[test]
    fn valid_pairs_build_an_assignment() {
        let csv = "unit_id,station_id\n0,0\n1,0\n2,1\n";
        let assignment =
            load_assignment_reader(Cursor::new(csv), &stations(), &units()).unwrap();
        assert_eq!(assignment.len(), 3);
        assert_eq!(assignment.station_of(UnitId(2)), Some(StationId(1)));
    }

    #[test]
    fn capacity_violations_surface() {
        let csv = "unit_id,station_id\n0,1\n1,1\n";
        let result = load_assignment_reader(Cursor::new(csv), &stations(), &units());
        assert!(matches!(
            result,
            Err(InputError::Charging(ChargingError::OverCapacity { .. }))
        ));
    }
}
