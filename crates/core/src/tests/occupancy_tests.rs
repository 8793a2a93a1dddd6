// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_mixed_layout, spot};
use crate::{CategoryOccupancy, FacilitySnapshot, SpotInventory, occupancy_rate, snapshot};
use lot_keeper_domain::{TicketId, VehicleCategory};

#[test]
fn test_occupancy_rate_rounds_to_one_decimal() {
    assert!((occupancy_rate(0, 2) - 0.0).abs() < f64::EPSILON);
    assert!((occupancy_rate(1, 2) - 50.0).abs() < f64::EPSILON);
    assert!((occupancy_rate(1, 3) - 33.3).abs() < f64::EPSILON);
    assert!((occupancy_rate(2, 3) - 66.7).abs() < f64::EPSILON);
    assert!((occupancy_rate(50, 50) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_occupancy_rate_of_empty_facility_is_zero() {
    assert!((occupancy_rate(0, 0) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_snapshot_of_fresh_inventory() {
    let inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();

    let snap: FacilitySnapshot = snapshot(&inventory);

    assert_eq!(snap.total_spots, 6);
    assert_eq!(snap.available_spots, 6);
    assert_eq!(snap.occupied_spots, 0);
    assert!((snap.occupancy_rate - 0.0).abs() < f64::EPSILON);
    assert_eq!(snap.categories.len(), 4);
}

#[test]
fn test_snapshot_breaks_down_by_category() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();
    inventory
        .mark_occupied(spot(2), TicketId::from_bits(2))
        .unwrap();
    inventory
        .mark_occupied(spot(4), TicketId::from_bits(4))
        .unwrap();

    let snap: FacilitySnapshot = snapshot(&inventory);

    assert_eq!(snap.occupied_spots, 2);
    assert_eq!(snap.available_spots, 4);
    assert!((snap.occupancy_rate - 33.3).abs() < f64::EPSILON);
    assert_eq!(
        snap.categories,
        vec![
            CategoryOccupancy {
                category: VehicleCategory::Motorcycle,
                total: 1,
                available: 1,
                occupied: 0,
            },
            CategoryOccupancy {
                category: VehicleCategory::Compact,
                total: 2,
                available: 1,
                occupied: 1,
            },
            CategoryOccupancy {
                category: VehicleCategory::Standard,
                total: 2,
                available: 1,
                occupied: 1,
            },
            CategoryOccupancy {
                category: VehicleCategory::Oversized,
                total: 1,
                available: 1,
                occupied: 0,
            },
        ]
    );
}

#[test]
fn test_snapshot_omits_categories_without_spots() {
    let inventory: SpotInventory = SpotInventory::from_layout(
        &lot_keeper_domain::FacilityLayout::uniform(VehicleCategory::Standard, 3),
    )
    .unwrap();

    let snap: FacilitySnapshot = snapshot(&inventory);

    assert_eq!(snap.categories.len(), 1);
    assert_eq!(snap.categories[0].category, VehicleCategory::Standard);
    assert_eq!(
        snap.available_spots + snap.occupied_spots,
        snap.total_spots
    );
}
