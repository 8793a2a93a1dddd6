// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_mixed_layout, spot};
use crate::{
    AllocationPolicy, AllocationStrategy, CoreError, ExactMatchPolicy, FallbackPolicy,
    SpotInventory,
};
use lot_keeper_domain::{FacilityLayout, SpotNumber, TicketId, VehicleCategory};

fn occupy(inventory: &mut SpotInventory, numbers: &[u32]) {
    for &number in numbers {
        inventory
            .mark_occupied(spot(number), TicketId::from_bits(number))
            .unwrap();
    }
}

#[test]
fn test_fallback_prefers_own_category() {
    let inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();

    let selected: SpotNumber = FallbackPolicy
        .select_spot(VehicleCategory::Standard, &inventory)
        .unwrap();

    assert_eq!(selected, spot(4));
}

#[test]
fn test_fallback_uses_next_larger_category() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();
    // Motorcycle spot taken: a motorcycle moves up to compact
    occupy(&mut inventory, &[1]);

    let selected: SpotNumber = FallbackPolicy
        .select_spot(VehicleCategory::Motorcycle, &inventory)
        .unwrap();

    assert_eq!(selected, spot(2));
}

#[test]
fn test_fallback_never_assigns_smaller_spot() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();
    occupy(&mut inventory, &[6]);

    let result: Result<SpotNumber, CoreError> =
        FallbackPolicy.select_spot(VehicleCategory::Oversized, &inventory);

    assert_eq!(
        result,
        Err(CoreError::IncompatibleCategory {
            category: VehicleCategory::Oversized,
            free_spots: 5,
        })
    );
}

#[test]
fn test_exact_policy_does_not_fall_back() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();
    occupy(&mut inventory, &[2, 3]);

    let exact: Result<SpotNumber, CoreError> =
        ExactMatchPolicy.select_spot(VehicleCategory::Compact, &inventory);
    let fallback: Result<SpotNumber, CoreError> =
        FallbackPolicy.select_spot(VehicleCategory::Compact, &inventory);

    assert!(matches!(
        exact,
        Err(CoreError::IncompatibleCategory {
            category: VehicleCategory::Compact,
            ..
        })
    ));
    assert_eq!(fallback, Ok(spot(4)));
}

#[test]
fn test_full_facility_is_no_vacancy() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&create_mixed_layout()).unwrap();
    occupy(&mut inventory, &[1, 2, 3, 4, 5, 6]);

    for category in VehicleCategory::ALL {
        assert_eq!(
            FallbackPolicy.select_spot(category, &inventory),
            Err(CoreError::NoVacancy { category })
        );
        assert_eq!(
            ExactMatchPolicy.select_spot(category, &inventory),
            Err(CoreError::NoVacancy { category })
        );
    }
}

#[test]
fn test_selection_is_deterministic_lowest_number() {
    let mut inventory: SpotInventory = SpotInventory::from_layout(&FacilityLayout::uniform(
        VehicleCategory::Standard,
        5,
    ))
    .unwrap();
    occupy(&mut inventory, &[1, 3]);

    let first: SpotNumber = FallbackPolicy
        .select_spot(VehicleCategory::Standard, &inventory)
        .unwrap();
    let second: SpotNumber = FallbackPolicy
        .select_spot(VehicleCategory::Standard, &inventory)
        .unwrap();

    assert_eq!(first, spot(2));
    assert_eq!(first, second);
}

#[test]
fn test_exact_candidates_are_own_category_only() {
    for category in VehicleCategory::ALL {
        assert_eq!(ExactMatchPolicy.candidate_categories(category), &[category]);
        assert_eq!(
            FallbackPolicy.candidate_categories(category).first(),
            Some(&category)
        );
    }
}

#[test]
fn test_strategy_builds_named_policy() {
    assert_eq!(AllocationStrategy::default(), AllocationStrategy::Fallback);
    assert_eq!(AllocationStrategy::Fallback.into_policy().name(), "fallback");
    assert_eq!(AllocationStrategy::Exact.into_policy().name(), "exact");
}
