// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_mixed_layout, create_test_state, opening_time, plate, spot};
use crate::{
    Command, CoreError, ExactMatchPolicy, FacilityState, FallbackPolicy, Outcome,
    TransitionResult, apply,
};
use lot_keeper_activity::ActivityAction;
use lot_keeper_domain::{FacilityLayout, VehicleCategory};
use time::Duration;

fn park_command(value: &str, vehicle_type: VehicleCategory) -> Command {
    Command::Park {
        license_plate: plate(value),
        vehicle_type,
    }
}

#[test]
fn test_apply_park_issues_ticket_and_records_entry() {
    let mut state: FacilityState = create_test_state(&create_mixed_layout());

    let result: TransitionResult = apply(
        &mut state,
        &FallbackPolicy,
        park_command("ABC123", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();

    let Outcome::Parked(receipt) = result.outcome else {
        panic!("expected a park receipt");
    };
    assert_eq!(receipt.spot_number, spot(4));
    assert_eq!(receipt.spot_category, VehicleCategory::Standard);
    assert_eq!(receipt.entry_time, opening_time());
    assert_eq!(result.activity_event.action, ActivityAction::Entry);
    assert_eq!(result.activity_event.sequence, Some(1));
    assert_eq!(result.activity_event.ticket_id, receipt.ticket_id);
    assert_eq!(result.activity_event.duration_minutes, None);
    assert_eq!(
        state.inventory().spot(spot(4)).unwrap().current_ticket(),
        Some(&receipt.ticket_id)
    );
    assert!(state.check_consistency().is_ok());
}

#[test]
fn test_apply_park_reports_fallback_spot_category() {
    let mut state: FacilityState = create_test_state(
        &FacilityLayout::new()
            .with_spots(VehicleCategory::Compact, 1)
            .with_spots(VehicleCategory::Oversized, 1),
    );

    let result: TransitionResult = apply(
        &mut state,
        &FallbackPolicy,
        park_command("VAN1", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();

    let Outcome::Parked(receipt) = result.outcome else {
        panic!("expected a park receipt");
    };
    assert_eq!(receipt.vehicle_type, VehicleCategory::Standard);
    assert_eq!(receipt.spot_category, VehicleCategory::Oversized);
    assert_eq!(receipt.spot_number, spot(2));
}

#[test]
fn test_apply_exit_closes_ticket_and_records_duration() {
    let mut state: FacilityState = create_test_state(&create_mixed_layout());
    apply(
        &mut state,
        &FallbackPolicy,
        park_command("ABC123", VehicleCategory::Compact),
        opening_time(),
    )
    .unwrap();

    let result: TransitionResult = apply(
        &mut state,
        &FallbackPolicy,
        Command::Exit {
            license_plate: plate("ABC123"),
        },
        opening_time() + Duration::minutes(45) + Duration::seconds(30),
    )
    .unwrap();

    let Outcome::Exited(receipt) = result.outcome else {
        panic!("expected an exit receipt");
    };
    assert_eq!(receipt.spot_number, spot(2));
    assert_eq!(receipt.duration_minutes, 45);
    assert_eq!(result.activity_event.action, ActivityAction::Exit);
    assert_eq!(result.activity_event.sequence, Some(2));
    assert_eq!(result.activity_event.duration_minutes, Some(45));
    assert!(state.inventory().spot(spot(2)).unwrap().is_free());
    assert_eq!(state.ledger().active_count(), 0);
    assert!(state.check_consistency().is_ok());
}

#[test]
fn test_failed_park_leaves_state_unchanged() {
    let mut state: FacilityState =
        create_test_state(&FacilityLayout::uniform(VehicleCategory::Standard, 1));
    apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();
    let before: FacilityState = state.clone();

    let full: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &FallbackPolicy,
        park_command("BBB", VehicleCategory::Standard),
        opening_time(),
    );
    let duplicate: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    );

    assert!(matches!(full, Err(CoreError::NoVacancy { .. })));
    assert!(matches!(duplicate, Err(CoreError::DuplicateActivePlate { .. })));
    assert_eq!(state, before);
}

#[test]
fn test_duplicate_plate_checked_before_vacancy() {
    let mut state: FacilityState =
        create_test_state(&FacilityLayout::uniform(VehicleCategory::Standard, 1));
    apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();

    let result: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    );

    assert_eq!(
        result,
        Err(CoreError::DuplicateActivePlate { plate: plate("AAA") })
    );
}

#[test]
fn test_incompatible_park_leaves_state_unchanged() {
    let mut state: FacilityState =
        create_test_state(&FacilityLayout::uniform(VehicleCategory::Compact, 2));
    let before: FacilityState = state.clone();

    let result: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &ExactMatchPolicy,
        park_command("TRUCK1", VehicleCategory::Oversized),
        opening_time(),
    );

    assert_eq!(
        result,
        Err(CoreError::IncompatibleCategory {
            category: VehicleCategory::Oversized,
            free_spots: 2,
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_failed_exit_leaves_state_unchanged() {
    let mut state: FacilityState = create_test_state(&create_mixed_layout());
    apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();
    let before: FacilityState = state.clone();

    let result: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &FallbackPolicy,
        Command::Exit {
            license_plate: plate("NOPLATE"),
        },
        opening_time(),
    );

    assert_eq!(
        result,
        Err(CoreError::NotFound {
            plate: plate("NOPLATE")
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_exit_detects_spot_not_held_by_ticket() {
    let mut state: FacilityState = create_test_state(&create_mixed_layout());
    apply(
        &mut state,
        &FallbackPolicy,
        park_command("AAA", VehicleCategory::Standard),
        opening_time(),
    )
    .unwrap();
    // Corrupt the inventory behind the ledger's back
    state.inventory.mark_free(spot(4)).unwrap();
    let before: FacilityState = state.clone();

    let result: Result<TransitionResult, CoreError> = apply(
        &mut state,
        &FallbackPolicy,
        Command::Exit {
            license_plate: plate("AAA"),
        },
        opening_time(),
    );

    assert!(matches!(result, Err(CoreError::InvalidState { .. })));
    assert!(result.unwrap_err().is_defect());
    assert_eq!(state, before);
    assert!(state.check_consistency().is_err());
}
