// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error translation tests.

use lot_keeper::CoreError;
use lot_keeper_domain::{DomainError, LicensePlate, VehicleCategory};

use crate::{ApiError, NO_SPOT_AVAILABLE, translate_core_error, translate_domain_error};

#[test]
fn test_invalid_plate_keeps_message() {
    let api_err: ApiError =
        translate_domain_error(DomainError::InvalidLicensePlate(String::from(
            "License plate required",
        )));

    assert_eq!(api_err.to_string(), "License plate required");
}

#[test]
fn test_layout_errors_are_invalid_input() {
    let api_err: ApiError = translate_domain_error(DomainError::EmptyLayout);

    assert!(matches!(
        api_err,
        ApiError::InvalidInput { ref field, .. } if field == "layout"
    ));
}

#[test]
fn test_domain_violation_passes_through_core() {
    let api_err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::UnknownVehicleCategory(String::from("tank")),
    ));

    assert!(matches!(
        api_err,
        ApiError::InvalidInput { ref field, .. } if field == "vehicle_type"
    ));
}

#[test]
fn test_no_vacancy_message() {
    let api_err: ApiError = translate_core_error(CoreError::NoVacancy {
        category: VehicleCategory::Standard,
    });

    assert_eq!(api_err.to_string(), NO_SPOT_AVAILABLE);
}

#[test]
fn test_allocation_failures_share_one_client_message() {
    let full: ApiError = translate_core_error(CoreError::NoVacancy {
        category: VehicleCategory::Standard,
    });
    let incompatible: ApiError = translate_core_error(CoreError::IncompatibleCategory {
        category: VehicleCategory::Oversized,
        free_spots: 3,
    });

    assert_eq!(full, incompatible);
    assert!(!incompatible.to_string().contains("oversized"));
}

#[test]
fn test_not_found_is_resource_not_found() {
    let api_err: ApiError = translate_core_error(CoreError::NotFound {
        plate: LicensePlate::parse("XYZ").unwrap(),
    });

    assert_eq!(
        api_err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: String::from("Vehicle XYZ not found"),
        }
    );
}

#[test]
fn test_invalid_state_is_internal() {
    let api_err: ApiError = translate_core_error(CoreError::InvalidState {
        reason: String::from("spot 3 is already free"),
    });

    assert!(matches!(api_err, ApiError::Internal { .. }));
    assert_eq!(
        api_err.to_string(),
        "Internal error: Invalid facility state: spot 3 is already free"
    );
}
