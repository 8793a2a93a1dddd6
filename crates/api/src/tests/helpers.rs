// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use lot_keeper::{AllocationStrategy, Facility};
use lot_keeper_domain::{FacilityLayout, VehicleCategory};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{ExitRequest, ParkRequest};

pub fn create_test_time() -> OffsetDateTime {
    datetime!(2026-03-01 08:00 UTC)
}

pub fn create_test_facility(spots: u32) -> Facility {
    Facility::with_default_policy(&FacilityLayout::uniform(VehicleCategory::Standard, spots))
        .unwrap()
}

/// Spots: 1 motorcycle, 2 compact, 3 standard.
pub fn create_mixed_facility(strategy: AllocationStrategy) -> Facility {
    Facility::new(
        &FacilityLayout::new()
            .with_spots(VehicleCategory::Motorcycle, 1)
            .with_spots(VehicleCategory::Compact, 1)
            .with_spots(VehicleCategory::Standard, 1),
        strategy.into_policy(),
    )
    .unwrap()
}

pub fn park_request(license_plate: &str) -> ParkRequest {
    ParkRequest {
        license_plate: String::from(license_plate),
        vehicle_type: None,
    }
}

pub fn exit_request(license_plate: &str) -> ExitRequest {
    ExitRequest {
        license_plate: String::from(license_plate),
    }
}
