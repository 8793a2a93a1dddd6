// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Facility, FacilityState};
use lot_keeper_domain::{FacilityLayout, LicensePlate, SpotNumber, VehicleCategory};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn opening_time() -> OffsetDateTime {
    datetime!(2026-03-01 08:00 UTC)
}

pub fn plate(value: &str) -> LicensePlate {
    LicensePlate::parse(value).unwrap()
}

pub fn spot(number: u32) -> SpotNumber {
    SpotNumber::new(number).unwrap()
}

/// Spots: 1 motorcycle, 2-3 compact, 4-5 standard, 6 oversized.
pub fn create_mixed_layout() -> FacilityLayout {
    FacilityLayout::new()
        .with_spots(VehicleCategory::Motorcycle, 1)
        .with_spots(VehicleCategory::Compact, 2)
        .with_spots(VehicleCategory::Standard, 2)
        .with_spots(VehicleCategory::Oversized, 1)
}

pub fn create_standard_facility(spots: u32) -> Facility {
    Facility::with_default_policy(&FacilityLayout::uniform(VehicleCategory::Standard, spots))
        .unwrap()
}

pub fn create_test_state(layout: &FacilityLayout) -> FacilityState {
    FacilityState::new(layout).unwrap()
}
