// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::layout::FacilityLayout;

/// Longest accepted license plate, after normalization.
pub const MAX_PLATE_LENGTH: usize = 16;

/// Validates a normalized license plate.
///
/// The caller is expected to have trimmed and uppercased the value already.
///
/// # Errors
///
/// Returns an error if:
/// - The plate is empty
/// - The plate is longer than `MAX_PLATE_LENGTH`
/// - The plate contains anything other than ASCII letters, digits, spaces, or hyphens
pub fn validate_license_plate(value: &str) -> Result<(), DomainError> {
    // Rule: a plate must identify something
    if value.is_empty() {
        return Err(DomainError::InvalidLicensePlate(String::from(
            "License plate required",
        )));
    }

    if value.chars().count() > MAX_PLATE_LENGTH {
        return Err(DomainError::InvalidLicensePlate(format!(
            "License plate must be at most {MAX_PLATE_LENGTH} characters"
        )));
    }

    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == ' ' || *c == '-'))
    {
        return Err(DomainError::InvalidLicensePlate(format!(
            "License plate contains invalid character '{bad}'"
        )));
    }

    Ok(())
}

/// Validates that a layout describes a facility that can be built.
///
/// # Errors
///
/// Returns an error if:
/// - The layout defines no spots
/// - The total spot count does not fit in a spot number
pub fn validate_layout(layout: &FacilityLayout) -> Result<(), DomainError> {
    let total: u64 = layout
        .allotments()
        .iter()
        .map(|(_, count)| u64::from(*count))
        .sum();

    if total == 0 {
        return Err(DomainError::EmptyLayout);
    }

    if total > u64::from(u32::MAX) {
        return Err(DomainError::LayoutTooLarge { requested: total });
    }

    Ok(())
}
