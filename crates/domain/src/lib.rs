// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod category;
mod error;
mod layout;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use category::VehicleCategory;
pub use error::DomainError;
pub use layout::FacilityLayout;
pub use types::{LicensePlate, SpotNumber, TicketId};
pub use validation::{MAX_PLATE_LENGTH, validate_layout, validate_license_plate};
