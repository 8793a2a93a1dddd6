// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// License plate is blank or malformed.
    InvalidLicensePlate(String),
    /// Vehicle category string is not recognized.
    UnknownVehicleCategory(String),
    /// Spot numbers are positive; zero is rejected.
    InvalidSpotNumber(u32),
    /// Ticket identifier is not eight hexadecimal characters.
    InvalidTicketId(String),
    /// A facility layout must define at least one spot.
    EmptyLayout,
    /// The layout defines more spots than can be numbered.
    LayoutTooLarge {
        /// The number of spots requested before the overflow was detected.
        requested: u64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLicensePlate(msg) => write!(f, "Invalid license plate: {msg}"),
            Self::UnknownVehicleCategory(value) => {
                write!(
                    f,
                    "Unknown vehicle type '{value}'. Expected one of: motorcycle, compact, standard, oversized"
                )
            }
            Self::InvalidSpotNumber(number) => {
                write!(f, "Invalid spot number: {number}. Must be greater than 0")
            }
            Self::InvalidTicketId(value) => {
                write!(
                    f,
                    "Invalid ticket id '{value}'. Must be 8 hexadecimal characters"
                )
            }
            Self::EmptyLayout => write!(f, "Facility layout must define at least one spot"),
            Self::LayoutTooLarge { requested } => {
                write!(
                    f,
                    "Facility layout defines {requested} spots, more than can be numbered"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
