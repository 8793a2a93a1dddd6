// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_license_plate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vehicle's license plate.
///
/// Plates are the identifying key for a vehicle's stay. They are normalized
/// (trimmed, uppercased) on construction so `abc123 ` and `ABC123` refer to
/// the same vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicensePlate {
    value: String,
}

impl LicensePlate {
    /// Parses and normalizes a raw plate string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLicensePlate` if the plate is blank after
    /// trimming, too long, or contains characters other than ASCII letters,
    /// digits, spaces, and hyphens.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: String = raw.trim().to_uppercase();
        validate_license_plate(&value)?;
        Ok(Self { value })
    }

    /// Returns the normalized plate value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for LicensePlate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LicensePlate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LicensePlate> for String {
    fn from(plate: LicensePlate) -> Self {
        plate.value
    }
}

/// The number of a physical parking spot.
///
/// Spot numbers start at 1 and stay fixed for the lifetime of the facility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct SpotNumber(u32);

impl SpotNumber {
    /// Creates a spot number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSpotNumber` if `number` is zero.
    pub const fn new(number: u32) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::InvalidSpotNumber(number));
        }
        Ok(Self(number))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpotNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for SpotNumber {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpotNumber> for u32 {
    fn from(number: SpotNumber) -> Self {
        number.0
    }
}

/// A ticket identifier.
///
/// Eight uppercase hexadecimal characters, e.g. `3FA2C90B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketId {
    value: String,
}

impl TicketId {
    /// Length of every ticket identifier.
    pub const LENGTH: usize = 8;

    /// Builds a ticket identifier from 32 bits of entropy.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            value: format!("{bits:08X}"),
        }
    }

    /// Parses a ticket identifier, accepting lowercase hex digits.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketId` unless the input is exactly
    /// eight hexadecimal characters.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let value: String = raw.trim().to_uppercase();
        if value.len() != Self::LENGTH || !value.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidTicketId(raw.to_string()));
        }
        Ok(Self { value })
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for TicketId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TicketId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.value
    }
}
