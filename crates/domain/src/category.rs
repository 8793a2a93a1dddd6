// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vehicle size classification.
///
/// The same enumeration describes both what a vehicle needs and what a spot
/// is built for. Variants are ordered smallest to largest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Motorcycles and scooters.
    Motorcycle,
    /// Small cars.
    Compact,
    /// Regular passenger cars.
    #[default]
    Standard,
    /// Trucks, vans, and other large vehicles.
    Oversized,
}

use VehicleCategory::{Compact, Motorcycle, Oversized, Standard};

// Spot categories a vehicle may use, closest fit first.
const MOTORCYCLE_FITS: &[VehicleCategory] = &[Motorcycle, Compact, Standard, Oversized];
const COMPACT_FITS: &[VehicleCategory] = &[Compact, Standard, Oversized];
const STANDARD_FITS: &[VehicleCategory] = &[Standard, Oversized];
const OVERSIZED_FITS: &[VehicleCategory] = &[Oversized];

impl VehicleCategory {
    /// Every category, smallest first.
    pub const ALL: [Self; 4] = [Motorcycle, Compact, Standard, Oversized];

    /// Converts this category to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Oversized => "oversized",
        }
    }

    /// Returns the spot categories a vehicle of this category may occupy,
    /// ordered by preference.
    ///
    /// A vehicle fits its own category and every larger one, never a smaller
    /// one:
    ///
    /// | Vehicle      | Spots tried                                  |
    /// |--------------|----------------------------------------------|
    /// | `motorcycle` | motorcycle, compact, standard, oversized     |
    /// | `compact`    | compact, standard, oversized                 |
    /// | `standard`   | standard, oversized                          |
    /// | `oversized`  | oversized                                    |
    #[must_use]
    pub const fn compatible_spots(&self) -> &'static [Self] {
        match self {
            Self::Motorcycle => MOTORCYCLE_FITS,
            Self::Compact => COMPACT_FITS,
            Self::Standard => STANDARD_FITS,
            Self::Oversized => OVERSIZED_FITS,
        }
    }

    /// Returns whether a vehicle of this category may park in a spot of
    /// `spot_category`.
    #[must_use]
    pub fn fits_in(&self, spot_category: Self) -> bool {
        self.compatible_spots().contains(&spot_category)
    }
}

impl FromStr for VehicleCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "motorcycle" | "bike" => Ok(Self::Motorcycle),
            "compact" => Ok(Self::Compact),
            "standard" | "car" => Ok(Self::Standard),
            "oversized" | "truck" | "suv" | "van" => Ok(Self::Oversized),
            _ => Err(DomainError::UnknownVehicleCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
