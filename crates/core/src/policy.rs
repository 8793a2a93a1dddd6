// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Spot allocation policies.
//!
//! A policy decides which free spot a vehicle gets. Policies only read the
//! inventory; the facility marks the chosen spot occupied.

use crate::error::CoreError;
use crate::inventory::SpotInventory;
use lot_keeper_domain::{SpotNumber, VehicleCategory};

/// Chooses a free spot for a vehicle.
///
/// Implementations must be deterministic: the same inventory and category
/// always produce the same spot.
pub trait AllocationPolicy: std::fmt::Debug + Send + Sync {
    /// A short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the spot categories tried for `vehicle_type`, in order.
    fn candidate_categories(&self, vehicle_type: VehicleCategory) -> &[VehicleCategory];

    /// Selects a spot for `vehicle_type`.
    ///
    /// Within each candidate category the lowest-numbered free spot wins.
    ///
    /// # Errors
    ///
    /// Returns `NoVacancy` if the facility has no free spot at all, or
    /// `IncompatibleCategory` if free spots exist but none can take the vehicle.
    fn select_spot(
        &self,
        vehicle_type: VehicleCategory,
        inventory: &SpotInventory,
    ) -> Result<SpotNumber, CoreError> {
        if let Some(spot) = self
            .candidate_categories(vehicle_type)
            .iter()
            .find_map(|&category| inventory.find_free_spot(category))
        {
            return Ok(spot);
        }

        match inventory.free_count() {
            0 => Err(CoreError::NoVacancy {
                category: vehicle_type,
            }),
            free_spots => Err(CoreError::IncompatibleCategory {
                category: vehicle_type,
                free_spots,
            }),
        }
    }
}

/// Lets a vehicle use its own category or any larger one, closest fit first.
///
/// See `VehicleCategory::compatible_spots` for the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackPolicy;

impl AllocationPolicy for FallbackPolicy {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn candidate_categories(&self, vehicle_type: VehicleCategory) -> &[VehicleCategory] {
        vehicle_type.compatible_spots()
    }
}

/// Only assigns spots of the vehicle's own category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatchPolicy;

impl AllocationPolicy for ExactMatchPolicy {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn candidate_categories(&self, vehicle_type: VehicleCategory) -> &[VehicleCategory] {
        // First entry of the compatibility table is always the category itself.
        vehicle_type.compatible_spots().get(..1).unwrap_or(&[])
    }
}

/// Selects one of the built-in policies by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocationStrategy {
    /// `FallbackPolicy`.
    #[default]
    Fallback,
    /// `ExactMatchPolicy`.
    Exact,
}

impl AllocationStrategy {
    /// Builds the policy for this strategy.
    #[must_use]
    pub fn into_policy(self) -> Box<dyn AllocationPolicy> {
        match self {
            Self::Fallback => Box::new(FallbackPolicy),
            Self::Exact => Box::new(ExactMatchPolicy),
        }
    }
}
