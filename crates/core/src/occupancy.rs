// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::inventory::SpotInventory;
use lot_keeper_domain::VehicleCategory;
use num_traits::cast::ToPrimitive;

/// Occupancy of one spot category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOccupancy {
    /// The spot category.
    pub category: VehicleCategory,
    /// Spots of this category.
    pub total: usize,
    /// Free spots of this category.
    pub available: usize,
    /// Occupied spots of this category.
    pub occupied: usize,
}

/// Summary statistics for the facility at one instant.
///
/// Derived from the inventory on every call; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilitySnapshot {
    /// Number of spots in the facility.
    pub total_spots: usize,
    /// Free spots. `available_spots + occupied_spots == total_spots`.
    pub available_spots: usize,
    /// Occupied spots.
    pub occupied_spots: usize,
    /// Percentage of spots occupied, rounded to one decimal place.
    pub occupancy_rate: f64,
    /// Breakdown for every category the facility has spots of.
    pub categories: Vec<CategoryOccupancy>,
}

/// Percentage of `occupied` over `total`, rounded to one decimal place.
///
/// An empty facility reports 0.0.
#[must_use]
pub fn occupancy_rate(occupied: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let occupied: f64 = occupied.to_f64().unwrap_or(0.0);
    let total: f64 = total.to_f64().unwrap_or(1.0);
    (occupied / total * 1000.0).round() / 10.0
}

/// Computes the current snapshot of `inventory`.
#[must_use]
pub fn snapshot(inventory: &SpotInventory) -> FacilitySnapshot {
    let mut categories: Vec<CategoryOccupancy> = Vec::new();
    let mut available_spots: usize = 0;

    for category in VehicleCategory::ALL {
        let (total, available): (usize, usize) = inventory
            .spots()
            .iter()
            .filter(|spot| spot.category() == category)
            .fold((0, 0), |(total, available), spot| {
                (total + 1, available + usize::from(spot.is_free()))
            });

        if total == 0 {
            continue;
        }

        available_spots += available;
        categories.push(CategoryOccupancy {
            category,
            total,
            available,
            occupied: total - available,
        });
    }

    let total_spots: usize = inventory.total();
    let occupied_spots: usize = total_spots - available_spots;

    FacilitySnapshot {
        total_spots,
        available_spots,
        occupied_spots,
        occupancy_rate: occupancy_rate(occupied_spots, total_spots),
        categories,
    }
}
