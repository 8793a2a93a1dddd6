// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::category::VehicleCategory;
use crate::error::DomainError;
use crate::types::SpotNumber;
use crate::validation::validate_layout;

/// The physical arrangement of a facility: how many spots of each category
/// it has.
///
/// Spots are numbered from 1 in allotment order, so a layout of
/// `3 compact, 2 standard` yields compact spots 1-3 and standard spots 4-5.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacilityLayout {
    allotments: Vec<(VehicleCategory, u32)>,
}

impl FacilityLayout {
    /// Creates an empty layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allotments: Vec::new(),
        }
    }

    /// Creates a layout where every spot has the same category.
    #[must_use]
    pub fn uniform(category: VehicleCategory, count: u32) -> Self {
        Self::new().with_spots(category, count)
    }

    /// Appends `count` spots of `category`. Zero counts are ignored.
    #[must_use]
    pub fn with_spots(mut self, category: VehicleCategory, count: u32) -> Self {
        if count > 0 {
            self.allotments.push((category, count));
        }
        self
    }

    /// Returns the allotments in numbering order.
    #[must_use]
    pub fn allotments(&self) -> &[(VehicleCategory, u32)] {
        &self.allotments
    }

    /// Assigns a spot number to every spot in the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty or too large to number.
    pub fn numbered_spots(&self) -> Result<Vec<(SpotNumber, VehicleCategory)>, DomainError> {
        validate_layout(self)?;

        let mut spots: Vec<(SpotNumber, VehicleCategory)> = Vec::new();
        let mut next: u32 = 1;
        for &(category, count) in &self.allotments {
            for _ in 0..count {
                spots.push((SpotNumber::new(next)?, category));
                next = next.saturating_add(1);
            }
        }
        Ok(spots)
    }
}
