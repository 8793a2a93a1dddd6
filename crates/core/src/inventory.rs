// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use lot_keeper_domain::{FacilityLayout, SpotNumber, TicketId, VehicleCategory};

/// Occupancy of a single spot.
///
/// An occupied spot always carries the id of the ticket holding it, so a
/// spot cannot be occupied without a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpotState {
    /// Nobody is parked here.
    Free,
    /// A vehicle is parked here under `ticket_id`.
    Occupied {
        /// The active ticket holding this spot.
        ticket_id: TicketId,
    },
}

/// One physical parking space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    number: SpotNumber,
    category: VehicleCategory,
    state: SpotState,
}

impl Spot {
    /// Creates a free spot.
    #[must_use]
    pub const fn new(number: SpotNumber, category: VehicleCategory) -> Self {
        Self {
            number,
            category,
            state: SpotState::Free,
        }
    }

    /// Returns the spot number.
    #[must_use]
    pub const fn number(&self) -> SpotNumber {
        self.number
    }

    /// Returns the category this spot is built for.
    #[must_use]
    pub const fn category(&self) -> VehicleCategory {
        self.category
    }

    /// Returns the current occupancy.
    #[must_use]
    pub const fn state(&self) -> &SpotState {
        &self.state
    }

    /// Returns whether the spot is free.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self.state, SpotState::Free)
    }

    /// Returns the ticket holding this spot, if any.
    #[must_use]
    pub const fn current_ticket(&self) -> Option<&TicketId> {
        match &self.state {
            SpotState::Free => None,
            SpotState::Occupied { ticket_id } => Some(ticket_id),
        }
    }
}

/// The fixed set of spots in a facility.
///
/// The inventory performs no locking. Callers must hold the facility's write
/// lock before calling the `mark_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotInventory {
    // Invariant: spots[i].number == i + 1
    spots: Vec<Spot>,
}

impl SpotInventory {
    /// Builds an inventory with every spot free.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty or too large to number.
    pub fn from_layout(layout: &FacilityLayout) -> Result<Self, CoreError> {
        let spots: Vec<Spot> = layout
            .numbered_spots()?
            .into_iter()
            .map(|(number, category)| Spot::new(number, category))
            .collect();
        Ok(Self { spots })
    }

    /// Returns the number of spots.
    #[must_use]
    pub fn total(&self) -> usize {
        self.spots.len()
    }

    /// Returns every spot in number order.
    #[must_use]
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Looks up a spot by number.
    #[must_use]
    pub fn spot(&self, number: SpotNumber) -> Option<&Spot> {
        Self::index_of(number).and_then(|index| self.spots.get(index))
    }

    /// Returns the lowest-numbered free spot of exactly `category`.
    #[must_use]
    pub fn find_free_spot(&self, category: VehicleCategory) -> Option<SpotNumber> {
        self.spots
            .iter()
            .find(|spot| spot.category == category && spot.is_free())
            .map(Spot::number)
    }

    /// Returns the number of free spots across all categories.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_free()).count()
    }

    /// Returns the number of occupied spots across all categories.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.total() - self.free_count()
    }

    /// Marks a free spot as held by `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSpot` if the number is outside the facility, or
    /// `InvalidState` if the spot is already occupied.
    pub(crate) fn mark_occupied(
        &mut self,
        number: SpotNumber,
        ticket_id: TicketId,
    ) -> Result<(), CoreError> {
        let spot: &mut Spot = self.spot_mut(number)?;
        if let SpotState::Occupied { ticket_id: holder } = &spot.state {
            return Err(CoreError::invalid_state(format!(
                "spot {number} is already occupied by ticket {holder}"
            )));
        }
        spot.state = SpotState::Occupied { ticket_id };
        Ok(())
    }

    /// Frees an occupied spot, returning the ticket that held it.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSpot` if the number is outside the facility, or
    /// `InvalidState` if the spot is already free.
    pub(crate) fn mark_free(&mut self, number: SpotNumber) -> Result<TicketId, CoreError> {
        let spot: &mut Spot = self.spot_mut(number)?;
        match std::mem::replace(&mut spot.state, SpotState::Free) {
            SpotState::Occupied { ticket_id } => Ok(ticket_id),
            SpotState::Free => Err(CoreError::invalid_state(format!(
                "spot {number} is already free"
            ))),
        }
    }

    fn spot_mut(&mut self, number: SpotNumber) -> Result<&mut Spot, CoreError> {
        Self::index_of(number)
            .and_then(|index| self.spots.get_mut(index))
            .ok_or(CoreError::UnknownSpot {
                spot_number: number,
            })
    }

    fn index_of(number: SpotNumber) -> Option<usize> {
        usize::try_from(number.value()).ok()?.checked_sub(1)
    }
}
