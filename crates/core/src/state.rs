// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::inventory::{SpotInventory, SpotState};
use crate::ledger::TicketLedger;
use lot_keeper_activity::ActivityLog;
use lot_keeper_domain::FacilityLayout;

/// Everything a facility knows: its spots, its tickets, and its history.
///
/// The three parts only change together, inside `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityState {
    pub(crate) inventory: SpotInventory,
    pub(crate) ledger: TicketLedger,
    pub(crate) activity: ActivityLog,
}

impl FacilityState {
    /// Creates the state of a freshly opened facility: every spot free, no
    /// tickets, no history.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty or too large to number.
    pub fn new(layout: &FacilityLayout) -> Result<Self, CoreError> {
        Ok(Self {
            inventory: SpotInventory::from_layout(layout)?,
            ledger: TicketLedger::new(),
            activity: ActivityLog::new(),
        })
    }

    /// Returns the spot inventory.
    #[must_use]
    pub const fn inventory(&self) -> &SpotInventory {
        &self.inventory
    }

    /// Returns the ticket ledger.
    #[must_use]
    pub const fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    /// Returns the activity log.
    #[must_use]
    pub const fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Checks that inventory and ledger agree.
    ///
    /// The following must hold:
    /// - every occupied spot is held by an active ticket assigned to that spot
    /// - every active ticket's spot is occupied by that ticket
    /// - the number of occupied spots equals the number of active tickets
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` describing the first divergence found.
    pub fn check_consistency(&self) -> Result<(), CoreError> {
        for spot in self.inventory.spots() {
            let SpotState::Occupied { ticket_id } = spot.state() else {
                continue;
            };
            let ticket = self.ledger.ticket(ticket_id).ok_or_else(|| {
                CoreError::invalid_state(format!(
                    "spot {} references unknown ticket {ticket_id}",
                    spot.number()
                ))
            })?;
            if !ticket.is_active() {
                return Err(CoreError::invalid_state(format!(
                    "spot {} is held by closed ticket {ticket_id}",
                    spot.number()
                )));
            }
            if ticket.spot_number() != spot.number() {
                return Err(CoreError::invalid_state(format!(
                    "spot {} is held by ticket {ticket_id} assigned to spot {}",
                    spot.number(),
                    ticket.spot_number()
                )));
            }
        }

        for ticket in self.ledger.list_active() {
            let holder = self
                .inventory
                .spot(ticket.spot_number())
                .and_then(|spot| spot.current_ticket());
            if holder != Some(ticket.id()) {
                return Err(CoreError::invalid_state(format!(
                    "active ticket {} is not holding spot {}",
                    ticket.id(),
                    ticket.spot_number()
                )));
            }
        }

        let occupied: usize = self.inventory.occupied_count();
        let active: usize = self.ledger.active_count();
        if occupied != active {
            return Err(CoreError::invalid_state(format!(
                "{occupied} occupied spot(s) but {active} active ticket(s)"
            )));
        }

        Ok(())
    }
}
