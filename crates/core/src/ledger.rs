// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use lot_keeper_domain::{LicensePlate, SpotNumber, TicketId, VehicleCategory};
use std::collections::HashMap;
use time::OffsetDateTime;

/// Whether a ticket still holds its spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    /// The vehicle is parked.
    Active,
    /// The vehicle has left. Terminal.
    Closed,
}

impl TicketStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

/// Whole minutes between `from` and `until`, rounded down.
///
/// Returns 0 if `until` precedes `from` (wall clock stepped backwards).
#[must_use]
pub fn elapsed_minutes(from: OffsetDateTime, until: OffsetDateTime) -> u64 {
    u64::try_from((until - from).whole_minutes()).unwrap_or(0)
}

/// The record binding a vehicle's stay to a spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: TicketId,
    license_plate: LicensePlate,
    vehicle_type: VehicleCategory,
    spot_number: SpotNumber,
    entry_time: OffsetDateTime,
    exit_time: Option<OffsetDateTime>,
}

impl Ticket {
    /// Returns the ticket identifier.
    #[must_use]
    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    /// Returns the plate of the parked vehicle.
    #[must_use]
    pub const fn license_plate(&self) -> &LicensePlate {
        &self.license_plate
    }

    /// Returns the category requested at entry.
    #[must_use]
    pub const fn vehicle_type(&self) -> VehicleCategory {
        self.vehicle_type
    }

    /// Returns the assigned spot.
    #[must_use]
    pub const fn spot_number(&self) -> SpotNumber {
        self.spot_number
    }

    /// Returns when the ticket was issued.
    #[must_use]
    pub const fn entry_time(&self) -> OffsetDateTime {
        self.entry_time
    }

    /// Returns when the ticket was closed, if it has been.
    #[must_use]
    pub const fn exit_time(&self) -> Option<OffsetDateTime> {
        self.exit_time
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        if self.exit_time.is_some() {
            TicketStatus::Closed
        } else {
            TicketStatus::Active
        }
    }

    /// Returns whether the ticket is still active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Returns the frozen stay duration of a closed ticket.
    #[must_use]
    pub fn duration_minutes(&self) -> Option<u64> {
        self.exit_time
            .map(|exit_time| elapsed_minutes(self.entry_time, exit_time))
    }

    fn close(&mut self, now: OffsetDateTime) -> Result<(), CoreError> {
        if self.exit_time.is_some() {
            return Err(CoreError::invalid_state(format!(
                "ticket {} is already closed",
                self.id
            )));
        }
        self.exit_time = Some(now);
        Ok(())
    }
}

/// Issues, tracks, and closes tickets.
///
/// The ledger owns every ticket ever issued. It is the source of truth for
/// which plate holds which spot; the inventory's back-references must agree
/// with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketLedger {
    // All tickets in issue order, active and closed.
    tickets: Vec<Ticket>,
    // Plate -> index of its active ticket.
    active: HashMap<LicensePlate, usize>,
    // Ticket id -> index, for every ticket ever issued.
    by_id: HashMap<TicketId, usize>,
}

impl TicketLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for `license_plate` on `spot_number`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateActivePlate` if the plate already has an active ticket.
    pub(crate) fn issue(
        &mut self,
        license_plate: LicensePlate,
        vehicle_type: VehicleCategory,
        spot_number: SpotNumber,
        now: OffsetDateTime,
    ) -> Result<Ticket, CoreError> {
        if self.active.contains_key(&license_plate) {
            return Err(CoreError::DuplicateActivePlate {
                plate: license_plate,
            });
        }

        let ticket: Ticket = Ticket {
            id: self.unused_ticket_id(),
            license_plate: license_plate.clone(),
            vehicle_type,
            spot_number,
            entry_time: now,
            exit_time: None,
        };

        let index: usize = self.tickets.len();
        self.by_id.insert(ticket.id.clone(), index);
        self.active.insert(license_plate, index);
        self.tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Undoes the most recent issuance.
    ///
    /// Only valid when `ticket_id` is the last ticket issued and nothing else
    /// has been committed since.
    pub(crate) fn revoke_last(&mut self, ticket_id: &TicketId) -> Result<(), CoreError> {
        match self.tickets.last() {
            Some(last) if &last.id == ticket_id && last.is_active() => {}
            _ => {
                return Err(CoreError::invalid_state(format!(
                    "ticket {ticket_id} is not the last issued ticket"
                )));
            }
        }
        if let Some(ticket) = self.tickets.pop() {
            self.active.remove(&ticket.license_plate);
            self.by_id.remove(&ticket.id);
        }
        Ok(())
    }

    /// Closes the active ticket for `license_plate`.
    ///
    /// Returns the closed ticket, with its exit time and duration frozen.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the plate has no active ticket.
    pub(crate) fn close(
        &mut self,
        license_plate: &LicensePlate,
        now: OffsetDateTime,
    ) -> Result<Ticket, CoreError> {
        let index: usize = self.active.get(license_plate).copied().ok_or_else(|| {
            CoreError::NotFound {
                plate: license_plate.clone(),
            }
        })?;

        let ticket: &mut Ticket = self.tickets.get_mut(index).ok_or_else(|| {
            CoreError::invalid_state(format!(
                "active index for {license_plate} points past the ledger"
            ))
        })?;
        ticket.close(now)?;
        let closed: Ticket = ticket.clone();

        self.active.remove(license_plate);
        Ok(closed)
    }

    /// Returns the active ticket for `license_plate`, if any.
    #[must_use]
    pub fn active_ticket_for(&self, license_plate: &LicensePlate) -> Option<&Ticket> {
        self.active
            .get(license_plate)
            .and_then(|&index| self.tickets.get(index))
    }

    /// Returns every active ticket ordered by spot number ascending.
    #[must_use]
    pub fn list_active(&self) -> Vec<&Ticket> {
        let mut active: Vec<&Ticket> = self
            .active
            .values()
            .filter_map(|&index| self.tickets.get(index))
            .collect();
        active.sort_by_key(|ticket| ticket.spot_number);
        active
    }

    /// Looks up any ticket, active or closed, by identifier.
    #[must_use]
    pub fn ticket(&self, ticket_id: &TicketId) -> Option<&Ticket> {
        self.by_id
            .get(ticket_id)
            .and_then(|&index| self.tickets.get(index))
    }

    /// Returns every ticket ever issued, in issue order.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Returns the number of active tickets.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns the number of closed tickets.
    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.tickets.len() - self.active.len()
    }

    fn unused_ticket_id(&self) -> TicketId {
        loop {
            let candidate: TicketId = TicketId::from_bits(rand::random::<u32>());
            if !self.by_id.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
