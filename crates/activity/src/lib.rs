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
    clippy::all
)]

use lot_keeper_domain::{LicensePlate, SpotNumber, TicketId};
use time::OffsetDateTime;

/// The kind of movement an activity event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityAction {
    /// A vehicle was parked and a ticket issued.
    Entry,
    /// A vehicle left and its ticket was closed.
    Exit,
}

impl ActivityAction {
    /// Converts this action to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "ENTRY",
            Self::Exit => "EXIT",
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of a vehicle entering or leaving the facility.
///
/// Every successful park or exit produces exactly one activity event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Position in the log, assigned when the event is recorded.
    /// `None` until the event has been appended.
    pub sequence: Option<u64>,
    /// Whether the vehicle entered or left.
    pub action: ActivityAction,
    /// The vehicle's plate.
    pub license_plate: LicensePlate,
    /// The spot the vehicle occupied.
    pub spot_number: SpotNumber,
    /// The ticket covering the stay.
    pub ticket_id: TicketId,
    /// When the movement happened.
    pub timestamp: OffsetDateTime,
    /// Whole minutes parked, rounded down. Present only on exit.
    pub duration_minutes: Option<u64>,
}

impl ActivityEvent {
    /// Creates an entry event.
    ///
    /// # Arguments
    ///
    /// * `license_plate` - The plate of the vehicle that parked
    /// * `spot_number` - The spot it was assigned
    /// * `ticket_id` - The ticket issued for the stay
    /// * `timestamp` - The entry time
    #[must_use]
    pub const fn entry(
        license_plate: LicensePlate,
        spot_number: SpotNumber,
        ticket_id: TicketId,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            sequence: None,
            action: ActivityAction::Entry,
            license_plate,
            spot_number,
            ticket_id,
            timestamp,
            duration_minutes: None,
        }
    }

    /// Creates an exit event.
    ///
    /// # Arguments
    ///
    /// * `license_plate` - The plate of the vehicle that left
    /// * `spot_number` - The spot it vacated
    /// * `ticket_id` - The ticket that was closed
    /// * `timestamp` - The exit time
    /// * `duration_minutes` - Whole minutes between entry and exit
    #[must_use]
    pub const fn exit(
        license_plate: LicensePlate,
        spot_number: SpotNumber,
        ticket_id: TicketId,
        timestamp: OffsetDateTime,
        duration_minutes: u64,
    ) -> Self {
        Self {
            sequence: None,
            action: ActivityAction::Exit,
            license_plate,
            spot_number,
            ticket_id,
            timestamp,
            duration_minutes: Some(duration_minutes),
        }
    }
}

/// Append-only record of entry and exit events.
///
/// Events are kept in the order they were recorded, which is the order the
/// facility applied them. There is no update or delete operation; the log
/// retains everything and callers window it as they see fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    events: Vec<ActivityEvent>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event, assigning its sequence number.
    ///
    /// Returns a copy of the event as recorded.
    pub fn record(&mut self, mut event: ActivityEvent) -> ActivityEvent {
        event.sequence = Some(self.events.len() as u64 + 1);
        self.events.push(event.clone());
        event
    }

    /// Returns up to `limit` of the most recent events, newest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&ActivityEvent> {
        self.events.iter().rev().take(limit).collect()
    }

    /// Returns every event in chronological order.
    #[must_use]
    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the timestamp of the most recent event, if any.
    #[must_use]
    pub fn last_timestamp(&self) -> Option<OffsetDateTime> {
        self.events.last().map(|event| event.timestamp)
    }
}
