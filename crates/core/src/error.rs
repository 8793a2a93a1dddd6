// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lot_keeper_domain::{DomainError, LicensePlate, SpotNumber, TicketId, VehicleCategory};
use thiserror::Error;

/// Errors that can occur while applying a park or exit.
///
/// Everything except `InvalidState` is a recoverable user or business-rule
/// failure. `InvalidState` means the spot/ticket invariants are already
/// broken and indicates a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated (malformed plate, unknown category, bad layout).
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// The facility has no free spot at all.
    #[error("Parking lot is full")]
    NoVacancy {
        /// The category that was requested.
        category: VehicleCategory,
    },

    /// Free spots exist, but none can take this vehicle category.
    #[error(
        "No spot available for vehicle type '{category}' ({free_spots} free spot(s) of other types)"
    )]
    IncompatibleCategory {
        /// The category that was requested.
        category: VehicleCategory,
        /// How many free spots the facility had at the time.
        free_spots: usize,
    },

    /// The plate already has an active ticket.
    #[error("Vehicle {plate} is already parked")]
    DuplicateActivePlate {
        /// The plate that is already parked.
        plate: LicensePlate,
    },

    /// The plate has no active ticket.
    #[error("Vehicle {plate} not found")]
    NotFound {
        /// The plate that was looked up.
        plate: LicensePlate,
    },

    /// No ticket with this identifier was ever issued.
    #[error("Ticket {ticket_id} not found")]
    TicketNotFound {
        /// The identifier that was looked up.
        ticket_id: TicketId,
    },

    /// A spot number outside the facility was addressed.
    #[error("Spot {spot_number} does not exist")]
    UnknownSpot {
        /// The offending spot number.
        spot_number: SpotNumber,
    },

    /// Internal invariant violation between inventory and ledger.
    #[error("Invalid facility state: {reason}")]
    InvalidState {
        /// What was found to be inconsistent.
        reason: String,
    },
}

impl CoreError {
    /// Returns whether this error indicates a defect rather than a
    /// user-facing failure.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::InvalidState { .. } | Self::UnknownSpot { .. })
    }

    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
