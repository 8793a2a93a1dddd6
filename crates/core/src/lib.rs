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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod facility;
mod inventory;
mod ledger;
mod occupancy;
mod policy;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{ExitReceipt, Outcome, ParkReceipt, TransitionResult, apply};
pub use command::Command;
pub use error::CoreError;
pub use facility::{Dashboard, Facility};
pub use inventory::{Spot, SpotInventory, SpotState};
pub use ledger::{Ticket, TicketLedger, TicketStatus, elapsed_minutes};
pub use occupancy::{CategoryOccupancy, FacilitySnapshot, occupancy_rate, snapshot};
pub use policy::{AllocationPolicy, AllocationStrategy, ExactMatchPolicy, FallbackPolicy};
pub use state::FacilityState;
