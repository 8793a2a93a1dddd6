// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The facility aggregate.
//!
//! `Facility` owns the spot inventory, ticket ledger, and activity log behind
//! a single reader/writer lock. Parks and exits take the write lock for the
//! whole unit of work; every read takes the read lock, so readers see a state
//! that was valid at some instant and never contend with each other.

use crate::apply::{self, ExitReceipt, Outcome, ParkReceipt, TransitionResult};
use crate::command::Command;
use crate::error::CoreError;
use crate::ledger::Ticket;
use crate::occupancy::{FacilitySnapshot, snapshot};
use crate::policy::{AllocationPolicy, FallbackPolicy};
use crate::state::FacilityState;
use lot_keeper_activity::ActivityEvent;
use lot_keeper_domain::{FacilityLayout, LicensePlate, TicketId, VehicleCategory};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::OffsetDateTime;
use tracing::{debug, error, info};

/// Status, parked vehicles, and recent activity read under one lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Occupancy summary.
    pub snapshot: FacilitySnapshot,
    /// Active tickets ordered by spot number.
    pub vehicles: Vec<Ticket>,
    /// Most recent events, newest first.
    pub recent_activity: Vec<ActivityEvent>,
}

/// A parking facility.
///
/// Created once at startup and shared with request handlers by reference
/// (typically `Arc<Facility>`).
#[derive(Debug)]
pub struct Facility {
    state: RwLock<FacilityState>,
    policy: Box<dyn AllocationPolicy>,
}

impl Facility {
    /// Opens a facility with every spot free.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty or too large to number.
    pub fn new(
        layout: &FacilityLayout,
        policy: Box<dyn AllocationPolicy>,
    ) -> Result<Self, CoreError> {
        let state: FacilityState = FacilityState::new(layout)?;
        info!(
            total_spots = state.inventory().total(),
            policy = policy.name(),
            "Opened facility"
        );
        Ok(Self {
            state: RwLock::new(state),
            policy,
        })
    }

    /// Opens a facility using `FallbackPolicy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty or too large to number.
    pub fn with_default_policy(layout: &FacilityLayout) -> Result<Self, CoreError> {
        Self::new(layout, Box::new(FallbackPolicy))
    }

    /// Returns the name of the allocation policy in use.
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Parks a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The plate already has an active ticket (`DuplicateActivePlate`)
    /// - No compatible spot is free (`NoVacancy` / `IncompatibleCategory`)
    /// - The internal state is inconsistent (`InvalidState`)
    pub fn park(
        &self,
        license_plate: LicensePlate,
        vehicle_type: VehicleCategory,
        now: OffsetDateTime,
    ) -> Result<ParkReceipt, CoreError> {
        let command: Command = Command::Park {
            license_plate,
            vehicle_type,
        };
        match self.apply(command, now)?.outcome {
            Outcome::Parked(receipt) => {
                debug!(
                    plate = %receipt.license_plate,
                    spot = receipt.spot_number.value(),
                    ticket = %receipt.ticket_id,
                    spot_category = %receipt.spot_category,
                    "Vehicle parked"
                );
                Ok(receipt)
            }
            Outcome::Exited(_) => Err(CoreError::invalid_state(
                "park command produced an exit outcome",
            )),
        }
    }

    /// Releases a parked vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The plate has no active ticket (`NotFound`)
    /// - The internal state is inconsistent (`InvalidState`)
    pub fn exit(
        &self,
        license_plate: &LicensePlate,
        now: OffsetDateTime,
    ) -> Result<ExitReceipt, CoreError> {
        let command: Command = Command::Exit {
            license_plate: license_plate.clone(),
        };
        match self.apply(command, now)?.outcome {
            Outcome::Exited(receipt) => {
                debug!(
                    plate = %receipt.license_plate,
                    spot = receipt.spot_number.value(),
                    ticket = %receipt.ticket_id,
                    duration_minutes = receipt.duration_minutes,
                    "Vehicle exited"
                );
                Ok(receipt)
            }
            Outcome::Parked(_) => Err(CoreError::invalid_state(
                "exit command produced a park outcome",
            )),
        }
    }

    /// Applies any command and returns the full transition result.
    ///
    /// # Errors
    ///
    /// Returns the same errors as `park` and `exit`.
    pub fn apply(
        &self,
        command: Command,
        now: OffsetDateTime,
    ) -> Result<TransitionResult, CoreError> {
        let (operation, plate): (&str, LicensePlate) = match &command {
            Command::Park { license_plate, .. } => ("park", license_plate.clone()),
            Command::Exit { license_plate } => ("exit", license_plate.clone()),
        };
        self.mutate(|state| apply::apply(state, self.policy.as_ref(), command, now))
            .map_err(|err| Self::report(err, operation, &plate))
    }

    /// Returns the current occupancy summary.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn snapshot(&self) -> Result<FacilitySnapshot, CoreError> {
        Ok(snapshot(self.read()?.inventory()))
    }

    /// Returns the active tickets ordered by spot number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn list_active(&self) -> Result<Vec<Ticket>, CoreError> {
        Ok(self
            .read()?
            .ledger()
            .list_active()
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns the full activity history in chronological order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn history(&self) -> Result<Vec<ActivityEvent>, CoreError> {
        Ok(self.read()?.activity().events().to_vec())
    }

    /// Returns up to `limit` of the most recent events, newest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn recent_activity(&self, limit: usize) -> Result<Vec<ActivityEvent>, CoreError> {
        Ok(self
            .read()?
            .activity()
            .recent(limit)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Returns the active ticket for `license_plate`, if any.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn active_ticket_for(
        &self,
        license_plate: &LicensePlate,
    ) -> Result<Option<Ticket>, CoreError> {
        Ok(self.read()?.ledger().active_ticket_for(license_plate).cloned())
    }

    /// Looks up any ticket, active or closed.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if no such ticket was issued, or
    /// `InvalidState` if the state lock is poisoned.
    pub fn ticket(&self, ticket_id: &TicketId) -> Result<Ticket, CoreError> {
        self.read()?
            .ledger()
            .ticket(ticket_id)
            .cloned()
            .ok_or_else(|| CoreError::TicketNotFound {
                ticket_id: ticket_id.clone(),
            })
    }

    /// Reads status, parked vehicles, and the `activity_limit` most recent
    /// events from one consistent instant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the state lock is poisoned.
    pub fn dashboard(&self, activity_limit: usize) -> Result<Dashboard, CoreError> {
        let state: RwLockReadGuard<'_, FacilityState> = self.read()?;
        Ok(Dashboard {
            snapshot: snapshot(state.inventory()),
            vehicles: state.ledger().list_active().into_iter().cloned().collect(),
            recent_activity: state
                .activity()
                .recent(activity_limit)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Verifies that the inventory and ledger agree.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` describing the first divergence found.
    pub fn verify_consistency(&self) -> Result<(), CoreError> {
        self.read()?.check_consistency()
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut FacilityState) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut state: RwLockWriteGuard<'_, FacilityState> = self
            .state
            .write()
            .map_err(|_| CoreError::invalid_state("facility lock poisoned by a failed mutation"))?;
        let result: Result<T, CoreError> = f(&mut state);
        debug_assert!(
            state.check_consistency().is_ok(),
            "facility invariants broken: {:?}",
            state.check_consistency()
        );
        result
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, FacilityState>, CoreError> {
        self.state
            .read()
            .map_err(|_| CoreError::invalid_state("facility lock poisoned by a failed mutation"))
    }

    fn report(err: CoreError, operation: &str, plate: &LicensePlate) -> CoreError {
        if err.is_defect() {
            error!(operation, plate = %plate, error = %err, "Facility invariant violated");
        } else {
            debug!(operation, plate = %plate, error = %err, "Request rejected");
        }
        err
    }
}
