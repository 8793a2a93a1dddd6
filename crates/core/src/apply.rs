// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::inventory::Spot;
use crate::ledger::Ticket;
use crate::policy::AllocationPolicy;
use crate::state::FacilityState;
use lot_keeper_activity::ActivityEvent;
use lot_keeper_domain::{LicensePlate, SpotNumber, TicketId, VehicleCategory};
use time::OffsetDateTime;

/// What a successful park produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkReceipt {
    /// The issued ticket.
    pub ticket_id: TicketId,
    /// The assigned spot.
    pub spot_number: SpotNumber,
    /// The parked vehicle's plate.
    pub license_plate: LicensePlate,
    /// The category the vehicle asked for.
    pub vehicle_type: VehicleCategory,
    /// The category of the spot it got. Differs from `vehicle_type` when the
    /// policy fell back to a larger spot.
    pub spot_category: VehicleCategory,
    /// When the ticket was issued.
    pub entry_time: OffsetDateTime,
}

/// What a successful exit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReceipt {
    /// The closed ticket.
    pub ticket_id: TicketId,
    /// The freed spot.
    pub spot_number: SpotNumber,
    /// The departed vehicle's plate.
    pub license_plate: LicensePlate,
    /// Whole minutes parked, rounded down.
    pub duration_minutes: u64,
    /// When the ticket was issued.
    pub entry_time: OffsetDateTime,
    /// When the ticket was closed.
    pub exit_time: OffsetDateTime,
}

/// The receipt for whichever command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A `Command::Park` succeeded.
    Parked(ParkReceipt),
    /// A `Command::Exit` succeeded.
    Exited(ExitReceipt),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The receipt returned to the caller.
    pub outcome: Outcome,
    /// The activity event recorded for this transition.
    pub activity_event: ActivityEvent,
}

/// Applies a command to the facility state.
///
/// The caller must hold exclusive access to `state` for the duration of the
/// call; `Facility` does this with its write lock.
///
/// `now` is clamped to the timestamp of the last recorded event, so the
/// activity log stays chronological and no ticket closes before it opened
/// even when callers read their clocks out of order.
///
/// # Arguments
///
/// * `state` - The facility state to mutate
/// * `policy` - The allocation policy used for parks
/// * `command` - The command to apply
/// * `now` - The time the command takes effect
///
/// # Errors
///
/// Returns an error if:
/// - The plate is already parked (park) or not parked (exit)
/// - No compatible spot is free (park)
/// - Inventory and ledger disagree (`InvalidState`)
pub fn apply(
    state: &mut FacilityState,
    policy: &dyn AllocationPolicy,
    command: Command,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let now: OffsetDateTime = effective_time(state, now);

    match command {
        Command::Park {
            license_plate,
            vehicle_type,
        } => {
            let (receipt, activity_event): (ParkReceipt, ActivityEvent) =
                park(state, policy, license_plate, vehicle_type, now)?;
            Ok(TransitionResult {
                outcome: Outcome::Parked(receipt),
                activity_event,
            })
        }
        Command::Exit { license_plate } => {
            let (receipt, activity_event): (ExitReceipt, ActivityEvent) =
                exit(state, &license_plate, now)?;
            Ok(TransitionResult {
                outcome: Outcome::Exited(receipt),
                activity_event,
            })
        }
    }
}

/// The later of `now` and the last recorded event.
fn effective_time(state: &FacilityState, now: OffsetDateTime) -> OffsetDateTime {
    state
        .activity
        .last_timestamp()
        .map_or(now, |last| now.max(last))
}

/// Parks a vehicle: selects a spot, occupies it, issues a ticket, and records
/// an entry event.
fn park(
    state: &mut FacilityState,
    policy: &dyn AllocationPolicy,
    license_plate: LicensePlate,
    vehicle_type: VehicleCategory,
    now: OffsetDateTime,
) -> Result<(ParkReceipt, ActivityEvent), CoreError> {
    // A plate cannot hold two spots
    if state.ledger.active_ticket_for(&license_plate).is_some() {
        return Err(CoreError::DuplicateActivePlate {
            plate: license_plate,
        });
    }

    // Ask the policy for a spot; nothing has changed yet if this fails
    let spot_number: SpotNumber = policy.select_spot(vehicle_type, &state.inventory)?;
    let spot_category: VehicleCategory = state
        .inventory
        .spot(spot_number)
        .map(Spot::category)
        .ok_or(CoreError::UnknownSpot { spot_number })?;

    // Issue the ticket, then bind the spot to it
    let ticket: Ticket = state
        .ledger
        .issue(license_plate, vehicle_type, spot_number, now)?;
    if let Err(err) = state
        .inventory
        .mark_occupied(spot_number, ticket.id().clone())
    {
        // Leave no ticket without a spot behind
        state.ledger.revoke_last(ticket.id())?;
        return Err(err);
    }

    // Record the entry
    let activity_event: ActivityEvent = state.activity.record(ActivityEvent::entry(
        ticket.license_plate().clone(),
        spot_number,
        ticket.id().clone(),
        now,
    ));

    let receipt: ParkReceipt = ParkReceipt {
        ticket_id: ticket.id().clone(),
        spot_number,
        license_plate: ticket.license_plate().clone(),
        vehicle_type,
        spot_category,
        entry_time: ticket.entry_time(),
    };

    Ok((receipt, activity_event))
}

/// Releases a vehicle: closes its ticket, frees the spot, and records an exit
/// event with the stay duration.
fn exit(
    state: &mut FacilityState,
    license_plate: &LicensePlate,
    now: OffsetDateTime,
) -> Result<(ExitReceipt, ActivityEvent), CoreError> {
    // Find the active ticket
    let active: &Ticket =
        state
            .ledger
            .active_ticket_for(license_plate)
            .ok_or_else(|| CoreError::NotFound {
                plate: license_plate.clone(),
            })?;
    let spot_number: SpotNumber = active.spot_number();

    // The spot must be held by this very ticket before anything changes
    let holder: Option<&TicketId> = state
        .inventory
        .spot(spot_number)
        .and_then(Spot::current_ticket);
    if holder != Some(active.id()) {
        return Err(CoreError::invalid_state(format!(
            "ticket {} for {license_plate} does not hold spot {spot_number}",
            active.id()
        )));
    }

    // Close the ticket and free the spot
    let closed: Ticket = state.ledger.close(license_plate, now)?;
    state.inventory.mark_free(spot_number)?;

    let duration_minutes: u64 = closed.duration_minutes().unwrap_or(0);
    let exit_time: OffsetDateTime = closed.exit_time().unwrap_or(now);

    // Record the exit
    let activity_event: ActivityEvent = state.activity.record(ActivityEvent::exit(
        license_plate.clone(),
        spot_number,
        closed.id().clone(),
        exit_time,
        duration_minutes,
    ));

    let receipt: ExitReceipt = ExitReceipt {
        ticket_id: closed.id().clone(),
        spot_number,
        license_plate: license_plate.clone(),
        duration_minutes,
        entry_time: closed.entry_time(),
        exit_time,
    };

    Ok((receipt, activity_event))
}
