// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler parses raw request fields into domain types, calls the
//! facility, and converts the result into a response DTO. Handlers take the
//! current time as an argument so callers decide the clock.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CategoryStatus, DashboardResponse, ExitRequest, ExitResponse, HistoryEntry, ParkRequest,
    ParkResponse, StatusResponse, TicketInfo, VehicleInfo,
};
use lot_keeper::{Dashboard, ExitReceipt, Facility, FacilitySnapshot, ParkReceipt, Ticket};
use lot_keeper_activity::ActivityEvent;
use lot_keeper_domain::{LicensePlate, TicketId, VehicleCategory};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

/// Number of history events returned when the caller gives no limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Formats a timestamp as RFC 3339.
///
/// # Errors
///
/// Returns `Internal` if the timestamp cannot be represented (years outside
/// 0..=9999).
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, ApiError> {
    timestamp.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

/// Parks a vehicle.
///
/// # Arguments
///
/// * `facility` - The facility to park in
/// * `request` - The park request
/// * `now` - The entry time
///
/// # Errors
///
/// Returns an error if:
/// - The plate is blank or malformed, or the vehicle type is unknown
/// - The plate is already parked
/// - No compatible spot is free
pub fn park(
    facility: &Facility,
    request: &ParkRequest,
    now: OffsetDateTime,
) -> Result<ParkResponse, ApiError> {
    // Validate input
    let license_plate: LicensePlate =
        LicensePlate::parse(&request.license_plate).map_err(translate_domain_error)?;
    let vehicle_type: VehicleCategory = match request.vehicle_type.as_deref() {
        Some(raw) => raw.parse().map_err(translate_domain_error)?,
        None => VehicleCategory::default(),
    };

    let receipt: ParkReceipt = facility
        .park(license_plate, vehicle_type, now)
        .map_err(translate_core_error)?;

    info!(
        plate = %receipt.license_plate,
        spot = receipt.spot_number.value(),
        ticket = %receipt.ticket_id,
        "Parked vehicle"
    );

    Ok(ParkResponse {
        spot_number: receipt.spot_number.value(),
        ticket_id: receipt.ticket_id.to_string(),
        license_plate: receipt.license_plate.to_string(),
        vehicle_type: receipt.vehicle_type.as_str().to_string(),
        spot_type: receipt.spot_category.as_str().to_string(),
        entry_time: format_timestamp(receipt.entry_time)?,
        message: format!("Vehicle parked at spot {}", receipt.spot_number),
    })
}

/// Releases a parked vehicle.
///
/// # Errors
///
/// Returns an error if the plate is blank or malformed, or has no active
/// ticket.
pub fn exit(
    facility: &Facility,
    request: &ExitRequest,
    now: OffsetDateTime,
) -> Result<ExitResponse, ApiError> {
    // Validate input
    let license_plate: LicensePlate =
        LicensePlate::parse(&request.license_plate).map_err(translate_domain_error)?;

    let receipt: ExitReceipt = facility
        .exit(&license_plate, now)
        .map_err(translate_core_error)?;

    info!(
        plate = %receipt.license_plate,
        spot = receipt.spot_number.value(),
        ticket = %receipt.ticket_id,
        duration_minutes = receipt.duration_minutes,
        "Released vehicle"
    );

    Ok(ExitResponse {
        spot_number: receipt.spot_number.value(),
        ticket_id: receipt.ticket_id.to_string(),
        license_plate: receipt.license_plate.to_string(),
        duration_minutes: receipt.duration_minutes,
        entry_time: format_timestamp(receipt.entry_time)?,
        exit_time: format_timestamp(receipt.exit_time)?,
        message: format!(
            "Vehicle exited from spot {} after {} minute(s)",
            receipt.spot_number, receipt.duration_minutes
        ),
    })
}

/// Returns the facility's occupancy summary.
///
/// # Errors
///
/// Returns `Internal` if the facility state is unreadable.
pub fn get_status(facility: &Facility) -> Result<StatusResponse, ApiError> {
    let snapshot: FacilitySnapshot = facility.snapshot().map_err(translate_core_error)?;
    Ok(status_response(&snapshot))
}

/// Lists parked vehicles ordered by spot number.
///
/// # Errors
///
/// Returns `Internal` if the facility state is unreadable.
pub fn list_vehicles(facility: &Facility) -> Result<Vec<VehicleInfo>, ApiError> {
    facility
        .list_active()
        .map_err(translate_core_error)?
        .iter()
        .map(vehicle_info)
        .collect()
}

/// Returns the `limit` most recent events, oldest first.
///
/// # Errors
///
/// Returns `Internal` if the facility state is unreadable.
pub fn get_history(facility: &Facility, limit: usize) -> Result<Vec<HistoryEntry>, ApiError> {
    facility
        .recent_activity(limit)
        .map_err(translate_core_error)?
        .iter()
        .rev()
        .map(history_entry)
        .collect()
}

/// Looks up a ticket by identifier.
///
/// # Errors
///
/// Returns an error if the identifier is malformed or was never issued.
pub fn get_ticket(facility: &Facility, ticket_id: &str) -> Result<TicketInfo, ApiError> {
    let ticket_id: TicketId = TicketId::parse(ticket_id).map_err(translate_domain_error)?;
    let ticket: Ticket = facility.ticket(&ticket_id).map_err(translate_core_error)?;

    Ok(TicketInfo {
        ticket_id: ticket.id().to_string(),
        license_plate: ticket.license_plate().to_string(),
        vehicle_type: ticket.vehicle_type().as_str().to_string(),
        spot_number: ticket.spot_number().value(),
        status: ticket.status().as_str().to_string(),
        entry_time: format_timestamp(ticket.entry_time())?,
        exit_time: ticket.exit_time().map(format_timestamp).transpose()?,
        duration_minutes: ticket.duration_minutes(),
    })
}

/// Returns status, vehicles, and recent activity from one consistent read.
///
/// # Errors
///
/// Returns `Internal` if the facility state is unreadable.
pub fn get_dashboard(
    facility: &Facility,
    activity_limit: usize,
) -> Result<DashboardResponse, ApiError> {
    let dashboard: Dashboard = facility
        .dashboard(activity_limit)
        .map_err(translate_core_error)?;

    Ok(DashboardResponse {
        status: status_response(&dashboard.snapshot),
        vehicles: dashboard
            .vehicles
            .iter()
            .map(vehicle_info)
            .collect::<Result<Vec<VehicleInfo>, ApiError>>()?,
        activity: dashboard
            .recent_activity
            .iter()
            .rev()
            .map(history_entry)
            .collect::<Result<Vec<HistoryEntry>, ApiError>>()?,
    })
}

fn status_response(snapshot: &FacilitySnapshot) -> StatusResponse {
    StatusResponse {
        total_spots: snapshot.total_spots,
        available_spots: snapshot.available_spots,
        occupied_spots: snapshot.occupied_spots,
        occupancy_rate: snapshot.occupancy_rate,
        categories: snapshot
            .categories
            .iter()
            .map(|c| CategoryStatus {
                vehicle_type: c.category.as_str().to_string(),
                total_spots: c.total,
                available_spots: c.available,
                occupied_spots: c.occupied,
            })
            .collect(),
    }
}

fn vehicle_info(ticket: &Ticket) -> Result<VehicleInfo, ApiError> {
    Ok(VehicleInfo {
        spot_number: ticket.spot_number().value(),
        license_plate: ticket.license_plate().to_string(),
        vehicle_type: ticket.vehicle_type().as_str().to_string(),
        entry_time: format_timestamp(ticket.entry_time())?,
        ticket_id: ticket.id().to_string(),
    })
}

fn history_entry(event: &ActivityEvent) -> Result<HistoryEntry, ApiError> {
    Ok(HistoryEntry {
        sequence: event.sequence.unwrap_or_default(),
        action: event.action.as_str().to_string(),
        license_plate: event.license_plate.to_string(),
        spot_number: event.spot_number.value(),
        ticket_id: event.ticket_id.to_string(),
        timestamp: format_timestamp(event.timestamp)?,
        duration_minutes: event.duration_minutes,
    })
}
