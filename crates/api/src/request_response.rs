// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are snake_case on the wire. Timestamps are RFC 3339 strings.

/// API request to park a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParkRequest {
    /// The plate as typed; trimmed and uppercased before use.
    #[serde(default)]
    pub license_plate: String,
    /// The vehicle type. Defaults to `standard` when omitted.
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

/// API response for a successful park.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParkResponse {
    /// The assigned spot.
    pub spot_number: u32,
    /// The issued ticket.
    pub ticket_id: String,
    /// The normalized plate.
    pub license_plate: String,
    /// The vehicle type that was requested.
    pub vehicle_type: String,
    /// The category of the assigned spot.
    pub spot_type: String,
    /// When the vehicle entered.
    pub entry_time: String,
    /// A success message.
    pub message: String,
}

/// API request to release a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExitRequest {
    /// The plate as typed; trimmed and uppercased before use.
    #[serde(default)]
    pub license_plate: String,
}

/// API response for a successful exit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExitResponse {
    /// The freed spot.
    pub spot_number: u32,
    /// The closed ticket.
    pub ticket_id: String,
    /// The normalized plate.
    pub license_plate: String,
    /// Whole minutes parked, rounded down.
    pub duration_minutes: u64,
    /// When the vehicle entered.
    pub entry_time: String,
    /// When the vehicle left.
    pub exit_time: String,
    /// A success message.
    pub message: String,
}

/// Occupancy of one spot category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryStatus {
    /// The spot category.
    pub vehicle_type: String,
    /// Spots of this category.
    pub total_spots: usize,
    /// Free spots of this category.
    pub available_spots: usize,
    /// Occupied spots of this category.
    pub occupied_spots: usize,
}

/// API response for the facility status.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StatusResponse {
    /// Number of spots in the facility.
    pub total_spots: usize,
    /// Free spots.
    pub available_spots: usize,
    /// Occupied spots.
    pub occupied_spots: usize,
    /// Percentage occupied, one decimal place.
    pub occupancy_rate: f64,
    /// Per-category breakdown.
    pub categories: Vec<CategoryStatus>,
}

/// A parked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VehicleInfo {
    /// The occupied spot.
    pub spot_number: u32,
    /// The vehicle's plate.
    pub license_plate: String,
    /// The vehicle type requested at entry.
    pub vehicle_type: String,
    /// When the vehicle entered.
    pub entry_time: String,
    /// The active ticket.
    pub ticket_id: String,
}

/// Query parameters for the history listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryQuery {
    /// Maximum number of events to return.
    pub limit: Option<usize>,
}

/// One entry or exit event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HistoryEntry {
    /// Position in the facility's history, starting at 1.
    pub sequence: u64,
    /// `ENTRY` or `EXIT`.
    pub action: String,
    /// The vehicle's plate.
    pub license_plate: String,
    /// The spot involved.
    pub spot_number: u32,
    /// The ticket involved.
    pub ticket_id: String,
    /// When the event happened.
    pub timestamp: String,
    /// Stay duration; present on exits only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u64>,
}

/// Details of a ticket, active or closed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketInfo {
    /// The ticket identifier.
    pub ticket_id: String,
    /// The vehicle's plate.
    pub license_plate: String,
    /// The vehicle type requested at entry.
    pub vehicle_type: String,
    /// The assigned spot.
    pub spot_number: u32,
    /// `active` or `closed`.
    pub status: String,
    /// When the vehicle entered.
    pub entry_time: String,
    /// When the vehicle left, if it has.
    pub exit_time: Option<String>,
    /// Stay duration, if closed.
    pub duration_minutes: Option<u64>,
}

/// Status, parked vehicles, and recent activity from one consistent read.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashboardResponse {
    /// The occupancy summary.
    pub status: StatusResponse,
    /// Parked vehicles ordered by spot.
    pub vehicles: Vec<VehicleInfo>,
    /// Recent events, oldest first.
    pub activity: Vec<HistoryEntry>,
}
