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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, NO_SPOT_AVAILABLE, translate_core_error, translate_domain_error};
pub use handlers::{
    DEFAULT_HISTORY_LIMIT, exit, format_timestamp, get_dashboard, get_history, get_status,
    get_ticket, list_vehicles, park,
};
pub use request_response::{
    CategoryStatus, DashboardResponse, ExitRequest, ExitResponse, HistoryEntry, HistoryQuery,
    ParkRequest, ParkResponse, StatusResponse, TicketInfo, VehicleInfo,
};
