// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use lot_keeper::CoreError;
use lot_keeper_domain::DomainError;
use tracing::info;

/// Client-facing message for both kinds of allocation failure.
pub const NO_SPOT_AVAILABLE: &str = "No spot available";

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The `Display` output is the message shown to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// No spot could be assigned.
    NoSpotAvailable {
        /// A human-readable description of why.
        message: String,
    },
    /// The request conflicts with the current facility state.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { message, .. }
            | Self::NoSpotAvailable { message }
            | Self::Conflict { message }
            | Self::ResourceNotFound { message, .. } => write!(f, "{message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidLicensePlate(msg) => ApiError::InvalidInput {
            field: String::from("license_plate"),
            message: msg,
        },
        DomainError::UnknownVehicleCategory(_) => ApiError::InvalidInput {
            field: String::from("vehicle_type"),
            message: err.to_string(),
        },
        DomainError::InvalidTicketId(_) => ApiError::InvalidInput {
            field: String::from("ticket_id"),
            message: err.to_string(),
        },
        DomainError::InvalidSpotNumber(_)
        | DomainError::EmptyLayout
        | DomainError::LayoutTooLarge { .. } => ApiError::InvalidInput {
            field: String::from("layout"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// Invariant violations become `Internal`; everything else keeps the
/// engine's message.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::NoVacancy { .. } | CoreError::IncompatibleCategory { .. } => {
            info!(reason = %err, "No spot available");
            ApiError::NoSpotAvailable {
                message: String::from(NO_SPOT_AVAILABLE),
            }
        }
        CoreError::DuplicateActivePlate { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        CoreError::NotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Vehicle"),
            message: err.to_string(),
        },
        CoreError::TicketNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: err.to_string(),
        },
        CoreError::UnknownSpot { .. } | CoreError::InvalidState { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
