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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use lot_keeper::{AllocationStrategy, Facility};
use lot_keeper_api::{
    ApiError, DEFAULT_HISTORY_LIMIT, DashboardResponse, ExitRequest, ExitResponse, HistoryEntry,
    HistoryQuery, ParkRequest, ParkResponse, StatusResponse, TicketInfo, VehicleInfo, exit,
    get_dashboard, get_history, get_status, get_ticket, list_vehicles, park,
};
use lot_keeper_domain::{FacilityLayout, VehicleCategory};
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Lot Keeper Server - HTTP server for a single parking facility
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5001)]
    port: u16,

    /// Number of motorcycle spots (numbered first)
    #[arg(long, default_value_t = 0)]
    motorcycle: u32,

    /// Number of compact spots
    #[arg(long, default_value_t = 0)]
    compact: u32,

    /// Number of standard spots
    #[arg(long, default_value_t = 50)]
    standard: u32,

    /// Number of oversized spots (numbered last)
    #[arg(long, default_value_t = 0)]
    oversized: u32,

    /// How vehicles are matched to spot categories
    #[arg(long, value_enum, default_value_t = AllocationArg::Fallback)]
    allocation: AllocationArg,

    /// Events returned by `/api/history` when the request gives no limit
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Log filter; overrides `RUST_LOG` when given
    #[arg(long)]
    log_level: Option<String>,

    /// Directory of dashboard files served for paths outside the API
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Args {
    /// Builds the facility layout from the per-category spot counts.
    fn layout(&self) -> FacilityLayout {
        FacilityLayout::new()
            .with_spots(VehicleCategory::Motorcycle, self.motorcycle)
            .with_spots(VehicleCategory::Compact, self.compact)
            .with_spots(VehicleCategory::Standard, self.standard)
            .with_spots(VehicleCategory::Oversized, self.oversized)
    }
}

/// Allocation policy choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum AllocationArg {
    /// Use the vehicle's own category, then larger ones
    Fallback,
    /// Use the vehicle's own category only
    Exact,
}

impl From<AllocationArg> for AllocationStrategy {
    fn from(arg: AllocationArg) -> Self {
        match arg {
            AllocationArg::Fallback => Self::Fallback,
            AllocationArg::Exact => Self::Exact,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The facility. Synchronizes itself internally.
    facility: Arc<Facility>,
    /// Default number of events for `/api/history`.
    history_limit: usize,
}

/// Envelope for successful park and exit responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SuccessResponse<T> {
    /// Always true.
    success: bool,
    /// The operation's result.
    data: T,
}

impl<T> SuccessResponse<T> {
    const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always false.
    success: bool,
    /// A message suitable for showing to the operator.
    message: String,
}

/// Liveness check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok`.
    status: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            success: false,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::NoSpotAvailable { .. } | ApiError::Conflict { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Handler for POST `/api/park` endpoint.
///
/// Parks a vehicle and returns its spot and ticket.
async fn handle_park(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ParkRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<ParkResponse>>, HttpError> {
    let Json(req): Json<ParkRequest> = payload?;
    info!(
        license_plate = %req.license_plate,
        vehicle_type = ?req.vehicle_type,
        "Handling park request"
    );

    let response: ParkResponse = park(&app_state.facility, &req, OffsetDateTime::now_utc())?;
    Ok(Json(SuccessResponse::new(response)))
}

/// Handler for POST `/api/exit` endpoint.
///
/// Releases a vehicle and returns how long it stayed.
async fn handle_exit(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<ExitRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse<ExitResponse>>, HttpError> {
    let Json(req): Json<ExitRequest> = payload?;
    info!(license_plate = %req.license_plate, "Handling exit request");

    let response: ExitResponse = exit(&app_state.facility, &req, OffsetDateTime::now_utc())?;
    Ok(Json(SuccessResponse::new(response)))
}

/// Handler for GET `/api/status` endpoint.
async fn handle_get_status(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StatusResponse>, HttpError> {
    Ok(Json(get_status(&app_state.facility)?))
}

/// Handler for GET `/api/vehicles` endpoint.
///
/// Lists parked vehicles ordered by spot number.
async fn handle_list_vehicles(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<VehicleInfo>>, HttpError> {
    Ok(Json(list_vehicles(&app_state.facility)?))
}

/// Handler for GET `/api/history` endpoint.
///
/// Returns the most recent events, oldest first.
async fn handle_get_history(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, HttpError> {
    let limit: usize = query.limit.unwrap_or(app_state.history_limit);
    Ok(Json(get_history(&app_state.facility, limit)?))
}

/// Handler for GET `/api/tickets/{ticket_id}` endpoint.
async fn handle_get_ticket(
    AxumState(app_state): AxumState<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<TicketInfo>, HttpError> {
    info!(ticket_id = %ticket_id, "Handling get_ticket request");
    Ok(Json(get_ticket(&app_state.facility, &ticket_id)?))
}

/// Handler for GET `/api/dashboard` endpoint.
///
/// Status, vehicles, and recent history from a single consistent read.
async fn handle_get_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardResponse>, HttpError> {
    Ok(Json(get_dashboard(
        &app_state.facility,
        app_state.history_limit,
    )?))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    // The dashboard is served from another origin
    let cors: CorsLayer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/park", post(handle_park))
        .route("/api/exit", post(handle_exit))
        .route("/api/status", get(handle_get_status))
        .route("/api/vehicles", get(handle_list_vehicles))
        .route("/api/history", get(handle_get_history))
        .route("/api/tickets/{ticket_id}", get(handle_get_ticket))
        .route("/api/dashboard", get(handle_get_dashboard))
        .layer(cors)
        .with_state(app_state)
}

/// Serves files from `dir` for any path the API routes do not match.
fn with_static_dir(router: Router, dir: Option<&FsPath>) -> Router {
    match dir {
        Some(dir) => {
            info!(dir = %dir.display(), "Serving static files");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    let filter: EnvFilter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Initializing Lot Keeper server");

    // Open the facility
    let strategy: AllocationStrategy = args.allocation.into();
    let facility: Facility = Facility::new(&args.layout(), strategy.into_policy())?;

    let app_state: AppState = AppState {
        facility: Arc::new(facility),
        history_limit: args.history_limit,
    };

    // Build router
    let app: Router = with_static_dir(build_router(app_state), args.static_dir.as_deref());

    // Bind and run
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
