//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};

use crate::domain::{EquipmentType, Place, Route, parse_date_or_today};
use crate::planner::{
    BackhaulPairer, BackhaulRequest, PlanError, RouteMetrics, TripPlanner, TripRequest,
    route_metrics,
};

use super::dto::*;
use super::state::AppState;

/// Lightest `max_weight` a request may ask for (pounds).
const MIN_WEIGHT: u32 = 1_000;

/// Heaviest `max_weight` a request may ask for (pounds).
const MAX_WEIGHT: u32 = 80_000;

/// Most loads a single trip may chain.
const MAX_TRIP_LOADS: usize = 10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/plan", post(plan_trip))
        .route("/backhaul/search", post(search_backhaul))
        .route("/route/metrics", post(metrics))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a multi-load trip from home and back.
async fn plan_trip(
    State(state): State<AppState>,
    payload: Result<Json<TripPlanRequest>, JsonRejection>,
) -> Result<Json<TripPlanResponse>, AppError> {
    let Json(req) = payload?;
    let request = trip_request(&req)?;

    info!(
        home = %request.home,
        date = %request.start_date,
        max_loads = request.max_loads,
        "Planning trip"
    );

    let planner = TripPlanner::new(
        state.board.as_ref(),
        state.distances.as_ref(),
        state.config.as_ref(),
    );
    let trip = planner.plan(&request).await?;

    Ok(Json(TripPlanResponse {
        route: trip.route,
        metrics: trip.metrics,
    }))
}

/// Find outbound loads paired with a way back.
async fn search_backhaul(
    State(state): State<AppState>,
    payload: Result<Json<BackhaulSearchRequest>, JsonRejection>,
) -> Result<Json<BackhaulSearchResponse>, AppError> {
    let Json(req) = payload?;
    let request = backhaul_request(&req)?;

    let pairer = BackhaulPairer::new(state.board.as_ref(), state.config.as_ref());
    let pairs = pairer.pair(&request).await;

    Ok(Json(BackhaulSearchResponse { pairs }))
}

/// Totals for a route supplied by the caller.
///
/// Routes that don't connect end to end are rejected while decoding.
async fn metrics(
    payload: Result<Json<Route>, JsonRejection>,
) -> Result<Json<RouteMetrics>, AppError> {
    let Json(route) = payload?;
    Ok(Json(route_metrics(&route)))
}

/// Validate a trip request and convert it for the planner.
fn trip_request(req: &TripPlanRequest) -> Result<TripRequest, AppError> {
    let home = place(&req.start_city, &req.start_state, "start")?;
    check_weight(req.max_weight)?;

    if !(1..=MAX_TRIP_LOADS).contains(&req.max_loads) {
        return Err(AppError::BadRequest {
            message: format!("max_loads must be between 1 and {MAX_TRIP_LOADS}"),
        });
    }

    if req.truck_types.is_empty() {
        return Err(AppError::BadRequest {
            message: "at least one truck type must be specified".to_string(),
        });
    }

    let mut equipment = Vec::with_capacity(req.truck_types.len());
    let mut invalid = Vec::new();
    for code in &req.truck_types {
        match code.parse::<EquipmentType>() {
            Ok(e) => equipment.push(e),
            Err(_) => invalid.push(code.as_str()),
        }
    }
    if !invalid.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("invalid truck types: {}", invalid.join(", ")),
        });
    }

    let mut request = TripRequest::new(
        home,
        parse_date_or_today(&req.start_date),
        req.max_weight,
        equipment,
        req.max_loads,
    );
    request.home_base_id = req.home_base_id.clone();
    Ok(request)
}

/// Validate a backhaul request and convert it for the pairer.
fn backhaul_request(req: &BackhaulSearchRequest) -> Result<BackhaulRequest, AppError> {
    let origin = place(&req.origin_city, &req.origin_state, "origin")?;
    check_weight(req.max_weight)?;

    let equipment = req
        .truck_type
        .parse::<EquipmentType>()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let mut request = BackhaulRequest::new(
        origin,
        parse_date_or_today(&req.date),
        req.max_weight,
        equipment,
    );

    if let (Some(city), Some(state)) = (&req.home_city, &req.home_state) {
        request = request.with_home(place(city, state, "home")?);
    }
    if let (Some(city), Some(state)) = (&req.destination_city, &req.destination_state) {
        request = request.toward(place(city, state, "destination")?);
    }
    request.home_base_id = req.home_base_id.clone();

    Ok(request)
}

fn place(city: &str, state: &str, field: &str) -> Result<Place, AppError> {
    Place::parse(city, state).map_err(|e| AppError::BadRequest {
        message: format!("{field}: {e}"),
    })
}

fn check_weight(max_weight: u32) -> Result<(), AppError> {
    if (MIN_WEIGHT..=MAX_WEIGHT).contains(&max_weight) {
        Ok(())
    } else {
        Err(AppError::BadRequest {
            message: "max_weight must be between 1,000 and 80,000 lbs".to_string(),
        })
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::NoRouteFound { .. } => AppError::NotFound {
                message: format!("no valid route found: {e}"),
            },
            PlanError::InvalidRequest(message) => AppError::BadRequest { message },
            PlanError::Route(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
