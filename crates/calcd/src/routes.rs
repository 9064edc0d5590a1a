//! API routes for calcd
//!
//! Calculation endpoints read the raw body themselves: a missing
//! `Content-Type` is accepted and every failure becomes `400 {"error": ...}`.

use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use calc_common::api::FromBody;
use calc_common::calc::{calculate_emi, calculate_gst, compute_age, convert_cgpa, parse_dob};
use calc_common::{
    filter_tools, AgeRequest, CalcError, CategoryFilter, CgpaRequest, EmiRequest, Endpoint,
    ErrorBody, GstRequest, HealthResponse, ToolsResponse, CATEGORY_CHOICES,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

type AppStateArc = Arc<AppState>;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Calculation Routes
// ============================================================================

pub fn calc_routes() -> Router<AppStateArc> {
    Router::new()
        .route(Endpoint::Age.path(), post(age).fallback(method_not_allowed))
        .route(Endpoint::Cgpa.path(), post(cgpa).fallback(method_not_allowed))
        .route(Endpoint::Gst.path(), post(gst).fallback(method_not_allowed))
        .route(Endpoint::Emi.path(), post(emi).fallback(method_not_allowed))
}

/// Body extraction result; a rejection (e.g. over the size limit) is
/// answered as JSON like every other failure
type RawBody = Result<Bytes, BytesRejection>;

fn rejected_body(endpoint: Endpoint, rejection: BytesRejection) -> Response {
    let message = rejection.body_text();
    warn!("  {}: {}", endpoint.path(), message);
    error_response(rejection.status(), message)
}

fn parse_body(bytes: &[u8]) -> Result<Value, CalcError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CalcError::EmptyBody);
    }
    serde_json::from_slice(bytes).map_err(|e| CalcError::InvalidJson(e.to_string()))
}

/// Parse, validate and compute one calculation request
fn calculate<Req, Res, F>(bytes: &[u8], compute: F) -> Result<Res, CalcError>
where
    Req: FromBody,
    F: FnOnce(Req) -> Result<Res, CalcError>,
{
    let body = parse_body(bytes)?;
    debug!("  {} body: {}", Req::ENDPOINT.path(), body);
    let request = Req::from_body(&body)?;
    compute(request)
}

fn reply<T: Serialize>(endpoint: Endpoint, result: Result<T, CalcError>) -> Response {
    match result {
        Ok(value) => {
            info!("  {}: success", endpoint.path());
            (StatusCode::OK, Json(value)).into_response()
        }
        Err(e) => {
            warn!("  {}: {}", endpoint.path(), e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

async fn age(State(state): State<AppStateArc>, body: RawBody) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(Endpoint::Age, rejection),
    };
    let today = state.today();
    let result = calculate(&body, |req: AgeRequest| {
        compute_age(parse_dob(&req.dob)?, today)
    });
    reply(Endpoint::Age, result)
}

async fn cgpa(body: RawBody) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(Endpoint::Cgpa, rejection),
    };
    let result = calculate(&body, |req: CgpaRequest| {
        convert_cgpa(req.cgpa, &req.university)
    });
    reply(Endpoint::Cgpa, result)
}

async fn gst(body: RawBody) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(Endpoint::Gst, rejection),
    };
    let result = calculate(&body, |req: GstRequest| calculate_gst(req.amount, req.rate));
    reply(Endpoint::Gst, result)
}

async fn emi(body: RawBody) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return rejected_body(Endpoint::Emi, rejection),
    };
    let result = calculate(&body, |req: EmiRequest| {
        calculate_emi(req.principal, req.annual_rate, req.tenure_months)
    });
    reply(Endpoint::Emi, result)
}

// ============================================================================
// Catalog Routes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ToolsQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
}

pub fn catalog_routes() -> Router<AppStateArc> {
    Router::new().route("/api/tools", get(list_tools).fallback(method_not_allowed))
}

async fn list_tools(Query(query): Query<ToolsQuery>) -> Response {
    let filter = match query.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(raw) => match raw.parse::<CategoryFilter>() {
            Ok(filter) => filter,
            Err(e) => {
                warn!("  /api/tools: {}", e);
                return error_response(StatusCode::BAD_REQUEST, e.to_string());
            }
        },
    };

    let tools = filter_tools(&query.search, filter);
    debug!(
        "  /api/tools: search={:?} category={} -> {} tools",
        query.search,
        filter,
        tools.len()
    );

    Json(ToolsResponse {
        tools,
        categories: CATEGORY_CHOICES.to_vec(),
    })
    .into_response()
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check).fallback(method_not_allowed))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        endpoints: Endpoint::ALL.iter().map(|e| e.path().to_string()).collect(),
    })
}

// ============================================================================
// Fallback
// ============================================================================

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

/// Known path, wrong method
pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
