use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::error::ApiError;
use crate::genetics::{cross, cross_dihybrid, validate_dihybrid_pair, validate_pair, LocusRegistry};
use crate::schema::{
    CalculateRequest, CalculateResponse, DihybridRequest, DihybridResponse, HealthResponse,
    LocusInfo,
};

/// Shared, read-only handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<LocusRegistry>,
}

impl AppState {
    pub fn new(registry: LocusRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

fn is_form(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Accept a form-encoded body, otherwise parse as JSON whatever the
/// Content-Type; an empty body yields the all-missing request
async fn read_body<T: DeserializeOwned + Default>(request: Request) -> Result<T, ApiError> {
    if is_form(&request) {
        let Form(body) = Form::<T>::from_request(request, &()).await?;
        return Ok(body);
    }

    let bytes = Bytes::from_request(request, &()).await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let Json(body) = Json::<T>::from_bytes(&bytes)?;
    Ok(body)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn list_loci(State(state): State<AppState>) -> Json<Vec<LocusInfo>> {
    Json(state.registry.iter().map(LocusInfo::from).collect())
}

pub async fn calculate(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<CalculateResponse>, ApiError> {
    let body: CalculateRequest = read_body(request).await?;

    let locus = state.registry.resolve(body.locus.as_deref())?;
    let (parent1, parent2) = validate_pair(
        locus,
        body.parent1_genotype.as_deref(),
        body.parent2_genotype.as_deref(),
    )?;

    let outcome = cross(locus, &parent1, &parent2);
    debug!(
        "Cross {} x {} at {}: {} genotypes",
        parent1,
        parent2,
        locus.key(),
        outcome.genotypes.len()
    );

    Ok(Json(CalculateResponse::from_outcome(locus, &outcome)))
}

pub async fn calculate_dihybrid(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<DihybridResponse>, ApiError> {
    let body: DihybridRequest = read_body(request).await?;

    let validated = validate_dihybrid_pair(
        &state.registry,
        body.parent1_genotype.as_deref(),
        body.parent2_genotype.as_deref(),
    )?;

    let outcome = cross_dihybrid(
        validated.first_locus,
        validated.second_locus,
        &validated.parent1,
        &validated.parent2,
    );
    debug!(
        "Dihybrid cross over {} and {}",
        validated.first_locus.key(),
        validated.second_locus.key()
    );

    Ok(Json(DihybridResponse::from_outcome(
        validated.first_locus,
        validated.second_locus,
        &outcome,
    )))
}
