//! HTTP request handlers.

use crate::error::ServerResult;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use rb_phase::{PhaseChangeEstimator, PhaseVolumes};
use rb_ship::{DamageControl, ShipSystem, render_repair_bay};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared by every handler; the estimator is read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub estimator: PhaseChangeEstimator,
    pub damage: Arc<DamageControl>,
}

impl AppState {
    pub fn new(initial_damaged_system: Option<ShipSystem>) -> Self {
        Self {
            estimator: PhaseChangeEstimator::default(),
            damage: Arc::new(DamageControl::new(initial_damaged_system)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            estimator: PhaseChangeEstimator::default(),
            damage: Arc::new(DamageControl::default()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub damaged_system: ShipSystem,
}

/// `GET /phase-change?pressure=<MPa>`
pub async fn phase_change(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ServerResult<Json<PhaseVolumes>> {
    let raw = params.get("pressure").map(String::as_str);
    tracing::debug!(pressure = ?raw, "phase-change requested");

    let volumes = state.estimator.estimate_str(raw)?;
    Ok(Json(volumes))
}

/// `GET /status`
pub async fn status(State(state): State<AppState>) -> ServerResult<Json<StatusResponse>> {
    let damaged_system = state.damage.current()?;
    tracing::debug!(system = %damaged_system, "status requested");
    Ok(Json(StatusResponse { damaged_system }))
}

/// `GET /repair-bay`
pub async fn repair_bay(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let system = state.damage.current()?;
    tracing::debug!(system = %system, "repair bay requested");
    Ok(Html(render_repair_bay(system)))
}

/// `POST /teapot`
pub async fn teapot() -> StatusCode {
    StatusCode::IM_A_TEAPOT
}
