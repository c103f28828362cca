//! Diagnostics handler

use axum::{extract::State, Json};

use crate::app::DiagnosticResult;
use crate::AppState;

/// GET /Diagnostics
///
/// Runs dependency checks. Always 200; failures are reported per check.
pub async fn run_diagnostics(State(state): State<AppState>) -> Json<Vec<DiagnosticResult>> {
    Json(state.diagnostics_service.run().await)
}
