use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use anyhow::Context;
use anyhow::Error as AnyhowError;

use models::{
    ExplanationRequest, ExplanationResponse, Patient, PredictionRequest, PredictionResponse,
};
use scoring::reference::{CLINICAL_GUIDELINES, SEPSIS_INDICATORS};
use storage::PatientRepository;

pub mod config;
pub use crate::config::{load_server_config, ServerConfig};

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("Patient {0} not found")]
    PatientNotFound(i64),
    #[error("Computation error: {0}")]
    Computation(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] AnyhowError),
}

// Convert RestApiError into an HTTP response with a JSON error body.
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RestApiError::PatientNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Patient {} not found", id))
            }
            RestApiError::Computation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Computation error: {}", msg),
            ),
            RestApiError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("IO error: {}", e)),
            RestApiError::SerdeJson(e) => (StatusCode::BAD_REQUEST, format!("JSON error: {}", e)),
            RestApiError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration error: {}", msg),
            ),
            RestApiError::Anyhow(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", e),
            ),
        };

        let body = Json(json!({
            "status": "error",
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

// Shared state for the Axum application
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn PatientRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self { repository }
    }
}

/// Assess a stored patient from its current vitals, labs, and a
/// single-element symptom list holding the chief complaint.
fn annotate_patient(patient: &mut Patient) {
    let symptoms = vec![patient.chief_complaint.clone()];
    let assessment = scoring::assess(&patient.vital_signs, &patient.lab_values, &symptoms);
    patient.annotate(&assessment);
}

// Handler for the /api/v1 root endpoint
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Sepsis Clinical Decision Support API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// Handler for the /api/v1/patients endpoint
async fn list_patients_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, RestApiError> {
    let mut patients = state.repository.list().await;
    for patient in &mut patients {
        annotate_patient(patient);
    }
    Ok(Json(patients))
}

// Handler for the /api/v1/patients/{id} endpoint
async fn get_patient_handler(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> Result<Json<Patient>, RestApiError> {
    let mut patient = state
        .repository
        .get(patient_id)
        .await
        .ok_or(RestApiError::PatientNotFound(patient_id))?;
    annotate_patient(&mut patient);
    Ok(Json(patient))
}

// Handler for the /api/v1/predict endpoint
async fn predict_handler(
    Json(payload): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, RestApiError> {
    let assessment = scoring::assess(&payload.vital_signs, &payload.lab_values, &payload.symptoms);
    info!(
        patient_id = payload.patient_id,
        score = assessment.score,
        "computed risk prediction"
    );

    Ok(Json(PredictionResponse {
        patient_id: payload.patient_id,
        risk_level: assessment.level,
        risk_score: assessment.score,
        recommendations: assessment.recommendations,
        timestamp: Utc::now(),
    }))
}

// Handler for the /api/v1/explain endpoint
async fn explain_handler(
    Json(payload): Json<ExplanationRequest>,
) -> Result<Json<ExplanationResponse>, RestApiError> {
    let features = &payload.features;
    let ranked = scoring::rank_features(&features.vital_signs, &features.lab_values);
    let summary = scoring::summarize(&ranked);
    info!(
        patient_id = payload.patient_id,
        total_impact = summary.total_impact,
        "computed feature importance explanation"
    );

    Ok(Json(ExplanationResponse {
        patient_id: payload.patient_id,
        feature_importances: ranked,
        total_impact: summary.total_impact,
        interpretation: summary.interpretation,
    }))
}

// Handler for the /api/v1/health endpoint
async fn health_check_handler() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

// Handler for the /api/v1/reference/indicators endpoint
async fn reference_indicators_handler() -> Result<Json<Value>, RestApiError> {
    Ok(Json(serde_json::to_value(&*SEPSIS_INDICATORS)?))
}

// Handler for the /api/v1/reference/guidelines endpoint
async fn reference_guidelines_handler() -> Result<Json<Value>, RestApiError> {
    Ok(Json(serde_json::to_value(&*CLINICAL_GUIDELINES)?))
}

/// Build the application router with CORS configured from `config`.
pub fn build_router(config: &ServerConfig, state: AppState) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(AllowOrigin::list(origins));

    Router::new()
        .route("/api/v1", get(root_handler))
        .route("/api/v1/patients", get(list_patients_handler))
        .route("/api/v1/patients/:patient_id", get(get_patient_handler))
        .route("/api/v1/predict", post(predict_handler))
        .route("/api/v1/explain", post(explain_handler))
        .route("/api/v1/health", get(health_check_handler))
        .route("/api/v1/reference/indicators", get(reference_indicators_handler))
        .route("/api/v1/reference/guidelines", get(reference_guidelines_handler))
        .with_state(state)
        .layer(cors)
}

// Main function to start the REST API server
pub async fn start_server(
    config: ServerConfig,
    repository: Arc<dyn PatientRepository>,
    shutdown_rx: oneshot::Receiver<()>,
) -> Result<(), AnyhowError> {
    let state = AppState::new(repository);
    let app = build_router(&config, state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;
    info!("REST API server listening on {}", addr);

    let shutdown_signal = async {
        tokio::select! {
            _ = shutdown_rx => {
                info!("Received external shutdown signal.");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received ctrl-c.");
            }
        }
    };

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}
