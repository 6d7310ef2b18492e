// models/src/api.rs
//
// Request and response bodies for the REST endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FeatureContribution, LabValues, VitalSigns};

/// Body of `POST /api/v1/predict`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionRequest {
    pub patient_id: i64,
    #[serde(default)]
    pub vital_signs: VitalSigns,
    #[serde(default)]
    pub lab_values: LabValues,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Body of the `POST /api/v1/predict` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub patient_id: i64,
    pub risk_level: String,
    pub risk_score: f64,
    pub recommendations: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// The features bundle carried by an explanation request. Symptoms are
/// accepted for wire compatibility but the estimator does not use them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureBundle {
    pub vital_signs: VitalSigns,
    pub lab_values: LabValues,
    pub symptoms: Vec<String>,
}

/// Body of `POST /api/v1/explain`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExplanationRequest {
    pub patient_id: i64,
    #[serde(default)]
    pub features: FeatureBundle,
}

/// Body of the `POST /api/v1/explain` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResponse {
    pub patient_id: i64,
    pub feature_importances: Vec<FeatureContribution>,
    pub total_impact: f64,
    pub interpretation: String,
}
