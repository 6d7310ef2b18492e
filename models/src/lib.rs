// models/src/lib.rs
//
// Shared value types for the sepsis clinical decision support backend.
// Everything here is an immutable value record: nothing is persisted, each
// instance lives for the duration of one request.

pub mod api;
pub mod assessment;
pub mod labs;
pub mod patient;
pub mod vitals;

pub use api::{
    ExplanationRequest, ExplanationResponse, FeatureBundle, PredictionRequest, PredictionResponse,
};
pub use assessment::{Direction, FeatureContribution, RiskAssessment, RiskBand};
pub use labs::LabValues;
pub use patient::Patient;
pub use vitals::VitalSigns;
