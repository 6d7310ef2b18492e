// models/src/patient.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{LabValues, RiskAssessment, VitalSigns};

/// One admitted patient as served to the frontend. The risk annotation
/// fields start out empty and are filled in by the request layer from a
/// fresh assessment; they are never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub admission_date: DateTime<Utc>,
    pub chief_complaint: String,
    pub vital_signs: VitalSigns,
    pub lab_values: LabValues,
    pub medical_history: Vec<String>,
    pub current_medications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

impl Patient {
    /// Copy the level and score out of an assessment onto this record.
    pub fn annotate(&mut self, assessment: &RiskAssessment) {
        self.risk_level = Some(assessment.level.clone());
        self.risk_score = Some(assessment.score);
    }
}

#[cfg(test)]
mod tests {
    use super::Patient;
    use crate::{LabValues, RiskAssessment, RiskBand, VitalSigns};
    use chrono::Utc;

    fn sample_patient() -> Patient {
        Patient {
            id: 1,
            name: "James Smith".to_string(),
            age: 67,
            gender: "Male".to_string(),
            admission_date: Utc::now(),
            chief_complaint: "Fever and chills for 2 days".to_string(),
            vital_signs: VitalSigns::default(),
            lab_values: LabValues::default(),
            medical_history: vec!["Type 2 Diabetes".to_string()],
            current_medications: vec!["Metformin".to_string()],
            risk_level: None,
            risk_score: None,
        }
    }

    #[test]
    fn annotation_fills_level_and_score() {
        let mut patient = sample_patient();
        let band = RiskBand::High;
        let assessment = RiskAssessment {
            score: 100.0,
            band,
            level: band.level().to_string(),
            recommendations: band.recommendations(),
        };
        patient.annotate(&assessment);
        assert_eq!(
            patient.risk_level.as_deref(),
            Some("High Risk - Immediate Action Required")
        );
        assert_eq!(patient.risk_score, Some(100.0));
    }

    #[test]
    fn unannotated_patient_omits_risk_fields() {
        let json = serde_json::to_value(sample_patient()).unwrap();
        assert!(json.get("risk_level").is_none());
        assert!(json.get("risk_score").is_none());
    }
}
