// scoring/src/reference.rs
//
// Static clinical reference data served alongside the computed scores:
// established bedside scoring systems (qSOFA, SIRS, NEWS2) and Surviving
// Sepsis Campaign guidance. None of this is computed by the backend.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One established clinical scoring system.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReference {
    pub id: &'static str,
    pub description: &'static str,
    pub criteria: &'static [&'static str],
    pub interpretation: &'static [Interpretation],
}

/// A score range mapped onto its clinical meaning.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    pub range: &'static str,
    pub meaning: &'static str,
}

pub static SEPSIS_INDICATORS: Lazy<Vec<ScoreReference>> = Lazy::new(|| {
    vec![
        ScoreReference {
            id: "qsofa_score",
            description: "Quick Sequential Organ Failure Assessment",
            criteria: &[
                "Respiratory rate \u{2265} 22/min",
                "Altered mentation (GCS < 15)",
                "Systolic blood pressure \u{2264} 100 mmHg",
            ],
            interpretation: &[
                Interpretation { range: "0", meaning: "Low risk for in-hospital mortality" },
                Interpretation { range: "1", meaning: "Moderate risk" },
                Interpretation { range: "2", meaning: "High risk" },
                Interpretation { range: "3", meaning: "Very high risk" },
            ],
        },
        ScoreReference {
            id: "sirs_criteria",
            description: "Systemic Inflammatory Response Syndrome",
            criteria: &[
                "Temperature > 38\u{b0}C or < 36\u{b0}C",
                "Heart rate > 90/min",
                "Respiratory rate > 20/min or PaCO2 < 32 mmHg",
                "WBC > 12,000/\u{b5}L or < 4,000/\u{b5}L or > 10% bands",
            ],
            interpretation: &[
                Interpretation { range: "0", meaning: "No SIRS" },
                Interpretation { range: "1-2", meaning: "SIRS present" },
                Interpretation { range: "3-4", meaning: "Severe SIRS" },
            ],
        },
        ScoreReference {
            id: "news2_score",
            description: "National Early Warning Score 2",
            criteria: &[
                "Respiratory rate",
                "Oxygen saturation",
                "Temperature",
                "Systolic blood pressure",
                "Pulse rate",
                "Level of consciousness",
            ],
            interpretation: &[
                Interpretation { range: "0-4", meaning: "Low risk" },
                Interpretation { range: "5-6", meaning: "Medium risk" },
                Interpretation { range: "7+", meaning: "High risk" },
            ],
        },
    ]
});

/// A treatment bundle with its ordered interventions.
#[derive(Debug, Clone, Serialize)]
pub struct TreatmentBundle {
    pub title: &'static str,
    pub interventions: &'static [&'static str],
}

/// Empiric antibiotic regimens by acquisition setting.
#[derive(Debug, Clone, Serialize)]
pub struct AntibioticSelection {
    pub community_acquired: &'static [&'static str],
    pub hospital_acquired: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ClinicalGuidelines {
    pub hour_1_bundle: TreatmentBundle,
    pub antibiotic_selection: AntibioticSelection,
}

pub static CLINICAL_GUIDELINES: Lazy<ClinicalGuidelines> = Lazy::new(|| ClinicalGuidelines {
    hour_1_bundle: TreatmentBundle {
        title: "Surviving Sepsis Campaign 1-Hour Bundle",
        interventions: &[
            "Measure lactate level",
            "Obtain blood cultures before administering antibiotics",
            "Administer broad-spectrum antibiotics",
            "Begin rapid fluid resuscitation (30mL/kg crystalloid for hypotension or lactate \u{2265}4 mmol/L)",
            "Apply vasopressors if patient is hypotensive during or after fluid resuscitation (target MAP \u{2265}65 mmHg)",
        ],
    },
    antibiotic_selection: AntibioticSelection {
        community_acquired: &[
            "Piperacillin-tazobactam 4.5g IV every 6h",
            "Ceftriaxone 2g IV daily plus Azithromycin 500mg IV daily",
            "Cefotaxime 2g IV every 8h plus Clarithromycin 500mg IV every 12h",
        ],
        hospital_acquired: &[
            "Meropenem 1g IV every 8h",
            "Imipenem-cilastatin 500mg IV every 6h",
            "Piperacillin-tazobactam 4.5g IV every 6h plus Vancomycin",
        ],
    },
});

#[cfg(test)]
mod tests {
    use super::{CLINICAL_GUIDELINES, SEPSIS_INDICATORS};

    #[test]
    fn all_three_scoring_systems_present() {
        let ids: Vec<&str> = SEPSIS_INDICATORS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["qsofa_score", "sirs_criteria", "news2_score"]);
    }

    #[test]
    fn reference_data_serializes() {
        let json = serde_json::to_value(&*SEPSIS_INDICATORS).unwrap();
        assert_eq!(json[0]["id"], "qsofa_score");
        assert_eq!(json[0]["criteria"].as_array().unwrap().len(), 3);

        let guidelines = serde_json::to_value(&*CLINICAL_GUIDELINES).unwrap();
        assert_eq!(
            guidelines["hour_1_bundle"]["title"],
            "Surviving Sepsis Campaign 1-Hour Bundle"
        );
        assert_eq!(
            guidelines["antibiotic_selection"]["hospital_acquired"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
    }
}
