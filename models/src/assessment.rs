// models/src/assessment.rs
use serde::{Deserialize, Serialize};

/// The three score bands. The band alone determines both the level label a
/// client sees and the full recommendation list; there is no partial mixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    /// Band for a clamped score: >=70 High, >=40 Elevated, otherwise Low.
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            RiskBand::High
        } else if score >= 40.0 {
            RiskBand::Elevated
        } else {
            RiskBand::Low
        }
    }

    /// Exact level label transmitted to clients. Existing frontends match on
    /// these strings, so they must be reproduced verbatim.
    pub fn level(&self) -> &'static str {
        match self {
            RiskBand::High => "High Risk - Immediate Action Required",
            RiskBand::Elevated => "Elevated Risk - Monitor Closely",
            RiskBand::Low => "Low Risk - Routine Monitoring",
        }
    }

    /// Fixed, ordered recommendation list for the band.
    pub fn recommendations(&self) -> Vec<String> {
        let items: &[&str] = match self {
            RiskBand::High => &[
                "Initiate sepsis protocol immediately",
                "Obtain blood cultures before antibiotics",
                "Start broad-spectrum antibiotics within 1 hour",
                "Administer 30mL/kg crystalloid for hypotension",
                "Consider vasopressors if hypotensive despite fluid resuscitation",
                "Transfer to ICU for continuous monitoring",
            ],
            RiskBand::Elevated => &[
                "Increase monitoring frequency",
                "Repeat vital signs in 2 hours",
                "Consider additional laboratory studies",
                "Evaluate for infection source",
                "Prepare for potential escalation of care",
            ],
            RiskBand::Low => &[
                "Continue routine monitoring",
                "Reassess in 4-6 hours",
                "Monitor for clinical deterioration",
                "Ensure adequate hydration",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}

/// Output of the risk scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Clamped to [0, 100].
    pub score: f64,
    pub band: RiskBand,
    pub level: String,
    pub recommendations: Vec<String>,
}

/// Which way a feature pushed the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

/// One feature's estimated influence, derived from its deviation from the
/// normal range. Importance is always non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub importance: f64,
    pub direction: Direction,
}
