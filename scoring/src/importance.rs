// scoring/src/importance.rs
//
// SHAP-style feature importance approximation: each feature's contribution
// is its weighted relative distance from a fixed normal range. This is a
// demonstration heuristic, not a faithful SHAP computation.

use models::{Direction, FeatureContribution, LabValues, VitalSigns};
use serde::Serialize;

use crate::risk::defaults;

/// How a feature's reported direction is derived from its deviation. The
/// deviation is non-negative by construction, which makes the below-zero
/// variants always report "positive"; the original system behaves this way
/// for Systolic BP and Oxygen Saturation and inverts Platelets outright, and
/// that behavior is kept for compatibility.
#[derive(Debug, Clone, Copy)]
enum DirectionRule {
    /// "positive" when deviation > 0, otherwise "negative".
    PositiveAboveZero,
    /// "negative" when deviation < 0, otherwise "positive".
    NegativeBelowZero,
    /// "negative" when deviation > 0, otherwise "positive".
    NegativeAboveZero,
}

impl DirectionRule {
    fn apply(self, deviation: f64) -> Direction {
        match self {
            DirectionRule::PositiveAboveZero => {
                if deviation > 0.0 {
                    Direction::Positive
                } else {
                    Direction::Negative
                }
            }
            DirectionRule::NegativeBelowZero => {
                if deviation < 0.0 {
                    Direction::Negative
                } else {
                    Direction::Positive
                }
            }
            DirectionRule::NegativeAboveZero => {
                if deviation > 0.0 {
                    Direction::Negative
                } else {
                    Direction::Positive
                }
            }
        }
    }
}

struct FeatureSpec {
    label: &'static str,
    low: f64,
    high: f64,
    weight: f64,
    rule: DirectionRule,
}

/// The fixed feature table, in ranking tie-break order. Platelets are
/// scaled to thousands before comparison against their range.
const FEATURES: &[FeatureSpec] = &[
    FeatureSpec { label: "Temperature", low: 96.0, high: 100.4, weight: 15.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Heart Rate", low: 60.0, high: 100.0, weight: 10.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Systolic BP", low: 90.0, high: 140.0, weight: 20.0, rule: DirectionRule::NegativeBelowZero },
    FeatureSpec { label: "Respiratory Rate", low: 12.0, high: 20.0, weight: 10.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Oxygen Saturation", low: 95.0, high: 100.0, weight: 15.0, rule: DirectionRule::NegativeBelowZero },
    FeatureSpec { label: "WBC Count", low: 4.0, high: 12.0, weight: 15.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Lactate", low: 0.5, high: 2.0, weight: 20.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Creatinine", low: 0.6, high: 1.2, weight: 10.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Bilirubin", low: 0.3, high: 1.2, weight: 10.0, rule: DirectionRule::PositiveAboveZero },
    FeatureSpec { label: "Platelets", low: 150.0, high: 450.0, weight: 15.0, rule: DirectionRule::NegativeAboveZero },
];

/// Weighted relative distance from the normal range; zero inside the range,
/// boundary values included.
fn deviation(value: f64, low: f64, high: f64, weight: f64) -> f64 {
    if value < low {
        (low - value) / low * weight
    } else if value > high {
        (value - high) / high * weight
    } else {
        0.0
    }
}

/// Rank the features by importance and return the top 6. The sort is
/// stable and descending, so ties keep the fixed table order.
pub fn rank_features(vitals: &VitalSigns, labs: &LabValues) -> Vec<FeatureContribution> {
    let values = [
        vitals.temperature.unwrap_or(defaults::TEMPERATURE),
        vitals.heart_rate.unwrap_or(defaults::HEART_RATE) as f64,
        vitals.systolic_bp.unwrap_or(defaults::SYSTOLIC_BP) as f64,
        vitals.respiratory_rate.unwrap_or(defaults::RESPIRATORY_RATE) as f64,
        vitals.oxygen_saturation.unwrap_or(defaults::OXYGEN_SATURATION),
        labs.wbc_count.unwrap_or(defaults::WBC_COUNT),
        labs.lactate.unwrap_or(defaults::LACTATE),
        labs.creatinine.unwrap_or(defaults::CREATININE),
        labs.bilirubin.unwrap_or(defaults::BILIRUBIN),
        labs.platelets.unwrap_or(defaults::PLATELETS) as f64 / 1000.0,
    ];

    let mut contributions: Vec<FeatureContribution> = FEATURES
        .iter()
        .zip(values)
        .map(|(spec, value)| {
            let deviation = deviation(value, spec.low, spec.high, spec.weight);
            FeatureContribution {
                feature: spec.label.to_string(),
                importance: deviation.abs(),
                direction: spec.rule.apply(deviation),
            }
        })
        .collect();

    contributions.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    contributions.truncate(6);
    contributions
}

/// Aggregate reading of a ranked contribution list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationSummary {
    pub total_impact: f64,
    pub interpretation: String,
}

/// Sum the returned importances and map the total onto one of three fixed
/// interpretation strings.
pub fn summarize(contributions: &[FeatureContribution]) -> ExplanationSummary {
    let total_impact: f64 = contributions.iter().map(|c| c.importance).sum();
    let interpretation = if total_impact > 50.0 {
        "High risk indicators are strongly present. Immediate clinical attention recommended."
    } else if total_impact > 25.0 {
        "Moderate risk indicators present. Close monitoring advised."
    } else {
        "Low risk indicators present. Continue routine care."
    };
    ExplanationSummary {
        total_impact,
        interpretation: interpretation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{deviation, rank_features, summarize};
    use models::{Direction, FeatureContribution, LabValues, VitalSigns};

    #[test]
    fn returns_at_most_six_sorted_entries() {
        let vitals = VitalSigns {
            temperature: Some(103.0),
            heart_rate: Some(120),
            systolic_bp: Some(85),
            diastolic_bp: None,
            respiratory_rate: Some(28),
            oxygen_saturation: Some(90.0),
        };
        let labs = LabValues {
            wbc_count: Some(18.0),
            lactate: Some(3.5),
            creatinine: Some(2.0),
            bilirubin: Some(2.5),
            platelets: Some(80_000),
            ..LabValues::default()
        };
        let ranked = rank_features(&vitals, &labs);
        assert_eq!(ranked.len(), 6);
        for pair in ranked.windows(2) {
            assert!(pair[0].importance >= pair[1].importance);
        }
        for contribution in &ranked {
            assert!(contribution.importance >= 0.0);
        }
    }

    #[test]
    fn all_normal_inputs_yield_zero_importances_in_table_order() {
        let ranked = rank_features(&VitalSigns::default(), &LabValues::default());
        assert_eq!(ranked.len(), 6);
        assert!(ranked.iter().all(|c| c.importance == 0.0));
        // Stable sort keeps the fixed table order on an all-zero tie.
        let labels: Vec<&str> = ranked.iter().map(|c| c.feature.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Temperature",
                "Heart Rate",
                "Systolic BP",
                "Respiratory Rate",
                "Oxygen Saturation",
                "WBC Count"
            ]
        );
    }

    #[test]
    fn range_boundaries_are_inside_the_normal_range() {
        assert_eq!(deviation(100.0, 60.0, 100.0, 10.0), 0.0);
        assert_eq!(deviation(60.0, 60.0, 100.0, 10.0), 0.0);
        let vitals = VitalSigns {
            heart_rate: Some(100),
            ..VitalSigns::default()
        };
        let ranked = rank_features(&vitals, &LabValues::default());
        let hr = ranked.iter().find(|c| c.feature == "Heart Rate").unwrap();
        assert_eq!(hr.importance, 0.0);
    }

    #[test]
    fn lactate_above_range_is_positive_direction() {
        let labs = LabValues {
            lactate: Some(4.0),
            ..LabValues::default()
        };
        let ranked = rank_features(&VitalSigns::default(), &labs);
        let lactate = ranked.iter().find(|c| c.feature == "Lactate").unwrap();
        // (4.0 - 2.0) / 2.0 * 20
        assert!((lactate.importance - 20.0).abs() < 1e-9);
        assert_eq!(lactate.direction, Direction::Positive);
    }

    #[test]
    fn low_platelets_report_negative_direction() {
        let labs = LabValues {
            platelets: Some(80_000),
            ..LabValues::default()
        };
        let ranked = rank_features(&VitalSigns::default(), &labs);
        let platelets = ranked.iter().find(|c| c.feature == "Platelets").unwrap();
        // Scaled to 80; (150 - 80) / 150 * 15
        assert!((platelets.importance - 7.0).abs() < 1e-9);
        assert_eq!(platelets.direction, Direction::Negative);
    }

    #[test]
    fn zero_deviation_direction_defaults_match_original_behavior() {
        let ranked = rank_features(&VitalSigns::default(), &LabValues::default());
        let direction_of = |label: &str| {
            ranked
                .iter()
                .find(|c| c.feature == label)
                .map(|c| c.direction)
        };
        assert_eq!(direction_of("Temperature"), Some(Direction::Negative));
        assert_eq!(direction_of("Heart Rate"), Some(Direction::Negative));
        assert_eq!(direction_of("Systolic BP"), Some(Direction::Positive));
        assert_eq!(direction_of("Oxygen Saturation"), Some(Direction::Positive));
        assert_eq!(direction_of("WBC Count"), Some(Direction::Negative));
    }

    #[test]
    fn interpretation_thresholds() {
        let entry = |importance: f64| FeatureContribution {
            feature: "Lactate".to_string(),
            importance,
            direction: Direction::Positive,
        };
        assert_eq!(
            summarize(&[entry(51.0)]).interpretation,
            "High risk indicators are strongly present. Immediate clinical attention recommended."
        );
        assert_eq!(
            summarize(&[entry(26.0)]).interpretation,
            "Moderate risk indicators present. Close monitoring advised."
        );
        assert_eq!(
            summarize(&[entry(10.0)]).interpretation,
            "Low risk indicators present. Continue routine care."
        );
        assert_eq!(summarize(&[]).total_impact, 0.0);
    }

    #[test]
    fn total_impact_sums_returned_importances() {
        let labs = LabValues {
            lactate: Some(4.0),
            creatinine: Some(2.4),
            ..LabValues::default()
        };
        let ranked = rank_features(&VitalSigns::default(), &labs);
        let summary = summarize(&ranked);
        assert!((summary.total_impact - 30.0).abs() < 1e-9);
        assert_eq!(
            summary.interpretation,
            "Moderate risk indicators present. Close monitoring advised."
        );
    }
}
