// scoring/src/risk.rs
//
// Rule-based sepsis risk scorer: a weighted-threshold sum over ten clinical
// fields plus symptom keyword matching, mapped to a band and its fixed
// recommendation list.

use models::{LabValues, RiskAssessment, RiskBand, VitalSigns};

/// Defaults substituted for absent input fields.
pub mod defaults {
    pub const TEMPERATURE: f64 = 98.6;
    pub const HEART_RATE: i64 = 70;
    pub const SYSTOLIC_BP: i64 = 120;
    pub const RESPIRATORY_RATE: i64 = 16;
    pub const OXYGEN_SATURATION: f64 = 98.0;
    pub const WBC_COUNT: f64 = 7.0;
    pub const LACTATE: f64 = 1.0;
    pub const CREATININE: f64 = 1.0;
    pub const BILIRUBIN: f64 = 1.0;
    pub const PLATELETS: i64 = 250_000;
}

/// Keywords matched case-insensitively as substrings of reported symptoms.
pub const SEPSIS_SYMPTOM_KEYWORDS: &[&str] = &[
    "fever",
    "chills",
    "confusion",
    "shortness of breath",
    "rapid breathing",
];

/// Number of symptom strings that contain at least one sepsis keyword. A
/// single string matching several keywords still counts once.
fn matching_symptom_count(symptoms: &[String]) -> usize {
    symptoms
        .iter()
        .filter(|symptom| {
            let lowered = symptom.to_lowercase();
            SEPSIS_SYMPTOM_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .count()
}

/// Score the given inputs and produce the full assessment. The additive
/// rules are independent: every condition that holds contributes, and the
/// raw sum is capped at 100. All terms are non-negative, so the score is
/// always in [0, 100].
pub fn assess(vitals: &VitalSigns, labs: &LabValues, symptoms: &[String]) -> RiskAssessment {
    let temperature = vitals.temperature.unwrap_or(defaults::TEMPERATURE);
    let heart_rate = vitals.heart_rate.unwrap_or(defaults::HEART_RATE);
    let systolic_bp = vitals.systolic_bp.unwrap_or(defaults::SYSTOLIC_BP);
    let respiratory_rate = vitals.respiratory_rate.unwrap_or(defaults::RESPIRATORY_RATE);
    let oxygen_saturation = vitals.oxygen_saturation.unwrap_or(defaults::OXYGEN_SATURATION);

    let wbc_count = labs.wbc_count.unwrap_or(defaults::WBC_COUNT);
    let lactate = labs.lactate.unwrap_or(defaults::LACTATE);
    let creatinine = labs.creatinine.unwrap_or(defaults::CREATININE);
    let bilirubin = labs.bilirubin.unwrap_or(defaults::BILIRUBIN);
    let platelets = labs.platelets.unwrap_or(defaults::PLATELETS);

    let mut score: f64 = 0.0;

    if temperature > 100.4 || temperature < 96.0 {
        score += 15.0;
    }
    if heart_rate > 100 {
        score += 10.0;
    }
    if systolic_bp < 90 {
        score += 20.0;
    }
    if respiratory_rate > 20 {
        score += 10.0;
    }
    if oxygen_saturation < 95.0 {
        score += 15.0;
    }
    if wbc_count > 12.0 || wbc_count < 4.0 {
        score += 15.0;
    }
    if lactate > 2.0 {
        score += 20.0;
    }
    if creatinine > 1.5 {
        score += 10.0;
    }
    if bilirubin > 2.0 {
        score += 10.0;
    }
    if platelets < 100_000 {
        score += 15.0;
    }

    score += matching_symptom_count(symptoms) as f64 * 5.0;

    let score = score.min(100.0);
    let band = RiskBand::for_score(score);

    RiskAssessment {
        score,
        band,
        level: band.level().to_string(),
        recommendations: band.recommendations(),
    }
}

#[cfg(test)]
mod tests {
    use super::{assess, matching_symptom_count};
    use models::{LabValues, RiskBand, VitalSigns};

    fn symptoms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_defaults_score_zero_low_band() {
        let assessment = assess(&VitalSigns::default(), &LabValues::default(), &[]);
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.band, RiskBand::Low);
        assert_eq!(assessment.level, "Low Risk - Routine Monitoring");
        assert_eq!(assessment.recommendations.len(), 4);
    }

    #[test]
    fn fully_deranged_inputs_clamp_to_one_hundred() {
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
        // Raw sum is 145; the assessment caps it.
        let assessment = assess(&vitals, &labs, &symptoms(&["fever and chills"]));
        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.band, RiskBand::High);
        assert_eq!(assessment.level, "High Risk - Immediate Action Required");
        assert_eq!(assessment.recommendations.len(), 6);
    }

    #[test]
    fn score_is_always_within_bounds() {
        let cases = [
            (VitalSigns::default(), LabValues::default(), vec![]),
            (
                VitalSigns {
                    temperature: Some(95.0),
                    oxygen_saturation: Some(80.0),
                    ..VitalSigns::default()
                },
                LabValues {
                    lactate: Some(9.0),
                    platelets: Some(10_000),
                    ..LabValues::default()
                },
                symptoms(&["fever", "chills", "confusion", "rapid breathing"]),
            ),
        ];
        for (vitals, labs, symptoms) in cases {
            let assessment = assess(&vitals, &labs, &symptoms);
            assert!((0.0..=100.0).contains(&assessment.score));
        }
    }

    #[test]
    fn threshold_boundaries_do_not_trigger() {
        // Values exactly at a threshold are inside the acceptable range.
        let vitals = VitalSigns {
            temperature: Some(100.4),
            heart_rate: Some(100),
            systolic_bp: Some(90),
            diastolic_bp: None,
            respiratory_rate: Some(20),
            oxygen_saturation: Some(95.0),
        };
        let labs = LabValues {
            wbc_count: Some(12.0),
            lactate: Some(2.0),
            creatinine: Some(1.5),
            bilirubin: Some(2.0),
            platelets: Some(100_000),
            ..LabValues::default()
        };
        let assessment = assess(&vitals, &labs, &[]);
        assert_eq!(assessment.score, 0.0);
    }

    #[test]
    fn symptom_matching_is_case_insensitive() {
        let assessment = assess(&VitalSigns::default(), &LabValues::default(), &symptoms(&["FEVER"]));
        assert_eq!(assessment.score, 5.0);
    }

    #[test]
    fn one_symptom_string_counts_once_despite_multiple_keywords() {
        assert_eq!(matching_symptom_count(&symptoms(&["fever and confusion"])), 1);
        let assessment = assess(
            &VitalSigns::default(),
            &LabValues::default(),
            &symptoms(&["fever and confusion"]),
        );
        assert_eq!(assessment.score, 5.0);
    }

    #[test]
    fn each_matching_symptom_string_adds_five() {
        let assessment = assess(
            &VitalSigns::default(),
            &LabValues::default(),
            &symptoms(&["fever", "chills", "leg pain"]),
        );
        assert_eq!(assessment.score, 10.0);
    }

    #[test]
    fn low_reading_triggers_two_sided_rules() {
        let vitals = VitalSigns {
            temperature: Some(95.5),
            ..VitalSigns::default()
        };
        let labs = LabValues {
            wbc_count: Some(3.0),
            ..LabValues::default()
        };
        let assessment = assess(&vitals, &labs, &[]);
        assert_eq!(assessment.score, 30.0);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let vitals = VitalSigns {
            heart_rate: Some(110),
            ..VitalSigns::default()
        };
        let labs = LabValues {
            lactate: Some(2.5),
            ..LabValues::default()
        };
        let first = assess(&vitals, &labs, &symptoms(&["chills"]));
        let second = assess(&vitals, &labs, &symptoms(&["chills"]));
        assert_eq!(first, second);
    }
}
