// models/src/labs.rs
use serde::{Deserialize, Serialize};

/// One panel of laboratory results. As with vital signs, any field may be
/// absent; the scoring layer applies defaults. The non-scored analytes
/// (hemoglobin, glucose, bun) are carried for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabValues {
    /// White blood cell count in K/µL.
    pub wbc_count: Option<f64>,
    /// Serum lactate in mmol/L.
    pub lactate: Option<f64>,
    /// Serum creatinine in mg/dL.
    pub creatinine: Option<f64>,
    /// Total bilirubin in mg/dL.
    pub bilirubin: Option<f64>,
    /// Platelet count per µL.
    pub platelets: Option<i64>,
    /// Hemoglobin in g/dL. Not scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hemoglobin: Option<f64>,
    /// Blood glucose in mg/dL. Not scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glucose: Option<f64>,
    /// Blood urea nitrogen in mg/dL. Not scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bun: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::LabValues;

    #[test]
    fn empty_object_deserializes_to_all_none() {
        let labs: LabValues = serde_json::from_str("{}").unwrap();
        assert_eq!(labs, LabValues::default());
    }

    #[test]
    fn unscored_analytes_round_trip() {
        let labs: LabValues =
            serde_json::from_str(r#"{"lactate": 3.5, "hemoglobin": 12.1}"#).unwrap();
        assert_eq!(labs.lactate, Some(3.5));
        assert_eq!(labs.hemoglobin, Some(12.1));
        let json = serde_json::to_value(&labs).unwrap();
        assert_eq!(json["hemoglobin"], 12.1);
        assert!(json.get("glucose").is_none());
    }
}
