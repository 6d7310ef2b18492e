// models/src/vitals.rs
use serde::{Deserialize, Serialize};

/// One set of bedside vital signs. Any field may be absent on the wire; the
/// scoring layer substitutes its documented default for a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalSigns {
    /// Body temperature in degrees Fahrenheit.
    pub temperature: Option<f64>,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<i64>,
    /// Systolic blood pressure in mmHg.
    pub systolic_bp: Option<i64>,
    /// Diastolic blood pressure in mmHg. Recorded but not scored.
    pub diastolic_bp: Option<i64>,
    /// Respiratory rate in breaths per minute.
    pub respiratory_rate: Option<i64>,
    /// Peripheral oxygen saturation in percent.
    pub oxygen_saturation: Option<f64>,
}
