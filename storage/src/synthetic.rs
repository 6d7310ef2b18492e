// storage/src/synthetic.rs
//
// Synthetic MIMIC-IV style patient fabrication. Every record is invented;
// nothing here derives from real patient data. Vitals and labs are sampled
// around normal adult values, then skewed toward sepsis indicators for the
// moderate- and high-risk tiers.

use chrono::{Duration, Utc};
use models::{LabValues, Patient, VitalSigns};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "William", "Barbara", "David", "Elizabeth", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
];

const CHIEF_COMPLAINTS: &[&str] = &[
    "Fever and chills for 2 days",
    "Shortness of breath and confusion",
    "Abdominal pain and nausea",
    "Chest pain and cough",
    "Severe headache and neck stiffness",
    "Urinary frequency and burning",
    "Diarrhea and vomiting",
    "Joint pain and swelling",
    "Skin rash and itching",
    "Back pain and fever",
    "Dizziness and weakness",
    "Sore throat and cough",
    "Leg swelling and shortness of breath",
    "Head injury and confusion",
    "Severe abdominal pain",
];

const MEDICAL_HISTORIES: &[&[&str]] = &[
    &["Type 2 Diabetes", "Hypertension"],
    &["Chronic Kidney Disease", "Heart Failure"],
    &["COPD", "Diabetes"],
    &["Coronary Artery Disease", "Previous MI"],
    &["Asthma", "Anxiety Disorder"],
    &["Chronic Kidney Disease", "Anemia"],
    &["Heart Failure", "Atrial Fibrillation"],
    &["Type 1 Diabetes", "Retinopathy"],
    &["Hypertension", "Hyperlipidemia"],
    &["COPD", "Sleep Apnea"],
    &["Coronary Artery Disease", "Diabetes"],
    &["Chronic Kidney Disease"],
    &["Heart Failure", "Diabetes", "Hypertension"],
    &["Asthma", "Allergic Rhinitis"],
    &["Previous Stroke", "Hypertension"],
];

const MEDICATIONS: &[&[&str]] = &[
    &["Metformin", "Lisinopril", "Aspirin"],
    &["Furosemide", "Metoprolol", "Insulin"],
    &["Albuterol", "Metformin"],
    &["Atorvastatin", "Clopidogrel", "Metoprolol"],
    &["Fluticasone", "Sertraline"],
    &["Erythropoietin", "Calcium Carbonate"],
    &["Warfarin", "Furosemide", "Digoxin"],
    &["Insulin", "Lisinopril"],
    &["Amlodipine", "Simvastatin"],
    &["Tiotropium", "Albuterol"],
    &["Metoprolol", "Atorvastatin", "Nitroglycerin"],
    &["Epoetin Alfa", "Sevelamer"],
    &["Carvedilol", "Furosemide", "Metformin", "Lisinopril"],
    &["Fluticasone", "Montelukast"],
    &["Clopidogrel", "Atorvastatin", "Lisinopril"],
];

/// The tier a patient's vitals and labs are skewed toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskTier {
    Normal,
    Moderate,
    High,
}

impl RiskTier {
    /// Draw a tier with weights 0.40 / 0.35 / 0.25.
    fn sample<R: Rng>(rng: &mut R) -> Self {
        let roll: f64 = rng.gen();
        if roll < 0.40 {
            RiskTier::Normal
        } else if roll < 0.75 {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }
}

/// Approximate normal sample (Irwin-Hall sum of 12 uniforms). Bounded to
/// mean plus or minus six standard deviations, which is plenty for vitals.
fn normal<R: Rng>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    let sum: f64 = (0..12).map(|_| rng.gen::<f64>()).sum();
    mean + (sum - 6.0) * sd
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn pick<'a, T: ?Sized, R: Rng>(rng: &mut R, items: &'a [&'a T]) -> &'a T {
    items[rng.gen_range(0..items.len())]
}

fn generate_vital_signs<R: Rng>(rng: &mut R, tier: RiskTier) -> VitalSigns {
    let mut vitals = VitalSigns {
        temperature: Some(round_to(normal(rng, 98.6, 1.5), 1)),
        heart_rate: Some(normal(rng, 75.0, 15.0).max(30.0) as i64),
        systolic_bp: Some(normal(rng, 120.0, 20.0).max(60.0) as i64),
        diastolic_bp: Some(normal(rng, 75.0, 10.0).max(40.0) as i64),
        respiratory_rate: Some(normal(rng, 16.0, 3.0).max(8.0) as i64),
        oxygen_saturation: Some(round_to(normal(rng, 97.0, 2.0).min(100.0), 1)),
    };

    match tier {
        RiskTier::High => {
            if rng.gen::<f64>() < 0.7 {
                vitals.temperature = Some(round_to(rng.gen_range(101.0..104.0), 1));
            }
            if rng.gen::<f64>() < 0.6 {
                vitals.heart_rate = Some(rng.gen_range(100..140));
            }
            if rng.gen::<f64>() < 0.5 {
                vitals.systolic_bp = Some(rng.gen_range(80..95));
            }
            if rng.gen::<f64>() < 0.4 {
                vitals.respiratory_rate = Some(rng.gen_range(22..35));
            }
            if rng.gen::<f64>() < 0.3 {
                vitals.oxygen_saturation = Some(round_to(rng.gen_range(88.0..94.0), 1));
            }
        }
        RiskTier::Moderate => {
            if rng.gen::<f64>() < 0.4 {
                vitals.temperature = Some(round_to(rng.gen_range(99.5..101.5), 1));
            }
            if rng.gen::<f64>() < 0.3 {
                vitals.heart_rate = Some(rng.gen_range(90..110));
            }
            if rng.gen::<f64>() < 0.3 {
                vitals.systolic_bp = Some(rng.gen_range(100..110));
            }
            if rng.gen::<f64>() < 0.2 {
                vitals.respiratory_rate = Some(rng.gen_range(20..25));
            }
        }
        RiskTier::Normal => {}
    }

    vitals
}

fn generate_lab_values<R: Rng>(rng: &mut R, tier: RiskTier) -> LabValues {
    let mut labs = LabValues {
        wbc_count: Some(round_to(normal(rng, 7.5, 2.5).max(1.0), 1)),
        lactate: Some(round_to(normal(rng, 1.2, 0.4).max(0.2), 2)),
        creatinine: Some(round_to(normal(rng, 1.0, 0.3).max(0.2), 2)),
        bilirubin: Some(round_to(normal(rng, 0.8, 0.3).max(0.1), 2)),
        platelets: Some(normal(rng, 250_000.0, 75_000.0).max(20_000.0) as i64),
        hemoglobin: Some(round_to(normal(rng, 13.5, 2.0).max(5.0), 1)),
        glucose: Some(normal(rng, 100.0, 30.0).max(40.0).round()),
        bun: Some(round_to(normal(rng, 15.0, 5.0).max(3.0), 1)),
    };

    match tier {
        RiskTier::High => {
            if rng.gen::<f64>() < 0.6 {
                labs.wbc_count = Some(round_to(rng.gen_range(15.0..25.0), 1));
            } else if rng.gen::<f64>() < 0.2 {
                labs.wbc_count = Some(round_to(rng.gen_range(2.0..3.5), 1));
            }
            if rng.gen::<f64>() < 0.5 {
                labs.lactate = Some(round_to(rng.gen_range(2.5..6.0), 2));
            }
            if rng.gen::<f64>() < 0.4 {
                labs.creatinine = Some(round_to(rng.gen_range(1.8..3.5), 2));
            }
            if rng.gen::<f64>() < 0.3 {
                labs.platelets = Some(rng.gen_range(50_000..120_000));
            }
            if rng.gen::<f64>() < 0.3 {
                labs.bilirubin = Some(round_to(rng.gen_range(2.5..5.0), 2));
            }
            if rng.gen::<f64>() < 0.4 {
                labs.glucose = Some(rng.gen_range(150.0_f64..300.0).round());
            }
        }
        RiskTier::Moderate => {
            if rng.gen::<f64>() < 0.3 {
                labs.wbc_count = Some(round_to(rng.gen_range(12.0..15.0), 1));
            }
            if rng.gen::<f64>() < 0.3 {
                labs.lactate = Some(round_to(rng.gen_range(2.0..2.8), 2));
            }
            if rng.gen::<f64>() < 0.3 {
                labs.creatinine = Some(round_to(rng.gen_range(1.3..1.8), 2));
            }
            if rng.gen::<f64>() < 0.2 {
                labs.platelets = Some(rng.gen_range(120_000..150_000));
            }
        }
        RiskTier::Normal => {}
    }

    labs
}

fn generate_patient<R: Rng>(rng: &mut R, id: i64) -> Patient {
    let tier = RiskTier::sample(rng);

    let age = normal(rng, 65.0, 18.0).round().clamp(18.0, 95.0) as u32;
    let gender = if rng.gen::<bool>() { "Male" } else { "Female" };
    let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    let admission_date = Utc::now() - Duration::days(rng.gen_range(1..=30));

    Patient {
        id,
        name,
        age,
        gender: gender.to_string(),
        admission_date,
        chief_complaint: pick(rng, CHIEF_COMPLAINTS).to_string(),
        vital_signs: generate_vital_signs(rng, tier),
        lab_values: generate_lab_values(rng, tier),
        medical_history: pick(rng, MEDICAL_HISTORIES)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        current_medications: pick(rng, MEDICATIONS)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        risk_level: None,
        risk_score: None,
    }
}

/// Fabricate `count` patients with ids 1..=count.
pub fn generate_patients(count: usize) -> Vec<Patient> {
    generate_patients_with_rng(&mut thread_rng(), count)
}

/// Seedable variant for deterministic tests.
pub fn generate_patients_with_rng<R: Rng>(rng: &mut R, count: usize) -> Vec<Patient> {
    (1..=count as i64).map(|id| generate_patient(rng, id)).collect()
}

/// Convenience for tests and demos that need reproducible data.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
