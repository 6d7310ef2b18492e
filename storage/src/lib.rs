// storage/src/lib.rs
//
// Patient repository behind the REST handlers. The demo ships a single
// in-memory implementation seeded with synthetic records; the trait keeps
// the request layer decoupled from data fabrication.

pub mod synthetic;

use async_trait::async_trait;
use models::Patient;

/// Read-only access to the patient store.
#[async_trait]
pub trait PatientRepository: Send + Sync + 'static {
    /// All patients, in stable id order.
    async fn list(&self) -> Vec<Patient>;
    /// One patient by id, `None` when absent.
    async fn get(&self, id: i64) -> Option<Patient>;
}

/// In-memory store seeded once at startup. The patient list is immutable
/// after construction, so lookups need no locking.
pub struct InMemoryPatientStore {
    patients: Vec<Patient>,
}

impl InMemoryPatientStore {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self { patients }
    }

    /// Seed with `count` synthetic patients.
    pub fn with_synthetic_patients(count: usize) -> Self {
        Self::new(synthetic::generate_patients(count))
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientStore {
    async fn list(&self) -> Vec<Patient> {
        self.patients.clone()
    }

    async fn get(&self, id: i64) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }
}
