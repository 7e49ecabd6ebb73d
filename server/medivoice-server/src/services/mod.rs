pub mod consultation;

pub use consultation::{normalize_symptom, Consultation, ConsultationService};
