//! health-summary-core: request model and prompt compilation
//!
//! This crate holds everything that does not touch the network: parsing and
//! validating the summary request, selecting the translation language, and
//! rendering the natural-language prompt.

pub mod error;
pub mod language;
pub mod prompt;
pub mod record;

pub use error::SummaryError;
pub use language::Language;
pub use prompt::{MAX_PROMPT_RECORDS, compile_prompt};
pub use record::{Allergy, MedicalRecord, PatientProfile, SummaryInput, SummaryRequest};
