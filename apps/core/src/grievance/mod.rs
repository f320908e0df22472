//! # Grievance Module
//!
//! Rule-based handling of data-protection grievances.
//! Classifies the free-text description, then answers with a templated
//! DPDP Act response.
//!
//! ## Components
//! - `vocabulary`: Keyword tables for types, priority, legal and review terms
//! - `classifier`: Keyword scoring and request-type selection
//! - `triage`: Priority, complexity and manual-review derivation
//! - `templates`: Response templates per request type
//! - `case_id`: Case identifiers and the injectable clock/entropy source
//! - `responder`: Response and action-list generation
//! - `service`: Main orchestrator

pub mod case_id;
pub mod classifier;
pub mod responder;
pub mod service;
pub mod templates;
pub mod triage;
pub mod vocabulary;

pub use case_id::{CaseSource, SystemSource};
pub use classifier::{GrievanceClassifier, NormalizedText, TypeScores};
pub use responder::GrievanceResponder;
pub use service::GrievanceService;
pub use templates::TemplateCatalog;
pub use vocabulary::{KeywordTable, PriorityTiers, SubCategoryRule, Vocabulary};
