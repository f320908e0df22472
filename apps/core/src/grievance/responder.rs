//! Template-based response generation.
//!
//! Turns a classification into the response sent to the data principal plus
//! the ordered action list for the compliance team.

use chrono::SecondsFormat;
use std::sync::Arc;
use tracing::debug;

use super::case_id::{format_case_id, CaseSource, SystemSource};
use super::templates::TemplateCatalog;
use crate::models::{AIResponse, ClassificationResult, Complexity, GrievanceRequest, RequestType};

/// Prepended when a compliance officer must look at the case first
const REVIEW_ACTIONS: &[&str] = &[
    "Flag for manual review by compliance officer",
    "Verify data principal identity before processing",
];

const ERASURE_ACTIONS: &[&str] = &[
    "Identify all systems holding the data principal's data",
    "Execute erasure workflow per retention policy",
    "Document erasure completion and retain audit trail",
];

const ACCESS_ACTIONS: &[&str] = &[
    "Compile data summary from all relevant systems",
    "Prepare data in requested format (PDF/JSON)",
    "Send secure access link to data principal",
];

const CORRECTION_ACTIONS: &[&str] = &[
    "Request supporting documentation if not provided",
    "Verify correction request against source documents",
    "Update records and notify downstream processors",
];

const PORTABILITY_ACTIONS: &[&str] = &[
    "Export data in machine-readable format",
    "Ensure format supports interoperability",
    "Provide secure download mechanism",
];

const OBJECTION_ACTIONS: &[&str] = &[
    "Identify consent-based processing activities",
    "Cease processing for withdrawn consent",
    "Update consent records and notify data principal",
];

/// Appended for high and critical priority
const EXPEDITE_ACTION: &str = "Prioritize in queue - expedite processing";

/// Statutory default response window
const DEFAULT_SLA_DAYS: u32 = 90;
const COMPLEX_SLA_DAYS: u32 = 60;
const SIMPLE_SLA_DAYS: u32 = 45;

/// Operational steps for a request type
pub fn type_actions(request_type: RequestType) -> &'static [&'static str] {
    match request_type {
        RequestType::Erasure => ERASURE_ACTIONS,
        RequestType::Access => ACCESS_ACTIONS,
        RequestType::Correction => CORRECTION_ACTIONS,
        RequestType::Portability => PORTABILITY_ACTIONS,
        RequestType::Objection => OBJECTION_ACTIONS,
    }
}

/// Ordered compliance actions: review steps, type steps, then expedite
pub fn suggested_actions(classification: &ClassificationResult) -> Vec<String> {
    let mut actions = Vec::new();

    if classification.requires_manual_review {
        actions.extend(REVIEW_ACTIONS.iter().map(|a| a.to_string()));
    }

    actions.extend(
        type_actions(classification.request_type)
            .iter()
            .map(|a| a.to_string()),
    );

    if classification.priority.is_elevated() {
        actions.push(EXPEDITE_ACTION.to_string());
    }

    actions
}

/// Fixed lookup, independent of priority
pub fn sla_days(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Complex => COMPLEX_SLA_DAYS,
        Complexity::Simple => SIMPLE_SLA_DAYS,
        Complexity::Moderate => DEFAULT_SLA_DAYS,
    }
}

/// Generates DPDP Act compliant responses for classified grievances
#[derive(Clone)]
pub struct GrievanceResponder {
    templates: Arc<TemplateCatalog>,
    source: Arc<dyn CaseSource>,
}

impl Default for GrievanceResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrievanceResponder {
    /// Responder with the standard templates, system clock and UUID entropy
    pub fn new() -> Self {
        Self::with_parts(TemplateCatalog::standard(), Arc::new(SystemSource))
    }

    pub fn with_parts(templates: Arc<TemplateCatalog>, source: Arc<dyn CaseSource>) -> Self {
        Self { templates, source }
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    /// Build the response for a classified grievance. Never fails.
    pub fn generate_response(
        &self,
        classification: &ClassificationResult,
        request: &GrievanceRequest,
    ) -> AIResponse {
        let now = self.source.now();
        let case_id = format_case_id(now, &self.source.random_suffix());
        let template = self.templates.resolve(classification.request_type);

        let response = AIResponse {
            case_id,
            response_text: template.to_string(),
            language: request.language.clone(),
            suggested_actions: suggested_actions(classification),
            sla_days: sla_days(classification.estimated_complexity),
            escalation_required: classification.requires_manual_review,
            generated_at: now.to_rfc3339_opts(SecondsFormat::Micros, false),
        };

        debug!(
            case_id = %response.case_id,
            sla_days = response.sla_days,
            escalation = response.escalation_required,
            "Generated grievance response"
        );
        response
    }
}

impl std::fmt::Debug for GrievanceResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrievanceResponder")
            .field("templates", &self.templates.available_types())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn classification(
        request_type: RequestType,
        priority: Priority,
        complexity: Complexity,
        review: bool,
    ) -> ClassificationResult {
        ClassificationResult {
            request_type,
            confidence: if review { 0.4 } else { 0.8 },
            sub_category: "test".to_string(),
            priority,
            estimated_complexity: complexity,
            requires_manual_review: review,
        }
    }

    #[test]
    fn test_sla_lookup() {
        assert_eq!(sla_days(Complexity::Complex), 60);
        assert_eq!(sla_days(Complexity::Simple), 45);
        assert_eq!(sla_days(Complexity::Moderate), 90);
    }

    #[test]
    fn test_actions_without_review_or_escalation() {
        let c = classification(
            RequestType::Portability,
            Priority::Medium,
            Complexity::Simple,
            false,
        );
        assert_eq!(suggested_actions(&c), PORTABILITY_ACTIONS.to_vec());
    }

    #[test]
    fn test_action_order_with_review_and_escalation() {
        let c = classification(
            RequestType::Erasure,
            Priority::Critical,
            Complexity::Moderate,
            true,
        );
        let actions = suggested_actions(&c);

        assert_eq!(actions.len(), 6);
        assert_eq!(actions[0], REVIEW_ACTIONS[0]);
        assert_eq!(actions[1], REVIEW_ACTIONS[1]);
        assert_eq!(&actions[2..5], ERASURE_ACTIONS);
        assert_eq!(actions[5], EXPEDITE_ACTION);
    }

    #[test]
    fn test_low_priority_is_not_expedited() {
        let low = classification(
            RequestType::Access,
            Priority::Low,
            Complexity::Moderate,
            false,
        );
        let actions = suggested_actions(&low);
        assert!(!actions.contains(&EXPEDITE_ACTION.to_string()));

        let high = classification(
            RequestType::Access,
            Priority::High,
            Complexity::Moderate,
            false,
        );
        let actions = suggested_actions(&high);
        assert_eq!(actions.last().map(String::as_str), Some(EXPEDITE_ACTION));
    }

    #[test]
    fn test_each_type_has_distinct_actions() {
        for (i, a) in RequestType::ALL.iter().enumerate() {
            for b in &RequestType::ALL[i + 1..] {
                assert_ne!(type_actions(*a), type_actions(*b));
            }
        }
    }
}
