//! Grievance service - orchestrates classification and response generation.
//!
//! The HTTP layer holds one service and calls it from every handler. Both
//! components are immutable, so the service is freely shared across tasks.

use serde_json::{Map, Value};
use std::time::Instant;
use tracing::info;

use super::classifier::GrievanceClassifier;
use super::responder::GrievanceResponder;
use crate::models::{
    AIResponse, BulkClassifyItem, ClassificationResult, GrievanceAnalytics, GrievanceRequest,
    ProcessedGrievance, RequestType,
};

#[derive(Debug, Clone, Default)]
pub struct GrievanceService {
    classifier: GrievanceClassifier,
    responder: GrievanceResponder,
}

impl GrievanceService {
    pub fn new(classifier: GrievanceClassifier, responder: GrievanceResponder) -> Self {
        Self {
            classifier,
            responder,
        }
    }

    pub fn classifier(&self) -> &GrievanceClassifier {
        &self.classifier
    }

    pub fn responder(&self) -> &GrievanceResponder {
        &self.responder
    }

    /// Classify a grievance against its stated type
    pub fn classify(&self, request: &GrievanceRequest) -> ClassificationResult {
        let classification = self
            .classifier
            .classify(&request.description, request.request_type.as_str());

        info!(
            stated = %request.request_type,
            classified = %classification.request_type,
            confidence = classification.confidence,
            priority = classification.priority.as_str(),
            "Classified grievance"
        );
        classification
    }

    /// Classify, then generate the response
    pub fn respond(&self, request: &GrievanceRequest) -> AIResponse {
        self.process(request).response
    }

    /// Full pipeline: classification and response together
    pub fn process(&self, request: &GrievanceRequest) -> ProcessedGrievance {
        let start = Instant::now();

        let classification = self.classify(request);
        let response = self.responder.generate_response(&classification, request);

        info!(
            case_id = %response.case_id,
            request_type = %classification.request_type,
            escalation = response.escalation_required,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Processed grievance"
        );

        ProcessedGrievance {
            classification,
            response,
        }
    }

    /// Classify many descriptions, preserving input order
    pub fn bulk_classify(&self, items: &[BulkClassifyItem]) -> Vec<ClassificationResult> {
        let classifications: Vec<ClassificationResult> = items
            .iter()
            .map(|item| {
                self.classifier
                    .classify(&item.description, item.stated_type.as_str())
            })
            .collect();

        info!(count = classifications.len(), "Bulk classified grievances");
        classifications
    }

    /// Request types with a response template, in catalog order
    pub fn available_templates(&self) -> Vec<RequestType> {
        self.responder.templates().available_types()
    }

    /// Fixed demonstration figures; nothing is aggregated
    pub fn analytics(&self) -> GrievanceAnalytics {
        let by_type: Map<String, Value> = [
            (RequestType::Access, 420),
            (RequestType::Correction, 310),
            (RequestType::Erasure, 280),
            (RequestType::Portability, 150),
            (RequestType::Objection, 90),
        ]
        .into_iter()
        .map(|(request_type, count): (RequestType, u64)| {
            (request_type.as_str().to_string(), Value::from(count))
        })
        .collect();

        GrievanceAnalytics {
            total_processed: 1250,
            by_type,
            avg_resolution_days: 32.5,
            ai_accuracy: 0.87,
            sla_compliance_rate: 0.92,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(request_type: RequestType, description: &str) -> GrievanceRequest {
        GrievanceRequest {
            data_principal_email: "principal@example.com".to_string(),
            request_type,
            description: description.to_string(),
            language: "hi".to_string(),
        }
    }

    #[test]
    fn test_process_links_classification_and_response() {
        let service = GrievanceService::default();

        let processed = service.process(&request(
            RequestType::Erasure,
            "I want to delete my account urgently",
        ));

        assert_eq!(processed.classification.request_type, RequestType::Erasure);
        assert_eq!(
            processed.response.escalation_required,
            processed.classification.requires_manual_review
        );
        assert_eq!(processed.response.language, "hi");
        assert_eq!(processed.response.sla_days, 90);
    }

    #[test]
    fn test_bulk_classify_preserves_order() {
        let service = GrievanceService::default();
        let items = vec![
            BulkClassifyItem {
                description: "delete erase purge wipe".to_string(),
                stated_type: RequestType::Erasure,
            },
            BulkClassifyItem {
                description: "unsubscribe me and stop, I withdraw consent".to_string(),
                stated_type: RequestType::Objection,
            },
            BulkClassifyItem {
                description: String::new(),
                stated_type: RequestType::Access,
            },
        ];

        let results = service.bulk_classify(&items);

        let types: Vec<RequestType> = results.iter().map(|r| r.request_type).collect();
        assert_eq!(
            types,
            vec![
                RequestType::Erasure,
                RequestType::Objection,
                RequestType::Access
            ]
        );
    }

    #[test]
    fn test_analytics_totals() {
        let analytics = GrievanceService::default().analytics();

        assert_eq!(analytics.total_processed, 1250);
        let total: u64 = analytics.by_type.values().filter_map(Value::as_u64).sum();
        assert_eq!(total, 1250);
        let access = analytics.by_type.get("access").and_then(Value::as_u64);
        assert_eq!(access, Some(420));
        assert!(analytics.ai_accuracy <= 1.0);
        assert!(analytics.sla_compliance_rate <= 1.0);
    }

    #[test]
    fn test_analytics_type_order() {
        let analytics = GrievanceService::default().analytics();
        let keys: Vec<&str> = analytics.by_type.keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec![
                "access",
                "correction",
                "erasure",
                "portability",
                "objection"
            ]
        );
    }

    #[test]
    fn test_available_templates() {
        let service = GrievanceService::default();
        assert_eq!(service.available_templates(), RequestType::ALL.to_vec());
    }
}
