use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// The data-protection right a grievance invokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Erasure,
    #[default]
    Access,
    Correction,
    Portability,
    Objection,
}

impl RequestType {
    /// All request types in scoring order. Ties during classification go to
    /// the earlier entry.
    pub const ALL: [RequestType; 5] = [
        RequestType::Erasure,
        RequestType::Access,
        RequestType::Correction,
        RequestType::Portability,
        RequestType::Objection,
    ];

    /// Returns the wire label for the request type
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Erasure => "erasure",
            RequestType::Access => "access",
            RequestType::Correction => "correction",
            RequestType::Portability => "portability",
            RequestType::Objection => "objection",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown request type: {}", s))
    }
}

/// Handling priority assigned to a grievance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Whether the compliance queue should expedite this grievance
    pub fn is_elevated(&self) -> bool {
        matches!(self, Priority::High | Priority::Critical)
    }
}

/// Estimated processing effort for a grievance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

/// A grievance submitted by a data principal.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GrievanceRequest {
    /// Email of the data principal.
    #[validate(email)]
    pub data_principal_email: String,
    /// The request type stated by the data principal.
    pub request_type: RequestType,
    /// Free-text description of the grievance.
    pub description: String,
    /// Preferred response language. Passed through untouched.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Result of classifying a grievance description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classified request type.
    pub request_type: RequestType,
    /// Classification confidence, rounded to two decimals.
    pub confidence: f64,
    /// Sub-category of the request within its type.
    pub sub_category: String,
    /// Priority level for handling.
    pub priority: Priority,
    /// Estimated processing complexity.
    pub estimated_complexity: Complexity,
    /// Whether a compliance officer must review the case.
    pub requires_manual_review: bool,
}

impl ClassificationResult {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Type: {} ({:.0}%), Sub: {}, Priority: {}, Complexity: {}, Review: {}",
            self.request_type,
            self.confidence * 100.0,
            self.sub_category,
            self.priority.as_str(),
            self.estimated_complexity.as_str(),
            if self.requires_manual_review {
                "yes"
            } else {
                "no"
            }
        )
    }
}

/// Generated response to a grievance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIResponse {
    /// Unique case identifier, e.g. `GRV-20240115-1A2B3C4D`.
    pub case_id: String,
    /// Templated response text.
    pub response_text: String,
    /// Language of the response, copied from the request.
    pub language: String,
    /// Ordered actions for the compliance team.
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    /// Days until the response is due.
    pub sla_days: u32,
    /// Whether escalation to a compliance officer is required.
    pub escalation_required: bool,
    /// RFC 3339 timestamp of generation.
    pub generated_at: String,
}

/// Classification and response produced together for one grievance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedGrievance {
    pub classification: ClassificationResult,
    pub response: AIResponse,
}

/// Summary figures for grievance processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrievanceAnalytics {
    /// Total grievances processed.
    pub total_processed: u64,
    /// Count by request type, keys in reporting order.
    #[serde(default)]
    pub by_type: Map<String, Value>,
    /// Average resolution time in days.
    pub avg_resolution_days: f64,
    /// Classification accuracy rate (0.0 - 1.0).
    pub ai_accuracy: f64,
    /// Share of grievances answered within SLA (0.0 - 1.0).
    pub sla_compliance_rate: f64,
}

/// Single item for bulk classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkClassifyItem {
    pub description: String,
    #[serde(default)]
    pub stated_type: RequestType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkClassifyRequest {
    pub items: Vec<BulkClassifyItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkClassifyResponse {
    pub classifications: Vec<ClassificationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_type_labels_round_trip() {
        for request_type in RequestType::ALL {
            assert_eq!(request_type.as_str().parse(), Ok(request_type));
        }
        assert!("deletion".parse::<RequestType>().is_err());
        assert!("Erasure".parse::<RequestType>().is_err());
    }

    #[test]
    fn test_grievance_request_defaults_language() {
        let request: GrievanceRequest = serde_json::from_str(
            r#"{"data_principal_email":"a@example.com","request_type":"erasure","description":"delete it"}"#,
        )
        .unwrap();

        assert_eq!(request.language, "en");
        assert_eq!(request.request_type, RequestType::Erasure);
    }

    #[test]
    fn test_grievance_request_rejects_unknown_type() {
        let parsed: Result<GrievanceRequest, _> = serde_json::from_str(
            r#"{"data_principal_email":"a@example.com","request_type":"deletion","description":"x"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_email_validation() {
        let mut request = GrievanceRequest {
            data_principal_email: "principal@example.com".to_string(),
            request_type: RequestType::Access,
            description: "what data do you have".to_string(),
            language: "en".to_string(),
        };
        assert!(request.validate().is_ok());

        request.data_principal_email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bulk_item_defaults_to_access() {
        let item: BulkClassifyItem = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert_eq!(item.stated_type, RequestType::Access);
    }

    #[test]
    fn test_elevated_priorities() {
        assert!(Priority::Critical.is_elevated());
        assert!(Priority::High.is_elevated());
        assert!(!Priority::Medium.is_elevated());
        assert!(!Priority::Low.is_elevated());
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let labels = [
            serde_json::to_value(Priority::Critical).unwrap(),
            serde_json::to_value(Complexity::Moderate).unwrap(),
            serde_json::to_value(RequestType::Portability).unwrap(),
        ];
        assert_eq!(labels, ["critical", "moderate", "portability"]);
    }
}
