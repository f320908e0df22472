//! Keyword vocabulary for grievance classification.
//!
//! Fixed trigger phrases per request type plus the priority, legal and
//! sensitivity term lists. All phrases are lowercase because they are matched
//! against lowercased descriptions.

use std::sync::{Arc, LazyLock};

use crate::models::RequestType;

const ERASURE_KEYWORDS: &[&str] = &[
    "delete",
    "erase",
    "remove",
    "forget",
    "wipe",
    "destroy",
    "eliminate",
    "purge",
    "deletion",
    "deleted",
];

const ACCESS_KEYWORDS: &[&str] = &[
    "access",
    "view",
    "see",
    "know",
    "copy",
    "obtain",
    "provide",
    "share my data",
    "what data",
    "my information",
    "data you have",
];

const CORRECTION_KEYWORDS: &[&str] = &[
    "correct",
    "update",
    "fix",
    "change",
    "amend",
    "modify",
    "wrong",
    "inaccurate",
    "incorrect",
    "error",
    "mistake",
];

const PORTABILITY_KEYWORDS: &[&str] = &[
    "transfer",
    "port",
    "move",
    "migrate",
    "export",
    "download",
    "portability",
    "take my data",
    "data export",
];

const OBJECTION_KEYWORDS: &[&str] = &[
    "object",
    "stop",
    "cease",
    "opt out",
    "unsubscribe",
    "withdraw",
    "revoke",
    "consent",
    "withdraw consent",
    "no longer want",
];

/// Priority tiers, highest precedence first
const CRITICAL_KEYWORDS: &[&str] = &["urgent", "immediately", "breach", "children", "child"];
const HIGH_KEYWORDS: &[&str] = &[
    "legal",
    "complaint",
    "dpb",
    "data protection board",
    "sue",
    "court",
];
const LOW_KEYWORDS: &[&str] = &["general inquiry", "just asking", "curious", "information"];

/// Terms that make a grievance legally involved, and therefore complex
const LEGAL_KEYWORDS: &[&str] = &["legal", "court", "lawyer", "dpb", "complaint"];

/// Terms that always send a grievance to a compliance officer
const MANUAL_REVIEW_KEYWORDS: &[&str] = &[
    "legal action",
    "dpb",
    "data protection board",
    "children",
    "child's data",
];

/// Sub-category label when the winning type has no rule
pub const GENERAL_SUB_CATEGORY: &str = "general";

/// Secondary cues per request type: first matching cue set wins, otherwise the
/// type's fallback label applies
const SUB_CATEGORY_CUES: &[(RequestType, &[(&[&str], &str)], &str)] = &[
    (
        RequestType::Erasure,
        &[
            (&["account", "profile"], "account_deletion"),
            (&["specific", "certain", "some"], "partial_erasure"),
        ],
        "full_erasure",
    ),
    (
        RequestType::Access,
        &[(&["export", "copy"], "data_export_request")],
        "data_access_request",
    ),
    (
        RequestType::Correction,
        &[(&["name", "address"], "personal_details_correction")],
        "data_correction",
    ),
    (RequestType::Portability, &[], "data_portability"),
    (
        RequestType::Objection,
        &[(&["marketing", "email"], "marketing_objection")],
        "processing_objection",
    ),
];

static STANDARD_VOCABULARY: LazyLock<Arc<Vocabulary>> = LazyLock::new(|| {
    Arc::new(Vocabulary {
        request_types: KeywordTable::new(vec![
            (RequestType::Erasure, owned(ERASURE_KEYWORDS)),
            (RequestType::Access, owned(ACCESS_KEYWORDS)),
            (RequestType::Correction, owned(CORRECTION_KEYWORDS)),
            (RequestType::Portability, owned(PORTABILITY_KEYWORDS)),
            (RequestType::Objection, owned(OBJECTION_KEYWORDS)),
        ]),
        priority: PriorityTiers {
            critical: owned(CRITICAL_KEYWORDS),
            high: owned(HIGH_KEYWORDS),
            low: owned(LOW_KEYWORDS),
        },
        legal_terms: owned(LEGAL_KEYWORDS),
        review_terms: owned(MANUAL_REVIEW_KEYWORDS),
        sub_categories: SUB_CATEGORY_CUES
            .iter()
            .map(|(request_type, cues, fallback)| SubCategoryRule {
                request_type: *request_type,
                cues: cues
                    .iter()
                    .map(|(words, label)| (owned(words), label.to_string()))
                    .collect(),
                fallback: fallback.to_string(),
            })
            .collect(),
    })
});

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

/// Ordered mapping from request type to its trigger phrases.
///
/// Entry order is significant: it breaks ties between equal scores.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<(RequestType, Vec<String>)>,
}

impl KeywordTable {
    pub fn new(entries: Vec<(RequestType, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Iterate entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (RequestType, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(t, phrases)| (*t, phrases.as_slice()))
    }

    pub fn phrases(&self, request_type: RequestType) -> Option<&[String]> {
        self.iter()
            .find(|(t, _)| *t == request_type)
            .map(|(_, phrases)| phrases)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Priority keyword tiers. Anything matching none of them is medium.
#[derive(Debug, Clone, Default)]
pub struct PriorityTiers {
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub low: Vec<String>,
}

/// Secondary keyword checks that refine a request type into a sub-category.
#[derive(Debug, Clone)]
pub struct SubCategoryRule {
    pub request_type: RequestType,
    /// Ordered (cue words, label) pairs; any cue word present selects the label
    pub cues: Vec<(Vec<String>, String)>,
    pub fallback: String,
}

impl SubCategoryRule {
    /// Resolve the label for a normalized description
    pub fn resolve(&self, text: &str) -> &str {
        self.cues
            .iter()
            .find(|(words, _)| words.iter().any(|w| text.contains(w)))
            .map(|(_, label)| label.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

/// Complete keyword configuration consumed by the classifier.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Per-type trigger phrases used for scoring
    pub request_types: KeywordTable,
    /// Priority escalation tiers
    pub priority: PriorityTiers,
    /// Terms that force a complex estimate
    pub legal_terms: Vec<String>,
    /// Terms that force manual review regardless of confidence
    pub review_terms: Vec<String>,
    /// Sub-category rules, at most one per request type
    pub sub_categories: Vec<SubCategoryRule>,
}

impl Vocabulary {
    /// The built-in vocabulary, shared process-wide
    pub fn standard() -> Arc<Vocabulary> {
        Arc::clone(&STANDARD_VOCABULARY)
    }

    /// Sub-category label for a winning type, `general` when no rule exists
    pub fn sub_category(&self, request_type: RequestType, text: &str) -> String {
        self.sub_categories
            .iter()
            .find(|rule| rule.request_type == request_type)
            .map(|rule| rule.resolve(text))
            .unwrap_or(GENERAL_SUB_CATEGORY)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_order() {
        let vocabulary = Vocabulary::standard();
        let order: Vec<RequestType> = vocabulary.request_types.iter().map(|(t, _)| t).collect();

        assert_eq!(order, RequestType::ALL.to_vec());
    }

    #[test]
    fn test_standard_table_sizes() {
        let vocabulary = Vocabulary::standard();
        let table = &vocabulary.request_types;

        let expected = [
            (RequestType::Erasure, 10),
            (RequestType::Access, 11),
            (RequestType::Correction, 11),
            (RequestType::Portability, 9),
            (RequestType::Objection, 10),
        ];

        for (request_type, size) in expected {
            let count = table.phrases(request_type).map(<[_]>::len);
            assert_eq!(count, Some(size), "phrase count for {}", request_type);
        }
    }

    #[test]
    fn test_all_phrases_lowercase() {
        let vocabulary = Vocabulary::standard();
        let all_terms = vocabulary
            .request_types
            .iter()
            .flat_map(|(_, phrases)| phrases.iter())
            .chain(vocabulary.priority.critical.iter())
            .chain(vocabulary.priority.high.iter())
            .chain(vocabulary.priority.low.iter())
            .chain(vocabulary.legal_terms.iter())
            .chain(vocabulary.review_terms.iter());

        for term in all_terms {
            assert_eq!(term, &term.to_lowercase(), "'{}' is not lowercase", term);
        }
    }

    #[test]
    fn test_standard_is_shared() {
        let a = Vocabulary::standard();
        let b = Vocabulary::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_sub_category_cue_precedence() {
        let vocabulary = Vocabulary::standard();

        // account beats the partial-erasure cues
        assert_eq!(
            vocabulary.sub_category(RequestType::Erasure, "delete some of my account data"),
            "account_deletion"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Erasure, "delete certain photos"),
            "partial_erasure"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Erasure, "delete everything"),
            "full_erasure"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Access, "send me a copy"),
            "data_export_request"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Correction, "my address is wrong"),
            "personal_details_correction"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Portability, "move my data"),
            "data_portability"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Objection, "stop the email campaign"),
            "marketing_objection"
        );
        assert_eq!(
            vocabulary.sub_category(RequestType::Objection, "stop profiling me"),
            "processing_objection"
        );
    }

    #[test]
    fn test_sub_category_without_rule_is_general() {
        let vocabulary = Vocabulary::default();
        assert_eq!(
            vocabulary.sub_category(RequestType::Erasure, "delete my account"),
            GENERAL_SUB_CATEGORY
        );
    }

    #[test]
    fn test_empty_table() {
        let table = KeywordTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.phrases(RequestType::Access).is_none());
    }
}
