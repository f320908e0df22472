//! Grievance classification using keyword scoring.
//!
//! Each request type is scored by how many of its trigger phrases appear in
//! the description. No ML model required - plain substring and token matching.

use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::triage;
use super::vocabulary::Vocabulary;
use crate::models::{ClassificationResult, RequestType};

/// Boost applied to the type the data principal stated
const STATED_TYPE_BOOST: f64 = 0.2;

/// Confidence used when the vocabulary has no request types to score
const FALLBACK_CONFIDENCE: f64 = 0.4;

// NOTE: expect() is acceptable here: the pattern is a literal
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("Invalid regex: word pattern"));

/// A description lowercased and trimmed, with its word tokens
#[derive(Debug, Clone)]
pub struct NormalizedText {
    text: String,
    tokens: HashSet<String>,
}

impl NormalizedText {
    pub fn new(description: &str) -> Self {
        let text = description.to_lowercase().trim().to_string();
        let tokens = WORD_PATTERN
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();

        Self { text, tokens }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    /// Substring-or-token match used for request-type scoring
    pub fn matches_phrase(&self, phrase: &str) -> bool {
        self.text.contains(phrase) || self.tokens.contains(phrase)
    }

    /// Plain substring match against any of the terms
    pub fn contains_any(&self, terms: &[String]) -> bool {
        terms.iter().any(|term| self.text.contains(term.as_str()))
    }
}

/// Per-type scores in vocabulary order
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScores {
    scores: Vec<(RequestType, f64)>,
}

impl TypeScores {
    pub fn get(&self, request_type: RequestType) -> Option<f64> {
        self.scores
            .iter()
            .find(|(t, _)| *t == request_type)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RequestType, f64)> + '_ {
        self.scores.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Highest-scoring type. On ties the earliest entry wins.
    pub fn best(&self) -> Option<(RequestType, f64)> {
        let mut best: Option<(RequestType, f64)> = None;
        for (request_type, score) in self.iter() {
            let better = match best {
                Some((_, top)) => score > top,
                None => true,
            };
            if better {
                best = Some((request_type, score));
            }
        }
        best
    }

    fn boost(&mut self, request_type: RequestType, amount: f64) {
        if let Some((_, score)) = self.scores.iter_mut().find(|(t, _)| *t == request_type) {
            *score = (*score + amount).min(1.0);
        }
    }
}

/// Keyword-based grievance classifier
#[derive(Debug, Clone)]
pub struct GrievanceClassifier {
    vocabulary: Arc<Vocabulary>,
}

impl Default for GrievanceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GrievanceClassifier {
    /// Create a classifier over the built-in vocabulary
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::standard())
    }

    /// Create a classifier over a custom vocabulary
    pub fn with_vocabulary(vocabulary: Arc<Vocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Score every request type against the text.
    ///
    /// A type reaches 1.0 once roughly half its phrases match: the divisor is
    /// `max(1, phrase_count / 2)`.
    pub fn score(&self, text: &NormalizedText) -> TypeScores {
        let scores = self
            .vocabulary
            .request_types
            .iter()
            .map(|(request_type, phrases)| {
                let matches = phrases.iter().filter(|p| text.matches_phrase(p)).count();
                let divisor = (phrases.len() / 2).max(1);
                (request_type, (matches as f64 / divisor as f64).min(1.0))
            })
            .collect();

        TypeScores { scores }
    }

    /// Classify a grievance description.
    ///
    /// `stated_type` is the label the data principal chose. A valid label
    /// boosts that type's score; anything else is ignored. Never fails.
    pub fn classify(&self, description: &str, stated_type: &str) -> ClassificationResult {
        let text = NormalizedText::new(description);
        let stated = stated_type.parse::<RequestType>().ok();

        let mut scores = self.score(&text);
        if let Some(stated) = stated {
            scores.boost(stated, STATED_TYPE_BOOST);
        }

        let (request_type, confidence) = scores
            .best()
            .unwrap_or((stated.unwrap_or_default(), FALLBACK_CONFIDENCE));

        let result = ClassificationResult {
            request_type,
            confidence: round2(confidence),
            sub_category: self.vocabulary.sub_category(request_type, text.as_str()),
            priority: triage::priority(&text, &self.vocabulary.priority),
            estimated_complexity: triage::complexity(
                &text,
                &scores,
                request_type,
                &self.vocabulary.legal_terms,
            ),
            requires_manual_review: triage::requires_manual_review(
                &text,
                confidence,
                &self.vocabulary.review_terms,
            ),
        };

        debug!(stated_type, "{}", result.summary());
        result
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
