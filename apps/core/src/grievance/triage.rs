//! Priority, complexity and manual-review derivation.
//!
//! Each check reads the normalized description independently. A keyword shared
//! by several lists (e.g. "legal") counts for every list it appears in.

use super::classifier::{NormalizedText, TypeScores};
use super::vocabulary::PriorityTiers;
use crate::models::{Complexity, Priority, RequestType};

/// A non-winning type above this score signals a multi-intent grievance
const MULTI_INTENT_THRESHOLD: f64 = 0.3;

/// Winner score at or above which a grievance is simple
const SIMPLE_THRESHOLD: f64 = 0.7;

/// Confidence below which a compliance officer must review
const REVIEW_CONFIDENCE_FLOOR: f64 = 0.6;

/// First matching tier wins: critical, then high, then low. Default medium.
pub fn priority(text: &NormalizedText, tiers: &PriorityTiers) -> Priority {
    if text.contains_any(&tiers.critical) {
        Priority::Critical
    } else if text.contains_any(&tiers.high) {
        Priority::High
    } else if text.contains_any(&tiers.low) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

pub fn complexity(
    text: &NormalizedText,
    scores: &TypeScores,
    winner: RequestType,
    legal_terms: &[String],
) -> Complexity {
    let multi_intent = scores
        .iter()
        .any(|(t, score)| t != winner && score > MULTI_INTENT_THRESHOLD);

    if multi_intent || text.contains_any(legal_terms) {
        return Complexity::Complex;
    }

    if scores.get(winner).unwrap_or(0.0) >= SIMPLE_THRESHOLD {
        Complexity::Simple
    } else {
        Complexity::Moderate
    }
}

/// `confidence` is the unrounded winning score
pub fn requires_manual_review(
    text: &NormalizedText,
    confidence: f64,
    review_terms: &[String],
) -> bool {
    confidence < REVIEW_CONFIDENCE_FLOOR || text.contains_any(review_terms)
}
