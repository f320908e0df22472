//! Test Module
//!
//! Cross-module test suite for the Grievance Bot backend.
//!
//! ## Test Categories
//! - `classifier_tests`: Scoring, stated-type boost, priority, complexity, review flag
//! - `responder_tests`: Templates, action ordering, SLA, case ids
//! - `api_tests`: HTTP routes driven in-process through the axum router
