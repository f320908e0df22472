//! Case identifiers and the clock/entropy source behind them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Prefix shared by every grievance case id
pub const CASE_PREFIX: &str = "GRV";

/// Length of the random hex suffix
pub const SUFFIX_LEN: usize = 8;

/// Source of the current time and of random case-id suffixes.
///
/// The responder never reads the clock or RNG directly, so tests can pin both.
pub trait CaseSource: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Random suffix: `SUFFIX_LEN` uppercase hex characters
    fn random_suffix(&self) -> String;
}

/// Production source: system clock and v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSource;

impl CaseSource for SystemSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn random_suffix(&self) -> String {
        let mut hex = Uuid::new_v4().simple().to_string();
        hex.truncate(SUFFIX_LEN);
        hex.to_uppercase()
    }
}

/// Build a case id such as `GRV-20240115-1A2B3C4D`
pub fn format_case_id(at: DateTime<Utc>, suffix: &str) -> String {
    format!("{}-{}-{}", CASE_PREFIX, at.format("%Y%m%d"), suffix)
}

/// Check that a string has the case-id shape
pub fn is_valid_case_id(case_id: &str) -> bool {
    let mut parts = case_id.split('-');
    let (Some(prefix), Some(date), Some(suffix), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == CASE_PREFIX
        && date.len() == 8
        && date.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}
