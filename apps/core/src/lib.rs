//! Grievance Bot backend.
//!
//! Classifies data-protection grievances and generates DPDP Act compliant
//! responses. The `grievance` module is the pure core; `api` exposes it over
//! HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod grievance;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;
