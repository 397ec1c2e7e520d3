//! Shared helpers for the fireworks backend test suites.
//!
//! Provides race-safe logging initialization and assertions for the
//! problem-details error contract.

pub mod logging;
pub mod problem_details;

pub use problem_details::{
    assert_problem_details_from_parts, assert_problem_details_from_service_response,
};
