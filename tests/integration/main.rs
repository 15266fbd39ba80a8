//! Integration test suite.
//!
//! Each test runs against its own file-backed SQLite database in a temp
//! directory, created and migrated by the helpers module.
//!
//! Run with: cargo test --test integration

mod test_helpers;

mod access_request_tests;
mod api_tests;
mod execution_tests;
mod stats_tests;
mod test_case_tests;
