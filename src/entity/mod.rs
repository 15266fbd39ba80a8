//! SeaORM entity definitions for persisted records.

pub mod access_request;
pub mod counter;
pub mod execution;
pub mod project;
pub mod test_case;
pub mod test_plan;
pub mod user;
