//! Business logic services.

pub mod access_requests;
pub mod admin;
pub mod auth;
pub mod executions;
pub mod password;
pub mod sequence;
pub mod stats;
pub mod test_cases;
pub mod test_plans;

pub use admin::RESET_CONFIRMATION_PHRASE;
pub use auth::{MASTER_ADMIN_EMAIL, MASTER_ADMIN_PASSWORD};
pub use sequence::TEST_CASE_COUNTER;
pub use stats::RECENT_EXECUTIONS_LIMIT;
