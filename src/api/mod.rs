//! API endpoint modules.

pub mod access_requests;
pub mod admin;
pub mod auth;
pub mod executions;
pub mod health;
pub mod openapi;
pub mod projects;
pub mod stats;
pub mod test_cases;
pub mod test_plans;

pub use access_requests::configure_routes as configure_access_request_routes;
pub use admin::configure_routes as configure_admin_routes;
pub use auth::configure_routes as configure_auth_routes;
pub use executions::configure_routes as configure_execution_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use projects::configure_routes as configure_project_routes;
pub use stats::configure_routes as configure_stats_routes;
pub use test_cases::configure_routes as configure_test_case_routes;
pub use test_plans::configure_routes as configure_test_plan_routes;
