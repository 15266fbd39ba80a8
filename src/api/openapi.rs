//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hybex QA Server",
        version = "0.3.0",
        description = "Test case management server: test cases with sequential display IDs, execution tracking, test plans, project rollups, and access request approval"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Auth
        api::auth::login,
        // Test cases
        api::test_cases::create_test_case,
        api::test_cases::list_test_cases,
        api::test_cases::get_test_case,
        api::test_cases::update_test_case,
        api::test_cases::delete_test_case,
        api::test_cases::get_test_case_executions,
        // Executions
        api::executions::record_execution,
        // Test plans
        api::test_plans::create_test_plan,
        api::test_plans::list_test_plans,
        api::test_plans::get_test_plan,
        api::test_plans::update_test_plan,
        api::test_plans::delete_test_plan,
        api::test_plans::get_test_plan_stats,
        // Projects
        api::projects::create_project,
        api::projects::list_projects,
        api::projects::get_project,
        api::projects::update_project,
        // Stats
        api::stats::get_dashboard_stats,
        // Access requests
        api::access_requests::submit_request,
        api::access_requests::list_requests,
        api::access_requests::approve_request,
        api::access_requests::reject_request,
        // Admin
        api::admin::reset_data,
        api::admin::list_users,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Identity
            models::Identity,
            // Test cases
            models::CaseType,
            models::CasePriority,
            models::CaseStatus,
            models::TestStep,
            models::TestCase,
            models::NewTestCase,
            models::UpdateTestCase,
            // Executions
            models::ExecutionStatus,
            models::Execution,
            models::NewExecution,
            // Test plans
            models::PlanStatus,
            models::PlanCaseSpec,
            models::TestPlan,
            models::NewTestPlan,
            models::UpdateTestPlan,
            // Projects
            models::Project,
            models::NewProject,
            models::UpdateProject,
            // Stats
            models::GlobalStats,
            models::PlanStats,
            // Users and access requests
            models::User,
            models::LoginRequest,
            models::RequestStatus,
            models::AccessRequest,
            models::NewAccessRequest,
            api::access_requests::RejectRequest,
            api::access_requests::ApproveResponse,
            api::admin::ResetRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Sign-in"),
        (name = "Test Cases", description = "Test case management"),
        (name = "Executions", description = "Execution recording"),
        (name = "Test Plans", description = "Test plan management and stats"),
        (name = "Projects", description = "Projects and execution rollups"),
        (name = "Stats", description = "Dashboard statistics"),
        (name = "Access Requests", description = "Self-service signup and approval"),
        (name = "Admin", description = "Privileged operations")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add the admin key security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new(
                            crate::config::ADMIN_KEY_HEADER,
                        ),
                    ),
                ),
            );
        }
    }
}
