//! Domain models and API DTOs for the Hybex QA server.
//!
//! All wire-facing structs serialize with camelCase field names; these names
//! are the external contract with stored data and the SPA client
//! (`sequentialId`, `lastRun`, `lastExecutionStatus`, `executedAt`, ...).

pub mod access_request;
pub mod execution;
pub mod identity;
pub mod project;
pub mod stats;
pub mod test_case;
pub mod test_plan;
pub mod user;

// Re-export commonly used types
pub use access_request::{AccessRequest, NewAccessRequest, RequestStatus};
pub use execution::{Execution, ExecutionStatus, NewExecution};
pub use identity::Identity;
pub use project::{NewProject, Project, UpdateProject};
pub use stats::{GlobalStats, PlanStats};
pub use test_case::{
    CasePriority, CaseStatus, CaseType, NewTestCase, TestCase, TestCaseFilter, TestStep,
    UpdateTestCase,
};
pub use test_plan::{NewTestPlan, PlanCaseSpec, PlanStatus, TestPlan, UpdateTestPlan};
pub use user::{LoginRequest, User};
