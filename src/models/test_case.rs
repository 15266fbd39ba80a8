//! Test case models and enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::execution::ExecutionStatus;
use crate::models::identity::Identity;

/// Category of a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    Functional,
    Integration,
    Performance,
    Security,
    Usability,
}

impl CaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::Integration => "integration",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Usability => "usability",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "functional" => Some(Self::Functional),
            "integration" => Some(Self::Integration),
            "performance" => Some(Self::Performance),
            "security" => Some(Self::Security),
            "usability" => Some(Self::Usability),
            _ => None,
        }
    }
}

/// Priority of a test case or plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CasePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl CasePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Status carried on a test case.
///
/// A freshly created case is `Pending`; every recorded execution afterwards
/// overwrites the case status with the execution outcome. The conflation of
/// definition status and last-run status is deliberate and kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CaseStatus {
    Pending,
    Passed,
    Failed,
    Blocked,
    NotRun,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Blocked => "Blocked",
            Self::NotRun => "NotRun",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Passed" => Some(Self::Passed),
            "Failed" => Some(Self::Failed),
            "Blocked" => Some(Self::Blocked),
            "NotRun" => Some(Self::NotRun),
            _ => None,
        }
    }
}

impl From<ExecutionStatus> for CaseStatus {
    fn from(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Passed => Self::Passed,
            ExecutionStatus::Failed => Self::Failed,
            ExecutionStatus::Blocked => Self::Blocked,
            ExecutionStatus::NotRun => Self::NotRun,
        }
    }
}

/// One ordered step of a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub description: String,
    pub expected_result: String,
}

/// A full test case record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: Uuid,
    /// Human-readable display ID, e.g. `TE/0001`. Immutable once assigned.
    pub sequential_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub case_type: CaseType,
    pub priority: CasePriority,
    pub status: CaseStatus,
    pub steps: Vec<TestStep>,
    pub prerequisites: Vec<String>,
    pub assigned_to: String,
    pub created_by: Identity,
    pub updated_by: Option<Identity>,
    pub last_executed_by: Option<Identity>,
    pub last_run: Option<DateTime<Utc>>,
    pub last_execution_status: Option<ExecutionStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a test case.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestCase {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub case_type: CaseType,
    pub priority: CasePriority,
    pub steps: Vec<TestStep>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub assigned_to: String,
    pub created_by: Identity,
}

/// Partial update; provided fields are merged shallowly over existing state.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestCase {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub case_type: Option<CaseType>,
    pub priority: Option<CasePriority>,
    pub steps: Option<Vec<TestStep>>,
    pub prerequisites: Option<Vec<String>>,
    pub assigned_to: Option<String>,
    pub updated_by: Identity,
}

/// Conjunctive equality filters for listing test cases.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseFilter {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub case_type: Option<String>,
    pub priority: Option<String>,
}
