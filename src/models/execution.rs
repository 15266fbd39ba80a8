//! Execution models: one recorded outcome of running a test case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::identity::Identity;

/// Outcome of a single execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExecutionStatus {
    Passed,
    Failed,
    Blocked,
    NotRun,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Blocked => "Blocked",
            Self::NotRun => "NotRun",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Passed" => Some(Self::Passed),
            "Failed" => Some(Self::Failed),
            "Blocked" => Some(Self::Blocked),
            "NotRun" => Some(Self::NotRun),
            _ => None,
        }
    }
}

/// A recorded execution as returned by the API. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub id: Uuid,
    pub test_id: Uuid,
    pub status: ExecutionStatus,
    pub observations: Option<String>,
    pub executed_by: Identity,
    pub project_id: Option<Uuid>,
    pub test_plan_id: Option<Uuid>,
    pub executed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when recording an execution.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExecution {
    pub test_id: Uuid,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub observations: Option<String>,
    pub executed_by: Identity,
    #[serde(default)]
    pub project_id: Option<Uuid>,
    #[serde(default)]
    pub test_plan_id: Option<Uuid>,
}
