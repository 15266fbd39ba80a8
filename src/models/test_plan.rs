//! Test plan models.
//!
//! A plan owns an embedded ordered list of lightweight case specs; these are
//! not [`crate::models::TestCase`] records and carry no sequential IDs. Plan
//! edits replace the embedded list wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::identity::Identity;
use crate::models::test_case::CasePriority;

/// Lifecycle status of a test plan definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Draft,
    Active,
    Deprecated,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Deprecated => "deprecated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "active" => Some(Self::Active),
            "deprecated" => Some(Self::Deprecated),
            _ => None,
        }
    }
}

/// One embedded case spec inside a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanCaseSpec {
    pub description: String,
    pub steps: Vec<String>,
    pub expected_result: String,
}

/// A test plan as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: CasePriority,
    pub status: PlanStatus,
    pub test_cases: Vec<PlanCaseSpec>,
    pub created_by: Identity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a test plan.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestPlan {
    pub title: String,
    pub description: String,
    pub priority: CasePriority,
    pub status: PlanStatus,
    #[serde(default)]
    pub test_cases: Vec<PlanCaseSpec>,
    pub created_by: Identity,
}

/// Partial update for a test plan. A provided `testCases` list replaces the
/// embedded specs entirely.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestPlan {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<CasePriority>,
    pub status: Option<PlanStatus>,
    pub test_cases: Option<Vec<PlanCaseSpec>>,
}
