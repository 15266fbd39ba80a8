//! Aggregated statistics models for dashboards and reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::execution::Execution;

/// Dashboard-wide statistics computed by a full rescan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_tests: i64,
    pub total_executions: i64,
    /// Counts keyed by recognized status label; unrecognized labels are dropped.
    pub status_counts: BTreeMap<String, i64>,
    /// Counts keyed by recognized priority label; unrecognized labels are dropped.
    pub priority_counts: BTreeMap<String, i64>,
    /// The most recent executions, newest first, capped at 5.
    pub recent_executions: Vec<Execution>,
}

/// Per-plan statistics folded from an execution list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub total_executions: i64,
    pub total_test_cases: i64,
    pub passed: i64,
    pub failed: i64,
    pub blocked: i64,
    /// `passed / totalExecutions * 100`; 0 when there are no executions.
    pub success_rate: f64,
}
