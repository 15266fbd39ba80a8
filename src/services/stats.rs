//! Statistics aggregation.
//!
//! Dashboard stats rescan all test cases on demand; nothing is cached or
//! incrementally maintained, so they are correct at read time. Plan stats are
//! a pure fold over the plan's execution list.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CasePriority, CaseStatus, Execution, ExecutionStatus, GlobalStats, PlanStats, TestPlan,
};

/// How many executions the dashboard's recent-activity feed shows.
pub const RECENT_EXECUTIONS_LIMIT: u64 = 5;

/// Compute the dashboard-wide statistics.
///
/// The tally is permissive: rows whose status or priority label is not a
/// recognized value are skipped for that tally rather than failing the whole
/// computation. Recognized labels with zero occurrences are omitted from the
/// maps, not reported as 0.
pub async fn compute_global_stats(pool: &DbPool) -> AppResult<GlobalStats> {
    let rows = pool.list_test_case_rows().await?;

    let mut status_counts: BTreeMap<String, i64> = BTreeMap::new();
    let mut priority_counts: BTreeMap<String, i64> = BTreeMap::new();

    for row in &rows {
        if let Some(status) = CaseStatus::parse(&row.status) {
            *status_counts.entry(status.as_str().to_string()).or_insert(0) += 1;
        }
        if let Some(priority) = CasePriority::parse(&row.priority) {
            *priority_counts
                .entry(priority.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    let total_executions = pool.count_executions().await?;
    let recent_executions = pool.recent_executions(RECENT_EXECUTIONS_LIMIT).await?;

    Ok(GlobalStats {
        total_tests: rows.len() as i64,
        total_executions,
        status_counts,
        priority_counts,
        recent_executions,
    })
}

/// Compute statistics for one test plan from the executions tagged with it.
pub async fn compute_plan_stats(pool: &DbPool, plan_id: Uuid) -> AppResult<PlanStats> {
    let plan = pool
        .get_test_plan(plan_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Test plan".to_string()))?;
    let executions = pool.executions_by_plan(plan_id).await?;

    Ok(fold_plan_stats(&plan, &executions))
}

/// Fold an execution list into per-plan statistics. The success rate is the
/// percentage of passed executions; 0 when there are no executions.
pub fn fold_plan_stats(plan: &TestPlan, executions: &[Execution]) -> PlanStats {
    let mut passed = 0i64;
    let mut failed = 0i64;
    let mut blocked = 0i64;

    for execution in executions {
        match execution.status {
            ExecutionStatus::Passed => passed += 1,
            ExecutionStatus::Failed => failed += 1,
            ExecutionStatus::Blocked => blocked += 1,
            ExecutionStatus::NotRun => {}
        }
    }

    let total_executions = executions.len() as i64;
    let success_rate = if total_executions > 0 {
        passed as f64 * 100.0 / total_executions as f64
    } else {
        0.0
    };

    PlanStats {
        total_executions,
        total_test_cases: plan.test_cases.len() as i64,
        passed,
        failed,
        blocked,
        success_rate,
    }
}
