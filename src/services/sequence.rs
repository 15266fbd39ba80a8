//! Sequential display-ID allocation.
//!
//! Display IDs (`TE/0001`) are human-readable identifiers distinct from the
//! opaque record UUIDs; they appear in the UI and in reports. Allocation is
//! backed by the atomic counter increment in [`crate::db::counters`], so IDs
//! handed to concurrent callers are pairwise distinct and strictly increasing.

use crate::db::DbPool;
use crate::error::AppResult;

/// Counter name for test case display IDs.
pub const TEST_CASE_COUNTER: &str = "tests";

/// Display-ID prefix for test cases.
const TEST_CASE_PREFIX: &str = "TE";

/// Minimum number of digits in the numeric part. Values beyond 9999 are not
/// truncated; the string simply widens.
const DISPLAY_ID_WIDTH: usize = 4;

/// Format a counter value as a display ID: prefix, slash, zero-padded value.
pub fn format_display_id(prefix: &str, value: i64) -> String {
    format!("{}/{:0>width$}", prefix, value, width = DISPLAY_ID_WIDTH)
}

/// Allocate the next display ID for the given counter and prefix.
pub async fn allocate(pool: &DbPool, counter: &str, prefix: &str) -> AppResult<String> {
    let value = pool.next_counter_value(counter).await?;
    Ok(format_display_id(prefix, value))
}

/// Allocate the next test case display ID (`TE/0001`, `TE/0002`, ...).
pub async fn allocate_test_case_id(pool: &DbPool) -> AppResult<String> {
    allocate(pool, TEST_CASE_COUNTER, TEST_CASE_PREFIX).await
}
