//! Consistency rules for the test case catalog.
//!
//! Services validate inputs and cross-entity references before touching the
//! store, so a rejected request never leaves partial writes behind. Multi-step
//! mutations run inside a single transaction.

pub mod cases;
pub mod catalog;
pub mod runs;
pub mod steps;

use std::collections::HashSet;

use crate::error::{AppError, AppResult, ReferenceScope};

/// Trim a required string field, rejecting it when nothing is left.
pub(crate) fn required(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Turn a failed lookup of a caller-supplied id into a reference error.
///
/// Errors other than `NotFound` pass through untouched.
pub(crate) fn reference(
    entity: &'static str,
    scope: ReferenceScope,
) -> impl Fn(AppError) -> AppError {
    move |err| match err {
        AppError::NotFound { id, .. } => AppError::ReferenceNotFound { entity, id, scope },
        other => other,
    }
}

/// Reject relation sets that name the same target twice.
pub(crate) fn ensure_distinct(ids: &[i32], label: &str) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(AppError::invalid(format!("Duplicate {} id: {}", label, id)));
        }
    }
    Ok(())
}
