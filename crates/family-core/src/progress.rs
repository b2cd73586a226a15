//! Derived progress indicators for Tribs totals
//!
//! Everything here is pure integer arithmetic: no floats, so no NaN or
//! Infinity can reach a progress bar.
//!
//! # Rounding
//!
//! Percentages round to the nearest integer with halves rounded up
//! (`2.5 → 3`). Contribution shares use largest-remainder allocation, which is
//! the same rounding constrained so that the shares of a non-empty family add
//! up to exactly 100.
//!
//! # Zero denominators
//!
//! A `max_tribs` or goal `target` of zero is a division guard condition. The
//! infallible functions substitute [`GUARD_DENOMINATOR`] and carry on; use
//! [`checked_child_progress`] when the caller needs to know.

use serde::{Deserialize, Serialize};

/// Upper bound of every percentage produced by this module
pub const MAX_PERCENT: u8 = 100;

/// Denominator substituted when a zero target is supplied
pub const GUARD_DENOMINATOR: u32 = 1;

/// Progress computation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// A ratio was requested against a non-positive denominator
    #[error("Division guard: denominator must be positive, got {denominator}")]
    DivisionGuard {
        /// The rejected denominator
        denominator: u32,
    },
}

/// Result type for progress operations
pub type Result<T> = std::result::Result<T, ProgressError>;

// =============================================================================
// Percentages
// =============================================================================

/// `round(numerator / denominator * 100)`, clamped to `[0, 100]`.
///
/// The denominator must be non-zero.
fn rounded_percent(numerator: u32, denominator: u32) -> u8 {
    debug_assert!(denominator > 0);
    let numerator = u64::from(numerator);
    let denominator = u64::from(denominator);
    let percent = (numerator * 100 + denominator / 2) / denominator;
    percent.min(u64::from(MAX_PERCENT)) as u8
}

fn guarded(denominator: u32, what: &'static str) -> u32 {
    if denominator == 0 {
        tracing::debug!(what, "zero denominator, substituting {}", GUARD_DENOMINATOR);
        GUARD_DENOMINATOR
    } else {
        denominator
    }
}

/// Percentage of a member's personal target reached
///
/// Totals above the target clamp to 100. A zero target is guarded: the result
/// is 0 for a zero total and 100 otherwise.
pub fn child_progress(tribs: u32, max_tribs: u32) -> u8 {
    rounded_percent(tribs, guarded(max_tribs, "max_tribs"))
}

/// Like [`child_progress`], but reports a zero target instead of guarding it
pub fn checked_child_progress(tribs: u32, max_tribs: u32) -> Result<u8> {
    if max_tribs == 0 {
        return Err(ProgressError::DivisionGuard {
            denominator: max_tribs,
        });
    }
    Ok(rounded_percent(tribs, max_tribs))
}

/// Progress toward the shared family goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Percentage reached, 0-100
    pub percentage: u8,
    /// Tribs still missing, never negative
    pub remaining: u32,
}

impl GoalProgress {
    /// Whether the goal has been reached
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Compute the family goal percentage and remaining Tribs
pub fn family_goal_progress(current: u32, target: u32) -> GoalProgress {
    GoalProgress {
        percentage: rounded_percent(current, guarded(target, "goal_target")),
        remaining: target.saturating_sub(current),
    }
}

// =============================================================================
// Contribution Shares
// =============================================================================

/// Input for [`contribution_shares`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTribs {
    /// Member identifier
    pub id: String,
    /// Tribs earned by the member
    pub tribs: u32,
}

impl MemberTribs {
    /// Create a new entry
    pub fn new(id: impl Into<String>, tribs: u32) -> Self {
        Self {
            id: id.into(),
            tribs,
        }
    }
}

/// One member's share of the family total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionShare {
    /// Member identifier
    pub id: String,
    /// Share of the family total, 0-100
    pub share_percent: u8,
}

/// Split 100% across members in proportion to their Tribs
///
/// Output order matches input order. With a zero total every share is 0;
/// otherwise the shares sum to exactly 100. Leftover points go to the largest
/// remainders, earlier members first on ties.
pub fn contribution_shares(members: &[MemberTribs]) -> Vec<ContributionShare> {
    let total: u64 = members.iter().map(|m| u64::from(m.tribs)).sum();

    if total == 0 {
        return members
            .iter()
            .map(|m| ContributionShare {
                id: m.id.clone(),
                share_percent: 0,
            })
            .collect();
    }

    let scaled: Vec<(u64, u64)> = members
        .iter()
        .map(|m| {
            let numerator = u64::from(m.tribs) * 100;
            (numerator / total, numerator % total)
        })
        .collect();

    let floor_sum: u64 = scaled.iter().map(|(quota, _)| quota).sum();
    let leftover = (100 - floor_sum) as usize;

    let mut by_remainder: Vec<usize> = (0..scaled.len()).collect();
    // Stable sort keeps input order among equal remainders
    by_remainder.sort_by(|&a, &b| scaled[b].1.cmp(&scaled[a].1));

    let mut shares: Vec<u64> = scaled.iter().map(|(quota, _)| *quota).collect();
    for &index in by_remainder.iter().take(leftover) {
        shares[index] += 1;
    }

    members
        .iter()
        .zip(shares)
        .map(|(m, share)| ContributionShare {
            id: m.id.clone(),
            share_percent: share as u8,
        })
        .collect()
}
