//! Reward ladders and "next reward" messages
//!
//! A ladder is a list of rungs ascending by threshold. A rung counts as
//! cleared once a member's points reach its threshold; the next target is the
//! first rung whose threshold is strictly greater than the current points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single reward on the ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRung {
    /// Points needed to unlock the reward
    pub threshold: u32,
    /// Human-readable reward name
    pub label: String,
}

impl RewardRung {
    /// Create a new rung
    pub fn new(threshold: u32, label: impl Into<String>) -> Self {
        Self {
            threshold,
            label: label.into(),
        }
    }
}

/// Outcome of a next-reward lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NextReward {
    /// The next rung still to be reached
    Next {
        /// Reward label
        label: String,
        /// Points still needed
        remaining: u32,
    },
    /// Every rung has been reached
    AllCleared,
}

impl NextReward {
    /// Check whether every rung has been cleared
    pub fn is_all_cleared(&self) -> bool {
        matches!(self, NextReward::AllCleared)
    }

    /// Points still needed, zero when everything is cleared
    pub fn remaining(&self) -> u32 {
        match self {
            NextReward::Next { remaining, .. } => *remaining,
            NextReward::AllCleared => 0,
        }
    }
}

impl fmt::Display for NextReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextReward::Next { label, remaining } => {
                write!(f, "{} Tribs to go until {}!", remaining, label)
            }
            NextReward::AllCleared => write!(f, "All rewards unlocked!"),
        }
    }
}

/// Find the next reward for `current_points`
///
/// A rung whose threshold equals `current_points` is already cleared.
pub fn next_reward(current_points: u32, ladder: &[RewardRung]) -> NextReward {
    ladder
        .iter()
        .find(|rung| current_points < rung.threshold)
        .map(|rung| NextReward::Next {
            label: rung.label.clone(),
            remaining: rung.threshold - current_points,
        })
        .unwrap_or(NextReward::AllCleared)
}

/// Display message for the next reward
pub fn next_reward_message(current_points: u32, ladder: &[RewardRung]) -> String {
    next_reward(current_points, ladder).to_string()
}

// =============================================================================
// Reward Ladder
// =============================================================================

/// A reward ladder kept in ascending threshold order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RewardRung>", into = "Vec<RewardRung>")]
pub struct RewardLadder {
    rungs: Vec<RewardRung>,
}

impl RewardLadder {
    /// Build a ladder, sorting rungs by threshold
    pub fn new(mut rungs: Vec<RewardRung>) -> Self {
        rungs.sort_by_key(|rung| rung.threshold);
        Self { rungs }
    }

    /// The rungs in ascending order
    pub fn rungs(&self) -> &[RewardRung] {
        &self.rungs
    }

    /// Number of rungs
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    /// Check if the ladder has no rungs
    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
    }

    /// Rungs already reached with `current_points`
    pub fn cleared(&self, current_points: u32) -> &[RewardRung] {
        let reached = self
            .rungs
            .partition_point(|rung| rung.threshold <= current_points);
        &self.rungs[..reached]
    }

    /// Next reward for `current_points`
    pub fn next_reward(&self, current_points: u32) -> NextReward {
        next_reward(current_points, &self.rungs)
    }
}

impl From<Vec<RewardRung>> for RewardLadder {
    fn from(rungs: Vec<RewardRung>) -> Self {
        Self::new(rungs)
    }
}

impl From<RewardLadder> for Vec<RewardRung> {
    fn from(ladder: RewardLadder) -> Self {
        ladder.rungs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ladder() -> Vec<RewardRung> {
        vec![
            RewardRung::new(50, "ice cream"),
            RewardRung::new(300, "theme park"),
        ]
    }

    #[test]
    fn test_next_reward_skips_cleared_rungs() {
        let next = next_reward(55, &sample_ladder());
        assert_eq!(
            next,
            NextReward::Next {
                label: "theme park".to_string(),
                remaining: 245,
            }
        );
        assert_eq!(next.to_string(), "245 Tribs to go until theme park!");
    }

    #[test]
    fn test_next_reward_exact_threshold_is_cleared() {
        let next = next_reward(50, &sample_ladder());
        assert_eq!(next.remaining(), 250);
    }

    #[test]
    fn test_next_reward_below_first_rung() {
        let message = next_reward_message(10, &sample_ladder());
        assert_eq!(message, "40 Tribs to go until ice cream!");
    }

    #[test]
    fn test_next_reward_all_cleared() {
        let next = next_reward(300, &sample_ladder());
        assert!(next.is_all_cleared());
        assert_eq!(next.remaining(), 0);
        assert_eq!(next.to_string(), "All rewards unlocked!");
    }

    #[test]
    fn test_next_reward_empty_ladder() {
        assert!(next_reward(0, &[]).is_all_cleared());
    }

    #[test]
    fn test_ladder_sorts_rungs() {
        let ladder = RewardLadder::new(vec![
            RewardRung::new(300, "theme park"),
            RewardRung::new(50, "ice cream"),
            RewardRung::new(150, "movie night"),
        ]);
        let thresholds: Vec<u32> = ladder.rungs().iter().map(|r| r.threshold).collect();
        assert_eq!(thresholds, vec![50, 150, 300]);
        assert_eq!(ladder.next_reward(60).to_string(), "90 Tribs to go until movie night!");
    }

    #[test]
    fn test_ladder_cleared() {
        let ladder = RewardLadder::new(sample_ladder());
        assert!(ladder.cleared(49).is_empty());
        assert_eq!(ladder.cleared(50).len(), 1);
        assert_eq!(ladder.cleared(1000).len(), 2);
    }

    #[test]
    fn test_ladder_deserializes_from_list() {
        let json = r#"[{"threshold":300,"label":"theme park"},{"threshold":50,"label":"ice cream"}]"#;
        let ladder: RewardLadder = serde_json::from_str(json).unwrap();
        assert_eq!(ladder.rungs()[0].label, "ice cream");
        assert_eq!(ladder.len(), 2);
    }

    #[test]
    fn test_next_reward_serialization() {
        let json = serde_json::to_string(&NextReward::AllCleared).unwrap();
        assert_eq!(json, r#"{"kind":"allCleared"}"#);
    }
}
