//! Core family data for Family Hub
//!
//! This crate holds the validated family and member records, the derived
//! progress indicators screens display (personal progress, family goal,
//! contribution shares, next reward), and the application configuration.
//!
//! # Example
//!
//! ```rust
//! use family_core::progress::{child_progress, family_goal_progress};
//! use family_core::rewards::{next_reward, RewardRung};
//!
//! assert_eq!(child_progress(150, 100), 100);
//!
//! let goal = family_goal_progress(415, 500);
//! assert_eq!((goal.percentage, goal.remaining), (83, 85));
//!
//! let ladder = [RewardRung::new(50, "ice cream"), RewardRung::new(300, "theme park")];
//! assert_eq!(next_reward(55, &ladder).remaining(), 245);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod progress;
pub mod records;
pub mod rewards;

pub use config::{AppConfig, ConfigError};
pub use progress::{
    checked_child_progress, child_progress, contribution_shares, family_goal_progress,
    ContributionShare, GoalProgress, MemberTribs, ProgressError,
};
pub use records::{
    Family, FamilyGoal, LeaderboardEntry, Member, RawFamily, RawGoal, RawMember, RecordError,
    Role,
};
pub use rewards::{next_reward, next_reward_message, NextReward, RewardLadder, RewardRung};
