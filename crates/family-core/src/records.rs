//! Family and member records
//!
//! Records arrive from the backend as loosely shaped JSON. The `Raw*` types
//! mirror that shape; converting them into [`Member`], [`FamilyGoal`] and
//! [`Family`] is the one place where the data is validated. Past that
//! boundary every target is positive and every points total is non-negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::AppConfig;
use crate::progress::{self, ContributionShare, GoalProgress, MemberTribs};

/// Record validation errors
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// A points total is negative
    #[error("Negative points in {field}: {value}")]
    NegativePoints {
        /// Field name
        field: &'static str,
        /// Rejected value
        value: i64,
    },

    /// A role tag was not recognized by a strict parse
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// The record is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

// =============================================================================
// Role
// =============================================================================

/// A family member's category, which selects the visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Parent or other adult
    #[default]
    Adult,
    /// Teenager
    Teen,
    /// Young child
    Child,
}

impl Role {
    /// All roles
    pub const ALL: [Role; 3] = [Role::Adult, Role::Teen, Role::Child];

    /// Lenient conversion from a backend role tag
    ///
    /// Unknown or missing tags fall back to [`Role::Adult`]; this never fails.
    pub fn from_tag(tag: Option<&str>) -> Role {
        match tag {
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                tracing::debug!(tag, "Unrecognized role tag, using adult");
                Role::Adult
            }),
            None => Role::Adult,
        }
    }

    /// Lowercase tag as stored in the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Adult => "adult",
            Role::Teen => "teen",
            Role::Child => "child",
        }
    }

    /// Check if this is the child role
    pub fn is_child(&self) -> bool {
        matches!(self, Role::Child)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "adult" => Ok(Role::Adult),
            "teen" => Ok(Role::Teen),
            "child" => Ok(Role::Child),
            _ => Err(RecordError::UnknownRole(s.to_string())),
        }
    }
}

// =============================================================================
// Raw Records
// =============================================================================

/// Member record as delivered by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMember {
    /// Record identifier
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Role tag (`adult`, `teen`, `child`)
    pub role: Option<String>,
    /// Tribs earned
    pub tribs: Option<i64>,
    /// Personal target
    pub max_tribs: Option<i64>,
    /// Avatar (emoji or image URL)
    pub avatar: Option<String>,
    /// Personal accent color
    pub color: Option<String>,
}

/// Family goal as delivered by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGoal {
    /// Tribs collected toward the goal
    pub current: Option<i64>,
    /// Goal target
    pub target: Option<i64>,
    /// Reward unlocked at the target
    pub reward: Option<String>,
}

/// Family record as delivered by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFamily {
    /// Record identifier
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Member records
    pub members: Vec<RawMember>,
    /// Shared goal
    pub goal: Option<RawGoal>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RecordError::MissingField(field)),
    }
}

fn points(value: Option<i64>, field: &'static str) -> Result<u32> {
    match value {
        None => Ok(0),
        Some(value) if value < 0 => Err(RecordError::NegativePoints { field, value }),
        Some(value) => Ok(u32::try_from(value).unwrap_or(u32::MAX)),
    }
}

fn target(value: Option<i64>, field: &'static str, fallback: u32) -> u32 {
    match value {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        other => {
            // The config may not have been validated; a zero default is guarded too
            let fallback = fallback.max(progress::GUARD_DENOMINATOR);
            tracing::warn!(field, value = ?other, fallback, "Non-positive target, using default");
            fallback
        }
    }
}

// =============================================================================
// Validated Records
// =============================================================================

/// A validated family member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Member role
    pub role: Role,
    /// Tribs earned
    pub tribs: u32,
    /// Personal target, always positive
    pub max_tribs: u32,
    /// Avatar (emoji or image URL)
    pub avatar: Option<String>,
    /// Personal accent color
    pub color: Option<String>,
}

impl Member {
    /// Validate a raw member record
    pub fn from_raw(raw: RawMember, config: &AppConfig) -> Result<Self> {
        let id = required(raw.id, "member.id")?;
        let name = raw.name.unwrap_or_else(|| id.clone());
        Ok(Self {
            role: Role::from_tag(raw.role.as_deref()),
            tribs: points(raw.tribs, "member.tribs")?,
            max_tribs: target(raw.max_tribs, "member.maxTribs", config.default_max_tribs),
            avatar: raw.avatar,
            color: raw.color,
            id,
            name,
        })
    }

    /// Percentage of the personal target reached
    pub fn progress(&self) -> u8 {
        progress::child_progress(self.tribs, self.max_tribs)
    }
}

/// The shared family goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGoal {
    /// Tribs collected toward the goal
    pub current: u32,
    /// Goal target, always positive
    pub target: u32,
    /// Reward unlocked at the target
    pub reward: String,
}

impl FamilyGoal {
    /// Validate a raw goal record
    pub fn from_raw(raw: RawGoal, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            current: points(raw.current, "goal.current")?,
            target: target(raw.target, "goal.target", config.default_goal_target),
            reward: raw.reward.unwrap_or_default(),
        })
    }

    /// Tribs still missing
    pub fn remaining(&self) -> u32 {
        self.progress().remaining
    }

    /// Percentage reached
    pub fn percentage(&self) -> u8 {
        self.progress().percentage
    }

    /// Percentage and remaining Tribs
    pub fn progress(&self) -> GoalProgress {
        progress::family_goal_progress(self.current, self.target)
    }
}

/// An entry of the family leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based rank; tied members share a rank
    pub rank: usize,
    /// Member identifier
    pub member_id: String,
    /// Member display name
    pub name: String,
    /// Tribs earned
    pub tribs: u32,
}

/// A validated family snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Family identifier
    pub id: String,
    /// Family name
    pub name: String,
    /// Members in backend order
    pub members: Vec<Member>,
    /// Shared goal
    pub goal: FamilyGoal,
}

impl Family {
    /// Validate a raw family record
    pub fn from_raw(raw: RawFamily, config: &AppConfig) -> Result<Self> {
        let id = required(raw.id, "family.id")?;
        let members = raw
            .members
            .into_iter()
            .map(|member| Member::from_raw(member, config))
            .collect::<Result<Vec<_>>>()?;
        let goal = FamilyGoal::from_raw(raw.goal.unwrap_or_default(), config)?;

        Ok(Self {
            name: raw.name.unwrap_or_default(),
            id,
            members,
            goal,
        })
    }

    /// Parse and validate a family record from JSON
    pub fn from_json(json: &str, config: &AppConfig) -> Result<Self> {
        let raw: RawFamily = serde_json::from_str(json)?;
        Self::from_raw(raw, config)
    }

    /// Look up a member by id
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Members with the child role
    pub fn children(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.role.is_child())
    }

    /// Sum of all members' Tribs
    pub fn total_tribs(&self) -> u64 {
        self.members.iter().map(|m| u64::from(m.tribs)).sum()
    }

    /// Each member's share of the family total
    pub fn contribution_shares(&self) -> Vec<ContributionShare> {
        let tribs: Vec<MemberTribs> = self
            .members
            .iter()
            .map(|m| MemberTribs::new(m.id.clone(), m.tribs))
            .collect();
        progress::contribution_shares(&tribs)
    }

    /// Members ranked by Tribs, highest first
    ///
    /// Ties share a rank and keep backend order (`1, 2, 2, 4`).
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut ranked: Vec<&Member> = self.members.iter().collect();
        ranked.sort_by(|a, b| b.tribs.cmp(&a.tribs));

        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(ranked.len());
        for (position, member) in ranked.into_iter().enumerate() {
            let rank = match entries.last() {
                Some(previous) if previous.tribs == member.tribs => previous.rank,
                _ => position + 1,
            };
            entries.push(LeaderboardEntry {
                rank,
                member_id: member.id.clone(),
                name: member.name.clone(),
                tribs: member.tribs,
            });
        }
        entries
    }
}
