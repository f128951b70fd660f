use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::error::{ListError, Result};

pub const POSITION_POLICY_ENV: &str = "SINGLY_LINKED_POSITION_POLICY";

/// How `insert_at_position` treats a position past the last node.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PositionPolicy {
    /// Any position `>= len` appends at the end.
    #[default]
    Append,
    /// `position == len` appends, anything larger is rejected.
    Strict,
}

impl FromStr for PositionPolicy {
    type Err = ListError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowercase = s.trim().to_lowercase();
        match lowercase.as_str() {
            "append" => Ok(PositionPolicy::Append),
            "strict" => Ok(PositionPolicy::Strict),
            _ => Err(ListError::UnknownPolicy(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub position_policy: PositionPolicy,
}

impl ListConfig {
    pub fn with_position_policy(mut self, position_policy: PositionPolicy) -> Self {
        self.position_policy = position_policy;
        self
    }

    /// Reads the policy from `SINGLY_LINKED_POSITION_POLICY`, falling back to
    /// the default when the variable is unset. Any other value that is not a
    /// known policy is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_var(POSITION_POLICY_ENV)
    }

    pub(crate) fn from_var(key: &str) -> Result<Self> {
        match env::var(key) {
            Ok(value) => Ok(ListConfig::default().with_position_policy(value.parse()?)),
            Err(env::VarError::NotPresent) => Ok(ListConfig::default()),
            Err(env::VarError::NotUnicode(raw)) => {
                let raw = raw.to_string_lossy().into_owned();
                warn!(key, value = %raw, "position policy is not valid unicode");
                Err(ListError::UnknownPolicy(raw))
            }
        }
    }
}
