//! Personality - flavor messages attached to a character's dice rolls

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Placeholder replaced by the rolling user's mention.
pub const USER_PLACEHOLDER: &str = "[userID]";

pub const DEFAULT_RATE: u32 = 10;

/// Whether a roll went well or badly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollOutcome {
    Good,
    Bad,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

impl FromStr for RollOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            other => Err(DomainError::parse(format!("Unknown roll outcome: {}", other))),
        }
    }
}

/// Message templates and the percentage chance of using them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personality {
    pub good_messages: Vec<String>,
    pub bad_messages: Vec<String>,
    /// Percent chance of a good-roll message
    pub good_rate: u32,
    /// Percent chance of a bad-roll message
    pub bad_rate: u32,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            good_messages: Vec::new(),
            bad_messages: Vec::new(),
            good_rate: DEFAULT_RATE,
            bad_rate: DEFAULT_RATE,
        }
    }
}

impl Personality {
    pub fn new(good_messages: Vec<String>, bad_messages: Vec<String>) -> Self {
        Self {
            good_messages,
            bad_messages,
            ..Self::default()
        }
    }

    pub fn with_rates(mut self, good_rate: u32, bad_rate: u32) -> Self {
        self.good_rate = good_rate;
        self.bad_rate = bad_rate;
        self
    }

    pub fn messages(&self, outcome: RollOutcome) -> &[String] {
        match outcome {
            RollOutcome::Good => &self.good_messages,
            RollOutcome::Bad => &self.bad_messages,
        }
    }

    pub fn rate(&self, outcome: RollOutcome) -> u32 {
        match outcome {
            RollOutcome::Good => self.good_rate,
            RollOutcome::Bad => self.bad_rate,
        }
    }

    /// Substitute `user` for every placeholder in `template`.
    pub fn render(template: &str, user: &str) -> String {
        template.replace(USER_PLACEHOLDER, user)
    }
}
