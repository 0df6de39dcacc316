//! Intent and turn result value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Conversational purpose of the latest exchange (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Intent {
    Greeting,
    Inquiry,
    #[serde(rename = "High-Intent")]
    HighIntent,
    #[default]
    Unknown,
}

impl Intent {
    /// Labels the model is asked to choose from, in scan order.
    pub const CLASSIFIED: [Intent; 3] = [Intent::Greeting, Intent::Inquiry, Intent::HighIntent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "Greeting",
            Intent::Inquiry => "Inquiry",
            Intent::HighIntent => "High-Intent",
            Intent::Unknown => "Unknown",
        }
    }

    pub fn is_high_intent(&self) -> bool {
        matches!(self, Intent::HighIntent)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greeting" => Ok(Intent::Greeting),
            "inquiry" => Ok(Intent::Inquiry),
            "high-intent" | "high_intent" | "highintent" => Ok(Intent::HighIntent),
            "unknown" => Ok(Intent::Unknown),
            _ => Err(DomainError::UnknownIntent(s.to_string())),
        }
    }
}

/// Outcome of a single turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    pub reply: String,
    pub intent: Intent,
}

impl TurnResult {
    pub fn new(reply: impl Into<String>, intent: Intent) -> Self {
        Self {
            reply: reply.into(),
            intent,
        }
    }

    /// Degraded result used when the model could not be reached.
    pub fn system_error(description: impl fmt::Display) -> Self {
        Self {
            reply: format!("System error: {}", description),
            intent: Intent::Unknown,
        }
    }

    pub fn is_system_error(&self) -> bool {
        self.intent == Intent::Unknown && self.reply.starts_with("System error:")
    }
}
