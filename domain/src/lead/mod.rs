//! Lead detection.
//!
//! When the model has collected every lead field it appends
//! `LEAD_COMPLETE: <name>, <email>, <platform>` to its reply.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion marker announcing a full lead.
pub const LEAD_MARKER: &str = "LEAD_COMPLETE:";

/// A captured sales lead (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub platform: String,
}

impl Lead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            platform: platform.into(),
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) on {}", self.name, self.email, self.platform)
    }
}

/// Extract a [`Lead`] from a reply carrying the completion marker.
///
/// The text between the first marker and the next one (or the end of the
/// reply) is split on commas. With at least three fields the first three
/// (trimmed) become name, email and platform; extra fields are dropped.
/// Fewer fields, or no marker, yield `None`.
pub fn detect_lead(reply: &str) -> Option<Lead> {
    let (_, rest) = reply.split_once(LEAD_MARKER)?;
    let segment = rest.split(LEAD_MARKER).next().unwrap_or_default();
    let mut fields = segment.trim().split(',').map(str::trim);

    let name = fields.next()?;
    let email = fields.next()?;
    let platform = fields.next()?;

    Some(Lead::new(name, email, platform))
}
