//! Static knowledge base of product facts the agent may quote.
//!
//! A two-level map `category → item → description`, e.g.
//! `"pricing" → {"Basic Plan": "$29/month, ..."}`. Loaded once and shared
//! read-only by every session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items of one category, keyed by item name.
pub type KnowledgeCategory = BTreeMap<String, String>;

/// Knowledge base (Value Object)
///
/// Backed by ordered maps so the serialized form embedded in the prompt is
/// stable from run to run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    categories: BTreeMap<String, KnowledgeCategory>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in AutoStream facts used when no knowledge file exists yet.
    pub fn autostream() -> Self {
        Self::new()
            .with_item(
                "pricing",
                "Basic Plan",
                "$29/month, 10 videos/month, 720p resolution",
            )
            .with_item(
                "pricing",
                "Pro Plan",
                "$79/month, Unlimited videos, 4K resolution, AI captions",
            )
            .with_item("policies", "Refunds", "No refunds after 7 days.")
            .with_item(
                "policies",
                "Support",
                "24/7 support is available only on the Pro plan.",
            )
    }

    pub fn with_item(
        mut self,
        category: impl Into<String>,
        item: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.insert(category, item, description);
        self
    }

    pub fn insert(
        &mut self,
        category: impl Into<String>,
        item: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(item.into(), description.into());
    }

    pub fn lookup(&self, category: &str, item: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|items| items.get(item))
            .map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &KnowledgeCategory)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Compact JSON rendering embedded in the system instruction.
    pub fn to_prompt_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
