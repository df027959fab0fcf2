//! Keyword-matched canned responses.
//!
//! A message is classified into a [`Category`] by case-insensitive substring
//! search over an ordered list of [`KeywordRule`]s (first match wins, no
//! match means [`Category::General`]), then a response is drawn from that
//! category's pool and suffixed with [`DISCLAIMER`].
//!
//! The [`Responder`] is built once at startup and shared read-only across
//! requests. Randomness goes through an [`IndexPicker`] so that tests can
//! inject a deterministic sequence.

pub mod picker;
mod tables;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::WellnessError;
use crate::message::MessageBody;

pub use picker::{IndexPicker, RandomPicker, SequencePicker};
pub use tables::DISCLAIMER;

/// Wellness topic used to select a response pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Stress,
    Tired,
    Sleep,
    Hydration,
    General,
    Exercise,
    Mental,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Stress,
        Category::Tired,
        Category::Sleep,
        Category::Hydration,
        Category::General,
        Category::Exercise,
        Category::Mental,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Stress => "stress",
            Category::Tired => "tired",
            Category::Sleep => "sleep",
            Category::Hydration => "hydration",
            Category::General => "general",
            Category::Exercise => "exercise",
            Category::Mental => "mental",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger substrings for one category.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    keywords: Vec<String>,
    category: Category,
}

impl KeywordRule {
    /// Keywords are stored lower-cased.
    pub fn new<I, S>(keywords: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            category,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// `lowered` must already be lower-cased.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// The reference rules in priority order.
pub fn reference_rules() -> Vec<KeywordRule> {
    tables::KEYWORD_RULES
        .iter()
        .map(|(keywords, category)| KeywordRule::new(keywords.iter(), *category))
        .collect()
}

/// Response pools keyed by category. Every category has a non-empty pool.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    pools: HashMap<Category, Vec<String>>,
}

impl CategoryTable {
    /// Build a table from custom pools. Fails if any category is missing or
    /// has an empty pool.
    pub fn new(pools: HashMap<Category, Vec<String>>) -> Result<Self, WellnessError> {
        for category in Category::ALL {
            if pools.get(&category).is_none_or(Vec::is_empty) {
                return Err(WellnessError::Validation(format!(
                    "empty response pool for category '{category}'"
                )));
            }
        }
        Ok(Self { pools })
    }

    pub fn pool(&self, category: Category) -> &[String] {
        self.pools
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let pools = Category::ALL
            .into_iter()
            .map(|c| {
                let pool = tables::reference_pool(c)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect();
                (c, pool)
            })
            .collect();
        Self { pools }
    }
}

/// Reply to a canned-response request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub category: Category,
    pub timestamp: String,
}

/// Keyword classifier plus response pools.
pub struct Responder {
    rules: Vec<KeywordRule>,
    table: CategoryTable,
    picker: Arc<dyn IndexPicker>,
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("rules", &self.rules)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Reference rules and pools with uniform random selection.
    pub fn new() -> Self {
        Self::with_picker(Arc::new(RandomPicker))
    }

    /// Reference rules and pools with a custom index source.
    pub fn with_picker(picker: Arc<dyn IndexPicker>) -> Self {
        Self::from_parts(reference_rules(), CategoryTable::default(), picker)
    }

    pub fn from_parts(
        rules: Vec<KeywordRule>,
        table: CategoryTable,
        picker: Arc<dyn IndexPicker>,
    ) -> Self {
        Self {
            rules,
            table,
            picker,
        }
    }

    /// Classify a message. Total: falls back to [`Category::General`].
    pub fn classify(&self, message: &str) -> Category {
        let lowered = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map_or(Category::General, KeywordRule::category)
    }

    /// Draw a response from the category's pool and append the disclaimer.
    pub fn respond(&self, category: Category) -> String {
        let pool = self.table.pool(category);
        let last = pool.len().saturating_sub(1);
        let index = self.picker.pick(pool.len());
        if index > last {
            warn!(%category, index, len = pool.len(), "picker index out of range, clamping");
        }
        let mut text = pool.get(index.min(last)).cloned().unwrap_or_default();
        text.push_str(DISCLAIMER);
        text
    }

    /// Validate, classify, respond, timestamp.
    pub fn handle_message(&self, body: MessageBody) -> Result<ChatReply, WellnessError> {
        let message = body.into_text()?;
        let category = self.classify(&message);
        debug!(%category, "classified message");
        Ok(ChatReply {
            response: self.respond(category),
            category,
            timestamp: crate::timestamp_now(),
        })
    }
}
