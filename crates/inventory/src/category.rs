//! Item classification by name.

use serde::{Deserialize, Serialize};

const AGED_BRIE: &str = "aged brie";
const LEGENDARY_MARKER: &str = "sulfuras";
const BACKSTAGE_MARKER: &str = "backstage passes";
const CONJURED_PREFIX: &str = "conjured";

/// The rule set governing an item's daily update.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Normal,
    AgedBrie,
    Legendary,
    BackstagePass,
    Conjured,
}

impl Category {
    /// Classify an item name.
    ///
    /// Matching is done on the trimmed, lower-cased name, first match wins:
    /// exact `"aged brie"`, then names containing `"sulfuras"`, then names
    /// containing `"backstage passes"`, then names starting with `"conjured"`.
    /// Anything else (including the empty name) is [`Category::Normal`].
    pub fn classify(name: &str) -> Self {
        let normalized = name.trim().to_lowercase();

        if normalized == AGED_BRIE {
            Category::AgedBrie
        } else if normalized.contains(LEGENDARY_MARKER) {
            Category::Legendary
        } else if normalized.contains(BACKSTAGE_MARKER) {
            Category::BackstagePass
        } else if normalized.starts_with(CONJURED_PREFIX) {
            Category::Conjured
        } else {
            Category::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
        }
    }

    /// Legendary items are exempt from every rule.
    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`Category::classify`].
pub fn classify(name: &str) -> Category {
    Category::classify(name)
}
