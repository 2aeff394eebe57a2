use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pyramidview_core::{ComparisonConfig, Item};

use crate::error::IoError;

/// A comparison stored as JSON: the items plus optional settings.
///
/// ```json
/// {
///   "items": [["GPT-2", 1.5e9], { "label": "GPT-3", "magnitude": 1.75e11 }],
///   "settings": { "spacing": 10, "depth_limit": "max_side" }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonDocument {
    #[serde(with = "item_entries")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub settings: ComparisonConfig,
}

impl ComparisonDocument {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            settings: ComparisonConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, IoError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, IoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        let json = fs::read_to_string(path)?;
        let doc = Self::from_json(&json)?;
        log::info!("loaded {} items from {}", doc.items.len(), path.display());
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<(), IoError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Items may be written as `["label", magnitude]` pairs or as objects.
mod item_entries {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use pyramidview_core::Item;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ItemEntry {
        Pair(String, f64),
        Record { label: String, magnitude: f64 },
    }

    impl From<ItemEntry> for Item {
        fn from(entry: ItemEntry) -> Self {
            match entry {
                ItemEntry::Pair(label, magnitude) => Item { label, magnitude },
                ItemEntry::Record { label, magnitude } => Item { label, magnitude },
            }
        }
    }

    pub fn serialize<S: Serializer>(items: &[Item], serializer: S) -> Result<S::Ok, S::Error> {
        items.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Item>, D::Error> {
        let entries = Vec::<ItemEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(Item::from).collect())
    }
}
