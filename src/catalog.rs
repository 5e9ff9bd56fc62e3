//! Intent catalog: the static collection of known intents.
//!
//! Defines [`IntentDefinition`] (example phrases + candidate responses) and
//! [`IntentCatalog`], an insertion-ordered mapping from intent name to
//! definition. The catalog is built once at startup — from the builtin set
//! or from a TOML/JSON file — validated, and never mutated afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the fallback intent every catalog must contain.
pub const DEFAULT_INTENT: &str = "default";

/// Example phrases and candidate responses for one intent.
///
/// Immutable after catalog construction. `patterns` may be empty only for
/// the `default` entry, which is never matched by similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDefinition {
    #[serde(default)]
    pub patterns: Vec<String>,
    pub responses: Vec<String>,
}

/// Ordered mapping from intent name to [`IntentDefinition`].
///
/// Iteration order is insertion order (document order when loaded from a
/// file). Matching scans intents in this order, so it doubles as the
/// tie-break order and must stay deterministic.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    intents: IndexMap<String, IntentDefinition>,
}

impl IntentCatalog {
    /// Build a catalog from an ordered name → definition map, validating the
    /// invariants:
    ///
    /// - exactly one `default` entry, with a non-empty `responses` list
    ///   (its `patterns` list may be empty);
    /// - every other entry has non-empty `patterns` and `responses`.
    pub fn new(intents: IndexMap<String, IntentDefinition>) -> Result<Self> {
        anyhow::ensure!(
            intents.contains_key(DEFAULT_INTENT),
            "catalog must contain a '{DEFAULT_INTENT}' intent"
        );

        for (name, def) in &intents {
            anyhow::ensure!(
                !def.responses.is_empty(),
                "intent '{name}' has no responses"
            );
            if name != DEFAULT_INTENT {
                anyhow::ensure!(
                    !def.patterns.is_empty(),
                    "intent '{name}' has no patterns"
                );
            }
        }

        Ok(Self { intents })
    }

    /// The builtin reference catalog.
    pub fn builtin() -> Self {
        let mut intents = IndexMap::new();

        intents.insert(
            "greetings".to_string(),
            IntentDefinition {
                patterns: strings(&["hello", "hi", "hey", "howdy", "what's up", "greetings"]),
                responses: strings(&[
                    "Hello! How can I assist you?",
                    "Hi there! What's on your mind?",
                    "Hey! How can I help?",
                ]),
            },
        );
        intents.insert(
            "goodbye".to_string(),
            IntentDefinition {
                patterns: strings(&["bye", "goodbye", "see you later", "take care"]),
                responses: strings(&["Goodbye! Have a great day!", "See you later!", "Take care!"]),
            },
        );
        intents.insert(
            "thanks".to_string(),
            IntentDefinition {
                patterns: strings(&["thanks", "thank you", "much appreciated"]),
                responses: strings(&["You're welcome!", "No problem!", "Happy to help!"]),
            },
        );
        intents.insert(
            "weather".to_string(),
            IntentDefinition {
                patterns: strings(&[
                    "what's the weather",
                    "tell me the weather",
                    "current weather",
                    "weather forecast",
                ]),
                responses: strings(&[
                    "I'm not connected to a weather API, but I hope it's sunny where you are!",
                    "It might be a good idea to check a weather app for accurate details.",
                ]),
            },
        );
        intents.insert(
            DEFAULT_INTENT.to_string(),
            IntentDefinition {
                patterns: vec![],
                responses: strings(&[
                    "I'm sorry, I don't understand that.",
                    "Can you rephrase that?",
                    "I'm not sure how to help with that.",
                ]),
            },
        );

        Self::new(intents).expect("builtin catalog is valid")
    }

    /// Load a catalog from a TOML or JSON file, dispatched on extension.
    ///
    /// Both formats use the same shape:
    /// `{ intent_name: { patterns: [..], responses: [..] } }`. Document
    /// order is preserved and becomes the matching order.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

        let intents: IndexMap<String, IntentDefinition> =
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") => serde_json::from_str(&contents)
                    .context("failed to parse catalog JSON")?,
                _ => toml::from_str(&contents).context("failed to parse catalog TOML")?,
            };

        Self::new(intents)
            .with_context(|| format!("invalid catalog: {}", path.display()))
    }

    /// Look up an intent by name.
    pub fn get(&self, name: &str) -> Option<&IntentDefinition> {
        self.intents.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.intents.contains_key(name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IntentDefinition)> {
        self.intents.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Number of intents, including `default`.
    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Total number of patterns across all intents.
    pub fn pattern_count(&self) -> usize {
        self.intents.values().map(|d| d.patterns.len()).sum()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
