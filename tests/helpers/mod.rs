#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use indexmap::IndexMap;

use banter::catalog::{IntentCatalog, IntentDefinition};
use banter::embedding::EmbeddingProvider;

/// Dimensionality used by the test providers. Small on purpose.
pub const DIM: usize = 32;

/// Deterministic bag-of-words embedding provider.
///
/// Every word of the builtin catalog's patterns has a dedicated spike
/// dimension; unknown words are hashed into the remaining dimensions, which
/// never overlap the vocabulary ones. A text embeds to the normalized sum of
/// its word spikes, so texts sharing pattern words score high cosine
/// similarity and out-of-vocabulary text is orthogonal to every pattern.
/// Empty text embeds to the zero vector.
pub struct BagOfWordsProvider {
    vocab: HashMap<&'static str, usize>,
}

impl BagOfWordsProvider {
    pub fn new() -> Self {
        // The full word list of the builtin catalog's patterns.
        let words = [
            "hello", "hi", "hey", "howdy", "what's", "up", "greetings", "bye", "goodbye",
            "see", "you", "later", "take", "care", "thanks", "thank", "much", "appreciated",
            "the", "weather", "tell", "me", "current", "forecast",
        ];
        let vocab = words.iter().enumerate().map(|(i, w)| (*w, i)).collect();
        Self { vocab }
    }

    fn word_dim(&self, word: &str) -> usize {
        match self.vocab.get(word) {
            Some(&dim) => dim,
            None => {
                // FNV-ish hash into the non-vocabulary range
                let mut h: u64 = 0xcbf29ce484222325;
                for b in word.bytes() {
                    h ^= b as u64;
                    h = h.wrapping_mul(0x100000001b3);
                }
                let reserved = self.vocab.len();
                reserved + (h as usize % (DIM - reserved))
            }
        }
    }
}

impl EmbeddingProvider for BagOfWordsProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut v = vec![0.0f32; DIM];
        for word in text.split_whitespace() {
            let word = word.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }
            v[self.word_dim(word)] += 1.0;
        }
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

/// Provider with an explicit text → vector table; unmapped text embeds to
/// the zero vector. For tests that need exact similarity values.
pub struct TableProvider {
    pub table: HashMap<String, Vec<f32>>,
}

impl TableProvider {
    pub fn new(entries: &[(&str, Vec<f32>)]) -> Self {
        let table = entries
            .iter()
            .map(|(text, v)| (text.to_string(), v.clone()))
            .collect();
        Self { table }
    }
}

impl EmbeddingProvider for TableProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.table.get(text).cloned().unwrap_or_else(|| vec![0.0; DIM]))
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

/// Provider that fails for every utterance containing a trigger word and
/// otherwise behaves like [`BagOfWordsProvider`]. For exercising the
/// provider-unavailable fallback path.
pub struct FlakyProvider {
    inner: BagOfWordsProvider,
    pub trigger: &'static str,
}

impl FlakyProvider {
    pub fn new(trigger: &'static str) -> Self {
        Self {
            inner: BagOfWordsProvider::new(),
            trigger,
        }
    }
}

impl EmbeddingProvider for FlakyProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        anyhow::ensure!(!text.contains(self.trigger), "provider offline");
        self.inner.embed(text)
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

/// A spike vector: 1.0 at `dim`, zero elsewhere.
pub fn spike(dim: usize) -> Vec<f32> {
    let mut v = vec![0.0f32; DIM];
    v[dim] = 1.0;
    v
}

/// Build a catalog from (name, patterns, responses) triples. A `default`
/// entry is appended automatically unless one is given.
pub fn catalog(entries: &[(&str, &[&str], &[&str])]) -> IntentCatalog {
    let mut intents = IndexMap::new();
    for (name, patterns, responses) in entries {
        intents.insert(
            name.to_string(),
            IntentDefinition {
                patterns: patterns.iter().map(|s| s.to_string()).collect(),
                responses: responses.iter().map(|s| s.to_string()).collect(),
            },
        );
    }
    if !intents.contains_key("default") {
        intents.insert(
            "default".to_string(),
            IntentDefinition {
                patterns: vec![],
                responses: vec!["I'm not sure how to help with that.".to_string()],
            },
        );
    }
    IntentCatalog::new(intents).unwrap()
}
