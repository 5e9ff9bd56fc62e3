//! Intent matching by cosine similarity over precomputed pattern vectors.
//!
//! [`IntentMatcher`] embeds every catalog pattern once at construction, then
//! scores each incoming utterance against all of them with a linear scan.
//! The best strictly-positive score wins; anything else falls back to the
//! `default` intent. Matching mutates nothing, so a matcher can be shared
//! freely once built.

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::{IntentCatalog, DEFAULT_INTENT};
use crate::embedding::EmbeddingProvider;
use crate::error::ChatError;

/// Outcome of a single match: the winning intent and its cosine score.
///
/// The score is informational; callers branch on the intent name only.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MatchResult {
    pub intent: String,
    pub score: f32,
}

/// One precomputed pattern vector, kept alongside its source text for
/// tracing output.
struct PatternVector {
    text: String,
    vector: Vec<f32>,
}

/// Matches utterances against a catalog using an embedding provider.
pub struct IntentMatcher {
    catalog: IntentCatalog,
    provider: Arc<dyn EmbeddingProvider>,
    /// Pattern vectors per intent, in catalog order. The `default` intent
    /// has an empty list and can never win the similarity scan.
    pattern_vectors: Vec<(String, Vec<PatternVector>)>,
}

impl IntentMatcher {
    /// Build a matcher, embedding every catalog pattern up front.
    ///
    /// Provider failure here is fatal: without pattern vectors nothing can
    /// ever be matched.
    pub fn new(catalog: IntentCatalog, provider: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let mut pattern_vectors = Vec::with_capacity(catalog.len());

        for (name, def) in catalog.iter() {
            let texts: Vec<&str> = def.patterns.iter().map(|p| p.as_str()).collect();
            let vectors = provider.embed_batch(&texts)?;

            let entries = def
                .patterns
                .iter()
                .zip(vectors)
                .map(|(text, vector)| PatternVector {
                    text: text.clone(),
                    vector,
                })
                .collect();

            pattern_vectors.push((name.to_string(), entries));
        }

        tracing::info!(
            intents = catalog.len(),
            patterns = catalog.pattern_count(),
            "pattern vectors precomputed"
        );

        Ok(Self {
            catalog,
            provider,
            pattern_vectors,
        })
    }

    /// The catalog this matcher was built from.
    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Match an utterance to the best-scoring intent.
    ///
    /// The utterance is lowercased before embedding so case never affects
    /// the result. The scan starts from `(default, 0.0)` and only a strictly
    /// greater similarity displaces it: ties and non-positive scores keep
    /// the fallback, and among exact ties the first pattern in catalog
    /// order wins. A zero-norm vector on either side contributes a score of
    /// 0 instead of dividing by zero.
    ///
    /// Fails only when the provider cannot embed the utterance; callers
    /// treat that as recoverable and fall back to `default` themselves.
    pub fn match_intent(&self, utterance: &str) -> Result<MatchResult, ChatError> {
        let normalized = utterance.to_lowercase();
        let query = self
            .provider
            .embed(&normalized)
            .map_err(ChatError::ProviderUnavailable)?;

        let mut best = MatchResult {
            intent: DEFAULT_INTENT.to_string(),
            score: 0.0,
        };

        for (intent, patterns) in &self.pattern_vectors {
            for pattern in patterns {
                let sim = cosine_similarity(&query, &pattern.vector);
                if sim > best.score {
                    tracing::debug!(intent = %intent, pattern = %pattern.text, score = sim, "new best match");
                    best = MatchResult {
                        intent: intent.clone(),
                        score: sim,
                    };
                }
            }
        }

        Ok(best)
    }
}

/// Cosine similarity between two vectors.
///
/// A zero-norm vector on either side (or a length mismatch) yields 0.0
/// rather than NaN — degenerate input must never poison the best-score
/// comparison.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_identical_vectors_is_one() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_orthogonal_vectors_is_zero() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn cosine_opposite_vectors_is_negative_one() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![-1.0, -2.0, -3.0];
        assert!((cosine_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_zero_norm_is_zero_not_nan() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&a, &b);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn cosine_length_mismatch_is_zero() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn cosine_is_magnitude_independent() {
        let a = vec![1.0, 1.0];
        let b = vec![10.0, 10.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }
}
