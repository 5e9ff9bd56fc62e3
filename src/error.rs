//! Error taxonomy for per-utterance processing.
//!
//! Every failure that can happen while handling a single utterance is one of
//! the variants below. The chat loop branches on the variant at its
//! per-utterance boundary; none of these ever terminate a session. Only
//! embedding provider *initialization* failure (before the loop starts) is
//! fatal, and that path uses `anyhow` at the application boundary instead.
//!
//! Zero-norm vectors have no variant: they are recovered inside the
//! similarity computation as a score of 0 and never propagate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The embedding provider failed to produce a vector for an utterance.
    /// Recoverable: the caller falls back to the `default` intent.
    #[error("embedding provider unavailable: {0}")]
    ProviderUnavailable(#[source] anyhow::Error),

    /// A response was requested for an intent that is not in the catalog.
    /// The matcher only returns catalog keys, so this is an internal
    /// invariant violation; the loop answers with a generic apology.
    #[error("unknown intent: {0}")]
    UnknownIntent(String),

    /// The transcript sink could not be appended to. Reported, never fatal.
    #[error("transcript write failed: {0}")]
    TranscriptWrite(#[source] std::io::Error),
}
