//! Terminal chatbot that matches free-text utterances to a small catalog of
//! intents using semantic-vector similarity, then answers with a randomly
//! chosen canned response.
//!
//! The matching core is deliberately small: one embedding per catalog
//! pattern, precomputed at startup, and a linear cosine-similarity scan per
//! utterance with `default` as the fallback intent. Everything around it is
//! I/O plumbing — a line-oriented chat loop and an append-only transcript.
//!
//! # Architecture
//!
//! - **Embeddings**: Local ONNX Runtime with all-MiniLM-L6-v2 (384 dimensions)
//! - **Matching**: cosine similarity over precomputed pattern vectors,
//!   strict-greater comparison against a zero floor, first tie wins
//! - **Catalog**: insertion-ordered intent → (patterns, responses) map,
//!   builtin or loaded from a TOML/JSON file
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`catalog`] — Intent catalog types, validation, builtin set, file loading
//! - [`embedding`] — Text-to-vector embedding pipeline via ONNX Runtime
//! - [`matcher`] — Cosine-similarity intent matching over precomputed vectors
//! - [`responder`] — Uniform random response selection
//! - [`session`] — Per-session state (the user's name)
//! - [`transcript`] — Append-only plain-text conversation log
//! - [`chat`] — The interactive per-utterance loop
//! - [`error`] — Per-utterance error taxonomy

pub mod catalog;
pub mod chat;
pub mod config;
pub mod embedding;
pub mod error;
pub mod matcher;
pub mod responder;
pub mod session;
pub mod transcript;
