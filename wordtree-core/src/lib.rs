//! Trie-backed word store with prefix completion.
//!
//! This crate provides a small autocomplete engine including:
//! - A prefix tree of lowercase alphabetic words supporting insertion,
//!   exact lookup, word counting and breadth-first completion prediction
//! - A tolerant dictionary-file loader with a multithreaded build
//!
//! The tree itself performs no I/O and never raises an error: malformed
//! input degrades to a no-op or an empty result. File handling lives in
//! the [`io`] module.

/// Core word tree and prediction logic.
pub mod tree;

/// I/O utilities (dictionary loading).
pub mod io;
