//! Top-level module for the word tree.
//!
//! The tree stores lowercase alphabetic words and predicts completions of
//! a typed prefix, shortest first. All inputs go through one shared
//! normalization rule before touching the tree.

/// The prefix tree and its operations.
pub mod trie;

/// Internal node representation.
///
/// This module is not exposed publicly.
mod node;
