use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A single position in the word tree.
///
/// A node does not store its own character: the edge leading to it does, as
/// the key in its parent's `children` map. The root is an ordinary
/// non-terminal node with no inbound edge.
///
/// ## Invariants
/// - `children` keys are lowercase ASCII letters (guaranteed by the
///   normalization applied before any tree walk)
/// - `terminal` is true iff some inserted word ends exactly at this node
#[derive(Debug, Default)]
pub struct Node {
	/// True if an inserted word ends at this node.
	pub terminal: bool,
	/// Child nodes indexed by the next letter.
	pub children: HashMap<char, Node>,
}

impl Node {
	/// Returns the children as `(letter, node)` pairs in ascending letter order.
	///
	/// Map iteration order is not deterministic; every traversal whose output
	/// is observable must expand children through this accessor.
	pub fn sorted_children(&self) -> Vec<(char, &Node)> {
		let mut children: Vec<(char, &Node)> = self.children.iter().map(|(c, n)| (*c, n)).collect();
		children.sort_by_key(|(letter, _)| *letter);
		children
	}

	/// Unions `other` into this node.
	///
	/// Terminal flags are OR-ed together. Subtrees missing on this side are
	/// moved over wholesale; shared ones are merged recursively.
	pub fn merge(&mut self, other: Node) {
		self.terminal |= other.terminal;
		for (letter, child) in other.children {
			match self.children.entry(letter) {
				Entry::Occupied(entry) => entry.into_mut().merge(child),
				Entry::Vacant(entry) => {
					entry.insert(child);
				}
			}
		}
	}
}
