use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// Opaque state label, rendered as `q<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
	pub fn new(index: u32) -> Self {
		Self(index)
	}

	pub fn index(self) -> u32 {
		self.0
	}
}

impl From<u32> for StateId {
	fn from(index: u32) -> Self {
		Self(index)
	}
}

impl fmt::Display for StateId {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "q{}", self.0)
	}
}

/// Set of states.
/// Ordered, so equal sets also compare and hash equal regardless of insertion order.
pub type StateSet = BTreeSet<StateId>;

/// Source of fresh state labels for a single construction run.
#[derive(Debug, Default)]
pub struct StateCounter {
	next: u32,
}

impl StateCounter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates a label never handed out before by this counter.
	pub fn fresh(&mut self) -> StateId {
		let id = StateId(self.next);
		self.next += 1;
		id
	}

	/// Allocates an (entry, exit) pair of fresh labels.
	pub fn fresh_pair(&mut self) -> (StateId, StateId) {
		let entry = self.fresh();
		(entry, self.fresh())
	}

	/// Number of labels allocated so far.
	pub fn allocated(&self) -> u32 {
		self.next
	}
}
