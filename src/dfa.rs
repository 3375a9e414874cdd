use crate::{
	automaton::{self, Automaton},
	error::ValidationError,
	state::{StateId, StateSet},
};
use serde::{Deserialize, Serialize};
use std::{
	collections::{btree_map::Entry, BTreeMap, BTreeSet},
	fmt,
};

/// Serialized form of a DFA.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Definition {
	states: Vec<StateId>,
	alphabet: Vec<char>,
	#[serde(default)]
	transitions: Vec<(StateId, char, StateId)>,
	initial: StateId,
	#[serde(default)]
	finals: Vec<StateId>,
}

/// A deterministic finite state automaton.
///
/// Produced by subset construction, or supplied from outside through
/// `from_transitions` or deserialization. Externally supplied tables may break
/// the DFA contract; `validate` reports how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Definition", into = "Definition")]
pub struct DFA {
	states: StateSet,
	alphabet: BTreeSet<char>,
	transitions: BTreeMap<(StateId, char), StateId>,
	initial: StateId,
	finals: StateSet,
	/// Extra images of keys that were given more than one distinct target.
	conflicts: BTreeMap<(StateId, char), StateSet>,
}

impl DFA {
	pub(crate) fn from_parts(
		states: StateSet,
		alphabet: BTreeSet<char>,
		transitions: BTreeMap<(StateId, char), StateId>,
		initial: StateId,
		finals: StateSet,
	) -> Self {
		Self {
			states,
			alphabet,
			transitions,
			initial,
			finals,
			conflicts: BTreeMap::new(),
		}
	}

	/// Creates a DFA from a given set of states & transitions.
	///
	/// Where a `(state, symbol)` pair is given several distinct targets the first
	/// one is kept and the others are remembered, so the pair is reported as
	/// nondeterministic and survives serialization.
	pub fn from_transitions<V, A, F, T>(
		initial: StateId,
		states: V,
		alphabet: A,
		finals: F,
		transitions: T,
	) -> Self
	where
		V: IntoIterator<Item = StateId>,
		A: IntoIterator<Item = char>,
		F: IntoIterator<Item = StateId>,
		T: IntoIterator<Item = (StateId, char, StateId)>,
	{
		let mut dfa = Self::from_parts(
			states.into_iter().collect(),
			alphabet.into_iter().collect(),
			BTreeMap::new(),
			initial,
			finals.into_iter().collect(),
		);
		for (prev, input, next) in transitions {
			match dfa.transitions.entry((prev, input)) {
				Entry::Vacant(entry) => {
					entry.insert(next);
				}
				Entry::Occupied(entry) => {
					if *entry.get() != next {
						dfa.conflicts.entry((prev, input)).or_default().insert(next);
					}
				}
			}
		}
		dfa
	}

	/// Target of the transition from `state` on `symbol`, if defined.
	pub fn transition(&self, state: StateId, symbol: char) -> Option<StateId> {
		self.transitions.get(&(state, symbol)).copied()
	}

	/// All transitions as `(source, symbol, target)` triples.
	pub fn transitions(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
		self.transitions
			.iter()
			.map(|(&(prev, symbol), &next)| (prev, symbol, next))
	}

	/// Checks the DFA contract, reporting the first violation found.
	///
	/// In order: states and alphabet are non-empty, initial and final states
	/// are known, the transition function is total and single-valued, and no
	/// transition leaves the declared states or alphabet.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.states.is_empty() {
			return Err(ValidationError::NoStates);
		}
		if self.alphabet.is_empty() {
			return Err(ValidationError::EmptyAlphabet);
		}
		if !self.has_state(self.initial) {
			return Err(ValidationError::UnknownInitialState(self.initial));
		}
		if let Some(&state) = self.finals.difference(&self.states).next() {
			return Err(ValidationError::UnknownFinalState(state));
		}
		for &state in &self.states {
			for &symbol in &self.alphabet {
				if !self.transitions.contains_key(&(state, symbol)) {
					return Err(ValidationError::MissingTransition { state, symbol });
				}
			}
		}
		if let Some(&(state, symbol)) = self.conflicts.keys().next() {
			return Err(ValidationError::NondeterministicTransition { state, symbol });
		}
		for (state, symbol, target) in self.transitions() {
			if !self.has_state(state)
				|| !self.has_state(target)
				|| !self.alphabet.contains(&symbol)
			{
				return Err(ValidationError::DanglingTransition {
					state,
					symbol,
					target,
				});
			}
		}
		Ok(())
	}

	/// Checks whether every `(state, symbol)` pair has a transition.
	pub fn is_complete(&self) -> bool {
		self.states.iter().all(|&state| {
			self.alphabet
				.iter()
				.all(|&symbol| self.transitions.contains_key(&(state, symbol)))
		})
	}

	/// Returns a total version of this DFA.
	///
	/// Undefined transitions are routed to a fresh non-accepting sink state
	/// that loops on every symbol. The language is unchanged. The sink takes
	/// the lowest label not referenced anywhere in the automaton; if every
	/// label is taken the DFA is returned as is.
	pub fn complete(&self) -> Self {
		let mut result = self.clone();
		if self.is_complete() {
			return result;
		}

		let mut used: StateSet = self.states.union(&self.finals).copied().collect();
		used.insert(self.initial);
		used.extend(self.transitions.values().copied());
		used.extend(self.conflicts.values().flatten().copied());
		let sink = match (0..=u32::MAX).map(StateId::new).find(|id| !used.contains(id)) {
			Some(sink) => sink,
			None => return result,
		};
		result.states.insert(sink);
		for &state in &result.states {
			for &symbol in &result.alphabet {
				result.transitions.entry((state, symbol)).or_insert(sink);
			}
		}
		result
	}
}

impl Automaton for DFA {
	type Config = StateId;

	fn states(&self) -> &StateSet {
		&self.states
	}

	fn alphabet(&self) -> &BTreeSet<char> {
		&self.alphabet
	}

	fn initial(&self) -> StateId {
		self.initial
	}

	fn finals(&self) -> &StateSet {
		&self.finals
	}

	fn start(&self) -> StateId {
		self.initial
	}

	fn step(&self, config: &StateId, input: char) -> Option<StateId> {
		self.transition(*config, input)
	}

	fn is_accepting(&self, config: &StateId) -> bool {
		self.is_final(*config)
	}
}

impl From<Definition> for DFA {
	fn from(definition: Definition) -> Self {
		Self::from_transitions(
			definition.initial,
			definition.states,
			definition.alphabet,
			definition.finals,
			definition.transitions,
		)
	}
}

impl From<DFA> for Definition {
	fn from(dfa: DFA) -> Self {
		Self {
			transitions: dfa
				.transitions()
				.chain(dfa.conflicts.iter().flat_map(|(&(prev, symbol), targets)| {
					targets.iter().map(move |&next| (prev, symbol, next))
				}))
				.collect(),
			states: dfa.states.into_iter().collect(),
			alphabet: dfa.alphabet.into_iter().collect(),
			initial: dfa.initial,
			finals: dfa.finals.into_iter().collect(),
		}
	}
}

impl fmt::Display for DFA {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		automaton::write_header(f, self)?;
		for (prev, symbol, next) in self.transitions() {
			writeln!(f, "{} -{}-> {}", prev, symbol, next)?;
		}
		automaton::write_footer(f, self)
	}
}
