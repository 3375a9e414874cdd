use crate::{
	automaton::Automaton,
	dfa::DFA,
	nfa::NFA,
	state::{StateCounter, StateId, StateSet},
};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Converts an epsilon-NFA into a DFA by subset construction.
///
/// Each DFA state stands for one lambda-closed set of NFA states. Symbols that
/// lead nowhere get no transition, so the result may be partial.
pub fn determinize(nfa: &NFA) -> DFA {
	let mut builder = SubsetBuilder::new(nfa);
	let initial = builder.intern(nfa.start());

	while let Some((state, subset)) = builder.worklist.pop_front() {
		for &symbol in nfa.alphabet() {
			let next = nfa.lambda_closure(&nfa.find_transition(&subset, symbol));
			if next.is_empty() {
				continue;
			}
			let next = builder.intern(next);
			builder.transitions.insert((state, symbol), next);
		}
	}

	DFA::from_parts(
		builder.ids.values().copied().collect(),
		nfa.alphabet().clone(),
		builder.transitions,
		initial,
		builder.finals,
	)
}

struct SubsetBuilder<'a> {
	nfa: &'a NFA,
	counter: StateCounter,
	/// Represented NFA-state set of every DFA state.
	/// Keyed by the ordered set, so equal sets always map to the same state.
	ids: HashMap<StateSet, StateId>,
	worklist: VecDeque<(StateId, StateSet)>,
	transitions: BTreeMap<(StateId, char), StateId>,
	finals: StateSet,
}

impl<'a> SubsetBuilder<'a> {
	fn new(nfa: &'a NFA) -> Self {
		Self {
			nfa,
			counter: StateCounter::new(),
			ids: HashMap::new(),
			worklist: VecDeque::new(),
			transitions: BTreeMap::new(),
			finals: StateSet::new(),
		}
	}

	/// Returns the DFA state standing for `subset`, allocating and queueing a
	/// new one the first time the set is seen.
	fn intern(&mut self, subset: StateSet) -> StateId {
		if let Some(&id) = self.ids.get(&subset) {
			return id;
		}
		let id = self.counter.fresh();
		if !subset.is_disjoint(self.nfa.finals()) {
			self.finals.insert(id);
		}
		self.ids.insert(subset.clone(), id);
		self.worklist.push_back((id, subset));
		id
	}
}
