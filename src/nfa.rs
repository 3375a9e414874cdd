use crate::{
	automaton::{self, Automaton},
	error::BuildError,
	state::{StateCounter, StateId, StateSet},
	symbol::Symbol,
};
use std::{
	collections::{BTreeMap, BTreeSet, VecDeque},
	fmt,
};

/// A nondeterministic finite automaton with epsilon transitions.
///
/// Built by Thompson construction. Each combinator consumes its operand
/// fragments and returns a new automaton; no value is edited once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
	states: StateSet,
	alphabet: BTreeSet<char>,
	transitions: BTreeMap<(StateId, Symbol), StateSet>,
	initial: StateId,
	finals: StateSet,
}

impl NFA {
	/// Builds an epsilon-NFA from a postfix expression.
	///
	/// Every state label is drawn from a single counter, so fragments never
	/// share states.
	pub fn from_postfix(postfix: &str) -> Result<Self, BuildError> {
		let mut counter = StateCounter::new();
		let mut stack: Vec<NFA> = Vec::new();

		for (position, c) in postfix.chars().enumerate() {
			let fragment = match c {
				c if c.is_ascii_alphanumeric() => Self::symbol(c, &mut counter),
				'.' | '|' => {
					let right = pop_operand(&mut stack, c, position)?;
					let left = pop_operand(&mut stack, c, position)?;
					if c == '.' {
						Self::concatenate(left, right)
					} else {
						Self::alternate(left, right, &mut counter)
					}
				}
				'*' => Self::star(pop_operand(&mut stack, c, position)?, &mut counter),
				'+' => Self::plus(pop_operand(&mut stack, c, position)?, &mut counter),
				character => {
					return Err(BuildError::UnexpectedCharacter {
						character,
						position,
					})
				}
			};
			stack.push(fragment);
		}

		let result = stack.pop().ok_or(BuildError::EmptyExpression)?;
		if !stack.is_empty() {
			return Err(BuildError::DanglingOperands {
				count: stack.len() + 1,
			});
		}
		Ok(result)
	}

	/// Automaton accepting exactly the one-symbol word `c`.
	pub fn symbol(c: char, counter: &mut StateCounter) -> Self {
		let (start, end) = counter.fresh_pair();
		let mut result = Self::assemble(start, single(end), Vec::new());
		result.alphabet.insert(c);
		result.add_transition(start, Symbol::Char(c), end);
		result
	}

	/// Automaton accepting `first` followed by `second`.
	pub fn concatenate(first: NFA, second: NFA) -> Self {
		let exits = first.finals.clone();
		let entry = second.initial;
		let finals = second.finals.clone();
		let mut result = Self::assemble(first.initial, finals, vec![first, second]);
		for exit in exits {
			result.add_transition(exit, Symbol::Epsilon, entry);
		}
		result
	}

	/// Automaton accepting either `left` or `right`.
	pub fn alternate(left: NFA, right: NFA, counter: &mut StateCounter) -> Self {
		let (start, end) = counter.fresh_pair();
		let entries = [left.initial, right.initial];
		let exits: Vec<StateId> = left.finals.iter().chain(&right.finals).copied().collect();
		let mut result = Self::assemble(start, single(end), vec![left, right]);
		for &entry in &entries {
			result.add_transition(start, Symbol::Epsilon, entry);
		}
		for exit in exits {
			result.add_transition(exit, Symbol::Epsilon, end);
		}
		result
	}

	/// Kleene star: zero or more repetitions of `inner`.
	pub fn star(inner: NFA, counter: &mut StateCounter) -> Self {
		Self::repeat(inner, counter, true)
	}

	/// Kleene plus: one or more repetitions of `inner`.
	pub fn plus(inner: NFA, counter: &mut StateCounter) -> Self {
		Self::repeat(inner, counter, false)
	}

	fn repeat(inner: NFA, counter: &mut StateCounter, allow_empty: bool) -> Self {
		let (start, end) = counter.fresh_pair();
		let entry = inner.initial;
		let exits = inner.finals.clone();
		let mut result = Self::assemble(start, single(end), vec![inner]);
		result.add_transition(start, Symbol::Epsilon, entry);
		if allow_empty {
			result.add_transition(start, Symbol::Epsilon, end);
		}
		for exit in exits {
			result.add_transition(exit, Symbol::Epsilon, entry);
			result.add_transition(exit, Symbol::Epsilon, end);
		}
		result
	}

	/// Unites the states, alphabets and transitions of `parts` under a new
	/// initial state and final-state set.
	fn assemble(initial: StateId, finals: StateSet, parts: Vec<NFA>) -> Self {
		let mut result = Self {
			states: StateSet::new(),
			alphabet: BTreeSet::new(),
			transitions: BTreeMap::new(),
			initial,
			finals,
		};
		result.states.insert(initial);
		result.states.extend(result.finals.iter().copied());
		for part in parts {
			result.states.extend(part.states);
			result.alphabet.extend(part.alphabet);
			for (key, targets) in part.transitions {
				result.transitions.entry(key).or_default().extend(targets);
			}
		}
		result
	}

	fn add_transition(&mut self, prev: StateId, symbol: Symbol, next: StateId) {
		self.transitions
			.entry((prev, symbol))
			.or_default()
			.insert(next);
	}

	/// Smallest superset of `states` closed under epsilon transitions.
	pub fn lambda_closure(&self, states: &StateSet) -> StateSet {
		let mut closure = states.clone();
		let mut queue: VecDeque<StateId> = states.iter().copied().collect();

		while let Some(state) = queue.pop_front() {
			for &next in self.targets(state, Symbol::Epsilon) {
				if closure.insert(next) {
					queue.push_back(next);
				}
			}
		}

		closure
	}

	/// States reachable from `states` by reading `symbol` once.
	/// The result is not closed under epsilon transitions.
	pub fn find_transition(&self, states: &StateSet, symbol: char) -> StateSet {
		states
			.iter()
			.flat_map(|&state| self.targets(state, Symbol::Char(symbol)))
			.copied()
			.collect()
	}

	/// Direct successors of `state` on `symbol`.
	pub fn targets(
		&self,
		state: StateId,
		symbol: Symbol,
	) -> impl Iterator<Item = &StateId> + '_ {
		self.transitions
			.get(&(state, symbol))
			.into_iter()
			.flat_map(|targets| targets.iter())
	}

	/// All transitions as `(source, symbol, target)` triples.
	pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
		self.transitions.iter().flat_map(|(&(prev, symbol), targets)| {
			targets.iter().map(move |&next| (prev, symbol, next))
		})
	}
}

fn single(state: StateId) -> StateSet {
	let mut set = StateSet::new();
	set.insert(state);
	set
}

fn pop_operand(stack: &mut Vec<NFA>, operator: char, position: usize) -> Result<NFA, BuildError> {
	stack
		.pop()
		.ok_or(BuildError::MissingOperand { operator, position })
}

impl Automaton for NFA {
	type Config = StateSet;

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

	fn start(&self) -> StateSet {
		self.lambda_closure(&single(self.initial))
	}

	fn step(&self, config: &StateSet, input: char) -> Option<StateSet> {
		let next = self.lambda_closure(&self.find_transition(config, input));
		if next.is_empty() {
			None
		} else {
			Some(next)
		}
	}

	fn is_accepting(&self, config: &StateSet) -> bool {
		!config.is_disjoint(&self.finals)
	}
}

impl fmt::Display for NFA {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		automaton::write_header(f, self)?;
		for (prev, symbol, next) in self.transitions() {
			writeln!(f, "{} -{}-> {}", prev, symbol, next)?;
		}
		automaton::write_footer(f, self)
	}
}
