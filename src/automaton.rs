use crate::state::{StateId, StateSet};
use std::{collections::BTreeSet, fmt};

/// Trait representing a labeled transition system over `char` inputs.
///
/// Implemented by both the epsilon-NFA and the DFA. They differ in the shape of
/// their transition function, which shows up here only as the `Config` a run
/// carries from one input to the next.
pub trait Automaton {
	/// Configuration of a run between two inputs.
	type Config: Clone;

	fn states(&self) -> &StateSet;

	fn alphabet(&self) -> &BTreeSet<char>;

	fn initial(&self) -> StateId;

	fn finals(&self) -> &StateSet;

	/// Checks whether the states of the automaton include a state.
	fn has_state(&self, id: StateId) -> bool {
		self.states().contains(&id)
	}

	/// Checks whether a state is final.
	fn is_final(&self, id: StateId) -> bool {
		self.finals().contains(&id)
	}

	/// Configuration before any input has been read.
	fn start(&self) -> Self::Config;

	/// Performs a single step.
	/// Returns `None` if the automaton has no move on `input`.
	fn step(&self, config: &Self::Config, input: char) -> Option<Self::Config>;

	/// Checks whether a configuration is accepting.
	fn is_accepting(&self, config: &Self::Config) -> bool;

	/// Runs the automaton on a sequence of inputs.
	/// Rejects as soon as an input has no move, without reading the rest.
	fn run<V>(&self, inputs: V) -> bool
	where
		V: IntoIterator<Item = char>,
	{
		let mut config = self.start();
		for input in inputs {
			match self.step(&config, input) {
				Some(next) => config = next,
				None => return false,
			}
		}
		self.is_accepting(&config)
	}

	/// Checks whether the automaton accepts a word.
	fn accepts(&self, word: &str) -> bool {
		self.run(word.chars())
	}
}

/// Writes the common header of an automaton listing.
pub(crate) fn write_header<A>(f: &mut fmt::Formatter, automaton: &A) -> fmt::Result
where
	A: Automaton,
{
	write!(f, "States:")?;
	for state in automaton.states() {
		write!(f, " {}", state)?;
	}
	write!(f, "\nAlphabet:")?;
	for symbol in automaton.alphabet() {
		write!(f, " {}", symbol)?;
	}
	writeln!(f, "\nTransitions:")
}

/// Writes the common footer of an automaton listing.
pub(crate) fn write_footer<A>(f: &mut fmt::Formatter, automaton: &A) -> fmt::Result
where
	A: Automaton,
{
	write!(f, "Initial state: {}\nFinal states:", automaton.initial())?;
	for state in automaton.finals() {
		write!(f, " {}", state)?;
	}
	writeln!(f)
}
