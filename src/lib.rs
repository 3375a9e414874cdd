mod automaton;
mod determinize;
mod dfa;
mod error;
mod nfa;
mod postfix;
mod state;
mod symbol;

pub use automaton::Automaton;
pub use determinize::determinize;
pub use dfa::DFA;
pub use error::{BuildError, ValidationError};
pub use nfa::NFA;
pub use postfix::{check_regex, convert_to_postfix};
pub use state::{StateCounter, StateId, StateSet};
pub use symbol::Symbol;

/// Builds the epsilon-NFA of a postfix expression.
pub fn build_enfa(postfix: &str) -> Result<NFA, BuildError> {
	NFA::from_postfix(postfix)
}

/// Builds the DFA of a postfix expression.
pub fn build_dfa(postfix: &str) -> Result<DFA, BuildError> {
	Ok(determinize(&build_enfa(postfix)?))
}

/// Checks an infix expression and builds its DFA.
pub fn compile(regex: &str) -> Result<DFA, BuildError> {
	check_regex(regex)?;
	build_dfa(&convert_to_postfix(regex))
}
