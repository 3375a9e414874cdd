use crate::state::StateId;
use std::{error::Error, fmt};

/// Error raised while turning an expression into an automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
	EmptyExpression,
	UnexpectedCharacter { character: char, position: usize },
	MissingOperand { operator: char, position: usize },
	MissingOperator { position: usize },
	UnbalancedParenthesis { position: usize },
	/// More than one fragment left once the postfix expression is consumed.
	DanglingOperands { count: usize },
}

impl fmt::Display for BuildError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::EmptyExpression => write!(f, "Empty expression"),
			Self::UnexpectedCharacter {
				character,
				position,
			} => write!(
				f,
				"Unexpected character '{}' at position {}",
				character, position
			),
			Self::MissingOperand { operator, position } => write!(
				f,
				"Missing operand for '{}' at position {}",
				operator, position
			),
			Self::MissingOperator { position } => {
				write!(f, "Missing operator before position {}", position)
			}
			Self::UnbalancedParenthesis { position } => {
				write!(f, "Unbalanced parenthesis at position {}", position)
			}
			Self::DanglingOperands { count } => {
				write!(f, "{} operands left without an operator", count)
			}
		}
	}
}

impl Error for BuildError {}

/// First violation of the DFA contract found by `DFA::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	NoStates,
	EmptyAlphabet,
	UnknownInitialState(StateId),
	UnknownFinalState(StateId),
	MissingTransition { state: StateId, symbol: char },
	NondeterministicTransition { state: StateId, symbol: char },
	DanglingTransition {
		state: StateId,
		symbol: char,
		target: StateId,
	},
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NoStates => write!(f, "The set of states is empty"),
			Self::EmptyAlphabet => write!(f, "The alphabet is empty"),
			Self::UnknownInitialState(state) => {
				write!(f, "Initial state {} is not a member of the states", state)
			}
			Self::UnknownFinalState(state) => {
				write!(f, "Final state {} is not a member of the states", state)
			}
			Self::MissingTransition { state, symbol } => write!(
				f,
				"Transition function undefined for state {} and symbol '{}'",
				state, symbol
			),
			Self::NondeterministicTransition { state, symbol } => write!(
				f,
				"Transition function not deterministic for state {} and symbol '{}'",
				state, symbol
			),
			Self::DanglingTransition {
				state,
				symbol,
				target,
			} => write!(
				f,
				"Transition {} -{}-> {} refers outside the automaton",
				state, symbol, target
			),
		}
	}
}

impl Error for ValidationError {}
