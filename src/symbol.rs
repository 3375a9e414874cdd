use std::fmt;

/// Label of an epsilon-NFA transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
	/// Consumed without reading input. Never part of an alphabet.
	Epsilon,
	Char(char),
}

impl Symbol {
	pub fn is_epsilon(self) -> bool {
		self == Self::Epsilon
	}
}

impl From<char> for Symbol {
	fn from(c: char) -> Self {
		Self::Char(c)
	}
}

impl fmt::Display for Symbol {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Epsilon => write!(f, "ε"),
			Self::Char(c) => write!(f, "{}", c),
		}
	}
}
