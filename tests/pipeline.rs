use finite_regex::{
	build_dfa, build_enfa, compile, convert_to_postfix, determinize, Automaton, StateSet,
};
use proptest::prelude::*;
use regex::Regex;

fn dfa_for(regex: &str, postfix: &str) -> finite_regex::DFA {
	assert_eq!(postfix, convert_to_postfix(regex), "Incorrect postfix for {}", regex);
	build_dfa(postfix).unwrap()
}

#[test]
fn concatenation() {
	let dfa = dfa_for("a.b", "ab.");
	assert!(dfa.accepts("ab"));
	assert!(!dfa.accepts("a"));
	assert!(!dfa.accepts("ba"));
}

#[test]
fn alternation() {
	let dfa = dfa_for("a|b", "ab|");
	assert!(dfa.accepts("a"));
	assert!(dfa.accepts("b"));
	assert!(!dfa.accepts("ab"));
	assert!(!dfa.accepts(""));
}

#[test]
fn star() {
	let dfa = dfa_for("a*", "a*");
	assert!(dfa.accepts(""));
	assert!(dfa.accepts("a"));
	assert!(dfa.accepts("aaaa"));
	assert!(!dfa.accepts("b"));
}

#[test]
fn plus() {
	let dfa = dfa_for("a+", "a+");
	assert!(!dfa.accepts(""));
	assert!(dfa.accepts("a"));
	assert!(dfa.accepts("aaa"));
}

#[test]
fn grouped_alternation() {
	let dfa = compile("(a.b)|(c.d)").unwrap();
	assert!(dfa.accepts("ab"));
	assert!(dfa.accepts("cd"));
	assert!(!dfa.accepts("ac"));
}

#[test]
fn nfa_and_dfa_agree() {
	let nfa = build_enfa(&convert_to_postfix("(a|b)*.a.b.b")).unwrap();
	let dfa = determinize(&nfa);
	for word in &["abb", "aabb", "babb", "ab", "abba", "", "bbabb"] {
		assert_eq!(nfa.accepts(word), dfa.accepts(word), "Disagreement on {:?}", word);
	}
	assert!(dfa.accepts("ababb"));
}

#[test]
fn compile_rejects_malformed() {
	assert!(compile("a.").is_err());
	assert!(compile("(a").is_err());
	assert!(compile("ab").is_err());
}

#[derive(Debug, Clone)]
enum Expr {
	Symbol(char),
	Concat(Box<Expr>, Box<Expr>),
	Alternate(Box<Expr>, Box<Expr>),
	Star(Box<Expr>),
	Plus(Box<Expr>),
}

impl Expr {
	/// Infix form with explicit concatenation.
	fn infix(&self) -> String {
		match self {
			Self::Symbol(c) => c.to_string(),
			Self::Concat(a, b) => format!("({}).({})", a.infix(), b.infix()),
			Self::Alternate(a, b) => format!("({})|({})", a.infix(), b.infix()),
			Self::Star(a) => format!("({})*", a.infix()),
			Self::Plus(a) => format!("({})+", a.infix()),
		}
	}

	/// Equivalent pattern for the `regex` crate.
	fn pattern(&self) -> String {
		match self {
			Self::Symbol(c) => c.to_string(),
			Self::Concat(a, b) => format!("(?:{})(?:{})", a.pattern(), b.pattern()),
			Self::Alternate(a, b) => format!("(?:{}|{})", a.pattern(), b.pattern()),
			Self::Star(a) => format!("(?:{})*", a.pattern()),
			Self::Plus(a) => format!("(?:{})+", a.pattern()),
		}
	}
}

fn expr() -> impl Strategy<Value = Expr> {
	let leaf = prop::sample::select(vec!['a', 'b', 'c']).prop_map(Expr::Symbol);
	leaf.prop_recursive(4, 24, 2, |inner| {
		prop_oneof![
			(inner.clone(), inner.clone())
				.prop_map(|(a, b)| Expr::Concat(Box::new(a), Box::new(b))),
			(inner.clone(), inner.clone())
				.prop_map(|(a, b)| Expr::Alternate(Box::new(a), Box::new(b))),
			inner.clone().prop_map(|a| Expr::Star(Box::new(a))),
			inner.prop_map(|a| Expr::Plus(Box::new(a))),
		]
	})
}

proptest! {
	#[test]
	fn matches_like_regex(expr in expr(), words in prop::collection::vec("[abc]{0,6}", 1..12)) {
		let dfa = compile(&expr.infix()).unwrap();
		let oracle = Regex::new(&format!("^(?:{})$", expr.pattern())).unwrap();
		for word in &words {
			prop_assert_eq!(
				oracle.is_match(word),
				dfa.accepts(word),
				"{} on {:?}",
				expr.infix(),
				word
			);
		}
	}

	#[test]
	fn empty_word_iff_initial_final(expr in expr()) {
		let dfa = compile(&expr.infix()).unwrap();
		prop_assert_eq!(dfa.is_final(dfa.initial()), dfa.accepts(""));
	}

	#[test]
	fn completed_dfa_is_deterministic(expr in expr()) {
		let dfa = compile(&expr.infix()).unwrap().complete();
		prop_assert_eq!(Ok(()), dfa.validate());
	}

	#[test]
	fn closure_is_idempotent(expr in expr(), mask in prop::collection::vec(any::<bool>(), 64)) {
		let nfa = build_enfa(&convert_to_postfix(&expr.infix())).unwrap();
		let subset: StateSet = nfa
			.states()
			.iter()
			.zip(mask.iter().cycle())
			.filter(|(_, keep)| **keep)
			.map(|(&state, _)| state)
			.collect();
		let closure = nfa.lambda_closure(&subset);
		prop_assert!(closure.is_superset(&subset));
		prop_assert_eq!(&closure, &nfa.lambda_closure(&closure));
	}

	#[test]
	fn single_initial_nonempty_finals(expr in expr()) {
		let nfa = build_enfa(&convert_to_postfix(&expr.infix())).unwrap();
		prop_assert!(nfa.has_state(nfa.initial()));
		prop_assert!(!nfa.finals().is_empty());
		prop_assert!(nfa.finals().is_subset(nfa.states()));
	}
}
