use anyhow::{Context, Result};
use finite_regex::{build_dfa, check_regex, convert_to_postfix, Automaton, DFA};
use std::{
	env, fs,
	io::{self, BufRead},
};

/// Runs `word` through `dfa`, printing every state visited.
fn trace(dfa: &DFA, word: &str) -> bool {
	let mut state = dfa.start();
	println!("  start in {}", state);
	for symbol in word.chars() {
		match dfa.step(&state, symbol) {
			Some(next) => {
				println!("  {} -{}-> {}", state, symbol, next);
				state = next;
			}
			None => {
				println!("  no transition from {} on {}", state, symbol);
				return false;
			}
		}
	}
	let accepted = dfa.is_accepting(&state);
	println!(
		"  stop in {}, {}",
		state,
		if accepted { "final" } else { "not final" }
	);
	accepted
}

fn main() -> Result<()> {
	let (flags, paths): (Vec<String>, Vec<String>) =
		env::args().skip(1).partition(|arg| arg.starts_with("--"));
	let verbose = flags.iter().any(|flag| flag == "--trace");
	let mut paths = paths.into_iter();
	let input = paths.next().unwrap_or_else(|| String::from("regex.in"));
	let output = paths.next().unwrap_or_else(|| String::from("automaton.out"));

	let contents =
		fs::read_to_string(&input).with_context(|| format!("could not read {}", input))?;
	let regex = contents.split_whitespace().next().unwrap_or_default();
	check_regex(regex).with_context(|| format!("invalid regex {:?}", regex))?;

	let postfix = convert_to_postfix(regex);
	let dfa = build_dfa(&postfix)?;
	println!("Regex: {}\nPostfix: {}\n\n{}", regex, postfix, dfa);
	fs::write(&output, dfa.to_string()).with_context(|| format!("could not write {}", output))?;
	if let Err(err) = dfa.validate() {
		eprintln!("warning: {}", err);
	}

	let stdin = io::stdin();
	for line in stdin.lock().lines() {
		let line = line.context("could not read word")?;
		let word = line.trim();
		let accepted = if verbose {
			trace(&dfa, word)
		} else {
			dfa.accepts(word)
		};
		let verdict = if accepted { "accepted" } else { "rejected" };
		println!("{}: {}", if word.is_empty() { "ε" } else { word }, verdict);
	}
	Ok(())
}
