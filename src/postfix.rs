use crate::error::BuildError;

fn precedence(operator: char) -> u8 {
	match operator {
		'*' | '+' => 3,
		'.' => 2,
		'|' => 1,
		_ => 0,
	}
}

/// Reorders an infix expression into postfix form.
///
/// Concatenation must be written explicitly as `.`. The input is expected to
/// be well formed (see `check_regex`); malformed input produces an unspecified
/// string rather than an error.
pub fn convert_to_postfix(regex: &str) -> String {
	let mut postfix = String::with_capacity(regex.len());
	let mut operators: Vec<char> = Vec::new();

	for c in regex.chars() {
		match c {
			c if c.is_ascii_alphanumeric() => postfix.push(c),
			'(' => operators.push(c),
			')' => {
				while let Some(top) = operators.pop() {
					if top == '(' {
						break;
					}
					postfix.push(top);
				}
			}
			_ => {
				while let Some(&top) = operators.last() {
					if top == '(' || precedence(top) < precedence(c) {
						break;
					}
					postfix.push(top);
					operators.pop();
				}
				operators.push(c);
			}
		}
	}

	while let Some(top) = operators.pop() {
		postfix.push(top);
	}
	postfix
}

/// Checks that an infix expression is well formed.
///
/// Accepts alphanumeric symbols, `(`, `)`, `.`, `|`, `*` and `+`, with
/// balanced parentheses and every operator applied to the right number of
/// operands.
pub fn check_regex(regex: &str) -> Result<(), BuildError> {
	// true while the next token must start an operand
	let mut expect_operand = true;
	let mut open: Vec<usize> = Vec::new();
	let mut last = None;

	for (position, c) in regex.chars().enumerate() {
		match c {
			c if c.is_ascii_alphanumeric() || c == '(' => {
				if !expect_operand {
					return Err(BuildError::MissingOperator { position });
				}
				if c == '(' {
					open.push(position);
				} else {
					expect_operand = false;
				}
			}
			')' | '*' | '+' | '.' | '|' => {
				if expect_operand {
					return Err(BuildError::MissingOperand {
						operator: c,
						position,
					});
				}
				match c {
					')' => {
						open.pop()
							.ok_or(BuildError::UnbalancedParenthesis { position })?;
					}
					'.' | '|' => expect_operand = true,
					_ => {}
				}
			}
			character => {
				return Err(BuildError::UnexpectedCharacter {
					character,
					position,
				})
			}
		}
		last = Some((position, c));
	}

	match last {
		None => Err(BuildError::EmptyExpression),
		Some((position, '(')) => Err(BuildError::UnbalancedParenthesis { position }),
		Some((position, operator)) if expect_operand => {
			Err(BuildError::MissingOperand { operator, position })
		}
		_ => match open.pop() {
			Some(position) => Err(BuildError::UnbalancedParenthesis { position }),
			None => Ok(()),
		},
	}
}
