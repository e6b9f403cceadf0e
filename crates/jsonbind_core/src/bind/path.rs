use std::fmt;

use crate::bind::{DecodeError, Result};

/// One step in a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a record field by its lookup key.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
	/// Select a map entry by key.
	Key(String),
}

/// Location inside a tree, outermost step first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted field syntax with `[index]` and `["key"]` selectors.
	///
	/// A path may open with a selector (`[0].name`) to step into a root array or a key that is not a plain name.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || DecodeError::InvalidFieldPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			if !(idx == 0 && bytes[0] == b'[') {
				let start = idx;
				while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_' || bytes[idx] == b'-') {
					idx += 1;
				}
				if idx == start {
					return Err(invalid());
				}
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if bytes.get(idx) == Some(&b'"') {
					let (key, next) = parse_quoted(input, idx + 1).ok_or_else(invalid)?;
					steps.push(PathStep::Key(key));
					idx = next;
				} else {
					let n_start = idx;
					while idx < bytes.len() && bytes[idx].is_ascii_digit() {
						idx += 1;
					}
					if idx == n_start {
						return Err(invalid());
					}
					let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
					steps.push(PathStep::Index(number));
				}
				if bytes.get(idx) != Some(&b']') {
					return Err(invalid());
				}
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}

	/// Whether the path selects the root.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}
}

/// Read a quoted key starting after the opening quote; returns the key and the index past the closing quote.
fn parse_quoted(input: &str, start: usize) -> Option<(String, usize)> {
	let mut key = String::new();
	let mut chars = input[start..].char_indices();
	while let Some((offset, ch)) = chars.next() {
		match ch {
			'"' => return Some((key, start + offset + 1)),
			'\\' => match chars.next()?.1 {
				'"' => key.push('"'),
				'\\' => key.push('\\'),
				'n' => key.push('\n'),
				't' => key.push('\t'),
				'r' => key.push('\r'),
				_ => return None,
			},
			other => key.push(other),
		}
	}
	None
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.steps.is_empty() {
			return f.write_str("<root>");
		}
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if idx == 0 => write!(f, "{name}")?,
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
				PathStep::Key(key) => write!(f, "[{key:?}]")?,
			}
		}
		Ok(())
	}
}
