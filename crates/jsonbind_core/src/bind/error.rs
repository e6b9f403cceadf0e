use thiserror::Error;

use crate::bind::{FieldPath, Kind, PathStep};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while parsing JSON text and binding it to typed values.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Input text is not valid JSON.
	#[error("parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Record, sequence, or map rule received the wrong tree kind.
	#[error("shape mismatch: expected {expected}, got {got}")]
	ShapeMismatch {
		/// Tree kind the rule requires.
		expected: &'static str,
		/// Tree kind actually present.
		got: Kind,
	},
	/// Primitive destination has no coercion from the source kind.
	#[error("unsupported coercion from {got} to {target}")]
	UnsupportedCoercion {
		/// Destination primitive type.
		target: &'static str,
		/// Source tree kind.
		got: Kind,
	},
	/// String could not be parsed as a numeric literal.
	#[error("cannot parse {text:?} as {target}")]
	NumericParse {
		/// Destination numeric type.
		target: &'static str,
		/// Offending source text.
		text: String,
	},
	/// Numeric value does not fit the destination type.
	#[error("{value} is out of range for {target}")]
	OutOfRange {
		/// Destination numeric type.
		target: &'static str,
		/// Rendered source value.
		value: String,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path does not select a node in the tree.
	#[error("path not found: {path}")]
	PathNotFound {
		/// Rendered path that failed to resolve.
		path: String,
	},
	/// Error raised below the root, tagged with its location.
	#[error("at {path}: {source}")]
	At {
		/// Location of the failing node, outermost step first.
		path: FieldPath,
		/// Underlying failure.
		source: Box<DecodeError>,
	},
}

impl DecodeError {
	/// Prefix the error location with one more outer step.
	pub fn at(self, step: PathStep) -> Self {
		match self {
			Self::At { mut path, source } => {
				path.steps.insert(0, step);
				Self::At { path, source }
			}
			other => Self::At {
				path: FieldPath { steps: vec![step] },
				source: Box::new(other),
			},
		}
	}

	/// Underlying failure with any location wrapper removed.
	pub fn root(&self) -> &DecodeError {
		match self {
			Self::At { source, .. } => source.root(),
			other => other,
		}
	}

	/// Location of the failure, if it happened below the root.
	pub fn path(&self) -> Option<&FieldPath> {
		match self {
			Self::At { path, .. } => Some(path),
			_ => None,
		}
	}
}
