use std::io;
use std::path::Path;

use jsonbind::bind::{FieldPath, Result, Value, parse_value};
use tracing::debug;

/// Read and parse a JSON document.
pub(crate) fn load_document(path: &Path) -> Result<Value> {
	debug!(path = %path.display(), "loading document");
	let text = std::fs::read_to_string(path)?;
	parse_value(&text)
}

/// Parse an optional `--at` selector; `None` selects the root.
pub(crate) fn parse_selector(at: Option<&str>) -> Result<FieldPath> {
	match at {
		Some(expr) => FieldPath::parse(expr),
		None => Ok(FieldPath::default()),
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(|err| io::Error::other(format!("failed to encode json output: {err}")))?;
	println!("{text}");
	Ok(())
}

/// Truncate text to `max_len` Unicode scalar values.
pub(crate) fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
