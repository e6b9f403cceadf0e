use std::path::PathBuf;

use jsonbind::bind::coerce::coerce;
use jsonbind::bind::{Coerced, Target};

use crate::cmd::util::{emit_json, load_document, parse_selector};

/// Coerce the selected node and print the result.
pub fn run(path: PathBuf, target: Target, at: Option<String>, json: bool) -> jsonbind::bind::Result<()> {
	let document = load_document(&path)?;
	let selector = parse_selector(at.as_deref())?;
	let node = document.select(&selector)?;
	let coerced = coerce(node, target)?;

	if json {
		emit_json(&CoerceJson {
			path: path.display().to_string(),
			at: selector.to_string(),
			source_kind: node.kind().as_str(),
			target: target.as_str(),
			value: coerced_json(&coerced),
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("at: {selector}");
	println!("source: {}", node.kind());
	println!("target: {}", target.as_str());
	println!("value: {}", render_coerced(&coerced));
	Ok(())
}

fn render_coerced(value: &Coerced) -> String {
	match value {
		Coerced::String(v) => format!("{v:?}"),
		Coerced::Bool(v) => v.to_string(),
		Coerced::Int(v) => v.to_string(),
		Coerced::Uint(v) => v.to_string(),
		Coerced::Float(v) => format!("{v:?}"),
	}
}

fn coerced_json(value: &Coerced) -> serde_json::Value {
	match value {
		Coerced::String(v) => serde_json::json!(v),
		Coerced::Bool(v) => serde_json::json!(v),
		Coerced::Int(v) => serde_json::json!(v),
		Coerced::Uint(v) => serde_json::json!(v),
		Coerced::Float(v) => serde_json::json!(v),
	}
}

#[derive(serde::Serialize)]
struct CoerceJson {
	path: String,
	at: String,
	source_kind: &'static str,
	target: &'static str,
	value: serde_json::Value,
}

#[cfg(test)]
mod tests {
	use jsonbind::bind::Coerced;

	use super::render_coerced;
	use crate::cmd::test_support::{fixture_path, run_jsonbind, run_jsonbind_json};

	#[test]
	fn render_quotes_strings_only() {
		assert_eq!(render_coerced(&Coerced::String("2".to_owned())), "\"2\"");
		assert_eq!(render_coerced(&Coerced::Int(-4)), "-4");
		assert_eq!(render_coerced(&Coerced::Float(1.0)), "1.0");
	}

	#[test]
	fn coerce_command_reports_json() {
		let path = fixture_path("settings.json");
		let json = run_jsonbind_json(&["coerce", path.to_str().expect("utf-8 path"), "--to", "int", "--at", "c[1]", "--json"]);
		assert_eq!(json["at"], "c[1]");
		assert_eq!(json["source_kind"], "string");
		assert_eq!(json["target"], "int");
		assert_eq!(json["value"], 2);
	}

	#[test]
	fn coerce_command_fails_on_unsupported_source() {
		let path = fixture_path("settings.json");
		let output = run_jsonbind(&["coerce", path.to_str().expect("utf-8 path"), "--to", "bool", "--at", "e"]);
		assert!(!output.status.success(), "object cannot become a bool");
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains("unsupported coercion from object to bool"), "unexpected stderr: {stderr}");
	}
}
