use std::path::PathBuf;

use jsonbind::bind::Value;

use crate::cmd::util::{emit_json, load_document, parse_selector, truncate};

/// Output truncation limits for printed trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 8,
		}
	}
}

/// Print the selected subtree of a document.
pub fn run(path: PathBuf, at: Option<String>, json: bool) -> jsonbind::bind::Result<()> {
	let document = load_document(&path)?;
	let selector = parse_selector(at.as_deref())?;
	let node = document.select(&selector)?;

	if json {
		emit_json(&TreeJson {
			path: path.display().to_string(),
			at: selector.to_string(),
			root: node_json(node, None, None),
		})?;
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("at: {selector}");
	let mut out = String::new();
	render_value(&mut out, node, 0, 0, PrintOptions::default());
	print!("{out}");
	Ok(())
}

fn render_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => out.push_str("null\n"),
		Value::Bool(v) => out.push_str(&format!("bool {v}\n")),
		Value::I64(v) => out.push_str(&format!("int {v}\n")),
		Value::U64(v) => out.push_str(&format!("uint {v}\n")),
		Value::F64(v) => out.push_str(&format!("double {v:?}\n")),
		Value::String(v) => out.push_str(&format!("string {:?}\n", truncate(v, options.max_string_len))),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("array [... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("array ({}) [\n", items.len()));
			for (index, item) in items.iter().take(options.max_array_items).enumerate() {
				out.push_str(&format!("{pad}  [{index}] "));
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - options.max_array_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Object(members) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("object {{ ... {} members }}\n", members.len()));
				return;
			}
			out.push_str(&format!("object ({}) {{\n", members.len()));
			for (key, item) in members.iter().take(options.max_members) {
				out.push_str(&format!("{pad}  {key:?}: "));
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if members.len() > options.max_members {
				out.push_str(&format!("{pad}  ... {} more members\n", members.len() - options.max_members));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn node_json(value: &Value, key: Option<&str>, index: Option<usize>) -> NodeJson {
	let (scalar, children) = match value {
		Value::Null => (Some(serde_json::Value::Null), Vec::new()),
		Value::Bool(v) => (Some(serde_json::json!(v)), Vec::new()),
		Value::I64(v) => (Some(serde_json::json!(v)), Vec::new()),
		Value::U64(v) => (Some(serde_json::json!(v)), Vec::new()),
		Value::F64(v) => (Some(serde_json::json!(v)), Vec::new()),
		Value::String(v) => (Some(serde_json::json!(v)), Vec::new()),
		Value::Array(items) => (None, items.iter().enumerate().map(|(idx, item)| node_json(item, None, Some(idx))).collect()),
		Value::Object(members) => (None, members.iter().map(|(name, item)| node_json(item, Some(name.as_str()), None)).collect()),
	};

	NodeJson {
		kind: value.kind().as_str(),
		key: key.map(str::to_owned),
		index,
		scalar,
		children,
	}
}

#[derive(serde::Serialize)]
struct TreeJson {
	path: String,
	at: String,
	root: NodeJson,
}

#[derive(serde::Serialize)]
struct NodeJson {
	kind: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	key: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	index: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	scalar: Option<serde_json::Value>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	children: Vec<NodeJson>,
}
