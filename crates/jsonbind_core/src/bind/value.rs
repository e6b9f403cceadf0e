use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::bind::{DecodeError, FieldPath, PathStep, Result};

/// Parsed JSON tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// JSON `null`.
	Null,
	/// JSON `true`/`false`.
	Bool(bool),
	/// Signed integer; the parser only produces it for negatives.
	I64(i64),
	/// Unsigned integer.
	U64(u64),
	/// Number with a fraction or exponent.
	F64(f64),
	/// String literal.
	String(String),
	/// Ordered array.
	Array(Vec<Value>),
	/// Object with members sorted by key.
	Object(BTreeMap<String, Value>),
}

/// Active kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::I64`].
	Int,
	/// [`Value::U64`].
	Uint,
	/// [`Value::F64`].
	Double,
	/// [`Value::String`].
	String,
	/// [`Value::Array`].
	Array,
	/// [`Value::Object`].
	Object,
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Double => "double",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Kind of the active variant.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Null => Kind::Null,
			Self::Bool(_) => Kind::Bool,
			Self::I64(_) => Kind::Int,
			Self::U64(_) => Kind::Uint,
			Self::F64(_) => Kind::Double,
			Self::String(_) => Kind::String,
			Self::Array(_) => Kind::Array,
			Self::Object(_) => Kind::Object,
		}
	}

	/// Borrow object members or fail with a shape mismatch.
	pub fn expect_object(&self) -> Result<&BTreeMap<String, Value>> {
		match self {
			Self::Object(members) => Ok(members),
			other => Err(DecodeError::ShapeMismatch {
				expected: "object",
				got: other.kind(),
			}),
		}
	}

	/// Borrow array items or fail with a shape mismatch.
	pub fn expect_array(&self) -> Result<&[Value]> {
		match self {
			Self::Array(items) => Ok(items),
			other => Err(DecodeError::ShapeMismatch {
				expected: "array",
				got: other.kind(),
			}),
		}
	}

	/// Object member by key, `None` for missing keys and non-objects.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Self::Object(members) => members.get(key),
			_ => None,
		}
	}

	/// Follow a path from this node.
	///
	/// `Field` and `Key` steps select object members, `Index` steps select array items.
	pub fn select(&self, path: &FieldPath) -> Result<&Value> {
		let mut node = self;
		for (depth, step) in path.steps.iter().enumerate() {
			let next = match step {
				PathStep::Field(key) | PathStep::Key(key) => node.get(key),
				PathStep::Index(index) => match node {
					Self::Array(items) => items.get(*index),
					_ => None,
				},
			};
			node = next.ok_or_else(|| DecodeError::PathNotFound {
				path: FieldPath {
					steps: path.steps[..=depth].to_vec(),
				}
				.to_string(),
			})?;
		}
		Ok(node)
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_any(ValueVisitor)
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("any JSON value")
	}

	fn visit_bool<E>(self, v: bool) -> std::result::Result<Value, E> {
		Ok(Value::Bool(v))
	}

	fn visit_i64<E>(self, v: i64) -> std::result::Result<Value, E> {
		Ok(Value::I64(v))
	}

	fn visit_u64<E>(self, v: u64) -> std::result::Result<Value, E> {
		Ok(Value::U64(v))
	}

	fn visit_f64<E>(self, v: f64) -> std::result::Result<Value, E> {
		Ok(Value::F64(v))
	}

	fn visit_str<E>(self, v: &str) -> std::result::Result<Value, E> {
		Ok(Value::String(v.to_owned()))
	}

	fn visit_string<E>(self, v: String) -> std::result::Result<Value, E> {
		Ok(Value::String(v))
	}

	fn visit_unit<E>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		Value::deserialize(deserializer)
	}

	fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(item) = seq.next_element()? {
			items.push(item);
		}
		Ok(Value::Array(items))
	}

	fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut members = BTreeMap::new();
		while let Some((key, value)) = map.next_entry::<String, Value>()? {
			members.insert(key, value);
		}
		Ok(Value::Object(members))
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(v),
			serde_json::Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					Self::U64(v)
				} else if let Some(v) = n.as_i64() {
					Self::I64(v)
				} else {
					Self::F64(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(v) => Self::String(v),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(members) => Self::Object(members.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}
