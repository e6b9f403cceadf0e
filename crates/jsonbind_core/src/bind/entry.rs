use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::bind::{Record, Result, Value, decode_record};

/// Parse JSON text into a tree.
pub fn parse_value(text: &str) -> Result<Value> {
	Ok(serde_json::from_str(text)?)
}

/// Parse JSON text and bind it to a fresh, default-constructed record.
///
/// Parse errors are returned before any field is touched.
pub fn from_json<T: Record + Default>(text: &str) -> Result<Arc<T>> {
	let value = parse_value(text)?;
	bind_root(&value)
}

/// Byte-slice variant of [`from_json`].
pub fn from_json_slice<T: Record + Default>(bytes: &[u8]) -> Result<Arc<T>> {
	let value: Value = serde_json::from_slice(bytes)?;
	bind_root(&value)
}

/// Read a JSON file and bind it to a fresh record.
pub fn from_file<T: Record + Default>(path: impl AsRef<Path>) -> Result<Arc<T>> {
	let path = path.as_ref();
	debug!(path = %path.display(), "reading json document");
	let bytes = std::fs::read(path)?;
	from_json_slice(&bytes)
}

fn bind_root<T: Record + Default>(value: &Value) -> Result<Arc<T>> {
	debug!(ty = std::any::type_name::<T>(), kind = %value.kind(), "binding root record");
	let mut out = T::default();
	decode_record(&mut out, value)?;
	Ok(Arc::new(out))
}
