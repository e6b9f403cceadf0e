pub mod coerce;
mod decode;
mod entry;
mod error;
pub mod overrides;
mod path;
pub mod record;
mod value;

/// Primitive coercion entry points.
pub use coerce::{Coerced, Floating, Integral, Target};
/// Decode trait and generic entry points.
pub use decode::{Decode, decode, decode_into};
/// Text and file entry points.
pub use entry::{from_file, from_json, from_json_slice, parse_value};
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Override hook.
pub use overrides::Override;
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Record descriptors and the structural decode rule.
pub use record::{FieldDecodeFn, FieldDescriptor, Record, decode_record};
/// Parsed tree types.
pub use value::{Kind, Value};
