use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::bind::{PathStep, Result, Value};

/// Decode hook for one field of record `R`.
pub type FieldDecodeFn<R> = fn(&mut R, &Value) -> Result<()>;

/// One declared field of a record type.
pub struct FieldDescriptor<R> {
	/// Declared field name.
	pub name: &'static str,
	/// Rust type name of the field, for diagnostics.
	pub type_name: &'static str,
	/// Decode the field in place from its source node.
	pub decode: FieldDecodeFn<R>,
}

impl<R> FieldDescriptor<R> {
	/// Build a descriptor.
	pub fn new(name: &'static str, type_name: &'static str, decode: FieldDecodeFn<R>) -> Self {
		Self { name, type_name, decode }
	}
}

impl<R> fmt::Debug for FieldDescriptor<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("name", &self.name)
			.field("type_name", &self.type_name)
			.finish_non_exhaustive()
	}
}

/// Structural description of a record type.
///
/// Usually generated with [`record!`](crate::record).
pub trait Record: Sized {
	/// Fields in declaration order.
	fn describe_fields() -> Vec<FieldDescriptor<Self>>;

	/// Rewrite a declared field name into the key looked up in the source object.
	fn alias(field: &'static str) -> Cow<'static, str> {
		Cow::Borrowed(field)
	}
}

/// Populate a record field by field.
///
/// Fields whose lookup key is absent keep their current value. Keys with no matching
/// field are ignored.
pub fn decode_record<R: Record>(record: &mut R, value: &Value) -> Result<()> {
	let members = value.expect_object()?;
	for field in R::describe_fields() {
		let key = R::alias(field.name);
		let Some(item) = members.get(key.as_ref()) else {
			trace!(field = field.name, key = %key, "field absent, keeping current value");
			continue;
		};
		trace!(field = field.name, key = %key, ty = field.type_name, kind = %item.kind(), "decode field");
		(field.decode)(record, item).map_err(|err| err.at(PathStep::Field(key.into_owned())))?;
	}
	Ok(())
}

/// Name of the type a field accessor points at.
#[doc(hidden)]
pub fn field_type_name<R, F: ?Sized>(_: impl Fn(&R) -> &F) -> &'static str {
	std::any::type_name::<F>()
}

/// Implement [`Record`] and [`Decode`](crate::bind::Decode) for a struct from its field list.
///
/// Field types are inferred. A field written as `name with path::to_fn` is decoded by
/// `fn(&Value) -> Result<FieldType>` instead of the field type's own rule. An optional
/// trailing `alias = path::to_fn` sets [`Record::alias`].
///
/// ```
/// use std::borrow::Cow;
///
/// #[derive(Default)]
/// struct Server {
/// 	host: String,
/// 	port: u16,
/// }
///
/// fn server_alias(field: &'static str) -> Cow<'static, str> {
/// 	match field {
/// 		"host" => Cow::Borrowed("hostname"),
/// 		other => Cow::Borrowed(other),
/// 	}
/// }
///
/// jsonbind::record!(Server { host, port } alias = server_alias);
///
/// let server = jsonbind::bind::from_json::<Server>(r#"{"hostname": "db", "port": "5432"}"#).unwrap();
/// assert_eq!(server.host, "db");
/// assert_eq!(server.port, 5432);
/// ```
#[macro_export]
macro_rules! record {
	(@field $ty:ty, $field:ident) => {
		|record: &mut $ty, value: &$crate::bind::Value| $crate::bind::Decode::decode_in_place(&mut record.$field, value)
	};
	(@field $ty:ty, $field:ident, $with:path) => {
		|record: &mut $ty, value: &$crate::bind::Value| {
			record.$field = $with(value)?;
			::std::result::Result::Ok(())
		}
	};
	($ty:ty { $($field:ident $(with $with:path)?),* $(,)? } $(alias = $alias:path)?) => {
		impl $crate::bind::Record for $ty {
			fn describe_fields() -> ::std::vec::Vec<$crate::bind::FieldDescriptor<Self>> {
				::std::vec![
					$(
						$crate::bind::FieldDescriptor::new(
							::std::stringify!($field),
							$crate::bind::record::field_type_name(|record: &$ty| &record.$field),
							$crate::record!(@field $ty, $field $(, $with)?),
						)
					),*
				]
			}

			$(
				fn alias(field: &'static str) -> ::std::borrow::Cow<'static, str> {
					$alias(field)
				}
			)?
		}

		impl $crate::bind::Decode for $ty {
			fn decode_in_place(&mut self, value: &$crate::bind::Value) -> $crate::bind::Result<()> {
				$crate::bind::decode_record(self, value)
			}
		}
	};
}
