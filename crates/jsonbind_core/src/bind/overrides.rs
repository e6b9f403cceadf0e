use crate::bind::{Result, Value};

/// Type-specific decode that bypasses structural decomposition.
///
/// Implementing this trait does nothing on its own; pair it with
/// [`register_override!`](crate::register_override) to make the engine use it.
pub trait Override: Sized {
	/// Build the value from any tree node.
	fn decode_override(value: &Value) -> Result<Self>;
}

/// Route decoding of the listed types through their [`Override`] impls.
///
/// The generated [`Decode`](crate::bind::Decode) impl replaces the whole destination with
/// the override's result. No structural, container, or coercion rule runs for these types.
///
/// ```
/// use jsonbind::bind::{Override, Result, Value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Sentinel(u32);
///
/// impl Override for Sentinel {
/// 	fn decode_override(_: &Value) -> Result<Self> {
/// 		Ok(Sentinel(1024))
/// 	}
/// }
///
/// jsonbind::register_override!(Sentinel);
///
/// let value = jsonbind::bind::parse_value("[1, 2, 3]").unwrap();
/// assert_eq!(jsonbind::bind::decode::<Sentinel>(&value).unwrap(), Sentinel(1024));
/// ```
#[macro_export]
macro_rules! register_override {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::bind::Decode for $ty {
				fn decode_in_place(&mut self, value: &$crate::bind::Value) -> $crate::bind::Result<()> {
					$crate::bind::overrides::trace_override(::std::any::type_name::<$ty>());
					*self = <$ty as $crate::bind::Override>::decode_override(value)?;
					::std::result::Result::Ok(())
				}
			}
		)+
	};
}

#[doc(hidden)]
pub fn trace_override(type_name: &'static str) {
	tracing::debug!(ty = type_name, "override replaces structural decode");
}
