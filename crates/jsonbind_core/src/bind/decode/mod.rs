use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use tracing::trace;

use crate::bind::{PathStep, Result, Value};

/// Destination types that can be populated from a [`Value`].
///
/// Implementations exist for primitives (through the coercion table), `Vec`/`VecDeque`,
/// string-keyed `BTreeMap`/`HashMap`, `Arc`/`Rc`/`Box`, and `Option`. Records get theirs
/// from [`record!`](crate::record) and custom types from
/// [`register_override!`](crate::register_override) or a hand-written impl.
pub trait Decode {
	/// Populate `self` from `value`.
	///
	/// On error `self` may be left partially written.
	fn decode_in_place(&mut self, value: &Value) -> Result<()>;
}

/// Decode a fresh, default-constructed `T`.
pub fn decode<T: Decode + Default>(value: &Value) -> Result<T> {
	let mut out = T::default();
	out.decode_in_place(value)?;
	Ok(out)
}

/// Decode into an existing destination.
pub fn decode_into<T: Decode + ?Sized>(target: &mut T, value: &Value) -> Result<()> {
	target.decode_in_place(value)
}

fn decode_items<T: Decode + Default>(value: &Value) -> Result<impl Iterator<Item = Result<T>> + '_> {
	let items = value.expect_array()?;
	trace!(len = items.len(), "decode sequence");
	Ok(items
		.iter()
		.enumerate()
		.map(|(index, item)| decode::<T>(item).map_err(|err| err.at(PathStep::Index(index)))))
}

fn decode_entries<V: Decode + Default>(value: &Value) -> Result<impl Iterator<Item = Result<(String, V)>> + '_> {
	let members = value.expect_object()?;
	trace!(len = members.len(), "decode map");
	Ok(members.iter().map(|(key, item)| match decode::<V>(item) {
		Ok(decoded) => Ok((key.clone(), decoded)),
		Err(err) => Err(err.at(PathStep::Key(key.clone()))),
	}))
}

impl<T: Decode + Default> Decode for Vec<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = decode_items(value)?.collect::<Result<_>>()?;
		Ok(())
	}
}

impl<T: Decode + Default> Decode for VecDeque<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = decode_items(value)?.collect::<Result<_>>()?;
		Ok(())
	}
}

impl<V: Decode + Default> Decode for BTreeMap<String, V> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = decode_entries(value)?.collect::<Result<_>>()?;
		Ok(())
	}
}

impl<V, S> Decode for HashMap<String, V, S>
where
	V: Decode + Default,
	S: BuildHasher + Default,
{
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = decode_entries(value)?.collect::<Result<_>>()?;
		Ok(())
	}
}

impl<T: Decode + Default> Decode for Arc<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = Arc::new(decode(value)?);
		Ok(())
	}
}

impl<T: Decode + Default> Decode for Rc<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = Rc::new(decode(value)?);
		Ok(())
	}
}

impl<T: Decode + Default> Decode for Box<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = Box::new(decode(value)?);
		Ok(())
	}
}

impl<T: Decode + Default> Decode for Option<T> {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		if matches!(value, Value::Null) {
			*self = None;
			return Ok(());
		}
		self.get_or_insert_with(T::default).decode_in_place(value)
	}
}
