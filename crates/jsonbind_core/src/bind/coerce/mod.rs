use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::bind::{Decode, DecodeError, Result, Value};

const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

/// Integer destinations accepted by [`to_integer`].
pub trait Integral: Copy + FromStr<Err = ParseIntError> + TryFrom<i64> + TryFrom<u64> {
	/// Type name used in error messages.
	const NAME: &'static str;
	/// Value produced for an empty string.
	const ZERO: Self;
}

/// Floating point destinations accepted by [`to_float`].
pub trait Floating: Copy {
	/// Type name used in error messages.
	const NAME: &'static str;
	/// Value produced for an empty string.
	const ZERO: Self;

	/// Narrow or keep a double.
	fn from_f64(value: f64) -> Self;
	/// Widen a signed integer.
	fn from_i64(value: i64) -> Self;
	/// Widen an unsigned integer.
	fn from_u64(value: u64) -> Self;
}

/// Coerce to text.
///
/// Doubles render in fixed notation with six fractional digits, never in exponent form.
pub fn to_string(value: &Value) -> Result<String> {
	match value {
		Value::String(text) => Ok(text.clone()),
		Value::I64(v) => Ok(v.to_string()),
		Value::U64(v) => Ok(v.to_string()),
		Value::F64(v) => Ok(format!("{v:.6}")),
		Value::Bool(v) => Ok(if *v { "true" } else { "false" }.to_owned()),
		other => Err(unsupported("String", other)),
	}
}

/// Coerce to a boolean.
///
/// Strings outside the truthy/falsy sets fall back to integer parsing and never fail:
/// anything unparsable is `false`.
pub fn to_bool(value: &Value) -> Result<bool> {
	match value {
		Value::Bool(v) => Ok(*v),
		Value::I64(v) => Ok(*v != 0),
		Value::U64(v) => Ok(*v != 0),
		Value::String(text) => Ok(bool_from_text(text)),
		other => Err(unsupported("bool", other)),
	}
}

fn bool_from_text(text: &str) -> bool {
	if text.is_empty() {
		return false;
	}
	if TRUTHY.contains(&text) {
		return true;
	}
	if FALSY.contains(&text) {
		return false;
	}
	text.trim().parse::<i64>().is_ok_and(|number| number != 0)
}

/// Coerce to an integer type.
pub fn to_integer<T: Integral>(value: &Value) -> Result<T> {
	match value {
		Value::I64(v) => <T as TryFrom<i64>>::try_from(*v).map_err(|_| out_of_range::<T>(v.to_string())),
		Value::U64(v) => <T as TryFrom<u64>>::try_from(*v).map_err(|_| out_of_range::<T>(v.to_string())),
		Value::F64(v) => truncate::<T>(*v),
		Value::String(text) => integer_from_text(text),
		other => Err(unsupported(T::NAME, other)),
	}
}

fn integer_from_text<T: Integral>(text: &str) -> Result<T> {
	if text.is_empty() {
		return Ok(T::ZERO);
	}
	text.trim().parse::<T>().map_err(|err| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range::<T>(text.to_owned()),
		_ => DecodeError::NumericParse {
			target: T::NAME,
			text: text.to_owned(),
		},
	})
}

fn truncate<T: Integral>(value: f64) -> Result<T> {
	let whole = value.trunc();
	let fail = || out_of_range::<T>(ryu::Buffer::new().format(value).to_owned());

	// Both bounds are exact powers of two.
	if !whole.is_finite() {
		return Err(fail());
	}
	if whole < 0.0 {
		if whole < -9_223_372_036_854_775_808.0 {
			return Err(fail());
		}
		<T as TryFrom<i64>>::try_from(whole as i64).map_err(|_| fail())
	} else {
		if whole >= 18_446_744_073_709_551_616.0 {
			return Err(fail());
		}
		<T as TryFrom<u64>>::try_from(whole as u64).map_err(|_| fail())
	}
}

/// Coerce to a floating point type.
///
/// Strings go through the integer literal parse and are then widened, so `"0.5"` and `"NaN"` are rejected.
pub fn to_float<T: Floating>(value: &Value) -> Result<T> {
	match value {
		Value::F64(v) => Ok(T::from_f64(*v)),
		Value::I64(v) => Ok(T::from_i64(*v)),
		Value::U64(v) => Ok(T::from_u64(*v)),
		Value::String(text) => float_from_text(text),
		other => Err(unsupported(T::NAME, other)),
	}
}

fn float_from_text<T: Floating>(text: &str) -> Result<T> {
	if text.is_empty() {
		return Ok(T::ZERO);
	}
	let literal = text.trim();
	let parse_error = |err: ParseIntError| match err.kind() {
		IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => DecodeError::OutOfRange {
			target: T::NAME,
			value: text.to_owned(),
		},
		_ => DecodeError::NumericParse {
			target: T::NAME,
			text: text.to_owned(),
		},
	};
	match literal.parse::<i64>() {
		Ok(number) => Ok(T::from_i64(number)),
		Err(err) if *err.kind() == IntErrorKind::PosOverflow => literal.parse::<u64>().map(T::from_u64).map_err(parse_error),
		Err(err) => Err(parse_error(err)),
	}
}

/// Primitive destination selected at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
	/// Text.
	String,
	/// Boolean.
	Bool,
	/// Signed 64-bit integer.
	Int,
	/// Unsigned 64-bit integer.
	Uint,
	/// 64-bit float.
	Float,
}

impl Target {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
		}
	}
}

/// Result of a runtime-selected coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
	/// Text result.
	String(String),
	/// Boolean result.
	Bool(bool),
	/// Signed integer result.
	Int(i64),
	/// Unsigned integer result.
	Uint(u64),
	/// Floating point result.
	Float(f64),
}

/// Apply the coercion table for a destination chosen at runtime.
pub fn coerce(value: &Value, target: Target) -> Result<Coerced> {
	Ok(match target {
		Target::String => Coerced::String(to_string(value)?),
		Target::Bool => Coerced::Bool(to_bool(value)?),
		Target::Int => Coerced::Int(to_integer(value)?),
		Target::Uint => Coerced::Uint(to_integer(value)?),
		Target::Float => Coerced::Float(to_float(value)?),
	})
}

fn unsupported(target: &'static str, value: &Value) -> DecodeError {
	DecodeError::UnsupportedCoercion { target, got: value.kind() }
}

fn out_of_range<T: Integral>(value: String) -> DecodeError {
	DecodeError::OutOfRange { target: T::NAME, value }
}

impl Decode for String {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = to_string(value)?;
		Ok(())
	}
}

impl Decode for bool {
	fn decode_in_place(&mut self, value: &Value) -> Result<()> {
		*self = to_bool(value)?;
		Ok(())
	}
}

macro_rules! impl_integral {
	($($ty:ty),* $(,)?) => {
		$(
			impl Integral for $ty {
				const NAME: &'static str = stringify!($ty);
				const ZERO: Self = 0;
			}

			impl Decode for $ty {
				fn decode_in_place(&mut self, value: &Value) -> Result<()> {
					*self = to_integer(value)?;
					Ok(())
				}
			}
		)*
	};
}

impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_floating {
	($($ty:ty),* $(,)?) => {
		$(
			impl Floating for $ty {
				const NAME: &'static str = stringify!($ty);
				const ZERO: Self = 0.0;

				fn from_f64(value: f64) -> Self {
					value as $ty
				}

				fn from_i64(value: i64) -> Self {
					value as $ty
				}

				fn from_u64(value: u64) -> Self {
					value as $ty
				}
			}

			impl Decode for $ty {
				fn decode_in_place(&mut self, value: &Value) -> Result<()> {
					*self = to_float(value)?;
					Ok(())
				}
			}
		)*
	};
}

impl_floating!(f32, f64);

#[cfg(test)]
mod tests;
