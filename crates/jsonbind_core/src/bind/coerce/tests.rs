use super::{Coerced, Target, coerce, to_bool, to_float, to_integer, to_string};
use crate::bind::{DecodeError, Kind, Value};

fn text(value: &str) -> Value {
	Value::String(value.to_owned())
}

#[test]
fn string_destination_accepts_scalars() {
	assert_eq!(to_string(&text("hello")).expect("string copies"), "hello");
	assert_eq!(to_string(&Value::I64(-42)).expect("int renders"), "-42");
	assert_eq!(to_string(&Value::U64(18_446_744_073_709_551_615)).expect("uint renders"), "18446744073709551615");
	assert_eq!(to_string(&Value::Bool(true)).expect("bool renders"), "true");
	assert_eq!(to_string(&Value::Bool(false)).expect("bool renders"), "false");
}

#[test]
fn string_destination_renders_doubles_in_fixed_notation() {
	assert_eq!(to_string(&Value::F64(1.5)).expect("double renders"), "1.500000");
	assert_eq!(to_string(&Value::F64(-2.0)).expect("double renders"), "-2.000000");
	assert_eq!(to_string(&Value::F64(1e21)).expect("double renders"), "1000000000000000000000.000000");
	assert_eq!(to_string(&Value::F64(1e-7)).expect("double renders"), "0.000000");
	assert_eq!(to_string(&Value::F64(0.1 + 0.2)).expect("double renders"), "0.300000");
}

#[test]
fn string_destination_rejects_null_and_containers() {
	for value in [Value::Null, Value::Array(Vec::new()), Value::Object(Default::default())] {
		let err = to_string(&value).expect_err("no coercion to string");
		assert!(matches!(err, DecodeError::UnsupportedCoercion { target: "String", .. }), "unexpected {err:?}");
	}
}

#[test]
fn bool_truthy_and_falsy_words() {
	for word in ["true", "1", "yes", "on"] {
		assert!(to_bool(&text(word)).expect("truthy word"), "{word} should be true");
	}
	for word in ["false", "0", "no", "off", ""] {
		assert!(!to_bool(&text(word)).expect("falsy word"), "{word:?} should be false");
	}
}

#[test]
fn bool_falls_back_to_integer_parse() {
	assert!(to_bool(&text("2")).expect("numeric string"));
	assert!(to_bool(&text("-7")).expect("numeric string"));
	assert!(!to_bool(&text("00")).expect("numeric string"));
	assert!(!to_bool(&text("garbage")).expect("garbage is false"));
	assert!(!to_bool(&text("TRUE")).expect("words are case sensitive"));
}

#[test]
fn bool_from_integers_and_rejects_doubles() {
	assert!(to_bool(&Value::U64(3)).expect("uint"));
	assert!(!to_bool(&Value::U64(0)).expect("uint"));
	assert!(to_bool(&Value::I64(-1)).expect("int"));

	let err = to_bool(&Value::F64(1.0)).expect_err("double is not a bool source");
	assert!(matches!(err, DecodeError::UnsupportedCoercion { target: "bool", got: Kind::Double }));
}

#[test]
fn integer_from_numeric_strings() {
	assert_eq!(to_integer::<i32>(&text("123")).expect("parses"), 123);
	assert_eq!(to_integer::<i32>(&text("")).expect("empty is zero"), 0);
	assert_eq!(to_integer::<i64>(&text(" -9 ")).expect("whitespace trimmed"), -9);

	let err = to_integer::<i32>(&text("12abc")).expect_err("trailing garbage");
	assert!(matches!(err, DecodeError::NumericParse { target: "i32", .. }), "unexpected {err:?}");
}

#[test]
fn integer_range_is_checked() {
	let err = to_integer::<u8>(&Value::U64(256)).expect_err("too large");
	assert!(matches!(err, DecodeError::OutOfRange { target: "u8", .. }));

	let err = to_integer::<u32>(&Value::I64(-1)).expect_err("negative into unsigned");
	assert!(matches!(err, DecodeError::OutOfRange { target: "u32", .. }));

	let err = to_integer::<i8>(&text("300")).expect_err("string overflow");
	assert!(matches!(err, DecodeError::OutOfRange { target: "i8", .. }));

	assert_eq!(to_integer::<i64>(&Value::U64(i64::MAX as u64)).expect("fits"), i64::MAX);
}

#[test]
fn integer_from_double_truncates_toward_zero() {
	assert_eq!(to_integer::<i32>(&Value::F64(2.9)).expect("truncates"), 2);
	assert_eq!(to_integer::<i32>(&Value::F64(-2.9)).expect("truncates"), -2);
	assert_eq!(to_integer::<u16>(&Value::F64(-0.5)).expect("negative fraction truncates to zero"), 0);

	let err = to_integer::<i64>(&Value::F64(1e300)).expect_err("too large");
	assert!(matches!(err, DecodeError::OutOfRange { target: "i64", .. }));
}

#[test]
fn integer_rejects_bool_and_null() {
	let err = to_integer::<i32>(&Value::Bool(true)).expect_err("bool is not an integer source");
	assert!(matches!(err, DecodeError::UnsupportedCoercion { target: "i32", got: Kind::Bool }));

	let err = to_integer::<i32>(&Value::Null).expect_err("null is never coerced");
	assert!(matches!(err, DecodeError::UnsupportedCoercion { target: "i32", got: Kind::Null }));
}

#[test]
fn float_sources() {
	assert_eq!(to_float::<f64>(&Value::F64(1.25)).expect("identity"), 1.25);
	assert_eq!(to_float::<f64>(&Value::I64(-3)).expect("widen"), -3.0);
	assert_eq!(to_float::<f32>(&Value::U64(7)).expect("widen"), 7.0);
	assert_eq!(to_float::<f64>(&text("10")).expect("integer literal parses"), 10.0);
	assert_eq!(to_float::<f64>(&text(" -4 ")).expect("whitespace trimmed"), -4.0);
	assert_eq!(to_float::<f64>(&text("18446744073709551615")).expect("u64 literal widens"), 18_446_744_073_709_551_615.0);
	assert_eq!(to_float::<f64>(&text("")).expect("empty is zero"), 0.0);

	let err = to_float::<f64>(&text("one")).expect_err("not numeric");
	assert!(matches!(err, DecodeError::NumericParse { target: "f64", .. }));

	let err = to_float::<f32>(&Value::Bool(false)).expect_err("bool is not a float source");
	assert!(matches!(err, DecodeError::UnsupportedCoercion { target: "f32", .. }));
}

#[test]
fn float_strings_follow_the_integer_literal_rule() {
	for literal in ["2.5", "1e3", "NaN", "inf", "-infinity"] {
		let err = to_float::<f64>(&text(literal)).expect_err("not an integer literal");
		assert!(matches!(err, DecodeError::NumericParse { target: "f64", .. }), "{literal}: unexpected {err:?}");
		assert!(to_integer::<i64>(&text(literal)).is_err(), "{literal} should fail both rules");
	}

	let err = to_float::<f32>(&text("99999999999999999999")).expect_err("wider than u64");
	assert!(matches!(err, DecodeError::OutOfRange { target: "f32", .. }), "unexpected {err:?}");
}

#[test]
fn runtime_target_dispatch() {
	assert_eq!(coerce(&text("40"), Target::Int).expect("int"), Coerced::Int(40));
	assert_eq!(coerce(&text("on"), Target::Bool).expect("bool"), Coerced::Bool(true));
	assert_eq!(coerce(&Value::U64(5), Target::String).expect("string"), Coerced::String("5".to_owned()));
	assert_eq!(coerce(&Value::F64(9.75), Target::Uint).expect("uint"), Coerced::Uint(9));
	assert_eq!(coerce(&Value::I64(2), Target::Float).expect("float"), Coerced::Float(2.0));
	assert!(coerce(&Value::I64(-2), Target::Uint).is_err());
}
