// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use roledb_type::{Octets, OrderedF32, Type, Value};

/// Coerce a raw storage value to a field's primitive type.
///
/// Total over arbitrary inputs: an unparseable or wrong-typed value falls
/// back to the target type's zero value instead of failing, so assembling
/// a record never errors on garbage scalar columns.
pub fn coerce(value: &Value, target: Type) -> Value {
	match target {
		Type::Uint1 => Value::Uint1(u8::try_from(integer(value)).unwrap_or(0)),
		Type::Int2 => Value::Int2(i16::try_from(integer(value)).unwrap_or(0)),
		Type::Int4 => Value::Int4(i32::try_from(integer(value)).unwrap_or(0)),
		Type::Int8 => Value::Int8(i64::try_from(integer(value)).unwrap_or(0)),
		Type::Varint => Value::Varint(u64::try_from(integer(value)).unwrap_or(0)),
		Type::Float4 => Value::Float4(float(value)),
		Type::Octets => match value {
			Value::Octets(_) => value.clone(),
			_ => Value::Octets(Octets::empty()),
		},
		Type::Name => Value::Name(text(value)),
		Type::Undefined => Value::Undefined,
	}
}

fn integer(value: &Value) -> i128 {
	match value {
		Value::Uint1(v) => *v as i128,
		Value::Int2(v) => *v as i128,
		Value::Int4(v) => *v as i128,
		Value::Int8(v) => *v as i128,
		Value::Varint(v) => *v as i128,
		Value::Float4(v) => v.value() as i128,
		Value::Name(text) => parse_integer(text),
		Value::Octets(_) | Value::Undefined => 0,
	}
}

// "123" parses directly; "123.7" truncates to 123; anything else is 0.
fn parse_integer(text: &str) -> i128 {
	let trimmed = text.trim();
	if let Ok(value) = trimmed.parse::<i128>() {
		return value;
	}
	match trimmed.parse::<f64>() {
		Ok(value) if value.is_finite() => value.trunc() as i128,
		_ => 0,
	}
}

fn float(value: &Value) -> OrderedF32 {
	let raw = match value {
		Value::Uint1(v) => *v as f32,
		Value::Int2(v) => *v as f32,
		Value::Int4(v) => *v as f32,
		Value::Int8(v) => *v as f32,
		Value::Varint(v) => *v as f32,
		Value::Float4(v) => v.value(),
		Value::Name(text) => text.trim().parse::<f32>().unwrap_or(0.0),
		Value::Octets(_) | Value::Undefined => 0.0,
	};
	OrderedF32::try_from(raw).unwrap_or_else(|_| OrderedF32::zero())
}

fn text(value: &Value) -> String {
	match value {
		Value::Name(text) => text.clone(),
		Value::Uint1(_) | Value::Int2(_) | Value::Int4(_) | Value::Int8(_) | Value::Varint(_) | Value::Float4(_) => {
			value.to_string()
		}
		Value::Octets(_) | Value::Undefined => String::new(),
	}
}
