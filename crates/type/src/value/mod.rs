// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

mod octets;
mod ordered_float;
pub mod r#type;

pub use octets::Octets;
pub use ordered_float::{OrderedF32, OrderedFloatError};
pub use r#type::Type;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One role record field value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A compact unsigned integer
	Varint(u64),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An opaque binary blob
	Octets(Octets),
	/// A character or account name
	Name(String),
}

impl Value {
	pub fn r#type(&self) -> Type {
		Type::from(self)
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn as_octets(&self) -> Option<&Octets> {
		match self {
			Value::Octets(octets) => Some(octets),
			_ => None,
		}
	}
}

impl From<&Value> for Type {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined => Type::Undefined,
			Value::Uint1(_) => Type::Uint1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Varint(_) => Type::Varint,
			Value::Float4(_) => Type::Float4,
			Value::Octets(_) => Type::Octets,
			Value::Name(_) => Type::Name,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Varint(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Octets(value) => Display::fmt(value, f),
			Value::Name(value) => f.write_str(value),
		}
	}
}

impl From<u8> for Value {
	fn from(value: u8) -> Self {
		Value::Uint1(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Value::Int2(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int4(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Value::Varint(value)
	}
}

impl From<Octets> for Value {
	fn from(value: Octets) -> Self {
		Value::Octets(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Name(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Name(value.to_string())
	}
}
