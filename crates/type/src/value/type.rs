// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::{Octets, OrderedF32, Value};

/// All primitive types a role record field can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A compact unsigned integer
	Varint,
	/// A 4-byte floating point
	Float4,
	/// An opaque binary blob
	Octets,
	/// A character or account name
	Name,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Varint)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Type::Float4)
	}

	pub fn is_octets(&self) -> bool {
		matches!(self, Type::Octets)
	}

	pub fn is_name(&self) -> bool {
		matches!(self, Type::Name)
	}
}

impl Type {
	pub fn to_u8(&self) -> u8 {
		match self {
			Type::Undefined => 0x00,
			Type::Uint1 => 0x01,
			Type::Int2 => 0x02,
			Type::Int4 => 0x03,
			Type::Int8 => 0x04,
			Type::Varint => 0x05,
			Type::Float4 => 0x06,
			Type::Octets => 0x07,
			Type::Name => 0x08,
		}
	}

	pub fn from_u8(value: u8) -> Self {
		match value {
			0x00 => Type::Undefined,
			0x01 => Type::Uint1,
			0x02 => Type::Int2,
			0x03 => Type::Int4,
			0x04 => Type::Int8,
			0x05 => Type::Varint,
			0x06 => Type::Float4,
			0x07 => Type::Octets,
			0x08 => Type::Name,
			_ => unreachable!(),
		}
	}
}

impl Type {
	/// The zero value of this type: 0 for integers, 0.0 for floats, empty
	/// for octets and names.
	pub fn default_value(&self) -> Value {
		match self {
			Type::Uint1 => Value::Uint1(0),
			Type::Int2 => Value::Int2(0),
			Type::Int4 => Value::Int4(0),
			Type::Int8 => Value::Int8(0),
			Type::Varint => Value::Varint(0),
			Type::Float4 => Value::Float4(OrderedF32::zero()),
			Type::Octets => Value::Octets(Octets::empty()),
			Type::Name => Value::Name(String::new()),
			Type::Undefined => Value::Undefined,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Uint1 => f.write_str("Uint1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Varint => f.write_str("Varint"),
			Type::Float4 => f.write_str("Float4"),
			Type::Octets => f.write_str("Octets"),
			Type::Name => f.write_str("Name"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_u8_round_trip() {
		for r#type in [
			Type::Undefined,
			Type::Uint1,
			Type::Int2,
			Type::Int4,
			Type::Int8,
			Type::Varint,
			Type::Float4,
			Type::Octets,
			Type::Name,
		] {
			assert_eq!(Type::from_u8(r#type.to_u8()), r#type);
		}
	}

	#[test]
	fn test_predicates() {
		assert!(Type::Int4.is_integer());
		assert!(Type::Int4.is_signed_integer());
		assert!(Type::Varint.is_integer());
		assert!(Type::Varint.is_unsigned_integer());
		assert!(Type::Float4.is_float());
		assert!(Type::Octets.is_octets());
		assert!(Type::Name.is_name());
		assert!(!Type::Octets.is_integer());
	}

	#[test]
	fn test_default_values() {
		assert_eq!(Type::Int4.default_value(), Value::Int4(0));
		assert_eq!(Type::Varint.default_value(), Value::Varint(0));
		assert_eq!(Type::Float4.default_value(), Value::Float4(OrderedF32::zero()));
		assert_eq!(Type::Octets.default_value(), Value::Octets(Octets::empty()));
		assert_eq!(Type::Name.default_value(), Value::Name(String::new()));
		assert_eq!(Type::Undefined.default_value(), Value::Undefined);
	}
}
