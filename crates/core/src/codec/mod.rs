// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! Binary record codecs for the octet blobs embedded in role records.
//!
//! Every record category the game stores as a fixed-layout blob gets one
//! codec implementing [`RecordCodec`]. The assembler never runs these;
//! the consumer that needs a decoded view (e.g. the equipment slot editor)
//! applies the matching codec to the raw octets itself.

mod equipment;

pub use equipment::{EquipmentCodec, EquipmentRecord};

use std::fmt::{Display, Formatter};

use roledb_type::{Octets, Result};
use serde::{Deserialize, Serialize};

/// The contract every fixed-layout record codec satisfies.
///
/// All multi-byte fields are little-endian. For every buffer `b` with
/// `b.len() == fixed_size()`, `serialize(parse(b))` is byte-identical to
/// `b`: every byte of the layout is field-owned, there is no don't-care
/// padding.
pub trait RecordCodec {
	type Record;

	fn kind(&self) -> RecordKind;

	/// Encoded size in bytes; constant for a given codec.
	fn fixed_size(&self) -> usize;

	/// Pure length check. Field-level semantics (socket ids, durability
	/// ranges) are convention, not codec-enforced.
	fn validate(&self, buffer: &[u8]) -> bool {
		buffer.len() >= self.fixed_size()
	}

	/// Decode every field at its fixed offset. Fails fast when the buffer
	/// is shorter than [`Self::fixed_size`]; never returns a partially
	/// populated record; never mutates the input.
	fn parse(&self, buffer: &[u8]) -> Result<Self::Record>;

	/// Encode into exactly [`Self::fixed_size`] bytes over a
	/// zero-initialized buffer. Deterministic: the same record always
	/// serializes to the same bytes.
	fn serialize(&self, record: &Self::Record) -> Octets;
}

/// Record categories stored as octet blobs inside a role record.
///
/// Only equipment has a specified layout; the remaining categories are
/// declared so callers can tag blobs uniformly, and grow codecs once their
/// layouts are pinned down.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
	Equipment,
	Skills,
	Meridian,
	Title,
	Task,
}

impl RecordKind {
	pub const ALL: [RecordKind; 5] =
		[RecordKind::Equipment, RecordKind::Skills, RecordKind::Meridian, RecordKind::Title, RecordKind::Task];

	/// The fixed record size for categories with an implemented codec.
	pub fn codec_size(&self) -> Option<usize> {
		match self {
			RecordKind::Equipment => Some(equipment::RECORD_SIZE),
			RecordKind::Skills | RecordKind::Meridian | RecordKind::Title | RecordKind::Task => None,
		}
	}
}

impl Display for RecordKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			RecordKind::Equipment => f.write_str("equipment"),
			RecordKind::Skills => f.write_str("skills"),
			RecordKind::Meridian => f.write_str("meridian"),
			RecordKind::Title => f.write_str("title"),
			RecordKind::Task => f.write_str("task"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codec_size() {
		assert_eq!(RecordKind::Equipment.codec_size(), Some(65));
		assert_eq!(RecordKind::Skills.codec_size(), None);
		assert_eq!(RecordKind::Meridian.codec_size(), None);
		assert_eq!(RecordKind::Title.codec_size(), None);
		assert_eq!(RecordKind::Task.codec_size(), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(RecordKind::Equipment.to_string(), "equipment");
		assert_eq!(RecordKind::Meridian.to_string(), "meridian");
	}
}
