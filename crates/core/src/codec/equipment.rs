// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use roledb_type::{Octets, Result};

use crate::{
	codec::{RecordCodec, RecordKind},
	error::CodecError,
};

/// Encoded size of one equipment record in bytes.
///
/// The layout predates this implementation: the flags word sits at offset
/// 61 and is 4 bytes wide, so the record is 65 bytes, not the 64 older
/// tooling declared while still writing through offset 64.
pub const RECORD_SIZE: usize = 65;

const REFINE_OFFSET: usize = 0;
const DURABILITY_OFFSET: usize = 1;
const MAX_DURABILITY_OFFSET: usize = 3;
const SOCKET_OFFSET: usize = 5;
const ADDON_OFFSET: usize = 21;
const FLAGS_OFFSET: usize = 61;

/// Number of socket slots in every equipment record.
pub const SOCKET_COUNT: usize = 4;
/// Width of the opaque addon section in bytes.
pub const ADDON_SIZE: usize = 40;

/// Decoded form of one equipment ("armor") blob.
///
/// Decode is lossless pass-through: `durability > max_durability` is kept
/// as stored, and a socket id of 0 means "empty socket" by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord {
	pub refine_level: u8,
	pub durability: u16,
	pub max_durability: u16,
	pub sockets: [u32; SOCKET_COUNT],
	pub addons: [u8; ADDON_SIZE],
	pub flags: u32,
}

impl Default for EquipmentRecord {
	fn default() -> Self {
		Self {
			refine_level: 0,
			durability: 0,
			max_durability: 0,
			sockets: [0; SOCKET_COUNT],
			addons: [0; ADDON_SIZE],
			flags: 0,
		}
	}
}

/// The reference codec: every other record category codec follows this
/// shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentCodec;

impl RecordCodec for EquipmentCodec {
	type Record = EquipmentRecord;

	fn kind(&self) -> RecordKind {
		RecordKind::Equipment
	}

	fn fixed_size(&self) -> usize {
		RECORD_SIZE
	}

	fn parse(&self, buffer: &[u8]) -> Result<EquipmentRecord> {
		if buffer.len() < RECORD_SIZE {
			return Err(CodecError::BufferTooShort {
				kind: RecordKind::Equipment,
				expected: RECORD_SIZE,
				actual: buffer.len(),
			}
			.into());
		}

		let mut sockets = [0u32; SOCKET_COUNT];
		for (i, socket) in sockets.iter_mut().enumerate() {
			let at = SOCKET_OFFSET + i * 4;
			*socket = u32::from_le_bytes(buffer[at..at + 4].try_into().unwrap());
		}

		let mut addons = [0u8; ADDON_SIZE];
		addons.copy_from_slice(&buffer[ADDON_OFFSET..ADDON_OFFSET + ADDON_SIZE]);

		Ok(EquipmentRecord {
			refine_level: buffer[REFINE_OFFSET],
			durability: u16::from_le_bytes(
				buffer[DURABILITY_OFFSET..DURABILITY_OFFSET + 2].try_into().unwrap(),
			),
			max_durability: u16::from_le_bytes(
				buffer[MAX_DURABILITY_OFFSET..MAX_DURABILITY_OFFSET + 2].try_into().unwrap(),
			),
			sockets,
			addons,
			flags: u32::from_le_bytes(buffer[FLAGS_OFFSET..FLAGS_OFFSET + 4].try_into().unwrap()),
		})
	}

	fn serialize(&self, record: &EquipmentRecord) -> Octets {
		let mut buffer = vec![0u8; RECORD_SIZE];

		buffer[REFINE_OFFSET] = record.refine_level;
		buffer[DURABILITY_OFFSET..DURABILITY_OFFSET + 2].copy_from_slice(&record.durability.to_le_bytes());
		buffer[MAX_DURABILITY_OFFSET..MAX_DURABILITY_OFFSET + 2]
			.copy_from_slice(&record.max_durability.to_le_bytes());
		for (i, socket) in record.sockets.iter().enumerate() {
			let at = SOCKET_OFFSET + i * 4;
			buffer[at..at + 4].copy_from_slice(&socket.to_le_bytes());
		}
		buffer[ADDON_OFFSET..ADDON_OFFSET + ADDON_SIZE].copy_from_slice(&record.addons);
		buffer[FLAGS_OFFSET..FLAGS_OFFSET + 4].copy_from_slice(&record.flags.to_le_bytes());

		Octets::new(buffer)
	}
}
