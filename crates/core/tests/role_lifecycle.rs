// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! End-to-end lifecycle tests: flat storage row in, structured record out,
//! lazy blob decode, edit, re-encode, and back to a flat row.

use roledb_core::{EquipmentCodec, EquipmentRecord, RawRow, RecordCodec, RoleRecord, Version};
use roledb_type::{Octets, Value};

fn equipped_row() -> RawRow {
	let worn = EquipmentRecord {
		refine_level: 3,
		durability: 900,
		max_durability: 1_000,
		sockets: [501, 502, 0, 0],
		addons: [0u8; 40],
		flags: 0x0000_0010,
	};
	let blob = EquipmentCodec.serialize(&worn);

	let mut row = RawRow::new();
	row.insert("id", Value::Int4(4096));
	row.insert("name", Value::Name("deicide".to_string()));
	row.insert("level", Value::Int4(101));
	row.insert("equipment_items", Value::Octets(blob));
	row
}

#[test]
fn test_assemble_then_decode_equipment_blob() {
	let record = RoleRecord::assemble(&equipped_row(), Version::V156).unwrap();

	// the assembler stored the blob untouched; decoding is the
	// consumer's job
	let blob = record.equipment.octets("equipment_items").unwrap();
	let worn = EquipmentCodec.parse(blob.as_bytes()).unwrap();

	assert_eq!(worn.refine_level, 3);
	assert_eq!(worn.durability, 900);
	assert_eq!(worn.sockets, [501, 502, 0, 0]);
}

#[test]
fn test_edit_blob_and_persist() {
	let mut record = RoleRecord::assemble(&equipped_row(), Version::V156).unwrap();

	// slot editor flow: decode, bump the refine level, re-encode, store
	let blob = record.equipment.octets("equipment_items").unwrap().clone();
	let mut worn = EquipmentCodec.parse(blob.as_bytes()).unwrap();
	worn.refine_level = 12;
	worn.durability = worn.max_durability;
	let encoded = EquipmentCodec.serialize(&worn);

	assert!(record.equipment.set("equipment_items", Value::Octets(encoded.clone())));

	let row = record.disassemble();
	let persisted = row.get("equipment_items").unwrap().as_octets().unwrap();
	assert_eq!(persisted, &encoded);

	// and the stored bytes decode back to the edited record
	let reparsed = EquipmentCodec.parse(persisted.as_bytes()).unwrap();
	assert_eq!(reparsed, worn);
}

#[test]
fn test_full_round_trip_preserves_untouched_fields() {
	let record = RoleRecord::assemble(&equipped_row(), Version::V156).unwrap();
	let row = record.disassemble();
	let reassembled = RoleRecord::assemble(&row, Version::V156).unwrap();

	assert_eq!(record, reassembled);
	assert_eq!(reassembled.status.get("level"), Some(&Value::Int4(101)));
	assert_eq!(reassembled.status.get("hp"), Some(&Value::Int4(100)));
}

#[test]
fn test_version_tag_from_storage() {
	// storage hands the layout generation over as a raw tag
	let version: Version = "151".parse().unwrap();
	let record = RoleRecord::assemble(&equipped_row(), version).unwrap();
	assert_eq!(record.version(), Version::V151);
	assert!(record.status.get("meridian_data").is_some());
	assert_eq!(record.status.get("title_data"), None);
}

#[test]
fn test_unknown_version_is_rejected() {
	let err = "160".parse::<Version>().unwrap_err();
	assert_eq!(err.code(), "VERSION_001");
}

#[test]
fn test_hex_editing_of_octet_fields() {
	// admin forms submit octet fields as hex text
	let mut record = RoleRecord::assemble(&equipped_row(), Version::V156).unwrap();

	let submitted = Octets::from_hex("0xdeadbeef").unwrap();
	assert!(record.status.set("custom_status", Value::Octets(submitted)));

	let row = record.disassemble();
	let stored = row.get("custom_status").unwrap().as_octets().unwrap();
	assert_eq!(stored.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
	assert_eq!(stored.to_hex(), "0xdeadbeef");
}
