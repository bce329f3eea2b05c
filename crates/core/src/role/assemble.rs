// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use roledb_type::Result;
use tracing::debug;

use crate::{
	error::AssembleError,
	role::{GroupValues, RawRow, RoleRecord},
	schema::{Group, Version, VersionSchema, coerce},
};

/// Identity fields with no safe default; their absence fails assembly.
const REQUIRED_FIELDS: [&str; 2] = ["id", "name"];

impl RoleRecord {
	/// Assemble a structured role record from a flat storage row.
	///
	/// Every field the version's schema declares is populated: present
	/// columns are coerced to the field's type, absent columns take the
	/// field's default. Octet columns are stored raw; sub-codecs run
	/// lazily in whichever consumer needs the decoded form.
	pub fn assemble(row: &RawRow, version: Version) -> Result<RoleRecord> {
		for field in REQUIRED_FIELDS {
			if !row.contains(field) {
				return Err(AssembleError::MissingRequiredField {
					field,
				}
				.into());
			}
		}

		let schema = VersionSchema::resolve(version);
		debug!("assembling role record, version {} with {} columns", version, row.len());

		Ok(RoleRecord {
			version,
			base: assemble_group(&schema, Group::Base, row),
			status: assemble_group(&schema, Group::Status, row),
			pocket: assemble_group(&schema, Group::Pocket, row),
			equipment: assemble_group(&schema, Group::Equipment, row),
			storehouse: assemble_group(&schema, Group::Storehouse, row),
			task: assemble_group(&schema, Group::Task, row),
		})
	}

	/// Flatten back into a storage row, every populated field under its
	/// column name in schema order. Octet fields are written through as
	/// already-serialized bytes; edited blobs must have been re-encoded
	/// with the matching record codec before this call.
	pub fn disassemble(&self) -> RawRow {
		let mut row = RawRow::new();
		for group in Group::ALL {
			for (key, value) in self.block(group).iter() {
				row.insert(key, value.clone());
			}
		}
		row
	}
}

fn assemble_group(schema: &VersionSchema, group: Group, row: &RawRow) -> GroupValues {
	let fields = schema.group(group);
	let mut values = GroupValues::with_capacity(fields.len());
	for field in fields {
		let value = match row.get(field.key) {
			Some(raw) => coerce(raw, field.r#type),
			None => field.default_value(),
		};
		values.insert(field.key, value);
	}
	values
}
