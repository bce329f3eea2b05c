// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! Versioned field schema for role records.
//!
//! A `VersionSchema` is the single source of truth for which fields exist
//! per record group in one layout generation, and how raw storage values
//! are coerced for display and editing. Tables are built once per version
//! and immutable for the process lifetime.

mod coerce;
mod fields;
mod version;

pub use coerce::coerce;
pub use version::Version;

use std::{ops::Deref, sync::Arc};

use roledb_type::{Result, Type, Value};
use serde::Serialize;

/// One schema entry: a named, typed field within a record group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
	/// Column name, unique within its (version, group) pair
	pub key: &'static str,
	/// Primitive type of the field
	pub r#type: Type,
	/// Human-readable label for the editing layer
	pub label: &'static str,
	/// Read-only fields are displayed but never written back
	pub read_only: bool,
	/// Policy default applied when the raw row misses this column.
	/// `None` means the type's zero value.
	pub default: Option<Value>,
}

impl FieldDef {
	pub fn new(key: &'static str, r#type: Type, label: &'static str) -> Self {
		Self {
			key,
			r#type,
			label,
			read_only: false,
			default: None,
		}
	}

	pub fn read_only(mut self) -> Self {
		self.read_only = true;
		self
	}

	pub fn with_default(mut self, value: Value) -> Self {
		self.default = Some(value);
		self
	}

	/// The value this field takes when absent from a raw row.
	pub fn default_value(&self) -> Value {
		self.default.clone().unwrap_or_else(|| self.r#type.default_value())
	}
}

/// The six record groups every role record is composed of.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize)]
pub enum Group {
	Base,
	Status,
	Pocket,
	Equipment,
	Storehouse,
	Task,
}

impl Group {
	pub const ALL: [Group; 6] =
		[Group::Base, Group::Status, Group::Pocket, Group::Equipment, Group::Storehouse, Group::Task];

	pub(crate) const fn index(self) -> usize {
		match self {
			Group::Base => 0,
			Group::Status => 1,
			Group::Pocket => 2,
			Group::Equipment => 3,
			Group::Storehouse => 4,
			Group::Task => 5,
		}
	}
}

impl std::fmt::Display for Group {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Group::Base => f.write_str("base"),
			Group::Status => f.write_str("status"),
			Group::Pocket => f.write_str("pocket"),
			Group::Equipment => f.write_str("equipment"),
			Group::Storehouse => f.write_str("storehouse"),
			Group::Task => f.write_str("task"),
		}
	}
}

/// The field-group schema of one layout version.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionSchema(Arc<VersionSchemaInner>);

impl Deref for VersionSchema {
	type Target = VersionSchemaInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VersionSchemaInner {
	pub version: Version,
	groups: [Vec<FieldDef>; 6],
}

impl VersionSchema {
	/// Look up the schema for a version. Tables are built on first use and
	/// shared read-only afterwards.
	pub fn resolve(version: Version) -> VersionSchema {
		fields::registry_get(version)
	}

	/// Parse a raw version tag and resolve its schema, failing with
	/// `UnknownVersion` for a tag outside the supported set.
	pub fn resolve_tag(tag: u32) -> Result<VersionSchema> {
		Ok(Self::resolve(Version::from_tag(tag)?))
	}

	// Keys must be unique across the whole version, not just within one
	// group: disassemble flattens every group into a single column
	// namespace.
	pub(crate) fn new(version: Version, groups: [Vec<FieldDef>; 6]) -> Self {
		let mut seen = std::collections::BTreeSet::new();
		for (group, fields) in Group::ALL.iter().zip(groups.iter()) {
			assert!(!fields.is_empty(), "group {} of version {} has no fields", group, version);
			for field in fields {
				assert!(
					seen.insert(field.key),
					"duplicate key '{}' in group {} of version {}",
					field.key,
					group,
					version
				);
			}
		}

		Self(Arc::new(VersionSchemaInner {
			version,
			groups,
		}))
	}

	pub fn version(&self) -> Version {
		self.version
	}

	/// The ordered field definitions of one group.
	pub fn group(&self, group: Group) -> &[FieldDef] {
		&self.groups[group.index()]
	}

	pub fn field(&self, group: Group, key: &str) -> Option<&FieldDef> {
		self.group(group).iter().find(|field| field.key == key)
	}
}

#[cfg(test)]
mod tests {
	mod resolve {
		use crate::schema::{Group, Version, VersionSchema};

		#[test]
		fn test_all_groups_non_empty() {
			for version in Version::ALL {
				let schema = VersionSchema::resolve(version);
				for group in Group::ALL {
					assert!(!schema.group(group).is_empty(), "{} {}", version, group);
				}
			}
		}

		#[test]
		fn test_resolve_tag() {
			let schema = VersionSchema::resolve_tag(156).unwrap();
			assert_eq!(schema.version(), Version::V156);
		}

		#[test]
		fn test_resolve_tag_unknown() {
			let err = VersionSchema::resolve_tag(999).unwrap_err();
			assert_eq!(err.code(), "VERSION_001");
		}

		#[test]
		fn test_versions_differ() {
			let v136 = VersionSchema::resolve(Version::V136);
			let v156 = VersionSchema::resolve(Version::V156);
			assert!(v136.group(Group::Status).len() < v156.group(Group::Status).len());
		}

		#[test]
		fn test_resolve_shares_table() {
			let a = VersionSchema::resolve(Version::V151);
			let b = VersionSchema::resolve(Version::V151);
			assert_eq!(a, b);
		}
	}

	mod field {
		use roledb_type::{Type, Value};

		use crate::schema::{Group, Version, VersionSchema};

		#[test]
		fn test_lookup() {
			let schema = VersionSchema::resolve(Version::V156);
			let field = schema.field(Group::Base, "id").unwrap();
			assert_eq!(field.r#type, Type::Int4);
			assert!(field.read_only);
		}

		#[test]
		fn test_lookup_missing() {
			let schema = VersionSchema::resolve(Version::V156);
			assert!(schema.field(Group::Base, "no_such_field").is_none());
		}

		#[test]
		fn test_policy_defaults() {
			let schema = VersionSchema::resolve(Version::V156);
			let level = schema.field(Group::Status, "level").unwrap();
			assert_eq!(level.default_value(), Value::Int4(1));

			let hp = schema.field(Group::Status, "hp").unwrap();
			assert_eq!(hp.default_value(), Value::Int4(100));

			let exp = schema.field(Group::Status, "exp").unwrap();
			assert_eq!(exp.default_value(), Value::Varint(0));
		}

		#[test]
		fn test_version_gated_field() {
			let v136 = VersionSchema::resolve(Version::V136);
			let v151 = VersionSchema::resolve(Version::V151);
			assert!(v136.field(Group::Status, "meridian_data").is_none());
			assert!(v151.field(Group::Status, "meridian_data").is_some());
		}
	}
}
