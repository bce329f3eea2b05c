// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! Structured role records and the flat rows they assemble from.

mod assemble;

use indexmap::IndexMap;
use roledb_type::{Octets, Value};
use serde::{Deserialize, Serialize};

use crate::schema::{Group, Version};

/// A flat storage row: scalar and blob columns keyed by column name, in
/// the order the storage layer produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow(IndexMap<String, Value>);

impl RawRow {
	pub fn new() -> Self {
		RawRow(IndexMap::new())
	}

	pub fn insert(&mut self, column: impl Into<String>, value: Value) {
		self.0.insert(column.into(), value);
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn contains(&self, column: &str) -> bool {
		self.0.contains_key(column)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(column, value)| (column.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(String, Value)> for RawRow {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		RawRow(iter.into_iter().collect())
	}
}

/// One assembled record group: field key to coerced value, in schema
/// field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupValues(IndexMap<&'static str, Value>);

impl GroupValues {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		GroupValues(IndexMap::with_capacity(capacity))
	}

	pub(crate) fn insert(&mut self, key: &'static str, value: Value) {
		self.0.insert(key, value);
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Replace the value of an existing field. Fields not declared by the
	/// schema cannot be introduced through editing; those writes return
	/// false.
	pub fn set(&mut self, key: &str, value: Value) -> bool {
		match self.0.get_mut(key) {
			Some(slot) => {
				*slot = value;
				true
			}
			None => false,
		}
	}

	/// The raw blob of an octet-typed field, for consumers that apply a
	/// record codec themselves.
	pub fn octets(&self, key: &str) -> Option<&Octets> {
		self.get(key).and_then(Value::as_octets)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
		self.0.iter().map(|(key, value)| (*key, value))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// A fully assembled role record: one block per record group, every
/// schema field populated. Assembled fresh per request; never shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRecord {
	version: Version,
	pub base: GroupValues,
	pub status: GroupValues,
	pub pocket: GroupValues,
	pub equipment: GroupValues,
	pub storehouse: GroupValues,
	pub task: GroupValues,
}

impl RoleRecord {
	pub fn version(&self) -> Version {
		self.version
	}

	pub fn block(&self, group: Group) -> &GroupValues {
		match group {
			Group::Base => &self.base,
			Group::Status => &self.status,
			Group::Pocket => &self.pocket,
			Group::Equipment => &self.equipment,
			Group::Storehouse => &self.storehouse,
			Group::Task => &self.task,
		}
	}

	pub fn block_mut(&mut self, group: Group) -> &mut GroupValues {
		match group {
			Group::Base => &mut self.base,
			Group::Status => &mut self.status,
			Group::Pocket => &mut self.pocket,
			Group::Equipment => &mut self.equipment,
			Group::Storehouse => &mut self.storehouse,
			Group::Task => &mut self.task,
		}
	}

	pub fn id(&self) -> i32 {
		match self.base.get("id") {
			Some(Value::Int4(id)) => *id,
			_ => 0,
		}
	}

	pub fn name(&self) -> &str {
		match self.base.get("name") {
			Some(Value::Name(name)) => name,
			_ => "",
		}
	}
}

#[cfg(test)]
mod tests {
	use roledb_type::{Octets, Value};

	use super::*;

	#[test]
	fn test_raw_row_preserves_order() {
		let mut row = RawRow::new();
		row.insert("zeta", Value::Int4(1));
		row.insert("alpha", Value::Int4(2));
		row.insert("mid", Value::Int4(3));

		let columns: Vec<&str> = row.iter().map(|(column, _)| column).collect();
		assert_eq!(columns, vec!["zeta", "alpha", "mid"]);
	}

	#[test]
	fn test_group_values_set_existing_only() {
		let mut values = GroupValues::with_capacity(1);
		values.insert("level", Value::Int4(1));

		assert!(values.set("level", Value::Int4(5)));
		assert_eq!(values.get("level"), Some(&Value::Int4(5)));

		assert!(!values.set("unknown", Value::Int4(9)));
		assert_eq!(values.get("unknown"), None);
	}

	#[test]
	fn test_group_values_octets_accessor() {
		let mut values = GroupValues::with_capacity(2);
		values.insert("items", Value::Octets(Octets::from_slice(&[1, 2])));
		values.insert("capacity", Value::Int4(8));

		assert_eq!(values.octets("items").unwrap().as_bytes(), &[1, 2]);
		assert_eq!(values.octets("capacity"), None);
		assert_eq!(values.octets("missing"), None);
	}

	#[test]
	fn test_raw_row_json_round_trip() {
		let mut row = RawRow::new();
		row.insert("id", Value::Int4(5));
		row.insert("name", Value::Name("alice".to_string()));
		row.insert("skills", Value::Octets(Octets::from_slice(&[9, 8, 7])));

		let json = serde_json::to_string(&row).unwrap();
		let parsed: RawRow = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, row);

		// column order is part of the row's identity
		let columns: Vec<&str> = parsed.iter().map(|(column, _)| column).collect();
		assert_eq!(columns, vec!["id", "name", "skills"]);
	}
}
