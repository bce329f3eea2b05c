// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! Per-version field tables for the six role record groups.
//!
//! Later layout generations only ever append fields; nothing is removed or
//! reordered between versions.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use roledb_type::{Type, Value};

use crate::schema::{FieldDef, Version, VersionSchema};

static REGISTRY: Lazy<BTreeMap<Version, VersionSchema>> =
	Lazy::new(|| Version::ALL.iter().map(|&version| (version, build(version))).collect());

pub(crate) fn registry_get(version: Version) -> VersionSchema {
	REGISTRY[&version].clone()
}

fn build(version: Version) -> VersionSchema {
	VersionSchema::new(version, [
		base(version),
		status(version),
		pocket(version),
		equipment(version),
		storehouse(version),
		task(version),
	])
}

fn base(version: Version) -> Vec<FieldDef> {
	let mut fields = vec![
		FieldDef::new("id", Type::Int4, "Role ID").read_only(),
		FieldDef::new("name", Type::Name, "Name"),
		FieldDef::new("race", Type::Int4, "Race"),
		FieldDef::new("cls", Type::Int4, "Class"),
		FieldDef::new("gender", Type::Uint1, "Gender"),
		FieldDef::new("custom_data", Type::Octets, "Custom data"),
		FieldDef::new("config_data", Type::Octets, "Config data"),
		FieldDef::new("custom_stamp", Type::Int4, "Custom stamp"),
		FieldDef::new("status", Type::Uint1, "Status"),
		FieldDef::new("delete_time", Type::Int8, "Delete time").read_only(),
		FieldDef::new("create_time", Type::Int8, "Create time").read_only(),
		FieldDef::new("lastlogin_time", Type::Int8, "Last login time").read_only(),
		FieldDef::new("forbid", Type::Octets, "Forbid list"),
		FieldDef::new("spouse", Type::Int4, "Spouse"),
		FieldDef::new("userid", Type::Int4, "User ID").read_only(),
	];
	if version >= Version::V144 {
		fields.push(FieldDef::new("help_states", Type::Octets, "Help states"));
	}
	if version >= Version::V151 {
		fields.push(FieldDef::new("cross_data", Type::Octets, "Cross-server data"));
	}
	if version >= Version::V156 {
		fields.push(FieldDef::new("reserved2", Type::Uint1, "Reserved"));
	}
	fields
}

fn status(version: Version) -> Vec<FieldDef> {
	let mut fields = vec![
		FieldDef::new("level", Type::Int4, "Level").with_default(Value::Int4(1)),
		FieldDef::new("level2", Type::Int4, "Cultivation level"),
		FieldDef::new("exp", Type::Varint, "Experience"),
		FieldDef::new("sp", Type::Varint, "Spirit"),
		FieldDef::new("pp", Type::Varint, "Skill points"),
		FieldDef::new("hp", Type::Int4, "HP").with_default(Value::Int4(100)),
		FieldDef::new("mp", Type::Int4, "MP"),
		FieldDef::new("posx", Type::Float4, "Position X"),
		FieldDef::new("posy", Type::Float4, "Position Y"),
		FieldDef::new("posz", Type::Float4, "Position Z"),
		FieldDef::new("worldtag", Type::Int4, "World tag"),
		FieldDef::new("invader_state", Type::Int4, "Invader state"),
		FieldDef::new("invader_time", Type::Int8, "Invader time"),
		FieldDef::new("pariah_time", Type::Int8, "Pariah time"),
		FieldDef::new("reputation", Type::Int4, "Reputation"),
		FieldDef::new("custom_status", Type::Octets, "Custom status"),
		FieldDef::new("filter_data", Type::Octets, "Filter data"),
		FieldDef::new("charactermode", Type::Octets, "Character mode"),
		FieldDef::new("storesize", Type::Int2, "Store size"),
		FieldDef::new("petcorral", Type::Octets, "Pet corral"),
		FieldDef::new("property", Type::Octets, "Property"),
		FieldDef::new("var_data", Type::Octets, "Variable data"),
		FieldDef::new("skills", Type::Octets, "Skills"),
		FieldDef::new("storehousepasswd", Type::Name, "Storehouse password"),
		FieldDef::new("waypointlist", Type::Octets, "Waypoints"),
		FieldDef::new("coolingtime", Type::Octets, "Cooldowns"),
		FieldDef::new("npc_relation", Type::Octets, "NPC relations"),
	];
	if version >= Version::V144 {
		fields.push(FieldDef::new("multi_exp_ctrl", Type::Octets, "Multi-exp control"));
		fields.push(FieldDef::new("storage_task", Type::Octets, "Storage task"));
		fields.push(FieldDef::new("faction_contrib", Type::Varint, "Faction contribution"));
	}
	if version >= Version::V151 {
		fields.push(FieldDef::new("force_data", Type::Octets, "Force data"));
		fields.push(FieldDef::new("online_award_data", Type::Octets, "Online award data"));
		fields.push(FieldDef::new("profit_time", Type::Varint, "Profit time"));
		fields.push(FieldDef::new("meridian_data", Type::Octets, "Meridian data"));
	}
	if version >= Version::V156 {
		fields.push(FieldDef::new("title_data", Type::Octets, "Title data"));
		fields.push(FieldDef::new("reincarnation_data", Type::Octets, "Reincarnation data"));
		fields.push(FieldDef::new("realm_data", Type::Octets, "Realm data"));
	}
	fields
}

// Container columns carry their group prefix: the flat storage row is one
// namespace, so keys must stay unique across groups, not just within one.
fn pocket(version: Version) -> Vec<FieldDef> {
	let mut fields = vec![
		FieldDef::new("pocket_capacity", Type::Int4, "Capacity"),
		FieldDef::new("pocket_timestamp", Type::Int8, "Timestamp").read_only(),
		FieldDef::new("pocket_money", Type::Varint, "Money"),
		FieldDef::new("pocket_items", Type::Octets, "Items"),
	];
	if version >= Version::V151 {
		fields.push(FieldDef::new("pocket_reserved1", Type::Int4, "Reserved"));
	}
	fields
}

fn equipment(_version: Version) -> Vec<FieldDef> {
	vec![
		FieldDef::new("equipment_capacity", Type::Int4, "Capacity"),
		FieldDef::new("equipment_timestamp", Type::Int8, "Timestamp").read_only(),
		FieldDef::new("equipment_items", Type::Octets, "Items"),
	]
}

fn storehouse(version: Version) -> Vec<FieldDef> {
	let mut fields = vec![
		FieldDef::new("storehouse_capacity", Type::Int4, "Capacity"),
		FieldDef::new("storehouse_money", Type::Varint, "Money"),
		FieldDef::new("storehouse_items", Type::Octets, "Items"),
		FieldDef::new("storehouse_size1", Type::Uint1, "Tab 1 size"),
		FieldDef::new("storehouse_size2", Type::Uint1, "Tab 2 size"),
	];
	if version >= Version::V144 {
		fields.push(FieldDef::new("storehouse_dress", Type::Octets, "Fashion tab"));
	}
	if version >= Version::V151 {
		fields.push(FieldDef::new("storehouse_material", Type::Octets, "Material tab"));
		fields.push(FieldDef::new("storehouse_size3", Type::Uint1, "Tab 3 size"));
	}
	if version >= Version::V156 {
		fields.push(FieldDef::new("storehouse_generalcard", Type::Octets, "Card tab"));
		fields.push(FieldDef::new("storehouse_size4", Type::Uint1, "Tab 4 size"));
	}
	fields
}

fn task(version: Version) -> Vec<FieldDef> {
	let mut fields = vec![
		FieldDef::new("task_data", Type::Octets, "Task data"),
		FieldDef::new("task_complete", Type::Octets, "Completed tasks"),
		FieldDef::new("task_finishtime", Type::Octets, "Task finish times"),
	];
	if version >= Version::V144 {
		fields.push(FieldDef::new("task_inventory", Type::Octets, "Task inventory"));
	}
	fields
}
