// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use codec::{EquipmentCodec, EquipmentRecord, RecordCodec, RecordKind};
pub use error::{AssembleError, CodecError, SchemaError};
pub use role::{GroupValues, RawRow, RoleRecord};
pub use roledb_type::{Error, Result};
pub use schema::{FieldDef, Group, Version, VersionSchema, coerce};

pub mod codec;
pub mod error;
pub mod role;
pub mod schema;
