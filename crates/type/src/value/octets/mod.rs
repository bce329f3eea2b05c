// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

mod hex;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::cowvec::CowVec;

/// An opaque binary blob field of a role record. Cheap to clone: the bytes
/// are shared copy-on-write between the assembled record and the raw row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Octets(CowVec<u8>);

impl Octets {
	pub fn new(bytes: Vec<u8>) -> Self {
		Octets(CowVec::new(bytes))
	}

	pub fn from_slice(bytes: &[u8]) -> Self {
		Octets(CowVec::new(bytes.to_vec()))
	}

	pub fn empty() -> Self {
		Octets(CowVec::default())
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_slice()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Octets {
	fn from(bytes: Vec<u8>) -> Self {
		Octets::new(bytes)
	}
}

impl Display for Octets {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}
