// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use super::Octets;
use crate::{
	Error,
	error::octets,
	util::hex::{decode, encode},
};

impl Octets {
	/// Parse a hex string, with or without a `0x` prefix, into octets.
	/// This is how the admin tooling submits edited blob fields.
	pub fn from_hex(text: &str) -> Result<Self, Error> {
		let clean_hex = if text.starts_with("0x") || text.starts_with("0X") {
			&text[2..]
		} else {
			text
		};

		match decode(clean_hex) {
			Ok(bytes) => Ok(Octets::new(bytes)),
			Err(_) => Err(Error(octets::invalid_hex_string(text))),
		}
	}

	pub fn to_hex(&self) -> String {
		format!("0x{}", encode(self.as_bytes()))
	}
}
