// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

//! Octets-related diagnostic functions

use crate::error::Diagnostic;

/// Invalid hexadecimal string in an octets constructor
pub fn invalid_hex_string(text: &str) -> Diagnostic {
	Diagnostic {
		code: "OCTETS_001".to_string(),
		message: format!("Invalid hexadecimal string: '{}'", text),
		label: Some("Invalid hex characters found".to_string()),
		help: Some("Hex strings should only contain 0-9, a-f, A-F characters and have an even number of digits".to_string()),
		notes: vec![],
	}
}
