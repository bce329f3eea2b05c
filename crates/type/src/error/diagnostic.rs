// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A structured description of a failure, carrying a stable code the caller
/// can branch on without string matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// Conversion of a domain error into its diagnostic form.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_is_code() {
		let diagnostic = Diagnostic {
			code: "RECORD_001".to_string(),
			message: "buffer too short".to_string(),
			label: None,
			help: None,
			notes: vec![],
		};
		assert_eq!(diagnostic.to_string(), "RECORD_001");
	}

	#[test]
	fn test_json_round_trip() {
		let diagnostic = Diagnostic {
			code: "VERSION_001".to_string(),
			message: "unsupported schema version tag '999'".to_string(),
			label: Some("unknown version".to_string()),
			help: Some("use one of: 136, 144, 151, 156".to_string()),
			notes: vec!["version tags are closed".to_string()],
		};

		let json = serde_json::to_string(&diagnostic).unwrap();
		let parsed: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed, diagnostic);
	}
}
