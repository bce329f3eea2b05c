// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use roledb_type::{Diagnostic, Error, IntoDiagnostic};

use crate::{codec::RecordKind, schema::Version};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	#[error("unsupported schema version tag '{tag}'")]
	UnknownVersion {
		tag: String,
	},
}

impl IntoDiagnostic for SchemaError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SchemaError::UnknownVersion { tag } => {
				let supported = Version::ALL
					.iter()
					.map(|version| version.tag().to_string())
					.collect::<Vec<_>>()
					.join(", ");
				Diagnostic {
					code: "VERSION_001".to_string(),
					message: format!("unsupported schema version tag '{}'", tag),
					label: Some("unknown version".to_string()),
					help: Some(format!("use one of the supported version tags: {}", supported)),
					notes: vec![
						"a version tag identifies the generation of the on-disk role record layout"
							.to_string(),
					],
				}
			}
		}
	}
}

impl From<SchemaError> for Error {
	fn from(err: SchemaError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	#[error("{kind} record requires {expected} bytes, buffer has {actual}")]
	BufferTooShort {
		kind: RecordKind,
		expected: usize,
		actual: usize,
	},
}

impl IntoDiagnostic for CodecError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CodecError::BufferTooShort {
				kind,
				expected,
				actual,
			} => Diagnostic {
				code: "RECORD_001".to_string(),
				message: format!("{} record requires {} bytes, buffer has {}", kind, expected, actual),
				label: Some("buffer too short".to_string()),
				help: Some(format!("provide the full {}-byte {} record", expected, kind)),
				notes: vec![
					"record layouts are fixed-size; a short buffer is never padded and continued"
						.to_string(),
				],
			},
		}
	}
}

impl From<CodecError> for Error {
	fn from(err: CodecError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
	#[error("required field '{field}' missing from raw row")]
	MissingRequiredField {
		field: &'static str,
	},
}

impl IntoDiagnostic for AssembleError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			AssembleError::MissingRequiredField { field } => Diagnostic {
				code: "ASSEMBLE_001".to_string(),
				message: format!("required field '{}' missing from raw row", field),
				label: Some("missing identity field".to_string()),
				help: Some(format!("the storage layer must supply a '{}' column; it has no safe default", field)),
				notes: vec![
					"only the identity fields 'id' and 'name' are required; every other field falls back to its default".to_string(),
				],
			},
		}
	}
}

impl From<AssembleError> for Error {
	fn from(err: AssembleError) -> Self {
		Error(err.into_diagnostic())
	}
}
