// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Diagnostic, Error, IntoDiagnostic, Result};
pub use util::cowvec::CowVec;
pub use value::{Octets, OrderedF32, Type, Value};

pub mod error;
pub mod util;
pub mod value;
