// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

pub mod cowvec;
pub mod hex;
