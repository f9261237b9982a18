// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Behavior shared across entry types: admin form parsing and value checks.

pub(crate) mod admin;
pub(crate) mod validation;
