// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Small helpers without a better home.

pub mod sanitize_component;

/// Sanitize client-supplied file names.
pub use sanitize_component::sanitize_component;
