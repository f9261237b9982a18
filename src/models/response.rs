// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Submitted values and the outcome of response extraction.

use crate::models::error::GenericAttributeError;
use crate::models::upload::FileItem;

/// A submitted value instance associated with an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub entry_id: i32,
    /// Raw value as submitted (trimmed).
    pub value: Option<String>,
    /// Display form of the value, derived by the entry type.
    pub to_string_value: Option<String>,
    /// Chosen field (option) for choice kinds, the primary field otherwise.
    pub field_id: Option<i32>,
    pub file: Option<FileItem>,
}

impl Response {
    pub fn new(entry_id: i32) -> Self {
        Self {
            entry_id,
            ..Self::default()
        }
    }

    pub fn with_value(entry_id: i32, value: impl Into<String>) -> Self {
        Self {
            entry_id,
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Raw value, or `""` when none was stored.
    pub fn value_or_empty(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// Responses produced for one entry, plus the first validation failure.
///
/// Responses are kept even when `error` is set so the form can be
/// redisplayed with what the user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseData {
    pub responses: Vec<Response>,
    pub error: Option<GenericAttributeError>,
}

impl ResponseData {
    pub fn ok(responses: Vec<Response>) -> Self {
        Self {
            responses,
            error: None,
        }
    }

    pub fn failed(responses: Vec<Response>, error: GenericAttributeError) -> Self {
        Self {
            responses,
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}
