// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Structured validation failure reported by entry types.

use std::fmt;

use crate::keys::MessageKey;
use crate::models::entry::Entry;

/// Validation failure for one entry. Returned as a value, never raised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericAttributeError {
    /// Identity of the faulty entry.
    pub entry_id: i32,
    /// Title of the faulty entry, shown next to the message.
    pub title: String,
    pub message_key: MessageKey,
    /// Localized, user-facing text.
    pub message: String,
    /// Set when the failure is a missing mandatory value.
    pub mandatory: bool,
}

impl GenericAttributeError {
    pub fn new(entry: &Entry, message_key: MessageKey, message: impl Into<String>) -> Self {
        Self {
            entry_id: entry.id,
            title: entry.title.clone(),
            message_key,
            message: message.into(),
            mandatory: message_key == MessageKey::MandatoryField,
        }
    }
}

impl fmt::Display for GenericAttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.title, self.message)
        }
    }
}
