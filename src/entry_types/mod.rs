// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Built-in entry type services, one per [`crate::models::EntryKind`].

mod choice;
mod comment;
mod date;
mod file;
mod numeric;
mod text;
mod textarea;
mod user;

pub use choice::{ChoiceEntryType, ChoiceStyle};
pub use comment::CommentEntryType;
pub use date::DateEntryType;
pub use file::FileEntryType;
pub use numeric::NumericEntryType;
pub use text::TextEntryType;
pub use textarea::TextAreaEntryType;
pub use user::UserEntryType;
