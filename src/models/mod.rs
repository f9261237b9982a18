// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: entries, responses and validation results shared by every entry type.

pub mod entry;
pub mod error;
pub mod reference;
pub mod response;
pub mod upload;

pub use entry::{Entry, EntryKind, Field, RegularExpression, UploadLimits, parse_entries};
pub use error::GenericAttributeError;
pub use reference::{ReferenceItem, ReferenceList};
pub use response::{Response, ResponseData};
pub use upload::FileItem;
