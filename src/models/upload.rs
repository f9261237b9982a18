// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Uploaded file handles (content-agnostic).

use crate::utils::sanitize_component;

/// Metadata of one uploaded file. Only name and size are inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub sanitized_name: String,
    pub mime: String,
    pub size: u64,
}

impl FileItem {
    /// Build an item, guessing the MIME type from the file name.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let mime = guess_mime(&name);
        Self::with_mime(name, mime, size)
    }

    /// Build an item with the content type announced by the client.
    pub fn with_mime(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            sanitized_name: sanitize_component(&name),
            name,
            mime: mime.into(),
            size,
        }
    }
}

/// Sum of the sizes of every item in the given lists.
pub fn total_size<'a>(lists: impl IntoIterator<Item = &'a [FileItem]>) -> u64 {
    lists
        .into_iter()
        .flat_map(|items| items.iter())
        .map(|item| item.size)
        .sum()
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{FileItem, total_size};

    #[test]
    fn new_guesses_mime_and_sanitizes_name() {
        let item = FileItem::new("Relevé (final).pdf", 10);
        assert_eq!(item.mime, "application/pdf");
        assert_eq!(item.sanitized_name, "Releve_final.pdf");
        assert_eq!(item.name, "Relevé (final).pdf");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(FileItem::new("blob.zzzq", 1).mime, "application/octet-stream");
    }

    #[test]
    fn total_size_spans_all_lists() {
        let a = vec![FileItem::new("a.txt", 3), FileItem::new("b.txt", 4)];
        let b = vec![FileItem::new("c.txt", 5)];
        assert_eq!(total_size([a.as_slice(), b.as_slice()]), 12);
    }
}
