// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Ordered code/name list handed to the UI layer (select boxes).

/// One selectable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceItem {
    pub code: String,
    pub name: String,
}

/// Ordered list of reference items; insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceList {
    items: Vec<ReferenceItem>,
}

impl ReferenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, code: impl ToString, name: impl Into<String>) {
        self.items.push(ReferenceItem {
            code: code.to_string(),
            name: name.into(),
        });
    }

    pub fn items(&self) -> &[ReferenceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ReferenceItem> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = ReferenceItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
