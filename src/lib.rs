// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Generic attributes: configurable form entries for web portals.
//!
//! Each entry kind is handled by an [`service::EntryTypeService`]; the
//! [`registry::EntryTypeRegistry`] dispatches entries to their service.

pub mod config;
pub mod entry_types;
pub mod expressions;
pub mod i18n;
pub mod keys;
mod logic;
pub mod models;
pub mod registry;
pub mod render;
pub mod request;
pub mod service;
pub mod unique;
pub mod utils;
