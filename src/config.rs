// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Host-tunable settings, layered from an optional file and `GENATTR__*` environment variables.

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

/// Default per-file upload limit in bytes (5 MiB).
pub const DEFAULT_FILE_MAX_SIZE: u64 = 5_242_880;

/// Where a unique entry value must not repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniquenessScope {
    /// Within the responses of the same form.
    #[default]
    Form,
    /// Across every stored response of the host dataset.
    Dataset,
}

/// Template lookup roots for each display context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub front_root: String,
    pub back_root: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            front_root: "skin/plugins/genericattributes/entries".to_string(),
            back_root: "admin/plugins/genericattributes/entries".to_string(),
        }
    }
}

/// Upload defaults applied when an entry does not set its own limits.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub default_max_files: usize,
    pub default_file_max_size: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            default_max_files: 1,
            default_file_max_size: DEFAULT_FILE_MAX_SIZE,
        }
    }
}

/// Settings shared by every entry type service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Locale used when a caller does not pass one.
    pub default_locale: String,
    /// Characters whose presence in a submitted value is treated as an injection attempt.
    pub xss_characters: String,
    /// Admin message page that validation redirects point to.
    pub admin_message_url: String,
    pub templates: TemplateSettings,
    pub upload: UploadSettings,
    pub uniqueness: UniquenessScope,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            xss_characters: "<>&\"'".to_string(),
            admin_message_url: "jsp/admin/AdminMessage.jsp".to_string(),
            templates: TemplateSettings::default(),
            upload: UploadSettings::default(),
            uniqueness: UniquenessScope::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (any format the `config` crate understands),
    /// then apply `GENATTR__*` environment overrides, e.g.
    /// `GENATTR__UPLOAD__DEFAULT_FILE_MAX_SIZE=1048576`.
    ///
    /// Every key is optional; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `path` is given but cannot be read, or when a
    /// value does not deserialize into the expected type.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            info!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix("GENATTR").separator("__"));

        builder
            .build()
            .context("Failed to build settings")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize settings")
    }
}
