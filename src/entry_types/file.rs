// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! File upload entries and their upload limits.

use std::sync::Arc;

use tracing::warn;

use crate::i18n::Locale;
use crate::keys::{MessageKey, attribute_name};
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::logic::validation::mandatory_error;
use crate::models::upload::total_size;
use crate::models::{Entry, FileItem, GenericAttributeError, Response, ResponseData};
use crate::render::{self, Display, escape};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `file` entries: one response per uploaded file.
#[derive(Debug)]
pub struct FileEntryType {
    ctx: Arc<ServiceContext>,
}

impl FileEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    fn max_files(&self, entry: &Entry) -> usize {
        entry
            .upload
            .max_files
            .unwrap_or(self.ctx.settings.upload.default_max_files)
    }

    fn file_max_size(&self, entry: &Entry) -> u64 {
        entry
            .upload
            .file_max_size
            .unwrap_or(self.ctx.settings.upload.default_file_max_size)
    }
}

impl EntryTypeService for FileEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&format!(
            "<input type=\"file\" name=\"{0}\" id=\"{0}\"{1}{2}{3}>",
            escape(&name),
            if self.max_files(entry) > 1 { " multiple" } else { "" },
            if entry.mandatory { " required" } else { "" },
            display.input_state(),
        ));
        render::wrap(entry, display, &inner)
    }

    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String> {
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::UPLOAD)
    }

    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData {
        let files = request.files(&attribute_name(entry.id));
        let responses: Vec<Response> = files
            .iter()
            .map(|file| Response {
                entry_id: entry.id,
                value: Some(file.sanitized_name.clone()),
                to_string_value: Some(file.sanitized_name.clone()),
                field_id: entry.primary_field().map(|f| f.id),
                file: Some(file.clone()),
            })
            .collect();

        if files.is_empty() {
            if entry.mandatory {
                return ResponseData::failed(responses, mandatory_error(&self.ctx, entry, locale));
            }
            return ResponseData::ok(responses);
        }
        match self.can_upload_files(entry, &[], files, locale) {
            Some(error) => ResponseData::failed(responses, error),
            None => ResponseData::ok(responses),
        }
    }

    fn format_for_export(
        &self,
        _entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        _locale: &Locale,
    ) -> String {
        match &response.file {
            Some(file) => file.sanitized_name.clone(),
            None => response.value_or_empty().to_string(),
        }
    }

    fn format_for_recap(
        &self,
        entry: &Entry,
        request: Option<&dyn FormSource>,
        response: &Response,
        locale: &Locale,
    ) -> String {
        self.format_for_export(entry, request, response, locale)
    }

    fn can_upload_files(
        &self,
        entry: &Entry,
        uploaded: &[FileItem],
        to_upload: &[FileItem],
        locale: &Locale,
    ) -> Option<GenericAttributeError> {
        let max_files = self.max_files(entry);
        let count = uploaded.len() + to_upload.len();
        if count > max_files {
            warn!(entry = entry.id, count, max_files, "too many files");
            return Some(self.ctx.limit_error(
                entry,
                MessageKey::MaxFiles,
                locale,
                &max_files.to_string(),
            ));
        }

        let file_max_size = self.file_max_size(entry);
        if let Some(file) = to_upload.iter().find(|f| f.size > file_max_size) {
            warn!(entry = entry.id, file = %file.name, size = file.size, "file too large");
            return Some(self.ctx.limit_error(
                entry,
                MessageKey::FileMaxSize,
                locale,
                &file_max_size.to_string(),
            ));
        }

        if let Some(total_max_size) = entry.upload.total_max_size {
            let total = total_size([uploaded, to_upload]);
            if total > total_max_size {
                warn!(entry = entry.id, total, total_max_size, "uploads too large");
                return Some(self.ctx.limit_error(
                    entry,
                    MessageKey::TotalMaxSize,
                    locale,
                    &total_max_size.to_string(),
                ));
            }
        }

        None
    }
}
