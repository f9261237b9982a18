// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Multi-line text input.

use std::sync::Arc;

use crate::entry_types::text::{available_expressions, extract_text_response};
use crate::expressions::RegularExpressionSource;
use crate::i18n::Locale;
use crate::keys::attribute_name;
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::models::{Entry, ReferenceList, ResponseData};
use crate::render::{self, Display, escape, opt_attr};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `textarea` entries; width and height map to columns and rows.
#[derive(Debug)]
pub struct TextAreaEntryType {
    ctx: Arc<ServiceContext>,
}

impl TextAreaEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

impl EntryTypeService for TextAreaEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let field = entry.primary_field();
        let mut inner = render::label(entry, &name);
        inner.push_str(&format!(
            "<textarea name=\"{0}\" id=\"{0}\"{1}{2}{3}{4}{5}>{6}</textarea>",
            escape(&name),
            opt_attr("cols", field.and_then(|f| f.width)),
            opt_attr("rows", field.and_then(|f| f.height)),
            opt_attr("maxlength", entry.max_size_enter()),
            if entry.mandatory { " required" } else { "" },
            display.input_state(),
            escape(field.map(|f| f.value.as_str()).unwrap_or_default()),
        ));
        render::wrap(entry, display, &inner)
    }

    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String> {
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::TEXT_AREA)
    }

    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData {
        extract_text_response(self, entry, request, locale, None, None)
    }

    fn list_regular_expressions(
        &self,
        entry: &Entry,
        source: &dyn RegularExpressionSource,
    ) -> ReferenceList {
        available_expressions(entry, source)
    }
}
