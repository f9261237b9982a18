// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Choice entries (select, radio, checkbox): every entry field is an option
//! and the submitted values are field ids.

use std::sync::Arc;

use tracing::debug;

use crate::i18n::Locale;
use crate::keys::attribute_name;
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::logic::validation::mandatory_error;
use crate::models::{Entry, Field, Response, ResponseData};
use crate::render::{self, Display, escape};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// How options are presented and how many may be chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceStyle {
    Select,
    Radio,
    Checkbox,
}

impl ChoiceStyle {
    fn allows_many(self) -> bool {
        self == Self::Checkbox
    }
}

/// `select`, `radio` and `checkbox` entries.
#[derive(Debug)]
pub struct ChoiceEntryType {
    ctx: Arc<ServiceContext>,
    style: ChoiceStyle,
}

impl ChoiceEntryType {
    pub fn new(ctx: Arc<ServiceContext>, style: ChoiceStyle) -> Self {
        Self { ctx, style }
    }

    fn render_options(&self, entry: &Entry, display: Display, name: &str) -> String {
        let state = display.input_state();
        match self.style {
            ChoiceStyle::Select => {
                let mut out = format!(
                    "<select name=\"{0}\" id=\"{0}\"{1}{state}>",
                    escape(name),
                    if entry.mandatory { " required" } else { "" },
                );
                if !entry.mandatory {
                    out.push_str("<option value=\"\"></option>");
                }
                for field in &entry.fields {
                    out.push_str(&format!(
                        "<option value=\"{}\"{}>{}</option>",
                        field.id,
                        if field.default_value { " selected" } else { "" },
                        escape(&field.title),
                    ));
                }
                out.push_str("</select>");
                out
            }
            ChoiceStyle::Radio | ChoiceStyle::Checkbox => {
                let input_type = if self.style == ChoiceStyle::Radio {
                    "radio"
                } else {
                    "checkbox"
                };
                entry
                    .fields
                    .iter()
                    .map(|field| {
                        format!(
                            "<label class=\"{input_type}\"><input type=\"{input_type}\" name=\"{}\" value=\"{}\"{}{state}> {}</label>",
                            escape(name),
                            field.id,
                            if field.default_value { " checked" } else { "" },
                            escape(&field.title),
                        )
                    })
                    .collect()
            }
        }
    }

    /// Options chosen in the request, in submission order; unknown and repeated ids are dropped.
    fn chosen_fields<'a>(&self, entry: &'a Entry, request: &dyn FormSource) -> Vec<&'a Field> {
        let mut values = request.parameter_values(&attribute_name(entry.id));
        if !self.style.allows_many() {
            values.truncate(1);
        }
        let mut chosen: Vec<&Field> = Vec::with_capacity(values.len());
        for raw in values {
            let field = raw
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|id| entry.field_by_id(id));
            match field {
                Some(field) if chosen.iter().any(|c| c.id == field.id) => {}
                Some(field) => chosen.push(field),
                None if !raw.trim().is_empty() => {
                    debug!(entry = entry.id, value = raw, "ignoring unknown option");
                }
                None => {}
            }
        }
        chosen
    }
}

fn option_value(field: &Field) -> &str {
    if field.value.is_empty() {
        &field.title
    } else {
        &field.value
    }
}

impl EntryTypeService for ChoiceEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&self.render_options(entry, display, &name));
        render::wrap(entry, display, &inner)
    }

    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String> {
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::SIMPLE)
    }

    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData {
        let responses: Vec<Response> = self
            .chosen_fields(entry, request)
            .into_iter()
            .map(|field| Response {
                entry_id: entry.id,
                value: Some(option_value(field).to_string()),
                to_string_value: Some(field.title.clone()),
                field_id: Some(field.id),
                file: None,
            })
            .collect();

        if entry.mandatory && responses.is_empty() {
            return ResponseData::failed(responses, mandatory_error(&self.ctx, entry, locale));
        }
        ResponseData::ok(responses)
    }

    fn format_for_export(
        &self,
        entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        _locale: &Locale,
    ) -> String {
        response
            .field_id
            .and_then(|id| entry.field_by_id(id))
            .map(|field| option_value(field).to_string())
            .unwrap_or_else(|| response.value_or_empty().to_string())
    }

    fn format_for_recap(
        &self,
        entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        _locale: &Locale,
    ) -> String {
        response
            .field_id
            .and_then(|id| entry.field_by_id(id))
            .map(|field| field.title.clone())
            .unwrap_or_else(|| response.value_or_empty().to_string())
    }
}
