// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-line text input, with optional confirmation input.
//!
//! Also hosts the extraction shared with the other text-like kinds
//! (textarea, numeric, date).

use std::sync::Arc;

use tracing::debug;

use crate::expressions::RegularExpressionSource;
use crate::i18n::Locale;
use crate::keys::{attribute_name, confirm_attribute_name};
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::logic::validation::{FormatCheck, TextSubmission, check_text};
use crate::models::{Entry, ReferenceList, Response, ResponseData};
use crate::render::{self, Display, escape, opt_attr};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `text` entries.
#[derive(Debug)]
pub struct TextEntryType {
    ctx: Arc<ServiceContext>,
}

impl TextEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

impl EntryTypeService for TextEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&text_input(entry, display, &name, "text"));
        if entry.confirm_field {
            let confirm_name = confirm_attribute_name(entry.id);
            let title = entry.confirm_field_title.as_deref().unwrap_or_default();
            inner.push_str(&format!(
                "<label for=\"{0}\">{1}</label><input type=\"text\" name=\"{0}\" id=\"{0}\"{2}{3}>",
                escape(&confirm_name),
                escape(title),
                opt_attr("maxlength", entry.max_size_enter()),
                display.input_state(),
            ));
        }
        render::wrap(entry, display, &inner)
    }

    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String> {
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::TEXT)
    }

    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData {
        let confirmation = entry
            .confirm_field
            .then(|| request.parameter(&confirm_attribute_name(entry.id)));
        extract_text_response(self, entry, request, locale, confirmation, None)
    }

    fn list_regular_expressions(
        &self,
        entry: &Entry,
        source: &dyn RegularExpressionSource,
    ) -> ReferenceList {
        available_expressions(entry, source)
    }
}

/// `<input>` for a text-like entry, prefilled with the primary field's value.
pub(crate) fn text_input(entry: &Entry, display: Display, name: &str, input_type: &str) -> String {
    let field = entry.primary_field();
    let value = field.map(|f| f.value.as_str()).filter(|v| !v.is_empty());
    format!(
        "<input type=\"{input_type}\" name=\"{0}\" id=\"{0}\"{1}{2}{3}{4}{5}>",
        escape(name),
        opt_attr("value", value),
        opt_attr("size", field.and_then(|f| f.width)),
        opt_attr("maxlength", entry.max_size_enter()),
        if entry.mandatory { " required" } else { "" },
        display.input_state(),
    )
}

/// Read `attribute{id}`, build its response and run the text checks.
///
/// A missing parameter counts as an empty value.
pub(crate) fn extract_text_response<S: EntryTypeService + ?Sized>(
    service: &S,
    entry: &Entry,
    request: &dyn FormSource,
    locale: &Locale,
    confirmation: Option<Option<&str>>,
    format: Option<FormatCheck>,
) -> ResponseData {
    let value = request
        .parameter(&attribute_name(entry.id))
        .unwrap_or_default()
        .trim();

    let mut response = Response::with_value(entry.id, value);
    response.field_id = entry.primary_field().map(|f| f.id);
    response.to_string_value = Some(if value.is_empty() {
        String::new()
    } else {
        service.format_for_recap(entry, Some(request), &response, locale)
    });

    let submission = TextSubmission {
        value,
        confirmation,
        format,
    };
    match check_text(service.context(), entry, submission, locale) {
        Some(error) => {
            debug!(entry = entry.id, key = error.message_key.as_str(), "rejected value");
            ResponseData::failed(vec![response], error)
        }
        None => ResponseData::ok(vec![response]),
    }
}

/// Catalog expressions not yet attached to the entry; empty when the catalog is unavailable.
pub(crate) fn available_expressions(
    entry: &Entry,
    source: &dyn RegularExpressionSource,
) -> ReferenceList {
    if !source.is_available() {
        return ReferenceList::new();
    }
    let attached = entry.regular_expressions();
    let mut list = ReferenceList::new();
    for expression in source.all() {
        if !attached.iter().any(|a| a.id == expression.id) {
            list.add_item(expression.id, expression.title);
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::TextEntryType;
    use crate::config::Settings;
    use crate::expressions::{StaticExpressions, Unavailable};
    use crate::i18n::Locale;
    use crate::keys::MessageKey;
    use crate::models::{Entry, EntryKind, Field, RegularExpression, Response};
    use crate::render::Display;
    use crate::request::FormRequest;
    use crate::service::{EntryTypeService, ServiceContext};

    fn service() -> TextEntryType {
        TextEntryType::new(Arc::new(ServiceContext::new(Settings::default()).unwrap()))
    }

    fn entry() -> Entry {
        let mut entry = Entry::new(7, EntryKind::Text);
        entry.title = "Email".into();
        entry.fields.push(Field {
            id: 70,
            width: Some(30),
            max_size_enter: Some(40),
            ..Field::default()
        });
        entry
    }

    fn expression(id: i32, title: &str) -> RegularExpression {
        RegularExpression {
            id,
            title: title.into(),
            pattern: ".*".into(),
            error_message: String::new(),
            valid_example: None,
        }
    }

    #[test]
    fn render_html_includes_confirmation_input() {
        let mut entry = entry();
        entry.confirm_field = true;
        entry.confirm_field_title = Some("Repeat".into());

        let html = service().render_html(&entry, Display::Front);

        assert!(html.contains("name=\"attribute7\""));
        assert!(html.contains("name=\"attribute7_confirm_field\""));
        assert!(html.contains("size=\"30\""));
        assert!(html.contains("maxlength=\"40\""));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn back_office_render_disables_inputs() {
        let html = service().render_html(&entry(), Display::Back);
        assert!(html.contains(" disabled>"));
    }

    #[test]
    fn extract_response_data_trims_and_links_primary_field() {
        let request = FormRequest::from_urlencoded("attribute7=++a%40b.c++");
        let data = service().extract_response_data(&entry(), &request, &Locale::new("en"));

        assert!(data.is_valid());
        assert_eq!(data.responses.len(), 1);
        let response = &data.responses[0];
        assert_eq!(response.value.as_deref(), Some("a@b.c"));
        assert_eq!(response.field_id, Some(70));
        assert_eq!(response.to_string_value.as_deref(), Some("a@b.c"));
    }

    // The response is kept so the form can show the rejected value again.
    #[test]
    fn confirmation_mismatch_keeps_response() {
        let mut entry = entry();
        entry.confirm_field = true;
        let request = FormRequest::from_urlencoded(
            "attribute7=a%40b.c&attribute7_confirm_field=a%40b.d",
        );

        let data = service().extract_response_data(&entry, &request, &Locale::new("en"));

        let error = data.error.expect("mismatch expected");
        assert_eq!(error.message_key, MessageKey::ConfirmField);
        assert_eq!(error.entry_id, 7);
        assert_eq!(data.responses.len(), 1);
    }

    #[test]
    fn extraction_is_idempotent() {
        let mut entry = entry();
        entry.mandatory = true;
        let request = FormRequest::from_urlencoded("attribute7=");
        let service = service();

        let first = service.extract_response_data(&entry, &request, &Locale::new("en"));
        let second = service.extract_response_data(&entry, &request, &Locale::new("en"));

        assert_eq!(first, second);
        assert!(first.error.unwrap().mandatory);
    }

    #[test]
    fn list_regular_expressions_skips_attached_ones() {
        let mut entry = entry();
        entry.fields[0].regular_expressions.push(expression(1, "Email"));
        let source = StaticExpressions::new(vec![expression(1, "Email"), expression(2, "Zip")]);

        let list = service().list_regular_expressions(&entry, &source);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].code, "2");
        assert_eq!(list.items()[0].name, "Zip");
        assert!(service().list_regular_expressions(&entry, &Unavailable).is_empty());
    }

    #[test]
    fn export_and_recap_are_empty_without_value() {
        let service = service();
        let response = Response::new(7);
        let locale = Locale::new("en");
        assert_eq!(service.format_for_export(&entry(), None, &response, &locale), "");
        assert_eq!(service.format_for_recap(&entry(), None, &response, &locale), "");
    }

    #[test]
    fn set_response_string_value_defaults_locale() {
        let service = service();
        let mut response = Response::with_value(7, "hello");
        service.set_response_string_value(&entry(), &mut response, None);
        assert_eq!(response.to_string_value.as_deref(), Some("hello"));
    }

    #[test]
    fn templates_follow_kind_code() {
        let service = service();
        assert_eq!(
            service.modify_template(&entry(), Display::Back),
            "admin/plugins/genericattributes/entries/modify_entry_type_text.html"
        );
    }
}
