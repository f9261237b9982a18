// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Date input. Values travel and are exported as ISO `YYYY-MM-DD`; recaps
//! use the locale's usual order.

use std::sync::Arc;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::entry_types::text::{extract_text_response, text_input};
use crate::i18n::Locale;
use crate::keys::{MessageKey, attribute_name};
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::models::{Entry, Response, ResponseData};
use crate::render::{self, Display};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DAY_FIRST_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// `date` entries.
#[derive(Debug)]
pub struct DateEntryType {
    ctx: Arc<ServiceContext>,
}

impl DateEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

fn parse_date(value: &str) -> Option<Date> {
    Date::parse(value, ISO_DATE).ok()
}

fn check_date(value: &str) -> Option<MessageKey> {
    parse_date(value).is_none().then_some(MessageKey::InvalidDate)
}

/// Display format for a locale: day first for French, ISO otherwise.
fn recap_format(locale: &Locale) -> &'static [BorrowedFormatItem<'static>] {
    match locale.language().as_str() {
        "fr" => DAY_FIRST_DATE,
        _ => ISO_DATE,
    }
}

impl EntryTypeService for DateEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&text_input(entry, display, &name, "date"));
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
        extract_text_response(self, entry, request, locale, None, Some(check_date))
    }

    fn format_for_recap(
        &self,
        _entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        locale: &Locale,
    ) -> String {
        let raw = response.value_or_empty();
        parse_date(raw)
            .and_then(|date| date.format(recap_format(locale)).ok())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::DateEntryType;
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::keys::MessageKey;
    use crate::models::{Entry, EntryKind, Response};
    use crate::request::FormRequest;
    use crate::service::{EntryTypeService, ServiceContext};

    fn service() -> DateEntryType {
        DateEntryType::new(Arc::new(ServiceContext::new(Settings::default()).unwrap()))
    }

    #[test]
    fn recap_follows_locale_and_export_stays_iso() {
        let service = service();
        let entry = Entry::new(8, EntryKind::Date);
        let response = Response::with_value(8, "2025-03-09");

        assert_eq!(
            service.format_for_recap(&entry, None, &response, &Locale::new("fr-FR")),
            "09/03/2025"
        );
        assert_eq!(
            service.format_for_recap(&entry, None, &response, &Locale::new("en")),
            "2025-03-09"
        );
        assert_eq!(
            service.format_for_export(&entry, None, &response, &Locale::new("fr")),
            "2025-03-09"
        );
    }

    // Without an explicit locale the configured default decides the recap format.
    #[test]
    fn set_response_string_value_uses_configured_default_locale() {
        let settings = Settings {
            default_locale: "fr".to_string(),
            ..Settings::default()
        };
        let service = DateEntryType::new(Arc::new(ServiceContext::new(settings).unwrap()));
        let mut response = Response::with_value(8, "2025-03-09");

        service.set_response_string_value(&Entry::new(8, EntryKind::Date), &mut response, None);

        assert_eq!(response.to_string_value.as_deref(), Some("09/03/2025"));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let request = FormRequest::from_urlencoded("attribute8=2025-02-30");
        let data =
            service().extract_response_data(&Entry::new(8, EntryKind::Date), &request, &Locale::new("en"));
        assert_eq!(data.error.unwrap().message_key, MessageKey::InvalidDate);
    }

    #[test]
    fn recap_of_unparsable_or_missing_value_does_not_fail() {
        let service = service();
        let entry = Entry::new(8, EntryKind::Date);
        let locale = Locale::new("fr");
        assert_eq!(service.format_for_recap(&entry, None, &Response::new(8), &locale), "");
        assert_eq!(
            service.format_for_recap(&entry, None, &Response::with_value(8, "soon"), &locale),
            "soon"
        );
    }
}
