// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Numeric input: a text input whose value must parse as a finite number.

use std::sync::Arc;

use crate::entry_types::text::{extract_text_response, text_input};
use crate::i18n::Locale;
use crate::keys::{MessageKey, attribute_name};
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::models::{Entry, ResponseData};
use crate::render::{self, Display};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `numeric` entries.
#[derive(Debug)]
pub struct NumericEntryType {
    ctx: Arc<ServiceContext>,
}

impl NumericEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

fn check_number(value: &str) -> Option<MessageKey> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => None,
        _ => Some(MessageKey::NumericField),
    }
}

impl EntryTypeService for NumericEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&text_input(entry, display, &name, "number"));
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
        extract_text_response(self, entry, request, locale, None, Some(check_number))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{NumericEntryType, check_number};
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::keys::MessageKey;
    use crate::models::{Entry, EntryKind};
    use crate::request::FormRequest;
    use crate::service::{EntryTypeService, ServiceContext};

    fn service() -> NumericEntryType {
        NumericEntryType::new(Arc::new(ServiceContext::new(Settings::default()).unwrap()))
    }

    #[test]
    fn check_number_accepts_decimals_and_rejects_words() {
        assert_eq!(check_number("-12.5"), None);
        assert_eq!(check_number("1e3"), None);
        assert_eq!(check_number("twelve"), Some(MessageKey::NumericField));
        assert_eq!(check_number("inf"), Some(MessageKey::NumericField));
    }

    #[test]
    fn malformed_number_is_reported_with_entry_title() {
        let mut entry = Entry::new(2, EntryKind::Numeric);
        entry.title = "Age".into();
        let request = FormRequest::from_urlencoded("attribute2=abc");

        let data = service().extract_response_data(&entry, &request, &Locale::new("fr"));

        let error = data.error.unwrap();
        assert_eq!(error.message_key, MessageKey::NumericField);
        assert_eq!(error.message, "Le champ « Age » doit être numérique.");
    }

    #[test]
    fn empty_optional_number_is_accepted() {
        let entry = Entry::new(2, EntryKind::Numeric);
        let request = FormRequest::from_urlencoded("attribute2=");
        assert!(
            service()
                .extract_response_data(&entry, &request, &Locale::new("en"))
                .is_valid()
        );
    }
}
