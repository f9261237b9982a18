// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Entries filled with the authenticated user's login.

use std::sync::Arc;

use tracing::debug;

use crate::i18n::Locale;
use crate::keys::{MessageKey, attribute_name};
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::models::{Entry, Response, ResponseData};
use crate::render::{self, Display, escape};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `user` entries: the value comes from the request's remote user, not from an input.
#[derive(Debug)]
pub struct UserEntryType {
    ctx: Arc<ServiceContext>,
}

impl UserEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

impl EntryTypeService for UserEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let name = attribute_name(entry.id);
        let mut inner = render::label(entry, &name);
        inner.push_str(&format!(
            "<input type=\"text\" name=\"{0}\" id=\"{0}\" readonly{1}>",
            escape(&name),
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
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::SIMPLE)
    }

    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData {
        match request.remote_user().map(str::trim).filter(|u| !u.is_empty()) {
            Some(login) => {
                let mut response = Response::with_value(entry.id, login);
                response.to_string_value = Some(login.to_string());
                ResponseData::ok(vec![response])
            }
            None => {
                debug!(entry = entry.id, "no authenticated user");
                ResponseData::failed(
                    Vec::new(),
                    self.ctx
                        .error(entry, MessageKey::AuthenticationRequired, locale, &[]),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::UserEntryType;
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::keys::MessageKey;
    use crate::models::{Entry, EntryKind};
    use crate::request::FormRequest;
    use crate::service::{EntryTypeService, ServiceContext};

    fn service() -> UserEntryType {
        UserEntryType::new(Arc::new(ServiceContext::new(Settings::default()).unwrap()))
    }

    fn entry() -> Entry {
        let mut entry = Entry::new(11, EntryKind::User);
        entry.title = "Author".into();
        entry
    }

    #[test]
    fn records_remote_user() {
        let request = FormRequest::new().with_remote_user("jdoe");
        let data = service().extract_response_data(&entry(), &request, &Locale::new("en"));
        assert!(data.is_valid());
        assert_eq!(data.responses[0].value.as_deref(), Some("jdoe"));
    }

    // Submitted parameters cannot impersonate another user.
    #[test]
    fn anonymous_request_requires_authentication() {
        let request = FormRequest::from_urlencoded("attribute11=admin");
        let data = service().extract_response_data(&entry(), &request, &Locale::new("en"));
        let error = data.error.unwrap();
        assert_eq!(error.message_key, MessageKey::AuthenticationRequired);
        assert_eq!(error.title, "Author");
        assert!(data.responses.is_empty());
    }
}
