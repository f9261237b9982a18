// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! The entry type contract and the context shared by its implementations.

use std::sync::Arc;

use anyhow::Result;
use url::form_urlencoded;

use crate::config::Settings;
use crate::expressions::RegularExpressionSource;
use crate::i18n::{Locale, MessageCatalog};
use crate::keys::{FieldLabel, MessageKey};
use crate::models::{
    Entry, EntryKind, FileItem, GenericAttributeError, ReferenceList, Response, ResponseData,
};
use crate::render::Display;
use crate::request::FormSource;
use crate::unique::{NoUniqueValues, UniqueValueStore};

/// Settings, messages and uniqueness lookup used by every entry type.
pub struct ServiceContext {
    pub settings: Settings,
    pub messages: MessageCatalog,
    pub unique_values: Arc<dyn UniqueValueStore>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("settings", &self.settings)
            .field("messages", &self.messages)
            .finish_non_exhaustive()
    }
}

impl ServiceContext {
    /// Context with the built-in message catalog and no uniqueness enforcement.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled message catalogs fail to load.
    pub fn new(settings: Settings) -> Result<Self> {
        let messages = MessageCatalog::builtin(&Locale::new(settings.default_locale.as_str()))?;
        Ok(Self {
            settings,
            messages,
            unique_values: Arc::new(NoUniqueValues),
        })
    }

    pub fn with_unique_values(mut self, store: Arc<dyn UniqueValueStore>) -> Self {
        self.unique_values = store;
        self
    }

    pub fn default_locale(&self) -> Locale {
        Locale::new(self.settings.default_locale.as_str())
    }

    pub fn message(&self, key: MessageKey, locale: &Locale, args: &[&str]) -> String {
        self.messages.resolve(key.as_str(), locale, args)
    }

    /// Error for `entry`: the entry title is the first message argument.
    pub fn error(
        &self,
        entry: &Entry,
        key: MessageKey,
        locale: &Locale,
        extra_args: &[&str],
    ) -> GenericAttributeError {
        let mut args = Vec::with_capacity(extra_args.len() + 1);
        args.push(entry.title.as_str());
        args.extend_from_slice(extra_args);
        GenericAttributeError::new(entry, key, self.message(key, locale, &args))
    }

    /// Error whose text is only the limit value (upload messages).
    pub fn limit_error(
        &self,
        entry: &Entry,
        key: MessageKey,
        locale: &Locale,
        limit: &str,
    ) -> GenericAttributeError {
        GenericAttributeError::new(entry, key, self.message(key, locale, &[limit]))
    }

    /// Admin message page URL reporting `key` about the input labelled `label`.
    pub fn admin_message_url(&self, key: MessageKey, label: FieldLabel, locale: &Locale) -> String {
        let label_text = self.messages.resolve(label.as_str(), locale, &[]);
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("message_key", key.as_str())
            .append_pair("message", &self.message(key, locale, &[&label_text]))
            .append_pair("type", "stop")
            .finish();
        format!("{}?{query}", self.settings.admin_message_url)
    }

    pub fn contains_xss(&self, value: &str) -> bool {
        value
            .chars()
            .any(|c| self.settings.xss_characters.contains(c))
    }

    /// Template path `{root}/{action}_entry_type_{code}.html` for the display context.
    pub fn template(&self, display: Display, action: &str, kind: &EntryKind) -> String {
        let root = match display {
            Display::Front => &self.settings.templates.front_root,
            Display::Back => &self.settings.templates.back_root,
        };
        format!("{root}/{action}_entry_type_{}.html", kind.code())
    }
}

/// Capability set of a field type.
///
/// A form engine holds one implementation per [`EntryKind`] (see
/// [`crate::registry::EntryTypeRegistry`]) and treats every entry through
/// this trait. Validation failures are returned as values.
pub trait EntryTypeService: Send + Sync {
    /// Shared context; default methods read settings and messages from it.
    fn context(&self) -> &ServiceContext;

    /// Markup of the entry for the given display context.
    fn render_html(&self, entry: &Entry, display: Display) -> String;

    /// Template used by the "create entry" admin form.
    fn create_template(&self, entry: &Entry, display: Display) -> String {
        self.context().template(display, "create", &entry.kind)
    }

    /// Template used by the "modify entry" admin form.
    fn modify_template(&self, entry: &Entry, display: Display) -> String {
        self.context().template(display, "modify", &entry.kind)
    }

    /// Read the admin "create/modify entry" form into `entry`.
    ///
    /// Returns `None` when every required input is present and well-formed,
    /// otherwise the URL of the admin error page; `entry` is left untouched
    /// in that case.
    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String>;

    /// Parse the end-user submission for `entry` into responses.
    fn extract_response_data(
        &self,
        entry: &Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> ResponseData;

    /// Catalog expressions that can still be attached to the entry.
    fn list_regular_expressions(
        &self,
        _entry: &Entry,
        _source: &dyn RegularExpressionSource,
    ) -> ReferenceList {
        ReferenceList::new()
    }

    /// Text written to export files; `""` when there is no value.
    fn format_for_export(
        &self,
        _entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        _locale: &Locale,
    ) -> String {
        response.value_or_empty().to_string()
    }

    /// Text shown on confirmation recaps; `""` when there is no value.
    fn format_for_recap(
        &self,
        _entry: &Entry,
        _request: Option<&dyn FormSource>,
        response: &Response,
        _locale: &Locale,
    ) -> String {
        response.value_or_empty().to_string()
    }

    /// Check per-file size, file count and aggregate size before accepting uploads.
    fn can_upload_files(
        &self,
        _entry: &Entry,
        _uploaded: &[FileItem],
        _to_upload: &[FileItem],
        _locale: &Locale,
    ) -> Option<GenericAttributeError> {
        None
    }

    /// Derive the display string of `response`, using the default locale when `locale` is `None`.
    fn set_response_string_value(
        &self,
        entry: &Entry,
        response: &mut Response,
        locale: Option<&Locale>,
    ) {
        let fallback;
        let locale = match locale {
            Some(locale) => locale,
            None => {
                fallback = self.context().default_locale();
                &fallback
            }
        };
        response.to_string_value = Some(self.format_for_recap(entry, None, response, locale));
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceContext;
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::keys::{FieldLabel, MessageKey};
    use crate::models::{Entry, EntryKind};
    use crate::render::Display;

    fn context() -> ServiceContext {
        ServiceContext::new(Settings::default()).unwrap()
    }

    #[test]
    fn template_paths_depend_on_display_and_kind() {
        let ctx = context();
        assert_eq!(
            ctx.template(Display::Back, "create", &EntryKind::Text),
            "admin/plugins/genericattributes/entries/create_entry_type_text.html"
        );
        assert_eq!(
            ctx.template(Display::Front, "modify", &EntryKind::Date),
            "skin/plugins/genericattributes/entries/modify_entry_type_date.html"
        );
    }

    #[test]
    fn admin_message_url_names_the_localized_label() {
        let ctx = context();
        let url = ctx.admin_message_url(
            MessageKey::MandatoryField,
            FieldLabel::Title,
            &Locale::new("en"),
        );
        assert!(url.starts_with("jsp/admin/AdminMessage.jsp?message_key=portal.util.message.mandatoryField"));
        assert!(url.contains("Title"));
        assert!(url.ends_with("type=stop"));
    }

    #[test]
    fn error_carries_entry_identity_and_key() {
        let ctx = context();
        let mut entry = Entry::new(4, EntryKind::Text);
        entry.title = "Age".into();
        let error = ctx.error(&entry, MessageKey::NumericField, &Locale::new("en"), &[]);
        assert_eq!(error.entry_id, 4);
        assert_eq!(error.title, "Age");
        assert_eq!(error.message, "The field \"Age\" must be a number.");
        assert!(!error.mandatory);
    }

    #[test]
    fn contains_xss_uses_configured_characters() {
        let ctx = context();
        assert!(ctx.contains_xss("<script>"));
        assert!(!ctx.contains_xss("plain text"));
    }
}
