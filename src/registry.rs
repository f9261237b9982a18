// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Kind-code dispatch over the entry type services, plus whole-form helpers.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::{debug, warn};

use crate::entry_types::{
    ChoiceEntryType, ChoiceStyle, CommentEntryType, DateEntryType, FileEntryType,
    NumericEntryType, TextAreaEntryType, TextEntryType, UserEntryType,
};
use crate::i18n::Locale;
use crate::models::{Entry, EntryKind, GenericAttributeError, Response};
use crate::render::Display;
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// Outcome of extracting a whole form: every response and every error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub responses: Vec<Response>,
    pub errors: Vec<GenericAttributeError>,
}

impl FormSubmission {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Services keyed by entry kind code.
#[derive(Default)]
pub struct EntryTypeRegistry {
    services: HashMap<String, Arc<dyn EntryTypeService>>,
}

impl std::fmt::Debug for EntryTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut codes: Vec<_> = self.services.keys().collect();
        codes.sort();
        f.debug_struct("EntryTypeRegistry")
            .field("kinds", &codes)
            .finish()
    }
}

impl EntryTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in kind, all sharing `ctx`.
    pub fn with_defaults(ctx: Arc<ServiceContext>) -> Self {
        let mut registry = Self::new();
        registry.register(EntryKind::Text, Arc::new(TextEntryType::new(ctx.clone())));
        registry.register(
            EntryKind::TextArea,
            Arc::new(TextAreaEntryType::new(ctx.clone())),
        );
        registry.register(EntryKind::Numeric, Arc::new(NumericEntryType::new(ctx.clone())));
        registry.register(EntryKind::Date, Arc::new(DateEntryType::new(ctx.clone())));
        for (kind, style) in [
            (EntryKind::Select, ChoiceStyle::Select),
            (EntryKind::Radio, ChoiceStyle::Radio),
            (EntryKind::Checkbox, ChoiceStyle::Checkbox),
        ] {
            registry.register(kind, Arc::new(ChoiceEntryType::new(ctx.clone(), style)));
        }
        registry.register(EntryKind::File, Arc::new(FileEntryType::new(ctx.clone())));
        registry.register(EntryKind::Comment, Arc::new(CommentEntryType::new(ctx.clone())));
        registry.register(EntryKind::User, Arc::new(UserEntryType::new(ctx)));
        registry
    }

    /// Register (or replace) the service of `kind`.
    pub fn register(&mut self, kind: EntryKind, service: Arc<dyn EntryTypeService>) {
        self.services.insert(kind.code().to_string(), service);
    }

    /// Service for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if no service is registered under the kind's code.
    pub fn service(&self, kind: &EntryKind) -> Result<&dyn EntryTypeService> {
        match self.services.get(kind.code()) {
            Some(service) => Ok(service.as_ref()),
            None => {
                warn!(kind = kind.code(), "no service registered");
                bail!("unknown entry type: {}", kind.code())
            }
        }
    }

    /// Markup of every entry in position order.
    ///
    /// Entries reserved to the back office are left out of the front office form.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has an unregistered kind.
    pub fn render_form(&self, entries: &[Entry], display: Display) -> Result<String> {
        let mut html = String::new();
        for entry in visible(entries, display) {
            html.push_str(&self.service(&entry.kind)?.render_html(entry, display));
            html.push('\n');
        }
        Ok(html)
    }

    /// Extract the front office submission of every entry, in position order.
    ///
    /// Unlike a single entry extraction, every failing entry is reported.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has an unregistered kind.
    pub fn extract_form(
        &self,
        entries: &[Entry],
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Result<FormSubmission> {
        let mut submission = FormSubmission::default();
        for entry in visible(entries, Display::Front) {
            let data = self
                .service(&entry.kind)?
                .extract_response_data(entry, request, locale);
            submission.responses.extend(data.responses);
            if let Some(error) = data.error {
                submission.errors.push(error);
            }
        }
        debug!(
            responses = submission.responses.len(),
            errors = submission.errors.len(),
            "form extracted"
        );
        Ok(submission)
    }

    /// `(entry title, recap text)` for every response, in response order.
    ///
    /// # Errors
    ///
    /// Returns an error if a response refers to an entry missing from
    /// `entries` or to an unregistered kind.
    pub fn recap(
        &self,
        entries: &[Entry],
        responses: &[Response],
        locale: &Locale,
    ) -> Result<Vec<(String, String)>> {
        responses
            .iter()
            .map(|response| {
                let Some(entry) = entries.iter().find(|e| e.id == response.entry_id) else {
                    bail!("response refers to unknown entry {}", response.entry_id)
                };
                let text = self
                    .service(&entry.kind)?
                    .format_for_recap(entry, None, response, locale);
                Ok((entry.title.clone(), text))
            })
            .collect()
    }
}

fn visible(entries: &[Entry], display: Display) -> impl Iterator<Item = &Entry> {
    let mut ordered: Vec<&Entry> = entries
        .iter()
        .filter(|entry| !(display.is_front() && entry.only_display_in_back))
        .collect();
    ordered.sort_by(|a, b| a.cmp_key().cmp(&b.cmp_key()));
    ordered.into_iter()
}
