// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Checks shared by the text-like entry types.
//!
//! The first failing check wins, in this order: suspected injection,
//! mandatory, max length, format (kind-specific), regular expressions,
//! confirmation, uniqueness.

use tracing::warn;

use crate::expressions;
use crate::i18n::Locale;
use crate::keys::MessageKey;
use crate::models::{Entry, GenericAttributeError};
use crate::service::ServiceContext;

/// Kind-specific format check: returns the message key on failure.
pub(crate) type FormatCheck = fn(&str) -> Option<MessageKey>;

/// Inputs of one text-like validation run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TextSubmission<'a> {
    pub value: &'a str,
    /// `Some` when the entry asks for confirmation: the confirmation input (possibly absent).
    pub confirmation: Option<Option<&'a str>>,
    pub format: Option<FormatCheck>,
}

/// Run every check against a submitted text value.
pub(crate) fn check_text(
    ctx: &ServiceContext,
    entry: &Entry,
    submission: TextSubmission<'_>,
    locale: &Locale,
) -> Option<GenericAttributeError> {
    let value = submission.value;

    if ctx.contains_xss(value) {
        return Some(ctx.error(entry, MessageKey::XssField, locale, &[]));
    }

    if value.is_empty() {
        if entry.mandatory {
            return Some(mandatory_error(ctx, entry, locale));
        }
        // An empty optional value still has to agree with a typed confirmation.
        if let Some(Some(confirmation)) = submission.confirmation
            && !confirmation.trim().is_empty()
        {
            return Some(ctx.error(entry, MessageKey::ConfirmField, locale, &[]));
        }
        return None;
    }

    if let Some(max) = entry.max_size_enter()
        && value.chars().count() > max
    {
        return Some(ctx.error(entry, MessageKey::MaxLength, locale, &[&max.to_string()]));
    }

    if let Some(check) = submission.format
        && let Some(key) = check(value)
    {
        return Some(ctx.error(entry, key, locale, &[]));
    }

    for expression in entry.regular_expressions() {
        match expressions::is_match(expression, value) {
            Ok(true) => {}
            Ok(false) => {
                let message = if expression.error_message.trim().is_empty() {
                    ctx.message(MessageKey::RegularExpression, locale, &[&entry.title])
                } else {
                    expression.error_message.clone()
                };
                return Some(GenericAttributeError::new(
                    entry,
                    MessageKey::RegularExpression,
                    message,
                ));
            }
            Err(err) => warn!(entry = entry.id, "skipping regular expression: {err:#}"),
        }
    }

    if let Some(confirmation) = submission.confirmation
        && confirmation.map(str::trim) != Some(value)
    {
        return Some(ctx.error(entry, MessageKey::ConfirmField, locale, &[]));
    }

    if entry.unique
        && ctx
            .unique_values
            .is_taken(entry, value, ctx.settings.uniqueness)
    {
        return Some(ctx.error(entry, MessageKey::UniqueField, locale, &[]));
    }

    None
}

/// Mandatory error, using the entry's own error message when it has one.
pub(crate) fn mandatory_error(
    ctx: &ServiceContext,
    entry: &Entry,
    locale: &Locale,
) -> GenericAttributeError {
    match &entry.error_message {
        Some(custom) => GenericAttributeError::new(entry, MessageKey::MandatoryField, custom.clone()),
        None => ctx.error(entry, MessageKey::MandatoryField, locale, &[]),
    }
}
