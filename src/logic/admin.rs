// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reading the admin "create/modify entry" form into an entry.

use std::str::FromStr;

use crate::i18n::Locale;
use crate::keys::{FieldLabel, MessageKey, Parameter};
use crate::models::Entry;
use crate::request::FormSource;
use crate::service::ServiceContext;

/// Which optional inputs an entry type's admin form carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AdminInputs {
    /// Title input (every kind but comment).
    pub title: bool,
    /// Comment input is the mandatory content (comment kind).
    pub comment_required: bool,
    pub width: bool,
    pub height: bool,
    pub max_size_enter: bool,
    pub value: bool,
    pub confirm: bool,
    pub unique: bool,
    pub upload: bool,
}

impl AdminInputs {
    pub const TEXT: Self = Self {
        title: true,
        comment_required: false,
        width: true,
        height: false,
        max_size_enter: true,
        value: true,
        confirm: true,
        unique: true,
        upload: false,
    };

    pub const TEXT_AREA: Self = Self {
        height: true,
        confirm: false,
        ..Self::TEXT
    };

    pub const SIMPLE: Self = Self {
        title: true,
        comment_required: false,
        width: false,
        height: false,
        max_size_enter: false,
        value: false,
        confirm: false,
        unique: false,
        upload: false,
    };

    pub const UPLOAD: Self = Self {
        upload: true,
        ..Self::SIMPLE
    };

    pub const COMMENT: Self = Self {
        title: false,
        comment_required: true,
        ..Self::SIMPLE
    };
}

/// Apply the admin form to `entry`.
///
/// Missing required inputs are reported first (mandatory-field message),
/// then malformed numbers (numeric-field message). On error `entry` is not
/// modified and the admin error page URL is returned.
pub(crate) fn apply_admin_form(
    ctx: &ServiceContext,
    entry: &mut Entry,
    request: &dyn FormSource,
    locale: &Locale,
    inputs: AdminInputs,
) -> Option<String> {
    let param = |p: Parameter| request.parameter(p.as_str());
    let blank = |p: Parameter| param(p).is_none_or(|v| v.trim().is_empty());

    let mut missing = None;
    if inputs.title && blank(Parameter::Title) {
        missing = Some(FieldLabel::Title);
    } else if inputs.comment_required && blank(Parameter::Comment) {
        missing = Some(FieldLabel::Comment);
    } else if inputs.width && blank(Parameter::Width) {
        missing = Some(FieldLabel::Width);
    } else if inputs.height && blank(Parameter::Height) {
        missing = Some(FieldLabel::Height);
    } else if inputs.confirm
        && param(Parameter::ConfirmField).is_some()
        && blank(Parameter::ConfirmFieldTitle)
    {
        missing = Some(FieldLabel::ConfirmFieldTitle);
    }
    if let Some(label) = missing {
        return Some(ctx.admin_message_url(MessageKey::MandatoryField, label, locale));
    }

    let numeric_error =
        |label: FieldLabel| Some(ctx.admin_message_url(MessageKey::NumericField, label, locale));

    let width = if inputs.width {
        match parse_optional::<u32>(param(Parameter::Width)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::Width),
        }
    } else {
        None
    };
    let height = if inputs.height {
        match parse_optional::<u32>(param(Parameter::Height)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::Height),
        }
    } else {
        None
    };
    let max_size_enter = if inputs.max_size_enter {
        match parse_optional::<usize>(param(Parameter::MaxSizeEnter)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::MaxSizeEnter),
        }
    } else {
        None
    };
    let (max_files, file_max_size, total_max_size) = if inputs.upload {
        let max_files = match parse_optional::<usize>(param(Parameter::MaxFiles)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::MaxFiles),
        };
        let file_max_size = match parse_optional::<u64>(param(Parameter::FileMaxSize)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::FileMaxSize),
        };
        let total_max_size = match parse_optional::<u64>(param(Parameter::TotalMaxSize)) {
            Ok(v) => v,
            Err(()) => return numeric_error(FieldLabel::TotalMaxSize),
        };
        (max_files, file_max_size, total_max_size)
    } else {
        (None, None, None)
    };

    // Everything validated: mutate the entry.
    if inputs.title {
        entry.title = param(Parameter::Title).unwrap_or_default().trim().to_string();
    }
    entry.help_message = trimmed(param(Parameter::HelpMessage));
    entry.comment = trimmed(param(Parameter::Comment));
    entry.css_class = trimmed(param(Parameter::CssClass));
    entry.error_message = trimmed(param(Parameter::ErrorMessage));
    entry.mandatory = !inputs.comment_required && param(Parameter::Mandatory).is_some();
    entry.field_in_line = param(Parameter::FieldInLine).is_some();

    if inputs.confirm {
        entry.confirm_field = param(Parameter::ConfirmField).is_some();
        entry.confirm_field_title = if entry.confirm_field {
            trimmed(param(Parameter::ConfirmFieldTitle))
        } else {
            None
        };
    }
    if inputs.unique {
        entry.unique = param(Parameter::Unique).is_some();
    }
    if inputs.upload {
        entry.upload.max_files = max_files;
        entry.upload.file_max_size = file_max_size;
        entry.upload.total_max_size = total_max_size;
    }
    if inputs.width || inputs.height || inputs.max_size_enter || inputs.value {
        let field = entry.primary_field_mut();
        if inputs.value {
            field.value = param(Parameter::Value).unwrap_or_default().to_string();
        }
        if inputs.width {
            field.width = width;
        }
        if inputs.height {
            field.height = height;
        }
        if inputs.max_size_enter {
            field.max_size_enter = max_size_enter;
        }
    }

    None
}

/// Blank means "not set"; anything else must parse.
fn parse_optional<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, ()> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(|_| ()),
    }
}

fn trimmed(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{AdminInputs, apply_admin_form, parse_optional};
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::models::{Entry, EntryKind};
    use crate::request::FormRequest;
    use crate::service::ServiceContext;

    fn ctx() -> ServiceContext {
        ServiceContext::new(Settings::default()).unwrap()
    }

    #[test]
    fn parse_optional_treats_blank_as_absent() {
        assert_eq!(parse_optional::<u32>(Some("  ")), Ok(None));
        assert_eq!(parse_optional::<u32>(Some(" 12 ")), Ok(Some(12)));
        assert_eq!(parse_optional::<u32>(Some("twelve")), Err(()));
    }

    #[test]
    fn text_form_populates_entry_and_primary_field() {
        let mut entry = Entry::new(1, EntryKind::Text);
        let request = FormRequest::from_urlencoded(
            "title=Email&help_message=+Work+address+&width=40&max_size_enter=80&mandatory=on\
             &confirm_field=on&confirm_field_title=Repeat&unique_field=on&value=x%40y.z",
        );

        let outcome =
            apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::TEXT);

        assert_eq!(outcome, None);
        assert_eq!(entry.title, "Email");
        assert_eq!(entry.help_message.as_deref(), Some("Work address"));
        assert!(entry.mandatory && entry.confirm_field && entry.unique);
        assert_eq!(entry.confirm_field_title.as_deref(), Some("Repeat"));
        let field = entry.primary_field().unwrap();
        assert_eq!(field.width, Some(40));
        assert_eq!(field.max_size_enter, Some(80));
        assert_eq!(field.value, "x@y.z");
    }

    // A failed form must not leave a half-updated entry behind.
    #[test]
    fn missing_title_redirects_and_leaves_entry_untouched() {
        let mut entry = Entry::new(1, EntryKind::Text);
        entry.title = "Before".into();
        let request = FormRequest::from_urlencoded("title=+&width=10");

        let outcome =
            apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::TEXT);

        let url = outcome.expect("redirect expected");
        assert!(url.contains("portal.util.message.mandatoryField"));
        assert_eq!(entry.title, "Before");
    }

    #[test]
    fn confirm_without_title_is_reported() {
        let mut entry = Entry::new(1, EntryKind::Text);
        let request = FormRequest::from_urlencoded("title=Mail&width=10&confirm_field=on");

        let url = apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::TEXT)
            .expect("redirect expected");
        assert!(url.contains("Confirmation+field+title"));
    }

    // The first missing input in form order is the one reported.
    #[test]
    fn missing_title_is_reported_before_confirmation_title() {
        let mut entry = Entry::new(1, EntryKind::Text);
        let request = FormRequest::from_urlencoded("title=&width=10&confirm_field=on");

        let url = apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::TEXT)
            .expect("redirect expected");
        assert!(url.contains("Title"));
        assert!(!url.contains("Confirmation"));
    }

    #[test]
    fn malformed_width_uses_numeric_message() {
        let mut entry = Entry::new(1, EntryKind::Text);
        let request = FormRequest::from_urlencoded("title=Mail&width=wide");

        let url = apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::TEXT)
            .expect("redirect expected");
        assert!(url.contains("genericattributes.message.numeric.field"));
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn upload_form_reads_limits() {
        let mut entry = Entry::new(5, EntryKind::File);
        let request =
            FormRequest::from_urlencoded("title=Scans&max_files=3&file_max_size=2048&total_max_size=");

        let outcome =
            apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::UPLOAD);

        assert_eq!(outcome, None);
        assert_eq!(entry.upload.max_files, Some(3));
        assert_eq!(entry.upload.file_max_size, Some(2048));
        assert_eq!(entry.upload.total_max_size, None);
        assert!(entry.fields.is_empty(), "upload entries keep no primary field");
    }

    #[test]
    fn comment_form_requires_comment_text() {
        let mut entry = Entry::new(6, EntryKind::Comment);
        let request = FormRequest::from_urlencoded("title=");

        let url =
            apply_admin_form(&ctx(), &mut entry, &request, &Locale::new("en"), AdminInputs::COMMENT)
                .expect("redirect expected");
        assert!(url.contains("Comment"));
    }
}
