// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Display-only comment blocks.

use std::sync::Arc;

use crate::i18n::Locale;
use crate::logic::admin::{AdminInputs, apply_admin_form};
use crate::models::{Entry, ResponseData};
use crate::render::{self, Display, markdown_to_html};
use crate::request::FormSource;
use crate::service::{EntryTypeService, ServiceContext};

/// `comment` entries: markdown text shown inside the form, never answered.
#[derive(Debug)]
pub struct CommentEntryType {
    ctx: Arc<ServiceContext>,
}

impl CommentEntryType {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

impl EntryTypeService for CommentEntryType {
    fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    fn render_html(&self, entry: &Entry, display: Display) -> String {
        let body = entry
            .comment
            .as_deref()
            .map(markdown_to_html)
            .unwrap_or_default();
        render::wrap(entry, display, &format!("<div class=\"comment\">{body}</div>"))
    }

    fn extract_request_data(
        &self,
        entry: &mut Entry,
        request: &dyn FormSource,
        locale: &Locale,
    ) -> Option<String> {
        apply_admin_form(&self.ctx, entry, request, locale, AdminInputs::COMMENT)
    }

    fn extract_response_data(
        &self,
        _entry: &Entry,
        _request: &dyn FormSource,
        _locale: &Locale,
    ) -> ResponseData {
        ResponseData::ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::CommentEntryType;
    use crate::config::Settings;
    use crate::i18n::Locale;
    use crate::models::{Entry, EntryKind};
    use crate::render::Display;
    use crate::request::FormRequest;
    use crate::service::{EntryTypeService, ServiceContext};

    fn service() -> CommentEntryType {
        CommentEntryType::new(Arc::new(ServiceContext::new(Settings::default()).unwrap()))
    }

    #[test]
    fn renders_comment_markdown() {
        let mut entry = Entry::new(2, EntryKind::Comment);
        entry.comment = Some("Read **carefully**".into());
        let html = service().render_html(&entry, Display::Front);
        assert!(html.contains("<strong>carefully</strong>"));
        assert!(!html.contains("<input"));
    }

    // Even a mandatory comment has nothing to answer.
    #[test]
    fn never_produces_responses_or_errors() {
        let mut entry = Entry::new(2, EntryKind::Comment);
        entry.mandatory = true;
        let request = FormRequest::from_urlencoded("attribute2=%3Cscript%3E");
        let data = service().extract_response_data(&entry, &request, &Locale::new("en"));
        assert!(data.is_valid());
        assert!(data.responses.is_empty());
    }

    #[test]
    fn request_data_stores_comment_without_title() {
        let mut entry = Entry::new(2, EntryKind::Comment);
        let request = FormRequest::from_urlencoded("comment=Hello&mandatory=on");
        assert_eq!(
            service().extract_request_data(&mut entry, &request, &Locale::new("en")),
            None
        );
        assert_eq!(entry.comment.as_deref(), Some("Hello"));
        assert!(!entry.mandatory);
    }
}
