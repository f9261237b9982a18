// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! HTML building blocks shared by the entry type renderers.
//!
//! Every user-provided string goes through [`escape`] or
//! [`markdown_to_html`]; renderers never splice raw text into markup.

use pulldown_cmark::{Options, Parser, html};

use crate::models::Entry;

/// Rendering context: public portal or administration preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Front,
    Back,
}

impl Display {
    pub fn is_front(self) -> bool {
        self == Self::Front
    }

    /// Extra attribute for inputs: back office previews are not editable.
    pub(crate) fn input_state(self) -> &'static str {
        match self {
            Self::Front => "",
            Self::Back => " disabled",
        }
    }
}

/// Escape arbitrary text for use in HTML content or quoted attributes.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// Render markdown to sanitized HTML (help messages and comments).
pub fn markdown_to_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(body, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    ammonia::Builder::default().clean(&html_output).to_string()
}

/// `<label>` for the entry's main input, with the mandatory marker.
pub fn label(entry: &Entry, input_id: &str) -> String {
    let marker = if entry.mandatory {
        " <span class=\"mandatory\">*</span>"
    } else {
        ""
    };
    format!(
        "<label for=\"{}\">{}{marker}</label>",
        escape(input_id),
        escape(&entry.title)
    )
}

/// Wrap an entry's inputs in its container, adding the help block.
///
/// Back office output carries the entry id and code so administrators can
/// identify the entry in a preview.
pub fn wrap(entry: &Entry, display: Display, inner: &str) -> String {
    let mut class = String::from("form-group");
    if entry.field_in_line {
        class.push_str(" form-inline");
    }
    if let Some(css) = &entry.css_class {
        class.push(' ');
        class.push_str(&escape(css));
    }

    let mut out = match display {
        Display::Front => format!("<div class=\"{class}\">"),
        Display::Back => format!(
            "<div class=\"{class}\" data-entry-id=\"{}\" data-entry-code=\"{}\">",
            entry.id,
            escape(entry.code.as_deref().unwrap_or(""))
        ),
    };
    out.push_str(inner);
    if let Some(help) = &entry.help_message {
        out.push_str("<div class=\"help-block\">");
        out.push_str(&markdown_to_html(help));
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

/// Optional ` name="value"` attribute; empty when `value` is `None`.
pub(crate) fn opt_attr(name: &str, value: Option<impl ToString>) -> String {
    value
        .map(|v| format!(" {name}=\"{}\"", escape(&v.to_string())))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{Display, escape, label, markdown_to_html, opt_attr, wrap};
    use crate::models::{Entry, EntryKind};

    #[test]
    fn escape_neutralizes_markup() {
        let escaped = escape("<b onclick=\"x\">");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn markdown_to_html_sanitizes_and_keeps_formatting() {
        let html = markdown_to_html("Hello <script>alert('x')</script> ~~gone~~");

        assert!(html.contains("<del>gone</del>"));
        assert!(!html.contains("script"));
    }

    #[test]
    fn label_marks_mandatory_entries() {
        let mut entry = Entry::new(1, EntryKind::Text);
        entry.title = "Name".into();
        entry.mandatory = true;
        let html = label(&entry, "attribute1");
        assert!(html.starts_with("<label for=\"attribute1\">Name"));
        assert!(html.contains("class=\"mandatory\""));
    }

    // Only the back office exposes entry identifiers.
    #[test]
    fn wrap_adds_identifiers_in_back_office_only() {
        let mut entry = Entry::new(9, EntryKind::Text);
        entry.code = Some("zip".into());
        entry.css_class = Some("wide".into());
        entry.help_message = Some("Use **five** digits".into());

        let front = wrap(&entry, Display::Front, "<input>");
        let back = wrap(&entry, Display::Back, "<input>");

        assert!(front.starts_with("<div class=\"form-group wide\">"));
        assert!(front.contains("<strong>five</strong>"));
        assert!(!front.contains("data-entry-id"));
        assert!(back.contains("data-entry-id=\"9\""));
        assert!(back.contains("data-entry-code=\"zip\""));
    }

    #[test]
    fn opt_attr_is_empty_for_none() {
        assert_eq!(opt_attr("size", None::<u32>), "");
        assert_eq!(opt_attr("size", Some(20)), " size=\"20\"");
    }
}
