// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Entry definitions: the configured form fields a host portal displays.
//! Parsing is kept pure so it can be reused by the registry and the CLI.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Entry type identifiers known to the built-in registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Text,
    TextArea,
    Numeric,
    Date,
    Select,
    Radio,
    Checkbox,
    File,
    Comment,
    User,
    Unknown(String),
}

impl EntryKind {
    /// Creates an `EntryKind` from a type code.
    ///
    /// Unknown codes are kept as `EntryKind::Unknown` so a host can register
    /// its own services under them.
    ///
    /// # Examples
    ///
    /// ```
    /// use genattr::models::EntryKind;
    ///
    /// assert_eq!(EntryKind::from_code("textarea"), EntryKind::TextArea);
    /// assert_eq!(EntryKind::from_code("rating"), EntryKind::Unknown("rating".to_string()));
    /// ```
    pub fn from_code(raw: &str) -> Self {
        match raw {
            "text" => Self::Text,
            "textarea" => Self::TextArea,
            "numeric" => Self::Numeric,
            "date" => Self::Date,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "file" => Self::File,
            "comment" => Self::Comment,
            "user" => Self::User,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Type code, also used to name templates.
    pub fn code(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Comment => "comment",
            Self::User => "user",
            Self::Unknown(raw) => raw.as_str(),
        }
    }
}

/// Validation pattern attached to a field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegularExpression {
    pub id: i32,
    pub title: String,
    pub pattern: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub valid_example: Option<String>,
}

/// One configurable part of an entry: the input settings of text-like kinds,
/// or one option of a choice kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    pub id: i32,
    pub title: String,
    pub value: String,
    pub default_value: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_size_enter: Option<usize>,
    pub regular_expressions: Vec<RegularExpression>,
}

/// Upload constraints of a file entry. `None` means "use the default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_files: Option<usize>,
    pub file_max_size: Option<u64>,
    pub total_max_size: Option<u64>,
}

/// A configured form field definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: i32,
    pub kind: EntryKind,
    pub title: String,
    pub code: Option<String>,
    pub help_message: Option<String>,
    pub comment: Option<String>,
    pub mandatory: bool,
    pub field_in_line: bool,
    pub confirm_field: bool,
    pub confirm_field_title: Option<String>,
    pub unique: bool,
    pub css_class: Option<String>,
    pub error_message: Option<String>,
    pub position: Option<i32>,
    pub only_display_in_back: bool,
    pub fields: Vec<Field>,
    pub upload: UploadLimits,
}

impl Entry {
    /// Empty entry of the given kind, as created by the admin "add entry" action.
    pub fn new(id: i32, kind: EntryKind) -> Self {
        Self {
            id,
            kind,
            title: String::new(),
            code: None,
            help_message: None,
            comment: None,
            mandatory: false,
            field_in_line: false,
            confirm_field: false,
            confirm_field_title: None,
            unique: false,
            css_class: None,
            error_message: None,
            position: None,
            only_display_in_back: false,
            fields: Vec::new(),
            upload: UploadLimits::default(),
        }
    }

    /// Sort helper: position first, then title.
    pub fn cmp_key(&self) -> (i32, &str) {
        (self.position.unwrap_or(i32::MAX), &self.title)
    }

    /// Field holding the input settings of text-like kinds.
    pub fn primary_field(&self) -> Option<&Field> {
        self.fields.first()
    }

    /// Mutable primary field, created on demand.
    pub fn primary_field_mut(&mut self) -> &mut Field {
        if self.fields.is_empty() {
            self.fields.push(Field::default());
        }
        &mut self.fields[0]
    }

    pub fn max_size_enter(&self) -> Option<usize> {
        self.primary_field().and_then(|f| f.max_size_enter)
    }

    pub fn regular_expressions(&self) -> &[RegularExpression] {
        self.primary_field()
            .map(|f| f.regular_expressions.as_slice())
            .unwrap_or(&[])
    }

    pub fn field_by_id(&self, id: i32) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Deserialize)]
struct EntriesEnvelope {
    entries: Vec<EntryRaw>,
}

#[derive(Debug, Deserialize)]
struct EntryRaw {
    id: i32,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    help_message: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    mandatory: bool,
    #[serde(default)]
    field_in_line: bool,
    #[serde(default)]
    confirm_field: bool,
    #[serde(default)]
    confirm_field_title: Option<String>,
    #[serde(default)]
    unique: bool,
    #[serde(default)]
    css_class: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    position: Option<i32>,
    #[serde(default)]
    only_display_in_back: bool,
    #[serde(default)]
    fields: Vec<FieldRaw>,
    #[serde(default)]
    max_files: Option<usize>,
    #[serde(default)]
    file_max_size: Option<u64>,
    #[serde(default)]
    total_max_size: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FieldRaw {
    #[serde(default)]
    id: i32,
    #[serde(default)]
    title: String,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    default_value: bool,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    max_size_enter: Option<usize>,
    #[serde(default)]
    regular_expressions: Vec<RegularExpression>,
}

/// Parse entry definitions from a JSON document of the form `{"entries": [...]}`.
///
/// Blank optional strings are treated as absent and field values may be given
/// as JSON strings, numbers or booleans. Entries come back sorted by position,
/// then title.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or does not match the
/// expected shape.
///
/// # Examples
///
/// ```
/// let json = r#"{"entries":[{"id":1,"type":"text","title":"Name","mandatory":true}]}"#;
/// let entries = genattr::models::parse_entries(json).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert!(entries[0].mandatory);
/// ```
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    let env: EntriesEnvelope =
        serde_json::from_str(json).context("Failed to parse entry definitions JSON")?;

    let mut entries = Vec::with_capacity(env.entries.len());
    for raw in env.entries {
        let fields = raw
            .fields
            .into_iter()
            .map(|f| Field {
                id: f.id,
                title: f.title,
                value: value_to_string(f.value.as_ref()).unwrap_or_default(),
                default_value: f.default_value,
                width: f.width,
                height: f.height,
                max_size_enter: f.max_size_enter,
                regular_expressions: f.regular_expressions,
            })
            .collect();

        entries.push(Entry {
            id: raw.id,
            kind: EntryKind::from_code(raw.kind.trim()),
            title: raw.title,
            code: non_blank(raw.code),
            help_message: non_blank(raw.help_message),
            comment: non_blank(raw.comment),
            mandatory: raw.mandatory,
            field_in_line: raw.field_in_line,
            confirm_field: raw.confirm_field,
            confirm_field_title: non_blank(raw.confirm_field_title),
            unique: raw.unique,
            css_class: non_blank(raw.css_class),
            error_message: non_blank(raw.error_message),
            position: raw.position,
            only_display_in_back: raw.only_display_in_back,
            fields,
            upload: UploadLimits {
                max_files: raw.max_files,
                file_max_size: raw.file_max_size,
                total_max_size: raw.total_max_size,
            },
        });
    }

    entries.sort_by(|a, b| a.cmp_key().cmp(&b.cmp_key()));
    Ok(entries)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Convert a JSON `Value` into its string form; booleans map to `"true"`/`""`.
fn value_to_string(val: Option<&Value>) -> Option<String> {
    match val? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "true" } else { "" }.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
