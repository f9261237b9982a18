// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Closed sets of request parameter names, message keys and field labels.
//! `as_str` returns the string the host expects on the wire or in resources.

/// Prefix of every end-user input name (`attribute12`).
pub const PREFIX_ATTRIBUTE: &str = "attribute";

/// Suffix of the confirmation input of a text entry (`attribute12_confirm_field`).
pub const SUFFIX_CONFIRM_FIELD: &str = "_confirm_field";

/// Name of the end-user input carrying the value of entry `entry_id`.
pub fn attribute_name(entry_id: i32) -> String {
    format!("{PREFIX_ATTRIBUTE}{entry_id}")
}

/// Name of the confirmation input paired with entry `entry_id`.
pub fn confirm_attribute_name(entry_id: i32) -> String {
    format!("{PREFIX_ATTRIBUTE}{entry_id}{SUFFIX_CONFIRM_FIELD}")
}

/// Parameters of the admin "create/modify entry" form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Title,
    HelpMessage,
    Comment,
    Mandatory,
    FieldInLine,
    Height,
    Width,
    Value,
    MaxSizeEnter,
    ConfirmField,
    ConfirmFieldTitle,
    Unique,
    CssClass,
    ErrorMessage,
    MaxFiles,
    FileMaxSize,
    TotalMaxSize,
}

impl Parameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::HelpMessage => "help_message",
            Self::Comment => "comment",
            Self::Mandatory => "mandatory",
            Self::FieldInLine => "field_in_line",
            Self::Height => "height",
            Self::Width => "width",
            Self::Value => "value",
            Self::MaxSizeEnter => "max_size_enter",
            Self::ConfirmField => "confirm_field",
            Self::ConfirmFieldTitle => "confirm_field_title",
            Self::Unique => "unique_field",
            Self::CssClass => "css_class",
            Self::ErrorMessage => "errorMessage",
            Self::MaxFiles => "max_files",
            Self::FileMaxSize => "file_max_size",
            Self::TotalMaxSize => "total_max_size",
        }
    }
}

/// Localized messages reported to users and administrators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    MandatoryField,
    NumericField,
    ConfirmField,
    UniqueField,
    XssField,
    MaxLength,
    AuthenticationRequired,
    InvalidDate,
    RegularExpression,
    MaxFiles,
    FileMaxSize,
    TotalMaxSize,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MandatoryField => "portal.util.message.mandatoryField",
            Self::NumericField => "genericattributes.message.numeric.field",
            Self::ConfirmField => "genericattributes.message.errorConfirmField",
            Self::UniqueField => "genericattributes.message.errorUniqueField",
            Self::XssField => "genericattributes.message.errorXssField",
            Self::MaxLength => "genericattributes.message.maxLength",
            Self::AuthenticationRequired => {
                "genericattributes.message.myLuteceAuthentificationRequired"
            }
            Self::InvalidDate => "genericattributes.message.errorDateField",
            Self::RegularExpression => "genericattributes.message.errorRegularExpression",
            Self::MaxFiles => "genericattributes.message.error.uploading_file.max_files",
            Self::FileMaxSize => "genericattributes.message.error.uploading_file.file_max_size",
            Self::TotalMaxSize => "genericattributes.message.error.uploading_file.total_max_size",
        }
    }
}

/// Labels of the admin form inputs, used to name the faulty input in messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Title,
    InsertGroup,
    Comment,
    Width,
    Height,
    MaxSizeEnter,
    ConfirmFieldTitle,
    MaxFiles,
    FileMaxSize,
    TotalMaxSize,
}

impl FieldLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "genericattributes.createEntry.labelTitle",
            Self::InsertGroup => "genericattributes.labelInsertGroup",
            Self::Comment => "genericattributes.createEntry.labelComment",
            Self::Width => "genericattributes.createEntry.labelWidth",
            Self::Height => "genericattributes.createEntry.labelHeight",
            Self::MaxSizeEnter => "genericattributes.createEntry.labelMaxSizeEnter",
            Self::ConfirmFieldTitle => "genericattributes.createEntry.labelConfirmFieldTitle",
            Self::MaxFiles => "genericattributes.createEntry.labelMaxFiles",
            Self::FileMaxSize => "genericattributes.createEntry.labelFileMaxSize",
            Self::TotalMaxSize => "genericattributes.createEntry.labelTotalMaxSize",
        }
    }
}
