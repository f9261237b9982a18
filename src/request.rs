// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only view of the host's inbound request.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::models::FileItem;

/// What entry types need from a submitted request.
///
/// Hosts implement this over their own request type; [`FormRequest`] is the
/// bundled implementation.
pub trait FormSource {
    /// First value of parameter `name`.
    fn parameter(&self, name: &str) -> Option<&str>;

    /// Every value of parameter `name`, in submission order.
    fn parameter_values(&self, name: &str) -> Vec<&str>;

    /// Files uploaded under input `name`.
    fn files(&self, _name: &str) -> &[FileItem] {
        &[]
    }

    /// Login of the authenticated user, if any.
    fn remote_user(&self) -> Option<&str> {
        None
    }
}

/// In-memory request: parameters, uploaded files and the authenticated user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRequest {
    params: Vec<(String, String)>,
    files: HashMap<String, Vec<FileItem>>,
    remote_user: Option<String>,
}

impl FormRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an `application/x-www-form-urlencoded` body or query string.
    ///
    /// # Examples
    ///
    /// ```
    /// use genattr::request::{FormRequest, FormSource};
    ///
    /// let request = FormRequest::from_urlencoded("attribute1=Jane+Doe&attribute2=3&attribute2=4");
    /// assert_eq!(request.parameter("attribute1"), Some("Jane Doe"));
    /// assert_eq!(request.parameter_values("attribute2"), vec!["3", "4"]);
    /// ```
    pub fn from_urlencoded(body: &str) -> Self {
        let params = form_urlencoded::parse(body.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: FileItem) -> Self {
        self.files.entry(name.into()).or_default().push(file);
        self
    }

    pub fn with_remote_user(mut self, login: impl Into<String>) -> Self {
        self.remote_user = Some(login.into());
        self
    }
}

impl FormSource for FormRequest {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn parameter_values(&self, name: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    fn files(&self, name: &str) -> &[FileItem] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    fn remote_user(&self) -> Option<&str> {
        self.remote_user.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{FormRequest, FormSource};
    use crate::models::FileItem;

    #[test]
    fn from_urlencoded_decodes_and_keeps_order() {
        let request = FormRequest::from_urlencoded("?a=%C3%A9t%C3%A9&b=1&b=2&c=");
        assert_eq!(request.parameter("a"), Some("été"));
        assert_eq!(request.parameter_values("b"), vec!["1", "2"]);
        assert_eq!(request.parameter("c"), Some(""));
        assert_eq!(request.parameter("missing"), None);
    }

    #[test]
    fn files_and_user_are_exposed() {
        let request = FormRequest::new()
            .with_file("attribute4", FileItem::new("a.png", 10))
            .with_remote_user("jdoe");
        assert_eq!(request.files("attribute4").len(), 1);
        assert!(request.files("attribute5").is_empty());
        assert_eq!(request.remote_user(), Some("jdoe"));
    }
}
