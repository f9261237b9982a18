// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validation patterns: the host's regular expression catalog and matching.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::RegularExpression;

/// The host's catalog of reusable validation patterns.
pub trait RegularExpressionSource {
    /// `false` when the host runs without a regular expression service.
    fn is_available(&self) -> bool {
        true
    }

    fn all(&self) -> Vec<RegularExpression>;
}

/// Fixed catalog, e.g. loaded alongside the entry definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticExpressions {
    expressions: Vec<RegularExpression>,
}

impl StaticExpressions {
    pub fn new(expressions: Vec<RegularExpression>) -> Self {
        Self { expressions }
    }
}

impl RegularExpressionSource for StaticExpressions {
    fn all(&self) -> Vec<RegularExpression> {
        self.expressions.clone()
    }
}

/// Source standing for a host without a regular expression service.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unavailable;

impl RegularExpressionSource for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn all(&self) -> Vec<RegularExpression> {
        Vec::new()
    }
}

/// Whether the whole of `value` matches the expression's pattern.
///
/// # Errors
///
/// Returns an error when the pattern does not compile.
pub fn is_match(expression: &RegularExpression, value: &str) -> Result<bool> {
    // The bare pattern must compile first so it cannot close the anchoring group.
    Regex::new(&expression.pattern)
        .with_context(|| format!("Invalid regular expression {:?}", expression.title))?;
    let anchored = Regex::new(&format!("^(?:{})$", expression.pattern))
        .with_context(|| format!("Invalid regular expression {:?}", expression.title))?;
    Ok(anchored.is_match(value))
}
