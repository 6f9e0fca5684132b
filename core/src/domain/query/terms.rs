//! Validated values that may be interpolated into a compiled query.
//!
//! Caller-supplied text never reaches the query string directly: it first
//! becomes one of the types below, each of which either refuses input it
//! cannot encode safely or escapes it on rendering.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static IRI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("static regex"));

static LOCAL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_\-.]*$").expect("static regex"));

static ATTRIBUTE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} \-'.,/&()]+$").expect("static regex"));

/// Absolute IRI safe to render between angle brackets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iri(String);

impl Iri {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if !IRI_SCHEME.is_match(value) {
            return None;
        }
        let forbidden = |c: char| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
        };
        if value.chars().any(forbidden) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// Local part of a prefixed name, e.g. the `abc123` in `person:abc123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalName(String);

impl LocalName {
    pub fn parse(value: &str) -> Option<Self> {
        if value.ends_with('.') || !LOCAL_NAME.is_match(value) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plain string literal. Quotes, backslashes and line breaks are escaped when
/// rendered, so any content is safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(String);

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")
    }
}

/// Free-text attribute value used as an equality filter (genre, gender,
/// nationality, language area). Restricted to a conservative character set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeValue(String);

impl AttributeValue {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.chars().count() > 128 || !ATTRIBUTE_TEXT.is_match(value) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn literal(&self) -> Literal {
        Literal::new(self.0.clone())
    }
}
