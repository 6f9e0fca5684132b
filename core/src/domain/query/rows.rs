use std::fmt;

use indexmap::IndexMap;

use crate::domain::common::entities::app_errors::CoreError;

/// A bound value. Integers are only produced for literals the endpoint typed
/// as integers; everything else stays text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(value) => f.write_str(value),
            Scalar::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// One solution of a query. Unbound variables are absent from the map,
/// never present as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    bindings: IndexMap<String, Scalar>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Scalar) {
        self.bindings.insert(name.into(), value);
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, Scalar::Text(value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.bindings.get(name)
    }

    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(Scalar::to_string)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Scalar::Integer(value) => Some(*value),
            Scalar::Text(value) => value.trim().parse().ok(),
        }
    }

    /// Text of a binding the query pattern guarantees. Its absence means the
    /// endpoint answered something other than what was asked.
    pub fn required(&self, name: &str) -> Result<String, CoreError> {
        self.text(name).ok_or_else(|| {
            CoreError::MalformedResponse(format!("missing binding `{}` in result row", name))
        })
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Scalar)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, Scalar)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_binding_is_missing() {
        let row = RowRecord::new().with("label", "Merkur");
        assert_eq!(row.text("label").as_deref(), Some("Merkur"));
        assert_eq!(row.text("volume"), None);
        assert!(matches!(
            row.required("volume"),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_integer_accessor_accepts_typed_and_text() {
        let row: RowRecord = [
            ("number", Scalar::Integer(3)),
            ("pubDate", Scalar::Text("1951".to_string())),
            ("label", Scalar::Text("n/a".to_string())),
        ]
        .into_iter()
        .collect();
        assert_eq!(row.integer("number"), Some(3));
        assert_eq!(row.integer("pubDate"), Some(1951));
        assert_eq!(row.integer("label"), None);
        assert_eq!(row.text("number").as_deref(), Some("3"));
    }
}
