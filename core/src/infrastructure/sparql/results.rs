//! `application/sparql-results+json` decoding.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::domain::query::rows::{RowRecord, Scalar};

pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

const INTEGER_TYPES: &[&str] = &[
    "integer",
    "int",
    "long",
    "short",
    "byte",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
    "unsignedByte",
];

#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<IndexMap<String, SparqlValue>>,
}

#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub datatype: Option<String>,
}

impl SparqlValue {
    fn is_integer(&self) -> bool {
        matches!(self.kind.as_str(), "literal" | "typed-literal")
            && self
                .datatype
                .as_deref()
                .and_then(|datatype| datatype.strip_prefix(XSD))
                .is_some_and(|local| INTEGER_TYPES.contains(&local))
    }
}

impl From<SparqlValue> for Scalar {
    fn from(value: SparqlValue) -> Self {
        if value.is_integer() {
            if let Ok(number) = value.value.trim().parse::<i64>() {
                return Scalar::Integer(number);
            }
        }
        Scalar::Text(value.value)
    }
}

impl From<SparqlResponse> for Vec<RowRecord> {
    fn from(response: SparqlResponse) -> Self {
        response
            .results
            .bindings
            .into_iter()
            .map(|binding| {
                binding
                    .into_iter()
                    .map(|(name, value)| (name, Scalar::from(value)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "head": { "vars": ["translator", "label", "year_birth", "nationality"] },
        "results": {
            "bindings": [
                {
                    "translator": { "type": "uri", "value": "http://spacesoftranslation.org/ns/people/p_1" },
                    "label": { "type": "literal", "value": "Doe, Jane", "xml:lang": "de" },
                    "year_birth": { "type": "literal", "value": "1901", "datatype": "http://www.w3.org/2001/XMLSchema#integer" }
                },
                {
                    "translator": { "type": "uri", "value": "http://spacesoftranslation.org/ns/people/p_2" },
                    "label": { "type": "literal", "value": "Roe, Richard" },
                    "year_birth": { "type": "literal", "value": "1899" },
                    "nationality": { "type": "literal", "value": "" }
                }
            ]
        }
    }"#;

    fn rows() -> Vec<RowRecord> {
        let response: SparqlResponse = serde_json::from_str(BODY).unwrap();
        response.into()
    }

    #[test]
    fn test_typed_integers_become_integers() {
        let rows = rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("year_birth"), Some(&Scalar::Integer(1901)));
        assert_eq!(
            rows[1].get("year_birth"),
            Some(&Scalar::Text("1899".to_string()))
        );
    }

    #[test]
    fn test_unbound_variables_are_absent() {
        let rows = rows();
        assert_eq!(rows[0].get("nationality"), None);
        assert_eq!(rows[1].text("nationality").as_deref(), Some(""));
    }

    #[test]
    fn test_uris_are_text() {
        let rows = rows();
        assert_eq!(
            rows[0].text("translator").as_deref(),
            Some("http://spacesoftranslation.org/ns/people/p_1")
        );
    }

    #[test]
    fn test_rejects_non_results_document() {
        assert!(serde_json::from_str::<SparqlResponse>(r#"{"boolean": true}"#).is_err());
    }
}
