//! Folds flat result rows into entities keyed by an identifier binding.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use super::rows::RowRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Multi,
}

/// Maps one result binding onto one entity field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: &'static str,
    pub binding: &'static str,
    pub cardinality: Cardinality,
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn single(field: &'static str, binding: &'static str) -> Self {
        Self {
            field,
            binding,
            cardinality: Cardinality::Single,
            default: None,
        }
    }

    pub const fn multi(field: &'static str, binding: &'static str) -> Self {
        Self {
            field,
            binding,
            cardinality: Cardinality::Multi,
            default: None,
        }
    }

    pub const fn or(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroupSpec {
    pub id_binding: &'static str,
    pub fields: &'static [FieldSpec],
}

/// An entity assembled from every row sharing its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEntity {
    pub id: String,
    singles: IndexMap<&'static str, Option<String>>,
    multis: IndexMap<&'static str, IndexSet<String>>,
}

impl GroupedEntity {
    fn new(id: String, spec: &GroupSpec) -> Self {
        let mut singles = IndexMap::new();
        let mut multis = IndexMap::new();
        for field in spec.fields {
            match field.cardinality {
                Cardinality::Single => {
                    singles.insert(field.field, None);
                }
                Cardinality::Multi => {
                    multis.insert(field.field, IndexSet::new());
                }
            }
        }
        Self {
            id,
            singles,
            multis,
        }
    }

    /// Singular fields keep the first value seen for them; multi-valued
    /// fields gain values not already present.
    fn absorb(&mut self, row: &RowRecord, spec: &GroupSpec) {
        for field in spec.fields {
            let Some(value) = row.text(field.binding) else {
                continue;
            };
            match field.cardinality {
                Cardinality::Single => {
                    if let Some(slot) = self.singles.get_mut(field.field) {
                        slot.get_or_insert(value);
                    }
                }
                Cardinality::Multi => {
                    if let Some(values) = self.multis.get_mut(field.field) {
                        values.insert(value);
                    }
                }
            }
        }
    }

    fn apply_defaults(&mut self, spec: &GroupSpec) {
        for field in spec.fields {
            let Some(default) = field.default else {
                continue;
            };
            match field.cardinality {
                Cardinality::Single => {
                    if let Some(slot) = self.singles.get_mut(field.field) {
                        slot.get_or_insert_with(|| default.to_string());
                    }
                }
                Cardinality::Multi => {
                    if let Some(values) = self.multis.get_mut(field.field) {
                        if values.is_empty() {
                            values.insert(default.to_string());
                        }
                    }
                }
            }
        }
    }

    pub fn single(&self, field: &str) -> Option<&str> {
        self.singles.get(field).and_then(|value| value.as_deref())
    }

    pub fn multi(&self, field: &str) -> Vec<String> {
        self.multis
            .get(field)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Groups rows by `spec.id_binding`, in order of first appearance.
/// Rows without an identifier are skipped.
pub fn group_rows(rows: &[RowRecord], spec: &GroupSpec) -> Vec<GroupedEntity> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entities: Vec<GroupedEntity> = Vec::new();

    for row in rows {
        let Some(id) = row.text(spec.id_binding) else {
            debug!(binding = spec.id_binding, "skipping row without identifier");
            continue;
        };
        let slot = *index.entry(id.clone()).or_insert_with(|| {
            entities.push(GroupedEntity::new(id, spec));
            entities.len() - 1
        });
        entities[slot].absorb(row, spec);
    }

    for entity in &mut entities {
        entity.apply_defaults(spec);
    }
    entities
}

/// Ordered, duplicate-free values of one binding across all rows.
pub fn collect_unique(rows: &[RowRecord], binding: &str) -> Vec<String> {
    rows.iter()
        .filter_map(|row| row.text(binding))
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
