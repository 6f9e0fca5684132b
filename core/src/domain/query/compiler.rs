//! Compiles filter sets into SPARQL.
//!
//! Translation search and translator search share one compile path; they
//! differ only in the graph pattern and in their kind-specific clauses.
//! Clauses are always emitted in the same order:
//! core pattern, work filters, label projections, kind extras, sort, paging.

use super::filters::{Pagination, SortKey, TranslationFilter, TranslatorFilter, WorkFilter};
use super::sparql::{
    Clause, Comparison, Predicate, SelectQuery, crm, dcterms, lrm, path, rdfs, spatrem, var,
};
use super::templates::{CatalogQuery, EntityLookup};
use super::terms::{AttributeValue, Literal};

/// Every query the knowledge base issues.
#[derive(Debug, Clone, Copy)]
pub enum QueryKind<'a> {
    TranslationSearch {
        filter: &'a TranslationFilter,
        pagination: Pagination,
    },
    TranslatorSearch(&'a TranslatorFilter),
    EntityLookup(&'a EntityLookup),
    Catalog(CatalogQuery),
}

impl QueryKind<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            QueryKind::TranslationSearch { .. } => "translation_search",
            QueryKind::TranslatorSearch(_) => "translator_search",
            QueryKind::EntityLookup(lookup) => lookup.name(),
            QueryKind::Catalog(catalog) => catalog.name(),
        }
    }
}

pub fn compile(kind: QueryKind<'_>) -> SelectQuery {
    match kind {
        QueryKind::TranslationSearch { filter, pagination } => {
            compile_translation_search(filter, pagination)
        }
        QueryKind::TranslatorSearch(filter) => compile_translator_search(filter),
        QueryKind::EntityLookup(lookup) => lookup.compile(),
        QueryKind::Catalog(catalog) => catalog.compile(),
    }
}

/// Graph shape of a search kind. The work filters only rely on the variables
/// `olang`, `tlang`, `genre`, `pubDate` and `magazine` being bound by `core`.
struct SearchPattern {
    projection: fn() -> SelectQuery,
    core: fn(&WorkFilter) -> Vec<Clause>,
    labels: fn() -> Vec<Clause>,
    secondary_sort: &'static [&'static str],
}

fn created_by() -> Predicate {
    path([lrm("R16i_was_created_by"), crm("P14_carried_out_by")])
}

fn has_language() -> Predicate {
    path([lrm("R3i_is_realised_by"), crm("P72_has_language")])
}

const TRANSLATION_SEARCH: SearchPattern = SearchPattern {
    projection: SelectQuery::select_all,
    core: |_| {
        vec![
            Clause::triple(var("original"), lrm("R68_is_inspiration_for"), var("translation")),
            Clause::triple(var("original"), created_by(), var("author")),
            Clause::triple(var("translation"), created_by(), var("translator")),
            Clause::triple(var("original"), has_language(), var("olang")),
            Clause::triple(var("translation"), has_language(), var("tlang")),
            Clause::triple(var("translation"), spatrem("genre"), var("genre")),
            Clause::triple(var("translation"), lrm("R67i_is_part_of"), var("issue")),
            Clause::triple(var("issue"), lrm("R67i_is_part_of"), var("magazine")),
            Clause::triple(var("issue"), spatrem("pubDate"), var("pubDate")),
            Clause::triple(var("issue"), spatrem("number"), var("number")),
            Clause::Optional(vec![Clause::triple(
                var("issue"),
                spatrem("volume"),
                var("volume"),
            )]),
        ]
    },
    labels: || {
        vec![
            Clause::triple(
                var("translation"),
                path([crm("P1_is_identified_by"), lrm("R33_has_string")]),
                var("title"),
            ),
            Clause::triple(var("issue"), rdfs("label"), var("issue_label")),
            Clause::triple(var("issue"), dcterms("identifier"), var("issue_id")),
            Clause::triple(var("magazine"), rdfs("label"), var("magazine_label")),
            Clause::triple(var("magazine"), dcterms("identifier"), var("magazine_id")),
            Clause::triple(var("author"), rdfs("label"), var("author_name")),
            Clause::triple(var("translator"), rdfs("label"), var("translator_name")),
            Clause::triple(var("olang"), rdfs("label"), var("olangLabel")),
            Clause::triple(var("tlang"), rdfs("label"), var("tlangLabel")),
        ]
    },
    secondary_sort: &["magazine_id", "pubDate"],
};

/// Columns a translator row carries. Projecting them explicitly keeps
/// `DISTINCT` from multiplying rows per issue.
const TRANSLATOR_COLUMNS: &[&str] = &[
    "translator",
    "label",
    "gender",
    "nationality",
    "language_area",
    "year_birth",
    "year_death",
    "genre",
    "magLabel",
    "magKey",
    "olangLabel",
    "tlangLabel",
];

const TRANSLATOR_SEARCH: SearchPattern = SearchPattern {
    projection: || SelectQuery::select(TRANSLATOR_COLUMNS),
    core: |work| {
        let mut clauses = vec![
            Clause::triple(var("original"), lrm("R68_is_inspiration_for"), var("translation")),
            Clause::triple(var("translation"), created_by(), var("translator")),
            Clause::triple(var("original"), has_language(), var("olang")),
            Clause::triple(var("translation"), has_language(), var("tlang")),
            Clause::triple(var("translation"), spatrem("genre"), var("genre")),
            Clause::triple(var("translation"), lrm("R67i_is_part_of"), var("issue")),
            Clause::triple(var("issue"), lrm("R67i_is_part_of"), var("magazine")),
        ];
        // Only join the publication date when it is actually filtered on.
        if work.after_date.is_some() || work.before_date.is_some() {
            clauses.push(Clause::triple(var("issue"), spatrem("pubDate"), var("pubDate")));
        }
        clauses
    },
    labels: || {
        vec![
            Clause::triple(var("magazine"), rdfs("label"), var("magLabel")),
            Clause::triple(var("magazine"), dcterms("identifier"), var("magKey")),
            Clause::triple(var("translator"), rdfs("label"), var("label")),
            Clause::triple(var("olang"), rdfs("label"), var("olangLabel")),
            Clause::triple(var("tlang"), rdfs("label"), var("tlangLabel")),
            Clause::Filter(Comparison::not_equals("label", Literal::new("Anon."))),
        ]
    },
    secondary_sort: &["label"],
};

fn work_filters(work: &WorkFilter) -> Vec<Clause> {
    let mut clauses = Vec::new();
    if let Some(iri) = &work.source_language {
        clauses.push(Clause::Filter(Comparison::equals("olang", iri.clone())));
    }
    if let Some(iri) = &work.target_language {
        clauses.push(Clause::Filter(Comparison::equals("tlang", iri.clone())));
    }
    if let Some(genre) = &work.genre {
        clauses.push(Clause::Filter(Comparison::equals("genre", genre.literal())));
    }
    if let Some(year) = work.after_date {
        clauses.push(Clause::Filter(Comparison::integer_after("pubDate", year)));
    }
    if let Some(year) = work.before_date {
        clauses.push(Clause::Filter(Comparison::integer_before("pubDate", year)));
    }
    if let Some(iri) = &work.magazine {
        clauses.push(Clause::Filter(Comparison::equals("magazine", iri.clone())));
    }
    clauses
}

fn compile_search(
    pattern: &SearchPattern,
    work: &WorkFilter,
    extras: Vec<Clause>,
    primary_sort: Option<&'static str>,
) -> SelectQuery {
    let mut query = (pattern.projection)();
    (pattern.core)(work)
        .into_iter()
        .chain(work_filters(work))
        .chain((pattern.labels)())
        .chain(extras)
        .for_each(|clause| {
            query.push(clause);
        });

    if let Some(key) = primary_sort {
        query.order_by(key);
    }
    for key in pattern.secondary_sort {
        query.order_by(key);
    }
    query
}

pub fn compile_translation_search(
    filter: &TranslationFilter,
    pagination: Pagination,
) -> SelectQuery {
    let mut query = compile_search(
        &TRANSLATION_SEARCH,
        &filter.work,
        Vec::new(),
        filter.sort.map(SortKey::variable),
    );
    if !pagination.is_unbounded() {
        query.offset(pagination.offset()).limit(pagination.limit());
    }
    query
}

/// A constrained attribute must exist and match; an unconstrained one is
/// fetched when present.
fn person_attribute(binding: &'static str, value: Option<&AttributeValue>) -> Vec<Clause> {
    let triple = Clause::triple(var("translator"), spatrem(binding), var(binding));
    match value {
        Some(value) => vec![
            triple,
            Clause::Filter(Comparison::equals(binding, value.literal())),
        ],
        None => vec![Clause::Optional(vec![triple])],
    }
}

fn person_year(binding: &'static str, bound: Option<Comparison>) -> Vec<Clause> {
    let triple = Clause::triple(var("translator"), spatrem(binding), var(binding));
    match bound {
        Some(comparison) => vec![triple, Clause::Filter(comparison)],
        None => vec![Clause::Optional(vec![triple])],
    }
}

/// Translator rows are paginated after grouping, so the compiled query never
/// carries OFFSET/LIMIT.
pub fn compile_translator_search(filter: &TranslatorFilter) -> SelectQuery {
    let extras = [
        person_attribute("gender", filter.gender.as_ref()),
        person_attribute("nationality", filter.nationality.as_ref()),
        person_attribute("language_area", filter.language_area.as_ref()),
        person_year(
            "year_birth",
            filter
                .born_after
                .map(|year| Comparison::integer_after("year_birth", year)),
        ),
        person_year(
            "year_death",
            filter
                .died_before
                .map(|year| Comparison::integer_before("year_death", year)),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    compile_search(
        &TRANSLATOR_SEARCH,
        &filter.work,
        extras,
        filter.sort.map(SortKey::variable),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::filters::{RawFilter, TranslationSortKey, TranslatorSortKey};
    use crate::domain::query::terms::Iri;

    fn full_work_filter() -> WorkFilter {
        WorkFilter {
            source_language: Iri::parse("http://spacesoftranslation.org/ns/languages/fr"),
            target_language: Iri::parse("http://spacesoftranslation.org/ns/languages/de"),
            genre: AttributeValue::parse("poetry"),
            magazine: Iri::parse("http://spacesoftranslation.org/ns/magazines/merkur"),
            after_date: Some(1950),
            before_date: Some(1960),
        }
    }

    #[test]
    fn test_unconstrained_translation_search_has_no_filters() {
        let filter = TranslationFilter::from_raw(&RawFilter {
            sl: Some("any".to_string()),
            tl: Some("any".to_string()),
            genre: Some("any".to_string()),
            magazine: Some("any".to_string()),
            after_date: Some("any".to_string()),
            before_date: Some("any".to_string()),
            ..Default::default()
        });
        let query = compile_translation_search(&filter, Pagination::default());

        assert_eq!(query.filters().count(), 0);
        assert_eq!(query.sort_keys(), &["magazine_id", "pubDate"]);
        let text = query.render();
        assert!(!text.contains("FILTER"));
        assert!(text.ends_with("ORDER BY ?magazine_id ?pubDate\nOFFSET 0\nLIMIT 10"));
    }

    #[test]
    fn test_translation_search_filters_follow_bindings() {
        let filter = TranslationFilter {
            work: full_work_filter(),
            sort: Some(TranslationSortKey::Title),
        };
        let query = compile_translation_search(&filter, Pagination::new(3, 10));

        assert_eq!(query.filters().count(), 6);
        assert_eq!(query.first_unbound_use(), None);
        assert_eq!(query.sort_keys(), &["title", "magazine_id", "pubDate"]);

        let text = query.render();
        assert!(text.contains(
            "FILTER(?olang = <http://spacesoftranslation.org/ns/languages/fr>)"
        ));
        assert!(text.contains("FILTER(?genre = \"poetry\")"));
        assert!(text.contains("FILTER(xsd:integer(?pubDate) > 1950)"));
        assert!(text.contains("FILTER(xsd:integer(?pubDate) < 1960)"));
        assert!(text.ends_with("ORDER BY ?title ?magazine_id ?pubDate\nOFFSET 20\nLIMIT 10"));
    }

    #[test]
    fn test_before_date_is_guarded_by_its_own_field() {
        let filter = TranslationFilter {
            work: WorkFilter {
                before_date: Some(1960),
                ..Default::default()
            },
            sort: None,
        };
        let text = compile_translation_search(&filter, Pagination::default()).render();
        assert!(text.contains("FILTER(xsd:integer(?pubDate) < 1960)"));
        assert!(!text.contains("?pubDate) >"));
    }

    #[test]
    fn test_fetch_all_omits_paging() {
        let query =
            compile_translation_search(&TranslationFilter::default(), Pagination::unbounded());
        let text = query.render();
        assert!(!text.contains("OFFSET"));
        assert!(!text.contains("LIMIT"));
    }

    #[test]
    fn test_unconstrained_translator_search_uses_optional_attributes() {
        let query = compile_translator_search(&TranslatorFilter::default());
        let text = query.render();

        assert_eq!(query.filters().count(), 1);
        assert!(text.contains("FILTER(?label != \"Anon.\")"));
        for attribute in ["gender", "nationality", "language_area", "year_birth", "year_death"] {
            assert!(text.contains(&format!(
                "OPTIONAL {{\n        ?translator spatrem:{attribute} ?{attribute} .\n    }}"
            )));
        }
        assert!(!text.contains("spatrem:pubDate"));
        assert!(!text.contains("LIMIT"));
        assert!(text.ends_with("ORDER BY ?label"));
    }

    #[test]
    fn test_constrained_translator_attributes_are_required() {
        let filter = TranslatorFilter {
            work: full_work_filter(),
            gender: AttributeValue::parse("female"),
            nationality: None,
            language_area: None,
            born_after: Some(1900),
            died_before: Some(1990),
            sort: Some(TranslatorSortKey::BirthYear),
        };
        let query = compile_translator_search(&filter);
        let text = query.render();

        assert_eq!(query.first_unbound_use(), None);
        assert!(text.contains("    ?translator spatrem:gender ?gender .\n    FILTER(?gender = \"female\")"));
        assert!(text.contains("FILTER(xsd:integer(?year_birth) > 1900)"));
        assert!(text.contains("FILTER(xsd:integer(?year_death) < 1990)"));
        assert!(text.contains("    ?issue spatrem:pubDate ?pubDate .\n"));
        assert!(text.contains("OPTIONAL {\n        ?translator spatrem:nationality ?nationality ."));
        assert!(text.ends_with("ORDER BY ?year_birth ?label"));
    }

    #[test]
    fn test_hostile_sort_input_never_reaches_query() {
        let filter = TranslationFilter::from_raw(&RawFilter {
            sortby: Some("?x } ; DROP ALL".to_string()),
            ..Default::default()
        });
        let text = compile_translation_search(&filter, Pagination::default()).render();
        assert!(!text.contains("DROP"));
    }

    #[test]
    fn test_compile_dispatches_on_kind() {
        let filter = TranslatorFilter::default();
        assert_eq!(
            compile(QueryKind::TranslatorSearch(&filter)),
            compile_translator_search(&filter)
        );
        assert_eq!(QueryKind::TranslatorSearch(&filter).name(), "translator_search");
    }
}
