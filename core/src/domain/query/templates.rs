//! Fixed query templates: vocabulary catalogs and single-entity lookups.

use super::sparql::{
    Clause, Name, Predicate, Prefix, SelectQuery, Term, crm, dcterms, lrm, path, rdfs, spatrem,
    var,
};
use super::terms::{Literal, LocalName};

fn created_by() -> Predicate {
    path([lrm("R16i_was_created_by"), crm("P14_carried_out_by")])
}

fn has_language() -> Predicate {
    path([lrm("R3i_is_realised_by"), crm("P72_has_language")])
}

fn has_title() -> Predicate {
    path([crm("P1_is_identified_by"), lrm("R33_has_string")])
}

/// Vocabulary lists used to populate filter choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogQuery {
    Languages,
    SourceLanguages,
    TargetLanguages,
    PublicationDates,
    BirthYears,
    DeathYears,
    Genres,
    Genders,
    Nationalities,
    LanguageAreas,
    Magazines,
}

impl CatalogQuery {
    pub fn name(self) -> &'static str {
        match self {
            CatalogQuery::Languages => "languages",
            CatalogQuery::SourceLanguages => "source_languages",
            CatalogQuery::TargetLanguages => "target_languages",
            CatalogQuery::PublicationDates => "publication_dates",
            CatalogQuery::BirthYears => "birth_years",
            CatalogQuery::DeathYears => "death_years",
            CatalogQuery::Genres => "genres",
            CatalogQuery::Genders => "genders",
            CatalogQuery::Nationalities => "nationalities",
            CatalogQuery::LanguageAreas => "language_areas",
            CatalogQuery::Magazines => "magazines",
        }
    }

    /// Binding holding the value for single-column catalogs.
    pub fn value_binding(self) -> &'static str {
        match self {
            CatalogQuery::PublicationDates | CatalogQuery::BirthYears | CatalogQuery::DeathYears => {
                "date"
            }
            CatalogQuery::Genres => "genre",
            CatalogQuery::Genders => "gender",
            CatalogQuery::Nationalities => "nationality",
            CatalogQuery::LanguageAreas => "language_area",
            CatalogQuery::Languages | CatalogQuery::SourceLanguages | CatalogQuery::TargetLanguages => {
                "lang"
            }
            CatalogQuery::Magazines => "magazine",
        }
    }

    pub fn compile(self) -> SelectQuery {
        match self {
            CatalogQuery::Languages => {
                let mut query = SelectQuery::select(&["lang", "label", "key"]);
                query
                    .triple(var("lang"), Predicate::Type, crm("E56_Language"))
                    .triple(var("lang"), rdfs("label"), var("label"))
                    .triple(var("lang"), dcterms("identifier"), var("key"));
                query
            }
            CatalogQuery::SourceLanguages => language_side("original", "translation", true),
            CatalogQuery::TargetLanguages => language_side("translation", "original", false),
            CatalogQuery::PublicationDates => {
                let mut query = SelectQuery::select(&["date"]);
                query
                    .triple(var("issuetype"), Predicate::Type, crm("E55_Type"))
                    .triple(var("issuetype"), dcterms("identifier"), Literal::new("issue"))
                    .triple(var("issue"), lrm("P2_has_type"), var("issuetype"))
                    .triple(var("issue"), spatrem("pubDate"), var("date"))
                    .order_by("date");
                query
            }
            CatalogQuery::BirthYears => distinct_values("year_birth", "date"),
            CatalogQuery::DeathYears => distinct_values("year_death", "date"),
            CatalogQuery::Genres => distinct_values("genre", "genre"),
            CatalogQuery::Genders => distinct_values("gender", "gender"),
            CatalogQuery::Nationalities => distinct_values("nationality", "nationality"),
            CatalogQuery::LanguageAreas => distinct_values("language_area", "language_area"),
            CatalogQuery::Magazines => {
                let mut query = SelectQuery::select(&["magazine", "label", "key"]);
                query
                    .triple(var("type"), dcterms("identifier"), Literal::new("journal"))
                    .triple(var("magazine"), Predicate::Type, lrm("F18_Serial_Work"))
                    .triple(var("magazine"), lrm("P2_has_type"), var("type"))
                    .triple(var("magazine"), dcterms("identifier"), var("key"))
                    .triple(var("magazine"), rdfs("label"), var("label"))
                    .order_by("label");
                query
            }
        }
    }
}

/// Languages occurring on one side of a translation relation.
fn language_side(work: &'static str, other: &'static str, source: bool) -> SelectQuery {
    let mut query = SelectQuery::select(&["lang", "label", "key"]);
    let (subject, object) = if source { (work, other) } else { (other, work) };
    query
        .triple(var(subject), lrm("R68_is_inspiration_for"), var(object))
        .triple(var(work), has_language(), var("lang"))
        .triple(var("lang"), rdfs("label"), var("label"))
        .triple(var("lang"), dcterms("identifier"), var("key"))
        .order_by("label");
    query
}

fn distinct_values(predicate: &'static str, binding: &'static str) -> SelectQuery {
    let mut query = SelectQuery::select(&[binding]);
    query
        .triple(var("s"), spatrem(predicate), var(binding))
        .order_by(binding);
    query
}

/// Sub-queries behind the detail and listing endpoints for one named entity.
///
/// Magazine and issue keys are matched as string literals. Person and
/// constituent ids become prefixed names and must already be valid local names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityLookup {
    MagazineInfo(Literal),
    MagazineIssues(Literal),
    IssueInfo(Literal),
    IssueConstituents(Literal),
    ConstituentsOfIssue(Literal),
    Constituent(LocalName),
    TranslatorInfo(LocalName),
    TranslatorWorks(LocalName),
    TranslatorNames(LocalName),
    AuthorInfo(LocalName),
    AuthorWorks(LocalName),
}

impl EntityLookup {
    pub fn name(&self) -> &'static str {
        match self {
            EntityLookup::MagazineInfo(_) => "magazine_info",
            EntityLookup::MagazineIssues(_) => "magazine_issues",
            EntityLookup::IssueInfo(_) => "issue_info",
            EntityLookup::IssueConstituents(_) => "issue_constituents",
            EntityLookup::ConstituentsOfIssue(_) => "constituents_of_issue",
            EntityLookup::Constituent(_) => "constituent",
            EntityLookup::TranslatorInfo(_) => "translator_info",
            EntityLookup::TranslatorWorks(_) => "translator_works",
            EntityLookup::TranslatorNames(_) => "translator_names",
            EntityLookup::AuthorInfo(_) => "author_info",
            EntityLookup::AuthorWorks(_) => "author_works",
        }
    }

    pub fn compile(&self) -> SelectQuery {
        match self {
            EntityLookup::MagazineInfo(key) => {
                let mut query = SelectQuery::select(&["magLabel"]);
                query
                    .triple(var("magazine"), dcterms("identifier"), key.clone())
                    .triple(var("magazine"), rdfs("label"), var("magLabel"));
                query
            }
            EntityLookup::MagazineIssues(key) => {
                let mut query = SelectQuery::select(&[
                    "issue",
                    "issueLabel",
                    "issueId",
                    "number",
                    "volume",
                    "pubDate",
                ]);
                query
                    .triple(var("magazine"), dcterms("identifier"), key.clone())
                    .triple(var("magazine"), lrm("R67_has_part"), var("issue"))
                    .triple(var("issue"), rdfs("label"), var("issueLabel"))
                    .triple(var("issue"), dcterms("identifier"), var("issueId"))
                    .triple(var("issue"), spatrem("number"), var("number"))
                    .triple(var("issue"), spatrem("pubDate"), var("pubDate"))
                    .optional(vec![Clause::triple(
                        var("issue"),
                        spatrem("volume"),
                        var("volume"),
                    )])
                    .order_by("issueId");
                query
            }
            EntityLookup::IssueInfo(key) => {
                let mut query = SelectQuery::select(&[
                    "issueLabel",
                    "magazine",
                    "magLabel",
                    "magId",
                    "volume",
                    "issueNo",
                    "pubDate",
                ]);
                query
                    .triple(var("issue"), dcterms("identifier"), key.clone())
                    .triple(var("issue"), lrm("R67i_is_part_of"), var("magazine"))
                    .triple(var("issue"), rdfs("label"), var("issueLabel"))
                    .triple(var("issue"), spatrem("number"), var("issueNo"))
                    .triple(var("issue"), spatrem("pubDate"), var("pubDate"))
                    .optional(vec![Clause::triple(
                        var("issue"),
                        spatrem("volume"),
                        var("volume"),
                    )])
                    .triple(var("magazine"), rdfs("label"), var("magLabel"))
                    .triple(var("magazine"), dcterms("identifier"), var("magId"));
                query
            }
            EntityLookup::IssueConstituents(key) => {
                let mut query = SelectQuery::select(&[
                    "constituent",
                    "title",
                    "langLabel",
                    "translator",
                    "name",
                    "genre",
                    "author",
                    "authorName",
                    "olangLabel",
                ]);
                query
                    .triple(var("issue"), dcterms("identifier"), key.clone())
                    .triple(var("constituent"), lrm("R67i_is_part_of"), var("issue"))
                    .triple(var("constituent"), created_by(), var("translator"))
                    .triple(var("constituent"), has_title(), var("title"))
                    .triple(var("constituent"), has_language(), var("tlang"))
                    .triple(var("constituent"), lrm("R68_is_inspired_by"), var("original"))
                    .triple(var("constituent"), spatrem("genre"), var("genre"))
                    .triple(var("original"), created_by(), var("author"))
                    .triple(var("original"), has_language(), var("olang"))
                    .triple(var("author"), rdfs("label"), var("authorName"))
                    .triple(var("tlang"), rdfs("label"), var("langLabel"))
                    .triple(var("olang"), rdfs("label"), var("olangLabel"))
                    .triple(var("translator"), rdfs("label"), var("name"))
                    .order_by("title");
                query
            }
            EntityLookup::ConstituentsOfIssue(key) => {
                let mut query = SelectQuery::select(&[
                    "constituent",
                    "label",
                    "translator",
                    "name",
                    "langLabel",
                ]);
                query
                    .triple(var("issue"), dcterms("identifier"), key.clone())
                    .triple(var("issue"), lrm("R67_has_part"), var("constituent"))
                    .triple(var("constituent"), rdfs("label"), var("label"))
                    .triple(var("constituent"), created_by(), var("translator"))
                    .triple(var("constituent"), has_language(), var("tlang"))
                    .triple(var("tlang"), rdfs("label"), var("langLabel"))
                    .triple(var("translator"), rdfs("label"), var("name"))
                    .order_by("label");
                query
            }
            EntityLookup::Constituent(id) => {
                let work = Term::from(Name::entity(Prefix::Spatrem, id));
                let mut query = SelectQuery::select(&[
                    "label",
                    "title",
                    "genre",
                    "issue",
                    "issue_id",
                    "issue_label",
                    "pubDate",
                    "translator",
                    "translatorName",
                    "langLabel",
                    "author",
                    "authorName",
                    "olangLabel",
                ]);
                query
                    .triple(work.clone(), rdfs("label"), var("label"))
                    .triple(work.clone(), lrm("R67i_is_part_of"), var("issue"))
                    .triple(work.clone(), lrm("R68_is_inspired_by"), var("original"))
                    .triple(work.clone(), spatrem("genre"), var("genre"))
                    .triple(work.clone(), created_by(), var("translator"))
                    .triple(work.clone(), has_title(), var("title"))
                    .triple(work, has_language(), var("tlang"))
                    .triple(var("tlang"), rdfs("label"), var("langLabel"))
                    .triple(var("original"), created_by(), var("author"))
                    .triple(var("original"), has_language(), var("olang"))
                    .triple(var("author"), rdfs("label"), var("authorName"))
                    .triple(var("translator"), rdfs("label"), var("translatorName"))
                    .triple(var("olang"), rdfs("label"), var("olangLabel"))
                    .triple(var("issue"), rdfs("label"), var("issue_label"))
                    .triple(var("issue"), dcterms("identifier"), var("issue_id"))
                    .triple(var("issue"), spatrem("pubDate"), var("pubDate"));
                query
            }
            EntityLookup::TranslatorInfo(id) => {
                let person = Term::from(Name::entity(Prefix::Person, id));
                let mut query = SelectQuery::select(&[
                    "label",
                    "birthDate",
                    "deathDate",
                    "gender",
                    "nationality",
                    "language_area",
                ]);
                query.triple(person.clone(), rdfs("label"), var("label"));
                for (predicate, binding) in [
                    ("year_birth", "birthDate"),
                    ("year_death", "deathDate"),
                    ("gender", "gender"),
                    ("nationality", "nationality"),
                    ("language_area", "language_area"),
                ] {
                    query.optional(vec![Clause::triple(
                        person.clone(),
                        spatrem(predicate),
                        var(binding),
                    )]);
                }
                query.order_by("label");
                query
            }
            EntityLookup::TranslatorWorks(id) => {
                let person = Term::from(Name::entity(Prefix::Person, id));
                let mut query = SelectQuery::select(&[
                    "authorLabel",
                    "olangLabel",
                    "tlangLabel",
                    "magLabel",
                    "genre",
                ]);
                query
                    .triple(var("translation"), created_by(), person)
                    .triple(var("translation"), has_title(), var("title"))
                    .triple(var("translation"), has_language(), var("tlang"))
                    .triple(
                        var("translation"),
                        path([lrm("R67i_is_part_of"), lrm("R67i_is_part_of")]),
                        var("magazine"),
                    )
                    .triple(var("translation"), spatrem("genre"), var("genre"))
                    .triple(var("original"), lrm("R68_is_inspiration_for"), var("translation"))
                    .triple(var("original"), created_by(), var("author"))
                    .triple(var("original"), has_language(), var("olang"))
                    .triple(var("tlang"), rdfs("label"), var("tlangLabel"))
                    .triple(var("author"), rdfs("label"), var("authorLabel"))
                    .triple(var("olang"), rdfs("label"), var("olangLabel"))
                    .triple(var("magazine"), rdfs("label"), var("magLabel"));
                query
            }
            EntityLookup::TranslatorNames(id) => {
                let person = Term::from(Name::entity(Prefix::Person, id));
                let mut query = SelectQuery::select(&["name"]);
                query
                    .triple(person, has_title(), var("name"))
                    .order_by("name");
                query
            }
            EntityLookup::AuthorInfo(id) => {
                let person = Term::from(Name::entity(Prefix::Person, id));
                let mut query = SelectQuery::select(&["name"]);
                query.triple(person, rdfs("label"), var("name"));
                query
            }
            EntityLookup::AuthorWorks(id) => {
                let person = Term::from(Name::entity(Prefix::Person, id));
                let mut query = SelectQuery::select(&[
                    "translation",
                    "title",
                    "translator",
                    "tname",
                    "olanguage",
                    "tlanguage",
                    "issueId",
                    "issueLabel",
                    "pubDate",
                ]);
                query
                    .triple(var("original"), created_by(), person)
                    .triple(var("original"), has_language(), var("olang"))
                    .triple(var("translation"), lrm("R68_is_inspired_by"), var("original"))
                    .triple(var("translation"), created_by(), var("translator"))
                    .triple(var("translation"), rdfs("label"), var("title"))
                    .triple(var("translation"), has_language(), var("tlang"))
                    .triple(var("translation"), lrm("R67i_is_part_of"), var("issue"))
                    .triple(var("tlang"), rdfs("label"), var("tlanguage"))
                    .triple(var("translator"), rdfs("label"), var("tname"))
                    .triple(var("olang"), rdfs("label"), var("olanguage"))
                    .triple(var("issue"), rdfs("label"), var("issueLabel"))
                    .triple(var("issue"), dcterms("identifier"), var("issueId"))
                    .triple(var("issue"), spatrem("pubDate"), var("pubDate"))
                    .order_by("pubDate");
                query
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_queries_are_well_formed() {
        let all = [
            CatalogQuery::Languages,
            CatalogQuery::SourceLanguages,
            CatalogQuery::TargetLanguages,
            CatalogQuery::PublicationDates,
            CatalogQuery::BirthYears,
            CatalogQuery::DeathYears,
            CatalogQuery::Genres,
            CatalogQuery::Genders,
            CatalogQuery::Nationalities,
            CatalogQuery::LanguageAreas,
            CatalogQuery::Magazines,
        ];
        for catalog in all {
            let query = catalog.compile();
            assert_eq!(query.first_unbound_use(), None, "{}", catalog.name());
            assert!(query.render().contains(&format!("?{}", catalog.value_binding())));
        }
    }

    #[test]
    fn test_source_and_target_languages_pick_opposite_sides() {
        let source = CatalogQuery::SourceLanguages.compile().render();
        assert!(source.contains("?original lrm:R68_is_inspiration_for ?translation ."));
        assert!(source.contains(
            "?original lrm:R3i_is_realised_by / crm:P72_has_language ?lang ."
        ));

        let target = CatalogQuery::TargetLanguages.compile().render();
        assert!(target.contains("?original lrm:R68_is_inspiration_for ?translation ."));
        assert!(target.contains(
            "?translation lrm:R3i_is_realised_by / crm:P72_has_language ?lang ."
        ));
    }

    #[test]
    fn test_keys_are_escaped_literals() {
        let lookup = EntityLookup::MagazineInfo(Literal::new("merkur\" } DROP ALL {"));
        let text = lookup.compile().render();
        assert!(text.contains("?magazine dcterms:identifier \"merkur\\\" } DROP ALL {\" ."));
    }

    #[test]
    fn test_person_lookups_use_prefixed_names() {
        let id = LocalName::parse("p_42").unwrap();
        let info = EntityLookup::TranslatorInfo(id.clone()).compile().render();
        assert!(info.contains("person:p_42 rdfs:label ?label ."));
        assert!(info.contains("OPTIONAL {\n        person:p_42 spatrem:year_birth ?birthDate ."));

        let works = EntityLookup::TranslatorWorks(id).compile().render();
        assert!(works.contains(
            "?translation lrm:R16i_was_created_by / crm:P14_carried_out_by person:p_42 ."
        ));
        assert!(!works.contains("persLabel"));
    }

    #[test]
    fn test_constituent_lookup_uses_spatrem_name() {
        let id = LocalName::parse("c_7").unwrap();
        let text = EntityLookup::Constituent(id).compile().render();
        assert!(text.contains("spatrem:c_7 rdfs:label ?label ."));
    }
}
