use crate::domain::{
    common::entities::app_errors::CoreError,
    knowledge_base::entities::{
        AuthorWork, Constituent, ConstituentSummary, Issue, IssueConstituent, IssueInfo, Language,
        Magazine, Translation, Translator, TranslatorDetail,
    },
    query::{
        grouper::{FieldSpec, GroupSpec, GroupedEntity, collect_unique},
        rows::RowRecord,
    },
};

pub const UNKNOWN: &str = "unknown";

/// Translator search rows, one entity per `?translator`.
pub const TRANSLATOR_GROUP: GroupSpec = GroupSpec {
    id_binding: "translator",
    fields: &[
        FieldSpec::single("label", "label"),
        FieldSpec::single("gender", "gender"),
        FieldSpec::single("birth_year", "year_birth"),
        FieldSpec::single("death_year", "year_death"),
        FieldSpec::multi("nationalities", "nationality"),
        FieldSpec::multi("language_areas", "language_area"),
        FieldSpec::multi("genres", "genre"),
        FieldSpec::multi("magazines", "magLabel"),
        FieldSpec::multi("source_languages", "olangLabel"),
        FieldSpec::multi("target_languages", "tlangLabel"),
    ],
};

impl TryFrom<&RowRecord> for Language {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            lang: row.required("lang")?,
            label: row.required("label")?,
            key: row.required("key")?,
        })
    }
}

impl TryFrom<&RowRecord> for Magazine {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            magazine: row.required("magazine")?,
            label: row.required("label")?,
            key: row.required("key")?,
        })
    }
}

impl TryFrom<&RowRecord> for Issue {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            issue: row.required("issue")?,
            id: row.required("issueId")?,
            label: row.required("issueLabel")?,
            number: row.required("number")?,
            volume: row.text("volume"),
            pub_date: row.required("pubDate")?,
        })
    }
}

impl IssueInfo {
    pub fn from_row(id: &str, row: &RowRecord) -> Result<Self, CoreError> {
        Ok(Self {
            id: id.to_string(),
            label: row.required("issueLabel")?,
            magazine: row.required("magazine")?,
            magazine_label: row.required("magLabel")?,
            magazine_id: row.required("magId")?,
            volume: row.text("volume"),
            number: row.required("issueNo")?,
            pub_date: row.required("pubDate")?,
        })
    }
}

impl TryFrom<&RowRecord> for IssueConstituent {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            constituent: row.required("constituent")?,
            title: row.required("title")?,
            language: row.required("langLabel")?,
            original_language: row.required("olangLabel")?,
            translator: row.required("translator")?,
            translator_name: row.required("name")?,
            author: row.required("author")?,
            author_name: row.required("authorName")?,
            genre: row.required("genre")?,
        })
    }
}

impl TryFrom<&RowRecord> for ConstituentSummary {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            constituent: row.required("constituent")?,
            label: row.required("label")?,
            translator: row.required("translator")?,
            translator_name: row.required("name")?,
            language: row.required("langLabel")?,
        })
    }
}

impl Constituent {
    pub fn from_row(id: &str, row: &RowRecord) -> Result<Self, CoreError> {
        Ok(Self {
            id: id.to_string(),
            label: row.required("label")?,
            title: row.required("title")?,
            genre: row.required("genre")?,
            issue: row.required("issue")?,
            issue_id: row.required("issue_id")?,
            issue_label: row.required("issue_label")?,
            pub_date: row.required("pubDate")?,
            translator: row.required("translator")?,
            translator_name: row.required("translatorName")?,
            language: row.required("langLabel")?,
            author: row.required("author")?,
            author_name: row.required("authorName")?,
            original_language: row.required("olangLabel")?,
        })
    }
}

impl TryFrom<&RowRecord> for Translation {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            translation: row.required("translation")?,
            title: row.required("title")?,
            original: row.required("original")?,
            author: row.required("author")?,
            author_name: row.required("author_name")?,
            translator: row.required("translator")?,
            translator_name: row.required("translator_name")?,
            source_language: row.required("olang")?,
            source_language_label: row.required("olangLabel")?,
            target_language: row.required("tlang")?,
            target_language_label: row.required("tlangLabel")?,
            genre: row.required("genre")?,
            issue: row.required("issue")?,
            issue_id: row.required("issue_id")?,
            issue_label: row.required("issue_label")?,
            number: row.required("number")?,
            volume: row.text("volume"),
            pub_date: row.required("pubDate")?,
            magazine: row.required("magazine")?,
            magazine_id: row.required("magazine_id")?,
            magazine_label: row.required("magazine_label")?,
        })
    }
}

impl From<GroupedEntity> for Translator {
    fn from(entity: GroupedEntity) -> Self {
        let single = |field: &str| entity.single(field).map(str::to_string);
        Self {
            label: single("label"),
            gender: single("gender"),
            birth_year: single("birth_year"),
            death_year: single("death_year"),
            nationalities: entity.multi("nationalities"),
            language_areas: entity.multi("language_areas"),
            genres: entity.multi("genres"),
            magazines: entity.multi("magazines"),
            source_languages: entity.multi("source_languages"),
            target_languages: entity.multi("target_languages"),
            id: entity.id.clone(),
        }
    }
}

impl TryFrom<&RowRecord> for AuthorWork {
    type Error = CoreError;

    fn try_from(row: &RowRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            translation: row.required("translation")?,
            title: row.required("title")?,
            translator: row.required("translator")?,
            translator_name: row.required("tname")?,
            source_language: row.required("olanguage")?,
            target_language: row.required("tlanguage")?,
            issue_id: row.required("issueId")?,
            issue_label: row.required("issueLabel")?,
            pub_date: row.required("pubDate")?,
        })
    }
}

fn first_text(rows: &[RowRecord], binding: &str) -> Option<String> {
    rows.iter().find_map(|row| row.text(binding))
}

fn or_unknown(values: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        vec![UNKNOWN.to_string()]
    } else {
        values
    }
}

impl TranslatorDetail {
    /// Merges the info, works and names sub-queries. `info` must not be empty.
    pub fn assemble(
        id: &str,
        info: &[RowRecord],
        works: &[RowRecord],
        names: &[RowRecord],
    ) -> Result<Self, CoreError> {
        let label = first_text(info, "label").ok_or(CoreError::NotFound)?;
        let known = |binding: &str| first_text(info, binding).unwrap_or_else(|| UNKNOWN.to_string());

        Ok(Self {
            id: id.to_string(),
            label,
            birth_year: known("birthDate"),
            death_year: known("deathDate"),
            gender: known("gender"),
            nationalities: or_unknown(collect_unique(info, "nationality")),
            language_areas: or_unknown(collect_unique(info, "language_area")),
            names: collect_unique(names, "name"),
            source_languages: collect_unique(works, "olangLabel"),
            target_languages: collect_unique(works, "tlangLabel"),
            authors: collect_unique(works, "authorLabel"),
            magazines: collect_unique(works, "magLabel"),
            genres: collect_unique(works, "genre"),
        })
    }
}

/// Maps every row, failing on the first malformed one.
pub fn map_rows<T>(rows: &[RowRecord]) -> Result<Vec<T>, CoreError>
where
    T: for<'a> TryFrom<&'a RowRecord, Error = CoreError>,
{
    rows.iter().map(T::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::grouper::group_rows;

    #[test]
    fn test_issue_volume_is_optional() {
        let row = RowRecord::new()
            .with("issue", "http://spacesoftranslation.org/ns/issues/merkur-1")
            .with("issueId", "merkur-1")
            .with("issueLabel", "Merkur 1")
            .with("number", "1")
            .with("pubDate", "1947");
        let issue = Issue::try_from(&row).unwrap();
        assert_eq!(issue.volume, None);
        assert_eq!(issue.pub_date, "1947");
    }

    #[test]
    fn test_missing_required_binding_is_malformed() {
        let row = RowRecord::new().with("lang", "x").with("label", "German");
        assert!(matches!(
            Language::try_from(&row),
            Err(CoreError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_translator_from_grouped_rows() {
        let rows = vec![
            RowRecord::new()
                .with("translator", "person:t1")
                .with("label", "Doe, Jane")
                .with("genre", "poetry")
                .with("magLabel", "Merkur")
                .with("olangLabel", "French"),
            RowRecord::new()
                .with("translator", "person:t1")
                .with("label", "Doe, Jane")
                .with("nationality", "Austrian")
                .with("genre", "prose")
                .with("magLabel", "Merkur")
                .with("olangLabel", "English"),
        ];
        let translators: Vec<Translator> = group_rows(&rows, &TRANSLATOR_GROUP)
            .into_iter()
            .map(Translator::from)
            .collect();

        assert_eq!(translators.len(), 1);
        let translator = &translators[0];
        assert_eq!(translator.label.as_deref(), Some("Doe, Jane"));
        assert_eq!(translator.gender, None);
        assert_eq!(translator.nationalities, vec!["Austrian"]);
        assert_eq!(translator.genres, vec!["poetry", "prose"]);
        assert_eq!(translator.magazines, vec!["Merkur"]);
        assert_eq!(translator.source_languages, vec!["French", "English"]);
    }

    #[test]
    fn test_translator_detail_defaults_to_unknown() {
        let info = vec![RowRecord::new().with("label", "Doe, Jane")];
        let works = vec![
            RowRecord::new()
                .with("authorLabel", "Kafka")
                .with("genre", "prose"),
            RowRecord::new()
                .with("authorLabel", "Kafka")
                .with("genre", "poetry"),
        ];
        let names = vec![RowRecord::new().with("name", "J. Doe")];

        let detail = TranslatorDetail::assemble("t1", &info, &works, &names).unwrap();
        assert_eq!(detail.birth_year, UNKNOWN);
        assert_eq!(detail.gender, UNKNOWN);
        assert_eq!(detail.nationalities, vec![UNKNOWN]);
        assert_eq!(detail.authors, vec!["Kafka"]);
        assert_eq!(detail.genres, vec!["prose", "poetry"]);
        assert_eq!(detail.names, vec!["J. Doe"]);
    }

    #[test]
    fn test_translator_detail_without_info_is_not_found() {
        assert_eq!(
            TranslatorDetail::assemble("t1", &[], &[], &[]),
            Err(CoreError::NotFound)
        );
    }
}
