use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Language {
    pub lang: String,
    pub label: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Magazine {
    pub magazine: String,
    pub label: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MagazineInfo {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    pub issue: String,
    pub id: String,
    pub label: String,
    pub number: String,
    pub volume: Option<String>,
    pub pub_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MagazineDetail {
    pub info: MagazineInfo,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueInfo {
    pub id: String,
    pub label: String,
    pub magazine: String,
    pub magazine_label: String,
    pub magazine_id: String,
    pub volume: Option<String>,
    pub number: String,
    pub pub_date: String,
}

/// A translated work as listed inside an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueConstituent {
    pub constituent: String,
    pub title: String,
    pub language: String,
    pub original_language: String,
    pub translator: String,
    pub translator_name: String,
    pub author: String,
    pub author_name: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueDetail {
    pub info: IssueInfo,
    pub constituents: Vec<IssueConstituent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConstituentSummary {
    pub constituent: String,
    pub label: String,
    pub translator: String,
    pub translator_name: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Constituent {
    pub id: String,
    pub label: String,
    pub title: String,
    pub genre: String,
    pub issue: String,
    pub issue_id: String,
    pub issue_label: String,
    pub pub_date: String,
    pub translator: String,
    pub translator_name: String,
    pub language: String,
    pub author: String,
    pub author_name: String,
    pub original_language: String,
}

/// One row of a translation search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Translation {
    pub translation: String,
    pub title: String,
    pub original: String,
    pub author: String,
    pub author_name: String,
    pub translator: String,
    pub translator_name: String,
    pub source_language: String,
    pub source_language_label: String,
    pub target_language: String,
    pub target_language_label: String,
    pub genre: String,
    pub issue: String,
    pub issue_id: String,
    pub issue_label: String,
    pub number: String,
    pub volume: Option<String>,
    pub pub_date: String,
    pub magazine: String,
    pub magazine_id: String,
    pub magazine_label: String,
}

/// A translator aggregated over all matching translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Translator {
    pub id: String,
    pub label: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub death_year: Option<String>,
    pub nationalities: Vec<String>,
    pub language_areas: Vec<String>,
    pub genres: Vec<String>,
    pub magazines: Vec<String>,
    pub source_languages: Vec<String>,
    pub target_languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslatorDetail {
    pub id: String,
    pub label: String,
    pub birth_year: String,
    pub death_year: String,
    pub gender: String,
    pub nationalities: Vec<String>,
    pub language_areas: Vec<String>,
    pub names: Vec<String>,
    pub source_languages: Vec<String>,
    pub target_languages: Vec<String>,
    pub authors: Vec<String>,
    pub magazines: Vec<String>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorWork {
    pub translation: String,
    pub title: String,
    pub translator: String,
    pub translator_name: String,
    pub source_language: String,
    pub target_language: String,
    pub issue_id: String,
    pub issue_label: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDetail {
    pub id: String,
    pub name: String,
    pub works: Vec<AuthorWork>,
}
