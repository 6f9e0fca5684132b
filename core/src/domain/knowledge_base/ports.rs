use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    knowledge_base::{
        entities::{
            AuthorDetail, Constituent, ConstituentSummary, Issue, IssueDetail, Language, Magazine,
            MagazineDetail, Translation, Translator, TranslatorDetail,
        },
        value_objects::{Page, QueryResult},
    },
    query::{
        filters::{Pagination, TranslationFilter, TranslatorFilter},
        rows::RowRecord,
    },
};

/// Runs one compiled query against the knowledge base endpoint.
pub trait QueryExecutor: Send + Sync {
    fn execute(&self, query: &str) -> impl Future<Output = Result<Vec<RowRecord>, CoreError>> + Send;
}

pub trait KnowledgeBaseService: Send + Sync {
    fn languages(&self) -> impl Future<Output = Result<QueryResult<Language>, CoreError>> + Send;

    fn source_languages(
        &self,
    ) -> impl Future<Output = Result<QueryResult<Language>, CoreError>> + Send;

    fn target_languages(
        &self,
    ) -> impl Future<Output = Result<QueryResult<Language>, CoreError>> + Send;

    fn publication_dates(
        &self,
    ) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn birth_years(&self) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn death_years(&self) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn genres(&self) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn genders(&self) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn nationalities(&self)
    -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn language_areas(
        &self,
    ) -> impl Future<Output = Result<QueryResult<String>, CoreError>> + Send;

    fn magazines(&self) -> impl Future<Output = Result<QueryResult<Magazine>, CoreError>> + Send;

    fn magazine(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<MagazineDetail, CoreError>> + Send;

    fn issues(
        &self,
        magazine_key: &str,
    ) -> impl Future<Output = Result<QueryResult<Issue>, CoreError>> + Send;

    fn issue(&self, key: &str) -> impl Future<Output = Result<IssueDetail, CoreError>> + Send;

    fn constituents(
        &self,
        issue_key: &str,
    ) -> impl Future<Output = Result<QueryResult<ConstituentSummary>, CoreError>> + Send;

    fn constituent(&self, id: &str)
    -> impl Future<Output = Result<Constituent, CoreError>> + Send;

    fn search_translations(
        &self,
        filter: TranslationFilter,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Page<Translation>, CoreError>> + Send;

    fn count_translations(
        &self,
        filter: TranslationFilter,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;

    fn search_translators(
        &self,
        filter: TranslatorFilter,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Page<Translator>, CoreError>> + Send;

    fn translator(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<TranslatorDetail, CoreError>> + Send;

    fn author(&self, id: &str) -> impl Future<Output = Result<AuthorDetail, CoreError>> + Send;
}
