use std::time::Instant;

use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    knowledge_base::{
        entities::{
            AuthorDetail, Constituent, ConstituentSummary, Issue, IssueDetail, IssueInfo,
            Language, Magazine, MagazineDetail, MagazineInfo, Translation, Translator,
            TranslatorDetail,
        },
        mappers::{TRANSLATOR_GROUP, map_rows},
        ports::{KnowledgeBaseService, QueryExecutor},
        value_objects::{Page, QueryResult},
    },
    query::{
        compiler::{QueryKind, compile},
        filters::{Pagination, TranslationFilter, TranslatorFilter},
        grouper::group_rows,
        rows::RowRecord,
        templates::{CatalogQuery, EntityLookup},
        terms::{Literal, LocalName},
    },
};

impl<Q> Service<Q>
where
    Q: QueryExecutor,
{
    async fn run(&self, kind: QueryKind<'_>) -> Result<Vec<RowRecord>, CoreError> {
        let query = compile(kind).render();
        let started = Instant::now();
        let rows = self.executor.execute(&query).await?;
        debug!(
            kind = kind.name(),
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query completed"
        );
        Ok(rows)
    }

    async fn lookup(&self, lookup: &EntityLookup) -> Result<Vec<RowRecord>, CoreError> {
        self.run(QueryKind::EntityLookup(lookup)).await
    }

    async fn catalog<T>(&self, catalog: CatalogQuery) -> Result<QueryResult<T>, CoreError>
    where
        T: for<'a> TryFrom<&'a RowRecord, Error = CoreError>,
    {
        let rows = self.run(QueryKind::Catalog(catalog)).await?;
        Ok(QueryResult::new(map_rows(&rows)?))
    }

    async fn catalog_values(&self, catalog: CatalogQuery) -> Result<QueryResult<String>, CoreError> {
        let rows = self.run(QueryKind::Catalog(catalog)).await?;
        let values = rows
            .iter()
            .filter_map(|row| row.text(catalog.value_binding()))
            .collect();
        Ok(QueryResult::new(values))
    }
}

/// Person and constituent ids end up as prefixed names; anything that is not
/// a valid local name cannot exist in the store.
fn local_name(id: &str) -> Result<LocalName, CoreError> {
    LocalName::parse(id).ok_or_else(|| {
        debug!(id, "rejecting identifier that is not a valid local name");
        CoreError::NotFound
    })
}

impl<Q> KnowledgeBaseService for Service<Q>
where
    Q: QueryExecutor,
{
    async fn languages(&self) -> Result<QueryResult<Language>, CoreError> {
        self.catalog(CatalogQuery::Languages).await
    }

    async fn source_languages(&self) -> Result<QueryResult<Language>, CoreError> {
        self.catalog(CatalogQuery::SourceLanguages).await
    }

    async fn target_languages(&self) -> Result<QueryResult<Language>, CoreError> {
        self.catalog(CatalogQuery::TargetLanguages).await
    }

    async fn publication_dates(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::PublicationDates).await
    }

    async fn birth_years(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::BirthYears).await
    }

    async fn death_years(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::DeathYears).await
    }

    async fn genres(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::Genres).await
    }

    async fn genders(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::Genders).await
    }

    async fn nationalities(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::Nationalities).await
    }

    async fn language_areas(&self) -> Result<QueryResult<String>, CoreError> {
        self.catalog_values(CatalogQuery::LanguageAreas).await
    }

    async fn magazines(&self) -> Result<QueryResult<Magazine>, CoreError> {
        self.catalog(CatalogQuery::Magazines).await
    }

    #[instrument(skip(self))]
    async fn magazine(&self, key: &str) -> Result<MagazineDetail, CoreError> {
        let info_query = EntityLookup::MagazineInfo(Literal::new(key));
        let issues_query = EntityLookup::MagazineIssues(Literal::new(key));

        let (info, issues) =
            tokio::try_join!(self.lookup(&info_query), self.lookup(&issues_query))?;

        let title = info
            .first()
            .ok_or(CoreError::NotFound)?
            .required("magLabel")?;

        Ok(MagazineDetail {
            info: MagazineInfo {
                id: key.to_string(),
                title,
            },
            issues: map_rows(&issues)?,
        })
    }

    #[instrument(skip(self))]
    async fn issues(&self, magazine_key: &str) -> Result<QueryResult<Issue>, CoreError> {
        let rows = self
            .lookup(&EntityLookup::MagazineIssues(Literal::new(magazine_key)))
            .await?;
        Ok(QueryResult::new(map_rows(&rows)?))
    }

    #[instrument(skip(self))]
    async fn issue(&self, key: &str) -> Result<IssueDetail, CoreError> {
        let info_query = EntityLookup::IssueInfo(Literal::new(key));
        let constituents_query = EntityLookup::IssueConstituents(Literal::new(key));

        let (info, constituents) = tokio::try_join!(
            self.lookup(&info_query),
            self.lookup(&constituents_query)
        )?;

        let info = info.first().ok_or(CoreError::NotFound)?;

        Ok(IssueDetail {
            info: IssueInfo::from_row(key, info)?,
            constituents: map_rows(&constituents)?,
        })
    }

    #[instrument(skip(self))]
    async fn constituents(
        &self,
        issue_key: &str,
    ) -> Result<QueryResult<ConstituentSummary>, CoreError> {
        let rows = self
            .lookup(&EntityLookup::ConstituentsOfIssue(Literal::new(issue_key)))
            .await?;
        Ok(QueryResult::new(map_rows(&rows)?))
    }

    #[instrument(skip(self))]
    async fn constituent(&self, id: &str) -> Result<Constituent, CoreError> {
        let name = local_name(id)?;
        let rows = self.lookup(&EntityLookup::Constituent(name)).await?;
        let row = rows.first().ok_or(CoreError::NotFound)?;
        Constituent::from_row(id, row)
    }

    #[instrument(skip(self, filter))]
    async fn search_translations(
        &self,
        filter: TranslationFilter,
        pagination: Pagination,
    ) -> Result<Page<Translation>, CoreError> {
        let rows = self
            .run(QueryKind::TranslationSearch {
                filter: &filter,
                pagination,
            })
            .await?;
        let page = Page::new(map_rows(&rows)?, pagination);

        info!(
            count = page.count,
            page = page.current_page,
            "translation search completed"
        );
        Ok(page)
    }

    #[instrument(skip(self, filter))]
    async fn count_translations(&self, filter: TranslationFilter) -> Result<usize, CoreError> {
        let rows = self
            .run(QueryKind::TranslationSearch {
                filter: &filter,
                pagination: Pagination::unbounded(),
            })
            .await?;
        Ok(rows.len())
    }

    #[instrument(skip(self, filter))]
    async fn search_translators(
        &self,
        filter: TranslatorFilter,
        pagination: Pagination,
    ) -> Result<Page<Translator>, CoreError> {
        let rows = self.run(QueryKind::TranslatorSearch(&filter)).await?;
        let translators: Vec<Translator> = group_rows(&rows, &TRANSLATOR_GROUP)
            .into_iter()
            .map(Translator::from)
            .collect();

        info!(
            rows = rows.len(),
            translators = translators.len(),
            "translator search completed"
        );
        Ok(Page::slice(translators, pagination))
    }

    #[instrument(skip(self))]
    async fn translator(&self, id: &str) -> Result<TranslatorDetail, CoreError> {
        let name = local_name(id)?;
        let info_query = EntityLookup::TranslatorInfo(name.clone());
        let works_query = EntityLookup::TranslatorWorks(name.clone());
        let names_query = EntityLookup::TranslatorNames(name);

        let (info, works, names) = tokio::try_join!(
            self.lookup(&info_query),
            self.lookup(&works_query),
            self.lookup(&names_query)
        )?;

        TranslatorDetail::assemble(id, &info, &works, &names)
    }

    #[instrument(skip(self))]
    async fn author(&self, id: &str) -> Result<AuthorDetail, CoreError> {
        let name = local_name(id)?;
        let info_query = EntityLookup::AuthorInfo(name.clone());
        let works_query = EntityLookup::AuthorWorks(name);

        let (info, works) =
            tokio::try_join!(self.lookup(&info_query), self.lookup(&works_query))?;

        let name = info
            .first()
            .ok_or(CoreError::NotFound)?
            .required("name")?;

        Ok(AuthorDetail {
            id: id.to_string(),
            name,
            works: map_rows(&works)?,
        })
    }
}
