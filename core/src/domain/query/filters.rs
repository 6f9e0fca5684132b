use std::str::FromStr;

use tracing::warn;

use super::terms::{AttributeValue, Iri};

/// Sentinel accepted from forms and query strings meaning "no constraint".
pub const ANY: &str = "any";

/// Raw, untrusted filter input as it arrives from a form or query string.
/// Every field is optional; `"any"` and blank values mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct RawFilter {
    pub sl: Option<String>,
    pub tl: Option<String>,
    pub genre: Option<String>,
    pub magazine: Option<String>,
    pub after_date: Option<String>,
    pub before_date: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub language_area: Option<String>,
    pub year_birth: Option<String>,
    pub year_death: Option<String>,
    pub sortby: Option<String>,
}

fn constrained(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ANY))
}

fn parse_iri(field: &'static str, value: &Option<String>) -> Option<Iri> {
    let raw = constrained(value)?;
    let iri = Iri::parse(raw);
    if iri.is_none() {
        warn!(field, value = raw, "ignoring filter: not a valid IRI");
    }
    iri
}

fn parse_attribute(field: &'static str, value: &Option<String>) -> Option<AttributeValue> {
    let raw = constrained(value)?;
    let attribute = AttributeValue::parse(raw);
    if attribute.is_none() {
        warn!(field, value = raw, "ignoring filter: value outside allowed characters");
    }
    attribute
}

fn parse_year(field: &'static str, value: &Option<String>) -> Option<i64> {
    let raw = constrained(value)?;
    match raw.parse::<i64>() {
        Ok(year) => Some(year),
        Err(_) => {
            warn!(field, value = raw, "ignoring filter: not an integer year");
            None
        }
    }
}

fn parse_sort<K: FromStr>(value: &Option<String>) -> Option<K> {
    let raw = value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
    let key = raw.parse::<K>().ok();
    if key.is_none() {
        warn!(value = raw, "ignoring unknown sort key");
    }
    key
}

/// Work-level constraints shared by translation and translator search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkFilter {
    pub source_language: Option<Iri>,
    pub target_language: Option<Iri>,
    pub genre: Option<AttributeValue>,
    pub magazine: Option<Iri>,
    pub after_date: Option<i64>,
    pub before_date: Option<i64>,
}

impl WorkFilter {
    pub fn from_raw(raw: &RawFilter) -> Self {
        Self {
            source_language: parse_iri("sl", &raw.sl),
            target_language: parse_iri("tl", &raw.tl),
            genre: parse_attribute("genre", &raw.genre),
            magazine: parse_iri("magazine", &raw.magazine),
            after_date: parse_year("after_date", &raw.after_date),
            before_date: parse_year("before_date", &raw.before_date),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Closed set of sortable columns for a query kind. Only the variable names
/// returned here can reach an `ORDER BY`.
pub trait SortKey: Copy {
    fn variable(self) -> &'static str;
}

fn normalize_sort(value: &str) -> String {
    value.trim().trim_start_matches('?').to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationSortKey {
    Title,
    Author,
    Translator,
    PublicationDate,
    Magazine,
    Issue,
    SourceLanguage,
    TargetLanguage,
    Genre,
}

impl SortKey for TranslationSortKey {
    fn variable(self) -> &'static str {
        match self {
            TranslationSortKey::Title => "title",
            TranslationSortKey::Author => "author_name",
            TranslationSortKey::Translator => "translator_name",
            TranslationSortKey::PublicationDate => "pubDate",
            TranslationSortKey::Magazine => "magazine_label",
            TranslationSortKey::Issue => "issue_label",
            TranslationSortKey::SourceLanguage => "olangLabel",
            TranslationSortKey::TargetLanguage => "tlangLabel",
            TranslationSortKey::Genre => "genre",
        }
    }
}

impl FromStr for TranslationSortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_sort(s).as_str() {
            "title" => Ok(TranslationSortKey::Title),
            "author" | "author_name" => Ok(TranslationSortKey::Author),
            "translator" | "translator_name" => Ok(TranslationSortKey::Translator),
            "date" | "pubdate" | "pub_date" => Ok(TranslationSortKey::PublicationDate),
            "magazine" | "magazine_label" => Ok(TranslationSortKey::Magazine),
            "issue" | "issue_label" => Ok(TranslationSortKey::Issue),
            "sl" | "olanglabel" | "source_language" => Ok(TranslationSortKey::SourceLanguage),
            "tl" | "tlanglabel" | "target_language" => Ok(TranslationSortKey::TargetLanguage),
            "genre" => Ok(TranslationSortKey::Genre),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorSortKey {
    Name,
    Gender,
    Nationality,
    LanguageArea,
    BirthYear,
    DeathYear,
    Magazine,
}

impl SortKey for TranslatorSortKey {
    fn variable(self) -> &'static str {
        match self {
            TranslatorSortKey::Name => "label",
            TranslatorSortKey::Gender => "gender",
            TranslatorSortKey::Nationality => "nationality",
            TranslatorSortKey::LanguageArea => "language_area",
            TranslatorSortKey::BirthYear => "year_birth",
            TranslatorSortKey::DeathYear => "year_death",
            TranslatorSortKey::Magazine => "magLabel",
        }
    }
}

impl FromStr for TranslatorSortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_sort(s).as_str() {
            "name" | "label" => Ok(TranslatorSortKey::Name),
            "gender" => Ok(TranslatorSortKey::Gender),
            "nationality" => Ok(TranslatorSortKey::Nationality),
            "language_area" => Ok(TranslatorSortKey::LanguageArea),
            "birth" | "year_birth" | "birth_year" => Ok(TranslatorSortKey::BirthYear),
            "death" | "year_death" | "death_year" => Ok(TranslatorSortKey::DeathYear),
            "magazine" | "maglabel" => Ok(TranslatorSortKey::Magazine),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationFilter {
    pub work: WorkFilter,
    pub sort: Option<TranslationSortKey>,
}

impl TranslationFilter {
    pub fn from_raw(raw: &RawFilter) -> Self {
        Self {
            work: WorkFilter::from_raw(raw),
            sort: parse_sort(&raw.sortby),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorFilter {
    pub work: WorkFilter,
    pub gender: Option<AttributeValue>,
    pub nationality: Option<AttributeValue>,
    pub language_area: Option<AttributeValue>,
    pub born_after: Option<i64>,
    pub died_before: Option<i64>,
    pub sort: Option<TranslatorSortKey>,
}

impl TranslatorFilter {
    pub fn from_raw(raw: &RawFilter) -> Self {
        Self {
            work: WorkFilter::from_raw(raw),
            gender: parse_attribute("gender", &raw.gender),
            nationality: parse_attribute("nationality", &raw.nationality),
            language_area: parse_attribute("language_area", &raw.language_area),
            born_after: parse_year("year_birth", &raw.year_birth),
            died_before: parse_year("year_death", &raw.year_death),
            sort: parse_sort(&raw.sortby),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 1-based page window. A page size of zero means "fetch everything".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Clamps `page` to at least 1. A negative size falls back to the default.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        let page_size = if page_size < 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(u32::MAX as i64) as u32
        };
        Self { page, page_size }
    }

    pub fn unbounded() -> Self {
        Self {
            page: 1,
            page_size: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn is_unbounded(&self) -> bool {
        self.page_size == 0
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }

    pub fn limit(&self) -> u64 {
        self.page_size as u64
    }

    /// A next page is offered when the page came back full; the store is not
    /// asked for a total count.
    pub fn next_page(&self, returned: usize) -> Option<u32> {
        if self.is_unbounded() || returned != self.page_size as usize {
            return None;
        }
        self.page.checked_add(1)
    }

    pub fn prev_page(&self) -> Option<u32> {
        if self.is_unbounded() || self.page <= 1 {
            None
        } else {
            Some(self.page - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(f: impl FnOnce(&mut RawFilter)) -> RawFilter {
        let mut raw = RawFilter::default();
        f(&mut raw);
        raw
    }

    #[test]
    fn test_any_and_blank_are_unconstrained() {
        let raw = raw(|r| {
            r.sl = Some("any".to_string());
            r.tl = Some("ANY".to_string());
            r.genre = Some("  ".to_string());
            r.after_date = Some("any".to_string());
        });
        assert!(WorkFilter::from_raw(&raw).is_unconstrained());
    }

    #[test]
    fn test_malformed_values_are_ignored() {
        let raw = raw(|r| {
            r.sl = Some("not an iri".to_string());
            r.after_date = Some("19x5".to_string());
            r.genre = Some("poetry\" } ".to_string());
        });
        let filter = WorkFilter::from_raw(&raw);
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn test_valid_values_are_kept() {
        let raw = raw(|r| {
            r.sl = Some("http://spacesoftranslation.org/ns/languages/fr".to_string());
            r.genre = Some("poetry".to_string());
            r.after_date = Some("1950".to_string());
            r.before_date = Some(" 1960 ".to_string());
        });
        let filter = WorkFilter::from_raw(&raw);
        assert_eq!(
            filter.source_language.unwrap().as_str(),
            "http://spacesoftranslation.org/ns/languages/fr"
        );
        assert_eq!(filter.genre.unwrap().as_str(), "poetry");
        assert_eq!(filter.after_date, Some(1950));
        assert_eq!(filter.before_date, Some(1960));
    }

    #[test]
    fn test_sort_key_allow_list() {
        assert_eq!(
            "?title".parse::<TranslationSortKey>(),
            Ok(TranslationSortKey::Title)
        );
        assert_eq!(
            "pubDate".parse::<TranslationSortKey>(),
            Ok(TranslationSortKey::PublicationDate)
        );
        assert!("?title; DROP".parse::<TranslationSortKey>().is_err());
        assert_eq!(
            "year_birth".parse::<TranslatorSortKey>(),
            Ok(TranslatorSortKey::BirthYear)
        );

        let filter = TranslationFilter::from_raw(&raw(|r| {
            r.sortby = Some("?x } DELETE WHERE { ?s ?p ?o".to_string())
        }));
        assert_eq!(filter.sort, None);
    }

    #[test]
    fn test_pagination_offsets() {
        let first = Pagination::new(1, 10);
        assert_eq!((first.offset(), first.limit()), (0, 10));

        let third = Pagination::new(3, 10);
        assert_eq!((third.offset(), third.limit()), (20, 10));

        assert_eq!(Pagination::new(0, 10).offset(), 0);
        assert_eq!(Pagination::new(-5, 10).offset(), 0);
        assert_eq!(Pagination::new(-5, 10).page(), 1);
    }

    #[test]
    fn test_negative_page_size_falls_back_to_default() {
        assert_eq!(Pagination::new(1, -3).page_size(), DEFAULT_PAGE_SIZE);
        assert!(Pagination::new(1, 0).is_unbounded());
    }

    #[test]
    fn test_page_markers() {
        let page = Pagination::new(2, 10);
        assert_eq!(page.next_page(10), Some(3));
        assert_eq!(page.next_page(9), None);
        assert_eq!(page.prev_page(), Some(1));

        let first = Pagination::new(1, 10);
        assert_eq!(first.prev_page(), None);

        let all = Pagination::unbounded();
        assert_eq!(all.next_page(0), None);
        assert_eq!(all.prev_page(), None);
    }
}
