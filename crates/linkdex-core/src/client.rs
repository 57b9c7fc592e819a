use std::time::Instant;

use serde::Serialize;

use crate::catalog::{EntityTables, aggregate, author_ids, keyword_ids, natural_sort_by_key};
use crate::config::AppConfig;
use crate::error::{QueryError, Result};
use crate::index::{SearchIndex, keywords_spec, links_spec, people_spec};
use crate::log::RequestLog;
use crate::models::{
    CollectionKind, KeywordRecord, LinkRecord, MissingReferences, PersonRecord, SearchHit,
    SkippedDocument, WithQuantity,
};
use crate::state::{ColorMode, GridSizing, Layout, Model, Route};

/// The derived, immutable catalog: sorted collections, missing references and
/// one search index per collection.
#[derive(Debug)]
pub struct Catalog {
    links: Vec<LinkRecord>,
    people: Vec<WithQuantity<PersonRecord>>,
    keywords: Vec<WithQuantity<KeywordRecord>>,
    missing: MissingReferences,
    links_index: SearchIndex<LinkRecord>,
    people_index: SearchIndex<WithQuantity<PersonRecord>>,
    keywords_index: SearchIndex<WithQuantity<KeywordRecord>>,
    log: RequestLog,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "collection", content = "items", rename_all = "snake_case")]
pub enum Visible<'a> {
    Links(Vec<&'a LinkRecord>),
    People(Vec<&'a WithQuantity<PersonRecord>>),
    Keywords(Vec<&'a WithQuantity<KeywordRecord>>),
}

impl<'a> Visible<'a> {
    pub fn len(&self) -> usize {
        match self {
            Self::Links(items) => items.len(),
            Self::People(items) => items.len(),
            Self::Keywords(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Vec<&'a str> {
        match self {
            Self::Links(items) => items.iter().map(|link| link.name.as_str()).collect(),
            Self::People(items) => items.iter().map(|p| p.lookup.name.as_str()).collect(),
            Self::Keywords(items) => items.iter().map(|k| k.lookup.name.as_str()).collect(),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub route: Route,
    pub filter: &'a str,
    pub visible: Visible<'a>,
    pub missing: &'a MissingReferences,
    pub layout: Layout,
    pub color: ColorMode,
    pub grid: GridSizing,
    pub at_top: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary<'a> {
    pub links: usize,
    pub people: usize,
    pub keywords: usize,
    pub missing: &'a MissingReferences,
    pub skipped: Vec<(CollectionKind, &'a SkippedDocument)>,
}

impl Catalog {
    pub fn build(tables: EntityTables, config: &AppConfig) -> Result<Self> {
        let log = match &config.log.request_log_path {
            Some(path) => RequestLog::to_path(path),
            None => RequestLog::disabled(),
        };
        let started = Instant::now();
        match Self::derive(tables, config) {
            Ok(parts) => {
                let catalog = parts.with_log(log);
                catalog.log.log_status(
                    "catalog.build",
                    "ok",
                    started,
                    None,
                    Some(serde_json::json!({
                        "links": catalog.links.len(),
                        "people": catalog.people.len(),
                        "keywords": catalog.keywords.len(),
                        "missing_people": catalog.missing.people.len(),
                        "missing_keywords": catalog.missing.keywords.len(),
                        "skipped": catalog.skipped().len(),
                        "tokens": catalog.links_index.token_count()
                            + catalog.people_index.token_count()
                            + catalog.keywords_index.token_count(),
                    })),
                );
                Ok(catalog)
            }
            Err(err) => {
                log.log_error("catalog.build", started, None, &err, None);
                Err(err)
            }
        }
    }

    fn derive(tables: EntityTables, config: &AppConfig) -> Result<CatalogParts> {
        let (people_table, keywords_table) = tables.lookups()?;
        let people = aggregate(&tables.links, author_ids, &people_table);
        let keywords = aggregate(&tables.links, keyword_ids, &keywords_table);

        let mut links = tables.links;
        natural_sort_by_key(&mut links, |link| link.name.as_str());

        let analyzer = config.search.analyzer();
        let options = config.search.index_options();
        let links_index = SearchIndex::build(&links_spec(), &links, analyzer.clone(), options)?;
        let people_index =
            SearchIndex::build(&people_spec(), &people.resolved, analyzer.clone(), options)?;
        let keywords_index =
            SearchIndex::build(&keywords_spec(), &keywords.resolved, analyzer, options)?;

        Ok(CatalogParts {
            links,
            missing: MissingReferences {
                people: people.missing,
                keywords: keywords.missing,
            },
            people: people.resolved,
            keywords: keywords.resolved,
            links_index,
            people_index,
            keywords_index,
        })
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn people(&self) -> &[WithQuantity<PersonRecord>] {
        &self.people
    }

    pub fn keywords(&self) -> &[WithQuantity<KeywordRecord>] {
        &self.keywords
    }

    pub fn missing(&self) -> &MissingReferences {
        &self.missing
    }

    pub fn links_index(&self) -> &SearchIndex<LinkRecord> {
        &self.links_index
    }

    pub fn people_index(&self) -> &SearchIndex<WithQuantity<PersonRecord>> {
        &self.people_index
    }

    pub fn keywords_index(&self) -> &SearchIndex<WithQuantity<KeywordRecord>> {
        &self.keywords_index
    }

    pub fn skipped(&self) -> Vec<(CollectionKind, &SkippedDocument)> {
        let links = self.links_index.skipped().iter();
        let people = self.people_index.skipped().iter();
        let keywords = self.keywords_index.skipped().iter();
        links
            .map(|doc| (CollectionKind::Links, doc))
            .chain(people.map(|doc| (CollectionKind::People, doc)))
            .chain(keywords.map(|doc| (CollectionKind::Keywords, doc)))
            .collect()
    }

    pub fn summary(&self) -> CatalogSummary<'_> {
        CatalogSummary {
            links: self.links.len(),
            people: self.people.len(),
            keywords: self.keywords.len(),
            missing: &self.missing,
            skipped: self.skipped(),
        }
    }

    pub fn search(&self, collection: CollectionKind, query: &str) -> Vec<SearchHit> {
        match collection {
            CollectionKind::Links => self.run_search(&self.links_index, query),
            CollectionKind::People => self.run_search(&self.people_index, query),
            CollectionKind::Keywords => self.run_search(&self.keywords_index, query),
        }
    }

    pub fn search_links(&self, query: &str) -> Vec<SearchHit> {
        self.run_search(&self.links_index, query)
    }

    pub fn search_people(&self, query: &str) -> Vec<SearchHit> {
        self.run_search(&self.people_index, query)
    }

    pub fn search_keywords(&self, query: &str) -> Vec<SearchHit> {
        self.run_search(&self.keywords_index, query)
    }

    /// Entities shown for `route` under `filter`: the full sorted collection
    /// for a blank filter, otherwise the ranked matches only.
    pub fn visible(&self, route: Route, filter: &str) -> Visible<'_> {
        let filter = filter.trim();
        match route {
            Route::Links => Visible::Links(self.filtered(&self.links_index, &self.links, filter)),
            Route::People => {
                Visible::People(self.filtered(&self.people_index, &self.people, filter))
            }
            Route::Keywords => {
                Visible::Keywords(self.filtered(&self.keywords_index, &self.keywords, filter))
            }
        }
    }

    pub fn snapshot<'a>(&'a self, model: &'a Model) -> Snapshot<'a> {
        Snapshot {
            route: model.route,
            filter: &model.filter,
            visible: self.visible(model.route, &model.filter),
            missing: &self.missing,
            layout: model.layout,
            color: model.color,
            grid: model.grid,
            at_top: model.at_top,
            menu_open: model.menu_open,
        }
    }

    fn filtered<'a, D>(&self, index: &SearchIndex<D>, docs: &'a [D], filter: &str) -> Vec<&'a D> {
        if filter.is_empty() {
            return docs.iter().collect();
        }
        let hits = self.run_search(index, filter);
        index.resolve(&hits, docs)
    }

    fn run_search<D>(&self, index: &SearchIndex<D>, query: &str) -> Vec<SearchHit> {
        let started = Instant::now();
        match index.search(query) {
            Ok(hits) => {
                self.log.log_status(
                    "search",
                    "ok",
                    started,
                    Some(index.collection()),
                    Some(serde_json::json!({ "query": query, "hits": hits.len() })),
                );
                hits
            }
            Err(QueryError::EmptyQuery) => {
                self.log.log_status(
                    "search",
                    "empty_query",
                    started,
                    Some(index.collection()),
                    Some(serde_json::json!({ "query": query, "hits": 0 })),
                );
                Vec::new()
            }
        }
    }
}

struct CatalogParts {
    links: Vec<LinkRecord>,
    people: Vec<WithQuantity<PersonRecord>>,
    keywords: Vec<WithQuantity<KeywordRecord>>,
    missing: MissingReferences,
    links_index: SearchIndex<LinkRecord>,
    people_index: SearchIndex<WithQuantity<PersonRecord>>,
    keywords_index: SearchIndex<WithQuantity<KeywordRecord>>,
}

impl CatalogParts {
    fn with_log(self, log: RequestLog) -> Catalog {
        Catalog {
            links: self.links,
            people: self.people,
            keywords: self.keywords,
            missing: self.missing,
            links_index: self.links_index,
            people_index: self.people_index,
            keywords_index: self.keywords_index,
            log,
        }
    }
}
