//! Catalog search, filtering, and sorting.
//!
//! The pipeline always runs search, then filter, then sort, and returns
//! borrowed views. The catalog slice itself is never reordered.

pub mod filter;
pub mod search;
pub mod sort;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tinyflix_model::{Video, VideoID};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{self, CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Newest first
    Recent,
    /// Above the popularity threshold, most viewed first
    Popular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Rating,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for FilterMode {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" => Ok(FilterMode::Recent),
            "popular" => Ok(FilterMode::Popular),
            _ => Err(ParseOptionError {
                kind: "filter",
                value: s.to_string(),
                expected: "recent, popular",
            }),
        }
    }
}

impl FromStr for SortField {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "rating" => Ok(SortField::Rating),
            "date" => Ok(SortField::Date),
            _ => Err(ParseOptionError {
                kind: "sort field",
                value: s.to_string(),
                expected: "title, rating, date",
            }),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterMode::Recent => "recent",
            FilterMode::Popular => "popular",
        })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Title => "title",
            SortField::Rating => "rating",
            SortField::Date => "date",
        })
    }
}

/// One pass through the pipeline. Every stage is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub query: String,
    pub filter: Option<FilterMode>,
    pub sort: Option<SortField>,
}

impl CatalogQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: SortField) -> Self {
        self.sort = Some(sort);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogSearchEngine {
    config: CatalogConfig,
}

impl CatalogSearchEngine {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Resolve a video id against the catalog.
    pub fn find<'a>(
        &self,
        id: VideoID,
        catalog: &'a [Video],
    ) -> error::Result<&'a Video> {
        catalog
            .iter()
            .find(|video| video.id == id)
            .ok_or_else(|| CoreError::not_found("Video", id))
    }

    pub fn search<'a>(
        &self,
        query: &str,
        catalog: &'a [Video],
    ) -> Vec<&'a Video> {
        search::search(query, catalog)
    }

    pub fn filter<'a>(
        &self,
        mode: FilterMode,
        catalog: &'a [Video],
    ) -> Vec<&'a Video> {
        filter::filter_videos(
            mode,
            catalog.iter().collect(),
            catalog,
            &self.config,
        )
    }

    pub fn sort<'a>(
        &self,
        field: SortField,
        catalog: &'a [Video],
    ) -> Vec<&'a Video> {
        let mut sorted: Vec<&Video> = catalog.iter().collect();
        sort::sort_videos(&mut sorted, field);
        sorted
    }

    /// search, then filter, then sort.
    /// Popular thresholds are measured against the whole catalog.
    pub fn run<'a>(
        &self,
        query: &CatalogQuery,
        catalog: &'a [Video],
    ) -> Vec<&'a Video> {
        let mut results = search::search(&query.query, catalog);
        let matched = results.len();

        if let Some(mode) = query.filter {
            results =
                filter::filter_videos(mode, results, catalog, &self.config);
        }
        if let Some(field) = query.sort {
            sort::sort_videos(&mut results, field);
        }

        debug!(
            query = %query.query,
            filter = ?query.filter,
            sort = ?query.sort,
            catalog = catalog.len(),
            matched,
            returned = results.len(),
            "catalog query"
        );
        results
    }
}
