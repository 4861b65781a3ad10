use henet_core::classify::classify;
use henet_core::error::AppError;
use henet_core::models::{SearchRecord, SearchResult};
use henet_core::reader::KeyShape;
use henet_core::traits::Domain;
use scraper::Html;
use url::Url;

use super::url_with_segments;
use crate::html::{cells, first_child_text, parse_selector, text_of};

const RESULT_ROWS: &str = "div#search > table > tbody > tr";

/// Free-text search (`/search?search[search]={word}&commit=Search`).
///
/// Each result row is bucketed by [`classify`]; rows matching no bucket
/// are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchDomain;

impl Domain for SearchDomain {
    type Output = SearchResult;

    fn name(&self) -> &'static str {
        "search"
    }

    fn key_shape(&self) -> KeyShape {
        KeyShape::Word
    }

    fn build_url(&self, base: &Url, key: &str) -> Result<Url, AppError> {
        let mut url = url_with_segments(base, ["search"])?;
        url.query_pairs_mut()
            .append_pair("search[search]", key)
            .append_pair("commit", "Search");
        Ok(url)
    }

    fn extract(&self, html: &str) -> Result<SearchResult, AppError> {
        let document = Html::parse_document(html);
        let selector = parse_selector(RESULT_ROWS)?;
        let mut result = SearchResult::default();

        for row in document.select(&selector) {
            let cells = cells(row);
            let record = SearchRecord {
                result: first_child_text(cells.first()),
                search_type: text_of(cells.get(1)),
                description: text_of(cells.get(2)),
            };

            match classify(&record.result) {
                Some(kind) => result.push(kind, record),
                None => tracing::debug!(
                    result = %record.result,
                    search_type = %record.search_type,
                    description = %record.description,
                    "Ignoring unclassified search result"
                ),
            }
        }

        Ok(result)
    }
}
