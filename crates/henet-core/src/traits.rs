use std::future::Future;

use url::Url;

use crate::error::AppError;
use crate::models::Aggregate;
use crate::reader::KeyShape;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// One kind of looking-glass lookup: where to fetch a key and how to read
/// the page that comes back.
pub trait Domain: Send + Sync {
    type Output: Aggregate;

    /// Short name used in logs and error messages (e.g. `"asn"`).
    fn name(&self) -> &'static str;

    /// Shape that batch keys for this domain must satisfy.
    fn key_shape(&self) -> KeyShape;

    /// Build the page URL for `key`, percent-encoding it as needed.
    fn build_url(&self, base: &Url, key: &str) -> Result<Url, AppError>;

    /// Extract every record from one fetched page.
    ///
    /// Missing optional cells are not errors; an empty page yields an
    /// empty result.
    fn extract(&self, html: &str) -> Result<Self::Output, AppError>;
}

/// Scrapes one key or an ordered batch of keys.
pub trait Scraper: Send + Sync {
    type Output: Aggregate;

    fn scrape_one(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Self::Output, AppError>> + Send;

    /// Scrape every key in order and concatenate the results.
    ///
    /// Fails with [`AppError::EmptyBatch`] when `keys` is empty and stops at
    /// the first key that fails.
    fn scrape_many(
        &self,
        keys: &[String],
    ) -> impl Future<Output = Result<Self::Output, AppError>> + Send;
}
