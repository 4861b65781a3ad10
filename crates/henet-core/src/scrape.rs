use crate::config::ScrapeConfig;
use crate::error::AppError;
use crate::models::Aggregate;
use crate::traits::{Domain, Fetcher, Scraper};

/// Orchestrates the scrape pipeline for one domain: build URL → fetch → extract,
/// for a single key or sequentially over a batch with a pause between fetches.
///
/// Generic over the domain and the fetcher, enabling dependency injection
/// and testability without real HTTP calls.
pub struct ScrapeService<D, F>
where
    D: Domain,
    F: Fetcher,
{
    domain: D,
    fetcher: F,
    config: ScrapeConfig,
}

impl<D, F> ScrapeService<D, F>
where
    D: Domain,
    F: Fetcher,
{
    pub fn new(domain: D, fetcher: F, config: ScrapeConfig) -> Self {
        Self {
            domain,
            fetcher,
            config,
        }
    }
}

impl<D, F> Scraper for ScrapeService<D, F>
where
    D: Domain,
    F: Fetcher,
{
    type Output = D::Output;

    async fn scrape_one(&self, key: &str) -> Result<D::Output, AppError> {
        let url = self.domain.build_url(&self.config.base_url, key)?;

        tracing::info!(domain = self.domain.name(), key, "Fetching {}", url);
        let html = self.fetcher.fetch(url.as_str()).await?;
        tracing::debug!("Fetched {} bytes of HTML", html.len());

        let output = self.domain.extract(&html)?;
        tracing::info!(
            domain = self.domain.name(),
            key,
            records = output.record_count(),
            "Extraction complete"
        );

        Ok(output)
    }

    async fn scrape_many(&self, keys: &[String]) -> Result<D::Output, AppError> {
        if keys.is_empty() {
            return Err(AppError::EmptyBatch(format!(
                "Empty {} list is not allowed",
                self.domain.name()
            )));
        }

        let mut aggregate = D::Output::default();
        for (idx, key) in keys.iter().enumerate() {
            if idx > 0 && !self.config.delay.is_zero() {
                tracing::debug!(
                    sleep_ms = %self.config.delay.as_millis(),
                    "Pacing before next fetch"
                );
                tokio::time::sleep(self.config.delay).await;
            }
            aggregate.merge(self.scrape_one(key).await?);
        }

        tracing::info!(
            domain = self.domain.name(),
            keys = keys.len(),
            records = aggregate.record_count(),
            "Batch complete"
        );

        Ok(aggregate)
    }
}
