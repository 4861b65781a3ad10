use henet_core::error::AppError;
use henet_core::models::{DnsRecord, PrefixResult};
use henet_core::reader::KeyShape;
use henet_core::traits::Domain;
use scraper::Html;
use url::Url;

use super::url_with_segments;
use crate::html::{cells, first_child_text, non_blank, parse_selector, text_of};

const DNS_ROWS: &str = "div#dnsrecords > table > tbody > tr";

/// DNS records inside a prefix (`/net/{prefix}`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixDomain;

impl Domain for PrefixDomain {
    type Output = PrefixResult;

    fn name(&self) -> &'static str {
        "prefix"
    }

    fn key_shape(&self) -> KeyShape {
        KeyShape::Prefix
    }

    /// The prefix length stays a separate path segment: `/net/10.0.0.0/8`.
    fn build_url(&self, base: &Url, key: &str) -> Result<Url, AppError> {
        url_with_segments(base, std::iter::once("net").chain(key.split('/')))
    }

    fn extract(&self, html: &str) -> Result<PrefixResult, AppError> {
        let document = Html::parse_document(html);
        let selector = parse_selector(DNS_ROWS)?;
        let mut dns = Vec::new();

        for row in document.select(&selector) {
            let cells = cells(row);
            if cells.is_empty() {
                tracing::debug!("Skipping DNS row without cells");
                continue;
            }
            dns.push(DnsRecord {
                ip: first_child_text(cells.first()),
                ptr: non_blank(text_of(cells.get(1))),
                a: non_blank(first_child_text(cells.get(2))),
            });
        }

        Ok(PrefixResult { dns })
    }
}
