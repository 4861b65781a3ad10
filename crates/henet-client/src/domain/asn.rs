use henet_core::error::AppError;
use henet_core::models::{AsnPrefix, AsnResult};
use henet_core::reader::KeyShape;
use henet_core::traits::Domain;
use scraper::Html;
use url::Url;

use super::url_with_segments;
use crate::html::{cells, collapse_whitespace, last_child_text, parse_selector, text_of};

const IPV4_ROWS: &str = "table#table_prefixes4 > tbody > tr";
const IPV6_ROWS: &str = "table#table_prefixes6 > tbody > tr";

/// Prefixes announced by an ASN (`/{asn}`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AsnDomain;

impl Domain for AsnDomain {
    type Output = AsnResult;

    fn name(&self) -> &'static str {
        "ASN"
    }

    fn key_shape(&self) -> KeyShape {
        KeyShape::Asn
    }

    fn build_url(&self, base: &Url, key: &str) -> Result<Url, AppError> {
        url_with_segments(base, [key])
    }

    fn extract(&self, html: &str) -> Result<AsnResult, AppError> {
        let document = Html::parse_document(html);
        Ok(AsnResult {
            ipv4: prefix_rows(&document, IPV4_ROWS)?,
            ipv6: prefix_rows(&document, IPV6_ROWS)?,
        })
    }
}

fn prefix_rows(document: &Html, css: &str) -> Result<Vec<AsnPrefix>, AppError> {
    let selector = parse_selector(css)?;
    let mut rows = Vec::new();

    for row in document.select(&selector) {
        let cells = cells(row);
        if cells.is_empty() {
            tracing::debug!(table = css, "Skipping row without cells");
            continue;
        }
        rows.push(AsnPrefix {
            prefix: last_child_text(cells.first()),
            description: collapse_whitespace(&text_of(cells.get(1))),
        });
    }

    Ok(rows)
}
