//! Looking-glass page domains: URL templates and record extraction.

mod asn;
mod prefix;
mod search;

pub use asn::AsnDomain;
pub use prefix::PrefixDomain;
pub use search::SearchDomain;

use henet_core::error::AppError;
use url::Url;

/// Append path segments to `base`, percent-encoding each one.
///
/// Any query or fragment on `base` is dropped.
pub(crate) fn url_with_segments<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, AppError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| AppError::ConfigError(format!("Base URL {base} cannot have a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
