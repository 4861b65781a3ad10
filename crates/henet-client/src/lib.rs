pub mod domain;
pub mod fetcher;
mod html;

pub use domain::{AsnDomain, PrefixDomain, SearchDomain};
pub use fetcher::ReqwestFetcher;
