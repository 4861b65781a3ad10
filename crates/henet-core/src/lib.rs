pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod reader;
pub mod scrape;
pub mod traits;


pub use classify::classify;
pub use client::{Client, LookupOptions, Target};
pub use config::ScrapeConfig;
pub use error::AppError;
pub use models::{
    Aggregate, AsnPrefix, AsnResult, DnsRecord, PrefixResult, RecordKind, SearchRecord,
    SearchResult,
};
pub use reader::{KeyReader, KeyShape};
pub use scrape::ScrapeService;
pub use traits::{Domain, Fetcher, Scraper};
