use std::path::PathBuf;

use crate::error::AppError;
use crate::reader::KeyReader;
use crate::traits::Scraper;

/// Lookup flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// A single key (`--number`, `--prefix`, `--word`).
    pub key: Option<String>,
    /// A file with one key per line (`--list`).
    pub list: Option<PathBuf>,
}

/// What a [`Client`] was built to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(String),
    Batch(Vec<String>),
}

/// Binds one lookup target to a scraper and a key reader.
///
/// A client is single-use: its mode is fixed at construction.
pub struct Client<S: Scraper> {
    scraper: S,
    reader: KeyReader,
    target: Option<Target>,
}

impl<S: Scraper> Client<S> {
    /// A client with no target; every search fails with `MissingInput`.
    pub fn new(scraper: S, reader: KeyReader) -> Self {
        Self {
            scraper,
            reader,
            target: None,
        }
    }

    pub fn single(scraper: S, reader: KeyReader, key: impl Into<String>) -> Self {
        Self {
            scraper,
            reader,
            target: Some(Target::Single(key.into())),
        }
    }

    pub fn batch(scraper: S, reader: KeyReader, keys: Vec<String>) -> Self {
        Self {
            scraper,
            reader,
            target: Some(Target::Batch(keys)),
        }
    }

    /// Build a client from lookup flags.
    ///
    /// A non-empty single key wins over a list. A list is read and validated
    /// immediately, so a malformed file fails before any fetch.
    pub fn from_options(
        scraper: S,
        reader: KeyReader,
        options: &LookupOptions,
    ) -> Result<Self, AppError> {
        if let Some(key) = options.key.as_deref().filter(|k| !k.is_empty()) {
            return Ok(Self::single(scraper, reader, key));
        }

        if let Some(path) = &options.list {
            let keys = reader.read_file(path)?;
            return Ok(Self::batch(scraper, reader, keys));
        }

        Ok(Self::new(scraper, reader))
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Scrape the single key.
    pub async fn search(&self) -> Result<S::Output, AppError> {
        match &self.target {
            Some(Target::Single(key)) => self.scraper.scrape_one(key).await,
            _ => Err(AppError::MissingInput(format!(
                "{} not specified",
                self.reader.shape().label()
            ))),
        }
    }

    /// Scrape every key of the batch in order.
    pub async fn search_multi(&self) -> Result<S::Output, AppError> {
        let label = self.reader.shape().label();
        match &self.target {
            Some(Target::Batch(keys)) if keys.is_empty() => Err(AppError::EmptyBatch(format!(
                "Empty {label} list is not allowed"
            ))),
            Some(Target::Batch(keys)) => self.scraper.scrape_many(keys).await,
            _ => Err(AppError::MissingInput(format!(
                "{label} list is not specified"
            ))),
        }
    }

    /// Run whichever search matches the target.
    pub async fn run(&self) -> Result<S::Output, AppError> {
        match &self.target {
            Some(Target::Single(_)) => self.search().await,
            Some(Target::Batch(_)) => self.search_multi().await,
            None => Err(AppError::MissingInput(format!(
                "either a {} or a list must be given",
                self.reader.shape().label()
            ))),
        }
    }
}
