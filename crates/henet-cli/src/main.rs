use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use henet_client::{AsnDomain, PrefixDomain, ReqwestFetcher, SearchDomain};
use henet_core::client::{Client, LookupOptions};
use henet_core::config::ScrapeConfig;
use henet_core::reader::KeyReader;
use henet_core::scrape::ScrapeService;
use henet_core::traits::Domain;

#[derive(Parser)]
#[command(name = "henet", version, about = "Scrape routing data from the bgp.he.net looking glass")]
struct Cli {
    /// Looking-glass base URL (overrides HENET_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Pause between fetches of a list, in milliseconds (overrides HENET_DELAY_MS)
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Per-request timeout in seconds (overrides HENET_TIMEOUT_SECS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search assets by word
    Search {
        /// Word to search
        #[arg(short, long, conflicts_with = "list")]
        word: Option<String>,

        /// File with one search word per line
        #[arg(short, long)]
        list: Option<PathBuf>,
    },

    /// Search assets by ASN
    Asn {
        /// ASN to search (e.g. AS11251)
        #[arg(short, long, conflicts_with = "list")]
        number: Option<String>,

        /// File with one ASN per line
        #[arg(short, long)]
        list: Option<PathBuf>,
    },

    /// Search assets by prefix
    Prefix {
        /// Prefix to search (e.g. 91.204.192.0/22)
        #[arg(short, long, conflicts_with = "list")]
        prefix: Option<String>,

        /// File with one prefix per line
        #[arg(short, long)]
        list: Option<PathBuf>,
    },
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn scrape_config(&self) -> Result<ScrapeConfig> {
        let mut config = ScrapeConfig::from_env()?;

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_delay(Duration::from_millis(ms));
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("henet=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.scrape_config()?;
    tracing::debug!(
        base_url = %config.base_url,
        delay_ms = %config.delay.as_millis(),
        timeout_secs = config.timeout.as_secs(),
        "Loaded configuration"
    );

    match cli.command {
        Commands::Search { word, list } => {
            cmd_lookup(SearchDomain, LookupOptions { key: word, list }, config).await?;
        }
        Commands::Asn { number, list } => {
            cmd_lookup(AsnDomain, LookupOptions { key: number, list }, config).await?;
        }
        Commands::Prefix { prefix, list } => {
            cmd_lookup(PrefixDomain, LookupOptions { key: prefix, list }, config).await?;
        }
    }

    Ok(())
}

/// Look up one key or a list of keys and print the result as one JSON line.
async fn cmd_lookup<D: Domain>(
    domain: D,
    options: LookupOptions,
    config: ScrapeConfig,
) -> Result<()> {
    let name = domain.name();
    let fetcher = ReqwestFetcher::from_config(&config).context("Failed to create HTTP client")?;
    let reader = KeyReader::new(domain.key_shape());
    let service = ScrapeService::new(domain, fetcher, config);

    let client = Client::from_options(service, reader, &options)?;
    let result = client
        .run()
        .await
        .with_context(|| format!("{name} lookup failed"))?;

    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}
