use std::io::Write;

use henet_client::{AsnDomain, PrefixDomain, SearchDomain};
use henet_core::client::{Client, LookupOptions};
use henet_core::error::AppError;
use henet_core::reader::KeyReader;
use henet_core::scrape::ScrapeService;
use henet_core::traits::{Domain, Scraper};

use crate::common::*;

fn keys(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|k| k.to_string()).collect()
}

#[tokio::test]
async fn asn_batch_equals_concatenated_single_results() -> anyhow::Result<()> {
    let as1 = asn_page(
        &[("91.204.192.0/22", "Red Bull GmbH"), ("185.45.4.0/22", "Red Bull")],
        &[("2a00:1450::/32", "Red Bull v6")],
    );
    let as2 = asn_page(&[("8.8.8.0/24", "Google LLC")], &[]);
    let pages = [
        ("http://lg.test/AS11251", as1.as_str()),
        ("http://lg.test/AS15169", as2.as_str()),
    ];

    let single = ScrapeService::new(AsnDomain, StubFetcher::new(&pages), test_config());
    let first = single.scrape_one("AS11251").await?;
    let second = single.scrape_one("AS15169").await?;

    let fetcher = StubFetcher::new(&pages);
    let svc = ScrapeService::new(AsnDomain, fetcher.clone(), test_config());
    let batch = svc.scrape_many(&keys(&["AS11251", "AS15169"])).await?;

    let expected_v4: Vec<_> = first.ipv4.iter().chain(&second.ipv4).cloned().collect();
    let expected_v6: Vec<_> = first.ipv6.iter().chain(&second.ipv6).cloned().collect();
    assert_eq!(batch.ipv4, expected_v4);
    assert_eq!(batch.ipv6, expected_v6);
    assert_eq!(batch.ipv4[0].description, "Red Bull GmbH");
    assert_eq!(
        fetcher.requested(),
        ["http://lg.test/AS11251", "http://lg.test/AS15169"]
    );
    Ok(())
}

#[tokio::test]
async fn asn_without_rows_is_empty_not_error() -> anyhow::Result<()> {
    let page = asn_page(&[], &[]);
    let svc = ScrapeService::new(
        AsnDomain,
        StubFetcher::new(&[("http://lg.test/AS64512", page.as_str())]),
        test_config(),
    );

    let result = svc.scrape_one("AS64512").await?;
    assert!(result.ipv4.is_empty());
    assert!(result.ipv6.is_empty());
    Ok(())
}

#[tokio::test]
async fn prefix_list_file_drives_batch_in_file_order() -> anyhow::Result<()> {
    let net1 = dns_page(&[("91.204.192.1", "gw.redbull.example", "gw.redbull.example")]);
    let net2 = dns_page(&[
        ("2a00:1450::1", "", "v6.redbull.example"),
        ("2a00:1450::2", "ns.redbull.example", ""),
    ]);
    let fetcher = StubFetcher::new(&[
        ("http://lg.test/net/91.204.192.0/22", net1.as_str()),
        ("http://lg.test/net/2a00:1450::/32", net2.as_str()),
    ]);

    let mut list = tempfile::NamedTempFile::new()?;
    writeln!(list, "91.204.192.0/22")?;
    writeln!(list, "2a00:1450::/32")?;

    let domain = PrefixDomain;
    let reader = KeyReader::new(domain.key_shape());
    let svc = ScrapeService::new(domain, fetcher, test_config());
    let options = LookupOptions {
        key: None,
        list: Some(list.path().to_path_buf()),
    };
    let client = Client::from_options(svc, reader, &options)?;

    let result = client.run().await?;

    let ips: Vec<_> = result.dns.iter().map(|r| r.ip.as_str()).collect();
    assert_eq!(ips, ["91.204.192.1", "2a00:1450::1", "2a00:1450::2"]);
    assert_eq!(result.dns[1].ptr, None);
    assert_eq!(result.dns[1].a.as_deref(), Some("v6.redbull.example"));
    assert_eq!(result.dns[2].ptr.as_deref(), Some("ns.redbull.example"));
    assert_eq!(result.dns[2].a, None);
    Ok(())
}

#[tokio::test]
async fn malformed_prefix_list_never_fetches() -> anyhow::Result<()> {
    let fetcher = StubFetcher::default();
    let mut list = tempfile::NamedTempFile::new()?;
    writeln!(list, "91.204.192.0/22")?;
    writeln!(list, "xyz.")?;

    let reader = KeyReader::new(PrefixDomain.key_shape());
    let svc = ScrapeService::new(PrefixDomain, fetcher.clone(), test_config());
    let options = LookupOptions {
        key: None,
        list: Some(list.path().to_path_buf()),
    };

    let err = Client::from_options(svc, reader, &options).err().unwrap();

    match err {
        AppError::MalformedInput { line_number, line } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "xyz.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(fetcher.requested().is_empty());
    Ok(())
}

#[tokio::test]
async fn search_red_bull_end_to_end() -> anyhow::Result<()> {
    let page = search_page(&[
        ("AS11251", "ASN", "Red Bull GmbH"),
        ("91.204.192.0/22", "Route", "Red Bull GmbH"),
        ("2a00:1450::/32", "Route", "Red Bull IPv6"),
        ("XYZ", "Unknown", "Unclassifiable"),
    ]);
    let fetcher = StubFetcher::new(&[(
        "http://lg.test/search?search%5Bsearch%5D=red+bull&commit=Search",
        page.as_str(),
    )]);

    let reader = KeyReader::new(SearchDomain.key_shape());
    let svc = ScrapeService::new(SearchDomain, fetcher, test_config());
    let client = Client::single(svc, reader, "red bull");

    let result = client.search().await?;

    assert_eq!(result.asn.len(), 1);
    assert_eq!(result.ipv4.len(), 1);
    assert_eq!(result.ipv6.len(), 1);
    assert_eq!(result.asn[0].result, "AS11251");
    assert_eq!(result.ipv4[0].result, "91.204.192.0/22");
    assert_eq!(result.ipv6[0].result, "2a00:1450::/32");

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["asn"][0]["search_type"], "ASN");
    assert_eq!(json["ipv4_prefix"][0]["description"], "Red Bull GmbH");
    assert!(!json.to_string().contains("XYZ"));
    Ok(())
}

#[tokio::test]
async fn search_batch_runs_every_word() -> anyhow::Result<()> {
    let red = search_page(&[("AS11251", "ASN", "Red Bull GmbH")]);
    let google = search_page(&[("AS15169", "ASN", "Google LLC")]);
    let fetcher = StubFetcher::new(&[
        (
            "http://lg.test/search?search%5Bsearch%5D=red+bull&commit=Search",
            red.as_str(),
        ),
        (
            "http://lg.test/search?search%5Bsearch%5D=google&commit=Search",
            google.as_str(),
        ),
    ]);

    let reader = KeyReader::new(SearchDomain.key_shape());
    let svc = ScrapeService::new(SearchDomain, fetcher, test_config());
    let client = Client::batch(svc, reader, keys(&["red bull", "google"]));

    let result = client.search_multi().await?;

    let asns: Vec<_> = result.asn.iter().map(|r| r.result.as_str()).collect();
    assert_eq!(asns, ["AS11251", "AS15169"]);
    Ok(())
}

#[tokio::test]
async fn fetch_failure_aborts_whole_batch() {
    let page = asn_page(&[("91.204.192.0/22", "Red Bull GmbH")], &[]);
    let fetcher = StubFetcher::new(&[("http://lg.test/AS11251", page.as_str())]);
    let svc = ScrapeService::new(AsnDomain, fetcher.clone(), test_config());

    let err = svc
        .scrape_many(&keys(&["AS11251", "AS64496", "AS15169"]))
        .await
        .unwrap_err();

    assert!(err.is_fetch_error());
    assert_eq!(
        fetcher.requested(),
        ["http://lg.test/AS11251", "http://lg.test/AS64496"]
    );
}

#[tokio::test]
async fn empty_batch_is_rejected() {
    let reader = KeyReader::new(AsnDomain.key_shape());
    let svc = ScrapeService::new(AsnDomain, StubFetcher::default(), test_config());
    let client = Client::batch(svc, reader, Vec::new());

    let err = client.search_multi().await.unwrap_err();
    assert!(matches!(err, AppError::EmptyBatch(_)));
}
