use serde::Serialize;

/// A scrape result that can absorb the result of another key.
///
/// Implementations append every record list of `other` onto `self`,
/// keeping source order. Records are never merged, sorted or deduplicated.
pub trait Aggregate: Default + Serialize + Send {
    fn merge(&mut self, other: Self);

    /// Total number of records across all lists.
    fn record_count(&self) -> usize;
}

/// One row of an ASN's announced-prefix table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsnPrefix {
    pub prefix: String,
    pub description: String,
}

/// Prefixes announced by one or more ASNs, split by address family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AsnResult {
    #[serde(rename = "ipv4_prefix")]
    pub ipv4: Vec<AsnPrefix>,
    #[serde(rename = "ipv6_prefix")]
    pub ipv6: Vec<AsnPrefix>,
}

impl Aggregate for AsnResult {
    fn merge(&mut self, other: Self) {
        self.ipv4.extend(other.ipv4);
        self.ipv6.extend(other.ipv6);
    }

    fn record_count(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }
}

/// One row of a prefix's DNS table.
///
/// `ptr` and `a` are `None` when the source cell was blank; they serialize
/// as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    pub ip: String,
    pub ptr: Option<String>,
    pub a: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrefixResult {
    pub dns: Vec<DnsRecord>,
}

impl Aggregate for PrefixResult {
    fn merge(&mut self, other: Self) {
        self.dns.extend(other.dns);
    }

    fn record_count(&self) -> usize {
        self.dns.len()
    }
}

/// The bucket a search result falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Asn,
    Ipv4,
    Ipv6,
}

/// One row of the free-text search results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub result: String,
    pub search_type: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "ipv4_prefix")]
    pub ipv4: Vec<SearchRecord>,
    #[serde(rename = "ipv6_prefix")]
    pub ipv6: Vec<SearchRecord>,
    pub asn: Vec<SearchRecord>,
}

impl SearchResult {
    /// Append a record to the list for its bucket.
    pub fn push(&mut self, kind: RecordKind, record: SearchRecord) {
        match kind {
            RecordKind::Asn => self.asn.push(record),
            RecordKind::Ipv4 => self.ipv4.push(record),
            RecordKind::Ipv6 => self.ipv6.push(record),
        }
    }
}

impl Aggregate for SearchResult {
    fn merge(&mut self, other: Self) {
        self.ipv4.extend(other.ipv4);
        self.ipv6.extend(other.ipv6);
        self.asn.extend(other.asn);
    }

    fn record_count(&self) -> usize {
        self.ipv4.len() + self.ipv6.len() + self.asn.len()
    }
}
