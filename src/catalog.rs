//! Static endpoint catalogs and the builder used to compose them.
//!
//! Catalogs are immutable once built. Optional subsets (filtered
//! resolvers, provider-internal nodes) are merged in through the builder
//! methods instead of being patched into a shared map.

use std::collections::BTreeMap;

const DNS_V4: &[(&str, &str)] = &[
    ("1.1.1.1", "Cloudflare One"),
    ("1.0.0.1", "Cloudflare One"),
    ("8.8.8.8", "Google Primary"),
    ("8.8.4.4", "Google Secondary"),
    ("208.67.222.222", "OpenDNS Primary"),
    ("208.67.220.220", "OpenDNS Secondary"),
    ("4.2.2.1", "Level 3"),
    ("209.244.0.3", "Level 3"),
    ("209.244.0.4", "Level 3"),
    ("9.9.9.10", "Quad9 unfiltered"),
    ("149.112.112.10", "Quad9 unfiltered"),
    ("68.94.156.1", "ATT Primary"),
    ("68.94.157.1", "ATT Secondary"),
    ("12.121.117.201", "ATT Services"),
    ("8.26.56.26", "Comodo Primary"),
    ("8.20.247.20", "Comodo Secondary"),
    ("76.76.2.0", "Control D Primary"),
    ("76.76.10.0", "Control D Secondary"),
    ("185.228.168.9", "Clean Browsing Primary"),
    ("185.228.169.9", "Clean Browsing Secondary"),
    ("76.76.19.19", "Alternate DNS Primary"),
    ("76.223.122.150", "Alternate DNS Secondary"),
    ("94.140.14.14", "AdGuard DNS Primary"),
    ("94.140.15.15", "AdGuard DNS Secondary"),
];

// No published IPv6 resolvers for Level 3, ATT or Comodo.
const DNS_V6: &[(&str, &str)] = &[
    ("[2606:4700:4700::1111]", "Cloudflare One"),
    ("[2606:4700:4700::1001]", "Cloudflare One"),
    ("[2001:4860:4860::8888]", "Google Primary"),
    ("[2001:4860:4860::8844]", "Google Secondary"),
    ("[2620:119:35::35]", "OpenDNS Primary"),
    ("[2620:119:53::53]", "OpenDNS Secondary"),
    ("[2620:fe::fe]", "Quad9 unfiltered"),
    ("[2620:fe::9]", "Quad9 unfiltered"),
    ("[2606:1a40::]", "Control D Primary"),
    ("[2606:1a40:1::]", "Control D Secondary"),
    ("[2a0d:2a00:1::]", "Clean Browsing Primary"),
    ("[2a0d:2a00:2::]", "Clean Browsing Secondary"),
    ("[2602:fcbc::ad]", "Alternate DNS Primary"),
    ("[2602:fcbc:2::ad]", "Alternate DNS Secondary"),
    ("[2a10:50c0::ad1:ff]", "AdGuard DNS Primary"),
    ("[2a10:50c0::ad2:ff]", "AdGuard DNS Secondary"),
];

// Quad9 ECS entries are not technically filters, but a strange, rare
// feature: EDNS Client-Subnet. See https://www.quad9.net/support/faq/#edns
const DNS_FILTERED: &[(&str, &str)] = &[
    ("1.1.1.2", "Cloudflare Malware Filtered"),
    ("1.0.0.2", "Cloudflare Malware Filtered"),
    ("1.1.1.3", "Cloudflare Adult Filtered"),
    ("1.0.0.3", "Cloudflare Adult Filtered"),
    ("9.9.9.9", "Quad9 filtered Primary"),
    ("149.112.112.112", "Quad9 filtered Secondary"),
    ("9.9.9.11", "Quad9 ecs unfiltered"),
    ("149.112.112.11", "Quad9 ecs unfiltered"),
];

// Comcast resolvers do not answer from outside the Comcast network.
const DNS_COMCAST: &[(&str, &str)] = &[
    ("75.75.75.75", "Comcast Primary"),
    ("75.75.76.76", "Comcast Secondary"),
    ("68.87.85.102", "Comcast older Primary"),
    ("68.87.64.150", "Comcast older Secondary"),
];

const NTP: &[(&str, &str)] = &[
    ("time.cloudflare.com", "Cloudflare time"),
    ("ntp.ubuntu.com", "NTP Ubuntu"),
    ("0.ubuntu.pool.ntp.org", "NTP Ubuntu 0"),
    ("1.ubuntu.pool.ntp.org", "NTP Ubuntu 1"),
    ("2.ubuntu.pool.ntp.org", "NTP Ubuntu 2"),
    ("ntp.nexcess.net", "NexcessNet"),
    ("time.nist.gov", "NIST"),
    ("pool.ntp.org", "NTP org pool"),
    ("0.pool.ntp.org", "NTP org pool 0"),
    ("1.pool.ntp.org", "NTP org pool 1"),
    ("2.pool.ntp.org", "NTP org pool 2"),
    ("time1.google.com", "Google time"),
    ("time2.google.com", "Google time"),
    ("time3.google.com", "Google time"),
    ("time4.google.com", "Google time"),
    ("time.windows.com", "Windows time"),
    ("time.apple.com", "Apple time"),
    ("ntp1.hetzner.de", "Hetzner Online 1"),
    ("ntp2.hetzner.de", "Hetzner Online 2"),
    ("ntp3.hetzner.de", "Hetzner Online 3"),
    ("ntp.ripe.net", "RIPE"),
    ("clock.isc.org", "ISC"),
    ("0.amazon.pool.ntp.org", "Amazon 0"),
    ("1.amazon.pool.ntp.org", "Amazon 1"),
    ("2.amazon.pool.ntp.org", "Amazon 2"),
    ("3.amazon.pool.ntp.org", "Amazon 3"),
];

/// Immutable mapping from endpoint identifier to a human readable
/// description. Keys are unique; several keys may share a description
/// (primary/secondary pairs).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::from_entries(pairs.iter().copied())
    }

    /// Build a catalog from arbitrary endpoint/description pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Catalog {
            entries: entries
                .into_iter()
                .map(|(s, d)| (s.into(), d.into()))
                .collect(),
        }
    }

    /// Public IPv4 resolvers.
    pub fn dns_v4() -> Self {
        Self::from_pairs(DNS_V4)
    }

    /// Public IPv6 resolvers, bracketed-literal form.
    pub fn dns_v6() -> Self {
        Self::from_pairs(DNS_V6)
    }

    /// Filtering and ECS resolver variants.
    pub fn dns_filtered() -> Self {
        Self::from_pairs(DNS_FILTERED)
    }

    /// Comcast-internal resolvers.
    pub fn dns_comcast() -> Self {
        Self::from_pairs(DNS_COMCAST)
    }

    /// Public NTP servers.
    pub fn ntp() -> Self {
        Self::from_pairs(NTP)
    }

    /// Merge another catalog into this one; on key collision the other
    /// catalog's description wins.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn with_filtered(self) -> Self {
        self.merge(Self::dns_filtered())
    }

    pub fn with_comcast(self) -> Self {
        self.merge(Self::dns_comcast())
    }

    pub fn description(&self, endpoint: &str) -> Option<&str> {
        self.entries.get(endpoint).map(String::as_str)
    }

    /// Endpoint identifiers in sorted order. Probes are dispatched in
    /// this order so fail-fast behavior is reproducible.
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_catalogs_are_populated() {
        assert_eq!(Catalog::dns_v4().len(), 24);
        assert_eq!(Catalog::dns_v6().len(), 16);
        assert_eq!(Catalog::ntp().len(), 26);
    }

    #[test]
    fn merge_extends_without_mutating_source_sets() {
        let base_len = Catalog::dns_v4().len();
        let merged = Catalog::dns_v4().with_filtered().with_comcast();
        assert_eq!(
            merged.len(),
            base_len + Catalog::dns_filtered().len() + Catalog::dns_comcast().len()
        );
        // base constructor is unaffected by earlier merges
        assert_eq!(Catalog::dns_v4().len(), base_len);
        assert_eq!(merged.description("9.9.9.9"), Some("Quad9 filtered Primary"));
    }

    #[test]
    fn endpoints_iterate_in_sorted_order() {
        let cat = Catalog::dns_v4();
        let ids: Vec<&str> = cat.endpoints().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
