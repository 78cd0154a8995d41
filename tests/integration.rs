use couchmark::{CouchError, Protocol, probe};

#[tokio::test]
async fn probe_rejects_malformed_endpoint() {
    let err = probe("[2001:db8::1", Protocol::Dns)
        .await
        .expect_err("expected error");
    assert!(matches!(err, CouchError::Other(_)));
}

#[tokio::test]
async fn probe_rejects_unresolvable_host() {
    let err = probe("no.such.domain.invalid", Protocol::Ntp)
        .await
        .expect_err("expected error");
    assert!(matches!(err, CouchError::Dns(_)));
}

#[cfg(feature = "network-tests")]
mod live {
    use couchmark::{Catalog, Protocol, lookup_servers_n, sweep_once};

    #[tokio::test]
    async fn sweep_covers_the_whole_catalog() {
        let catalog = Catalog::from_entries([
            ("1.1.1.1", "Cloudflare One"),
            ("8.8.8.8", "Google Primary"),
        ]);
        let times = sweep_once(&catalog, Protocol::Dns)
            .await
            .expect("sweep should succeed");
        assert_eq!(times.len(), catalog.len());
    }

    #[tokio::test]
    async fn single_count_lookup_ranks_ascending() {
        let catalog = Catalog::from_entries([
            ("1.1.1.1", "Cloudflare One"),
            ("8.8.8.8", "Google Primary"),
        ]);
        let ranked = lookup_servers_n(&catalog, 1).await.expect("lookup failed");
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].duration <= ranked[1].duration);
    }
}
