mod ip_lookup_tests;
mod phone_lookup_tests;
mod social_links_tests;

use crate::ip_lookup::{IpLookupError, ReverseResolver};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::IpAddr;

/// Resolver answering from a fixed table. Forward lookups return the
/// first address listed for a name.
pub(crate) struct FakeResolver {
    names: HashMap<IpAddr, String>,
    addresses: HashMap<String, IpAddr>,
}

impl FakeResolver {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        let mut names = HashMap::new();
        let mut addresses = HashMap::new();
        for (ip, name) in entries {
            let ip: IpAddr = ip.parse().unwrap();
            names.insert(ip, name.to_string());
            addresses.entry(name.to_string()).or_insert(ip);
        }
        Self { names, addresses }
    }
}

#[async_trait]
impl ReverseResolver for FakeResolver {
    async fn reverse(&self, ip: IpAddr) -> Result<String, IpLookupError> {
        self.names
            .get(&ip)
            .cloned()
            .ok_or(IpLookupError::NoHostname)
    }

    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, IpLookupError> {
        self.addresses
            .get(host)
            .copied()
            .ok_or_else(|| IpLookupError::NoAddress(host.to_string()))
    }
}
