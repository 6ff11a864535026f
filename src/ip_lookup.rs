//! Reverse DNS lookup for caller-supplied addresses or hostnames

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveError;
use hickory_resolver::TokioAsyncResolver;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum IpLookupError {
    NoAddress(String),
    Resolve(ResolveError),
    NoHostname,
}

impl fmt::Display for IpLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpLookupError::NoAddress(host) => write!(f, "No address found for {host:?}"),
            IpLookupError::Resolve(e) => write!(f, "DNS lookup failed: {e}"),
            IpLookupError::NoHostname => write!(f, "No PTR record returned"),
        }
    }
}

impl Error for IpLookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IpLookupError::Resolve(e) => Some(e),
            IpLookupError::NoAddress(_) | IpLookupError::NoHostname => None,
        }
    }
}

/// Something that can turn an address back into a hostname
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    async fn reverse(&self, ip: IpAddr) -> Result<String, IpLookupError>;

    /// First address `host` resolves to
    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, IpLookupError>;
}

/// Reverse resolver backed by the host's DNS configuration
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// Reads `/etc/resolv.conf`, falling back to library defaults when it
    /// cannot be loaded.
    pub fn from_system_conf() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            warn!("Failed to load system resolver config, using defaults: {}", e);
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }
}

#[async_trait]
impl ReverseResolver for SystemResolver {
    async fn reverse(&self, ip: IpAddr) -> Result<String, IpLookupError> {
        let response = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(IpLookupError::Resolve)?;
        let name = response
            .iter()
            .next()
            .map(|name| name.to_utf8())
            .ok_or(IpLookupError::NoHostname)?;
        Ok(name.trim_end_matches('.').to_string())
    }

    async fn lookup_ip(&self, host: &str) -> Result<IpAddr, IpLookupError> {
        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(IpLookupError::Resolve)?;
        response
            .iter()
            .next()
            .ok_or_else(|| IpLookupError::NoAddress(host.to_string()))
    }
}

/// `ip_data` entry of the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpReport {
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub status: String,
}

impl IpReport {
    pub fn active(ip: &str, hostname: String) -> Self {
        Self {
            ip: ip.to_string(),
            hostname: Some(hostname),
            status: "active".to_string(),
        }
    }

    /// Any failed lookup is labelled `reachable` for a non-empty input.
    /// Callers depend on this label even though nothing was reached.
    pub fn unresolved(ip: &str) -> Self {
        let status = if ip.is_empty() { "invalid" } else { "reachable" };
        Self {
            ip: ip.to_string(),
            hostname: None,
            status: status.to_string(),
        }
    }
}

/// Reverse lookup front end shared across requests
#[derive(Clone)]
pub struct IpIntel {
    resolver: Arc<dyn ReverseResolver>,
}

impl IpIntel {
    pub fn new(resolver: Arc<dyn ReverseResolver>) -> Self {
        Self { resolver }
    }

    /// Reverse-resolve `ip`. Input that is not an address literal is
    /// resolved forward first and its first address is used.
    pub async fn lookup(&self, ip: &str) -> Result<String, IpLookupError> {
        let addr = match ip.parse::<IpAddr>() {
            Ok(addr) => addr,
            Err(_) if ip.is_empty() => return Err(IpLookupError::NoAddress(String::new())),
            Err(_) => {
                let addr = self.resolver.lookup_ip(ip).await?;
                debug!("Resolved {:?} to {} before reverse lookup", ip, addr);
                addr
            }
        };
        self.resolver.reverse(addr).await
    }

    pub async fn report(&self, ip: &str) -> IpReport {
        match self.lookup(ip).await {
            Ok(hostname) => IpReport::active(ip, hostname),
            Err(e) => {
                debug!("Reverse lookup for {:?} failed: {}", ip, e);
                IpReport::unresolved(ip)
            }
        }
    }
}
