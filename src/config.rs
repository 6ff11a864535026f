//! Runtime configuration from flags and environment variables

use crate::phone_lookup::{PhoneIntel, DEFAULT_REGION};
use crate::phone_metadata::{self, CarrierTable};
use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DEVELOPER: &str = "NarutoCodex";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lookup-aggregator",
    version = "0.1.0",
    about = "Aggregates phone, identity, IP and username lookups behind one HTTP endpoint"
)]
pub struct AggregatorConfig {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: SocketAddr,

    /// Region assumed for phone numbers without an international prefix
    #[arg(long, env = "DEFAULT_REGION", default_value = DEFAULT_REGION)]
    pub default_region: String,

    /// Value reported in the `developer` field of every response
    #[arg(long, env = "DEVELOPER_NAME", default_value = DEFAULT_DEVELOPER)]
    pub developer: String,

    /// Extra carrier prefixes (`prefix|name` per line)
    #[arg(long, env = "CARRIER_DATA_PATH")]
    pub carrier_data: Option<PathBuf>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            default_region: DEFAULT_REGION.to_string(),
            developer: DEFAULT_DEVELOPER.to_string(),
            carrier_data: None,
        }
    }
}

impl AggregatorConfig {
    pub fn carrier_table(&self) -> Result<CarrierTable> {
        match &self.carrier_data {
            Some(path) => CarrierTable::builtin_with_file(path)
                .with_context(|| format!("Failed to load carrier data from {}", path.display())),
            None => Ok(CarrierTable::builtin()),
        }
    }

    pub fn phone_intel(&self) -> Result<PhoneIntel> {
        let carriers = self.carrier_table()?;
        info!(
            "Phone lookups use default region {} with {} carrier prefixes",
            self.default_region,
            carriers.len()
        );
        if !phone_metadata::is_known_region(&self.default_region) {
            warn!(
                "No display name for default region {}",
                self.default_region
            );
        }
        PhoneIntel::new(&self.default_region, carriers).context("Invalid default region")
    }
}
