pub mod aggregator;
pub mod config;
pub mod identity_validator;
pub mod ip_lookup;
pub mod phone_lookup;
pub mod phone_metadata;
pub mod server;
pub mod social_links;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, ApiResponse, LookupParams, LookupResults};
pub use config::AggregatorConfig;
pub use identity_validator::{validate_aadhar, validate_pan, IdValidation};
pub use ip_lookup::{IpIntel, IpLookupError, IpReport, ReverseResolver, SystemResolver};
pub use phone_lookup::{PhoneDetails, PhoneIntel, PhoneLookupError, PhoneReport};
pub use phone_metadata::CarrierTable;
pub use server::LookupServer;
pub use social_links::{EmailDomain, SocialLinks};
