//! Request aggregation: one query in, one merged JSON envelope out

use crate::identity_validator::{validate_aadhar, validate_pan, IdValidation};
use crate::ip_lookup::{IpIntel, IpReport};
use crate::phone_lookup::{PhoneIntel, PhoneReport};
use crate::social_links::{EmailDomain, SocialLinks};
use serde::Serialize;
use tracing::debug;

/// Query parameters accepted by `/api`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupParams {
    pub num: Option<String>,
    pub aadhar: Option<String>,
    pub pan: Option<String>,
    pub email: Option<String>,
    pub ip: Option<String>,
    pub username: Option<String>,
}

impl LookupParams {
    /// Builds params from decoded query pairs.
    ///
    /// Unknown keys are ignored and the first occurrence of a repeated key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "num" => &mut params.num,
                "aadhar" => &mut params.aadhar,
                "pan" => &mut params.pan,
                "email" => &mut params.email,
                "ip" => &mut params.ip,
                "username" => &mut params.username,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}

/// Per-lookup results. A key is present only when its lookup ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<IdValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<IdValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_data: Option<IpReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<EmailDomain>,
}

impl LookupResults {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    pub developer: String,
    pub results: LookupResults,
}

// Absent and empty parameters both skip their lookup
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Runs every lookup whose parameter was supplied and merges the outcomes
#[derive(Clone)]
pub struct Aggregator {
    phone: PhoneIntel,
    ip: IpIntel,
    developer: String,
}

impl Aggregator {
    pub fn new(phone: PhoneIntel, ip: IpIntel, developer: impl Into<String>) -> Self {
        Self {
            phone,
            ip,
            developer: developer.into(),
        }
    }

    pub async fn aggregate(&self, params: &LookupParams) -> ApiResponse {
        let mut results = LookupResults::default();

        if let Some(num) = present(&params.num) {
            results.phone = Some(self.phone.report(num));
        }

        if let Some(aadhar) = present(&params.aadhar) {
            results.aadhar = Some(validate_aadhar(aadhar).into());
        }
        if let Some(pan) = present(&params.pan) {
            results.pan = Some(validate_pan(pan).into());
        }

        if let Some(ip) = present(&params.ip) {
            results.ip_data = Some(self.ip.report(ip).await);
        }

        if let Some(username) = present(&params.username) {
            results.social_links = Some(SocialLinks::for_username(username));
        }

        // No `@` means no domain entry at all
        if let Some(email) = present(&params.email) {
            results.email_domain = EmailDomain::from_address(email);
        }

        debug!("Aggregated results: {:?}", results);

        ApiResponse {
            status: "success",
            developer: self.developer.clone(),
            results,
        }
    }
}
