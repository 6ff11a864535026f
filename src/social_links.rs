//! URL templating for usernames and email addresses

use serde::Serialize;

const INSTAGRAM_BASE: &str = "https://instagram.com/";
const GITHUB_BASE: &str = "https://github.com/";
const TELEGRAM_BASE: &str = "https://t.me/";

/// Profile URLs built from a raw username
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub github: String,
    pub telegram: String,
}

impl SocialLinks {
    /// Substitutes `username` verbatim into each platform template.
    ///
    /// Nothing is escaped or validated, so odd input yields odd URLs.
    pub fn for_username(username: &str) -> Self {
        Self {
            instagram: format!("{INSTAGRAM_BASE}{username}"),
            github: format!("{GITHUB_BASE}{username}"),
            telegram: format!("{TELEGRAM_BASE}{username}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailDomain {
    pub address: String,
    pub domain: String,
    pub web_link: String,
}

impl EmailDomain {
    /// Splits off everything after the last `@`.
    ///
    /// Returns `None` when the address has no `@` at all.
    pub fn from_address(address: &str) -> Option<Self> {
        let (_, domain) = address.rsplit_once('@')?;
        Some(Self {
            address: address.to_string(),
            domain: domain.to_string(),
            web_link: format!("https://{domain}"),
        })
    }
}
