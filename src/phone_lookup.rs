//! Phone number interpretation with a default region bias

use crate::phone_metadata::{self, CarrierTable, UNKNOWN_TIMEZONE};
use phonenumber::country::Id;
use phonenumber::{Mode, Type};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Region used for numbers that lack an international prefix
pub const DEFAULT_REGION: &str = "IN";

/// Message reported for any number that cannot be interpreted
pub const INVALID_FORMAT: &str = "Invalid format";

#[derive(Debug)]
pub enum PhoneLookupError {
    UnknownRegion(String),
    Parse(phonenumber::ParseError),
}

impl fmt::Display for PhoneLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneLookupError::UnknownRegion(region) => write!(f, "Unknown region: {region}"),
            PhoneLookupError::Parse(e) => write!(f, "Parse error: {e}"),
        }
    }
}

impl Error for PhoneLookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PhoneLookupError::UnknownRegion(_) => None,
            PhoneLookupError::Parse(e) => Some(e),
        }
    }
}

/// Everything known about a successfully parsed number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneDetails {
    pub valid: bool,
    #[serde(rename = "type")]
    pub number_type: String,
    pub carrier: String,
    pub location: String,
    pub timezone: Vec<String>,
}

/// Phone entry of the response, either details or a fixed error message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PhoneReport {
    Details(PhoneDetails),
    Error { error: String },
}

impl From<Result<PhoneDetails, PhoneLookupError>> for PhoneReport {
    fn from(result: Result<PhoneDetails, PhoneLookupError>) -> Self {
        match result {
            Ok(details) => PhoneReport::Details(details),
            Err(PhoneLookupError::Parse(_)) | Err(PhoneLookupError::UnknownRegion(_)) => {
                PhoneReport::Error {
                    error: INVALID_FORMAT.to_string(),
                }
            }
        }
    }
}

/// Parses numbers against a fixed default region and decorates them with
/// carrier, location and timezone data.
#[derive(Debug, Clone)]
pub struct PhoneIntel {
    default_region: Id,
    carriers: CarrierTable,
}

impl PhoneIntel {
    pub fn new(default_region: &str, carriers: CarrierTable) -> Result<Self, PhoneLookupError> {
        Ok(Self {
            default_region: parse_region(default_region)?,
            carriers,
        })
    }

    /// Interpret `text` and look up everything the response reports.
    pub fn lookup(&self, text: &str) -> Result<PhoneDetails, PhoneLookupError> {
        let number = phonenumber::parse(Some(self.default_region), text)
            .map_err(PhoneLookupError::Parse)?;

        let valid = phonenumber::is_valid(&number);
        let number_type = number.number_type(&phonenumber::metadata::DATABASE);
        let region = number.country().id();
        let e164 = number.format().mode(Mode::E164).to_string();

        let details = PhoneDetails {
            valid,
            number_type: type_label(number_type).to_string(),
            carrier: self.carrier_for(&e164, valid, number_type),
            location: location_for(region, valid),
            timezone: timezones_for(&e164, number_type),
        };
        debug!(
            "Phone {} parsed as {:?} in region {:?}",
            text, number_type, region
        );
        Ok(details)
    }

    /// Run [`lookup`](Self::lookup) and collapse failures into the response shape.
    pub fn report(&self, text: &str) -> PhoneReport {
        let result = self.lookup(text);
        if let Err(e) = &result {
            debug!("Phone lookup for {:?} failed: {}", text, e);
        }
        result.into()
    }

    // Only numbers that can be mobile carry an operator name
    fn carrier_for(&self, e164: &str, valid: bool, number_type: Type) -> String {
        let mobile = matches!(
            number_type,
            Type::Mobile | Type::FixedLineOrMobile | Type::Pager
        );
        if !valid || !mobile {
            return "Unknown".to_string();
        }

        self.carriers.lookup(e164).unwrap_or("Unknown").to_string()
    }
}

fn parse_region(region: &str) -> Result<Id, PhoneLookupError> {
    Id::from_str(&region.to_ascii_uppercase())
        .map_err(|_| PhoneLookupError::UnknownRegion(region.to_string()))
}

// Name of the region the number is valid for, e.g. GG for +44 7911
fn location_for(region: Option<Id>, valid: bool) -> String {
    match region {
        Some(region) if valid => phone_metadata::region_description(region.as_ref()).to_string(),
        _ => String::new(),
    }
}

fn timezones_for(e164: &str, number_type: Type) -> Vec<String> {
    match number_type {
        Type::Unknown => vec![UNKNOWN_TIMEZONE.to_string()],
        _ => phone_metadata::timezones_for_number(e164),
    }
}

/// Symbolic label for a number type, e.g. `FIXED_LINE_OR_MOBILE`
pub fn type_label(number_type: Type) -> &'static str {
    match number_type {
        Type::FixedLine => "FIXED_LINE",
        Type::Mobile => "MOBILE",
        Type::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
        Type::TollFree => "TOLL_FREE",
        Type::PremiumRate => "PREMIUM_RATE",
        Type::SharedCost => "SHARED_COST",
        Type::PersonalNumber => "PERSONAL_NUMBER",
        Type::Voip => "VOIP",
        Type::Pager => "PAGER",
        Type::Uan => "UAN",
        Type::Emergency => "EMERGENCY",
        Type::Voicemail => "VOICEMAIL",
        Type::ShortCode => "SHORT_CODE",
        Type::StandardRate => "STANDARD_RATE",
        Type::Carrier => "CARRIER",
        Type::NoInternational => "NO_INTERNATIONAL",
        Type::Unknown => "UNKNOWN",
    }
}
