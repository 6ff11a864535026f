//! Region, timezone and carrier data for parsed phone numbers
//!
//! The `phonenumber` crate only knows numbering plans. Everything a caller
//! wants to *display* about a number (where it is, which operator runs it,
//! which timezones it spans) lives here.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

static BUILTIN_CARRIERS: &str = include_str!("../data/carrier_en.txt");
static BUILTIN_REGIONS: &str = include_str!("../data/regions_en.txt");
static BUILTIN_TIMEZONES: &str = include_str!("../data/timezones.txt");

/// Timezone reported for numbers whose region or type cannot be resolved
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

static REGION_NAMES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    parse_entries(BUILTIN_REGIONS)
        .unwrap_or_else(|e| {
            debug!("Ignoring built-in region names: {}", e);
            Vec::new()
        })
        .into_iter()
        .map(|(code, name)| (code.to_ascii_uppercase(), name))
        .collect()
});

// Timezones keyed by E.164 prefix, zones joined with '&'
static TIMEZONES: LazyLock<PrefixTable> = LazyLock::new(|| {
    let mut table = PrefixTable::default();
    if let Err(e) = table.merge_str(BUILTIN_TIMEZONES) {
        debug!("Ignoring built-in timezone data: {}", e);
    }
    table
});

/// English display name for a region, or an empty string if unknown
pub fn region_description(region: &str) -> &'static str {
    REGION_NAMES
        .get(&region.to_ascii_uppercase())
        .map(String::as_str)
        .unwrap_or("")
}

/// True when `region` has a display name
pub fn is_known_region(region: &str) -> bool {
    !region_description(region).is_empty()
}

/// Timezones for the longest known prefix of an E.164 number.
///
/// Falls back to [`UNKNOWN_TIMEZONE`] when no prefix matches.
pub fn timezones_for_number(e164: &str) -> Vec<String> {
    match TIMEZONES.lookup(e164) {
        Some(zones) => zones.split('&').map(str::to_string).collect(),
        None => vec![UNKNOWN_TIMEZONE.to_string()],
    }
}

#[derive(Debug)]
pub enum PrefixDataError {
    Io { path: PathBuf, source: std::io::Error },
    Malformed { line: usize, content: String },
}

impl fmt::Display for PrefixDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixDataError::Io { path, source } => {
                write!(f, "Failed to read prefix data {}: {source}", path.display())
            }
            PrefixDataError::Malformed { line, content } => {
                write!(f, "Malformed entry on line {line}: {content:?}")
            }
        }
    }
}

impl Error for PrefixDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PrefixDataError::Io { source, .. } => Some(source),
            PrefixDataError::Malformed { .. } => None,
        }
    }
}

/// Parses `key|value` lines, skipping blanks and `#` comments.
pub fn parse_entries(content: &str) -> Result<Vec<(String, String)>, PrefixDataError> {
    let mut entries = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once('|')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| PrefixDataError::Malformed {
                line: idx + 1,
                content: raw.to_string(),
            })?;
        entries.push((key.trim().to_string(), value.trim().to_string()));
    }
    Ok(entries)
}

/// Longest-prefix map over the digits of E.164 numbers
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    prefixes: HashMap<String, String>,
    longest_prefix: usize,
}

impl PrefixTable {
    /// Adds `prefix|value` lines. Prefixes must be all digits.
    ///
    /// Later entries replace earlier ones for the same prefix.
    pub fn merge_str(&mut self, content: &str) -> Result<usize, PrefixDataError> {
        let entries = parse_entries(content)?;
        if let Some(bad) = entries
            .iter()
            .position(|(prefix, _)| !prefix.bytes().all(|b| b.is_ascii_digit()))
        {
            let (prefix, value) = &entries[bad];
            let line = content
                .lines()
                .position(|l| l.trim_start().starts_with(prefix.as_str()))
                .map_or(0, |idx| idx + 1);
            return Err(PrefixDataError::Malformed {
                line,
                content: format!("{prefix}|{value}"),
            });
        }

        let added = entries.len();
        for (prefix, value) in entries {
            self.longest_prefix = self.longest_prefix.max(prefix.len());
            self.prefixes.insert(prefix, value);
        }
        Ok(added)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Longest-prefix match. A leading `+` is ignored.
    ///
    /// Returns `None` when nothing matches or the match is empty.
    pub fn lookup(&self, e164: &str) -> Option<&str> {
        let digits = e164.trim_start_matches('+');
        let max = self.longest_prefix.min(digits.len());
        (1..=max)
            .rev()
            .filter_map(|len| digits.get(..len))
            .find_map(|prefix| self.prefixes.get(prefix))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Carrier names by E.164 prefix
#[derive(Debug, Clone, Default)]
pub struct CarrierTable {
    table: PrefixTable,
}

impl CarrierTable {
    /// Table compiled into the binary
    pub fn builtin() -> Self {
        let mut carriers = Self::default();
        if let Err(e) = carriers.merge_str(BUILTIN_CARRIERS) {
            debug!("Ignoring built-in carrier data: {}", e);
        }
        carriers
    }

    /// Built-in table with entries from `path` layered on top
    pub fn builtin_with_file(path: &Path) -> Result<Self, PrefixDataError> {
        let mut carriers = Self::builtin();
        let content = std::fs::read_to_string(path).map_err(|source| PrefixDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let added = carriers.merge_str(&content)?;
        info!("Loaded {} carrier prefixes from {}", added, path.display());
        Ok(carriers)
    }

    pub fn merge_str(&mut self, content: &str) -> Result<usize, PrefixDataError> {
        self.table.merge_str(content)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn lookup(&self, e164: &str) -> Option<&str> {
        self.table.lookup(e164)
    }
}
