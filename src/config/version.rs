//! Admin API version handling.
//!
//! Shopify ships a stable API release every quarter, named `YYYY-MM` with
//! the month being `01`, `04`, `07` or `10`. A release is supported for
//! roughly a year, after which requests against it are served by the oldest
//! supported version and flagged as deprecated.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Shopify Admin API version.
///
/// Versions order chronologically, with [`ApiVersion::Unstable`] sorting
/// after every release.
///
/// # Example
///
/// ```rust
/// use shopify_custom_collections::ApiVersion;
///
/// let version: ApiVersion = "2025-07".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_07);
/// assert!(version < ApiVersion::latest());
/// assert_eq!(ApiVersion::latest().to_string(), "2025-10");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApiVersion {
    /// A dated quarterly release.
    Release {
        /// Four-digit year.
        year: u16,
        /// Release month: 1, 4, 7 or 10.
        month: u8,
    },
    /// The unstable preview version.
    Unstable,
}

impl ApiVersion {
    pub const V2024_01: Self = Self::release(2024, 1);
    pub const V2024_04: Self = Self::release(2024, 4);
    pub const V2024_07: Self = Self::release(2024, 7);
    pub const V2024_10: Self = Self::release(2024, 10);
    pub const V2025_01: Self = Self::release(2025, 1);
    pub const V2025_04: Self = Self::release(2025, 4);
    pub const V2025_07: Self = Self::release(2025, 7);
    pub const V2025_10: Self = Self::release(2025, 10);

    const fn release(year: u16, month: u8) -> Self {
        Self::Release { year, month }
    }

    /// The newest stable release this crate targets.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// The oldest release Shopify still serves without deprecation.
    #[must_use]
    pub const fn minimum_supported() -> Self {
        Self::V2025_01
    }

    /// Returns `true` for dated releases.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::Release { .. })
    }

    /// Returns `true` for releases older than [`ApiVersion::minimum_supported`].
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.is_stable() && *self < Self::minimum_supported()
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { year, month } => write!(f, "{year:04}-{month:02}"),
            Self::Unstable => f.write_str("unstable"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "unstable" {
            return Ok(Self::Unstable);
        }

        let invalid = || ConfigError::InvalidApiVersion { version: s.clone() };

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        if !matches!(month, 1 | 4 | 7 | 10) {
            return Err(invalid());
        }

        Ok(Self::release(year, month))
    }
}
