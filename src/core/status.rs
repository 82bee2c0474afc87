//! Redirect status codes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// HTTP redirect status code (always a 3xx value).
///
/// Parsed once when a record is constructed, so emitters never compare
/// string and numeric forms again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 301 Moved Permanently.
    pub const PERMANENT: Self = Self(301);
    /// 302 Found.
    pub const TEMPORARY: Self = Self(302);

    /// Create from a numeric code. Returns `None` outside 300..=399.
    pub const fn new(code: u16) -> Option<Self> {
        if code >= 300 && code <= 399 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Parse a textual status (`"301"`, `" 302 "`, `"301.0"`).
    ///
    /// Empty input yields the permanent default. Anything else that is not
    /// a 3xx code yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Self::PERMANENT);
        }
        let digits = trimmed.strip_suffix(".0").unwrap_or(trimmed);
        digits.parse::<u16>().ok().and_then(Self::new)
    }

    /// Parse with fallback to permanent. The flag reports whether fallback happened.
    pub fn parse_or_default(raw: &str) -> (Self, bool) {
        match Self::parse(raw) {
            Some(code) => (code, false),
            None => (Self::PERMANENT, true),
        }
    }

    #[cfg(test)]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Only 301 counts as permanent for emitted platform configs.
    #[inline]
    pub const fn is_permanent(self) -> bool {
        self.0 == Self::PERMANENT.0
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::PERMANENT
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Accepts both `301` and `"301"`.
impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Text(String),
        }

        let parsed = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::new(n),
            Raw::Text(s) => Self::parse(&s),
        };
        parsed.ok_or_else(|| serde::de::Error::custom("expected a 3xx redirect status code"))
    }
}
