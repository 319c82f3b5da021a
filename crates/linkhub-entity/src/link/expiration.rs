//! Expiration option policy for shared links.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Duration preset selected at link creation.
///
/// Parsing is deliberately infallible: an unrecognized option falls back to
/// [`ExpirationOption::OneDay`] instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpirationOption {
    /// Two hours from creation.
    #[serde(rename = "2h")]
    TwoHours,
    /// Twenty-four hours from creation. The default.
    #[serde(rename = "1d")]
    OneDay,
    /// Seven days from creation.
    #[serde(rename = "1w")]
    OneWeek,
    /// Thirty days from creation.
    #[serde(rename = "1m")]
    OneMonth,
    /// Caller-supplied absolute expiry instant.
    Custom,
}

impl ExpirationOption {
    /// Parse an option string, falling back to `OneDay` for anything
    /// unrecognized.
    pub fn parse(s: &str) -> Self {
        match s {
            "2h" => Self::TwoHours,
            "1d" => Self::OneDay,
            "1w" => Self::OneWeek,
            "1m" => Self::OneMonth,
            "custom" => Self::Custom,
            _ => Self::OneDay,
        }
    }
}

impl Default for ExpirationOption {
    fn default() -> Self {
        Self::OneDay
    }
}

impl fmt::Display for ExpirationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TwoHours => "2h",
            Self::OneDay => "1d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
            Self::Custom => "custom",
        };
        write!(f, "{s}")
    }
}
