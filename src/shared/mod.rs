//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── MarketSymbol ────────────────────────────────────────────────────────────

/// Newtype for market symbols (e.g. `"SOL-USD"`).
///
/// Deserialization is lenient (any string the backend sends is kept as-is);
/// use [`MarketSymbol::parse`] to validate user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketSymbol(String);

impl MarketSymbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse a `BASE-QUOTE` symbol.
    ///
    /// Both legs must be 3–10 characters of ASCII uppercase letters or digits.
    pub fn parse(s: &str) -> Result<Self, SymbolError> {
        let mut parts = s.split('-');
        let (base, quote) = match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) => (base, quote),
            _ => return Err(SymbolError::Format(s.to_string())),
        };
        for leg in [base, quote] {
            if !is_valid_leg(leg) {
                return Err(SymbolError::Asset(leg.to_string()));
            }
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base asset (left of the dash), if the symbol has one.
    pub fn base(&self) -> Option<&str> {
        self.0.split_once('-').map(|(base, _)| base)
    }

    /// The quote asset (right of the dash), if the symbol has one.
    pub fn quote(&self) -> Option<&str> {
        self.0.split_once('-').map(|(_, quote)| quote)
    }

    /// Human-readable pair label, e.g. `"SOL / USD"`.
    pub fn display_pair(&self) -> String {
        self.0.replace('-', " / ")
    }
}

fn is_valid_leg(leg: &str) -> bool {
    (3..=10).contains(&leg.len())
        && leg
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

impl fmt::Display for MarketSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MarketSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MarketSymbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for MarketSymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MarketSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarketSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MarketSymbol(s))
    }
}

/// Why a market symbol failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    Format(String),
    Asset(String),
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::Format(s) => write!(f, "expected BASE-QUOTE, got {s:?}"),
            SymbolError::Asset(leg) => write!(f, "invalid asset code {leg:?}"),
        }
    }
}

impl std::error::Error for SymbolError {}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Buy => "Buy",
            Side::Sell => "Sell",
        })
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Number of significant fractional digits (trailing zeros ignored).
pub fn fractional_digits(value: Decimal) -> u32 {
    value.normalize().scale()
}
