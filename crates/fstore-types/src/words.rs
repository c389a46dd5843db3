use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Direction of a frequent-word ranking.
///
/// `Dsc` is the natural ranking (most frequent first). `Asc` is the reverse of
/// the complete descending ranking, so truncating it yields the least
/// frequent tokens, least frequent first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Dsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Dsc => "dsc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "dsc" => Ok(Self::Dsc),
            other => Err(TypeError::InvalidSortOrder(other.to_string())),
        }
    }
}

/// A token and the number of times it occurs across the store.
///
/// Serialized as a two-element JSON array, `["token", count]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency(pub String, pub u64);

impl WordFrequency {
    pub fn new(token: impl Into<String>, count: u64) -> Self {
        Self(token.into(), count)
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_is_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Dsc);
    }

    #[test]
    fn order_parses_wire_names() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("dsc".parse::<SortOrder>().unwrap(), SortOrder::Dsc);
        assert!("desc".parse::<SortOrder>().is_err());
    }

    #[test]
    fn order_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        let parsed: SortOrder = serde_json::from_str("\"dsc\"").unwrap();
        assert_eq!(parsed, SortOrder::Dsc);
    }

    #[test]
    fn frequency_is_a_json_pair() {
        let wf = WordFrequency::new("x", 2);
        assert_eq!(serde_json::to_string(&wf).unwrap(), "[\"x\",2]");
        let parsed: WordFrequency = serde_json::from_str("[\"y\",1]").unwrap();
        assert_eq!(parsed.token(), "y");
        assert_eq!(parsed.count(), 1);
    }
}
