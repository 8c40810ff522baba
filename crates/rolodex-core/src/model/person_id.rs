// ── Record identity ──
//
// The remote directory uses numeric ids, but path parameters arrive as
// text and some mock servers hand out string ids. PersonId unifies both
// behind one type that round-trips through its textual form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a directory record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonId {
    Numeric(u64),
    Text(String),
}

impl PersonId {
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for PersonId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<u64> for PersonId {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        // "007" stays textual so Display gives back exactly what was parsed.
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => Self::Numeric(n),
            _ => Self::Text(s),
        }
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_becomes_numeric() {
        assert_eq!(PersonId::from("7"), PersonId::Numeric(7));
    }

    #[test]
    fn non_numeric_text_stays_text() {
        assert_eq!(PersonId::from("abc"), PersonId::Text("abc".into()));
    }

    #[test]
    fn leading_zeros_round_trip() {
        let id = PersonId::from("007");
        assert_eq!(id, PersonId::Text("007".into()));
        assert_eq!(id.to_string(), "007");
    }

    #[test]
    fn numeric_and_parsed_ids_are_equal() {
        let parsed: PersonId = "12".parse().unwrap_or(PersonId::Numeric(0));
        assert_eq!(parsed, PersonId::from(12));
        assert_eq!(parsed.as_numeric(), Some(12));
    }
}
