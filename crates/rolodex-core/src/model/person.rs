// ── Person ──
//
// A single directory record. Read-only once converted from the wire.

use serde::{Deserialize, Serialize};

use super::PersonId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zip: String,
    pub geo: Option<GeoPoint>,
}

impl Address {
    /// `"Kulas Light, Apt. 556, Gwenborough 92998-3874"`, skipping blanks.
    pub fn one_line(&self) -> String {
        let locality = [self.city.as_str(), self.zip.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        [self.street.as_str(), self.suite.as_str(), locality.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub catchphrase: String,
    /// Marketing tagline (`bs` on the wire).
    pub tagline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_address_joins_parts() {
        let address = Address {
            street: "Kulas Light".into(),
            suite: "Apt. 556".into(),
            city: "Gwenborough".into(),
            zip: "92998-3874".into(),
            geo: None,
        };
        assert_eq!(
            address.one_line(),
            "Kulas Light, Apt. 556, Gwenborough 92998-3874"
        );
    }

    #[test]
    fn one_line_address_skips_blanks() {
        let address = Address {
            city: "Gwenborough".into(),
            ..Address::default()
        };
        assert_eq!(address.one_line(), "Gwenborough");
        assert_eq!(Address::default().one_line(), "");
    }
}
