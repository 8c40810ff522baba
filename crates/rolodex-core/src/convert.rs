// ── API-to-domain type conversions ──
//
// Bridges raw `rolodex_api` wire types into canonical `rolodex_core::model`
// types. Missing nested objects become empty defaults; coordinates that
// fail to parse are dropped rather than failing the whole record.

use rolodex_api::{User, WireAddress, WireCompany, WireGeo, WireId};

use crate::model::{Address, Company, GeoPoint, Person, PersonId};

// ── Helpers ────────────────────────────────────────────────────────

/// Both halves must parse, otherwise the point is meaningless.
fn parse_geo(geo: Option<WireGeo>) -> Option<GeoPoint> {
    let geo = geo?;
    let latitude = geo.lat.trim().parse::<f64>().ok()?;
    let longitude = geo.lng.trim().parse::<f64>().ok()?;
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

// ── Conversions ────────────────────────────────────────────────────

impl From<WireId> for PersonId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => PersonId::Numeric(n),
            WireId::Text(s) => PersonId::from(s),
        }
    }
}

impl From<WireAddress> for Address {
    fn from(a: WireAddress) -> Self {
        Address {
            street: a.street,
            suite: a.suite,
            city: a.city,
            zip: a.zipcode,
            geo: parse_geo(a.geo),
        }
    }
}

impl From<WireCompany> for Company {
    fn from(c: WireCompany) -> Self {
        Company {
            name: c.name,
            catchphrase: c.catch_phrase,
            tagline: c.bs,
        }
    }
}

impl From<User> for Person {
    fn from(u: User) -> Self {
        Person {
            id: u.id.into(),
            name: u.name,
            username: u.username,
            email: u.email,
            phone: u.phone,
            website: u.website,
            address: u.address.map(Address::from).unwrap_or_default(),
            company: u.company.map(Company::from).unwrap_or_default(),
        }
    }
}
