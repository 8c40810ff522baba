// Wire types for the `/users` endpoint.
//
// Field names follow the remote JSON exactly (camelCase, `bs`, `zipcode`,
// string-typed coordinates). Everything except `id` and `name` defaults so
// a sparse record still decodes.

use serde::{Deserialize, Serialize};

/// Record identifier as sent by the server: usually a number, occasionally
/// a string on mock servers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: WireId,
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Option<WireAddress>,
    #[serde(default)]
    pub company: Option<WireCompany>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Option<WireGeo>,
}

/// Coordinates arrive as decimal strings (`"-37.3159"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireGeo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCompany {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}
