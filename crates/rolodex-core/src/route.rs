// ── Navigation routes ──
//
// `/` is the list view, `/user/{id}` the detail view for one record.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::PersonId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Directory,
    Person(PersonId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown route: {0}")]
pub struct ParseRouteError(String);

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("/"),
            Self::Person(id) => write!(f, "/user/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        if path.is_empty() || path == "/" {
            return Ok(Self::Directory);
        }

        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["user", id] if !id.is_empty() => Ok(Self::Person(PersonId::from(*id))),
            _ => Err(ParseRouteError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Directory));
        assert_eq!("".parse::<Route>(), Ok(Route::Directory));
    }

    #[test]
    fn parses_person_route() {
        assert_eq!(
            "/user/7".parse::<Route>(),
            Ok(Route::Person(PersonId::Numeric(7)))
        );
        assert_eq!(
            "/user/abc/".parse::<Route>(),
            Ok(Route::Person(PersonId::Text("abc".into())))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert!("/users".parse::<Route>().is_err());
        assert!("/user/".parse::<Route>().is_err());
        assert!("/user/1/posts".parse::<Route>().is_err());
    }

    #[test]
    fn displays_as_path() {
        assert_eq!(Route::Directory.to_string(), "/");
        assert_eq!(Route::Person(PersonId::from(3)).to_string(), "/user/3");
    }
}
