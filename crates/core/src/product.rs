//! Product record and request body.
//!
//! [`Product`] is what the service returns; [`ProductBody`] is what the form
//! sends on create and update. The service assigns `id`, `create_date` and
//! `last_modify_date`, so the body never carries an `id`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DbId;

/// A product as returned by the service.
///
/// Deserialization is lenient: missing text fields decode as empty strings,
/// `available` is `true` only for a JSON `true`, and `like` keeps whatever
/// scalar the service sent as display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_available")]
    pub available: bool,
    #[serde(default, deserialize_with = "deserialize_like")]
    pub like: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default)]
    pub last_modify_date: String,
}

/// Body for `POST {base}` and `PUT {base}/{id}`.
///
/// Every field except `available` is the text the user typed. `like` is
/// sent as a string, the way the service has always received it from the
/// form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBody {
    pub name: String,
    pub category: String,
    pub available: bool,
    pub like: String,
    pub color: String,
    pub size: String,
    pub create_date: String,
    pub last_modify_date: String,
}

fn deserialize_available<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAvailable {
        Flag(bool),
        Other(IgnoredAny),
    }

    Ok(matches!(
        RawAvailable::deserialize(deserializer)?,
        RawAvailable::Flag(true)
    ))
}

fn deserialize_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLike {
        Count(i64),
        Real(f64),
        Flag(bool),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match RawLike::deserialize(deserializer)? {
        RawLike::Count(count) => count.to_string(),
        RawLike::Real(real) => real.to_string(),
        RawLike::Flag(flag) => flag.to_string(),
        RawLike::Text(text) => text,
        RawLike::Other(_) => String::new(),
    })
}
