use crate::{response, Error};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Deserializes a value that may be missing or `null` into its default.
pub fn deserialize_optional<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserializes a list that the backend stores either as a JSON array or as a
/// JSON-encoded string of an array.
///
/// Absent, `null`, and undecodable values all yield an empty list.
pub fn deserialize_string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Seq(Vec<String>),
        Encoded(String),
    }

    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Seq(v)) => Ok(v),
        Some(Value::Encoded(v)) => Ok(serde_json::from_str(&v).unwrap_or_default()),
        None => Ok(Vec::new()),
    }
}

#[async_trait]
pub trait ResponseExt {
    async fn parse<T: DeserializeOwned>(self) -> Result<T, Error>;
    async fn parse_empty(self) -> Result<(), Error>;
}

#[async_trait]
impl ResponseExt for reqwest::Response {
    async fn parse<T: DeserializeOwned>(self) -> Result<T, Error> {
        if self.status().is_success() {
            Ok(self.json().await?)
        } else {
            let e = self.json::<response::Error>().await?;
            Err(e.into())
        }
    }

    async fn parse_empty(self) -> Result<(), Error> {
        if self.status().is_success() {
            Ok(())
        } else {
            let e = self.json::<response::Error>().await?;
            Err(e.into())
        }
    }
}
