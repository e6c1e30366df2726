use serde::{Deserialize, Serialize};

// ============ User Record ============

/// A user record as exchanged with the `/users` resource.
///
/// Only `name`, `email` and `phone` are required by the form layer; everything
/// else may be absent on the wire. Absent fields are omitted when serializing.
/// `null` or missing optional fields deserialize as `None`; the three required
/// strings deserialize as empty instead.
///
/// The `id` is assigned by the server. Clients never set it; it is only echoed
/// back by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned identifier, absent until the record is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Full name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Login handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Email address.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Phone number, free form.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    /// Website host (without scheme).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Employer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Required string fields tolerate `null` on the wire.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Postal address group of a [`UserRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Coordinates, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

/// Coordinates of an [`Address`]. The API encodes both as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
}

/// Company group of a [`UserRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

impl UserRecord {
    /// Display label used in logs and confirmation prompts.
    pub fn label(&self) -> String {
        match self.id {
            Some(id) => format!("#{id} {}", self.name),
            None => self.name.clone(),
        }
    }
}

// ============ Client Configuration ============

/// Default base URL of the public user directory.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
/// Default request timeout (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpUserDirectory`](crate::HttpUserDirectory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without the `/users` suffix. A trailing `/` is ignored.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Base URL with trailing slashes removed.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(1));
        assert_eq!(record.username.as_deref(), Some("Bret"));
        let address = record.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Gwenborough"));
        assert_eq!(address.geo.unwrap().lng.as_deref(), Some("81.1496"));
        let company = record.company.unwrap();
        assert_eq!(
            company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
    }

    #[test]
    fn deserialize_sparse_record() {
        let record: UserRecord = serde_json::from_str(r#"{"name":"A","phone":null}"#).unwrap();
        assert_eq!(record.name, "A");
        assert_eq!(record.id, None);
        assert_eq!(record.phone, "");
        assert_eq!(record.email, "");
        assert!(record.address.is_none());
    }

    #[test]
    fn serialize_omits_absent_fields() {
        let record = UserRecord {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: Some(Company {
                catch_phrase: Some("x".to_string()),
                ..Company::default()
            }),
            ..UserRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("website").is_none());
        assert_eq!(value["company"]["catchPhrase"], "x");
        assert!(value["company"].get("name").is_none());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new("http://localhost:3000//");
        assert_eq!(config.normalized_base_url(), "http://localhost:3000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn label_includes_id_when_present() {
        let mut record = UserRecord {
            name: "Ervin".to_string(),
            ..UserRecord::default()
        };
        assert_eq!(record.label(), "Ervin");
        record.id = Some(2);
        assert_eq!(record.label(), "#2 Ervin");
    }
}
