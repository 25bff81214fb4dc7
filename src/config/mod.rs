use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Result;


pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The configuration a [`RequestClient`](crate::RequestClient) falls back on for every call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientDefaults {
    pub content_type: String,
    #[serde(with = "seconds")]
    pub timeout: Duration,
    /// Arbitrary options merged into the `http` section of every request.
    pub transport_options: Map<String, Value>,
    /// Raw `Name: value` lines put in front of every request's headers.
    pub headers: Vec<String>,
    pub basic_auth_user: Option<String>,
    pub basic_auth_password: Option<String>,
}

impl Default for ClientDefaults {
    fn default() -> Self {
        ClientDefaults {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            transport_options: Map::new(),
            headers: vec![],
            basic_auth_user: None,
            basic_auth_password: None,
        }
    }
}

impl ClientDefaults {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed parsing client defaults")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = read_to_string(path)
            .with_context(|| format!("Failed opening defaults file: {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Invalid defaults file: {:?}", path))
    }
}

/// Per-call values for [`RequestClient::request`](crate::RequestClient::request).
///
/// Anything left unset, an empty string, or a zero timeout resolves to the client's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub content_type: Option<String>,
    pub timeout: Option<Duration>,
    pub auth_user: Option<String>,
    pub auth_password: Option<String>,
}

impl Overrides {
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn auth_user(mut self, user: impl Into<String>) -> Self {
        self.auth_user = Some(user.into());
        self
    }

    pub fn auth_password(mut self, password: impl Into<String>) -> Self {
        self.auth_password = Some(password.into());
        self
    }

    pub fn basic_auth(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth_user(user).auth_password(password)
    }
}

/// Durations as a JSON number of seconds.
pub(crate) mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    /// Whole seconds are written as integers.
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        if duration.subsec_nanos() == 0 {
            serializer.serialize_u64(duration.as_secs())
        } else {
            serializer.serialize_f64(duration.as_secs_f64())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|e| {
            serde::de::Error::custom(format!("Invalid timeout {}: {}", secs, e))
        })
    }
}
