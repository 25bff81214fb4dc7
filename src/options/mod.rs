use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::seconds;


const BASIC_AUTH_PREFIX: &str = "Authorization: Basic ";
const REDACTED_BASIC_AUTH: &str = "Authorization: Basic _removed_";

const RESERVED_KEYS: [&str; 5] = ["method", "header", "content", "timeout", "ignore_errors"];

/// The complete set of options handed to the transport for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransportOptions {
    pub http: HttpOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpOptions {
    /// Passed through verbatim, never validated here.
    pub method: String,
    pub header: Vec<String>,
    pub content: String,
    #[serde(with = "seconds")]
    pub timeout: Duration,
    pub ignore_errors: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HttpOptions {
    /// Layers the call fields over `defaults`. Keys of `defaults` that name a call field are
    /// dropped, so the call always wins.
    pub fn merge(
        defaults: &Map<String, Value>,
        method: &str,
        header: Vec<String>,
        content: &str,
        timeout: Duration,
    ) -> HttpOptions {
        let mut extra = defaults.clone();
        for key in RESERVED_KEYS.iter() {
            extra.remove(*key);
        }

        HttpOptions {
            method: method.to_string(),
            header,
            content: content.to_string(),
            timeout,
            ignore_errors: true,
            extra,
        }
    }

    /// Looks up a string valued extra option.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

/// Replaces the credentials of every `Authorization: Basic` header line.
pub fn redact_basic_auth(options: &mut HttpOptions) {
    for line in options.header.iter_mut() {
        if let Some(start) = line.find(BASIC_AUTH_PREFIX) {
            line.truncate(start);
            line.push_str(REDACTED_BASIC_AUTH);
        }
    }
}
