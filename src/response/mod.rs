use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http_client::Fetched;
use crate::parser::parse_status_code;


/// The outcome of one request.
///
/// A code of `0` means no status line could be read, usually because no server was reached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    body: String,
    header: Vec<String>,
    code: u16,
}

impl Response {
    pub fn new(body: String, header: Vec<String>, code: u16) -> Self {
        Response { body, header, code }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body into a JSON value with keys in document order.
    ///
    /// Decoded on every call. `None` when the body is not valid JSON.
    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Decodes the body into `T`, or `None` when it does not fit.
    pub fn body_json_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.body).ok()
    }

    /// The raw status line followed by the raw header lines.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Value of the first `name: value` header line, matching the name case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.header.iter().skip(1).find_map(|line| {
            let (field_name, field_value) = line.split_once(':')?;
            if field_name.trim().eq_ignore_ascii_case(name) {
                Some(field_value.trim())
            } else {
                None
            }
        })
    }

    pub fn code(&self) -> u16 {
        self.code
    }
}

impl From<Fetched> for Response {
    fn from(fetched: Fetched) -> Self {
        let Fetched { body, header } = fetched;
        let code = header
            .first()
            .and_then(|status_line| parse_status_code(status_line))
            .unwrap_or(0);

        Response {
            body: body.unwrap_or_default(),
            header,
            code,
        }
    }
}
