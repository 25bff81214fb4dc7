//! # http-facade
//!
//! http-facade is a thin, blocking HTTP client. Every call returns a [`Response`], whether the
//! server answered with a 200, a 404, or nothing at all. Callers look at the status code and
//! the body to decide what happened.
//!
//! ## Usage
//!
//! ```no_run
//! use http_facade::{ClientDefaults, Overrides, RequestClient};
//!
//! # fn main() -> http_facade::Result<()> {
//! let mut client = RequestClient::new(ClientDefaults::default());
//! client.set_default_headers(vec!["Accept: */*".to_string()]);
//! client.set_basic_auth(Some("user".to_string()), Some("secret".to_string()));
//!
//! let response = client.post(
//!     "http://httpbin.org/post",
//!     r#"{"id": 42}"#,
//!     &Overrides::default(),
//! )?;
//!
//! if response.code() == 200 {
//!     println!("{:?}", response.body_json());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Defaults
//!
//! Each client owns a [`ClientDefaults`]: content type (`application/json`), timeout (10
//! seconds), extra transport options, default header lines and default basic auth
//! credentials. Per-call [`Overrides`] win over the defaults; empty values fall back to them.
//!
//! Defaults can also be read from a JSON file:
//!
//! ```text,no_run
//! {
//!     "content_type": "application/xml",
//!     "timeout": 2.5,
//!     "headers": ["Accept: */*"],
//!     "basic_auth_user": "user",
//!     "basic_auth_password": "secret"
//! }
//! ```
//!
//! ### Listeners
//!
//! A [`Listener`] is told when a request starts and when it ends. The options it sees have
//! their `Authorization: Basic` lines replaced by `Authorization: Basic _removed_` whenever the
//! client has a default basic auth user. [`LogListener`] writes both events to the `log` facade.
//!
//! ## License
//! [Apache License 2.0](https://www.apache.org/licenses/LICENSE-2.0)

#[macro_use]
extern crate pest_derive;

pub mod client;
pub mod config;
pub mod http_client;
pub mod listener;
pub mod options;
pub mod parser;
pub mod response;

pub use client::RequestClient;
pub use config::{ClientDefaults, Overrides};
pub use http_client::reqwest::ReqwestHttpClient;
pub use http_client::{Fetched, HttpClient};
pub use listener::{Listener, LogListener};
pub use options::{HttpOptions, TransportOptions};
pub use response::Response;

pub type Result<T> = anyhow::Result<T>;
