use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::config::{ClientDefaults, Overrides};
use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{Fetched, HttpClient};
use crate::listener::Listener;
use crate::options::{redact_basic_auth, HttpOptions, TransportOptions};
use crate::response::Response;
use crate::Result;


/// A blocking HTTP client that never fails on network outcomes.
///
/// Timeouts, refused connections and error statuses all come back as a [`Response`]; only a
/// failing [`Listener`] turns a call into an `Err`. A client is not meant to be shared between
/// threads.
pub struct RequestClient {
    defaults: ClientDefaults,
    listeners: Vec<Box<dyn Listener>>,
    http_client: Box<dyn HttpClient>,
}

impl Default for RequestClient {
    fn default() -> Self {
        Self::new(ClientDefaults::default())
    }
}

impl RequestClient {
    pub fn new(defaults: ClientDefaults) -> Self {
        Self::with_http_client(defaults, Box::new(ReqwestHttpClient::default()))
    }

    pub fn with_http_client(defaults: ClientDefaults, http_client: Box<dyn HttpClient>) -> Self {
        RequestClient {
            defaults,
            listeners: vec![],
            http_client,
        }
    }

    pub fn defaults(&self) -> &ClientDefaults {
        &self.defaults
    }

    pub fn set_default_timeout(&mut self, timeout: Duration) {
        self.defaults.timeout = timeout;
    }

    pub fn set_default_transport_options(&mut self, transport_options: Map<String, Value>) {
        self.defaults.transport_options = transport_options;
    }

    pub fn set_default_headers(&mut self, headers: Vec<String>) {
        self.defaults.headers = headers;
    }

    pub fn set_default_content_type(&mut self, content_type: impl Into<String>) {
        self.defaults.content_type = content_type.into();
    }

    /// Replaces both default credentials at once.
    pub fn set_basic_auth(&mut self, user: Option<String>, password: Option<String>) {
        self.defaults.basic_auth_user = user;
        self.defaults.basic_auth_password = password;
    }

    pub fn add_listener<L: Listener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Default header lines, then `Content-Type`, then `Authorization` when both a user and a
    /// password resolve.
    pub fn build_headers(
        &self,
        content_type: Option<&str>,
        auth_user: Option<&str>,
        auth_password: Option<&str>,
    ) -> Vec<String> {
        let mut header = self.defaults.headers.clone();

        let content_type = non_empty(content_type).unwrap_or(self.defaults.content_type.as_str());
        header.push(format!("Content-Type: {}", content_type));

        let user = non_empty(auth_user).or(self.defaults.basic_auth_user.as_deref());
        let password = non_empty(auth_password).or(self.defaults.basic_auth_password.as_deref());
        if let (Some(user), Some(password)) = (user, password) {
            let credentials = STANDARD.encode(format!("{}:{}", user, password));
            header.push(format!("Authorization: Basic {}", credentials));
        }

        header
    }

    pub fn build_http_options(
        &self,
        method: &str,
        header: Vec<String>,
        content: &str,
        timeout: Option<Duration>,
    ) -> HttpOptions {
        let timeout = timeout
            .filter(|timeout| !timeout.is_zero())
            .unwrap_or(self.defaults.timeout);

        HttpOptions::merge(
            &self.defaults.transport_options,
            method,
            header,
            content,
            timeout,
        )
    }

    pub fn request(
        &self,
        method: &str,
        url: &str,
        content: &str,
        overrides: &Overrides,
    ) -> Result<Response> {
        let header = self.build_headers(
            overrides.content_type.as_deref(),
            overrides.auth_user.as_deref(),
            overrides.auth_password.as_deref(),
        );
        let http = self.build_http_options(method, header, content, overrides.timeout);

        self.fire(url, TransportOptions { http })
    }

    /// Sends no body and always uses the default content type.
    pub fn get(&self, url: &str, overrides: &Overrides) -> Result<Response> {
        self.request("GET", url, "", &without_content_type(overrides))
    }

    pub fn post(&self, url: &str, content: &str, overrides: &Overrides) -> Result<Response> {
        self.request("POST", url, content, overrides)
    }

    pub fn put(&self, url: &str, content: &str, overrides: &Overrides) -> Result<Response> {
        self.request("PUT", url, content, overrides)
    }

    pub fn delete(&self, url: &str, content: &str, overrides: &Overrides) -> Result<Response> {
        self.request("DELETE", url, content, overrides)
    }

    /// Issues a `GET`, not a `HEAD`.
    pub fn head(&self, url: &str, overrides: &Overrides) -> Result<Response> {
        self.request("GET", url, "", &without_content_type(overrides))
    }

    fn fire(&self, url: &str, options: TransportOptions) -> Result<Response> {
        let id: u32 = rand::random();

        self.notify_start(id, url, &options)?;

        log::debug!("Firing {} {} ({})", options.http.method, url, id);
        let fetched = match self.http_client.fetch(url, &options) {
            Ok(fetched) => fetched,
            Err(e) => {
                log::warn!("Request to {} failed: {}", url, e);
                Fetched::default()
            }
        };

        self.notify_end(id)?;

        Ok(fetched.into())
    }

    fn notify_start(&self, id: u32, url: &str, options: &TransportOptions) -> Result<()> {
        if self.listeners.is_empty() {
            return Ok(());
        }

        let mut copy = options.clone();
        // Keyed on the default user, not on what this call actually sends.
        if non_empty(self.defaults.basic_auth_user.as_deref()).is_some() {
            redact_basic_auth(&mut copy.http);
        }

        for listener in &self.listeners {
            listener.request_start(id, url, &copy)?;
        }
        Ok(())
    }

    fn notify_end(&self, id: u32) -> Result<()> {
        for listener in &self.listeners {
            listener.request_end(id)?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn without_content_type(overrides: &Overrides) -> Overrides {
    Overrides {
        content_type: None,
        ..overrides.clone()
    }
}
