use crate::http_client::{Error, ErrorKind, Fetched, HttpClient};
use crate::options::{HttpOptions, TransportOptions};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::USER_AGENT;
use reqwest::{Method, Version};

const USER_AGENT_OPTION: &str = "user_agent";

pub struct ReqwestHttpClient {
    client: Client,
}

impl Default for ReqwestHttpClient {
    /// Panics if the TLS backend cannot be initialized, like [`Client::new`].
    fn default() -> Self {
        ReqwestHttpClient {
            client: Client::new(),
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn fetch(&self, url: &str, options: &TransportOptions) -> Result<Fetched, Error> {
        let HttpOptions {
            method,
            header,
            content,
            timeout,
            ignore_errors,
            extra,
        } = &options.http;

        let method = Method::from_bytes(method.as_bytes()).map_err(|_| Error {
            kind: ErrorKind::InvalidMethod(method.clone()),
        })?;
        let mut request_builder = self.client.request(method, url);
        if !timeout.is_zero() {
            request_builder = request_builder.timeout(*timeout);
        }
        request_builder = set_headers(header, request_builder);
        if let Some(user_agent) = options.http.extra_str(USER_AGENT_OPTION) {
            request_builder = request_builder.header(USER_AGENT, user_agent);
        }
        for key in extra.keys().filter(|key| *key != USER_AGENT_OPTION) {
            log::trace!("Transport option not supported by reqwest: {}", key);
        }
        if !content.is_empty() {
            request_builder = request_builder.body(content.clone());
        }

        let response = request_builder.send()?;
        let status = response.status();
        let header = header_lines(&response);

        let body = if !ignore_errors && (status.is_client_error() || status.is_server_error()) {
            None
        } else {
            match response.text() {
                Ok(body) => Some(body),
                Err(e) => {
                    log::warn!("Failed reading response body from {}: {}", url, e);
                    None
                }
            }
        };

        Ok(Fetched { body, header })
    }
}

fn set_headers(headers: &[String], mut request_builder: RequestBuilder) -> RequestBuilder {
    for line in headers {
        match line.split_once(':') {
            Some((name, value)) => {
                request_builder = request_builder.header(name.trim(), value.trim());
            }
            None => log::warn!("Skipping header line without a name: {}", line),
        }
    }
    request_builder
}

fn header_lines(response: &Response) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        version_str(response.version()),
        response.status()
    )];
    for (name, value) in response.headers() {
        lines.push(format!(
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    lines
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/1.1",
    }
}
