// API module: a small blocking HTTP client that talks to the address
// generator service. One endpoint, one request per process run, kept
// synchronous on purpose.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Path of the source-update endpoint on the receiving service.
const UPDATE_SOURCE_PATH: &str = "/address/update_source";

/// The form-encoded body of an upload: the shared secret plus the full
/// contents of the caller's source file. Built once, sent once,
/// discarded.
#[derive(Serialize, Deserialize, Debug)]
pub struct UploadPayload {
    pub passkey: String,
    pub data: String,
}

impl UploadPayload {
    /// Read `source_file` eagerly into memory and pair it with the
    /// passkey. Any file-access problem (missing file, permissions,
    /// non-UTF-8 contents) surfaces here, before a socket is opened.
    pub fn from_file(passkey: &str, source_file: &Path) -> Result<Self> {
        let data = fs::read_to_string(source_file)
            .with_context(|| format!("Failed to read source file {}", source_file.display()))?;
        Ok(UploadPayload {
            passkey: passkey.to_string(),
            data,
        })
    }
}

/// Build the target URL from the caller-supplied host. The host string
/// is used verbatim: no normalization, no scheme or port checks.
pub fn endpoint_url(host: &str) -> String {
    format!("http://{}{}", host, UPDATE_SOURCE_PATH)
}

/// Client wrapper holding the reqwest blocking client and the target
/// host of the service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    host: String,
}

impl ApiClient {
    pub fn new(host: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            host: host.to_string(),
        })
    }

    /// POST the payload as `application/x-www-form-urlencoded` and
    /// return the raw response. The status code is deliberately not
    /// inspected: the service answers 401 on a bad passkey and the
    /// caller prints that response the same way as a 200. Transport
    /// failures (DNS, refused connection) are the only errors here.
    pub fn upload(&self, payload: &UploadPayload) -> Result<Response> {
        let url = endpoint_url(&self.host);
        let res = self
            .client
            .post(&url)
            .form(payload)
            .send()
            .with_context(|| format!("Failed to send upload request to {}", url))?;
        Ok(res)
    }
}
