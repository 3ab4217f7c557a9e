//! # HTTP Management Client
//!
//! File: cli/src/common/client/http.rs
//!
//! ## Overview
//!
//! `reqwest`-based implementation of the management client. Endpoints, relative
//! to `http://{host}:{port}/rest/private`:
//!
//! - `POST portalobjects/{container}/import/parse` (archive bytes in, `ImportContext` out)
//! - `POST portalobjects/{container}/import` (`ImportContext` in)
//! - `GET  managed-components/{path}` (managed resource, negotiated via `Accept`)
//!
//! Requests use HTTP basic auth when a username is configured. Any non-2xx
//! answer becomes `MgmtClientError::Status`.
//!
use super::{ClientFactory, ImportContext, MgmtClientError, PortalObjectsMgmtClient};
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, Url};
use std::{path::Path, time::Duration};
use tracing::{debug, info};

const REST_ROOT: &str = "rest/private";
const ZIP_MEDIA_TYPE: &str = "application/zip";

/// A thin authenticated wrapper around `reqwest::Client` for one server.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base: Url,
    username: Option<String>,
    password: Option<String>,
}

impl RestClient {
    pub fn new(
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, MgmtClientError> {
        let base = Url::parse(&format!("http://{}:{}/", host, port))
            .map_err(|e| MgmtClientError::InvalidUrl(format!("{}:{} ({})", host, port, e)))?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("portal-mgmt/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base,
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        })
    }

    /// Builds `{base}/rest/private/{segments...}`, escaping each segment.
    pub fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url, MgmtClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| MgmtClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(REST_ROOT.split('/'))
            .extend(segments.into_iter().filter(|s| !s.is_empty()));
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.username {
            Some(user) => request.basic_auth(user, self.password.as_deref()),
            None => request,
        }
    }

    /// Fetches a managed resource below `managed-components`. Returns the
    /// response media type (if any) and the raw body.
    pub async fn fetch_resource(
        &self,
        path: &str,
        accept: &str,
    ) -> Result<(Option<String>, Vec<u8>), MgmtClientError> {
        let url = self.url(std::iter::once("managed-components").chain(path.split('/')))?;
        debug!("GET {} (Accept: {})", url, accept);
        let response = self
            .authorize(self.http.get(url))
            .header(header::ACCEPT, accept)
            .send()
            .await?;
        let response = check_status(response).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok((content_type, response.bytes().await?.to_vec()))
    }
}

async fn check_status(response: Response) -> Result<Response, MgmtClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(MgmtClientError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Management client for the portal objects of one portal container.
#[derive(Debug, Clone)]
pub struct HttpPortalObjectsClient {
    rest: RestClient,
    container: String,
}

impl HttpPortalObjectsClient {
    pub fn new(rest: RestClient, container: impl Into<String>) -> Self {
        Self {
            rest,
            container: container.into(),
        }
    }

    fn import_url(&self, tail: &[&str]) -> Result<Url, MgmtClientError> {
        if self.container.trim().is_empty() {
            return Err(MgmtClientError::InvalidUrl(
                "portal container name cannot be empty".to_string(),
            ));
        }
        let head = ["portalobjects", self.container.as_str(), "import"];
        self.rest.url(head.iter().chain(tail.iter()).copied())
    }
}

#[async_trait]
impl PortalObjectsMgmtClient for HttpPortalObjectsClient {
    async fn import_from_zip(&self, file: &Path) -> Result<ImportContext, MgmtClientError> {
        let archive = tokio::fs::read(file)
            .await
            .map_err(|source| MgmtClientError::Io {
                path: file.to_path_buf(),
                source,
            })?;
        let url = self.import_url(&["parse"])?;
        info!("Uploading {} ({} bytes) to {}", file.display(), archive.len(), url);

        let response = self
            .rest
            .authorize(self.rest.http.post(url))
            .header(header::CONTENT_TYPE, ZIP_MEDIA_TYPE)
            .body(archive)
            .send()
            .await?;
        let context = check_status(response).await?.json::<ImportContext>().await?;
        debug!(
            "Parsed archive: {} portal configs, {} pages, {} navigations",
            context.portal_configs().len(),
            context.pages().len(),
            context.navigations().len()
        );
        Ok(context)
    }

    async fn import_context(&self, context: &ImportContext) -> Result<(), MgmtClientError> {
        let url = self.import_url(&[])?;
        info!("Importing into {} (overwrite: {})", url, context.overwrite());
        let response = self
            .rest
            .authorize(self.rest.http.post(url))
            .json(context)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Creates `HttpPortalObjectsClient`s with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    pub timeout: Duration,
}

impl ClientFactory for HttpClientFactory {
    type Client = HttpPortalObjectsClient;

    fn create(
        &self,
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        container_name: &str,
    ) -> Result<Self::Client, MgmtClientError> {
        if container_name.trim().is_empty() {
            return Err(MgmtClientError::InvalidUrl(
                "portal container name cannot be empty".to_string(),
            ));
        }
        let rest = RestClient::new(host, port, username, password, self.timeout)?;
        Ok(HttpPortalObjectsClient::new(rest, container_name))
    }
}
