use std::path::{Path, PathBuf};

use reqwest::header::{CONTENT_LENGTH, COOKIE};
use reqwest::{Client, RequestBuilder, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::core::{Catalog, is_retryable, is_success, parse_links};
use crate::data::{Credentials, Link, PortalConfig, Session};
use crate::error::{FetchError, Result};
use crate::ui::{Reporting, Silent, TrackerBuilder};

/// Operations against the vendor download portal.
///
/// Every call after [`Portal::login`] takes the returned [`Session`]; the
/// portal itself keeps no authentication state.
#[derive(Debug, Clone)]
pub struct Portal {
    config: PortalConfig,
    client: Client,
}

impl Portal {
    pub fn new(config: PortalConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Log in with HTTP basic auth and capture the issued cookies.
    ///
    /// # Errors
    ///
    /// [`FetchError::LoginRejected`] on any non-2xx answer,
    /// [`FetchError::LoginTransport`] when the request itself fails.
    /// Neither is retried.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        tracing::debug!(url = %self.config.login_url, user = credentials.username(), "logging in");

        let response = self
            .client
            .post(&self.config.login_url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .send()
            .await
            .map_err(FetchError::LoginTransport)?;

        let status = response.status();
        if !is_success(status) {
            return Err(FetchError::LoginRejected(status));
        }

        let session = Session::from_cookies(
            response
                .cookies()
                .map(|c| (c.name().to_string(), c.value().to_string())),
        );
        tracing::debug!(cookies = session.cookies().len(), "logged in");
        println!("Logged In");
        Ok(session)
    }

    /// Scrape installer links from the download page.
    ///
    /// The portal sometimes answers with a page missing the installer list,
    /// so an empty result is retried up to [`PortalConfig::attempts`] times
    /// with no delay. Transport failures and retryable statuses consume an
    /// attempt the same way; any other non-2xx status aborts immediately.
    /// The first attempt that yields links wins.
    pub async fn fetch_links(&self, session: &Session) -> Result<Vec<Link>> {
        tracing::debug!(url = %self.config.page_url, "getting links from the page");
        let attempts = self.config.attempts();
        let mut last_error = None;
        let mut last_status = None;

        for attempt in 0..attempts {
            let response = match self.get(&self.config.page_url, session).send().await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        "Attempt #{attempt} to get links list from download page failed, retrying..."
                    );
                    last_error = Some(e);
                    continue;
                }
            };

            let status = response.status();
            if !is_success(status) {
                if !is_retryable(status) {
                    return Err(FetchError::PageRejected(status));
                }
                tracing::warn!(
                    attempt,
                    %status,
                    "Attempt #{attempt} to get links list from download page failed, retrying..."
                );
                last_status = Some(status);
                continue;
            }

            let page = match response.text().await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        "Attempt #{attempt} to read the download page failed, retrying..."
                    );
                    last_error = Some(e);
                    continue;
                }
            };

            let links = parse_links(&page, &self.config.link_prefix);
            if !links.is_empty() {
                tracing::debug!(count = links.len(), "links from the page are extracted");
                return Ok(links);
            }
            tracing::warn!(
                attempt,
                "Attempt #{attempt} to get links list from download page failed, \
                 server has returned an empty page, retrying..."
            );
        }

        Err(FetchError::NoLinks {
            attempts,
            source: last_error,
            last_status,
        })
    }

    /// [`Portal::fetch_links`], sorted.
    pub async fn catalog(&self, session: &Session) -> Result<Catalog> {
        let links = self.fetch_links(session).await?;
        Ok(Catalog::new(self.config.link_prefix.clone(), links))
    }

    /// Download `link` into `destination_folder` without progress output.
    pub async fn download(
        &self,
        session: &Session,
        link: &Link,
        destination_folder: &Path,
    ) -> Result<PathBuf> {
        self.download_with(session, link, destination_folder, Silent)
            .await
    }

    /// Stream `link` to `destination_folder/<file name>`, reporting each
    /// chunk to the tracker built from `tracker`.
    ///
    /// An existing file at the target path is overwritten. The tracker is
    /// finished on every exit path; a partially written file is left behind
    /// when the transfer fails.
    pub async fn download_with<B: TrackerBuilder>(
        &self,
        session: &Session,
        link: &Link,
        destination_folder: &Path,
        tracker: B,
    ) -> Result<PathBuf> {
        let file_name = link.file_name();
        if file_name.is_empty() {
            return Err(FetchError::FileName(link.to_string()));
        }
        let path = destination_folder.join(file_name);
        tracing::info!(url = %link, path = %path.display(), "Downloading file");

        let transport = |source| FetchError::DownloadTransport {
            url: link.to_string(),
            source,
        };
        let mut response = self
            .get(link.as_str(), session)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !is_success(status) {
            return Err(FetchError::DownloadRejected {
                url: link.to_string(),
                status,
            });
        }

        let mut reporting = Reporting::new(tracker.build(content_length(&response))?);

        let io_error = |source| FetchError::Io {
            path: path.clone(),
            source,
        };
        let mut file = File::create(&path).await.map_err(io_error)?;

        while let Some(chunk) = response.chunk().await.map_err(transport)? {
            file.write_all(&chunk).await.map_err(io_error)?;
            reporting.step(chunk.len() as u64);
        }
        file.flush().await.map_err(io_error)?;

        Ok(path)
    }

    fn get(&self, url: &str, session: &Session) -> RequestBuilder {
        let request = self.client.get(url);
        match session.cookie_header() {
            Some(cookies) => request.header(COOKIE, cookies),
            None => request,
        }
    }
}

/// Declared body length, `None` if the header is missing or not a number.
fn content_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}
