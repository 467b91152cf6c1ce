use reqwest::{Client, Proxy, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientSettingError {
    #[error("Invalid proxy URL {url}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build client")]
    Build(#[source] reqwest::Error),
}

/// Transport settings for the shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct ClientSetting {
    pub proxies: Option<Vec<Url>>,
}

impl ClientSetting {
    pub fn with_proxies(mut self, proxies: Vec<Url>) -> Self {
        self.proxies = (!proxies.is_empty()).then_some(proxies);
        self
    }

    pub fn build(self) -> Result<Client, ClientSettingError> {
        self.proxies
            .into_iter()
            .flatten()
            .try_fold(Client::builder(), |cb, url| -> Result<_, ClientSettingError> {
                Ok(cb.proxy(proxy_for(&url)?))
            })?
            .build()
            .map_err(ClientSettingError::Build)
    }
}

/// `https` proxies only carry TLS traffic, every other scheme plain HTTP.
fn proxy_for(url: &Url) -> Result<Proxy, ClientSettingError> {
    let proxy = match url.scheme() {
        "https" => Proxy::https(url.as_str()),
        _ => Proxy::http(url.as_str()),
    };
    proxy.map_err(|source| ClientSettingError::Proxy {
        url: url.to_string(),
        source,
    })
}
