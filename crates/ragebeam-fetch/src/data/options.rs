/// Portal endpoints and scraping limits.
///
/// # Examples
///
/// ```
/// use ragebeam_fetch::PortalConfig;
///
/// let config = PortalConfig::default()
///     .with_page_url("https://mirror.example.com/download.html")
///     .with_max_attempts(3);
/// assert_eq!(config.max_attempts, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Endpoint receiving the basic-auth login POST.
    pub login_url: String,

    /// Product page listing the installers.
    pub page_url: String,

    /// Only `data-link` values starting with this prefix are installers.
    pub link_prefix: String,

    /// Total fetch+parse cycles before giving up on an empty page.
    ///
    /// Default: 15
    pub max_attempts: u32,
}

pub const DEFAULT_LOGIN_URL: &str = "https://login.splunk.com/page/checkauth";
pub const DEFAULT_PAGE_URL: &str = "https://www.splunk.com/en_us/download/splunk-enterprise.html";
pub const DEFAULT_LINK_PREFIX: &str = "https://download.splunk.com/products/splunk/releases";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PortalConfig {
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = url.into();
        self
    }

    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page_url = url.into();
        self
    }

    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Attempt budget actually used; a zero budget still makes one attempt.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
