use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use ragebeam_fetch::data::options::{
    DEFAULT_LINK_PREFIX, DEFAULT_LOGIN_URL, DEFAULT_MAX_ATTEMPTS, DEFAULT_PAGE_URL,
};
use ragebeam_fetch::{Credentials, Os, PortalConfig, Url};

use crate::error::CliError;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "ragebeam",
    version = env!("CARGO_PKG_VERSION"),
    about,
    long_about = None,
    override_usage = "ragebeam [OPTIONS] <USERNAME:PASSWORD> [windows|linux|solaris|freebsd|macos|aix] <DESTINATION>"
)]
pub struct App {
    /// Portal account
    #[arg(value_name = "USERNAME:PASSWORD")]
    pub credentials: Credentials,

    /// Optional operating system filter, then the destination folder
    #[arg(value_name = "TARGET", num_args = 1..=2, required = true)]
    pub targets: Vec<String>,

    #[arg(long, value_name = "URL", default_value = DEFAULT_LOGIN_URL)]
    pub login_url: String,

    #[arg(long, value_name = "URL", default_value = DEFAULT_PAGE_URL)]
    pub page_url: String,

    #[arg(long, value_name = "URL", default_value = DEFAULT_LINK_PREFIX)]
    pub link_prefix: String,

    /// Page fetches before giving up on an empty installer list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: u32,

    /// Route requests through a proxy; may be repeated
    #[arg(long = "proxy", value_name = "URL")]
    pub proxies: Vec<Url>,

    #[arg(long, value_enum, default_value_t = ProgressMode::Line)]
    pub progress: ProgressMode,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProgressMode {
    /// Single rewritten status line
    Line,
    /// Progress bar
    Bar,
    #[value(name = "none")]
    Quiet,
}

impl App {
    /// Split the positional tail into the optional OS and the destination.
    pub fn target(&self) -> Result<(Option<Os>, PathBuf), CliError> {
        if let [os, destination] = self.targets.as_slice() {
            return Ok((Some(os.parse()?), PathBuf::from(destination)));
        }
        let destination = self.targets.last().map(PathBuf::from).unwrap_or_default();
        Ok((None, destination))
    }

    pub fn portal_config(&self) -> PortalConfig {
        PortalConfig::default()
            .with_login_url(&self.login_url)
            .with_page_url(&self.page_url)
            .with_link_prefix(&self.link_prefix)
            .with_max_attempts(self.attempts)
    }
}
