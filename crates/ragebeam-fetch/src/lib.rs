//! Login, installer discovery and streamed downloads for the vendor portal.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Plain types: credentials, session, links, configuration
//! - [`core`] - Pure transformations over scraped pages and link lists
//! - [`effects`] - HTTP operations against the portal
//!
//! Terminal progress rendering lives in [`ui`].
//!
//! # Flow
//!
//! ```no_run
//! use ragebeam_fetch::{ClientSetting, Credentials, Os, Portal, PortalConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ClientSetting::default().build()?;
//! let portal = Portal::new(PortalConfig::default(), client);
//! let credentials: Credentials = "user:secret".parse().expect("credentials");
//!
//! let session = portal.login(&credentials).await?;
//! let catalog = portal.catalog(&session).await?;
//! if let Some(linux) = catalog.for_os(Os::Linux) {
//!     portal.download(&session, &linux[0], "/tmp".as_ref()).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
pub mod ui;

mod error;

pub use reqwest::{StatusCode, Url};

pub use self::core::Catalog;
pub use self::data::{
    Credentials, CredentialsError, Link, Os, ParseOsError, PortalConfig, Progress, Session,
};
pub use self::effects::{ClientSetting, ClientSettingError, Portal};
pub use self::error::{FetchError, Phase, Result};
pub use self::ui::{
    BarTracker, BarTrackerBuilder, LineTracker, LineTrackerBuilder, Reporting, Silent, Tracker,
    TrackerBuilder,
};
