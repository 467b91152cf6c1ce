//! I/O against the portal: client construction, login, scraping, downloads.

mod client;
mod portal;

pub use client::{ClientSetting, ClientSettingError};
pub use portal::Portal;
