//! Pure transformations over scraped pages and link lists.
//!
//! Nothing in here performs I/O; the portal operations in
//! [`crate::effects`] feed fetched text and statuses through these functions.

mod group;
mod scrape;
mod validation;

pub use group::{Catalog, group_by_os, sort_links};
pub use scrape::{installer_links, parse_links};
pub use validation::{is_retryable, is_success};
