//! Plain data types shared by the portal operations.
//!
//! None of these types perform I/O. A [`Session`] can only be obtained from
//! a successful login, which keeps "log in before downloading" visible in
//! every signature that needs it.

pub mod credentials;
pub mod link;
pub mod options;
pub mod progress;

pub use credentials::{Credentials, CredentialsError, Session};
pub use link::{Link, Os, ParseOsError};
pub use options::PortalConfig;
pub use progress::Progress;
