use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// URL of one installer artifact as scraped from the download page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Link(String);

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything after the last `/`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Operating system segment of the URL.
    ///
    /// The part after `prefix` is split on `/` and the second-to-last
    /// segment is taken, so `<prefix>/9.1.2/linux/splunk.tgz` yields `linux`.
    /// Returns an empty string when there are fewer than two segments.
    pub fn os_id(&self, prefix: &str) -> &str {
        let rest = self.0.strip_prefix(prefix).unwrap_or(&self.0);
        rest.rsplit('/').nth(1).unwrap_or_default()
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Link {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Operating systems the portal publishes installers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Linux,
    Solaris,
    Freebsd,
    Macos,
    Aix,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operating system `{0}`, expected one of windows, linux, solaris, freebsd, macos, aix")]
pub struct ParseOsError(pub String);

impl Os {
    pub const ALL: [Os; 6] = [
        Os::Windows,
        Os::Linux,
        Os::Solaris,
        Os::Freebsd,
        Os::Macos,
        Os::Aix,
    ];

    /// Path segment used by the portal for this OS.
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Linux => "linux",
            Os::Solaris => "solaris",
            Os::Freebsd => "freebsd",
            Os::Macos => "macos",
            Os::Aix => "aix",
        }
    }
}

impl FromStr for Os {
    type Err = ParseOsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Os::ALL
            .into_iter()
            .find(|os| os.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOsError(s.to_string()))
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://download.example.com/releases";

    #[test]
    fn test_file_name() {
        let link = Link::new(format!("{PREFIX}/9.1.2/linux/splunk-9.1.2-Linux-x86_64.tgz"));
        assert_eq!(link.file_name(), "splunk-9.1.2-Linux-x86_64.tgz");
        assert_eq!(Link::new("no-slash").file_name(), "no-slash");
        assert_eq!(Link::new(format!("{PREFIX}/dir/")).file_name(), "");
    }

    #[test]
    fn test_os_id() {
        let link = Link::new(format!("{PREFIX}/9.1.2/windows/splunk-9.1.2-x64.msi"));
        assert_eq!(link.os_id(PREFIX), "windows");

        let flat = Link::new(format!("{PREFIX}/splunk.tgz"));
        assert_eq!(flat.os_id(PREFIX), "");

        let bare = Link::new(PREFIX);
        assert_eq!(bare.os_id(PREFIX), "");
    }

    #[test]
    fn test_os_round_trip_names() {
        for os in Os::ALL {
            assert_eq!(os.as_str().parse::<Os>(), Ok(os));
        }
        assert_eq!("MacOS".parse::<Os>(), Ok(Os::Macos));
        assert!("plan9".parse::<Os>().is_err());
    }
}
