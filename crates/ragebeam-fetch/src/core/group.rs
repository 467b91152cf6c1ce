use std::collections::BTreeMap;

use crate::data::{Link, Os};

/// Sort links lexicographically by their full URL.
pub fn sort_links(mut links: Vec<Link>) -> Vec<Link> {
    links.sort();
    links
}

/// Partition links by the OS segment of their URL.
///
/// Links are stably ordered by OS key before the contiguous runs are
/// collected, so every key appears once no matter how the input is ordered.
/// Within a group, links keep their input order.
pub fn group_by_os(links: &[Link], prefix: &str) -> BTreeMap<String, Vec<Link>> {
    let mut keyed: Vec<(&str, &Link)> = links.iter().map(|l| (l.os_id(prefix), l)).collect();
    keyed.sort_by(|a, b| a.0.cmp(b.0));

    let mut groups: BTreeMap<String, Vec<Link>> = BTreeMap::new();
    for (key, link) in keyed {
        groups.entry(key.to_string()).or_default().push(link.clone());
    }
    groups
}

/// Sorted installer links scraped from the download page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    prefix: String,
    links: Vec<Link>,
}

impl Catalog {
    pub fn new(prefix: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            prefix: prefix.into(),
            links: sort_links(links),
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    pub fn grouped(&self) -> BTreeMap<String, Vec<Link>> {
        tracing::debug!("grouping links by OS");
        group_by_os(&self.links, &self.prefix)
    }

    /// Links published for `os`, `None` when the page lists none.
    pub fn for_os(&self, os: Os) -> Option<Vec<Link>> {
        self.grouped().remove(os.as_str())
    }
}
