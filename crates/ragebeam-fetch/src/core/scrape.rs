use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::data::Link;

const LINK_ATTR: &str = "data-link";

static ANCHOR_SELECTOR: Lazy<Option<Selector>> =
    Lazy::new(|| Selector::parse("a[data-link]").ok());

/// Installer links in document order.
///
/// Yields the `data-link` value of every anchor carrying that attribute,
/// keeping only values that start with `prefix`. The iterator borrows the
/// parsed document and is consumed once.
pub fn installer_links<'a>(doc: &'a Html, prefix: &'a str) -> impl Iterator<Item = Link> + 'a {
    ANCHOR_SELECTOR
        .as_ref()
        .into_iter()
        .flat_map(move |selector| doc.select(selector))
        .filter_map(|anchor| anchor.value().attr(LINK_ATTR))
        .inspect(|candidate| tracing::trace!(link = %candidate, "found candidate link"))
        .filter(move |candidate| candidate.starts_with(prefix))
        .map(Link::new)
}

/// Parse `page` and collect its installer links.
pub fn parse_links(page: &str, prefix: &str) -> Vec<Link> {
    let doc = Html::parse_document(page);
    installer_links(&doc, prefix).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://download.example.com/releases";

    fn page(anchors: &[&str]) -> String {
        let body: String = anchors.iter().map(|a| format!("<li>{a}</li>\n")).collect();
        format!("<html><body><ul>\n{body}</ul></body></html>")
    }

    #[test]
    fn test_keeps_only_prefixed_links_in_order() {
        let html = page(&[
            r#"<a data-link="https://download.example.com/releases/9.1/linux/b.tgz">b</a>"#,
            r#"<a data-link="https://elsewhere.example.com/releases/9.1/linux/x.tgz">x</a>"#,
            r#"<a data-link="https://download.example.com/releases/9.1/windows/a.msi">a</a>"#,
            r#"<a href="https://download.example.com/releases/9.1/linux/plain.tgz">plain</a>"#,
            r#"<a data-link="">empty</a>"#,
        ]);

        let links = parse_links(&html, PREFIX);
        assert_eq!(
            links,
            vec![
                Link::new("https://download.example.com/releases/9.1/linux/b.tgz"),
                Link::new("https://download.example.com/releases/9.1/windows/a.msi"),
            ]
        );
    }

    #[test]
    fn test_ignores_data_link_on_other_elements() {
        let html = page(&[
            r#"<button data-link="https://download.example.com/releases/9.1/linux/b.tgz">b</button>"#,
        ]);
        assert!(parse_links(&html, PREFIX).is_empty());
    }

    #[test]
    fn test_empty_page_has_no_links() {
        assert!(parse_links("", PREFIX).is_empty());
        assert!(parse_links("<html><body>maintenance</body></html>", PREFIX).is_empty());
    }

    #[test]
    fn test_iterator_is_lazy_over_document() {
        let html = page(&[
            r#"<a data-link="https://download.example.com/releases/1/linux/a.tgz">a</a>"#,
            r#"<a data-link="https://download.example.com/releases/2/linux/b.tgz">b</a>"#,
        ]);
        let doc = Html::parse_document(&html);
        let mut links = installer_links(&doc, PREFIX);

        assert_eq!(links.next().map(|l| l.file_name().to_string()).as_deref(), Some("a.tgz"));
        assert_eq!(links.next().map(|l| l.file_name().to_string()).as_deref(), Some("b.tgz"));
        assert!(links.next().is_none());
    }
}
