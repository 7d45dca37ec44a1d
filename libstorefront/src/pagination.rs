//! Pagination cursor parsing and infinite-scroll accumulation
//!
//! The backend paginates list responses through an RFC 5988 `Link` header
//! whose URLs carry a `page` query parameter, plus an `x-total-count`
//! header. Malformed or empty headers yield an empty cursor instead of an
//! error; a list response without links is treated as a single page.

/// Page numbers extracted from a `Link` response header, keyed by `rel`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<u64>,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub last: Option<u64>,
}

impl PageLinks {
    /// Parse a `Link` header value
    ///
    /// Sections that do not split into a `<url>; rel="name"` pair, or whose
    /// URL carries no parseable `page` parameter, are skipped.
    pub fn parse(header: &str) -> Self {
        let mut links = Self::default();
        for part in header.split(',') {
            let mut sections = part.split(';');
            let (Some(url), Some(rel)) = (sections.next(), sections.next()) else {
                continue;
            };
            if sections.next().is_some() {
                continue;
            }
            let url = url.trim().trim_start_matches('<').trim_end_matches('>');
            let Some(page) = page_param(url) else {
                continue;
            };
            match parse_rel(rel) {
                Some("first") => links.first = Some(page),
                Some("prev") => links.prev = Some(page),
                Some("next") => links.next = Some(page),
                Some("last") => links.last = Some(page),
                _ => {}
            }
        }
        links
    }

    /// True when the listing fits in one page
    pub fn single_page(&self) -> bool {
        self.first == self.last
    }
}

fn page_param(url: &str) -> Option<u64> {
    let query = url.split_once('?').map(|(_, q)| q)?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

fn parse_rel(section: &str) -> Option<&str> {
    let section = section.trim();
    section
        .strip_prefix("rel=\"")
        .and_then(|rest| rest.strip_suffix('"'))
}

/// Merge a freshly fetched page into the already-held entities
///
/// Infinite-scroll accumulation: a single-page result, or a fetch into an
/// empty list, replaces what is held; any later page is appended.
pub fn merge_page<T>(current: Vec<T>, incoming: Vec<T>, links: &PageLinks) -> Vec<T> {
    if links.single_page() || current.is_empty() {
        return incoming;
    }
    let mut merged = current;
    merged.extend(incoming);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_header() {
        let header = "<http://localhost:8080/api/carts?page=1&size=20>; rel=\"next\", \
                      <http://localhost:8080/api/carts?page=4&size=20>; rel=\"last\", \
                      <http://localhost:8080/api/carts?page=0&size=20>; rel=\"first\"";
        let links = PageLinks::parse(header);
        assert_eq!(links.next, Some(1));
        assert_eq!(links.last, Some(4));
        assert_eq!(links.first, Some(0));
        assert_eq!(links.prev, None);
        assert!(!links.single_page());
    }

    #[test]
    fn test_parse_empty_header() {
        let links = PageLinks::parse("");
        assert_eq!(links, PageLinks::default());
        assert!(links.single_page());
    }

    #[test]
    fn test_parse_skips_malformed_sections() {
        let header = "garbage, <http://h/api/carts?page=2&size=20>; rel=\"next\", <no-page>; rel=\"last\"";
        let links = PageLinks::parse(header);
        assert_eq!(links.next, Some(2));
        assert_eq!(links.last, None);
    }

    #[test]
    fn test_parse_ignores_unknown_rel() {
        let header = "<http://h/api/carts?page=3>; rel=\"alternate\"";
        assert_eq!(PageLinks::parse(header), PageLinks::default());
    }

    #[test]
    fn test_single_page_when_first_equals_last() {
        let header = "<http://h/api/carts?page=0>; rel=\"first\", <http://h/api/carts?page=0>; rel=\"last\"";
        assert!(PageLinks::parse(header).single_page());
    }

    #[test]
    fn test_merge_single_page_replaces() {
        let links = PageLinks::default();
        let merged = merge_page(vec![1, 2], vec![3], &links);
        assert_eq!(merged, vec![3]);
    }

    #[test]
    fn test_merge_later_page_appends() {
        let links = PageLinks {
            first: Some(0),
            prev: Some(0),
            next: None,
            last: Some(1),
        };
        let merged = merge_page(vec![1, 2], vec![3, 4], &links);
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_into_empty_replaces() {
        let links = PageLinks {
            first: Some(0),
            prev: None,
            next: Some(1),
            last: Some(4),
        };
        let merged = merge_page(Vec::new(), vec![9], &links);
        assert_eq!(merged, vec![9]);
    }
}
