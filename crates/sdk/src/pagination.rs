//! Pagination metadata carried in Feedbin response headers.
//!
//! Feedbin sends a `Links` header (and some proxies rewrite it to the
//! standard `Link`) shaped like
//! `<https://api.feedbin.com/v2/entries.json?page=2>; rel="next", <...>; rel="last"`,
//! plus `X-Total-Count` with the total number of records.

use reqwest::header::{HeaderMap, LINK};
use serde::{Deserialize, Serialize};

const LINKS: &str = "links";
const TOTAL_COUNT: &str = "x-total-count";

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// URL of the following page, exactly as Feedbin sent it.
    pub next_page: Option<String>,
    pub last_page: Option<String>,
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    pub(crate) fn from_headers(items: Vec<T>, headers: &HeaderMap) -> Self {
        let links: Vec<(String, String)> = [LINKS, LINK.as_str()]
            .iter()
            .flat_map(|name| headers.get_all(*name).into_iter())
            .filter_map(|value| value.to_str().ok())
            .flat_map(parse_link_header)
            .collect();

        let find = |rel: &str| {
            links
                .iter()
                .find(|(_, r)| r == rel)
                .map(|(url, _)| url.clone())
        };

        let total_count = headers
            .get(TOTAL_COUNT)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());

        Self {
            next_page: find("next"),
            last_page: find("last"),
            total_count,
            items,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// Parse an RFC 8288 style header into `(url, rel)` pairs.
///
/// Targets are read between `<` and `>` so commas inside a URL (Feedbin's
/// `ids=1,2,3`) do not split it. Entries without a `rel` parameter are skipped.
pub fn parse_link_header(value: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut rest = value;

    while let Some(open) = rest.find('<') {
        let Some(len) = rest[open + 1..].find('>') else {
            break;
        };
        let url = &rest[open + 1..open + 1 + len];
        rest = &rest[open + 2 + len..];

        let params_end = rest.find('<').unwrap_or(rest.len());
        let rel = rest[..params_end].split(';').find_map(|param| {
            let (key, val) = param.split_once('=')?;
            if !key.trim().eq_ignore_ascii_case("rel") {
                return None;
            }
            let val = val.trim().trim_end_matches(',').trim().trim_matches('"');
            Some(val.to_string())
        });
        rest = &rest[params_end..];

        if let Some(rel) = rel {
            links.push((url.to_string(), rel));
        }
    }

    links
}
