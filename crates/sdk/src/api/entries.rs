//! Entries API endpoints.

use crate::client::FeedbinClient;
use crate::error::{FeedbinError, FeedbinResult};
use crate::models::Entry;
use crate::pagination::Page;
use chrono::{DateTime, SecondsFormat, Utc};

/// Largest page size Feedbin accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Largest `ids` filter Feedbin accepts on a listing.
pub const MAX_ENTRY_IDS_PER_QUERY: usize = 100;

/// Filters for an entry listing.
///
/// Unset fields are left out of the query string and Feedbin applies its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryQuery {
    pub page: Option<u64>,
    pub per_page: Option<u32>,
    pub read: Option<bool>,
    pub starred: Option<bool>,
    pub since: Option<DateTime<Utc>>,
    pub ids: Vec<u64>,
    /// Restrict the listing to one feed.
    pub feed_id: Option<u64>,
}

impl EntryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = Some(read);
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn ids(mut self, ids: impl Into<Vec<u64>>) -> Self {
        self.ids = ids.into();
        self
    }

    pub fn feed_id(mut self, feed_id: u64) -> Self {
        self.feed_id = Some(feed_id);
        self
    }

    /// Path of the listing this query targets.
    pub fn path(&self) -> String {
        match self.feed_id {
            Some(feed_id) => format!("feeds/{}/entries.json", feed_id),
            None => "entries.json".to_string(),
        }
    }

    /// Query string pairs.
    ///
    /// `page` is raised to 1 and `per_page` kept within 1..=100. A page past
    /// the end is sent as-is; Feedbin answers it with an empty list.
    pub fn to_params(&self) -> FeedbinResult<Vec<(&'static str, String)>> {
        if self.ids.len() > MAX_ENTRY_IDS_PER_QUERY {
            return Err(FeedbinError::InvalidInput(format!(
                "at most {} ids per listing, got {}",
                MAX_ENTRY_IDS_PER_QUERY,
                self.ids.len()
            )));
        }

        let mut params = Vec::new();
        if let Some(read) = self.read {
            params.push(("read", read.to_string()));
        }
        if let Some(starred) = self.starred {
            params.push(("starred", starred.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.max(1).to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.clamp(1, MAX_PER_PAGE).to_string()));
        }
        if let Some(since) = self.since {
            params.push(("since", since.to_rfc3339_opts(SecondsFormat::Micros, true)));
        }
        if !self.ids.is_empty() {
            let ids: Vec<String> = self.ids.iter().map(u64::to_string).collect();
            params.push(("ids", ids.join(",")));
        }
        Ok(params)
    }
}

/// Entries API for reading articles.
pub struct EntriesApi<'a> {
    client: &'a FeedbinClient,
}

impl<'a> EntriesApi<'a> {
    pub(crate) fn new(client: &'a FeedbinClient) -> Self {
        Self { client }
    }

    /// List one page of entries matching the query.
    pub async fn list(&self, query: &EntryQuery) -> FeedbinResult<Page<Entry>> {
        let params = query.to_params()?;
        self.client.http.get_page(&query.path(), &params).await
    }

    /// Get a specific entry by ID.
    pub async fn get(&self, entry_id: u64) -> FeedbinResult<Entry> {
        self.client
            .http
            .get(&format!("entries/{}.json", entry_id))
            .await
            .map_err(|e| e.not_found_as(|| format!("entry {}", entry_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::client_for;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{any, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn entry(id: u64, feed_id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "feed_id": feed_id,
            "title": format!("Entry {}", id),
            "author": "Ann",
            "summary": "summary",
            "content": "<p>content</p>",
            "url": format!("https://example.com/{}", id),
            "published": "2024-01-02T03:04:05.000000Z",
            "created_at": "2024-01-02T03:04:06.123456Z"
        })
    }

    #[test]
    fn test_params_clamp_page_bounds() {
        let params = EntryQuery::new().page(0).per_page(500).to_params().unwrap();
        assert_eq!(
            params,
            vec![("page", "1".to_string()), ("per_page", "100".to_string())]
        );

        let params = EntryQuery::new().page(9999).per_page(0).to_params().unwrap();
        assert_eq!(
            params,
            vec![("page", "9999".to_string()), ("per_page", "1".to_string())]
        );
    }

    #[test]
    fn test_params_large_page_forwarded() {
        let params = EntryQuery::new().page(5_000_000_000).to_params().unwrap();
        assert_eq!(params, vec![("page", "5000000000".to_string())]);
    }

    #[test]
    fn test_params_since_and_ids() {
        let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let params = EntryQuery::new()
            .since(since)
            .ids(vec![3, 1, 2])
            .to_params()
            .unwrap();

        assert_eq!(
            params,
            vec![
                ("since", "2024-01-01T00:00:00.000000Z".to_string()),
                ("ids", "3,1,2".to_string()),
            ]
        );
    }

    #[test]
    fn test_too_many_ids_rejected() {
        let ids: Vec<u64> = (0..=MAX_ENTRY_IDS_PER_QUERY as u64).collect();
        let err = EntryQuery::new().ids(ids).to_params().unwrap_err();
        assert!(matches!(err, FeedbinError::InvalidInput(_)));
    }

    #[test]
    fn test_path_per_feed() {
        assert_eq!(EntryQuery::new().path(), "entries.json");
        assert_eq!(EntryQuery::new().feed_id(12).path(), "feeds/12/entries.json");
    }

    #[tokio::test]
    async fn test_list_unread_page() {
        let server = MockServer::start().await;
        let next = format!("{}/entries.json?page=3&per_page=10&read=false", server.uri());

        Mock::given(method("GET"))
            .and(path("/entries.json"))
            .and(query_param("read", "false"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "10"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Links", format!("<{}>; rel=\"next\"", next).as_str())
                    .set_body_json(json!([entry(1, 5), entry(2, 5)])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server)
            .entries()
            .list(&EntryQuery::new().read(false).page(2).per_page(10))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id(), Some(1));
        assert_eq!(page.next_page, Some(next));
    }

    #[tokio::test]
    async fn test_list_for_feed_without_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/feeds/5/entries.json"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([entry(9, 5)])))
            .expect(1)
            .mount(&server)
            .await;

        let page = client_for(&server)
            .entries()
            .list(&EntryQuery::new().feed_id(5))
            .await
            .unwrap();

        assert_eq!(page.items[0].feed_id(), Some(5));
        assert!(page.next_page.is_none());
    }

    #[tokio::test]
    async fn test_rejected_query_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let ids: Vec<u64> = (0..200).collect();
        let result = client_for(&server)
            .entries()
            .list(&EntryQuery::new().ids(ids))
            .await;
        assert!(matches!(result, Err(FeedbinError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_get_entry_and_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entries/2077.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(entry(2077, 135)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/entries/1.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let found = client.entries().get(2077).await.unwrap();
        assert_eq!(serde_json::to_value(&found).unwrap(), entry(2077, 135));

        let missing = client.entries().get(1).await.unwrap_err();
        assert!(matches!(missing, FeedbinError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_server_error_on_listing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entries.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .entries()
            .list(&EntryQuery::new().starred(true))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("boom"));
    }
}
