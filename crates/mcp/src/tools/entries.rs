// Entry listing and lookup tools

use crate::protocol::ToolSchema;
use crate::tools::args::{
    self, clamp_page, clamp_per_page, parse_args, PageArgs, DEFAULT_PAGE, DEFAULT_PER_PAGE,
};
use crate::tools::{
    json_schema_integer, json_schema_object, json_schema_string, to_output, Tool, ToolError,
    ToolResult,
};
use chrono::{DateTime, Utc};
use feedbin_sdk::api::MAX_ENTRY_IDS_PER_QUERY;
use feedbin_sdk::{Entry, EntryQuery, FeedbinClient, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output shape of every paginated entry tool.
#[derive(Debug, Serialize)]
struct EntryPage {
    entries: Vec<Entry>,
    /// Feedbin's URL for the following page, `null` on the last page.
    next_page: Option<String>,
    total_count: Option<u64>,
}

impl From<Page<Entry>> for EntryPage {
    fn from(page: Page<Entry>) -> Self {
        Self {
            entries: page.items,
            next_page: page.next_page,
            total_count: page.total_count,
        }
    }
}

fn page_properties() -> serde_json::Map<String, Value> {
    let mut props = serde_json::Map::new();
    props.insert(
        "page".to_string(),
        json_schema_integer(&format!("Page number (default {})", DEFAULT_PAGE)),
    );
    props.insert(
        "per_page".to_string(),
        json_schema_integer(&format!(
            "Number of entries per page, max {} (default {})",
            feedbin_sdk::api::MAX_PER_PAGE,
            DEFAULT_PER_PAGE
        )),
    );
    props
}

/// Which slice of entries a listing tool shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    Unread,
    Read,
    Starred,
}

impl EntryFilter {
    fn tool_name(self) -> &'static str {
        match self {
            Self::Unread => "get_unread_entries",
            Self::Read => "get_read_entries",
            Self::Starred => "get_starred_entries",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unread => {
                "Get unread article entries from Feedbin. Each entry has id, feed_id, title, \
                 author, summary, content, url, published and created_at. The response also \
                 carries next_page, the URL of the following page (null on the last page)."
            }
            Self::Read => {
                "Get already-read article entries from Feedbin. Useful for reviewing recently \
                 read articles. Paginated like get_unread_entries."
            }
            Self::Starred => {
                "Get starred (bookmarked) article entries from Feedbin. Paginated like \
                 get_unread_entries."
            }
        }
    }

    fn apply(self, query: EntryQuery) -> EntryQuery {
        match self {
            Self::Unread => query.read(false),
            Self::Read => query.read(true),
            Self::Starred => query.starred(true),
        }
    }
}

/// Paginated entry listing filtered by read or starred state
pub struct EntryListTool {
    client: FeedbinClient,
    filter: EntryFilter,
}

impl EntryListTool {
    pub fn new(client: FeedbinClient, filter: EntryFilter) -> Self {
        Self { client, filter }
    }
}

#[async_trait::async_trait]
impl Tool for EntryListTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.filter.tool_name().to_string(),
            description: self.filter.description().to_string(),
            input_schema: json_schema_object(Value::Object(page_properties()), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: PageArgs = parse_args(self.filter.tool_name(), arguments)?;
        let query = self.filter.apply(
            EntryQuery::new()
                .page(clamp_page(args.page))
                .per_page(clamp_per_page(args.per_page)),
        );

        let page = self.client.entries().list(&query).await?;
        to_output(&EntryPage::from(page))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetEntriesArgs {
    #[serde(default = "args::default_page")]
    page: i64,
    #[serde(default = "args::default_per_page")]
    per_page: i64,
    #[serde(default)]
    since: Option<String>,
    #[serde(default, deserialize_with = "args::optional_id")]
    feed_id: Option<u64>,
    #[serde(default, deserialize_with = "args::id_filter")]
    ids: Vec<u64>,
}

impl GetEntriesArgs {
    fn into_query(self) -> ToolResult<EntryQuery> {
        if self.ids.len() > MAX_ENTRY_IDS_PER_QUERY {
            return Err(ToolError::InvalidArgument(format!(
                "ids accepts at most {} entry ids, got {}",
                MAX_ENTRY_IDS_PER_QUERY,
                self.ids.len()
            )));
        }

        let mut query = EntryQuery::new()
            .page(clamp_page(self.page))
            .per_page(clamp_per_page(self.per_page))
            .ids(self.ids);

        if let Some(since) = self.since.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let since = DateTime::parse_from_rfc3339(since).map_err(|e| {
                ToolError::InvalidArgument(format!(
                    "since must be an ISO 8601 datetime such as 2024-01-01T00:00:00Z: {}",
                    e
                ))
            })?;
            query = query.since(since.with_timezone(&Utc));
        }

        // 0 is how some callers spell "no feed filter"
        if let Some(feed_id) = self.feed_id.filter(|id| *id != 0) {
            query = query.feed_id(feed_id);
        }

        Ok(query)
    }
}

/// Entry listing with combined filters
pub struct GetEntriesTool {
    client: FeedbinClient,
}

impl GetEntriesTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetEntriesTool {
    fn schema(&self) -> ToolSchema {
        let mut props = page_properties();
        props.insert(
            "since".to_string(),
            json_schema_string(
                "Only return entries created after this ISO 8601 datetime, \
                 e.g. \"2024-01-01T00:00:00.000000Z\"",
            ),
        );
        props.insert(
            "feed_id".to_string(),
            json_schema_integer("Only return entries from this feed"),
        );
        props.insert(
            "ids".to_string(),
            serde_json::json!({
                "anyOf": [
                    {"type": "array", "items": {"type": "integer"}},
                    {"type": "string"}
                ],
                "description": format!(
                    "Specific entry IDs to retrieve, as an array or a comma-separated \
                     string like \"1,2,3\" (max {})",
                    MAX_ENTRY_IDS_PER_QUERY
                )
            }),
        );

        ToolSchema {
            name: "get_entries".to_string(),
            description: "Get article entries with optional filters. Paginated like \
                          get_unread_entries."
                .to_string(),
            input_schema: json_schema_object(Value::Object(props), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: GetEntriesArgs = parse_args("get_entries", arguments)?;
        let query = args.into_query()?;

        let page = self.client.entries().list(&query).await?;
        to_output(&EntryPage::from(page))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetEntryArgs {
    #[serde(deserialize_with = "args::id")]
    entry_id: u64,
}

/// Tool to fetch one entry with its full content
pub struct GetEntryTool {
    client: FeedbinClient,
}

impl GetEntryTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetEntryTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_entry".to_string(),
            description: "Get the full details of a single entry by its ID, including the \
                          HTML content."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "entry_id": json_schema_integer("The numeric entry ID")
                }),
                vec!["entry_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: GetEntryArgs = parse_args("get_entry", arguments)?;
        let entry = self.client.entries().get(args.entry_id).await?;
        to_output(&entry)
    }
}
