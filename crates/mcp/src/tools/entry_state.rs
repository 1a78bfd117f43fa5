// Unread and starred state tools

use crate::protocol::ToolSchema;
use crate::tools::args::{parse_args, EntryIdsArgs, NoArgs};
use crate::tools::{json_schema_array, json_schema_object, to_output, Tool, ToolResult, ToolTier};
use feedbin_sdk::FeedbinClient;
use serde_json::{json, Value};
use tracing::info;

/// Which id set a listing tool reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIdSet {
    Unread,
    Starred,
}

/// Flat list of unread or starred entry ids
pub struct EntryIdsTool {
    client: FeedbinClient,
    set: EntryIdSet,
}

impl EntryIdsTool {
    pub fn new(client: FeedbinClient, set: EntryIdSet) -> Self {
        Self { client, set }
    }

    fn name(&self) -> &'static str {
        match self.set {
            EntryIdSet::Unread => "get_unread_entry_ids",
            EntryIdSet::Starred => "get_starred_entry_ids",
        }
    }
}

#[async_trait::async_trait]
impl Tool for EntryIdsTool {
    fn schema(&self) -> ToolSchema {
        let what = match self.set {
            EntryIdSet::Unread => "unread",
            EntryIdSet::Starred => "starred",
        };
        ToolSchema {
            name: self.name().to_string(),
            description: format!(
                "Get the ids of all {} entries as a flat array of integers. Cheaper than \
                 fetching full entries when only counts or ids are needed.",
                what
            ),
            input_schema: json_schema_object(json!({}), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let _: NoArgs = parse_args(self.name(), arguments)?;
        let ids = match self.set {
            EntryIdSet::Unread => self.client.unread_entries().ids().await?,
            EntryIdSet::Starred => self.client.starred_entries().ids().await?,
        };
        to_output(&ids)
    }
}

/// Bulk change applied to a list of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    MarkRead,
    MarkUnread,
    Star,
    Unstar,
}

impl StateChange {
    fn tool_name(self) -> &'static str {
        match self {
            Self::MarkRead => "mark_entries_read",
            Self::MarkUnread => "mark_entries_unread",
            Self::Star => "star_entries",
            Self::Unstar => "unstar_entries",
        }
    }

    /// Key listing the affected ids in the tool output.
    fn outcome_key(self) -> &'static str {
        match self {
            Self::MarkRead => "marked_read",
            Self::MarkUnread => "marked_unread",
            Self::Star => "starred",
            Self::Unstar => "unstarred",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::MarkRead => "Mark one or more entries as read.",
            Self::MarkUnread => "Mark one or more entries as unread.",
            Self::Star => "Star (bookmark) one or more entries.",
            Self::Unstar => "Unstar (remove the bookmark from) one or more entries.",
        }
    }
}

/// Marks entries read/unread or stars/unstars them
pub struct EntryStateTool {
    client: FeedbinClient,
    change: StateChange,
}

impl EntryStateTool {
    pub fn new(client: FeedbinClient, change: StateChange) -> Self {
        Self { client, change }
    }
}

#[async_trait::async_trait]
impl Tool for EntryStateTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.change.tool_name().to_string(),
            description: self.change.description().to_string(),
            input_schema: json_schema_object(
                json!({
                    "entry_ids": json_schema_array(
                        json!({"type": "integer"}),
                        "Entry IDs to change (at least one)"
                    )
                }),
                vec!["entry_ids"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args = EntryIdsArgs::parse(self.change.tool_name(), arguments)?;
        let ids = &args.entry_ids;

        match self.change {
            StateChange::MarkRead => self.client.unread_entries().mark_read(ids).await?,
            StateChange::MarkUnread => self.client.unread_entries().mark_unread(ids).await?,
            StateChange::Star => self.client.starred_entries().star(ids).await?,
            StateChange::Unstar => self.client.starred_entries().unstar(ids).await?,
        };
        info!(tool = self.change.tool_name(), count = ids.len(), "Entry state changed");

        let mut output = serde_json::Map::new();
        output.insert("status".to_string(), json!("ok"));
        output.insert(self.change.outcome_key().to_string(), to_output(ids)?);
        Ok(Value::Object(output))
    }

    fn tier(&self) -> ToolTier {
        ToolTier::IdempotentWrite
    }
}
