pub mod args;
pub mod entries;
pub mod entry_state;
mod error;
pub mod feeds;
mod registry;
pub mod tags;

pub use entries::{EntryFilter, EntryListTool, GetEntriesTool, GetEntryTool};
pub use entry_state::{EntryIdSet, EntryIdsTool, EntryStateTool, StateChange};
pub use error::{ToolError, ToolResult};
pub use feeds::{GetFeedTool, GetSubscriptionsTool};
pub use registry::{
    json_schema_array, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry, ToolTier,
};
pub use tags::{GetTaggingsTool, GetTagsTool};

use feedbin_sdk::FeedbinClient;
use serde::Serialize;
use std::sync::Arc;

/// Register the full Feedbin tool catalog against one client.
pub fn register_feedbin_tools(registry: &mut ToolRegistry, client: &FeedbinClient) {
    registry.register(Arc::new(GetSubscriptionsTool::new(client.clone())));
    registry.register(Arc::new(GetFeedTool::new(client.clone())));

    for filter in [EntryFilter::Unread, EntryFilter::Read, EntryFilter::Starred] {
        registry.register(Arc::new(EntryListTool::new(client.clone(), filter)));
    }
    registry.register(Arc::new(GetEntriesTool::new(client.clone())));
    registry.register(Arc::new(GetEntryTool::new(client.clone())));

    for set in [EntryIdSet::Unread, EntryIdSet::Starred] {
        registry.register(Arc::new(EntryIdsTool::new(client.clone(), set)));
    }
    for change in [
        StateChange::MarkRead,
        StateChange::MarkUnread,
        StateChange::Star,
        StateChange::Unstar,
    ] {
        registry.register(Arc::new(EntryStateTool::new(client.clone(), change)));
    }

    registry.register(Arc::new(GetTagsTool::new(client.clone())));
    registry.register(Arc::new(GetTaggingsTool::new(client.clone())));
}

/// Serialize a tool's output.
pub(crate) fn to_output<T: Serialize + ?Sized>(value: &T) -> ToolResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ToolError::Internal(e.to_string()))
}
