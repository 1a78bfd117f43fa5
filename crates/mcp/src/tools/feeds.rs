// Subscription and feed tools

use crate::protocol::ToolSchema;
use crate::tools::args::{self, parse_args, NoArgs};
use crate::tools::{json_schema_integer, json_schema_object, to_output, Tool, ToolResult};
use feedbin_sdk::FeedbinClient;
use serde::Deserialize;
use serde_json::Value;

/// Tool to list the account's subscriptions
pub struct GetSubscriptionsTool {
    client: FeedbinClient,
}

impl GetSubscriptionsTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetSubscriptionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_subscriptions".to_string(),
            description: "List all feed subscriptions in the Feedbin account. Each subscription \
                          has id, feed_id, title, feed_url, site_url and created_at."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let _: NoArgs = parse_args("get_subscriptions", arguments)?;
        let subscriptions = self.client.subscriptions().list().await?;
        to_output(&subscriptions)
    }
}

/// Tool to fetch one feed
pub struct GetFeedTool {
    client: FeedbinClient,
}

impl GetFeedTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetFeedArgs {
    #[serde(deserialize_with = "args::id")]
    feed_id: u64,
}

#[async_trait::async_trait]
impl Tool for GetFeedTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_feed".to_string(),
            description: "Get details for a specific feed by its feed_id.".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "feed_id": json_schema_integer("The numeric feed ID")
                }),
                vec!["feed_id"],
            ),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let args: GetFeedArgs = parse_args("get_feed", arguments)?;
        let feed = self.client.feeds().get(args.feed_id).await?;
        to_output(&feed)
    }
}
