// Tag tools

use crate::protocol::ToolSchema;
use crate::tools::args::{parse_args, NoArgs};
use crate::tools::{json_schema_object, to_output, Tool, ToolResult};
use feedbin_sdk::FeedbinClient;
use serde_json::Value;

/// Tool to list tags
pub struct GetTagsTool {
    client: FeedbinClient,
}

impl GetTagsTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTagsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_tags".to_string(),
            description: "Get all tags used to organise subscriptions in the Feedbin account."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let _: NoArgs = parse_args("get_tags", arguments)?;
        to_output(&self.client.tags().list().await?)
    }
}

/// Tool to list tag-to-feed associations
pub struct GetTaggingsTool {
    client: FeedbinClient,
}

impl GetTaggingsTool {
    pub fn new(client: FeedbinClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetTaggingsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_taggings".to_string(),
            description: "Get all taggings: which feeds belong to which tags.".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> ToolResult<Value> {
        let _: NoArgs = parse_args("get_taggings", arguments)?;
        to_output(&self.client.taggings().list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client_for;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_taggings_pass_through() {
        let server = MockServer::start().await;
        let body = json!([
            {"id": 4, "feed_id": 1, "name": "Tech"},
            {"id": 5, "feed_id": 2, "name": "News"}
        ]);

        Mock::given(method("GET"))
            .and(path("/taggings.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let output = GetTaggingsTool::new(client_for(&server))
            .execute(json!({}))
            .await
            .unwrap();
        assert_eq!(output, body);
    }

    #[tokio::test]
    async fn test_tags_pass_through() {
        let server = MockServer::start().await;
        let body = json!([{"id": 1, "name": "Tech"}]);

        Mock::given(method("GET"))
            .and(path("/tags.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        let output = GetTagsTool::new(client_for(&server))
            .execute(Value::Null)
            .await
            .unwrap();
        assert_eq!(output, body);
    }
}
