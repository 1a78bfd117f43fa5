//! HTTP transport layer for the Feedbin SDK.

use crate::config::ClientConfig;
use crate::error::{FeedbinError, FeedbinResult};
use crate::pagination::Page;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("feedbin-sdk/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for making API requests.
///
/// Each call issues exactly one request. Failures are returned as-is; nothing
/// is retried here.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> FeedbinResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path, relative to the configured base.
    fn build_url(&self, path: &str) -> FeedbinResult<url::Url> {
        Ok(self.config.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(&self, method: Method, url: url::Url) -> RequestBuilder {
        let credentials = &self.config.credentials;
        self.client
            .request(method, url)
            .basic_auth(&credentials.email, Some(credentials.password()))
    }

    /// Send the request and turn any non-2xx status into `FeedbinError::Api`.
    async fn execute(&self, request: RequestBuilder) -> FeedbinResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        debug!(status = status.as_u16(), "Feedbin returned an error status");
        Err(FeedbinError::from_response(status.as_u16(), body))
    }

    /// Decode a successful response; an empty body yields `T::default()`.
    async fn decode<T: DeserializeOwned + Default>(response: Response) -> FeedbinResult<T> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Decode a successful response that must carry a JSON body.
    async fn decode_required<T: DeserializeOwned>(response: Response) -> FeedbinResult<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> FeedbinResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.request(Method::GET, url)).await?;
        Self::decode_required(response).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> FeedbinResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self
            .execute(self.request(Method::GET, url).query(query))
            .await?;
        Self::decode_required(response).await
    }

    /// Execute a GET request against a paginated listing.
    pub async fn get_page<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> FeedbinResult<Page<T>> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET page");

        let response = self
            .execute(self.request(Method::GET, url).query(query))
            .await?;
        let headers = response.headers().clone();
        let items: Vec<T> = Self::decode(response).await?;

        let page = Page::from_headers(items, &headers);
        debug!(
            count = page.items.len(),
            has_next = page.has_next(),
            "Received page"
        );
        Ok(page)
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> FeedbinResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "POST request");

        let response = self
            .execute(self.request(Method::POST, url).json(body))
            .await?;
        Self::decode(response).await
    }

    /// Execute a DELETE request with a JSON body.
    pub async fn delete_with_body<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> FeedbinResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "DELETE request");

        let response = self
            .execute(self.request(Method::DELETE, url).json(body))
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use serde::{Deserialize, Serialize};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
        value: i32,
    }

    fn create_config(base_url: &str) -> Arc<ClientConfig> {
        Arc::new(ClientConfig::new(
            url::Url::parse(base_url).unwrap(),
            Credentials::new("reader@example.com", "secret"),
        ))
    }

    #[tokio::test]
    async fn test_get_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/test.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "success".to_string(),
                value: 42,
            }))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: TestResponse = transport.get("/api/test.json").await.unwrap();
        assert_eq!(result.message, "success");
        assert_eq!(result.value, 42);
    }

    #[tokio::test]
    async fn test_basic_auth_and_content_type_headers() {
        let server = MockServer::start().await;

        // base64("reader@example.com:secret")
        Mock::given(method("GET"))
            .and(path("/protected.json"))
            .and(header(
                "Authorization",
                "Basic cmVhZGVyQGV4YW1wbGUuY29tOnNlY3JldA==",
            ))
            .and(header("Content-Type", "application/json; charset=utf-8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: Vec<u64> = transport.get("protected.json").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_query_parameters_forwarded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/entries.json"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: Vec<u64> = transport
            .get_with_query("entries.json", &[("page", 2), ("per_page", 10)])
            .await
            .unwrap();
        assert_eq!(result, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_page_reads_links_header() {
        let server = MockServer::start().await;
        let next = format!("{}/entries.json?page=2", server.uri());

        Mock::given(method("GET"))
            .and(path("/entries.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Links", format!("<{}>; rel=\"next\"", next).as_str())
                    .insert_header("X-Total-Count", "3")
                    .set_body_json(serde_json::json!([1, 2])),
            )
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let page: Page<u64> = transport
            .get_page("entries.json", &[("page", 1)])
            .await
            .unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next_page, Some(next));
        assert_eq!(page.total_count, Some(3));
    }

    #[tokio::test]
    async fn test_post_with_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/starred_entries.json"))
            .and(body_json(serde_json::json!({"starred_entries": [1, 2]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let acked: Vec<u64> = transport
            .post(
                "starred_entries.json",
                &serde_json::json!({"starred_entries": [1, 2]}),
            )
            .await
            .unwrap();
        assert_eq!(acked, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_with_body_and_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/unread_entries.json"))
            .and(body_json(serde_json::json!({"unread_entries": [9]})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let acked: Vec<u64> = transport
            .delete_with_body(
                "unread_entries.json",
                &serde_json::json!({"unread_entries": [9]}),
            )
            .await
            .unwrap();
        assert!(acked.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_preserves_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/subscriptions.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("HTTP Basic: Access denied."))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: FeedbinResult<Vec<u64>> = transport.get("subscriptions.json").await;
        match result {
            Err(FeedbinError::Api { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "HTTP Basic: Access denied.");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_truncated_error_body_is_connectivity_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
                .await
                .unwrap();
        });

        let transport = HttpTransport::new(create_config(&format!("http://{}", addr))).unwrap();

        let result: FeedbinResult<Vec<u64>> = transport.get("tags.json").await;
        assert!(
            matches!(result, Err(FeedbinError::Connectivity(_))),
            "{:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tags.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let transport = HttpTransport::new(create_config(&server.uri())).unwrap();

        let result: FeedbinResult<Vec<u64>> = transport.get("tags.json").await;
        assert!(matches!(result, Err(FeedbinError::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_connectivity_error() {
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let transport = HttpTransport::new(create_config(&uri)).unwrap();

        let result: FeedbinResult<Vec<u64>> = transport.get("tags.json").await;
        assert!(matches!(result, Err(FeedbinError::Connectivity(_))));
    }

    #[tokio::test]
    async fn test_build_url_under_versioned_base() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/v2")).unwrap();

        let url = transport.build_url("/entries.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v2/entries.json");
    }

    #[tokio::test]
    async fn test_build_url_with_trailing_slash() {
        let transport = HttpTransport::new(create_config("http://localhost:8080/v2/")).unwrap();

        let url = transport.build_url("feeds/1.json").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v2/feeds/1.json");
    }
}
