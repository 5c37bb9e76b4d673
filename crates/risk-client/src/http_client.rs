//! HTTP implementation of the risk service client

use crate::client::RiskClient;
use crate::error::{extract_error_message, ClientError, ClientResult};
use crate::types::{
    ChangeSetRequest, CloneRequest, CloneResponse, FileExplanation, ImpactAnalysisResult,
    PrRiskResult, RepositoryRiskSnapshot, RepositorySummary, ScanResponse,
};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// JSON-over-HTTP client for the risk analysis service
///
/// No request timeout is configured: analysis endpoints can legitimately run
/// for minutes while the service talks to its language model.
#[derive(Debug, Clone)]
pub struct HttpRiskClient {
    client: Client,
    base_url: String,
}

impl HttpRiskClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(ClientError::from_transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Service origin without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        self.handle_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ClientError::from_transport)?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(ClientError::from_transport)?;
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!("Risk service responded {}: {}", status, body);
            Err(ClientError::Remote {
                status: status.as_u16(),
                message: extract_error_message(&body),
            })
        }
    }
}

#[async_trait]
impl RiskClient for HttpRiskClient {
    async fn clone_repository(&self, request: &CloneRequest) -> ClientResult<CloneResponse> {
        self.post("/clone-repo", request).await
    }

    async fn scan_repository(&self, folder_name: &str) -> ClientResult<ScanResponse> {
        self.get("/scan-repo", &[("folder_name", folder_name)])
            .await
    }

    async fn summarize_repository(&self, folder_name: &str) -> ClientResult<RepositorySummary> {
        self.get("/summarize-repo", &[("folder_name", folder_name)])
            .await
    }

    async fn explain_file(&self, path: &str) -> ClientResult<FileExplanation> {
        self.get("/explain-file", &[("path", path)]).await
    }

    async fn impact_analysis(
        &self,
        request: &ChangeSetRequest,
    ) -> ClientResult<ImpactAnalysisResult> {
        self.post("/impact-analysis", request).await
    }

    async fn pr_risk_analysis(&self, request: &ChangeSetRequest) -> ClientResult<PrRiskResult> {
        self.post("/pr-risk-analysis", request).await
    }

    async fn repository_risk(&self, folder_name: &str) -> ClientResult<RepositoryRiskSnapshot> {
        self.get("/repo-risk-score", &[("folder_name", folder_name)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpRiskClient::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");

        let client = HttpRiskClient::new("http://risk.internal").unwrap();
        assert_eq!(client.base_url(), "http://risk.internal");
    }

    #[tokio::test]
    async fn test_clone_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clone-repo"))
            .and(body_json(json!({
                "repo_url": "https://example.com/x.git",
                "folder_name": "demo"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Cloned"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let response = client
            .clone_repository(&CloneRequest::new("https://example.com/x.git", "demo"))
            .await
            .unwrap();
        assert_eq!(response.message.as_deref(), Some("Cloned"));
    }

    #[tokio::test]
    async fn test_explain_file_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/explain-file"))
            .and(query_param("path", "src/a b&c.js"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"explanation": "Utility module"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let explanation = client.explain_file("src/a b&c.js").await.unwrap();
        assert_eq!(explanation.explanation, "Utility module");
    }

    #[tokio::test]
    async fn test_scan_repository() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/scan-repo"))
            .and(query_param("folder_name", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "files": [{"path": "index.js"}, {"path": "lib/utils.js"}],
                "total_files": 2
            })))
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let scan = client.scan_repository("demo").await.unwrap();
        assert_eq!(scan.file_count(), 2);
        assert_eq!(scan.files[1].path, "lib/utils.js");
    }

    #[tokio::test]
    async fn test_remote_error_carries_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clone-repo"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Folder already exists"})),
            )
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let err = client
            .clone_repository(&CloneRequest::new("https://example.com/x.git", "demo"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::Remote {
                status: 400,
                message: Some("Folder already exists".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_remote_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/summarize-repo"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let err = client.summarize_repository("demo").await.unwrap_err();
        assert_eq!(err.remote_message(), None);
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/impact-analysis"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let err = client
            .impact_analysis(&ChangeSetRequest::single("demo", "a.js"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pr-risk-analysis"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"file_breakdown": "oops"})),
            )
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let err = client
            .pr_risk_analysis(&ChangeSetRequest::single("demo", "a.js"))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // port 1 is reserved and never listening in test environments
        let client = HttpRiskClient::new("http://127.0.0.1:1").unwrap();
        let err = client.repository_risk("demo").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_repository_risk() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repo-risk-score"))
            .and(query_param("folder_name", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "overall_score": 71.4,
                "classification": "HIGH RISK",
                "architecture_score": 60.0,
                "dependency_risk": 55.5,
                "bus_factor_risk": 80.0,
                "volatility_risk": 40.0,
                "executive_analysis": {
                    "executive_summary": {"overview": "Tightly coupled core."}
                }
            })))
            .mount(&server)
            .await;

        let client = HttpRiskClient::new(&server.uri()).unwrap();
        let snapshot = client.repository_risk("demo").await.unwrap();
        assert_eq!(snapshot.classification, "HIGH RISK");
        let summary = snapshot
            .executive_analysis
            .and_then(|analysis| analysis.executive_summary)
            .unwrap();
        assert_eq!(summary.text("overview"), Some("Tightly coupled core."));
    }
}
