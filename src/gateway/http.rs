//! # HTTP Gateway
//!
//! [`OrderGateway`] implementation backed by `reqwest`. One client is built per
//! gateway with the configured timeouts and reused for every call. Calls are
//! never retried.

use crate::config::Config;
use crate::gateway::{GatewayError, OrderGateway, SubmitReceipt};
use crate::model::{OrderRequest, RemoteOrder};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

/// Status codes the submission endpoint may answer with on success.
pub const ACCEPTED_SUBMIT_STATUSES: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];

#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    submit_url: String,
    retrieve_url: String,
}

impl HttpOrderGateway {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.effective_connect_timeout())
            .build()
            .map_err(|e| GatewayError::Request(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            submit_url: config.submit_url.clone(),
            retrieve_url: config.retrieve_url.clone(),
        })
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[instrument(skip(self, request))]
    async fn submit_order(&self, request: &OrderRequest) -> Result<SubmitReceipt, GatewayError> {
        debug!(url = %self.submit_url, ?request, "submit_order called");
        let response = self
            .client
            .post(&self.submit_url)
            .json(request)
            .send()
            .await
            .map_err(GatewayError::from)?;

        let status = response.status();
        if !ACCEPTED_SUBMIT_STATUSES.contains(&status) {
            warn!(status = status.as_u16(), "Submission rejected");
            return Err(GatewayError::Status(status.as_u16()));
        }

        // The edge service answers with plain text; an id is only picked up
        // when the body happens to be a JSON object carrying one.
        let order_id = match response.text().await {
            Ok(body) => order_id_from_body(&body),
            Err(e) => {
                debug!(error = %e, "Could not read submission response body");
                None
            }
        };
        info!(status = status.as_u16(), ?order_id, "Order accepted");
        Ok(SubmitReceipt {
            status: status.as_u16(),
            order_id,
        })
    }

    #[instrument(skip(self))]
    async fn fetch_orders(&self) -> Result<Vec<RemoteOrder>, GatewayError> {
        debug!(url = %self.retrieve_url, "fetch_orders called");
        let response = self
            .client
            .get(&self.retrieve_url)
            .send()
            .await
            .map_err(GatewayError::from)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Retrieval rejected");
            return Err(GatewayError::Status(status.as_u16()));
        }

        let orders: Vec<RemoteOrder> = response.json().await.map_err(GatewayError::from)?;
        info!(count = orders.len(), "Orders fetched");
        Ok(orders)
    }
}

fn order_id_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["orderId", "id"]
        .iter()
        .find_map(|key| value.get(key))
        .and_then(|id| match id {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_from_body() {
        assert_eq!(order_id_from_body("Order accepted"), None);
        assert_eq!(
            order_id_from_body(r#"{"orderId": "abc-123"}"#),
            Some("abc-123".to_string())
        );
        assert_eq!(order_id_from_body(r#"{"id": 7}"#), Some("7".to_string()));
        assert_eq!(order_id_from_body(r#"["not", "an", "object"]"#), None);
    }

    #[test]
    fn test_builds_from_config() {
        let gateway = HttpOrderGateway::new(&Config::default()).unwrap();
        assert_eq!(gateway.submit_url, "http://localhost:8090/orders");
        assert_eq!(gateway.retrieve_url, "http://localhost:8094/orders");
    }
}
