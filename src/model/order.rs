use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Body of `POST {submit_url}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: String,
    pub total_amount: f64,
    /// One entry per unit ordered, so the length equals the cart's item count.
    pub product_ids: Vec<String>,
}

/// Outcome of a submission as recorded on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOrderStatus {
    /// The submission endpoint accepted the order.
    Submitted,
    /// The endpoint was unreachable and the order was recorded locally only.
    SubmittedSimulated,
    /// The endpoint rejected the order. Never retained in session history.
    Failed,
}

impl Display for LocalOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalOrderStatus::Submitted => write!(f, "Submitted"),
            LocalOrderStatus::SubmittedSimulated => write!(f, "Submitted (Simulated)"),
            LocalOrderStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Client-side record of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalOrderRecord {
    pub customer_id: String,
    pub request: OrderRequest,
    pub submitted_at: DateTime<Local>,
    pub status: LocalOrderStatus,
    /// Backend-assigned id, or a locally generated `sim-` id for simulated orders.
    pub order_id: Option<String>,
}

impl LocalOrderRecord {
    pub fn new(
        request: OrderRequest,
        status: LocalOrderStatus,
        order_id: Option<String>,
    ) -> Self {
        Self {
            customer_id: request.customer_id.clone(),
            request,
            submitted_at: Local::now(),
            status,
            order_id,
        }
    }

    pub fn item_count(&self) -> usize {
        self.request.product_ids.len()
    }
}

/// An order as reported by the retrieval endpoint.
///
/// Owned by the order service; every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOrder {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub placed_time: Option<String>,
    #[serde(default)]
    pub confirmed_time: Option<String>,
}

impl RemoteOrder {
    pub fn is_confirmed(&self) -> bool {
        self.status.as_deref() == Some("CONFIRMED")
    }
}

/// A [`RemoteOrder`] decorated with its derived processing time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedOrder {
    pub order: RemoteOrder,
    /// `confirmed_time - placed_time` in seconds, when both parse.
    pub processing_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_wire_format() {
        let request = OrderRequest {
            customer_id: "OMS-Cust-001".to_string(),
            total_amount: 59.98,
            product_ids: vec!["item2".to_string(), "item2".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customerId": "OMS-Cust-001",
                "totalAmount": 59.98,
                "productIds": ["item2", "item2"],
            })
        );
    }

    #[test]
    fn test_remote_order_tolerates_missing_fields() {
        let orders: Vec<RemoteOrder> = serde_json::from_str(
            r#"[
                {"id": "a1", "customerId": "c", "amount": 12.5, "status": "CONFIRMED",
                 "placedTime": "2024-01-01T00:00:00", "confirmedTime": null},
                {"status": "PENDING"}
            ]"#,
        )
        .unwrap();

        assert_eq!(orders[0].id.as_deref(), Some("a1"));
        assert!(orders[0].is_confirmed());
        assert!(orders[0].confirmed_time.is_none());
        assert!(orders[1].id.is_none());
        assert!(!orders[1].is_confirmed());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LocalOrderStatus::Submitted.to_string(), "Submitted");
        assert_eq!(
            LocalOrderStatus::SubmittedSimulated.to_string(),
            "Submitted (Simulated)"
        );
    }
}
