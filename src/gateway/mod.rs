//! Access to the external order services.
//!
//! The dashboard only ever talks to the backend through the [`OrderGateway`]
//! trait: [`HttpOrderGateway`] in production, [`MockGateway`] in tests.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;
pub use mock::*;

use crate::model::{OrderRequest, RemoteOrder};
use async_trait::async_trait;

/// What the submission endpoint told us about an accepted order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub status: u16,
    pub order_id: Option<String>,
}

/// The two calls the dashboard makes against the backend.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// `POST` one order. Statuses outside 200/201/202 are errors.
    async fn submit_order(&self, request: &OrderRequest) -> Result<SubmitReceipt, GatewayError>;

    /// `GET` every order known to the backend.
    async fn fetch_orders(&self) -> Result<Vec<RemoteOrder>, GatewayError>;
}
