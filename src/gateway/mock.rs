//! # Mock Gateway
//!
//! An in-memory [`OrderGateway`] driven by queued expectations, for testing the
//! session runtime and the fetcher without a live order service.
//!
//! ```rust
//! use oms_dashboard::gateway::{GatewayError, MockGateway, OrderGateway};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockGateway::new();
//!     mock.expect_fetch().return_err(GatewayError::Connect("refused".into()));
//!
//!     let result = mock.fetch_orders().await;
//!     assert!(result.unwrap_err().is_connectivity());
//!     mock.verify();
//! }
//! ```
//!
//! A call with no queued expectation fails with [`GatewayError::Request`]
//! instead of panicking, so a misbehaving test surfaces as a failed assertion
//! rather than a dead actor task.

use crate::gateway::{GatewayError, OrderGateway, SubmitReceipt};
use crate::model::{OrderRequest, RemoteOrder};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Queue<T> = Arc<Mutex<VecDeque<Result<T, GatewayError>>>>;

#[derive(Default)]
pub struct MockGateway {
    submissions: Queue<SubmitReceipt>,
    fetches: Queue<Vec<RemoteOrder>>,
    submitted: Mutex<Vec<OrderRequest>>,
    fetch_calls: Mutex<usize>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response for the next `submit_order` call.
    pub fn expect_submit(&self) -> ExpectationBuilder<SubmitReceipt> {
        ExpectationBuilder {
            queue: self.submissions.clone(),
        }
    }

    /// Queues the response for the next `fetch_orders` call.
    pub fn expect_fetch(&self) -> ExpectationBuilder<Vec<RemoteOrder>> {
        ExpectationBuilder {
            queue: self.fetches.clone(),
        }
    }

    /// Every request passed to `submit_order`, in call order.
    pub fn submitted_requests(&self) -> Vec<OrderRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let submits = self.submissions.lock().unwrap().len();
        let fetches = self.fetches.lock().unwrap().len();
        if submits + fetches > 0 {
            panic!(
                "Not all expectations were met. {} submit, {} fetch remaining",
                submits, fetches
            );
        }
    }
}

#[async_trait]
impl OrderGateway for MockGateway {
    async fn submit_order(&self, request: &OrderRequest) -> Result<SubmitReceipt, GatewayError> {
        self.submitted.lock().unwrap().push(request.clone());
        self.submissions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Request("unexpected submit_order".into())))
    }

    async fn fetch_orders(&self) -> Result<Vec<RemoteOrder>, GatewayError> {
        *self.fetch_calls.lock().unwrap() += 1;
        self.fetches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Request("unexpected fetch_orders".into())))
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T> {
    queue: Queue<T>,
}

impl<T> ExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        self.queue.lock().unwrap().push_back(Ok(value));
    }

    pub fn return_err(self, error: GatewayError) {
        self.queue.lock().unwrap().push_back(Err(error));
    }
}
