//! # Order Fetcher
//!
//! Pulls every order from the retrieval endpoint and decorates it with its
//! processing time. Nothing is cached: each call is a full round trip.

use crate::gateway::{GatewayError, OrderGateway};
use crate::model::{Notice, ProcessedOrder, RemoteOrder};
use crate::orders::timing::processing_time;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orders plus the messages produced while fetching them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    pub orders: Vec<ProcessedOrder>,
    pub notices: Vec<Notice>,
}

#[derive(Clone)]
pub struct OrderFetcher {
    gateway: Arc<dyn OrderGateway>,
}

impl OrderFetcher {
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches all backend orders.
    ///
    /// Never fails: an unreachable service yields an empty list with a
    /// warning, any other failure an empty list with an error.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> FetchReport {
        match self.gateway.fetch_orders().await {
            Ok(orders) => {
                let report = process_orders(orders);
                info!(
                    count = report.orders.len(),
                    problems = report.notices.len(),
                    "Fetched orders"
                );
                report
            }
            Err(e @ GatewayError::Connect(_)) => {
                warn!(error = %e, "Order retrieval service unreachable");
                FetchReport {
                    orders: Vec::new(),
                    notices: vec![Notice::warning(
                        "Unable to connect to order retrieval service.",
                    )],
                }
            }
            Err(e) => {
                warn!(error = %e, "Order retrieval failed");
                FetchReport {
                    orders: Vec::new(),
                    notices: vec![Notice::error(format!("Error fetching orders: {}", e))],
                }
            }
        }
    }
}

/// Derives the processing time of each order.
///
/// A bad timestamp only affects its own order: it gets an error notice and no
/// processing time, and its siblings are processed as usual.
pub fn process_orders(orders: Vec<RemoteOrder>) -> FetchReport {
    let mut notices = Vec::new();
    let orders = orders
        .into_iter()
        .map(|order| {
            let processing_time = match processing_time(&order) {
                Ok(time) => time,
                Err(e) => {
                    let id = order.id.as_deref().unwrap_or("unknown");
                    warn!(order_id = id, error = %e, "Bad order timestamps");
                    notices.push(Notice::error(format!(
                        "Error parsing timestamps for order {}: {}",
                        id, e
                    )));
                    None
                }
            };
            ProcessedOrder {
                order,
                processing_time,
            }
        })
        .collect();
    FetchReport { orders, notices }
}
