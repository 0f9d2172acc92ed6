//! # Session State
//!
//! Everything one user session accumulates across renders: the cart and the
//! orders submitted from it. The state is an explicit value owned by the
//! [`SessionActor`](crate::session::SessionActor); every transition is a plain
//! method so it can be tested as `(state, action) -> state` without a runtime.
//!
//! Placing an order is split in two pure halves around the network call:
//! [`SessionState::prepare_order`] builds the request and
//! [`SessionState::settle`] folds the gateway's answer back into the state.

use crate::gateway::{GatewayError, SubmitReceipt};
use crate::model::{Cart, LocalOrderRecord, LocalOrderStatus, Notice, OrderRequest, Product};
use crate::session::SessionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use tracing::{info, warn};
use uuid::Uuid;

/// Type-safe identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// User interactions that change the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CartAction {
    /// Adds one unit of the product.
    Add(&'static Product),
    /// Removes one unit of the product, dropping it at zero.
    Remove(&'static Product),
}

/// Result of a submission attempt.
///
/// `record.status` is [`LocalOrderStatus::Failed`] when the backend rejected the
/// order; such a record is returned for display but not kept in the history.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub record: LocalOrderRecord,
    pub notices: Vec<Notice>,
}

impl Submission {
    /// The customer the order was placed for, unless the submission failed.
    pub fn customer_id(&self) -> Option<&str> {
        match self.record.status {
            LocalOrderStatus::Failed => None,
            _ => Some(&self.record.customer_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub id: SessionId,
    pub customer_id: String,
    pub cart: Cart,
    /// Orders submitted from this session, oldest first.
    pub orders: Vec<LocalOrderRecord>,
    simulated_ids: HashSet<String>,
}

impl SessionState {
    pub fn new(id: SessionId, customer_id: impl Into<String>) -> Self {
        Self {
            id,
            customer_id: customer_id.into(),
            cart: Cart::new(),
            orders: Vec::new(),
            simulated_ids: HashSet::new(),
        }
    }

    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product) => self.cart.add(product),
            CartAction::Remove(product) => self.cart.remove(product),
        }
    }

    /// Builds the submission payload for the current cart.
    pub fn prepare_order(&self) -> Result<OrderRequest, SessionError> {
        if self.cart.is_empty() {
            return Err(SessionError::EmptyCart);
        }
        Ok(OrderRequest {
            customer_id: self.customer_id.clone(),
            total_amount: self.cart.total(),
            product_ids: self.cart.product_ids(),
        })
    }

    /// Applies the gateway's answer for `request`.
    ///
    /// - accepted: history grows by one `Submitted` record, cart cleared
    /// - unreachable: history grows by one `SubmittedSimulated` record with a
    ///   fresh `sim-` id, cart cleared
    /// - anything else: state untouched, `Failed` record returned
    pub fn settle(
        &mut self,
        request: OrderRequest,
        outcome: Result<SubmitReceipt, GatewayError>,
    ) -> Submission {
        match outcome {
            Ok(receipt) => {
                let record =
                    LocalOrderRecord::new(request, LocalOrderStatus::Submitted, receipt.order_id);
                info!(session = %self.id, status = receipt.status, "Order submitted");
                self.commit(record.clone());
                Submission {
                    notices: vec![Notice::success(format!(
                        "Order submitted successfully! Customer ID: {}",
                        record.customer_id
                    ))],
                    record,
                }
            }
            Err(e) if e.is_connectivity() => {
                let local_id = self.next_simulated_id();
                let record = LocalOrderRecord::new(
                    request,
                    LocalOrderStatus::SubmittedSimulated,
                    Some(local_id.clone()),
                );
                warn!(session = %self.id, error = %e, %local_id, "Order service unreachable, simulating");
                self.commit(record.clone());
                Submission {
                    notices: vec![
                        Notice::warning("Unable to connect to order service. Order simulated locally."),
                        Notice::success(format!(
                            "Order simulated successfully! Customer ID: {}",
                            record.customer_id
                        )),
                    ],
                    record,
                }
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "Order submission failed");
                let message = match e {
                    GatewayError::Status(code) => {
                        format!("Failed to submit order. Status: {}", code)
                    }
                    other => format!("Error submitting order: {}", other),
                };
                Submission {
                    record: LocalOrderRecord::new(request, LocalOrderStatus::Failed, None),
                    notices: vec![Notice::error(message)],
                }
            }
        }
    }

    fn commit(&mut self, record: LocalOrderRecord) {
        self.orders.push(record);
        self.cart.clear();
    }

    fn next_simulated_id(&mut self) -> String {
        loop {
            let hex = Uuid::new_v4().simple().to_string();
            let candidate = format!("sim-{}", &hex[..8]);
            if self.simulated_ids.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoticeLevel, CATALOG};

    fn session_with(items: &[&str]) -> SessionState {
        let mut state = SessionState::new(SessionId(1), "OMS-Cust-001");
        for id in items {
            state.apply(CartAction::Add(CATALOG.get(id).unwrap()));
        }
        state
    }

    #[test]
    fn test_apply_cart_actions() {
        let mouse = CATALOG.get("item2").unwrap();
        let mut state = session_with(&[]);
        state.apply(CartAction::Add(mouse));
        state.apply(CartAction::Add(mouse));
        state.apply(CartAction::Remove(mouse));
        assert_eq!(state.cart.quantity_of("item2"), Some(1));
        state.apply(CartAction::Remove(mouse));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_prepare_order_rejects_empty_cart() {
        let state = session_with(&[]);
        assert_eq!(state.prepare_order(), Err(SessionError::EmptyCart));
    }

    #[test]
    fn test_prepare_order_flattens_quantities() {
        let state = session_with(&["item2", "item6", "item2"]);
        let request = state.prepare_order().unwrap();
        assert_eq!(request.customer_id, "OMS-Cust-001");
        assert_eq!(request.product_ids, vec!["item2", "item2", "item6"]);
        assert!((request.total_amount - (29.99 * 2.0 + 89.99)).abs() < 1e-9);
    }

    #[test]
    fn test_settle_success_clears_cart_and_records() {
        let mut state = session_with(&["item1"]);
        let request = state.prepare_order().unwrap();
        let submission = state.settle(
            request.clone(),
            Ok(SubmitReceipt {
                status: 202,
                order_id: None,
            }),
        );

        assert!(state.cart.is_empty());
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders[0].status, LocalOrderStatus::Submitted);
        assert_eq!(state.orders[0].request, request);
        assert_eq!(submission.customer_id(), Some("OMS-Cust-001"));
        assert_eq!(submission.notices[0].level, NoticeLevel::Success);
    }

    #[test]
    fn test_settle_unreachable_simulates_with_distinct_ids() {
        let mut state = session_with(&[]);
        let mut seen = HashSet::new();
        for _ in 0..20 {
            state.apply(CartAction::Add(CATALOG.get("item3").unwrap()));
            let request = state.prepare_order().unwrap();
            let submission =
                state.settle(request, Err(GatewayError::Connect("refused".into())));

            assert_eq!(submission.record.status, LocalOrderStatus::SubmittedSimulated);
            let id = submission.record.order_id.clone().unwrap();
            assert!(id.starts_with("sim-"));
            assert_eq!(id.len(), 12);
            assert!(seen.insert(id), "simulated ids must not repeat");
            assert!(state.cart.is_empty());
        }
        assert_eq!(state.orders.len(), 20);
    }

    #[test]
    fn test_settle_rejection_leaves_state_untouched() {
        let mut state = session_with(&["item4", "item4"]);
        let before = state.clone();
        let request = state.prepare_order().unwrap();

        let submission = state.settle(request, Err(GatewayError::Status(500)));

        assert_eq!(state, before);
        assert_eq!(submission.record.status, LocalOrderStatus::Failed);
        assert_eq!(submission.customer_id(), None);
        assert_eq!(
            submission.notices,
            vec![Notice::error("Failed to submit order. Status: 500")]
        );
    }

    #[test]
    fn test_settle_timeout_is_an_error_not_a_simulation() {
        let mut state = session_with(&["item5"]);
        let request = state.prepare_order().unwrap();

        let submission = state.settle(request, Err(GatewayError::Timeout("read".into())));

        assert_eq!(submission.record.status, LocalOrderStatus::Failed);
        assert!(state.orders.is_empty());
        assert_eq!(state.cart.item_count(), 1);
        assert!(submission.notices[0]
            .message
            .starts_with("Error submitting order:"));
    }
}
