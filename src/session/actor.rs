//! # Session Actor
//!
//! The `SessionActor` owns every live [`SessionState`] and processes requests
//! one at a time in its own Tokio task. Sequential processing is what gives a
//! session its "one interaction at a time" guarantee: an order placement holds
//! the loop until the gateway answers or times out, and no other request can
//! observe a half-applied cart.
//!
//! The gateway is injected when the loop starts (`run(context)`), not when the
//! actor is built, so tests can hand in a [`MockGateway`](crate::gateway::MockGateway).

use crate::gateway::OrderGateway;
use crate::session::{CartAction, SessionClient, SessionError, SessionId, SessionState, Submission};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, SessionError>>;

/// Messages accepted by the [`SessionActor`].
#[derive(Debug)]
pub enum SessionRequest {
    Open {
        customer_id: String,
        respond_to: Response<SessionId>,
    },
    Snapshot {
        id: SessionId,
        respond_to: Response<SessionState>,
    },
    Cart {
        id: SessionId,
        action: CartAction,
        respond_to: Response<SessionState>,
    },
    PlaceOrder {
        id: SessionId,
        respond_to: Response<Submission>,
    },
    Close {
        id: SessionId,
        respond_to: Response<()>,
    },
}

pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    sessions: HashMap<SessionId, SessionState>,
    next_id: u32,
}

impl SessionActor {
    /// Creates the actor and the client used to reach it.
    ///
    /// `buffer_size` bounds the number of queued requests; senders wait when
    /// it is full.
    pub fn new(buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: 1,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, gateway: Arc<dyn OrderGateway>) {
        info!("Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open {
                    customer_id,
                    respond_to,
                } => {
                    let id = self.allocate_id();
                    self.sessions
                        .insert(id, SessionState::new(id, customer_id.clone()));
                    info!(%id, %customer_id, size = self.sessions.len(), "Opened");
                    let _ = respond_to.send(Ok(id));
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let result = self.session(id).map(|state| state.clone());
                    debug!(%id, found = result.is_ok(), "Snapshot");
                    let _ = respond_to.send(result);
                }
                SessionRequest::Cart {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(%id, ?action, "Cart");
                    let result = self.session_mut(id).map(|state| {
                        state.apply(action);
                        state.clone()
                    });
                    let _ = respond_to.send(result);
                }
                SessionRequest::PlaceOrder { id, respond_to } => {
                    let result = self.place_order(id, gateway.as_ref()).await;
                    if let Err(e) = &result {
                        warn!(%id, error = %e, "PlaceOrder rejected");
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Close { id, respond_to } => {
                    let result = match self.sessions.remove(&id) {
                        Some(_) => {
                            info!(%id, size = self.sessions.len(), "Closed");
                            Ok(())
                        }
                        None => Err(SessionError::UnknownSession(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(size = self.sessions.len(), "Session actor shutdown");
    }

    async fn place_order(
        &mut self,
        id: SessionId,
        gateway: &dyn OrderGateway,
    ) -> Result<Submission, SessionError> {
        let request = self.session(id)?.prepare_order()?;
        debug!(%id, ?request, "PlaceOrder");
        let outcome = gateway.submit_order(&request).await;
        // The session may not disappear while we await: the loop is ours.
        let state = self.session_mut(id)?;
        Ok(state.settle(request, outcome))
    }

    /// Next free id. The counter wraps, skipping ids still in use.
    fn allocate_id(&mut self) -> SessionId {
        loop {
            let id = SessionId::from(self.next_id);
            self.next_id = self.next_id.wrapping_add(1);
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }

    fn session(&self, id: SessionId) -> Result<&SessionState, SessionError> {
        self.sessions.get(&id).ok_or_else(|| {
            warn!(%id, "Not found");
            SessionError::UnknownSession(id.to_string())
        })
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut SessionState, SessionError> {
        self.sessions.get_mut(&id).ok_or_else(|| {
            warn!(%id, "Not found");
            SessionError::UnknownSession(id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockGateway;

    #[tokio::test]
    async fn test_session_ids_wrap_without_collision() {
        let (mut actor, client) = SessionActor::new(8);
        actor.next_id = u32::MAX;
        tokio::spawn(actor.run(Arc::new(MockGateway::new())));

        let last = client.open_session("cust-a".to_string()).await.unwrap();
        let wrapped = client.open_session("cust-b".to_string()).await.unwrap();
        assert_eq!(last, SessionId(u32::MAX));
        assert_eq!(wrapped, SessionId(0));

        let next = client.open_session("cust-c".to_string()).await.unwrap();
        assert_eq!(next, SessionId(1));
        assert_eq!(client.snapshot(last).await.unwrap().customer_id, "cust-a");
    }
}
