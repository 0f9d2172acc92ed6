//! # Session Client
//!
//! Cloneable handle to the [`SessionActor`](crate::session::SessionActor).
//! Each method sends one request and waits for the actor's reply.

use crate::model::Product;
use crate::session::{CartAction, SessionError, SessionId, SessionRequest, SessionState, Submission};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, SessionError>>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)?
    }

    /// Starts a session placing orders on behalf of `customer_id`.
    #[instrument(skip(self))]
    pub async fn open_session(&self, customer_id: String) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.call(|respond_to| SessionRequest::Open {
            customer_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self, id: SessionId) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.call(|respond_to| SessionRequest::Snapshot { id, respond_to })
            .await
    }

    /// Adds one unit of `product` and returns the updated session.
    #[instrument(skip(self, product), fields(product = product.id))]
    pub async fn add_to_cart(
        &self,
        id: SessionId,
        product: &'static Product,
    ) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.cart(id, CartAction::Add(product)).await
    }

    /// Removes one unit of `product` and returns the updated session.
    #[instrument(skip(self, product), fields(product = product.id))]
    pub async fn remove_from_cart(
        &self,
        id: SessionId,
        product: &'static Product,
    ) -> Result<SessionState, SessionError> {
        debug!("Sending request");
        self.cart(id, CartAction::Remove(product)).await
    }

    async fn cart(&self, id: SessionId, action: CartAction) -> Result<SessionState, SessionError> {
        self.call(|respond_to| SessionRequest::Cart {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Submits the session's cart.
    ///
    /// Fails with [`SessionError::EmptyCart`] before any network call when
    /// the cart is empty. Gateway failures are not errors here: they come back
    /// as a [`Submission`] carrying the matching status and notices.
    #[instrument(skip(self))]
    pub async fn place_order(&self, id: SessionId) -> Result<Submission, SessionError> {
        debug!("Sending request");
        self.call(|respond_to| SessionRequest::PlaceOrder { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn close_session(&self, id: SessionId) -> Result<(), SessionError> {
        debug!("Sending request");
        self.call(|respond_to| SessionRequest::Close { id, respond_to })
            .await
    }
}
