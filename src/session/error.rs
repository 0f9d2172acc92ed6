//! Error types for the session runtime.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// No session is registered under this id.
    #[error("Session not found: {0}")]
    UnknownSession(String),

    /// An order was placed with nothing in the cart.
    #[error("Cart is empty!")]
    EmptyCart,

    /// The session actor is no longer running.
    #[error("Session actor closed")]
    ActorClosed,

    /// The session actor dropped the response channel.
    #[error("Session actor dropped response channel")]
    ActorDropped,
}
