//! # Session Runtime
//!
//! Per-user state held across renders, owned by a single actor task.
//!
//! ## Structure
//!
//! - [`state`] - [`SessionState`] and its pure transitions ([`CartAction`], submission settlement)
//! - [`actor`] - [`SessionActor`], the sequential event loop owning all sessions
//! - [`client`] - [`SessionClient`], the typed handle callers use
//! - [`error`] - [`SessionError`]
//!
//! ## Usage
//!
//! ```rust
//! use oms_dashboard::gateway::{MockGateway, OrderGateway};
//! use oms_dashboard::model::CATALOG;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = oms_dashboard::session::new();
//!     let gateway: Arc<dyn OrderGateway> = Arc::new(MockGateway::new());
//!     tokio::spawn(actor.run(gateway));
//!
//!     let id = client.open_session("OMS-Cust-001".to_string()).await?;
//!     let laptop = CATALOG.get("item1").unwrap();
//!     let state = client.add_to_cart(id, laptop).await?;
//!     assert_eq!(state.cart.quantity_of("item1"), Some(1));
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod state;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use state::*;

/// Creates a new session actor and its client.
pub fn new() -> (SessionActor, SessionClient) {
    SessionActor::new(32)
}
