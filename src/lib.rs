//! # Order Management Dashboard
//!
//! A terminal dashboard for a small order management system: browse a fixed
//! catalog, fill a cart, submit orders to the edge service, and watch every
//! order the backend knows about together with its processing time.
//!
//! ## Design Notes
//!
//! ### 1. One Actor per Concern
//! Session state (cart and locally placed orders) lives in a single
//! [`SessionActor`](session::SessionActor) task. Requests are processed one at a
//! time, so a session never observes a half-applied interaction and no locks are
//! needed around its state.
//!
//! ### 2. Context Injection
//! The actor receives its [`OrderGateway`](gateway::OrderGateway) when it starts
//! running, not when it is built. Production wires in
//! [`HttpOrderGateway`](gateway::HttpOrderGateway); tests wire in
//! [`MockGateway`](gateway::MockGateway).
//!
//! ### 3. Failures Are Notices
//! Connectivity problems, rejected submissions and malformed timestamps all end
//! up as a [`Notice`](model::Notice) next to the rendered view. An unreachable
//! order service degrades to a locally simulated order; an unreachable
//! retrieval service to an empty order list.
//!
//! ### 4. Observability
//! `tracing` with structured fields throughout. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - catalog, cart, order payloads and notices
//! - [`gateway`] - the two HTTP calls behind the [`OrderGateway`](gateway::OrderGateway) seam
//! - [`orders`] - fetching backend orders, processing times, statistics
//! - [`session`] - the session actor and its client
//! - [`view`] - text rendering of every tab
//! - [`shell`] - parsing of interactive commands
//! - [`refresh`] - the auto-refresh timer
//! - [`lifecycle`] - [`Dashboard`](lifecycle::Dashboard) wiring and tracing setup
//! - [`config`] - endpoints, identity and timings
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Against another deployment
//! OMS_SUBMIT_URL=http://edge:8090/orders OMS_RETRIEVE_URL=http://orders:8094/orders cargo run
//! ```

pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod refresh;
pub mod session;
pub mod shell;
pub mod view;
