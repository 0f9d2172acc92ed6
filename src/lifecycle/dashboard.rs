use crate::config::Config;
use crate::gateway::{HttpOrderGateway, OrderGateway};
use crate::model::{Catalog, Notice, CATALOG};
use crate::orders::OrderFetcher;
use crate::session::{SessionClient, SessionError, SessionId};
use crate::shell::{Command, HELP};
use crate::view::{
    BackendOrdersView, CartView, CatalogView, LocalOrdersView, NoticesView, SystemInfoView,
};
use std::fmt::Write;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// The running dashboard: one session actor, one fetcher, one open session.
///
/// `Dashboard` is responsible for:
/// - **Dependency Wiring**: config to HTTP gateway, gateway to the session
///   actor (as its run context) and to the order fetcher
/// - **Rendering**: turning each shell [`Command`] into the text of the view
///   it asks for, with any notices on top
/// - **Lifecycle**: stopping the actor task on [`shutdown`](Dashboard::shutdown)
///
/// # Example
///
/// ```ignore
/// let dashboard = Dashboard::start(Config::from_env()).await?;
/// print!("{}", dashboard.handle(&Command::Shop).await);
/// dashboard.shutdown().await?;
/// ```
pub struct Dashboard {
    pub config: Config,

    /// Client for the session actor
    pub session_client: SessionClient,

    session: SessionId,
    fetcher: OrderFetcher,
    catalog: &'static Catalog,
    handles: Vec<JoinHandle<()>>,
}

impl Dashboard {
    /// Starts a dashboard talking to the order services named in `config`.
    pub async fn start(config: Config) -> Result<Self, String> {
        let gateway = HttpOrderGateway::new(&config).map_err(|e| e.to_string())?;
        Self::with_gateway(config, Arc::new(gateway)).await
    }

    /// Starts a dashboard on top of any gateway.
    pub async fn with_gateway(
        config: Config,
        gateway: Arc<dyn OrderGateway>,
    ) -> Result<Self, String> {
        let (session_actor, session_client) = crate::session::new();
        let session_handle = tokio::spawn(session_actor.run(gateway.clone()));

        let session = session_client
            .open_session(config.customer_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(%session, customer_id = %config.customer_id, "Dashboard ready");

        Ok(Self {
            config,
            session_client,
            session,
            fetcher: OrderFetcher::new(gateway),
            catalog: &CATALOG,
            handles: vec![session_handle],
        })
    }

    pub fn session_id(&self) -> SessionId {
        self.session
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// Executes one command and returns what should be shown for it.
    ///
    /// Failures never escape: they are rendered as notices.
    #[instrument(skip(self), fields(session = %self.session))]
    pub async fn handle(&self, command: &Command) -> String {
        match self.execute(command).await {
            Ok(text) => text,
            Err(e) => Notice::error(e.to_string()).to_string() + "\n",
        }
    }

    async fn execute(&self, command: &Command) -> Result<String, SessionError> {
        let mut out = String::new();
        match command {
            Command::Shop => {
                let _ = write!(out, "{}", CatalogView::new(self.catalog));
            }
            Command::Cart => {
                let state = self.session_client.snapshot(self.session).await?;
                let _ = write!(out, "{}", CartView::new(&state.cart));
            }
            Command::Add(product) => {
                self.session_client
                    .add_to_cart(self.session, *product)
                    .await?;
                let notice = Notice::success(format!("Added {} to cart!", product.name));
                let _ = writeln!(out, "{}", notice);
            }
            Command::Remove(product) => {
                let state = self
                    .session_client
                    .remove_from_cart(self.session, *product)
                    .await?;
                let _ = write!(out, "{}", CartView::new(&state.cart));
            }
            Command::PlaceOrder => {
                let submission = self.session_client.place_order(self.session).await?;
                let _ = write!(out, "{}", NoticesView::new(&submission.notices));
            }
            Command::Orders => {
                // One fetch per render, shared by both sections.
                let report = self.fetcher.fetch_all().await;
                let state = self.session_client.snapshot(self.session).await?;
                let _ = write!(out, "{}", NoticesView::new(&report.notices));
                let _ = write!(out, "{}", BackendOrdersView::new(&report.orders));
                let _ = writeln!(out);
                let _ = write!(out, "{}", LocalOrdersView::new(&state.orders));
            }
            Command::LocalOrders => {
                let state = self.session_client.snapshot(self.session).await?;
                let _ = write!(out, "{}", LocalOrdersView::new(&state.orders));
            }
            Command::Info => {
                let report = self.fetcher.fetch_all().await;
                let state = self.session_client.snapshot(self.session).await?;
                let _ = write!(out, "{}", NoticesView::new(&report.notices));
                let _ = write!(
                    out,
                    "{}",
                    SystemInfoView::new(&self.config, &state, &report.orders)
                );
            }
            Command::AutoRefresh(enabled) => {
                let notice = if *enabled {
                    Notice::info(format!(
                        "Auto-refresh every {} seconds",
                        self.config.refresh_interval.as_secs()
                    ))
                } else {
                    Notice::info("Auto-refresh off")
                };
                let _ = writeln!(out, "{}", notice);
            }
            Command::Help => {
                let _ = writeln!(out, "{}", HELP);
            }
            Command::Quit => {}
        }
        Ok(out)
    }

    /// Closes the session and waits for the actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard...");

        if let Err(e) = self.session_client.close_session(self.session).await {
            error!(error = %e, "Failed to close session");
        }

        // Dropping the last client closes the channel; the actor loop then
        // sees `None` and returns.
        drop(self.session_client);
        drop(self.fetcher);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Dashboard shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{GatewayError, MockGateway, SubmitReceipt};
    use crate::model::RemoteOrder;

    async fn dashboard(mock: Arc<MockGateway>) -> Dashboard {
        Dashboard::with_gateway(Config::default(), mock).await.unwrap()
    }

    fn laptop() -> &'static crate::model::Product {
        CATALOG.get("item1").unwrap()
    }

    #[tokio::test]
    async fn test_add_then_cart() {
        let mock = Arc::new(MockGateway::new());
        let dashboard = dashboard(mock.clone()).await;

        let out = dashboard.handle(&Command::Add(laptop())).await;
        assert_eq!(out, "[ok] Added Premium Laptop to cart!\n");

        let out = dashboard.handle(&Command::Cart).await;
        assert!(out.contains("Laptop"));
        assert!(out.contains("Total: $1299.99"));

        dashboard.shutdown().await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_empty_cart_order_is_a_notice() {
        let mock = Arc::new(MockGateway::new());
        let dashboard = dashboard(mock.clone()).await;

        let out = dashboard.handle(&Command::PlaceOrder).await;
        assert_eq!(out, "[error] Cart is empty!\n");
        assert_eq!(mock.submit_calls(), 0);

        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_order_then_local_history() {
        let mock = Arc::new(MockGateway::new());
        mock.expect_submit().return_ok(SubmitReceipt {
            status: 202,
            order_id: None,
        });
        let dashboard = dashboard(mock.clone()).await;

        dashboard.handle(&Command::Add(laptop())).await;
        let out = dashboard.handle(&Command::PlaceOrder).await;
        assert!(out.contains("Order submitted successfully! Customer ID: OMS-Cust-001"));

        let out = dashboard.handle(&Command::LocalOrders).await;
        assert!(out.contains("$1299.99"));
        assert!(out.contains("Submitted"));

        dashboard.shutdown().await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_orders_fetches_once() {
        let mock = Arc::new(MockGateway::new());
        mock.expect_fetch().return_ok(vec![RemoteOrder {
            id: Some("42".to_string()),
            status: Some("CONFIRMED".to_string()),
            ..Default::default()
        }]);
        let dashboard = dashboard(mock.clone()).await;

        let out = dashboard.handle(&Command::Orders).await;
        assert_eq!(mock.fetch_calls(), 1);
        assert!(out.contains("Order 42"));
        assert!(out.contains("No orders submitted from this session yet."));

        dashboard.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_info_when_backend_is_down() {
        let mock = Arc::new(MockGateway::new());
        mock.expect_fetch()
            .return_err(GatewayError::Connect("refused".into()));
        let dashboard = dashboard(mock.clone()).await;

        let out = dashboard.handle(&Command::Info).await;
        assert!(out.contains("[warn] Unable to connect to order retrieval service."));
        assert!(out.contains("Backend Orders: 0"));
        assert!(out.contains("Cart is empty"));

        dashboard.shutdown().await.unwrap();
    }
}
