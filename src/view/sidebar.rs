use crate::config::Config;
use crate::model::ProcessedOrder;
use crate::orders::OrderStats;
use crate::session::SessionState;
use crate::view::format::{duration, money};
use std::fmt::{self, Display};

/// Endpoints, identity, cart summary and order counts.
pub struct SystemInfoView<'a> {
    config: &'a Config,
    session: &'a SessionState,
    backend_orders: &'a [ProcessedOrder],
}

impl<'a> SystemInfoView<'a> {
    pub fn new(
        config: &'a Config,
        session: &'a SessionState,
        backend_orders: &'a [ProcessedOrder],
    ) -> Self {
        Self {
            config,
            session,
            backend_orders,
        }
    }
}

impl Display for SystemInfoView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== System Info ==")?;
        writeln!(f, "API Endpoints:")?;
        writeln!(f, "  Submit:   {}", self.config.submit_url)?;
        writeln!(f, "  Retrieve: {}", self.config.retrieve_url)?;
        writeln!(f, "Customer ID: {}", self.session.customer_id)?;

        writeln!(f, "Cart Summary:")?;
        if self.session.cart.is_empty() {
            writeln!(f, "  Cart is empty")?;
        } else {
            for entry in self.session.cart.entries() {
                writeln!(f, "  • {}: {}", entry.product.name, entry.quantity)?;
            }
            writeln!(f, "  Total: {}", money(self.session.cart.total()))?;
        }

        let stats = OrderStats::from_orders(self.backend_orders);
        writeln!(f, "Order Statistics:")?;
        writeln!(f, "  • Backend Orders: {}", stats.total)?;
        writeln!(f, "  • Local Session: {}", self.session.orders.len())?;
        if stats.average_processing.is_some() {
            writeln!(f, "  • Backend Avg: {}", duration(stats.average_processing))?;
        }
        Ok(())
    }
}
