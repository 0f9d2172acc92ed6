//! The orders tab: backend orders with their statistics, and the orders
//! placed from this session.

use crate::model::{LocalOrderRecord, ProcessedOrder};
use crate::orders::OrderStats;
use crate::view::format::{duration, money, or_na, timestamp, Table};
use std::fmt::{self, Display};

pub const NO_BACKEND_ORDERS: &str = "No orders found in the backend system.";
pub const NO_LOCAL_ORDERS: &str = "No orders submitted from this session yet. Start shopping!";

/// Number of most recent orders shown in detail.
pub const DETAIL_LIMIT: usize = 10;

pub struct BackendOrdersView<'a> {
    orders: &'a [ProcessedOrder],
}

impl<'a> BackendOrdersView<'a> {
    pub fn new(orders: &'a [ProcessedOrder]) -> Self {
        Self { orders }
    }
}

impl Display for BackendOrdersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== All Orders from Backend ==")?;
        if self.orders.is_empty() {
            return writeln!(f, "{}", NO_BACKEND_ORDERS);
        }

        let mut table = Table::new([
            "Order ID",
            "Customer ID",
            "Amount",
            "Status",
            "Processing Time",
            "Placed Time",
            "Confirmed Time",
        ]);
        for processed in self.orders {
            let o = &processed.order;
            table.row(vec![
                or_na(o.id.as_deref()).to_string(),
                or_na(o.customer_id.as_deref()).to_string(),
                money(o.amount.unwrap_or(0.0)),
                o.status.as_deref().unwrap_or("UNKNOWN").to_string(),
                duration(processed.processing_time),
                or_na(o.placed_time.as_deref()).to_string(),
                or_na(o.confirmed_time.as_deref()).to_string(),
            ]);
        }
        write!(f, "{}", table)?;

        let stats = OrderStats::from_orders(self.orders);
        writeln!(f)?;
        writeln!(f, "-- Detailed Order Information --")?;
        writeln!(
            f,
            "Total Orders: {} | Confirmed Orders: {} | Avg Processing: {} | Fastest: {}",
            stats.total,
            stats.confirmed,
            duration(stats.average_processing),
            duration(stats.fastest)
        )?;

        let start = self.orders.len().saturating_sub(DETAIL_LIMIT);
        for processed in self.orders[start..].iter().rev() {
            let o = &processed.order;
            let marker = if o.is_confirmed() { "✅" } else { "❓" };
            writeln!(f)?;
            writeln!(
                f,
                "{} Order {} - {}",
                marker,
                o.id.as_deref().unwrap_or("Unknown"),
                o.customer_id.as_deref().unwrap_or("Unknown")
            )?;
            writeln!(f, "    Order ID:        {}", or_na(o.id.as_deref()))?;
            writeln!(f, "    Customer ID:     {}", or_na(o.customer_id.as_deref()))?;
            writeln!(f, "    Amount:          {}", money(o.amount.unwrap_or(0.0)))?;
            writeln!(f, "    Status:          {}", o.status.as_deref().unwrap_or("UNKNOWN"))?;
            writeln!(f, "    Placed Time:     {}", timestamp(o.placed_time.as_deref()))?;
            writeln!(f, "    Confirmed Time:  {}", timestamp(o.confirmed_time.as_deref()))?;
            writeln!(f, "    Processing Time: {}", duration(processed.processing_time))?;
        }
        Ok(())
    }
}

pub struct LocalOrdersView<'a> {
    orders: &'a [LocalOrderRecord],
}

impl<'a> LocalOrdersView<'a> {
    pub fn new(orders: &'a [LocalOrderRecord]) -> Self {
        Self { orders }
    }
}

impl Display for LocalOrdersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Local Cart Orders (Submitted from this session) ==")?;
        if self.orders.is_empty() {
            return writeln!(f, "{}", NO_LOCAL_ORDERS);
        }

        let mut table = Table::new([
            "Customer ID",
            "Order ID",
            "Total Amount",
            "Items",
            "Status",
            "Submit Time",
        ]);
        for record in self.orders {
            table.row(vec![
                record.customer_id.clone(),
                or_na(record.order_id.as_deref()).to_string(),
                money(record.request.total_amount),
                record.item_count().to_string(),
                record.status.to_string(),
                record.submitted_at.format("%H:%M:%S").to_string(),
            ]);
        }
        write!(f, "{}", table)
    }
}
