use crate::model::Cart;
use crate::view::format::{money, Table};
use std::fmt::{self, Display};

pub const EMPTY_CART: &str = "Your cart is empty. Add some products from the Shop tab!";

/// The cart tab: one line per product, then the order total.
pub struct CartView<'a> {
    cart: &'a Cart,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a Cart) -> Self {
        Self { cart }
    }
}

impl Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Shopping Cart ==")?;
        if self.cart.is_empty() {
            return writeln!(f, "{}", EMPTY_CART);
        }

        let mut table = Table::new(["Product", "Id", "Unit Price", "Qty", "Subtotal"]);
        for entry in self.cart.entries() {
            table.row(vec![
                entry.product.name.to_string(),
                entry.product.id.to_string(),
                format!("{} each", money(entry.product.price)),
                format!("Qty: {}", entry.quantity),
                money(entry.line_total()),
            ]);
        }
        write!(f, "{}", table)?;
        writeln!(f)?;
        writeln!(f, "Total: {}", money(self.cart.total()))?;
        writeln!(f, "Type `order` to place the order.")
    }
}
