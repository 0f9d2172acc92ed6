//! In-progress selection of products for one session.

use crate::model::Product;

/// One line of the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: &'static Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Product quantities keyed by product, kept in insertion order.
///
/// An entry whose quantity would drop to zero is removed instead, so every
/// entry present has `quantity >= 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the quantity of `product`, inserting it with quantity 1 if absent.
    pub fn add(&mut self, product: &'static Product) {
        match self.entries.iter_mut().find(|e| e.product.id == product.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry {
                product,
                quantity: 1,
            }),
        }
    }

    /// Decrements the quantity of `product`, dropping the entry when it reaches zero.
    ///
    /// Removing a product that is not in the cart does nothing.
    pub fn remove(&mut self, product: &'static Product) {
        if let Some(pos) = self.entries.iter().position(|e| e.product.id == product.id) {
            if self.entries[pos].quantity > 1 {
                self.entries[pos].quantity -= 1;
            } else {
                self.entries.remove(pos);
            }
        }
    }

    /// Sum of price × quantity over all entries; `0.0` for an empty cart.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.product.id == product_id)
            .map(|e| e.quantity)
    }

    /// Total number of units across all entries.
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Flattened product ids, one per unit, in insertion order.
    pub fn product_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.product.id.to_string()).take(e.quantity as usize))
            .collect()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    fn product(id: &str) -> &'static Product {
        CATALOG.get(id).unwrap()
    }

    #[test]
    fn test_add_increments_existing_entry() {
        let mut cart = Cart::new();
        cart.add(product("item1"));
        cart.add(product("item1"));
        cart.add(product("item2"));

        assert_eq!(cart.quantity_of("item1"), Some(2));
        assert_eq!(cart.quantity_of("item2"), Some(1));
        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_drops_entry_at_zero() {
        let mut cart = Cart::new();
        cart.add(product("item3"));
        cart.add(product("item3"));

        cart.remove(product("item3"));
        assert_eq!(cart.quantity_of("item3"), Some(1));

        cart.remove(product("item3"));
        assert_eq!(cart.quantity_of("item3"), None);
        assert!(cart.is_empty());

        // Removing an absent product is a no-op
        cart.remove(product("item3"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantities_stay_positive_over_mixed_sequence() {
        let ops: [(bool, &str); 10] = [
            (true, "item1"),
            (false, "item1"),
            (false, "item1"),
            (true, "item2"),
            (true, "item2"),
            (false, "item5"),
            (true, "item5"),
            (false, "item2"),
            (true, "item1"),
            (false, "item5"),
        ];
        let mut cart = Cart::new();
        for (add, id) in ops {
            if add {
                cart.add(product(id));
            } else {
                cart.remove(product(id));
            }
            assert!(cart.entries().iter().all(|e| e.quantity >= 1));
        }
        assert_eq!(cart.quantity_of("item1"), Some(1));
        assert_eq!(cart.quantity_of("item2"), Some(1));
        assert_eq!(cart.quantity_of("item5"), None);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0.0);

        cart.add(product("item2"));
        cart.add(product("item2"));
        cart.add(product("item5"));

        let expected = 29.99 * 2.0 + 79.99;
        assert!((cart.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_product_ids_repeat_per_unit() {
        let mut cart = Cart::new();
        cart.add(product("item4"));
        cart.add(product("item1"));
        cart.add(product("item4"));

        assert_eq!(cart.product_ids(), vec!["item4", "item4", "item1"]);
    }
}
