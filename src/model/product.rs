/// A purchasable item in the static catalog.
///
/// Products are defined once at compile time and never mutated. Every other
/// part of the dashboard holds `&'static Product` references, so a cart can
/// only ever contain items that exist in the [`CATALOG`].
#[derive(Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
}

/// The closed, read-only set of products offered by the shop.
#[derive(Debug)]
pub struct Catalog {
    products: &'static [Product],
}

/// The process-wide catalog.
pub static CATALOG: Catalog = Catalog {
    products: &[
        Product {
            id: "item1",
            name: "Premium Laptop",
            price: 1299.99,
            description: "High-performance laptop with 16GB RAM",
        },
        Product {
            id: "item2",
            name: "Wireless Mouse",
            price: 29.99,
            description: "Ergonomic wireless mouse with USB receiver",
        },
        Product {
            id: "item3",
            name: "Mechanical Keyboard",
            price: 149.99,
            description: "RGB mechanical keyboard with blue switches",
        },
        Product {
            id: "item4",
            name: "4K Monitor",
            price: 399.99,
            description: "27-inch 4K UHD monitor with HDR support",
        },
        Product {
            id: "item5",
            name: "USB-C Hub",
            price: 79.99,
            description: "7-in-1 USB-C hub with HDMI and USB 3.0 ports",
        },
        Product {
            id: "item6",
            name: "Webcam HD",
            price: 89.99,
            description: "1080p HD webcam with auto-focus",
        },
    ],
};

impl Catalog {
    /// Looks up a product by its identifier.
    pub fn get(&self, id: &str) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in display order.
    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let mouse = CATALOG.get("item2").expect("item2 should exist");
        assert_eq!(mouse.name, "Wireless Mouse");
        assert_eq!(mouse.price, 29.99);
        assert!(CATALOG.get("item42").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let products = CATALOG.products();
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        assert_eq!(CATALOG.len(), 6);
    }
}
