use crate::model::Catalog;
use crate::view::format::money;
use std::fmt::{self, Display};

/// The shop tab: every product with the id used by `add`.
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Product Catalog ==")?;
        for product in self.catalog.products() {
            writeln!(f)?;
            writeln!(f, "[{}] {}", product.id, product.name)?;
            writeln!(f, "    {}", product.description)?;
            writeln!(f, "    Price: {}", money(product.price))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    #[test]
    fn test_lists_every_product() {
        let rendered = CatalogView::new(&CATALOG).to_string();
        for product in CATALOG.products() {
            assert!(rendered.contains(&format!("[{}] {}", product.id, product.name)));
        }
        assert!(rendered.contains("Price: $1299.99"));
        assert!(rendered.contains("Price: $29.99"));
    }
}
