use bigdecimal::BigDecimal;

use crate::domain::ports::ProductCatalog;
use crate::domain::product::Product;

// ── Seed data ─────────────────────────────────────────────────────────────────

const SEED: &[(i64, &str, &str, i64, u32)] = &[
    (1, "Laptop", "Electronics", 1000, 5),
    (2, "Smartphone", "Electronics", 500, 10),
    (3, "Tablet", "Electronics", 300, 7),
    (4, "Headphones", "Accessories", 100, 25),
    (5, "Backpack", "Accessories", 50, 12),
];

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Read-only product table held in memory for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|&(id, name, category, price, stock)| Product {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    price: BigDecimal::from(price),
                    stock,
                })
                .collect(),
        )
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn find_by_id(&self, id: i64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seeded_catalog_has_unique_ids() {
        let products = InMemoryCatalog::seeded().all();
        let ids: HashSet<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn find_by_id_returns_laptop_with_stock_five() {
        let laptop = InMemoryCatalog::seeded()
            .find_by_id(1)
            .expect("laptop should be seeded");

        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.stock, 5);
        assert_eq!(laptop.price, BigDecimal::from(1000));
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        assert!(InMemoryCatalog::seeded().find_by_id(99).is_none());
    }
}
