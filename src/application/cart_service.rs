use std::sync::{Mutex, MutexGuard};

use crate::domain::cart::{Cart, CartEntry};
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductCatalog;

/// Owns the shared cart and serialises every ledger operation behind one lock.
pub struct CartService<C> {
    catalog: C,
    cart: Mutex<Cart>,
}

impl<C: ProductCatalog> CartService<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            cart: Mutex::new(Cart::new()),
        }
    }

    pub fn add_item(&self, product_id: i64, quantity: i64) -> Result<(), DomainError> {
        let result = self.lock()?.add_item(&self.catalog, product_id, quantity);
        log_outcome("add", product_id, quantity, &result);
        result
    }

    pub fn update_item(&self, product_id: i64, quantity: i64) -> Result<(), DomainError> {
        let result = self
            .lock()?
            .update_item(&self.catalog, product_id, quantity);
        log_outcome("update", product_id, quantity, &result);
        result
    }

    pub fn remove_item(&self, product_id: i64) -> Result<(), DomainError> {
        let result = self.lock()?.remove_item(product_id);
        match &result {
            Ok(()) => log::info!("cart remove: product {}", product_id),
            Err(e) => log::warn!("cart remove rejected for product {}: {}", product_id, e),
        }
        result
    }

    pub fn contents(&self) -> Result<Vec<CartEntry>, DomainError> {
        Ok(self.lock()?.entries().to_vec())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Cart>, DomainError> {
        self.cart
            .lock()
            .map_err(|e| DomainError::Internal(format!("cart lock poisoned: {}", e)))
    }
}

fn log_outcome(op: &str, product_id: i64, quantity: i64, result: &Result<(), DomainError>) {
    match result {
        Ok(()) => log::info!("cart {}: product {} quantity {}", op, product_id, quantity),
        Err(e) => log::warn!(
            "cart {} rejected for product {} quantity {}: {}",
            op,
            product_id,
            quantity,
            e
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::infrastructure::catalog::InMemoryCatalog;

    fn service() -> CartService<InMemoryCatalog> {
        CartService::new(InMemoryCatalog::seeded())
    }

    #[test]
    fn contents_start_empty() {
        assert!(service().contents().expect("contents failed").is_empty());
    }

    #[test]
    fn add_update_remove_flow() {
        let svc = service();
        svc.add_item(2, 3).expect("add failed");
        svc.update_item(2, 9).expect("update failed");
        assert_eq!(
            svc.contents().expect("contents failed"),
            vec![CartEntry {
                product_id: 2,
                quantity: 9
            }]
        );

        svc.remove_item(2).expect("remove failed");
        assert!(svc.contents().expect("contents failed").is_empty());
    }

    #[test]
    fn failed_update_does_not_change_contents() {
        let svc = service();
        svc.add_item(1, 2).expect("add failed");

        assert!(svc.update_item(1, 100).is_err());
        assert_eq!(svc.contents().expect("contents failed")[0].quantity, 2);
    }

    #[test]
    fn concurrent_adds_are_not_lost() {
        let svc = Arc::new(service());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = Arc::clone(&svc);
                thread::spawn(move || {
                    for _ in 0..25 {
                        svc.add_item(4, 1).expect("add failed");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("worker panicked");
        }

        let contents = svc.contents().expect("contents failed");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].quantity, 200);
    }
}
