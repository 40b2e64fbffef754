use super::errors::DomainError;
use super::ports::ProductCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub product_id: i64,
    pub quantity: u32,
}

/// Reserved quantities keyed by product, in insertion order.
///
/// Stock is only consulted when a mutation happens and is never decremented,
/// so repeated adds can push an entry past the product's stock: each add
/// checks the incoming quantity alone, not the resulting total.
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn quantity_of(&self, product_id: i64) -> Option<u32> {
        self.position(product_id).map(|i| self.entries[i].quantity)
    }

    pub fn add_item<C: ProductCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), DomainError> {
        let product = catalog
            .find_by_id(product_id)
            .ok_or(DomainError::ProductNotFound(product_id))?;
        let quantity = checked_quantity(quantity, product.stock)?;

        match self.position(product_id) {
            Some(i) => {
                let entry = &mut self.entries[i];
                entry.quantity = entry.quantity.checked_add(quantity).ok_or_else(|| {
                    DomainError::InvalidInput(format!(
                        "quantity for product {} overflows",
                        product_id
                    ))
                })?;
            }
            None => self.entries.push(CartEntry {
                product_id,
                quantity,
            }),
        }
        Ok(())
    }

    pub fn update_item<C: ProductCatalog + ?Sized>(
        &mut self,
        catalog: &C,
        product_id: i64,
        quantity: i64,
    ) -> Result<(), DomainError> {
        let i = self
            .position(product_id)
            .ok_or(DomainError::NotInCart(product_id))?;
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        let product = catalog
            .find_by_id(product_id)
            .ok_or(DomainError::ProductNotFound(product_id))?;

        self.entries[i].quantity = checked_quantity(quantity, product.stock)?;
        Ok(())
    }

    pub fn remove_item(&mut self, product_id: i64) -> Result<(), DomainError> {
        let i = self
            .position(product_id)
            .ok_or(DomainError::NotInCart(product_id))?;
        self.entries.remove(i);
        Ok(())
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.entries.iter().position(|e| e.product_id == product_id)
    }
}

/// Validates `requested` against `stock` and narrows it to the stored width.
fn checked_quantity(requested: i64, stock: u32) -> Result<u32, DomainError> {
    if requested <= 0 {
        return Err(DomainError::InvalidQuantity(requested));
    }
    if i64::from(stock) < requested {
        return Err(DomainError::InsufficientStock {
            requested,
            available: stock,
        });
    }
    // stock is a u32, so anything that got here fits
    u32::try_from(requested).map_err(|e| DomainError::Internal(e.to_string()))
}
