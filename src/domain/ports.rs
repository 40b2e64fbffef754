use std::sync::Arc;

use super::product::Product;

pub trait ProductCatalog: Send + Sync + 'static {
    fn find_by_id(&self, id: i64) -> Option<Product>;
    fn all(&self) -> Vec<Product>;
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    fn find_by_id(&self, id: i64) -> Option<Product> {
        (**self).find_by_id(id)
    }

    fn all(&self) -> Vec<Product> {
        (**self).all()
    }
}
