use crate::domain::ports::ProductCatalog;
use crate::domain::product::{ProductPage, ProductQuery};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

pub struct CatalogService<C> {
    catalog: C,
}

impl<C: ProductCatalog> CatalogService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Filters the catalog and slices out one 1-based page of the matches.
    /// `page` is raised to 1 and `page_size` clamped to `1..=MAX_PAGE_SIZE`.
    pub fn search(&self, query: &ProductQuery, page: usize, page_size: usize) -> ProductPage {
        let page = page.max(1);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

        let matches: Vec<_> = self
            .catalog
            .all()
            .into_iter()
            .filter(|p| query.matches(p))
            .collect();
        let total = matches.len();
        let items = matches
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        ProductPage {
            items,
            total,
            page,
            page_size,
        }
    }
}
