use bigdecimal::BigDecimal;

/// Static reference record for something that can be put in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    pub stock: u32,
}

/// Filters accepted by the product search. `None` means "don't filter".
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub max_price: Option<BigDecimal>,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.search.as_deref().map_or(true, |needle| {
            product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| product.category.eq_ignore_ascii_case(c));
        let price_ok = self
            .max_price
            .as_ref()
            .map_or(true, |max| &product.price <= max);

        name_ok && category_ok && price_ok
    }
}

#[derive(Debug, Clone)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl ProductPage {
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn laptop() -> Product {
        Product {
            id: 1,
            name: "Laptop".to_string(),
            category: "Electronics".to_string(),
            price: BigDecimal::from(1000),
            stock: 5,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(ProductQuery::default().matches(&laptop()));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let query = ProductQuery {
            search: Some("LAP".to_string()),
            ..Default::default()
        };
        assert!(query.matches(&laptop()));
    }

    #[test]
    fn category_must_match_whole_word() {
        let query = ProductQuery {
            category: Some("electro".to_string()),
            ..Default::default()
        };
        assert!(!query.matches(&laptop()));
    }

    #[test]
    fn max_price_is_inclusive() {
        let at = ProductQuery {
            max_price: Some(BigDecimal::from(1000)),
            ..Default::default()
        };
        let below = ProductQuery {
            max_price: Some(BigDecimal::from_str("999.99").expect("valid decimal")),
            ..Default::default()
        };
        assert!(at.matches(&laptop()));
        assert!(!below.matches(&laptop()));
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = ProductPage {
            items: vec![],
            total: 5,
            page: 1,
            page_size: 2,
        };
        assert_eq!(page.total_pages(), 3);
    }
}
