use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::catalog_service::DEFAULT_PAGE_SIZE;
use crate::domain::product::{Product, ProductQuery};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Exact category, case-insensitive.
    pub category: Option<String>,
    /// Upper price bound, inclusive.
    #[param(value_type = Option<String>)]
    pub price_range: Option<BigDecimal>,
    /// 1-based page number. Defaults to 1.
    #[serde(default = "default_page")]
    pub page_number: usize,
    /// Defaults to 10, maximum 100.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[schema(value_type = String)]
    pub price: BigDecimal,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            category: p.category,
            price: p.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Pagination {
    pub total_results: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSearchResponse {
    pub products: Vec<ProductResponse>,
    pub pagination: Pagination,
}

/// GET /search/product
///
/// Filters the catalog by name substring, category and maximum price, then
/// returns one page of the matches.
#[utoipa::path(
    get,
    path = "/search/product",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "One page of matching products", body = ProductSearchResponse),
        (status = 400, description = "Malformed query parameters"),
    ),
    tag = "products"
)]
pub async fn search_products(
    state: web::Data<AppState>,
    query: web::Query<ProductSearchParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let filter = ProductQuery {
        search: params.search,
        category: params.category,
        max_price: params.price_range,
    };

    let page = state
        .products
        .search(&filter, params.page_number, params.page_size);
    let pagination = Pagination {
        total_results: page.total,
        current_page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages(),
    };

    Ok(HttpResponse::Ok().json(ProductSearchResponse {
        products: page.items.into_iter().map(ProductResponse::from).collect(),
        pagination,
    }))
}
