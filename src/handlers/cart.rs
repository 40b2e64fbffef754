use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::AppError;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartItemForm {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveItemParams {
    /// Product to remove
    pub product_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

fn message(msg: &str) -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: msg.to_string(),
    })
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartEntryResponse {
    pub product_id: i64,
    pub quantity: u32,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /cart
///
/// Adds `quantity` units of a product. If the product is already in the cart
/// its quantity is increased; only the incoming quantity is checked against
/// stock.
#[utoipa::path(
    post,
    path = "/cart",
    request_body(content = CartItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Item added to cart", body = MessageResponse),
        (status = 400, description = "Invalid product ID or not enough stock"),
    ),
    tag = "cart"
)]
pub async fn add_to_cart(
    state: web::Data<AppState>,
    form: web::Form<CartItemForm>,
) -> Result<HttpResponse, AppError> {
    let CartItemForm {
        product_id,
        quantity,
    } = form.into_inner();
    state.cart.add_item(product_id, quantity)?;
    Ok(message("Item added to cart"))
}

/// PUT /cart
///
/// Replaces the quantity of a product that is already in the cart.
#[utoipa::path(
    put,
    path = "/cart",
    request_body(content = CartItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Cart updated", body = MessageResponse),
        (status = 400, description = "Product not in cart, invalid product, non-positive quantity or not enough stock"),
    ),
    tag = "cart"
)]
pub async fn update_cart(
    state: web::Data<AppState>,
    form: web::Form<CartItemForm>,
) -> Result<HttpResponse, AppError> {
    let CartItemForm {
        product_id,
        quantity,
    } = form.into_inner();
    state.cart.update_item(product_id, quantity)?;
    Ok(message("Cart updated"))
}

/// DELETE /cart?product_id=
#[utoipa::path(
    delete,
    path = "/cart",
    params(RemoveItemParams),
    responses(
        (status = 200, description = "Item removed from cart", body = MessageResponse),
        (status = 400, description = "Product not in cart"),
    ),
    tag = "cart"
)]
pub async fn remove_from_cart(
    state: web::Data<AppState>,
    query: web::Query<RemoveItemParams>,
) -> Result<HttpResponse, AppError> {
    state.cart.remove_item(query.product_id)?;
    Ok(message("Item removed from cart"))
}

/// GET /cart
///
/// Returns the cart entries in the order they were first added.
#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Current cart contents", body = Vec<CartEntryResponse>),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_cart(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries: Vec<CartEntryResponse> = state
        .cart
        .contents()?
        .into_iter()
        .map(|e| CartEntryResponse {
            product_id: e.product_id,
            quantity: e.quantity,
        })
        .collect();
    Ok(HttpResponse::Ok().json(entries))
}
