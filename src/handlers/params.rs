use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::errors::DomainError;
use crate::errors::AppError;

const USERNAME_MIN_LEN: usize = 6;

// ── GET /items/ ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemParams {
    pub name: String,
    pub category: String,
    /// Decimal price, e.g. 9.99
    #[schema(value_type = String)]
    #[param(value_type = String)]
    pub price: BigDecimal,
}

/// GET /items/
///
/// Echoes the required query parameters back, with `price` parsed as an exact
/// decimal.
#[utoipa::path(
    get,
    path = "/items/",
    params(ItemParams),
    responses(
        (status = 200, description = "Parsed parameters", body = ItemParams),
        (status = 400, description = "Missing or malformed parameter"),
    ),
    tag = "params"
)]
pub async fn get_item(query: web::Query<ItemParams>) -> HttpResponse {
    HttpResponse::Ok().json(query.into_inner())
}

// ── GET /search/ ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    pub query: Option<String>,
    /// Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Defaults to 10.
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    10
}

/// GET /search/
///
/// Builds a link for the query. `size` is accepted but does not appear in the
/// link.
#[utoipa::path(
    get,
    path = "/search/",
    params(SearchParams),
    responses(
        (status = 200, description = "Single-element list holding the link", body = Vec<String>),
    ),
    tag = "params"
)]
pub async fn search_link(query: web::Query<SearchParams>) -> HttpResponse {
    let params = query.into_inner();
    log::debug!("search link requested with size {}", params.size);
    HttpResponse::Ok().json([search_url(params.query.as_deref(), params.page)])
}

fn search_url(query: Option<&str>, page: u32) -> String {
    format!("https://example.com/{}?page={}", query.unwrap_or_default(), page)
}

// ── GET /validate/ ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateParams {
    /// At least 6 characters of `[a-zA-Z0-9_]`.
    pub username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationResponse {
    pub message: String,
}

fn validate_username(username: &str) -> Result<(), DomainError> {
    if username.chars().count() < USERNAME_MIN_LEN {
        return Err(DomainError::InvalidInput(format!(
            "username must be at least {} characters",
            USERNAME_MIN_LEN
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(DomainError::InvalidInput(
            "username may only contain letters, digits and underscores".to_string(),
        ));
    }
    Ok(())
}

/// GET /validate/
#[utoipa::path(
    get,
    path = "/validate/",
    params(ValidateParams),
    responses(
        (status = 200, description = "Username accepted", body = ValidationResponse),
        (status = 422, description = "Username rejected"),
    ),
    tag = "params"
)]
pub async fn validate(query: web::Query<ValidateParams>) -> Result<HttpResponse, AppError> {
    let username = query.into_inner().username;
    validate_username(&username)?;
    Ok(HttpResponse::Ok().json(ValidationResponse {
        message: format!("{} is valid", username),
    }))
}

// ── GET /reports/{report_id} ─────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportRange {
    /// Start date, YYYY-MM-DD.
    pub start_date: Option<NaiveDate>,
    /// End date, YYYY-MM-DD.
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Report {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub report_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub report: Report,
}

/// GET /reports/{report_id}
///
/// Combines a path parameter, optional `YYYY-MM-DD` query dates and a JSON
/// body into one echo.
#[utoipa::path(
    get,
    path = "/reports/{report_id}",
    params(
        ("report_id" = String, Path, description = "Report identifier"),
        ReportRange,
    ),
    request_body = Report,
    responses(
        (status = 200, description = "Echoed report", body = ReportResponse),
        (status = 400, description = "Malformed date"),
        (status = 422, description = "Malformed body"),
    ),
    tag = "params"
)]
pub async fn get_report(
    path: web::Path<String>,
    range: web::Query<ReportRange>,
    body: web::Json<Report>,
) -> HttpResponse {
    let range = range.into_inner();
    HttpResponse::Ok().json(ReportResponse {
        report_id: path.into_inner(),
        start_date: range.start_date,
        end_date: range.end_date,
        report: body.into_inner(),
    })
}
