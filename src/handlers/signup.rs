use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub name: String,
}

/// POST /signup
#[utoipa::path(
    post,
    path = "/signup",
    request_body(content = SignupForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Account created", body = SignupResponse),
        (status = 400, description = "Username already taken"),
        (status = 422, description = "Empty username or password"),
    ),
    tag = "signup"
)]
pub async fn sign_up(
    state: web::Data<AppState>,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    let account = state.accounts.sign_up(&form.username, &form.password)?;
    Ok(HttpResponse::Ok().json(SignupResponse {
        name: account.username,
    }))
}
