use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::{Address, User};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AddressBody {
    pub street: String,
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    pub name: String,
    pub email: String,
    pub address: AddressBody,
}

impl From<UserBody> for User {
    fn from(u: UserBody) -> Self {
        User {
            name: u.name,
            email: u.email,
            address: Address {
                street: u.address.street,
                city: u.address.city,
                zip: u.address.zip,
            },
        }
    }
}

impl From<User> for UserBody {
    fn from(u: User) -> Self {
        UserBody {
            name: u.name,
            email: u.email,
            address: AddressBody {
                street: u.address.street,
                city: u.address.city,
                zip: u.address.zip,
            },
        }
    }
}

/// POST /users/
///
/// Registers a user with a nested address and returns everyone registered so
/// far.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = UserBody,
    responses(
        (status = 200, description = "All registered users", body = Vec<UserBody>),
        (status = 422, description = "Malformed body"),
    ),
    tag = "users"
)]
pub async fn register_user(
    state: web::Data<AppState>,
    body: web::Json<UserBody>,
) -> Result<HttpResponse, AppError> {
    let users: Vec<UserBody> = state
        .users
        .register(body.into_inner().into())?
        .into_iter()
        .map(UserBody::from)
        .collect();
    Ok(HttpResponse::Ok().json(users))
}
