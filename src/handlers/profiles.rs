use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::{NewProfile, Profile, ProfilePatch};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileForm {
    /// At least 5 characters.
    pub name: String,
    /// At most 50 characters.
    pub email: String,
    /// File name of the profile picture; the file itself is not uploaded.
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileUpdateRequest {
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            image: p.image,
        }
    }
}

/// POST /profile
#[utoipa::path(
    post,
    path = "/profile",
    request_body(content = ProfileForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profile created", body = ProfileResponse),
        (status = 422, description = "Name too short or email invalid"),
    ),
    tag = "profiles"
)]
pub async fn create_profile(
    state: web::Data<AppState>,
    form: web::Form<ProfileForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let profile = state.profiles.create(NewProfile {
        name: form.name,
        email: form.email,
        image: form.image,
    })?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}

/// POST /update/profile
///
/// Partial update: omitted fields keep their current value.
#[utoipa::path(
    post,
    path = "/update/profile",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 404, description = "Profile not found"),
        (status = 422, description = "Name too short or email invalid"),
    ),
    tag = "profiles"
)]
pub async fn update_profile(
    state: web::Data<AppState>,
    body: web::Json<ProfileUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let profile = state.profiles.update(
        body.id,
        ProfilePatch {
            name: body.name,
            email: body.email,
            image: body.image,
        },
    )?;
    Ok(HttpResponse::Ok().json(ProfileResponse::from(profile)))
}
