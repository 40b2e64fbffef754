use utoipa::OpenApi;

use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::cart::add_to_cart,
        handlers::cart::update_cart,
        handlers::cart::remove_from_cart,
        handlers::cart::get_cart,
        handlers::products::search_products,
        handlers::blog::create_post,
        handlers::blog::list_posts,
        handlers::users::register_user,
        handlers::profiles::create_profile,
        handlers::profiles::update_profile,
        handlers::signup::sign_up,
        handlers::params::get_item,
        handlers::params::search_link,
        handlers::params::validate,
        handlers::params::get_report,
    ),
    components(schemas(
        handlers::cart::CartItemForm,
        handlers::cart::MessageResponse,
        handlers::cart::CartEntryResponse,
        handlers::products::ProductSearchResponse,
        handlers::blog::BlogPostRequest,
        handlers::blog::BlogPostResponse,
        handlers::users::UserBody,
        handlers::profiles::ProfileForm,
        handlers::profiles::ProfileUpdateRequest,
        handlers::profiles::ProfileResponse,
        handlers::signup::SignupForm,
        handlers::signup::SignupResponse,
        handlers::params::ItemParams,
        handlers::params::ReportResponse,
    )),
    tags(
        (name = "cart", description = "Shared shopping cart"),
        (name = "products", description = "Product catalog search"),
        (name = "blog", description = "Blog posts"),
        (name = "users", description = "User registration"),
        (name = "profiles", description = "User profiles"),
        (name = "signup", description = "Account signup"),
        (name = "params", description = "Query, path and body parameter handling"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/cart",
            "/search/product",
            "/blog",
            "/getBlog",
            "/users/",
            "/profile",
            "/update/profile",
            "/signup",
            "/items/",
            "/search/",
            "/validate/",
            "/reports/{report_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
