pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod state;

use actix_web::{error, middleware::Logger, web, App, HttpRequest, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::Config;
pub use errors::AppError;
pub use state::AppState;

use openapi::ApiDoc;

/// Register every route and extractor config on an actix-web app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .service(
            web::resource("/cart")
                .route(web::get().to(handlers::cart::get_cart))
                .route(web::post().to(handlers::cart::add_to_cart))
                .route(web::put().to(handlers::cart::update_cart))
                .route(web::delete().to(handlers::cart::remove_from_cart)),
        )
        .route(
            "/search/product",
            web::get().to(handlers::products::search_products),
        )
        .route("/blog", web::post().to(handlers::blog::create_post))
        .route("/getBlog", web::get().to(handlers::blog::list_posts))
        .route("/users/", web::post().to(handlers::users::register_user))
        .route("/profile", web::post().to(handlers::profiles::create_profile))
        .route(
            "/update/profile",
            web::post().to(handlers::profiles::update_profile),
        )
        .route("/signup", web::post().to(handlers::signup::sign_up))
        .route("/items/", web::get().to(handlers::params::get_item))
        .route("/search/", web::get().to(handlers::params::search_link))
        .route("/validate/", web::get().to(handlers::params::validate))
        .route(
            "/reports/{report_id}",
            web::get().to(handlers::params::get_report),
        );
}

fn form_error(err: error::UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn query_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

fn json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Unprocessable(err.to_string()).into()
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
