use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::application::cart_service::CartService;
use crate::application::catalog_service::CatalogService;
use crate::application::profile_service::ProfileService;
use crate::application::signup_service::SignupService;
use crate::application::user_service::UserService;
use crate::infrastructure::catalog::InMemoryCatalog;

pub type SharedCatalog = Arc<InMemoryCatalog>;

/// Everything the handlers read or mutate. Built once and shared across
/// workers through `web::Data`.
pub struct AppState {
    pub products: CatalogService<SharedCatalog>,
    pub cart: CartService<SharedCatalog>,
    pub blog: BlogService,
    pub users: UserService,
    pub profiles: ProfileService,
    pub accounts: SignupService,
}

impl AppState {
    pub fn new(catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            products: CatalogService::new(Arc::clone(&catalog)),
            cart: CartService::new(catalog),
            blog: BlogService::new(),
            users: UserService::new(),
            profiles: ProfileService::new(),
            accounts: SignupService::seeded(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(InMemoryCatalog::seeded())
    }
}
