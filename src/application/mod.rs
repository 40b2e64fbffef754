pub mod blog_service;
pub mod cart_service;
pub mod catalog_service;
pub mod profile_service;
pub mod signup_service;
pub mod user_service;
