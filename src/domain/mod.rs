pub mod account;
pub mod blog;
pub mod cart;
pub mod errors;
pub mod ports;
pub mod product;
pub mod profile;
pub mod user;
