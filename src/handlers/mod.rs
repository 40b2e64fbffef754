pub mod blog;
pub mod cart;
pub mod params;
pub mod products;
pub mod profiles;
pub mod signup;
pub mod users;
