// Domain model module entry point
// Validated value objects for the application's data

mod app;
mod author;
mod currency;
mod field;
mod user;
mod user_currency;

// Re-export public types
pub use app::App;
pub use author::Author;
pub use currency::Currency;
pub use field::ModelError;
pub use user::User;
#[allow(unused_imports)]
pub use user_currency::UserCurrency;
