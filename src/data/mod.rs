// In-memory data module entry point
// Currency source and the user directory seeded at startup

pub mod currencies;
pub mod users;

// Re-export commonly used functions
pub use currencies::get_currencies;
pub use users::{find_user_by_id, seed_subscriptions, seed_users, subscribed_currencies};
