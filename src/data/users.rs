//! User directory module
//!
//! The static user list, the subscription table mapping a user id to
//! the currency char codes the user follows, and lookups over both.
//! Everything here is seeded once at startup and read-only afterwards.

use std::collections::HashMap;

use crate::models::{Currency, User};

/// Build the static user list.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Ali").expect("hard-coded user record is valid"),
        User::new(2, "Ivan").expect("hard-coded user record is valid"),
        User::new(3, "Maria").expect("hard-coded user record is valid"),
    ]
}

/// Build the subscription table: user id to subscribed char codes.
pub fn seed_subscriptions() -> HashMap<i64, Vec<String>> {
    HashMap::from([
        (1, vec!["USD".to_string(), "EUR".to_string()]),
        (2, vec!["USD".to_string()]),
        (3, Vec::new()),
    ])
}

/// Find a user by id. Linear scan; the list is tiny and fixed.
pub fn find_user_by_id(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|user| user.id() == id)
}

/// Filter `currencies` down to the ones the user subscribes to,
/// preserving the source order. A user missing from the table has no
/// subscriptions.
pub fn subscribed_currencies(
    subscriptions: &HashMap<i64, Vec<String>>,
    user_id: i64,
    currencies: Vec<Currency>,
) -> Vec<Currency> {
    let Some(codes) = subscriptions.get(&user_id) else {
        return Vec::new();
    };
    currencies
        .into_iter()
        .filter(|currency| codes.iter().any(|code| code == currency.char_code()))
        .collect()
}
