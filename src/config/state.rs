// Application state module
// Runtime state shared by every connection, read-only after startup

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;

use crate::data;
use crate::models::{App, Author, ModelError, User};

use super::types::Config;

/// Application state
///
/// Built once at startup and shared behind an `Arc`. Nothing here is
/// mutated after construction, so request handlers take no locks.
pub struct AppState {
    pub config: Config,
    /// Validated application record built from the `app` config section.
    pub app: App,
    /// Static user list.
    pub users: Vec<User>,
    /// User id to subscribed currency char codes.
    pub subscriptions: HashMap<i64, Vec<String>>,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` from the loaded configuration.
    ///
    /// The `app` section passes through the model constructors, so an
    /// invalid value (empty name, blank author) aborts startup here.
    pub fn new(config: &Config) -> Result<Self, ModelError> {
        let author = Author::new(&config.app.author_name, &config.app.author_group)?;
        let app = App::new(&config.app.name, &config.app.version, author)?;

        Ok(Self {
            config: config.clone(),
            app,
            users: data::seed_users(),
            subscriptions: data::seed_subscriptions(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelError;

    #[test]
    fn test_state_from_default_config() {
        let config = Config::load_from("no-such-config-file").unwrap();
        let state = AppState::new(&config).unwrap();
        assert_eq!(state.app.name(), "Rateboard");
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.subscriptions.len(), 3);
    }

    #[test]
    fn test_invalid_app_section_refuses_to_boot() {
        let mut config = Config::load_from("no-such-config-file").unwrap();
        config.app.name = "   ".to_string();
        assert!(matches!(
            AppState::new(&config),
            Err(ModelError::Value { field: "name", .. })
        ));
    }
}
