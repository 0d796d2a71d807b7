// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-user settings storage.
//!
//! The calculation never reads storage itself; handlers load and save
//! settings through [`ConfigStore`] around it.

use crate::request_response::UserConfig;
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration store errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store holds the maximum number of users and cannot add another.
    #[error("Configuration store is full: at most {limit} users can be stored")]
    CapacityExceeded { limit: usize },
}

/// Storage for per-user planning settings.
pub trait ConfigStore: Send {
    /// Returns the settings saved for `username`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, username: &str) -> Result<Option<UserConfig>, StoreError>;

    /// Inserts or replaces the settings for `config.username`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be stored.
    fn upsert(&mut self, config: UserConfig) -> Result<(), StoreError>;
}

/// A process-local configuration store.
///
/// Contents are lost when the process exits.
#[derive(Debug, Clone)]
pub struct InMemoryConfigStore {
    configs: BTreeMap<String, UserConfig>,
    max_users: usize,
}

impl InMemoryConfigStore {
    /// Creates an empty store holding at most `max_users` users.
    #[must_use]
    pub const fn new(max_users: usize) -> Self {
        Self {
            configs: BTreeMap::new(),
            max_users,
        }
    }

    /// Returns the number of users with saved settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns whether no settings have been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn get(&self, username: &str) -> Result<Option<UserConfig>, StoreError> {
        Ok(self.configs.get(username).cloned())
    }

    fn upsert(&mut self, config: UserConfig) -> Result<(), StoreError> {
        if !self.configs.contains_key(&config.username) && self.configs.len() >= self.max_users {
            return Err(StoreError::CapacityExceeded {
                limit: self.max_users,
            });
        }

        self.configs.insert(config.username.clone(), config);
        Ok(())
    }
}
