//! "Remember me" persistence for the login form.
//!
//! Values are stored in plain text under `username`, `password` and
//! `rememberMe`. Unchecking the flag wipes all three on the next submit.

use crate::models::LoginCredentials;
use std::cell::RefCell;
use std::collections::HashMap;

pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
pub const REMEMBER_KEY: &str = "rememberMe";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) {
        (**self).delete(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub struct CredentialVault<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Credentials to pre-fill, present only while the flag is stored.
    pub fn load(&self) -> Option<LoginCredentials> {
        if self.store.get(REMEMBER_KEY).as_deref() != Some("true") {
            return None;
        }
        Some(LoginCredentials {
            username: self.store.get(USERNAME_KEY).unwrap_or_default(),
            password: self.store.get(PASSWORD_KEY).unwrap_or_default(),
        })
    }

    pub fn record(&self, remember: bool, credentials: &LoginCredentials) {
        if remember {
            self.store.set(USERNAME_KEY, &credentials.username);
            self.store.set(PASSWORD_KEY, &credentials.password);
            self.store.set(REMEMBER_KEY, "true");
        } else {
            self.store.delete(USERNAME_KEY);
            self.store.delete(PASSWORD_KEY);
            self.store.delete(REMEMBER_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_other_than_true_loads_nothing() {
        let store = MemoryStore::new();
        store.set(USERNAME_KEY, "ivan");
        store.set(REMEMBER_KEY, "false");
        assert_eq!(CredentialVault::new(store).load(), None);
    }
}
