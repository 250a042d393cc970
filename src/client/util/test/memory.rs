use std::{cell::RefCell, collections::HashMap};

use cookie::{time::Duration, Cookie};

use crate::client::{error::Error, storage::SessionStorage};

/// In-memory local storage and cookie jar
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    cookies: RefCell<Vec<(String, String)>>,
    set_cookie_calls: RefCell<Vec<String>>,
    failing: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every operation fails, like a browser blocking site data
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn insert_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn insert_cookie(&self, name: &str, value: &str) {
        let mut cookies = self.cookies.borrow_mut();
        cookies.retain(|(existing, _)| existing != name);
        cookies.push((name.to_string(), value.to_string()));
    }

    /// Reads an item without going through [`SessionStorage`]
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies
            .borrow()
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    /// Every string passed to [`SessionStorage::set_cookie`], in order
    pub fn set_cookie_calls(&self) -> Vec<String> {
        self.set_cookie_calls.borrow().clone()
    }

    fn check(&self) -> Result<(), Error> {
        if self.failing {
            return Err(Error::StorageError("storage disabled for test".to_string()));
        }

        Ok(())
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        self.check()?;

        Ok(self.item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        self.check()?;
        self.insert_item(key, value);

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        self.check()?;
        self.items.borrow_mut().remove(key);

        Ok(())
    }

    fn cookies(&self) -> Result<String, Error> {
        self.check()?;

        let jar = self
            .cookies
            .borrow()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ");

        Ok(jar)
    }

    fn set_cookie(&self, cookie: &str) -> Result<(), Error> {
        self.check()?;
        self.set_cookie_calls.borrow_mut().push(cookie.to_string());

        let parsed = Cookie::parse(cookie.to_string())
            .map_err(|e| Error::StorageError(format!("invalid cookie {:?}: {}", cookie, e)))?;

        let expired = parsed
            .max_age()
            .is_some_and(|max_age| max_age <= Duration::ZERO);

        if expired {
            self.cookies
                .borrow_mut()
                .retain(|(name, _)| name != parsed.name());
        } else {
            self.insert_cookie(parsed.name(), parsed.value());
        }

        Ok(())
    }
}
