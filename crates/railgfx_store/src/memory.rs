//! In-process hive for tests and non-Windows builds

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

use crate::{Hive, RegistryKey, StoreError};

/// A typed registry value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryValue {
    Dword(u32),
    Binary(Vec<u8>),
    Text(String),
}

type Values = Vec<(String, MemoryValue)>;

/// Registry stand-in. Values keep insertion order, matching how the real
/// registry enumerates them once written.
///
/// Clones share the same storage, so a test can keep a handle and inspect
/// what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryHive {
    keys: Rc<RefCell<BTreeMap<String, Values>>>,
}

impl MemoryHive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_key(&self, path: &str) {
        self.keys.borrow_mut().entry(path.to_string()).or_default();
    }

    pub fn remove_key(&self, path: &str) {
        self.keys.borrow_mut().remove(path);
    }

    /// Set a value, creating the key if needed.
    pub fn set_value(&self, path: &str, name: &str, value: MemoryValue) {
        let mut keys = self.keys.borrow_mut();
        let values = keys.entry(path.to_string()).or_default();
        upsert(values, name, value);
    }

    pub fn value(&self, path: &str, name: &str) -> Option<MemoryValue> {
        self.keys
            .borrow()
            .get(path)?
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    pub fn value_names(&self, path: &str) -> Vec<String> {
        self.keys
            .borrow()
            .get(path)
            .map(|values| values.iter().map(|(n, _)| n.clone()).collect())
            .unwrap_or_default()
    }
}

impl Hive for MemoryHive {
    type Key = MemoryKey;

    fn open_key(&self, path: &str) -> Result<Option<MemoryKey>, StoreError> {
        if !self.keys.borrow().contains_key(path) {
            return Ok(None);
        }
        Ok(Some(MemoryKey {
            keys: Rc::clone(&self.keys),
            path: path.to_string(),
        }))
    }
}

/// Open key into a [`MemoryHive`].
#[derive(Debug)]
pub struct MemoryKey {
    keys: Rc<RefCell<BTreeMap<String, Values>>>,
    path: String,
}

impl MemoryKey {
    fn get(&self, name: &str) -> Option<MemoryValue> {
        self.keys
            .borrow()
            .get(&self.path)?
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn put(&self, name: &str, value: MemoryValue) -> Result<(), StoreError> {
        let mut keys = self.keys.borrow_mut();
        // The key may have been deleted since it was opened.
        let values = keys.get_mut(&self.path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("key '{}' was removed", self.path))
        })?;
        upsert(values, name, value);
        Ok(())
    }
}

impl RegistryKey for MemoryKey {
    fn value_names(&self) -> Result<Vec<String>, StoreError> {
        let keys = self.keys.borrow();
        let values = keys.get(&self.path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("key '{}' was removed", self.path))
        })?;
        Ok(values.iter().map(|(n, _)| n.clone()).collect())
    }

    fn read_dword(&self, name: &str) -> Option<u32> {
        match self.get(name)? {
            MemoryValue::Dword(v) => Some(v),
            _ => None,
        }
    }

    fn read_binary(&self, name: &str) -> Option<Vec<u8>> {
        match self.get(name)? {
            MemoryValue::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }

    fn write_dword(&self, name: &str, value: u32) -> Result<(), StoreError> {
        self.put(name, MemoryValue::Dword(value))
    }

    fn write_binary(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.put(name, MemoryValue::Binary(bytes.to_vec()))
    }
}

fn upsert(values: &mut Values, name: &str, value: MemoryValue) {
    match values.iter_mut().find(|(n, _)| n == name) {
        Some((_, slot)) => *slot = value,
        None => values.push((name.to_string(), value)),
    }
}
