//! Registry access seam
//!
//! The store only needs a handful of operations on one key, so it talks to
//! these traits instead of a concrete registry API.

use crate::StoreError;

/// A registry root the store can open keys under.
pub trait Hive {
    type Key: RegistryKey;

    /// Open `path` for reading and writing. `Ok(None)` if it does not exist.
    fn open_key(&self, path: &str) -> Result<Option<Self::Key>, StoreError>;
}

/// An open registry key.
pub trait RegistryKey {
    /// Value names in enumeration order.
    fn value_names(&self) -> Result<Vec<String>, StoreError>;

    /// `None` if the value is absent or not a 32-bit integer.
    fn read_dword(&self, name: &str) -> Option<u32>;

    /// `None` if the value is absent or not binary.
    fn read_binary(&self, name: &str) -> Option<Vec<u8>>;

    fn write_dword(&self, name: &str, value: u32) -> Result<(), StoreError>;

    fn write_binary(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError>;
}
