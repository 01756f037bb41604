//! `HKEY_CURRENT_USER` through winreg

use std::io;

use winreg::enums::{HKEY_CURRENT_USER, KEY_READ, KEY_WRITE, REG_BINARY};
use winreg::{RegKey, RegValue};

use crate::{Hive, RegistryKey, StoreError};

/// The current user's registry hive.
pub struct WindowsHive {
    root: RegKey,
}

impl WindowsHive {
    pub fn current_user() -> Self {
        Self {
            root: RegKey::predef(HKEY_CURRENT_USER),
        }
    }
}

impl Default for WindowsHive {
    fn default() -> Self {
        Self::current_user()
    }
}

impl Hive for WindowsHive {
    type Key = WindowsKey;

    fn open_key(&self, path: &str) -> Result<Option<WindowsKey>, StoreError> {
        match self.root.open_subkey_with_flags(path, KEY_READ | KEY_WRITE) {
            Ok(key) => Ok(Some(WindowsKey(key))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

pub struct WindowsKey(RegKey);

impl RegistryKey for WindowsKey {
    fn value_names(&self) -> Result<Vec<String>, StoreError> {
        self.0
            .enum_values()
            .map(|entry| entry.map(|(name, _)| name).map_err(StoreError::from))
            .collect()
    }

    fn read_dword(&self, name: &str) -> Option<u32> {
        self.0.get_value::<u32, _>(name).ok()
    }

    fn read_binary(&self, name: &str) -> Option<Vec<u8>> {
        let value = self.0.get_raw_value(name).ok()?;
        matches!(value.vtype, REG_BINARY).then_some(value.bytes)
    }

    fn write_dword(&self, name: &str, value: u32) -> Result<(), StoreError> {
        self.0.set_value(name, &value)?;
        Ok(())
    }

    fn write_binary(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let value = RegValue {
            bytes: bytes.to_vec(),
            vtype: REG_BINARY,
        };
        self.0.set_raw_value(name, &value)?;
        Ok(())
    }
}
