//! Railgfx Configuration Store
//!
//! Reads and writes the game's graphics configuration in the per-user
//! registry:
//! - Prefix-based discovery of versioned value names
//! - JSON blobs stored as null-terminated binary values
//! - Canonical advanced settings for each preset

pub mod blob;
pub mod error;
pub mod hive;
pub mod layout;
pub mod memory;
pub mod presets;
pub mod store;

#[cfg(windows)]
pub mod windows;

pub use error::StoreError;
pub use hive::{Hive, RegistryKey};
pub use layout::StoreLayout;
pub use memory::{MemoryHive, MemoryValue};
pub use presets::{preset_defaults, preset_defaults_for_ordinal};
pub use store::GraphicsStore;

#[cfg(windows)]
pub use windows::WindowsHive;
