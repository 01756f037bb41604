//! Railgfx Data Model
//!
//! Types shared by the configuration store and the edit session:
//! - Ordinal enumerations (quality tiers, anti-aliasing, presets)
//! - Resolution and advanced graphics bundles
//! - Option domains and display labels for UI collaborators

#[macro_use]
mod macros;

pub mod error;
pub mod options;
pub mod quality;
pub mod settings;

pub use error::ModelError;
pub use quality::{AntiAliasing, PresetId, Quality};
pub use settings::{
    AdvancedField, AdvancedGraphicsSettings, FieldValue, GraphicsConfiguration, Resolution,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
