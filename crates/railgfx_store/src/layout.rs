//! Where the game keeps its graphics settings

/// Per-user key the game writes its settings under.
pub const DEFAULT_ROOT: &str = r"Software\Cognosphere\Star Rail";

pub const PRESET_PREFIX: &str = "GraphicsSettings_GraphicsQuality_";
pub const RESOLUTION_PREFIX: &str = "GraphicsSettings_PCResolution_";
pub const ADVANCED_PREFIX: &str = "GraphicsSettings_Model_";

/// Version tag used when the advanced value has to be created from scratch.
pub const ADVANCED_FALLBACK_SUFFIX: &str = "h2986158309";

/// Registry layout the store reads and writes.
///
/// The game appends a version token to each value name, so names are
/// matched by prefix and never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    pub root: String,
    pub preset_prefix: String,
    pub resolution_prefix: String,
    pub advanced_prefix: String,
    pub advanced_fallback_suffix: String,
}

impl StoreLayout {
    /// Game layout under a different root key.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn fallback_advanced_name(&self) -> String {
        format!("{}{}", self.advanced_prefix, self.advanced_fallback_suffix)
    }
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            preset_prefix: PRESET_PREFIX.to_string(),
            resolution_prefix: RESOLUTION_PREFIX.to_string(),
            advanced_prefix: ADVANCED_PREFIX.to_string(),
            advanced_fallback_suffix: ADVANCED_FALLBACK_SUFFIX.to_string(),
        }
    }
}
