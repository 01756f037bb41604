//! Ordinal enumerations persisted by the game

ordinal_enum! {
    /// Shared quality tier. Each advanced field accepts only a subset,
    /// see [`crate::options`].
    pub enum Quality("quality") {
        Off = 0 => "Off",
        VeryLow = 1 => "Very Low",
        Low = 2 => "Low",
        Medium = 3 => "Medium",
        High = 4 => "High",
        VeryHigh = 5 => "Very High",
    }
}

ordinal_enum! {
    /// The in-game "Anti-Aliasing" option. Ordinals follow the game, not the
    /// order the options are shown in.
    pub enum AntiAliasing("anti-aliasing mode") {
        Off = 0 => "Off",
        Taa = 1 => "TAA",
        Fxaa = 2 => "FXAA",
    }
}

ordinal_enum! {
    /// The in-game "Graphics Quality" preset.
    ///
    /// `Custom` means the advanced settings are not expected to match any
    /// canonical bundle.
    pub enum PresetId("graphics preset") {
        Custom = 0 => "Custom",
        VeryLow = 1 => "Very Low",
        Low = 2 => "Low",
        Medium = 3 => "Medium",
        High = 4 => "High",
        VeryHigh = 5 => "Very High",
    }
}

impl PresetId {
    pub fn is_custom(self) -> bool {
        self == PresetId::Custom
    }
}

// Zero ordinals, used for keys missing from a stored blob.

impl Default for Quality {
    fn default() -> Self {
        Quality::Off
    }
}

impl Default for AntiAliasing {
    fn default() -> Self {
        AntiAliasing::Off
    }
}

impl Default for PresetId {
    fn default() -> Self {
        PresetId::Custom
    }
}
