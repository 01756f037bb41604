//! Canonical advanced settings for each preset

use railgfx_model::{AdvancedGraphicsSettings, AntiAliasing, PresetId, Quality};
use railgfx_model::Quality::{High, Low, Medium, VeryHigh, VeryLow};

use crate::StoreError;

/// Advanced settings the game applies for `preset`.
///
/// `Custom` has no bundle of its own and gets the Very Low row.
pub fn preset_defaults(preset: PresetId) -> AdvancedGraphicsSettings {
    match preset {
        PresetId::Custom | PresetId::VeryLow => bundle(
            PresetId::VeryLow,
            false,
            0.8,
            [Low, VeryLow, Low, VeryLow, VeryLow, VeryLow, VeryLow],
        ),
        PresetId::Low => bundle(preset, true, 1.0, [Low; 7]),
        PresetId::Medium => bundle(preset, true, 1.0, [Medium; 7]),
        PresetId::High => bundle(preset, true, 1.2, [High; 7]),
        PresetId::VeryHigh => bundle(
            preset,
            true,
            1.4,
            [High, VeryHigh, High, VeryHigh, VeryHigh, High, VeryHigh],
        ),
    }
}

/// [`preset_defaults`] for a raw persisted ordinal.
pub fn preset_defaults_for_ordinal(ordinal: u32) -> Result<AdvancedGraphicsSettings, StoreError> {
    let preset = PresetId::try_from(ordinal).map_err(|_| StoreError::InvalidPreset(ordinal))?;
    Ok(preset_defaults(preset))
}

/// Tiers in table order: shadow, light, character, env detail, reflection,
/// sfx, bloom.
fn bundle(
    last_preset: PresetId,
    vsync: bool,
    render_scale: f64,
    tiers: [Quality; 7],
) -> AdvancedGraphicsSettings {
    let [shadow, light, character, env_detail, reflection, sfx, bloom] = tiers;
    AdvancedGraphicsSettings {
        fps: 60,
        vsync,
        render_scale,
        last_preset,
        shadow,
        light,
        character,
        env_detail,
        reflection,
        sfx,
        bloom,
        anti_aliasing: AntiAliasing::Taa,
        metal_fx: false,
    }
}
