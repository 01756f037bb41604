//! Drift between a preset label and the advanced settings

use railgfx_model::{AdvancedField, AdvancedGraphicsSettings, PresetId};
use railgfx_store::preset_defaults;

/// Advanced settings that no longer match the selected preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    pub preset: PresetId,
    pub fields: Vec<AdvancedField>,
}

/// Compare `advanced` with the canonical bundle for `preset`.
///
/// Custom accepts any values and never drifts. Hidden fields are ignored.
pub fn detect_drift(preset: PresetId, advanced: &AdvancedGraphicsSettings) -> Option<Drift> {
    if preset.is_custom() {
        return None;
    }
    let fields = preset_defaults(preset).visible_diff(advanced);
    if fields.is_empty() {
        None
    } else {
        Some(Drift { preset, fields })
    }
}
