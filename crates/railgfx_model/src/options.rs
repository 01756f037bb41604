//! Option domains offered to UI collaborators.
//!
//! These list what the game officially exposes. Nothing in the model or the
//! store rejects values outside them.

use crate::{AdvancedField, AntiAliasing, FieldValue, PresetId, Quality};

pub const PRESETS: &[PresetId] = PresetId::ALL;

pub const FPS: &[u32] = &[30, 60, 120];

pub const RENDER_SCALE: &[f64] = &[0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0];

pub const SHADOW: &[Quality] = &[Quality::Off, Quality::Low, Quality::Medium, Quality::High];

pub const LIGHT: &[Quality] = &[
    Quality::VeryLow,
    Quality::Low,
    Quality::Medium,
    Quality::High,
    Quality::VeryHigh,
];

pub const CHARACTER: &[Quality] = &[Quality::Low, Quality::Medium, Quality::High];

pub const ENV_DETAIL: &[Quality] = LIGHT;

pub const REFLECTION: &[Quality] = LIGHT;

pub const SFX: &[Quality] = &[Quality::VeryLow, Quality::Low, Quality::Medium, Quality::High];

pub const BLOOM: &[Quality] = Quality::ALL;

// Display order, not ordinal order.
pub const ANTI_ALIASING: &[AntiAliasing] =
    &[AntiAliasing::Off, AntiAliasing::Fxaa, AntiAliasing::Taa];

/// Quality subset for a quality-tier field, `None` for the other fields.
pub fn quality_domain(field: AdvancedField) -> Option<&'static [Quality]> {
    match field {
        AdvancedField::Shadow => Some(SHADOW),
        AdvancedField::Light => Some(LIGHT),
        AdvancedField::Character => Some(CHARACTER),
        AdvancedField::EnvDetail => Some(ENV_DETAIL),
        AdvancedField::Reflection => Some(REFLECTION),
        AdvancedField::Sfx => Some(SFX),
        AdvancedField::Bloom => Some(BLOOM),
        AdvancedField::Fps
        | AdvancedField::VSync
        | AdvancedField::RenderScale
        | AdvancedField::AntiAliasing => None,
    }
}

/// Every choice a combo box for `field` should offer.
pub fn choices(field: AdvancedField) -> Vec<FieldValue> {
    match field {
        AdvancedField::Fps => FPS.iter().map(|&v| FieldValue::Fps(v)).collect(),
        AdvancedField::VSync => vec![FieldValue::Toggle(false), FieldValue::Toggle(true)],
        AdvancedField::RenderScale => RENDER_SCALE.iter().map(|&v| FieldValue::Scale(v)).collect(),
        AdvancedField::AntiAliasing => ANTI_ALIASING
            .iter()
            .map(|&v| FieldValue::AntiAliasing(v))
            .collect(),
        quality => quality_domain(quality)
            .unwrap_or_default()
            .iter()
            .map(|&v| FieldValue::Quality(v))
            .collect(),
    }
}

/// Whether `value` is one of the officially exposed choices for `field`.
pub fn is_offered(field: AdvancedField, value: FieldValue) -> bool {
    choices(field).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_choices() {
        for &field in AdvancedField::ALL {
            assert!(!choices(field).is_empty(), "{field} has no choices");
        }
    }

    #[test]
    fn test_field_specific_subsets() {
        assert!(!is_offered(AdvancedField::Character, FieldValue::Quality(Quality::VeryLow)));
        assert!(is_offered(AdvancedField::Shadow, FieldValue::Quality(Quality::Off)));
        assert!(!is_offered(AdvancedField::Light, FieldValue::Quality(Quality::Off)));
        assert!(is_offered(AdvancedField::Bloom, FieldValue::Quality(Quality::Off)));
        assert!(!is_offered(AdvancedField::Sfx, FieldValue::Quality(Quality::VeryHigh)));
    }

    #[test]
    fn test_scalar_domains() {
        assert!(is_offered(AdvancedField::Fps, FieldValue::Fps(120)));
        assert!(!is_offered(AdvancedField::Fps, FieldValue::Fps(144)));
        assert!(is_offered(AdvancedField::RenderScale, FieldValue::Scale(1.4)));
        assert_eq!(choices(AdvancedField::RenderScale).len(), 8);
        assert_eq!(PRESETS.len(), 6);
    }
}
