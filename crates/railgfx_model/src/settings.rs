//! Graphics configuration as the game persists it

use serde::{Deserialize, Serialize};

use crate::{AntiAliasing, ModelError, PresetId, Quality};

/// Window resolution. Both dimensions are positive; a stored blob with a
/// zero dimension does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredResolution")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    #[serde(rename = "isFullScreen")]
    pub fullscreen: bool,
}

impl Resolution {
    pub fn new(width: u32, height: u32, fullscreen: bool) -> Self {
        Self {
            width,
            height,
            fullscreen,
        }
    }
}

#[derive(Deserialize)]
struct StoredResolution {
    width: u32,
    height: u32,
    #[serde(rename = "isFullScreen")]
    fullscreen: bool,
}

impl TryFrom<StoredResolution> for Resolution {
    type Error = ModelError;

    fn try_from(raw: StoredResolution) -> Result<Self, Self::Error> {
        if raw.width == 0 || raw.height == 0 {
            return Err(ModelError::EmptyResolution {
                width: raw.width,
                height: raw.height,
            });
        }
        Ok(Resolution::new(raw.width, raw.height, raw.fullscreen))
    }
}

/// The advanced ("custom graphics") bundle.
///
/// `last_preset` and `metal_fx` are persisted but never edited and never
/// compared; see [`AdvancedGraphicsSettings::visible_eq`]. Keys missing from
/// a stored blob take their zero value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedGraphicsSettings {
    #[serde(rename = "FPS")]
    pub fps: u32,
    #[serde(rename = "EnableVSync")]
    pub vsync: bool,
    #[serde(rename = "RenderScale")]
    pub render_scale: f64,
    /// Echo of the last preset the bundle was saved under.
    #[serde(rename = "ResolutionQuality")]
    pub last_preset: PresetId,
    #[serde(rename = "ShadowQuality")]
    pub shadow: Quality,
    #[serde(rename = "LightQuality")]
    pub light: Quality,
    #[serde(rename = "CharacterQuality")]
    pub character: Quality,
    #[serde(rename = "EnvDetailQuality")]
    pub env_detail: Quality,
    #[serde(rename = "ReflectionQuality")]
    pub reflection: Quality,
    #[serde(rename = "SFXQuality")]
    pub sfx: Quality,
    #[serde(rename = "BloomQuality")]
    pub bloom: Quality,
    #[serde(rename = "AAMode")]
    pub anti_aliasing: AntiAliasing,
    /// Apple MetalFX upscaler toggle, always written as false.
    #[serde(rename = "EnableMetalFXSU")]
    pub metal_fx: bool,
}

impl AdvancedGraphicsSettings {
    pub fn get(&self, field: AdvancedField) -> FieldValue {
        match field {
            AdvancedField::Fps => FieldValue::Fps(self.fps),
            AdvancedField::VSync => FieldValue::Toggle(self.vsync),
            AdvancedField::RenderScale => FieldValue::Scale(self.render_scale),
            AdvancedField::Shadow => FieldValue::Quality(self.shadow),
            AdvancedField::Light => FieldValue::Quality(self.light),
            AdvancedField::Character => FieldValue::Quality(self.character),
            AdvancedField::EnvDetail => FieldValue::Quality(self.env_detail),
            AdvancedField::Reflection => FieldValue::Quality(self.reflection),
            AdvancedField::Sfx => FieldValue::Quality(self.sfx),
            AdvancedField::Bloom => FieldValue::Quality(self.bloom),
            AdvancedField::AntiAliasing => FieldValue::AntiAliasing(self.anti_aliasing),
        }
    }

    /// Assign one visible field. Fails if the value kind does not fit the field.
    pub fn set(&mut self, field: AdvancedField, value: FieldValue) -> Result<(), ModelError> {
        match (field, value) {
            (AdvancedField::Fps, FieldValue::Fps(v)) => self.fps = v,
            (AdvancedField::VSync, FieldValue::Toggle(v)) => self.vsync = v,
            (AdvancedField::RenderScale, FieldValue::Scale(v)) => self.render_scale = v,
            (AdvancedField::Shadow, FieldValue::Quality(v)) => self.shadow = v,
            (AdvancedField::Light, FieldValue::Quality(v)) => self.light = v,
            (AdvancedField::Character, FieldValue::Quality(v)) => self.character = v,
            (AdvancedField::EnvDetail, FieldValue::Quality(v)) => self.env_detail = v,
            (AdvancedField::Reflection, FieldValue::Quality(v)) => self.reflection = v,
            (AdvancedField::Sfx, FieldValue::Quality(v)) => self.sfx = v,
            (AdvancedField::Bloom, FieldValue::Quality(v)) => self.bloom = v,
            (AdvancedField::AntiAliasing, FieldValue::AntiAliasing(v)) => self.anti_aliasing = v,
            (field, value) => return Err(ModelError::FieldMismatch { field, value }),
        }
        Ok(())
    }

    /// Copy every visible field from `other`, leaving the hidden fields alone.
    pub fn assign_visible(&mut self, other: &AdvancedGraphicsSettings) {
        self.fps = other.fps;
        self.vsync = other.vsync;
        self.render_scale = other.render_scale;
        self.shadow = other.shadow;
        self.light = other.light;
        self.character = other.character;
        self.env_detail = other.env_detail;
        self.reflection = other.reflection;
        self.sfx = other.sfx;
        self.bloom = other.bloom;
        self.anti_aliasing = other.anti_aliasing;
    }

    /// Visible fields that differ from `other`. Render scale compares exactly.
    pub fn visible_diff(&self, other: &AdvancedGraphicsSettings) -> Vec<AdvancedField> {
        AdvancedField::ALL
            .iter()
            .copied()
            .filter(|&field| self.get(field) != other.get(field))
            .collect()
    }

    pub fn visible_eq(&self, other: &AdvancedGraphicsSettings) -> bool {
        AdvancedField::ALL
            .iter()
            .all(|&field| self.get(field) == other.get(field))
    }
}

/// The eleven user-editable advanced fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvancedField {
    Fps,
    VSync,
    RenderScale,
    Shadow,
    Light,
    Character,
    EnvDetail,
    Reflection,
    Sfx,
    Bloom,
    AntiAliasing,
}

impl AdvancedField {
    pub const ALL: &'static [AdvancedField] = &[
        AdvancedField::Fps,
        AdvancedField::VSync,
        AdvancedField::RenderScale,
        AdvancedField::Shadow,
        AdvancedField::Light,
        AdvancedField::Character,
        AdvancedField::EnvDetail,
        AdvancedField::Reflection,
        AdvancedField::Sfx,
        AdvancedField::Bloom,
        AdvancedField::AntiAliasing,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            AdvancedField::Fps => "FPS",
            AdvancedField::VSync => "V-Sync",
            AdvancedField::RenderScale => "Render Resolution",
            AdvancedField::Shadow => "Shadow Quality",
            AdvancedField::Light => "Light Quality",
            AdvancedField::Character => "Character Quality",
            AdvancedField::EnvDetail => "Environment Detail",
            AdvancedField::Reflection => "Reflection Quality",
            AdvancedField::Sfx => "Special Effects Quality",
            AdvancedField::Bloom => "Bloom Effect",
            AdvancedField::AntiAliasing => "Anti-Aliasing",
        }
    }
}

impl std::fmt::Display for AdvancedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Value carried by a single-field edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Fps(u32),
    Toggle(bool),
    Scale(f64),
    Quality(Quality),
    AntiAliasing(AntiAliasing),
}

/// Everything the editor reads from and writes to the game's store.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsConfiguration {
    pub preset: PresetId,
    pub resolution: Resolution,
    pub advanced: AdvancedGraphicsSettings,
}
