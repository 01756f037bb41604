//! Read and write the persisted graphics configuration

use railgfx_model::{AdvancedGraphicsSettings, GraphicsConfiguration, PresetId, Resolution};

use crate::{blob, preset_defaults, Hive, RegistryKey, StoreError, StoreLayout};

/// Value names resolved from one enumeration of the root key.
#[derive(Debug, Default)]
struct ValueNames {
    preset: Option<String>,
    resolution: Option<String>,
    advanced: Option<String>,
}

/// The game's graphics configuration as stored in a [`Hive`].
pub struct GraphicsStore<H: Hive> {
    hive: H,
    layout: StoreLayout,
}

impl<H: Hive> GraphicsStore<H> {
    pub fn new(hive: H, layout: StoreLayout) -> Self {
        Self { hive, layout }
    }

    pub fn with_default_layout(hive: H) -> Self {
        Self::new(hive, StoreLayout::default())
    }

    pub fn layout(&self) -> &StoreLayout {
        &self.layout
    }

    pub fn hive(&self) -> &H {
        &self.hive
    }

    /// Read the current configuration.
    ///
    /// Returns `Ok(None)` when there is no valid configuration: the root key,
    /// the preset or resolution value is missing, the preset is not an
    /// integer, or the resolution blob does not parse. A preset ordinal
    /// outside the known range is an error.
    ///
    /// Advanced settings are only read for the Custom preset; every other
    /// case, including an unreadable blob, falls back to the canonical
    /// bundle for the preset.
    pub fn read(&self) -> Result<Option<GraphicsConfiguration>, StoreError> {
        let Some(key) = self.hive.open_key(&self.layout.root)? else {
            tracing::debug!(root = %self.layout.root, "graphics settings key not found");
            return Ok(None);
        };
        let names = self.resolve(&key)?;

        let Some(preset_name) = names.preset else {
            tracing::debug!(prefix = %self.layout.preset_prefix, "preset value not found");
            return Ok(None);
        };
        let Some(raw_preset) = key.read_dword(&preset_name) else {
            tracing::debug!(name = %preset_name, "preset value is not an integer");
            return Ok(None);
        };
        let preset =
            PresetId::try_from(raw_preset).map_err(|_| StoreError::InvalidPreset(raw_preset))?;

        let Some(resolution_name) = names.resolution else {
            tracing::debug!(prefix = %self.layout.resolution_prefix, "resolution value not found");
            return Ok(None);
        };
        let Some(resolution) = read_json::<Resolution, _>(&key, &resolution_name) else {
            tracing::debug!(name = %resolution_name, "resolution value is unreadable");
            return Ok(None);
        };

        let advanced = match (preset, names.advanced) {
            (PresetId::Custom, Some(name)) => read_json::<AdvancedGraphicsSettings, _>(&key, &name)
                .unwrap_or_else(|| {
                    tracing::warn!(name = %name, "custom graphics settings unreadable, using defaults");
                    preset_defaults(preset)
                }),
            _ => preset_defaults(preset),
        };

        tracing::info!(
            preset = %preset,
            width = resolution.width,
            height = resolution.height,
            "read graphics configuration"
        );
        Ok(Some(GraphicsConfiguration {
            preset,
            resolution,
            advanced,
        }))
    }

    /// Write `config` back to the hive and return what was persisted.
    ///
    /// The preset and resolution values must already exist. The returned
    /// bundle has `last_preset` set to the preset and `metal_fx` cleared,
    /// matching what a later read produces. Advanced settings are only
    /// written for the Custom preset.
    pub fn write(
        &self,
        config: &GraphicsConfiguration,
    ) -> Result<GraphicsConfiguration, StoreError> {
        let key = self
            .hive
            .open_key(&self.layout.root)?
            .ok_or_else(|| StoreError::RootKeyMissing {
                path: self.layout.root.clone(),
            })?;
        let names = self.resolve(&key)?;

        let preset_name = names.preset.ok_or_else(|| StoreError::ValueNameMissing {
            prefix: self.layout.preset_prefix.clone(),
        })?;
        let resolution_name = names.resolution.ok_or_else(|| StoreError::ValueNameMissing {
            prefix: self.layout.resolution_prefix.clone(),
        })?;

        key.write_dword(&preset_name, config.preset.ordinal())?;
        key.write_binary(&resolution_name, &blob::encode(&config.resolution)?)?;

        let mut written = config.clone();
        written.advanced.last_preset = config.preset;
        written.advanced.metal_fx = false;
        if config.preset.is_custom() {
            let advanced_name = names
                .advanced
                .unwrap_or_else(|| self.layout.fallback_advanced_name());
            tracing::debug!(name = %advanced_name, "writing custom graphics settings");
            key.write_binary(&advanced_name, &blob::encode(&written.advanced)?)?;
        }

        tracing::info!(preset = %config.preset, "saved graphics configuration");
        Ok(written)
    }

    fn resolve(&self, key: &H::Key) -> Result<ValueNames, StoreError> {
        let mut names = ValueNames::default();
        let prefixes = [
            (&self.layout.preset_prefix, &mut names.preset),
            (&self.layout.resolution_prefix, &mut names.resolution),
            (&self.layout.advanced_prefix, &mut names.advanced),
        ];
        let all = key.value_names()?;
        for (prefix, slot) in prefixes {
            *slot = all.iter().find(|name| name.starts_with(prefix.as_str())).cloned();
        }
        tracing::debug!(?names, "resolved graphics value names");
        Ok(names)
    }
}

fn read_json<T, K>(key: &K, name: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
    K: RegistryKey,
{
    let bytes = key.read_binary(name)?;
    match blob::decode(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(name = %name, error = %err, "failed to decode registry json");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryHive, MemoryValue};
    use railgfx_model::{AntiAliasing, Quality};
    use serde_json::json;

    const ROOT: &str = r"Software\Cognosphere\Star Rail";
    const PRESET: &str = "GraphicsSettings_GraphicsQuality_20240101";
    const RESOLUTION: &str = "GraphicsSettings_PCResolution_h431323223";
    const ADVANCED: &str = "GraphicsSettings_Model_h2986158309";

    fn blob_of(value: serde_json::Value) -> MemoryValue {
        let mut bytes = serde_json::to_vec(&value).unwrap();
        bytes.push(0);
        MemoryValue::Binary(bytes)
    }

    fn seeded(preset: u32) -> MemoryHive {
        let hive = MemoryHive::new();
        hive.set_value(ROOT, "Unrelated_Value", MemoryValue::Dword(7));
        hive.set_value(ROOT, PRESET, MemoryValue::Dword(preset));
        hive.set_value(
            ROOT,
            RESOLUTION,
            blob_of(json!({"width": 2560, "height": 1440, "isFullScreen": false})),
        );
        hive
    }

    fn custom_json() -> serde_json::Value {
        json!({
            "FPS": 120,
            "EnableVSync": false,
            "RenderScale": 1.6,
            "ResolutionQuality": 4,
            "ShadowQuality": 0,
            "LightQuality": 5,
            "CharacterQuality": 4,
            "EnvDetailQuality": 5,
            "ReflectionQuality": 3,
            "SFXQuality": 2,
            "BloomQuality": 0,
            "AAMode": 2,
            "EnableMetalFXSU": false,
            "SomeFutureKey": 1
        })
    }

    fn stored_json(hive: &MemoryHive, name: &str) -> serde_json::Value {
        match hive.value(ROOT, name) {
            Some(MemoryValue::Binary(bytes)) => {
                assert_eq!(bytes.last(), Some(&0));
                serde_json::from_slice(&bytes[..bytes.len() - 1]).unwrap()
            }
            other => panic!("expected binary value, got {other:?}"),
        }
    }

    #[test]
    fn test_read_preset_without_advanced_uses_canonical() {
        let store = GraphicsStore::with_default_layout(seeded(4));

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.preset, PresetId::High);
        assert_eq!(config.resolution, Resolution::new(2560, 1440, false));
        assert_eq!(config.advanced, preset_defaults(PresetId::High));
    }

    #[test]
    fn test_read_ignores_advanced_for_named_preset() {
        let hive = seeded(2);
        hive.set_value(ROOT, ADVANCED, blob_of(custom_json()));
        let store = GraphicsStore::with_default_layout(hive);

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.advanced, preset_defaults(PresetId::Low));
    }

    #[test]
    fn test_read_custom_decodes_advanced() {
        let hive = seeded(0);
        hive.set_value(ROOT, "GraphicsSettings_Model_h1", blob_of(custom_json()));
        let store = GraphicsStore::with_default_layout(hive);

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.preset, PresetId::Custom);
        assert_eq!(config.advanced.fps, 120);
        assert_eq!(config.advanced.render_scale, 1.6);
        assert_eq!(config.advanced.shadow, Quality::Off);
        assert_eq!(config.advanced.anti_aliasing, AntiAliasing::Fxaa);
        assert_eq!(config.advanced.last_preset, PresetId::High);
    }

    #[test]
    fn test_read_custom_with_bad_blob_falls_back() {
        let hive = seeded(0);
        hive.set_value(ROOT, ADVANCED, MemoryValue::Binary(b"{\"FPS\":\0".to_vec()));
        let store = GraphicsStore::with_default_layout(hive);

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.advanced, preset_defaults(PresetId::Custom));
    }

    #[test]
    fn test_read_custom_without_advanced_falls_back() {
        let store = GraphicsStore::with_default_layout(seeded(0));
        let config = store.read().unwrap().unwrap();
        assert_eq!(config.advanced, preset_defaults(PresetId::VeryLow));
    }

    #[test]
    fn test_read_custom_with_missing_keys_keeps_values() {
        let mut partial = custom_json();
        let object = partial.as_object_mut().unwrap();
        object.remove("EnableMetalFXSU");
        object.remove("ResolutionQuality");
        object.insert("FPS".into(), json!(120));
        object.insert("RenderScale".into(), json!(1.4));

        let hive = seeded(0);
        hive.set_value(ROOT, ADVANCED, blob_of(partial));
        let store = GraphicsStore::with_default_layout(hive);

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.advanced.fps, 120);
        assert_eq!(config.advanced.render_scale, 1.4);
        assert_eq!(config.advanced.light, Quality::VeryHigh);
        assert_eq!(config.advanced.last_preset, PresetId::Custom);
        assert!(!config.advanced.metal_fx);
    }

    #[test]
    fn test_read_zero_resolution_is_absent() {
        let hive = seeded(3);
        hive.set_value(
            ROOT,
            RESOLUTION,
            blob_of(json!({"width": 0, "height": 1440, "isFullScreen": false})),
        );
        let store = GraphicsStore::with_default_layout(hive);
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_read_absent_configuration() {
        let store = GraphicsStore::with_default_layout(MemoryHive::new());
        assert!(store.read().unwrap().is_none());

        let hive = MemoryHive::new();
        hive.set_value(ROOT, PRESET, MemoryValue::Dword(3));
        let store = GraphicsStore::with_default_layout(hive);
        assert!(store.read().unwrap().is_none());

        let hive = seeded(3);
        hive.set_value(ROOT, PRESET, MemoryValue::Text("3".into()));
        let store = GraphicsStore::with_default_layout(hive);
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_read_unparsable_resolution_is_absent() {
        let hive = seeded(3);
        hive.set_value(ROOT, RESOLUTION, MemoryValue::Binary(b"garbage\0".to_vec()));
        let store = GraphicsStore::with_default_layout(hive);
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_read_out_of_range_preset_is_error() {
        let store = GraphicsStore::with_default_layout(seeded(9));
        assert!(matches!(store.read(), Err(StoreError::InvalidPreset(9))));
    }

    #[test]
    fn test_read_takes_first_prefix_match() {
        let hive = seeded(0);
        hive.set_value(ROOT, "GraphicsSettings_Model_first", blob_of(custom_json()));
        hive.set_value(ROOT, "GraphicsSettings_Model_second", MemoryValue::Binary(vec![0]));
        let store = GraphicsStore::with_default_layout(hive);

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.advanced.fps, 120);
    }

    #[test]
    fn test_write_custom_stamps_hidden_fields() {
        let hive = seeded(4);
        let store = GraphicsStore::with_default_layout(hive.clone());

        let mut advanced = preset_defaults(PresetId::High);
        advanced.last_preset = PresetId::VeryHigh;
        advanced.metal_fx = true;
        advanced.fps = 30;
        let config = GraphicsConfiguration {
            preset: PresetId::Custom,
            resolution: Resolution::new(1920, 1080, true),
            advanced,
        };

        let written = store.write(&config).unwrap();
        assert_eq!(written.advanced.last_preset, PresetId::Custom);
        assert!(!written.advanced.metal_fx);

        assert_eq!(hive.value(ROOT, PRESET), Some(MemoryValue::Dword(0)));
        assert_eq!(
            stored_json(&hive, RESOLUTION),
            json!({"width": 1920, "height": 1080, "isFullScreen": true})
        );
        let stored = stored_json(&hive, ADVANCED);
        assert_eq!(stored["ResolutionQuality"], 0);
        assert_eq!(stored["EnableMetalFXSU"], false);
        assert_eq!(stored["FPS"], 30);
    }

    #[test]
    fn test_write_reuses_existing_advanced_name() {
        let hive = seeded(0);
        hive.set_value(ROOT, "GraphicsSettings_Model_h42", blob_of(custom_json()));
        let store = GraphicsStore::with_default_layout(hive.clone());

        let config = store.read().unwrap().unwrap();
        store.write(&config).unwrap();

        assert_eq!(hive.value(ROOT, ADVANCED), None);
        assert_eq!(stored_json(&hive, "GraphicsSettings_Model_h42")["LightQuality"], 5);
    }

    #[test]
    fn test_write_named_preset_skips_advanced() {
        let hive = seeded(0);
        let store = GraphicsStore::with_default_layout(hive.clone());

        let config = GraphicsConfiguration {
            preset: PresetId::Medium,
            resolution: Resolution::new(1280, 720, false),
            advanced: preset_defaults(PresetId::Medium),
        };
        let written = store.write(&config).unwrap();

        assert_eq!(written, config);
        assert_eq!(hive.value(ROOT, PRESET), Some(MemoryValue::Dword(3)));
        assert_eq!(store.read().unwrap(), Some(written));
        assert!(hive
            .value_names(ROOT)
            .iter()
            .all(|name| !name.starts_with("GraphicsSettings_Model_")));
    }

    #[test]
    fn test_write_named_preset_stamps_last_preset() {
        let store = GraphicsStore::with_default_layout(seeded(1));

        let mut advanced = preset_defaults(PresetId::High);
        advanced.last_preset = PresetId::VeryLow;
        advanced.metal_fx = true;
        let written = store
            .write(&GraphicsConfiguration {
                preset: PresetId::High,
                resolution: Resolution::new(1920, 1080, true),
                advanced,
            })
            .unwrap();

        assert_eq!(written.advanced.last_preset, PresetId::High);
        assert!(!written.advanced.metal_fx);
        assert_eq!(store.read().unwrap(), Some(written));
    }

    #[test]
    fn test_write_round_trips_through_read() {
        let hive = seeded(0);
        let store = GraphicsStore::with_default_layout(hive);

        let mut advanced = preset_defaults(PresetId::Medium);
        advanced.bloom = Quality::Off;
        advanced.render_scale = 2.0;
        let written = store
            .write(&GraphicsConfiguration {
                preset: PresetId::Custom,
                resolution: Resolution::new(3840, 2160, true),
                advanced,
            })
            .unwrap();

        assert_eq!(store.read().unwrap(), Some(written));
    }

    #[test]
    fn test_write_requires_existing_values() {
        let config = GraphicsConfiguration {
            preset: PresetId::Custom,
            resolution: Resolution::new(1920, 1080, true),
            advanced: preset_defaults(PresetId::Custom),
        };

        let store = GraphicsStore::with_default_layout(MemoryHive::new());
        assert!(matches!(store.write(&config), Err(StoreError::RootKeyMissing { .. })));

        let hive = MemoryHive::new();
        hive.set_value(ROOT, PRESET, MemoryValue::Dword(0));
        let store = GraphicsStore::with_default_layout(hive);
        match store.write(&config) {
            Err(StoreError::ValueNameMissing { prefix }) => {
                assert_eq!(prefix, "GraphicsSettings_PCResolution_")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_custom_layout_root() {
        let hive = MemoryHive::new();
        hive.set_value(r"Software\Test", PRESET, MemoryValue::Dword(1));
        hive.set_value(
            r"Software\Test",
            RESOLUTION,
            blob_of(json!({"width": 800, "height": 600, "isFullScreen": true})),
        );
        let store = GraphicsStore::new(hive, StoreLayout::with_root(r"Software\Test"));

        let config = store.read().unwrap().unwrap();
        assert_eq!(config.preset, PresetId::VeryLow);
    }
}
