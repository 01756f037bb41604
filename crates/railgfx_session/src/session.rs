//! Editing state between a UI and the configuration store

use railgfx_env::DisplaySize;
use railgfx_model::{
    AdvancedField, FieldValue, GraphicsConfiguration, ModelError, PresetId, Resolution,
};
use railgfx_store::{preset_defaults, GraphicsStore, Hive};

use crate::transaction::{ChangeOrigin, Commit, Transaction};
use crate::SessionError;

pub const SAVED_MESSAGE: &str = "Settings saved successfully.";

/// The configuration being edited plus the last state known to be stored.
///
/// A session only exists once the stored configuration has been read, and
/// construction puts it on screen exactly as stored. Drift detection is only
/// reachable through the editing methods that follow.
pub struct EditSession<H: Hive> {
    store: GraphicsStore<H>,
    current: GraphicsConfiguration,
    last_known_good: GraphicsConfiguration,
    status: Option<String>,
}

impl<H: Hive> EditSession<H> {
    /// Read the stored configuration. `Ok(None)` means there is nothing to
    /// edit and the UI should disable its controls.
    pub fn load(store: GraphicsStore<H>) -> Result<Option<Self>, SessionError> {
        let Some(config) = store.read()? else {
            tracing::warn!(root = %store.layout().root, "no valid graphics configuration found");
            return Ok(None);
        };
        Ok(Some(Self::from_configuration(store, config)))
    }

    /// Start a session on an already-read configuration.
    pub fn from_configuration(store: GraphicsStore<H>, config: GraphicsConfiguration) -> Self {
        Self {
            store,
            last_known_good: config.clone(),
            current: config,
            status: None,
        }
    }

    pub fn current(&self) -> &GraphicsConfiguration {
        &self.current
    }

    pub fn last_known_good(&self) -> &GraphicsConfiguration {
        &self.last_known_good
    }

    pub fn preset(&self) -> PresetId {
        self.current.preset
    }

    pub fn field(&self, field: AdvancedField) -> FieldValue {
        self.current.advanced.get(field)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn store(&self) -> &GraphicsStore<H> {
        &self.store
    }

    /// Whether the edited state differs from what was last read or saved.
    pub fn is_dirty(&self) -> bool {
        self.current != self.last_known_good
    }

    /// Select a preset. A named preset overwrites every advanced field with
    /// its canonical bundle; Custom only changes the label.
    pub fn set_preset(&mut self, preset: PresetId) -> Commit {
        self.current.preset = preset;
        if preset.is_custom() {
            return Commit::default();
        }
        let mut tx = Transaction::begin(ChangeOrigin::PresetApply, &self.current.advanced);
        tx.assign_visible(&preset_defaults(preset));
        let commit = tx.commit(&mut self.current);
        tracing::debug!(preset = %preset, changed = commit.changed.len(), "applied preset");
        commit
    }

    /// A single user edit to one advanced field.
    pub fn set_field(
        &mut self,
        field: AdvancedField,
        value: FieldValue,
    ) -> Result<Commit, SessionError> {
        self.edit(|tx| tx.set(field, value).map(|_| ()))
    }

    /// Several user edits committed together. Nothing is applied if `f` fails.
    pub fn edit<F>(&mut self, f: F) -> Result<Commit, SessionError>
    where
        F: FnOnce(&mut Transaction) -> Result<(), ModelError>,
    {
        let mut tx = Transaction::begin(ChangeOrigin::UserEdit, &self.current.advanced);
        f(&mut tx)?;
        Ok(tx.commit(&mut self.current))
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.current.resolution = resolution;
    }

    /// Use the display's native size, keeping the fullscreen flag.
    pub fn use_display_resolution(&mut self, display: DisplaySize) {
        self.current.resolution.width = display.width;
        self.current.resolution.height = display.height;
    }

    /// Discard edits and return to the last read or saved state as is.
    pub fn revert(&mut self) {
        self.current = self.last_known_good.clone();
    }

    /// Persist the edited state. On success it becomes the last known good
    /// state, including the hidden fields the store stamps on write.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let written = self.store.write(&self.current)?;
        self.current = written.clone();
        self.last_known_good = written;
        self.status = Some(SAVED_MESSAGE.to_string());
        Ok(())
    }
}
