//! Grouped writes to the advanced settings
//!
//! All writes are staged on a copy and land together on commit, so drift is
//! evaluated once per logical change instead of once per field.

use railgfx_model::{
    AdvancedField, AdvancedGraphicsSettings, FieldValue, GraphicsConfiguration, ModelError,
    PresetId,
};

use crate::{detect_drift, Drift};

/// Who produced a transaction. Only user edits are checked for drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Canonical bundle written because a preset was selected.
    PresetApply,
    /// A user changed one or more advanced fields.
    UserEdit,
}

/// Outcome of committing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Commit {
    /// Visible fields whose value changed.
    pub changed: Vec<AdvancedField>,
    /// Set when the commit demoted the preset to Custom.
    pub demoted: Option<Drift>,
}

pub struct Transaction {
    origin: ChangeOrigin,
    staged: AdvancedGraphicsSettings,
}

impl Transaction {
    pub fn begin(origin: ChangeOrigin, base: &AdvancedGraphicsSettings) -> Self {
        Self {
            origin,
            staged: *base,
        }
    }

    pub fn origin(&self) -> ChangeOrigin {
        self.origin
    }

    pub fn staged(&self) -> &AdvancedGraphicsSettings {
        &self.staged
    }

    pub fn set(&mut self, field: AdvancedField, value: FieldValue) -> Result<&mut Self, ModelError> {
        self.staged.set(field, value)?;
        Ok(self)
    }

    /// Stage every visible field from `bundle`.
    pub fn assign_visible(&mut self, bundle: &AdvancedGraphicsSettings) -> &mut Self {
        self.staged.assign_visible(bundle);
        self
    }

    /// Write the staged values into `config` and react to the change.
    ///
    /// A user edit that leaves a named preset's bundle demotes the preset to
    /// Custom. Custom is never promoted back, even if the values realign.
    pub fn commit(self, config: &mut GraphicsConfiguration) -> Commit {
        let changed = config.advanced.visible_diff(&self.staged);
        config.advanced = self.staged;

        if changed.is_empty() || self.origin == ChangeOrigin::PresetApply {
            return Commit {
                changed,
                demoted: None,
            };
        }

        let demoted = detect_drift(config.preset, &config.advanced);
        if let Some(drift) = &demoted {
            tracing::info!(
                preset = %drift.preset,
                fields = ?drift.fields,
                "advanced settings left the preset, switching to Custom"
            );
            config.preset = PresetId::Custom;
        }
        Commit { changed, demoted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgfx_model::{Quality, Resolution};
    use railgfx_store::preset_defaults;

    fn config(preset: PresetId) -> GraphicsConfiguration {
        GraphicsConfiguration {
            preset,
            resolution: Resolution::new(1920, 1080, true),
            advanced: preset_defaults(preset),
        }
    }

    #[test]
    fn test_staged_writes_are_invisible_until_commit() {
        let mut cfg = config(PresetId::Low);
        let mut tx = Transaction::begin(ChangeOrigin::UserEdit, &cfg.advanced);
        tx.set(AdvancedField::Fps, FieldValue::Fps(120)).unwrap();

        assert_eq!(cfg.advanced.fps, 60);
        assert_eq!(tx.staged().fps, 120);

        tx.commit(&mut cfg);
        assert_eq!(cfg.advanced.fps, 120);
    }

    #[test]
    fn test_user_edit_demotes() {
        let mut cfg = config(PresetId::High);
        let mut tx = Transaction::begin(ChangeOrigin::UserEdit, &cfg.advanced);
        tx.set(AdvancedField::Shadow, FieldValue::Quality(Quality::Off))
            .unwrap();

        let commit = tx.commit(&mut cfg);
        assert_eq!(cfg.preset, PresetId::Custom);
        assert_eq!(commit.changed, vec![AdvancedField::Shadow]);
        assert_eq!(commit.demoted.unwrap().preset, PresetId::High);
    }

    #[test]
    fn test_preset_apply_never_demotes() {
        // Label says High, values are the Low bundle.
        let mut cfg = config(PresetId::Low);
        cfg.preset = PresetId::High;

        let mut tx = Transaction::begin(ChangeOrigin::PresetApply, &cfg.advanced);
        tx.set(AdvancedField::Bloom, FieldValue::Quality(Quality::Off))
            .unwrap();
        let commit = tx.commit(&mut cfg);

        assert_eq!(cfg.preset, PresetId::High);
        assert_eq!(commit.demoted, None);
    }

    #[test]
    fn test_unchanged_user_edit_is_ignored() {
        let mut cfg = config(PresetId::Low);
        cfg.preset = PresetId::High;

        let mut tx = Transaction::begin(ChangeOrigin::UserEdit, &cfg.advanced);
        tx.set(AdvancedField::Fps, FieldValue::Fps(60)).unwrap();
        let commit = tx.commit(&mut cfg);

        assert!(commit.changed.is_empty());
        assert_eq!(cfg.preset, PresetId::High);
    }

    #[test]
    fn test_multi_field_edit_checked_once_at_commit() {
        let mut cfg = config(PresetId::Medium);
        let mut tx = Transaction::begin(ChangeOrigin::UserEdit, &cfg.advanced);
        // Leave the bundle and come back within one transaction.
        tx.set(AdvancedField::Light, FieldValue::Quality(Quality::High))
            .unwrap()
            .set(AdvancedField::Light, FieldValue::Quality(Quality::Medium))
            .unwrap();
        let commit = tx.commit(&mut cfg);

        assert!(commit.changed.is_empty());
        assert_eq!(cfg.preset, PresetId::Medium);
    }
}
