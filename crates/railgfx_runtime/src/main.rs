//! Railgfx Runtime
//!
//! Reads the game's graphics settings through an edit session and reports
//! them. The editor window drives the same session.

use anyhow::Result;
use railgfx_env::DisplaySize;
use railgfx_model::AdvancedField;
use railgfx_session::EditSession;
use railgfx_store::{Hive, StoreLayout};
use tracing_subscriber;

/// Overrides the registry key read, for pointing at a copy of the settings.
const ROOT_ENV: &str = "RAILGFX_REGISTRY_ROOT";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("railgfx v{}", railgfx_model::VERSION);

    let layout = match std::env::var(ROOT_ENV) {
        Ok(root) => {
            tracing::info!(root = %root, "using registry root from {}", ROOT_ENV);
            StoreLayout::with_root(root)
        }
        Err(_) => StoreLayout::default(),
    };
    run(layout)
}

#[cfg(windows)]
fn run(layout: StoreLayout) -> Result<()> {
    use anyhow::Context;
    use railgfx_store::{GraphicsStore, WindowsHive};

    let store = GraphicsStore::new(WindowsHive::current_user(), layout);
    let Some(session) = EditSession::load(store).context("failed to read graphics settings")? else {
        tracing::warn!("No graphics settings found, start the game once and try again");
        return Ok(());
    };
    report(&session);
    Ok(())
}

#[cfg(not(windows))]
fn run(layout: StoreLayout) -> Result<()> {
    anyhow::bail!(
        "graphics settings live in the Windows registry (HKCU\\{}), which is not available on this platform",
        layout.root
    )
}

#[cfg_attr(not(windows), allow(dead_code))]
fn report<H: Hive>(session: &EditSession<H>) {
    let config = session.current();
    tracing::info!(
        "Resolution: {}x{} ({})",
        config.resolution.width,
        config.resolution.height,
        if config.resolution.fullscreen { "fullscreen" } else { "windowed" }
    );
    if let Some(size) = DisplaySize::detect() {
        tracing::info!("Display: {}x{}", size.width, size.height);
    }
    tracing::info!("Graphics quality: {}", config.preset);
    for &field in AdvancedField::ALL {
        tracing::info!("  {}: {}", field, describe(config.advanced.get(field)));
    }
}

#[cfg_attr(not(windows), allow(dead_code))]
fn describe(value: railgfx_model::FieldValue) -> String {
    use railgfx_model::FieldValue;

    match value {
        FieldValue::Fps(fps) => fps.to_string(),
        FieldValue::Toggle(on) => String::from(if on { "On" } else { "Off" }),
        FieldValue::Scale(scale) => format!("{scale:.1}"),
        FieldValue::Quality(q) => q.label().to_string(),
        FieldValue::AntiAliasing(aa) => aa.label().to_string(),
    }
}
