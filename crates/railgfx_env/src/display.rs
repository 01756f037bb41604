// display.rs
//! Physical size of the primary display, ignoring DPI scaling.
//! Returns `None` where the platform offers no cheap way to ask.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,  // pixels
    pub height: u32, // pixels
}

impl DisplaySize {
    /// Query once and cache; the desktop size is read at startup only.
    pub fn detect() -> Option<Self> {
        static INSTANCE: OnceLock<Option<DisplaySize>> = OnceLock::new();
        *INSTANCE.get_or_init(|| {
            let size = physical_display_size();
            match size {
                Some(s) => tracing::debug!(width = s.width, height = s.height, "detected display size"),
                None => tracing::debug!("display size unavailable"),
            }
            size
        })
    }
}

/* -------------------------- Windows -------------------------- */

#[cfg(target_os = "windows")]
fn physical_display_size() -> Option<DisplaySize> {
    use windows_sys::Win32::Graphics::Gdi::{
        GetDC, GetDeviceCaps, ReleaseDC, DESKTOPHORZRES, DESKTOPVERTRES,
    };
    unsafe {
        let hdc = GetDC(std::ptr::null_mut());
        if hdc.is_null() { return None; }
        let width = GetDeviceCaps(hdc, DESKTOPHORZRES as _);
        let height = GetDeviceCaps(hdc, DESKTOPVERTRES as _);
        ReleaseDC(std::ptr::null_mut(), hdc);
        if width <= 0 || height <= 0 { return None; }
        Some(DisplaySize { width: width as u32, height: height as u32 })
    }
}

/* --------------------- Other platforms --------------------- */

#[cfg(not(target_os = "windows"))]
fn physical_display_size() -> Option<DisplaySize> { None }
