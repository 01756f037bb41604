//! Railgfx Environment Probes
//!
//! Platform queries the editor uses to suggest sensible values.

pub mod display;

pub use display::DisplaySize;
