//! Railgfx Edit Session
//!
//! Keeps the preset label consistent with the advanced settings while a UI
//! edits them:
//! - Preset selection applies the canonical bundle as one transaction
//! - User edits that leave the canonical bundle demote the preset to Custom
//! - The initial load and reverts are shown as stored, never reconciled

pub mod error;
pub mod reconcile;
pub mod session;
pub mod transaction;

pub use error::SessionError;
pub use reconcile::{detect_drift, Drift};
pub use session::EditSession;
pub use transaction::{ChangeOrigin, Commit, Transaction};
