//! Session settings.
//!
//! - [`keys`] - Setting key constants
//! - [`SettingsStore`] / [`BoundSettings`] - Tiered resolution
//! - [`default_float`] and friends - Compiled-in defaults

pub mod keys;
mod defaults;
mod store;

pub use defaults::*;
pub use keys::SettingKey;
pub use store::*;
