//! # pse
//!
//! Reader for PyMOL session (`.pse`) files.
//!
//! A session is a pickled tree of settings, colors and named objects. This
//! crate decodes the pickle stream without a Python runtime, interprets the
//! versioned atom and bond records inside it, and produces a
//! renderer-agnostic queue of scene objects plus the group hierarchy and
//! visibility needed to show them.
//!
//! ## Modules
//!
//! - [`util`] - Errors, bit sets, byte cursor
//! - [`pickle`] - Pickle stack machine and decoded values
//! - [`record`] - Versioned atom and bond records
//! - [`settings`] - Setting keys, defaults and the tiered store
//! - [`color`] - Color palette and session registry
//! - [`scene`] - Scene objects, representations, groups, builder
//! - [`session`] - Session loading
//!
//! ## Example
//!
//! ```ignore
//! use pse::prelude::*;
//!
//! let bytes = std::fs::read("1crn.pse")?;
//! let session = load_session(&bytes, &LoadOptions::default())?;
//!
//! for obj in &session.objects {
//!     println!("{} {}", obj.kind.name(), obj.object_id);
//! }
//! ```

pub mod util;
pub mod pickle;
pub mod record;
pub mod settings;
pub mod color;
pub mod scene;
pub mod session;

// Re-export commonly used types
pub use util::{BitSet, Error, Result};
pub use session::{LoadOptions, LoadedSession, load_session};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{BitSet, Error, Result, fix_name};
    pub use crate::pickle::{DecodedValue, PickleMap, PickleReader};
    pub use crate::settings::{SettingKey, SettingsStore, keys};
    pub use crate::color::ColorRegistry;
    pub use crate::scene::{FrameSelection, GroupHierarchy, Payload, Rep, SceneObject, ShapeKind, Visibility};
    pub use crate::session::{
        LoadOptions, LoadedSession, MemoPolicy, Molecule, ObjectKind, SavedScene, StateSelector, load_session,
        load_session_from,
    };
}
