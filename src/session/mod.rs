//! Session loading.
//!
//! - [`load_session`] - Decode a session and build its scene queue
//! - [`LoadedSession`] - Everything a load produces
//! - [`LoadOptions`] / [`StateSelector`] - What to load
//! - [`Molecule`] / [`Atom`] / [`Bond`] - Placed molecule states
//! - [`SavedScene`] - Scenes stored in the session

mod kind;
mod loader;
mod model;
mod molecule;
mod options;
mod scenes;

pub use kind::*;
pub use loader::*;
pub use model::*;
pub use molecule::*;
pub use options::*;
pub use scenes::*;
