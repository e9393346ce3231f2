//! Scene queue.
//!
//! - [`Rep`] / [`RepSets`] - Representation ids and per-rep atom sets
//! - [`SceneObject`] - One queued renderer instruction
//! - [`SceneObjectBuilder`] - Turns decoded objects into scene objects
//! - [`GroupHierarchy`] - Named-object forest and visibility
//! - [`fix_reps`] - Representation cleanup before emission

mod builder;
mod cleanup;
mod group;
mod object;
mod rep;

pub use builder::*;
pub use cleanup::*;
pub use group::*;
pub use object::*;
pub use rep::*;
