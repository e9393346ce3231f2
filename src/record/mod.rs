//! Versioned atom and bond records.
//!
//! - [`AtomLayout`] / [`BondLayout`] - Per-version byte layouts
//! - [`Lexicon`] - String pool for lexicon-indexed fields
//! - [`AtomRecord`] / [`BondRecord`] - Decoded records, from either storage form

mod atom;
mod bond;
mod layout;
mod lexicon;

pub use atom::*;
pub use bond::*;
pub use layout::*;
pub use lexicon::*;
