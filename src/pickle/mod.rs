//! Session stream decoding.
//!
//! - [`Opcode`] - The opcode set
//! - [`PickleReader`] - Stack machine producing a [`DecodedValue`] tree
//! - [`SpanTable`] / [`Exclusions`] - Byte spans of named objects for trimming

mod opcode;
mod reader;
mod span;
mod value;

pub use opcode::*;
pub use reader::*;
pub use span::*;
pub use value::*;
