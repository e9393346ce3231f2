//! Utility types shared by the decoder layers.
//!
//! - [`Error`] / [`Result`] / [`DecodeError`] - Error handling
//! - [`BitSet`] - Entity selections
//! - [`ByteCursor`] - Positioned primitive reads

mod bitset;
mod cursor;
mod error;

pub use bitset::*;
pub use cursor::*;
pub use error::*;

/// Lowercase a name and replace everything but ASCII letters and digits with `_`.
pub fn fix_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() { c } else { '_' }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_name() {
        assert_eq!(fix_name("1ABC.chain-A"), "1abc_chain_a");
        assert_eq!(fix_name(""), "");
    }
}
