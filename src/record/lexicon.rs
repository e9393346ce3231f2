//! Interned string pool shipped alongside binary atom dumps.
//!
//! Blob layout: `n` (i32 LE), `n` lexicon indices (i32 LE), then `n`
//! NUL-terminated UTF-8 strings in index order. Index 0 is always a blank.

use std::collections::BTreeMap;

use byteorder::{ByteOrder, LittleEndian};

use crate::util::{Error, Result};

/// Decoded string pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    tokens: BTreeMap<usize, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self { tokens: BTreeMap::from([(0, " ".to_string())]) }
    }
}

impl Lexicon {
    /// Parse a lexicon blob.
    pub fn parse(blob: &[u8]) -> Result<Self> {
        if blob.is_empty() {
            return Ok(Self::default());
        }
        let n = read_i32(blob, 0)?;
        let n = usize::try_from(n).map_err(|_| Error::invalid(format!("lexicon count {n}")))?;
        // every entry needs at least its index word
        if n > (blob.len() - 4) / 4 {
            return Err(Error::invalid(format!("lexicon count {n} exceeds {} byte blob", blob.len())));
        }
        let mut index = Vec::with_capacity(n);
        for i in 0..n {
            let ix = read_i32(blob, 4 + i * 4)?;
            let ix = usize::try_from(ix).map_err(|_| Error::invalid(format!("lexicon index {ix}")))?;
            index.push(ix);
        }
        let mut tokens = Self::default().tokens;
        let mut pt = 4 + n * 4;
        for ix in index {
            let s = c_str(blob, pt).ok_or_else(|| Error::invalid("unterminated lexicon string"))?;
            pt += s.len() + 1;
            tokens.insert(ix, String::from_utf8_lossy(s).into_owned());
        }
        Ok(Self { tokens })
    }

    /// Token for an index. Unknown indices give a blank.
    pub fn get(&self, index: i32) -> &str {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.tokens.get(&i))
            .map_or(" ", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn read_i32(blob: &[u8], at: usize) -> Result<i32> {
    blob.get(at..at + 4)
        .map(LittleEndian::read_i32)
        .ok_or_else(|| Error::invalid(format!("lexicon truncated at {at}")))
}

/// Bytes from `pt` up to the next NUL. `None` if no terminator follows.
pub fn c_str(data: &[u8], pt: usize) -> Option<&[u8]> {
    let rest = data.get(pt..)?;
    let end = rest.iter().position(|&b| b == 0)?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon_blob(entries: &[(i32, &str)]) -> Vec<u8> {
        let mut out = (entries.len() as i32).to_le_bytes().to_vec();
        for (ix, _) in entries {
            out.extend_from_slice(&ix.to_le_bytes());
        }
        for (_, s) in entries {
            out.extend_from_slice(s.as_bytes());
            out.push(0);
        }
        out
    }

    #[test]
    fn test_parse_lexicon() {
        let blob = lexicon_blob(&[(2, "ALA"), (1, "CA"), (4, "A")]);
        let lex = Lexicon::parse(&blob).unwrap();
        assert_eq!(lex.get(0), " ");
        assert_eq!(lex.get(1), "CA");
        assert_eq!(lex.get(2), "ALA");
        assert_eq!(lex.get(4), "A");
        assert_eq!(lex.get(3), " ");
        assert_eq!(lex.get(99), " ");
        assert_eq!(lex.get(-1), " ");
    }

    #[test]
    fn test_truncated_lexicon() {
        let mut blob = lexicon_blob(&[(1, "CA")]);
        blob.pop();
        assert!(Lexicon::parse(&blob).is_err());
        assert!(Lexicon::parse(&[1, 0]).is_err());
    }

    #[test]
    fn test_oversized_lexicon_rejected() {
        // count far beyond the blob
        let mut blob = i32::MAX.to_le_bytes().to_vec();
        blob.extend_from_slice(b"a\0");
        assert!(matches!(Lexicon::parse(&blob), Err(Error::InvalidStructure(_))));

        // one entry whose index is huge stays sparse
        let blob = lexicon_blob(&[(i32::MAX, "a")]);
        let lex = Lexicon::parse(&blob).unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.get(i32::MAX), "a");
    }

    #[test]
    fn test_c_str() {
        assert_eq!(c_str(b"ab\0cd\0", 3), Some(&b"cd"[..]));
        assert_eq!(c_str(b"ab", 0), None);
    }
}
