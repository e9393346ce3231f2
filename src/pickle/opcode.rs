//! Opcodes understood by the session decoder.

/// One opcode of the serialization protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Mark = b'(',
    Stop = b'.',
    EmptyTuple = b')',
    EmptyList = b']',
    EmptyDict = b'}',
    Global = b'c',
    Append = b'a',
    Appends = b'e',
    Build = b'b',
    SetItem = b's',
    SetItems = b'u',
    Tuple = b't',
    Obj = b'o',
    Reduce = b'R',
    None = b'N',
    BinFloat = b'G',
    BinInt = b'J',
    BinInt1 = b'K',
    BinInt2 = b'M',
    Int = b'I',
    Long = b'L',
    BinString = b'T',
    ShortBinString = b'U',
    BinUnicode = b'X',
    BinPut = b'q',
    LongBinPut = b'r',
    BinGet = b'h',
    LongBinGet = b'j',
}

impl Opcode {
    /// Decode an opcode byte.
    pub fn from_byte(b: u8) -> Option<Self> {
        use Opcode::*;
        Some(match b {
            b'(' => Mark,
            b'.' => Stop,
            b')' => EmptyTuple,
            b']' => EmptyList,
            b'}' => EmptyDict,
            b'c' => Global,
            b'a' => Append,
            b'e' => Appends,
            b'b' => Build,
            b's' => SetItem,
            b'u' => SetItems,
            b't' => Tuple,
            b'o' => Obj,
            b'R' => Reduce,
            b'N' => None,
            b'G' => BinFloat,
            b'J' => BinInt,
            b'K' => BinInt1,
            b'M' => BinInt2,
            b'I' => Int,
            b'L' => Long,
            b'T' => BinString,
            b'U' => ShortBinString,
            b'X' => BinUnicode,
            b'q' => BinPut,
            b'r' => LongBinPut,
            b'h' => BinGet,
            b'j' => LongBinGet,
            _ => return Option::None,
        })
    }

    #[inline]
    pub fn byte(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_roundtrip_for_all_opcodes() {
        for b in 0u8..=255 {
            if let Some(op) = Opcode::from_byte(b) {
                assert_eq!(op.byte(), b);
            }
        }
        assert_eq!(Opcode::from_byte(b'}'), Some(Opcode::EmptyDict));
        assert_eq!(Opcode::from_byte(0x80), Option::None);
    }
}
