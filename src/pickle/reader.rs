//! Stack-machine decoder for the session stream.
//!
//! The stream is a linear sequence of one-byte opcodes with inline operands.
//! Each opcode pushes a literal, pushes an empty container, combines operands
//! from the stack, manages the mark stack or touches the memo table. `STOP`
//! ends decoding and the single root map is returned.
//!
//! Two pieces of state live beside the operand stack:
//!
//! - the memo table, which only ever holds strings;
//! - the lookaside tracker, which watches the mark nesting inside the
//!   top-level `names` list and records the byte span of every named object
//!   (see [`SpanTable`]).

use std::collections::HashMap;
use std::io::Read;

use super::{DecodedValue, ObjectSpan, Opcode, PickleMap, SpanTable};
use crate::util::{ByteCursor, DecodeError};

/// Which values the memo table keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoPolicy {
    /// Every string, at any nesting depth.
    #[default]
    StringsOnly,
    /// Strings stored while at most `n` marks are open.
    StringsUpToDepth(usize),
}

/// Counters reported after a decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub opcodes: u64,
    pub memo_stored: usize,
    pub memo_retrieved: usize,
    pub memo_missing: usize,
    pub discarded: usize,
}

#[derive(Debug, Default)]
struct Lookaside {
    enabled: bool,
    in_names: bool,
    in_movie: bool,
    this_name: Option<String>,
    file_pt: u64,
    empty_list_pt: u64,
    last_mark: usize,
}

/// Decoder over one session stream. Single use.
pub struct PickleReader<R> {
    cursor: ByteCursor<R>,
    stack: Vec<DecodedValue>,
    marks: Vec<usize>,
    memo: HashMap<u32, String>,
    /// Reused by every newline-terminated operand
    scratch: Vec<u8>,
    policy: MemoPolicy,
    lookaside: Lookaside,
    spans: SpanTable,
    stats: DecodeStats,
}

impl<R: Read> PickleReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            cursor: ByteCursor::new(inner),
            stack: Vec::with_capacity(1000),
            marks: Vec::new(),
            memo: HashMap::new(),
            scratch: Vec::with_capacity(16),
            policy: MemoPolicy::default(),
            lookaside: Lookaside::default(),
            spans: SpanTable::new(),
            stats: DecodeStats::default(),
        }
    }

    /// Set the memo policy.
    pub fn with_memo_policy(mut self, policy: MemoPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record byte spans of named objects while decoding.
    pub fn with_spans(mut self, enabled: bool) -> Self {
        self.lookaside.enabled = enabled;
        self
    }

    /// Spans recorded so far.
    pub fn spans(&self) -> &SpanTable {
        &self.spans
    }

    pub fn into_spans(self) -> SpanTable {
        self.spans
    }

    pub fn stats(&self) -> DecodeStats {
        self.stats
    }

    /// Run the machine to `STOP` and return the root map.
    pub fn decode(&mut self) -> Result<DecodedValue, DecodeError> {
        loop {
            let Some(byte) = self.cursor.next_byte() else {
                return Err(DecodeError::PrematureEof { position: self.cursor.position() });
            };
            let op = Opcode::from_byte(byte).ok_or(DecodeError::UnknownOpcode {
                opcode: byte,
                position: self.cursor.position() - 1,
            })?;
            self.stats.opcodes += 1;
            if op == Opcode::Stop {
                break;
            }
            self.step(op)?;
        }
        tracing::debug!(
            "decoded {} opcodes; memo stored {} retrieved {} missing {}",
            self.stats.opcodes,
            self.stats.memo_stored,
            self.stats.memo_retrieved,
            self.stats.memo_missing
        );
        self.memo.clear();
        self.finish()
    }

    fn step(&mut self, op: Opcode) -> Result<(), DecodeError> {
        match op {
            Opcode::EmptyDict => self.push(DecodedValue::Map(PickleMap::new())),
            Opcode::EmptyList => {
                self.lookaside.empty_list_pt = self.cursor.position() - 1;
                self.push(DecodedValue::List(Vec::new()));
            }
            Opcode::EmptyTuple => self.push(DecodedValue::List(Vec::new())),
            Opcode::None => self.push(DecodedValue::Null),

            Opcode::BinFloat => {
                let d = self.cursor.read_f64_be()?;
                self.push(DecodedValue::Float(d));
            }
            Opcode::BinInt => {
                let i = self.cursor.read_i32_le()?;
                self.push(DecodedValue::Int(i as i64));
            }
            Opcode::BinInt1 => {
                let i = self.cursor.read_u8()?;
                self.push(DecodedValue::Int(i as i64));
            }
            Opcode::BinInt2 => {
                let i = self.cursor.read_u16_le()?;
                self.push(DecodedValue::Int(i as i64));
            }
            Opcode::Int => {
                let v = self.read_line_int()?;
                self.push(DecodedValue::Int(v));
            }
            Opcode::Long => {
                let v = self.read_line_long()?;
                self.push(DecodedValue::Int(v));
            }

            Opcode::ShortBinString => {
                let n = self.cursor.read_u8()? as usize;
                let bytes = self.cursor.read_bytes(n)?;
                let la = &mut self.lookaside;
                if la.enabled && la.in_names && self.marks.len() == 3 && la.last_mark == self.stack.len() {
                    la.this_name = Some(String::from_utf8_lossy(&bytes).into_owned());
                    la.file_pt = la.empty_list_pt;
                }
                self.push(DecodedValue::Bytes(bytes));
            }
            Opcode::BinString | Opcode::BinUnicode => {
                let n = self.cursor.read_i32_le()?;
                let n = usize::try_from(n).map_err(|_| self.mismatch("string length", n.to_string()))?;
                let bytes = self.cursor.read_bytes(n)?;
                self.push(DecodedValue::Bytes(bytes));
            }

            Opcode::Global => {
                self.cursor.read_until_into(b'\n', &mut self.scratch)?;
                let module = self.scratch.clone();
                self.cursor.read_until_into(b'\n', &mut self.scratch)?;
                let name = self.scratch.clone();
                self.push(DecodedValue::List(vec![
                    DecodedValue::String("global".into()),
                    DecodedValue::Bytes(module),
                    DecodedValue::Bytes(name),
                ]));
            }

            Opcode::Mark => self.put_mark(),
            Opcode::Obj | Opcode::Tuple => {
                let items = self.pop_to_mark()?;
                self.push(DecodedValue::List(items));
            }

            Opcode::Append => {
                let v = self.pop()?;
                self.peek_list()?.push(v);
            }
            Opcode::Appends => {
                let items = self.pop_to_mark()?;
                if self.lookaside.enabled && self.lookaside.in_names && self.marks.len() == 2 {
                    self.record_span();
                }
                self.peek_list()?.extend(items);
            }
            Opcode::SetItem => {
                let value = self.pop()?;
                let key = self.pop()?.key_string();
                self.peek_map()?.insert(key, value);
            }
            Opcode::SetItems => {
                let items = self.pop_to_mark()?;
                let position = self.cursor.position();
                match self.stack.last_mut() {
                    Some(DecodedValue::List(list)) => list.extend(items),
                    Some(DecodedValue::Map(_)) if items.len() % 2 == 1 => {
                        return Err(DecodeError::TypeMismatch {
                            expected: "key/value pairs",
                            actual: format!("{} items", items.len()),
                            position,
                        });
                    }
                    Some(DecodedValue::Map(map)) => {
                        let mut it = items.into_iter();
                        while let (Some(k), Some(v)) = (it.next(), it.next()) {
                            map.insert(k.key_string(), v);
                        }
                    }
                    other => {
                        return Err(DecodeError::TypeMismatch {
                            expected: "list or map",
                            actual: other.map_or("empty stack", |v| v.kind_name()).to_string(),
                            position,
                        })
                    }
                }
            }

            // Object construction is not modeled; the operands are dropped.
            Opcode::Build | Opcode::Reduce => {
                self.pop()?;
                self.stats.discarded += 1;
            }

            Opcode::BinPut => {
                let id = self.cursor.read_u8()? as u32;
                self.put_memo(id)?;
            }
            Opcode::LongBinPut => {
                let id = self.cursor.read_i32_le()? as u32;
                self.put_memo(id)?;
            }
            Opcode::BinGet => {
                let id = self.cursor.read_u8()? as u32;
                self.get_memo(id);
            }
            Opcode::LongBinGet => {
                let id = self.cursor.read_i32_le()? as u32;
                self.get_memo(id);
            }

            Opcode::Stop => {}
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Stack helpers
    // ------------------------------------------------------------------

    #[inline]
    fn push(&mut self, v: DecodedValue) {
        self.stack.push(v);
    }

    fn pop(&mut self) -> Result<DecodedValue, DecodeError> {
        let position = self.cursor.position();
        self.stack.pop().ok_or(DecodeError::TypeMismatch {
            expected: "operand",
            actual: "empty stack".into(),
            position,
        })
    }

    fn mismatch(&self, expected: &'static str, actual: impl Into<String>) -> DecodeError {
        DecodeError::TypeMismatch { expected, actual: actual.into(), position: self.cursor.position() }
    }

    fn peek_list(&mut self) -> Result<&mut Vec<DecodedValue>, DecodeError> {
        let position = self.cursor.position();
        match self.stack.last_mut() {
            Some(DecodedValue::List(l)) => Ok(l),
            other => Err(DecodeError::TypeMismatch {
                expected: "list",
                actual: other.map_or("empty stack", |v| v.kind_name()).to_string(),
                position,
            }),
        }
    }

    fn peek_map(&mut self) -> Result<&mut PickleMap, DecodeError> {
        let position = self.cursor.position();
        match self.stack.last_mut() {
            Some(DecodedValue::Map(m)) => Ok(m),
            other => Err(DecodeError::TypeMismatch {
                expected: "map",
                actual: other.map_or("empty stack", |v| v.kind_name()).to_string(),
                position,
            }),
        }
    }

    fn put_mark(&mut self) {
        let depth = self.stack.len();
        self.marks.push(depth);
        self.lookaside.last_mark = depth;
        if self.marks.len() == 2 && depth >= 2 {
            // The key two slots down names the top-level section being filled.
            if let Some(section) = self.stack[depth - 2].as_str() {
                self.lookaside.in_movie = section == "movie";
                self.lookaside.in_names = section == "names";
            }
        }
    }

    fn pop_to_mark(&mut self) -> Result<Vec<DecodedValue>, DecodeError> {
        let mark = self.marks.pop().ok_or_else(|| self.mismatch("mark", "no open mark"))?;
        if mark > self.stack.len() {
            return Err(self.mismatch("mark within stack", format!("mark {mark}")));
        }
        Ok(self.stack.split_off(mark))
    }

    fn record_span(&mut self) {
        let end = self.cursor.position();
        let la = &mut self.lookaside;
        let name = la.this_name.take().unwrap_or_default();
        tracing::trace!("object span {name}: {}..{end}", la.file_pt);
        self.spans.push(ObjectSpan { name, start: la.file_pt, len: end - la.file_pt });
    }

    // ------------------------------------------------------------------
    // Memo
    // ------------------------------------------------------------------

    fn put_memo(&mut self, id: u32) -> Result<(), DecodeError> {
        if let MemoPolicy::StringsUpToDepth(max) = self.policy {
            if self.marks.len() > max {
                return Ok(());
            }
        }
        let position = self.cursor.position();
        let top = self.stack.last().ok_or(DecodeError::TypeMismatch {
            expected: "operand",
            actual: "empty stack".into(),
            position,
        })?;
        if let Some(s) = top.as_str() {
            self.memo.insert(id, s.into_owned());
            self.stats.memo_stored += 1;
        }
        Ok(())
    }

    fn get_memo(&mut self, id: u32) {
        match self.memo.get(&id) {
            Some(s) => {
                self.stats.memo_retrieved += 1;
                self.push(DecodedValue::String(s.clone()));
            }
            None => {
                self.stats.memo_missing += 1;
                tracing::warn!("memo id {id} retrieved before it was stored");
                self.push(DecodedValue::String(format!("<MISSING:{id}>")));
            }
        }
    }

    // ------------------------------------------------------------------
    // Line operands
    // ------------------------------------------------------------------

    fn read_line(&mut self) -> Result<String, DecodeError> {
        self.cursor.read_until_into(b'\n', &mut self.scratch)?;
        Ok(String::from_utf8_lossy(&self.scratch).trim().to_string())
    }

    /// `INT` operand. Values outside `i32` keep their low 32 bits.
    fn read_line_int(&mut self) -> Result<i64, DecodeError> {
        let s = self.read_line()?;
        if let Ok(i) = s.parse::<i32>() {
            return Ok(i as i64);
        }
        s.parse::<i64>()
            .map(|l| (l as i32) as i64)
            .map_err(|_| self.mismatch("integer literal", s))
    }

    fn read_line_long(&mut self) -> Result<i64, DecodeError> {
        let s = self.read_line()?;
        let digits = s.strip_suffix('L').unwrap_or(&s);
        digits.parse::<i64>().map_err(|_| self.mismatch("long literal", s.clone()))
    }

    fn finish(&mut self) -> Result<DecodedValue, DecodeError> {
        if self.stack.is_empty() {
            return Err(self.mismatch("root map", "empty stack"));
        }
        let rest = self.stack.split_off(1);
        let root = self.stack.pop().unwrap_or_default();
        let DecodedValue::Map(mut map) = root else {
            return Err(self.mismatch("root map", root.kind_name()));
        };
        if map.is_empty() {
            // Legacy layout: the root is an empty dict followed by key/value
            // pairs. Pairs are anchored at the top of the stack, so an odd
            // leftover sits at the bottom and is dropped.
            let skip = rest.len() % 2;
            let mut it = rest.into_iter().skip(skip);
            while let (Some(k), Some(v)) = (it.next(), it.next()) {
                map.insert(k.key_string(), v);
            }
        }
        Ok(DecodedValue::Map(map))
    }
}

/// Decode a complete stream with default settings.
pub fn decode<R: Read>(inner: R) -> Result<DecodedValue, DecodeError> {
    PickleReader::new(inner).decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal opcode stream builder.
    #[derive(Default)]
    struct Stream(Vec<u8>);

    impl Stream {
        fn op(mut self, op: Opcode) -> Self {
            self.0.push(op.byte());
            self
        }
        fn short_str(mut self, s: &str) -> Self {
            self.0.push(Opcode::ShortBinString.byte());
            self.0.push(s.len() as u8);
            self.0.extend_from_slice(s.as_bytes());
            self
        }
        fn int(mut self, i: i32) -> Self {
            self.0.push(Opcode::BinInt.byte());
            self.0.extend_from_slice(&i.to_le_bytes());
            self
        }
        fn float(mut self, f: f64) -> Self {
            self.0.push(Opcode::BinFloat.byte());
            self.0.extend_from_slice(&f.to_be_bytes());
            self
        }
        fn put(mut self, id: u8) -> Self {
            self.0.push(Opcode::BinPut.byte());
            self.0.push(id);
            self
        }
        fn get(mut self, id: u8) -> Self {
            self.0.push(Opcode::BinGet.byte());
            self.0.push(id);
            self
        }
        fn raw(mut self, b: &[u8]) -> Self {
            self.0.extend_from_slice(b);
            self
        }
    }

    fn run(s: Stream) -> Result<DecodedValue, DecodeError> {
        decode(&s.0[..])
    }

    #[test]
    fn test_setitems_preserves_insertion_order() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .op(Opcode::Mark)
            .short_str("version")
            .int(1810)
            .short_str("main")
            .int(640)
            .op(Opcode::SetItems)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let map = root.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["version", "main"]);
        assert_eq!(map.get("version"), Some(&DecodedValue::Int(1810)));
        assert_eq!(map.get("main"), Some(&DecodedValue::Int(640)));
    }

    #[test]
    fn test_memo_store_and_retrieve() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("a")
            .op(Opcode::EmptyList)
            .short_str("CA")
            .put(5)
            .op(Opcode::Append)
            .get(5)
            .op(Opcode::Append)
            .get(7)
            .op(Opcode::Append)
            .op(Opcode::SetItem)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let list = root.as_map().unwrap().list("a").unwrap().to_vec();
        assert_eq!(list[0].as_str().as_deref(), Some("CA"));
        assert_eq!(list[1], DecodedValue::String("CA".into()));
        assert_eq!(list[2], DecodedValue::String("<MISSING:7>".into()));
    }

    #[test]
    fn test_memo_only_keeps_strings() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("a")
            .op(Opcode::EmptyList)
            .int(3)
            .put(1)
            .op(Opcode::Append)
            .get(1)
            .op(Opcode::Append)
            .op(Opcode::SetItem)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let list = root.as_map().unwrap().list("a").unwrap().to_vec();
        assert_eq!(list[1], DecodedValue::String("<MISSING:1>".into()));
    }

    #[test]
    fn test_depth_limited_memo() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .op(Opcode::Mark)
            .short_str("k")
            .put(1)
            .op(Opcode::EmptyList)
            .op(Opcode::Mark)
            .short_str("deep")
            .put(2)
            .op(Opcode::Appends)
            .op(Opcode::SetItems)
            .op(Opcode::Stop);
        let mut reader = PickleReader::new(&s.0[..]).with_memo_policy(MemoPolicy::StringsUpToDepth(1));
        reader.decode().unwrap();
        assert_eq!(reader.stats().memo_stored, 1);
    }

    #[test]
    fn test_float_is_big_endian_and_ints_little_endian() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("f")
            .float(0.25)
            .op(Opcode::SetItem)
            .short_str("i")
            .raw(&[Opcode::BinInt2.byte(), 0x34, 0x12])
            .op(Opcode::SetItem)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let map = root.as_map().unwrap();
        assert_eq!(map.get("f"), Some(&DecodedValue::Float(0.25)));
        assert_eq!(map.get("i"), Some(&DecodedValue::Int(0x1234)));
    }

    #[test]
    fn test_text_int_and_long() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("i")
            .raw(b"I42\n")
            .op(Opcode::SetItem)
            .short_str("big")
            .raw(b"I2281701376\n")
            .op(Opcode::SetItem)
            .short_str("l")
            .raw(b"L123456789012L\n")
            .op(Opcode::SetItem)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let map = root.as_map().unwrap();
        assert_eq!(map.get("i"), Some(&DecodedValue::Int(42)));
        assert_eq!(map.get("big"), Some(&DecodedValue::Int(0x8800_0000u32 as i32 as i64)));
        assert_eq!(map.get("l"), Some(&DecodedValue::Int(123_456_789_012)));
    }

    #[test]
    fn test_unknown_opcode() {
        let s = Stream::default().op(Opcode::EmptyDict).raw(&[0xff]);
        assert_eq!(run(s), Err(DecodeError::UnknownOpcode { opcode: 0xff, position: 1 }));
    }

    #[test]
    fn test_truncated_stream() {
        let s = Stream::default().op(Opcode::EmptyDict).raw(&[Opcode::BinInt.byte(), 1, 2]);
        assert!(matches!(run(s), Err(DecodeError::PrematureEof { .. })));
        let s = Stream::default().op(Opcode::EmptyDict);
        assert!(matches!(run(s), Err(DecodeError::PrematureEof { .. })));
    }

    #[test]
    fn test_append_to_non_list_is_type_mismatch() {
        let s = Stream::default().op(Opcode::EmptyDict).int(1).int(2).op(Opcode::Append);
        assert!(matches!(run(s), Err(DecodeError::TypeMismatch { expected: "list", .. })));
    }

    #[test]
    fn test_root_must_be_map() {
        let s = Stream::default().op(Opcode::EmptyList).op(Opcode::Stop);
        assert!(matches!(run(s), Err(DecodeError::TypeMismatch { expected: "root map", .. })));
    }

    #[test]
    fn test_legacy_root_pairs() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("version")
            .int(99)
            .short_str("names")
            .op(Opcode::EmptyList)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let map = root.as_map().unwrap();
        assert_eq!(map.get("version"), Some(&DecodedValue::Int(99)));
        assert_eq!(map.list("names").map(|l| l.len()), Some(0));
    }

    #[test]
    fn test_legacy_root_pairs_from_top() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .int(7)
            .short_str("version")
            .int(99)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let map = root.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("version"), Some(&DecodedValue::Int(99)));
    }

    #[test]
    fn test_setitems_odd_count_is_type_mismatch() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .op(Opcode::Mark)
            .short_str("version")
            .int(1810)
            .short_str("main")
            .op(Opcode::SetItems)
            .op(Opcode::Stop);
        assert!(matches!(run(s), Err(DecodeError::TypeMismatch { expected: "key/value pairs", .. })));
    }

    #[test]
    fn test_global_reduce_and_tuple() {
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .short_str("g")
            .raw(b"ccopy_reg\n_reconstructor\n")
            .op(Opcode::Mark)
            .int(1)
            .op(Opcode::Tuple)
            .op(Opcode::Reduce)
            .op(Opcode::SetItem)
            .op(Opcode::Stop);
        let root = run(s).unwrap();
        let g = root.as_map().unwrap().get("g").unwrap().clone();
        assert_eq!(g.str_at(0).as_deref(), Some("global"));
        assert_eq!(g.str_at(2).as_deref(), Some("_reconstructor"));
    }

    #[test]
    fn test_names_spans_recorded() {
        // {"names": [None, ["obj", 1]]}
        let s = Stream::default()
            .op(Opcode::EmptyDict)
            .op(Opcode::Mark)
            .short_str("names")
            .op(Opcode::EmptyList)
            .op(Opcode::Mark)
            .op(Opcode::None)
            .op(Opcode::EmptyList)
            .op(Opcode::Mark)
            .short_str("obj")
            .int(1)
            .op(Opcode::Appends)
            .op(Opcode::Appends)
            .op(Opcode::SetItems)
            .op(Opcode::Stop);
        let bytes = s.0.clone();
        let mut reader = PickleReader::new(&bytes[..]).with_spans(true);
        let root = reader.decode().unwrap();
        let names = root.as_map().unwrap().list("names").unwrap().to_vec();
        assert_eq!(names.len(), 2);
        let span = reader.spans().get("obj").cloned().unwrap();
        // Span runs from the object's EMPTY_LIST through its APPENDS.
        assert_eq!(bytes[span.start as usize], Opcode::EmptyList.byte());
        assert_eq!(bytes[(span.end() - 1) as usize], Opcode::Appends.byte());
        assert_eq!(span.start, 12);
    }
}
