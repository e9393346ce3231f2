//! Byte spans of named top-level objects.
//!
//! While decoding, the reader notes where each entry of the session's
//! `names` list starts and how long it is. Dropping some of those spans from
//! the original bytes gives a smaller session that still decodes.

use crate::util::BitSet;

/// Location of one named object in the raw stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSpan {
    pub name: String,
    /// Offset of the object's opening list opcode
    pub start: u64,
    pub len: u64,
}

impl ObjectSpan {
    pub fn end(&self) -> u64 {
        self.start + self.len
    }
}

/// Spans in the order the objects appear in the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanTable {
    spans: Vec<ObjectSpan>,
}

impl SpanTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: ObjectSpan) {
        self.spans.push(span);
    }

    /// Span of the first object with this name.
    pub fn get(&self, name: &str) -> Option<&ObjectSpan> {
        self.spans.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectSpan> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// Accumulates excluded byte ranges and produces the trimmed copy.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    bytes: BitSet,
    names: Vec<String>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude one object's span.
    pub fn exclude(&mut self, span: &ObjectSpan) {
        self.bytes.set_range(span.start as usize, span.end() as usize);
        self.names.push(span.name.clone());
    }

    /// Names of excluded objects in exclusion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn excluded_len(&self) -> usize {
        self.bytes.cardinality()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Copy of `original` without the excluded bytes, order preserved.
    pub fn apply(&self, original: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(original.len().saturating_sub(self.excluded_len()));
        let mut run_start = 0;
        for (i, _) in original.iter().enumerate() {
            if self.bytes.get(i) {
                out.extend_from_slice(&original[run_start..i]);
                run_start = i + 1;
            }
        }
        out.extend_from_slice(&original[run_start..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_removes_spans() {
        let data: Vec<u8> = (0u8..20).collect();
        let mut ex = Exclusions::new();
        ex.exclude(&ObjectSpan { name: "map".into(), start: 2, len: 3 });
        ex.exclude(&ObjectSpan { name: "cgo".into(), start: 10, len: 5 });
        let out = ex.apply(&data);
        assert_eq!(out.len(), 12);
        assert_eq!(&out[..4], &[0, 1, 5, 6]);
        assert_eq!(ex.names(), &["map".to_string(), "cgo".to_string()]);
    }

    #[test]
    fn test_apply_without_spans_is_identity() {
        let data = b"session".to_vec();
        assert_eq!(Exclusions::new().apply(&data), data);
    }

    #[test]
    fn test_span_lookup() {
        let mut t = SpanTable::new();
        t.push(ObjectSpan { name: "1abc".into(), start: 40, len: 100 });
        assert_eq!(t.get("1abc").map(|s| s.end()), Some(140));
        assert!(t.get("other").is_none());
    }
}
