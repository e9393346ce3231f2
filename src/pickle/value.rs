//! Decoded object tree.
//!
//! [`DecodedValue`] is the language-neutral result of running the stack
//! machine. Call sites reach into it through typed accessors that return
//! `Option`, so a shape mismatch is a value to handle rather than a panic.

use std::borrow::Cow;

use glam::Vec3;
use smallvec::SmallVec;

use crate::util::{Error, Result};

/// A node of the decoded tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DecodedValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Raw string payload as stored in the stream
    Bytes(Vec<u8>),
    /// Text produced by the memo table or synthesized by the decoder
    String(String),
    List(Vec<DecodedValue>),
    Map(PickleMap),
}

impl DecodedValue {
    /// Short tag for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DecodedValue::Null => "null",
            DecodedValue::Bool(_) => "bool",
            DecodedValue::Int(_) => "int",
            DecodedValue::Float(_) => "float",
            DecodedValue::Bytes(_) => "bytes",
            DecodedValue::String(_) => "string",
            DecodedValue::List(_) => "list",
            DecodedValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DecodedValue::Null)
    }

    /// Integer value; floats are not truncated.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DecodedValue::Int(i) => Some(*i),
            DecodedValue::Bool(b) => Some(*b as i64),
            _ => None,
        }
    }

    /// Integer narrowed to `i32`, wrapping like the writer's C ints.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_int().map(|i| i as i32)
    }

    /// Any numeric value as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DecodedValue::Float(f) => Some(*f),
            DecodedValue::Int(i) => Some(*i as f64),
            DecodedValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        self.as_f64().map(|f| f as f32)
    }

    /// Numeric truthiness.
    pub fn as_bool(&self) -> Option<bool> {
        self.as_f64().map(|f| f != 0.0)
    }

    /// Text for either string representation.
    pub fn as_str(&self) -> Option<Cow<'_, str>> {
        match self {
            DecodedValue::Bytes(b) => Some(String::from_utf8_lossy(b)),
            DecodedValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    /// Raw bytes for either string representation.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DecodedValue::Bytes(b) => Some(b),
            DecodedValue::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[DecodedValue]> {
        match self {
            DecodedValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<DecodedValue>> {
        match self {
            DecodedValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PickleMap> {
        match self {
            DecodedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Text used as a map key.
    pub fn key_string(&self) -> String {
        match self {
            DecodedValue::Int(i) => i.to_string(),
            DecodedValue::Float(f) => f.to_string(),
            other => other.as_str().map(Cow::into_owned).unwrap_or_else(|| format!("{other:?}")),
        }
    }

    // ------------------------------------------------------------------
    // List item access
    // ------------------------------------------------------------------

    /// `i`-th item of a list.
    pub fn item(&self, i: usize) -> Option<&DecodedValue> {
        self.as_list()?.get(i)
    }

    pub fn list_at(&self, i: usize) -> Option<&[DecodedValue]> {
        self.item(i)?.as_list()
    }

    pub fn int_at(&self, i: usize) -> Option<i32> {
        self.item(i)?.as_i32()
    }

    pub fn float_at(&self, i: usize) -> Option<f32> {
        self.item(i)?.as_f32()
    }

    pub fn str_at(&self, i: usize) -> Option<Cow<'_, str>> {
        self.item(i)?.as_str()
    }

    /// Three consecutive numbers starting at `i`.
    pub fn point_at(&self, i: usize) -> Option<Vec3> {
        point_in(self.as_list()?, i)
    }

    /// List item or a `MissingField` error naming `what`.
    pub fn require_list(&self, i: usize, what: &str) -> Result<&[DecodedValue]> {
        self.list_at(i).ok_or_else(|| Error::missing(what))
    }

    /// Render as JSON for inspection. Binary blobs are summarized.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            DecodedValue::Null => Value::Null,
            DecodedValue::Bool(b) => Value::Bool(*b),
            DecodedValue::Int(i) => Value::from(*i),
            DecodedValue::Float(f) => Value::from(*f),
            DecodedValue::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) if !s.contains('\0') => Value::String(s.to_string()),
                _ => serde_json::json!({ "bytes": b.len() }),
            },
            DecodedValue::String(s) => Value::String(s.clone()),
            DecodedValue::List(l) => Value::Array(l.iter().map(DecodedValue::to_json).collect()),
            DecodedValue::Map(m) => Value::Object(
                m.iter().map(|(k, v)| (k.to_string(), v.to_json())).collect(),
            ),
        }
    }
}

/// Three consecutive numbers of a list starting at `i`.
pub fn point_in(list: &[DecodedValue], i: usize) -> Option<Vec3> {
    let x = list.get(i)?.as_f32()?;
    let y = list.get(i + 1)?.as_f32()?;
    let z = list.get(i + 2)?.as_f32()?;
    Some(Vec3::new(x, y, z))
}

/// `i`-th item of a slice as a nested list.
pub fn list_in(list: &[DecodedValue], i: usize) -> Option<&[DecodedValue]> {
    list.get(i)?.as_list()
}

/// `i`-th item of a slice as an `i32`.
pub fn int_in(list: &[DecodedValue], i: usize) -> Option<i32> {
    list.get(i)?.as_i32()
}

/// `i`-th item of a slice as an `f32`.
pub fn float_in(list: &[DecodedValue], i: usize) -> Option<f32> {
    list.get(i)?.as_f32()
}

/// `i`-th item of a slice as text.
pub fn str_in(list: &[DecodedValue], i: usize) -> Option<Cow<'_, str>> {
    list.get(i)?.as_str()
}

// ============================================================================
// PickleMap
// ============================================================================

/// Map with string keys that remembers insertion order.
///
/// Values are boxed so the inline entries stay a fixed size while
/// [`DecodedValue::Map`] nests maps inside maps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickleMap {
    entries: SmallVec<[(String, Box<DecodedValue>); 4]>,
}

impl PickleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: DecodedValue) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *slot.1 = value;
        } else {
            self.entries.push((key, Box::new(value)));
        }
    }

    pub fn get(&self, key: &str) -> Option<&DecodedValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| &**v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut DecodedValue> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| &mut **v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<DecodedValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(*self.entries.remove(pos).1)
    }

    /// List stored under `key`.
    pub fn list(&self, key: &str) -> Option<&[DecodedValue]> {
        self.get(key)?.as_list()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DecodedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), &**v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, DecodedValue)> for PickleMap {
    fn from_iter<T: IntoIterator<Item = (String, DecodedValue)>>(iter: T) -> Self {
        let mut map = PickleMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(s: &str) -> DecodedValue {
        DecodedValue::Bytes(s.as_bytes().to_vec())
    }

    #[test]
    fn test_typed_accessors() {
        let v = DecodedValue::List(vec![
            DecodedValue::Int(7),
            DecodedValue::Float(1.5),
            bytes("CA"),
            DecodedValue::String("CB".into()),
            DecodedValue::Null,
        ]);
        assert_eq!(v.int_at(0), Some(7));
        assert_eq!(v.float_at(0), Some(7.0));
        assert_eq!(v.int_at(1), None);
        assert_eq!(v.float_at(1), Some(1.5));
        assert_eq!(v.str_at(2).as_deref(), Some("CA"));
        assert_eq!(v.str_at(3).as_deref(), Some("CB"));
        assert_eq!(v.list_at(4), None);
        assert_eq!(v.item(9), None);
        assert!(v.require_list(0, "coords").is_err());
    }

    #[test]
    fn test_point_at() {
        let v = DecodedValue::List(vec![
            DecodedValue::Float(1.0),
            DecodedValue::Int(2),
            DecodedValue::Float(3.0),
        ]);
        assert_eq!(v.point_at(0), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.point_at(1), None);
    }

    #[test]
    fn test_map_keeps_insertion_order() {
        let mut m = PickleMap::new();
        m.insert("b", DecodedValue::Int(1));
        m.insert("a", DecodedValue::Int(2));
        m.insert("b", DecodedValue::Int(3));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(m.get("b"), Some(&DecodedValue::Int(3)));
        assert_eq!(m.remove("b"), Some(DecodedValue::Int(3)));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_nested_maps() {
        let mut inner = PickleMap::new();
        inner.insert("x", DecodedValue::Int(7));
        let mut outer = PickleMap::new();
        outer.insert("inner", DecodedValue::Map(inner));

        let got = outer.get("inner").and_then(DecodedValue::as_map).and_then(|m| m.get("x"));
        assert_eq!(got, Some(&DecodedValue::Int(7)));

        if let Some(DecodedValue::Map(m)) = outer.get_mut("inner") {
            m.insert("y", DecodedValue::Bool(true));
        }
        assert_eq!(outer.get("inner").and_then(DecodedValue::as_map).map(PickleMap::len), Some(2));
    }

    #[test]
    fn test_json_summarizes_binary() {
        let v = DecodedValue::Bytes(vec![0, 1, 2, 3]);
        assert_eq!(v.to_json(), serde_json::json!({ "bytes": 4 }));
        assert_eq!(bytes("names").to_json(), serde_json::json!("names"));
    }
}
