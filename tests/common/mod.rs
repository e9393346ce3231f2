//! Synthetic session builder shared by the integration tests.
//!
//! Sessions are assembled as [`DecodedValue`] trees and serialized with the
//! same opcode layout PyMOL writes: the root map is filled with one
//! `SETITEMS`, every non-empty list with one `APPENDS`, and object names are
//! short binary strings so the decoder can record object spans.

#![allow(dead_code)]

use std::io::Write;

use pse::pickle::{DecodedValue, PickleMap};
use tempfile::NamedTempFile;

// ============================================================================
// Values
// ============================================================================

pub fn s(v: &str) -> DecodedValue {
    DecodedValue::Bytes(v.as_bytes().to_vec())
}

pub fn int(i: i64) -> DecodedValue {
    DecodedValue::Int(i)
}

pub fn list(items: Vec<DecodedValue>) -> DecodedValue {
    DecodedValue::List(items)
}

pub fn floats(v: &[f32]) -> DecodedValue {
    list(v.iter().map(|&f| DecodedValue::Float(f as f64)).collect())
}

pub fn ints(v: &[i64]) -> DecodedValue {
    list(v.iter().map(|&i| int(i)).collect())
}

/// `[key, type, value]` setting entry.
pub fn setting(key: u16, kind: i64, value: DecodedValue) -> DecodedValue {
    list(vec![int(key as i64), int(kind), value])
}

/// List-form atom with the fields the loader reads.
pub fn atom(resv: i64, name: &str, elem: &str, reps: i64, color: i64) -> DecodedValue {
    let mut a = vec![int(0); 41];
    a[0] = int(resv);
    a[1] = s("A");
    a[2] = s("");
    a[3] = s(&resv.to_string());
    a[4] = s("");
    a[5] = s("GLY");
    a[6] = s(name);
    a[7] = s(elem);
    a[9] = s(" ");
    a[10] = s(" ");
    a[16] = DecodedValue::Float(1.5);
    a[20] = int(reps);
    a[21] = int(color);
    a[25] = int(1);
    list(a)
}

/// `[atom1, atom2, order, id]`
pub fn bond(a: i64, b: i64, order: i64) -> DecodedValue {
    ints(&[a, b, order, 0])
}

/// Object header with color and representation list; settings at 8.
pub fn header(color: i64, reps: &[i64], settings: Vec<DecodedValue>) -> DecodedValue {
    let mut h = vec![DecodedValue::Null; 9];
    h[2] = int(color);
    h[3] = ints(reps);
    h[8] = list(settings);
    list(h)
}

/// Molecule object data with one coordinate set per state.
///
/// Later states list all atoms through an index map.
pub fn molecule(atoms: Vec<DecodedValue>, bonds: Vec<DecodedValue>, states: &[Vec<f32>]) -> DecodedValue {
    let n = atoms.len();
    let state_list = states
        .iter()
        .enumerate()
        .map(|(i, coords)| {
            let mut st = vec![DecodedValue::Null; 9];
            st[2] = floats(coords);
            if i > 0 {
                st[3] = ints(&(0..n as i64).collect::<Vec<_>>());
            }
            list(st)
        })
        .collect();
    let mut obj = vec![DecodedValue::Null; 11];
    obj[0] = header(0, &[], Vec::new());
    obj[2] = int(bonds.len() as i64);
    obj[3] = int(n as i64);
    obj[4] = list(state_list);
    obj[6] = list(bonds);
    obj[7] = list(atoms);
    list(obj)
}

/// CGO object data carrying `ops`.
pub fn cgo(color: i64, ops: &[f32]) -> DecodedValue {
    list(vec![header(color, &[], Vec::new()), DecodedValue::Null, list(vec![floats(ops)])])
}

pub fn group() -> DecodedValue {
    list(vec![header(0, &[], Vec::new())])
}

/// One `names` entry.
pub fn named(name: &str, visible: bool, code: i64, data: DecodedValue, parent: &str) -> DecodedValue {
    list(vec![
        s(name),
        int(0),
        int(visible as i64),
        DecodedValue::Null,
        int(code),
        data,
        s(parent),
        DecodedValue::Null,
    ])
}

/// Root map with version, settings and the given names.
pub fn session(names: Vec<DecodedValue>, settings: Vec<DecodedValue>) -> PickleMap {
    let mut all = vec![DecodedValue::Null];
    all.extend(names);
    let mut root = PickleMap::new();
    root.insert("version", int(181));
    root.insert("settings", list(settings));
    root.insert("names", list(all));
    root
}

/// Three bonded atoms shown as sticks.
pub fn three_atom_session() -> PickleMap {
    let sticks = 1 << 0;
    let mol = molecule(
        vec![atom(1, "N", "N", sticks, 2), atom(1, "CA", "C", sticks, 2), atom(1, "C", "C", sticks, 2)],
        vec![bond(0, 1, 1), bond(1, 2, 1)],
        &[vec![0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 2.0, 1.2, 0.0]],
    );
    session(vec![named("tri", true, 1, mol, " ")], Vec::new())
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize a root map into an opcode stream.
pub fn to_pickle(root: &PickleMap) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(b'}');
    if !root.is_empty() {
        out.push(b'(');
        for (k, v) in root.iter() {
            write_str(&mut out, k.as_bytes());
            write_value(&mut out, v);
        }
        out.push(b'u');
    }
    out.push(b'.');
    out
}

fn write_str(out: &mut Vec<u8>, b: &[u8]) {
    if b.len() < 256 {
        out.push(b'U');
        out.push(b.len() as u8);
    } else {
        out.push(b'T');
        out.extend_from_slice(&(b.len() as i32).to_le_bytes());
    }
    out.extend_from_slice(b);
}

fn write_value(out: &mut Vec<u8>, v: &DecodedValue) {
    match v {
        DecodedValue::Null => out.push(b'N'),
        DecodedValue::Bool(b) => {
            out.push(b'K');
            out.push(*b as u8);
        }
        DecodedValue::Int(i) => {
            out.push(b'J');
            out.extend_from_slice(&(*i as i32).to_le_bytes());
        }
        DecodedValue::Float(f) => {
            out.push(b'G');
            out.extend_from_slice(&f.to_be_bytes());
        }
        DecodedValue::Bytes(b) => write_str(out, b),
        DecodedValue::String(s) => {
            out.push(b'X');
            out.extend_from_slice(&(s.len() as i32).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        }
        DecodedValue::List(items) => {
            out.push(b']');
            if !items.is_empty() {
                out.push(b'(');
                for item in items {
                    write_value(out, item);
                }
                out.push(b'e');
            }
        }
        DecodedValue::Map(m) => {
            out.push(b'}');
            if !m.is_empty() {
                out.push(b'(');
                for (k, v) in m.iter() {
                    write_str(out, k.as_bytes());
                    write_value(out, v);
                }
                out.push(b'u');
            }
        }
    }
}

/// Write a session to a temp file.
pub fn write_session(root: &PickleMap) -> NamedTempFile {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(&to_pickle(root)).expect("Failed to write session");
    temp.flush().expect("Failed to flush session");
    temp
}
