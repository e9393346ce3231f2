//! Molecule extraction from the decoded tree.
//!
//! A molecule object is a list whose interesting slots are:
//!
//! | slot | content |
//! |---|---|
//! | 0 | object header (`[.., .., color, reps, .., .., .., .., settings]`) |
//! | 2 | bond count |
//! | 3 | atom count |
//! | 4 | states |
//! | 6 | bonds, binary dump or per-bond lists |
//! | 7 | atoms, binary dump or per-atom lists |
//! | 10 | crystal data |
//!
//! Each state is `[.., .., coords, idx_to_atom, .., .., .., settings, label_positions]`
//! where the arrays are either lists or packed little-endian bytes.

use std::collections::{HashMap, HashSet};

use byteorder::{ByteOrder, LittleEndian};
use glam::Vec3;

use super::{Atom, AtomFlags, Bond, CrystalInfo, Molecule, SecondaryStructure, SsKind, Valence};
use crate::pickle::{DecodedValue, float_in, int_in, list_in, point_in, str_in};
use crate::record::{AtomDump, AtomRecord, decode_atom_list, decode_bonds};
use crate::scene::{LabelOffset, RepSets};
use crate::settings::{SettingsStore, keys, settings_from_list};
use crate::util::{BitSet, Error, Result};

/// Residue numbers below this take no part in secondary structure.
pub const MIN_RESV: i32 = -1000;

// ============================================================================
// Array views
// ============================================================================

/// Numbers stored as a list or as packed little-endian 32-bit values.
#[derive(Debug, Clone, Copy)]
enum Packed<'a> {
    List(&'a [DecodedValue]),
    Bytes(&'a [u8]),
}

impl<'a> Packed<'a> {
    fn from_value(v: Option<&'a DecodedValue>) -> Option<Self> {
        match v? {
            DecodedValue::List(l) => Some(Packed::List(l)),
            DecodedValue::Bytes(b) => Some(Packed::Bytes(b)),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match self {
            Packed::List(l) => l.len(),
            Packed::Bytes(b) => b.len() / 4,
        }
    }

    fn float(&self, i: usize) -> Option<f32> {
        match self {
            Packed::List(l) => float_in(l, i),
            Packed::Bytes(b) => b.get(i * 4..i * 4 + 4).map(LittleEndian::read_f32),
        }
    }

    fn int(&self, i: usize) -> Option<i32> {
        match self {
            Packed::List(l) => int_in(l, i),
            Packed::Bytes(b) => b.get(i * 4..i * 4 + 4).map(LittleEndian::read_i32),
        }
    }

    fn point(&self, i: usize) -> Option<Vec3> {
        Some(Vec3::new(self.float(i * 3)?, self.float(i * 3 + 1)?, self.float(i * 3 + 2)?))
    }
}

/// Atoms in either storage form.
enum AtomSource<'a> {
    Binary(AtomDump<'a>),
    List(&'a [DecodedValue]),
}

impl<'a> AtomSource<'a> {
    fn parse(atoms: &'a [DecodedValue]) -> Result<Self> {
        if matches!(atoms.get(1), Some(DecodedValue::Bytes(_))) {
            Ok(AtomSource::Binary(AtomDump::from_value(atoms)?))
        } else {
            Ok(AtomSource::List(atoms))
        }
    }

    fn len(&self) -> usize {
        match self {
            AtomSource::Binary(dump) => dump.len(),
            AtomSource::List(list) => list.len(),
        }
    }

    fn record(&self, i: usize) -> Result<AtomRecord> {
        match self {
            AtomSource::Binary(dump) => dump.atom(i),
            AtomSource::List(list) => {
                let a = list_in(list, i).ok_or_else(|| Error::invalid(format!("atom {i} is not a list")))?;
                decode_atom_list(a)
            }
        }
    }
}

/// Label placement of source atom `apt`, in either storage form.
fn label_position(labels: Option<&DecodedValue>, apt: usize) -> Option<LabelOffset> {
    let mut out = [0f32; 7];
    match labels? {
        DecodedValue::List(l) => {
            let pos = list_in(l, apt)?;
            for (i, v) in out.iter_mut().enumerate() {
                *v = float_in(pos, i).unwrap_or(0.0);
            }
        }
        DecodedValue::Bytes(b) => {
            let packed = Packed::Bytes(b);
            for (i, v) in out.iter_mut().enumerate() {
                *v = packed.float(apt * 7 + i)?;
            }
        }
        _ => return None,
    }
    Some(out)
}

// ============================================================================
// Extraction
// ============================================================================

/// Number of states of a molecule object.
pub fn state_count(object: &[DecodedValue]) -> usize {
    list_in(object, 4).map_or(0, <[DecodedValue]>::len)
}

/// Where a molecule state lands in the session's global numbering.
#[derive(Debug, Clone)]
pub struct Placement {
    pub name: String,
    /// 0-based source state
    pub state: usize,
    pub model_index: usize,
    pub first_atom: usize,
    pub first_bond: usize,
    pub hidden: bool,
}

/// A placed molecule and the map from source atom index to global index.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub molecule: Molecule,
    pub atom_map: Vec<Option<usize>>,
}

/// Place one state of a molecule object.
///
/// Returns `Ok(None)` when the state holds no atoms.
pub fn extract_molecule(object: &[DecodedValue], at: &Placement, store: &SettingsStore) -> Result<Option<Extracted>> {
    let source = AtomSource::parse(list_in(object, 7).ok_or_else(|| Error::missing("molecule atoms"))?)?;
    // the stored count is only trusted as far as the atoms actually present
    let n_atoms = usize::try_from(int_in(object, 3).unwrap_or(0)).unwrap_or(0).min(source.len());
    if n_atoms == 0 {
        return Ok(None);
    }
    let states = list_in(object, 4).ok_or_else(|| Error::missing("molecule states"))?;
    let state = list_in(states, at.state).ok_or_else(|| Error::missing(format!("state {}", at.state + 1)))?;

    let coords = Packed::from_value(state.get(2)).ok_or_else(|| Error::missing("state coordinates"))?;
    let idx_to_atom = Packed::from_value(state.get(3)).filter(|p| p.len() > 0);
    if at.state > 0 && idx_to_atom.is_none() {
        return Ok(None);
    }
    let n = idx_to_atom.map_or(n_atoms, |p| p.len());

    let header = list_in(object, 0);
    let settings = settings_from_list(header.and_then(|h| list_in(h, 8)));
    let state_settings = settings_from_list(list_in(state, 7));
    let bound = store.bind(Some(&settings), Some(&state_settings));

    let mut atom_map = vec![None; n_atoms];
    let mut atoms = Vec::with_capacity(n);
    let mut reps = RepSets::new();
    let mut ss_residues: HashMap<(char, String), HashSet<i32>> = HashMap::new();

    for idx in 0..n {
        let apt = match idx_to_atom {
            Some(map) => map.int(idx).unwrap_or(-1),
            None => idx as i32,
        };
        let Some(apt) = usize::try_from(apt).ok().filter(|&a| a < n_atoms) else {
            tracing::warn!("{}: state {} index {idx} points at no atom", at.name, at.state + 1);
            continue;
        };
        let record = source.record(apt)?;
        let coord = coords
            .point(idx)
            .ok_or_else(|| Error::invalid(format!("no coordinates for atom {idx} of {}", at.name)))?;
        let mut atom = Atom::new(record, coord, apt);
        atom.flags.set(AtomFlags::HIDDEN, at.hidden);
        if atom.has(AtomFlags::LABELED) {
            atom.label_offset = label_position(state.get(8), apt);
        }

        let rec = &atom.record;
        if rec.resv >= MIN_RESV && (rec.ss_type != ' ' || rec.name == "CA" || atom.has(AtomFlags::NUCLEIC)) {
            ss_residues.entry((rec.ss_type, rec.chain.clone())).or_default().insert(rec.resv);
        }

        let global = at.first_atom + atoms.len();
        reps.set_mask(global, rec.reps);
        atom_map[apt] = Some(global);
        atoms.push(atom);
    }
    if atoms.is_empty() {
        return Ok(None);
    }

    let as_single = !bound.boolean(keys::VALENCE);
    let bond_list = list_in(object, 6).unwrap_or_default();
    let mut bonds = Vec::with_capacity(bond_list.len());
    for b in decode_bonds(bond_list)? {
        let map = |i: i32| usize::try_from(i).ok().and_then(|i| atom_map.get(i).copied().flatten());
        let (Some(atom1), Some(atom2)) = (map(b.atom1), map(b.atom2)) else {
            continue;
        };
        bonds.push(Bond {
            atom1,
            atom2,
            order: b.order,
            valence: if as_single || b.order == 1 { Valence::Single } else { Valence::Multiple },
            unique_id: b.unique_id,
            style: None,
        });
    }

    let (secondary, ss_atoms) = secondary_structure(&atoms, at.first_atom, &ss_residues);
    let crystal = if at.state == 0 { list_in(object, 10).and_then(crystal_info) } else { None };

    tracing::debug!(
        "{} state {}: {} atoms, {} bonds, {} structures",
        at.name,
        at.state + 1,
        atoms.len(),
        bonds.len(),
        secondary.len()
    );
    Ok(Some(Extracted {
        molecule: Molecule {
            name: at.name.clone(),
            model_index: at.model_index,
            state: at.state,
            first_atom: at.first_atom,
            atoms,
            first_bond: at.first_bond,
            bonds,
            secondary,
            ss_atoms,
            crystal,
            reps,
            settings,
            state_settings,
            hidden: at.hidden,
        },
        atom_map,
    }))
}

/// Runs of consecutive atoms, within one chain, whose residue belongs to a
/// secondary-structure class.
///
/// Classes are visited helix, sheet, turn, loop; a helix, sheet or turn run
/// overlapping one already defined is dropped. Loop runs only feed the atom
/// sets.
fn secondary_structure(
    atoms: &[Atom],
    first: usize,
    residues: &HashMap<(char, String), HashSet<i32>>,
) -> (Vec<SecondaryStructure>, [BitSet; 4]) {
    let mut out = Vec::new();
    let mut sets: [BitSet; 4] = Default::default();
    let mut defined = BitSet::new();

    for kind in SsKind::ALL {
        let code = kind.code();
        if !residues.keys().any(|(c, _)| *c == code) {
            continue;
        }
        let mut run: Option<(usize, usize)> = None;
        let mut close = |run: &mut Option<(usize, usize)>| {
            let Some((s, e)) = run.take() else { return };
            if kind != SsKind::Loop {
                if (s..=e).any(|i| defined.get(i)) {
                    return;
                }
                defined.set_range(s, e + 1);
                let (a, b) = (&atoms[s].record, &atoms[e].record);
                out.push(SecondaryStructure {
                    kind,
                    chain: a.chain.clone(),
                    start_resv: a.resv,
                    start_ins: a.ins_code,
                    end_resv: b.resv,
                    end_ins: b.ins_code,
                    start: first + s,
                    end: first + e,
                });
            }
            sets[kind.index()].set_range(first + s, first + e + 1);
        };

        let mut chain: Option<&str> = None;
        for (i, atom) in atoms.iter().enumerate() {
            let rec = &atom.record;
            if chain != Some(rec.chain.as_str()) {
                close(&mut run);
                chain = Some(rec.chain.as_str());
            }
            let member = rec.resv >= MIN_RESV
                && residues
                    .get(&(code, rec.chain.clone()))
                    .is_some_and(|set| set.contains(&rec.resv));
            if member {
                run = Some(run.map_or((i, i), |(s, _)| (s, i)));
            } else {
                close(&mut run);
            }
        }
        close(&mut run);
    }
    (out, sets)
}

/// `[[[a, b, c], [alpha, beta, gamma]], space_group]`
fn crystal_info(cryst: &[DecodedValue]) -> Option<CrystalInfo> {
    let cell = list_in(cryst, 0)?;
    Some(CrystalInfo {
        lengths: point_in(list_in(cell, 0)?, 0)?,
        angles: point_in(list_in(cell, 1)?, 0)?,
        space_group: str_in(cryst, 1).map(|s| s.into_owned()).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Rep;

    fn s(v: &str) -> DecodedValue {
        DecodedValue::Bytes(v.as_bytes().to_vec())
    }

    fn floats(v: &[f32]) -> DecodedValue {
        DecodedValue::List(v.iter().map(|&f| DecodedValue::Float(f as f64)).collect())
    }

    fn ints(v: &[i64]) -> DecodedValue {
        DecodedValue::List(v.iter().map(|&i| DecodedValue::Int(i)).collect())
    }

    fn atom(resv: i64, chain: &str, name: &str, elem: &str, ss: &str, reps: i64) -> DecodedValue {
        let mut a = vec![DecodedValue::Int(0); 41];
        a[0] = DecodedValue::Int(resv);
        a[1] = s(chain);
        a[2] = s("");
        a[3] = s(&resv.to_string());
        a[4] = s("");
        a[5] = s("ALA");
        a[6] = s(name);
        a[7] = s(elem);
        a[9] = s(" ");
        a[10] = s(ss);
        a[16] = DecodedValue::Float(1.7);
        a[20] = DecodedValue::Int(reps);
        a[25] = DecodedValue::Int(1);
        DecodedValue::List(a)
    }

    fn object(atoms: Vec<DecodedValue>, bonds: Vec<DecodedValue>, idx: Option<&[i64]>) -> Vec<DecodedValue> {
        let n = atoms.len();
        let coords: Vec<f32> = (0..n * 3).map(|i| i as f32).collect();
        let mut state = vec![DecodedValue::Null; 9];
        state[2] = floats(&coords);
        if let Some(idx) = idx {
            state[3] = ints(idx);
        }
        let mut obj = vec![DecodedValue::Null; 11];
        obj[0] = DecodedValue::List(vec![DecodedValue::Null; 9]);
        obj[2] = DecodedValue::Int(bonds.len() as i64);
        obj[3] = DecodedValue::Int(n as i64);
        obj[4] = DecodedValue::List(vec![DecodedValue::List(state)]);
        obj[6] = DecodedValue::List(bonds);
        obj[7] = DecodedValue::List(atoms);
        obj
    }

    fn place(first_atom: usize) -> Placement {
        Placement { name: "prot".into(), state: 0, model_index: 0, first_atom, first_bond: 3, hidden: false }
    }

    #[test]
    fn test_extract_list_form() {
        let sticks = 1 << Rep::Sticks.index();
        let obj = object(
            vec![atom(1, "A", "N", "N", " ", sticks), atom(1, "A", "CA", "C", " ", sticks), atom(1, "A", "H", "H", " ", 0)],
            vec![ints(&[0, 1, 2, 0]), ints(&[1, 2, 1, 0])],
            None,
        );
        let store = SettingsStore::new(181);
        let ex = extract_molecule(&obj, &place(10), &store).unwrap().unwrap();
        let mol = ex.molecule;
        assert_eq!(mol.atoms.len(), 3);
        assert_eq!(ex.atom_map, vec![Some(10), Some(11), Some(12)]);
        assert_eq!(mol.atoms[1].coord, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(mol.bonds.len(), 2);
        assert_eq!((mol.bonds[0].atom1, mol.bonds[0].atom2), (10, 11));
        // valence is off by default
        assert_eq!(mol.bonds[0].valence, Valence::Single);
        assert_eq!(mol.reps.get(Rep::Sticks), &BitSet::from_range(10, 12));
        assert!(mol.atoms[2].has(AtomFlags::HYDROGEN));
    }

    #[test]
    fn test_atom_count_capped_by_atoms_present() {
        let mut obj = object(vec![atom(1, "A", "N", "N", " ", 0), atom(1, "A", "CA", "C", " ", 0)], Vec::new(), None);
        obj[3] = DecodedValue::Int(i64::from(i32::MAX));
        let store = SettingsStore::new(181);
        let ex = extract_molecule(&obj, &place(0), &store).unwrap().unwrap();
        assert_eq!(ex.atom_map.len(), 2);
        assert_eq!(ex.molecule.atoms.len(), 2);
    }

    #[test]
    fn test_bonds_to_missing_atoms_dropped() {
        let obj = object(
            vec![atom(1, "A", "N", "N", " ", 0), atom(1, "A", "CA", "C", " ", 0), atom(2, "A", "C", "C", " ", 0)],
            vec![ints(&[0, 1, 1, 0]), ints(&[1, 2, 1, 0])],
            Some(&[0, 1]),
        );
        let store = SettingsStore::new(181);
        let ex = extract_molecule(&obj, &place(0), &store).unwrap().unwrap();
        assert_eq!(ex.atom_map, vec![Some(0), Some(1), None]);
        assert_eq!(ex.molecule.bonds.len(), 1);
    }

    #[test]
    fn test_secondary_structure_runs() {
        let obj = object(
            vec![
                atom(1, "A", "CA", "C", "H", 0),
                atom(2, "A", "CA", "C", "H", 0),
                atom(3, "A", "CA", "C", " ", 0),
                atom(4, "A", "CA", "C", "S", 0),
                atom(5, "B", "CA", "C", "S", 0),
            ],
            vec![],
            None,
        );
        let store = SettingsStore::new(181);
        let mol = extract_molecule(&obj, &place(0), &store).unwrap().unwrap().molecule;
        let kinds: Vec<_> = mol.secondary.iter().map(|s| (s.kind, s.start, s.end)).collect();
        assert_eq!(kinds, vec![(SsKind::Helix, 0, 1), (SsKind::Sheet, 3, 3), (SsKind::Sheet, 4, 4)]);
        assert_eq!(mol.ss_atoms[SsKind::Loop.index()], BitSet::from_range(2, 3));
        assert_eq!(mol.ss_atoms[SsKind::Helix.index()], BitSet::from_range(0, 2));
    }

    #[test]
    fn test_binary_state_arrays() {
        let mut obj = object(vec![atom(1, "A", "CA", "C", " ", 0)], vec![], None);
        let coords: Vec<u8> = [1.0f32, 2.0, 3.0].iter().flat_map(|f| f.to_le_bytes()).collect();
        let idx: Vec<u8> = 0i32.to_le_bytes().to_vec();
        let mut state = vec![DecodedValue::Null; 9];
        state[2] = DecodedValue::Bytes(coords);
        state[3] = DecodedValue::Bytes(idx);
        obj[4] = DecodedValue::List(vec![DecodedValue::List(state)]);
        let store = SettingsStore::new(181);
        let mol = extract_molecule(&obj, &place(0), &store).unwrap().unwrap().molecule;
        assert_eq!(mol.atoms[0].coord, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_later_state_skipped() {
        let mut obj = object(vec![atom(1, "A", "CA", "C", " ", 0)], vec![], None);
        let mut second = vec![DecodedValue::Null; 9];
        second[2] = floats(&[0.0, 0.0, 0.0]);
        if let Some(states) = obj[4].as_list_mut() {
            states.push(DecodedValue::List(second));
        }
        assert_eq!(state_count(&obj), 2);
        let store = SettingsStore::new(181);
        let at = Placement { state: 1, ..place(0) };
        assert!(extract_molecule(&obj, &at, &store).unwrap().is_none());
    }

    #[test]
    fn test_crystal() {
        let cryst = vec![
            DecodedValue::List(vec![floats(&[10.0, 20.0, 30.0]), floats(&[90.0, 90.0, 120.0])]),
            s("P 61"),
        ];
        let info = crystal_info(&cryst).unwrap();
        assert_eq!(info.lengths, Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(info.space_group, "P 61");
    }
}
