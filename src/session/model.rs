//! Decoded domain model.
//!
//! Atoms and bonds are numbered globally across the session: a molecule's
//! atoms occupy `first_atom..first_atom + atoms.len()` and its bonds
//! `first_bond..first_bond + bonds.len()`. Every selection in the scene
//! queue uses these global indices.

use bitflags::bitflags;
use glam::Vec3;

use crate::record::AtomRecord;
use crate::scene::{LabelOffset, RepSets};
use crate::settings::SettingMap;
use crate::util::BitSet;

bitflags! {
    /// Per-atom membership flags derived while placing an atom.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AtomFlags: u16 {
        const HETERO     = 1 << 0;
        const BONDED     = 1 << 1;
        const NUCLEIC    = 1 << 2;
        const HIDDEN     = 1 << 3;
        const HYDROGEN   = 1 << 4;
        const NO_SURFACE = 1 << 5;
        const NON_BONDED = 1 << 6;
        const LABELED    = 1 << 7;
    }
}

/// Session atom flag bits meaning "exclude from surface".
pub const FLAG_NO_SURFACE: u32 = 0x0300_0000;

/// Residue names treated as nucleic acid.
const NUCLEIC: [&str; 15] = [
    "A", "C", "G", "T", "U", "ADE", "THY", "CYT", "GUA", "URI", "DA", "DC", "DG", "DT", "DU",
];

pub fn is_nucleic(resn: &str) -> bool {
    NUCLEIC.contains(&resn)
}

/// An atom placed in a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub record: AtomRecord,
    pub coord: Vec3,
    pub flags: AtomFlags,
    /// Label placement from the state, when the state stores one
    pub label_offset: Option<LabelOffset>,
    /// Index of the record in the object's atom list
    pub source_index: usize,
}

impl Atom {
    pub fn new(record: AtomRecord, coord: Vec3, source_index: usize) -> Self {
        let mut flags = AtomFlags::empty();
        flags.set(AtomFlags::HETERO, record.hetatm);
        flags.set(AtomFlags::BONDED, record.bonded);
        flags.set(AtomFlags::NON_BONDED, !record.bonded);
        flags.set(AtomFlags::NUCLEIC, is_nucleic(&record.resn));
        flags.set(AtomFlags::HYDROGEN, record.is_hydrogen());
        flags.set(AtomFlags::LABELED, record.is_labeled());
        flags.set(AtomFlags::NO_SURFACE, record.flags & FLAG_NO_SURFACE != 0);
        Self { record, coord, flags, label_offset: None, source_index }
    }

    #[inline]
    pub fn has(&self, flag: AtomFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn unique_id(&self) -> Option<i32> {
        self.record.unique_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence {
    /// Multiple bonds drawn as one stick
    Single,
    /// Multiple bonds drawn as parallel sticks
    Multiple,
}

/// Per-bond overrides resolved from unique settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BondStyle {
    pub radius: Option<f32>,
    pub argb: Option<u32>,
    pub translucency: Option<f32>,
    pub valence: Option<Valence>,
}

/// A bond between two global atom indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    /// 1, 2 or 3
    pub order: u8,
    pub valence: Valence,
    pub unique_id: Option<i32>,
    pub style: Option<BondStyle>,
}

/// Secondary-structure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SsKind {
    Helix,
    Sheet,
    Turn,
    /// Loop or unassigned backbone
    Loop,
}

impl SsKind {
    pub const ALL: [SsKind; 4] = [SsKind::Helix, SsKind::Sheet, SsKind::Turn, SsKind::Loop];

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(SsKind::Helix),
            'S' => Some(SsKind::Sheet),
            'L' => Some(SsKind::Turn),
            ' ' => Some(SsKind::Loop),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            SsKind::Helix => 'H',
            SsKind::Sheet => 'S',
            SsKind::Turn => 'L',
            SsKind::Loop => ' ',
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A contiguous run of residues with one secondary-structure class.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryStructure {
    pub kind: SsKind,
    pub chain: String,
    pub start_resv: i32,
    pub start_ins: char,
    pub end_resv: i32,
    pub end_ins: char,
    /// Global atom range, inclusive
    pub start: usize,
    pub end: usize,
}

/// Unit cell carried through without symmetry math.
#[derive(Debug, Clone, PartialEq)]
pub struct CrystalInfo {
    pub lengths: Vec3,
    pub angles: Vec3,
    pub space_group: String,
}

/// One molecule state placed as a model.
#[derive(Debug, Clone)]
pub struct Molecule {
    pub name: String,
    pub model_index: usize,
    /// 0-based state of the source object
    pub state: usize,
    pub first_atom: usize,
    pub atoms: Vec<Atom>,
    pub first_bond: usize,
    pub bonds: Vec<Bond>,
    pub secondary: Vec<SecondaryStructure>,
    /// Atoms of residues in each [`SsKind`], indexed by `SsKind::index`
    pub ss_atoms: [BitSet; 4],
    pub crystal: Option<CrystalInfo>,
    pub reps: RepSets,
    pub settings: SettingMap,
    pub state_settings: SettingMap,
    pub hidden: bool,
}

impl Molecule {
    /// Global atom indices of this molecule.
    pub fn atom_set(&self) -> BitSet {
        BitSet::from_range(self.first_atom, self.first_atom + self.atoms.len())
    }

    pub fn atom(&self, global: usize) -> Option<&Atom> {
        global.checked_sub(self.first_atom).and_then(|i| self.atoms.get(i))
    }

    /// Global indices of atoms with `flag`.
    pub fn atoms_with(&self, flag: AtomFlags) -> BitSet {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| a.has(flag))
            .map(|(i, _)| self.first_atom + i)
            .collect()
    }

    /// Global bond indices whose two atoms are both in `atoms`.
    pub fn bonds_within(&self, atoms: &BitSet) -> BitSet {
        self.bonds
            .iter()
            .enumerate()
            .filter(|(_, b)| atoms.get(b.atom1) && atoms.get(b.atom2))
            .map(|(i, _)| self.first_bond + i)
            .collect()
    }

    pub fn bond(&self, global: usize) -> Option<&Bond> {
        global.checked_sub(self.first_bond).and_then(|i| self.bonds.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_flags() {
        let rec = AtomRecord {
            elem: "H".into(),
            resn: "DA".into(),
            label: "x".into(),
            flags: 0x0100_0000,
            ..Default::default()
        };
        let a = Atom::new(rec, Vec3::ZERO, 0);
        assert!(a.has(AtomFlags::HYDROGEN | AtomFlags::NUCLEIC | AtomFlags::LABELED));
        assert!(a.has(AtomFlags::NO_SURFACE));
        assert!(a.has(AtomFlags::NON_BONDED));
        assert!(!a.has(AtomFlags::BONDED));
    }

    #[test]
    fn test_ss_codes() {
        for kind in SsKind::ALL {
            assert_eq!(SsKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(SsKind::from_code('X'), None);
    }
}
