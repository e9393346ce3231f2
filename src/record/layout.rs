//! Fixed-size atom and bond record layouts.
//!
//! Each supported dump version stores an atom as a packed C struct. A layout
//! maps every logical field to where it lives in that struct:
//!
//! - [`FieldLoc::Direct`]: little-endian value at a byte offset
//! - [`FieldLoc::Lexicon`]: i32 index at the offset into the session lexicon
//! - [`FieldLoc::Flag`]: bit of a shared flag byte
//! - [`FieldLoc::Absent`]: field not present in this version
//!
//! Layouts are built at compile time as dense arrays indexed by [`AtomField`].

use crate::util::{Error, Result};

/// Logical atom fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AtomField {
    Resv,
    CustomType,
    Priority,
    BFactor,
    Occupancy,
    Vdw,
    PartialCharge,
    Color,
    Id,
    Flags,
    UniqueId,
    DiscreteState,
    ElecRadius,
    Rank,
    TextType,
    Custom,
    Label,
    VisRep,
    FormalCharge,
    MmStereo,
    Cartoon,
    Hetatm,
    Bonded,
    ChemFlag,
    Geom,
    Valence,
    Masked,
    Protekted,
    Protons,
    HbDonor,
    HbAcceptor,
    HasSetting,
    Chain,
    Segi,
    Name,
    Elem,
    Resi,
    SsType,
    AltLoc,
    Resn,
    InsCode,
    Anisou,
}

impl AtomField {
    pub const COUNT: usize = AtomField::Anisou as usize + 1;
}

/// Where a field lives inside one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldLoc {
    #[default]
    Absent,
    Direct(u16),
    Lexicon(u16),
    Flag { offset: u16, mask: u8 },
}

/// Storage of the six anisotropic displacement terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnisouEncoding {
    None,
    F32,
    I16,
}

/// Dense atom layout for one dump version.
#[derive(Debug, Clone)]
pub struct AtomLayout {
    pub version: i32,
    pub record_len: usize,
    pub anisou: AnisouEncoding,
    /// Formal charges above this raw value wrap around
    pub charge_wrap_threshold: i32,
    pub charge_wrap: i32,
    fields: [FieldLoc; AtomField::COUNT],
}

impl AtomLayout {
    #[inline]
    pub fn loc(&self, field: AtomField) -> FieldLoc {
        self.fields[field as usize]
    }

    pub fn has(&self, field: AtomField) -> bool {
        self.loc(field) != FieldLoc::Absent
    }

    /// Raw formal-charge byte to its signed value.
    pub fn fix_formal_charge(&self, raw: u8) -> i32 {
        let v = raw as i8 as i32;
        if v > self.charge_wrap_threshold {
            v - self.charge_wrap
        } else {
            v
        }
    }
}

const fn atom_layout(
    version: i32,
    record_len: usize,
    anisou: AnisouEncoding,
    entries: &[(AtomField, FieldLoc)],
) -> AtomLayout {
    let mut fields = [FieldLoc::Absent; AtomField::COUNT];
    let mut i = 0;
    while i < entries.len() {
        fields[entries[i].0 as usize] = entries[i].1;
        i += 1;
    }
    AtomLayout {
        version,
        record_len,
        anisou,
        charge_wrap_threshold: 125,
        charge_wrap: 512,
        fields,
    }
}

use AtomField as F;
use FieldLoc::{Direct as D, Lexicon as X};

const fn flag(offset: u16, mask: u8) -> FieldLoc {
    FieldLoc::Flag { offset, mask }
}

// ============================================================================
// Atom layouts
// ============================================================================

/// AtomInfoType 1.7.6: inline strings, one byte per boolean.
pub static ATOM_V176: AtomLayout = atom_layout(176, 164, AnisouEncoding::F32, &[
    (F::Resv, D(0)),
    (F::CustomType, D(4)),
    (F::Priority, D(8)),
    (F::BFactor, D(12)),
    (F::Occupancy, D(16)),
    (F::Vdw, D(20)),
    (F::PartialCharge, D(24)),
    (F::Color, D(32)),
    (F::Id, D(36)),
    (F::Flags, D(40)),
    (F::UniqueId, D(48)),
    (F::DiscreteState, D(52)),
    (F::ElecRadius, D(56)),
    (F::Rank, D(60)),
    (F::TextType, X(64)),
    (F::Custom, X(68)),
    (F::Label, X(72)),
    (F::VisRep, D(76)),
    (F::FormalCharge, D(80)),
    (F::MmStereo, D(82)),
    (F::Cartoon, D(83)),
    (F::Hetatm, flag(84, 0x01)),
    (F::Bonded, flag(85, 0x01)),
    (F::ChemFlag, D(86)),
    (F::Geom, D(87)),
    (F::Valence, D(88)),
    (F::Masked, flag(90, 0x01)),
    (F::Protekted, D(91)),
    (F::Protons, D(92)),
    (F::HbDonor, flag(93, 0x01)),
    (F::HbAcceptor, flag(94, 0x01)),
    (F::HasSetting, flag(95, 0x01)),
    (F::Chain, D(96)),
    (F::Segi, D(100)),
    (F::Name, D(105)),
    (F::Elem, D(110)),
    (F::Resi, D(115)),
    (F::SsType, D(122)),
    (F::AltLoc, D(124)),
    (F::Resn, D(126)),
    (F::Anisou, D(132)),
]);

/// AtomInfoType 1.7.7: booleans packed into two bytes.
pub static ATOM_V177: AtomLayout = atom_layout(177, 144, AnisouEncoding::None, &[
    (F::Resv, D(8)),
    (F::CustomType, D(12)),
    (F::Priority, D(16)),
    (F::BFactor, D(20)),
    (F::Occupancy, D(24)),
    (F::Vdw, D(28)),
    (F::PartialCharge, D(32)),
    (F::Color, D(40)),
    (F::Id, D(44)),
    (F::Flags, D(48)),
    (F::UniqueId, D(56)),
    (F::DiscreteState, D(60)),
    (F::ElecRadius, D(64)),
    (F::Rank, D(68)),
    (F::TextType, X(72)),
    (F::Custom, X(76)),
    (F::Label, X(80)),
    (F::VisRep, D(84)),
    (F::Hetatm, flag(96, 0x01)),
    (F::Bonded, flag(96, 0x02)),
    (F::Masked, flag(96, 0x08)),
    (F::HbDonor, flag(97, 0x01)),
    (F::HbAcceptor, flag(97, 0x02)),
    (F::HasSetting, flag(97, 0x04)),
    (F::FormalCharge, D(98)),
    (F::MmStereo, D(99)),
    (F::Cartoon, D(100)),
    (F::Geom, D(101)),
    (F::Valence, D(102)),
    (F::Protons, D(103)),
    (F::Chain, D(104)),
    (F::Segi, D(108)),
    (F::Name, D(113)),
    (F::Elem, D(118)),
    (F::Resi, D(123)),
    (F::SsType, D(129)),
    (F::AltLoc, D(131)),
    (F::Resn, D(133)),
    (F::ChemFlag, D(140)),
    (F::Protekted, D(141)),
]);

/// AtomInfoType 1.8.1: identifiers moved to the lexicon, residue number
/// and insertion code stored separately.
pub static ATOM_V181: AtomLayout = atom_layout(181, 120, AnisouEncoding::I16, &[
    (F::Anisou, D(0)),
    (F::Segi, X(12)),
    (F::Chain, X(16)),
    (F::Resn, X(20)),
    (F::Name, X(24)),
    (F::TextType, X(28)),
    (F::Custom, X(32)),
    (F::Label, X(36)),
    (F::Resv, D(40)),
    (F::CustomType, D(44)),
    (F::Priority, D(48)),
    (F::BFactor, D(52)),
    (F::Occupancy, D(56)),
    (F::Vdw, D(60)),
    (F::PartialCharge, D(64)),
    (F::Color, D(68)),
    (F::Id, D(72)),
    (F::Flags, D(76)),
    (F::UniqueId, D(80)),
    (F::DiscreteState, D(84)),
    (F::ElecRadius, D(88)),
    (F::Rank, D(92)),
    (F::VisRep, D(96)),
    (F::Hetatm, flag(100, 0x01)),
    (F::Bonded, flag(100, 0x02)),
    (F::Masked, flag(100, 0x04)),
    (F::HbDonor, flag(100, 0x08)),
    (F::HbAcceptor, flag(100, 0x10)),
    (F::HasSetting, flag(100, 0x20)),
    (F::FormalCharge, D(101)),
    (F::Cartoon, D(102)),
    (F::Geom, D(103)),
    (F::Valence, D(104)),
    (F::Protons, D(105)),
    (F::InsCode, D(106)),
    (F::Elem, D(107)),
    (F::SsType, D(112)),
    (F::AltLoc, D(114)),
    (F::MmStereo, D(116)),
    (F::ChemFlag, D(117)),
    (F::Protekted, D(118)),
]);

/// Atom layout for a dump version.
pub fn atom_layout_for(version: i32) -> Result<&'static AtomLayout> {
    match version {
        176 => Ok(&ATOM_V176),
        177 => Ok(&ATOM_V177),
        181 => Ok(&ATOM_V181),
        _ => Err(Error::UnsupportedVersion { what: "atom", version }),
    }
}

// ============================================================================
// Bond layouts
// ============================================================================

/// Bond record layout. The order field width differs between versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondLayout {
    pub version: i32,
    pub record_len: usize,
    pub atom1: usize,
    pub atom2: usize,
    pub order: usize,
    pub id: usize,
    pub unique_id: usize,
    pub has_setting: usize,
}

/// BondType 1.7.6
pub static BOND_V176: BondLayout = BondLayout {
    version: 176,
    record_len: 32,
    atom1: 0,
    atom2: 4,
    order: 8,
    id: 12,
    unique_id: 16,
    has_setting: 26,
};

/// BondType 1.7.7
pub static BOND_V177: BondLayout = BondLayout {
    version: 177,
    record_len: 24,
    atom1: 0,
    atom2: 4,
    id: 8,
    unique_id: 12,
    order: 20,
    has_setting: 23,
};

/// BondType 1.8.1
pub static BOND_V181: BondLayout = BondLayout {
    version: 181,
    record_len: 20,
    atom1: 0,
    atom2: 4,
    id: 8,
    unique_id: 12,
    order: 16,
    has_setting: 18,
};

pub fn bond_layout_for(version: i32) -> Result<&'static BondLayout> {
    match version {
        176 => Ok(&BOND_V176),
        177 => Ok(&BOND_V177),
        181 => Ok(&BOND_V181),
        _ => Err(Error::UnsupportedVersion { what: "bond", version }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_versions_rejected() {
        assert!(matches!(
            atom_layout_for(190),
            Err(Error::UnsupportedVersion { what: "atom", version: 190 })
        ));
        assert!(bond_layout_for(175).is_err());
        assert_eq!(atom_layout_for(181).map(|l| l.record_len).ok(), Some(120));
    }

    #[test]
    fn test_fields_fit_in_record() {
        for layout in [&ATOM_V176, &ATOM_V177, &ATOM_V181] {
            for i in 0..AtomField::COUNT {
                let end = match layout.fields[i] {
                    FieldLoc::Absent => continue,
                    FieldLoc::Direct(o) | FieldLoc::Lexicon(o) => o as usize + 1,
                    FieldLoc::Flag { offset, .. } => offset as usize + 1,
                };
                assert!(end <= layout.record_len, "v{} field {i}", layout.version);
            }
        }
        for b in [&BOND_V176, &BOND_V177, &BOND_V181] {
            assert!(b.atom2 + 4 <= b.record_len);
            assert!(b.has_setting < b.record_len);
        }
    }

    #[test]
    fn test_packed_flags_share_a_byte() {
        assert_eq!(ATOM_V181.loc(AtomField::Hetatm), flag(100, 0x01));
        assert_eq!(ATOM_V181.loc(AtomField::HasSetting), flag(100, 0x20));
        assert_eq!(ATOM_V177.loc(AtomField::Bonded), flag(96, 0x02));
        assert!(!ATOM_V181.has(AtomField::Resi));
        assert!(ATOM_V181.has(AtomField::InsCode));
    }

    #[test]
    fn test_formal_charge_wrap() {
        assert_eq!(ATOM_V177.fix_formal_charge(254), -2);
        assert_eq!(ATOM_V177.fix_formal_charge(2), 2);
        assert_eq!(ATOM_V181.fix_formal_charge(0), 0);
    }
}
