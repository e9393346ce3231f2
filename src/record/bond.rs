//! Bond record decoding.

use byteorder::{ByteOrder, LittleEndian};

use super::{BondLayout, bond_layout_for};
use crate::pickle::{DecodedValue, int_in, list_in};
use crate::util::{Error, Result};

/// One bond between two atoms of the same molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondRecord {
    /// Atom indices within the owning molecule
    pub atom1: i32,
    pub atom2: i32,
    /// 1, 2 or 3
    pub order: u8,
    pub id: i32,
    pub unique_id: Option<i32>,
}

fn clamp_order(order: i32) -> u8 {
    if (1..=3).contains(&order) { order as u8 } else { 1 }
}

fn read_i32(rec: &[u8], at: usize) -> i32 {
    rec.get(at..at + 4).map_or(0, LittleEndian::read_i32)
}

/// Decode bond `index` of a packed bond dump.
pub fn decode_bond(layout: &BondLayout, data: &[u8], index: usize) -> Result<BondRecord> {
    let start = index * layout.record_len;
    let rec = data
        .get(start..start + layout.record_len)
        .ok_or_else(|| Error::invalid(format!("bond {index} beyond v{} dump", layout.version)))?;
    let has_setting = rec.get(layout.has_setting).is_some_and(|&b| b != 0);
    let order = rec.get(layout.order).map_or(1, |&b| b as i8 as i32);
    Ok(BondRecord {
        atom1: read_i32(rec, layout.atom1),
        atom2: read_i32(rec, layout.atom2),
        order: clamp_order(order),
        id: read_i32(rec, layout.id),
        unique_id: has_setting.then(|| read_i32(rec, layout.unique_id)),
    })
}

/// Decode `[a1, a2, order, id, stereo, unique_id, has_setting]`.
pub fn decode_bond_list(b: &[DecodedValue]) -> Result<BondRecord> {
    let atom1 = int_in(b, 0).ok_or_else(|| Error::missing("bond atom 1"))?;
    let atom2 = int_in(b, 1).ok_or_else(|| Error::missing("bond atom 2"))?;
    let has_setting = b.len() > 6 && int_in(b, 6).unwrap_or(0) != 0;
    Ok(BondRecord {
        atom1,
        atom2,
        order: clamp_order(int_in(b, 2).unwrap_or(1)),
        id: int_in(b, 3).unwrap_or(0),
        unique_id: has_setting.then(|| int_in(b, 5)).flatten(),
    })
}

/// Decode a molecule's bond field in either form.
///
/// The binary form is a two-element list `[version, bytes]`; anything else is
/// a list of per-bond lists.
pub fn decode_bonds(bonds: &[DecodedValue]) -> Result<Vec<BondRecord>> {
    if let (2, Some(version), Some(data)) = (
        bonds.len(),
        int_in(bonds, 0),
        bonds.get(1).and_then(DecodedValue::as_bytes),
    ) {
        let layout = bond_layout_for(version)?;
        let n = data.len() / layout.record_len;
        tracing::debug!("bond dump version {version}, {n} records");
        return (0..n).map(|i| decode_bond(layout, data, i)).collect();
    }
    (0..bonds.len())
        .map(|i| {
            let b = list_in(bonds, i).ok_or_else(|| Error::invalid(format!("bond {i} is not a list")))?;
            decode_bond_list(b)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{BOND_V176, BOND_V177, BOND_V181};

    fn record(layout: &BondLayout, a1: i32, a2: i32, order: u8, uid: Option<i32>) -> Vec<u8> {
        let mut rec = vec![0u8; layout.record_len];
        LittleEndian::write_i32(&mut rec[layout.atom1..], a1);
        LittleEndian::write_i32(&mut rec[layout.atom2..], a2);
        rec[layout.order] = order;
        if let Some(u) = uid {
            LittleEndian::write_i32(&mut rec[layout.unique_id..], u);
            rec[layout.has_setting] = 1;
        }
        rec
    }

    #[test]
    fn test_binary_bonds_all_versions() {
        for layout in [&BOND_V176, &BOND_V177, &BOND_V181] {
            let mut data = record(layout, 0, 1, 2, None);
            data.extend(record(layout, 1, 2, 1, Some(44)));
            let b0 = decode_bond(layout, &data, 0).unwrap();
            let b1 = decode_bond(layout, &data, 1).unwrap();
            assert_eq!((b0.atom1, b0.atom2, b0.order, b0.unique_id), (0, 1, 2, None));
            assert_eq!((b1.atom1, b1.atom2, b1.order, b1.unique_id), (1, 2, 1, Some(44)));
            assert!(decode_bond(layout, &data, 2).is_err());
        }
    }

    #[test]
    fn test_order_out_of_range_becomes_single() {
        let data = record(&BOND_V181, 3, 4, 4, None);
        assert_eq!(decode_bond(&BOND_V181, &data, 0).unwrap().order, 1);
        let data = record(&BOND_V181, 3, 4, 0, None);
        assert_eq!(decode_bond(&BOND_V181, &data, 0).unwrap().order, 1);
    }

    #[test]
    fn test_decode_bonds_dispatch() {
        let data = record(&BOND_V177, 0, 1, 3, None);
        let dump = vec![DecodedValue::Int(177), DecodedValue::Bytes(data)];
        let bonds = decode_bonds(&dump).unwrap();
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].order, 3);

        let list = |v: &[i64]| DecodedValue::List(v.iter().map(|&i| DecodedValue::Int(i)).collect());
        let bonds = decode_bonds(&[list(&[0, 1, 2, 5, 0, 17, 1]), list(&[1, 2, 9])]).unwrap();
        assert_eq!(bonds[0].unique_id, Some(17));
        assert_eq!(bonds[0].order, 2);
        assert_eq!(bonds[1].order, 1);
        assert_eq!(bonds[1].unique_id, None);

        let dump = vec![DecodedValue::Int(150), DecodedValue::Bytes(vec![0; 20])];
        assert!(matches!(decode_bonds(&dump), Err(Error::UnsupportedVersion { what: "bond", .. })));
    }
}
