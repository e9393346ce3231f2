//! Atom record decoding.
//!
//! Atoms arrive either as packed binary records (see [`AtomLayout`]) or, in
//! sessions saved without binary dumps, as one list of fields per atom. Both
//! forms produce the same [`AtomRecord`] with the usual fixups applied.

use byteorder::{ByteOrder, LittleEndian};

use super::{AnisouEncoding, AtomField, AtomLayout, FieldLoc, Lexicon, atom_layout_for};
use crate::pickle::{DecodedValue, float_in, int_in, list_in, str_in};
use crate::util::{Error, Result};

/// Number of representation bits carried per atom.
pub const REP_BITS: u32 = 21;

/// One atom as stored in the session, before it is placed in a model.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Residue sequence number
    pub resv: i32,
    pub chain: String,
    pub alt_loc: char,
    pub resi: String,
    pub ins_code: char,
    pub segi: String,
    /// Residue name, at most three characters
    pub resn: String,
    pub name: String,
    pub elem: String,
    /// Label text; a single blank means unlabeled
    pub label: String,
    pub ss_type: char,
    pub b_factor: f32,
    pub occupancy: f32,
    pub vdw: f32,
    pub partial_charge: f32,
    pub formal_charge: i32,
    pub hetatm: bool,
    pub bonded: bool,
    /// Bit `i` set when representation `i` is shown
    pub reps: u32,
    pub color: i32,
    pub id: i32,
    /// Per-atom cartoon type code; 0 means automatic
    pub cartoon: i32,
    pub flags: u32,
    /// Key into per-atom setting overrides
    pub unique_id: Option<i32>,
    pub anisou: Option<[f32; 6]>,
}

impl Default for AtomRecord {
    fn default() -> Self {
        Self {
            resv: 0,
            chain: " ".into(),
            alt_loc: ' ',
            resi: String::new(),
            ins_code: ' ',
            segi: " ".into(),
            resn: "UNK".into(),
            name: " ".into(),
            elem: "C".into(),
            label: " ".into(),
            ss_type: ' ',
            b_factor: 0.0,
            occupancy: 1.0,
            vdw: 1.0,
            partial_charge: 0.0,
            formal_charge: 0,
            hetatm: false,
            bonded: false,
            reps: 0,
            color: 0,
            id: 0,
            cartoon: 0,
            flags: 0,
            unique_id: None,
            anisou: None,
        }
    }
}

impl AtomRecord {
    pub fn is_labeled(&self) -> bool {
        self.label != " " && !self.label.is_empty()
    }

    pub fn is_hydrogen(&self) -> bool {
        self.elem == "H"
    }

    /// Representation `rep` shown for this atom.
    pub fn has_rep(&self, rep: u32) -> bool {
        rep < REP_BITS && self.reps & (1 << rep) != 0
    }

    /// Normalizations shared by both storage forms.
    fn fixup(mut self) -> Self {
        if self.resn.chars().count() > 3 {
            self.resn = self.resn.chars().take(3).collect();
        }
        if self.resn == " " || self.resn.is_empty() {
            self.resn = "UNK".into();
        }
        if self.elem == "A" {
            self.elem = "C".into();
        }
        if self.vdw == 0.0 {
            self.vdw = 1.0;
        }
        self.unique_id = self.unique_id.filter(|&u| u > 0);
        self
    }
}

/// First character of a field, blank when empty.
fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(' ')
}

/// Insertion code taken from the end of a residue identifier.
fn ins_code_from_resi(resi: &str) -> char {
    match resi.chars().last() {
        Some(c) if !c.is_ascii_digit() => c,
        _ => ' ',
    }
}

// ============================================================================
// Binary form
// ============================================================================

/// One record's bytes read through a layout.
struct RecordView<'a> {
    layout: &'a AtomLayout,
    rec: &'a [u8],
    lexicon: &'a Lexicon,
}

impl RecordView<'_> {
    fn bytes(&self, o: u16, n: usize) -> Option<&[u8]> {
        self.rec.get(o as usize..o as usize + n)
    }

    fn int(&self, field: AtomField) -> i32 {
        match self.layout.loc(field) {
            FieldLoc::Direct(o) => self.bytes(o, 4).map_or(0, LittleEndian::read_i32),
            _ => 0,
        }
    }

    fn float(&self, field: AtomField) -> f32 {
        match self.layout.loc(field) {
            FieldLoc::Direct(o) => self.bytes(o, 4).map_or(0.0, LittleEndian::read_f32),
            _ => 0.0,
        }
    }

    fn byte(&self, field: AtomField) -> Option<u8> {
        match self.layout.loc(field) {
            FieldLoc::Direct(o) => self.rec.get(o as usize).copied(),
            _ => None,
        }
    }

    fn flag(&self, field: AtomField) -> bool {
        match self.layout.loc(field) {
            FieldLoc::Flag { offset, mask } => {
                self.rec.get(offset as usize).is_some_and(|b| b & mask != 0)
            }
            FieldLoc::Direct(o) => self.rec.get(o as usize).is_some_and(|&b| b != 0),
            _ => false,
        }
    }

    fn string(&self, field: AtomField) -> String {
        match self.layout.loc(field) {
            FieldLoc::Lexicon(o) => {
                let ix = self.bytes(o, 4).map_or(0, LittleEndian::read_i32);
                self.lexicon.get(ix).to_string()
            }
            FieldLoc::Direct(o) => {
                let rest = self.rec.get(o as usize..).unwrap_or_default();
                let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
                let s = String::from_utf8_lossy(&rest[..end]).into_owned();
                if s.is_empty() { " ".to_string() } else { s }
            }
            _ => " ".to_string(),
        }
    }

    fn anisou(&self) -> Option<[f32; 6]> {
        let FieldLoc::Direct(o) = self.layout.loc(AtomField::Anisou) else {
            return None;
        };
        let mut u = [0f32; 6];
        match self.layout.anisou {
            AnisouEncoding::None => return None,
            AnisouEncoding::F32 => {
                let b = self.bytes(o, 24)?;
                LittleEndian::read_f32_into(b, &mut u);
            }
            AnisouEncoding::I16 => {
                let b = self.bytes(o, 12)?;
                for (i, v) in u.iter_mut().enumerate() {
                    *v = LittleEndian::read_i16(&b[i * 2..]) as f32;
                }
            }
        }
        (u[0] != 0.0).then_some(u)
    }
}

/// Decode atom `index` of a packed atom dump.
pub fn decode_atom(layout: &AtomLayout, data: &[u8], index: usize, lexicon: &Lexicon) -> Result<AtomRecord> {
    let start = index * layout.record_len;
    let rec = data.get(start..start + layout.record_len).ok_or_else(|| {
        Error::invalid(format!(
            "atom {index} beyond v{} dump of {} bytes",
            layout.version,
            data.len()
        ))
    })?;
    let v = RecordView { layout, rec, lexicon };

    let resv = v.int(AtomField::Resv);
    let (resi, ins_code) = match v.byte(AtomField::InsCode) {
        Some(code) => {
            let ins = if code == 0 { ' ' } else { code as char };
            let resi = if ins == ' ' { resv.to_string() } else { format!("{resv}{ins}") };
            (resi, ins)
        }
        None => {
            let resi = v.string(AtomField::Resi);
            let ins = ins_code_from_resi(&resi);
            (resi, ins)
        }
    };
    let formal_charge = v.byte(AtomField::FormalCharge).map_or(0, |b| layout.fix_formal_charge(b));
    let uid = v.int(AtomField::UniqueId);

    Ok(AtomRecord {
        resv,
        chain: v.string(AtomField::Chain),
        alt_loc: first_char(&v.string(AtomField::AltLoc)),
        resi,
        ins_code,
        segi: v.string(AtomField::Segi),
        resn: v.string(AtomField::Resn),
        name: v.string(AtomField::Name),
        elem: v.string(AtomField::Elem),
        label: v.string(AtomField::Label),
        ss_type: first_char(&v.string(AtomField::SsType)),
        b_factor: v.float(AtomField::BFactor),
        occupancy: v.float(AtomField::Occupancy),
        vdw: v.float(AtomField::Vdw),
        partial_charge: v.float(AtomField::PartialCharge),
        formal_charge,
        hetatm: v.flag(AtomField::Hetatm),
        bonded: v.flag(AtomField::Bonded),
        reps: v.int(AtomField::VisRep) as u32,
        color: v.int(AtomField::Color),
        id: v.int(AtomField::Id),
        cartoon: v.byte(AtomField::Cartoon).map_or(0, |b| b as i8 as i32),
        flags: v.int(AtomField::Flags) as u32,
        unique_id: Some(uid),
        anisou: v.anisou(),
    }
    .fixup())
}

/// A packed atom dump with its lexicon.
#[derive(Debug, Clone)]
pub struct AtomDump<'a> {
    pub layout: &'static AtomLayout,
    pub data: &'a [u8],
    pub lexicon: Lexicon,
}

impl<'a> AtomDump<'a> {
    /// Dump from `[version, bytes, lexicon_bytes]`.
    pub fn from_value(dump: &'a [DecodedValue]) -> Result<Self> {
        let version = int_in(dump, 0).ok_or_else(|| Error::missing("atom dump version"))?;
        let layout = atom_layout_for(version)?;
        let data = dump.get(1).and_then(DecodedValue::as_bytes).ok_or_else(|| Error::missing("atom dump bytes"))?;
        let lexicon = match dump.get(2).and_then(DecodedValue::as_bytes) {
            Some(b) => Lexicon::parse(b)?,
            None => Lexicon::default(),
        };
        tracing::debug!("atom dump version {version}, {} records", data.len() / layout.record_len);
        Ok(Self { layout, data, lexicon })
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.layout.record_len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn atom(&self, index: usize) -> Result<AtomRecord> {
        decode_atom(self.layout, self.data, index, &self.lexicon)
    }
}

// ============================================================================
// List form
// ============================================================================

/// Decode one atom stored as a field list.
pub fn decode_atom_list(a: &[DecodedValue]) -> Result<AtomRecord> {
    let text = |i: usize| str_in(a, i).map(|s| s.into_owned()).unwrap_or_else(|| " ".into());
    let resi = text(3);
    let reps = match list_in(a, 20) {
        Some(list) => list
            .iter()
            .take(REP_BITS as usize)
            .enumerate()
            .filter(|(_, v)| v.as_bool().unwrap_or(false))
            .fold(0u32, |acc, (i, _)| acc | (1 << i)),
        None => int_in(a, 20).unwrap_or(0) as u32,
    };
    let unique_id = (a.len() > 40 && int_in(a, 40) == Some(1)).then(|| int_in(a, 32)).flatten();
    let anisou = if a.len() > 46 {
        let mut u = [0f32; 6];
        for (i, v) in u.iter_mut().enumerate() {
            *v = float_in(a, 41 + i).unwrap_or(0.0);
        }
        (u[0] != 0.0).then_some(u)
    } else {
        None
    };
    Ok(AtomRecord {
        resv: int_in(a, 0).ok_or_else(|| Error::missing("atom resv"))?,
        chain: text(1),
        alt_loc: first_char(&text(2)),
        ins_code: ins_code_from_resi(&resi),
        resi,
        segi: text(4),
        resn: text(5),
        name: text(6),
        elem: text(7),
        label: text(9),
        ss_type: first_char(&text(10)),
        b_factor: float_in(a, 14).unwrap_or(0.0),
        occupancy: float_in(a, 15).unwrap_or(0.0),
        vdw: float_in(a, 16).unwrap_or(0.0),
        partial_charge: float_in(a, 17).unwrap_or(0.0),
        formal_charge: int_in(a, 18).unwrap_or(0),
        hetatm: int_in(a, 19).unwrap_or(0) != 0,
        reps,
        color: int_in(a, 21).unwrap_or(0),
        id: int_in(a, 22).unwrap_or(0),
        cartoon: int_in(a, 23).unwrap_or(0),
        flags: int_in(a, 24).unwrap_or(0) as u32,
        bonded: int_in(a, 25).unwrap_or(0) != 0,
        unique_id,
        anisou,
    }
    .fixup())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ATOM_V176, ATOM_V177, ATOM_V181};

    /// Writes logical values into a zeroed record of the given layout.
    struct RecordWriter {
        layout: &'static AtomLayout,
        rec: Vec<u8>,
        lexicon: Vec<(i32, String)>,
    }

    impl RecordWriter {
        fn new(layout: &'static AtomLayout) -> Self {
            Self { layout, rec: vec![0; layout.record_len], lexicon: Vec::new() }
        }

        fn int(&mut self, f: AtomField, v: i32) -> &mut Self {
            if let FieldLoc::Direct(o) = self.layout.loc(f) {
                LittleEndian::write_i32(&mut self.rec[o as usize..], v);
            }
            self
        }

        fn float(&mut self, f: AtomField, v: f32) -> &mut Self {
            if let FieldLoc::Direct(o) = self.layout.loc(f) {
                LittleEndian::write_f32(&mut self.rec[o as usize..], v);
            }
            self
        }

        fn byte(&mut self, f: AtomField, v: u8) -> &mut Self {
            match self.layout.loc(f) {
                FieldLoc::Direct(o) => self.rec[o as usize] = v,
                FieldLoc::Flag { offset, mask } if v != 0 => self.rec[offset as usize] |= mask,
                _ => {}
            }
            self
        }

        fn text(&mut self, f: AtomField, s: &str) -> &mut Self {
            match self.layout.loc(f) {
                FieldLoc::Direct(o) => {
                    let o = o as usize;
                    self.rec[o..o + s.len()].copy_from_slice(s.as_bytes());
                }
                FieldLoc::Lexicon(o) => {
                    let ix = self.lexicon.len() as i32 + 1;
                    self.lexicon.push((ix, s.to_string()));
                    LittleEndian::write_i32(&mut self.rec[o as usize..], ix);
                }
                _ => {}
            }
            self
        }

        fn lexicon(&self) -> Lexicon {
            let mut blob = (self.lexicon.len() as i32).to_le_bytes().to_vec();
            for (ix, _) in &self.lexicon {
                blob.extend_from_slice(&ix.to_le_bytes());
            }
            for (_, s) in &self.lexicon {
                blob.extend_from_slice(s.as_bytes());
                blob.push(0);
            }
            Lexicon::parse(&blob).unwrap()
        }
    }

    fn sample(layout: &'static AtomLayout) -> (Vec<u8>, Lexicon) {
        let mut w = RecordWriter::new(layout);
        w.int(AtomField::Resv, 42)
            .text(AtomField::Chain, "A")
            .text(AtomField::Resi, "42")
            .text(AtomField::Resn, "LYS")
            .text(AtomField::Name, "CA")
            .text(AtomField::Elem, "C")
            .text(AtomField::SsType, "H")
            .float(AtomField::BFactor, 12.5)
            .float(AtomField::Vdw, 1.7)
            .int(AtomField::VisRep, 0b10_0001)
            .int(AtomField::Color, 26)
            .int(AtomField::Id, 7)
            .int(AtomField::UniqueId, 3)
            .byte(AtomField::FormalCharge, 1)
            .byte(AtomField::Bonded, 1);
        (w.rec.clone(), w.lexicon())
    }

    #[test]
    fn test_same_atom_across_versions() {
        let mut decoded = Vec::new();
        for layout in [&ATOM_V176, &ATOM_V177, &ATOM_V181] {
            let (rec, lex) = sample(layout);
            decoded.push(decode_atom(layout, &rec, 0, &lex).unwrap());
        }
        for a in &decoded {
            assert_eq!(a.resv, 42);
            assert_eq!(a.resi, "42");
            assert_eq!(a.chain, "A");
            assert_eq!(a.resn, "LYS");
            assert_eq!(a.name, "CA");
            assert_eq!(a.elem, "C");
            assert_eq!(a.ss_type, 'H');
            assert_eq!(a.b_factor, 12.5);
            assert_eq!(a.vdw, 1.7);
            assert_eq!(a.reps, 0b10_0001);
            assert_eq!(a.color, 26);
            assert_eq!(a.id, 7);
            assert_eq!(a.unique_id, Some(3));
            assert_eq!(a.formal_charge, 1);
            assert!(a.bonded);
            assert!(!a.hetatm);
            assert!(!a.is_labeled());
        }
        assert_eq!(decoded[0], decoded[1]);
    }

    #[test]
    fn test_formal_charge_byte() {
        for (raw, expect) in [(254u8, -2), (2, 2)] {
            let mut w = RecordWriter::new(&ATOM_V181);
            w.byte(AtomField::FormalCharge, raw);
            let a = decode_atom(&ATOM_V181, &w.rec, 0, &w.lexicon()).unwrap();
            assert_eq!(a.formal_charge, expect);
        }
    }

    #[test]
    fn test_fixups() {
        let mut w = RecordWriter::new(&ATOM_V177);
        w.text(AtomField::Resn, "HOHX").text(AtomField::Elem, "A").text(AtomField::Resi, "10B");
        let a = decode_atom(&ATOM_V177, &w.rec, 0, &Lexicon::default()).unwrap();
        assert_eq!(a.resn, "HOH");
        assert_eq!(a.elem, "C");
        assert_eq!(a.ins_code, 'B');
        assert_eq!(a.vdw, 1.0);
        assert_eq!(a.unique_id, None);
        assert_eq!(a.chain, " ");

        let w = RecordWriter::new(&ATOM_V177);
        let a = decode_atom(&ATOM_V177, &w.rec, 0, &Lexicon::default()).unwrap();
        assert_eq!(a.resn, "UNK");
    }

    #[test]
    fn test_v181_insertion_code() {
        let mut w = RecordWriter::new(&ATOM_V181);
        w.int(AtomField::Resv, 100).byte(AtomField::InsCode, b'A');
        let a = decode_atom(&ATOM_V181, &w.rec, 0, &w.lexicon()).unwrap();
        assert_eq!(a.resi, "100A");
        assert_eq!(a.ins_code, 'A');
    }

    #[test]
    fn test_record_out_of_range() {
        let (rec, lex) = sample(&ATOM_V177);
        assert!(decode_atom(&ATOM_V177, &rec, 1, &lex).is_err());
    }

    #[test]
    fn test_list_form() {
        let s = |v: &str| DecodedValue::Bytes(v.as_bytes().to_vec());
        let mut a = vec![DecodedValue::Int(0); 47];
        a[0] = DecodedValue::Int(5);
        a[1] = s("B");
        a[2] = s("");
        a[3] = s("5");
        a[5] = s("GLY");
        a[6] = s("N");
        a[7] = s("N");
        a[9] = s("N1");
        a[10] = s("S");
        a[16] = DecodedValue::Float(1.55);
        a[18] = DecodedValue::Int(-1);
        a[20] = DecodedValue::List(vec![DecodedValue::Int(1), DecodedValue::Int(0), DecodedValue::Int(0), DecodedValue::Int(1)]);
        a[25] = DecodedValue::Int(1);
        a[32] = DecodedValue::Int(9);
        a[40] = DecodedValue::Int(1);
        a[41] = DecodedValue::Float(0.5);
        let atom = decode_atom_list(&a).unwrap();
        assert_eq!(atom.resv, 5);
        assert_eq!(atom.chain, "B");
        assert_eq!(atom.alt_loc, ' ');
        assert_eq!(atom.ss_type, 'S');
        assert_eq!(atom.reps, 0b1001);
        assert!(atom.has_rep(3));
        assert!(atom.is_labeled());
        assert!(atom.bonded);
        assert_eq!(atom.formal_charge, -1);
        assert_eq!(atom.unique_id, Some(9));
        assert_eq!(atom.anisou.map(|u| u[0]), Some(0.5));

        a[40] = DecodedValue::Int(0);
        a[20] = DecodedValue::Int(0b110);
        let atom = decode_atom_list(&a).unwrap();
        assert_eq!(atom.unique_id, None);
        assert_eq!(atom.reps, 0b110);
    }
}
