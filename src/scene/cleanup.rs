//! Representation cleanup before shape emission.
//!
//! [`fix_reps`] reclassifies cartoon atoms by their per-atom cartoon type,
//! assigns spacefill radii and then drops single-residue runs from every
//! backbone representation with [`clean_singletons`].

use super::{Rep, RepSets};
use crate::session::{AtomFlags, Molecule};
use crate::settings::{BoundSettings, keys};
use crate::util::BitSet;

/// Cartoon type codes that change how an atom's cartoon is drawn.
const CARTOON_SKIP: i32 = -1;
const CARTOON_LOOP: i32 = 1;
const CARTOON_TUBE: i32 = 4;
const CARTOON_PUTTY: i32 = 7;

/// Atoms sharing one exact spacefill radius, in order of first appearance.
pub type RadiusGroups = Vec<(f32, BitSet)>;

fn add_to_group(groups: &mut RadiusGroups, r: f32, atom: usize) {
    match groups.iter_mut().find(|(g, _)| g.to_bits() == r.to_bits()) {
        Some((_, bs)) => bs.set(atom),
        None => {
            let mut bs = BitSet::new();
            bs.set(atom);
            groups.push((r, bs));
        }
    }
}

/// Reclassify cartoon flags, assign spacefill radii and suppress singletons.
///
/// Returns the spacefill radius groups. `reps` is indexed by global atom.
pub fn fix_reps(mol: &Molecule, reps: &mut RepSets, settings: &BoundSettings<'_>) -> RadiusGroups {
    let mut groups = RadiusGroups::new();
    let mut cartoon = BitSet::new();
    let ball = settings.float(keys::STICK_RADIUS) * settings.float(keys::STICK_BALL_RATIO);
    let h_scale = settings.float(keys::STICK_H_SCALE);

    for (i, atom) in mol.atoms.iter().enumerate() {
        let g = mol.first_atom + i;
        let mut rad = 0.0;
        if reps.get(Rep::Spheres).get(g) {
            rad = atom.record.vdw * settings.unique_float(atom.unique_id(), keys::SPHERE_SCALE);
        } else if reps.get(Rep::NbSpheres).get(g) {
            rad = if atom.has(AtomFlags::HYDROGEN) { ball * h_scale } else { ball };
        }
        if rad != 0.0 {
            add_to_group(&mut groups, rad, g);
        }

        if reps.get(Rep::Cartoon).get(g) {
            match atom.record.cartoon {
                CARTOON_LOOP | CARTOON_TUBE => {
                    reps.get_mut(Rep::Trace).set(g);
                    reps.get_mut(Rep::Cartoon).clear(g);
                }
                CARTOON_SKIP => reps.get_mut(Rep::Cartoon).clear(g),
                CARTOON_PUTTY => {
                    reps.get_mut(Rep::Putty).set(g);
                    reps.get_mut(Rep::Cartoon).clear(g);
                }
                _ => cartoon.set(g),
            }
        }
    }
    reps.get_mut(Rep::Cartoon).and(&cartoon);

    for rep in [Rep::Cartoon, Rep::Ribbon, Rep::Trace, Rep::Putty] {
        clean_singletons(mol, reps.get_mut(rep));
    }
    groups
}

/// Clear `bs` for every residue whose run of represented residues has
/// length one.
///
/// Residues are numbered in atom order; a new chain opens a gap so runs never
/// span chains. Pass one marks residues with any atom in `bs`, isolated marks
/// are dropped, and pass two clears atoms of unmarked residues.
pub fn clean_singletons(mol: &Molecule, bs: &mut BitSet) {
    if bs.is_empty() {
        return;
    }
    bs.and(&mol.atom_set());
    let residue_of = residue_offsets(mol);

    let mut marked = BitSet::new();
    for (i, &r) in residue_of.iter().enumerate() {
        if bs.get(mol.first_atom + i) {
            marked.set(r);
        }
    }
    let isolated: BitSet = marked
        .iter()
        .filter(|&r| !(r > 0 && marked.get(r - 1)) && !marked.get(r + 1))
        .collect();
    if !isolated.is_empty() {
        tracing::trace!("{}: dropping {} single residues", mol.name, isolated.cardinality());
    }
    marked.and_not(&isolated);
    for (i, &r) in residue_of.iter().enumerate() {
        if !marked.get(r) {
            bs.clear(mol.first_atom + i);
        }
    }
}

/// Residue offset of each atom of the molecule.
fn residue_offsets(mol: &Molecule) -> Vec<usize> {
    let mut out = Vec::with_capacity(mol.atoms.len());
    let mut offset = 0;
    let mut prev: Option<(&str, i32)> = None;
    for atom in &mol.atoms {
        let chain = atom.record.chain.as_str();
        let resv = atom.record.resv;
        match prev {
            None => offset += 2,
            Some((c, _)) if c != chain => offset += 2,
            Some((_, r)) if r != resv => offset += 1,
            _ => {}
        }
        prev = Some((chain, resv));
        out.push(offset);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::AtomRecord;
    use crate::session::Atom;
    use crate::settings::SettingsStore;
    use glam::Vec3;

    fn chain(residues: &[(&str, i32)], first: usize) -> Molecule {
        let atoms = residues
            .iter()
            .enumerate()
            .flat_map(|(i, &(c, r))| {
                (0..2).map(move |k| {
                    let rec = AtomRecord {
                        chain: c.into(),
                        resv: r,
                        name: if k == 0 { "CA".into() } else { "N".into() },
                        elem: "C".into(),
                        vdw: 1.7,
                        ..Default::default()
                    };
                    Atom::new(rec, Vec3::ZERO, i * 2 + k)
                })
            })
            .collect();
        Molecule {
            name: "m".into(),
            model_index: 0,
            state: 0,
            first_atom: first,
            atoms,
            first_bond: 0,
            bonds: Vec::new(),
            secondary: Vec::new(),
            ss_atoms: Default::default(),
            crystal: None,
            reps: RepSets::new(),
            settings: Default::default(),
            state_settings: Default::default(),
            hidden: false,
        }
    }

    fn residue_atoms(first: usize, residue: usize) -> [usize; 2] {
        [first + residue * 2, first + residue * 2 + 1]
    }

    #[test]
    fn test_lone_residue_dropped() {
        let mol = chain(&[("A", 1), ("A", 2), ("A", 3), ("A", 4), ("A", 5)], 10);
        let mut bs: BitSet = residue_atoms(10, 2).into_iter().collect();
        clean_singletons(&mol, &mut bs);
        assert!(bs.is_empty());
    }

    #[test]
    fn test_pair_kept() {
        let mol = chain(&[("A", 1), ("A", 2), ("A", 3), ("A", 4), ("A", 5)], 0);
        let mut bs: BitSet = residue_atoms(0, 2).into_iter().chain(residue_atoms(0, 3)).collect();
        let before = bs.clone();
        clean_singletons(&mol, &mut bs);
        assert_eq!(bs, before);
    }

    #[test]
    fn test_partial_residue_expands_nothing() {
        // One atom of each of two adjacent residues keeps just those atoms.
        let mol = chain(&[("A", 1), ("A", 2)], 0);
        let mut bs: BitSet = [0usize, 2].into_iter().collect();
        clean_singletons(&mol, &mut bs);
        assert_eq!(bs, [0usize, 2].into_iter().collect::<BitSet>());
    }

    #[test]
    fn test_chain_break_separates_runs() {
        let mol = chain(&[("A", 1), ("B", 2)], 0);
        let mut bs = BitSet::from_range(0, 4);
        clean_singletons(&mol, &mut bs);
        assert!(bs.is_empty());
    }

    #[test]
    fn test_fix_reps_cartoon_types() {
        let mut mol = chain(&[("A", 1), ("A", 2), ("A", 3), ("A", 4)], 0);
        for (i, a) in mol.atoms.iter_mut().enumerate() {
            a.record.cartoon = match i / 2 {
                0 | 1 => 0,
                _ => CARTOON_PUTTY,
            };
        }
        let mut reps = RepSets::new();
        reps.get_mut(Rep::Cartoon).set_range(0, 8);
        let store = SettingsStore::new(180);
        let groups = fix_reps(&mol, &mut reps, &store.session());
        assert!(groups.is_empty());
        assert_eq!(reps.get(Rep::Cartoon), &BitSet::from_range(0, 4));
        assert_eq!(reps.get(Rep::Putty), &BitSet::from_range(4, 8));
        assert!(reps.get(Rep::Trace).is_empty());
    }

    #[test]
    fn test_fix_reps_radius_groups() {
        let mut mol = chain(&[("A", 1)], 0);
        mol.atoms[1].record.elem = "H".into();
        mol.atoms[1] = Atom::new(mol.atoms[1].record.clone(), Vec3::ZERO, 1);
        let mut reps = RepSets::new();
        reps.get_mut(Rep::Spheres).set(0);
        reps.get_mut(Rep::NbSpheres).set(1);
        let store = SettingsStore::new(180);
        let groups = fix_reps(&mol, &mut reps, &store.session());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 1.7);
        assert!(groups[0].1.get(0));
        // stick_radius 0.25 * ball ratio 1.0 * hydrogen scale 0.4
        assert!((groups[1].0 - 0.1).abs() < 1e-6);
    }
}
