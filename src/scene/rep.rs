//! Representations and per-representation atom sets.

use crate::util::BitSet;

/// A representation an atom can be shown with.
///
/// The first 21 follow the session's own bit order; `Trace` and `Putty` are
/// derived from cartoon types during cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rep {
    Sticks = 0,
    Spheres = 1,
    Surface = 2,
    Labels = 3,
    NbSpheres = 4,
    Cartoon = 5,
    Ribbon = 6,
    Lines = 7,
    Mesh = 8,
    Dots = 9,
    Dashes = 10,
    Nonbonded = 11,
    Cell = 12,
    Cgo = 13,
    Callback = 14,
    Extent = 15,
    Slice = 16,
    Angles = 17,
    Dihedrals = 18,
    Ellipsoid = 19,
    Volume = 20,
    Trace = 21,
    Putty = 22,
}

impl Rep {
    /// Representations stored in session files.
    pub const SOURCE_COUNT: usize = 21;
    pub const COUNT: usize = 23;

    pub const ALL: [Rep; Rep::COUNT] = [
        Rep::Sticks,
        Rep::Spheres,
        Rep::Surface,
        Rep::Labels,
        Rep::NbSpheres,
        Rep::Cartoon,
        Rep::Ribbon,
        Rep::Lines,
        Rep::Mesh,
        Rep::Dots,
        Rep::Dashes,
        Rep::Nonbonded,
        Rep::Cell,
        Rep::Cgo,
        Rep::Callback,
        Rep::Extent,
        Rep::Slice,
        Rep::Angles,
        Rep::Dihedrals,
        Rep::Ellipsoid,
        Rep::Volume,
        Rep::Trace,
        Rep::Putty,
    ];

    pub fn from_index(i: usize) -> Option<Rep> {
        Rep::ALL.get(i).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name used in session selection names (`_scene_<name>_<rep>`).
    pub fn name(self) -> &'static str {
        match self {
            Rep::Sticks => "sticks",
            Rep::Spheres => "spheres",
            Rep::Surface => "surface",
            Rep::Labels => "labels",
            Rep::NbSpheres => "nb_spheres",
            Rep::Cartoon => "cartoon",
            Rep::Ribbon => "ribbon",
            Rep::Lines => "lines",
            Rep::Mesh => "mesh",
            Rep::Dots => "dots",
            Rep::Dashes => "dashes",
            Rep::Nonbonded => "nonbonded",
            Rep::Cell => "cell",
            Rep::Cgo => "cgo",
            Rep::Callback => "callback",
            Rep::Extent => "extent",
            Rep::Slice => "slice",
            Rep::Angles => "angles",
            Rep::Dihedrals => "dihedrals",
            Rep::Ellipsoid => "ellipsoid",
            Rep::Volume => "volume",
            Rep::Trace => "trace",
            Rep::Putty => "putty",
        }
    }

    /// Set of reps from a session bitmask.
    pub fn from_mask(mask: u32) -> impl Iterator<Item = Rep> {
        Rep::ALL[..Rep::SOURCE_COUNT]
            .iter()
            .copied()
            .filter(move |r| mask & (1 << r.index()) != 0)
    }
}

impl std::fmt::Display for Rep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One atom set per representation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepSets {
    sets: [BitSet; Rep::COUNT],
}

impl RepSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, rep: Rep) -> &BitSet {
        &self.sets[rep.index()]
    }

    pub fn get_mut(&mut self, rep: Rep) -> &mut BitSet {
        &mut self.sets[rep.index()]
    }

    /// Mark atom `atom` with every rep in a session bitmask.
    pub fn set_mask(&mut self, atom: usize, mask: u32) {
        for rep in Rep::from_mask(mask) {
            self.sets[rep.index()].set(atom);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sets.iter().all(BitSet::is_empty)
    }

    /// Reps with at least one atom, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Rep, &BitSet)> {
        Rep::ALL.iter().copied().zip(self.sets.iter()).filter(|(_, s)| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_indices() {
        for (i, rep) in Rep::ALL.iter().enumerate() {
            assert_eq!(rep.index(), i);
            assert_eq!(Rep::from_index(i), Some(*rep));
        }
        assert_eq!(Rep::from_index(23), None);
        assert_eq!(Rep::NbSpheres.name(), "nb_spheres");
    }

    #[test]
    fn test_mask_ignores_derived_reps() {
        let reps: Vec<_> = Rep::from_mask(0b1 | (1 << 5) | (1 << 21)).collect();
        assert_eq!(reps, vec![Rep::Sticks, Rep::Cartoon]);
    }

    #[test]
    fn test_rep_sets() {
        let mut sets = RepSets::new();
        assert!(sets.is_empty());
        sets.set_mask(2, 1 << Rep::Lines.index());
        assert!(sets.get(Rep::Lines).get(2));
        assert_eq!(sets.iter().map(|(r, _)| r).collect::<Vec<_>>(), vec![Rep::Lines]);
    }
}
