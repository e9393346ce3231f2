//! Scene objects: renderer-agnostic instructions.
//!
//! A [`SceneObject`] pairs a [`ShapeKind`] with an entity selection and a
//! kind-specific [`Payload`]. The builder appends them in session order; the
//! consumer drains the queue and draws.

use glam::Vec3;

use crate::util::BitSet;

/// What a scene object draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Per-atom base colors for a whole molecule
    AtomColors,
    /// Spheres of one absolute radius
    Spacefill,
    Balls,
    Sticks,
    Lines,
    Stars,
    Ellipsoids,
    Dots,
    Surface,
    Mesh,
    Labels,
    Cartoon,
    Trace,
    Backbone,
    Putty,
    Measurement,
    Cgo,
    /// Isosurface of a volumetric map
    MapSurface,
    /// Mesh contoured from a previously loaded map
    MapMesh,
    /// Electrostatic potential mapped onto a surface
    Mep,
    /// Displayed animation frame
    Frame,
    /// Atoms hidden by group visibility
    Hidden,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::AtomColors => "atom-colors",
            ShapeKind::Spacefill => "spacefill",
            ShapeKind::Balls => "balls",
            ShapeKind::Sticks => "sticks",
            ShapeKind::Lines => "lines",
            ShapeKind::Stars => "stars",
            ShapeKind::Ellipsoids => "ellipsoids",
            ShapeKind::Dots => "dots",
            ShapeKind::Surface => "surface",
            ShapeKind::Mesh => "mesh",
            ShapeKind::Labels => "labels",
            ShapeKind::Cartoon => "cartoon",
            ShapeKind::Trace => "trace",
            ShapeKind::Backbone => "backbone",
            ShapeKind::Putty => "putty",
            ShapeKind::Measurement => "measurement",
            ShapeKind::Cgo => "cgo",
            ShapeKind::MapSurface => "map-surface",
            ShapeKind::MapMesh => "map-mesh",
            ShapeKind::Mep => "mep",
            ShapeKind::Frame => "frame",
            ShapeKind::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entities a scene object applies to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Global atom indices
    Atoms(BitSet),
    /// Global bond indices
    Bonds(BitSet),
}

impl Selection {
    pub fn bits(&self) -> Option<&BitSet> {
        match self {
            Selection::None => None,
            Selection::Atoms(bs) | Selection::Bonds(bs) => Some(bs),
        }
    }

    pub fn len(&self) -> usize {
        self.bits().map_or(0, BitSet::cardinality)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Frame shown by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSelection {
    /// Every state overlaid
    All,
    /// One 0-based model index
    State(usize),
}

// ============================================================================
// Payloads
// ============================================================================

/// Per-atom style arrays, parallel to the set bits of the selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtomStyle {
    /// `None` entries keep the atom's own color
    pub colors: Option<Vec<Option<u32>>>,
    pub translucency: Option<Vec<f32>>,
    pub sizes: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    SansSerif,
    Serif,
    Monospaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// Label font resolved from a font id and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFont {
    pub face: FontFace,
    pub style: FontStyle,
    pub size: f32,
}

impl LabelFont {
    pub fn from_id(id: i32, size: f32) -> Self {
        let face = match id {
            0 | 1 => FontFace::Monospaced,
            9 | 10 | 15..=18 => FontFace::Serif,
            _ => FontFace::SansSerif,
        };
        let style = match id {
            6 | 12 | 16 | 17 => FontStyle::Italic,
            7 | 10 | 13 => FontStyle::Bold,
            8 | 14 | 18 => FontStyle::BoldItalic,
            _ => FontStyle::Plain,
        };
        let size = if size == 0.0 { 12.0 } else { size };
        Self { face, style, size }
    }
}

/// Seven-float label placement: mode flag, xyz offset, screen offset.
pub type LabelOffset = [f32; 7];

/// Offset array for a plain xyz displacement.
pub fn label_offset(p: Vec3) -> LabelOffset {
    [1.0, p.x, p.y, p.z, 0.0, 0.0, 0.0]
}

/// Text attached to one atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub atom: usize,
    pub text: String,
    pub argb: u32,
    pub offset: LabelOffset,
    pub font: LabelFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureKind {
    Distance,
    Angle,
    Dihedral,
}

impl MeasureKind {
    /// Kind from the number of coordinates per measurement.
    pub fn from_points(n: usize) -> Option<Self> {
        match n {
            2 => Some(MeasureKind::Distance),
            3 => Some(MeasureKind::Angle),
            4 => Some(MeasureKind::Dihedral),
            _ => None,
        }
    }

    pub fn points(self) -> usize {
        match self {
            MeasureKind::Distance => 2,
            MeasureKind::Angle => 3,
            MeasureKind::Dihedral => 4,
        }
    }
}

/// One distance, angle or dihedral.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub kind: MeasureKind,
    pub points: Vec<Vec3>,
    /// Label format with a `%0.<digits>VALUE` placeholder; empty value part
    /// when labels are off
    pub format: String,
    pub label_argb: u32,
    pub offset: LabelOffset,
    pub font: LabelFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lighting {
    FrontLit,
    FullyLit,
}

/// Parameters of a molecular surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceParams {
    pub lighting: Lighting,
    /// Restrict the surface to the selection instead of using it as context
    pub only: bool,
    /// Name of the selection the surface is carved around
    pub carve_selection: Option<String>,
    pub carve_cutoff: f32,
    /// Per-atom color and translucency overrides
    pub style: AtomStyle,
}

/// Putty (b-factor tube) parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuttyParams {
    pub quality: f32,
    pub radius: f32,
    pub range: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub scale_power: f32,
    pub transform: i32,
}

/// Compiled graphics stream.
#[derive(Debug, Clone, PartialEq)]
pub struct CgoData {
    pub name: String,
    pub ops: Vec<f32>,
}

/// Reference from a mesh or MEP object to its volumetric data.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRef {
    pub map_name: String,
    /// Object id of the surface an MEP is painted on
    pub surface: Option<String>,
}

/// Kind-specific content of a scene object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    None,
    /// One color per global atom index
    AtomColors(Vec<u32>),
    Style(AtomStyle),
    Labels(Vec<Label>),
    Measurement(Measurement),
    Surface(SurfaceParams),
    Putty(PuttyParams),
    Cgo(CgoData),
    Map(MapRef),
    Frame(FrameSelection),
    /// Nucleic acid cartoon drawn as a tube, optionally with base ladders
    NucleicTube { ladders: bool },
}

// ============================================================================
// SceneObject
// ============================================================================

/// One queued instruction for the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub kind: ShapeKind,
    /// Id of the session object this came from
    pub object_id: String,
    pub selection: Selection,
    pub payload: Payload,
    /// Radius, width or scale, depending on kind
    pub size: Option<f32>,
    pub argb: Option<u32>,
    pub translucency: f32,
    pub visible: bool,
    pub model_index: Option<usize>,
    /// Key of externally cached volumetric data
    pub cache_key: Option<String>,
}

impl SceneObject {
    pub fn new(kind: ShapeKind, object_id: impl Into<String>, selection: Selection, payload: Payload) -> Self {
        Self {
            kind,
            object_id: object_id.into(),
            selection,
            payload,
            size: None,
            argb: None,
            translucency: 0.0,
            visible: true,
            model_index: None,
            cache_key: None,
        }
    }

    pub fn atoms(kind: ShapeKind, object_id: impl Into<String>, atoms: BitSet, payload: Payload) -> Self {
        Self::new(kind, object_id, Selection::Atoms(atoms), payload)
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_argb(mut self, argb: u32) -> Self {
        self.argb = Some(argb);
        self
    }

    pub fn with_translucency(mut self, t: f32) -> Self {
        self.translucency = t;
        self
    }

    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// Shift model indices by `model_delta` and atom selections by
    /// `entity_delta` for merging into a larger model set.
    ///
    /// Bond selections are left alone; see [`SceneObject::offset_bonds`].
    pub fn offset(&mut self, model_delta: usize, entity_delta: usize) {
        if model_delta > 0 {
            if let Some(m) = self.model_index.as_mut() {
                *m += model_delta;
            }
            match &mut self.payload {
                Payload::Frame(FrameSelection::State(i)) => {
                    *i += model_delta;
                    return;
                }
                Payload::Frame(FrameSelection::All) => return,
                _ => {}
            }
        }
        if entity_delta == 0 {
            return;
        }
        if let Selection::Atoms(bs) = &mut self.selection {
            *bs = bs.shifted(entity_delta);
        }
        match &mut self.payload {
            Payload::AtomColors(colors) => {
                let mut padded = vec![0; entity_delta];
                padded.append(colors);
                *colors = padded;
            }
            Payload::Labels(labels) => {
                for label in labels {
                    label.atom += entity_delta;
                }
            }
            _ => {}
        }
    }

    /// Shift bond selections by `bond_delta`.
    pub fn offset_bonds(&mut self, bond_delta: usize) {
        if let Selection::Bonds(bs) = &mut self.selection {
            *bs = bs.shifted(bond_delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_mapping() {
        let f = LabelFont::from_id(0, 0.0);
        assert_eq!((f.face, f.style, f.size), (FontFace::Monospaced, FontStyle::Plain, 12.0));
        let f = LabelFont::from_id(10, 14.0);
        assert_eq!((f.face, f.style, f.size), (FontFace::Serif, FontStyle::Bold, 14.0));
        let f = LabelFont::from_id(14, 14.0);
        assert_eq!((f.face, f.style), (FontFace::SansSerif, FontStyle::BoldItalic));
        let f = LabelFont::from_id(17, 14.0);
        assert_eq!((f.face, f.style), (FontFace::Serif, FontStyle::Italic));
    }

    #[test]
    fn test_offset_atoms_and_colors() {
        let mut obj = SceneObject::atoms(
            ShapeKind::AtomColors,
            "mol",
            BitSet::from_range(0, 2),
            Payload::AtomColors(vec![1, 2]),
        );
        obj.model_index = Some(0);
        obj.offset(2, 3);
        assert_eq!(obj.model_index, Some(2));
        assert_eq!(obj.selection.bits().map(|b| b.iter().collect::<Vec<_>>()), Some(vec![3, 4]));
        assert_eq!(obj.payload, Payload::AtomColors(vec![0, 0, 0, 1, 2]));
    }

    #[test]
    fn test_offset_frame_and_bonds() {
        let mut frame = SceneObject::new(ShapeKind::Frame, "", Selection::None, Payload::Frame(FrameSelection::State(1)));
        frame.offset(4, 10);
        assert_eq!(frame.payload, Payload::Frame(FrameSelection::State(5)));

        let mut sticks = SceneObject::new(ShapeKind::Sticks, "m", Selection::Bonds(BitSet::from_range(0, 1)), Payload::None);
        sticks.offset(0, 10);
        assert_eq!(sticks.selection, Selection::Bonds(BitSet::from_range(0, 1)));
        sticks.offset_bonds(2);
        assert_eq!(sticks.selection, Selection::Bonds(BitSet::from_range(2, 3)));
    }
}
