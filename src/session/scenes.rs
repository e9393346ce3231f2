//! Saved scenes, camera views and cross-object atom selections.
//!
//! A saved scene stores a frame, a camera, per-object visibility flags,
//! per-representation atom lists and per-color atom lists. Atom lists name
//! source atom indices of an object; [`AtomMaps`] turns them into global
//! indices for one state or for all of them.

use std::collections::HashMap;

use super::{LoadedSession, ObjectKind};
use crate::pickle::{DecodedValue, PickleMap, float_in, int_in, list_in, str_in};
use crate::scene::{FrameSelection, Payload, Rep, RepSets, SceneObject, SceneObjectBuilder, Selection, ShapeKind};
use crate::settings::{BoundSettings, keys};
use crate::util::{BitSet, fix_name};

// ============================================================================
// Selections
// ============================================================================

/// Source atom indices of one object, as `[name, [idx, ...]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAtoms {
    pub object: String,
    pub atoms: Vec<usize>,
}

impl ObjectAtoms {
    /// Parse `[[name, [idx, ...]], ...]`, skipping malformed entries.
    pub fn parse_list(list: &[DecodedValue]) -> Vec<ObjectAtoms> {
        list.iter()
            .filter_map(DecodedValue::as_list)
            .filter_map(|entry| {
                let object = text_in(entry, 0)?;
                let atoms = list_in(entry, 1)?
                    .iter()
                    .filter_map(|v| v.as_int().and_then(|i| usize::try_from(i).ok()))
                    .collect();
                Some(ObjectAtoms { object, atoms })
            })
            .collect()
    }
}

/// Source-to-global atom maps of every placed molecule state, keyed by
/// object id (`fix_name("<name>_<state>")`).
#[derive(Debug, Clone, Default)]
pub struct AtomMaps {
    maps: HashMap<String, Vec<Option<usize>>>,
}

impl AtomMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object_id: String, map: Vec<Option<usize>>) {
        self.maps.insert(object_id, map);
    }

    pub fn get(&self, object_id: &str) -> Option<&[Option<usize>]> {
        self.maps.get(object_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Add the global atoms of `entries` in 1-based `state`, or in every
    /// state when `state` is 0.
    pub fn select(&self, entries: &[ObjectAtoms], state: usize, state_count: usize, bs: &mut BitSet) {
        let states = if state == 0 { 1..=state_count } else { state..=state };
        for entry in entries {
            for k in states.clone() {
                let Some(map) = self.maps.get(&fix_name(&format!("{}_{k}", entry.object))) else {
                    continue;
                };
                for &i in &entry.atoms {
                    if let Some(Some(g)) = map.get(i) {
                        bs.set(*g);
                    }
                }
            }
        }
    }
}

pub(crate) fn text_in(list: &[DecodedValue], i: usize) -> Option<String> {
    let s = str_in(list, i)?;
    Some(if s.is_empty() { " ".to_string() } else { s.into_owned() })
}

/// Index the `names` list by object name.
pub fn names_by_name(names: &[DecodedValue]) -> HashMap<String, &[DecodedValue]> {
    names
        .iter()
        .filter_map(DecodedValue::as_list)
        .filter_map(|entry| Some((text_in(entry, 0)?, entry)))
        .collect()
}

// ============================================================================
// Views
// ============================================================================

/// Camera as 17 view floats followed by field of view (negative for
/// perspective), depth cue, fog and fog start.
pub type CameraView = [f32; 21];

/// Camera and global display switches.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub view: CameraView,
    pub background: u32,
    pub translucent: bool,
    pub round_helices: bool,
    pub fancy_helices: bool,
    pub rockets: bool,
    pub ladders: bool,
}

/// Positions of the view floats in the session's matrix form.
const MATRIX_SLOTS: [usize; 17] = [0, 1, 2, 4, 5, 6, 8, 9, 10, 16, 17, 18, 19, 20, 21, 22, 23];

/// Build a camera from a stored view list.
///
/// The session view is a 4x4 rotation matrix followed by translation, origin
/// and clipping; `matrix` skips the unused matrix column and row. A saved
/// scene stores the 3x3 rotation directly.
pub fn camera_view(view: &[DecodedValue], matrix: bool, settings: &BoundSettings<'_>) -> CameraView {
    let mut out = [0f32; 21];
    for (pt, slot) in out.iter_mut().take(17).enumerate() {
        let src = if matrix { MATRIX_SLOTS[pt] } else { pt };
        *slot = float_in(view, src).unwrap_or(0.0);
    }

    let fov = settings.float(keys::FIELD_OF_VIEW);
    out[17] = if settings.boolean(keys::ORTHOSCOPIC) { fov } else { -fov };
    out[18] = if settings.boolean(keys::DEPTH_CUE) { 1.0 } else { 0.0 };
    out[19] = if settings.boolean(keys::FOG) { 1.0 } else { 0.0 };
    out[20] = settings.float(keys::FOG_START);
    out
}

// ============================================================================
// Saved scenes
// ============================================================================

/// Per-object entry of a scene's visibility map.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneVisibility {
    pub visible: bool,
    /// Representation mask, used for measurements
    pub reps: u32,
    pub color: i32,
}

/// A saved scene that selects a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedScene {
    pub name: String,
    /// 1-based state
    pub frame: usize,
    pub view: Option<CameraView>,
    pub visibilities: Vec<(String, SceneVisibility)>,
    pub reps: Vec<(Rep, Vec<ObjectAtoms>)>,
    pub colors: Vec<(i32, Vec<ObjectAtoms>)>,
}

/// Read `scene_order` and `scene_dict`, keeping scenes that store a frame.
///
/// Representation lists come from the `_scene_<name>_<rep>` selection
/// objects, color lists from the `_!c_<name>_<color>` selector secrets.
pub fn parse_scenes(
    root: &PickleMap,
    names: &HashMap<String, &[DecodedValue]>,
    settings: &BoundSettings<'_>,
) -> Vec<SavedScene> {
    let (Some(order), Some(dict)) = (root.list("scene_order"), root.get("scene_dict").and_then(DecodedValue::as_map))
    else {
        return Vec::new();
    };
    let secrets = root.list("selector_secrets").map(names_by_name).unwrap_or_default();

    let mut scenes = Vec::new();
    for name in order.iter().filter_map(|v| v.as_str()) {
        let Some(scene) = dict.list(&name) else { continue };
        let Some(frame) = scene.get(2).filter(|v| !v.is_null()).and_then(DecodedValue::as_int) else {
            continue;
        };

        let visibilities = scene
            .get(1)
            .and_then(DecodedValue::as_map)
            .map(|vis| {
                vis.iter()
                    .filter_map(|(obj, v)| {
                        let v = v.as_list()?;
                        let reps = list_in(v, 2)
                            .unwrap_or_default()
                            .iter()
                            .filter_map(DecodedValue::as_i32)
                            .filter(|&r| (0..32).contains(&r))
                            .fold(0u32, |m, r| m | (1 << r));
                        let sv = SceneVisibility { visible: int_in(v, 0) == Some(1), reps, color: int_in(v, 3).unwrap_or(-1) };
                        Some((obj.to_string(), sv))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let reps = Rep::ALL[..Rep::SOURCE_COUNT]
            .iter()
            .filter_map(|&rep| {
                let entry = names.get(&format!("_scene_{name}_{}", rep.name()))?;
                let atoms = ObjectAtoms::parse_list(list_in(entry, 5)?);
                (!atoms.is_empty()).then_some((rep, atoms))
            })
            .collect();

        let colorection = list_in(scene, 3).unwrap_or_default();
        let colors = colorection
            .chunks_exact(2)
            .filter_map(|pair| {
                let color = pair[0].as_i32()?;
                let secret = secrets.get(&format!("_!c_{name}_{color}"))?;
                Some((color, ObjectAtoms::parse_list(list_in(secret, 1)?)))
            })
            .collect();

        tracing::debug!("scene {name}: frame {frame}");
        scenes.push(SavedScene {
            view: list_in(scene, 0).map(|v| camera_view(v, false, settings)),
            name: name.into_owned(),
            frame: frame.max(0) as usize,
            visibilities,
            reps,
            colors,
        });
    }
    scenes
}

impl LoadedSession {
    pub fn scene(&self, name: &str) -> Option<&SavedScene> {
        self.scenes.iter().find(|s| s.name == name)
    }

    /// Re-derive the scene queue for a saved scene.
    ///
    /// The group tree is reused as loaded; only the enabled flags listed in
    /// the scene are overridden. Returns `None` for an unknown scene.
    pub fn generate_scene(&self, name: &str) -> Option<Vec<SceneObject>> {
        let scene = self.scene(name)?;
        tracing::info!("generating scene {name}");
        let state = scene.frame;
        let listed: HashMap<&str, &SceneVisibility> = scene
            .visibilities
            .iter()
            .filter(|(n, _)| n != "all")
            .map(|(n, v)| (n.as_str(), v))
            .collect();

        let mut out = vec![SceneObject::new(
            ShapeKind::Frame,
            fix_name(name),
            Selection::None,
            Payload::Frame(FrameSelection::State(state.saturating_sub(1))),
        )];

        let vis = self.groups.compute_with(|n| match self.kinds.get(n) {
            Some(ObjectKind::Group) => Some(!matches!(listed.get(n), Some(v) if !v.visible)),
            _ => Some(true),
        });
        let object_hidden = |n: &str| {
            listed.get(n).is_some_and(|v| !v.visible) || self.groups.parent_of(n).is_some_and(|p| vis.is_hidden(p))
        };

        // visibility
        let mut displayed = BitSet::new();
        for (obj, entry) in &scene.visibilities {
            if obj == "all" || object_hidden(obj) {
                continue;
            }
            match self.kinds.get(obj.as_str()) {
                Some(ObjectKind::Molecule) => {
                    if let Some(node) = self.groups.get(obj) {
                        displayed.or(node.members());
                    }
                }
                Some(ObjectKind::Measurement) => {
                    if let Some(src) = self.measurements.get(obj.as_str()) {
                        let bound = self.settings.bind(Some(&src.settings), None);
                        let mut b = SceneObjectBuilder::new(src.object_id.clone(), bound, &self.colors);
                        b.emit_measurements(src.kind, &src.coords, &src.offsets, entry.reps, entry.color, true);
                        out.extend(b.finish());
                    }
                }
                _ => {}
            }
        }

        // colors
        let session = self.settings.session();
        let mut b = SceneObjectBuilder::new(fix_name(name), session, &self.colors);
        for (color, entries) in &scene.colors {
            let mut bs = BitSet::new();
            self.atom_maps.select(entries, state, self.state_count, &mut bs);
            b.emit_atom_color(bs, *color);
        }
        out.extend(b.finish());

        // shapes
        for mol_name in &self.molecule_names {
            if object_hidden(mol_name) {
                continue;
            }
            let Some(mol) = self.molecules.iter().find(|m| &m.name == mol_name && m.state + 1 == state) else {
                continue;
            };
            let mut reps = RepSets::new();
            for (rep, entries) in &scene.reps {
                let mine: Vec<ObjectAtoms> = entries.iter().filter(|e| &e.object == mol_name).cloned().collect();
                self.atom_maps.select(&mine, state, self.state_count, reps.get_mut(*rep));
            }
            let bound = self.settings.bind(Some(&mol.settings), Some(&mol.state_settings));
            let id = fix_name(&format!("{}_{}", mol.name, mol.state + 1));
            let mut b = SceneObjectBuilder::new(id, bound, &self.colors).with_surfaces(self.allow_surface);
            if let Some(key) = &self.cache_key {
                b = b.with_cache_key(key.clone());
            }
            b.emit_shapes(mol, reps);
            out.extend(b.finish());
        }

        // hide everything not displayed
        let mut hidden = BitSet::new();
        for mol in &self.molecules {
            hidden.or(&mol.atom_set());
        }
        hidden.and_not(&displayed);
        hidden.or(&vis.hidden);
        let occluded = self.occluded_ids(&vis);
        for obj in &mut out {
            if occluded.contains(&obj.object_id) {
                obj.visible = false;
            }
        }
        if !hidden.is_empty() {
            out.push(SceneObject::atoms(ShapeKind::Hidden, fix_name(name), hidden, Payload::None));
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SettingsStore;

    fn s(v: &str) -> DecodedValue {
        DecodedValue::Bytes(v.as_bytes().to_vec())
    }

    fn ints(v: &[i64]) -> DecodedValue {
        DecodedValue::List(v.iter().map(|&i| DecodedValue::Int(i)).collect())
    }

    #[test]
    fn test_atom_maps_select() {
        let mut maps = AtomMaps::new();
        maps.insert("prot_1".into(), vec![Some(0), Some(1), None]);
        maps.insert("prot_2".into(), vec![Some(3), Some(4), Some(5)]);
        let entries = ObjectAtoms::parse_list(&[DecodedValue::List(vec![s("prot"), ints(&[1, 2])])]);
        assert_eq!(entries, vec![ObjectAtoms { object: "prot".into(), atoms: vec![1, 2] }]);

        let mut bs = BitSet::new();
        maps.select(&entries, 1, 2, &mut bs);
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![1]);

        let mut bs = BitSet::new();
        maps.select(&entries, 0, 2, &mut bs);
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![1, 4, 5]);
    }

    #[test]
    fn test_camera_view_forms() {
        let store = SettingsStore::new(181);
        let session = store.session();
        let matrix: Vec<DecodedValue> = (0..25).map(|i| DecodedValue::Float(i as f64)).collect();
        let v = camera_view(&matrix, true, &session);
        assert_eq!(&v[..9], &[0.0, 1.0, 2.0, 4.0, 5.0, 6.0, 8.0, 9.0, 10.0]);
        assert_eq!(&v[9..17], &[16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0]);

        let flat: Vec<DecodedValue> = (0..17).map(|i| DecodedValue::Float(i as f64)).collect();
        let v = camera_view(&flat, false, &session);
        assert_eq!(v[16], 16.0);
        assert_eq!(v[9], 9.0);
    }

    #[test]
    fn test_parse_scenes_needs_frame() {
        let mut vis = PickleMap::new();
        vis.insert("prot", DecodedValue::List(vec![DecodedValue::Int(1), DecodedValue::Null, ints(&[3, 10]), DecodedValue::Int(4)]));
        let with_frame = DecodedValue::List(vec![DecodedValue::Null, DecodedValue::Map(vis), DecodedValue::Int(2), ints(&[5, 0])]);
        let without = DecodedValue::List(vec![DecodedValue::Null, DecodedValue::Null, DecodedValue::Null]);
        let mut dict = PickleMap::new();
        dict.insert("F1", with_frame);
        dict.insert("F2", without);

        let mut root = PickleMap::new();
        root.insert("scene_order", DecodedValue::List(vec![s("F1"), s("F2")]));
        root.insert("scene_dict", DecodedValue::Map(dict));
        let secret = DecodedValue::List(vec![s("_!c_F1_5"), DecodedValue::List(vec![DecodedValue::List(vec![s("prot"), ints(&[0])])])]);
        root.insert("selector_secrets", DecodedValue::List(vec![secret]));

        let rep_sel = {
            let mut e = vec![DecodedValue::Null; 6];
            e[0] = s("_scene_F1_sticks");
            e[5] = DecodedValue::List(vec![DecodedValue::List(vec![s("prot"), ints(&[0, 1])])]);
            DecodedValue::List(e)
        };
        let names_list = vec![DecodedValue::Null, rep_sel];
        let names = names_by_name(&names_list);

        let store = SettingsStore::new(181);
        let scenes = parse_scenes(&root, &names, &store.session());
        assert_eq!(scenes.len(), 1);
        let sc = &scenes[0];
        assert_eq!(sc.frame, 2);
        assert_eq!(sc.visibilities[0].1, SceneVisibility { visible: true, reps: (1 << 3) | (1 << 10), color: 4 });
        assert_eq!(sc.reps.len(), 1);
        assert_eq!(sc.reps[0].0, Rep::Sticks);
        assert_eq!(sc.colors, vec![(5, vec![ObjectAtoms { object: "prot".into(), atoms: vec![0] }])]);
    }
}
