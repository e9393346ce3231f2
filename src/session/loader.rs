//! Session loader.
//!
//! [`load_session`] decodes the stream, builds the settings store and color
//! registry, then walks the `names` list twice: once per state for molecules
//! and once for everything else. Map meshes wait for a third pass because
//! they refer to map data by name. Groups, named sets, scenes and the camera
//! are derived last.
//!
//! A failure inside one named object is logged and recorded in
//! [`LoadedSession::failures`]; only stream-level errors abort the load.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::Read;

use glam::Vec3;

use super::{
    AtomMaps, LoadOptions, Molecule, ObjectAtoms, ObjectKind, Placement, SavedScene, StateSelector,
    ViewSettings, camera_view, extract_molecule, names_by_name, parse_scenes, state_count,
};
use super::scenes::text_in;
use crate::color::{ColorRegistry, point_to_argb};
use crate::pickle::{
    DecodeStats, DecodedValue, Exclusions, PickleMap, PickleReader, SpanTable, float_in, int_in, list_in,
};
use crate::scene::{
    FrameSelection, GroupHierarchy, LabelOffset, MapRef, MeasureKind, Payload, Rep, SceneObject,
    SceneObjectBuilder, ShapeKind, Visibility, apply_bond_styles,
};
use crate::settings::{SettingMap, SettingsStore, keys, settings_from_list};
use crate::util::{BitSet, Error, Result, fix_name};

// ============================================================================
// Result types
// ============================================================================

/// A simple movie: a frame-to-state table with no scripted commands or
/// camera moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub frame_count: usize,
    /// 0-based frame shown when the session was saved
    pub current_frame: i32,
    /// 1-based state of each frame
    pub frames: Vec<usize>,
}

/// A named object that could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectFailure {
    pub name: String,
    pub kind: Option<ObjectKind>,
    pub message: String,
}

/// What a measurement object needs to be emitted again for a scene.
#[derive(Debug, Clone)]
pub(crate) struct MeasureSource {
    pub kind: MeasureKind,
    pub coords: Vec<Vec3>,
    pub offsets: Vec<Option<LabelOffset>>,
    pub settings: SettingMap,
    pub object_id: String,
}

/// Everything produced by one session load.
#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub version: i32,
    pub settings: SettingsStore,
    pub colors: ColorRegistry,
    /// Scene queue, in the order the session lists its objects
    pub objects: Vec<SceneObject>,
    pub molecules: Vec<Molecule>,
    pub groups: GroupHierarchy,
    pub visibility: Visibility,
    /// `__<name>` atom sets of every group node, plus `__all`
    pub named_sets: BTreeMap<String, BitSet>,
    /// Atoms of each selection named by `surface_carve_selection`
    pub carve_sets: BTreeMap<String, BitSet>,
    pub frame: FrameSelection,
    pub movie: Option<Movie>,
    pub view: Option<ViewSettings>,
    /// Embedded viewport, when resizing was requested
    pub preferred_size: Option<(u32, u32)>,
    pub scenes: Vec<SavedScene>,
    /// Largest state count over all molecules
    pub state_count: usize,
    pub model_count: usize,
    pub atom_count: usize,
    pub bond_count: usize,
    /// Session bytes without the excluded object spans
    pub trimmed: Option<Vec<u8>>,
    pub spans: SpanTable,
    pub notes: Vec<String>,
    pub failures: Vec<ObjectFailure>,
    pub stats: DecodeStats,

    pub(crate) atom_maps: AtomMaps,
    pub(crate) kinds: HashMap<String, ObjectKind>,
    pub(crate) measurements: HashMap<String, MeasureSource>,
    pub(crate) ids_by_name: HashMap<String, Vec<String>>,
    pub(crate) molecule_names: Vec<String>,
    pub(crate) allow_surface: bool,
    pub(crate) cache_key: Option<String>,
}

impl LoadedSession {
    fn new(version: i32, settings: SettingsStore, colors: ColorRegistry, opts: &LoadOptions) -> Self {
        Self {
            version,
            settings,
            colors,
            objects: Vec::new(),
            molecules: Vec::new(),
            groups: GroupHierarchy::new(),
            visibility: Visibility::default(),
            named_sets: BTreeMap::new(),
            carve_sets: BTreeMap::new(),
            frame: FrameSelection::All,
            movie: None,
            view: None,
            preferred_size: None,
            scenes: Vec::new(),
            state_count: 0,
            model_count: 0,
            atom_count: 0,
            bond_count: 0,
            trimmed: None,
            spans: SpanTable::new(),
            notes: Vec::new(),
            failures: Vec::new(),
            stats: DecodeStats::default(),
            atom_maps: AtomMaps::new(),
            kinds: HashMap::new(),
            measurements: HashMap::new(),
            ids_by_name: HashMap::new(),
            molecule_names: Vec::new(),
            allow_surface: opts.allow_surface,
            cache_key: opts.cache_key.clone(),
        }
    }

    /// Kind of a loaded named object.
    pub fn kind_of(&self, name: &str) -> Option<ObjectKind> {
        self.kinds.get(name).copied()
    }

    /// Every loaded named object with its kind, sorted by name.
    pub fn named_objects(&self) -> Vec<(&str, ObjectKind)> {
        let mut named: Vec<(&str, ObjectKind)> = self.kinds.iter().map(|(n, k)| (n.as_str(), *k)).collect();
        named.sort_by(|a, b| a.0.cmp(b.0));
        named
    }

    /// Placed molecule for an object name and 0-based state.
    pub fn molecule(&self, name: &str, state: usize) -> Option<&Molecule> {
        self.molecules.iter().find(|m| m.name == name && m.state == state)
    }

    /// Atom set of a group node or molecule, by plain object name.
    pub fn named_set(&self, name: &str) -> Option<&BitSet> {
        self.named_sets.get(&format!("__{}", fix_name(name)))
    }

    pub fn atom_maps(&self) -> &AtomMaps {
        &self.atom_maps
    }

    /// Shift every model index and entity selection for merging into a
    /// model set that already holds `model_delta` models and `atom_delta`
    /// atoms. Bond selections move by `bond_delta`.
    pub fn offset(&mut self, model_delta: usize, atom_delta: usize, bond_delta: usize) {
        for obj in &mut self.objects {
            obj.offset(model_delta, atom_delta);
            if bond_delta > 0 {
                obj.offset_bonds(bond_delta);
            }
        }
        if atom_delta == 0 {
            return;
        }
        for set in self.named_sets.values_mut().chain(self.carve_sets.values_mut()) {
            *set = set.shifted(atom_delta);
        }
        self.visibility.hidden = self.visibility.hidden.shifted(atom_delta);
        self.visibility.all = self.visibility.all.shifted(atom_delta);
    }

    /// Scene object ids of every node hidden in `vis`.
    pub(crate) fn occluded_ids(&self, vis: &Visibility) -> HashSet<String> {
        let mut ids = HashSet::new();
        for name in &vis.hidden_names {
            match self.ids_by_name.get(name) {
                Some(list) => ids.extend(list.iter().cloned()),
                None => {
                    ids.insert(fix_name(name));
                }
            }
        }
        ids
    }

    fn note(&mut self, note: impl Into<String>) {
        let note = note.into();
        tracing::info!("{note}");
        self.notes.push(note);
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Load a session held in memory.
pub fn load_session(bytes: &[u8], opts: &LoadOptions) -> Result<LoadedSession> {
    let mut reader = PickleReader::new(bytes).with_memo_policy(opts.memo).with_spans(opts.cache);
    let root = reader.decode()?;
    let stats = reader.stats();
    let spans = reader.into_spans();
    tracing::debug!(
        "decoded {} opcodes, {} memo hits, {} missing",
        stats.opcodes,
        stats.memo_retrieved,
        stats.memo_missing
    );
    let root = match root {
        DecodedValue::Map(map) => map,
        other => return Err(Error::invalid(format!("session root is a {}, not a map", other.kind_name()))),
    };

    let mut session = Loader::new(&root, opts)?.run()?;
    session.stats = stats;
    if opts.cache {
        let mut exclusions = Exclusions::new();
        for name in session.excluded_names() {
            if let Some(span) = spans.get(&name) {
                exclusions.exclude(span);
            }
        }
        tracing::info!("trimmed {} bytes of {} objects", exclusions.excluded_len(), exclusions.names().len());
        session.trimmed = Some(exclusions.apply(bytes));
    }
    session.spans = spans;
    Ok(session)
}

/// Load a session from a reader.
pub fn load_session_from<R: Read>(mut reader: R, opts: &LoadOptions) -> Result<LoadedSession> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_session(&bytes, opts)
}

impl LoadedSession {
    /// Objects whose bytes a trimmed copy leaves out: everything processed
    /// except molecules and measurements.
    fn excluded_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .kinds
            .iter()
            .filter(|(_, k)| !matches!(k, ObjectKind::Molecule | ObjectKind::Measurement))
            .map(|(n, _)| n.clone())
            .collect();
        names.sort();
        names
    }
}

// ============================================================================
// Loader
// ============================================================================

/// One entry of the `names` list.
struct NamedObject<'a> {
    name: String,
    hidden: bool,
    code: i32,
    kind: Option<ObjectKind>,
    data: &'a [DecodedValue],
    parent: Option<String>,
}

impl<'a> NamedObject<'a> {
    /// `None` for malformed and internal (`_`-prefixed) entries.
    fn parse(entry: &'a DecodedValue) -> Option<Self> {
        let entry = entry.as_list()?;
        let name = text_in(entry, 0)?;
        if name.starts_with('_') {
            return None;
        }
        let code = int_in(entry, 4).unwrap_or(0);
        let parent = if entry.len() >= 8 { text_in(entry, 6).filter(|p| p != " ") } else { None };
        Some(Self {
            hidden: int_in(entry, 2) != Some(1),
            kind: ObjectKind::from_code(code),
            data: list_in(entry, 5).unwrap_or_default(),
            name,
            code,
            parent,
        })
    }

    fn header(&self) -> &'a [DecodedValue] {
        list_in(self.data, 0).unwrap_or_default()
    }

    fn settings(&self) -> SettingMap {
        settings_from_list(list_in(self.header(), 8))
    }

    fn color(&self) -> i32 {
        int_in(self.header(), 2).unwrap_or(0)
    }
}

/// A map mesh or potential gadget waiting for its map data.
struct PendingMesh<'a> {
    name: String,
    data: &'a [DecodedValue],
    settings: SettingMap,
    color: i32,
}

struct Loader<'a> {
    root: &'a PickleMap,
    opts: &'a LoadOptions,
    names: &'a [DecodedValue],
    session: LoadedSession,
    all_states: bool,
    /// 1-based frame the session was saved at
    frame: i32,
    is_movie: bool,
    next_atom: usize,
    next_bond: usize,
    volumes: BTreeSet<String>,
    meshes: Vec<PendingMesh<'a>>,
    ladders: bool,
}

impl<'a> Loader<'a> {
    fn new(root: &'a PickleMap, opts: &'a LoadOptions) -> Result<Self> {
        let version = root.get("version").and_then(DecodedValue::as_i32).ok_or_else(|| Error::missing("version"))?;
        let mut settings = SettingsStore::from_global_list(version, root.list("settings").unwrap_or_default());
        if let Some(unique) = root.list("unique_settings") {
            settings.set_unique(unique);
        }
        let colors = session_colors(root, &settings);
        let mut session = LoadedSession::new(version, settings, colors, opts);
        session.note(format!("session version {version}"));
        Ok(Self {
            root,
            opts,
            names: root.list("names").unwrap_or_default(),
            session,
            all_states: false,
            frame: 0,
            is_movie: false,
            next_atom: 0,
            next_bond: 0,
            volumes: BTreeSet::new(),
            meshes: Vec::new(),
            ladders: false,
        })
    }

    fn objects(&self) -> impl Iterator<Item = NamedObject<'a>> + 'a {
        let names: &'a [DecodedValue] = self.names;
        names.iter().skip(1).filter_map(NamedObject::parse)
    }

    fn run(mut self) -> Result<LoadedSession> {
        let session = self.session.settings.session();
        self.all_states = session.boolean(keys::ALL_STATES);
        self.frame = session.int(keys::FRAME);
        let pymol_state = session.int(keys::STATE);

        self.session.state_count = self
            .objects()
            .filter(|o| o.kind == Some(ObjectKind::Molecule))
            .map(|o| state_count(o.data))
            .max()
            .unwrap_or(0);
        self.session.frame = if self.all_states {
            FrameSelection::All
        } else {
            FrameSelection::State(pymol_state.max(1) as usize - 1)
        };
        self.session.note(format!("frame={} state={pymol_state} all_states={}", self.frame, self.all_states));

        if self.opts.resize {
            self.preferred_size();
        }
        if !self.all_states {
            self.movie();
        }
        let desired = self.desired_state(pymol_state);

        // molecules, one model per state
        for j in 0..self.session.state_count {
            if desired.is_some_and(|d| d != j + 1) {
                continue;
            }
            let model = self.session.model_count;
            self.session.model_count += 1;
            for obj in self.objects().filter(|o| o.kind == Some(ObjectKind::Molecule)) {
                let span = tracing::debug_span!("molecule", name = %obj.name, state = j + 1);
                let _enter = span.enter();
                if let Err(e) = self.molecule(&obj, j, model) {
                    self.fail(&obj, e)?;
                }
            }
        }

        // everything else
        for obj in self.objects().filter(|o| o.kind != Some(ObjectKind::Molecule)) {
            let span = tracing::debug_span!("object", name = %obj.name, code = obj.code);
            let _enter = span.enter();
            if let Err(e) = self.object(&obj) {
                self.fail(&obj, e)?;
            }
        }

        if self.opts.allow_surface {
            self.meshes();
        }
        self.session.atom_count = self.next_atom;
        self.session.bond_count = self.next_bond;
        self.selections_and_scenes();
        self.finalize_visibility();
        self.view();
        Ok(self.session)
    }

    fn fail(&mut self, obj: &NamedObject<'_>, e: Error) -> Result<()> {
        if e.is_fatal() {
            return Err(e);
        }
        tracing::warn!("failed to load {}: {e}", obj.name);
        self.session.failures.push(ObjectFailure { name: obj.name.clone(), kind: obj.kind, message: e.to_string() });
        Ok(())
    }

    // ------------------------------------------------------------------
    // Session-level fields
    // ------------------------------------------------------------------

    fn preferred_size(&mut self) {
        let main = self.root.list("main").unwrap_or_default();
        let (w, h) = (int_in(main, 0).unwrap_or(0), int_in(main, 1).unwrap_or(0));
        if w > 0 && h > 0 {
            self.session.preferred_size = Some((w as u32, h as u32));
            self.session.note(format!("dimensions width={w} height={h}"));
        } else {
            self.session.note("dimensions unknown");
        }
    }

    /// `[frame_count, .., .., .., frames, commands, views]`
    fn movie(&mut self) {
        let Some(mov) = self.root.list("movie") else { return };
        let frame_count = int_in(mov, 0).unwrap_or(0);
        if frame_count <= 0 {
            return;
        }
        let raw = list_in(mov, 4).unwrap_or_default();
        let have_frames = raw.iter().any(|v| v.as_int().is_some_and(|i| i != 0));
        let have_commands = list_in(mov, 5)
            .unwrap_or_default()
            .iter()
            .any(|c| c.as_str().is_some_and(|s| s.len() > 1));
        let have_views = list_in(mov, 6)
            .unwrap_or_default()
            .iter()
            .filter_map(DecodedValue::as_list)
            .any(|v| v.len() >= 12 && v.get(1).is_some_and(|x| !x.is_null()));
        self.session.note(format!("movie frame count {frame_count}"));
        if have_frames && !have_commands && !have_views {
            self.is_movie = true;
            self.session.movie = Some(Movie {
                frame_count: frame_count as usize,
                current_frame: self.frame - 1,
                frames: raw.iter().map(|v| v.as_int().unwrap_or(0).max(0) as usize + 1).collect(),
            });
        }
    }

    /// 1-based state to load, `None` for all of them.
    fn desired_state(&mut self, pymol_state: i32) -> Option<usize> {
        if self.opts.state == StateSelector::All {
            return None;
        }
        if let Some(movie) = &self.session.movie {
            let n = match self.opts.state {
                StateSelector::Index(n) => n,
                _ => 0,
            };
            let i = if n > 0 && n <= movie.frames.len() { n } else { self.frame.max(0) as usize };
            let desired = i.checked_sub(1).and_then(|i| movie.frames.get(i).copied())?;
            self.session.frame = FrameSelection::State(desired - 1);
            return Some(desired);
        }
        match self.opts.state {
            StateSelector::Current => Some(pymol_state.max(1) as usize),
            StateSelector::Index(n) => Some(n),
            StateSelector::All => None,
        }
    }

    /// A visible object outside the saved frame switches display to all
    /// states.
    fn check_frame(&mut self, obj: &NamedObject<'_>, model_number: i32) {
        if obj.hidden || self.is_movie || self.all_states {
            return;
        }
        if self.frame > 0 && self.frame != model_number {
            tracing::debug!("{} is outside frame {}, showing all states", obj.name, self.frame);
            self.frame = model_number;
            self.all_states = true;
            self.session.frame = FrameSelection::All;
        }
    }

    // ------------------------------------------------------------------
    // Named objects
    // ------------------------------------------------------------------

    fn molecule(&mut self, obj: &NamedObject<'a>, state: usize, model: usize) -> Result<()> {
        let at = Placement {
            name: obj.name.clone(),
            state,
            model_index: model,
            first_atom: self.next_atom,
            first_bond: self.next_bond,
            hidden: obj.hidden,
        };
        let Some(extracted) = extract_molecule(obj.data, &at, &self.session.settings)? else {
            return Ok(());
        };
        self.check_frame(obj, state as i32 + 1);

        let id = fix_name(&format!("{}_{}", obj.name, state + 1));
        let mut mol = extracted.molecule;
        self.next_atom += mol.atoms.len();
        self.next_bond += mol.bonds.len();

        let s = &self.session;
        let bound = s.settings.bind(Some(&mol.settings), Some(&mol.state_settings));
        let mut builder = SceneObjectBuilder::new(id.clone(), bound, &s.colors).with_surfaces(self.opts.allow_surface);
        if let Some(key) = &self.opts.cache_key {
            builder = builder.with_cache_key(key.clone());
        }
        let bond_sets = builder.emit_molecule(&mol);
        let carve = builder.style().carve_selection.clone();
        let objects = builder.finish();
        apply_bond_styles(&mut mol, &bond_sets, &s.settings, &s.colors);

        self.ladders |= objects.iter().any(|o| matches!(o.payload, Payload::NucleicTube { ladders: true }));
        if let Some(carve) = carve {
            self.session.carve_sets.entry(carve).or_default();
        }
        let atoms = mol.atom_set();
        self.session.groups.add_group(&obj.name, obj.parent.as_deref(), ObjectKind::Molecule, !obj.hidden);
        self.session.groups.add_members(&obj.name, &atoms);

        tracing::debug!("{id}: {} atoms, {} scene objects", mol.atoms.len(), objects.len());
        self.session.objects.extend(objects);
        self.session.atom_maps.insert(id.clone(), extracted.atom_map);
        self.session.kinds.insert(obj.name.clone(), ObjectKind::Molecule);
        self.session.ids_by_name.entry(obj.name.clone()).or_default().push(id);
        if !self.session.molecule_names.contains(&obj.name) {
            self.session.molecule_names.push(obj.name.clone());
        }
        self.session.molecules.push(mol);
        Ok(())
    }

    fn object(&mut self, obj: &NamedObject<'a>) -> Result<()> {
        let Some(kind) = obj.kind else {
            self.session.note(format!("unprocessed object type {} {}", obj.code, obj.name));
            return Ok(());
        };
        if !kind.is_processed() {
            tracing::warn!("unprocessed object type {kind} {}", obj.name);
            self.session.notes.push(format!("unprocessed object type {kind} {}", obj.name));
            return Ok(());
        }
        self.check_frame(obj, self.session.state_count as i32);
        self.session.kinds.insert(obj.name.clone(), kind);
        self.session.ids_by_name.insert(obj.name.clone(), vec![fix_name(&obj.name)]);

        let mut parent = obj.parent.clone();
        match kind {
            ObjectKind::Selection => self.selection(obj),
            ObjectKind::MapData => self.map_data(obj),
            ObjectKind::MapMesh => self.pending_mesh(obj),
            ObjectKind::Measurement => self.measurement(obj)?,
            ObjectKind::Gadget => {
                if obj.name.ends_with("_e_pot") {
                    self.pending_mesh(obj);
                }
            }
            ObjectKind::Cgo => self.cgo(obj)?,
            ObjectKind::Group => {
                parent.get_or_insert_with(String::new);
            }
            _ => {}
        }
        if let Some(parent) = parent {
            self.session.groups.add_group(&obj.name, Some(&parent), kind, !obj.hidden);
        }
        Ok(())
    }

    /// Named selections become `_sele` / `_sele_<name>` groups over every state.
    fn selection(&mut self, obj: &NamedObject<'_>) {
        let id = if obj.name == "sele" { "_sele".to_string() } else { format!("_sele_{}", obj.name) };
        let mut atoms = BitSet::new();
        let entries = ObjectAtoms::parse_list(obj.data);
        self.session.atom_maps.select(&entries, 0, self.session.state_count, &mut atoms);
        tracing::debug!("selection {id}: {} atoms", atoms.cardinality());
        self.session.groups.add_group(&id, None, ObjectKind::Selection, true);
        self.session.groups.add_members(&id, &atoms);
    }

    fn map_data(&mut self, obj: &NamedObject<'_>) {
        self.volumes.insert(obj.name.clone());
        if obj.hidden {
            return;
        }
        let settings = obj.settings();
        let s = &self.session;
        let mut builder = SceneObjectBuilder::new(fix_name(&obj.name), s.settings.bind(Some(&settings), None), &s.colors);
        if let Some(key) = &self.opts.cache_key {
            builder = builder.with_cache_key(key.clone());
        }
        builder.emit_map_surface(&obj.name);
        let objects = builder.finish();
        self.session.objects.extend(objects);
    }

    fn pending_mesh(&mut self, obj: &NamedObject<'a>) {
        let gadget = obj.kind == Some(ObjectKind::Gadget);
        if obj.hidden && !gadget {
            return;
        }
        self.meshes.push(PendingMesh { name: obj.name.clone(), data: obj.data, settings: obj.settings(), color: obj.color() });
    }

    fn measurement(&mut self, obj: &NamedObject<'_>) -> Result<()> {
        if obj.hidden {
            return Ok(());
        }
        let measure = list_in(obj.data, 2)
            .and_then(|l| list_in(l, 0))
            .ok_or_else(|| Error::missing("measurement data"))?;
        let is_list = |i: usize| matches!(measure.get(i), Some(DecodedValue::List(_)));
        // distance, angle and dihedral coordinates live at 1, 4 and 6
        let (pt, n) = if is_list(1) {
            (1, 2)
        } else if is_list(4) {
            (4, 3)
        } else if is_list(6) {
            (6, 4)
        } else {
            return Ok(());
        };
        let Some(kind) = MeasureKind::from_points(n) else { return Ok(()) };
        let flat = list_in(measure, pt).unwrap_or_default();
        let coords: Vec<Vec3> = (0..flat.len() / 3)
            .map(|i| {
                Vec3::new(
                    float_in(flat, i * 3).unwrap_or(0.0),
                    float_in(flat, i * 3 + 1).unwrap_or(0.0),
                    float_in(flat, i * 3 + 2).unwrap_or(0.0),
                )
            })
            .collect();
        let offsets: Vec<Option<LabelOffset>> = match list_in(measure, 8) {
            Some(list) => list
                .iter()
                .map(|v| {
                    let v = v.as_list()?;
                    let mut off = [0f32; 7];
                    for (i, o) in off.iter_mut().enumerate() {
                        *o = float_in(v, i).unwrap_or(0.0);
                    }
                    Some(off)
                })
                .collect(),
            None => Vec::new(),
        };
        let have_labels = measure.len() > 8;
        let reps = rep_mask(list_in(obj.header(), 3));

        let settings = obj.settings();
        let id = fix_name(&obj.name);
        let s = &self.session;
        let mut builder = SceneObjectBuilder::new(id.clone(), s.settings.bind(Some(&settings), None), &s.colors);
        let emitted = builder.emit_measurements(kind, &coords, &offsets, reps, obj.color(), have_labels);
        let objects = builder.finish();
        tracing::debug!("{}: {emitted} measurements", obj.name);
        self.session.objects.extend(objects);
        self.session
            .measurements
            .insert(obj.name.clone(), MeasureSource { kind, coords, offsets, settings, object_id: id });
        Ok(())
    }

    fn cgo(&mut self, obj: &NamedObject<'_>) -> Result<()> {
        if obj.hidden {
            return Ok(());
        }
        let ops: Vec<f32> = list_in(obj.data, 2)
            .and_then(|l| list_in(l, 0))
            .ok_or_else(|| Error::missing("CGO stream"))?
            .iter()
            .map(|v| v.as_f32().unwrap_or(0.0))
            .collect();
        let settings = obj.settings();
        let s = &self.session;
        let argb = s.colors.lookup(obj.color());
        let mut builder = SceneObjectBuilder::new(fix_name(&obj.name), s.settings.bind(Some(&settings), None), &s.colors);
        builder.emit_cgo(&obj.name, ops, argb);
        let objects = builder.finish();
        self.session.objects.extend(objects);
        self.session.note(format!("CGO {}", fix_name(&obj.name)));
        Ok(())
    }

    /// Meshes and potential gadgets, once every map is known.
    fn meshes(&mut self) {
        let pending = std::mem::take(&mut self.meshes);
        for mesh in pending {
            let is_mep = mesh.name.ends_with("_e_pot");
            let (map_name, surface) = if is_mep {
                let root = &mesh.name[..mesh.name.len() - 3];
                let chg = format!("{root}chg");
                let Some(surface) = self.session.ids_by_name.get(&chg).and_then(|ids| ids.first()).cloned() else {
                    continue;
                };
                (format!("{root}map"), Some(surface))
            } else {
                let name = list_in(mesh.data, 2)
                    .and_then(|l| list_in(l, 0))
                    .and_then(|l| text_in(l, 1));
                let Some(name) = name else { continue };
                (name, None)
            };
            if !self.volumes.contains(&map_name) {
                tracing::debug!("{} refers to missing map {map_name}", mesh.name);
                continue;
            }
            let s = &self.session;
            let mut builder =
                SceneObjectBuilder::new(fix_name(&mesh.name), s.settings.bind(Some(&mesh.settings), None), &s.colors);
            if let Some(key) = &self.opts.cache_key {
                builder = builder.with_cache_key(key.clone());
            }
            builder.emit_mesh(MapRef { map_name: map_name.clone(), surface }, mesh.color, is_mep);
            let objects = builder.finish();
            self.session.objects.extend(objects);
            self.session.note(format!("object {} references map {map_name}", mesh.name));
        }
    }

    // ------------------------------------------------------------------
    // Finishing passes
    // ------------------------------------------------------------------

    fn selections_and_scenes(&mut self) {
        let by_name = names_by_name(self.names);
        let scenes = parse_scenes(self.root, &by_name, &self.session.settings.session());
        for scene in &scenes {
            self.session.notes.push(format!("scene: {}", scene.name));
        }
        self.session.scenes = scenes;

        let carve: Vec<String> = self.session.carve_sets.keys().cloned().collect();
        for name in carve {
            let entries = by_name
                .get(&name)
                .and_then(|e| list_in(e, 5))
                .map(ObjectAtoms::parse_list)
                .unwrap_or_default();
            let mut atoms = BitSet::new();
            self.session.atom_maps.select(&entries, 0, self.session.state_count, &mut atoms);
            self.session.carve_sets.insert(name, atoms);
        }
    }

    /// Visibility pass, named sets, and the trailing hidden-atoms object.
    fn finalize_visibility(&mut self) {
        let vis = self.session.groups.compute_visibility();
        let mut named: BTreeMap<String, BitSet> = self
            .session
            .groups
            .iter()
            .map(|node| (format!("__{}", fix_name(&node.name)), node.members().clone()))
            .collect();
        named.insert("__all".to_string(), vis.all.clone());
        self.session.named_sets = named;

        let occluded = self.session.occluded_ids(&vis);
        for obj in &mut self.session.objects {
            if occluded.contains(&obj.object_id) {
                obj.visible = false;
            }
        }
        if !vis.hidden.is_empty() {
            self.session.objects.push(SceneObject::atoms(ShapeKind::Hidden, "hidden", vis.hidden.clone(), Payload::None));
        }
        self.session.visibility = vis;
    }

    fn view(&mut self) {
        let Some(view) = self.root.list("view") else { return };
        let s = self.session.settings.session();
        self.session.view = Some(ViewSettings {
            view: camera_view(view, true, &s),
            background: self.session.colors.background(),
            translucent: s.int(keys::TRANSPARENCY_MODE) != 2,
            round_helices: s.boolean(keys::CARTOON_ROUND_HELICES),
            fancy_helices: s.boolean(keys::CARTOON_FANCY_HELICES),
            rockets: s.boolean(keys::CARTOON_CYLINDRICAL_HELICES),
            ladders: self.ladders,
        });
    }
}

/// Registry with the session's extra colors and background.
///
/// Entries are `[name, index, rgb, .., clamped, rgb_clamped]`; the clamped
/// color is used when `clamp_colors` is on and the entry is flagged.
fn session_colors(root: &PickleMap, settings: &SettingsStore) -> ColorRegistry {
    let mut colors = ColorRegistry::new();
    let session = settings.session();
    let clamp = session.boolean(keys::CLAMP_COLORS);
    for c in root.list("colors").unwrap_or_default().iter().filter_map(DecodedValue::as_list) {
        let Some(index) = int_in(c, 1) else { continue };
        let pos = if clamp && c.len() >= 6 && int_in(c, 4).unwrap_or(0) != 0 { 5 } else { 2 };
        let argb = match c.get(pos) {
            Some(DecodedValue::Int(v)) => *v as u32,
            Some(v) => v.point_at(0).map(point_to_argb).unwrap_or(0),
            None => 0,
        };
        colors.register(index, argb);
    }
    let bg = match session.resolve(keys::BG_RGB).map(|s| &s.value) {
        Some(DecodedValue::Int(i)) => colors.lookup(*i as i32),
        _ => point_to_argb(session.point(keys::BG_RGB)),
    };
    colors.set_background(bg);
    if colors.extra_len() > 0 {
        tracing::debug!("{} session colors", colors.extra_len());
    }
    colors
}

/// Representation mask from a per-rep 0/1 list.
fn rep_mask(list: Option<&[DecodedValue]>) -> u32 {
    list.unwrap_or_default()
        .iter()
        .take(Rep::SOURCE_COUNT)
        .enumerate()
        .filter(|(_, v)| v.as_int() == Some(1))
        .fold(0, |m, (i, _)| m | (1 << i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> DecodedValue {
        DecodedValue::Bytes(v.as_bytes().to_vec())
    }

    fn floats(v: &[f32]) -> DecodedValue {
        DecodedValue::List(v.iter().map(|&f| DecodedValue::Float(f as f64)).collect())
    }

    fn ints(v: &[i64]) -> DecodedValue {
        DecodedValue::List(v.iter().map(|&i| DecodedValue::Int(i)).collect())
    }

    fn entry(name: &str, visible: bool, code: i64, data: DecodedValue, parent: &str) -> DecodedValue {
        DecodedValue::List(vec![
            s(name),
            DecodedValue::Int(0),
            DecodedValue::Int(visible as i64),
            DecodedValue::Null,
            DecodedValue::Int(code),
            data,
            s(parent),
            DecodedValue::Null,
        ])
    }

    fn root(names: Vec<DecodedValue>) -> PickleMap {
        let mut all = vec![DecodedValue::Null];
        all.extend(names);
        let mut root = PickleMap::new();
        root.insert("version", DecodedValue::Int(181));
        root.insert("settings", DecodedValue::List(Vec::new()));
        root.insert("names", DecodedValue::List(all));
        root
    }

    fn header(color: i64, reps: &[i64]) -> DecodedValue {
        let mut h = vec![DecodedValue::Null; 9];
        h[2] = DecodedValue::Int(color);
        h[3] = ints(reps);
        DecodedValue::List(h)
    }

    #[test]
    fn test_rep_mask() {
        let l = [DecodedValue::Int(0), DecodedValue::Int(1), DecodedValue::Int(0), DecodedValue::Int(1)];
        assert_eq!(rep_mask(Some(&l)), 0b1010);
        assert_eq!(rep_mask(None), 0);
    }

    #[test]
    fn test_measurement_object() {
        let mut measure = vec![DecodedValue::Null; 9];
        measure[1] = floats(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        measure[8] = DecodedValue::List(vec![floats(&[1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0])]);
        let mut dashes = vec![0i64; 21];
        dashes[Rep::Dashes.index()] = 1;
        let data = DecodedValue::List(vec![
            header(4, &dashes),
            DecodedValue::Null,
            DecodedValue::List(vec![DecodedValue::List(measure)]),
        ]);
        let root = root(vec![entry("dist01", true, 4, data, " ")]);
        let opts = LoadOptions::default();
        let session = Loader::new(&root, &opts).unwrap().run().unwrap();
        let m: Vec<_> = session.objects.iter().filter(|o| o.kind == ShapeKind::Measurement).collect();
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].object_id, "dist01");
        assert_eq!(session.kind_of("dist01"), Some(ObjectKind::Measurement));
        assert!(session.measurements.contains_key("dist01"));
    }

    #[test]
    fn test_hidden_group_occludes_children() {
        let cgo = DecodedValue::List(vec![
            header(0, &[]),
            DecodedValue::Null,
            DecodedValue::List(vec![floats(&[1.0, 2.0])]),
        ]);
        let group = DecodedValue::List(vec![header(0, &[])]);
        let root = root(vec![entry("folder", false, 12, group, " "), entry("arrows", true, 6, cgo, "folder")]);
        let opts = LoadOptions::default();
        let session = Loader::new(&root, &opts).unwrap().run().unwrap();
        let cgo: Vec<_> = session.objects.iter().filter(|o| o.kind == ShapeKind::Cgo).collect();
        assert_eq!(cgo.len(), 1);
        assert!(!cgo[0].visible);
        assert_eq!(session.groups.parent_of("arrows"), Some("folder"));
        assert!(session.visibility.is_hidden("arrows"));
        assert!(session.named_sets.contains_key("__folder"));
        assert!(session.notes.iter().any(|n| n == "CGO arrows"));
    }

    #[test]
    fn test_mesh_needs_map() {
        let mesh_state = DecodedValue::List(vec![DecodedValue::Null, s("density")]);
        let mesh = DecodedValue::List(vec![
            header(5, &[]),
            DecodedValue::Null,
            DecodedValue::List(vec![mesh_state]),
        ]);
        let map = DecodedValue::List(vec![header(0, &[])]);

        let opts = LoadOptions::default();
        let alone = root(vec![entry("m1", true, 3, mesh.clone(), " ")]);
        let session = Loader::new(&alone, &opts).unwrap().run().unwrap();
        assert!(session.objects.iter().all(|o| o.kind != ShapeKind::MapMesh));

        let both = root(vec![entry("density", true, 2, map, " "), entry("m1", true, 3, mesh, " ")]);
        let session = Loader::new(&both, &opts).unwrap().run().unwrap();
        let kinds: Vec<_> = session.objects.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![ShapeKind::MapSurface, ShapeKind::MapMesh]);

        let session = Loader::new(&both, &LoadOptions::new().with_surfaces(false)).unwrap().run().unwrap();
        assert!(session.objects.iter().all(|o| o.kind != ShapeKind::MapMesh));
    }

    #[test]
    fn test_offset_shifts_named_sets() {
        let group = DecodedValue::List(vec![header(0, &[])]);
        let root = root(vec![entry("folder", true, 12, group, " ")]);
        let opts = LoadOptions::default();
        let mut session = Loader::new(&root, &opts).unwrap().run().unwrap();
        session.named_sets.insert("__x".into(), [0usize, 2].into_iter().collect());
        session.offset(1, 10, 0);
        let shifted: Vec<usize> = session.named_sets["__x"].iter().collect();
        assert_eq!(shifted, vec![10, 12]);
    }

    #[test]
    fn test_unknown_kind_noted() {
        let root = root(vec![entry("thing", true, 42, DecodedValue::Null, " ")]);
        let opts = LoadOptions::default();
        let session = Loader::new(&root, &opts).unwrap().run().unwrap();
        assert!(session.objects.is_empty());
        assert!(session.notes.iter().any(|n| n.contains("unprocessed object type 42 thing")));
    }

    #[test]
    fn test_simple_movie_redirects_state() {
        let mut root = root(Vec::new());
        root.insert(
            "movie",
            DecodedValue::List(vec![
                DecodedValue::Int(3),
                DecodedValue::Null,
                DecodedValue::Null,
                DecodedValue::Null,
                ints(&[0, 2, 1]),
                DecodedValue::List(vec![s(""), s("")]),
                DecodedValue::List(Vec::new()),
            ]),
        );
        let opts = LoadOptions::new().with_state(StateSelector::Index(2));
        let session = Loader::new(&root, &opts).unwrap().run().unwrap();
        let movie = session.movie.clone().unwrap();
        assert_eq!(movie.frames, vec![1, 3, 2]);
        assert_eq!(session.frame, FrameSelection::State(2));
    }

    #[test]
    fn test_session_colors() {
        let mut root = root(Vec::new());
        root.insert(
            "colors",
            DecodedValue::List(vec![DecodedValue::List(vec![s("mine"), DecodedValue::Int(5300), floats(&[1.0, 0.0, 0.0])])]),
        );
        let store = SettingsStore::new(181);
        let colors = session_colors(&root, &store);
        assert_eq!(colors.lookup(5300), 0xFFFF_0000);
    }
}
