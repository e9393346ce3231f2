//! Scene object emission.
//!
//! A [`SceneObjectBuilder`] is created per named object with a settings view
//! bound to that object (and state). It resolves the object's style once and
//! then turns molecules, measurements, graphics and maps into
//! [`SceneObject`]s, appended in call order.
//!
//! For a molecule the order is fixed:
//! 1. one [`ShapeKind::AtomColors`] object covering every atom
//! 2. lines, then sticks, as bond selections
//! 3. representation cleanup ([`fix_reps`]) and one spacefill object per radius
//! 4. every other representation in index order

use glam::Vec3;

use super::{
    AtomStyle, CgoData, Label, LabelFont, LabelOffset, Lighting, MapRef, Measurement, MeasureKind, Payload,
    PuttyParams, RadiusGroups, Rep, RepSets, SceneObject, Selection, ShapeKind, SurfaceParams, fix_reps,
    label_offset,
};
use crate::color::{COLOR_BACK, COLOR_FRONT, ColorRegistry};
use crate::session::{AtomFlags, BondStyle, Molecule, SsKind, Valence};
use crate::settings::{BoundSettings, ColorValue, Setting, SettingKey, SettingsStore, keys};
use crate::util::BitSet;

/// Surface modes.
const SURFACE_BY_FLAGS: i32 = 0;
const SURFACE_HEAVY_ATOMS: i32 = 2;
const SURFACE_VIS_ONLY: i32 = 3;
const SURFACE_VIS_HEAVY_ONLY: i32 = 4;

/// Per-object style, resolved once when the builder is created.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectStyle {
    pub transparency: f32,
    pub dot_color: ColorValue,
    pub nonbonded_size: f32,
    pub nonbonded_translucency: f32,
    pub sphere_scale: f32,
    pub sphere_color: ColorValue,
    pub sphere_translucency: f32,
    pub cartoon_color: ColorValue,
    pub cartoon_translucency: f32,
    pub ribbon_color: ColorValue,
    pub ribbon_translucency: f32,
    pub stick_translucency: f32,
    pub cartoon_ladder_mode: bool,
    /// Helices drawn as cylinders
    pub cartoon_rockets: bool,
    pub surface_mode: i32,
    pub surface_color: ColorValue,
    /// Solvent-accessible rather than solvent-excluded surface
    pub solvent_accessible: bool,
    pub mesh_width: f32,
    pub carve_selection: Option<String>,
    /// Object label position plus the global one
    pub label_position: Vec3,
    pub label_color: i32,
    pub label_size: f32,
    pub label_font_id: i32,
}

impl ObjectStyle {
    pub fn resolve(s: &BoundSettings<'_>) -> Self {
        let carve = s.string(keys::SURFACE_CARVE_SELECTION).trim().to_string();
        let object_label = s
            .object_setting(keys::LABEL_POSITION)
            .and_then(Setting::point)
            .unwrap_or(Vec3::ZERO);
        let global_label = s.store().session().point(keys::LABEL_POSITION);
        Self {
            transparency: s.float(keys::TRANSPARENCY),
            dot_color: s.color(keys::DOT_COLOR),
            nonbonded_size: s.float(keys::NONBONDED_SIZE),
            nonbonded_translucency: s.float(keys::NONBONDED_TRANSPARENCY),
            sphere_scale: s.float(keys::SPHERE_SCALE),
            sphere_color: s.color(keys::SPHERE_COLOR),
            sphere_translucency: s.float(keys::SPHERE_TRANSPARENCY),
            cartoon_color: s.color(keys::CARTOON_COLOR),
            cartoon_translucency: s.float(keys::CARTOON_TRANSPARENCY),
            ribbon_color: s.color(keys::RIBBON_COLOR),
            ribbon_translucency: s.float(keys::RIBBON_TRANSPARENCY),
            stick_translucency: s.float(keys::STICK_TRANSPARENCY),
            cartoon_ladder_mode: s.boolean(keys::CARTOON_LADDER_MODE),
            cartoon_rockets: s.boolean(keys::CARTOON_CYLINDRICAL_HELICES),
            surface_mode: s.int(keys::SURFACE_MODE),
            surface_color: s.color(keys::SURFACE_COLOR),
            solvent_accessible: s.boolean(keys::SURFACE_SOLVENT),
            mesh_width: s.float(keys::MESH_WIDTH),
            carve_selection: (!carve.is_empty()).then_some(carve),
            label_position: object_label + global_label,
            label_color: s.int(keys::LABEL_COLOR),
            label_size: s.float(keys::LABEL_SIZE),
            label_font_id: s.int(keys::LABEL_FONT_ID),
        }
    }

    pub fn font(&self) -> LabelFont {
        LabelFont::from_id(self.label_font_id, self.label_size)
    }
}

/// Which unique setting overrides a per-atom style array.
#[derive(Debug, Clone, Copy)]
struct StyleKeys {
    color: Option<(SettingKey, ColorValue)>,
    translucency: Option<(SettingKey, f32)>,
    size: Option<SettingKey>,
    size_value: f32,
    factor: f32,
}

impl StyleKeys {
    const fn plain() -> Self {
        Self { color: None, translucency: None, size: None, size_value: 0.0, factor: 0.0 }
    }
}

/// Bond sets used by the line and stick objects of one molecule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondSets {
    pub lines: BitSet,
    /// Stick bonds that are not also line bonds
    pub sticks: BitSet,
}

/// Emits the scene objects of one named object.
pub struct SceneObjectBuilder<'a> {
    settings: BoundSettings<'a>,
    colors: &'a ColorRegistry,
    style: ObjectStyle,
    object_id: String,
    allow_surface: bool,
    cache_key: Option<String>,
    objects: Vec<SceneObject>,
}

impl<'a> SceneObjectBuilder<'a> {
    pub fn new(object_id: impl Into<String>, settings: BoundSettings<'a>, colors: &'a ColorRegistry) -> Self {
        Self {
            style: ObjectStyle::resolve(&settings),
            settings,
            colors,
            object_id: object_id.into(),
            allow_surface: true,
            cache_key: None,
            objects: Vec::new(),
        }
    }

    pub fn with_surfaces(mut self, allow: bool) -> Self {
        self.allow_surface = allow;
        self
    }

    /// Key of the external volumetric cache that surfaces and meshes use.
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    pub fn style(&self) -> &ObjectStyle {
        &self.style
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Finish and hand over the queued objects.
    pub fn finish(self) -> Vec<SceneObject> {
        self.objects
    }

    fn push(&mut self, obj: SceneObject) -> &mut SceneObject {
        tracing::trace!("{}: {} ({} entities)", self.object_id, obj.kind, obj.selection.len());
        self.objects.push(obj);
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    fn atoms(&self, kind: ShapeKind, bs: BitSet, payload: Payload) -> SceneObject {
        SceneObject::atoms(kind, self.object_id.clone(), bs, payload)
    }

    /// Packed color for an explicitly set color, `None` for "use atom color".
    fn explicit_color(&self, c: ColorValue) -> Option<u32> {
        match c {
            ColorValue::Index(i) if i >= 0 => Some(self.colors.resolve(i)),
            ColorValue::Index(_) => None,
            ColorValue::Argb(argb) => Some(argb),
        }
    }

    // ------------------------------------------------------------------
    // Molecules
    // ------------------------------------------------------------------

    /// Emit every object for a freshly placed molecule.
    ///
    /// Returns the line and stick bond sets, which [`apply_bond_styles`]
    /// needs once the builder is finished.
    pub fn emit_molecule(&mut self, mol: &Molecule) -> BondSets {
        let all = mol.atom_set();
        let mut colors = vec![0u32; mol.first_atom];
        colors.extend(mol.atoms.iter().map(|a| self.colors.resolve(a.record.color)));
        let mut base = self.atoms(ShapeKind::AtomColors, all, Payload::AtomColors(colors));
        base.model_index = Some(mol.model_index);
        self.push(base);

        let allow = self.allow_surface && !mol.hidden;
        let saved = std::mem::replace(&mut self.allow_surface, allow);
        let bonds = self.emit_shapes(mol, mol.reps.clone());
        self.allow_surface = saved;
        bonds
    }

    /// Emit shape objects for `reps` restricted to `mol`.
    ///
    /// Used both for the initial load and when regenerating a saved scene.
    pub fn emit_shapes(&mut self, mol: &Molecule, mut reps: RepSets) -> BondSets {
        let all = mol.atom_set();
        for rep in Rep::ALL {
            reps.get_mut(rep).and(&all);
        }
        let mut bonds = BondSets::default();

        let lines = mol.bonds_within(reps.get(Rep::Lines));
        if !lines.is_empty() {
            let mut obj = SceneObject::new(ShapeKind::Lines, self.object_id.clone(), Selection::Bonds(lines.clone()), Payload::None)
                .with_size(self.settings.float(keys::LINE_WIDTH) / 15.0);
            obj.argb = self.explicit_color(self.settings.color(keys::LINE_COLOR));
            self.push(obj);
        }
        let sticks = mol.bonds_within(reps.get(Rep::Sticks));
        if !sticks.is_empty() {
            let mut obj = SceneObject::new(ShapeKind::Sticks, self.object_id.clone(), Selection::Bonds(sticks.clone()), Payload::None)
                .with_size(self.settings.float(keys::STICK_RADIUS) * 2.0)
                .with_translucency(self.style.stick_translucency);
            obj.argb = self.explicit_color(self.settings.color(keys::STICK_COLOR));
            self.push(obj);
        }
        bonds.sticks = sticks;
        bonds.sticks.and_not(&lines);
        bonds.lines = lines;

        let groups = fix_reps(mol, &mut reps, &self.settings);
        self.emit_spacefill(groups, mol.model_index);

        for rep in Rep::ALL {
            match rep {
                Rep::Lines | Rep::Sticks => continue,
                Rep::Surface | Rep::Mesh => {
                    if !self.allow_surface {
                        continue;
                    }
                    let bs = reps.get_mut(rep);
                    match self.style.surface_mode {
                        SURFACE_BY_FLAGS => bs.and_not(&mol.atoms_with(AtomFlags::NO_SURFACE)),
                        SURFACE_HEAVY_ATOMS | SURFACE_VIS_HEAVY_ONLY => {
                            bs.and_not(&mol.atoms_with(AtomFlags::HYDROGEN))
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
            let bs = reps.get(rep).clone();
            self.emit_rep(mol, rep, bs);
        }
        bonds
    }

    fn emit_spacefill(&mut self, groups: RadiusGroups, model: usize) {
        for (r, bs) in groups {
            let mut obj = self.atoms(ShapeKind::Spacefill, bs, Payload::None).with_size(r);
            obj.model_index = Some(model);
            self.push(obj);
        }
    }

    fn emit_rep(&mut self, mol: &Molecule, rep: Rep, mut bs: BitSet) {
        if bs.is_empty() {
            return;
        }
        let st = self.style.clone();
        match rep {
            Rep::Nonbonded => {
                bs.and(&mol.atoms_with(AtomFlags::NON_BONDED));
                if bs.is_empty() {
                    return;
                }
                let sk = StyleKeys {
                    translucency: Some((keys::NONBONDED_TRANSPARENCY, st.nonbonded_translucency)),
                    size_value: st.nonbonded_size,
                    factor: 0.5,
                    ..StyleKeys::plain()
                };
                self.emit_styled(mol, ShapeKind::Stars, bs, sk);
            }
            Rep::Spheres | Rep::NbSpheres => {
                let sk = StyleKeys {
                    color: Some((keys::SPHERE_COLOR, st.sphere_color)),
                    translucency: Some((keys::SPHERE_TRANSPARENCY, st.sphere_translucency)),
                    size: Some(keys::SPHERE_SCALE),
                    size_value: st.sphere_scale,
                    factor: 1.0,
                };
                self.emit_styled(mol, ShapeKind::Balls, bs, sk);
            }
            Rep::Ellipsoid => {
                let sk = StyleKeys {
                    color: Some((keys::ELLIPSOID_COLOR, self.settings.color(keys::ELLIPSOID_COLOR))),
                    translucency: Some((keys::ELLIPSOID_TRANSPARENCY, self.settings.float(keys::ELLIPSOID_TRANSPARENCY))),
                    size: Some(keys::ELLIPSOID_SCALE),
                    size_value: self.settings.float(keys::ELLIPSOID_SCALE),
                    factor: 50.0,
                };
                self.emit_styled(mol, ShapeKind::Ellipsoids, bs, sk);
            }
            Rep::Dots => {
                let sk = StyleKeys {
                    color: Some((keys::DOT_COLOR, st.dot_color)),
                    size: Some(keys::SPHERE_SCALE),
                    size_value: st.sphere_scale,
                    factor: 1.0,
                    ..StyleKeys::plain()
                };
                self.emit_styled(mol, ShapeKind::Dots, bs, sk);
            }
            Rep::Surface => self.emit_surface(mol, bs),
            Rep::Mesh => {
                let style = self.unique_style(mol, &bs, self.surface_keys());
                let mut obj = self
                    .atoms(ShapeKind::Mesh, bs, Payload::Style(style))
                    .with_size(self.settings.float(keys::SOLVENT_RADIUS))
                    .with_translucency(st.transparency);
                obj.model_index = Some(mol.model_index);
                obj.cache_key = self.cache_key.clone();
                self.push(obj);
            }
            Rep::Labels => {
                bs.and(&mol.atoms_with(AtomFlags::LABELED));
                if bs.is_empty() {
                    return;
                }
                let labels = bs.iter().filter_map(|g| self.label_for(mol, g)).collect();
                self.push(self.atoms(ShapeKind::Labels, bs, Payload::Labels(labels)));
            }
            Rep::Cartoon => {
                let helix = if st.cartoon_rockets { keys::CARTOON_HELIX_RADIUS } else { keys::CARTOON_OVAL_LENGTH };
                self.emit_cartoon(mol, &bs, SsKind::Helix, helix);
                self.emit_cartoon(mol, &bs, SsKind::Sheet, keys::CARTOON_RECT_LENGTH);
                self.emit_cartoon(mol, &bs, SsKind::Turn, keys::CARTOON_LOOP_RADIUS);
                self.emit_cartoon(mol, &bs, SsKind::Loop, keys::CARTOON_LOOP_RADIUS);
            }
            Rep::Putty => {
                let s = &self.settings;
                let params = PuttyParams {
                    quality: s.float(keys::CARTOON_PUTTY_QUALITY),
                    radius: s.float(keys::CARTOON_PUTTY_RADIUS),
                    range: s.float(keys::CARTOON_PUTTY_RANGE),
                    scale_min: s.float(keys::CARTOON_PUTTY_SCALE_MIN),
                    scale_max: s.float(keys::CARTOON_PUTTY_SCALE_MAX),
                    scale_power: s.float(keys::CARTOON_PUTTY_SCALE_POWER),
                    transform: s.int(keys::CARTOON_PUTTY_TRANSFORM),
                };
                let obj = self
                    .atoms(ShapeKind::Putty, bs, Payload::Putty(params))
                    .with_translucency(st.cartoon_translucency);
                self.push(obj);
            }
            Rep::Trace => {
                self.split_nucleic(mol, &mut bs, true);
                if bs.is_empty() {
                    return;
                }
                let sk = StyleKeys { color: Some((keys::CARTOON_COLOR, st.cartoon_color)), ..StyleKeys::plain() };
                let r = self.settings.float(keys::CARTOON_TUBE_RADIUS);
                let obj = self.emit_styled(mol, ShapeKind::Trace, bs, sk);
                obj.size = Some(r * 2.0);
                obj.translucency = st.cartoon_translucency;
            }
            Rep::Ribbon => {
                let s = &self.settings;
                let as_trace = s.float(keys::RIBBON_SAMPLING) > 1.0;
                let mut r = s.float(keys::RIBBON_RADIUS) * 2.0;
                if r == 0.0 {
                    let ray_scale = s.float(keys::RAY_PIXEL_SCALE);
                    let scale = if as_trace {
                        1.0
                    } else if ray_scale <= 1.0 {
                        0.5
                    } else {
                        ray_scale
                    };
                    r = s.float(keys::RIBBON_WIDTH) * scale * 0.1;
                }
                let kind = if as_trace { ShapeKind::Trace } else { ShapeKind::Backbone };
                let sk = StyleKeys { color: Some((keys::RIBBON_COLOR, st.ribbon_color)), ..StyleKeys::plain() };
                let obj = self.emit_styled(mol, kind, bs, sk);
                obj.size = Some(r);
                obj.translucency = st.ribbon_translucency;
            }
            Rep::Dashes
            | Rep::Cell
            | Rep::Cgo
            | Rep::Callback
            | Rep::Extent
            | Rep::Slice
            | Rep::Angles
            | Rep::Dihedrals
            | Rep::Volume => {
                tracing::debug!("{}: representation {rep} not emitted", self.object_id);
            }
            Rep::Lines | Rep::Sticks => {}
        }
    }

    fn surface_keys(&self) -> StyleKeys {
        StyleKeys {
            color: Some((keys::SURFACE_COLOR, self.style.surface_color)),
            translucency: Some((keys::TRANSPARENCY, self.style.transparency)),
            ..StyleKeys::plain()
        }
    }

    fn emit_surface(&mut self, mol: &Molecule, bs: BitSet) {
        let st = &self.style;
        let lighting = if self.settings.boolean(keys::TWO_SIDED_LIGHTING) {
            Lighting::FullyLit
        } else {
            Lighting::FrontLit
        };
        let params = SurfaceParams {
            lighting,
            only: matches!(st.surface_mode, SURFACE_VIS_ONLY | SURFACE_VIS_HEAVY_ONLY),
            carve_selection: st.carve_selection.clone(),
            carve_cutoff: self.settings.float(keys::SURFACE_CARVE_CUTOFF),
            style: self.unique_style(mol, &bs, self.surface_keys()),
        };
        let sign = if st.solvent_accessible { -1.0 } else { 1.0 };
        let mut obj = self
            .atoms(ShapeKind::Surface, bs, Payload::Surface(params))
            .with_size(self.settings.float(keys::SOLVENT_RADIUS) * sign)
            .with_translucency(st.transparency);
        obj.argb = self.explicit_color(st.surface_color);
        obj.model_index = Some(mol.model_index);
        obj.cache_key = self.cache_key.clone();
        self.push(obj);
    }

    fn emit_cartoon(&mut self, mol: &Molecule, cartoon: &BitSet, ss: SsKind, size_key: SettingKey) {
        let mut bs = mol.ss_atoms[ss.index()].clone();
        bs.and(cartoon);
        if bs.is_empty() {
            return;
        }
        if ss == SsKind::Loop {
            self.split_nucleic(mol, &mut bs, false);
            if bs.is_empty() {
                return;
            }
        }
        let sk = StyleKeys { color: Some((keys::CARTOON_COLOR, self.style.cartoon_color)), ..StyleKeys::plain() };
        let size = self.settings.float(size_key) * 2.0;
        let translucency = self.style.cartoon_translucency;
        let obj = self.emit_styled(mol, ShapeKind::Cartoon, bs, sk);
        obj.size = Some(size);
        obj.translucency = translucency;
    }

    /// Move nucleic-acid atoms of `bs` into their own tube cartoon.
    fn split_nucleic(&mut self, mol: &Molecule, bs: &mut BitSet, from_trace: bool) {
        let mut nuc = mol.atoms_with(AtomFlags::NUCLEIC);
        nuc.and(bs);
        if nuc.is_empty() {
            return;
        }
        bs.and_not(&nuc);
        let ladders = from_trace && self.style.cartoon_ladder_mode;
        let obj = self
            .atoms(ShapeKind::Cartoon, nuc, Payload::NucleicTube { ladders })
            .with_size(self.settings.float(keys::CARTOON_TUBE_RADIUS) * 2.0)
            .with_translucency(self.style.cartoon_translucency);
        self.push(obj);
    }

    fn emit_styled(&mut self, mol: &Molecule, kind: ShapeKind, bs: BitSet, sk: StyleKeys) -> &mut SceneObject {
        let style = self.unique_style(mol, &bs, sk);
        let obj = self.atoms(kind, bs, Payload::Style(style));
        self.push(obj)
    }

    /// Per-atom color, translucency and size with unique overrides applied.
    fn unique_style(&self, mol: &Molecule, bs: &BitSet, sk: StyleKeys) -> AtomStyle {
        let store = self.settings.store();
        let n = bs.cardinality();
        let mut style = AtomStyle {
            colors: sk.color.map(|_| Vec::with_capacity(n)),
            translucency: sk.translucency.map(|_| Vec::with_capacity(n)),
            sizes: Vec::with_capacity(n),
        };
        for g in bs.iter() {
            let uid = mol.atom(g).and_then(|a| a.unique_id());
            if let (Some(colors), Some((key, fallback))) = (style.colors.as_mut(), sk.color) {
                let c = if store.has_unique(uid, key) {
                    ColorValue::Index(store.unique_float(uid, key, 0.0) as i32)
                } else {
                    fallback
                };
                colors.push(match c {
                    ColorValue::Index(i) if i > 0 => Some(self.colors.resolve(i)),
                    ColorValue::Index(_) => None,
                    ColorValue::Argb(argb) => Some(argb),
                });
            }
            if let (Some(trans), Some((key, fallback))) = (style.translucency.as_mut(), sk.translucency) {
                trans.push(store.unique_float(uid, key, fallback));
            }
            let size = match sk.size {
                Some(key) => store.unique_float(uid, key, sk.size_value),
                None => sk.size_value,
            };
            style.sizes.push(size * sk.factor);
        }
        style
    }

    /// Label for global atom `g`, `None` when the atom has no label text.
    pub fn label_for(&self, mol: &Molecule, g: usize) -> Option<Label> {
        let atom = mol.atom(g)?;
        if !atom.has(AtomFlags::LABELED) {
            return None;
        }
        let uid = atom.unique_id();
        let store = self.settings.store();
        let mut color = store.unique_float(uid, keys::LABEL_COLOR, self.style.label_color as f32) as i32;
        if color != COLOR_FRONT && color != COLOR_BACK && color < 0 {
            color = atom.record.color;
        }
        let offset: LabelOffset = match atom.label_offset {
            Some(o) => o,
            None => {
                let p = store
                    .unique_point(uid, keys::LABEL_POSITION)
                    .map_or(self.style.label_position, |p| p + self.style.label_position);
                label_offset(p)
            }
        };
        Some(Label {
            atom: g,
            text: atom.record.label.clone(),
            argb: self.colors.resolve(color),
            offset,
            font: self.style.font(),
        })
    }

    // ------------------------------------------------------------------
    // Other object kinds
    // ------------------------------------------------------------------

    /// Emit one measurement object per group of `kind.points()` coordinates.
    ///
    /// `reps` is the measurement object's representation mask; `offsets`
    /// holds optional per-measurement label placements. Returns the number
    /// of measurements emitted.
    pub fn emit_measurements(
        &mut self,
        kind: MeasureKind,
        coords: &[Vec3],
        offsets: &[Option<LabelOffset>],
        reps: u32,
        color: i32,
        have_labels: bool,
    ) -> usize {
        let per = kind.points();
        let n = coords.len() / per;
        if n == 0 {
            return 0;
        }
        let draw_label = have_labels && reps & (1 << Rep::Labels.index()) != 0;
        let draw_dashes = reps & (1 << Rep::Dashes.index()) != 0;
        let mut rad = self.settings.float(keys::DASH_WIDTH) / 20.0;
        if rad == 0.0 {
            rad = 0.05;
        }
        if !draw_dashes {
            rad = -0.0005;
        }
        let color = if color < 0 { self.settings.int(keys::DASH_COLOR) } else { color };
        let label_color = if self.style.label_color < 0 { color } else { self.style.label_color };
        let digits_key = match kind {
            MeasureKind::Distance => keys::LABEL_DISTANCE_DIGITS,
            MeasureKind::Angle => keys::LABEL_ANGLE_DIGITS,
            MeasureKind::Dihedral => keys::LABEL_DIHEDRAL_DIGITS,
        };
        let digits = self.settings.int(digits_key);
        let format = if draw_label {
            format!("{per}: %0.{}VALUE", if digits < 0 { 1 } else { digits })
        } else {
            format!("{per}: ")
        };
        for (i, points) in coords.chunks_exact(per).enumerate() {
            let offset = offsets
                .get(i)
                .copied()
                .flatten()
                .unwrap_or_else(|| label_offset(self.style.label_position));
            let m = Measurement {
                kind,
                points: points.to_vec(),
                format: format.clone(),
                label_argb: self.colors.resolve(label_color),
                offset,
                font: self.style.font(),
            };
            let obj = SceneObject::new(ShapeKind::Measurement, self.object_id.clone(), Selection::None, Payload::Measurement(m))
                .with_size(rad)
                .with_argb(self.colors.resolve(color));
            self.push(obj);
        }
        n
    }

    /// Forward a compiled graphics stream.
    pub fn emit_cgo(&mut self, name: &str, ops: Vec<f32>, argb: u32) {
        let obj = SceneObject::new(
            ShapeKind::Cgo,
            self.object_id.clone(),
            Selection::None,
            Payload::Cgo(CgoData { name: name.to_string(), ops }),
        )
        .with_argb(argb)
        .with_translucency(self.settings.float(keys::CGO_TRANSPARENCY));
        self.push(obj);
    }

    /// Isosurface of a loaded map.
    pub fn emit_map_surface(&mut self, map_name: &str) {
        let mut obj = SceneObject::new(
            ShapeKind::MapSurface,
            self.object_id.clone(),
            Selection::None,
            Payload::Map(MapRef { map_name: map_name.to_string(), surface: None }),
        );
        obj.cache_key = self.cache_key.clone();
        self.push(obj);
    }

    /// Mesh or MEP referencing volumetric data. `object_color` is the color
    /// stored in the object header.
    pub fn emit_mesh(&mut self, map: MapRef, object_color: i32, is_mep: bool) {
        let kind = if is_mep { ShapeKind::Mep } else { ShapeKind::MapMesh };
        let mut obj = SceneObject::new(kind, self.object_id.clone(), Selection::None, Payload::Map(map))
            .with_translucency(self.style.transparency);
        if !is_mep {
            let mut color = self.settings.int(keys::MESH_COLOR);
            if color < 0 {
                color = object_color;
            }
            obj.size = Some(self.style.mesh_width);
            obj.argb = Some(self.colors.resolve(color));
        }
        obj.cache_key = self.cache_key.clone();
        self.push(obj);
    }

    /// Base colors for atoms selected by a saved scene.
    pub fn emit_atom_color(&mut self, atoms: BitSet, color: i32) {
        if atoms.is_empty() {
            return;
        }
        let obj = self.atoms(ShapeKind::AtomColors, atoms, Payload::None).with_argb(self.colors.resolve(color));
        self.push(obj);
    }
}

/// Resolve per-bond unique overrides on a molecule's bonds.
///
/// Only bonds carrying a unique id and at least one override get a
/// [`BondStyle`]. Line bonds take precedence over stick bonds for the radius.
pub fn apply_bond_styles(mol: &mut Molecule, sets: &BondSets, store: &SettingsStore, colors: &ColorRegistry) {
    let first = mol.first_bond;
    for (i, bond) in mol.bonds.iter_mut().enumerate() {
        let uid = bond.unique_id;
        if uid.is_none() {
            continue;
        }
        let g = first + i;
        let get = |key: SettingKey| store.has_unique(uid, key).then(|| store.unique_float(uid, key, 0.0));
        let radius = if sets.lines.get(g) {
            get(keys::LINE_WIDTH).map(|w| w / 30.0)
        } else if sets.sticks.get(g) {
            get(keys::STICK_RADIUS)
        } else {
            None
        };
        let style = BondStyle {
            radius,
            argb: get(keys::STICK_COLOR).map(|c| colors.resolve(c as i32)),
            translucency: get(keys::STICK_TRANSPARENCY),
            valence: get(keys::VALENCE).and_then(|v| match v as i32 {
                1 => Some(Valence::Multiple),
                0 => Some(Valence::Single),
                _ => None,
            }),
        };
        if style != BondStyle::default() {
            if let Some(v) = style.valence {
                bond.valence = v;
            }
            bond.style = Some(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickle::DecodedValue;
    use crate::record::AtomRecord;
    use crate::session::{Atom, Bond};

    fn atom(elem: &str, resv: i32, reps: u32) -> Atom {
        let rec = AtomRecord {
            elem: elem.into(),
            name: if elem == "C" { "CA".into() } else { elem.into() },
            resv,
            chain: "A".into(),
            reps,
            color: 4,
            bonded: true,
            vdw: 1.5,
            ..Default::default()
        };
        Atom::new(rec, Vec3::ZERO, 0)
    }

    fn molecule(atoms: Vec<Atom>, bonds: Vec<(usize, usize)>) -> Molecule {
        let mut reps = RepSets::new();
        for (i, a) in atoms.iter().enumerate() {
            reps.set_mask(i, a.record.reps);
        }
        Molecule {
            name: "m".into(),
            model_index: 0,
            state: 0,
            first_atom: 0,
            atoms,
            first_bond: 0,
            bonds: bonds
                .into_iter()
                .map(|(a, b)| Bond { atom1: a, atom2: b, order: 1, valence: Valence::Single, unique_id: None, style: None })
                .collect(),
            secondary: Vec::new(),
            ss_atoms: Default::default(),
            crystal: None,
            reps,
            settings: Default::default(),
            state_settings: Default::default(),
            hidden: false,
        }
    }

    fn kinds(objs: &[SceneObject]) -> Vec<ShapeKind> {
        objs.iter().map(|o| o.kind).collect()
    }

    #[test]
    fn test_sticks_molecule() {
        let sticks = 1 << Rep::Sticks.index();
        let mol = molecule(vec![atom("H", 1, sticks), atom("C", 1, sticks), atom("C", 1, sticks)], vec![(1, 2)]);
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("m", store.session(), &colors);
        b.emit_molecule(&mol);
        let objs = b.finish();
        assert_eq!(kinds(&objs), vec![ShapeKind::AtomColors, ShapeKind::Sticks]);
        assert_eq!(objs[0].selection, Selection::Atoms(BitSet::from_range(0, 3)));
        assert_eq!(objs[1].selection, Selection::Bonds(BitSet::from_range(0, 1)));
        assert_eq!(objs[1].size, Some(0.5));
        assert_eq!(objs[1].argb, None);
    }

    #[test]
    fn test_lines_win_over_sticks_for_bond_styles() {
        let both = (1 << Rep::Sticks.index()) | (1 << Rep::Lines.index());
        let mut mol = molecule(vec![atom("C", 1, both), atom("C", 1, both)], vec![(0, 1)]);
        mol.bonds[0].unique_id = Some(3);
        let mut store = SettingsStore::new(181);
        store.set_unique(&[DecodedValue::List(vec![
            DecodedValue::Int(3),
            DecodedValue::List(vec![
                DecodedValue::List(vec![DecodedValue::Int(keys::LINE_WIDTH.0 as i64), DecodedValue::Int(3), DecodedValue::Float(3.0)]),
                DecodedValue::List(vec![DecodedValue::Int(keys::VALENCE.0 as i64), DecodedValue::Int(1), DecodedValue::Int(1)]),
            ]),
        ])]);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("m", store.session(), &colors);
        let sets = b.emit_molecule(&mol);
        assert!(sets.sticks.is_empty());
        apply_bond_styles(&mut mol, &sets, &store, &colors);
        let style = mol.bonds[0].style.unwrap_or_default();
        assert_eq!(style.radius, Some(0.1));
        assert_eq!(style.valence, Some(Valence::Multiple));
        assert_eq!(mol.bonds[0].valence, Valence::Multiple);
    }

    #[test]
    fn test_cartoon_by_secondary_structure() {
        let cartoon = 1 << Rep::Cartoon.index();
        let mut mol = molecule((1..=4).map(|r| atom("C", r, cartoon)).collect(), vec![]);
        mol.ss_atoms[SsKind::Helix.index()] = BitSet::from_range(0, 2);
        mol.ss_atoms[SsKind::Loop.index()] = BitSet::from_range(2, 4);
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("m", store.session(), &colors);
        b.emit_molecule(&mol);
        let objs = b.finish();
        assert_eq!(kinds(&objs), vec![ShapeKind::AtomColors, ShapeKind::Cartoon, ShapeKind::Cartoon]);
        // oval length 1.2 for helices, loop radius 0.2 for loops
        assert_eq!(objs[1].size, Some(2.4));
        assert_eq!(objs[2].size, Some(0.4));
        let Payload::Style(style) = &objs[1].payload else { panic!("expected style") };
        assert_eq!(style.colors.as_ref().map(Vec::len), Some(2));
        assert_eq!(style.colors.as_ref().and_then(|c| c[0]), None);
    }

    #[test]
    fn test_surface_mode_filters_hydrogens() {
        let surface = 1 << Rep::Surface.index();
        let mol = molecule(vec![atom("H", 1, surface), atom("C", 1, surface)], vec![]);
        let mut store = SettingsStore::new(181);
        store.set_global(keys::SURFACE_MODE, 2, DecodedValue::Int(2));
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("m", store.session(), &colors).with_cache_key("cache");
        b.emit_molecule(&mol);
        let objs = b.finish();
        let surf = objs.iter().find(|o| o.kind == ShapeKind::Surface).map(|o| o.selection.clone());
        assert_eq!(surf, Some(Selection::Atoms(BitSet::from_range(1, 2))));
        assert_eq!(objs[1].cache_key.as_deref(), Some("cache"));

        let mut b = SceneObjectBuilder::new("m", store.session(), &colors).with_surfaces(false);
        b.emit_molecule(&mol);
        assert!(b.objects().iter().all(|o| o.kind != ShapeKind::Surface));
    }

    #[test]
    fn test_labels_and_fonts() {
        let labels = 1 << Rep::Labels.index();
        let mut a = atom("C", 1, labels);
        a.record.label = "CA".into();
        let a = Atom::new(a.record, Vec3::ZERO, 0);
        let mol = molecule(vec![a, atom("C", 1, labels)], vec![]);
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("m", store.session(), &colors);
        b.emit_molecule(&mol);
        let objs = b.finish();
        let Payload::Labels(ls) = &objs[1].payload else { panic!("expected labels") };
        assert_eq!(ls.len(), 1);
        assert_eq!(ls[0].text, "CA");
        // front color on the default black background
        assert_eq!(ls[0].argb, 0xFFFF_FFFF);
        assert_eq!(ls[0].offset, [1.0, 0.0, 0.0, 0.75, 0.0, 0.0, 0.0]);
        assert_eq!(ls[0].font.size, 14.0);
    }

    #[test]
    fn test_measurements() {
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("dist01", store.session(), &colors);
        let coords = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z];
        let reps = (1 << Rep::Dashes.index()) | (1 << Rep::Labels.index());
        assert_eq!(b.emit_measurements(MeasureKind::Distance, &coords, &[], reps, 2, true), 2);
        let objs = b.finish();
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[1].object_id, "dist01");
        assert_eq!(objs[0].size, Some(0.125));
        let Payload::Measurement(m) = &objs[0].payload else { panic!("expected measurement") };
        assert_eq!(m.format, "2: %0.1VALUE");
        assert_eq!(m.points, vec![Vec3::ZERO, Vec3::X]);
    }

    #[test]
    fn test_measurement_without_dashes() {
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("a", store.session(), &colors);
        let coords = [Vec3::ZERO, Vec3::X, Vec3::Y];
        assert_eq!(b.emit_measurements(MeasureKind::Angle, &coords, &[], 0, 1, true), 1);
        let objs = b.finish();
        assert_eq!(objs[0].size, Some(-0.0005));
        let Payload::Measurement(m) = &objs[0].payload else { panic!("expected measurement") };
        assert_eq!(m.format, "3: ");
    }

    #[test]
    fn test_mesh_color_falls_back_to_object() {
        let store = SettingsStore::new(181);
        let colors = ColorRegistry::new();
        let mut b = SceneObjectBuilder::new("mesh", store.session(), &colors);
        b.emit_mesh(MapRef { map_name: "map".into(), surface: None }, 4, false);
        b.emit_mesh(MapRef { map_name: "m_e_map".into(), surface: Some("m_e_chg".into()) }, 4, true);
        let objs = b.finish();
        assert_eq!(objs[0].argb, Some(0xFFFF0000));
        assert_eq!(objs[0].size, Some(1.0));
        assert_eq!(objs[1].kind, ShapeKind::Mep);
        assert_eq!(objs[1].argb, None);
    }
}
