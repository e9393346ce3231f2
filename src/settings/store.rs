//! Layered setting resolution.
//!
//! A value is looked up in the state tier, then the object tier, then the
//! session's global list and finally the compiled-in defaults. Per-atom and
//! per-bond overrides live in a separate tier keyed by unique id and are only
//! consulted through the `unique_*` methods.

use std::collections::HashMap;

use glam::Vec3;

use super::defaults::{default_float, default_point, default_string};
use super::keys::{MAX_KEY, SettingKey};
use crate::color::{ColorRegistry, point_to_argb};
use crate::pickle::{DecodedValue, int_in, list_in};

/// One stored `[key, type, value]` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: SettingKey,
    /// Type tag as written by the session (1 bool, 2 int, 3 float, 4 vector,
    /// 5 color, 6 string)
    pub kind: i32,
    pub value: DecodedValue,
}

impl Setting {
    /// Parse a well-formed `[key, type, value]` triple.
    pub fn from_value(v: &[DecodedValue]) -> Option<Self> {
        if v.len() != 3 {
            return None;
        }
        let key = u16::try_from(int_in(v, 0)?).ok()?;
        Some(Self { key: SettingKey(key), kind: int_in(v, 1).unwrap_or(0), value: v[2].clone() })
    }

    pub fn float(&self) -> Option<f32> {
        self.value.as_f32()
    }

    pub fn point(&self) -> Option<Vec3> {
        self.value.point_at(0)
    }

    pub fn text(&self) -> Option<String> {
        self.value.as_str().map(|s| s.into_owned())
    }
}

/// Settings attached to one object or one object state.
pub type SettingMap = HashMap<SettingKey, Setting>;

/// Build a tier map from a list of setting triples. The first entry for a
/// key wins.
pub fn settings_from_list(list: Option<&[DecodedValue]>) -> SettingMap {
    let mut map = SettingMap::new();
    for item in list.unwrap_or_default().iter().rev() {
        if let Some(s) = item.as_list().and_then(Setting::from_value) {
            map.insert(s.key, s);
        }
    }
    map
}

/// Session-wide settings: the global list and the unique-id tier.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    version: i32,
    /// Entry `i` describes key `i`; `None` marks an absent setting
    global: Vec<Option<Setting>>,
    unique: HashMap<(i32, SettingKey), Setting>,
    max_unique_id: i32,
}

impl SettingsStore {
    /// Store with defaults only.
    pub fn new(version: i32) -> Self {
        Self { version, ..Default::default() }
    }

    /// Build from the session's global settings list.
    ///
    /// Entries are re-indexed by their own key: holes left by settings an
    /// older writer did not know are padded, and entries whose key is `-1`
    /// become absent.
    pub fn from_global_list(version: i32, list: &[DecodedValue]) -> Self {
        let mut global: Vec<Option<Setting>> = Vec::with_capacity(MAX_KEY as usize + 1);
        let mut padded = 0;
        for item in list {
            let Some(entry) = item.as_list() else {
                global.push(None);
                continue;
            };
            match int_in(entry, 0) {
                Some(-1) | None => {
                    padded += 1;
                    global.push(None);
                }
                Some(key) => {
                    let key = key.max(0) as usize;
                    while global.len() < key {
                        padded += 1;
                        global.push(None);
                    }
                    let s = Setting::from_value(entry);
                    if global.len() == key {
                        global.push(s);
                    } else {
                        global[key] = s;
                    }
                }
            }
        }
        if padded > 0 {
            tracing::debug!("padded {padded} absent global settings");
        }
        Self { version, global, unique: HashMap::new(), max_unique_id: 0 }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Load `[[uid, [[key, type, value], ...]], ...]`.
    pub fn set_unique(&mut self, list: &[DecodedValue]) {
        for item in list.iter().rev() {
            let Some(entry) = item.as_list() else { continue };
            let Some(uid) = int_in(entry, 0) else { continue };
            self.max_unique_id = self.max_unique_id.max(uid);
            for s in list_in(entry, 1).unwrap_or_default().iter().rev() {
                if let Some(setting) = s.as_list().and_then(Setting::from_value) {
                    self.unique.insert((uid, setting.key), setting);
                }
            }
        }
        tracing::debug!("{} unique settings, max id {}", self.unique.len(), self.max_unique_id);
    }

    pub fn max_unique_id(&self) -> i32 {
        self.max_unique_id
    }

    /// Global entry for a key.
    pub fn global(&self, key: SettingKey) -> Option<&Setting> {
        self.global.get(key.index())?.as_ref()
    }

    /// Replace a global entry.
    pub fn set_global(&mut self, key: SettingKey, kind: i32, value: DecodedValue) {
        if self.global.len() <= key.index() {
            self.global.resize(key.index() + 1, None);
        }
        self.global[key.index()] = Some(Setting { key, kind, value });
    }

    /// Remove a global entry.
    pub fn clear_global(&mut self, key: SettingKey) {
        if let Some(slot) = self.global.get_mut(key.index()) {
            *slot = None;
        }
    }

    /// View with no object or state tier.
    pub fn session(&self) -> BoundSettings<'_> {
        BoundSettings { store: self, object: None, state: None }
    }

    /// View bound to an object and optionally one of its states.
    pub fn bind<'a>(&'a self, object: Option<&'a SettingMap>, state: Option<&'a SettingMap>) -> BoundSettings<'a> {
        BoundSettings { store: self, object, state }
    }

    // ------------------------------------------------------------------
    // Unique tier
    // ------------------------------------------------------------------

    fn unique_entry(&self, uid: Option<i32>, key: SettingKey) -> Option<&Setting> {
        let uid = uid.filter(|&u| u > 0)?;
        self.unique.get(&(uid, key))
    }

    /// Per-entity number, or `fallback` when the entity has no override.
    pub fn unique_float(&self, uid: Option<i32>, key: SettingKey, fallback: f32) -> f32 {
        match self.unique_entry(uid, key).and_then(Setting::float) {
            Some(v) => {
                tracing::trace!("unique setting for {uid:?}: {key} = {v}");
                v
            }
            None => fallback,
        }
    }

    /// Per-entity point override.
    pub fn unique_point(&self, uid: Option<i32>, key: SettingKey) -> Option<Vec3> {
        self.unique_entry(uid, key).and_then(Setting::point)
    }

    pub fn has_unique(&self, uid: Option<i32>, key: SettingKey) -> bool {
        self.unique_entry(uid, key).is_some()
    }

    // ------------------------------------------------------------------
    // Defaults
    // ------------------------------------------------------------------

    fn float_default(&self, key: SettingKey) -> f32 {
        default_float(key, self.version).unwrap_or_else(|| {
            tracing::warn!("no default for numeric setting {key} (version {})", self.version);
            0.0
        })
    }

    fn point_default(&self, key: SettingKey) -> Vec3 {
        default_point(key, self.version).unwrap_or_else(|| {
            tracing::warn!("no default for point setting {key} (version {})", self.version);
            Vec3::ZERO
        })
    }

    fn string_default(&self, key: SettingKey) -> String {
        default_string(key, self.version)
            .unwrap_or_else(|| {
                tracing::info!("no string setting {key} in version {}", self.version);
                ""
            })
            .to_string()
    }
}

/// A store bound to the current object and state tiers.
#[derive(Debug, Clone, Copy)]
pub struct BoundSettings<'a> {
    store: &'a SettingsStore,
    object: Option<&'a SettingMap>,
    state: Option<&'a SettingMap>,
}

impl<'a> BoundSettings<'a> {
    pub fn store(&self) -> &'a SettingsStore {
        self.store
    }

    /// First tier holding the key: state, object, then global.
    pub fn resolve(&self, key: SettingKey) -> Option<&'a Setting> {
        self.state
            .and_then(|m| m.get(&key))
            .or_else(|| self.object.and_then(|m| m.get(&key)))
            .or_else(|| self.store.global(key))
    }

    /// Object-tier entry only.
    pub fn object_setting(&self, key: SettingKey) -> Option<&'a Setting> {
        self.object.and_then(|m| m.get(&key))
    }

    pub fn float(&self, key: SettingKey) -> f32 {
        match self.resolve(key).and_then(Setting::float) {
            Some(v) => v,
            None => self.store.float_default(key),
        }
    }

    pub fn int(&self, key: SettingKey) -> i32 {
        self.float(key) as i32
    }

    pub fn boolean(&self, key: SettingKey) -> bool {
        self.float(key) != 0.0
    }

    pub fn point(&self, key: SettingKey) -> Vec3 {
        match self.resolve(key).and_then(Setting::point) {
            Some(p) => p,
            None => self.store.point_default(key),
        }
    }

    pub fn string(&self, key: SettingKey) -> String {
        match self.resolve(key).and_then(Setting::text) {
            Some(s) => s,
            None => self.store.string_default(key),
        }
    }

    /// Color-valued setting as a color id, or as packed ARGB when stored as
    /// an RGB vector.
    pub fn color(&self, key: SettingKey) -> ColorValue {
        match self.resolve(key).map(|s| &s.value) {
            Some(v) if v.as_int().is_some() => ColorValue::Index(v.as_i32().unwrap_or(0)),
            Some(v) => match v.point_at(0) {
                Some(p) => ColorValue::Argb(point_to_argb(p)),
                None => ColorValue::Index(self.store.float_default(key) as i32),
            },
            None => ColorValue::Index(self.store.float_default(key) as i32),
        }
    }

    /// Unique override, falling back to this view's resolved value.
    pub fn unique_float(&self, uid: Option<i32>, key: SettingKey) -> f32 {
        if self.store.has_unique(uid, key) {
            self.store.unique_float(uid, key, 0.0)
        } else {
            self.float(key)
        }
    }
}

/// Result of resolving a color-valued setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    /// Palette or session color id; negative ids have special meanings
    Index(i32),
    Argb(u32),
}

impl ColorValue {
    /// Packed color through a registry.
    pub fn argb(self, colors: &ColorRegistry) -> u32 {
        match self {
            ColorValue::Index(i) => colors.resolve(i),
            ColorValue::Argb(c) => c,
        }
    }

    /// Color id, if this is not an explicit RGB value.
    pub fn index(self) -> Option<i32> {
        match self {
            ColorValue::Index(i) => Some(i),
            ColorValue::Argb(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;

    fn triple(key: SettingKey, kind: i64, value: DecodedValue) -> DecodedValue {
        DecodedValue::List(vec![DecodedValue::Int(key.0 as i64), DecodedValue::Int(kind), value])
    }

    fn global_list(entries: &[(SettingKey, f64)]) -> Vec<DecodedValue> {
        entries.iter().map(|(k, v)| triple(*k, 3, DecodedValue::Float(*v))).collect()
    }

    #[test]
    fn test_resolution_order() {
        let key = keys::STICK_RADIUS;
        let mut store = SettingsStore::from_global_list(181, &global_list(&[(key, 0.3)]));
        let object = settings_from_list(Some(&[triple(key, 3, DecodedValue::Float(0.5))]));
        let state = settings_from_list(Some(&[triple(key, 3, DecodedValue::Float(0.7))]));

        assert_eq!(store.bind(Some(&object), Some(&state)).float(key), 0.7);
        assert_eq!(store.bind(Some(&object), None).float(key), 0.5);
        assert_eq!(store.bind(None, None).float(key), 0.3);

        store.clear_global(key);
        assert_eq!(store.session().float(key), 0.25);
    }

    #[test]
    fn test_defaults_follow_version() {
        let store = SettingsStore::new(98);
        assert_eq!(store.session().float(keys::CARTOON_LADDER_MODE), 0.0);
        let store = SettingsStore::new(181);
        assert_eq!(store.session().float(keys::CARTOON_LADDER_MODE), 1.0);
    }

    #[test]
    fn test_missing_default_is_zero() {
        let store = SettingsStore::new(181);
        assert_eq!(store.session().float(keys::AMBIENT), 0.0);
        assert_eq!(store.session().string(keys::SURFACE_CARVE_SELECTION), "");
    }

    #[test]
    fn test_global_list_is_reindexed() {
        // Keys 0 and 1 present, 2 and 3 missing, then 4; a -1 placeholder after.
        let list = vec![
            triple(SettingKey(0), 3, DecodedValue::Float(0.1)),
            triple(SettingKey(1), 3, DecodedValue::Float(0.2)),
            triple(keys::SOLVENT_RADIUS, 3, DecodedValue::Float(1.6)),
            DecodedValue::List(vec![DecodedValue::Int(-1)]),
        ];
        let store = SettingsStore::from_global_list(181, &list);
        assert!(store.global(SettingKey(2)).is_none());
        assert!(store.global(SettingKey(3)).is_none());
        assert_eq!(store.global(keys::SOLVENT_RADIUS).and_then(Setting::float), Some(1.6));
        assert!(store.global(SettingKey(5)).is_none());
        assert_eq!(store.session().float(keys::SOLVENT_RADIUS), 1.6);
    }

    #[test]
    fn test_malformed_global_entry_falls_back() {
        let list = vec![DecodedValue::List(vec![DecodedValue::Int(0), DecodedValue::Int(3)])];
        let store = SettingsStore::from_global_list(181, &list);
        assert!(store.global(SettingKey(0)).is_none());
    }

    #[test]
    fn test_unique_tier() {
        let mut store = SettingsStore::new(181);
        let entry = DecodedValue::List(vec![
            DecodedValue::Int(12),
            DecodedValue::List(vec![triple(keys::SPHERE_SCALE, 3, DecodedValue::Float(0.3))]),
        ]);
        store.set_unique(&[entry]);
        assert_eq!(store.unique_float(Some(12), keys::SPHERE_SCALE, 1.0), 0.3);
        assert_eq!(store.unique_float(Some(13), keys::SPHERE_SCALE, 1.0), 1.0);
        assert_eq!(store.unique_float(None, keys::SPHERE_SCALE, 1.0), 1.0);
        assert_eq!(store.unique_float(Some(0), keys::SPHERE_SCALE, 1.0), 1.0);
        assert_eq!(store.session().unique_float(Some(13), keys::SPHERE_SCALE), 1.0);
        assert_eq!(store.max_unique_id(), 12);
    }

    #[test]
    fn test_color_settings() {
        let mut store = SettingsStore::new(181);
        store.set_global(keys::STICK_COLOR, 5, DecodedValue::Int(4));
        let rgb = DecodedValue::List(vec![DecodedValue::Float(1.0), DecodedValue::Float(0.0), DecodedValue::Float(0.0)]);
        store.set_global(keys::BG_RGB, 5, rgb);
        let view = store.session();
        assert_eq!(view.color(keys::STICK_COLOR), ColorValue::Index(4));
        assert_eq!(view.color(keys::BG_RGB), ColorValue::Argb(0xFFFF0000));
        assert_eq!(view.color(keys::SPHERE_COLOR), ColorValue::Index(-1));
    }
}
