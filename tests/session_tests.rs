//! Integration tests loading synthetic sessions through the public API.

mod common;

use std::fs::File;

use common::*;
use pse::pickle::{DecodedValue, PickleMap, PickleReader};
use pse::prelude::*;
use pse::session::load_session_from;

fn load_file(root: &PickleMap, opts: &LoadOptions) -> LoadedSession {
    let temp = write_session(root);
    let bytes = std::fs::read(temp.path()).expect("Failed to read session");
    load_session(&bytes, opts).expect("Failed to load session")
}

fn kinds(objects: &[SceneObject]) -> Vec<ShapeKind> {
    objects.iter().map(|o| o.kind).collect()
}

#[test]
fn test_three_atom_sticks() {
    let session = load_file(&three_atom_session(), &LoadOptions::default());

    assert_eq!(session.version, 181);
    assert_eq!(session.atom_count, 3);
    assert_eq!(session.bond_count, 2);
    assert_eq!(kinds(&session.objects), vec![ShapeKind::AtomColors, ShapeKind::Sticks]);
    assert!(session.objects.iter().all(|o| o.visible));
    assert!(session.failures.is_empty());

    let sticks = &session.objects[1];
    assert_eq!(sticks.object_id, "tri_1");
    assert_eq!(sticks.selection.len(), 2, "both bonds drawn as sticks");

    assert_eq!(session.named_set("tri").map(BitSet::cardinality), Some(3));
    assert_eq!(session.named_sets.get("__all").map(BitSet::cardinality), Some(3));
    assert_eq!(session.kind_of("tri"), Some(ObjectKind::Molecule));
}

#[test]
fn test_one_bond_with_hydrogen() {
    let sticks = 1;
    let mol = molecule(
        vec![atom(1, "C1", "C", sticks, 2), atom(1, "C2", "C", sticks, 2), atom(1, "H1", "H", sticks, 2)],
        vec![bond(0, 1, 1)],
        &[vec![0.0, 0.0, 0.0, 1.5, 0.0, 0.0, -0.9, 0.5, 0.0]],
    );
    let root = session(vec![named("ethyl", true, 1, mol, " ")], Vec::new());
    let session = load_file(&root, &LoadOptions::default());

    assert_eq!(kinds(&session.objects), vec![ShapeKind::AtomColors, ShapeKind::Sticks]);
    assert_eq!(session.objects[0].selection.len(), 3);
    assert_eq!(session.objects[1].selection.len(), 1);
}

#[test]
fn test_load_from_reader() {
    let temp = write_session(&three_atom_session());
    let file = File::open(temp.path()).expect("Failed to open session");
    let session = load_session_from(file, &LoadOptions::default()).expect("Failed to load session");
    assert_eq!(session.molecules.len(), 1);
    assert_eq!(session.molecules[0].bonds.len(), 2);
}

#[test]
fn test_root_must_be_a_map() {
    let err = load_session(b"].", &LoadOptions::default());
    assert!(err.is_err());
    let err = load_session(b"}(U\x07version", &LoadOptions::default());
    assert!(matches!(err, Err(Error::Decode(_))));
}

#[test]
fn test_hidden_group_hides_members() {
    let mut root = three_atom_session();
    let names = vec![
        DecodedValue::Null,
        named("grp", false, 12, group(), " "),
        named("tri", true, 1, three_atom_molecule(&root), "grp"),
    ];
    root.insert("names", DecodedValue::List(names));
    let session = load_file(&root, &LoadOptions::default());

    assert_eq!(session.groups.parent_of("tri"), Some("grp"));
    assert!(session.visibility.is_hidden("tri"));
    assert_eq!(session.visibility.hidden.cardinality(), 3);
    let hidden: Vec<_> = session.objects.iter().filter(|o| o.kind == ShapeKind::Hidden).collect();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].selection.len(), 3);
    assert!(session.objects.iter().filter(|o| o.object_id == "tri_1").all(|o| !o.visible));
}

/// The molecule data of the first named object.
fn three_atom_molecule(root: &PickleMap) -> DecodedValue {
    root.list("names")
        .and_then(|n| n.get(1))
        .and_then(DecodedValue::as_list)
        .and_then(|e| e.get(5))
        .cloned()
        .expect("molecule entry")
}

#[test]
fn test_state_selection() {
    let sticks = 1;
    let mol = molecule(
        vec![atom(1, "N", "N", sticks, 2), atom(1, "CA", "C", sticks, 2)],
        vec![bond(0, 1, 1)],
        &[vec![0.0; 6], vec![1.0; 6]],
    );
    let root = session(vec![named("traj", true, 1, mol, " ")], Vec::new());

    let all = load_file(&root, &LoadOptions::default());
    assert_eq!(all.state_count, 2);
    assert_eq!(all.model_count, 2);
    assert_eq!(all.atom_count, 4);
    assert!(all.molecule("traj", 1).is_some());

    let one = load_file(&root, &LoadOptions::new().with_state(StateSelector::Index(2)));
    assert_eq!(one.model_count, 1);
    assert_eq!(one.molecules.len(), 1);
    assert_eq!(one.molecules[0].state, 1);
    assert_eq!(one.molecules[0].first_atom, 0);
    assert_eq!(one.molecules[0].atoms[0].coord.x, 1.0);
}

#[test]
fn test_trim_drops_cgo_bytes() {
    let mut root = three_atom_session();
    let mut names = root.list("names").map(<[DecodedValue]>::to_vec).unwrap_or_default();
    names.push(named("arrows", true, 6, cgo(4, &[1.0, 2.0, 3.0]), " "));
    root.insert("names", DecodedValue::List(names));

    let bytes = to_pickle(&root);
    let session = load_session(&bytes, &LoadOptions::new().with_cache(true)).expect("Failed to load session");
    assert!(session.spans.get("arrows").is_some());
    assert!(session.spans.get("tri").is_some());

    let trimmed = session.trimmed.expect("trimmed copy");
    assert!(trimmed.len() < bytes.len());
    let decoded = PickleReader::new(&trimmed[..]).decode().expect("trimmed copy decodes");
    let names: Vec<String> = decoded
        .as_map()
        .and_then(|m| m.list("names"))
        .unwrap_or_default()
        .iter()
        .filter_map(|e| e.str_at(0).map(|s| s.into_owned()))
        .collect();
    assert_eq!(names, vec!["tri".to_string()]);
}

#[test]
fn test_map_data_emits_surface() {
    let map = group();
    let root = session(vec![named("density", true, 2, map, " ")], Vec::new());
    let with = load_file(&root, &LoadOptions::default());
    assert_eq!(kinds(&with.objects), vec![ShapeKind::MapSurface]);
    assert_eq!(with.kind_of("density"), Some(ObjectKind::MapData));
}

#[test]
fn test_saved_scene_regenerates_reps() {
    let mut root = three_atom_session();

    let mut vis = PickleMap::new();
    vis.insert("tri", list(vec![int(1), DecodedValue::Null, ints(&[0]), int(5)]));
    let mut dict = PickleMap::new();
    dict.insert("s1", list(vec![DecodedValue::Null, DecodedValue::Map(vis), int(1), list(Vec::new())]));
    root.insert("scene_order", list(vec![s("s1")]));
    root.insert("scene_dict", DecodedValue::Map(dict));

    let mut names = root.list("names").map(<[DecodedValue]>::to_vec).unwrap_or_default();
    let sel = list(vec![list(vec![s("tri"), ints(&[0, 1])])]);
    names.push(named("_scene_s1_sticks", false, -1, sel, " "));
    root.insert("names", DecodedValue::List(names));

    let session = load_file(&root, &LoadOptions::default());
    assert_eq!(session.scenes.len(), 1);
    assert!(session.notes.iter().any(|n| n == "scene: s1"));

    let objects = session.generate_scene("s1").expect("scene s1");
    assert_eq!(kinds(&objects), vec![ShapeKind::Frame, ShapeKind::Sticks]);
    assert_eq!(objects[1].selection.len(), 1, "only the bond between atoms 0 and 1");
    assert!(session.generate_scene("missing").is_none());
}
