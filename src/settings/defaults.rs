//! Compiled-in setting defaults.
//!
//! Three typed tables share the key namespace: numeric, point and string.
//! Sessions older than version 100 (and again 99) were written by releases
//! with different defaults for a handful of keys; [`default_float`] and
//! [`default_point`] take the session version into account.

use glam::Vec3;

use super::keys::{self, SettingKey};

/// Numeric default, `None` when the table has no entry.
pub fn default_float(key: SettingKey, version: i32) -> Option<f32> {
    if let Some(v) = legacy_float(key, version) {
        return Some(v);
    }
    let v = match key {
        keys::SPHERE_COLOR
        | keys::CARTOON_COLOR
        | keys::ELLIPSOID_COLOR
        | keys::RIBBON_COLOR
        | keys::LINE_COLOR
        | keys::DOT_COLOR
        | keys::STICK_COLOR
        | keys::SURFACE_COLOR
        | keys::DASH_COLOR
        | keys::MESH_COLOR
        | keys::CARTOON_PUTTY_QUALITY
        | keys::LABEL_DISTANCE_DIGITS
        | keys::LABEL_ANGLE_DIGITS
        | keys::LABEL_DIHEDRAL_DIGITS
        | keys::TWO_SIDED_LIGHTING => -1.0,

        keys::RAY_PIXEL_SCALE
        | keys::ELLIPSOID_SCALE
        | keys::SPHERE_SCALE
        | keys::MESH_WIDTH
        | keys::CARTOON_LADDER_MODE
        | keys::CLAMP_COLORS
        | keys::FRAME
        | keys::STATE
        | keys::DEPTH_CUE
        | keys::FOG
        | keys::CARTOON_ROUND_HELICES
        | keys::LABEL_DIGITS
        | keys::RIBBON_SAMPLING
        | keys::STICK_BALL_RATIO => 1.0,

        keys::SPHERE_TRANSPARENCY
        | keys::ELLIPSOID_TRANSPARENCY
        | keys::RIBBON_TRANSPARENCY
        | keys::NONBONDED_TRANSPARENCY
        | keys::CARTOON_TRANSPARENCY
        | keys::STICK_TRANSPARENCY
        | keys::TRANSPARENCY
        | keys::BG_RGB
        | keys::CARTOON_CYLINDRICAL_HELICES
        | keys::SURFACE_MODE
        | keys::SURFACE_SOLVENT
        | keys::ALL_STATES
        | keys::VALENCE
        | keys::CGO_TRANSPARENCY
        | keys::CARTOON_FANCY_HELICES
        | keys::CARTOON_PUTTY_TRANSFORM
        | keys::DUMP_BINARY
        | keys::ORTHOSCOPIC
        | keys::RIBBON_RADIUS
        | keys::RIBBON_SMOOTH
        | keys::SPHERE_SOLVENT
        | keys::SURFACE_CARVE_CUTOFF
        | keys::SURFACE_QUALITY
        | keys::CARTOON_SIDE_CHAIN_HELPER => 0.0,

        keys::CARTOON_LOOP_RADIUS => 0.2,
        keys::CARTOON_RECT_LENGTH => 1.4,
        keys::CARTOON_RECT_WIDTH => 0.4,
        keys::CARTOON_HELIX_RADIUS => 2.25,
        keys::NONBONDED_SIZE => 0.25,
        keys::NB_SPHERES_SIZE => 0.25,
        keys::FOG_START => 0.45,
        keys::LABEL_SIZE => 14.0,
        keys::LABEL_COLOR => -6.0,
        keys::LABEL_FONT_ID => 5.0,
        keys::TRANSPARENCY_MODE | keys::CARTOON_PUTTY_RANGE | keys::CARTOON_TUBE_CAP => 2.0,
        keys::CARTOON_NUCLEIC_ACID_MODE | keys::CARTOON_PUTTY_SCALE_MAX => 4.0,
        keys::CARTOON_PUTTY_RADIUS => 0.4,
        keys::CARTOON_PUTTY_SCALE_MIN => 0.6,
        keys::CARTOON_PUTTY_SCALE_POWER => 1.5,
        keys::CARTOON_TUBE_RADIUS => 0.5,
        keys::SOLVENT_RADIUS => 1.4,
        keys::DASH_WIDTH => 2.5,
        keys::LINE_WIDTH => 1.49,
        keys::RIBBON_WIDTH => 3.0,
        keys::FIELD_OF_VIEW => 20.0,
        keys::MOVIE_FPS => 30.0,
        keys::STICK_RADIUS => 0.25,
        keys::STICK_H_SCALE => 0.4,
        keys::ELLIPSOID_PROBABILITY => 0.5,
        keys::CARTOON_OVAL_LENGTH => 1.2,
        keys::CARTOON_OVAL_WIDTH => 0.25,
        _ => return None,
    };
    Some(v)
}

/// Defaults written by releases before session version 100.
fn legacy_float(key: SettingKey, version: i32) -> Option<f32> {
    if version >= 100 {
        return None;
    }
    match key {
        keys::MOVIE_FPS => Some(0.0),
        keys::LABEL_DIGITS => Some(2.0),
        keys::CARTOON_LADDER_MODE | keys::CARTOON_TUBE_CAP if version < 99 => Some(0.0),
        keys::CARTOON_NUCLEIC_ACID_MODE if version < 99 => Some(1.0),
        _ => None,
    }
}

/// Point default, `None` when the table has no entry.
pub fn default_point(key: SettingKey, version: i32) -> Option<Vec3> {
    match key {
        keys::LABEL_POSITION if version < 100 => Some(Vec3::new(1.0, 1.0, 0.0)),
        keys::LABEL_POSITION => Some(Vec3::new(0.0, 0.0, 0.75)),
        _ => None,
    }
}

/// String default, `None` when the table has no entry.
pub fn default_string(key: SettingKey, _version: i32) -> Option<&'static str> {
    match key {
        keys::SURFACE_CARVE_SELECTION | keys::SCENE_CURRENT_NAME => Some(""),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_defaults() {
        assert_eq!(default_float(keys::STICK_RADIUS, 181), Some(0.25));
        assert_eq!(default_float(keys::LABEL_COLOR, 181), Some(-6.0));
        assert_eq!(default_float(keys::SPHERE_COLOR, 181), Some(-1.0));
        assert_eq!(default_float(keys::AMBIENT, 181), None);
    }

    #[test]
    fn test_version_dependent_defaults() {
        assert_eq!(default_float(keys::MOVIE_FPS, 181), Some(30.0));
        assert_eq!(default_float(keys::MOVIE_FPS, 99), Some(0.0));
        assert_eq!(default_float(keys::LABEL_DIGITS, 99), Some(2.0));
        assert_eq!(default_float(keys::CARTOON_LADDER_MODE, 99), Some(1.0));
        assert_eq!(default_float(keys::CARTOON_LADDER_MODE, 98), Some(0.0));
        assert_eq!(default_float(keys::CARTOON_NUCLEIC_ACID_MODE, 98), Some(1.0));
        assert_eq!(default_float(keys::CARTOON_NUCLEIC_ACID_MODE, 99), Some(4.0));
        assert_eq!(default_point(keys::LABEL_POSITION, 181), Some(Vec3::new(0.0, 0.0, 0.75)));
        assert_eq!(default_point(keys::LABEL_POSITION, 50), Some(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_string_defaults() {
        assert_eq!(default_string(keys::SURFACE_CARVE_SELECTION, 181), Some(""));
        assert_eq!(default_string(keys::STICK_RADIUS, 181), None);
    }
}
