//! Setting keys.
//!
//! Every key is a stable small integer from the session namespace. The
//! constants below are named after the setting they address; [`NAMES`]
//! maps ids back to names for logging and the CLI.

/// A setting identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettingKey(pub u16);

impl SettingKey {
    /// Raw id as a list index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Setting name, if the id is known.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .binary_search_by_key(&self.0, |(id, _)| *id)
            .ok()
            .map(|i| NAMES[i].1)
    }

    /// Look a key up by setting name.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES.iter().find(|(_, n)| *n == name).map(|(id, _)| SettingKey(*id))
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// Highest known key.
pub const MAX_KEY: u16 = 749;

pub const BONDING_VDW_CUTOFF: SettingKey = SettingKey(0);
pub const MIN_MESH_SPACING: SettingKey = SettingKey(1);
pub const DOT_DENSITY: SettingKey = SettingKey(2);
pub const DOT_MODE: SettingKey = SettingKey(3);
pub const SOLVENT_RADIUS: SettingKey = SettingKey(4);
pub const SEL_COUNTER: SettingKey = SettingKey(5);
pub const BG_RGB: SettingKey = SettingKey(6);
pub const AMBIENT: SettingKey = SettingKey(7);
pub const DIRECT: SettingKey = SettingKey(8);
pub const REFLECT: SettingKey = SettingKey(9);
pub const LIGHT: SettingKey = SettingKey(10);
pub const POWER: SettingKey = SettingKey(11);
pub const ANTIALIAS: SettingKey = SettingKey(12);
pub const CAVITY_CULL: SettingKey = SettingKey(13);
pub const GL_AMBIENT: SettingKey = SettingKey(14);
pub const SINGLE_IMAGE: SettingKey = SettingKey(15);
pub const MOVIE_DELAY: SettingKey = SettingKey(16);
pub const RIBBON_POWER: SettingKey = SettingKey(17);
pub const RIBBON_POWER_B: SettingKey = SettingKey(18);
pub const RIBBON_SAMPLING: SettingKey = SettingKey(19);
pub const RIBBON_RADIUS: SettingKey = SettingKey(20);
pub const STICK_RADIUS: SettingKey = SettingKey(21);
pub const HASH_MAX: SettingKey = SettingKey(22);
pub const ORTHOSCOPIC: SettingKey = SettingKey(23);
pub const SPEC_REFLECT: SettingKey = SettingKey(24);
pub const SPEC_POWER: SettingKey = SettingKey(25);
pub const SWEEP_ANGLE: SettingKey = SettingKey(26);
pub const SWEEP_SPEED: SettingKey = SettingKey(27);
pub const DOT_HYDROGENS: SettingKey = SettingKey(28);
pub const DOT_RADIUS: SettingKey = SettingKey(29);
pub const RAY_TRACE_FRAMES: SettingKey = SettingKey(30);
pub const CACHE_FRAMES: SettingKey = SettingKey(31);
pub const TRIM_DOTS: SettingKey = SettingKey(32);
pub const CULL_SPHERES: SettingKey = SettingKey(33);
pub const TEST1: SettingKey = SettingKey(34);
pub const TEST2: SettingKey = SettingKey(35);
pub const SURFACE_BEST: SettingKey = SettingKey(36);
pub const SURFACE_NORMAL: SettingKey = SettingKey(37);
pub const SURFACE_QUALITY: SettingKey = SettingKey(38);
pub const SURFACE_PROXIMITY: SettingKey = SettingKey(39);
pub const NORMAL_WORKAROUND: SettingKey = SettingKey(40);
pub const STEREO_ANGLE: SettingKey = SettingKey(41);
pub const STEREO_SHIFT: SettingKey = SettingKey(42);
pub const LINE_SMOOTH: SettingKey = SettingKey(43);
pub const LINE_WIDTH: SettingKey = SettingKey(44);
pub const HALF_BONDS: SettingKey = SettingKey(45);
pub const STICK_QUALITY: SettingKey = SettingKey(46);
pub const STICK_OVERLAP: SettingKey = SettingKey(47);
pub const STICK_NUB: SettingKey = SettingKey(48);
pub const ALL_STATES: SettingKey = SettingKey(49);
pub const PICKABLE: SettingKey = SettingKey(50);
pub const AUTO_SHOW_LINES: SettingKey = SettingKey(51);
pub const IDLE_DELAY: SettingKey = SettingKey(52);
pub const NO_IDLE: SettingKey = SettingKey(53);
pub const FAST_IDLE: SettingKey = SettingKey(54);
pub const SLOW_IDLE: SettingKey = SettingKey(55);
pub const ROCK_DELAY: SettingKey = SettingKey(56);
pub const DIST_COUNTER: SettingKey = SettingKey(57);
pub const DASH_LENGTH: SettingKey = SettingKey(58);
pub const DASH_GAP: SettingKey = SettingKey(59);
pub const AUTO_ZOOM: SettingKey = SettingKey(60);
pub const OVERLAY: SettingKey = SettingKey(61);
pub const TEXT: SettingKey = SettingKey(62);
pub const BUTTON_MODE: SettingKey = SettingKey(63);
pub const VALENCE: SettingKey = SettingKey(64);
pub const NONBONDED_SIZE: SettingKey = SettingKey(65);
pub const LABEL_COLOR: SettingKey = SettingKey(66);
pub const RAY_TRACE_FOG: SettingKey = SettingKey(67);
pub const SPHEROID_SCALE: SettingKey = SettingKey(68);
pub const RAY_TRACE_FOG_START: SettingKey = SettingKey(69);
pub const SPHEROID_SMOOTH: SettingKey = SettingKey(70);
pub const SPHEROID_FILL: SettingKey = SettingKey(71);
pub const AUTO_SHOW_NONBONDED: SettingKey = SettingKey(72);
pub const CACHE_DISPLAY: SettingKey = SettingKey(73);
pub const MESH_RADIUS: SettingKey = SettingKey(74);
pub const BACKFACE_CULL: SettingKey = SettingKey(75);
pub const GAMMA: SettingKey = SettingKey(76);
pub const DOT_WIDTH: SettingKey = SettingKey(77);
pub const AUTO_SHOW_SELECTIONS: SettingKey = SettingKey(78);
pub const AUTO_HIDE_SELECTIONS: SettingKey = SettingKey(79);
pub const SELECTION_WIDTH: SettingKey = SettingKey(80);
pub const SELECTION_OVERLAY: SettingKey = SettingKey(81);
pub const STATIC_SINGLETONS: SettingKey = SettingKey(82);
pub const MAX_TRIANGLES: SettingKey = SettingKey(83);
pub const DEPTH_CUE: SettingKey = SettingKey(84);
pub const SPECULAR: SettingKey = SettingKey(85);
pub const SHININESS: SettingKey = SettingKey(86);
pub const SPHERE_QUALITY: SettingKey = SettingKey(87);
pub const FOG: SettingKey = SettingKey(88);
pub const ISOMESH_AUTO_STATE: SettingKey = SettingKey(89);
pub const MESH_WIDTH: SettingKey = SettingKey(90);
pub const CARTOON_SAMPLING: SettingKey = SettingKey(91);
pub const CARTOON_LOOP_RADIUS: SettingKey = SettingKey(92);
pub const CARTOON_LOOP_QUALITY: SettingKey = SettingKey(93);
pub const CARTOON_POWER: SettingKey = SettingKey(94);
pub const CARTOON_POWER_B: SettingKey = SettingKey(95);
pub const CARTOON_RECT_LENGTH: SettingKey = SettingKey(96);
pub const CARTOON_RECT_WIDTH: SettingKey = SettingKey(97);
pub const INTERNAL_GUI_WIDTH: SettingKey = SettingKey(98);
pub const INTERNAL_GUI: SettingKey = SettingKey(99);
pub const CARTOON_OVAL_LENGTH: SettingKey = SettingKey(100);
pub const CARTOON_OVAL_WIDTH: SettingKey = SettingKey(101);
pub const CARTOON_OVAL_QUALITY: SettingKey = SettingKey(102);
pub const CARTOON_TUBE_RADIUS: SettingKey = SettingKey(103);
pub const CARTOON_TUBE_QUALITY: SettingKey = SettingKey(104);
pub const CARTOON_DEBUG: SettingKey = SettingKey(105);
pub const RIBBON_WIDTH: SettingKey = SettingKey(106);
pub const DASH_WIDTH: SettingKey = SettingKey(107);
pub const DASH_RADIUS: SettingKey = SettingKey(108);
pub const CGO_RAY_WIDTH_SCALE: SettingKey = SettingKey(109);
pub const LINE_RADIUS: SettingKey = SettingKey(110);
pub const CARTOON_ROUND_HELICES: SettingKey = SettingKey(111);
pub const CARTOON_REFINE_NORMALS: SettingKey = SettingKey(112);
pub const CARTOON_FLAT_SHEETS: SettingKey = SettingKey(113);
pub const CARTOON_SMOOTH_LOOPS: SettingKey = SettingKey(114);
pub const CARTOON_DUMBBELL_LENGTH: SettingKey = SettingKey(115);
pub const CARTOON_DUMBBELL_WIDTH: SettingKey = SettingKey(116);
pub const CARTOON_DUMBBELL_RADIUS: SettingKey = SettingKey(117);
pub const CARTOON_FANCY_HELICES: SettingKey = SettingKey(118);
pub const CARTOON_FANCY_SHEETS: SettingKey = SettingKey(119);
pub const IGNORE_PDB_SEGI: SettingKey = SettingKey(120);
pub const RIBBON_THROW: SettingKey = SettingKey(121);
pub const CARTOON_THROW: SettingKey = SettingKey(122);
pub const CARTOON_REFINE: SettingKey = SettingKey(123);
pub const CARTOON_REFINE_TIPS: SettingKey = SettingKey(124);
pub const CARTOON_DISCRETE_COLORS: SettingKey = SettingKey(125);
pub const NORMALIZE_CCP4_MAPS: SettingKey = SettingKey(126);
pub const SURFACE_POOR: SettingKey = SettingKey(127);
pub const INTERNAL_FEEDBACK: SettingKey = SettingKey(128);
pub const CGO_LINE_WIDTH: SettingKey = SettingKey(129);
pub const CGO_LINE_RADIUS: SettingKey = SettingKey(130);
pub const LOGGING: SettingKey = SettingKey(131);
pub const ROBUST_LOGS: SettingKey = SettingKey(132);
pub const LOG_BOX_SELECTIONS: SettingKey = SettingKey(133);
pub const LOG_CONFORMATIONS: SettingKey = SettingKey(134);
pub const VALENCE_SIZE: SettingKey = SettingKey(135);
pub const SURFACE_MISERABLE: SettingKey = SettingKey(136);
pub const RAY_OPAQUE_BACKGROUND: SettingKey = SettingKey(137);
pub const TRANSPARENCY: SettingKey = SettingKey(138);
pub const RAY_TEXTURE: SettingKey = SettingKey(139);
pub const RAY_TEXTURE_SETTINGS: SettingKey = SettingKey(140);
pub const SUSPEND_UPDATES: SettingKey = SettingKey(141);
pub const FULL_SCREEN: SettingKey = SettingKey(142);
pub const SURFACE_MODE: SettingKey = SettingKey(143);
pub const SURFACE_COLOR: SettingKey = SettingKey(144);
pub const MESH_MODE: SettingKey = SettingKey(145);
pub const MESH_COLOR: SettingKey = SettingKey(146);
pub const AUTO_INDICATE_FLAGS: SettingKey = SettingKey(147);
pub const SURFACE_DEBUG: SettingKey = SettingKey(148);
pub const RAY_IMPROVE_SHADOWS: SettingKey = SettingKey(149);
pub const SMOOTH_COLOR_TRIANGLE: SettingKey = SettingKey(150);
pub const RAY_DEFAULT_RENDERER: SettingKey = SettingKey(151);
pub const FIELD_OF_VIEW: SettingKey = SettingKey(152);
pub const REFLECT_POWER: SettingKey = SettingKey(153);
pub const PRESERVE_CHEMPY_IDS: SettingKey = SettingKey(154);
pub const SPHERE_SCALE: SettingKey = SettingKey(155);
pub const TWO_SIDED_LIGHTING: SettingKey = SettingKey(156);
pub const SECONDARY_STRUCTURE: SettingKey = SettingKey(157);
pub const AUTO_REMOVE_HYDROGENS: SettingKey = SettingKey(158);
pub const RAISE_EXCEPTIONS: SettingKey = SettingKey(159);
pub const STOP_ON_EXCEPTIONS: SettingKey = SettingKey(160);
pub const SCULPTING: SettingKey = SettingKey(161);
pub const AUTO_SCULPT: SettingKey = SettingKey(162);
pub const SCULPT_VDW_SCALE: SettingKey = SettingKey(163);
pub const SCULPT_VDW_SCALE14: SettingKey = SettingKey(164);
pub const SCULPT_VDW_WEIGHT: SettingKey = SettingKey(165);
pub const SCULPT_VDW_WEIGHT14: SettingKey = SettingKey(166);
pub const SCULPT_BOND_WEIGHT: SettingKey = SettingKey(167);
pub const SCULPT_ANGL_WEIGHT: SettingKey = SettingKey(168);
pub const SCULPT_PYRA_WEIGHT: SettingKey = SettingKey(169);
pub const SCULPT_PLAN_WEIGHT: SettingKey = SettingKey(170);
pub const SCULPTING_CYCLES: SettingKey = SettingKey(171);
pub const SPHERE_TRANSPARENCY: SettingKey = SettingKey(172);
pub const SPHERE_COLOR: SettingKey = SettingKey(173);
pub const SCULPT_FIELD_MASK: SettingKey = SettingKey(174);
pub const SCULPT_HB_OVERLAP: SettingKey = SettingKey(175);
pub const SCULPT_HB_OVERLAP_BASE: SettingKey = SettingKey(176);
pub const LEGACY_VDW_RADII: SettingKey = SettingKey(177);
pub const SCULPT_MEMORY: SettingKey = SettingKey(178);
pub const CONNECT_MODE: SettingKey = SettingKey(179);
pub const CARTOON_CYLINDRICAL_HELICES: SettingKey = SettingKey(180);
pub const CARTOON_HELIX_RADIUS: SettingKey = SettingKey(181);
pub const CONNECT_CUTOFF: SettingKey = SettingKey(182);
pub const SAVE_PDB_SS: SettingKey = SettingKey(183);
pub const SCULPT_LINE_WEIGHT: SettingKey = SettingKey(184);
pub const FIT_ITERATIONS: SettingKey = SettingKey(185);
pub const FIT_TOLERANCE: SettingKey = SettingKey(186);
pub const BATCH_PREFIX: SettingKey = SettingKey(187);
pub const STEREO_MODE: SettingKey = SettingKey(188);
pub const CGO_SPHERE_QUALITY: SettingKey = SettingKey(189);
pub const PDB_LITERAL_NAMES: SettingKey = SettingKey(190);
pub const WRAP_OUTPUT: SettingKey = SettingKey(191);
pub const FOG_START: SettingKey = SettingKey(192);
pub const STATE: SettingKey = SettingKey(193);
pub const FRAME: SettingKey = SettingKey(194);
pub const RAY_SHADOWS: SettingKey = SettingKey(195);
pub const RIBBON_TRACE_ATOMS: SettingKey = SettingKey(196);
pub const SECURITY: SettingKey = SettingKey(197);
pub const STICK_TRANSPARENCY: SettingKey = SettingKey(198);
pub const RAY_TRANSPARENCY_SHADOWS: SettingKey = SettingKey(199);
pub const SESSION_VERSION_CHECK: SettingKey = SettingKey(200);
pub const RAY_TRANSPARENCY_SPECULAR: SettingKey = SettingKey(201);
pub const STEREO_DOUBLE_PUMP_MONO: SettingKey = SettingKey(202);
pub const SPHERE_SOLVENT: SettingKey = SettingKey(203);
pub const MESH_QUALITY: SettingKey = SettingKey(204);
pub const MESH_SOLVENT: SettingKey = SettingKey(205);
pub const DOT_SOLVENT: SettingKey = SettingKey(206);
pub const RAY_SHADOW_FUDGE: SettingKey = SettingKey(207);
pub const RAY_TRIANGLE_FUDGE: SettingKey = SettingKey(208);
pub const DEBUG_PICK: SettingKey = SettingKey(209);
pub const DOT_COLOR: SettingKey = SettingKey(210);
pub const MOUSE_LIMIT: SettingKey = SettingKey(211);
pub const MOUSE_SCALE: SettingKey = SettingKey(212);
pub const TRANSPARENCY_MODE: SettingKey = SettingKey(213);
pub const CLAMP_COLORS: SettingKey = SettingKey(214);
pub const PYMOL_SPACE_MAX_RED: SettingKey = SettingKey(215);
pub const PYMOL_SPACE_MAX_GREEN: SettingKey = SettingKey(216);
pub const PYMOL_SPACE_MAX_BLUE: SettingKey = SettingKey(217);
pub const PYMOL_SPACE_MIN_FACTOR: SettingKey = SettingKey(218);
pub const ROVING_ORIGIN: SettingKey = SettingKey(219);
pub const ROVING_LINES: SettingKey = SettingKey(220);
pub const ROVING_STICKS: SettingKey = SettingKey(221);
pub const ROVING_SPHERES: SettingKey = SettingKey(222);
pub const ROVING_LABELS: SettingKey = SettingKey(223);
pub const ROVING_DELAY: SettingKey = SettingKey(224);
pub const ROVING_SELECTION: SettingKey = SettingKey(225);
pub const ROVING_BYRES: SettingKey = SettingKey(226);
pub const ROVING_RIBBON: SettingKey = SettingKey(227);
pub const ROVING_CARTOON: SettingKey = SettingKey(228);
pub const ROVING_POLAR_CONTACTS: SettingKey = SettingKey(229);
pub const ROVING_POLAR_CUTOFF: SettingKey = SettingKey(230);
pub const ROVING_NONBONDED: SettingKey = SettingKey(231);
pub const FLOAT_LABELS: SettingKey = SettingKey(232);
pub const ROVING_DETAIL: SettingKey = SettingKey(233);
pub const ROVING_NB_SPHERES: SettingKey = SettingKey(234);
pub const RIBBON_COLOR: SettingKey = SettingKey(235);
pub const CARTOON_COLOR: SettingKey = SettingKey(236);
pub const RIBBON_SMOOTH: SettingKey = SettingKey(237);
pub const AUTO_COLOR: SettingKey = SettingKey(238);
pub const AUTO_COLOR_NEXT: SettingKey = SettingKey(239);
pub const RAY_INTERIOR_COLOR: SettingKey = SettingKey(240);
pub const CARTOON_HIGHLIGHT_COLOR: SettingKey = SettingKey(241);
pub const COULOMB_UNITS_FACTOR: SettingKey = SettingKey(242);
pub const COULOMB_DIELECTRIC: SettingKey = SettingKey(243);
pub const RAY_INTERIOR_SHADOWS: SettingKey = SettingKey(244);
pub const RAY_INTERIOR_TEXTURE: SettingKey = SettingKey(245);
pub const ROVING_MAP1_NAME: SettingKey = SettingKey(246);
pub const ROVING_MAP2_NAME: SettingKey = SettingKey(247);
pub const ROVING_MAP3_NAME: SettingKey = SettingKey(248);
pub const ROVING_MAP1_LEVEL: SettingKey = SettingKey(249);
pub const ROVING_MAP2_LEVEL: SettingKey = SettingKey(250);
pub const ROVING_MAP3_LEVEL: SettingKey = SettingKey(251);
pub const ROVING_ISOMESH: SettingKey = SettingKey(252);
pub const ROVING_ISOSURFACE: SettingKey = SettingKey(253);
pub const SCENES_CHANGED: SettingKey = SettingKey(254);
pub const GAUSSIAN_B_ADJUST: SettingKey = SettingKey(255);
pub const PDB_STANDARD_ORDER: SettingKey = SettingKey(256);
pub const CARTOON_SMOOTH_FIRST: SettingKey = SettingKey(257);
pub const CARTOON_SMOOTH_LAST: SettingKey = SettingKey(258);
pub const CARTOON_SMOOTH_CYCLES: SettingKey = SettingKey(259);
pub const CARTOON_FLAT_CYCLES: SettingKey = SettingKey(260);
pub const MAX_THREADS: SettingKey = SettingKey(261);
pub const SHOW_PROGRESS: SettingKey = SettingKey(262);
pub const USE_DISPLAY_LISTS: SettingKey = SettingKey(263);
pub const CACHE_MEMORY: SettingKey = SettingKey(264);
pub const SIMPLIFY_DISPLAY_LISTS: SettingKey = SettingKey(265);
pub const RETAIN_ORDER: SettingKey = SettingKey(266);
pub const PDB_HETATM_SORT: SettingKey = SettingKey(267);
pub const PDB_USE_TER_RECORDS: SettingKey = SettingKey(268);
pub const CARTOON_TRACE_ATOMS: SettingKey = SettingKey(269);
pub const RAY_OVERSAMPLE_CUTOFF: SettingKey = SettingKey(270);
pub const GAUSSIAN_RESOLUTION: SettingKey = SettingKey(271);
pub const GAUSSIAN_B_FLOOR: SettingKey = SettingKey(272);
pub const SCULPT_NB_INTERVAL: SettingKey = SettingKey(273);
pub const SCULPT_TORS_WEIGHT: SettingKey = SettingKey(274);
pub const SCULPT_TORS_TOLERANCE: SettingKey = SettingKey(275);
pub const STICK_BALL: SettingKey = SettingKey(276);
pub const STICK_BALL_RATIO: SettingKey = SettingKey(277);
pub const STICK_FIXED_RADIUS: SettingKey = SettingKey(278);
pub const CARTOON_TRANSPARENCY: SettingKey = SettingKey(279);
pub const DASH_ROUND_ENDS: SettingKey = SettingKey(280);
pub const H_BOND_MAX_ANGLE: SettingKey = SettingKey(281);
pub const H_BOND_CUTOFF_CENTER: SettingKey = SettingKey(282);
pub const H_BOND_CUTOFF_EDGE: SettingKey = SettingKey(283);
pub const H_BOND_POWER_A: SettingKey = SettingKey(284);
pub const H_BOND_POWER_B: SettingKey = SettingKey(285);
pub const H_BOND_CONE: SettingKey = SettingKey(286);
pub const SS_HELIX_PSI_TARGET: SettingKey = SettingKey(287);
pub const SS_HELIX_PSI_INCLUDE: SettingKey = SettingKey(288);
pub const SS_HELIX_PSI_EXCLUDE: SettingKey = SettingKey(289);
pub const SS_HELIX_PHI_TARGET: SettingKey = SettingKey(290);
pub const SS_HELIX_PHI_INCLUDE: SettingKey = SettingKey(291);
pub const SS_HELIX_PHI_EXCLUDE: SettingKey = SettingKey(292);
pub const SS_STRAND_PSI_TARGET: SettingKey = SettingKey(293);
pub const SS_STRAND_PSI_INCLUDE: SettingKey = SettingKey(294);
pub const SS_STRAND_PSI_EXCLUDE: SettingKey = SettingKey(295);
pub const SS_STRAND_PHI_TARGET: SettingKey = SettingKey(296);
pub const SS_STRAND_PHI_INCLUDE: SettingKey = SettingKey(297);
pub const SS_STRAND_PHI_EXCLUDE: SettingKey = SettingKey(298);
pub const MOVIE_LOOP: SettingKey = SettingKey(299);
pub const PDB_RETAIN_IDS: SettingKey = SettingKey(300);
pub const PDB_NO_END_RECORD: SettingKey = SettingKey(301);
pub const CGO_DOT_WIDTH: SettingKey = SettingKey(302);
pub const CGO_DOT_RADIUS: SettingKey = SettingKey(303);
pub const DEFER_UPDATES: SettingKey = SettingKey(304);
pub const NORMALIZE_O_MAPS: SettingKey = SettingKey(305);
pub const SWAP_DSN6_BYTES: SettingKey = SettingKey(306);
pub const PDB_INSERTIONS_GO_FIRST: SettingKey = SettingKey(307);
pub const ROVING_ORIGIN_Z: SettingKey = SettingKey(308);
pub const ROVING_ORIGIN_Z_CUSHION: SettingKey = SettingKey(309);
pub const SPECULAR_INTENSITY: SettingKey = SettingKey(310);
pub const OVERLAY_LINES: SettingKey = SettingKey(311);
pub const RAY_TRANSPARENCY_SPEC_CUT: SettingKey = SettingKey(312);
pub const INTERNAL_PROMPT: SettingKey = SettingKey(313);
pub const NORMALIZE_GRD_MAPS: SettingKey = SettingKey(314);
pub const RAY_BLEND_COLORS: SettingKey = SettingKey(315);
pub const RAY_BLEND_RED: SettingKey = SettingKey(316);
pub const RAY_BLEND_GREEN: SettingKey = SettingKey(317);
pub const RAY_BLEND_BLUE: SettingKey = SettingKey(318);
pub const PNG_SCREEN_GAMMA: SettingKey = SettingKey(319);
pub const PNG_FILE_GAMMA: SettingKey = SettingKey(320);
pub const EDITOR_LABEL_FRAGMENTS: SettingKey = SettingKey(321);
pub const INTERNAL_GUI_CONTROL_SIZE: SettingKey = SettingKey(322);
pub const AUTO_DSS: SettingKey = SettingKey(323);
pub const TRANSPARENCY_PICKING_MODE: SettingKey = SettingKey(324);
pub const VIRTUAL_TRACKBALL: SettingKey = SettingKey(325);
pub const PDB_REFORMAT_NAMES_MODE: SettingKey = SettingKey(326);
pub const RAY_PIXEL_SCALE: SettingKey = SettingKey(327);
pub const LABEL_FONT_ID: SettingKey = SettingKey(328);
pub const PDB_CONECT_ALL: SettingKey = SettingKey(329);
pub const BUTTON_MODE_NAME: SettingKey = SettingKey(330);
pub const SURFACE_TYPE: SettingKey = SettingKey(331);
pub const DOT_NORMALS: SettingKey = SettingKey(332);
pub const SESSION_MIGRATION: SettingKey = SettingKey(333);
pub const MESH_NORMALS: SettingKey = SettingKey(334);
pub const MESH_TYPE: SettingKey = SettingKey(335);
pub const DOT_LIGHTING: SettingKey = SettingKey(336);
pub const MESH_LIGHTING: SettingKey = SettingKey(337);
pub const SURFACE_SOLVENT: SettingKey = SettingKey(338);
pub const TRIANGLE_MAX_PASSES: SettingKey = SettingKey(339);
pub const RAY_INTERIOR_REFLECT: SettingKey = SettingKey(340);
pub const INTERNAL_GUI_MODE: SettingKey = SettingKey(341);
pub const SURFACE_CARVE_SELECTION: SettingKey = SettingKey(342);
pub const SURFACE_CARVE_STATE: SettingKey = SettingKey(343);
pub const SURFACE_CARVE_CUTOFF: SettingKey = SettingKey(344);
pub const SURFACE_CLEAR_SELECTION: SettingKey = SettingKey(345);
pub const SURFACE_CLEAR_STATE: SettingKey = SettingKey(346);
pub const SURFACE_CLEAR_CUTOFF: SettingKey = SettingKey(347);
pub const SURFACE_TRIM_CUTOFF: SettingKey = SettingKey(348);
pub const SURFACE_TRIM_FACTOR: SettingKey = SettingKey(349);
pub const RAY_MAX_PASSES: SettingKey = SettingKey(350);
pub const ACTIVE_SELECTIONS: SettingKey = SettingKey(351);
pub const RAY_TRANSPARENCY_CONTRAST: SettingKey = SettingKey(352);
pub const SEQ_VIEW: SettingKey = SettingKey(353);
pub const MOUSE_SELECTION_MODE: SettingKey = SettingKey(354);
pub const SEQ_VIEW_LABEL_SPACING: SettingKey = SettingKey(355);
pub const SEQ_VIEW_LABEL_START: SettingKey = SettingKey(356);
pub const SEQ_VIEW_FORMAT: SettingKey = SettingKey(357);
pub const SEQ_VIEW_LOCATION: SettingKey = SettingKey(358);
pub const SEQ_VIEW_OVERLAY: SettingKey = SettingKey(359);
pub const AUTO_CLASSIFY_ATOMS: SettingKey = SettingKey(360);
pub const CARTOON_NUCLEIC_ACID_MODE: SettingKey = SettingKey(361);
pub const SEQ_VIEW_COLOR: SettingKey = SettingKey(362);
pub const SEQ_VIEW_LABEL_MODE: SettingKey = SettingKey(363);
pub const SURFACE_RAMP_ABOVE_MODE: SettingKey = SettingKey(364);
pub const STEREO: SettingKey = SettingKey(365);
pub const WIZARD_PROMPT_MODE: SettingKey = SettingKey(366);
pub const COULOMB_CUTOFF: SettingKey = SettingKey(367);
pub const SLICE_TRACK_CAMERA: SettingKey = SettingKey(368);
pub const SLICE_HEIGHT_SCALE: SettingKey = SettingKey(369);
pub const SLICE_HEIGHT_MAP: SettingKey = SettingKey(370);
pub const SLICE_GRID: SettingKey = SettingKey(371);
pub const SLICE_DYNAMIC_GRID: SettingKey = SettingKey(372);
pub const SLICE_DYNAMIC_GRID_RESOLUTION: SettingKey = SettingKey(373);
pub const PDB_INSURE_ORTHOGONAL: SettingKey = SettingKey(374);
pub const RAY_DIRECT_SHADE: SettingKey = SettingKey(375);
pub const STICK_COLOR: SettingKey = SettingKey(376);
pub const CARTOON_PUTTY_RADIUS: SettingKey = SettingKey(377);
pub const CARTOON_PUTTY_QUALITY: SettingKey = SettingKey(378);
pub const CARTOON_PUTTY_SCALE_MIN: SettingKey = SettingKey(379);
pub const CARTOON_PUTTY_SCALE_MAX: SettingKey = SettingKey(380);
pub const CARTOON_PUTTY_SCALE_POWER: SettingKey = SettingKey(381);
pub const CARTOON_PUTTY_RANGE: SettingKey = SettingKey(382);
pub const CARTOON_SIDE_CHAIN_HELPER: SettingKey = SettingKey(383);
pub const SURFACE_OPTIMIZE_SUBSETS: SettingKey = SettingKey(384);
pub const MULTIPLEX: SettingKey = SettingKey(385);
pub const TEXTURE_FONTS: SettingKey = SettingKey(386);
pub const PQR_WORKAROUNDS: SettingKey = SettingKey(387);
pub const ANIMATION: SettingKey = SettingKey(388);
pub const ANIMATION_DURATION: SettingKey = SettingKey(389);
pub const SCENE_ANIMATION: SettingKey = SettingKey(390);
pub const LINE_STICK_HELPER: SettingKey = SettingKey(391);
pub const RAY_ORTHOSCOPIC: SettingKey = SettingKey(392);
pub const RIBBON_SIDE_CHAIN_HELPER: SettingKey = SettingKey(393);
pub const SELECTION_WIDTH_MAX: SettingKey = SettingKey(394);
pub const SELECTION_WIDTH_SCALE: SettingKey = SettingKey(395);
pub const SCENE_CURRENT_NAME: SettingKey = SettingKey(396);
pub const PRESENTATION: SettingKey = SettingKey(397);
pub const PRESENTATION_MODE: SettingKey = SettingKey(398);
pub const PDB_TRUNCATE_RESIDUE_NAME: SettingKey = SettingKey(399);
pub const SCENE_LOOP: SettingKey = SettingKey(400);
pub const SWEEP_MODE: SettingKey = SettingKey(401);
pub const SWEEP_PHASE: SettingKey = SettingKey(402);
pub const SCENE_RESTART_MOVIE_DELAY: SettingKey = SettingKey(403);
pub const MOUSE_RESTART_MOVIE_DELAY: SettingKey = SettingKey(404);
pub const ANGLE_SIZE: SettingKey = SettingKey(405);
pub const ANGLE_LABEL_POSITION: SettingKey = SettingKey(406);
pub const DIHEDRAL_SIZE: SettingKey = SettingKey(407);
pub const DIHEDRAL_LABEL_POSITION: SettingKey = SettingKey(408);
pub const DEFER_BUILDS_MODE: SettingKey = SettingKey(409);
pub const SEQ_VIEW_DISCRETE_BY_STATE: SettingKey = SettingKey(410);
pub const SCENE_ANIMATION_DURATION: SettingKey = SettingKey(411);
pub const WILDCARD: SettingKey = SettingKey(412);
pub const ATOM_NAME_WILDCARD: SettingKey = SettingKey(413);
pub const IGNORE_CASE: SettingKey = SettingKey(414);
pub const PRESENTATION_AUTO_QUIT: SettingKey = SettingKey(415);
pub const EDITOR_AUTO_DIHEDRAL: SettingKey = SettingKey(416);
pub const PRESENTATION_AUTO_START: SettingKey = SettingKey(417);
pub const VALIDATE_OBJECT_NAMES: SettingKey = SettingKey(418);
pub const UNUSED_BOOLEAN_DEF_TRUE: SettingKey = SettingKey(419);
pub const AUTO_SHOW_SPHERES: SettingKey = SettingKey(420);
pub const SPHERE_MODE: SettingKey = SettingKey(421);
pub const SPHERE_POINT_MAX_SIZE: SettingKey = SettingKey(422);
pub const SPHERE_POINT_SIZE: SettingKey = SettingKey(423);
pub const PDB_HONOR_MODEL_NUMBER: SettingKey = SettingKey(424);
pub const RANK_ASSISTED_SORTS: SettingKey = SettingKey(425);
pub const RIBBON_NUCLEIC_ACID_MODE: SettingKey = SettingKey(426);
pub const CARTOON_RING_MODE: SettingKey = SettingKey(427);
pub const CARTOON_RING_WIDTH: SettingKey = SettingKey(428);
pub const CARTOON_RING_COLOR: SettingKey = SettingKey(429);
pub const CARTOON_RING_FINDER: SettingKey = SettingKey(430);
pub const CARTOON_TUBE_CAP: SettingKey = SettingKey(431);
pub const CARTOON_LOOP_CAP: SettingKey = SettingKey(432);
pub const NVIDIA_BUGS: SettingKey = SettingKey(433);
pub const IMAGE_DOTS_PER_INCH: SettingKey = SettingKey(434);
pub const OPAQUE_BACKGROUND: SettingKey = SettingKey(435);
pub const DRAW_FRAMES: SettingKey = SettingKey(436);
pub const SHOW_ALPHA_CHECKER: SettingKey = SettingKey(437);
pub const MATRIX_MODE: SettingKey = SettingKey(438);
pub const EDITOR_AUTO_ORIGIN: SettingKey = SettingKey(439);
pub const SESSION_FILE: SettingKey = SettingKey(440);
pub const CGO_TRANSPARENCY: SettingKey = SettingKey(441);
pub const LEGACY_MOUSE_ZOOM: SettingKey = SettingKey(442);
pub const AUTO_NUMBER_SELECTIONS: SettingKey = SettingKey(443);
pub const SCULPT_VDW_VIS_MODE: SettingKey = SettingKey(444);
pub const SCULPT_VDW_VIS_MIN: SettingKey = SettingKey(445);
pub const SCULPT_VDW_VIS_MID: SettingKey = SettingKey(446);
pub const SCULPT_VDW_VIS_MAX: SettingKey = SettingKey(447);
pub const CARTOON_LADDER_MODE: SettingKey = SettingKey(448);
pub const CARTOON_LADDER_RADIUS: SettingKey = SettingKey(449);
pub const CARTOON_LADDER_COLOR: SettingKey = SettingKey(450);
pub const CARTOON_NUCLEIC_ACID_COLOR: SettingKey = SettingKey(451);
pub const CARTOON_RING_TRANSPARENCY: SettingKey = SettingKey(452);
pub const LABEL_SIZE: SettingKey = SettingKey(453);
pub const SPEC_DIRECT: SettingKey = SettingKey(454);
pub const LIGHT_COUNT: SettingKey = SettingKey(455);
pub const LIGHT2: SettingKey = SettingKey(456);
pub const LIGHT3: SettingKey = SettingKey(457);
pub const HIDE_UNDERSCORE_NAMES: SettingKey = SettingKey(458);
pub const SELECTION_ROUND_POINTS: SettingKey = SettingKey(459);
pub const DISTANCE_EXCLUSION: SettingKey = SettingKey(460);
pub const H_BOND_EXCLUSION: SettingKey = SettingKey(461);
pub const LABEL_SHADOW_MODE: SettingKey = SettingKey(462);
pub const LIGHT4: SettingKey = SettingKey(463);
pub const LIGHT5: SettingKey = SettingKey(464);
pub const LIGHT6: SettingKey = SettingKey(465);
pub const LIGHT7: SettingKey = SettingKey(466);
pub const LABEL_OUTLINE_COLOR: SettingKey = SettingKey(467);
pub const RAY_TRACE_MODE: SettingKey = SettingKey(468);
pub const RAY_TRACE_GAIN: SettingKey = SettingKey(469);
pub const SELECTION_VISIBLE_ONLY: SettingKey = SettingKey(470);
pub const LABEL_POSITION: SettingKey = SettingKey(471);
pub const RAY_TRACE_DEPTH_FACTOR: SettingKey = SettingKey(472);
pub const RAY_TRACE_SLOPE_FACTOR: SettingKey = SettingKey(473);
pub const RAY_TRACE_DISCO_FACTOR: SettingKey = SettingKey(474);
pub const RAY_SHADOW_DECAY_FACTOR: SettingKey = SettingKey(475);
pub const RAY_INTERIOR_MODE: SettingKey = SettingKey(476);
pub const RAY_LEGACY_LIGHTING: SettingKey = SettingKey(477);
pub const SCULPT_AUTO_CENTER: SettingKey = SettingKey(478);
pub const PDB_DISCRETE_CHAINS: SettingKey = SettingKey(479);
pub const PDB_UNBOND_CATIONS: SettingKey = SettingKey(480);
pub const SCULPT_TRI_SCALE: SettingKey = SettingKey(481);
pub const SCULPT_TRI_WEIGHT: SettingKey = SettingKey(482);
pub const SCULPT_TRI_MIN: SettingKey = SettingKey(483);
pub const SCULPT_TRI_MAX: SettingKey = SettingKey(484);
pub const SCULPT_TRI_MODE: SettingKey = SettingKey(485);
pub const PDB_ECHO_TAGS: SettingKey = SettingKey(486);
pub const CONNECT_BONDED: SettingKey = SettingKey(487);
pub const SPEC_DIRECT_POWER: SettingKey = SettingKey(488);
pub const LIGHT8: SettingKey = SettingKey(489);
pub const LIGHT9: SettingKey = SettingKey(490);
pub const RAY_SHADOW_DECAY_RANGE: SettingKey = SettingKey(491);
pub const SPEC_COUNT: SettingKey = SettingKey(492);
pub const SCULPT_MIN_SCALE: SettingKey = SettingKey(493);
pub const SCULPT_MIN_WEIGHT: SettingKey = SettingKey(494);
pub const SCULPT_MIN_MIN: SettingKey = SettingKey(495);
pub const SCULPT_MIN_MAX: SettingKey = SettingKey(496);
pub const SCULPT_MAX_SCALE: SettingKey = SettingKey(497);
pub const SCULPT_MAX_WEIGHT: SettingKey = SettingKey(498);
pub const SCULPT_MAX_MIN: SettingKey = SettingKey(499);
pub const SCULPT_MAX_MAX: SettingKey = SettingKey(500);
pub const SURFACE_CIRCUMSCRIBE: SettingKey = SettingKey(501);
pub const SCULPT_AVD_WEIGHT: SettingKey = SettingKey(502);
pub const SCULPT_AVD_GAP: SettingKey = SettingKey(503);
pub const SCULPT_AVD_RANGE: SettingKey = SettingKey(504);
pub const SCULPT_AVD_EXCL: SettingKey = SettingKey(505);
pub const ASYNC_BUILDS: SettingKey = SettingKey(506);
pub const FETCH_PATH: SettingKey = SettingKey(507);
pub const CARTOON_RING_RADIUS: SettingKey = SettingKey(508);
pub const RAY_COLOR_RAMPS: SettingKey = SettingKey(509);
pub const RAY_HINT_CAMERA: SettingKey = SettingKey(510);
pub const RAY_HINT_SHADOW: SettingKey = SettingKey(511);
pub const STICK_VALENCE_SCALE: SettingKey = SettingKey(512);
pub const SEQ_VIEW_ALIGNMENT: SettingKey = SettingKey(513);
pub const SEQ_VIEW_UNALIGNED_MODE: SettingKey = SettingKey(514);
pub const SEQ_VIEW_UNALIGNED_COLOR: SettingKey = SettingKey(515);
pub const SEQ_VIEW_FILL_CHAR: SettingKey = SettingKey(516);
pub const SEQ_VIEW_FILL_COLOR: SettingKey = SettingKey(517);
pub const SEQ_VIEW_LABEL_COLOR: SettingKey = SettingKey(518);
pub const SURFACE_CARVE_NORMAL_CUTOFF: SettingKey = SettingKey(519);
pub const TRACE_ATOMS_MODE: SettingKey = SettingKey(520);
pub const SESSION_CHANGED: SettingKey = SettingKey(521);
pub const RAY_CLIP_SHADOWS: SettingKey = SettingKey(522);
pub const MOUSE_WHEEL_SCALE: SettingKey = SettingKey(523);
pub const NONBONDED_TRANSPARENCY: SettingKey = SettingKey(524);
pub const RAY_SPEC_LOCAL: SettingKey = SettingKey(525);
pub const LINE_COLOR: SettingKey = SettingKey(526);
pub const RAY_LABEL_SPECULAR: SettingKey = SettingKey(527);
pub const MESH_SKIP: SettingKey = SettingKey(528);
pub const LABEL_DIGITS: SettingKey = SettingKey(529);
pub const LABEL_DISTANCE_DIGITS: SettingKey = SettingKey(530);
pub const LABEL_ANGLE_DIGITS: SettingKey = SettingKey(531);
pub const LABEL_DIHEDRAL_DIGITS: SettingKey = SettingKey(532);
pub const SURFACE_NEGATIVE_VISIBLE: SettingKey = SettingKey(533);
pub const SURFACE_NEGATIVE_COLOR: SettingKey = SettingKey(534);
pub const MESH_NEGATIVE_VISIBLE: SettingKey = SettingKey(535);
pub const MESH_NEGATIVE_COLOR: SettingKey = SettingKey(536);
pub const GROUP_AUTO_MODE: SettingKey = SettingKey(537);
pub const GROUP_FULL_MEMBER_NAMES: SettingKey = SettingKey(538);
pub const GRADIENT_MAX_LENGTH: SettingKey = SettingKey(539);
pub const GRADIENT_MIN_LENGTH: SettingKey = SettingKey(540);
pub const GRADIENT_MIN_SLOPE: SettingKey = SettingKey(541);
pub const GRADIENT_NORMAL_MIN_DOT: SettingKey = SettingKey(542);
pub const GRADIENT_STEP_SIZE: SettingKey = SettingKey(543);
pub const GRADIENT_SPACING: SettingKey = SettingKey(544);
pub const GRADIENT_SYMMETRY: SettingKey = SettingKey(545);
pub const RAY_TRACE_COLOR: SettingKey = SettingKey(546);
pub const GROUP_ARROW_PREFIX: SettingKey = SettingKey(547);
pub const SUPPRESS_HIDDEN: SettingKey = SettingKey(548);
pub const SESSION_COMPRESSION: SettingKey = SettingKey(549);
pub const MOVIE_FPS: SettingKey = SettingKey(550);
pub const RAY_TRANSPARENCY_OBLIQUE: SettingKey = SettingKey(551);
pub const RAY_TRACE_TRANS_CUTOFF: SettingKey = SettingKey(552);
pub const RAY_TRACE_PERSIST_CUTOFF: SettingKey = SettingKey(553);
pub const RAY_TRANSPARENCY_OBLIQUE_POWER: SettingKey = SettingKey(554);
pub const RAY_SCATTER: SettingKey = SettingKey(555);
pub const H_BOND_FROM_PROTON: SettingKey = SettingKey(556);
pub const AUTO_COPY_IMAGES: SettingKey = SettingKey(557);
pub const MOE_SEPARATE_CHAINS: SettingKey = SettingKey(558);
pub const TRANSPARENCY_GLOBAL_SORT: SettingKey = SettingKey(559);
pub const HIDE_LONG_BONDS: SettingKey = SettingKey(560);
pub const AUTO_RENAME_DUPLICATE_OBJECTS: SettingKey = SettingKey(561);
pub const PDB_HETATM_GUESS_VALENCES: SettingKey = SettingKey(562);
pub const ELLIPSOID_QUALITY: SettingKey = SettingKey(563);
pub const CGO_ELLIPSOID_QUALITY: SettingKey = SettingKey(564);
pub const MOVIE_ANIMATE_BY_FRAME: SettingKey = SettingKey(565);
pub const RAMP_BLEND_NEARBY_COLORS: SettingKey = SettingKey(566);
pub const AUTO_DEFER_BUILDS: SettingKey = SettingKey(567);
pub const ELLIPSOID_PROBABILITY: SettingKey = SettingKey(568);
pub const ELLIPSOID_SCALE: SettingKey = SettingKey(569);
pub const ELLIPSOID_COLOR: SettingKey = SettingKey(570);
pub const ELLIPSOID_TRANSPARENCY: SettingKey = SettingKey(571);
pub const MOVIE_ROCK: SettingKey = SettingKey(572);
pub const CACHE_MODE: SettingKey = SettingKey(573);
pub const DASH_COLOR: SettingKey = SettingKey(574);
pub const ANGLE_COLOR: SettingKey = SettingKey(575);
pub const DIHEDRAL_COLOR: SettingKey = SettingKey(576);
pub const GRID_MODE: SettingKey = SettingKey(577);
pub const CACHE_MAX: SettingKey = SettingKey(578);
pub const GRID_SLOT: SettingKey = SettingKey(579);
pub const GRID_MAX: SettingKey = SettingKey(580);
pub const CARTOON_PUTTY_TRANSFORM: SettingKey = SettingKey(581);
pub const ROCK: SettingKey = SettingKey(582);
pub const CONE_QUALITY: SettingKey = SettingKey(583);
pub const PDB_FORMAL_CHARGES: SettingKey = SettingKey(584);
pub const ATI_BUGS: SettingKey = SettingKey(585);
pub const GEOMETRY_EXPORT_MODE: SettingKey = SettingKey(586);
pub const MOUSE_GRID: SettingKey = SettingKey(587);
pub const MESH_CUTOFF: SettingKey = SettingKey(588);
pub const MESH_CARVE_SELECTION: SettingKey = SettingKey(589);
pub const MESH_CARVE_STATE: SettingKey = SettingKey(590);
pub const MESH_CARVE_CUTOFF: SettingKey = SettingKey(591);
pub const MESH_CLEAR_SELECTION: SettingKey = SettingKey(592);
pub const MESH_CLEAR_STATE: SettingKey = SettingKey(593);
pub const MESH_CLEAR_CUTOFF: SettingKey = SettingKey(594);
pub const MESH_GRID_MAX: SettingKey = SettingKey(595);
pub const SESSION_CACHE_OPTIMIZE: SettingKey = SettingKey(596);
pub const SDOF_DRAG_SCALE: SettingKey = SettingKey(597);
pub const SCENE_BUTTONS_MODE: SettingKey = SettingKey(598);
pub const SCENE_BUTTONS: SettingKey = SettingKey(599);
pub const MAP_AUTO_EXPAND_SYM: SettingKey = SettingKey(600);
pub const IMAGE_COPY_ALWAYS: SettingKey = SettingKey(601);
pub const MAX_UPS: SettingKey = SettingKey(602);
pub const AUTO_OVERLAY: SettingKey = SettingKey(603);
pub const STICK_BALL_COLOR: SettingKey = SettingKey(604);
pub const STICK_H_SCALE: SettingKey = SettingKey(605);
pub const SCULPT_PYRA_INV_WEIGHT: SettingKey = SettingKey(606);
pub const KEEP_ALIVE: SettingKey = SettingKey(607);
pub const FIT_KABSCH: SettingKey = SettingKey(608);
pub const STEREO_DYNAMIC_STRENGTH: SettingKey = SettingKey(609);
pub const DYNAMIC_WIDTH: SettingKey = SettingKey(610);
pub const DYNAMIC_WIDTH_FACTOR: SettingKey = SettingKey(611);
pub const DYNAMIC_WIDTH_MIN: SettingKey = SettingKey(612);
pub const DYNAMIC_WIDTH_MAX: SettingKey = SettingKey(613);
pub const DRAW_MODE: SettingKey = SettingKey(614);
pub const CLEAN_ELECTRO_MODE: SettingKey = SettingKey(615);
pub const VALENCE_MODE: SettingKey = SettingKey(616);
pub const SHOW_FRAME_RATE: SettingKey = SettingKey(617);
pub const MOVIE_PANEL: SettingKey = SettingKey(618);
pub const MOUSE_Z_SCALE: SettingKey = SettingKey(619);
pub const MOVIE_AUTO_STORE: SettingKey = SettingKey(620);
pub const MOVIE_AUTO_INTERPOLATE: SettingKey = SettingKey(621);
pub const MOVIE_PANEL_ROW_HEIGHT: SettingKey = SettingKey(622);
pub const SCENE_FRAME_MODE: SettingKey = SettingKey(623);
pub const SURFACE_CAVITY_MODE: SettingKey = SettingKey(624);
pub const SURFACE_CAVITY_RADIUS: SettingKey = SettingKey(625);
pub const SURFACE_CAVITY_CUTOFF: SettingKey = SettingKey(626);
pub const MOTION_POWER: SettingKey = SettingKey(627);
pub const MOTION_BIAS: SettingKey = SettingKey(628);
pub const MOTION_SIMPLE: SettingKey = SettingKey(629);
pub const MOTION_LINEAR: SettingKey = SettingKey(630);
pub const MOTION_HAND: SettingKey = SettingKey(631);
pub const PDB_IGNORE_CONECT: SettingKey = SettingKey(632);
pub const EDITOR_BOND_CYCLE_MODE: SettingKey = SettingKey(633);
pub const MOVIE_QUALITY: SettingKey = SettingKey(634);
pub const LABEL_ANCHOR: SettingKey = SettingKey(635);
pub const FETCH_HOST: SettingKey = SettingKey(636);
pub const DYNAMIC_MEASURES: SettingKey = SettingKey(637);
pub const NEIGHBOR_CUTOFF: SettingKey = SettingKey(638);
pub const HEAVY_NEIGHBOR_CUTOFF: SettingKey = SettingKey(639);
pub const POLAR_NEIGHBOR_CUTOFF: SettingKey = SettingKey(640);
pub const SURFACE_RESIDUE_CUTOFF: SettingKey = SettingKey(641);
pub const SURFACE_USE_SHADER: SettingKey = SettingKey(642);
pub const CARTOON_USE_SHADER: SettingKey = SettingKey(643);
pub const STICK_USE_SHADER: SettingKey = SettingKey(644);
pub const LINE_USE_SHADER: SettingKey = SettingKey(645);
pub const SPHERE_USE_SHADER: SettingKey = SettingKey(646);
pub const USE_SHADERS: SettingKey = SettingKey(647);
pub const SHADER_PATH: SettingKey = SettingKey(648);
pub const VOLUME_BIT_DEPTH: SettingKey = SettingKey(649);
pub const VOLUME_COLOR: SettingKey = SettingKey(650);
pub const VOLUME_LAYERS: SettingKey = SettingKey(651);
pub const VOLUME_DATA_RANGE: SettingKey = SettingKey(652);
pub const AUTO_DEFER_ATOM_COUNT: SettingKey = SettingKey(653);
pub const DEFAULT_REFMAC_NAMES: SettingKey = SettingKey(654);
pub const DEFAULT_PHENIX_NAMES: SettingKey = SettingKey(655);
pub const DEFAULT_PHENIX_NO_FILL_NAMES: SettingKey = SettingKey(656);
pub const DEFAULT_BUSTER_NAMES: SettingKey = SettingKey(657);
pub const DEFAULT_FOFC_MAP_REP: SettingKey = SettingKey(658);
pub const DEFAULT_2FOFC_MAP_REP: SettingKey = SettingKey(659);
pub const ATOM_TYPE_FORMAT: SettingKey = SettingKey(660);
pub const AUTOCLOSE_DIALOGS: SettingKey = SettingKey(661);
pub const BG_GRADIENT: SettingKey = SettingKey(662);
pub const BG_RGB_TOP: SettingKey = SettingKey(663);
pub const BG_RGB_BOTTOM: SettingKey = SettingKey(664);
pub const RAY_VOLUME: SettingKey = SettingKey(665);
pub const RIBBON_TRANSPARENCY: SettingKey = SettingKey(666);
pub const STATE_COUNTER_MODE: SettingKey = SettingKey(667);
pub const CGO_USE_SHADER: SettingKey = SettingKey(668);
pub const CGO_SHADER_UB_COLOR: SettingKey = SettingKey(669);
pub const CGO_SHADER_UB_NORMAL: SettingKey = SettingKey(670);
pub const CGO_LIGHTING: SettingKey = SettingKey(671);
pub const MESH_USE_SHADER: SettingKey = SettingKey(672);
pub const STICK_DEBUG: SettingKey = SettingKey(673);
pub const CGO_DEBUG: SettingKey = SettingKey(674);
pub const STICK_ROUND_NUB: SettingKey = SettingKey(675);
pub const STICK_GOOD_GEOMETRY: SettingKey = SettingKey(676);
pub const STICK_AS_CYLINDERS: SettingKey = SettingKey(677);
pub const MESH_AS_CYLINDERS: SettingKey = SettingKey(678);
pub const LINE_AS_CYLINDERS: SettingKey = SettingKey(679);
pub const RIBBON_AS_CYLINDERS: SettingKey = SettingKey(680);
pub const RIBBON_USE_SHADER: SettingKey = SettingKey(681);
pub const EXCL_DISPLAY_LISTS_SHADERS: SettingKey = SettingKey(682);
pub const DASH_USE_SHADER: SettingKey = SettingKey(683);
pub const DASH_AS_CYLINDERS: SettingKey = SettingKey(684);
pub const NONBONDED_USE_SHADER: SettingKey = SettingKey(685);
pub const NONBONDED_AS_CYLINDERS: SettingKey = SettingKey(686);
pub const CYLINDERS_SHADER_FILTER_FACES: SettingKey = SettingKey(687);
pub const NB_SPHERES_SIZE: SettingKey = SettingKey(688);
pub const NB_SPHERES_QUALITY: SettingKey = SettingKey(689);
pub const NB_SPHERES_USE_SHADER: SettingKey = SettingKey(690);
pub const RENDER_AS_CYLINDERS: SettingKey = SettingKey(691);
pub const ALIGNMENT_AS_CYLINDERS: SettingKey = SettingKey(692);
pub const CARTOON_NUCLEIC_ACID_AS_CYLINDERS: SettingKey = SettingKey(693);
pub const CGO_SHADER_UB_FLAGS: SettingKey = SettingKey(694);
pub const OFFSCREEN_RENDERING_FOR_ANTIALIASING: SettingKey = SettingKey(695);
pub const OFFSCREEN_RENDERING_MULTIPLIER: SettingKey = SettingKey(696);
pub const CYLINDER_SHADER_FF_WORKAROUND: SettingKey = SettingKey(697);
pub const SURFACE_COLOR_SMOOTHING: SettingKey = SettingKey(698);
pub const SURFACE_COLOR_SMOOTHING_THRESHOLD: SettingKey = SettingKey(699);
pub const DOT_USE_SHADER: SettingKey = SettingKey(700);
pub const DOT_AS_SPHERES: SettingKey = SettingKey(701);
pub const AMBIENT_OCCLUSION_MODE: SettingKey = SettingKey(702);
pub const AMBIENT_OCCLUSION_SCALE: SettingKey = SettingKey(703);
pub const AMBIENT_OCCLUSION_SMOOTH: SettingKey = SettingKey(704);
pub const SMOOTH_HALF_BONDS: SettingKey = SettingKey(705);
pub const ANAGLYPH_MODE: SettingKey = SettingKey(706);
pub const EDIT_LIGHT: SettingKey = SettingKey(707);
pub const SUSPEND_UNDO: SettingKey = SettingKey(708);
pub const SUSPEND_UNDO_ATOM_COUNT: SettingKey = SettingKey(709);
pub const BG_IMAGE_FILENAME: SettingKey = SettingKey(712);
pub const BG_IMAGE_MODE: SettingKey = SettingKey(713);
pub const BG_IMAGE_TILESIZE: SettingKey = SettingKey(714);
pub const BG_IMAGE_LINEAR: SettingKey = SettingKey(715);
pub const LABEL_PLACEMENT_OFFSET: SettingKey = SettingKey(718);
pub const DUMP_BINARY: SettingKey = SettingKey(749);

/// `(id, name)` pairs sorted by id.
pub static NAMES: &[(u16, &str)] = &[
    (0, "bonding_vdw_cutoff"),
    (1, "min_mesh_spacing"),
    (2, "dot_density"),
    (3, "dot_mode"),
    (4, "solvent_radius"),
    (5, "sel_counter"),
    (6, "bg_rgb"),
    (7, "ambient"),
    (8, "direct"),
    (9, "reflect"),
    (10, "light"),
    (11, "power"),
    (12, "antialias"),
    (13, "cavity_cull"),
    (14, "gl_ambient"),
    (15, "single_image"),
    (16, "movie_delay"),
    (17, "ribbon_power"),
    (18, "ribbon_power_b"),
    (19, "ribbon_sampling"),
    (20, "ribbon_radius"),
    (21, "stick_radius"),
    (22, "hash_max"),
    (23, "orthoscopic"),
    (24, "spec_reflect"),
    (25, "spec_power"),
    (26, "sweep_angle"),
    (27, "sweep_speed"),
    (28, "dot_hydrogens"),
    (29, "dot_radius"),
    (30, "ray_trace_frames"),
    (31, "cache_frames"),
    (32, "trim_dots"),
    (33, "cull_spheres"),
    (34, "test1"),
    (35, "test2"),
    (36, "surface_best"),
    (37, "surface_normal"),
    (38, "surface_quality"),
    (39, "surface_proximity"),
    (40, "normal_workaround"),
    (41, "stereo_angle"),
    (42, "stereo_shift"),
    (43, "line_smooth"),
    (44, "line_width"),
    (45, "half_bonds"),
    (46, "stick_quality"),
    (47, "stick_overlap"),
    (48, "stick_nub"),
    (49, "all_states"),
    (50, "pickable"),
    (51, "auto_show_lines"),
    (52, "idle_delay"),
    (53, "no_idle"),
    (54, "fast_idle"),
    (55, "slow_idle"),
    (56, "rock_delay"),
    (57, "dist_counter"),
    (58, "dash_length"),
    (59, "dash_gap"),
    (60, "auto_zoom"),
    (61, "overlay"),
    (62, "text"),
    (63, "button_mode"),
    (64, "valence"),
    (65, "nonbonded_size"),
    (66, "label_color"),
    (67, "ray_trace_fog"),
    (68, "spheroid_scale"),
    (69, "ray_trace_fog_start"),
    (70, "spheroid_smooth"),
    (71, "spheroid_fill"),
    (72, "auto_show_nonbonded"),
    (73, "cache_display"),
    (74, "mesh_radius"),
    (75, "backface_cull"),
    (76, "gamma"),
    (77, "dot_width"),
    (78, "auto_show_selections"),
    (79, "auto_hide_selections"),
    (80, "selection_width"),
    (81, "selection_overlay"),
    (82, "static_singletons"),
    (83, "max_triangles"),
    (84, "depth_cue"),
    (85, "specular"),
    (86, "shininess"),
    (87, "sphere_quality"),
    (88, "fog"),
    (89, "isomesh_auto_state"),
    (90, "mesh_width"),
    (91, "cartoon_sampling"),
    (92, "cartoon_loop_radius"),
    (93, "cartoon_loop_quality"),
    (94, "cartoon_power"),
    (95, "cartoon_power_b"),
    (96, "cartoon_rect_length"),
    (97, "cartoon_rect_width"),
    (98, "internal_gui_width"),
    (99, "internal_gui"),
    (100, "cartoon_oval_length"),
    (101, "cartoon_oval_width"),
    (102, "cartoon_oval_quality"),
    (103, "cartoon_tube_radius"),
    (104, "cartoon_tube_quality"),
    (105, "cartoon_debug"),
    (106, "ribbon_width"),
    (107, "dash_width"),
    (108, "dash_radius"),
    (109, "cgo_ray_width_scale"),
    (110, "line_radius"),
    (111, "cartoon_round_helices"),
    (112, "cartoon_refine_normals"),
    (113, "cartoon_flat_sheets"),
    (114, "cartoon_smooth_loops"),
    (115, "cartoon_dumbbell_length"),
    (116, "cartoon_dumbbell_width"),
    (117, "cartoon_dumbbell_radius"),
    (118, "cartoon_fancy_helices"),
    (119, "cartoon_fancy_sheets"),
    (120, "ignore_pdb_segi"),
    (121, "ribbon_throw"),
    (122, "cartoon_throw"),
    (123, "cartoon_refine"),
    (124, "cartoon_refine_tips"),
    (125, "cartoon_discrete_colors"),
    (126, "normalize_ccp4_maps"),
    (127, "surface_poor"),
    (128, "internal_feedback"),
    (129, "cgo_line_width"),
    (130, "cgo_line_radius"),
    (131, "logging"),
    (132, "robust_logs"),
    (133, "log_box_selections"),
    (134, "log_conformations"),
    (135, "valence_size"),
    (136, "surface_miserable"),
    (137, "ray_opaque_background"),
    (138, "transparency"),
    (139, "ray_texture"),
    (140, "ray_texture_settings"),
    (141, "suspend_updates"),
    (142, "full_screen"),
    (143, "surface_mode"),
    (144, "surface_color"),
    (145, "mesh_mode"),
    (146, "mesh_color"),
    (147, "auto_indicate_flags"),
    (148, "surface_debug"),
    (149, "ray_improve_shadows"),
    (150, "smooth_color_triangle"),
    (151, "ray_default_renderer"),
    (152, "field_of_view"),
    (153, "reflect_power"),
    (154, "preserve_chempy_ids"),
    (155, "sphere_scale"),
    (156, "two_sided_lighting"),
    (157, "secondary_structure"),
    (158, "auto_remove_hydrogens"),
    (159, "raise_exceptions"),
    (160, "stop_on_exceptions"),
    (161, "sculpting"),
    (162, "auto_sculpt"),
    (163, "sculpt_vdw_scale"),
    (164, "sculpt_vdw_scale14"),
    (165, "sculpt_vdw_weight"),
    (166, "sculpt_vdw_weight14"),
    (167, "sculpt_bond_weight"),
    (168, "sculpt_angl_weight"),
    (169, "sculpt_pyra_weight"),
    (170, "sculpt_plan_weight"),
    (171, "sculpting_cycles"),
    (172, "sphere_transparency"),
    (173, "sphere_color"),
    (174, "sculpt_field_mask"),
    (175, "sculpt_hb_overlap"),
    (176, "sculpt_hb_overlap_base"),
    (177, "legacy_vdw_radii"),
    (178, "sculpt_memory"),
    (179, "connect_mode"),
    (180, "cartoon_cylindrical_helices"),
    (181, "cartoon_helix_radius"),
    (182, "connect_cutoff"),
    (183, "save_pdb_ss"),
    (184, "sculpt_line_weight"),
    (185, "fit_iterations"),
    (186, "fit_tolerance"),
    (187, "batch_prefix"),
    (188, "stereo_mode"),
    (189, "cgo_sphere_quality"),
    (190, "pdb_literal_names"),
    (191, "wrap_output"),
    (192, "fog_start"),
    (193, "state"),
    (194, "frame"),
    (195, "ray_shadows"),
    (196, "ribbon_trace_atoms"),
    (197, "security"),
    (198, "stick_transparency"),
    (199, "ray_transparency_shadows"),
    (200, "session_version_check"),
    (201, "ray_transparency_specular"),
    (202, "stereo_double_pump_mono"),
    (203, "sphere_solvent"),
    (204, "mesh_quality"),
    (205, "mesh_solvent"),
    (206, "dot_solvent"),
    (207, "ray_shadow_fudge"),
    (208, "ray_triangle_fudge"),
    (209, "debug_pick"),
    (210, "dot_color"),
    (211, "mouse_limit"),
    (212, "mouse_scale"),
    (213, "transparency_mode"),
    (214, "clamp_colors"),
    (215, "pymol_space_max_red"),
    (216, "pymol_space_max_green"),
    (217, "pymol_space_max_blue"),
    (218, "pymol_space_min_factor"),
    (219, "roving_origin"),
    (220, "roving_lines"),
    (221, "roving_sticks"),
    (222, "roving_spheres"),
    (223, "roving_labels"),
    (224, "roving_delay"),
    (225, "roving_selection"),
    (226, "roving_byres"),
    (227, "roving_ribbon"),
    (228, "roving_cartoon"),
    (229, "roving_polar_contacts"),
    (230, "roving_polar_cutoff"),
    (231, "roving_nonbonded"),
    (232, "float_labels"),
    (233, "roving_detail"),
    (234, "roving_nb_spheres"),
    (235, "ribbon_color"),
    (236, "cartoon_color"),
    (237, "ribbon_smooth"),
    (238, "auto_color"),
    (239, "auto_color_next"),
    (240, "ray_interior_color"),
    (241, "cartoon_highlight_color"),
    (242, "coulomb_units_factor"),
    (243, "coulomb_dielectric"),
    (244, "ray_interior_shadows"),
    (245, "ray_interior_texture"),
    (246, "roving_map1_name"),
    (247, "roving_map2_name"),
    (248, "roving_map3_name"),
    (249, "roving_map1_level"),
    (250, "roving_map2_level"),
    (251, "roving_map3_level"),
    (252, "roving_isomesh"),
    (253, "roving_isosurface"),
    (254, "scenes_changed"),
    (255, "gaussian_b_adjust"),
    (256, "pdb_standard_order"),
    (257, "cartoon_smooth_first"),
    (258, "cartoon_smooth_last"),
    (259, "cartoon_smooth_cycles"),
    (260, "cartoon_flat_cycles"),
    (261, "max_threads"),
    (262, "show_progress"),
    (263, "use_display_lists"),
    (264, "cache_memory"),
    (265, "simplify_display_lists"),
    (266, "retain_order"),
    (267, "pdb_hetatm_sort"),
    (268, "pdb_use_ter_records"),
    (269, "cartoon_trace_atoms"),
    (270, "ray_oversample_cutoff"),
    (271, "gaussian_resolution"),
    (272, "gaussian_b_floor"),
    (273, "sculpt_nb_interval"),
    (274, "sculpt_tors_weight"),
    (275, "sculpt_tors_tolerance"),
    (276, "stick_ball"),
    (277, "stick_ball_ratio"),
    (278, "stick_fixed_radius"),
    (279, "cartoon_transparency"),
    (280, "dash_round_ends"),
    (281, "h_bond_max_angle"),
    (282, "h_bond_cutoff_center"),
    (283, "h_bond_cutoff_edge"),
    (284, "h_bond_power_a"),
    (285, "h_bond_power_b"),
    (286, "h_bond_cone"),
    (287, "ss_helix_psi_target"),
    (288, "ss_helix_psi_include"),
    (289, "ss_helix_psi_exclude"),
    (290, "ss_helix_phi_target"),
    (291, "ss_helix_phi_include"),
    (292, "ss_helix_phi_exclude"),
    (293, "ss_strand_psi_target"),
    (294, "ss_strand_psi_include"),
    (295, "ss_strand_psi_exclude"),
    (296, "ss_strand_phi_target"),
    (297, "ss_strand_phi_include"),
    (298, "ss_strand_phi_exclude"),
    (299, "movie_loop"),
    (300, "pdb_retain_ids"),
    (301, "pdb_no_end_record"),
    (302, "cgo_dot_width"),
    (303, "cgo_dot_radius"),
    (304, "defer_updates"),
    (305, "normalize_o_maps"),
    (306, "swap_dsn6_bytes"),
    (307, "pdb_insertions_go_first"),
    (308, "roving_origin_z"),
    (309, "roving_origin_z_cushion"),
    (310, "specular_intensity"),
    (311, "overlay_lines"),
    (312, "ray_transparency_spec_cut"),
    (313, "internal_prompt"),
    (314, "normalize_grd_maps"),
    (315, "ray_blend_colors"),
    (316, "ray_blend_red"),
    (317, "ray_blend_green"),
    (318, "ray_blend_blue"),
    (319, "png_screen_gamma"),
    (320, "png_file_gamma"),
    (321, "editor_label_fragments"),
    (322, "internal_gui_control_size"),
    (323, "auto_dss"),
    (324, "transparency_picking_mode"),
    (325, "virtual_trackball"),
    (326, "pdb_reformat_names_mode"),
    (327, "ray_pixel_scale"),
    (328, "label_font_id"),
    (329, "pdb_conect_all"),
    (330, "button_mode_name"),
    (331, "surface_type"),
    (332, "dot_normals"),
    (333, "session_migration"),
    (334, "mesh_normals"),
    (335, "mesh_type"),
    (336, "dot_lighting"),
    (337, "mesh_lighting"),
    (338, "surface_solvent"),
    (339, "triangle_max_passes"),
    (340, "ray_interior_reflect"),
    (341, "internal_gui_mode"),
    (342, "surface_carve_selection"),
    (343, "surface_carve_state"),
    (344, "surface_carve_cutoff"),
    (345, "surface_clear_selection"),
    (346, "surface_clear_state"),
    (347, "surface_clear_cutoff"),
    (348, "surface_trim_cutoff"),
    (349, "surface_trim_factor"),
    (350, "ray_max_passes"),
    (351, "active_selections"),
    (352, "ray_transparency_contrast"),
    (353, "seq_view"),
    (354, "mouse_selection_mode"),
    (355, "seq_view_label_spacing"),
    (356, "seq_view_label_start"),
    (357, "seq_view_format"),
    (358, "seq_view_location"),
    (359, "seq_view_overlay"),
    (360, "auto_classify_atoms"),
    (361, "cartoon_nucleic_acid_mode"),
    (362, "seq_view_color"),
    (363, "seq_view_label_mode"),
    (364, "surface_ramp_above_mode"),
    (365, "stereo"),
    (366, "wizard_prompt_mode"),
    (367, "coulomb_cutoff"),
    (368, "slice_track_camera"),
    (369, "slice_height_scale"),
    (370, "slice_height_map"),
    (371, "slice_grid"),
    (372, "slice_dynamic_grid"),
    (373, "slice_dynamic_grid_resolution"),
    (374, "pdb_insure_orthogonal"),
    (375, "ray_direct_shade"),
    (376, "stick_color"),
    (377, "cartoon_putty_radius"),
    (378, "cartoon_putty_quality"),
    (379, "cartoon_putty_scale_min"),
    (380, "cartoon_putty_scale_max"),
    (381, "cartoon_putty_scale_power"),
    (382, "cartoon_putty_range"),
    (383, "cartoon_side_chain_helper"),
    (384, "surface_optimize_subsets"),
    (385, "multiplex"),
    (386, "texture_fonts"),
    (387, "pqr_workarounds"),
    (388, "animation"),
    (389, "animation_duration"),
    (390, "scene_animation"),
    (391, "line_stick_helper"),
    (392, "ray_orthoscopic"),
    (393, "ribbon_side_chain_helper"),
    (394, "selection_width_max"),
    (395, "selection_width_scale"),
    (396, "scene_current_name"),
    (397, "presentation"),
    (398, "presentation_mode"),
    (399, "pdb_truncate_residue_name"),
    (400, "scene_loop"),
    (401, "sweep_mode"),
    (402, "sweep_phase"),
    (403, "scene_restart_movie_delay"),
    (404, "mouse_restart_movie_delay"),
    (405, "angle_size"),
    (406, "angle_label_position"),
    (407, "dihedral_size"),
    (408, "dihedral_label_position"),
    (409, "defer_builds_mode"),
    (410, "seq_view_discrete_by_state"),
    (411, "scene_animation_duration"),
    (412, "wildcard"),
    (413, "atom_name_wildcard"),
    (414, "ignore_case"),
    (415, "presentation_auto_quit"),
    (416, "editor_auto_dihedral"),
    (417, "presentation_auto_start"),
    (418, "validate_object_names"),
    (419, "unused_boolean_def_true"),
    (420, "auto_show_spheres"),
    (421, "sphere_mode"),
    (422, "sphere_point_max_size"),
    (423, "sphere_point_size"),
    (424, "pdb_honor_model_number"),
    (425, "rank_assisted_sorts"),
    (426, "ribbon_nucleic_acid_mode"),
    (427, "cartoon_ring_mode"),
    (428, "cartoon_ring_width"),
    (429, "cartoon_ring_color"),
    (430, "cartoon_ring_finder"),
    (431, "cartoon_tube_cap"),
    (432, "cartoon_loop_cap"),
    (433, "nvidia_bugs"),
    (434, "image_dots_per_inch"),
    (435, "opaque_background"),
    (436, "draw_frames"),
    (437, "show_alpha_checker"),
    (438, "matrix_mode"),
    (439, "editor_auto_origin"),
    (440, "session_file"),
    (441, "cgo_transparency"),
    (442, "legacy_mouse_zoom"),
    (443, "auto_number_selections"),
    (444, "sculpt_vdw_vis_mode"),
    (445, "sculpt_vdw_vis_min"),
    (446, "sculpt_vdw_vis_mid"),
    (447, "sculpt_vdw_vis_max"),
    (448, "cartoon_ladder_mode"),
    (449, "cartoon_ladder_radius"),
    (450, "cartoon_ladder_color"),
    (451, "cartoon_nucleic_acid_color"),
    (452, "cartoon_ring_transparency"),
    (453, "label_size"),
    (454, "spec_direct"),
    (455, "light_count"),
    (456, "light2"),
    (457, "light3"),
    (458, "hide_underscore_names"),
    (459, "selection_round_points"),
    (460, "distance_exclusion"),
    (461, "h_bond_exclusion"),
    (462, "label_shadow_mode"),
    (463, "light4"),
    (464, "light5"),
    (465, "light6"),
    (466, "light7"),
    (467, "label_outline_color"),
    (468, "ray_trace_mode"),
    (469, "ray_trace_gain"),
    (470, "selection_visible_only"),
    (471, "label_position"),
    (472, "ray_trace_depth_factor"),
    (473, "ray_trace_slope_factor"),
    (474, "ray_trace_disco_factor"),
    (475, "ray_shadow_decay_factor"),
    (476, "ray_interior_mode"),
    (477, "ray_legacy_lighting"),
    (478, "sculpt_auto_center"),
    (479, "pdb_discrete_chains"),
    (480, "pdb_unbond_cations"),
    (481, "sculpt_tri_scale"),
    (482, "sculpt_tri_weight"),
    (483, "sculpt_tri_min"),
    (484, "sculpt_tri_max"),
    (485, "sculpt_tri_mode"),
    (486, "pdb_echo_tags"),
    (487, "connect_bonded"),
    (488, "spec_direct_power"),
    (489, "light8"),
    (490, "light9"),
    (491, "ray_shadow_decay_range"),
    (492, "spec_count"),
    (493, "sculpt_min_scale"),
    (494, "sculpt_min_weight"),
    (495, "sculpt_min_min"),
    (496, "sculpt_min_max"),
    (497, "sculpt_max_scale"),
    (498, "sculpt_max_weight"),
    (499, "sculpt_max_min"),
    (500, "sculpt_max_max"),
    (501, "surface_circumscribe"),
    (502, "sculpt_avd_weight"),
    (503, "sculpt_avd_gap"),
    (504, "sculpt_avd_range"),
    (505, "sculpt_avd_excl"),
    (506, "async_builds"),
    (507, "fetch_path"),
    (508, "cartoon_ring_radius"),
    (509, "ray_color_ramps"),
    (510, "ray_hint_camera"),
    (511, "ray_hint_shadow"),
    (512, "stick_valence_scale"),
    (513, "seq_view_alignment"),
    (514, "seq_view_unaligned_mode"),
    (515, "seq_view_unaligned_color"),
    (516, "seq_view_fill_char"),
    (517, "seq_view_fill_color"),
    (518, "seq_view_label_color"),
    (519, "surface_carve_normal_cutoff"),
    (520, "trace_atoms_mode"),
    (521, "session_changed"),
    (522, "ray_clip_shadows"),
    (523, "mouse_wheel_scale"),
    (524, "nonbonded_transparency"),
    (525, "ray_spec_local"),
    (526, "line_color"),
    (527, "ray_label_specular"),
    (528, "mesh_skip"),
    (529, "label_digits"),
    (530, "label_distance_digits"),
    (531, "label_angle_digits"),
    (532, "label_dihedral_digits"),
    (533, "surface_negative_visible"),
    (534, "surface_negative_color"),
    (535, "mesh_negative_visible"),
    (536, "mesh_negative_color"),
    (537, "group_auto_mode"),
    (538, "group_full_member_names"),
    (539, "gradient_max_length"),
    (540, "gradient_min_length"),
    (541, "gradient_min_slope"),
    (542, "gradient_normal_min_dot"),
    (543, "gradient_step_size"),
    (544, "gradient_spacing"),
    (545, "gradient_symmetry"),
    (546, "ray_trace_color"),
    (547, "group_arrow_prefix"),
    (548, "suppress_hidden"),
    (549, "session_compression"),
    (550, "movie_fps"),
    (551, "ray_transparency_oblique"),
    (552, "ray_trace_trans_cutoff"),
    (553, "ray_trace_persist_cutoff"),
    (554, "ray_transparency_oblique_power"),
    (555, "ray_scatter"),
    (556, "h_bond_from_proton"),
    (557, "auto_copy_images"),
    (558, "moe_separate_chains"),
    (559, "transparency_global_sort"),
    (560, "hide_long_bonds"),
    (561, "auto_rename_duplicate_objects"),
    (562, "pdb_hetatm_guess_valences"),
    (563, "ellipsoid_quality"),
    (564, "cgo_ellipsoid_quality"),
    (565, "movie_animate_by_frame"),
    (566, "ramp_blend_nearby_colors"),
    (567, "auto_defer_builds"),
    (568, "ellipsoid_probability"),
    (569, "ellipsoid_scale"),
    (570, "ellipsoid_color"),
    (571, "ellipsoid_transparency"),
    (572, "movie_rock"),
    (573, "cache_mode"),
    (574, "dash_color"),
    (575, "angle_color"),
    (576, "dihedral_color"),
    (577, "grid_mode"),
    (578, "cache_max"),
    (579, "grid_slot"),
    (580, "grid_max"),
    (581, "cartoon_putty_transform"),
    (582, "rock"),
    (583, "cone_quality"),
    (584, "pdb_formal_charges"),
    (585, "ati_bugs"),
    (586, "geometry_export_mode"),
    (587, "mouse_grid"),
    (588, "mesh_cutoff"),
    (589, "mesh_carve_selection"),
    (590, "mesh_carve_state"),
    (591, "mesh_carve_cutoff"),
    (592, "mesh_clear_selection"),
    (593, "mesh_clear_state"),
    (594, "mesh_clear_cutoff"),
    (595, "mesh_grid_max"),
    (596, "session_cache_optimize"),
    (597, "sdof_drag_scale"),
    (598, "scene_buttons_mode"),
    (599, "scene_buttons"),
    (600, "map_auto_expand_sym"),
    (601, "image_copy_always"),
    (602, "max_ups"),
    (603, "auto_overlay"),
    (604, "stick_ball_color"),
    (605, "stick_h_scale"),
    (606, "sculpt_pyra_inv_weight"),
    (607, "keep_alive"),
    (608, "fit_kabsch"),
    (609, "stereo_dynamic_strength"),
    (610, "dynamic_width"),
    (611, "dynamic_width_factor"),
    (612, "dynamic_width_min"),
    (613, "dynamic_width_max"),
    (614, "draw_mode"),
    (615, "clean_electro_mode"),
    (616, "valence_mode"),
    (617, "show_frame_rate"),
    (618, "movie_panel"),
    (619, "mouse_z_scale"),
    (620, "movie_auto_store"),
    (621, "movie_auto_interpolate"),
    (622, "movie_panel_row_height"),
    (623, "scene_frame_mode"),
    (624, "surface_cavity_mode"),
    (625, "surface_cavity_radius"),
    (626, "surface_cavity_cutoff"),
    (627, "motion_power"),
    (628, "motion_bias"),
    (629, "motion_simple"),
    (630, "motion_linear"),
    (631, "motion_hand"),
    (632, "pdb_ignore_conect"),
    (633, "editor_bond_cycle_mode"),
    (634, "movie_quality"),
    (635, "label_anchor"),
    (636, "fetch_host"),
    (637, "dynamic_measures"),
    (638, "neighbor_cutoff"),
    (639, "heavy_neighbor_cutoff"),
    (640, "polar_neighbor_cutoff"),
    (641, "surface_residue_cutoff"),
    (642, "surface_use_shader"),
    (643, "cartoon_use_shader"),
    (644, "stick_use_shader"),
    (645, "line_use_shader"),
    (646, "sphere_use_shader"),
    (647, "use_shaders"),
    (648, "shader_path"),
    (649, "volume_bit_depth"),
    (650, "volume_color"),
    (651, "volume_layers"),
    (652, "volume_data_range"),
    (653, "auto_defer_atom_count"),
    (654, "default_refmac_names"),
    (655, "default_phenix_names"),
    (656, "default_phenix_no_fill_names"),
    (657, "default_buster_names"),
    (658, "default_fofc_map_rep"),
    (659, "default_2fofc_map_rep"),
    (660, "atom_type_format"),
    (661, "autoclose_dialogs"),
    (662, "bg_gradient"),
    (663, "bg_rgb_top"),
    (664, "bg_rgb_bottom"),
    (665, "ray_volume"),
    (666, "ribbon_transparency"),
    (667, "state_counter_mode"),
    (668, "cgo_use_shader"),
    (669, "cgo_shader_ub_color"),
    (670, "cgo_shader_ub_normal"),
    (671, "cgo_lighting"),
    (672, "mesh_use_shader"),
    (673, "stick_debug"),
    (674, "cgo_debug"),
    (675, "stick_round_nub"),
    (676, "stick_good_geometry"),
    (677, "stick_as_cylinders"),
    (678, "mesh_as_cylinders"),
    (679, "line_as_cylinders"),
    (680, "ribbon_as_cylinders"),
    (681, "ribbon_use_shader"),
    (682, "excl_display_lists_shaders"),
    (683, "dash_use_shader"),
    (684, "dash_as_cylinders"),
    (685, "nonbonded_use_shader"),
    (686, "nonbonded_as_cylinders"),
    (687, "cylinders_shader_filter_faces"),
    (688, "nb_spheres_size"),
    (689, "nb_spheres_quality"),
    (690, "nb_spheres_use_shader"),
    (691, "render_as_cylinders"),
    (692, "alignment_as_cylinders"),
    (693, "cartoon_nucleic_acid_as_cylinders"),
    (694, "cgo_shader_ub_flags"),
    (695, "offscreen_rendering_for_antialiasing"),
    (696, "offscreen_rendering_multiplier"),
    (697, "cylinder_shader_ff_workaround"),
    (698, "surface_color_smoothing"),
    (699, "surface_color_smoothing_threshold"),
    (700, "dot_use_shader"),
    (701, "dot_as_spheres"),
    (702, "ambient_occlusion_mode"),
    (703, "ambient_occlusion_scale"),
    (704, "ambient_occlusion_smooth"),
    (705, "smooth_half_bonds"),
    (706, "anaglyph_mode"),
    (707, "edit_light"),
    (708, "suspend_undo"),
    (709, "suspend_undo_atom_count"),
    (712, "bg_image_filename"),
    (713, "bg_image_mode"),
    (714, "bg_image_tilesize"),
    (715, "bg_image_linear"),
    (718, "label_placement_offset"),
    (749, "dump_binary"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_sorted() {
        assert!(NAMES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(STICK_RADIUS.name(), Some("stick_radius"));
        assert_eq!(SettingKey::from_name("dump_binary"), Some(DUMP_BINARY));
        assert_eq!(DUMP_BINARY.0, MAX_KEY);
        assert_eq!(SettingKey(999).name(), None);
    }
}
