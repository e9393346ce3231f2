//! Named-object kinds.

/// Type code of a top-level named object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Selection,
    Molecule,
    MapData,
    MapMesh,
    Measurement,
    Callback,
    Cgo,
    Surface,
    Gadget,
    Calculator,
    Slice,
    Alignment,
    Group,
}

impl ObjectKind {
    /// Kind for a session type code, `None` for codes this crate does not know.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => ObjectKind::Selection,
            1 => ObjectKind::Molecule,
            2 => ObjectKind::MapData,
            3 => ObjectKind::MapMesh,
            4 => ObjectKind::Measurement,
            5 => ObjectKind::Callback,
            6 => ObjectKind::Cgo,
            7 => ObjectKind::Surface,
            8 => ObjectKind::Gadget,
            9 => ObjectKind::Calculator,
            10 => ObjectKind::Slice,
            11 => ObjectKind::Alignment,
            12 => ObjectKind::Group,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        match self {
            ObjectKind::Selection => -1,
            ObjectKind::Molecule => 1,
            ObjectKind::MapData => 2,
            ObjectKind::MapMesh => 3,
            ObjectKind::Measurement => 4,
            ObjectKind::Callback => 5,
            ObjectKind::Cgo => 6,
            ObjectKind::Surface => 7,
            ObjectKind::Gadget => 8,
            ObjectKind::Calculator => 9,
            ObjectKind::Slice => 10,
            ObjectKind::Alignment => 11,
            ObjectKind::Group => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Selection => "selection",
            ObjectKind::Molecule => "molecule",
            ObjectKind::MapData => "map",
            ObjectKind::MapMesh => "mesh",
            ObjectKind::Measurement => "measurement",
            ObjectKind::Callback => "callback",
            ObjectKind::Cgo => "cgo",
            ObjectKind::Surface => "surface",
            ObjectKind::Gadget => "gadget",
            ObjectKind::Calculator => "calculator",
            ObjectKind::Slice => "slice",
            ObjectKind::Alignment => "alignment",
            ObjectKind::Group => "group",
        }
    }

    /// Kinds the loader turns into scene content.
    pub fn is_processed(self) -> bool {
        !matches!(
            self,
            ObjectKind::Callback
                | ObjectKind::Surface
                | ObjectKind::Calculator
                | ObjectKind::Slice
                | ObjectKind::Alignment
        )
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for code in -1..=12 {
            if let Some(kind) = ObjectKind::from_code(code) {
                assert_eq!(kind.code(), code);
            }
        }
        assert_eq!(ObjectKind::from_code(0), None);
        assert_eq!(ObjectKind::from_code(13), None);
        assert!(!ObjectKind::Surface.is_processed());
        assert!(ObjectKind::Gadget.is_processed());
    }
}
