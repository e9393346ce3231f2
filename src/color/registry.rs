//! Session color registry.
//!
//! Color ids index the compiled-in [`PALETTE`]; a session may register extra
//! or redefined colors that take precedence. The registry is owned by one
//! session load, so nothing leaks between sessions.

use std::collections::HashMap;

use glam::Vec3;

use super::PALETTE;

/// Front color id: contrast against the background.
pub const COLOR_FRONT: i32 = -6;
/// Back color id: the background itself.
pub const COLOR_BACK: i32 = -7;

pub const ARGB_WHITE: u32 = 0xFFFF_FFFF;
pub const ARGB_BLACK: u32 = 0xFF00_0000;

/// Quantize an RGB triple in `0..=1` to opaque `0xAARRGGBB`.
pub fn point_to_argb(c: Vec3) -> u32 {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    0xFF00_0000 | (q(c.x) << 16) | (q(c.y) << 8) | q(c.z)
}

/// Black or white, whichever reads better on `bg`.
pub fn contrast(bg: u32) -> u32 {
    let r = ((bg >> 16) & 0xFF) as f32;
    let g = ((bg >> 8) & 0xFF) as f32;
    let b = (bg & 0xFF) as f32;
    let grey = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    if grey < 128.0 { ARGB_WHITE } else { ARGB_BLACK }
}

/// Palette plus session overlay.
#[derive(Debug, Clone, Default)]
pub struct ColorRegistry {
    extra: HashMap<i32, u32>,
    background: u32,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self { extra: HashMap::new(), background: ARGB_BLACK }
    }

    /// Register or redefine a color id.
    pub fn register(&mut self, index: i32, argb: u32) {
        self.extra.insert(index, argb);
    }

    /// Packed color for an id; 0 for ids neither registered nor in the palette.
    pub fn lookup(&self, index: i32) -> u32 {
        if let Some(&c) = self.extra.get(&index) {
            return c;
        }
        usize::try_from(index)
            .ok()
            .and_then(|i| PALETTE.get(i))
            .copied()
            .unwrap_or(0)
    }

    pub fn set_background(&mut self, argb: u32) {
        self.background = argb;
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Resolve an id, mapping the front and back pseudo-colors against the
    /// background.
    pub fn resolve(&self, index: i32) -> u32 {
        match index {
            COLOR_FRONT => contrast(self.background),
            COLOR_BACK => {
                if contrast(self.background) == ARGB_WHITE { ARGB_BLACK } else { ARGB_WHITE }
            }
            _ => self.lookup(index),
        }
    }

    pub fn extra_len(&self) -> usize {
        self.extra.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_register() {
        let mut reg = ColorRegistry::new();
        assert_eq!(reg.lookup(0), 0xFFFFFFFF);
        assert_eq!(reg.lookup(4), 0xFFFF0000);
        assert_eq!(reg.lookup(-1), 0);
        assert_eq!(reg.lookup(1_000_000), 0);
        reg.register(4, 0xFF123456);
        reg.register(5300 + 200, 0xFF00AA00);
        assert_eq!(reg.lookup(4), 0xFF123456);
        assert_eq!(reg.lookup(5500), 0xFF00AA00);
    }

    #[test]
    fn test_registries_are_independent() {
        let mut a = ColorRegistry::new();
        a.register(1, ARGB_WHITE);
        let b = ColorRegistry::new();
        assert_eq!(b.lookup(1), 0xFF000000);
    }

    #[test]
    fn test_point_quantization() {
        assert_eq!(point_to_argb(Vec3::new(1.0, 0.5, 0.0)), 0xFFFF8000);
        assert_eq!(point_to_argb(Vec3::ZERO), ARGB_BLACK);
    }

    #[test]
    fn test_front_and_back() {
        let mut reg = ColorRegistry::new();
        assert_eq!(reg.resolve(COLOR_FRONT), ARGB_WHITE);
        assert_eq!(reg.resolve(COLOR_BACK), ARGB_BLACK);
        reg.set_background(ARGB_WHITE);
        assert_eq!(reg.resolve(COLOR_FRONT), ARGB_BLACK);
        assert_eq!(reg.resolve(COLOR_BACK), ARGB_WHITE);
    }
}
