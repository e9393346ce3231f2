//! Load options.

pub use crate::pickle::MemoPolicy;

/// Which object states become models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSelector {
    /// Every state of every molecule
    #[default]
    All,
    /// Only the state the session was saved in
    Current,
    /// One state, 1-based. For a simple movie this is a movie frame.
    Index(usize),
}

/// Options for [`load_session`](super::load_session).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub state: StateSelector,
    /// Report the embedded viewport as the preferred size
    pub resize: bool,
    /// Record object spans and produce the trimmed copy
    pub cache: bool,
    /// Emit surface, mesh and map-mesh objects
    pub allow_surface: bool,
    pub memo: MemoPolicy,
    /// Key of the external volumetric cache surfaces refer to
    pub cache_key: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            state: StateSelector::All,
            resize: false,
            cache: false,
            allow_surface: true,
            memo: MemoPolicy::StringsOnly,
            cache_key: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: StateSelector) -> Self {
        self.state = state;
        self
    }

    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_surfaces(mut self, allow: bool) -> Self {
        self.allow_surface = allow;
        self
    }

    pub fn with_memo_policy(mut self, memo: MemoPolicy) -> Self {
        self.memo = memo;
        self
    }

    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let opts = LoadOptions::new()
            .with_state(StateSelector::Index(2))
            .with_surfaces(false)
            .with_cache(true)
            .with_cache_key("session.pse");
        assert_eq!(opts.state, StateSelector::Index(2));
        assert!(!opts.allow_surface);
        assert!(opts.cache);
        assert_eq!(opts.cache_key.as_deref(), Some("session.pse"));
        assert_eq!(LoadOptions::default().memo, MemoPolicy::StringsOnly);
    }
}
