//! Name-keyed registry for extensible game content.
//!
//! Every behaviour-bearing family (enemies, items, tiles, shop offerings)
//! stores its definitions in a [`Registry`]. Definitions are immutable after
//! registration; instantiation always copies from the definition, never
//! aliases it.

/// Insertion-ordered mapping from a string id to a definition.
///
/// `names()` yields ids in registration order, which is load-bearing: spawn
/// weighting and the shop offer list both walk it in order. Re-registering an
/// id replaces the definition in place (last write wins) without moving it in
/// the order; built-in content only does this at startup.
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a definition under `id`, replacing any previous definition.
    pub fn register(&mut self, id: impl Into<String>, definition: T) {
        let id = id.into();
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == id) {
            slot.1 = definition;
        } else {
            self.entries.push((id, definition));
        }
    }

    /// Returns the definition for `id`, if registered.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, def)| def)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All registered ids, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
