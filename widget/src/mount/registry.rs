//! Bookkeeping of live widget trees per mount target.
//!
//! Rendering into a target that already hosts a widget must replace it
//! rather than stack a second tree beside it. The registry maps each target
//! to the handle that keeps its tree alive; dropping the handle unmounts it.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

/// Live handles keyed by mount target.
#[derive(Debug)]
pub struct MountRegistry<K, H> {
    entries: Vec<(K, H)>,
}

impl<K, H> Default for MountRegistry<K, H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<K: PartialEq, H> MountRegistry<K, H> {
    /// Remove and return the handle mounted at `target`.
    pub fn take(&mut self, target: &K) -> Option<H> {
        let idx = self.entries.iter().position(|(k, _)| k == target)?;
        Some(self.entries.swap_remove(idx).1)
    }

    /// Record `handle` for `target`, returning any handle it replaces.
    pub fn insert(&mut self, target: K, handle: H) -> Option<H> {
        let previous = self.take(&target);
        self.entries.push((target, handle));
        previous
    }

    #[must_use]
    pub fn contains(&self, target: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
