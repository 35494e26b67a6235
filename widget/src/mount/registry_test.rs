use super::*;

use std::cell::Cell;
use std::rc::Rc;

/// Handle that counts how often it has been dropped.
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn new_registry_is_empty() {
    let registry: MountRegistry<&str, ()> = MountRegistry::default();
    assert!(registry.is_empty());
    assert!(!registry.contains(&"root"));
}

#[test]
fn insert_into_fresh_target_replaces_nothing() {
    let mut registry = MountRegistry::default();
    assert!(registry.insert("root", 1).is_none());
    assert!(registry.contains(&"root"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn insert_into_same_target_returns_previous_handle() {
    let mut registry = MountRegistry::default();
    registry.insert("root", 1);
    assert_eq!(registry.insert("root", 2), Some(1));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.take(&"root"), Some(2));
}

#[test]
fn distinct_targets_are_tracked_independently() {
    let mut registry = MountRegistry::default();
    registry.insert("a", 1);
    registry.insert("b", 2);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.take(&"a"), Some(1));
    assert!(registry.contains(&"b"));
    assert!(registry.take(&"a").is_none());
}

#[test]
fn replaced_handle_is_dropped_once() {
    let drops = Rc::new(Cell::new(0));
    let mut registry = MountRegistry::default();
    registry.insert("root", DropCounter(drops.clone()));
    drop(registry.insert("root", DropCounter(drops.clone())));
    assert_eq!(drops.get(), 1);
    drop(registry);
    assert_eq!(drops.get(), 2);
}
