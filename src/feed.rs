//! Snapshot publication between the state feed and query callers.
//!
//! One external writer replaces whole snapshots; any number of reader
//! threads load the current one and keep computing on it even while a
//! newer snapshot lands. The lock guards only the pointer exchange, so a
//! reader can never observe a half-updated snapshot.

use std::sync::{Arc, RwLock};

pub struct Published<T> {
    slot: RwLock<Arc<T>>,
}

impl<T> Published<T> {
    pub fn new(initial: T) -> Self {
        Self {
            slot: RwLock::new(Arc::new(initial)),
        }
    }

    /// Replace the current snapshot. Readers that already hold the old one
    /// are unaffected.
    pub fn publish(&self, next: T) {
        let next = Arc::new(next);
        let mut guard = match self.slot.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = next;
    }

    /// The current snapshot.
    pub fn load(&self) -> Arc<T> {
        let guard = match self.slot.read() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(&guard)
    }
}

impl<T: Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn readers_see_whole_replacements() {
        let cell = Published::new(Scene::default());
        let before = cell.load();
        assert_eq!(before.viewport.z_near, 50);

        let mut next = Scene::default();
        next.viewport.z_near = 80;
        cell.publish(next);

        // The old handle still reads the old snapshot...
        assert_eq!(before.viewport.z_near, 50);
        // ...and a fresh load sees the new one.
        assert_eq!(cell.load().viewport.z_near, 80);
    }

    #[test]
    fn shared_across_threads() {
        let cell = Arc::new(Published::new(17i32));
        let writer = {
            let cell = Arc::clone(&cell);
            std::thread::spawn(move || cell.publish(42))
        };
        writer.join().expect("writer thread");
        assert_eq!(*cell.load(), 42);
    }
}
