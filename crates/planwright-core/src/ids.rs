//! Identifier generation for plans and checkpoints.
//!
//! Identifier generation is passed around as a capability rather than called
//! as a global, so tests can substitute a deterministic source.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh, session-unique identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix>-<n>` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{n}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let ids = SequentialIds::new("cp");
        assert_eq!(ids.next_id(), "cp-1");
        assert_eq!(ids.next_id(), "cp-2");
        assert_eq!(ids.next_id(), "cp-3");
    }

    #[test]
    fn test_uuid_ids_do_not_collide() {
        let ids = UuidGenerator;
        let generated: HashSet<String> = (0..256).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 256);
    }
}
