// Person records and identifier generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a person record.
///
/// Ids are generated once at creation time and never reused or recomputed.
/// Equality on the roster is keyed by id, never by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry on the roster.
///
/// `name` may repeat across distinct records (that is the duplicate
/// condition the UI flags); `id` never does. Neither field is mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

/// Generates unique opaque person ids.
///
/// Each id pairs a monotonic counter with a random fragment. The counter
/// makes uniqueness within a process structural rather than probabilistic,
/// so no collision checking is needed; the fragment keeps ids opaque
/// across runs. Counter overflow is not a practical concern at any
/// plausible roster size.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            counter: AtomicU64::new(0),
        }
    }

    /// Produce the next unique id.
    pub fn next_id(&self) -> PersonId {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let fragment: u64 = rand::random();
        PersonId(format!("{seq:x}-{fragment:016x}"))
    }

    /// Create a `Person` with a freshly generated id.
    pub fn person(&self, name: impl Into<String>) -> Person {
        Person {
            id: self.next_id(),
            name: name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
