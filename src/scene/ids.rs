//! Identifiers for resources that scene nodes reference by name (gradient definitions).
//!
//! Ids are drawn once per primitive instance when a composition is built and reused for every
//! frame. Two primitives must never share an id, otherwise their gradients bleed into each other
//! once the scene is encoded as a document with a single `<defs>` namespace.

use serde::{Deserialize, Serialize};

/// Opaque resource identifier, unique within one [`IdSource`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Wrap an already-unique string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplier of fresh resource identifiers.
pub trait IdSource {
    /// Return an id never returned before by this source. `prefix` is a readable hint.
    fn next_id(&mut self, prefix: &str) -> ResourceId;
}

/// Seeded id source.
///
/// SplitMix64 over an incrementing state: the output mix is a bijection, so ids from one source
/// never repeat, and the same seed reproduces the same ids on every run.
#[derive(Clone, Copy, Debug)]
pub struct SeededIds {
    state: u64,
}

impl SeededIds {
    /// Start a new id stream.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self, prefix: &str) -> ResourceId {
        ResourceId(format!("{prefix}-{:016x}", self.next_u64()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ids.rs"]
mod tests;
