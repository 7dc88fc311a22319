use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Kind of an extracted symbol, as emitted by the external scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Class,
    Method,
    Property,
}

/// A single extracted symbol: identity, source location, and metadata.
///
/// Symbols are owned by the snapshot and never mutated by a build; per-build
/// scores live in [`ScoredSymbol`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDefinition {
    pub name: String,
    pub kind: SymbolKind,
    pub line: u32,
    /// Parameter declarations as `"Type name"` strings, in order.
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub return_type: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub file_path: String,
    pub relative_path: String,
}

impl SymbolDefinition {
    /// Ordered parameter types, with declaration names stripped.
    pub fn parameter_types(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .map(|p| p.split(' ').next().unwrap_or(""))
    }
}

/// One immutable project snapshot: per-file symbol lists plus global
/// per-identifier usage counts, supplied by the external scanner.
///
/// Ordered maps keep snapshot iteration order well-defined, which the
/// duplicate-definition tie-break depends on, and make every downstream
/// traversal deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectScanData {
    #[serde(default)]
    pub file_symbols: BTreeMap<String, Vec<SymbolDefinition>>,
    #[serde(default)]
    pub reference_count: BTreeMap<String, usize>,
}

impl ProjectScanData {
    /// Content fingerprint of this snapshot.
    ///
    /// Two snapshots with identical contents hash identically regardless of
    /// how they were assembled; the service layer uses this to reuse the
    /// previous digest when asked to rebuild an unchanged snapshot.
    pub fn fingerprint(&self) -> Result<SnapshotVersion, serde_json::Error> {
        // BTreeMap serialization is key-ordered, so the encoding is canonical.
        let canonical = serde_json::to_vec(self)?;
        Ok(SnapshotVersion::of(&canonical))
    }

    /// Total number of symbols across all files.
    pub fn symbol_count(&self) -> usize {
        self.file_symbols.values().map(Vec::len).sum()
    }
}

/// Content-hash identity of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotVersion(String);

impl SnapshotVersion {
    pub fn of(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        SnapshotVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Internal: a symbol with its final importance score for one build.
/// Holds a reference to the snapshot's symbol to avoid cloning.
#[derive(Debug, Clone)]
pub struct ScoredSymbol<'a> {
    pub symbol: &'a SymbolDefinition,
    pub rank: f64,
}
