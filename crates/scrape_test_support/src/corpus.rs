//! TOML corpus manifests: one input document per case, plus the checks the
//! runner executes against the built tree.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const CORPUS_FORMAT_V1: &str = "scrape-corpus-v1";

#[derive(Clone, Debug, Deserialize)]
pub struct CorpusManifest {
    pub format: String,
    pub cases: Vec<CorpusCase>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CorpusCase {
    pub id: String,
    pub html: String,
    #[serde(default)]
    pub checks: Vec<CorpusCheck>,
}

/// One assertion against the tree built from a case's `html`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusCheck {
    /// `get_by_address(path)` must yield exactly this text.
    AddressText { path: String, expect: String },
    /// `get_by_address(path)` must yield a node with this tag.
    AddressTag { path: String, expect: String },
    /// `get_by_address(path)` must not resolve at all.
    Unresolved { path: String },
    /// `find_by_tag_and_attrs(tag, attrs)` must return this many nodes.
    FindCount {
        tag: String,
        #[serde(default)]
        attrs: Vec<(String, String)>,
        expect: usize,
    },
    /// The built tree must hold this many nodes, root included.
    NodeCount { expect: usize },
    /// Building must push this many diagnostics.
    DiagnosticCount { expect: usize },
}

/// Loads and validates a corpus manifest, panicking with file context on any
/// problem (these run under the test harness only).
pub fn load_corpus(path: &Path) -> CorpusManifest {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read corpus manifest {path:?}: {err}"));
    let manifest: CorpusManifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse corpus manifest {path:?}: {err}"));
    validate_corpus(&manifest, path);
    manifest
}

fn validate_corpus(manifest: &CorpusManifest, path: &Path) {
    assert_eq!(
        manifest.format, CORPUS_FORMAT_V1,
        "unsupported corpus manifest format in {path:?}"
    );
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for case in &manifest.cases {
        assert!(!case.id.is_empty(), "corpus case with empty id in {path:?}");
        assert!(
            seen.insert(case.id.as_str()),
            "duplicate corpus case id {:?} in {path:?}",
            case.id
        );
        assert!(
            !case.checks.is_empty(),
            "corpus case {:?} in {path:?} has no checks",
            case.id
        );
    }
}
