//! Best-effort HTML scraping: split-on-`<` parsing into an arena element
//! tree, plus attribute search and slash-path lookups over it.
//!
//! This is not an HTML5 parser and does not try to be one. The pipeline
//! tolerates real-world malformed markup by skipping what it cannot use and
//! recording diagnostics instead of failing; the exact recovery quirks are
//! documented per module and pinned down by tests.

pub mod perf_fixtures;

mod address;
mod diag;
mod element;
mod query;
mod tokenizer;
mod tree_builder;
mod types;

pub use crate::address::PathValue;
pub use crate::diag::{DiagnosticCode, ParseDiagnostic};
pub use crate::element::parse_element;
pub use crate::tokenizer::{Fragment, fragments};
pub use crate::tree_builder::{build_tree, build_tree_with};
pub use crate::types::{Element, NodeId, ROOT_TAG, Tree, is_void_element};
