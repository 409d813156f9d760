//! Parse diagnostics for the fragment pipeline.
//!
//! Every diagnostic is recoverable by construction: the builder always
//! produces a tree, and the sink records what it had to skip along the way.
//! Query-side problems (bad path indices) are logged instead of collected;
//! the sink belongs to the build phase.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// Nothing between one `<` and the next (`<<`).
    EmptyFragment,
    /// An extracted attribute string did not split back into a name and a
    /// quoted value.
    MalformedAttribute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub code: DiagnosticCode,
    /// Byte offset of the offending fragment in the original input.
    pub position: usize,
}
