//! Element parser: one fragment in, tag plus attribute strings out.
//!
//! The attribute scan is deliberately heuristic. The number of `=` bytes in
//! the pre-`>` region bounds the extraction loop; each pass takes the text up
//! to the next `=` as a name, then reads one value between a matching pair of
//! `"` or `'` quotes. Extracted pairs are re-serialized canonically as
//! `name="value"` before the attribute map is built from them.
//!
//! Known limitations (intentional):
//! - `=` inside a quoted value inflates the loop bound; the extra iterations
//!   consume leftover text as garbage names or stop on an exhausted buffer.
//! - An unquoted value (`a=x`) records the name but no value; the final zip
//!   then pairs that name with the next quoted value, so one misattribution
//!   can cascade.
//! - A missing closing quote extends the value to the end of the region.
//! - Only the ASCII space separates the tag from its attributes; a tab or
//!   newline after the tag name hides everything behind it.
//!
//! Callers that need strict attribute parsing need a real HTML parser, not
//! this one.

use std::collections::HashMap;

use memchr::{memchr, memchr_iter};

use crate::diag::{DiagnosticCode, ParseDiagnostic};

/// Parses one fragment into its tag and canonical `name="value"` strings.
///
/// The tag is everything before the first space in the pre-`>` region. It may
/// be empty, or keep a leading `/` or `!`; the builder decides what those
/// mean.
pub fn parse_element(fragment: &str) -> (&str, Vec<String>) {
    let region = match memchr(b'>', fragment.as_bytes()) {
        Some(end) => &fragment[..end],
        None => fragment,
    };
    let tag = match region.find(' ') {
        Some(space) => &region[..space],
        None => region,
    };

    let attr_budget = memchr_iter(b'=', region.as_bytes()).count();
    if attr_budget == 0 {
        return (tag, Vec::new());
    }

    let mut names: Vec<String> = Vec::new();
    let mut values: Vec<String> = Vec::new();
    let mut buf: String = region.replacen(tag.trim(), "", 1).trim().to_string();

    for _ in 0..attr_budget {
        // Name up to the next `=`, or the whole remainder when the budget
        // outlives the real attributes.
        let name = match buf.find('=') {
            Some(eq) => buf[..eq].to_string(),
            None => buf.clone(),
        };
        buf = buf
            .replacen(&format!("{}=", name.trim()), "", 1)
            .trim()
            .to_string();
        names.push(name);
        let Some(quote) = buf.chars().next() else {
            break;
        };
        if quote == '"' || quote == '\'' {
            // Value between the opening quote and its twin; no twin means the
            // value runs to the end of the region.
            let after_open = &buf[1..];
            let value = match after_open.find(quote) {
                Some(end) => after_open[..end].to_string(),
                None => after_open.to_string(),
            };
            buf = buf
                .replacen(&format!("{quote}{}{quote}", value.trim()), "", 1)
                .trim()
                .to_string();
            values.push(value);
        }
    }

    // Unpaired names (values that never materialized) fall off here.
    let attrs = names
        .into_iter()
        .zip(values)
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect();
    (tag, attrs)
}

/// Builds the attribute map for one element from its canonical strings.
///
/// Key is the text before the first `=` (trimmed), value the text between the
/// first two `"` of the remainder. A repeated name keeps the last value. A
/// string that does not split this way is skipped with a diagnostic.
pub(crate) fn attribute_map(
    attrs: &[String],
    position: usize,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(attrs.len());
    for attr in attrs {
        let key = match attr.find('=') {
            Some(eq) => attr[..eq].trim(),
            None => attr.trim(),
        };
        let rest = attr.replacen(&format!("{key}="), "", 1);
        let Some(value) = rest.split('"').nth(1) else {
            log::debug!(
                target: "scrape.element",
                "attribute {attr:?} at byte {position} did not split into a name and a quoted value"
            );
            diagnostics.push(ParseDiagnostic {
                code: DiagnosticCode::MalformedAttribute,
                position,
            });
            continue;
        };
        map.insert(key.to_string(), value.to_string());
    }
    map
}
