//! Fragment splitter, the first pass of the pipeline.
//!
//! The input is cut at every `<`, nothing more. Each fragment is the text
//! between one `<` and the next, so a well-formed markup fragment looks like
//! `div class="x">trailing text`. Fragment 0 is the preamble before the first
//! `<`; it is not markup and the tree builder ignores it.
//!
//! Known limitations (intentional):
//! - No comment or CDATA awareness at this level: `<` inside a comment starts
//!   a new fragment like any other one (the builder only skips fragments that
//!   begin with `!`).
//! - `<` inside quoted attribute values or script text splits too; script
//!   recovery is the builder's job.

use memchr::{memchr, memchr_iter};

/// One slice of the input between two `<` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The slice itself; never contains `<`.
    pub raw: &'a str,
    /// Byte offset of the slice in the original input.
    pub offset: usize,
}

impl<'a> Fragment<'a> {
    /// Everything before the first `>`, or the whole fragment if `>` is
    /// missing. For a markup fragment this is the tag name plus attributes.
    pub fn tag_region(&self) -> &'a str {
        match memchr(b'>', self.raw.as_bytes()) {
            Some(end) => &self.raw[..end],
            None => self.raw,
        }
    }

    /// Everything after the first `>`, or `""` if `>` is missing.
    pub fn trailing_text(&self) -> &'a str {
        match memchr(b'>', self.raw.as_bytes()) {
            Some(end) => &self.raw[end + 1..],
            None => "",
        }
    }
}

/// Splits `html` at every `<`.
///
/// The returned vector always has at least one entry: the preamble before the
/// first `<` (the whole input when it contains no `<` at all).
pub fn fragments(html: &str) -> Vec<Fragment<'_>> {
    // `<` and `>` are ASCII, so every split position is a UTF-8 boundary.
    let mut out = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(b'<', html.as_bytes()) {
        out.push(Fragment {
            raw: &html[start..pos],
            offset: start,
        });
        start = pos + 1;
    }
    out.push(Fragment {
        raw: &html[start..],
        offset: start,
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws<'a>(frags: &[Fragment<'a>]) -> Vec<&'a str> {
        frags.iter().map(|f| f.raw).collect()
    }

    #[test]
    fn splits_at_every_open_bracket() {
        let frags = fragments("<div>Hello<br><i>x</i>");
        assert_eq!(raws(&frags), ["", "div>Hello", "br>", "i>x", "/i>"]);
    }

    #[test]
    fn preamble_keeps_text_before_first_tag() {
        let frags = fragments("leading<p>body");
        assert_eq!(raws(&frags), ["leading", "p>body"]);
        assert_eq!(frags[0].offset, 0);
    }

    #[test]
    fn input_without_markup_is_a_single_preamble() {
        let frags = fragments("plain text");
        assert_eq!(raws(&frags), ["plain text"]);
    }

    #[test]
    fn empty_input_is_a_single_empty_preamble() {
        let frags = fragments("");
        assert_eq!(raws(&frags), [""]);
    }

    #[test]
    fn adjacent_brackets_produce_an_empty_fragment() {
        let frags = fragments("<<div>x");
        assert_eq!(raws(&frags), ["", "", "div>x"]);
    }

    #[test]
    fn offsets_point_into_the_original_input() {
        let html = "a<div>bc<hr>";
        for frag in fragments(html) {
            assert_eq!(
                &html[frag.offset..frag.offset + frag.raw.len()],
                frag.raw,
                "fragment at offset {} does not match its source slice",
                frag.offset
            );
        }
    }

    #[test]
    fn multibyte_text_splits_cleanly() {
        let frags = fragments("héllo<p>wörld");
        assert_eq!(raws(&frags), ["héllo", "p>wörld"]);
    }

    #[test]
    fn tag_region_stops_at_first_close_bracket() {
        let frag = fragments("<div class=\"a\">text>more")[1];
        assert_eq!(frag.tag_region(), "div class=\"a\"");
        assert_eq!(frag.trailing_text(), "text>more");
    }

    #[test]
    fn missing_close_bracket_means_no_trailing_text() {
        let frag = fragments("<div class=\"a\"")[1];
        assert_eq!(frag.tag_region(), "div class=\"a\"");
        assert_eq!(frag.trailing_text(), "");
    }
}
