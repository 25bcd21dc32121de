//! Region rewriting.
//!
//! Turns a scanned region plus the handler's text into the lines that
//! replace it in the output.

use std::borrow::Cow;

use super::scanner::Region;

/// Split generated text into lines, each prefixed with `indent`.
///
/// Carriage returns before line breaks are dropped so CRLF and LF handler
/// output produce the same lines.
pub fn reindent(indent: &str, text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            format!("{indent}{line}")
        })
        .collect()
}

/// Produce the output lines for a region.
///
/// Empty `replacement` leaves the region exactly as scanned. Otherwise the
/// marker and end marker are kept and the body is replaced.
pub fn rewrite<'a>(region: &Region<'a>, replacement: &str, out: &mut Vec<Cow<'a, str>>) {
    out.push(Cow::Borrowed(region.marker_line));

    if replacement.is_empty() {
        out.extend(region.body.iter().map(|&line| Cow::Borrowed(line)));
    } else {
        out.extend(
            reindent(region.marker.indent, replacement)
                .into_iter()
                .map(Cow::Owned),
        );
    }

    if let Some(end) = region.end {
        out.push(Cow::Borrowed(end));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::scanner::{scan, Segment};
    use pretty_assertions::assert_eq;

    fn first_region<'a>(segments: Vec<Segment<'a>>) -> Region<'a> {
        segments
            .into_iter()
            .find_map(|s| match s {
                Segment::Region(r) => Some(r),
                Segment::Plain(_) => None,
            })
            .expect("no region")
    }

    #[test]
    fn test_reindent_spaces() {
        assert_eq!(reindent("  ", "A,\nB,"), vec!["  A,", "  B,"]);
    }

    #[test]
    fn test_reindent_tabs() {
        assert_eq!(reindent("\t", "x\ny"), vec!["\tx", "\ty"]);
    }

    #[test]
    fn test_reindent_strips_carriage_returns() {
        assert_eq!(reindent(" ", "a\r\nb"), vec![" a", " b"]);
    }

    #[test]
    fn test_reindent_blank_line_gets_indent() {
        assert_eq!(reindent("    ", "a\n\nb"), vec!["    a", "    ", "    b"]);
    }

    #[test]
    fn test_rewrite_replaces_body() {
        let lines = ["  // [code-gen] w", "  old", "  // [code-gen] end"];
        let region = first_region(scan(&lines));

        let mut out = Vec::new();
        rewrite(&region, "new1\nnew2", &mut out);

        assert_eq!(
            out,
            vec![
                "  // [code-gen] w",
                "  new1",
                "  new2",
                "  // [code-gen] end",
            ]
        );
    }

    #[test]
    fn test_rewrite_empty_keeps_region() {
        let lines = ["// [code-gen] w", "hand", "// [code-gen] end"];
        let region = first_region(scan(&lines));

        let mut out = Vec::new();
        rewrite(&region, "", &mut out);

        assert_eq!(out, lines.to_vec());
    }

    #[test]
    fn test_rewrite_without_end_marker() {
        let lines = ["// [code-gen] w", "stale", "stale"];
        let region = first_region(scan(&lines));

        let mut out = Vec::new();
        rewrite(&region, "fresh", &mut out);

        assert_eq!(out, vec!["// [code-gen] w", "fresh"]);
    }
}
