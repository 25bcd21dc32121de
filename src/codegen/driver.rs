//! File-level regeneration.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{RegenError, Result};

use super::rewriter::rewrite;
use super::scanner::{scan, Segment};

/// Line ending used for every regenerated file.
pub const LINE_ENDING: &str = "\r\n";

/// Summary of one regeneration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Number of marked regions found.
    pub regions: usize,
    /// Regions whose handler returned text.
    pub rewritten: usize,
    /// Whether the output differs from the input bytes.
    pub changed: bool,
}

/// Regenerate the marked regions of `source` in memory.
///
/// Returns the new content joined with CRLF line endings. The handler is
/// called once per region, top to bottom; its first error aborts the pass.
pub fn regenerate_str<F>(source: &str, mut handler: F) -> Result<(String, Outcome)>
where
    F: FnMut(&str) -> Result<String>,
{
    // A final newline terminates the last line rather than starting an empty
    // one, so an unterminated last region never swallows it.
    let (body, trailing_newline) = match source.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (source, false),
    };

    let lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut outcome = Outcome::default();
    let mut out: Vec<Cow<'_, str>> = Vec::with_capacity(lines.len());

    for segment in scan(&lines) {
        match segment {
            Segment::Plain(line) => out.push(Cow::Borrowed(line)),
            Segment::Region(region) => {
                outcome.regions += 1;
                let text = handler(region.marker.name)?;
                if !text.is_empty() {
                    outcome.rewritten += 1;
                }
                rewrite(&region, &text, &mut out);
            }
        }
    }

    let mut content = out.join(LINE_ENDING);
    if trailing_newline {
        content.push_str(LINE_ENDING);
    }
    outcome.changed = content != source;

    Ok((content, outcome))
}

/// Regenerate the marked regions of the file at `path`, overwriting it.
///
/// The file is always written back, so line endings are normalized even when
/// no region changes.
pub fn regenerate<F>(path: &Path, handler: F) -> Result<Outcome>
where
    F: FnMut(&str) -> Result<String>,
{
    let source = fs::read_to_string(path).map_err(|e| RegenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    let (content, outcome) = regenerate_str(&source, handler)?;

    fs::write(path, content).map_err(|e| RegenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn workers(name: &str) -> Result<String> {
        Ok(match name {
            "workers" => "A,\nB,".to_string(),
            _ => String::new(),
        })
    }

    #[test]
    fn test_workers_scenario() {
        let source = "  // [code-gen] workers\n  // [code-gen] end";
        let (out, outcome) = regenerate_str(source, workers).unwrap();

        assert_eq!(
            out,
            "  // [code-gen] workers\r\n  A,\r\n  B,\r\n  // [code-gen] end"
        );
        assert_eq!(outcome.regions, 1);
        assert_eq!(outcome.rewritten, 1);
        assert!(outcome.changed);
    }

    #[test]
    fn test_empty_handler_preserves_content() {
        let source = "a\r\n// [code-gen] other\r\nhand written\r\n// [code-gen] end\r\nb\r\n";
        let (out, outcome) = regenerate_str(source, workers).unwrap();

        assert_eq!(out, source);
        assert_eq!(outcome.regions, 1);
        assert_eq!(outcome.rewritten, 0);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_no_markers_normalizes_line_endings() {
        let source = "fn a() {}\n\nfn b() {}\r\n";
        let (out, outcome) = regenerate_str(source, workers).unwrap();

        assert_eq!(out, "fn a() {}\r\n\r\nfn b() {}\r\n");
        assert_eq!(outcome.regions, 0);
        assert!(outcome.changed);
    }

    #[test]
    fn test_replaces_stale_block() {
        let source = "enum T {\n    // [code-gen] workers\n    Old,\n    Older,\n    // [code-gen] end\n}\n";
        let (out, _) = regenerate_str(source, workers).unwrap();

        assert_eq!(
            out,
            "enum T {\r\n    // [code-gen] workers\r\n    A,\r\n    B,\r\n    // [code-gen] end\r\n}\r\n"
        );
    }

    #[test]
    fn test_unterminated_last_region_keeps_final_newline() {
        let (out, outcome) = regenerate_str("a\n// [code-gen] x\n", |_| Ok("X".to_string())).unwrap();

        assert_eq!(out, "a\r\n// [code-gen] x\r\nX\r\n");
        assert_eq!(outcome.rewritten, 1);

        let (again, _) = regenerate_str(&out, |_| Ok("X".to_string())).unwrap();
        assert_eq!(again, out);
    }

    #[test]
    fn test_region_named_endpoints_is_regenerated() {
        let source = "// [code-gen] endpoints\n// [code-gen] end\n";
        let mut seen = Vec::new();
        let (out, outcome) = regenerate_str(source, |name: &str| {
            seen.push(name.to_string());
            Ok(if name == "endpoints" { "GET,".to_string() } else { String::new() })
        })
        .unwrap();

        assert_eq!(seen, vec!["endpoints"]);
        assert_eq!(outcome.regions, 1);
        assert_eq!(out, "// [code-gen] endpoints\r\nGET,\r\n// [code-gen] end\r\n");
    }

    #[test]
    fn test_idempotent() {
        let source = "x\n  // [code-gen] workers\n  junk\n  // [code-gen] end\ny\n";
        let (first, _) = regenerate_str(source, workers).unwrap();
        let (second, outcome) = regenerate_str(&first, workers).unwrap();

        assert_eq!(first, second);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_idempotent_with_blank_lines_in_output() {
        let handler = |_: &str| Ok("a\n\nb".to_string());
        let source = "// [code-gen] r\n// [code-gen] end\n";
        let (first, _) = regenerate_str(source, handler).unwrap();
        let (second, _) = regenerate_str(&first, handler).unwrap();

        assert_eq!(first, "// [code-gen] r\r\na\r\n\r\nb\r\n// [code-gen] end\r\n");
        assert_eq!(first, second);
    }

    #[test]
    fn test_regions_do_not_bleed() {
        let source = "\
// [code-gen] one
// [code-gen] end
mid
\t// [code-gen] two
\told
\t// [code-gen] end
";
        let handler = |name: &str| {
            Ok(match name {
                "one" => "1a\n1b".to_string(),
                "two" => "2a".to_string(),
                _ => String::new(),
            })
        };
        let (out, outcome) = regenerate_str(source, handler).unwrap();

        assert_eq!(
            out,
            "// [code-gen] one\r\n1a\r\n1b\r\n// [code-gen] end\r\nmid\r\n\t// [code-gen] two\r\n\t2a\r\n\t// [code-gen] end\r\n"
        );
        assert_eq!(outcome.regions, 2);
        assert_eq!(outcome.rewritten, 2);
    }

    #[test]
    fn test_handler_sees_each_name_once_in_order() {
        let source = "// [code-gen] b\n// [code-gen] end\n// [code-gen] a\n// [code-gen]\n";
        let mut seen = Vec::new();
        regenerate_str(source, |name: &str| {
            seen.push(name.to_string());
            Ok(String::new())
        })
        .unwrap();

        assert_eq!(seen, vec!["b", "a", ""]);
    }

    #[test]
    fn test_handler_error_aborts() {
        let source = "// [code-gen] boom\n// [code-gen] end";
        let result = regenerate_str(source, |_: &str| Err(RegenError::template("boom")));
        assert!(matches!(result, Err(RegenError::Template { .. })));
    }

    #[test]
    fn test_regenerate_file_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("types.rs");
        fs::write(&path, "enum T {\n  // [code-gen] workers\n  // [code-gen] end\n}\n").unwrap();

        let outcome = regenerate(&path, workers).unwrap();
        assert_eq!(outcome.rewritten, 1);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "enum T {\r\n  // [code-gen] workers\r\n  A,\r\n  B,\r\n  // [code-gen] end\r\n}\r\n"
        );
    }

    #[test]
    fn test_regenerate_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.rs");

        let result = regenerate(&path, workers);
        assert!(matches!(result, Err(RegenError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_regenerate_handler_error_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keep.rs");
        let original = "// [code-gen] x\nold\n// [code-gen] end\n";
        fs::write(&path, original).unwrap();

        let result = regenerate(&path, |_: &str| Err(RegenError::template("nope")));
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
