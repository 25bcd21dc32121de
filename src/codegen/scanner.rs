//! Marker scanning.
//!
//! Splits a file's lines into plain lines and marked regions. A region is a
//! generation marker, the block of lines that follows it, and optionally the
//! end marker that closes the block.

/// Token that opens a generated region.
pub const MARKER: &str = "// [code-gen]";

/// Token that closes a generated region.
pub const END_MARKER: &str = "// [code-gen] end";

const END_NAME: &str = "end";

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Plain,
    Marker(Marker<'a>),
    End,
}

/// A generation marker line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    /// Zero-based line index in the source.
    pub line: usize,
    /// Raw leading whitespace of the marker line.
    pub indent: &'a str,
    /// Region name, trimmed. May be empty.
    pub name: &'a str,
}

/// A marker together with its current generated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region<'a> {
    pub marker: Marker<'a>,
    /// The marker line as it appears in the source.
    pub marker_line: &'a str,
    /// Lines between the marker and the end marker (or the next marker, or EOF).
    pub body: Vec<&'a str>,
    /// The end marker line, if the block was closed by one.
    pub end: Option<&'a str>,
}

/// Scanner output, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Region(Region<'a>),
}

enum State<'a> {
    AwaitingMarker,
    InBlock(Region<'a>),
}

/// Classify a line. A marker whose name is exactly `end` closes a block;
/// names that merely start with `end` are ordinary regions.
pub fn classify(line: &str, index: usize) -> LineKind<'_> {
    let Some((_, rest)) = line.split_once(MARKER) else {
        return LineKind::Plain;
    };

    let name = rest.split(MARKER).next().unwrap_or("").trim();
    if name == END_NAME {
        return LineKind::End;
    }

    let indent_len = line.len() - line.trim_start().len();

    LineKind::Marker(Marker {
        line: index,
        indent: &line[..indent_len],
        name,
    })
}

/// Scan lines into plain lines and regions.
///
/// A block ends at the first end marker or the next generation marker,
/// whichever comes first. A block with neither runs to the end of input.
pub fn scan<'a>(lines: &[&'a str]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut state = State::AwaitingMarker;

    for (index, &line) in lines.iter().enumerate() {
        state = match (state, classify(line, index)) {
            (State::AwaitingMarker, LineKind::Marker(marker)) => {
                State::InBlock(Region::open(marker, line))
            }
            (State::AwaitingMarker, _) => {
                segments.push(Segment::Plain(line));
                State::AwaitingMarker
            }
            (State::InBlock(mut region), LineKind::End) => {
                region.end = Some(line);
                segments.push(Segment::Region(region));
                State::AwaitingMarker
            }
            (State::InBlock(region), LineKind::Marker(marker)) => {
                segments.push(Segment::Region(region));
                State::InBlock(Region::open(marker, line))
            }
            (State::InBlock(mut region), LineKind::Plain) => {
                region.body.push(line);
                State::InBlock(region)
            }
        };
    }

    if let State::InBlock(region) = state {
        segments.push(Segment::Region(region));
    }

    segments
}

impl<'a> Region<'a> {
    fn open(marker: Marker<'a>, marker_line: &'a str) -> Self {
        Self {
            marker,
            marker_line,
            body: Vec::new(),
            end: None,
        }
    }
}
