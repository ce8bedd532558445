/// Indent units are exactly 4 characters wide, one unit per ancestor
/// level, so depth is recovered from indentation width alone.
const CONTINUATION: &str = "│   ";
const PLAIN_INDENT: &str = "    ";

const BRANCH: &str = "├── ";
const LAST_CHILD: &str = "└── ";

const COMMENT: &str = "//";

/// One entry of a tree diagram.
///
/// `name` is kept as written, so a directory retains its trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub is_directory: bool,
}

/// Outcome of scanning a single raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum LineScan {
    Entry(TreeLine),
    Blank,
    Unrecognized,
}

impl TreeLine {
    /// Scans one raw line against the tree grammar.
    ///
    /// The two connector tokens are interchangeable; matching one adds a
    /// level on top of the indent count. A line whose name region is
    /// empty or still carries tree-drawing glyphs after the indent and
    /// connector have been consumed (a torn indent unit, a connector in
    /// the wrong column) is unrecognized.
    pub(super) fn scan(raw: &str) -> LineScan {
        let line = raw.trim_end();
        if line.is_empty() {
            return LineScan::Blank;
        }

        let mut rest = line;
        let mut indent_units = 0;
        while let Some(after) = rest
            .strip_prefix(CONTINUATION)
            .or_else(|| rest.strip_prefix(PLAIN_INDENT))
        {
            rest = after;
            indent_units += 1;
        }

        let (rest, has_connector) = match rest
            .strip_prefix(BRANCH)
            .or_else(|| rest.strip_prefix(LAST_CHILD))
        {
            Some(after) => (after, true),
            None => (rest, false),
        };

        let name_region = match rest.find(COMMENT) {
            Some(comment_start) => &rest[..comment_start],
            None => rest,
        };
        let name = name_region.trim();
        if name.is_empty() || name.chars().any(is_tree_glyph) {
            return LineScan::Unrecognized;
        }

        let depth = if has_connector {
            indent_units + 1
        } else {
            indent_units
        };

        LineScan::Entry(TreeLine {
            depth,
            name: name.to_string(),
            is_directory: name.ends_with('/'),
        })
    }
}

fn is_tree_glyph(c: char) -> bool {
    matches!(c, '│' | '├' | '└' | '─')
}
