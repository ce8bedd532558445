use tracing::debug;

use crate::parser::tree_line::{LineScan, TreeLine};

/// Lazily parses tree-notation text into entry records.
///
/// A single finite pass: blank lines and unrecognized lines yield no
/// record (the latter are logged at debug level, never surfaced as
/// errors). The iterator is not restartable; re-parsing means calling
/// again with the same text.
pub fn parse(text: &str) -> impl Iterator<Item = TreeLine> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| match TreeLine::scan(raw) {
            LineScan::Entry(entry) => Some(entry),
            LineScan::Blank => None,
            LineScan::Unrecognized => {
                debug!("Skipping unrecognized line {}: {:?}", index + 1, raw);
                None
            }
        })
}

/// Enumerates the lines [`parse`] would skip as unrecognized, with their
/// 1-based line numbers. Used for strict-mode pre-flight checks.
pub fn unrecognized(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| match TreeLine::scan(raw) {
            LineScan::Unrecognized => Some((index + 1, raw)),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "root/
├── a/
│   └── b.txt
└── c.txt
";

    #[test]
    fn parses_entries_in_order() {
        let entries: Vec<TreeLine> = parse(SAMPLE).collect();
        let summary: Vec<(usize, &str, bool)> = entries
            .iter()
            .map(|entry| (entry.depth, entry.name.as_str(), entry.is_directory))
            .collect();
        assert_eq!(
            summary,
            vec![
                (0, "root/", true),
                (1, "a/", true),
                (2, "b.txt", false),
                (1, "c.txt", false),
            ]
        );
    }

    #[test]
    fn blank_and_garbage_lines_yield_no_records() {
        let text = "root/\n\n?!│garbage\n└── kept.txt\n";
        let names: Vec<String> = parse(text).map(|entry| entry.name).collect();
        assert_eq!(names, vec!["root/", "kept.txt"]);
    }

    #[test]
    fn unrecognized_reports_line_numbers() {
        let text = "root/\n│  ├── torn.txt\n└── ok.txt\n├── // nameless\n";
        let offenders: Vec<(usize, &str)> = unrecognized(text).collect();
        assert_eq!(
            offenders,
            vec![(2, "│  ├── torn.txt"), (4, "├── // nameless")]
        );
    }

    #[test]
    fn clean_input_has_no_unrecognized_lines() {
        assert_eq!(unrecognized(SAMPLE).count(), 0);
    }
}
