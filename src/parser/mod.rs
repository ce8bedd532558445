//! Parsing of tree-notation text into per-line entry records.
//!
//! The grammar is fixed: zero or more 4-character indent units (`"│   "`
//! or four spaces), an optional `"├── "` / `"└── "` connector, the entry
//! name, and an optional `//` comment running to the end of the line.
//! Lines outside this grammar produce no record.

mod tree_line;
mod tree_parser;

pub use tree_line::TreeLine;
pub use tree_parser::{parse, unrecognized};
