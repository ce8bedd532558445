//! Creation of the parsed hierarchy on disk.
//!
//! Entry records are applied strictly in input order against a
//! depth-indexed stack of ancestor directory paths; every filesystem
//! effect commits immediately and independently.

mod materializer;
mod path_stack;
mod report;

pub use materializer::{MaterializeError, Materializer};
pub use report::Report;
