//! Markdown format tests
//!
//! Each module is one test file; see the crate docs for why they hang off this main.

mod extraction;
mod index;
mod tokenize;

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
