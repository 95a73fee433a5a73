#![allow(dead_code)]

use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

pub use questline_test_utils::{init_tracing, names};

pub type TestResult = Result<(), Box<dyn Error>>;

/// Write `contents` to a temporary `.toml` file that lives as long as the handle.
pub fn quest_book_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp quest book");
    write!(file, "{contents}").expect("write temp quest book");
    file
}
