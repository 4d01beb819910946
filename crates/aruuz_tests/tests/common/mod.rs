//! Shared helpers for the end-to-end tests.
#![allow(dead_code)]

use aruuz_scan::{LineResult, ScanOptions, Scanner};

/// A scanner over the embedded lexicon with default options.
pub fn scanner() -> Scanner {
    Scanner::new(ScanOptions::default()).expect("engine construction")
}

/// Scans a couplet and returns the flattened results.
pub fn scan_lines(lines: &[&str]) -> Vec<LineResult> {
    scanner().scan(lines)
}

/// Scans a single line.
pub fn scan_one(line: &str) -> Vec<LineResult> {
    scan_lines(&[line])
}

/// The results of one line carrying the given meter name.
pub fn with_name<'a>(results: &'a [LineResult], name: &str) -> Vec<&'a LineResult> {
    results.iter().filter(|r| r.meter_name == name).collect()
}
