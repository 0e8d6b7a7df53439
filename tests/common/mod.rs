//! Common test utilities

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the olastat binary
pub fn olastat_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("olastat");
    path
}

/// Run olastat with the given arguments
pub fn run_olastat(args: &[&str]) -> Output {
    Command::new(olastat_bin())
        .args(args)
        .output()
        .expect("failed to execute olastat")
}

/// Parse every `<prefix><number>` line of the output, in order
pub fn parse_values(stdout: &str, prefix: &str) -> Vec<f64> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix(prefix))
        .filter_map(|rest| rest.trim().parse().ok())
        .collect()
}

/// Parse the `<bin> <dB>` rows following the `[Response Slice]` heading
pub fn parse_slice_rows(stdout: &str) -> Vec<(usize, f64)> {
    stdout
        .lines()
        .skip_while(|line| !line.contains("[Response Slice]"))
        .skip(1)
        .map_while(|line| {
            let mut fields = line.split_whitespace();
            let bin = fields.next()?.parse().ok()?;
            let db = fields.next()?.parse().ok()?;
            Some((bin, db))
        })
        .collect()
}
